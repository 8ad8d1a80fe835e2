use bevy::prelude::*;

use crate::interaction::targeting::probe_from;
use crate::inventory::PlayerInventory;
use crate::items::Item;
use crate::player::camera::{Player, PlayerCamera};
use crate::world::Colliders;

#[derive(Component)]
pub struct DebugOverlay;

#[derive(Component)]
pub struct DebugOverlayRoot;

#[derive(Resource)]
pub struct DebugOverlayVisible(pub bool);

impl Default for DebugOverlayVisible {
    fn default() -> Self {
        Self(false)
    }
}

pub fn spawn_debug_overlay(mut commands: Commands) {
    commands
        .spawn((
            DebugOverlayRoot,
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(10.0),
                left: Val::Px(10.0),
                ..default()
            },
            Visibility::Hidden,
        ))
        .with_children(|parent| {
            parent.spawn((
                DebugOverlay,
                Text::new(""),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
        });
}

pub fn toggle_debug_overlay(
    keys: Res<ButtonInput<KeyCode>>,
    mut visible: ResMut<DebugOverlayVisible>,
    mut query: Query<&mut Visibility, With<DebugOverlayRoot>>,
) {
    if keys.just_pressed(KeyCode::F3) {
        visible.0 = !visible.0;
        for mut vis in &mut query {
            *vis = if visible.0 {
                Visibility::Visible
            } else {
                Visibility::Hidden
            };
        }
    }
}

pub fn update_debug_overlay(
    visible: Res<DebugOverlayVisible>,
    colliders: Res<Colliders>,
    inventory: Res<PlayerInventory>,
    camera_query: Query<(&Transform, &Player), With<PlayerCamera>>,
    item_query: Query<&Item>,
    mut text_query: Query<&mut Text, With<DebugOverlay>>,
) {
    if !visible.0 {
        return;
    }

    let Ok((transform, player)) = camera_query.get_single() else {
        return;
    };

    let pos = player.position;
    let (yaw, pitch, _) = transform.rotation.to_euler(EulerRot::YXZ);

    let facing = match probe_from(transform, &colliders) {
        Some(hit) => match item_query.get(hit.target) {
            Ok(item) => format!("{} ({:.2} m)", item.kind.display_name(), hit.distance),
            Err(_) => format!("surface ({:.2} m)", hit.distance),
        },
        None => "nothing".to_string(),
    };

    let hands = match inventory.active_slot() {
        Some(slot) => format!("slot {} of {}", slot + 1, inventory.len()),
        None => "empty hands".to_string(),
    };

    for mut text in &mut text_query {
        **text = format!(
            "XYZ: {:.1} / {:.1} / {:.1}\nYaw / Pitch: {:.1} / {:.1}\nFacing: {}\nInventory: {}",
            pos.x,
            pos.y,
            pos.z,
            yaw.to_degrees(),
            pitch.to_degrees(),
            facing,
            hands
        );
    }
}
