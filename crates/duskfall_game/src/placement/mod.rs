use std::ops::{Deref, DerefMut};

use bevy::input::mouse::MouseWheel;
use bevy::prelude::*;
use bevy::transform::commands::BuildChildrenTransformExt;

use duskfall_core::placement::{PlaceOutcome, Placement};

use crate::events::{ActiveSlotChangedEvent, ItemPlacedEvent, PlacementCanceledEvent};
use crate::interaction::InteractSet;
use crate::interaction::targeting::probe_from;
use crate::inventory::PlayerInventory;
use crate::items::{HeldItem, Item};
use crate::player::camera::{GameState, Player, PlayerCamera};
use crate::world::Colliders;

const GHOST_COLOR: Color = Color::srgba(0.55, 0.8, 0.55, 0.35);

/// Behavior toggles for placement sessions.
#[derive(Resource, Default)]
pub struct PlacementConfig {
    /// Zero the preview yaw each time a session begins instead of
    /// carrying it over from the previous one.
    pub reset_rotation_on_begin: bool,
}

/// Bevy Resource wrapper around the pure-logic placement machine.
#[derive(Resource, Default)]
pub struct PlacementState(pub Placement<Entity>);

impl Deref for PlacementState {
    type Target = Placement<Entity>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for PlacementState {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

/// Marks the translucent stand-in shown while placing.
#[derive(Component)]
pub struct PlacementGhost;

/// Shared translucent material for ghost previews.
#[derive(Resource)]
pub struct GhostMaterial(pub Handle<StandardMaterial>);

fn setup_ghost_material(mut commands: Commands, mut materials: ResMut<Assets<StandardMaterial>>) {
    let handle = materials.add(StandardMaterial {
        base_color: GHOST_COLOR,
        alpha_mode: AlphaMode::Blend,
        unlit: true,
        ..default()
    });
    commands.insert_resource(GhostMaterial(handle));
}

fn begin_place(
    game_state: Res<GameState>,
    keys: Res<ButtonInput<KeyCode>>,
    config: Res<PlacementConfig>,
    ghost_material: Res<GhostMaterial>,
    inventory: Res<PlayerInventory>,
    mut placement: ResMut<PlacementState>,
    mut commands: Commands,
    item_query: Query<&Transform, With<Item>>,
    children_query: Query<&Children>,
    mesh_query: Query<(&Mesh3d, &Transform)>,
) {
    if *game_state != GameState::Playing {
        return;
    }
    if !keys.just_pressed(KeyCode::KeyG) {
        return;
    }
    if placement.is_placing() {
        return;
    }
    if !placement.begin(inventory.active_item(), config.reset_rotation_on_begin) {
        return;
    }
    let Some(item) = placement.item() else {
        return;
    };

    // The ghost mirrors the item's child meshes at the item's scale; its
    // pose comes from the per-frame probe.
    let scale = item_query.get(item).map(|t| t.scale).unwrap_or(Vec3::ONE);
    commands
        .spawn((
            PlacementGhost,
            Transform::from_scale(scale),
            Visibility::Hidden,
        ))
        .with_children(|ghost| {
            let Ok(item_children) = children_query.get(item) else {
                return;
            };
            for &child in item_children.iter() {
                if let Ok((mesh, transform)) = mesh_query.get(child) {
                    ghost.spawn((
                        Mesh3d(mesh.0.clone()),
                        MeshMaterial3d(ghost_material.0.clone()),
                        *transform,
                    ));
                }
            }
        });
}

fn rotate_preview(
    game_state: Res<GameState>,
    mut mouse_wheel: EventReader<MouseWheel>,
    mut placement: ResMut<PlacementState>,
) {
    if *game_state != GameState::Playing {
        mouse_wheel.clear();
        return;
    }

    for event in mouse_wheel.read() {
        // Wheel up turns the preview counter-clockwise, wheel down clockwise.
        if event.y > 0.0 {
            placement.rotate(-1);
        } else if event.y < 0.0 {
            placement.rotate(1);
        }
    }
}

fn update_ghost(
    game_state: Res<GameState>,
    colliders: Res<Colliders>,
    placement: Res<PlacementState>,
    camera_query: Query<&Transform, (With<PlayerCamera>, Without<PlacementGhost>)>,
    mut ghost_query: Query<(&mut Transform, &mut Visibility), With<PlacementGhost>>,
) {
    if *game_state != GameState::Playing {
        return;
    }
    if !placement.is_placing() {
        return;
    }
    let Ok(camera) = camera_query.get_single() else {
        return;
    };

    let hit = probe_from(camera, &colliders);
    let pose = placement.preview_pose(hit.as_ref());
    for (mut transform, mut visibility) in &mut ghost_query {
        match pose {
            Some(pose) => {
                transform.translation = pose.position;
                transform.rotation = Quat::from_rotation_y(pose.yaw_deg.to_radians());
                *visibility = Visibility::Visible;
            }
            None => {
                *visibility = Visibility::Hidden;
            }
        }
    }
}

fn finish_place(
    game_state: Res<GameState>,
    keys: Res<ButtonInput<KeyCode>>,
    colliders: Res<Colliders>,
    mut commands: Commands,
    mut placement: ResMut<PlacementState>,
    mut inventory: ResMut<PlayerInventory>,
    camera_query: Query<(&Transform, &Player), With<PlayerCamera>>,
    item_query: Query<&Item>,
    ghost_query: Query<Entity, With<PlacementGhost>>,
    mut ev_placed: EventWriter<ItemPlacedEvent>,
    mut ev_canceled: EventWriter<PlacementCanceledEvent>,
    mut ev_slot: EventWriter<ActiveSlotChangedEvent>,
) {
    if !keys.just_released(KeyCode::KeyG) {
        return;
    }
    if !placement.is_placing() {
        return;
    }

    for ghost in &ghost_query {
        commands.entity(ghost).despawn_recursive();
    }

    let Ok((camera, player)) = camera_query.get_single() else {
        placement.finish(None, 0.0);
        return;
    };

    // Releasing while paused closes the session as a cancel; the pause
    // screen offers nothing to aim at.
    let hit = if *game_state == GameState::Playing {
        probe_from(camera, &colliders)
    } else {
        None
    };

    let session_item = placement.item();
    let mesh_yaw = session_item
        .and_then(|item| item_query.get(item).ok())
        .map(|item| item.mesh_yaw_offset)
        .unwrap_or(0.0);

    match placement.finish(hit.as_ref(), mesh_yaw) {
        PlaceOutcome::Placed {
            item,
            position,
            yaw_deg,
        } => {
            let Ok(props) = item_query.get(item) else {
                return;
            };
            // Detach keeping the momentary world pose, then settle the
            // item at the struck surface with the preview's yaw.
            commands
                .entity(item)
                .remove::<HeldItem>()
                .remove_parent_in_place()
                .insert((
                    Transform::from_translation(position)
                        .with_rotation(Quat::from_rotation_y(yaw_deg.to_radians())),
                    Visibility::Inherited,
                ));
            inventory.remove(item);
            ev_placed.send(ItemPlacedEvent {
                item,
                kind: props.kind,
                position,
                yaw_deg,
                player: player.location(camera),
            });
            // The active slot lands on whatever remains, or on nothing.
            ev_slot.send(ActiveSlotChangedEvent {
                slot: inventory.active_slot(),
                kind: inventory
                    .active_item()
                    .and_then(|held| item_query.get(held).ok())
                    .map(|held| held.kind),
                player: player.location(camera),
            });
        }
        PlaceOutcome::Canceled => {
            let Some(item) = session_item else {
                return;
            };
            let Ok(props) = item_query.get(item) else {
                return;
            };
            ev_canceled.send(PlacementCanceledEvent {
                item,
                kind: props.kind,
                player: player.location(camera),
            });
        }
    }
}

pub struct PlacementPlugin;

impl Plugin for PlacementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PlacementConfig>()
            .init_resource::<PlacementState>()
            .add_systems(Startup, setup_ghost_material)
            .add_systems(
                Update,
                (begin_place, rotate_preview, update_ghost, finish_place)
                    .chain()
                    .in_set(InteractSet),
            );
    }
}
