use bevy::prelude::*;

use duskfall_core::item::pickup_allowed;
use duskfall_core::trace::{MAX_REACH, TraceHit, line_trace};

use crate::events::{
    ActiveSlotChangedEvent, InteractKind, InteractionMissedEvent, ItemAlternateUsedEvent,
    ItemPickedUpEvent, ItemUsedEvent,
};
use crate::inventory::PlayerInventory;
use crate::items::{HeldItem, Item};
use crate::player::camera::{GameState, HandAnchor, Player, PlayerCamera};
use crate::world::Colliders;

/// View-line probe from the camera eye along its forward axis. Pure query
/// against the collider mirror; safe to run every frame.
pub fn probe_from(camera: &Transform, colliders: &Colliders) -> Option<TraceHit<Entity>> {
    line_trace(
        camera.translation,
        camera.forward().as_vec3(),
        MAX_REACH,
        &colliders.0,
    )
}

pub fn primary_use(
    game_state: Res<GameState>,
    mouse: Res<ButtonInput<MouseButton>>,
    colliders: Res<Colliders>,
    camera_query: Query<(&Transform, &Player), With<PlayerCamera>>,
    item_query: Query<&Item>,
    mut ev_used: EventWriter<ItemUsedEvent>,
    mut ev_missed: EventWriter<InteractionMissedEvent>,
) {
    if *game_state != GameState::Playing {
        return;
    }
    if !mouse.just_pressed(MouseButton::Left) {
        return;
    }
    let Ok((transform, player)) = camera_query.get_single() else {
        return;
    };

    let target = probe_from(transform, &colliders)
        .and_then(|hit| item_query.get(hit.target).ok().map(|item| (hit.target, item)));

    match target {
        Some((entity, item)) if item.kind.capabilities().usable => {
            ev_used.send(ItemUsedEvent {
                item: entity,
                kind: item.kind,
                player: player.location(transform),
            });
        }
        _ => {
            ev_missed.send(InteractionMissedEvent {
                action: InteractKind::Use,
                player: player.location(transform),
            });
        }
    }
}

pub fn secondary_use(
    game_state: Res<GameState>,
    mouse: Res<ButtonInput<MouseButton>>,
    colliders: Res<Colliders>,
    camera_query: Query<(&Transform, &Player), With<PlayerCamera>>,
    item_query: Query<&Item>,
    mut ev_used: EventWriter<ItemAlternateUsedEvent>,
    mut ev_missed: EventWriter<InteractionMissedEvent>,
) {
    if *game_state != GameState::Playing {
        return;
    }
    if !mouse.just_pressed(MouseButton::Right) {
        return;
    }
    let Ok((transform, player)) = camera_query.get_single() else {
        return;
    };

    let target = probe_from(transform, &colliders)
        .and_then(|hit| item_query.get(hit.target).ok().map(|item| (hit.target, item)));

    match target {
        Some((entity, item)) if item.kind.capabilities().alternate_usable => {
            ev_used.send(ItemAlternateUsedEvent {
                item: entity,
                kind: item.kind,
                player: player.location(transform),
            });
        }
        _ => {
            ev_missed.send(InteractionMissedEvent {
                action: InteractKind::AlternateUse,
                player: player.location(transform),
            });
        }
    }
}

pub fn pick_up_item(
    game_state: Res<GameState>,
    keys: Res<ButtonInput<KeyCode>>,
    colliders: Res<Colliders>,
    mut commands: Commands,
    mut inventory: ResMut<PlayerInventory>,
    camera_query: Query<(&Transform, &Player), With<PlayerCamera>>,
    anchor_query: Query<Entity, With<HandAnchor>>,
    item_query: Query<&Item>,
    mut ev_picked: EventWriter<ItemPickedUpEvent>,
    mut ev_slot: EventWriter<ActiveSlotChangedEvent>,
    mut ev_missed: EventWriter<InteractionMissedEvent>,
) {
    if *game_state != GameState::Playing {
        return;
    }
    if !keys.just_pressed(KeyCode::KeyE) {
        return;
    }
    let Ok((transform, player)) = camera_query.get_single() else {
        return;
    };
    let Ok(anchor) = anchor_query.get_single() else {
        return;
    };

    let target = probe_from(transform, &colliders)
        .and_then(|hit| item_query.get(hit.target).ok().map(|item| (hit.target, item)));

    let grabbed = match target {
        Some((entity, item))
            if pickup_allowed(
                item.kind.capabilities(),
                item.can_pick_up,
                inventory.contains(entity),
            ) =>
        {
            Some((entity, item.kind))
        }
        _ => None,
    };
    let Some((entity, kind)) = grabbed else {
        ev_missed.send(InteractionMissedEvent {
            action: InteractKind::PickUp,
            player: player.location(transform),
        });
        return;
    };

    let slot = inventory.pick_up(entity);

    // Hand over to the character: the item loses its world transform and
    // rides the hand anchor at a fixed local offset.
    commands
        .entity(entity)
        .insert(HeldItem)
        .set_parent(anchor)
        .insert(Transform::default());

    ev_picked.send(ItemPickedUpEvent {
        item: entity,
        kind,
        slot,
        player: player.location(transform),
    });
    // A grab also moves the active slot onto the new item.
    ev_slot.send(ActiveSlotChangedEvent {
        slot: Some(slot),
        kind: Some(kind),
        player: player.location(transform),
    });
}

/// Fires the active held item without probing. Empty hands or an item
/// that cannot be used are silent no-ops.
pub fn use_active_item(
    game_state: Res<GameState>,
    keys: Res<ButtonInput<KeyCode>>,
    inventory: Res<PlayerInventory>,
    camera_query: Query<(&Transform, &Player), With<PlayerCamera>>,
    item_query: Query<&Item>,
    mut ev_used: EventWriter<ItemUsedEvent>,
) {
    if *game_state != GameState::Playing {
        return;
    }
    if !keys.just_pressed(KeyCode::KeyF) {
        return;
    }
    let Ok((transform, player)) = camera_query.get_single() else {
        return;
    };
    let Some(entity) = inventory.active_item() else {
        return;
    };
    let Ok(item) = item_query.get(entity) else {
        return;
    };
    if !item.kind.capabilities().usable {
        return;
    }

    ev_used.send(ItemUsedEvent {
        item: entity,
        kind: item.kind,
        player: player.location(transform),
    });
}

pub fn spawn_crosshair(mut commands: Commands) {
    commands
        .spawn(Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            ..default()
        })
        .with_children(|parent| {
            parent.spawn((
                Node {
                    width: Val::Px(4.0),
                    height: Val::Px(4.0),
                    ..default()
                },
                BackgroundColor(Color::WHITE),
            ));
        });
}
