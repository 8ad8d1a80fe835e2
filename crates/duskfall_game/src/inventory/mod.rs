use std::ops::{Deref, DerefMut};

use bevy::prelude::*;

use duskfall_core::inventory::Inventory;

use crate::events::ActiveSlotChangedEvent;
use crate::items::{HeldItem, Item};
use crate::player::camera::{GameState, Player, PlayerCamera};

/// Number of quick-select bindings on the digit row.
pub const QUICK_SLOTS: usize = 3;

/// Bevy Resource wrapper around the pure-logic inventory.
#[derive(Resource)]
pub struct PlayerInventory(pub Inventory<Entity>);

impl Default for PlayerInventory {
    fn default() -> Self {
        Self(Inventory::new())
    }
}

impl Deref for PlayerInventory {
    type Target = Inventory<Entity>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for PlayerInventory {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

pub struct InventoryPlugin;

impl Plugin for InventoryPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PlayerInventory>()
            .add_systems(Update, (select_slot, apply_held_visibility));
    }
}

fn select_slot(
    game_state: Res<GameState>,
    keys: Res<ButtonInput<KeyCode>>,
    mut inventory: ResMut<PlayerInventory>,
    camera_query: Query<(&Transform, &Player), With<PlayerCamera>>,
    item_query: Query<&Item>,
    mut ev_slot: EventWriter<ActiveSlotChangedEvent>,
) {
    if *game_state != GameState::Playing {
        return;
    }

    let key_mappings = [
        (KeyCode::Digit1, 0),
        (KeyCode::Digit2, 1),
        (KeyCode::Digit3, 2),
    ];

    for (key, slot) in key_mappings {
        if !keys.just_pressed(key) {
            continue;
        }
        // Selecting an empty or already-active slot changes nothing.
        let previous = inventory.active_slot();
        if inventory.set_active(slot) && previous != Some(slot) {
            let Ok((transform, player)) = camera_query.get_single() else {
                continue;
            };
            let kind = inventory
                .active_item()
                .and_then(|item| item_query.get(item).ok())
                .map(|item| item.kind);
            ev_slot.send(ActiveSlotChangedEvent {
                slot: Some(slot),
                kind,
                player: player.location(transform),
            });
        }
    }
}

/// Exactly the active item is visible in hand; every other held item
/// stays attached but hidden.
fn apply_held_visibility(
    inventory: Res<PlayerInventory>,
    mut held_query: Query<(Entity, &mut Visibility), With<HeldItem>>,
) {
    if !inventory.is_changed() {
        return;
    }

    let active = inventory.active_item();
    for (entity, mut visibility) in &mut held_query {
        *visibility = if Some(entity) == active {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        };
    }
}
