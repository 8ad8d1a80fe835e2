use bevy::prelude::*;

use duskfall_core::item::ItemKind;

use crate::inventory::{PlayerInventory, QUICK_SLOTS};
use crate::items::Item;

#[derive(Component)]
pub struct SlotBarRoot;

#[derive(Component)]
pub struct SlotBarSlot(pub usize);

#[derive(Component)]
pub struct SlotBarSwatch(pub usize);

#[derive(Component)]
pub struct SlotBarLabel(pub usize);

const SLOT_SIZE: f32 = 44.0;
const SLOT_GAP: f32 = 4.0;
const SWATCH_SIZE: f32 = 24.0;

pub fn spawn_slot_bar(mut commands: Commands) {
    commands
        .spawn((
            SlotBarRoot,
            Node {
                position_type: PositionType::Absolute,
                bottom: Val::Px(10.0),
                width: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                column_gap: Val::Px(SLOT_GAP),
                ..default()
            },
            Visibility::Visible,
        ))
        .with_children(|parent| {
            for i in 0..QUICK_SLOTS {
                parent
                    .spawn((
                        SlotBarSlot(i),
                        Node {
                            width: Val::Px(SLOT_SIZE),
                            height: Val::Px(SLOT_SIZE),
                            justify_content: JustifyContent::Center,
                            align_items: AlignItems::Center,
                            border: UiRect::all(Val::Px(2.0)),
                            ..default()
                        },
                        BackgroundColor(Color::srgba(0.15, 0.15, 0.15, 0.8)),
                        BorderColor(Color::srgba(0.4, 0.4, 0.4, 0.8)),
                    ))
                    .with_children(|slot| {
                        slot.spawn((
                            SlotBarSwatch(i),
                            Node {
                                width: Val::Px(SWATCH_SIZE),
                                height: Val::Px(SWATCH_SIZE),
                                ..default()
                            },
                            BackgroundColor(Color::NONE),
                        ));
                        slot.spawn((
                            SlotBarLabel(i),
                            Text::new(""),
                            TextFont {
                                font_size: 10.0,
                                ..default()
                            },
                            TextColor(Color::WHITE),
                            Node {
                                position_type: PositionType::Absolute,
                                bottom: Val::Px(2.0),
                                ..default()
                            },
                        ));
                    });
            }
        });
}

fn slot_kind(
    inventory: &PlayerInventory,
    item_query: &Query<&Item>,
    slot: usize,
) -> Option<ItemKind> {
    inventory
        .items()
        .get(slot)
        .and_then(|&item| item_query.get(item).ok())
        .map(|item| item.kind)
}

pub fn update_slot_bar(
    inventory: Res<PlayerInventory>,
    item_query: Query<&Item>,
    mut slot_query: Query<(&SlotBarSlot, &mut BorderColor)>,
    mut swatch_query: Query<(&SlotBarSwatch, &mut BackgroundColor)>,
    mut label_query: Query<(&SlotBarLabel, &mut Text)>,
) {
    if !inventory.is_changed() {
        return;
    }

    for (slot, mut border) in &mut slot_query {
        if Some(slot.0) == inventory.active_slot() {
            *border = BorderColor(Color::WHITE);
        } else {
            *border = BorderColor(Color::srgba(0.4, 0.4, 0.4, 0.8));
        }
    }

    for (swatch, mut bg) in &mut swatch_query {
        *bg = match slot_kind(&inventory, &item_query, swatch.0) {
            Some(kind) => {
                let [r, g, b, a] = kind.color_rgba();
                BackgroundColor(Color::srgba(r, g, b, a))
            }
            None => BackgroundColor(Color::NONE),
        };
    }

    for (label, mut text) in &mut label_query {
        **text = match slot_kind(&inventory, &item_query, label.0) {
            Some(kind) => kind.display_name().to_string(),
            None => String::new(),
        };
    }
}
