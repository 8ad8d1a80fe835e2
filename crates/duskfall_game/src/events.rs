use bevy::prelude::*;

use duskfall_core::item::ItemKind;

use crate::player::camera::Location;

/// Which interaction a missed probe belonged to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractKind {
    Use,
    AlternateUse,
    PickUp,
}

// --- Events ---

#[derive(Event)]
pub struct ItemUsedEvent {
    pub item: Entity,
    pub kind: ItemKind,
    pub player: Location,
}

#[derive(Event)]
pub struct ItemAlternateUsedEvent {
    pub item: Entity,
    pub kind: ItemKind,
    pub player: Location,
}

#[derive(Event)]
pub struct ItemPickedUpEvent {
    pub item: Entity,
    pub kind: ItemKind,
    pub slot: usize,
    pub player: Location,
}

#[derive(Event)]
pub struct ItemPlacedEvent {
    pub item: Entity,
    pub kind: ItemKind,
    pub position: Vec3,
    pub yaw_deg: f32,
    pub player: Location,
}

#[derive(Event)]
pub struct PlacementCanceledEvent {
    pub item: Entity,
    pub kind: ItemKind,
    pub player: Location,
}

#[derive(Event)]
pub struct ActiveSlotChangedEvent {
    pub slot: Option<usize>,
    pub kind: Option<ItemKind>,
    pub player: Location,
}

#[derive(Event)]
pub struct InteractionMissedEvent {
    pub action: InteractKind,
    pub player: Location,
}

#[derive(Event)]
pub struct PlayerMovedEvent {
    pub old_position: Vec3,
    pub new_position: Vec3,
    pub player: Location,
}

// --- Plugin trait ---

#[allow(unused_variables)]
pub trait DuskfallPlugin: Send + Sync + 'static {
    fn on_item_used(&self, event: &ItemUsedEvent) {}
    fn on_item_alternate_used(&self, event: &ItemAlternateUsedEvent) {}
    fn on_item_picked_up(&self, event: &ItemPickedUpEvent) {}
    fn on_item_placed(&self, event: &ItemPlacedEvent) {}
    fn on_placement_canceled(&self, event: &PlacementCanceledEvent) {}
    fn on_active_slot_changed(&self, event: &ActiveSlotChangedEvent) {}
    fn on_interaction_missed(&self, event: &InteractionMissedEvent) {}
    fn on_player_moved(&self, event: &PlayerMovedEvent) {}
}

// --- Registry ---

#[derive(Resource)]
struct PluginRegistry {
    plugins: Vec<Box<dyn DuskfallPlugin>>,
}

// --- Dispatch systems ---

fn dispatch_item_used(mut reader: EventReader<ItemUsedEvent>, registry: Res<PluginRegistry>) {
    for event in reader.read() {
        for plugin in &registry.plugins {
            plugin.on_item_used(event);
        }
    }
}

fn dispatch_item_alternate_used(
    mut reader: EventReader<ItemAlternateUsedEvent>,
    registry: Res<PluginRegistry>,
) {
    for event in reader.read() {
        for plugin in &registry.plugins {
            plugin.on_item_alternate_used(event);
        }
    }
}

fn dispatch_item_picked_up(
    mut reader: EventReader<ItemPickedUpEvent>,
    registry: Res<PluginRegistry>,
) {
    for event in reader.read() {
        for plugin in &registry.plugins {
            plugin.on_item_picked_up(event);
        }
    }
}

fn dispatch_item_placed(mut reader: EventReader<ItemPlacedEvent>, registry: Res<PluginRegistry>) {
    for event in reader.read() {
        for plugin in &registry.plugins {
            plugin.on_item_placed(event);
        }
    }
}

fn dispatch_placement_canceled(
    mut reader: EventReader<PlacementCanceledEvent>,
    registry: Res<PluginRegistry>,
) {
    for event in reader.read() {
        for plugin in &registry.plugins {
            plugin.on_placement_canceled(event);
        }
    }
}

fn dispatch_active_slot_changed(
    mut reader: EventReader<ActiveSlotChangedEvent>,
    registry: Res<PluginRegistry>,
) {
    for event in reader.read() {
        for plugin in &registry.plugins {
            plugin.on_active_slot_changed(event);
        }
    }
}

fn dispatch_interaction_missed(
    mut reader: EventReader<InteractionMissedEvent>,
    registry: Res<PluginRegistry>,
) {
    for event in reader.read() {
        for plugin in &registry.plugins {
            plugin.on_interaction_missed(event);
        }
    }
}

fn dispatch_player_moved(
    mut reader: EventReader<PlayerMovedEvent>,
    registry: Res<PluginRegistry>,
) {
    for event in reader.read() {
        for plugin in &registry.plugins {
            plugin.on_player_moved(event);
        }
    }
}

// --- EventsPlugin builder ---

pub struct EventsPlugin {
    plugins: std::sync::Mutex<Vec<Box<dyn DuskfallPlugin>>>,
}

impl EventsPlugin {
    pub fn new() -> Self {
        Self {
            plugins: std::sync::Mutex::new(Vec::new()),
        }
    }

    pub fn new_with(plugins: Vec<Box<dyn DuskfallPlugin>>) -> Self {
        Self {
            plugins: std::sync::Mutex::new(plugins),
        }
    }

    pub fn add_plugin(self, plugin: impl DuskfallPlugin) -> Self {
        self.plugins.lock().unwrap().push(Box::new(plugin));
        self
    }
}

impl Plugin for EventsPlugin {
    fn build(&self, app: &mut App) {
        let plugins = self.plugins.lock().unwrap().drain(..).collect();
        app.insert_resource(PluginRegistry { plugins });

        app.add_event::<ItemUsedEvent>()
            .add_event::<ItemAlternateUsedEvent>()
            .add_event::<ItemPickedUpEvent>()
            .add_event::<ItemPlacedEvent>()
            .add_event::<PlacementCanceledEvent>()
            .add_event::<ActiveSlotChangedEvent>()
            .add_event::<InteractionMissedEvent>()
            .add_event::<PlayerMovedEvent>()
            .add_systems(
                Update,
                (
                    dispatch_item_used,
                    dispatch_item_alternate_used,
                    dispatch_item_picked_up,
                    dispatch_item_placed,
                    dispatch_placement_canceled,
                    dispatch_active_slot_changed,
                    dispatch_interaction_missed,
                    dispatch_player_moved,
                ),
            );
    }
}
