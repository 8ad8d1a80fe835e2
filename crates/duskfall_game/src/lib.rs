pub mod events;
pub mod interaction;
pub mod inventory;
pub mod items;
pub mod placement;
pub mod player;
pub mod ui;
pub mod world;

use std::sync::Mutex;

use bevy::prelude::*;

use events::EventsPlugin;
use placement::PlacementConfig;
use player::camera::CameraSettings;

/// Knobs the binary exposes on the command line.
pub struct GameSettings {
    pub sensitivity: f32,
    pub reset_preview_rotation: bool,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            sensitivity: 0.003,
            reset_preview_rotation: false,
        }
    }
}

/// The game plugin composes all gameplay functionality: the room, the
/// player, interaction, inventory, placement, items and UI.
pub struct GamePlugin {
    settings: GameSettings,
    event_plugins: Mutex<Vec<Box<dyn events::DuskfallPlugin>>>,
}

impl GamePlugin {
    pub fn new(settings: GameSettings) -> Self {
        Self {
            settings,
            event_plugins: Mutex::new(Vec::new()),
        }
    }

    pub fn with_plugin(self, plugin: impl events::DuskfallPlugin) -> Self {
        self.event_plugins.lock().unwrap().push(Box::new(plugin));
        self
    }
}

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        let event_plugins = self.event_plugins.lock().unwrap().drain(..).collect();

        app.insert_resource(CameraSettings {
            sensitivity: self.settings.sensitivity,
        })
        .insert_resource(PlacementConfig {
            reset_rotation_on_begin: self.settings.reset_preview_rotation,
        })
        .add_plugins(EventsPlugin::new_with(event_plugins))
        .add_plugins(world::WorldPlugin)
        .add_plugins(player::PlayerPlugin)
        .add_plugins(inventory::InventoryPlugin)
        .add_plugins(interaction::InteractionPlugin)
        .add_plugins(placement::PlacementPlugin)
        .add_plugins(items::ItemsPlugin)
        .add_plugins(ui::UiPlugin);
    }
}
