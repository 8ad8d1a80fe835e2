pub mod debug_overlay;
pub mod messages;
pub mod pause_menu;
pub mod slot_bar;

use bevy::prelude::*;
use debug_overlay::{
    DebugOverlayVisible, spawn_debug_overlay, toggle_debug_overlay, update_debug_overlay,
};
use messages::{MessageFeed, push_miss_messages, spawn_message_feed, update_message_feed};
use pause_menu::{
    button_hover, handle_quit_button, handle_resume_button, show_hide_pause_menu, spawn_pause_menu,
};
use slot_bar::{spawn_slot_bar, update_slot_bar};

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugOverlayVisible>()
            .init_resource::<MessageFeed>()
            .add_systems(
                Startup,
                (
                    spawn_pause_menu,
                    spawn_slot_bar,
                    spawn_message_feed,
                    spawn_debug_overlay,
                ),
            )
            .add_systems(
                Update,
                (
                    show_hide_pause_menu,
                    handle_resume_button,
                    handle_quit_button,
                    button_hover,
                    update_slot_bar,
                    (push_miss_messages, update_message_feed).chain(),
                    toggle_debug_overlay,
                    update_debug_overlay,
                ),
            );
    }
}
