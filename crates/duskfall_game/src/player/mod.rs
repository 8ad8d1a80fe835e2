pub mod camera;

use bevy::prelude::*;
use camera::{
    CameraSettings, GameState, camera_look, enforce_cursor_state, initial_cursor_grab,
    pause_on_focus_lost, player_walk, spawn_player, toggle_pause,
};

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraSettings>()
            .init_resource::<GameState>()
            .add_systems(Startup, (spawn_player, initial_cursor_grab))
            .add_systems(
                Update,
                (
                    camera_look,
                    player_walk.after(camera_look),
                    toggle_pause,
                    pause_on_focus_lost,
                ),
            )
            .add_systems(Last, enforce_cursor_state);
    }
}
