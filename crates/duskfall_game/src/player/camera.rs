use bevy::input::mouse::AccumulatedMouseMotion;
use bevy::prelude::*;
use bevy::window::CursorGrabMode;

use crate::events::PlayerMovedEvent;
use crate::world::LEVEL_HALF_EXTENT;

use duskfall_core::movement::{WalkInput, walk_delta};

pub use duskfall_core::movement::EYE_HEIGHT;

/// Keeps the player's feet inside the room walls.
pub const PLAYER_RADIUS: f32 = 0.4;

#[derive(Component)]
pub struct PlayerCamera;

/// Child of the camera that held items parent to. Whatever hangs here
/// follows the view with a small offset, like an item carried in hand.
#[derive(Component)]
pub struct HandAnchor;

#[derive(Debug, Clone, Copy)]
pub struct Location {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub yaw: f32,
    pub pitch: f32,
}

#[derive(Component)]
pub struct Player {
    pub position: Vec3,
}

impl Player {
    pub fn location(&self, transform: &Transform) -> Location {
        let (yaw, pitch, _) = transform.rotation.to_euler(EulerRot::YXZ);
        Location {
            x: self.position.x,
            y: self.position.y,
            z: self.position.z,
            yaw,
            pitch,
        }
    }
}

#[derive(Resource)]
pub struct CameraSettings {
    pub sensitivity: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self { sensitivity: 0.003 }
    }
}

#[derive(Resource, PartialEq, Eq, Clone, Copy, Debug, Default)]
pub enum GameState {
    #[default]
    Playing,
    Paused,
}

pub fn spawn_player(mut commands: Commands) {
    let feet_pos = Vec3::new(0.0, 0.0, 4.0);
    let eye_pos = feet_pos + Vec3::new(0.0, EYE_HEIGHT, 0.0);

    commands
        .spawn((
            Camera3d::default(),
            Transform::from_translation(eye_pos).looking_at(Vec3::new(0.0, 1.0, 0.0), Vec3::Y),
            Visibility::default(),
            PlayerCamera,
            Player { position: feet_pos },
        ))
        .with_children(|parent| {
            parent.spawn((
                HandAnchor,
                Transform::from_xyz(0.35, -0.3, -0.7),
                Visibility::default(),
            ));
        });
}

pub fn initial_cursor_grab(mut windows: Query<&mut Window>) {
    if let Ok(mut window) = windows.get_single_mut() {
        window.cursor_options.grab_mode = CursorGrabMode::Locked;
        window.cursor_options.visible = false;
    }
}

pub fn camera_look(
    game_state: Res<GameState>,
    mouse_motion: Res<AccumulatedMouseMotion>,
    settings: Res<CameraSettings>,
    mut query: Query<&mut Transform, With<PlayerCamera>>,
) {
    if *game_state != GameState::Playing {
        return;
    }
    if mouse_motion.delta == Vec2::ZERO {
        return;
    }

    for mut transform in &mut query {
        let (mut yaw, mut pitch, _) = transform.rotation.to_euler(EulerRot::YXZ);
        yaw -= mouse_motion.delta.x * settings.sensitivity;
        pitch -= mouse_motion.delta.y * settings.sensitivity;
        pitch = pitch.clamp(-1.54, 1.54);

        transform.rotation = Quat::from_euler(EulerRot::YXZ, yaw, pitch, 0.0);
    }
}

pub fn player_walk(
    game_state: Res<GameState>,
    keys: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
    mut ev_moved: EventWriter<PlayerMovedEvent>,
    mut query: Query<(&mut Transform, &mut Player), With<PlayerCamera>>,
) {
    if *game_state != GameState::Playing {
        return;
    }

    let dt = time.delta_secs();

    for (mut transform, mut player) in &mut query {
        let (yaw, _, _) = transform.rotation.to_euler(EulerRot::YXZ);

        let mut input = WalkInput::default();
        if keys.pressed(KeyCode::KeyW) {
            input.forward += 1.0;
        }
        if keys.pressed(KeyCode::KeyS) {
            input.forward -= 1.0;
        }
        if keys.pressed(KeyCode::KeyD) {
            input.strafe += 1.0;
        }
        if keys.pressed(KeyCode::KeyA) {
            input.strafe -= 1.0;
        }
        if input == WalkInput::default() {
            continue;
        }

        let old_pos = player.position;
        let mut new_pos = player.position + walk_delta(yaw, input, dt);

        // Keep the feet inside the walls; there is no vertical motion.
        let limit = LEVEL_HALF_EXTENT - PLAYER_RADIUS;
        new_pos.x = new_pos.x.clamp(-limit, limit);
        new_pos.z = new_pos.z.clamp(-limit, limit);
        player.position = new_pos;

        if player.position != old_pos {
            ev_moved.send(PlayerMovedEvent {
                old_position: old_pos,
                new_position: player.position,
                player: player.location(&transform),
            });
        }
        transform.translation = player.position + Vec3::new(0.0, EYE_HEIGHT, 0.0);
    }
}

pub fn pause_on_focus_lost(
    mut game_state: ResMut<GameState>,
    mut focus_events: EventReader<bevy::window::WindowFocused>,
) {
    for event in focus_events.read() {
        if !event.focused && *game_state != GameState::Paused {
            *game_state = GameState::Paused;
        }
    }
}

/// Continuously enforce cursor state to match GameState.
/// Prevents macOS/Bevy from re-locking cursor when window regains focus.
pub fn enforce_cursor_state(game_state: Res<GameState>, mut windows: Query<&mut Window>) {
    let Ok(mut window) = windows.get_single_mut() else {
        return;
    };

    match *game_state {
        GameState::Playing => {
            if window.cursor_options.grab_mode != CursorGrabMode::Locked {
                window.cursor_options.grab_mode = CursorGrabMode::Locked;
                window.cursor_options.visible = false;
            }
        }
        GameState::Paused => {
            if window.cursor_options.grab_mode != CursorGrabMode::None {
                window.cursor_options.grab_mode = CursorGrabMode::None;
                window.cursor_options.visible = true;
            }
        }
    }
}

pub fn toggle_pause(
    keys: Res<ButtonInput<KeyCode>>,
    mut game_state: ResMut<GameState>,
    mut windows: Query<&mut Window>,
) {
    if keys.just_pressed(KeyCode::Escape) {
        let new_state = match *game_state {
            GameState::Playing => GameState::Paused,
            GameState::Paused => GameState::Playing,
        };
        *game_state = new_state;

        if let Ok(mut window) = windows.get_single_mut() {
            match new_state {
                GameState::Playing => {
                    window.cursor_options.grab_mode = CursorGrabMode::Locked;
                    window.cursor_options.visible = false;
                }
                GameState::Paused => {
                    window.cursor_options.grab_mode = CursorGrabMode::None;
                    window.cursor_options.visible = true;
                }
            }
        }
    }
}
