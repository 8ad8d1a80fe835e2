use bevy::prelude::*;
use clap::Parser;
use duskfall_macros::dusk_plugin;

use duskfall_game::events;
use duskfall_game::{GamePlugin, GameSettings};

#[derive(Parser)]
#[command(name = "duskfall")]
#[command(about = "Duskfall — first-person survival horror")]
struct Args {
    /// Mouse look sensitivity
    #[arg(long, default_value_t = 0.003)]
    sensitivity: f32,

    /// Zero the placement preview rotation each time placing starts
    #[arg(long)]
    reset_preview_rotation: bool,
}

struct LogPlugin;

#[dusk_plugin]
impl LogPlugin {
    #[Event::PlayerMoved]
    fn on_move(&self, event: &events::PlayerMovedEvent) {
        info!(
            "Player moved to ({:.1}, {:.1}, {:.1})",
            event.player.x, event.player.y, event.player.z
        );
    }

    #[Event::ItemUsed]
    fn on_used(&self, event: &events::ItemUsedEvent) {
        info!(
            "Player at ({:.1}, {:.1}, {:.1}) used {:?}",
            event.player.x, event.player.y, event.player.z, event.kind
        );
    }

    #[Event::ItemPickedUp]
    fn on_picked_up(&self, event: &events::ItemPickedUpEvent) {
        info!(
            "Player at ({:.1}, {:.1}, {:.1}) picked up {:?} into slot {}",
            event.player.x, event.player.y, event.player.z, event.kind, event.slot
        );
    }

    #[Event::ItemPlaced]
    fn on_placed(&self, event: &events::ItemPlacedEvent) {
        info!(
            "Player at ({:.1}, {:.1}, {:.1}) placed {:?} at ({:.1}, {:.1}, {:.1}) with yaw {:.0}",
            event.player.x,
            event.player.y,
            event.player.z,
            event.kind,
            event.position.x,
            event.position.y,
            event.position.z,
            event.yaw_deg
        );
    }

    #[Event::PlacementCanceled]
    fn on_canceled(&self, event: &events::PlacementCanceledEvent) {
        info!(
            "Player at ({:.1}, {:.1}, {:.1}) canceled placing {:?}",
            event.player.x, event.player.y, event.player.z, event.kind
        );
    }

    #[Event::ActiveSlotChanged]
    fn on_slot(&self, event: &events::ActiveSlotChangedEvent) {
        match (event.slot, event.kind) {
            (Some(slot), Some(kind)) => info!("Active slot {} ({:?})", slot, kind),
            (Some(slot), None) => info!("Active slot {}", slot),
            _ => info!("Hands now empty"),
        }
    }
}

fn main() {
    let args = Args::parse();

    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Duskfall".into(),
            ..default()
        }),
        ..default()
    }));

    app.add_plugins(
        GamePlugin::new(GameSettings {
            sensitivity: args.sensitivity,
            reset_preview_rotation: args.reset_preview_rotation,
        })
        .with_plugin(LogPlugin),
    );

    app.add_systems(Startup, setup_lighting);
    app.run();
}

fn setup_lighting(mut commands: Commands) {
    // Moonlight through the window slats, barely enough to see by.
    commands.spawn((
        DirectionalLight {
            illuminance: 300.0,
            color: Color::srgb(0.6, 0.65, 0.8),
            shadows_enabled: true,
            ..default()
        },
        Transform::from_rotation(Quat::from_euler(EulerRot::XYZ, -0.9, 0.3, 0.0)),
    ));

    commands.insert_resource(AmbientLight {
        color: Color::srgb(0.7, 0.75, 0.9),
        brightness: 20.0,
    });
}
