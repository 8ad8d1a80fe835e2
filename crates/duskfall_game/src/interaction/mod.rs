pub mod targeting;

use bevy::prelude::*;
use targeting::{pick_up_item, primary_use, secondary_use, spawn_crosshair, use_active_item};

/// Systems that consume the probe mirror. The mirror refresh is ordered
/// ahead of this set so every probe sees the current frame's volumes.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct InteractSet;

pub struct InteractionPlugin;

impl Plugin for InteractionPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_crosshair).add_systems(
            Update,
            (primary_use, secondary_use, pick_up_item, use_active_item).in_set(InteractSet),
        );
    }
}
