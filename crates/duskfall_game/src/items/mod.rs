pub mod flashlight;
pub mod phone;

use bevy::prelude::*;

use duskfall_core::item::ItemKind;

use crate::world::Collider;

use flashlight::toggle_flashlight;
use phone::{flip_phone_camera, toggle_phone_screen};

/// Gameplay properties of an interactable item.
#[derive(Component)]
pub struct Item {
    pub kind: ItemKind,
    /// Level designers can pin an otherwise pickupable item in place.
    pub can_pick_up: bool,
    /// Yaw of the authored mesh relative to the item's logical forward,
    /// in degrees. Taken back out of the preview yaw at placement.
    pub mesh_yaw_offset: f32,
}

/// Marks an item currently owned by the inventory and riding the hand
/// anchor.
#[derive(Component)]
pub struct HeldItem;

pub struct ItemsPlugin;

impl Plugin for ItemsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (toggle_flashlight, toggle_phone_screen, flip_phone_camera),
        );
    }
}

/// A stuffed doll. It does nothing; some of them still refuse to leave
/// their spot.
pub fn spawn_doll(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    position: Vec3,
    can_pick_up: bool,
) {
    commands
        .spawn((
            Item {
                kind: ItemKind::Doll,
                can_pick_up,
                mesh_yaw_offset: 180.0,
            },
            Collider {
                half_extents: Vec3::new(0.12, 0.2, 0.12),
            },
            Transform::from_translation(position),
            GlobalTransform::default(),
            Visibility::default(),
            InheritedVisibility::default(),
            ViewVisibility::default(),
        ))
        .with_children(|children| {
            children.spawn((
                Mesh3d(meshes.add(Capsule3d::new(0.09, 0.18))),
                MeshMaterial3d(materials.add(StandardMaterial {
                    base_color: Color::srgb(0.45, 0.2, 0.2),
                    perceptual_roughness: 1.0,
                    ..default()
                })),
                Transform::default(),
            ));
            children.spawn((
                Mesh3d(meshes.add(Sphere::new(0.07))),
                MeshMaterial3d(materials.add(StandardMaterial {
                    base_color: Color::srgb(0.85, 0.75, 0.65),
                    perceptual_roughness: 1.0,
                    ..default()
                })),
                Transform::from_xyz(0.0, 0.2, 0.0),
            ));
        });
}
