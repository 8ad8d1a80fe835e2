use bevy::prelude::*;

use duskfall_core::item::ItemKind;

use crate::events::ItemUsedEvent;
use crate::world::Collider;

use super::Item;

const BEAM_INNER_ANGLE: f32 = 0.26;
const BEAM_OUTER_ANGLE: f32 = 0.52;

/// Marks the flashlight's spot light child.
#[derive(Component)]
pub struct FlashlightBeam;

pub fn spawn_flashlight(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    position: Vec3,
) {
    commands
        .spawn((
            Item {
                kind: ItemKind::Flashlight,
                can_pick_up: true,
                mesh_yaw_offset: 0.0,
            },
            Collider {
                half_extents: Vec3::new(0.05, 0.05, 0.14),
            },
            Transform::from_translation(position),
            GlobalTransform::default(),
            Visibility::default(),
            InheritedVisibility::default(),
            ViewVisibility::default(),
        ))
        .with_children(|children| {
            children.spawn((
                Mesh3d(meshes.add(Cuboid::new(0.06, 0.06, 0.2))),
                MeshMaterial3d(materials.add(StandardMaterial {
                    base_color: Color::srgb(0.25, 0.25, 0.28),
                    perceptual_roughness: 0.5,
                    ..default()
                })),
                Transform::default(),
            ));
            children.spawn((
                Mesh3d(meshes.add(Cuboid::new(0.08, 0.08, 0.06))),
                MeshMaterial3d(materials.add(StandardMaterial {
                    base_color: Color::srgb(0.2, 0.2, 0.22),
                    perceptual_roughness: 0.5,
                    ..default()
                })),
                Transform::from_xyz(0.0, 0.0, -0.11),
            ));
            // Beam starts dark until the first use.
            children.spawn((
                FlashlightBeam,
                SpotLight {
                    color: Color::srgb(1.0, 0.95, 0.8),
                    intensity: 800_000.0,
                    range: 15.0,
                    radius: 0.05,
                    inner_angle: BEAM_INNER_ANGLE,
                    outer_angle: BEAM_OUTER_ANGLE,
                    shadows_enabled: true,
                    ..default()
                },
                Transform::from_xyz(0.0, 0.0, -0.15),
                Visibility::Hidden,
            ));
        });
}

/// Using the flashlight flips its beam. A stowed flashlight keeps its
/// beam state but cannot shine while hidden.
pub fn toggle_flashlight(
    mut ev_used: EventReader<ItemUsedEvent>,
    children_query: Query<&Children>,
    mut beam_query: Query<&mut Visibility, With<FlashlightBeam>>,
) {
    for event in ev_used.read() {
        if event.kind != ItemKind::Flashlight {
            continue;
        }
        let Ok(children) = children_query.get(event.item) else {
            continue;
        };
        for &child in children.iter() {
            if let Ok(mut visibility) = beam_query.get_mut(child) {
                *visibility = match *visibility {
                    Visibility::Hidden => Visibility::Inherited,
                    _ => Visibility::Hidden,
                };
            }
        }
    }
}
