use std::ops::{Deref, DerefMut};

use bevy::prelude::*;

use duskfall_core::trace::{Aabb, ColliderSet};

use crate::interaction::InteractSet;
use crate::items::HeldItem;
use crate::items::flashlight::spawn_flashlight;
use crate::items::phone::spawn_phone;
use crate::items::spawn_doll;

/// Half the side length of the square room, in meters.
pub const LEVEL_HALF_EXTENT: f32 = 10.0;
const WALL_HEIGHT: f32 = 3.5;
const WALL_THICKNESS: f32 = 0.3;

/// Axis-aligned probe volume centered on the entity's translation.
#[derive(Component)]
pub struct Collider {
    pub half_extents: Vec3,
}

/// Bevy Resource wrapper around the pure-logic collider set.
#[derive(Resource, Default)]
pub struct Colliders(pub ColliderSet<Entity>);

impl Deref for Colliders {
    type Target = ColliderSet<Entity>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Colliders {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

fn setup_room(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut images: ResMut<Assets<Image>>,
) {
    let side = LEVEL_HALF_EXTENT * 2.0;

    commands.spawn((
        Mesh3d(meshes.add(Cuboid::new(side, 0.5, side))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb(0.23, 0.20, 0.18),
            perceptual_roughness: 0.95,
            ..default()
        })),
        Transform::from_xyz(0.0, -0.25, 0.0),
        Collider {
            half_extents: Vec3::new(LEVEL_HALF_EXTENT, 0.25, LEVEL_HALF_EXTENT),
        },
    ));

    let wall_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.30, 0.28, 0.26),
        perceptual_roughness: 0.9,
        ..default()
    });
    let wall_halves = [
        (
            Vec3::new(0.0, WALL_HEIGHT / 2.0, -LEVEL_HALF_EXTENT),
            Vec3::new(LEVEL_HALF_EXTENT, WALL_HEIGHT / 2.0, WALL_THICKNESS / 2.0),
        ),
        (
            Vec3::new(0.0, WALL_HEIGHT / 2.0, LEVEL_HALF_EXTENT),
            Vec3::new(LEVEL_HALF_EXTENT, WALL_HEIGHT / 2.0, WALL_THICKNESS / 2.0),
        ),
        (
            Vec3::new(-LEVEL_HALF_EXTENT, WALL_HEIGHT / 2.0, 0.0),
            Vec3::new(WALL_THICKNESS / 2.0, WALL_HEIGHT / 2.0, LEVEL_HALF_EXTENT),
        ),
        (
            Vec3::new(LEVEL_HALF_EXTENT, WALL_HEIGHT / 2.0, 0.0),
            Vec3::new(WALL_THICKNESS / 2.0, WALL_HEIGHT / 2.0, LEVEL_HALF_EXTENT),
        ),
    ];
    for (center, half) in wall_halves {
        commands.spawn((
            Mesh3d(meshes.add(Cuboid::new(half.x * 2.0, half.y * 2.0, half.z * 2.0))),
            MeshMaterial3d(wall_material.clone()),
            Transform::from_translation(center),
            Collider { half_extents: half },
        ));
    }

    // The table the starting items rest on. Only the top is probeable.
    let leg_mesh = meshes.add(Cuboid::new(0.08, 0.78, 0.08));
    let wood = materials.add(StandardMaterial {
        base_color: Color::srgb(0.35, 0.24, 0.15),
        perceptual_roughness: 0.8,
        ..default()
    });
    commands
        .spawn((
            Mesh3d(meshes.add(Cuboid::new(1.6, 0.08, 0.9))),
            MeshMaterial3d(wood.clone()),
            Transform::from_xyz(0.0, 0.82, 0.0),
            Collider {
                half_extents: Vec3::new(0.8, 0.04, 0.45),
            },
        ))
        .with_children(|parent| {
            for (x, z) in [(-0.7, -0.38), (-0.7, 0.38), (0.7, -0.38), (0.7, 0.38)] {
                parent.spawn((
                    Mesh3d(leg_mesh.clone()),
                    MeshMaterial3d(wood.clone()),
                    Transform::from_xyz(x, -0.43, z),
                ));
            }
        });

    commands.spawn((
        PointLight {
            color: Color::srgb(1.0, 0.85, 0.6),
            intensity: 40_000.0,
            range: 12.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(0.0, WALL_HEIGHT - 0.3, 0.0),
    ));

    spawn_flashlight(
        &mut commands,
        &mut meshes,
        &mut materials,
        Vec3::new(-0.45, 0.89, 0.0),
    );
    spawn_phone(
        &mut commands,
        &mut meshes,
        &mut materials,
        &mut images,
        Vec3::new(0.35, 0.87, 0.1),
    );
    spawn_doll(
        &mut commands,
        &mut meshes,
        &mut materials,
        Vec3::new(1.3, 0.18, -0.8),
        true,
    );
    // This one is part of the room and refuses to be taken.
    spawn_doll(
        &mut commands,
        &mut meshes,
        &mut materials,
        Vec3::new(-8.0, 0.18, -8.0),
        false,
    );
}

/// Rebuilds the probe mirror every frame from world-resident colliders.
/// Held items carry no volume, so a probe can never strike what is in hand.
fn refresh_colliders(
    mut colliders: ResMut<Colliders>,
    volumes: Query<(Entity, &Transform, &Collider), Without<HeldItem>>,
) {
    colliders.clear();
    for (entity, transform, collider) in &volumes {
        colliders.insert(
            entity,
            Aabb::from_center_half_extents(transform.translation, collider.half_extents),
        );
    }
}

pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Colliders>()
            .add_systems(Startup, setup_room)
            .add_systems(Update, refresh_colliders.before(InteractSet));
    }
}
