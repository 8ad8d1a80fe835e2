use std::f32::consts::PI;

use bevy::prelude::*;
use bevy::render::camera::RenderTarget;
use bevy::render::render_resource::{
    Extent3d, TextureDescriptor, TextureDimension, TextureFormat, TextureUsages,
};

use duskfall_core::item::ItemKind;

use crate::events::{ItemAlternateUsedEvent, ItemUsedEvent};
use crate::world::Collider;

use super::Item;

const VIEWFINDER_SIZE: u32 = 256;

/// Marks the phone's capture camera child.
#[derive(Component)]
pub struct PhoneCamera;

/// Marks the phone's screen plane child.
#[derive(Component)]
pub struct PhoneScreen;

fn create_viewfinder_target(images: &mut Assets<Image>) -> Handle<Image> {
    let size = Extent3d {
        width: VIEWFINDER_SIZE,
        height: VIEWFINDER_SIZE,
        depth_or_array_layers: 1,
    };

    let mut image = Image {
        texture_descriptor: TextureDescriptor {
            label: Some("phone_viewfinder"),
            size,
            dimension: TextureDimension::D2,
            format: TextureFormat::Bgra8UnormSrgb,
            mip_level_count: 1,
            sample_count: 1,
            usage: TextureUsages::TEXTURE_BINDING
                | TextureUsages::COPY_DST
                | TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        },
        ..default()
    };
    image.resize(size);

    images.add(image)
}

pub fn spawn_phone(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    images: &mut Assets<Image>,
    position: Vec3,
) {
    let viewfinder = create_viewfinder_target(images);

    commands
        .spawn((
            Item {
                kind: ItemKind::Phone,
                can_pick_up: true,
                mesh_yaw_offset: 0.0,
            },
            Collider {
                half_extents: Vec3::new(0.06, 0.02, 0.1),
            },
            Transform::from_translation(position),
            GlobalTransform::default(),
            Visibility::default(),
            InheritedVisibility::default(),
            ViewVisibility::default(),
        ))
        .with_children(|children| {
            children.spawn((
                Mesh3d(meshes.add(Cuboid::new(0.08, 0.015, 0.16))),
                MeshMaterial3d(materials.add(StandardMaterial {
                    base_color: Color::srgb(0.08, 0.08, 0.09),
                    perceptual_roughness: 0.4,
                    ..default()
                })),
                Transform::default(),
            ));
            // Screen stays dark until the camera is switched on.
            children.spawn((
                PhoneScreen,
                Mesh3d(meshes.add(Plane3d::default().mesh().size(0.07, 0.14))),
                MeshMaterial3d(materials.add(StandardMaterial {
                    base_color_texture: Some(viewfinder.clone()),
                    unlit: true,
                    ..default()
                })),
                Transform::from_xyz(0.0, 0.009, 0.0),
                Visibility::Hidden,
            ));
            // Rear-facing capture camera feeding the screen texture.
            children.spawn((
                PhoneCamera,
                Camera3d::default(),
                Camera {
                    order: -1,
                    target: RenderTarget::Image(viewfinder.clone().into()),
                    is_active: false,
                    ..default()
                },
                Transform::from_xyz(0.0, 0.03, -0.09),
            ));
        });
}

/// Using the phone flips the viewfinder screen and its capture camera
/// together.
pub fn toggle_phone_screen(
    mut ev_used: EventReader<ItemUsedEvent>,
    children_query: Query<&Children>,
    mut screen_query: Query<&mut Visibility, With<PhoneScreen>>,
    mut camera_query: Query<&mut Camera, With<PhoneCamera>>,
) {
    for event in ev_used.read() {
        if event.kind != ItemKind::Phone {
            continue;
        }
        let Ok(children) = children_query.get(event.item) else {
            continue;
        };
        for &child in children.iter() {
            if let Ok(mut visibility) = screen_query.get_mut(child) {
                *visibility = match *visibility {
                    Visibility::Hidden => Visibility::Inherited,
                    _ => Visibility::Hidden,
                };
            }
            if let Ok(mut camera) = camera_query.get_mut(child) {
                camera.is_active = !camera.is_active;
            }
        }
    }
}

/// Alternate use swings the capture camera between rear- and front-facing.
pub fn flip_phone_camera(
    mut ev_used: EventReader<ItemAlternateUsedEvent>,
    children_query: Query<&Children>,
    mut camera_query: Query<&mut Transform, With<PhoneCamera>>,
) {
    for event in ev_used.read() {
        if event.kind != ItemKind::Phone {
            continue;
        }
        let Ok(children) = children_query.get(event.item) else {
            continue;
        };
        for &child in children.iter() {
            if let Ok(mut transform) = camera_query.get_mut(child) {
                transform.rotate_y(PI);
            }
        }
    }
}
