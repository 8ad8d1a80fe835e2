//! Full pick-up / place flow across the pure-logic modules, driven the way
//! the game drives them: probe, mutate inventory, rebuild the collider set.

use bevy_math::Vec3;
use duskfall_core::inventory::Inventory;
use duskfall_core::item::{ItemKind, pickup_allowed};
use duskfall_core::placement::{PlaceOutcome, Placement, ROTATE_STEP_DEG};
use duskfall_core::trace::{Aabb, ColliderSet, MAX_REACH, line_trace};

const ITEM_A: u32 = 1;
const ITEM_B: u32 = 2;
const GROUND: u32 = 100;

/// World mirror: the ground slab plus every world-resident item as a small
/// box. Held items are absent, so they can never occlude a probe.
fn world_colliders(items: &[(u32, Vec3)]) -> ColliderSet<u32> {
    let mut colliders = ColliderSet::new();
    colliders.insert(
        GROUND,
        Aabb::from_center_half_extents(Vec3::new(10.0, 19.75, 0.0), Vec3::new(50.0, 0.25, 50.0)),
    );
    for &(item, center) in items {
        colliders.insert(item, Aabb::from_center_half_extents(center, Vec3::splat(0.2)));
    }
    colliders
}

#[test]
fn pick_up_two_items_then_place_the_second() {
    let eye = Vec3::new(10.0, 21.0, 0.0);
    let mut world_items = vec![
        (ITEM_A, eye + Vec3::new(0.0, 0.0, -1.0)),
        (ITEM_B, eye + Vec3::new(0.0, 0.0, -1.6)),
    ];
    let mut inventory = Inventory::new();
    let mut placement = Placement::default();

    // First grab: the nearer item wins the probe.
    let colliders = world_colliders(&world_items);
    let hit = line_trace(eye, Vec3::NEG_Z, MAX_REACH, &colliders).unwrap();
    assert_eq!(hit.target, ITEM_A);
    world_items.retain(|&(item, _)| item != hit.target);
    assert_eq!(inventory.pick_up(hit.target), 0);
    assert_eq!(inventory.active_item(), Some(ITEM_A));

    // Second grab: the far item is now exposed.
    let colliders = world_colliders(&world_items);
    let hit = line_trace(eye, Vec3::NEG_Z, MAX_REACH, &colliders).unwrap();
    assert_eq!(hit.target, ITEM_B);
    world_items.retain(|&(item, _)| item != hit.target);
    assert_eq!(inventory.pick_up(hit.target), 1);
    assert_eq!(inventory.len(), 2);
    assert_eq!(inventory.active_item(), Some(ITEM_B));

    // Place the active item on the ground below, turned two steps.
    assert!(placement.begin(inventory.active_item(), false));
    placement.rotate(2);
    let colliders = world_colliders(&world_items);
    let hit = line_trace(eye, Vec3::NEG_Y, MAX_REACH, &colliders);
    assert_eq!(
        placement.finish(hit.as_ref(), 180.0),
        PlaceOutcome::Placed {
            item: ITEM_B,
            position: Vec3::new(10.0, 20.0, 0.0),
            yaw_deg: 2.0 * ROTATE_STEP_DEG - 180.0,
        }
    );

    assert!(inventory.remove(ITEM_B));
    assert_eq!(inventory.len(), 1);
    assert_eq!(inventory.active_item(), Some(ITEM_A));

    // The placed item is world-resident again and the probe can strike it.
    world_items.push((ITEM_B, Vec3::new(10.0, 20.2, 0.0)));
    let colliders = world_colliders(&world_items);
    let hit = line_trace(eye, Vec3::NEG_Y, MAX_REACH, &colliders).unwrap();
    assert_eq!(hit.target, ITEM_B);
}

#[test]
fn refused_pickups_leave_the_inventory_alone() {
    let eye = Vec3::new(10.0, 21.0, 0.0);
    let world_items = vec![(ITEM_A, eye + Vec3::new(0.0, 0.0, -1.0))];
    let mut inventory = Inventory::new();

    let colliders = world_colliders(&world_items);
    let hit = line_trace(eye, Vec3::NEG_Z, MAX_REACH, &colliders).unwrap();
    assert_eq!(hit.target, ITEM_A);

    // The struck item is pinned in place, so the gate refuses it.
    assert!(!pickup_allowed(ItemKind::Doll.capabilities(), false, false));
    assert!(inventory.is_empty());

    // Taken normally, a second grab of the same handle is refused too.
    inventory.pick_up(hit.target);
    assert!(!pickup_allowed(
        ItemKind::Doll.capabilities(),
        true,
        inventory.contains(hit.target),
    ));
    assert_eq!(inventory.len(), 1);
}

#[test]
fn placing_the_last_item_empties_the_hands() {
    let eye = Vec3::new(10.0, 21.0, 0.0);
    let mut inventory = Inventory::new();
    let mut placement = Placement::default();

    inventory.pick_up(ITEM_A);
    assert!(placement.begin(inventory.active_item(), false));

    // Only the ground below remains to aim at.
    let colliders = world_colliders(&[]);
    let hit = line_trace(eye, Vec3::NEG_Y, MAX_REACH, &colliders);
    let PlaceOutcome::Placed { item, .. } = placement.finish(hit.as_ref(), 0.0) else {
        panic!("the ground probe should land the item");
    };

    assert!(inventory.remove(item));
    assert!(inventory.is_empty());
    assert_eq!(inventory.active_slot(), None);
    assert_eq!(inventory.active_item(), None);
}

#[test]
fn canceling_a_session_keeps_the_item_held() {
    let eye = Vec3::new(10.0, 21.0, 0.0);
    let mut world_items = vec![(ITEM_A, eye + Vec3::new(0.0, 0.0, -1.0))];
    let mut inventory = Inventory::new();
    let mut placement = Placement::default();

    let colliders = world_colliders(&world_items);
    let hit = line_trace(eye, Vec3::NEG_Z, MAX_REACH, &colliders).unwrap();
    world_items.retain(|&(item, _)| item != hit.target);
    inventory.pick_up(hit.target);

    assert!(placement.begin(inventory.active_item(), false));

    // Looking up at open sky: the closing probe misses.
    let colliders = world_colliders(&world_items);
    let hit = line_trace(eye, Vec3::Y, MAX_REACH, &colliders);
    assert!(hit.is_none());
    assert_eq!(placement.finish(hit.as_ref(), 180.0), PlaceOutcome::Canceled);

    assert_eq!(inventory.len(), 1);
    assert_eq!(inventory.active_item(), Some(ITEM_A));
    assert!(!placement.is_placing());
}
