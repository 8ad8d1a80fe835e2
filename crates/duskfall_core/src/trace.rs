use bevy_math::Vec3;

/// How far the view-line probe reaches from the camera, in meters.
pub const MAX_REACH: f32 = 2.0;

/// Axis-aligned box standing in for an entity's collision volume.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn from_center_half_extents(center: Vec3, half_extents: Vec3) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    pub fn contains(&self, point: Vec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }
}

/// First blocking surface found by a probe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraceHit<H> {
    pub target: H,
    pub point: Vec3,
    pub normal: Vec3,
    pub distance: f32,
}

/// The set of world-resident volumes a probe can strike.
#[derive(Debug, Clone)]
pub struct ColliderSet<H> {
    volumes: Vec<(H, Aabb)>,
}

impl<H> Default for ColliderSet<H> {
    fn default() -> Self {
        Self {
            volumes: Vec::new(),
        }
    }
}

impl<H: Copy> ColliderSet<H> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.volumes.clear();
    }

    pub fn insert(&mut self, handle: H, aabb: Aabb) {
        self.volumes.push((handle, aabb));
    }

    pub fn len(&self) -> usize {
        self.volumes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.volumes.is_empty()
    }
}

/// Casts a ray from `origin` along `direction` and returns the nearest
/// volume struck within `max_distance`, if any. A hit exactly at
/// `max_distance` still counts. Pure query: nothing is mutated and a miss
/// is a normal result.
pub fn line_trace<H: Copy>(
    origin: Vec3,
    direction: Vec3,
    max_distance: f32,
    colliders: &ColliderSet<H>,
) -> Option<TraceHit<H>> {
    let dir = direction.normalize_or_zero();
    if dir == Vec3::ZERO {
        return None;
    }

    let mut nearest: Option<TraceHit<H>> = None;

    for &(handle, aabb) in &colliders.volumes {
        // The probe looks outward; a volume enclosing the origin never
        // blocks it.
        if aabb.contains(origin) {
            continue;
        }
        let Some((t, normal)) = ray_aabb_entry(origin, dir, &aabb) else {
            continue;
        };
        if t > max_distance {
            continue;
        }
        if nearest.map_or(true, |hit| t < hit.distance) {
            nearest = Some(TraceHit {
                target: handle,
                point: origin + dir * t,
                normal,
                distance: t,
            });
        }
    }

    nearest
}

/// Slab test returning the entry distance along the ray and the normal of
/// the face entered through.
fn ray_aabb_entry(origin: Vec3, dir: Vec3, aabb: &Aabb) -> Option<(f32, Vec3)> {
    let mut t_near = f32::NEG_INFINITY;
    let mut t_far = f32::INFINITY;
    let mut entry_axis = 0;

    for axis in 0..3 {
        let o = origin[axis];
        let d = dir[axis];

        if d.abs() < f32::EPSILON {
            if o < aabb.min[axis] || o > aabb.max[axis] {
                return None;
            }
            continue;
        }

        let mut t0 = (aabb.min[axis] - o) / d;
        let mut t1 = (aabb.max[axis] - o) / d;
        if t0 > t1 {
            std::mem::swap(&mut t0, &mut t1);
        }

        if t0 > t_near {
            t_near = t0;
            entry_axis = axis;
        }
        t_far = t_far.min(t1);
        if t_near > t_far {
            return None;
        }
    }

    // A negative entry means the box lies behind the ray or around its
    // origin.
    if t_near < 0.0 {
        return None;
    }

    let mut normal = Vec3::ZERO;
    normal[entry_axis] = if dir[entry_axis] > 0.0 { -1.0 } else { 1.0 };
    Some((t_near, normal))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn box_at(center: Vec3) -> Aabb {
        Aabb::from_center_half_extents(center, Vec3::splat(0.5))
    }

    #[test]
    fn empty_world_never_hits() {
        let colliders: ColliderSet<u32> = ColliderSet::new();
        assert!(line_trace(Vec3::ZERO, Vec3::NEG_Z, MAX_REACH, &colliders).is_none());
    }

    #[test]
    fn hit_reports_entry_point_and_normal() {
        let mut colliders = ColliderSet::new();
        colliders.insert(1u32, box_at(Vec3::new(0.0, 0.0, -2.0)));

        let hit = line_trace(Vec3::ZERO, Vec3::NEG_Z, 4.0, &colliders).unwrap();
        assert_eq!(hit.target, 1);
        assert!((hit.distance - 1.5).abs() < 1e-5);
        assert!((hit.point.z + 1.5).abs() < 1e-5);
        assert_eq!(hit.normal, Vec3::Z);
    }

    #[test]
    fn nearest_volume_wins() {
        let mut colliders = ColliderSet::new();
        colliders.insert(1u32, box_at(Vec3::new(0.0, 0.0, -3.0)));
        colliders.insert(2u32, box_at(Vec3::new(0.0, 0.0, -1.5)));

        let hit = line_trace(Vec3::ZERO, Vec3::NEG_Z, 4.0, &colliders).unwrap();
        assert_eq!(hit.target, 2);
    }

    #[test]
    fn side_entry_reports_the_side_normal() {
        let mut colliders = ColliderSet::new();
        colliders.insert(1u32, box_at(Vec3::new(2.0, 0.0, -2.0)));

        // Approach from the -X side.
        let hit = line_trace(Vec3::new(0.0, 0.0, -2.0), Vec3::X, 4.0, &colliders).unwrap();
        assert_eq!(hit.normal, Vec3::NEG_X);
        assert!((hit.distance - 1.5).abs() < 1e-5);
    }

    #[test]
    fn reach_boundary_is_inclusive() {
        let mut colliders = ColliderSet::new();
        // Near face sits exactly at MAX_REACH.
        colliders.insert(1u32, box_at(Vec3::new(0.0, 0.0, -(MAX_REACH + 0.5))));

        assert!(line_trace(Vec3::ZERO, Vec3::NEG_Z, MAX_REACH, &colliders).is_some());
    }

    #[test]
    fn just_under_reach_hits() {
        let mut colliders = ColliderSet::new();
        colliders.insert(1u32, box_at(Vec3::new(0.0, 0.0, -(MAX_REACH + 0.49))));

        assert!(line_trace(Vec3::ZERO, Vec3::NEG_Z, MAX_REACH, &colliders).is_some());
    }

    #[test]
    fn just_over_reach_misses() {
        let mut colliders = ColliderSet::new();
        colliders.insert(1u32, box_at(Vec3::new(0.0, 0.0, -(MAX_REACH + 0.51))));

        assert!(line_trace(Vec3::ZERO, Vec3::NEG_Z, MAX_REACH, &colliders).is_none());
    }

    #[test]
    fn volume_behind_the_ray_is_ignored() {
        let mut colliders = ColliderSet::new();
        colliders.insert(1u32, box_at(Vec3::new(0.0, 0.0, 2.0)));

        assert!(line_trace(Vec3::ZERO, Vec3::NEG_Z, MAX_REACH, &colliders).is_none());
    }

    #[test]
    fn enclosing_volume_is_skipped() {
        let mut colliders = ColliderSet::new();
        colliders.insert(1u32, Aabb::from_center_half_extents(Vec3::ZERO, Vec3::splat(5.0)));
        colliders.insert(2u32, box_at(Vec3::new(0.0, 0.0, -1.5)));

        let hit = line_trace(Vec3::ZERO, Vec3::NEG_Z, MAX_REACH, &colliders).unwrap();
        assert_eq!(hit.target, 2);
    }

    #[test]
    fn zero_direction_is_a_miss() {
        let mut colliders = ColliderSet::new();
        colliders.insert(1u32, box_at(Vec3::new(0.0, 0.0, -1.0)));

        assert!(line_trace(Vec3::ZERO, Vec3::ZERO, MAX_REACH, &colliders).is_none());
    }
}
