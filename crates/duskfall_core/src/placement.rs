use bevy_math::Vec3;

use crate::trace::TraceHit;

/// Yaw applied to the preview per rotate step, in degrees.
pub const ROTATE_STEP_DEG: f32 = 10.0;

/// Pose the ghost preview should take this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreviewPose {
    pub position: Vec3,
    pub yaw_deg: f32,
}

/// Result of ending a placement session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlaceOutcome<H> {
    /// The closing probe missed; the item stays held and nothing moves.
    Canceled,
    /// The item leaves the inventory and lands at `position` with `yaw_deg`.
    Placed {
        item: H,
        position: Vec3,
        yaw_deg: f32,
    },
}

/// Two-state machine driving item placement: idle until a begin event
/// arrives with an item in hand, placing until the finish event. All
/// transitions are total; failures downgrade to no-ops.
///
/// The session borrows the item it manipulates: begin captures the handle,
/// and the caller applies the outcome of `finish` to its own state.
#[derive(Debug, Clone)]
pub struct Placement<H: Copy> {
    placing: Option<H>,
    preview_yaw_deg: f32,
}

impl<H: Copy> Default for Placement<H> {
    fn default() -> Self {
        Self {
            placing: None,
            preview_yaw_deg: 0.0,
        }
    }
}

impl<H: Copy> Placement<H> {
    pub fn is_placing(&self) -> bool {
        self.placing.is_some()
    }

    pub fn item(&self) -> Option<H> {
        self.placing
    }

    pub fn preview_yaw_deg(&self) -> f32 {
        self.preview_yaw_deg
    }

    /// Step the preview yaw. Accepted in any state; the effect is only
    /// visible while placing.
    pub fn rotate(&mut self, steps: i32) {
        self.preview_yaw_deg += steps as f32 * ROTATE_STEP_DEG;
    }

    /// Begin a session for `active_item`. Without an item in hand this is a
    /// refused no-op and the machine stays idle. The preview yaw carries
    /// over from the previous session unless `reset_rotation` is set.
    pub fn begin(&mut self, active_item: Option<H>, reset_rotation: bool) -> bool {
        let Some(item) = active_item else {
            return false;
        };
        if reset_rotation {
            self.preview_yaw_deg = 0.0;
        }
        self.placing = Some(item);
        true
    }

    /// Where the ghost should sit for this frame's probe result. `None`
    /// while idle or when the probe missed (ghost hidden).
    pub fn preview_pose(&self, hit: Option<&TraceHit<H>>) -> Option<PreviewPose> {
        if self.placing.is_none() {
            return None;
        }
        hit.map(|hit| PreviewPose {
            position: hit.point,
            yaw_deg: self.preview_yaw_deg,
        })
    }

    /// Close the session with the final probe result. A miss cancels. A hit
    /// yields the final pose, with the item's own mesh yaw taken back out
    /// of the accumulated preview yaw.
    pub fn finish(&mut self, hit: Option<&TraceHit<H>>, mesh_yaw_offset_deg: f32) -> PlaceOutcome<H> {
        let Some(item) = self.placing.take() else {
            return PlaceOutcome::Canceled;
        };
        match hit {
            Some(hit) => PlaceOutcome::Placed {
                item,
                position: hit.point,
                yaw_deg: self.preview_yaw_deg - mesh_yaw_offset_deg,
            },
            None => PlaceOutcome::Canceled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit_at(point: Vec3) -> TraceHit<u32> {
        TraceHit {
            target: 99,
            point,
            normal: Vec3::Y,
            distance: 1.0,
        }
    }

    #[test]
    fn begin_without_item_in_hand_stays_idle() {
        let mut placement: Placement<u32> = Placement::default();
        assert!(!placement.begin(None, false));
        assert!(!placement.is_placing());
    }

    #[test]
    fn preview_follows_hits_and_hides_on_miss() {
        let mut placement = Placement::default();
        placement.begin(Some(7), false);

        let pose = placement
            .preview_pose(Some(&hit_at(Vec3::new(1.0, 0.0, -2.0))))
            .unwrap();
        assert_eq!(pose.position, Vec3::new(1.0, 0.0, -2.0));
        assert_eq!(pose.yaw_deg, 0.0);

        assert!(placement.preview_pose(None).is_none());
    }

    #[test]
    fn preview_pose_is_none_while_idle() {
        let placement: Placement<u32> = Placement::default();
        assert!(placement.preview_pose(Some(&hit_at(Vec3::ZERO))).is_none());
    }

    #[test]
    fn rotate_steps_accumulate_in_both_directions() {
        let mut placement: Placement<u32> = Placement::default();
        placement.rotate(1);
        placement.rotate(1);
        placement.rotate(-1);
        assert_eq!(placement.preview_yaw_deg(), ROTATE_STEP_DEG);
    }

    #[test]
    fn finish_on_miss_cancels_and_returns_to_idle() {
        let mut placement = Placement::default();
        placement.begin(Some(7), false);

        assert_eq!(placement.finish(None, 0.0), PlaceOutcome::Canceled);
        assert!(!placement.is_placing());
    }

    #[test]
    fn finish_while_idle_is_a_cancel() {
        let mut placement: Placement<u32> = Placement::default();
        assert_eq!(
            placement.finish(Some(&hit_at(Vec3::ZERO)), 0.0),
            PlaceOutcome::Canceled
        );
    }

    #[test]
    fn finish_on_hit_places_with_mesh_yaw_removed() {
        let mut placement = Placement::default();
        placement.begin(Some(7), true);
        placement.rotate(3);

        let outcome = placement.finish(Some(&hit_at(Vec3::new(10.0, 20.0, 0.0))), 180.0);
        assert_eq!(
            outcome,
            PlaceOutcome::Placed {
                item: 7,
                position: Vec3::new(10.0, 20.0, 0.0),
                yaw_deg: 3.0 * ROTATE_STEP_DEG - 180.0,
            }
        );
        assert!(!placement.is_placing());
    }

    #[test]
    fn preview_yaw_carries_across_sessions_unless_reset() {
        let mut placement = Placement::default();
        placement.begin(Some(7), false);
        placement.rotate(2);
        placement.finish(None, 0.0);

        placement.begin(Some(8), false);
        assert_eq!(placement.preview_yaw_deg(), 2.0 * ROTATE_STEP_DEG);

        placement.begin(Some(8), true);
        assert_eq!(placement.preview_yaw_deg(), 0.0);
    }
}
