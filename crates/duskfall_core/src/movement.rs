use bevy_math::Vec3;

pub const WALK_SPEED: f32 = 6.0;
pub const MOVEMENT_FACTOR: f32 = 0.6;
pub const STRAFE_FACTOR: f32 = 0.5;

/// Camera height above the player's feet, in meters.
pub const EYE_HEIGHT: f32 = 1.7;

/// Per-frame walk intent, each axis in `[-1, 1]`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WalkInput {
    pub forward: f32,
    pub strafe: f32,
}

/// World-space displacement for one frame of walking.
///
/// The two axes are scaled independently and a diagonal is not
/// renormalized, so strafing while walking is slightly faster than
/// either alone.
pub fn walk_delta(yaw: f32, input: WalkInput, dt: f32) -> Vec3 {
    let forward = Vec3::new(-yaw.sin(), 0.0, -yaw.cos());
    let right = Vec3::new(yaw.cos(), 0.0, -yaw.sin());

    (forward * input.forward * MOVEMENT_FACTOR + right * input.strafe * STRAFE_FACTOR)
        * WALK_SPEED
        * dt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_walk_is_scaled_by_movement_factor() {
        let delta = walk_delta(
            0.0,
            WalkInput {
                forward: 1.0,
                strafe: 0.0,
            },
            1.0,
        );
        assert!((delta.z - (-WALK_SPEED * MOVEMENT_FACTOR)).abs() < 1e-6);
        assert!(delta.x.abs() < 1e-6);
        assert_eq!(delta.y, 0.0);
    }

    #[test]
    fn strafe_walk_is_scaled_by_strafe_factor() {
        let delta = walk_delta(
            0.0,
            WalkInput {
                forward: 0.0,
                strafe: 1.0,
            },
            1.0,
        );
        assert!((delta.x - WALK_SPEED * STRAFE_FACTOR).abs() < 1e-6);
        assert!(delta.z.abs() < 1e-6);
    }

    #[test]
    fn diagonal_axes_stay_independent() {
        let diagonal = walk_delta(
            0.0,
            WalkInput {
                forward: 1.0,
                strafe: 1.0,
            },
            1.0,
        );
        let forward_only = walk_delta(
            0.0,
            WalkInput {
                forward: 1.0,
                strafe: 0.0,
            },
            1.0,
        );
        let strafe_only = walk_delta(
            0.0,
            WalkInput {
                forward: 0.0,
                strafe: 1.0,
            },
            1.0,
        );
        assert!((diagonal - (forward_only + strafe_only)).length() < 1e-6);
    }

    #[test]
    fn no_input_no_motion() {
        assert_eq!(walk_delta(1.3, WalkInput::default(), 0.016), Vec3::ZERO);
    }
}
