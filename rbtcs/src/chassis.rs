// cwrl Copyright (c) 2023 Evan Overman (https://an-prata.it).
// Licensed under the MIT License.
// See LICENSE file in repository root for complete license text.

use crate::angle::Angle;
use aprox_eq::AproxEq;
use serde::{Deserialize, Serialize};

/// Scales a joystick axis value, nominally between -1 and 1, to a linear
/// velocity in meters per second. Values are not clamped, so an axis reading
/// of 1.2 will give a velocity 20% over `max_speed`.
///
/// # Arguments
///
/// * `value` - Axis value, between -1 and 1.
/// * `max_speed` - Velocity that a full axis deflection maps to.
#[inline]
#[must_use]
pub fn denormalize_linear_velocity(value: f64, max_speed: f64) -> f64 {
    value * max_speed
}

/// Translational velocity of the whole chassis. Whether this is relative to
/// the robot or to the field depends on where it came from, a drivetrain
/// always receives it in whichever frame the driver resolved it to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ChassisSpeeds {
    /// Forward velocity in meters per second.
    pub vx: f64,

    /// Leftward velocity in meters per second.
    pub vy: f64,
}

impl ChassisSpeeds {
    /// Tolerance for aproximate equality in meters per second.
    const MAX_ERR: f64 = 1e-9;

    /// No motion.
    pub const ZERO: Self = Self { vx: 0f64, vy: 0f64 };

    #[inline]
    #[must_use]
    pub fn new(vx: f64, vy: f64) -> Self {
        Self { vx, vy }
    }

    /// Takes speeds expressed in the robot's frame of reference and returns
    /// the same motion in the field's frame, given the robot's heading on the
    /// field. This rotates the velocity vector by `heading`.
    ///
    /// # Arguments
    ///
    /// * `vx` - Forward velocity relative to the robot.
    /// * `vy` - Leftward velocity relative to the robot.
    /// * `heading` - Current heading of the robot on the field.
    #[must_use]
    pub fn from_robot_relative(vx: f64, vy: f64, heading: Angle) -> Self {
        let (sin, cos) = (heading.sin(), heading.cos());

        Self {
            vx: vx * cos - vy * sin,
            vy: vx * sin + vy * cos,
        }
    }

    /// Magnitude of the velocity vector.
    #[inline]
    #[must_use]
    pub fn speed(&self) -> f64 {
        f64::hypot(self.vx, self.vy)
    }
}

impl AproxEq for ChassisSpeeds {
    fn aprox_eq(&self, other: &Self) -> bool {
        (self.vx - other.vx).abs() < Self::MAX_ERR && (self.vy - other.vy).abs() < Self::MAX_ERR
    }
}

#[cfg(test)]
mod tests {
    use super::{denormalize_linear_velocity, ChassisSpeeds};
    use crate::angle::Angle;
    use aprox_eq::{assert_aprox_eq, assert_aprox_ne};

    const MAX_SPEED: f64 = 5f64;
    const MAX_ERR: f64 = 1e-9;

    #[test]
    fn denormalize_endpoints() {
        assert_eq!(denormalize_linear_velocity(0f64, MAX_SPEED), 0f64);
        assert_eq!(denormalize_linear_velocity(1f64, MAX_SPEED), MAX_SPEED);
        assert_eq!(denormalize_linear_velocity(-1f64, MAX_SPEED), -MAX_SPEED);
    }

    #[test]
    fn denormalize_linear() {
        let mut a = -1f64;

        while a <= 1f64 {
            let mut b = -1f64;

            while b <= 1f64 {
                let sum = denormalize_linear_velocity(a + b, MAX_SPEED);
                let parts = denormalize_linear_velocity(a, MAX_SPEED)
                    + denormalize_linear_velocity(b, MAX_SPEED);

                assert!((sum - parts).abs() < MAX_ERR);
                assert!(
                    (denormalize_linear_velocity(3f64 * a, MAX_SPEED)
                        - 3f64 * denormalize_linear_velocity(a, MAX_SPEED))
                    .abs()
                        < MAX_ERR
                );

                b += 0.1;
            }

            a += 0.1;
        }
    }

    #[test]
    fn denormalize_does_not_clamp() {
        assert!((denormalize_linear_velocity(1.5f64, MAX_SPEED) - 7.5f64).abs() < MAX_ERR);
        assert!((denormalize_linear_velocity(-2f64, MAX_SPEED) + 10f64).abs() < MAX_ERR);
    }

    #[test]
    fn robot_relative_at_zero_heading() {
        let speeds = ChassisSpeeds::from_robot_relative(3f64, -2f64, Angle::ZERO);
        assert_aprox_eq!(speeds, ChassisSpeeds::new(3f64, -2f64));
    }

    #[test]
    fn robot_relative_rotates_by_heading() {
        let forward = ChassisSpeeds::from_robot_relative(MAX_SPEED, 0f64, Angle::from_degrees(90f64));
        assert_aprox_eq!(forward, ChassisSpeeds::new(0f64, MAX_SPEED));

        let left = ChassisSpeeds::from_robot_relative(0f64, MAX_SPEED, Angle::from_degrees(90f64));
        assert_aprox_eq!(left, ChassisSpeeds::new(-MAX_SPEED, 0f64));

        assert_aprox_ne!(forward, left);
    }

    #[test]
    fn rotation_keeps_speed() {
        let mut deg = -360f64;

        while deg <= 360f64 {
            let speeds = ChassisSpeeds::from_robot_relative(3f64, 4f64, Angle::from_degrees(deg));
            assert!((speeds.speed() - 5f64).abs() < MAX_ERR);
            deg += 15f64;
        }
    }
}
