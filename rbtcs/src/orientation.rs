// cwrl Copyright (c) 2023 Evan Overman (https://an-prata.it).
// Licensed under the MIT License.
// See LICENSE file in repository root for complete license text.

use crate::{
    angle::Angle,
    chassis::{denormalize_linear_velocity, ChassisSpeeds},
    input::Vector2,
};
use serde::{Deserialize, Serialize};

/// Represents a drive orientation, namely the frame of reference translation
/// input is interpreted in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DriveOrientation {
    /// Translation is relative to the field, pushing the stick forward moves
    /// the robot away from the driver no matter which way it faces.
    #[default]
    FieldOriented,

    /// Translation is relative to the robot's own front.
    RobotOriented,
}

impl DriveOrientation {
    /// Gets the other orientation.
    #[inline]
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::FieldOriented => Self::RobotOriented,
            Self::RobotOriented => Self::FieldOriented,
        }
    }

    /// Switches to the other orientation in place.
    #[inline]
    pub fn toggle(&mut self) {
        *self = self.toggled();
    }

    /// Creates `ChassisSpeeds` from a translation stick reading in this
    /// orientation. The stick's first axis gives `vy` and its second gives
    /// `vx`, both scaled by `max_speed`.
    ///
    /// # Arguments
    ///
    /// * `translation` - Reading of the translation stick.
    /// * `heading` - Current heading of the robot, only used when field
    /// oriented.
    /// * `max_speed` - Velocity that a full stick deflection maps to.
    #[must_use]
    pub fn resolve(self, translation: Vector2, heading: Angle, max_speed: f64) -> ChassisSpeeds {
        let vx = denormalize_linear_velocity(translation.y, max_speed);
        let vy = denormalize_linear_velocity(translation.x, max_speed);

        match self {
            Self::FieldOriented => ChassisSpeeds::from_robot_relative(vx, vy, heading),
            Self::RobotOriented => ChassisSpeeds::new(vx, vy),
        }
    }
}
