// cwrl Copyright (c) 2023 Evan Overman (https://an-prata.it).
// Licensed under the MIT License.
// See LICENSE file in repository root for complete license text.

use crate::{angle::Angle, chassis::ChassisSpeeds, config::SimConfig};
use std::time;

/// The actuator side of the drive. Implementors are responsible for turning a
/// chassis velocity and target heading into module angles and wheel speeds
/// and for closing the loop on the heading.
pub trait Drivetrain {
    /// Current measured heading of the robot.
    fn heading(&self) -> Angle;

    /// Drive at the given chassis velocity while turning to face `heading`.
    fn drive(&mut self, speeds: ChassisSpeeds, heading: Angle);

    /// Stop translating and keep facing the current heading.
    fn hold(&mut self) {
        let heading = self.heading();
        self.drive(ChassisSpeeds::ZERO, heading);
    }
}

/// A drivetrain with no hardware that turns its heading toward the commanded
/// target with a proportional controller, for running the driver without a
/// robot attached. Translation is only recorded.
#[derive(Debug)]
pub struct SimDrivetrain {
    heading: Angle,
    speeds: ChassisSpeeds,
    target: Angle,

    /// Angular speed at full controller output, in radians per second.
    max_angular_speed: f64,

    /// Controller output per degree of heading error.
    kp: f64,

    /// Time assumed to pass between calls to `drive()`.
    period: time::Duration,
}

impl SimDrivetrain {
    #[must_use]
    pub fn new(config: &SimConfig, period: time::Duration) -> Self {
        Self {
            heading: Angle::ZERO,
            speeds: ChassisSpeeds::ZERO,
            target: Angle::ZERO,
            max_angular_speed: config.max_angular_speed,
            kp: config.heading_kp,
            period,
        }
    }

    /// Last speeds commanded.
    #[inline]
    #[must_use]
    pub fn speeds(&self) -> ChassisSpeeds {
        self.speeds
    }

    /// Last heading commanded.
    #[inline]
    #[must_use]
    pub fn target(&self) -> Angle {
        self.target
    }
}

impl Drivetrain for SimDrivetrain {
    fn heading(&self) -> Angle {
        self.heading
    }

    fn drive(&mut self, speeds: ChassisSpeeds, heading: Angle) {
        self.speeds = speeds;
        self.target = heading;

        let error = self.heading.shortest_to(heading).degrees();
        let output = (error * self.kp).clamp(-1f64, 1f64);
        let step = output * self.max_angular_speed * self.period.as_secs_f64();

        // Never step past the target.
        let step = if step.abs() > error.to_radians().abs() {
            error.to_radians()
        } else {
            step
        };

        self.heading = self.heading + Angle::from_radians(step);
    }
}
