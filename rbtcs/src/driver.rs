// cwrl Copyright (c) 2023 Evan Overman (https://an-prata.it).
// Licensed under the MIT License.
// See LICENSE file in repository root for complete license text.

use crate::{
    angle::Angle,
    chassis::ChassisSpeeds,
    config::DriverConfig,
    drivetrain::Drivetrain,
    heading::HeadingTracker,
    input::VectorSource,
    orientation::DriveOrientation,
    telemetry::{DriverFrame, Telemetry},
};

/// Maps two sticks to swerve drive commands. The translation stick sets the
/// chassis velocity, in either the field's or the robot's frame, and the
/// rotation stick points at the heading the robot should face. The heading
/// is held once the rotation stick is released.
pub struct SwerveDriveDriver<T, R>
where
    T: VectorSource,
    R: VectorSource,
{
    translation: T,
    rotation: R,
    orientation: DriveOrientation,
    tracker: HeadingTracker,
    max_speed: f64,
}

impl<T, R> SwerveDriveDriver<T, R>
where
    T: VectorSource,
    R: VectorSource,
{
    /// Creates a new driver polling the given sources once per cycle.
    ///
    /// # Arguments
    ///
    /// * `translation` - Stick for strafing and driving forward.
    /// * `rotation` - Stick that points in the direction to face.
    /// * `config` - Speed, deadband, and starting orientation.
    pub fn new(translation: T, rotation: R, config: &DriverConfig) -> Self {
        Self {
            translation,
            rotation,
            orientation: config.orientation,
            tracker: HeadingTracker::new(config.rotation_deadband),
            max_speed: config.max_speed,
        }
    }

    /// Frame translation input is currently interpreted in.
    #[inline]
    #[must_use]
    pub fn orientation(&self) -> DriveOrientation {
        self.orientation
    }

    /// The heading most recently accepted from the rotation stick.
    #[inline]
    #[must_use]
    pub fn target_heading(&self) -> Angle {
        self.tracker.target()
    }

    /// Switches between field and robot oriented driving.
    pub fn toggle_orientation(&mut self) {
        self.orientation.toggle();
        log::info!("drive orientation: {:?}", self.orientation);
    }

    /// Runs one control cycle: reads both sticks, resolves the chassis speeds
    /// against the drivetrain's current heading, publishes the result to
    /// `telemetry`, and drives. A failure to publish is logged and otherwise
    /// ignored.
    pub fn apply<D, M>(&mut self, drivetrain: &mut D, telemetry: &mut M)
    where
        D: Drivetrain,
        M: Telemetry,
    {
        let heading = drivetrain.heading();
        let speeds = self.target_speeds(heading);
        let target = self.target_direction();

        let frame = DriverFrame::new(self.orientation, speeds, target, heading);

        if let Err(e) = telemetry.publish(&frame) {
            log::warn!("{}", e);
        }

        drivetrain.drive(speeds, target);
    }

    fn target_speeds(&mut self, heading: Angle) -> ChassisSpeeds {
        self.orientation
            .resolve(self.translation.read(), heading, self.max_speed)
    }

    fn target_direction(&mut self) -> Angle {
        self.tracker.update(self.rotation.read())
    }
}
