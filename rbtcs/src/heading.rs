// cwrl Copyright (c) 2023 Evan Overman (https://an-prata.it).
// Licensed under the MIT License.
// See LICENSE file in repository root for complete license text.

use crate::{angle::Angle, input::Vector2};

/// Turns a rotation stick position into the heading the robot should face.
/// The stick's angle is taken with `atan2(y, x)`, turned a quarter turn, and
/// negated so that the direction the stick points matches the robot's heading
/// convention for the controller layout this was calibrated against.
#[inline]
#[must_use]
pub fn joystick_heading(x: f64, y: f64) -> Angle {
    -Angle::from_point(x, y).rotate_by(Angle::from_degrees(90f64))
}

/// Keeps track of the heading the driver last pointed the rotation stick at.
/// Readings inside the deadband are ignored and the previous heading is held,
/// so letting the stick spring back to center does not turn the robot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeadingTracker {
    /// Last heading accepted from the stick.
    previous: Angle,

    /// An axis must exceed this absolute value for a reading to count.
    deadband: f64,
}

impl HeadingTracker {
    /// Deadband used by the default controller configuration.
    pub const DEFAULT_DEADBAND: f64 = 0.75;

    /// Creates a tracker holding a heading of zero.
    #[must_use]
    pub fn new(deadband: f64) -> Self {
        Self {
            previous: Angle::ZERO,
            deadband,
        }
    }

    /// Gets the heading currently held.
    #[inline]
    #[must_use]
    pub fn target(&self) -> Angle {
        self.previous
    }

    /// Absolute axis value a reading must exceed to change the heading.
    #[inline]
    #[must_use]
    pub fn deadband(&self) -> f64 {
        self.deadband
    }

    /// A reading is significant when either axis on its own is past the
    /// deadband, this is not a test of the stick's distance from center.
    #[inline]
    #[must_use]
    pub fn is_significant(&self, stick: Vector2) -> bool {
        stick.x.abs() > self.deadband || stick.y.abs() > self.deadband
    }

    /// Takes a rotation stick reading and returns the target heading. If the
    /// reading is significant the heading it points at is stored and returned,
    /// otherwise the stored heading is returned unchanged.
    pub fn update(&mut self, stick: Vector2) -> Angle {
        if !self.is_significant(stick) {
            return self.previous;
        }

        let target = joystick_heading(stick.x, stick.y);

        if target != self.previous {
            log::debug!("target heading: {}", target);
        }

        self.previous = target;
        target
    }
}

impl Default for HeadingTracker {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DEADBAND)
    }
}
