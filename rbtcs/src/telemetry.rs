// cwrl Copyright (c) 2023 Evan Overman (https://an-prata.it).
// Licensed under the MIT License.
// See LICENSE file in repository root for complete license text.

use crate::{angle::Angle, chassis::ChassisSpeeds, orientation::DriveOrientation};
use serde::{Deserialize, Serialize};
use std::io::{self, Write};

/// Snapshot of one driver cycle for publishing.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DriverFrame {
    pub orientation: DriveOrientation,
    pub speeds: ChassisSpeeds,

    /// Heading the driver is asking for, in degrees.
    pub target_degrees: f64,

    /// Heading the drivetrain reported at the start of the cycle, in degrees.
    pub heading_degrees: f64,
}

impl DriverFrame {
    #[must_use]
    pub fn new(
        orientation: DriveOrientation,
        speeds: ChassisSpeeds,
        target: Angle,
        heading: Angle,
    ) -> Self {
        Self {
            orientation,
            speeds,
            target_degrees: target.degrees_wrapped(),
            heading_degrees: heading.degrees_wrapped(),
        }
    }
}

/// A sink for driver state. Failing to publish is reported back but must
/// never stop the robot from being driven.
pub trait Telemetry {
    fn publish(&mut self, frame: &DriverFrame) -> TelemetryResult<()>;
}

/// Discards everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullTelemetry;

impl Telemetry for NullTelemetry {
    #[inline]
    fn publish(&mut self, _frame: &DriverFrame) -> TelemetryResult<()> {
        Ok(())
    }
}

/// Writes each frame as a single line of JSON.
pub struct JsonTelemetry<W>
where
    W: Write,
{
    out: W,
}

impl<W> JsonTelemetry<W>
where
    W: Write,
{
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Gives back the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W> Telemetry for JsonTelemetry<W>
where
    W: Write,
{
    fn publish(&mut self, frame: &DriverFrame) -> TelemetryResult<()> {
        serde_json::to_writer(&mut self.out, frame)?;
        self.out.write_all(b"\n")?;
        self.out.flush()?;
        Ok(())
    }
}

impl<T> Telemetry for Box<T>
where
    T: Telemetry + ?Sized,
{
    #[inline]
    fn publish(&mut self, frame: &DriverFrame) -> TelemetryResult<()> {
        (**self).publish(frame)
    }
}

pub type TelemetryResult<T> = Result<T, TelemetryError>;

#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    #[error("telemetry write failed: {0}")]
    Io(#[from] io::Error),

    #[error("telemetry serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::{DriverFrame, JsonTelemetry, NullTelemetry, Telemetry};
    use crate::{angle::Angle, chassis::ChassisSpeeds, orientation::DriveOrientation};

    fn frame() -> DriverFrame {
        DriverFrame::new(
            DriveOrientation::RobotOriented,
            ChassisSpeeds::new(1f64, -2f64),
            Angle::from_degrees(-90f64),
            Angle::from_degrees(45f64),
        )
    }

    #[test]
    fn json_lines() {
        let mut telemetry = JsonTelemetry::new(Vec::new());

        telemetry.publish(&frame()).unwrap();
        telemetry.publish(&frame()).unwrap();

        let out = String::from_utf8(telemetry.into_inner()).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);

        let value: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(value["orientation"], "robot_oriented");
        assert_eq!(value["target_degrees"], -90f64);
        assert_eq!(value["speeds"]["vy"], -2f64);

        let parsed: DriverFrame = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(parsed, frame());
    }

    #[test]
    fn null_accepts_everything() {
        assert!(NullTelemetry.publish(&frame()).is_ok());
    }
}
