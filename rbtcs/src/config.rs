// cwrl Copyright (c) 2023 Evan Overman (https://an-prata.it).
// Licensed under the MIT License.
// See LICENSE file in repository root for complete license text.

//! Configuration loaded from a TOML file. Every section and field has a
//! default, so an empty file (or no file at all) gives the values the robot
//! was tuned with.

use crate::{error::Result, heading::HeadingTracker, orientation::DriveOrientation};
use serde::{Deserialize, Serialize};
use std::{f64::consts::TAU, fs, path::Path, time};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub driver: DriverConfig,
    pub sim: SimConfig,
    pub runner: RunnerConfig,
    pub telemetry: TelemetryConfig,
}

/// Settings for turning stick readings into drive commands.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DriverConfig {
    /// Velocity in meters per second of a full stick deflection.
    pub max_speed: f64,

    /// Either axis of the rotation stick must pass this to change heading.
    pub rotation_deadband: f64,

    /// Orientation the driver starts in.
    pub orientation: DriveOrientation,
}

/// Settings for the simulated drivetrain.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Radians per second at full heading controller output.
    pub max_angular_speed: f64,

    /// Heading controller output per degree of error.
    pub heading_kp: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunnerConfig {
    /// Length of one control cycle in milliseconds.
    pub period_ms: u64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TelemetryConfig {
    /// Where to write telemetry: `none`, `stdout`, or a file path.
    pub output: String,
}

impl Config {
    /// Reads and parses the TOML file at `path`.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Parses a configuration from a TOML string.
    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            max_speed: 5f64,
            rotation_deadband: HeadingTracker::DEFAULT_DEADBAND,
            orientation: DriveOrientation::FieldOriented,
        }
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            // 30% of five turns per second.
            max_angular_speed: 5f64 * TAU * 0.3f64,
            heading_kp: 0.045f64,
        }
    }
}

impl RunnerConfig {
    #[inline]
    #[must_use]
    pub fn period(&self) -> time::Duration {
        time::Duration::from_millis(self.period_ms)
    }
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self { period_ms: 20 }
    }
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            output: String::from("stdout"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Config;
    use crate::{error::Error, orientation::DriveOrientation};
    use std::time;

    #[test]
    fn empty_is_default() {
        let config = Config::from_toml("").unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.driver.max_speed, 5f64);
        assert_eq!(config.driver.rotation_deadband, 0.75f64);
        assert_eq!(config.driver.orientation, DriveOrientation::FieldOriented);
        assert_eq!(config.runner.period(), time::Duration::from_millis(20));
        assert_eq!(config.telemetry.output, "stdout");
    }

    #[test]
    fn partial_sections() {
        let config = Config::from_toml(
            r#"
            [driver]
            max_speed = 3.5
            orientation = "robot_oriented"

            [runner]
            period_ms = 10
            "#,
        )
        .unwrap();

        assert_eq!(config.driver.max_speed, 3.5f64);
        assert_eq!(config.driver.rotation_deadband, 0.75f64);
        assert_eq!(config.driver.orientation, DriveOrientation::RobotOriented);
        assert_eq!(config.runner.period_ms, 10);
        assert_eq!(config.sim, Default::default());
    }

    #[test]
    fn rejects_bad_orientation() {
        let result = Config::from_toml("[driver]\norientation = \"sideways\"\n");
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn missing_file() {
        let result = Config::from_file("/nonexistent/swrv.toml");
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
