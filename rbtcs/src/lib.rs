// cwrl Copyright (c) 2023 Evan Overman (https://an-prata.it).
// Licensed under the MIT License.
// See LICENSE file in repository root for complete license text.

pub mod angle;
pub mod bot;
pub mod chassis;
pub mod config;
pub mod driver;
pub mod drivetrain;
pub mod error;
pub mod heading;
pub mod input;
pub mod orientation;
pub mod telemetry;
