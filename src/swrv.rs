// cwrl Copyright (c) 2023 Evan Overman (https://an-prata.it).
// Licensed under the MIT License.
// See LICENSE file in repository root for complete license text.

use gilrs::{Axis, Button};
use rbtcs::{
    bot,
    config::{Config, TelemetryConfig},
    driver::SwerveDriveDriver,
    drivetrain::{Drivetrain, SimDrivetrain},
    error,
    input::Vector2,
    telemetry::{JsonTelemetry, NullTelemetry, Telemetry},
};
use std::{cell::Cell, fs, io, rc::Rc};

/// Unwraps a gilrs `Option<&AxisData>` to an `f64` or default.
macro_rules! unwrap_axis {
    ($axis:expr) => {
        $axis.map(|a| a.value()).unwrap_or_default() as f64
    };
}

type StickFn = Box<dyn FnMut() -> Vector2>;

/// Both sticks as read at the start of a cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct Sticks {
    left: Vector2,
    right: Vector2,
}

impl Sticks {
    /// Converts raw gilrs axes, where pushing a stick forward or right reads
    /// positive, to the driver's conventions. Translation is `(leftward,
    /// forward)` so its x is flipped. The heading mapping expects forward to
    /// read negative on the rotation stick so its y is flipped.
    fn from_axes(left_x: f64, left_y: f64, right_x: f64, right_y: f64) -> Self {
        Self {
            left: Vector2::new(-left_x, left_y),
            right: Vector2::new(right_x, -right_y),
        }
    }
}

/// True if a press of `button` from gamepad `id` should switch drive
/// orientation while `active` is the gamepad in control.
fn is_orientation_toggle<I: PartialEq>(active: I, id: I, button: Option<Button>) -> bool {
    id == active && button == Some(Button::RightThumb)
}

/// Swerve robot driven from a single gamepad: left stick translates, right
/// stick points the heading, clicking the right stick switches between field
/// and robot oriented driving.
pub struct Swrv {
    sticks: Rc<Cell<Sticks>>,
    driver: SwerveDriveDriver<StickFn, StickFn>,
    drivetrain: SimDrivetrain,
    telemetry: Box<dyn Telemetry>,
}

impl Swrv {
    pub fn new(config: &Config) -> error::Result<Self> {
        let sticks = Rc::new(Cell::new(Sticks::default()));
        let (left, right) = (Rc::clone(&sticks), Rc::clone(&sticks));

        log::info!(
            "max speed {} m/s, deadband {}, starting {:?}",
            config.driver.max_speed,
            config.driver.rotation_deadband,
            config.driver.orientation
        );

        Ok(Self {
            driver: SwerveDriveDriver::new(
                Box::new(move || left.get().left) as StickFn,
                Box::new(move || right.get().right) as StickFn,
                &config.driver,
            ),
            sticks,
            drivetrain: SimDrivetrain::new(&config.sim, config.runner.period()),
            telemetry: open_telemetry(&config.telemetry)?,
        })
    }
}

fn open_telemetry(config: &TelemetryConfig) -> error::Result<Box<dyn Telemetry>> {
    let telemetry: Box<dyn Telemetry> = match config.output.as_str() {
        "none" => Box::new(NullTelemetry),
        "stdout" => Box::new(JsonTelemetry::new(io::stdout())),
        path => {
            log::info!("writing telemetry to {}", path);
            Box::new(JsonTelemetry::new(io::BufWriter::new(fs::File::create(
                path,
            )?)))
        }
    };

    Ok(telemetry)
}

impl bot::Bot for Swrv {
    fn run_enabled(
        &mut self,
        gamepad: gilrs::Gamepad<'_>,
        events: &[gilrs::Event],
    ) -> bot::BotResult<()> {
        for event in events {
            let pressed = match event.event {
                gilrs::EventType::ButtonPressed(b, _) => Some(b),
                _ => None,
            };

            if is_orientation_toggle(gamepad.id(), event.id, pressed) {
                self.driver.toggle_orientation();
            }
        }

        self.sticks.set(Sticks::from_axes(
            unwrap_axis!(gamepad.axis_data(Axis::LeftStickX)),
            unwrap_axis!(gamepad.axis_data(Axis::LeftStickY)),
            unwrap_axis!(gamepad.axis_data(Axis::RightStickX)),
            unwrap_axis!(gamepad.axis_data(Axis::RightStickY)),
        ));

        self.driver.apply(&mut self.drivetrain, &mut self.telemetry);
        Ok(())
    }

    fn run_disabled(&mut self) -> bot::BotResult<()> {
        self.sticks.set(Sticks::default());
        self.drivetrain.hold();
        Ok(())
    }
}
