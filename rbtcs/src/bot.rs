// cwrl Copyright (c) 2023 Evan Overman (https://an-prata.it).
// Licensed under the MIT License.
// See LICENSE file in repository root for complete license text.

use crate::error::Error;
use gilrs::{EventType, GamepadId};
use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    thread, time,
};

pub type BotResult<T> = crate::error::Result<T>;

/// Manages the running of a `Bot` implementation at a fixed period and keeps
/// track of robot state and the active controller.
pub struct BotRunner<T>
where
    T: Bot,
{
    state: State,
    gilrs: gilrs::Gilrs,
    events: Vec<gilrs::Event>,
    active: Option<GamepadId>,
    period: time::Duration,
    running: Arc<AtomicBool>,
    bot: T,
}

impl<T> BotRunner<T>
where
    T: Bot,
{
    /// Creates a new `BotRunner` for running the given `Bot` implementation.
    /// The returned instance will be enabled if a gamepad is already connected
    /// and disabled otherwise, with a value of the time it was created.
    ///
    /// # Arguments
    ///
    /// * `bot` - The `Bot` to run.
    /// * `period` - Time between the starts of two cycles.
    /// * `running` - The runner stops once this is set to false.
    pub fn new(bot: T, period: time::Duration, running: Arc<AtomicBool>) -> BotResult<Self> {
        let gilrs = gilrs::Gilrs::new().map_err(|e| Error::Gamepad(e.to_string()))?;
        let active = gilrs.gamepads().next().map(|(id, gp)| {
            log::info!("using gamepad: {}", gp.name());
            id
        });

        let state = match active {
            Some(_) => State::Enabled(Some(time::Instant::now())),
            None => State::Disabled(Some(time::Instant::now())),
        };

        Ok(Self {
            state,
            gilrs,
            events: Vec::new(),
            active,
            period,
            running,
            bot,
        })
    }

    /// Runs cycles until `running` is cleared or a cycle returns an error.
    pub fn start(mut self) -> BotResult<()> {
        log::info!("running every {:?}", self.period);

        while self.running.load(Ordering::Relaxed) {
            let started = time::Instant::now();
            self.run()?;

            let elapsed = started.elapsed();

            if elapsed > self.period {
                log::warn!("cycle overran: {:?} > {:?}", elapsed, self.period);
            }

            thread::sleep(self.period.saturating_sub(elapsed));
        }

        log::info!("stopped");
        Ok(())
    }

    /// Runs the `Bot` for a single cycle. The behavior of this function
    /// changes based on the `Bot`'s `State`.
    pub fn run(&mut self) -> BotResult<()> {
        self.events.clear();

        while let Some(e) = self.gilrs.next_event() {
            self.events.push(e);
        }

        for i in 0..self.events.len() {
            let event = self.events[i];

            match event.event {
                EventType::Connected => {
                    log::info!("gamepad connected: {}", self.gilrs.gamepad(event.id).name())
                }
                EventType::Disconnected if self.active == Some(event.id) => {
                    log::warn!("active gamepad disconnected")
                }
                _ => (),
            }

            let (next, active) = track_active(self.state, self.active, event.id, &event.event);
            self.active = active;

            if !next.same_variant(&self.state) {
                self.set_state(next);
            }
        }

        self.bot.run_base(self.state)?;

        match (self.state, self.active) {
            (State::Enabled(_), Some(id)) => self
                .bot
                .run_enabled(self.gilrs.gamepad(id), self.events.as_slice()),
            _ => self.bot.run_disabled(),
        }
    }

    /// Sets the `Bot`'s state to the given, and if the given `State` has a
    /// parameter of `None` populates it with the current time.
    pub fn set_state(&mut self, state: State) {
        let now_if_none = |t| match t {
            Some(_) => t,
            None => Some(time::Instant::now()),
        };

        self.state = match state {
            State::Enabled(t) => State::Enabled(now_if_none(t)),
            State::Disabled(t) => State::Disabled(now_if_none(t)),
        };

        log::info!("bot state: {}", self.state.name());
    }
}

/// Gets the state and active gamepad after an event from gamepad `id`. A
/// newly connected gamepad takes control, only the active gamepad
/// disconnecting disables the bot. `I` is a gilrs `GamepadId` in practice.
#[must_use]
pub fn track_active<I>(
    state: State,
    active: Option<I>,
    id: I,
    event: &EventType,
) -> (State, Option<I>)
where
    I: Copy + PartialEq,
{
    match event {
        EventType::Connected => (state.after(event), Some(id)),
        EventType::Disconnected if active == Some(id) => (state.after(event), None),
        _ => (state, active),
    }
}

/// Represents the custom struct that holds the custom code for running a bot.
/// All default implementations of function simply do nothing.
pub trait Bot {
    /// Always runs, before the state specific function.
    ///
    /// # Arguments
    ///
    /// * `state` - The `Bot`'s current state with a value of the time that
    /// state was set.
    fn run_base(&mut self, _state: State) -> BotResult<()> {
        Ok(())
    }

    /// Fully operational state, under driver control.
    ///
    /// # Arguments
    ///
    /// * `gamepad` - The active controller, for reading axes.
    /// * `events` - Gilrs events from this cycle, for button presses.
    fn run_enabled(
        &mut self,
        _gamepad: gilrs::Gamepad<'_>,
        _events: &[gilrs::Event],
    ) -> BotResult<()> {
        Ok(())
    }

    /// No controller is connected, should hold the robot still.
    fn run_disabled(&mut self) -> BotResult<()> {
        Ok(())
    }
}

/// Represents a potential state of a `Bot` instance. All variants hold a value
/// of `Option<time::Instant>` which will be populated with
/// `Some(time::Instant::now())` once they are used to set the state of a `Bot`
/// instance.
#[derive(Clone, Copy, Debug)]
pub enum State {
    /// A controller is connected and the bot is under driver control.
    Enabled(Option<time::Instant>),

    /// No controller, the drivetrain is held still.
    Disabled(Option<time::Instant>),
}

impl State {
    /// Gets the state a runner should move to after seeing the given event
    /// from the active controller.
    #[must_use]
    pub fn after(self, event: &EventType) -> Self {
        match event {
            EventType::Connected => match self {
                Self::Enabled(_) => self,
                Self::Disabled(_) => Self::Enabled(None),
            },
            EventType::Disconnected => match self {
                Self::Enabled(_) => Self::Disabled(None),
                Self::Disabled(_) => self,
            },
            _ => self,
        }
    }

    #[inline]
    #[must_use]
    pub fn same_variant(&self, other: &Self) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Enabled(_) => "enabled",
            Self::Disabled(_) => "disabled",
        }
    }
}
