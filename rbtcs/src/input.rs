// cwrl Copyright (c) 2023 Evan Overman (https://an-prata.it).
// Licensed under the MIT License.
// See LICENSE file in repository root for complete license text.

use serde::{Deserialize, Serialize};

/// A single reading of a joystick's two axes. Each component is expected to be
/// between -1 and 1 but this is not enforced, values outside that range are
/// passed along as is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector2 {
    /// The first axis, side to side on a stick.
    pub x: f64,

    /// The second axis, forward and back on a stick.
    pub y: f64,
}

impl Vector2 {
    /// A centered stick.
    pub const ZERO: Self = Self { x: 0f64, y: 0f64 };

    #[inline]
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Vector2 {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Something that can be polled once per cycle for a joystick reading. Any
/// `FnMut() -> Vector2` closure is a source, so a driver may simply be handed
/// closures over whatever holds the controller state.
pub trait VectorSource {
    fn read(&mut self) -> Vector2;
}

impl<F> VectorSource for F
where
    F: FnMut() -> Vector2,
{
    #[inline]
    fn read(&mut self) -> Vector2 {
        self()
    }
}

#[cfg(test)]
mod tests {
    use super::{Vector2, VectorSource};

    #[test]
    fn closure_source() {
        let mut calls = 0;
        let mut source = || {
            calls += 1;
            Vector2::new(0.5f64, -0.5f64)
        };

        assert_eq!(source.read(), Vector2::new(0.5f64, -0.5f64));
        assert_eq!(source.read(), (0.5f64, -0.5f64).into());
        drop(source);
        assert_eq!(calls, 2);
    }
}
