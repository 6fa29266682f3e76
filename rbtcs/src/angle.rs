// cwrl Copyright (c) 2023 Evan Overman (https://an-prata.it).
// Licensed under the MIT License.
// See LICENSE file in repository root for complete license text.

use aprox_eq::AproxEq;
use serde::{Deserialize, Serialize};
use std::{
    f64::consts::TAU,
    fmt::{self, Display, Formatter},
    ops::{Add, Neg, Sub},
};

/// Represents an angle that can be converted or interperented in multiple
/// measurements. Angles do not preserve the number of turns, meaning that a
/// 365 degree angle will be turned into a 5 degree angle. The `Angle` struct
/// will however preserve direction, -90 degrees and 90 degrees are considered
/// distinct. Positive angles are counter clockwise.
#[derive(Clone, Debug, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Angle {
    /// The fraction of a circle that this angle represents, all other
    /// measurements are derrived by converting this value, which is kept
    /// between -1 and 1 to reduce floating point error.
    pub fraction: f64,
}

impl Angle {
    /// Largest difference, as a fraction of a turn, at which two angles are
    /// still considered aproximately equal.
    const MAX_ERR: f64 = 1e-9;

    /// An angle of zero, the canonical "forward" heading.
    pub const ZERO: Self = Self { fraction: 0f64 };

    /// Creates a new angle given radians.
    pub fn from_radians(radians: f64) -> Self {
        Angle {
            fraction: (radians / TAU) % 1f64,
        }
    }

    /// Creates a new angle given degrees.
    pub fn from_degrees(degrees: f64) -> Self {
        Angle {
            fraction: (degrees / 360_f64) % 1f64,
        }
    }

    /// Creates a new angle given a point. The angle that will be produced is
    /// the angle between the positive x axis and the ray from the origin to
    /// the point, as given by `atan2(y, x)`.
    pub fn from_point(x: f64, y: f64) -> Self {
        Self::from_radians(f64::atan2(y, x))
    }

    /// Gets the radian representation of the angle.
    pub fn radians(&self) -> f64 {
        self.fraction * TAU
    }

    /// Gets the degree representation of the angle.
    pub fn degrees(&self) -> f64 {
        self.fraction * 360f64
    }

    /// Gets the degree representation wrapped into (-180, 180].
    #[must_use]
    pub fn degrees_wrapped(&self) -> f64 {
        let degrees = Angle::ZERO.shortest_to(*self).degrees();

        // Adding zero turns -0 into 0.
        if degrees <= -180f64 {
            degrees + 360f64
        } else {
            degrees + 0f64
        }
    }

    #[inline]
    pub fn sin(&self) -> f64 {
        f64::sin(self.radians())
    }

    #[inline]
    pub fn cos(&self) -> f64 {
        f64::cos(self.radians())
    }

    /// Composes this angle with another, the same as turning by `self` and
    /// then by `other`.
    #[inline]
    #[must_use]
    pub fn rotate_by(self, other: Angle) -> Self {
        self + other
    }

    /// Gets the signed shortest turn from `self` to `other`, always within
    /// half a turn in either direction.
    #[must_use]
    pub fn shortest_to(self, other: Angle) -> Self {
        let diff = (other.fraction - self.fraction) % 1f64;

        Angle {
            fraction: diff - diff.round(),
        }
    }
}

impl Add<Angle> for Angle {
    type Output = Self;

    fn add(self, other: Angle) -> Self {
        Angle {
            fraction: (self.fraction + other.fraction) % 1f64,
        }
    }
}

impl Sub<Angle> for Angle {
    type Output = Self;

    fn sub(self, other: Angle) -> Self {
        Angle {
            fraction: (self.fraction - other.fraction) % 1f64,
        }
    }
}

impl Neg for Angle {
    type Output = Self;

    fn neg(self) -> Self {
        Angle {
            fraction: -self.fraction,
        }
    }
}

impl AproxEq for Angle {
    /// Angles are compared as directions, so 270 degrees and -90 degrees are
    /// aproximately equal.
    fn aprox_eq(&self, other: &Self) -> bool {
        self.shortest_to(*other).fraction.abs() < Self::MAX_ERR
    }
}

impl Display for Angle {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}° / {}π / {}τ",
            self.degrees(),
            self.fraction * 2f64,
            self.fraction
        )
    }
}

#[cfg(test)]
mod tests {
    use super::Angle;
    use aprox_eq::{assert_aprox_eq, assert_aprox_ne};
    use std::f64::consts::PI;

    #[test]
    pub fn conversions() {
        let vals = [
            (0f64, 0f64, 0f64),
            (90f64, PI / 2f64, 0.25f64),
            (180f64, PI, 0.5f64),
            (270f64, PI * 1.5f64, 0.75f64),
        ];

        for (deg, rad, dec) in vals {
            let ang_deg = Angle::from_degrees(deg);
            let ang_rad = Angle::from_radians(rad);
            let ang_dec = Angle { fraction: dec };

            assert_aprox_eq!(ang_deg, ang_rad);
            assert_aprox_eq!(ang_rad, ang_dec);
            assert_aprox_eq!(ang_dec, ang_deg);
        }
    }

    #[test]
    pub fn single_rotation() {
        let angles = [
            Angle::from_radians(PI * 3f64),
            Angle::from_degrees(361f64),
            Angle::from_degrees(-721f64),
            Angle::from_point(1f64, 2f64),
            Angle::from_point(0f64, 0f64),
        ];

        for a in angles {
            assert!(a.fraction < 1f64);
            assert!(a.fraction > -1f64);
        }
    }

    #[test]
    pub fn equal_across_turns() {
        assert_aprox_eq!(Angle::from_degrees(270f64), Angle::from_degrees(-90f64));
        assert_aprox_eq!(Angle::from_degrees(-180f64), Angle::from_degrees(180f64));
        assert_aprox_ne!(Angle::from_degrees(90f64), Angle::from_degrees(-90f64));
    }

    #[test]
    pub fn rotate_and_negate() {
        let a = Angle::from_degrees(30f64).rotate_by(Angle::from_degrees(90f64));
        assert_aprox_eq!(a, Angle::from_degrees(120f64));
        assert_aprox_eq!(-a, Angle::from_degrees(-120f64));
        assert_aprox_eq!(-(-a), a);
    }

    #[test]
    pub fn shortest_to() {
        let from = Angle::from_degrees(350f64);
        let to = Angle::from_degrees(10f64);

        assert!((from.shortest_to(to).degrees() - 20f64).abs() < 1e-9);
        assert!((to.shortest_to(from).degrees() + 20f64).abs() < 1e-9);
        assert!(from.shortest_to(from).degrees().abs() < 1e-9);
    }

    #[test]
    pub fn from_point_quadrants() {
        assert_aprox_eq!(Angle::from_point(1f64, 0f64), Angle::ZERO);
        assert_aprox_eq!(Angle::from_point(0f64, 1f64), Angle::from_degrees(90f64));
        assert_aprox_eq!(Angle::from_point(-1f64, 0f64), Angle::from_degrees(180f64));
        assert_aprox_eq!(Angle::from_point(0f64, -1f64), Angle::from_degrees(-90f64));
    }

    #[test]
    pub fn degrees_wrapped() {
        assert_aprox_eq!(Angle::from_degrees(-270f64).degrees_wrapped(), 90f64);
        assert_aprox_eq!(Angle::from_degrees(270f64).degrees_wrapped(), -90f64);
        assert_aprox_eq!(Angle::from_degrees(180f64).degrees_wrapped(), 180f64);
        assert_aprox_eq!(Angle::from_degrees(-180f64).degrees_wrapped(), 180f64);
        assert_aprox_eq!(Angle::from_degrees(45f64).degrees_wrapped(), 45f64);

        let zero = Angle::from_degrees(-0f64).degrees_wrapped();
        assert_eq!(zero, 0f64);
        assert!(zero.is_sign_positive());
    }
}
