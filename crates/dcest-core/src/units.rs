//! Unit newtypes for power quantities used by the estimators.
//!
//! Prevents mixing incompatible units like MW and MVA. Load figures, equipment
//! capacities, and derived load splits all flow through these wrappers so that
//! a transformer rating (MVA) can never be added to an IT load (MW) without an
//! explicit power-factor conversion.
//!
//! # Zero Runtime Overhead
//!
//! Both types use `#[repr(transparent)]` ensuring they have the same memory
//! layout as `f64`. The compiler optimizes away all wrapper overhead.
//!
//! # Usage
//!
//! ```
//! use dcest_core::units::{Megawatts, MegavoltAmperes};
//!
//! let it_load = Megawatts(5.0);
//! let rating = MegavoltAmperes(3.0);
//!
//! // MVA capacity converts to usable MW through a power factor
//! let usable = rating.active_power(0.95);
//! let sections = (it_load / usable).ceil();
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Macro to implement common arithmetic operations for unit types
macro_rules! impl_unit_ops {
    ($type:ty, $unit_name:literal) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Neg for $type {
            type Output = Self;
            fn neg(self) -> Self::Output {
                Self(-self.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Mul<$type> for f64 {
            type Output = $type;
            fn mul(self, rhs: $type) -> Self::Output {
                <$type>::new(self * rhs.0)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl Div<$type> for $type {
            type Output = f64;
            fn div(self, rhs: $type) -> Self::Output {
                self.0 / rhs.0
            }
        }

        impl std::fmt::Display for $type {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{:.2} {}", self.0, $unit_name)
            }
        }

        impl $type {
            /// Create a new value
            #[inline]
            pub const fn new(value: f64) -> Self {
                Self(value)
            }

            /// Get the raw numeric value
            #[inline]
            pub const fn value(self) -> f64 {
                self.0
            }

            /// Check if value is finite
            #[inline]
            pub fn is_finite(self) -> bool {
                self.0.is_finite()
            }

            /// Minimum of two values
            #[inline]
            pub fn min(self, other: Self) -> Self {
                Self(self.0.min(other.0))
            }

            /// Maximum of two values
            #[inline]
            pub fn max(self, other: Self) -> Self {
                Self(self.0.max(other.0))
            }
        }

        impl std::iter::Sum for $type {
            fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
                Self(iter.map(|x| x.0).sum())
            }
        }

        impl<'a> std::iter::Sum<&'a $type> for $type {
            fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
                Self(iter.map(|x| x.0).sum())
            }
        }
    };
}

/// Active power in megawatts (MW)
///
/// Active power represents the real component of power that does actual work.
/// All load figures (IT, mechanical, house) and bus-section capacities are MW.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Megawatts(pub f64);

impl_unit_ops!(Megawatts, "MW");

/// Apparent power in megavolt-amperes (MVA)
///
/// Apparent power is the nameplate rating of transformers and PDUs. It relates
/// to active power through the power factor: P = S × pf.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct MegavoltAmperes(pub f64);

impl_unit_ops!(MegavoltAmperes, "MVA");

impl MegavoltAmperes {
    /// Extract usable active power given power factor: P = S × pf
    #[inline]
    pub fn active_power(self, power_factor: f64) -> Megawatts {
        Megawatts(self.0 * power_factor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_megawatts_arithmetic() {
        let a = Megawatts(5.0);
        let b = Megawatts(2.5);
        assert_eq!((a + b).value(), 7.5);
        assert_eq!((a - b).value(), 2.5);
        assert_eq!((a * 2.0).value(), 10.0);
        assert_eq!(a / b, 2.0);
    }

    #[test]
    fn test_active_power_conversion() {
        let rating = MegavoltAmperes(3.0);
        let usable = rating.active_power(0.95);
        assert!((usable.value() - 2.85).abs() < 1e-12);
    }

    #[test]
    fn test_sum_over_iterator() {
        let loads = [Megawatts(5.0), Megawatts(2.0), Megawatts(0.5)];
        let total: Megawatts = loads.iter().sum();
        assert!((total.value() - 7.5).abs() < 1e-12);
    }

    #[test]
    fn test_display() {
        assert_eq!(Megawatts(7.8).to_string(), "7.80 MW");
        assert_eq!(MegavoltAmperes(0.3).to_string(), "0.30 MVA");
    }

    #[test]
    fn test_serde_transparent() {
        let json = serde_json::to_string(&Megawatts(5.0)).unwrap();
        assert_eq!(json, "5.0");
        let back: Megawatts = serde_json::from_str("5.0").unwrap();
        assert_eq!(back, Megawatts(5.0));
    }
}
