//! Exact rational arithmetic for durations
//!
//! A duration is always a fraction of one whole note. `Rational` wraps
//! `num_rational::Ratio<i64>` so reduction and sign normalization are carried
//! by the backing type, and adds the fallible constructor the score model
//! needs: a zero denominator is a configuration error, never a panic.
//!
//! Invariant: every value handed out by this module is already reduced
//! (gcd(numerator, denominator) == 1) with a positive denominator.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use num_rational::Ratio;
use serde::{Deserialize, Serialize};

use crate::errors::ScoreError;

/// A duration expressed as an exact fraction of one whole note
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rational(Ratio<i64>);

impl Rational {
    /// Create a rational, failing on a zero denominator
    pub fn new(numerator: i64, denominator: i64) -> Result<Self, ScoreError> {
        if denominator == 0 {
            return Err(ScoreError::configuration(format!(
                "rational {numerator}/0 has a zero denominator"
            )));
        }
        Ok(Rational(Ratio::new(numerator, denominator)))
    }

    /// A whole number of whole notes
    pub fn from_integer(value: i64) -> Self {
        Rational(Ratio::from_integer(value))
    }

    /// Construction from literal parts known to be well-formed
    pub(crate) fn new_unchecked(numerator: i64, denominator: i64) -> Self {
        debug_assert!(denominator != 0);
        Rational(Ratio::new(numerator, denominator))
    }

    /// Zero whole notes
    pub fn zero() -> Self {
        Rational(Ratio::from_integer(0))
    }

    pub fn numerator(&self) -> i64 {
        *self.0.numer()
    }

    pub fn denominator(&self) -> i64 {
        *self.0.denom()
    }

    pub fn is_zero(&self) -> bool {
        self.numerator() == 0
    }

    pub fn is_negative(&self) -> bool {
        self.numerator() < 0
    }

    /// Reduce to lowest terms with the sign on the numerator.
    ///
    /// `Ratio` keeps values reduced through arithmetic already; this exists so
    /// callers holding raw parts can normalize explicitly, and it is the
    /// identity on any value produced by this module.
    pub fn rationalise(self) -> Self {
        Rational(self.0.reduced())
    }

    /// Exact multiplicative inverse; fails on zero
    pub fn reciprocal(self) -> Result<Self, ScoreError> {
        if self.is_zero() {
            return Err(ScoreError::configuration("reciprocal of zero duration"));
        }
        Ok(Rational(self.0.recip()))
    }
}

impl Add for Rational {
    type Output = Rational;

    fn add(self, other: Rational) -> Rational {
        Rational(self.0 + other.0)
    }
}

impl Sub for Rational {
    type Output = Rational;

    fn sub(self, other: Rational) -> Rational {
        Rational(self.0 - other.0)
    }
}

impl Mul for Rational {
    type Output = Rational;

    fn mul(self, other: Rational) -> Rational {
        Rational(self.0 * other.0)
    }
}

impl Neg for Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        Rational(-self.0)
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Rational) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rational {
    fn cmp(&self, other: &Rational) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator(), self.denominator())
    }
}

// Serialized as a {numerator, denominator} pair so snapshots stay readable
#[derive(Serialize, Deserialize)]
struct RationalRepr {
    numerator: i64,
    denominator: i64,
}

impl Serialize for Rational {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        RationalRepr {
            numerator: self.numerator(),
            denominator: self.denominator(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Rational {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = RationalRepr::deserialize(deserializer)?;
        Rational::new(repr.numerator, repr.denominator).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(n: i64, d: i64) -> Rational {
        Rational::new(n, d).unwrap()
    }

    #[test]
    fn test_new_reduces() {
        let v = r(4, 8);
        assert_eq!(v.numerator(), 1);
        assert_eq!(v.denominator(), 2);
    }

    #[test]
    fn test_new_normalizes_sign() {
        let v = r(1, -2);
        assert_eq!(v.numerator(), -1);
        assert_eq!(v.denominator(), 2);
    }

    #[test]
    fn test_zero_denominator_fails() {
        assert!(matches!(
            Rational::new(1, 0),
            Err(ScoreError::Configuration { .. })
        ));
    }

    #[test]
    fn test_arithmetic_stays_reduced() {
        let sum = r(1, 4) + r(1, 4);
        assert_eq!((sum.numerator(), sum.denominator()), (1, 2));

        let diff = r(7, 16) - r(3, 16);
        assert_eq!((diff.numerator(), diff.denominator()), (1, 4));

        let prod = r(2, 3) * r(3, 4);
        assert_eq!((prod.numerator(), prod.denominator()), (1, 2));
    }

    #[test]
    fn test_ordering() {
        assert!(r(1, 4) < r(3, 8));
        assert!(r(1, 2) > r(3, 8));
        assert_eq!(r(2, 4), r(1, 2));
    }

    #[test]
    fn test_rationalise_is_identity_on_reduced() {
        let v = r(3, 8);
        assert_eq!(v.rationalise(), v);
    }

    #[test]
    fn test_reciprocal() {
        assert_eq!(r(3, 8).reciprocal().unwrap(), r(8, 3));
        assert!(Rational::zero().reciprocal().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(r(3, 8).to_string(), "3/8");
    }
}
