use std::fmt;
use std::ops::{Add, Mul, Sub};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CalcError;

/// A numeric operand or result.
///
/// Operations accept integers and floats interchangeably. Integer arithmetic
/// stays integral as long as it fits in an `i64` and carries on in floats
/// otherwise, so additions, subtractions and multiplications of valid numbers
/// never fail.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    /// Returns the value as an `f64`. Integers above 2^53 lose precision.
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Int(i) => *i as f64,
            Number::Float(f) => *f,
        }
    }

    /// Whether the value is strictly negative.
    pub fn is_negative(&self) -> bool {
        match self {
            Number::Int(i) => *i < 0,
            Number::Float(f) => *f < 0.0,
        }
    }

    /// Whether the value is exactly zero.
    pub fn is_zero(&self) -> bool {
        match self {
            Number::Int(i) => *i == 0,
            Number::Float(f) => *f == 0.0,
        }
    }

    /// Whether the value is finite. Integers always are.
    pub fn is_finite(&self) -> bool {
        match self {
            Number::Int(_) => true,
            Number::Float(f) => f.is_finite(),
        }
    }
}

impl fmt::Display for Number {
    /// Integers render bare; floats always carry a decimal point (`5.0`, not
    /// `5`), which is what the recorded expression texts rely on.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(i) => write!(f, "{}", i),
            Number::Float(x) => write!(f, "{:?}", x),
        }
    }
}

impl FromStr for Number {
    type Err = CalcError;

    /// Parses an integer first, then a float. Anything else is the
    /// non-numeric error class; this is the boundary where untyped operand
    /// text enters the system.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(i) = trimmed.parse::<i64>() {
            return Ok(Number::Int(i));
        }
        if let Ok(f) = trimmed.parse::<f64>() {
            return Ok(Number::Float(f));
        }
        Err(CalcError::NonNumeric(s.to_string()))
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Int(value)
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Number::Int(value as i64)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

impl Add for Number {
    type Output = Number;

    fn add(self, rhs: Number) -> Number {
        match (self, rhs) {
            (Number::Int(a), Number::Int(b)) => a
                .checked_add(b)
                .map(Number::Int)
                .unwrap_or(Number::Float(a as f64 + b as f64)),
            _ => Number::Float(self.as_f64() + rhs.as_f64()),
        }
    }
}

impl Sub for Number {
    type Output = Number;

    fn sub(self, rhs: Number) -> Number {
        match (self, rhs) {
            (Number::Int(a), Number::Int(b)) => a
                .checked_sub(b)
                .map(Number::Int)
                .unwrap_or(Number::Float(a as f64 - b as f64)),
            _ => Number::Float(self.as_f64() - rhs.as_f64()),
        }
    }
}

impl Mul for Number {
    type Output = Number;

    fn mul(self, rhs: Number) -> Number {
        match (self, rhs) {
            (Number::Int(a), Number::Int(b)) => a
                .checked_mul(b)
                .map(Number::Int)
                .unwrap_or(Number::Float(a as f64 * b as f64)),
            _ => Number::Float(self.as_f64() * rhs.as_f64()),
        }
    }
}
