//! Stateless arithmetic over [`Number`].
//!
//! Every function validates, computes, and returns; nothing here touches a
//! history store. The recording variants live on
//! [`Calculator`](crate::Calculator).

use core_types::{CalcError, Number};

/// Adds two numbers. Never fails for numeric input.
pub fn add(a: Number, b: Number) -> Result<Number, CalcError> {
    Ok(a + b)
}

/// Subtracts `b` from `a`. Never fails for numeric input.
pub fn subtract(a: Number, b: Number) -> Result<Number, CalcError> {
    Ok(a - b)
}

/// Multiplies two numbers, tracing the computation before and after.
pub fn multiply(a: Number, b: Number) -> Result<Number, CalcError> {
    tracing::debug!("Multiplying {} x {}", a, b);
    let result = a * b;
    tracing::debug!("Result: {}", result);
    Ok(result)
}

/// Divides `a` by `b`, always producing a float quotient.
///
/// A divisor of exactly zero (integer or float) is rejected before any
/// computation.
pub fn divide(a: Number, b: Number) -> Result<Number, CalcError> {
    if b.is_zero() {
        return Err(CalcError::DivisionByZero(a));
    }
    tracing::debug!("Dividing {} ÷ {}", a, b);
    let result = Number::Float(a.as_f64() / b.as_f64());
    tracing::debug!("Result: {}", result);
    Ok(result)
}

/// Raises `a` to the power of `b`.
///
/// `exponent_limit` is the integer-exponent guard: two integer operands with
/// an exponent above the limit are rejected as overflow before any
/// computation is attempted. A non-finite float result is rejected after.
pub fn power(a: Number, b: Number, exponent_limit: i64) -> Result<Number, CalcError> {
    if let (Number::Int(_), Number::Int(exp)) = (a, b) {
        if exp > 0 && exp > exponent_limit {
            return Err(CalcError::Overflow);
        }
    }

    let result = match (a, b) {
        (Number::Int(base), Number::Int(exp)) if exp >= 0 => {
            match u32::try_from(exp).ok().and_then(|e| base.checked_pow(e)) {
                Some(value) => Number::Int(value),
                // Too big for an i64: carry on in floats.
                None => Number::Float((base as f64).powf(exp as f64)),
            }
        }
        _ => Number::Float(a.as_f64().powf(b.as_f64())),
    };

    if !result.is_finite() {
        return Err(CalcError::Overflow);
    }
    Ok(result)
}

/// Takes the square root of `a` via the one-half power.
///
/// Negative operands are a domain error; the result is always a float.
pub fn sqrt(a: Number) -> Result<Number, CalcError> {
    if a.is_negative() {
        return Err(CalcError::NegativeSqrt(a));
    }
    Ok(Number::Float(a.as_f64().powf(0.5)))
}
