//! Rounding to the nearest integer.

use crate::error::{Error, Result};
use crate::value::Value;

const NAME: &str = "round";

/// Rounds a number to the nearest integer, with halves rounding away
/// from zero.
///
/// Integers pass through unchanged. Floats whose rounded value does not
/// fit a signed 64-bit integer are rejected, as are NaN and the
/// infinities.
pub fn round(args: &[Value]) -> Result<Value> {
    if args.len() != 1 {
        return Err(Error::ArgumentCount {
            function: NAME,
            given: args.len(),
            expected: "1",
        });
    }

    match &args[0] {
        Value::Int(n) => Ok(Value::Int(*n)),
        Value::Float(x) => round_float(*x),
        other => Err(Error::TypeMismatch {
            function: NAME,
            position: 1,
            expected: "a number",
            actual: other.type_name(),
        }),
    }
}

fn round_float(x: f64) -> Result<Value> {
    if !x.is_finite() {
        return Err(Error::ArgumentInvalid {
            function: NAME,
            message: format!("cannot round {x}, expected a finite number"),
        });
    }

    let rounded = if x >= 0.0 {
        (x + 0.5).floor()
    } else {
        (x - 0.5).ceil()
    };

    // 2^63 is exactly representable; i64::MAX is not, so compare against
    // the cast bound before truncating.
    if rounded < i64::MIN as f64 || rounded >= i64::MAX as f64 {
        return Err(Error::ArgumentInvalid {
            function: NAME,
            message: format!("{x} rounds outside the 64-bit integer range"),
        });
    }

    Ok(Value::Int(rounded as i64))
}
