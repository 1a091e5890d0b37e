//! Length validation for strings and collections of strings.

use crate::error::{Error, Result};
use crate::value::Value;

const NAME: &str = "validate_length";

/// Checks that a string, or every string in an array, has a length inside
/// an inclusive range.
///
/// Takes the value under test, the maximum length, and an optional minimum
/// length which defaults to zero. Bounds may arrive as integers, decimal
/// strings, or floats; floats are truncated toward zero. Lengths are
/// counted in characters, not bytes.
///
/// For arrays, every element is type-checked before any length check runs,
/// so a stray non-string is always reported ahead of a length violation.
/// Succeeds with no value of consequence.
pub fn validate_length(args: &[Value]) -> Result<Value> {
    if args.len() < 2 || args.len() > 3 {
        return Err(Error::ArgumentCount {
            function: NAME,
            given: args.len(),
            expected: "2 or 3",
        });
    }

    let max = numeric_bound(&args[1], "second")?;
    let min = match args.get(2) {
        Some(value) => numeric_bound(value, "third")?,
        None => 0,
    };

    if max <= 0 {
        return Err(Error::ArgumentInvalid {
            function: NAME,
            message: format!("maximum length must be a positive integer, got {max}"),
        });
    }
    if min < 0 {
        return Err(Error::ArgumentInvalid {
            function: NAME,
            message: format!("minimum length must not be negative, got {min}"),
        });
    }
    if max < min {
        return Err(Error::ArgumentInvalid {
            function: NAME,
            message: format!("maximum length {max} is below minimum length {min}"),
        });
    }

    match &args[0] {
        Value::Str(subject) => {
            check_length(subject, min, max)?;
            Ok(Value::Undef)
        }
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                if !matches!(item, Value::Str(_)) {
                    return Err(Error::ElementTypeMismatch {
                        function: NAME,
                        index,
                        actual: item.type_name(),
                    });
                }
            }
            for item in items {
                if let Value::Str(subject) = item {
                    check_length(subject, min, max)?;
                }
            }
            Ok(Value::Undef)
        }
        other => Err(Error::TypeMismatch {
            function: NAME,
            position: 1,
            expected: "a string or an array",
            actual: other.type_name(),
        }),
    }
}

fn numeric_bound(value: &Value, position: &str) -> Result<i64> {
    value
        .to_integer_truncating()
        .ok_or_else(|| Error::ArgumentInvalid {
            function: NAME,
            message: format!("{position} argument must be a number, got {value}"),
        })
}

fn check_length(subject: &str, min: i64, max: i64) -> Result<()> {
    let length = subject.chars().count();
    if (length as i64) < min || (length as i64) > max {
        return Err(Error::ValidationFailed {
            function: NAME,
            subject: format!("{subject:?}"),
            min,
            max,
            length,
        });
    }
    Ok(())
}
