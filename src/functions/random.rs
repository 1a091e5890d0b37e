//! Reproducible random integers.
//!
//! Both functions here answer the same need: a value that looks random but
//! never changes between compilations, so that catalogs stay stable. They
//! share one derivation core and differ only in how the seed string is
//! assembled.

use crate::error::{Error, Result};
use crate::seed::{deterministic_rand_int, seed_from_str};
use crate::value::Value;

/// Prefix marking a seed string as host-derived.
///
/// [`seeded_rand`] strips this marker before hashing, so a seed of
/// `"$fqdn:web01:ntp"` draws the same value as `fqdn_rand` called with
/// `"web01"` and `"ntp"`.
pub const FQDN_SEED_MARKER: &str = "$fqdn:";

/// Draws a reproducible integer in `0..max` from a seed string.
///
/// Takes exactly two arguments: the exclusive upper bound (a positive
/// integer, or a string holding one) and the seed. Equal seeds always
/// produce equal results.
///
/// ```
/// use manifest_funcs::{seeded_rand, Value};
///
/// let first = seeded_rand(&[Value::Int(1000), Value::from("fb49")]).unwrap();
/// let again = seeded_rand(&[Value::Int(1000), Value::from("fb49")]).unwrap();
/// assert_eq!(first, again);
/// ```
pub fn seeded_rand(args: &[Value]) -> Result<Value> {
    const NAME: &str = "seeded_rand";

    if args.len() != 2 {
        return Err(Error::ArgumentCount {
            function: NAME,
            given: args.len(),
            expected: "2",
        });
    }

    let max = positive_bound(NAME, &args[0])?;
    let seed = match args[1].as_str() {
        Some(seed) => seed,
        None => {
            return Err(Error::ArgumentInvalid {
                function: NAME,
                message: format!(
                    "second argument must be a string, got {}",
                    args[1].type_name()
                ),
            })
        }
    };

    let material = seed.strip_prefix(FQDN_SEED_MARKER).unwrap_or(seed);
    Ok(draw(material, max))
}

/// Draws a reproducible integer in `0..max` keyed to a host name.
///
/// Takes the exclusive upper bound followed by the host name and any
/// number of extra discriminator strings. Different discriminators give
/// the same host independent draws, so two scheduled jobs keyed to one
/// machine do not land on the same minute.
pub fn fqdn_rand(args: &[Value]) -> Result<Value> {
    const NAME: &str = "fqdn_rand";

    if args.len() < 2 {
        return Err(Error::ArgumentCount {
            function: NAME,
            given: args.len(),
            expected: "at least 2",
        });
    }

    let max = positive_bound(NAME, &args[0])?;
    let mut terms = Vec::with_capacity(args.len() - 1);
    for (index, arg) in args.iter().enumerate().skip(1) {
        match arg.as_str() {
            Some(term) => terms.push(term),
            None => {
                return Err(Error::ArgumentInvalid {
                    function: NAME,
                    message: format!(
                        "argument {} must be a string, got {}",
                        index + 1,
                        arg.type_name()
                    ),
                })
            }
        }
    }

    Ok(draw(&terms.join(":"), max))
}

/// Validates the exclusive upper bound shared by both functions.
fn positive_bound(function: &'static str, value: &Value) -> Result<u64> {
    match value.to_integer() {
        Some(max) if max > 0 => Ok(max as u64),
        _ => Err(Error::ArgumentInvalid {
            function,
            message: format!("first argument must be a positive integer, got {value}"),
        }),
    }
}

fn draw(material: &str, max: u64) -> Value {
    // max came from a positive i64, so the draw fits back into one.
    Value::Int(deterministic_rand_int(seed_from_str(material), max) as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int(n: i64) -> Value {
        Value::Int(n)
    }

    fn string(s: &str) -> Value {
        Value::from(s)
    }

    /// Test that equal seeds always draw the same value.
    #[test]
    fn seeded_rand_is_deterministic() {
        let first = seeded_rand(&[int(1000), string("deploy-ring")]).unwrap();
        for _ in 0..5 {
            assert_eq!(seeded_rand(&[int(1000), string("deploy-ring")]).unwrap(), first);
        }
    }

    /// Test that draws land inside the half-open range.
    #[test]
    fn seeded_rand_respects_the_bound() {
        for max in [1i64, 2, 3, 30, 1000] {
            for seed in ["", "a", "web01.example.com", "one"] {
                match seeded_rand(&[int(max), string(seed)]).unwrap() {
                    Value::Int(drawn) => {
                        assert!((0..max).contains(&drawn), "{drawn} outside 0..{max}")
                    }
                    other => panic!("expected an integer, got {other}"),
                }
            }
        }
    }

    /// Test that the bound may arrive as a decimal string.
    #[test]
    fn seeded_rand_accepts_a_string_bound() {
        let from_int = seeded_rand(&[int(100), string("x")]).unwrap();
        let from_str = seeded_rand(&[string("100"), string("x")]).unwrap();
        assert_eq!(from_int, from_str);
    }

    /// Test that zero, negative, and fractional bounds are refused.
    #[test]
    fn seeded_rand_refuses_bad_bounds() {
        for bound in [
            int(0),
            int(-5),
            Value::Float(10.5),
            string("ten"),
            string("+30"),
            Value::Undef,
        ] {
            let result = seeded_rand(&[bound, string("x")]);
            assert!(matches!(
                result,
                Err(Error::ArgumentInvalid { function: "seeded_rand", .. })
            ));
        }
    }

    /// Test that a non-string seed is refused.
    #[test]
    fn seeded_rand_refuses_non_string_seeds() {
        for seed in [int(5), Value::Bool(true), Value::Array(vec![]), Value::Undef] {
            let result = seeded_rand(&[int(10), seed]);
            assert!(matches!(result, Err(Error::ArgumentInvalid { .. })));
        }
    }

    /// Test the argument count errors for both functions.
    #[test]
    fn argument_counts_are_enforced() {
        assert!(matches!(
            seeded_rand(&[int(10)]),
            Err(Error::ArgumentCount { function: "seeded_rand", given: 1, expected: "2" })
        ));
        assert!(matches!(
            seeded_rand(&[int(10), string("x"), string("y")]),
            Err(Error::ArgumentCount { given: 3, .. })
        ));
        assert!(matches!(
            fqdn_rand(&[int(10)]),
            Err(Error::ArgumentCount { function: "fqdn_rand", given: 1, expected: "at least 2" })
        ));
    }

    /// Test that the marker prefix routes through the host derivation.
    #[test]
    fn marker_seeds_match_fqdn_rand() {
        let via_marker =
            seeded_rand(&[int(3600), string("$fqdn:web01.example.com:ntp")]).unwrap();
        let via_fqdn =
            fqdn_rand(&[int(3600), string("web01.example.com"), string("ntp")]).unwrap();
        assert_eq!(via_marker, via_fqdn);

        // Without the marker the same text is an ordinary seed.
        let plain = seeded_rand(&[int(3600), string("web01.example.com:ntp")]).unwrap();
        assert_eq!(via_marker, plain);
    }

    /// Test that a marker with nothing after it hashes the empty string.
    #[test]
    fn bare_marker_seeds_hash_the_empty_remainder() {
        assert_eq!(
            seeded_rand(&[int(97), string("$fqdn:")]),
            seeded_rand(&[int(97), string("")])
        );
    }

    /// Test the wrappers against their fixed draws; these exact values are
    /// contractual across releases.
    #[test]
    fn wrappers_draw_pinned_values() {
        assert_eq!(seeded_rand(&[int(1000), string("abc")]), Ok(Value::Int(991)));
        assert_eq!(fqdn_rand(&[int(1000), string("abc")]), Ok(Value::Int(991)));
        assert_eq!(
            seeded_rand(&[int(3600), string("$fqdn:web01.example.com:ntp")]),
            Ok(Value::Int(2356))
        );
        assert_eq!(
            fqdn_rand(&[int(3600), string("web01.example.com"), string("ntp")]),
            Ok(Value::Int(2356))
        );
    }

    /// Test that extra discriminators change the draw.
    #[test]
    fn discriminators_give_independent_draws() {
        let base = fqdn_rand(&[int(i64::MAX), string("host")]).unwrap();
        let keyed = fqdn_rand(&[int(i64::MAX), string("host"), string("job")]).unwrap();
        assert_ne!(base, keyed);
    }

    /// Test that non-string discriminators are refused with their position.
    #[test]
    fn fqdn_rand_refuses_non_string_terms() {
        let result = fqdn_rand(&[int(10), string("host"), int(3)]);
        match result {
            Err(Error::ArgumentInvalid { function, message }) => {
                assert_eq!(function, "fqdn_rand");
                assert!(message.contains("argument 3"), "message was {message:?}");
            }
            other => panic!("expected ArgumentInvalid, got {other:?}"),
        }
    }
}
