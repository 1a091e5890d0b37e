//! The functions exposed to manifest authors.
//!
//! Each function lives in its own module, takes a positional argument
//! slice the way the compiler delivers it, and validates arity and types
//! at its entry point before computing anything. [`call`] is the by-name
//! dispatch used by the compiler; the typed functions are also exported
//! directly for embedding.

mod random;
mod round;
mod uri_escape;
mod validate_length;

pub use random::{fqdn_rand, seeded_rand, FQDN_SEED_MARKER};
pub use round::round;
pub use uri_escape::uri_escape;
pub use validate_length::validate_length;

use crate::error::{Error, Result};
use crate::value::Value;

/// Names of every registered function, in sorted order.
pub fn names() -> &'static [&'static str] {
    &["fqdn_rand", "round", "seeded_rand", "uri_escape", "validate_length"]
}

/// Invokes a registered function by name.
///
/// ```
/// use manifest_funcs::{call, Value};
///
/// assert_eq!(call("round", &[Value::Float(2.9)]).unwrap(), Value::Int(3));
/// ```
pub fn call(name: &str, args: &[Value]) -> Result<Value> {
    match name {
        "fqdn_rand" => fqdn_rand(args),
        "round" => round(args),
        "seeded_rand" => seeded_rand(args),
        "uri_escape" => uri_escape(args),
        "validate_length" => validate_length(args),
        _ => Err(Error::UnknownFunction {
            name: name.to_string(),
        }),
    }
}
