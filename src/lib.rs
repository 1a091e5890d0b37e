//! # manifest-funcs
//!
//! Utility functions invoked during manifest compilation: deterministic
//! seeded randomness, numeric rounding, string length validation, and
//! URI escaping.
//!
//! Every function is pure and synchronous. Arguments arrive as [`Value`]s
//! the way the compiler marshals them, and failures come back as
//! [`Error`]s naming the offending function and the violated constraint.
//!
//! ```
//! use manifest_funcs::{seeded_rand, Value};
//!
//! let args = [Value::Int(3600), Value::from("$fqdn:web01.example.com:apt")];
//! let splay = seeded_rand(&args).unwrap();
//!
//! // The same seed draws the same value on every compilation.
//! assert_eq!(seeded_rand(&args).unwrap(), splay);
//! ```

mod error;
mod functions;
mod seed;
mod value;

pub use error::{Error, ErrorKind, Result};
pub use functions::{
    call, fqdn_rand, names, round, seeded_rand, uri_escape, validate_length, FQDN_SEED_MARKER,
};
pub use seed::{deterministic_rand_int, seed_from_str};
pub use value::Value;
