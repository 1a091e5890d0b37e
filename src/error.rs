//! Error types shared by every manifest function.

use thiserror::Error;

/// Main error type for manifest function invocations.
///
/// Every failure is raised synchronously at the point of detection and
/// propagates straight back to the invoking compiler; there is no local
/// recovery or partial result. Messages name the function, the argument
/// position or value, and the violated constraint, so the author of the
/// manifest being compiled can act on them.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Wrong number of arguments for the function
    #[error("{function}(): wrong number of arguments given ({given} for {expected})")]
    ArgumentCount {
        /// Name of the function that was invoked
        function: &'static str,
        /// Number of arguments actually supplied
        given: usize,
        /// Accepted arity, e.g. "1", "2 or 3", "at least 2"
        expected: &'static str,
    },

    /// Argument of the wrong kind entirely
    #[error("{function}(): expected argument {position} to be {expected}, got {actual}")]
    TypeMismatch {
        /// Name of the function that was invoked
        function: &'static str,
        /// One-based position of the offending argument
        position: usize,
        /// Description of the accepted kind, e.g. "a number"
        expected: &'static str,
        /// Type name of the value that was supplied
        actual: &'static str,
    },

    /// Array element of the wrong kind
    #[error("{function}(): expected element at array position {index} to be a string, got {actual}")]
    ElementTypeMismatch {
        /// Name of the function that was invoked
        function: &'static str,
        /// Zero-based index of the offending element
        index: usize,
        /// Type name of the element that was supplied
        actual: &'static str,
    },

    /// Argument of the right kind but with an unusable value
    #[error("{function}(): {message}")]
    ArgumentInvalid {
        /// Name of the function that was invoked
        function: &'static str,
        /// Constraint that the value failed, including the value itself
        message: String,
    },

    /// Semantic check failed on otherwise well-formed input
    #[error("{function}(): expected length of {subject} to be between {min} and {max}, was {length}")]
    ValidationFailed {
        /// Name of the function that was invoked
        function: &'static str,
        /// Rendering of the offending value
        subject: String,
        /// Inclusive lower bound of the accepted range
        min: i64,
        /// Inclusive upper bound of the accepted range
        max: i64,
        /// Actual length of the offending value, in characters
        length: usize,
    },

    /// No function is registered under the requested name
    #[error("unknown function {name:?}")]
    UnknownFunction {
        /// Name the caller asked for
        name: String,
    },
}

/// Coarse classification of an [`Error`], independent of its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Wrong number of arguments
    ArgumentCount,
    /// Argument or element of the wrong kind
    TypeMismatch,
    /// Right kind, out-of-range or malformed value
    ArgumentInvalid,
    /// Semantic validation failed
    ValidationFailed,
    /// Dispatch to a name with no registered function
    UnknownFunction,
}

impl Error {
    /// Returns the kind tag for this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::ArgumentCount { .. } => ErrorKind::ArgumentCount,
            Error::TypeMismatch { .. } | Error::ElementTypeMismatch { .. } => {
                ErrorKind::TypeMismatch
            }
            Error::ArgumentInvalid { .. } => ErrorKind::ArgumentInvalid,
            Error::ValidationFailed { .. } => ErrorKind::ValidationFailed,
            Error::UnknownFunction { .. } => ErrorKind::UnknownFunction,
        }
    }
}

/// Specialized `Result` type for manifest function invocations.
pub type Result<T> = std::result::Result<T, Error>;
