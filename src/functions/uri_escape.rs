//! Percent-encoding of URI text.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::error::{Error, Result};
use crate::value::Value;

/// Bytes escaped when encoding URI text.
///
/// Everything outside ASCII alphanumerics is escaped except the
/// unreserved marks and the reserved delimiters, which must survive so
/// that already-structured URIs keep their shape. Non-ASCII input is
/// escaped bytewise through its UTF-8 encoding.
const URI_UNSAFE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b';')
    .remove(b'/')
    .remove(b'?')
    .remove(b':')
    .remove(b'@')
    .remove(b'&')
    .remove(b'=')
    .remove(b'+')
    .remove(b'$')
    .remove(b',')
    .remove(b'[')
    .remove(b']');

/// Percent-encodes a string, or maps percent-encoding over an array.
///
/// Array elements that are not strings are passed through unchanged, in
/// their original positions. Arguments after the first are ignored.
pub fn uri_escape(args: &[Value]) -> Result<Value> {
    const NAME: &str = "uri_escape";

    if args.is_empty() {
        return Err(Error::ArgumentCount {
            function: NAME,
            given: 0,
            expected: "1",
        });
    }

    match &args[0] {
        Value::Str(text) => Ok(Value::Str(escape(text))),
        Value::Array(items) => Ok(Value::Array(
            items
                .iter()
                .map(|item| match item {
                    Value::Str(text) => Value::Str(escape(text)),
                    other => other.clone(),
                })
                .collect(),
        )),
        other => Err(Error::TypeMismatch {
            function: NAME,
            position: 1,
            expected: "a string or an array",
            actual: other.type_name(),
        }),
    }
}

fn escape(text: &str) -> String {
    utf8_percent_encode(text, URI_UNSAFE).to_string()
}
