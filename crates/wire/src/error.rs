// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors raised while decoding a response payload.
///
/// Each variant corresponds to one structural invariant of the response
/// schema; the payload is rejected at decode time, never patched up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The payload was not well-formed JSON.
    MalformedJson {
        /// The parser's description of the failure.
        message: String,
    },
    /// The payload was valid JSON but not an object.
    NotAnObject,
    /// A retired legacy field appeared in the payload.
    ForbiddenField {
        /// The offending field name.
        field: String,
    },
    /// A field outside the documented schema appeared in the payload.
    UnexpectedField {
        /// The offending field name.
        field: String,
    },
    /// A required field was missing or null.
    MissingField {
        /// The missing field name.
        field: &'static str,
    },
    /// A field carried a JSON type the schema does not allow.
    FieldType {
        /// The offending field name.
        field: &'static str,
        /// The JSON type the schema expects.
        expected: &'static str,
    },
    /// A field carried the literal text "null" instead of JSON null.
    LiteralNullString {
        /// The offending field name.
        field: &'static str,
    },
    /// The status field was present but empty.
    EmptyStatus,
    /// The status field was not one of GREEN, YELLOW, or RED.
    InvalidStatus {
        /// The value received.
        value: String,
    },
    /// The code field carried flag bits outside the documented set.
    UnknownCodeBits {
        /// The raw wire value.
        bits: u64,
    },
    /// The photo field was not valid base64.
    InvalidPhoto {
        /// The decoder's description of the failure.
        message: String,
    },
    /// The expiration date could not be parsed.
    InvalidDate {
        /// The value received.
        value: String,
    },
}

impl std::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedJson { message } => {
                write!(f, "Payload is not well-formed JSON: {message}")
            }
            Self::NotAnObject => write!(f, "Payload must be a JSON object"),
            Self::ForbiddenField { field } => {
                write!(
                    f,
                    "Retired field '{field}' appeared in the payload; the schema no longer carries it"
                )
            }
            Self::UnexpectedField { field } => {
                write!(f, "Field '{field}' is not part of the response schema")
            }
            Self::MissingField { field } => {
                write!(f, "Required field '{field}' is missing")
            }
            Self::FieldType { field, expected } => {
                write!(f, "Field '{field}' must be a JSON {expected}")
            }
            Self::LiteralNullString { field } => {
                write!(
                    f,
                    "Field '{field}' carries the literal text \"null\" instead of JSON null"
                )
            }
            Self::EmptyStatus => write!(f, "Status field must be non-empty"),
            Self::InvalidStatus { value } => {
                write!(f, "Status '{value}' is not GREEN, YELLOW, or RED")
            }
            Self::UnknownCodeBits { bits } => {
                write!(f, "Code {bits} carries flag bits outside the documented set")
            }
            Self::InvalidPhoto { message } => {
                write!(f, "Photo field is not valid base64: {message}")
            }
            Self::InvalidDate { value } => {
                write!(f, "Expiration date '{value}' could not be parsed")
            }
        }
    }
}

impl std::error::Error for DecodeError {}
