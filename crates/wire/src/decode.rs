// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Response payload decoding.
//!
//! Schema invariants are enforced here, at decode time. The schema has
//! churned before (a `Reason` string came and went, null fields were
//! once stringified), so the decoder pins one versioned shape: exactly
//! the documented keys, true nulls, and a required integer `Code`.

use crate::error::DecodeError;
use crate::response::ScanResponse;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use maxcheck_domain::{ResponseCode, ScanStatus};
use serde_json::{Map, Value};
use std::str::FromStr;
use time::format_description::well_known::Iso8601;
use time::{Date, OffsetDateTime, PrimitiveDateTime};

/// Every key the response schema carries.
const KNOWN_FIELDS: [&str; 9] = [
    "Photo",
    "Firstname",
    "Middlename",
    "Lastname",
    "Sponsorg",
    "Expirationdate",
    "Status",
    "Code",
    "ExtendedInfo",
];

/// Keys retired from the schema whose reappearance is a regression.
const FORBIDDEN_FIELDS: [&str; 1] = ["Reason"];

/// Decodes a raw response body into a typed [`ScanResponse`].
///
/// Decoding is deterministic: the same payload always yields the same
/// value, including the expiration-date truncation.
///
/// # Errors
///
/// Returns a [`DecodeError`] naming the violated invariant when the
/// payload is not well-formed JSON, carries a retired or unknown field,
/// lacks `Code` or `Status`, stringifies a null, or carries a value the
/// schema cannot represent.
pub fn decode(raw: &[u8]) -> Result<ScanResponse, DecodeError> {
    let value: Value = serde_json::from_slice(raw).map_err(|e| DecodeError::MalformedJson {
        message: e.to_string(),
    })?;
    let Value::Object(fields) = value else {
        return Err(DecodeError::NotAnObject);
    };

    for key in fields.keys() {
        if FORBIDDEN_FIELDS.contains(&key.as_str()) {
            return Err(DecodeError::ForbiddenField { field: key.clone() });
        }
        if !KNOWN_FIELDS.contains(&key.as_str()) {
            return Err(DecodeError::UnexpectedField { field: key.clone() });
        }
    }

    Ok(ScanResponse {
        photo: decode_photo(&fields)?,
        firstname: optional_string(&fields, "Firstname")?,
        middlename: optional_string(&fields, "Middlename")?,
        lastname: optional_string(&fields, "Lastname")?,
        sponsor_org: optional_string(&fields, "Sponsorg")?,
        expiration_date: decode_expiration(&fields)?,
        status: decode_status(&fields)?,
        code: decode_code(&fields)?,
        extended_info: optional_string(&fields, "ExtendedInfo")?,
    })
}

/// Reads the required `Code` field as a validated flag set.
fn decode_code(fields: &Map<String, Value>) -> Result<ResponseCode, DecodeError> {
    let value: &Value = match fields.get("Code") {
        None | Some(Value::Null) => return Err(DecodeError::MissingField { field: "Code" }),
        Some(value) => value,
    };
    let bits: u64 = value.as_u64().ok_or(DecodeError::FieldType {
        field: "Code",
        expected: "non-negative integer",
    })?;
    let narrow: u32 =
        u32::try_from(bits).map_err(|_| DecodeError::UnknownCodeBits { bits })?;
    ResponseCode::from_bits(narrow).map_err(|_| DecodeError::UnknownCodeBits { bits })
}

/// Reads the required, non-empty `Status` field.
fn decode_status(fields: &Map<String, Value>) -> Result<ScanStatus, DecodeError> {
    let raw: &str = match fields.get("Status") {
        None | Some(Value::Null) => return Err(DecodeError::MissingField { field: "Status" }),
        Some(Value::String(s)) => s,
        Some(_) => {
            return Err(DecodeError::FieldType {
                field: "Status",
                expected: "string",
            });
        }
    };
    if raw == "null" {
        return Err(DecodeError::LiteralNullString { field: "Status" });
    }
    if raw.is_empty() {
        return Err(DecodeError::EmptyStatus);
    }
    ScanStatus::from_str(raw).map_err(|_| DecodeError::InvalidStatus {
        value: raw.to_string(),
    })
}

/// Reads an optional string field, mapping absence and JSON null to
/// `None` and rejecting the stringified-null bug class.
fn optional_string(
    fields: &Map<String, Value>,
    field: &'static str,
) -> Result<Option<String>, DecodeError> {
    match fields.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => {
            if s == "null" {
                Err(DecodeError::LiteralNullString { field })
            } else {
                Ok(Some(s.clone()))
            }
        }
        Some(_) => Err(DecodeError::FieldType {
            field,
            expected: "string",
        }),
    }
}

/// Reads the optional base64 `Photo` field. An empty string is no photo.
fn decode_photo(fields: &Map<String, Value>) -> Result<Option<Vec<u8>>, DecodeError> {
    match optional_string(fields, "Photo")? {
        None => Ok(None),
        Some(encoded) if encoded.is_empty() => Ok(None),
        Some(encoded) => STANDARD
            .decode(&encoded)
            .map(Some)
            .map_err(|e| DecodeError::InvalidPhoto {
                message: e.to_string(),
            }),
    }
}

/// Reads the optional `Expirationdate` field, truncating any
/// time-of-day component to the calendar date.
///
/// The service sometimes returns values with spurious time components;
/// truncation is idempotent on an already-truncated value.
fn decode_expiration(fields: &Map<String, Value>) -> Result<Option<Date>, DecodeError> {
    let Some(raw) = optional_string(fields, "Expirationdate")? else {
        return Ok(None);
    };
    parse_calendar_date(&raw)
        .map(Some)
        .ok_or(DecodeError::InvalidDate { value: raw })
}

/// Parses an ISO-8601 date, datetime, or offset datetime down to its
/// calendar date.
fn parse_calendar_date(raw: &str) -> Option<Date> {
    if let Ok(stamped) = OffsetDateTime::parse(raw, &Iso8601::DEFAULT) {
        return Some(stamped.date());
    }
    if let Ok(stamped) = PrimitiveDateTime::parse(raw, &Iso8601::DEFAULT) {
        return Some(stamped.date());
    }
    Date::parse(raw, &Iso8601::DEFAULT).ok()
}
