// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DecodeError, ScanResponse, decode};
use maxcheck_domain::{ResponseCode, ScanStatus};
use time::macros::date;

/// Base64 of the eight PNG signature bytes; stands in for a real photo.
const PHOTO_B64: &str = "iVBORw0KGgo=";

fn good_payload() -> String {
    format!(
        r#"{{
            "Photo": "{PHOTO_B64}",
            "Firstname": "CAMEY",
            "Middlename": null,
            "Lastname": "ANDERSON",
            "Sponsorg": "TEST OFFICE SYMBOL 2",
            "Expirationdate": "2016-03-31T00:00:00",
            "Status": "GREEN",
            "Code": 0,
            "ExtendedInfo": null
        }}"#
    )
}

#[test]
fn test_decodes_well_formed_payload() {
    let response: ScanResponse = decode(good_payload().as_bytes()).unwrap();

    assert_eq!(response.firstname.as_deref(), Some("CAMEY"));
    assert_eq!(response.middlename, None);
    assert_eq!(response.lastname.as_deref(), Some("ANDERSON"));
    assert_eq!(response.sponsor_org.as_deref(), Some("TEST OFFICE SYMBOL 2"));
    assert_eq!(response.expiration_date, Some(date!(2016 - 03 - 31)));
    assert_eq!(response.status, ScanStatus::Green);
    assert!(response.code.is_unset());
    assert_eq!(response.extended_info, None);

    let photo: Vec<u8> = response.photo.unwrap();
    assert_eq!(photo, b"\x89PNG\r\n\x1a\n");
}

#[test]
fn test_decoding_is_deterministic() {
    let payload: String = good_payload();
    let first: ScanResponse = decode(payload.as_bytes()).unwrap();
    let second: ScanResponse = decode(payload.as_bytes()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_expiration_time_of_day_is_truncated() {
    let payload: &str =
        r#"{"Expirationdate": "2016-03-18T09:30:27", "Status": "RED", "Code": 16}"#;
    let response: ScanResponse = decode(payload.as_bytes()).unwrap();
    assert_eq!(response.expiration_date, Some(date!(2016 - 03 - 18)));
}

#[test]
fn test_expiration_truncation_is_idempotent() {
    // A bare calendar date decodes to itself.
    let payload: &str = r#"{"Expirationdate": "2016-03-18", "Status": "RED", "Code": 16}"#;
    let response: ScanResponse = decode(payload.as_bytes()).unwrap();
    assert_eq!(response.expiration_date, Some(date!(2016 - 03 - 18)));
}

#[test]
fn test_expiration_with_offset_suffix() {
    let payload: &str =
        r#"{"Expirationdate": "2016-03-31T22:15:00Z", "Status": "GREEN", "Code": 0}"#;
    let response: ScanResponse = decode(payload.as_bytes()).unwrap();
    assert_eq!(response.expiration_date, Some(date!(2016 - 03 - 31)));
}

#[test]
fn test_unparseable_expiration_is_rejected() {
    let payload: &str = r#"{"Expirationdate": "March 31, 2016", "Status": "GREEN", "Code": 0}"#;
    let result: Result<ScanResponse, DecodeError> = decode(payload.as_bytes());
    assert_eq!(
        result,
        Err(DecodeError::InvalidDate {
            value: String::from("March 31, 2016")
        })
    );
}

#[test]
fn test_combined_flag_bits_deserialize_exactly() {
    let payload: &str = r#"{"Status": "RED", "Code": 1040}"#;
    let response: ScanResponse = decode(payload.as_bytes()).unwrap();
    assert!(response.code.has_flag(ResponseCode::NCIC));
    assert!(response.code.has_flag(ResponseCode::EXPIRED));
    assert_eq!(response.code.bits(), 1040);
}

#[test]
fn test_unknown_flag_bits_are_rejected() {
    let payload: &str = r#"{"Status": "RED", "Code": 4096}"#;
    let result: Result<ScanResponse, DecodeError> = decode(payload.as_bytes());
    assert_eq!(result, Err(DecodeError::UnknownCodeBits { bits: 4096 }));
}

#[test]
fn test_missing_code_is_rejected() {
    let payload: &str = r#"{"Status": "GREEN"}"#;
    let result: Result<ScanResponse, DecodeError> = decode(payload.as_bytes());
    assert_eq!(result, Err(DecodeError::MissingField { field: "Code" }));

    // JSON null is no better than an absent key.
    let payload: &str = r#"{"Status": "GREEN", "Code": null}"#;
    let result: Result<ScanResponse, DecodeError> = decode(payload.as_bytes());
    assert_eq!(result, Err(DecodeError::MissingField { field: "Code" }));
}

#[test]
fn test_non_integer_code_is_rejected() {
    let payload: &str = r#"{"Status": "GREEN", "Code": "0"}"#;
    let result: Result<ScanResponse, DecodeError> = decode(payload.as_bytes());
    assert_eq!(
        result,
        Err(DecodeError::FieldType {
            field: "Code",
            expected: "non-negative integer"
        })
    );

    let payload: &str = r#"{"Status": "GREEN", "Code": -1}"#;
    assert!(decode(payload.as_bytes()).is_err());
}

#[test]
fn test_missing_status_is_rejected() {
    let payload: &str = r#"{"Code": 0}"#;
    let result: Result<ScanResponse, DecodeError> = decode(payload.as_bytes());
    assert_eq!(result, Err(DecodeError::MissingField { field: "Status" }));
}

#[test]
fn test_empty_status_is_rejected() {
    let payload: &str = r#"{"Status": "", "Code": 0}"#;
    let result: Result<ScanResponse, DecodeError> = decode(payload.as_bytes());
    assert_eq!(result, Err(DecodeError::EmptyStatus));
}

#[test]
fn test_unknown_status_is_rejected() {
    let payload: &str = r#"{"Status": "BLUE", "Code": 0}"#;
    let result: Result<ScanResponse, DecodeError> = decode(payload.as_bytes());
    assert_eq!(
        result,
        Err(DecodeError::InvalidStatus {
            value: String::from("BLUE")
        })
    );
}

#[test]
fn test_legacy_reason_field_is_a_regression() {
    let payload: &str = r#"{"Status": "RED", "Code": 16, "Reason": "expired"}"#;
    let result: Result<ScanResponse, DecodeError> = decode(payload.as_bytes());
    assert_eq!(
        result,
        Err(DecodeError::ForbiddenField {
            field: String::from("Reason")
        })
    );
}

#[test]
fn test_unknown_field_is_rejected() {
    let payload: &str = r#"{"Status": "GREEN", "Code": 0, "Nickname": "CAM"}"#;
    let result: Result<ScanResponse, DecodeError> = decode(payload.as_bytes());
    assert_eq!(
        result,
        Err(DecodeError::UnexpectedField {
            field: String::from("Nickname")
        })
    );
}

#[test]
fn test_stringified_null_is_rejected_per_field() {
    for field in ["Firstname", "Middlename", "Lastname", "Sponsorg", "ExtendedInfo"] {
        let payload: String = format!(r#"{{"Status": "GREEN", "Code": 0, "{field}": "null"}}"#);
        let result: Result<ScanResponse, DecodeError> = decode(payload.as_bytes());
        assert_eq!(
            result,
            Err(DecodeError::LiteralNullString { field }),
            "field {field} must reject the literal text \"null\""
        );
    }
}

#[test]
fn test_true_null_decodes_to_absence() {
    let payload: &str = r#"{
        "Status": "RED",
        "Code": 16,
        "Firstname": "TUESDAY",
        "Lastname": "NGUYEN",
        "Middlename": null,
        "Sponsorg": null
    }"#;
    let response: ScanResponse = decode(payload.as_bytes()).unwrap();
    assert_eq!(response.middlename, None);
    assert_eq!(response.sponsor_org, None);
    assert_eq!(response.firstname.as_deref(), Some("TUESDAY"));
}

#[test]
fn test_invalid_base64_photo_is_rejected() {
    let payload: &str = r#"{"Status": "GREEN", "Code": 0, "Photo": "@@not-base64@@"}"#;
    let result: Result<ScanResponse, DecodeError> = decode(payload.as_bytes());
    assert!(matches!(result, Err(DecodeError::InvalidPhoto { .. })));
}

#[test]
fn test_empty_photo_string_is_absence() {
    let payload: &str = r#"{"Status": "GREEN", "Code": 0, "Photo": ""}"#;
    let response: ScanResponse = decode(payload.as_bytes()).unwrap();
    assert_eq!(response.photo, None);
}

#[test]
fn test_malformed_json_is_rejected() {
    let result: Result<ScanResponse, DecodeError> = decode(b"{not json");
    assert!(matches!(result, Err(DecodeError::MalformedJson { .. })));
}

#[test]
fn test_non_object_payload_is_rejected() {
    let result: Result<ScanResponse, DecodeError> = decode(b"[1, 2, 3]");
    assert_eq!(result, Err(DecodeError::NotAnObject));

    let result: Result<ScanResponse, DecodeError> = decode(b"\"GREEN\"");
    assert_eq!(result, Err(DecodeError::NotAnObject));
}

#[test]
fn test_wrong_type_for_string_field_is_rejected() {
    let payload: &str = r#"{"Status": "GREEN", "Code": 0, "Firstname": 42}"#;
    let result: Result<ScanResponse, DecodeError> = decode(payload.as_bytes());
    assert_eq!(
        result,
        Err(DecodeError::FieldType {
            field: "Firstname",
            expected: "string"
        })
    );
}
