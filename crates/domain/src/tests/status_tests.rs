// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DomainError, ScanStatus};
use std::str::FromStr;

#[test]
fn test_status_string_round_trip() {
    let statuses = vec![ScanStatus::Green, ScanStatus::Yellow, ScanStatus::Red];

    for status in statuses {
        let s: &str = status.as_str();
        match ScanStatus::from_str(s) {
            Ok(parsed) => assert_eq!(status, parsed),
            Err(e) => panic!("Failed to parse status string: {s}: {e}"),
        }
    }
}

#[test]
fn test_wire_names_are_uppercase() {
    assert_eq!(ScanStatus::Green.as_str(), "GREEN");
    assert_eq!(ScanStatus::Yellow.as_str(), "YELLOW");
    assert_eq!(ScanStatus::Red.as_str(), "RED");
}

#[test]
fn test_invalid_status_string() {
    let result: Result<ScanStatus, DomainError> = ScanStatus::from_str("AMBER");
    assert_eq!(result, Err(DomainError::InvalidStatus(String::from("AMBER"))));

    // Casing is part of the contract; lowercase is not accepted.
    assert!(ScanStatus::from_str("green").is_err());
    assert!(ScanStatus::from_str("").is_err());
}

#[test]
fn test_serde_uses_wire_names() {
    assert_eq!(
        serde_json::to_string(&ScanStatus::Yellow).unwrap(),
        "\"YELLOW\""
    );
    let parsed: ScanStatus = serde_json::from_str("\"RED\"").unwrap();
    assert_eq!(parsed, ScanStatus::Red);
}
