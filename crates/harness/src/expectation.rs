// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The fixed expectation table.
//!
//! Each row maps a literal barcode and a request shape to the behavior
//! the contract documents for it. The table is read-only fixture data;
//! rows are constructed fresh per run and never mutated.

use maxcheck_domain::{ResponseCode, ScanStatus};
use maxcheck_wire::RequestVariant;
use time::Date;
use time::macros::date;

/// What a row expects of an optional PII field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldExpectation {
    /// The field must be a true null.
    Absent,
    /// The field must equal this literal.
    Equals(&'static str),
    /// The field is not asserted.
    Unchecked,
}

/// The identity block a row expects when the response carries PII.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpectedPii {
    /// The expected first name.
    pub firstname: &'static str,
    /// The expected last name.
    pub lastname: &'static str,
    /// The expected expiration date, time-of-day already stripped.
    pub expiration_date: Date,
    /// Expectation for the middle name.
    pub middlename: FieldExpectation,
    /// Expectation for the sponsoring organization.
    pub sponsor_org: FieldExpectation,
}

/// One scenario: a barcode, a request shape, and the documented outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpectationRow {
    /// Short name for logs and reports.
    pub label: &'static str,
    /// The barcode under test.
    pub barcode: &'static str,
    /// The request shape to send.
    pub variant: RequestVariant,
    /// The flag bits the response must carry, when the contract pins
    /// them. Bits are asserted individually; extra bits are tolerated.
    pub expected_code: Option<ResponseCode>,
    /// The status the response must report.
    pub expected_status: ScanStatus,
    /// The identity block, when the contract requires PII.
    pub expected_pii: Option<ExpectedPii>,
}

/// Builds the contract's fixture table.
#[must_use]
pub fn expectation_table() -> Vec<ExpectationRow> {
    vec![
        ExpectationRow {
            label: "good_badge_green",
            barcode: "TEMP0001003127",
            variant: RequestVariant::Valid,
            expected_code: Some(ResponseCode::UNSET),
            expected_status: ScanStatus::Green,
            expected_pii: Some(ExpectedPii {
                firstname: "CAMEY",
                lastname: "ANDERSON",
                expiration_date: date!(2016 - 03 - 31),
                middlename: FieldExpectation::Unchecked,
                sponsor_org: FieldExpectation::Equals("TEST OFFICE SYMBOL 2"),
            }),
        },
        ExpectationRow {
            label: "expired_badge_red",
            barcode: "TEMP0001003142",
            variant: RequestVariant::Valid,
            expected_code: Some(ResponseCode::EXPIRED),
            expected_status: ScanStatus::Red,
            expected_pii: Some(ExpectedPii {
                firstname: "TUESDAY",
                lastname: "NGUYEN",
                expiration_date: date!(2016 - 03 - 18),
                middlename: FieldExpectation::Absent,
                sponsor_org: FieldExpectation::Absent,
            }),
        },
        ExpectationRow {
            label: "internal_error_yellow",
            barcode: "ERRTEST8675309",
            variant: RequestVariant::Valid,
            expected_code: Some(ResponseCode::INTERNAL_ERROR),
            expected_status: ScanStatus::Yellow,
            expected_pii: None,
        },
        ExpectationRow {
            label: "unknown_badge_red",
            barcode: "TEMP0001999999",
            variant: RequestVariant::Valid,
            expected_code: Some(ResponseCode::BADGE_NOT_FOUND),
            expected_status: ScanStatus::Red,
            expected_pii: None,
        },
        ExpectationRow {
            label: "missing_include_pii_still_green",
            barcode: "TEMP0001003127",
            variant: RequestVariant::MissingIncludePii,
            expected_code: Some(ResponseCode::UNSET),
            expected_status: ScanStatus::Green,
            expected_pii: None,
        },
        ExpectationRow {
            label: "invalid_station_rejected",
            barcode: "TEMP0001003127",
            variant: RequestVariant::InvalidStationId,
            expected_code: None,
            expected_status: ScanStatus::Red,
            expected_pii: None,
        },
        ExpectationRow {
            label: "missing_station_rejected",
            barcode: "TEMP0001003127",
            variant: RequestVariant::MissingStationId,
            expected_code: None,
            expected_status: ScanStatus::Red,
            expected_pii: None,
        },
        ExpectationRow {
            label: "missing_scan_time_rejected",
            barcode: "TEMP0001003127",
            variant: RequestVariant::MissingScanDateTime,
            expected_code: None,
            expected_status: ScanStatus::Red,
            expected_pii: None,
        },
        ExpectationRow {
            label: "invalid_scan_time_rejected",
            barcode: "TEMP0001003127",
            variant: RequestVariant::InvalidScanDateTime,
            expected_code: None,
            expected_status: ScanStatus::Red,
            expected_pii: None,
        },
    ]
}
