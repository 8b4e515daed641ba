// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Transport doubles and canned payloads.

use crate::{ExpectationRow, expectation_table};
use maxcheck_wire::{RawResponse, ScanRequest, Transport, TransportException};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

/// Base64 of the eight PNG signature bytes; stands in for a real photo.
pub const PHOTO_B64: &str = "iVBORw0KGgo=";

/// Fetches a table row by label.
pub fn row(label: &str) -> ExpectationRow {
    expectation_table()
        .into_iter()
        .find(|r| r.label == label)
        .unwrap_or_else(|| panic!("no expectation row labelled '{label}'"))
}

pub fn good_green_body() -> String {
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

pub fn expired_red_body() -> String {
    format!(
        r#"{{
            "Photo": "{PHOTO_B64}",
            "Firstname": "TUESDAY",
            "Middlename": null,
            "Lastname": "NGUYEN",
            "Sponsorg": null,
            "Expirationdate": "2016-03-18T11:45:00",
            "Status": "RED",
            "Code": 16,
            "ExtendedInfo": null
        }}"#
    )
}

pub fn internal_error_body() -> String {
    String::from(
        r#"{
            "Status": "YELLOW",
            "Code": 512,
            "ExtendedInfo": "lookup backend unavailable; reference 8675309"
        }"#,
    )
}

pub fn not_found_body() -> String {
    String::from(r#"{"Status": "RED", "Code": 1}"#)
}

pub fn request_rejected_body() -> String {
    String::from(r#"{"Status": "RED", "Code": 64}"#)
}

/// Transport double that answers every request the same way.
pub enum StubTransport {
    /// 200 with this body.
    Body(String),
    /// This status with an empty body.
    Status(u16),
    /// The exchange itself fails.
    Fail(&'static str),
}

impl Transport for StubTransport {
    fn execute(&self, _request: &ScanRequest) -> Result<RawResponse, TransportException> {
        match self {
            Self::Body(body) => Ok(RawResponse::new(200, body.clone().into_bytes())),
            Self::Status(status) => Ok(RawResponse::new(*status, Vec::new())),
            Self::Fail(message) => Err(TransportException::new(*message)),
        }
    }
}

/// In-memory double of a conforming service: validates the request
/// envelope first, then answers by barcode.
pub struct SimulatedService;

impl SimulatedService {
    fn station_acceptable(request: &ScanRequest) -> bool {
        request
            .station_id()
            .is_some_and(|raw| raw.parse::<u32>().is_ok_and(|station| station > 0))
    }

    fn scan_time_plausible(request: &ScanRequest) -> bool {
        request.scan_date_time().is_some_and(|raw| {
            OffsetDateTime::parse(raw, &Rfc3339).is_ok_and(|stamp| stamp.year() < 2100)
        })
    }
}

impl Transport for SimulatedService {
    fn execute(&self, request: &ScanRequest) -> Result<RawResponse, TransportException> {
        if !Self::station_acceptable(request) || !Self::scan_time_plausible(request) {
            return Ok(RawResponse::new(200, request_rejected_body().into_bytes()));
        }
        let body: String = match request.scan_data() {
            "TEMP0001003127" => good_green_body(),
            "TEMP0001003142" => expired_red_body(),
            "ERRTEST8675309" => internal_error_body(),
            "TEMP0001999999" => not_found_body(),
            _ => return Ok(RawResponse::new(404, b"unknown barcode".to_vec())),
        };
        Ok(RawResponse::new(200, body.into_bytes()))
    }
}
