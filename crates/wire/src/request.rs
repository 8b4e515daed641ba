// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Scan request construction.
//!
//! A request is a configuration value built from a valid base template
//! with zero or more fields deliberately omitted or corrupted to probe
//! the service's validation paths. Construction never fails; whether a
//! request is acceptable is asserted on the response.

use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

/// POST path of the visitor check endpoint, relative to the service root.
pub const CHECK_VISITOR_PATH: &str = "api/MAXCheck/CheckVisitor";

/// The station identifier this harness is registered under.
pub const VALID_STATION_ID: &str = "10012";

/// Station sentinel the service must not accept as a valid station.
const INVALID_STATION_ID: &str = "0";

/// Scan timestamp a century out, far outside any plausible scan window.
const IMPLAUSIBLE_SCAN_TIME: &str = "2126-01-01T00:00:00Z";

/// An immutable visitor-check request configuration.
///
/// `scan_data` is always present; the remaining form fields are
/// optional so the probing constructors can omit them entirely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanRequest {
    /// The barcode under test.
    scan_data: String,
    /// The submitting station, as the wire string.
    station_id: Option<String>,
    /// The scan timestamp, as the wire string.
    scan_date_time: Option<String>,
    /// Whether PII is requested, as the wire string.
    include_pii: Option<String>,
}

impl ScanRequest {
    /// Builds a fully well-formed request for `barcode`.
    #[must_use]
    pub fn valid(barcode: &str) -> Self {
        Self {
            scan_data: barcode.to_string(),
            station_id: Some(String::from(VALID_STATION_ID)),
            scan_date_time: Some(format_timestamp(OffsetDateTime::now_utc())),
            include_pii: Some(String::from("true")),
        }
    }

    /// Valid request with the station replaced by a sentinel the
    /// service must reject.
    #[must_use]
    pub fn with_invalid_station_id(barcode: &str) -> Self {
        Self {
            station_id: Some(String::from(INVALID_STATION_ID)),
            ..Self::valid(barcode)
        }
    }

    /// Valid request with the station field omitted from the payload.
    #[must_use]
    pub fn with_missing_station_id(barcode: &str) -> Self {
        Self {
            station_id: None,
            ..Self::valid(barcode)
        }
    }

    /// Valid request with the scan timestamp omitted from the payload.
    #[must_use]
    pub fn with_missing_scan_date_time(barcode: &str) -> Self {
        Self {
            scan_date_time: None,
            ..Self::valid(barcode)
        }
    }

    /// Valid request with a scan timestamp far outside any plausible
    /// scan window.
    #[must_use]
    pub fn with_invalid_scan_date_time(barcode: &str) -> Self {
        Self {
            scan_date_time: Some(String::from(IMPLAUSIBLE_SCAN_TIME)),
            ..Self::valid(barcode)
        }
    }

    /// Valid request with the include-PII field omitted.
    ///
    /// This is a documented relaxation: the service must still succeed
    /// and a good barcode must still come back GREEN.
    #[must_use]
    pub fn with_missing_include_pii(barcode: &str) -> Self {
        Self {
            include_pii: None,
            ..Self::valid(barcode)
        }
    }

    /// Returns the barcode under test.
    #[must_use]
    pub fn scan_data(&self) -> &str {
        &self.scan_data
    }

    /// Returns the station field, if present.
    #[must_use]
    pub fn station_id(&self) -> Option<&str> {
        self.station_id.as_deref()
    }

    /// Returns the scan timestamp field, if present.
    #[must_use]
    pub fn scan_date_time(&self) -> Option<&str> {
        self.scan_date_time.as_deref()
    }

    /// Returns the include-PII field, if present.
    #[must_use]
    pub fn include_pii(&self) -> Option<&str> {
        self.include_pii.as_deref()
    }

    /// Yields the POST form fields in wire order, skipping omitted ones.
    #[must_use]
    pub fn form_params(&self) -> Vec<(&'static str, &str)> {
        let mut params: Vec<(&'static str, &str)> = vec![("scanData", self.scan_data.as_str())];
        if let Some(station_id) = &self.station_id {
            params.push(("stationId", station_id));
        }
        if let Some(scan_date_time) = &self.scan_date_time {
            params.push(("scanDateTime", scan_date_time));
        }
        if let Some(include_pii) = &self.include_pii {
            params.push(("includePii", include_pii));
        }
        params
    }
}

/// The request shapes the harness can send for a barcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestVariant {
    /// Fully well-formed request.
    Valid,
    /// Station replaced with a sentinel the service must reject.
    InvalidStationId,
    /// Station field omitted entirely.
    MissingStationId,
    /// Scan timestamp omitted entirely.
    MissingScanDateTime,
    /// Scan timestamp far outside any plausible window.
    InvalidScanDateTime,
    /// Include-PII field omitted (documented relaxation).
    MissingIncludePii,
}

impl RequestVariant {
    /// Builds the request this variant describes for `barcode`.
    #[must_use]
    pub fn build(self, barcode: &str) -> ScanRequest {
        match self {
            Self::Valid => ScanRequest::valid(barcode),
            Self::InvalidStationId => ScanRequest::with_invalid_station_id(barcode),
            Self::MissingStationId => ScanRequest::with_missing_station_id(barcode),
            Self::MissingScanDateTime => ScanRequest::with_missing_scan_date_time(barcode),
            Self::InvalidScanDateTime => ScanRequest::with_invalid_scan_date_time(barcode),
            Self::MissingIncludePii => ScanRequest::with_missing_include_pii(barcode),
        }
    }

    /// Returns a short name for logging and reports.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Valid => "valid",
            Self::InvalidStationId => "invalid_station_id",
            Self::MissingStationId => "missing_station_id",
            Self::MissingScanDateTime => "missing_scan_date_time",
            Self::InvalidScanDateTime => "invalid_scan_date_time",
            Self::MissingIncludePii => "missing_include_pii",
        }
    }
}

impl std::fmt::Display for RequestVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Formats a timestamp as RFC 3339 for the wire.
fn format_timestamp(timestamp: OffsetDateTime) -> String {
    timestamp
        .format(&Rfc3339)
        .unwrap_or_else(|_| timestamp.to_string())
}
