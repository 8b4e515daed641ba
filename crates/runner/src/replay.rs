// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Replay transport over recorded response fixtures.
//!
//! Stands in for the live endpoint so the harness can be exercised
//! offline. The fixture served is chosen by the shape of the incoming
//! request, the same order the service validates it: the request
//! envelope (station, scan time) first, then the barcode.

use maxcheck_wire::{RawResponse, ScanRequest, Transport, TransportException};
use std::path::PathBuf;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use tracing::debug;

/// Fixture served when the station is invalid or missing.
const STATION_REJECTED: &str = "station_rejected.json";

/// Fixture served when the scan timestamp is implausible or missing.
const SCAN_TIME_REJECTED: &str = "scan_time_rejected.json";

/// Scan timestamps more than this many years ahead are implausible.
const PLAUSIBLE_YEARS_AHEAD: i32 = 50;

/// Serves recorded response bodies from a fixture directory.
pub struct ReplayTransport {
    /// Directory holding one JSON body per barcode plus the envelope
    /// rejection bodies.
    fixtures: PathBuf,
}

impl ReplayTransport {
    /// Creates a replay transport over `fixtures`.
    #[must_use]
    pub const fn new(fixtures: PathBuf) -> Self {
        Self { fixtures }
    }

    /// Picks the fixture the recorded service would have answered with.
    fn fixture_name(request: &ScanRequest) -> String {
        if !station_acceptable(request) {
            return String::from(STATION_REJECTED);
        }
        if !scan_time_plausible(request) {
            return String::from(SCAN_TIME_REJECTED);
        }
        format!("{}.json", request.scan_data())
    }
}

impl Transport for ReplayTransport {
    fn execute(&self, request: &ScanRequest) -> Result<RawResponse, TransportException> {
        let name: String = Self::fixture_name(request);
        let path: PathBuf = self.fixtures.join(&name);
        debug!(fixture = %path.display(), "Replaying recorded response");

        match std::fs::read(&path) {
            Ok(body) => Ok(RawResponse::new(200, body)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(RawResponse::new(
                404,
                format!("no recorded response for '{name}'").into_bytes(),
            )),
            Err(e) => Err(TransportException::new(format!(
                "failed to read fixture '{}': {e}",
                path.display()
            ))),
        }
    }
}

/// A station is acceptable when it parses as a positive integer.
fn station_acceptable(request: &ScanRequest) -> bool {
    request
        .station_id()
        .is_some_and(|raw| raw.parse::<u32>().is_ok_and(|station| station > 0))
}

/// A scan time is plausible when it parses and is not decades ahead.
fn scan_time_plausible(request: &ScanRequest) -> bool {
    request.scan_date_time().is_some_and(|raw| {
        OffsetDateTime::parse(raw, &Rfc3339).is_ok_and(|stamp| {
            stamp.year() <= OffsetDateTime::now_utc().year() + PLAUSIBLE_YEARS_AHEAD
        })
    })
}
