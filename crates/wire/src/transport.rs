// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The transport seam.
//!
//! The harness never talks to the network itself; callers supply an
//! implementation of [`Transport`] (an HTTP client in production, a
//! stub or replay transport in tests and self-checks).

use crate::request::ScanRequest;

/// The raw outcome of one request: the HTTP status and the body bytes.
///
/// A 200 status promises a decodable body; everything else is handled
/// by the caller's error translation, not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// The HTTP status code.
    pub status_code: u16,
    /// The unparsed body bytes.
    pub body: Vec<u8>,
}

impl RawResponse {
    /// Creates a raw response.
    #[must_use]
    pub const fn new(status_code: u16, body: Vec<u8>) -> Self {
        Self { status_code, body }
    }
}

/// A transport-level failure: the exchange itself did not complete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportException {
    /// The transport's description of the failure.
    message: String,
}

impl TransportException {
    /// Creates a transport exception.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Returns the transport's description of the failure.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for TransportException {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for TransportException {}

/// Sends a scan request and returns whatever came back.
///
/// Implementations must not retry and must not substitute a default
/// body for a failed exchange; failures are reported as-is so the
/// caller can distinguish "unreachable" from "behaved incorrectly".
pub trait Transport {
    /// Executes one request.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportException`] when the exchange itself fails
    /// (connection refused, reset, and the like). Non-200 statuses are
    /// a successful exchange and come back as [`RawResponse`].
    fn execute(&self, request: &ScanRequest) -> Result<RawResponse, TransportException>;
}
