// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error taxonomy for scenario execution.
//!
//! A scenario fails in exactly one of three ways, and reports keep the
//! categories apart: the service was unreachable (`Transport`), the
//! payload broke the schema (`Decode`), or the decoded values disagreed
//! with the documented behavior (`Violation`).

use maxcheck_domain::{ResponseCode, ScanStatus};
use maxcheck_wire::DecodeError;
use thiserror::Error;

/// The exchange did not produce a decodable 200 response.
///
/// Never retried here; retry policy belongs to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The service answered with a non-200 status.
    #[error("service returned HTTP {status}")]
    HttpStatus {
        /// The status code received.
        status: u16,
    },
    /// The exchange itself failed.
    #[error("transport exception: {message}")]
    Exception {
        /// The transport's description of the failure.
        message: String,
    },
    /// No response arrived within the caller's deadline.
    #[error("no response within {timeout_secs} seconds")]
    TimedOut {
        /// The deadline that elapsed.
        timeout_secs: u64,
    },
}

/// A well-formed response whose values disagree with the contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContractViolation {
    /// The reported status does not follow from the reported flags.
    #[error("status {actual} does not match status {expected} derived from code {code}")]
    StatusMismatch {
        /// The status the flag set derives to.
        expected: ScanStatus,
        /// The status the service reported.
        actual: ScanStatus,
        /// The flag set the service reported.
        code: ResponseCode,
    },
    /// The reported status is not the one the fixture expects.
    #[error("field 'Status': expected {expected}, got {actual}")]
    ExpectedStatus {
        /// The status the fixture expects.
        expected: ScanStatus,
        /// The status the service reported.
        actual: ScanStatus,
    },
    /// An expected reason flag is not set.
    #[error("field 'Code': flag {flag} is not set in {code}")]
    MissingFlag {
        /// The expected flag's name.
        flag: &'static str,
        /// The flag set the service reported.
        code: ResponseCode,
    },
    /// A YELLOW response arrived without operator-facing detail.
    #[error("field 'ExtendedInfo' must be non-empty when INTERNAL_ERROR is set")]
    EmptyExtendedInfo,
    /// A field the contract requires was absent or empty.
    #[error("field '{field}' must be present and non-empty")]
    MissingRequiredField {
        /// The missing field's name.
        field: &'static str,
    },
    /// A field carried a value other than the expected literal.
    #[error("field '{field}': expected '{expected}', got '{actual}'")]
    ValueMismatch {
        /// The field's name.
        field: &'static str,
        /// The value the fixture expects.
        expected: String,
        /// The value the service reported.
        actual: String,
    },
    /// A field the fixture expects to be null carried a value.
    #[error("field '{field}' must be null, got '{actual}'")]
    UnexpectedValue {
        /// The field's name.
        field: &'static str,
        /// The value the service reported.
        actual: String,
    },
}

/// The failure of a single scenario, tagged with the barcode under test.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScenarioError {
    /// The service was unreachable or answered non-200.
    #[error("transport failure for barcode '{barcode}': {error}")]
    Transport {
        /// The barcode under test.
        barcode: String,
        /// The transport failure.
        error: TransportError,
    },
    /// The payload violated the response schema.
    #[error("decode failure for barcode '{barcode}': {error}")]
    Decode {
        /// The barcode under test.
        barcode: String,
        /// The schema invariant that failed.
        error: DecodeError,
    },
    /// The decoded values disagreed with the contract.
    #[error("contract violation for barcode '{barcode}': {violation}")]
    Violation {
        /// The barcode under test.
        barcode: String,
        /// The behavioral expectation that failed.
        violation: ContractViolation,
    },
}

impl ScenarioError {
    /// Returns the barcode the failing scenario was probing.
    #[must_use]
    pub fn barcode(&self) -> &str {
        match self {
            Self::Transport { barcode, .. }
            | Self::Decode { barcode, .. }
            | Self::Violation { barcode, .. } => barcode,
        }
    }

    /// Returns the failure category for reports.
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self {
            Self::Transport { .. } => "transport",
            Self::Decode { .. } => "decode",
            Self::Violation { .. } => "violation",
        }
    }
}
