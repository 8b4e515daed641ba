// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The request → decode → classify → assert pipeline.

use crate::error::{ContractViolation, ScenarioError, TransportError};
use crate::expectation::{ExpectationRow, ExpectedPii, FieldExpectation, expectation_table};
use maxcheck_domain::{ResponseCode, ScanStatus, classify, pii_required};
use maxcheck_wire::{RawResponse, ScanRequest, ScanResponse, Transport, decode};
use tracing::{debug, error, info};

/// Drives the contract scenarios against a transport.
///
/// The verifier holds no mutable state; scenarios are independent and
/// may run concurrently on separate workers.
pub struct ContractVerifier<T: Transport> {
    /// The collaborator that performs the network exchange.
    transport: T,
}

/// The result of one scenario, tagged for reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioOutcome {
    /// The row's short name.
    pub label: &'static str,
    /// The barcode the row probes.
    pub barcode: &'static str,
    /// Pass, or the categorized failure.
    pub result: Result<(), ScenarioError>,
}

impl<T: Transport> ContractVerifier<T> {
    /// Creates a verifier over `transport`.
    #[must_use]
    pub const fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Runs a single scenario end to end.
    ///
    /// # Errors
    ///
    /// Returns a [`ScenarioError`] naming the barcode and the failed
    /// invariant: a transport failure (non-200 or exchange error), a
    /// schema violation in the payload, or a contract violation in the
    /// decoded values. The first mismatch fails the scenario.
    pub fn run_scenario(&self, row: &ExpectationRow) -> Result<(), ScenarioError> {
        let request: ScanRequest = row.variant.build(row.barcode);
        debug!(
            barcode = row.barcode,
            variant = %row.variant,
            "Sending scan request"
        );

        let raw: RawResponse =
            self.transport
                .execute(&request)
                .map_err(|e| ScenarioError::Transport {
                    barcode: row.barcode.to_string(),
                    error: TransportError::Exception {
                        message: e.message().to_string(),
                    },
                })?;

        if raw.status_code != 200 {
            return Err(ScenarioError::Transport {
                barcode: row.barcode.to_string(),
                error: TransportError::HttpStatus {
                    status: raw.status_code,
                },
            });
        }

        let response: ScanResponse = decode(&raw.body).map_err(|e| ScenarioError::Decode {
            barcode: row.barcode.to_string(),
            error: e,
        })?;

        check_response(row, &response).map_err(|violation| ScenarioError::Violation {
            barcode: row.barcode.to_string(),
            violation,
        })
    }

    /// Runs every row of the expectation table, logging each outcome.
    #[must_use]
    pub fn run_all(&self) -> Vec<ScenarioOutcome> {
        expectation_table()
            .iter()
            .map(|row| {
                let result: Result<(), ScenarioError> = self.run_scenario(row);
                match &result {
                    Ok(()) => info!(scenario = row.label, "Scenario passed"),
                    Err(e) => error!(
                        scenario = row.label,
                        category = e.category(),
                        "Scenario failed: {e}"
                    ),
                }
                ScenarioOutcome {
                    label: row.label,
                    barcode: row.barcode,
                    result,
                }
            })
            .collect()
    }
}

/// Checks a decoded response against a row's documented behavior.
fn check_response(row: &ExpectationRow, response: &ScanResponse) -> Result<(), ContractViolation> {
    // The reported status must follow from the reported flags before it
    // is compared to anything else.
    let derived: ScanStatus = classify(response.code);
    if response.status != derived {
        return Err(ContractViolation::StatusMismatch {
            expected: derived,
            actual: response.status,
            code: response.code,
        });
    }

    if response.status != row.expected_status {
        return Err(ContractViolation::ExpectedStatus {
            expected: row.expected_status,
            actual: response.status,
        });
    }

    // Flag assertions are independent of status precedence: every
    // pinned bit is checked individually, YELLOW included.
    if let Some(expected_code) = row.expected_code {
        for (flag, name) in expected_code.flags() {
            if !response.code.has_flag(flag) {
                return Err(ContractViolation::MissingFlag {
                    flag: name,
                    code: response.code,
                });
            }
        }
    }

    if response.code.has_flag(ResponseCode::INTERNAL_ERROR)
        && response.extended_info.as_deref().is_none_or(str::is_empty)
    {
        return Err(ContractViolation::EmptyExtendedInfo);
    }

    if let Some(pii) = &row.expected_pii {
        check_pii(pii, response)?;
    }

    Ok(())
}

/// Checks the identity block of a response that must carry PII.
fn check_pii(pii: &ExpectedPii, response: &ScanResponse) -> Result<(), ContractViolation> {
    if pii_required(response.code) && response.photo.as_deref().is_none_or(<[u8]>::is_empty) {
        return Err(ContractViolation::MissingRequiredField { field: "Photo" });
    }

    check_literal("Firstname", pii.firstname, response.firstname.as_deref())?;
    check_literal("Lastname", pii.lastname, response.lastname.as_deref())?;

    match response.expiration_date {
        None => {
            return Err(ContractViolation::MissingRequiredField {
                field: "Expirationdate",
            });
        }
        Some(actual) if actual != pii.expiration_date => {
            return Err(ContractViolation::ValueMismatch {
                field: "Expirationdate",
                expected: pii.expiration_date.to_string(),
                actual: actual.to_string(),
            });
        }
        Some(_) => {}
    }

    check_optional("Middlename", pii.middlename, response.middlename.as_deref())?;
    check_optional("Sponsorg", pii.sponsor_org, response.sponsor_org.as_deref())?;

    Ok(())
}

/// Requires a field to be present, non-empty, and equal to a literal.
fn check_literal(
    field: &'static str,
    expected: &'static str,
    actual: Option<&str>,
) -> Result<(), ContractViolation> {
    match actual {
        None => Err(ContractViolation::MissingRequiredField { field }),
        Some(value) if value.is_empty() => {
            Err(ContractViolation::MissingRequiredField { field })
        }
        Some(value) if value != expected => Err(ContractViolation::ValueMismatch {
            field,
            expected: expected.to_string(),
            actual: value.to_string(),
        }),
        Some(_) => Ok(()),
    }
}

/// Applies a three-way expectation to an optional field.
fn check_optional(
    field: &'static str,
    expectation: FieldExpectation,
    actual: Option<&str>,
) -> Result<(), ContractViolation> {
    match expectation {
        FieldExpectation::Unchecked => Ok(()),
        FieldExpectation::Absent => actual.map_or(Ok(()), |value| {
            Err(ContractViolation::UnexpectedValue {
                field,
                actual: value.to_string(),
            })
        }),
        FieldExpectation::Equals(expected) => check_literal(field, expected, actual),
    }
}
