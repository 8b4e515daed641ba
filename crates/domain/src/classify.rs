// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Status derivation and PII-presence policy.
//!
//! The expected status is **computed** from the flag set, never stored.
//! A response whose reported status disagrees with the derivation is a
//! contract failure at the caller's level.

use crate::response_code::ResponseCode;
use crate::scan_status::ScanStatus;

/// Derives the status a conforming service must report for a flag set.
///
/// The derivation, in precedence order:
///
/// - `INTERNAL_ERROR` set ⇒ YELLOW, regardless of any other bit. A
///   YELLOW response must also carry non-empty extended info; that is a
///   response-level check, not part of the derivation.
/// - any other bit set ⇒ RED
/// - no bit set ⇒ GREEN
#[must_use]
pub const fn classify(code: ResponseCode) -> ScanStatus {
    if code.has_flag(ResponseCode::INTERNAL_ERROR) {
        ScanStatus::Yellow
    } else if code.is_unset() {
        ScanStatus::Green
    } else {
        ScanStatus::Red
    }
}

/// Returns whether the identity fields must be present for a flag set.
///
/// PII is waived when the badge is unknown (`BADGE_NOT_FOUND`) or the
/// service could not complete the check (`INTERNAL_ERROR`); in every
/// other case firstname, lastname, expiration date, and photo must be
/// present and non-empty. The status field is required regardless.
#[must_use]
pub const fn pii_required(code: ResponseCode) -> bool {
    !(code.has_flag(ResponseCode::BADGE_NOT_FOUND)
        || code.has_flag(ResponseCode::INTERNAL_ERROR))
}
