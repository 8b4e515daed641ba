// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use maxcheck_domain::{ResponseCode, ScanStatus};
use time::Date;

/// A decoded visitor-check response.
///
/// Produced only by [`crate::decode`], which enforces the schema
/// invariants; a value of this type is already known to be well-formed.
/// Optional fields are true absence: JSON `null` and omitted keys both
/// decode to `None`, and the literal text `"null"` never survives
/// decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanResponse {
    /// The visitor's photo, if included.
    pub photo: Option<Vec<u8>>,
    /// The visitor's first name, if included.
    pub firstname: Option<String>,
    /// The visitor's middle name, if included.
    pub middlename: Option<String>,
    /// The visitor's last name, if included.
    pub lastname: Option<String>,
    /// The sponsoring organization, if included.
    pub sponsor_org: Option<String>,
    /// The badge expiration date, truncated to the calendar date.
    pub expiration_date: Option<Date>,
    /// The reported lane classification. Always present.
    pub status: ScanStatus,
    /// The reason flag set. Always present, possibly `UNSET`.
    pub code: ResponseCode,
    /// Operator-facing detail text, if any.
    pub extended_info: Option<String>,
}
