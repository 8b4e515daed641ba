// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Rejection and informational reason flags returned by the scan service.
//!
//! The service reports reasons as a single integer bitmask; multiple
//! reasons may be set on one response (1040 is `NCIC | EXPIRED`).

use crate::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Bitmask of reasons attached to a scan response.
///
/// A value of zero (`UNSET`) means no rejection reason. Values are
/// immutable once constructed; combination happens with `|` before
/// construction, inspection with [`ResponseCode::has_flag`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ResponseCode(u32);

impl ResponseCode {
    /// No rejection reason.
    pub const UNSET: Self = Self(0);
    /// The badge is not known to the remote system.
    pub const BADGE_NOT_FOUND: Self = Self(1);
    /// The badge was turned in.
    pub const TURNED_IN: Self = Self(1 << 1);
    /// The badge was reported destroyed.
    pub const DESTROYED: Self = Self(1 << 2);
    /// The badge was cancelled.
    pub const CANCELLED: Self = Self(1 << 3);
    /// The badge is past its expiration date.
    pub const EXPIRED: Self = Self(1 << 4);
    /// The badge is not valid for this base.
    pub const INVALID_BASE: Self = Self(1 << 5);
    /// The badge is not valid for this gate.
    pub const INVALID_GATE: Self = Self(1 << 6);
    /// Entry denied under the current force protection condition.
    pub const FPCON: Self = Self(1 << 7);
    /// The person is barred from entry.
    pub const PERSON_BARRED: Self = Self(1 << 8);
    /// The service could not complete the check.
    pub const INTERNAL_ERROR: Self = Self(1 << 9);
    /// An NCIC record matched.
    pub const NCIC: Self = Self(1 << 10);

    /// Every named flag with its wire name, in bit order.
    pub const NAMED: [(Self, &'static str); 11] = [
        (Self::BADGE_NOT_FOUND, "BADGE_NOT_FOUND"),
        (Self::TURNED_IN, "TURNED_IN"),
        (Self::DESTROYED, "DESTROYED"),
        (Self::CANCELLED, "CANCELLED"),
        (Self::EXPIRED, "EXPIRED"),
        (Self::INVALID_BASE, "INVALID_BASE"),
        (Self::INVALID_GATE, "INVALID_GATE"),
        (Self::FPCON, "FPCON"),
        (Self::PERSON_BARRED, "PERSON_BARRED"),
        (Self::INTERNAL_ERROR, "INTERNAL_ERROR"),
        (Self::NCIC, "NCIC"),
    ];

    /// Union of every known bit.
    const KNOWN_MASK: u32 = (1 << 11) - 1;

    /// Constructs a `ResponseCode` from a raw wire integer.
    ///
    /// Any combination of known bits is accepted, including zero.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnknownCodeBits` if the value carries bits
    /// outside the documented flag set. New bits appearing on the wire
    /// are schema drift and must surface, not pass through.
    pub const fn from_bits(bits: u32) -> Result<Self, DomainError> {
        if bits & !Self::KNOWN_MASK == 0 {
            Ok(Self(bits))
        } else {
            Err(DomainError::UnknownCodeBits { bits })
        }
    }

    /// Returns the raw wire integer.
    #[must_use]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Returns true if no reason bit is set.
    #[must_use]
    pub const fn is_unset(self) -> bool {
        self.0 == 0
    }

    /// Returns true if every bit of `flag` is present in this value.
    ///
    /// For a single named flag this is the non-zero bitwise-AND test.
    #[must_use]
    pub const fn has_flag(self, flag: Self) -> bool {
        self.0 & flag.0 != 0
    }

    /// Iterates over the named flags set in this value, in bit order.
    pub fn flags(self) -> impl Iterator<Item = (Self, &'static str)> {
        Self::NAMED
            .into_iter()
            .filter(move |(flag, _)| self.has_flag(*flag))
    }
}

impl std::ops::BitOr for ResponseCode {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl std::fmt::Display for ResponseCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_unset() {
            return write!(f, "UNSET");
        }
        let names: Vec<&'static str> = self.flags().map(|(_, name)| name).collect();
        write!(f, "{}", names.join("|"))
    }
}

impl Serialize for ResponseCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.0)
    }
}

impl<'de> Deserialize<'de> for ResponseCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let bits: u32 = u32::deserialize(deserializer)?;
        Self::from_bits(bits).map_err(serde::de::Error::custom)
    }
}
