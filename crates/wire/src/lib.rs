// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod decode;
mod error;
mod request;
mod response;
mod transport;

#[cfg(test)]
mod tests;

// Re-export public types
pub use decode::decode;
pub use error::DecodeError;
pub use request::{CHECK_VISITOR_PATH, RequestVariant, ScanRequest, VALID_STATION_ID};
pub use response::ScanResponse;
pub use transport::{RawResponse, Transport, TransportException};
