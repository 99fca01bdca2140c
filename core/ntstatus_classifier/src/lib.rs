//! A `no_std` library for classifying 32-bit NTSTATUS words.
//!
//! Every NTSTATUS value packs four pieces of information into a single `u32`:
//!
//! ```text
//!  31 30 29 28 27                     16 15                             0
//! +-----+--+--+-------------------------+--------------------------------+
//! | Sev |C |R |        Facility         |              Code              |
//! +-----+--+--+-------------------------+--------------------------------+
//! ```
//!
//! - `Sev`: the [Severity] of the status (success, informational, warning or error).
//! - `C`: set for customer-defined codes, clear for codes defined by the platform.
//! - `R`: reserved. NTSTATUS leaves it clear; HRESULTs use it as the "N" bit.
//! - `Facility`: a 12-bit [FacilityId] naming the subsystem that owns the code.
//! - `Code`: the 16-bit code within the facility.
//!
//! [decode] splits a raw word into a [DecodedStatus]. Decoding is total: every `u32` decodes, and
//! [DecodedStatus::to_raw] reassembles exactly the word it came from. The predicates
//! ([is_success], [is_error], [is_warning_or_worse], ...) only ever look at the severity bits.
//!
//! Facility ids and full status words are different things even though both are integers. A
//! [FacilityId] is only the 12-bit subfield and cannot be handed to [decode]; a [StatusValue] is a
//! complete word.
//!
//! ## Examples
//!
//! ```rust
//! use ntstatus_classifier::{decode, is_success, severity_of, FacilityId, Severity, StatusValue};
//!
//! let status = decode(0xC0000022);
//! assert_eq!(status.severity(), Severity::Error);
//! assert_eq!(status.facility_id(), FacilityId::NONE);
//! assert_eq!(status.code(), 0x22);
//! assert_eq!(status.to_raw(), 0xC0000022);
//!
//! assert!(is_success(0));
//! assert_eq!(severity_of(0x80000005), Severity::Warning);
//!
//! let rebuilt = StatusValue::compose(Severity::Error, false, FacilityId::new(0x2).unwrap(), 0x1);
//! assert_eq!(rebuilt.raw(), 0xC0020001);
//! ```
//!
//! ## License
//!
//! Copyright (C) Microsoft Corporation. All rights reserved.
//!
//! SPDX-License-Identifier: BSD-2-Clause-Patent
//!
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

mod layout;
mod severity;
mod status;

pub use layout::StatusWord;
pub use severity::Severity;
pub use status::{
    code_of, decode, facility_of, is_customer_code, is_error, is_information, is_success, is_warning,
    is_warning_or_worse, severity_of, DecodedStatus, FacilityId, StatusValue,
};

/// Public result type for the crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Public error types for the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The value does not fit in the 12-bit facility subfield.
    FacilityOutOfRange(u32),
    /// The value does not fit in the 2-bit severity subfield.
    InvalidSeverity(u8),
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::FacilityOutOfRange(value) => {
                write!(f, "facility {value:#x} exceeds the 12-bit limit of {:#x}", FacilityId::MAX.raw())
            }
            Error::InvalidSeverity(value) => write!(f, "severity {value} exceeds the 2-bit limit of 3"),
        }
    }
}

impl core::error::Error for Error {}
