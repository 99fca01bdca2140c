//! NTSTATUS classification and symbol lookup.
//!
//! This crate bundles the bit-level classifier ([decode], [is_success], [severity_of], ...) with the
//! registry of named constants ([by_name], [by_value], ...), and adds [describe] to render a raw status
//! word for humans.
//!
//! All operations are pure. The registry behind the free functions is built once on first use and is
//! shared, read-only, by every thread.
//!
//! ## Examples
//!
//! ```rust
//! use ntstatus::{by_name, describe, is_error, Severity};
//!
//! let denied = by_name("STATUS_ACCESS_DENIED").unwrap();
//! assert!(is_error(denied));
//!
//! let description = describe(denied);
//! assert_eq!(description.severity(), Severity::Error);
//! assert_eq!(description.to_string(), "STATUS_ACCESS_DENIED (0xC0000022, Error, facility 0)");
//! ```
//!
//! ## Features
//!
//! - `std`: links the standard library in every crate of the stack.
//!
//! ## License
//!
//! Copyright (C) Microsoft Corporation. All rights reserved.
//!
//! SPDX-License-Identifier: BSD-2-Clause-Patent
//!
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

extern crate alloc;

mod describe;

use alloc::vec::Vec;

pub use describe::{describe, Description};
pub use ntstatus_classifier::{
    code_of, decode, facility_of, is_customer_code, is_error, is_information, is_success, is_warning,
    is_warning_or_worse, severity_of, DecodedStatus, FacilityId, Severity, StatusValue, StatusWord,
};
pub use ntstatus_registry::{table, Code, NamedCode, Namespace, Registry, TableEntry, ValidationFinding};

/// Errors raised by the crates of the stack.
pub mod error {
    pub use ntstatus_classifier::Error as ClassifierError;
    pub use ntstatus_registry::Error as RegistryError;
}

/// The process-wide registry over the compiled-in table.
pub fn registry() -> &'static Registry {
    Registry::global()
}

/// Returns the value of `symbol` in either namespace. Symbols are case sensitive.
pub fn by_name(symbol: &str) -> Option<u32> {
    registry().by_name(symbol)
}

/// Returns every symbol, facility or status, whose value is `value`.
pub fn by_value(value: u32) -> Vec<&'static str> {
    registry().by_value(value)
}

/// Iterates the facility symbols in table order.
pub fn all_facilities() -> impl Iterator<Item = (&'static str, FacilityId)> {
    registry().all_facilities()
}

/// Iterates the status symbols in table order.
pub fn all_status_codes() -> impl Iterator<Item = (&'static str, StatusValue)> {
    registry().all_status_codes()
}

/// Reports table defects and value collisions. See [Registry::validate].
pub fn validate() -> Vec<ValidationFinding> {
    registry().validate()
}

/// Returns the facility symbol for a facility subfield value.
pub fn facility_name(facility: FacilityId) -> Option<&'static str> {
    registry().facility_name(facility)
}
