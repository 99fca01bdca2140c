//! A `no_std` registry of the named NTSTATUS and facility constants.
//!
//! The registry maps symbols such as `STATUS_ACCESS_DENIED` to their numeric values and back. It holds
//! two namespaces that must not be confused:
//!
//! - facility symbols (`FACILITY_*`) whose values are 12-bit facility subfields, and
//! - status symbols whose values are complete 32-bit status words.
//!
//! The same number can be assigned to symbols in both namespaces (`FACILITY_DEBUGGER` and
//! `STATUS_WAIT_1` are both `1`), and to several symbols within one namespace (`STATUS_SUCCESS` and
//! `STATUS_WAIT_0` are both `0`). Value lookups therefore return every matching symbol rather than
//! picking one.
//!
//! Lookups never fail loudly: unknown symbols and unregistered values yield `None` or an empty list.
//! Problems with the table itself are only reported by [Registry::validate] and [Registry::check].
//!
//! ## Examples
//!
//! ```rust
//! use ntstatus_registry::Registry;
//!
//! let registry = Registry::global();
//! assert_eq!(registry.by_name("STATUS_ACCESS_DENIED"), Some(0xC0000022));
//!
//! let symbols = registry.by_value(1);
//! assert!(symbols.contains(&"FACILITY_DEBUGGER"));
//! assert!(symbols.contains(&"STATUS_WAIT_1"));
//!
//! assert!(registry.check().is_ok());
//! ```
//!
//! ## License
//!
//! Copyright (C) Microsoft Corporation. All rights reserved.
//!
//! SPDX-License-Identifier: BSD-2-Clause-Patent
//!
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

extern crate alloc;

mod registry;
pub mod table;
mod validation;

pub use registry::{Code, NamedCode, Namespace, Registry};
pub use table::TableEntry;
pub use validation::ValidationFinding;

/// Public result type for the crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Public error types for the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Validation reported this many defects.
    MalformedTable { defects: usize },
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::MalformedTable { defects } => write!(f, "NTSTATUS table has {defects} defect(s)"),
        }
    }
}

impl core::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(format!("{}", Error::MalformedTable { defects: 2 }), "NTSTATUS table has 2 defect(s)");
    }

    #[test]
    fn test_registry_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Registry>();
        assert_send_sync::<ValidationFinding>();
    }
}
