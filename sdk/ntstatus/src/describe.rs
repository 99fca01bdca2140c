//! Human readable rendering of status words.
//!
//! ## License
//!
//! Copyright (C) Microsoft Corporation. All rights reserved.
//!
//! SPDX-License-Identifier: BSD-2-Clause-Patent
//!
use alloc::vec::Vec;
use core::fmt;

use ntstatus_classifier::{decode, DecodedStatus, FacilityId, Severity, StatusValue};

use crate::registry;

/// A decoded status word together with the names the registry knows for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Description {
    status: DecodedStatus,
    symbols: Vec<&'static str>,
    facility_name: Option<&'static str>,
}

impl Description {
    /// The decoded subfields.
    pub fn status(&self) -> DecodedStatus {
        self.status
    }

    /// The raw status word.
    pub fn raw(&self) -> u32 {
        self.status.to_raw()
    }

    /// Shorthand for `self.status().severity()`.
    pub fn severity(&self) -> Severity {
        self.status.severity()
    }

    /// Every status symbol registered for the word, in table order.
    ///
    /// Facility symbols that happen to share the number are not included; the word is a status.
    pub fn symbols(&self) -> &[&'static str] {
        &self.symbols
    }

    /// The first registered status symbol, if any.
    pub fn symbol(&self) -> Option<&'static str> {
        self.symbols.first().copied()
    }

    /// The facility symbol for the facility subfield, if one is registered.
    pub fn facility_name(&self) -> Option<&'static str> {
        self.facility_name
    }
}

/// Decodes `raw` and attaches the registered names for the word and its facility.
pub fn describe(raw: u32) -> Description {
    let registry = registry();
    let status = decode(raw);
    let symbols = registry.statuses_by_value(StatusValue::new(raw)).to_vec();
    if symbols.is_empty() {
        log::trace!("No symbol registered for status {raw:#010X}.");
    }
    Description { status, symbols, facility_name: registry.facility_name(status.facility_id()) }
}

impl fmt::Display for Description {
    /// Renders `SYMBOL (0xVALUE, Severity, facility F)`.
    ///
    /// Aliases are joined with `|`. Unregistered words print as `unknown status`. The facility is
    /// printed by name when one is registered and as a decimal number otherwise.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.symbols.split_first() {
            Some((first, rest)) => {
                f.write_str(first)?;
                for symbol in rest {
                    write!(f, " | {symbol}")?;
                }
            }
            None => f.write_str("unknown status")?,
        }

        write!(f, " ({}, {}, facility ", self.status.status(), self.status.severity())?;
        match self.facility_name {
            Some(name) => f.write_str(name)?,
            None => write!(f, "{}", FacilityId::raw(self.status.facility_id()))?,
        }
        if self.status.is_customer_code() {
            f.write_str(", customer")?;
        }
        f.write_str(")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_registered_status() {
        let description = describe(0xC000_0022);
        assert_eq!(description.symbol(), Some("STATUS_ACCESS_DENIED"));
        assert_eq!(description.symbols(), &["STATUS_ACCESS_DENIED"]);
        assert_eq!(description.severity(), Severity::Error);
        assert_eq!(description.raw(), 0xC000_0022);
        assert_eq!(description.facility_name(), None);
        assert_eq!(description.to_string(), "STATUS_ACCESS_DENIED (0xC0000022, Error, facility 0)");
    }

    #[test]
    fn test_describe_lists_aliases() {
        let description = describe(0);
        assert_eq!(description.symbols(), &["STATUS_SUCCESS", "STATUS_WAIT_0"]);
        assert_eq!(description.to_string(), "STATUS_SUCCESS | STATUS_WAIT_0 (0x00000000, Success, facility 0)");
    }

    #[test]
    fn test_describe_excludes_facility_symbols() {
        let description = describe(1);
        assert_eq!(description.symbols(), &["STATUS_WAIT_1"]);
    }

    #[test]
    fn test_describe_names_the_facility() {
        let description = describe(0xC002_001B);
        assert_eq!(description.symbol(), Some("RPC_NT_CALL_FAILED"));
        assert_eq!(description.facility_name(), Some("FACILITY_RPC_RUNTIME"));
        assert_eq!(description.to_string(), "RPC_NT_CALL_FAILED (0xC002001B, Error, facility FACILITY_RPC_RUNTIME)");
    }

    #[test]
    fn test_describe_unregistered_status() {
        let description = describe(0xE0FF_1234);
        assert_eq!(description.symbol(), None);
        assert!(description.status().is_customer_code());
        assert_eq!(description.to_string(), "unknown status (0xE0FF1234, Error, facility 255, customer)");
    }
}
