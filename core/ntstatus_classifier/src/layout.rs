//! NTSTATUS bit layout.
//!
//! ## License
//!
//! Copyright (C) Microsoft Corporation. All rights reserved.
//!
//! SPDX-License-Identifier: BSD-2-Clause-Patent
//!
use bitfield_struct::bitfield;

use crate::Severity;

/// Raw view of a status word, one accessor per subfield.
///
/// Fields are listed from the least significant bit upwards.
#[bitfield(u32)]
#[derive(PartialEq, Eq, Hash)]
pub struct StatusWord {
    /// Bits 0..=15.
    pub code: u16,
    /// Bits 16..=27.
    #[bits(12)]
    pub facility: u16,
    /// Bit 28. Clear in every platform-defined NTSTATUS.
    pub reserved: bool,
    /// Bit 29.
    pub customer: bool,
    /// Bits 30..=31.
    #[bits(2, default = Severity::Success)]
    pub severity: Severity,
}

// Must agree with the field widths of `StatusWord`.
pub(crate) const CODE_MASK: u32 = 0xFFFF;
pub(crate) const FACILITY_SHIFT: u32 = 16;
pub(crate) const FACILITY_MASK: u32 = 0xFFF;
pub(crate) const RESERVED_SHIFT: u32 = 28;
pub(crate) const CUSTOMER_SHIFT: u32 = 29;
pub(crate) const SEVERITY_SHIFT: u32 = 30;
pub(crate) const SEVERITY_MASK: u32 = 0b11;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_positions_match_masks() {
        let word = StatusWord::from_bits(0xFFFF_FFFF);
        assert_eq!(word.code() as u32, CODE_MASK);
        assert_eq!(word.facility() as u32, FACILITY_MASK);
        assert!(word.reserved());
        assert!(word.customer());
        assert_eq!(word.severity(), Severity::Error);

        let word = StatusWord::new().with_facility(0xFFF);
        assert_eq!(word.into_bits(), FACILITY_MASK << FACILITY_SHIFT);

        let word = StatusWord::new().with_reserved(true);
        assert_eq!(word.into_bits(), 1 << RESERVED_SHIFT);

        let word = StatusWord::new().with_customer(true);
        assert_eq!(word.into_bits(), 1 << CUSTOMER_SHIFT);

        let word = StatusWord::new().with_severity(Severity::Error);
        assert_eq!(word.into_bits(), SEVERITY_MASK << SEVERITY_SHIFT);
    }

    #[test]
    fn test_new_word_is_zero() {
        let word = StatusWord::new();
        assert_eq!(word.into_bits(), 0);
        assert_eq!(word.severity(), Severity::Success);
    }

    #[test]
    fn test_canonical_failure_layout() {
        let word = StatusWord::from_bits(0xC0000001);
        assert_eq!(word.severity(), Severity::Error);
        assert!(!word.customer());
        assert!(!word.reserved());
        assert_eq!(word.facility(), 0);
        assert_eq!(word.code(), 1);
    }
}
