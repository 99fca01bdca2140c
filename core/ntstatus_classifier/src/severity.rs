//! Severity subfield of a status word.
//!
//! ## License
//!
//! Copyright (C) Microsoft Corporation. All rights reserved.
//!
//! SPDX-License-Identifier: BSD-2-Clause-Patent
//!
use crate::Error;

/// The outcome class of a status, stored in the top two bits of the word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Severity {
    /// `STATUS_SEVERITY_SUCCESS`
    Success = 0,
    /// `STATUS_SEVERITY_INFORMATIONAL`
    Informational = 1,
    /// `STATUS_SEVERITY_WARNING`
    Warning = 2,
    /// `STATUS_SEVERITY_ERROR`
    Error = 3,
}

impl Severity {
    /// All severities, ordered from least to most severe.
    pub const ALL: [Severity; 4] = [Severity::Success, Severity::Informational, Severity::Warning, Severity::Error];

    /// Converts the severity into its two-bit encoding.
    pub const fn into_bits(self) -> u8 {
        self as u8
    }

    /// Converts a two-bit encoding into a severity. Bits above the low two are ignored.
    pub const fn from_bits(value: u8) -> Self {
        match value & 0b11 {
            0 => Severity::Success,
            1 => Severity::Informational,
            2 => Severity::Warning,
            _ => Severity::Error,
        }
    }

    /// Returns true for [Severity::Warning] and [Severity::Error].
    pub const fn is_warning_or_worse(self) -> bool {
        matches!(self, Severity::Warning | Severity::Error)
    }

    /// The name used by the platform headers, e.g. `STATUS_SEVERITY_ERROR`.
    pub const fn header_name(self) -> &'static str {
        match self {
            Severity::Success => "STATUS_SEVERITY_SUCCESS",
            Severity::Informational => "STATUS_SEVERITY_INFORMATIONAL",
            Severity::Warning => "STATUS_SEVERITY_WARNING",
            Severity::Error => "STATUS_SEVERITY_ERROR",
        }
    }
}

impl TryFrom<u8> for Severity {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Error> {
        if value > 0b11 {
            log::trace!("Rejecting severity {value}, only two bits are available.");
            return Err(Error::InvalidSeverity(value));
        }
        Ok(Severity::from_bits(value))
    }
}

impl From<Severity> for u8 {
    fn from(severity: Severity) -> u8 {
        severity.into_bits()
    }
}

impl core::fmt::Display for Severity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            Severity::Success => "Success",
            Severity::Informational => "Informational",
            Severity::Warning => "Warning",
            Severity::Error => "Error",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bits_round_trip() {
        for severity in Severity::ALL {
            assert_eq!(Severity::from_bits(severity.into_bits()), severity);
        }
        assert_eq!(Severity::Success.into_bits(), 0);
        assert_eq!(Severity::Informational.into_bits(), 1);
        assert_eq!(Severity::Warning.into_bits(), 2);
        assert_eq!(Severity::Error.into_bits(), 3);
    }

    #[test]
    fn test_from_bits_ignores_high_bits() {
        assert_eq!(Severity::from_bits(0b100), Severity::Success);
        assert_eq!(Severity::from_bits(0xFF), Severity::Error);
    }

    #[test]
    fn test_try_from_rejects_wide_values() {
        assert_eq!(Severity::try_from(2), Ok(Severity::Warning));
        assert_eq!(Severity::try_from(4), Err(Error::InvalidSeverity(4)));
        assert_eq!(Severity::try_from(u8::MAX), Err(Error::InvalidSeverity(u8::MAX)));
    }

    #[test]
    fn test_warning_or_worse() {
        assert!(!Severity::Success.is_warning_or_worse());
        assert!(!Severity::Informational.is_warning_or_worse());
        assert!(Severity::Warning.is_warning_or_worse());
        assert!(Severity::Error.is_warning_or_worse());
    }

    #[test]
    fn test_ordering_follows_encoding() {
        assert!(Severity::Success < Severity::Informational);
        assert!(Severity::Informational < Severity::Warning);
        assert!(Severity::Warning < Severity::Error);
    }

    #[test]
    fn test_names() {
        assert_eq!(Severity::Error.header_name(), "STATUS_SEVERITY_ERROR");
        assert_eq!(format!("{}", Severity::Informational), "Informational");
    }
}
