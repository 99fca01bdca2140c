//! Status words, facility ids, and the decoding functions over them.
//!
//! ## License
//!
//! Copyright (C) Microsoft Corporation. All rights reserved.
//!
//! SPDX-License-Identifier: BSD-2-Clause-Patent
//!
use core::fmt;

use crate::{
    layout::{
        StatusWord, CODE_MASK, CUSTOMER_SHIFT, FACILITY_MASK, FACILITY_SHIFT, RESERVED_SHIFT, SEVERITY_MASK,
        SEVERITY_SHIFT,
    },
    Error, Result, Severity,
};

/// The 12-bit facility subfield of a status word.
///
/// A facility id is not a status. It cannot be decoded and it is only meaningful as bits 16..=27 of a
/// [StatusValue].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct FacilityId(u16);

impl FacilityId {
    /// `FACILITY_NONE`, the facility of most kernel status codes.
    pub const NONE: FacilityId = FacilityId(0);
    /// The largest value the subfield can hold.
    pub const MAX: FacilityId = FacilityId(FACILITY_MASK as u16);

    /// Creates a facility id, failing if `value` does not fit in 12 bits.
    pub fn new(value: u16) -> Result<Self> {
        if value as u32 > FACILITY_MASK {
            log::trace!("Rejecting facility {value:#x}, only 12 bits are available.");
            return Err(Error::FacilityOutOfRange(value as u32));
        }
        Ok(FacilityId(value))
    }

    /// Extracts the facility subfield of a status word.
    pub const fn from_status(status: StatusValue) -> Self {
        FacilityId(((status.0 >> FACILITY_SHIFT) & FACILITY_MASK) as u16)
    }

    /// The subfield value.
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl TryFrom<u32> for FacilityId {
    type Error = Error;

    fn try_from(value: u32) -> Result<Self> {
        match u16::try_from(value) {
            Ok(narrow) => FacilityId::new(narrow),
            Err(_) => Err(Error::FacilityOutOfRange(value)),
        }
    }
}

impl From<FacilityId> for u16 {
    fn from(facility: FacilityId) -> u16 {
        facility.0
    }
}

impl fmt::Display for FacilityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#05X}", self.0)
    }
}

/// A complete 32-bit status word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct StatusValue(u32);

impl StatusValue {
    /// `STATUS_SUCCESS`
    pub const SUCCESS: StatusValue = StatusValue(0x0000_0000);
    /// `STATUS_UNSUCCESSFUL`
    pub const UNSUCCESSFUL: StatusValue = StatusValue(0xC000_0001);

    /// Wraps a raw status word. Every `u32` is a valid status word.
    pub const fn new(raw: u32) -> Self {
        StatusValue(raw)
    }

    /// Builds a status word from its subfields. The reserved bit is left clear.
    pub fn compose(severity: Severity, customer: bool, facility: FacilityId, code: u16) -> Self {
        let word = StatusWord::new()
            .with_code(code)
            .with_facility(facility.raw())
            .with_customer(customer)
            .with_severity(severity);
        StatusValue(word.into_bits())
    }

    /// The raw word.
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Splits the word into its subfields.
    pub fn decode(self) -> DecodedStatus {
        decode(self.0)
    }

    /// The severity subfield.
    pub const fn severity(self) -> Severity {
        Severity::from_bits(((self.0 >> SEVERITY_SHIFT) & SEVERITY_MASK) as u8)
    }

    /// The facility subfield.
    pub const fn facility(self) -> FacilityId {
        FacilityId::from_status(self)
    }

    /// The code subfield.
    pub const fn code(self) -> u16 {
        (self.0 & CODE_MASK) as u16
    }

    /// Returns true if the customer bit is set.
    pub const fn is_customer_code(self) -> bool {
        (self.0 >> CUSTOMER_SHIFT) & 1 == 1
    }

    /// Returns true if the reserved bit is set. Platform-defined NTSTATUS values leave it clear.
    pub const fn is_reserved_set(self) -> bool {
        (self.0 >> RESERVED_SHIFT) & 1 == 1
    }

    /// Returns true if the severity is [Severity::Success].
    pub const fn is_success(self) -> bool {
        matches!(self.severity(), Severity::Success)
    }

    /// Returns true if the severity is [Severity::Error].
    pub const fn is_error(self) -> bool {
        matches!(self.severity(), Severity::Error)
    }

    /// Returns true if the severity is [Severity::Warning] or [Severity::Error].
    pub const fn is_warning_or_worse(self) -> bool {
        self.severity().is_warning_or_worse()
    }

    /// Converts the status into a `Result`.
    ///
    /// Success severity maps to `Ok`, every other severity to `Err`, both carrying the status unchanged.
    pub const fn into_result(self) -> core::result::Result<StatusValue, StatusValue> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(self)
        }
    }
}

impl From<u32> for StatusValue {
    fn from(raw: u32) -> Self {
        StatusValue(raw)
    }
}

impl From<StatusValue> for u32 {
    fn from(status: StatusValue) -> u32 {
        status.0
    }
}

impl From<DecodedStatus> for StatusValue {
    fn from(decoded: DecodedStatus) -> Self {
        StatusValue(decoded.to_raw())
    }
}

impl fmt::Display for StatusValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010X}", self.0)
    }
}

impl fmt::UpperHex for StatusValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.0, f)
    }
}

impl fmt::LowerHex for StatusValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

/// A status word split into its subfields.
///
/// Only produced by [decode]. The reserved bit is recorded so that [DecodedStatus::to_raw] reproduces
/// the original word for every input, including words that are not well-formed NTSTATUS values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DecodedStatus {
    severity: Severity,
    customer: bool,
    reserved: bool,
    facility: FacilityId,
    code: u16,
}

impl DecodedStatus {
    /// The severity subfield.
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Returns true if the customer bit is set.
    pub fn is_customer_code(&self) -> bool {
        self.customer
    }

    /// Returns true if the reserved bit is set.
    pub fn is_reserved_set(&self) -> bool {
        self.reserved
    }

    /// The raw facility subfield.
    pub fn facility(&self) -> u16 {
        self.facility.raw()
    }

    /// The facility subfield as a [FacilityId].
    pub fn facility_id(&self) -> FacilityId {
        self.facility
    }

    /// The code subfield.
    pub fn code(&self) -> u16 {
        self.code
    }

    /// Reassembles the word this record was decoded from.
    pub fn to_raw(&self) -> u32 {
        StatusWord::new()
            .with_code(self.code)
            .with_facility(self.facility.raw())
            .with_reserved(self.reserved)
            .with_customer(self.customer)
            .with_severity(self.severity)
            .into_bits()
    }

    /// The decoded word as a [StatusValue].
    pub fn status(&self) -> StatusValue {
        StatusValue(self.to_raw())
    }
}

/// Splits `raw` into its severity, customer, reserved, facility and code subfields.
pub fn decode(raw: u32) -> DecodedStatus {
    let word = StatusWord::from_bits(raw);
    DecodedStatus {
        severity: word.severity(),
        customer: word.customer(),
        reserved: word.reserved(),
        facility: FacilityId(word.facility()),
        code: word.code(),
    }
}

/// The severity of `raw`.
pub const fn severity_of(raw: u32) -> Severity {
    StatusValue(raw).severity()
}

/// Returns true if `raw` has success severity.
pub const fn is_success(raw: u32) -> bool {
    StatusValue(raw).is_success()
}

/// Returns true if `raw` has informational severity.
pub const fn is_information(raw: u32) -> bool {
    matches!(severity_of(raw), Severity::Informational)
}

/// Returns true if `raw` has warning severity.
pub const fn is_warning(raw: u32) -> bool {
    matches!(severity_of(raw), Severity::Warning)
}

/// Returns true if `raw` has error severity.
pub const fn is_error(raw: u32) -> bool {
    StatusValue(raw).is_error()
}

/// Returns true if `raw` has warning or error severity.
pub const fn is_warning_or_worse(raw: u32) -> bool {
    StatusValue(raw).is_warning_or_worse()
}

/// Returns true if the customer bit of `raw` is set.
pub const fn is_customer_code(raw: u32) -> bool {
    StatusValue(raw).is_customer_code()
}

/// The facility subfield of `raw`.
pub const fn facility_of(raw: u32) -> FacilityId {
    StatusValue(raw).facility()
}

/// The code subfield of `raw`.
pub const fn code_of(raw: u32) -> u16 {
    StatusValue(raw).code()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    const SAMPLES: usize = 100_000;

    fn boundary_words() -> Vec<u32> {
        let mut words = vec![0, u32::MAX, 0x0000_FFFF, 0x0FFF_0000, 0x1000_0000, 0x2000_0000, 0xC000_0000];
        words.extend((0..32).map(|bit| 1u32 << bit));
        words.extend((0..32).map(|bit| !(1u32 << bit)));
        for top in 0..16u32 {
            for low in [0u32, 1, 0x22, 0xFFFF, 0x0001_0001, 0x0FFF_FFFF] {
                words.push((top << 28) | low);
            }
        }
        words
    }

    fn check_invariants(v: u32) {
        let decoded = decode(v);
        assert_eq!(decoded.severity().into_bits() as u32, (v >> 30) & 0b11, "severity of {v:#010x}");
        assert_eq!(decoded.is_customer_code(), (v >> 29) & 1 == 1, "customer bit of {v:#010x}");
        assert_eq!(decoded.is_reserved_set(), (v >> 28) & 1 == 1, "reserved bit of {v:#010x}");
        assert_eq!(decoded.facility() as u32, (v >> 16) & 0xFFF, "facility of {v:#010x}");
        assert_eq!(decoded.code() as u32, v & 0xFFFF, "code of {v:#010x}");
        assert_eq!(decoded.to_raw(), v, "round trip of {v:#010x}");
        assert_eq!(decoded, decode(v), "decode must be idempotent");
        let status = StatusValue::new(v);
        assert_eq!(status.is_reserved_set(), decoded.is_reserved_set(), "reserved bit of {v:#010x}");
        assert_eq!(status.is_customer_code(), decoded.is_customer_code(), "customer bit of {v:#010x}");
    }

    #[test]
    fn test_reserved_bit() {
        assert!(!StatusValue::new(0xC000_0022).is_reserved_set());
        assert!(StatusValue::new(0x1000_0000).is_reserved_set());
        assert!(StatusValue::new(0xD000_0001).is_reserved_set());
        assert!(!StatusValue::compose(Severity::Error, true, FacilityId::MAX, 0xFFFF).is_reserved_set());
    }

    #[test]
    fn test_decode_invariants_on_boundary_words() {
        for v in boundary_words() {
            check_invariants(v);
        }
    }

    #[test]
    fn test_decode_invariants_on_random_words() {
        let mut rng = rand::thread_rng();
        for _ in 0..SAMPLES {
            check_invariants(rng.gen::<u32>());
        }
    }

    #[test]
    fn test_decode_zero() {
        let decoded = decode(0);
        assert_eq!(decoded.severity(), Severity::Success);
        assert!(!decoded.is_customer_code());
        assert_eq!(decoded.facility(), 0);
        assert_eq!(decoded.code(), 0);
        assert!(is_success(0));
    }

    #[test]
    fn test_each_severity_is_reachable() {
        assert_eq!(severity_of(0x0000_0000), Severity::Success);
        assert_eq!(severity_of(0x4000_0000), Severity::Informational);
        assert_eq!(severity_of(0x8000_0005), Severity::Warning);
        assert_eq!(severity_of(0xC000_0001), Severity::Error);
    }

    #[test]
    fn test_predicates_per_severity() {
        // (word, success, information, warning, error, warning_or_worse)
        let cases = [
            (0x0000_0103, true, false, false, false, false),
            (0x4000_0000, false, true, false, false, false),
            (0x8000_0005, false, false, true, false, true),
            (0xC000_0022, false, false, false, true, true),
        ];
        for (v, success, information, warning, error, warning_or_worse) in cases {
            assert_eq!(is_success(v), success, "{v:#010x}");
            assert_eq!(is_information(v), information, "{v:#010x}");
            assert_eq!(is_warning(v), warning, "{v:#010x}");
            assert_eq!(is_error(v), error, "{v:#010x}");
            assert_eq!(is_warning_or_worse(v), warning_or_worse, "{v:#010x}");
        }
    }

    #[test]
    fn test_success_is_not_a_magnitude_check() {
        // Large values with clear severity bits are still successes.
        assert!(is_success(0x3FFF_FFFF));
        assert!(is_success(0x2000_0001));
        assert!(!is_success(0x4000_0000));
    }

    #[test]
    fn test_canonical_codes() {
        assert!(!is_success(0xC000_0001));
        assert_eq!(severity_of(0xC000_0001), Severity::Error);
        assert!(is_warning_or_worse(0x8000_0005));
        assert_eq!(severity_of(0x8000_0005), Severity::Warning);
        assert_eq!(decode(0xC000_0022).severity(), Severity::Error);
    }

    #[test]
    fn test_facility_id_range() {
        assert_eq!(FacilityId::new(0), Ok(FacilityId::NONE));
        assert_eq!(FacilityId::new(0xFFF), Ok(FacilityId::MAX));
        assert_eq!(FacilityId::new(0x1000), Err(Error::FacilityOutOfRange(0x1000)));
        assert_eq!(FacilityId::try_from(0x13u32).map(FacilityId::raw), Ok(0x13));
        assert_eq!(FacilityId::try_from(0x1_0000u32), Err(Error::FacilityOutOfRange(0x1_0000)));
    }

    #[test]
    fn test_facility_from_status() {
        assert_eq!(FacilityId::from_status(StatusValue::new(0xC002_0001)).raw(), 0x2);
        assert_eq!(facility_of(0x8013_0001).raw(), 0x13);
        assert_eq!(facility_of(0xFFFF_FFFF), FacilityId::MAX);
        assert_eq!(code_of(0xC002_0001), 1);
        assert!(is_customer_code(0xE000_0001));
        assert!(!is_customer_code(0xC000_0001));
    }

    #[test]
    fn test_compose_inverts_decode() {
        let mut rng = rand::thread_rng();
        for _ in 0..SAMPLES {
            // Compose never sets the reserved bit, so clear it in the sample.
            let v = rng.gen::<u32>() & !(1 << 28);
            let decoded = decode(v);
            let composed =
                StatusValue::compose(decoded.severity(), decoded.is_customer_code(), decoded.facility_id(), decoded.code());
            assert_eq!(composed.raw(), v);
            assert_eq!(composed.decode(), decoded);
        }
    }

    #[test]
    fn test_compose_known_words() {
        let facility = FacilityId::new(0x2).unwrap();
        assert_eq!(StatusValue::compose(Severity::Error, false, facility, 0x1).raw(), 0xC002_0001);
        assert_eq!(StatusValue::compose(Severity::Success, false, FacilityId::NONE, 0).raw(), 0);
        assert_eq!(StatusValue::compose(Severity::Informational, true, FacilityId::MAX, 0xFFFF).raw(), 0x6FFF_FFFF);
    }

    #[test]
    fn test_into_result() {
        assert_eq!(StatusValue::SUCCESS.into_result(), Ok(StatusValue::SUCCESS));
        assert_eq!(StatusValue::new(0x103).into_result(), Ok(StatusValue::new(0x103)));
        assert_eq!(StatusValue::UNSUCCESSFUL.into_result(), Err(StatusValue::UNSUCCESSFUL));
        assert_eq!(StatusValue::new(0x4000_0000).into_result(), Err(StatusValue::new(0x4000_0000)));
    }

    #[test]
    fn test_decoded_converts_back_to_status() {
        let decoded = decode(0xC000_0022);
        assert_eq!(StatusValue::from(decoded), StatusValue::new(0xC000_0022));
        assert_eq!(decoded.status().raw(), 0xC000_0022);
    }

    #[test]
    fn test_formatting() {
        assert_eq!(format!("{}", StatusValue::new(0xC000_0022)), "0xC0000022");
        assert_eq!(format!("{}", StatusValue::SUCCESS), "0x00000000");
        assert_eq!(format!("{:x}", StatusValue::new(0xC000_0022)), "c0000022");
        assert_eq!(format!("{:#X}", StatusValue::new(0x8000_0005)), "0x80000005");
        assert_eq!(format!("{}", FacilityId::new(0x13).unwrap()), "0x013");
    }
}
