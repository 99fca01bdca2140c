//! Behavioral properties of the NTSTATUS stack, exercised through the public surface.
//!
//! ## License
//!
//! Copyright (C) Microsoft Corporation. All rights reserved.
//!
//! SPDX-License-Identifier: BSD-2-Clause-Patent
//!
use std::collections::HashSet;

use ntstatus::{
    all_facilities, all_status_codes, by_name, by_value, decode, facility_name, is_error, is_success,
    is_warning_or_worse, registry, severity_of, validate, DecodedStatus, FacilityId, Severity, StatusValue,
};
use rand::Rng;

const SAMPLES: usize = 100_000;

fn check_layout(value: u32) {
    let status = decode(value);
    assert_eq!(status.severity().into_bits() as u32, (value >> 30) & 0b11, "{value:#010X}");
    assert_eq!(status.is_customer_code(), (value >> 29) & 1 == 1, "{value:#010X}");
    assert_eq!(status.facility() as u32, (value >> 16) & 0xFFF, "{value:#010X}");
    assert_eq!(status.code() as u32, value & 0xFFFF, "{value:#010X}");
    assert_eq!(status.to_raw(), value, "{value:#010X}");
    assert_eq!(StatusValue::from(status).raw(), value, "{value:#010X}");
    assert_eq!(decode(value), status, "decode must be idempotent for {value:#010X}");
    assert_eq!(severity_of(value), status.severity());
}

#[test]
fn decode_matches_the_bit_layout() {
    for value in [0, 1, 0x0FFF_FFFF, 0x1000_0000, 0x2000_0000, 0x4000_0000, 0x8000_0000, 0xC000_0000, u32::MAX] {
        check_layout(value);
    }
    let mut rng = rand::thread_rng();
    for _ in 0..SAMPLES {
        check_layout(rng.gen::<u32>());
    }
}

#[test]
fn canonical_words_classify() {
    assert!(is_success(0x0000_0000));
    assert!(!is_success(0xC000_0001));
    assert_eq!(severity_of(0xC000_0001), Severity::Error);
    assert!(is_warning_or_worse(0x8000_0005));
    assert_eq!(severity_of(0x8000_0005), Severity::Warning);
    assert_eq!(severity_of(0x4000_0000), Severity::Informational);
    assert!(!is_warning_or_worse(0x4000_0000));
}

#[test]
fn zero_decodes_to_an_empty_success() {
    let status: DecodedStatus = decode(0);
    assert_eq!(status.severity(), Severity::Success);
    assert!(!status.is_customer_code());
    assert_eq!(status.facility(), 0);
    assert_eq!(status.code(), 0);
}

#[test]
fn well_known_symbols_resolve() {
    assert_eq!(by_name("STATUS_SUCCESS"), Some(0x0000_0000));
    assert_eq!(by_name("STATUS_ACCESS_DENIED"), Some(0xC000_0022));
    assert_eq!(decode(0xC000_0022).severity(), Severity::Error);
    assert!(is_error(0xC000_0022));
    assert_eq!(by_name("STATUS_NOT_A_REAL_CODE"), None);
}

#[test]
fn shared_values_return_every_symbol() {
    let symbols = by_value(0x0000_0001);
    let distinct: HashSet<_> = symbols.iter().collect();
    assert!(distinct.len() >= 2);
    assert!(distinct.contains(&"FACILITY_DEBUGGER"));
    assert!(distinct.contains(&"STATUS_WAIT_1"));
}

#[test]
fn namespaces_enumerate_every_symbol_once() {
    let facilities: Vec<_> = all_facilities().map(|(symbol, _)| symbol).collect();
    let statuses: Vec<_> = all_status_codes().map(|(symbol, _)| symbol).collect();
    let mut seen = HashSet::new();
    for symbol in facilities.iter().chain(statuses.iter()) {
        assert!(seen.insert(*symbol), "{symbol} enumerated twice");
    }
    assert_eq!(seen.len(), registry().len());
}

#[test]
fn compiled_table_has_no_defects() {
    let defects: Vec<_> = validate().into_iter().filter(|finding| finding.is_defect()).collect();
    assert!(defects.is_empty(), "{defects:?}");
    assert!(registry().check().is_ok());
}

#[test]
fn status_facilities_resolve_to_registered_names() {
    let registered: HashSet<FacilityId> = all_facilities().map(|(_, facility)| facility).collect();
    for (symbol, status) in all_status_codes() {
        let facility = status.facility();
        if registered.contains(&facility) {
            assert!(facility_name(facility).is_some(), "{symbol} has facility {facility} without a name");
        }
    }
}

#[test]
fn compose_inverts_decode() {
    let mut rng = rand::thread_rng();
    for _ in 0..SAMPLES {
        let value = rng.gen::<u32>() & !(1 << 28);
        let status = decode(value);
        let rebuilt = StatusValue::compose(status.severity(), status.is_customer_code(), status.facility_id(), status.code());
        assert_eq!(rebuilt.raw(), value);
    }
}

#[test]
fn every_severity_is_reachable() {
    for severity in Severity::ALL {
        let value = (severity.into_bits() as u32) << 30;
        assert_eq!(severity_of(value), severity);
        assert_eq!(is_success(value), severity == Severity::Success);
        assert_eq!(is_error(value), severity == Severity::Error);
    }
}
