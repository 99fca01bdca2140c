//! Diagnostics over the NTSTATUS table.
//!
//! ## License
//!
//! Copyright (C) Microsoft Corporation. All rights reserved.
//!
//! SPDX-License-Identifier: BSD-2-Clause-Patent
//!
use alloc::{collections::BTreeMap, vec, vec::Vec};
use core::fmt;

use ntstatus_classifier::{FacilityId, StatusValue};

use crate::registry::{Index, Namespace};

/// A single observation reported by [Registry::validate](crate::Registry::validate).
///
/// Defects mean the table is wrong and must be fixed. Everything else is advisory: the table mirrors
/// the platform header, and the header itself reuses numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationFinding {
    /// A symbol is defined twice in one namespace with different values. The first value is indexed.
    ConflictingDefinition { symbol: &'static str, namespace: Namespace, first: u32, second: u32 },
    /// A symbol is defined twice in one namespace with the same value.
    DuplicateDefinition { symbol: &'static str, namespace: Namespace, value: u32 },
    /// A symbol is defined as both a facility and a status. The facility definition is indexed.
    SymbolInBothNamespaces { symbol: &'static str, facility: u32, status: u32 },
    /// Several symbols share one numeric value. Each group is in table order.
    ValueCollision { value: u32, facilities: Vec<&'static str>, statuses: Vec<&'static str> },
    /// A facility constant does not fit in the 12-bit facility subfield.
    FacilityOutOfRange { symbol: &'static str, value: u32 },
}

impl ValidationFinding {
    /// Returns true if the finding means the table is malformed.
    pub fn is_defect(&self) -> bool {
        match self {
            ValidationFinding::ConflictingDefinition { .. }
            | ValidationFinding::SymbolInBothNamespaces { .. }
            | ValidationFinding::FacilityOutOfRange { .. } => true,
            ValidationFinding::DuplicateDefinition { .. } | ValidationFinding::ValueCollision { .. } => false,
        }
    }

    /// The namespaces the finding involves.
    pub fn namespaces(&self) -> Vec<Namespace> {
        match self {
            ValidationFinding::ConflictingDefinition { namespace, .. }
            | ValidationFinding::DuplicateDefinition { namespace, .. } => vec![*namespace],
            ValidationFinding::SymbolInBothNamespaces { .. } => vec![Namespace::Facility, Namespace::Status],
            ValidationFinding::ValueCollision { facilities, statuses, .. } => {
                let mut namespaces = Vec::new();
                if !facilities.is_empty() {
                    namespaces.push(Namespace::Facility);
                }
                if !statuses.is_empty() {
                    namespaces.push(Namespace::Status);
                }
                namespaces
            }
            ValidationFinding::FacilityOutOfRange { .. } => vec![Namespace::Facility],
        }
    }
}

impl fmt::Display for ValidationFinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationFinding::ConflictingDefinition { symbol, namespace, first, second } => {
                write!(f, "{namespace} symbol {symbol} defined as both {first:#X} and {second:#X}")
            }
            ValidationFinding::DuplicateDefinition { symbol, namespace, value } => {
                write!(f, "{namespace} symbol {symbol} defined twice as {value:#X}")
            }
            ValidationFinding::SymbolInBothNamespaces { symbol, facility, status } => {
                write!(f, "symbol {symbol} defined as facility {facility:#X} and status {status:#010X}")
            }
            ValidationFinding::ValueCollision { value, facilities, statuses } => {
                write!(f, "value {value:#X} shared by")?;
                for symbol in facilities.iter().chain(statuses.iter()) {
                    write!(f, " {symbol}")?;
                }
                Ok(())
            }
            ValidationFinding::FacilityOutOfRange { symbol, value } => {
                write!(f, "facility {symbol} = {value:#X} exceeds {:#X}", FacilityId::MAX.raw())
            }
        }
    }
}

/// Classifies a second definition of an already indexed symbol.
pub(crate) fn redefinition(symbol: &'static str, namespace: Namespace, first: u32, second: u32) -> ValidationFinding {
    if first == second {
        ValidationFinding::DuplicateDefinition { symbol, namespace, value: first }
    } else {
        ValidationFinding::ConflictingDefinition { symbol, namespace, first, second }
    }
}

/// One [ValidationFinding::ValueCollision] per numeric value held by more than one symbol, in
/// ascending value order.
pub(crate) fn value_collisions(
    facilities: &Index<FacilityId>,
    statuses: &Index<StatusValue>,
) -> Vec<ValidationFinding> {
    let mut by_value: BTreeMap<u32, (Vec<&'static str>, Vec<&'static str>)> = BTreeMap::new();
    for (facility, symbols) in facilities.values() {
        by_value.entry(u32::from(facility.raw())).or_default().0.extend_from_slice(symbols);
    }
    for (status, symbols) in statuses.values() {
        by_value.entry(status.raw()).or_default().1.extend_from_slice(symbols);
    }

    by_value
        .into_iter()
        .filter(|(_, (facilities, statuses))| facilities.len() + statuses.len() > 1)
        .map(|(value, (facilities, statuses))| ValidationFinding::ValueCollision { value, facilities, statuses })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{table::TableEntry, Error, Registry};
    use log::{Level, LevelFilter, Metadata, Record};
    use std::sync::Mutex;

    struct SimpleLogger {
        records: Mutex<Vec<(Level, String)>>,
    }

    impl log::Log for SimpleLogger {
        fn enabled(&self, metadata: &Metadata) -> bool {
            metadata.level() <= Level::Debug
        }

        fn log(&self, record: &Record) {
            if self.enabled(record.metadata()) {
                println!("{} - {}", record.level(), record.args());
                if let Ok(mut records) = self.records.lock() {
                    records.push((record.level(), record.args().to_string()));
                }
            }
        }

        fn flush(&self) {}
    }

    static LOGGER: SimpleLogger = SimpleLogger { records: Mutex::new(Vec::new()) };

    fn init() {
        let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(LevelFilter::Debug));
    }

    static FACILITIES: &[TableEntry] = &[
        TableEntry::new("FACILITY_ONE", 0x1),
        TableEntry::new("FACILITY_TWO", 0x2),
        TableEntry::new("FACILITY_TWO", 0x2),
        TableEntry::new("FACILITY_ONE", 0x5),
        TableEntry::new("FACILITY_WIDE", 0x1000),
        TableEntry::new("FACILITY_SHARED", 0x3),
    ];

    static STATUSES: &[TableEntry] = &[
        TableEntry::new("STATUS_OK", 0x0000_0000),
        TableEntry::new("STATUS_OK_TOO", 0x0000_0000),
        TableEntry::new("STATUS_ONE", 0x0000_0001),
        TableEntry::new("FACILITY_SHARED", 0xC003_0001),
        TableEntry::new("STATUS_FAILED", 0xC000_0001),
        TableEntry::new("STATUS_FAILED", 0xC000_0002),
        TableEntry::new("STATUS_AGAIN", 0xC000_0003),
        TableEntry::new("STATUS_AGAIN", 0xC000_0003),
    ];

    fn fixture() -> Vec<ValidationFinding> {
        init();
        Registry::new(FACILITIES, STATUSES).validate()
    }

    #[test]
    fn test_compiled_table_has_no_defects() {
        init();
        let registry = Registry::global();
        let findings = registry.validate();
        let defects: Vec<_> = findings.iter().filter(|finding| finding.is_defect()).collect();
        assert!(defects.is_empty(), "Compiled table defects: {defects:?}");
        assert_eq!(registry.check(), Ok(()));
    }

    #[test]
    fn test_compiled_table_reports_known_collisions() {
        let findings = Registry::global().validate();
        let none: Vec<&str> = Vec::new();
        let collision = |value: u32| {
            findings.iter().find_map(|finding| match finding {
                ValidationFinding::ValueCollision { value: v, facilities, statuses } if *v == value => {
                    Some((facilities.clone(), statuses.clone()))
                }
                _ => None,
            })
        };

        assert_eq!(collision(0x0), Some((none.clone(), vec!["STATUS_SUCCESS", "STATUS_WAIT_0"])));
        assert_eq!(collision(0x1), Some((vec!["FACILITY_DEBUGGER"], vec!["STATUS_WAIT_1"])));
        assert_eq!(collision(0x80), Some((none.clone(), vec!["STATUS_ABANDONED", "STATUS_ABANDONED_WAIT_0"])));
        assert_eq!(collision(0xC000_0022), None);
    }

    #[test]
    fn test_validate_does_not_alter_registry() {
        let registry = Registry::new(FACILITIES, STATUSES);
        let before: Vec<_> = registry.iter().collect();
        let first = registry.validate();
        let second = registry.validate();
        assert_eq!(first, second);
        assert_eq!(before, registry.iter().collect::<Vec<_>>());
    }

    #[test]
    fn test_conflicting_definition_is_a_defect() {
        let findings = fixture();
        assert!(findings.contains(&ValidationFinding::ConflictingDefinition {
            symbol: "FACILITY_ONE",
            namespace: Namespace::Facility,
            first: 0x1,
            second: 0x5,
        }));
        assert!(findings.contains(&ValidationFinding::ConflictingDefinition {
            symbol: "STATUS_FAILED",
            namespace: Namespace::Status,
            first: 0xC000_0001,
            second: 0xC000_0002,
        }));
        assert!(findings.iter().filter(|f| matches!(f, ValidationFinding::ConflictingDefinition { .. })).all(|f| f.is_defect()));
    }

    #[test]
    fn test_first_definition_wins() {
        let registry = Registry::new(FACILITIES, STATUSES);
        assert_eq!(registry.by_name("FACILITY_ONE"), Some(0x1));
        assert_eq!(registry.by_name("STATUS_FAILED"), Some(0xC000_0001));
        assert!(registry.by_value(0x5).is_empty());
        assert!(registry.by_value(0xC000_0002).is_empty());
    }

    #[test]
    fn test_duplicate_definition_is_advisory() {
        let findings = fixture();
        let duplicate =
            ValidationFinding::DuplicateDefinition { symbol: "STATUS_AGAIN", namespace: Namespace::Status, value: 0xC000_0003 };
        assert!(findings.contains(&duplicate));
        assert!(!duplicate.is_defect());
        assert!(findings.contains(&ValidationFinding::DuplicateDefinition {
            symbol: "FACILITY_TWO",
            namespace: Namespace::Facility,
            value: 0x2,
        }));
    }

    #[test]
    fn test_symbol_in_both_namespaces_is_a_defect() {
        let findings = fixture();
        let finding =
            ValidationFinding::SymbolInBothNamespaces { symbol: "FACILITY_SHARED", facility: 0x3, status: 0xC003_0001 };
        assert!(findings.contains(&finding));
        assert!(finding.is_defect());
        assert_eq!(finding.namespaces(), vec![Namespace::Facility, Namespace::Status]);

        let registry = Registry::new(FACILITIES, STATUSES);
        assert_eq!(registry.facility_by_name("FACILITY_SHARED").map(FacilityId::raw), Some(0x3));
        assert_eq!(registry.status_by_name("FACILITY_SHARED"), None);
    }

    #[test]
    fn test_facility_out_of_range_is_a_defect() {
        let findings = fixture();
        let finding = ValidationFinding::FacilityOutOfRange { symbol: "FACILITY_WIDE", value: 0x1000 };
        assert!(findings.contains(&finding));
        assert!(finding.is_defect());
        assert_eq!(Registry::new(FACILITIES, STATUSES).by_name("FACILITY_WIDE"), None);
    }

    #[test]
    fn test_value_collisions_cover_each_scope() {
        let findings = fixture();

        let intra = ValidationFinding::ValueCollision {
            value: 0,
            facilities: vec![],
            statuses: vec!["STATUS_OK", "STATUS_OK_TOO"],
        };
        assert!(findings.contains(&intra));
        assert!(!intra.is_defect());
        assert_eq!(intra.namespaces(), vec![Namespace::Status]);

        let cross = ValidationFinding::ValueCollision {
            value: 1,
            facilities: vec!["FACILITY_ONE"],
            statuses: vec!["STATUS_ONE"],
        };
        assert!(findings.contains(&cross));
        assert_eq!(cross.namespaces(), vec![Namespace::Facility, Namespace::Status]);

        // Repeated definitions of one symbol are not collisions.
        assert!(!findings
            .iter()
            .any(|f| matches!(f, ValidationFinding::ValueCollision { value, .. } if *value == 2 || *value == 0xC000_0003)));
    }

    #[test]
    fn test_check_counts_defects() {
        init();
        let registry = Registry::new(FACILITIES, STATUSES);
        // Two conflicts, one symbol in both namespaces, one out of range facility.
        assert_eq!(registry.check(), Err(Error::MalformedTable { defects: 4 }));
    }

    #[test]
    fn test_defects_are_logged_as_warnings() {
        let _ = fixture();
        let records = LOGGER.records.lock().unwrap();
        assert!(records
            .iter()
            .any(|(level, message)| *level == Level::Warn && message.contains("FACILITY_WIDE")));
        assert!(records
            .iter()
            .any(|(level, message)| *level == Level::Debug && message.contains("STATUS_OK_TOO")));
    }

    #[test]
    fn test_display() {
        let finding = ValidationFinding::ValueCollision {
            value: 1,
            facilities: vec!["FACILITY_DEBUGGER"],
            statuses: vec!["STATUS_WAIT_1"],
        };
        assert_eq!(format!("{finding}"), "value 0x1 shared by FACILITY_DEBUGGER STATUS_WAIT_1");

        let finding = ValidationFinding::FacilityOutOfRange { symbol: "FACILITY_WIDE", value: 0x1000 };
        assert_eq!(format!("{finding}"), "facility FACILITY_WIDE = 0x1000 exceeds 0xFFF");

        let finding = ValidationFinding::ConflictingDefinition {
            symbol: "STATUS_FAILED",
            namespace: Namespace::Status,
            first: 0xC000_0001,
            second: 0xC000_0002,
        };
        assert_eq!(format!("{finding}"), "status symbol STATUS_FAILED defined as both 0xC0000001 and 0xC0000002");
    }
}
