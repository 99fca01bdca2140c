//! Bidirectional symbol/value indices over the NTSTATUS table.
//!
//! ## License
//!
//! Copyright (C) Microsoft Corporation. All rights reserved.
//!
//! SPDX-License-Identifier: BSD-2-Clause-Patent
//!
use alloc::{collections::BTreeMap, vec::Vec};
use core::fmt;

use ntstatus_classifier::{FacilityId, StatusValue};
use spin::Once;

use crate::{
    table::{self, TableEntry},
    validation::{self, ValidationFinding},
    Error, Result,
};

static REGISTRY: Once<Registry> = Once::new();

/// The two symbol namespaces held by the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Namespace {
    /// `FACILITY_*` constants: 12-bit facility subfield values.
    Facility,
    /// Complete 32-bit status words.
    Status,
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Namespace::Facility => f.write_str("facility"),
            Namespace::Status => f.write_str("status"),
        }
    }
}

/// A registered value, typed by its namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Code {
    /// A facility subfield value.
    Facility(FacilityId),
    /// A complete status word.
    Status(StatusValue),
}

impl Code {
    /// The numeric value, widened to `u32` for facilities.
    pub fn raw(&self) -> u32 {
        match self {
            Code::Facility(facility) => u32::from(facility.raw()),
            Code::Status(status) => status.raw(),
        }
    }

    /// The namespace the value belongs to.
    pub fn namespace(&self) -> Namespace {
        match self {
            Code::Facility(_) => Namespace::Facility,
            Code::Status(_) => Namespace::Status,
        }
    }
}

/// A symbol together with its typed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NamedCode {
    symbol: &'static str,
    code: Code,
}

impl NamedCode {
    /// The symbol.
    pub fn symbol(&self) -> &'static str {
        self.symbol
    }

    /// The typed value.
    pub fn code(&self) -> Code {
        self.code
    }

    /// The numeric value.
    pub fn value(&self) -> u32 {
        self.code.raw()
    }

    /// The namespace of the symbol.
    pub fn namespace(&self) -> Namespace {
        self.code.namespace()
    }
}

/// Name and value indices for one namespace.
///
/// `entries` keeps the first definition of every symbol in table order. Later definitions of the same
/// symbol are never indexed; they only surface as validation findings.
#[derive(Debug)]
pub(crate) struct Index<V> {
    entries: Vec<(&'static str, V)>,
    names: BTreeMap<&'static str, V>,
    values: BTreeMap<V, Vec<&'static str>>,
}

impl<V> Index<V>
where
    V: Copy + Ord,
{
    fn new() -> Self {
        Self { entries: Vec::new(), names: BTreeMap::new(), values: BTreeMap::new() }
    }

    fn insert(&mut self, symbol: &'static str, value: V) {
        self.entries.push((symbol, value));
        self.names.insert(symbol, value);
        self.values.entry(value).or_default().push(symbol);
    }

    fn get(&self, symbol: &str) -> Option<V> {
        self.names.get(symbol).copied()
    }

    fn symbols(&self, value: V) -> &[&'static str] {
        self.values.get(&value).map(Vec::as_slice).unwrap_or(&[])
    }

    pub(crate) fn values(&self) -> impl Iterator<Item = (V, &[&'static str])> + '_ {
        self.values.iter().map(|(value, symbols)| (*value, symbols.as_slice()))
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

/// The NTSTATUS code registry.
///
/// Facility ids and status words are indexed separately. Name lookups consult both indices, since a
/// symbol lives in exactly one of them. Value lookups report every symbol with that numeric value in
/// either namespace, so a facility id and a status word that happen to share a number are both
/// returned.
///
/// The registry is immutable once built. [Registry::global] holds the instance over the compiled
/// table; [Registry::new] builds one over any pair of tables.
#[derive(Debug)]
pub struct Registry {
    facilities: Index<FacilityId>,
    statuses: Index<StatusValue>,
    table_findings: Vec<ValidationFinding>,
}

impl Registry {
    /// The process-wide registry over the compiled-in table, built on first use.
    pub fn global() -> &'static Registry {
        REGISTRY.call_once(|| Registry::new(table::FACILITIES, table::STATUS_CODES))
    }

    /// Builds a registry over the given tables.
    ///
    /// Building never fails. Entries that cannot be indexed are skipped and reported by
    /// [Registry::validate]:
    ///
    /// - a facility value wider than 12 bits,
    /// - a second definition of a symbol already seen in the same namespace,
    /// - a status symbol already defined as a facility.
    pub fn new(facilities: &'static [TableEntry], statuses: &'static [TableEntry]) -> Self {
        let mut findings = Vec::new();

        let mut facility_index = Index::<FacilityId>::new();
        for entry in facilities {
            let Ok(facility) = FacilityId::try_from(entry.value) else {
                findings.push(ValidationFinding::FacilityOutOfRange { symbol: entry.symbol, value: entry.value });
                continue;
            };
            match facility_index.get(entry.symbol) {
                Some(existing) => findings.push(validation::redefinition(
                    entry.symbol,
                    Namespace::Facility,
                    u32::from(existing.raw()),
                    entry.value,
                )),
                None => facility_index.insert(entry.symbol, facility),
            }
        }

        let mut status_index = Index::<StatusValue>::new();
        for entry in statuses {
            if let Some(facility) = facility_index.get(entry.symbol) {
                findings.push(ValidationFinding::SymbolInBothNamespaces {
                    symbol: entry.symbol,
                    facility: u32::from(facility.raw()),
                    status: entry.value,
                });
                continue;
            }
            match status_index.get(entry.symbol) {
                Some(existing) => findings.push(validation::redefinition(
                    entry.symbol,
                    Namespace::Status,
                    StatusValue::raw(existing),
                    entry.value,
                )),
                None => status_index.insert(entry.symbol, StatusValue::new(entry.value)),
            }
        }

        log::debug!(
            "Built NTSTATUS registry: {} facilities, {} status codes, {} table findings.",
            facility_index.len(),
            status_index.len(),
            findings.len()
        );

        Self { facilities: facility_index, statuses: status_index, table_findings: findings }
    }

    /// Returns the value registered for `symbol` in either namespace.
    pub fn by_name(&self, symbol: &str) -> Option<u32> {
        self.lookup(symbol).map(|named| named.value())
    }

    /// Returns the symbol and its typed value.
    pub fn lookup(&self, symbol: &str) -> Option<NamedCode> {
        if let Some((symbol, status)) = self.statuses.names.get_key_value(symbol) {
            return Some(NamedCode { symbol, code: Code::Status(*status) });
        }
        if let Some((symbol, facility)) = self.facilities.names.get_key_value(symbol) {
            return Some(NamedCode { symbol, code: Code::Facility(*facility) });
        }
        log::trace!("No NTSTATUS symbol named {symbol:?}.");
        None
    }

    /// Returns the facility id registered for `symbol`, if it is a facility symbol.
    pub fn facility_by_name(&self, symbol: &str) -> Option<FacilityId> {
        self.facilities.get(symbol)
    }

    /// Returns the status word registered for `symbol`, if it is a status symbol.
    pub fn status_by_name(&self, symbol: &str) -> Option<StatusValue> {
        self.statuses.get(symbol)
    }

    /// Returns every symbol whose value is `value`, facilities first, each group in table order.
    ///
    /// The result may be empty or hold several symbols; the table assigns the same number to unrelated
    /// symbols in both namespaces.
    pub fn by_value(&self, value: u32) -> Vec<&'static str> {
        let mut symbols = Vec::new();
        if let Ok(facility) = FacilityId::try_from(value) {
            symbols.extend_from_slice(self.facilities.symbols(facility));
        }
        symbols.extend_from_slice(self.statuses.symbols(StatusValue::new(value)));
        symbols
    }

    /// Returns the facility symbols registered for `facility`.
    pub fn facilities_by_value(&self, facility: FacilityId) -> &[&'static str] {
        self.facilities.symbols(facility)
    }

    /// Returns the status symbols registered for `status`.
    pub fn statuses_by_value(&self, status: StatusValue) -> &[&'static str] {
        self.statuses.symbols(status)
    }

    /// Returns the facility symbol for a facility subfield value.
    ///
    /// When several symbols share the value, the first one in table order is returned.
    pub fn facility_name(&self, facility: FacilityId) -> Option<&'static str> {
        self.facilities.symbols(facility).first().copied()
    }

    /// Iterates the facility namespace in table order.
    pub fn all_facilities(&self) -> impl Iterator<Item = (&'static str, FacilityId)> + '_ {
        self.facilities.entries.iter().copied()
    }

    /// Iterates the status namespace in table order.
    pub fn all_status_codes(&self) -> impl Iterator<Item = (&'static str, StatusValue)> + '_ {
        self.statuses.entries.iter().copied()
    }

    /// Iterates both namespaces, facilities first.
    pub fn iter(&self) -> impl Iterator<Item = NamedCode> + '_ {
        let facilities = self.all_facilities().map(|(symbol, facility)| NamedCode { symbol, code: Code::Facility(facility) });
        let statuses = self.all_status_codes().map(|(symbol, status)| NamedCode { symbol, code: Code::Status(status) });
        facilities.chain(statuses)
    }

    /// The number of indexed facility symbols.
    pub fn facility_count(&self) -> usize {
        self.facilities.len()
    }

    /// The number of indexed status symbols.
    pub fn status_count(&self) -> usize {
        self.statuses.len()
    }

    /// The number of indexed symbols across both namespaces.
    pub fn len(&self) -> usize {
        self.facility_count() + self.status_count()
    }

    /// Returns true if no symbol is indexed.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Reports table defects and value collisions.
    ///
    /// Findings are diagnostic only; see [ValidationFinding::is_defect] for which ones indicate a broken
    /// table. The registry is not modified.
    pub fn validate(&self) -> Vec<ValidationFinding> {
        let mut findings = self.table_findings.clone();
        findings.extend(validation::value_collisions(&self.facilities, &self.statuses));
        for finding in &findings {
            if finding.is_defect() {
                log::warn!("NTSTATUS table defect: {finding}");
            } else {
                log::debug!("NTSTATUS table note: {finding}");
            }
        }
        findings
    }

    /// Fails with [Error::MalformedTable] if [Registry::validate] reports any defect.
    pub fn check(&self) -> Result<()> {
        let defects = self.validate().iter().filter(|finding| finding.is_defect()).count();
        if defects > 0 {
            return Err(Error::MalformedTable { defects });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ntstatus_classifier::{decode, Severity};
    use std::{collections::HashSet, thread};

    static FIXTURE_FACILITIES: &[TableEntry] =
        &[TableEntry::new("FACILITY_ALPHA", 0x1), TableEntry::new("FACILITY_BETA", 0x2)];
    static FIXTURE_STATUSES: &[TableEntry] = &[
        TableEntry::new("ALPHA_SUCCESS", 0x0000_0000),
        TableEntry::new("ALPHA_WAIT_1", 0x0000_0001),
        TableEntry::new("ALPHA_FAILED", 0xC001_0001),
        TableEntry::new("BETA_FAILED", 0xC002_0001),
    ];

    #[test]
    fn test_by_name_on_compiled_table() {
        let registry = Registry::global();
        assert_eq!(registry.by_name("STATUS_SUCCESS"), Some(0x0000_0000));
        assert_eq!(registry.by_name("STATUS_ACCESS_DENIED"), Some(0xC000_0022));
        assert_eq!(decode(0xC000_0022).severity(), Severity::Error);
        assert_eq!(registry.by_name("STATUS_BUFFER_OVERFLOW"), Some(0x8000_0005));
        assert_eq!(registry.by_name("FACILITY_DEBUGGER"), Some(0x1));
        assert_eq!(registry.by_name("FACILITY_NTWIN32"), Some(0x7));
    }

    #[test]
    fn test_by_name_misses_are_none() {
        let registry = Registry::global();
        assert_eq!(registry.by_name("STATUS_NOT_A_REAL_CODE"), None);
        assert_eq!(registry.by_name(""), None);
        // Lookups are case sensitive.
        assert_eq!(registry.by_name("status_success"), None);
        assert_eq!(registry.by_name("STATUS_SUCCESS "), None);
    }

    #[test]
    fn test_typed_lookups_respect_namespace() {
        let registry = Registry::global();
        assert_eq!(registry.facility_by_name("FACILITY_RPC_RUNTIME").map(FacilityId::raw), Some(0x2));
        assert_eq!(registry.facility_by_name("STATUS_WAIT_2"), None);
        assert_eq!(registry.status_by_name("STATUS_WAIT_2"), Some(StatusValue::new(0x2)));
        assert_eq!(registry.status_by_name("FACILITY_RPC_RUNTIME"), None);

        let named = registry.lookup("FACILITY_RPC_RUNTIME").unwrap();
        assert_eq!(named.namespace(), Namespace::Facility);
        assert_eq!(named.value(), 0x2);
        let named = registry.lookup("STATUS_WAIT_2").unwrap();
        assert_eq!(named.namespace(), Namespace::Status);
        assert_eq!(named.code(), Code::Status(StatusValue::new(0x2)));
    }

    #[test]
    fn test_by_value_returns_every_symbol() {
        let registry = Registry::global();
        let symbols = registry.by_value(0x0000_0001);
        assert!(symbols.len() >= 2);
        assert!(symbols.contains(&"FACILITY_DEBUGGER"));
        assert!(symbols.contains(&"STATUS_WAIT_1"));

        let symbols = registry.by_value(0);
        assert!(symbols.contains(&"STATUS_SUCCESS"));
        assert!(symbols.contains(&"STATUS_WAIT_0"));

        assert_eq!(registry.by_value(0xC000_0022), vec!["STATUS_ACCESS_DENIED"]);
        assert!(registry.by_value(0xDEAD_BEEF).is_empty());
    }

    #[test]
    fn test_by_value_orders_facilities_first() {
        let registry = Registry::new(FIXTURE_FACILITIES, FIXTURE_STATUSES);
        assert_eq!(registry.by_value(1), vec!["FACILITY_ALPHA", "ALPHA_WAIT_1"]);
        assert_eq!(registry.by_value(2), vec!["FACILITY_BETA"]);
        assert_eq!(registry.by_value(0xC002_0001), vec!["BETA_FAILED"]);
    }

    #[test]
    fn test_by_value_above_facility_range_only_matches_statuses() {
        let registry = Registry::global();
        assert_eq!(registry.by_value(0x0001_0001), vec!["DBG_EXCEPTION_HANDLED"]);
        assert!(registry.by_value(0x1000).is_empty());
        assert!(registry.by_value(u32::from(FacilityId::MAX.raw()) + 1).is_empty());
    }

    #[test]
    fn test_typed_reverse_lookups() {
        let registry = Registry::global();
        let debugger = FacilityId::new(0x1).unwrap();
        assert_eq!(registry.facilities_by_value(debugger), &["FACILITY_DEBUGGER"]);
        assert_eq!(registry.statuses_by_value(StatusValue::new(0x1)), &["STATUS_WAIT_1"]);
        assert_eq!(registry.facility_name(debugger), Some("FACILITY_DEBUGGER"));
        assert_eq!(registry.facility_name(FacilityId::NONE), None);
        assert!(registry.facilities_by_value(FacilityId::MAX).is_empty());
    }

    #[test]
    fn test_facility_codes_resolve() {
        let registry = Registry::global();
        let pinned: &[(&str, u32)] = &[
            ("STATUS_PKINIT_FAILURE", 0xC000_0320),
            ("STATUS_DOWNGRADE_DETECTED", 0xC000_0388),
            ("STATUS_KDC_CERT_EXPIRED", 0xC000_040E),
            ("STATUS_REVOCATION_OFFLINE_C", 0xC000_038B),
            ("STATUS_MCA_OCCURED", 0xC000_036A),
            ("STATUS_WAKE_SYSTEM", 0x4000_0294),
            ("STATUS_DATA_LOST_REPAIR", 0x8000_0803),
            ("STATUS_WOW_ASSERTION", 0xC000_9898),
            ("RPC_NT_CALL_FAILED", 0xC002_001B),
            ("EPT_NT_CANT_CREATE", 0xC002_004C),
            ("RPC_NT_PIPE_EMPTY", 0xC003_0061),
            ("STATUS_PNP_INVALID_ID", 0xC004_0038),
            ("STATUS_CTX_SHADOW_DENIED", 0xC00A_002A),
            ("STATUS_MUI_FILE_NOT_FOUND", 0xC00B_0001),
            ("STATUS_CLUSTER_NODE_DOWN", 0xC013_000C),
            ("STATUS_ACPI_FATAL", 0xC014_0006),
            ("STATUS_SXS_CORRUPTION", 0xC015_0015),
            ("STATUS_TRANSACTION_NOT_ENLISTED", 0xC019_0061),
            ("STATUS_LOG_SECTOR_INVALID", 0xC01A_0001),
            ("STATUS_LOG_NO_RESTART", 0x401A_000C),
            ("STATUS_VIDEO_HUNG_DISPLAY_DRIVER_THREAD", 0xC01B_00EA),
            ("STATUS_FLT_NO_WAITER_FOR_REPLY", 0xC01C_0020),
            ("STATUS_MONITOR_NO_DESCRIPTOR", 0xC01D_0001),
            ("STATUS_GRAPHICS_INVALID_VIDPN", 0xC01E_0303),
            ("STATUS_GRAPHICS_MODE_NOT_IN_MODESET", 0xC01E_034A),
            ("STATUS_FVE_LOCKED_VOLUME", 0xC021_0000),
            ("STATUS_FWP_DROP_NOICMP", 0xC022_0104),
            ("STATUS_NDIS_NOT_SUPPORTED", 0xC023_00BB),
            ("STATUS_QUIC_HANDSHAKE_FAILURE", 0xC024_0000),
            ("STATUS_TPM_AUTHFAIL", 0xC029_0001),
            ("STATUS_TPM_20_E_ASYMMETRIC", 0xC029_0081),
            ("STATUS_PCP_DEVICE_NOT_READY", 0xC029_2001),
            ("STATUS_HV_ACCESS_DENIED", 0xC035_0006),
            ("STATUS_IPSEC_DOSP_BLOCK", 0xC036_8000),
            ("STATUS_VID_DUPLICATE_HANDLER", 0xC037_0001),
            ("STATUS_VOLMGR_DATABASE_FULL", 0xC038_0001),
            ("STATUS_VOLMGR_INCOMPLETE_REGENERATION", 0x8038_0001),
            ("STATUS_BCD_TOO_MANY_ELEMENTS", 0xC039_0002),
            ("STATUS_VHD_DRIVE_FOOTER_MISSING", 0xC03A_0001),
            ("STATUS_RKF_KEY_NOT_FOUND", 0xC040_0001),
            ("STATUS_RDBSS_RESTART_OPERATION", 0xC041_0001),
            ("STATUS_BTH_ATT_INVALID_HANDLE", 0xC042_0001),
            ("STATUS_SECUREBOOT_ROLLBACK_DETECTED", 0xC043_0001),
            ("STATUS_AUDIO_ENGINE_NODE_NOT_FOUND", 0xC044_0001),
            ("STATUS_VSM_NOT_INITIALIZED", 0xC045_0000),
            ("STATUS_IORING_CORRUPT", 0xC046_0007),
            ("STATUS_VOLSNAP_BOOTFILE_NOT_VALID", 0xC050_0003),
            ("STATUS_SVHDX_ERROR_STORED", 0xC05C_0000),
            ("STATUS_SMB_GUEST_LOGON_BLOCKED", 0xC05D_0002),
            ("STATUS_SPACES_REPAIRED", 0x00E7_0000),
            ("STATUS_SPACES_MARK_DIRTY", 0xC0E7_0020),
            ("STATUS_SECCORE_INVALID_COMMAND", 0xC0E8_0000),
            ("STATUS_SYSTEM_INTEGRITY_POLICY_VIOLATION", 0xC0E9_0002),
            ("STATUS_NO_APPLICABLE_APP_LICENSES_FOUND", 0xC0EA_0001),
            ("STATUS_PLATFORM_MANIFEST_NOT_AUTHORIZED", 0xC0EB_0001),
            ("STATUS_APPEXEC_UNKNOWN_USER", 0xC0EC_0007),
        ];
        for &(symbol, value) in pinned {
            assert_eq!(registry.status_by_name(symbol), Some(StatusValue::new(value)), "{symbol}");
            assert!(registry.statuses_by_value(StatusValue::new(value)).contains(&symbol), "{symbol}");
        }

        let populated = [
            "FACILITY_RPC_RUNTIME",
            "FACILITY_RPC_STUBS",
            "FACILITY_IO_ERROR_CODE",
            "FACILITY_TERMINAL_SERVER",
            "FACILITY_MUI_ERROR_CODE",
            "FACILITY_CLUSTER_ERROR_CODE",
            "FACILITY_ACPI_ERROR_CODE",
            "FACILITY_SXS_ERROR_CODE",
            "FACILITY_TRANSACTION",
            "FACILITY_COMMONLOG",
            "FACILITY_VIDEO",
            "FACILITY_FILTER_MANAGER",
            "FACILITY_MONITOR",
            "FACILITY_GRAPHICS_KERNEL",
            "FACILITY_FVE_ERROR_CODE",
            "FACILITY_FWP_ERROR_CODE",
            "FACILITY_NDIS_ERROR_CODE",
            "FACILITY_QUIC_ERROR_CODE",
            "FACILITY_TPM",
            "FACILITY_HYPERVISOR",
            "FACILITY_IPSEC",
            "FACILITY_VIRTUALIZATION",
            "FACILITY_VOLMGR",
            "FACILITY_BCD_ERROR_CODE",
            "FACILITY_RESUME_KEY_FILTER",
            "FACILITY_RDBSS",
            "FACILITY_BTH_ATT",
            "FACILITY_SECUREBOOT",
            "FACILITY_AUDIO_KERNEL",
            "FACILITY_VSM",
            "FACILITY_NT_IORING",
            "FACILITY_VOLSNAP",
            "FACILITY_SHARED_VHDX",
            "FACILITY_SMB",
            "FACILITY_SPACES",
            "FACILITY_SECURITY_CORE",
            "FACILITY_SYSTEM_INTEGRITY",
            "FACILITY_LICENSING",
            "FACILITY_PLATFORM_MANIFEST",
            "FACILITY_APP_EXEC",
        ];
        for symbol in populated {
            let facility = registry.facility_by_name(symbol).unwrap();
            assert!(
                registry.all_status_codes().any(|(_, status)| status.facility() == facility),
                "{symbol} has no status codes"
            );
        }
    }

    #[test]
    fn test_namespaces_partition_the_table() {
        let registry = Registry::global();
        let facilities: HashSet<_> = registry.all_facilities().map(|(symbol, _)| symbol).collect();
        let statuses: HashSet<_> = registry.all_status_codes().map(|(symbol, _)| symbol).collect();

        assert_eq!(facilities.len(), registry.facility_count(), "Facility symbols must be unique.");
        assert_eq!(statuses.len(), registry.status_count(), "Status symbols must be unique.");
        assert!(facilities.is_disjoint(&statuses), "No symbol may live in both namespaces.");

        let table: HashSet<_> =
            table::FACILITIES.iter().chain(table::STATUS_CODES.iter()).map(|entry| entry.symbol).collect();
        let indexed: HashSet<_> = facilities.union(&statuses).copied().collect();
        assert_eq!(table, indexed, "Every table symbol must be enumerated exactly once.");
        assert_eq!(registry.len(), table.len());
        assert!(!registry.is_empty());
    }

    #[test]
    fn test_iteration_is_restartable() {
        let registry = Registry::global();
        let first: Vec<_> = registry.all_status_codes().collect();
        let second: Vec<_> = registry.all_status_codes().collect();
        assert_eq!(first, second);
        assert_eq!(registry.all_facilities().count(), registry.all_facilities().count());
        assert_eq!(registry.iter().count(), registry.len());
    }

    #[test]
    fn test_iteration_follows_table_order() {
        let registry = Registry::new(FIXTURE_FACILITIES, FIXTURE_STATUSES);
        let symbols: Vec<_> = registry.iter().map(|named| named.symbol()).collect();
        assert_eq!(symbols, ["FACILITY_ALPHA", "FACILITY_BETA", "ALPHA_SUCCESS", "ALPHA_WAIT_1", "ALPHA_FAILED", "BETA_FAILED"]);
    }

    #[test]
    fn test_every_table_entry_resolves_to_its_value() {
        let registry = Registry::global();
        for entry in table::FACILITIES {
            assert_eq!(registry.by_name(entry.symbol), Some(entry.value), "{}", entry.symbol);
            assert!(registry.by_value(entry.value).contains(&entry.symbol), "{}", entry.symbol);
        }
        for entry in table::STATUS_CODES {
            assert_eq!(registry.by_name(entry.symbol), Some(entry.value), "{}", entry.symbol);
            assert!(registry.by_value(entry.value).contains(&entry.symbol), "{}", entry.symbol);
        }
    }

    #[test]
    fn test_facility_subfields_resolve_through_facility_names() {
        let registry = Registry::global();
        let rpc = registry.status_by_name("RPC_NT_CALL_FAILED").unwrap();
        assert_eq!(registry.facility_name(rpc.facility()), Some("FACILITY_RPC_RUNTIME"));
        let cluster = registry.status_by_name("STATUS_CLUSTER_NODE_DOWN").unwrap();
        assert_eq!(registry.facility_name(cluster.facility()), Some("FACILITY_CLUSTER_ERROR_CODE"));
        let hv = registry.status_by_name("STATUS_HV_ACCESS_DENIED").unwrap();
        assert_eq!(registry.facility_name(hv.facility()), Some("FACILITY_HYPERVISOR"));
    }

    #[test]
    fn test_global_registry_is_built_once() {
        let first = Registry::global() as *const Registry;
        let second = Registry::global() as *const Registry;
        assert_eq!(first, second);
    }

    #[test]
    fn test_concurrent_lookups_agree() {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                thread::spawn(|| {
                    let registry = Registry::global();
                    (registry.by_name("STATUS_ACCESS_DENIED"), registry.by_value(1).len(), registry.len())
                })
            })
            .collect();
        let results: Vec<_> = handles.into_iter().map(|handle| handle.join().unwrap()).collect();
        assert!(results.windows(2).all(|pair| pair[0] == pair[1]));
        assert_eq!(results[0].0, Some(0xC000_0022));
    }

    #[test]
    fn test_empty_registry() {
        let registry = Registry::new(&[], &[]);
        assert!(registry.is_empty());
        assert_eq!(registry.by_name("STATUS_SUCCESS"), None);
        assert!(registry.by_value(0).is_empty());
        assert!(registry.validate().is_empty());
        assert_eq!(registry.check(), Ok(()));
    }

    #[test]
    fn test_code_accessors() {
        let code = Code::Facility(FacilityId::new(0x13).unwrap());
        assert_eq!(code.raw(), 0x13);
        assert_eq!(code.namespace(), Namespace::Facility);
        let code = Code::Status(StatusValue::new(0xC000_0022));
        assert_eq!(code.raw(), 0xC000_0022);
        assert_eq!(code.namespace(), Namespace::Status);
        assert_eq!(format!("{}", Namespace::Facility), "facility");
    }
}
