//! The compiled-in NTSTATUS table.
//!
//! Entries are transcribed from the platform `ntstatus.h` and must match it exactly. Some values are
//! shared by more than one symbol, both within a namespace (`STATUS_SUCCESS` and `STATUS_WAIT_0`) and
//! across namespaces (`FACILITY_DEBUGGER` and `STATUS_WAIT_1`). Those collisions mirror the header and
//! must not be renumbered. Symbols are kept exactly as spelled in the header.
//!
//! ## License
//!
//! Copyright (C) Microsoft Corporation. All rights reserved.
//!
//! SPDX-License-Identifier: BSD-2-Clause-Patent
//!

/// A symbol and its numeric value as written in the header.
///
/// The value is kept as a raw `u32` for both namespaces so that malformed facility entries can be
/// reported by validation instead of being rejected at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableEntry {
    /// The symbol, e.g. `STATUS_ACCESS_DENIED`.
    pub symbol: &'static str,
    /// The numeric value of the symbol.
    pub value: u32,
}

impl TableEntry {
    /// Creates a table entry.
    pub const fn new(symbol: &'static str, value: u32) -> Self {
        Self { symbol, value }
    }
}

/// `FACILITY_*` constants. Each value is a 12-bit facility subfield, not a status word.
pub static FACILITIES: &[TableEntry] = &[
    TableEntry::new("FACILITY_DEBUGGER", 0x001),
    TableEntry::new("FACILITY_RPC_RUNTIME", 0x002),
    TableEntry::new("FACILITY_RPC_STUBS", 0x003),
    TableEntry::new("FACILITY_IO_ERROR_CODE", 0x004),
    TableEntry::new("FACILITY_CODCLASS_ERROR_CODE", 0x006),
    TableEntry::new("FACILITY_NTWIN32", 0x007),
    TableEntry::new("FACILITY_NTCERT", 0x008),
    TableEntry::new("FACILITY_NTSSPI", 0x009),
    TableEntry::new("FACILITY_TERMINAL_SERVER", 0x00A),
    TableEntry::new("FACILITY_MUI_ERROR_CODE", 0x00B),
    TableEntry::new("FACILITY_USB_ERROR_CODE", 0x010),
    TableEntry::new("FACILITY_HID_ERROR_CODE", 0x011),
    TableEntry::new("FACILITY_FIREWIRE_ERROR_CODE", 0x012),
    TableEntry::new("FACILITY_CLUSTER_ERROR_CODE", 0x013),
    TableEntry::new("FACILITY_ACPI_ERROR_CODE", 0x014),
    TableEntry::new("FACILITY_SXS_ERROR_CODE", 0x015),
    TableEntry::new("FACILITY_TRANSACTION", 0x019),
    TableEntry::new("FACILITY_COMMONLOG", 0x01A),
    TableEntry::new("FACILITY_VIDEO", 0x01B),
    TableEntry::new("FACILITY_FILTER_MANAGER", 0x01C),
    TableEntry::new("FACILITY_MONITOR", 0x01D),
    TableEntry::new("FACILITY_GRAPHICS_KERNEL", 0x01E),
    TableEntry::new("FACILITY_DRIVER_FRAMEWORK", 0x020),
    TableEntry::new("FACILITY_FVE_ERROR_CODE", 0x021),
    TableEntry::new("FACILITY_FWP_ERROR_CODE", 0x022),
    TableEntry::new("FACILITY_NDIS_ERROR_CODE", 0x023),
    TableEntry::new("FACILITY_QUIC_ERROR_CODE", 0x024),
    TableEntry::new("FACILITY_TPM", 0x029),
    TableEntry::new("FACILITY_RTPM", 0x02A),
    TableEntry::new("FACILITY_HYPERVISOR", 0x035),
    TableEntry::new("FACILITY_IPSEC", 0x036),
    TableEntry::new("FACILITY_VIRTUALIZATION", 0x037),
    TableEntry::new("FACILITY_VOLMGR", 0x038),
    TableEntry::new("FACILITY_BCD_ERROR_CODE", 0x039),
    TableEntry::new("FACILITY_WIN32K_NTUSER", 0x03E),
    TableEntry::new("FACILITY_WIN32K_NTGDI", 0x03F),
    TableEntry::new("FACILITY_RESUME_KEY_FILTER", 0x040),
    TableEntry::new("FACILITY_RDBSS", 0x041),
    TableEntry::new("FACILITY_BTH_ATT", 0x042),
    TableEntry::new("FACILITY_SECUREBOOT", 0x043),
    TableEntry::new("FACILITY_AUDIO_KERNEL", 0x044),
    TableEntry::new("FACILITY_VSM", 0x045),
    TableEntry::new("FACILITY_NT_IORING", 0x046),
    TableEntry::new("FACILITY_VOLSNAP", 0x050),
    TableEntry::new("FACILITY_SDBUS", 0x051),
    TableEntry::new("FACILITY_SHARED_VHDX", 0x05C),
    TableEntry::new("FACILITY_SMB", 0x05D),
    TableEntry::new("FACILITY_XVS", 0x05E),
    TableEntry::new("FACILITY_INTERIX", 0x099),
    TableEntry::new("FACILITY_SPACES", 0x0E7),
    TableEntry::new("FACILITY_SECURITY_CORE", 0x0E8),
    TableEntry::new("FACILITY_SYSTEM_INTEGRITY", 0x0E9),
    TableEntry::new("FACILITY_LICENSING", 0x0EA),
    TableEntry::new("FACILITY_PLATFORM_MANIFEST", 0x0EB),
    TableEntry::new("FACILITY_APP_EXEC", 0x0EC),
    TableEntry::new("FACILITY_MAXIMUM_VALUE", 0x0ED),
];

/// Full 32-bit status words, grouped by severity and then by facility.
pub static STATUS_CODES: &[TableEntry] = &[
    // Success
    TableEntry::new("STATUS_SUCCESS", 0x00000000),
    TableEntry::new("STATUS_WAIT_0", 0x00000000),
    TableEntry::new("STATUS_WAIT_1", 0x00000001),
    TableEntry::new("STATUS_WAIT_2", 0x00000002),
    TableEntry::new("STATUS_WAIT_3", 0x00000003),
    TableEntry::new("STATUS_WAIT_63", 0x0000003F),
    TableEntry::new("STATUS_ABANDONED", 0x00000080),
    TableEntry::new("STATUS_ABANDONED_WAIT_0", 0x00000080),
    TableEntry::new("STATUS_ABANDONED_WAIT_63", 0x000000BF),
    TableEntry::new("STATUS_USER_APC", 0x000000C0),
    TableEntry::new("STATUS_ALREADY_COMPLETE", 0x000000FF),
    TableEntry::new("STATUS_KERNEL_APC", 0x00000100),
    TableEntry::new("STATUS_ALERTED", 0x00000101),
    TableEntry::new("STATUS_TIMEOUT", 0x00000102),
    TableEntry::new("STATUS_PENDING", 0x00000103),
    TableEntry::new("STATUS_REPARSE", 0x00000104),
    TableEntry::new("STATUS_MORE_ENTRIES", 0x00000105),
    TableEntry::new("STATUS_NOT_ALL_ASSIGNED", 0x00000106),
    TableEntry::new("STATUS_SOME_NOT_MAPPED", 0x00000107),
    TableEntry::new("STATUS_OPLOCK_BREAK_IN_PROGRESS", 0x00000108),
    TableEntry::new("STATUS_VOLUME_MOUNTED", 0x00000109),
    TableEntry::new("STATUS_RXACT_COMMITTED", 0x0000010A),
    TableEntry::new("STATUS_NOTIFY_CLEANUP", 0x0000010B),
    TableEntry::new("STATUS_NOTIFY_ENUM_DIR", 0x0000010C),
    TableEntry::new("STATUS_NO_QUOTAS_FOR_ACCOUNT", 0x0000010D),
    TableEntry::new("STATUS_PRIMARY_TRANSPORT_CONNECT_FAILED", 0x0000010E),
    TableEntry::new("STATUS_PAGE_FAULT_TRANSITION", 0x00000110),
    TableEntry::new("STATUS_PAGE_FAULT_DEMAND_ZERO", 0x00000111),
    TableEntry::new("STATUS_PAGE_FAULT_COPY_ON_WRITE", 0x00000112),
    TableEntry::new("STATUS_PAGE_FAULT_GUARD_PAGE", 0x00000113),
    TableEntry::new("STATUS_PAGE_FAULT_PAGING_FILE", 0x00000114),
    TableEntry::new("STATUS_CACHE_PAGE_LOCKED", 0x00000115),
    TableEntry::new("STATUS_CRASH_DUMP", 0x00000116),
    TableEntry::new("STATUS_BUFFER_ALL_ZEROS", 0x00000117),
    TableEntry::new("STATUS_REPARSE_OBJECT", 0x00000118),
    TableEntry::new("STATUS_RESOURCE_REQUIREMENTS_CHANGED", 0x00000119),
    TableEntry::new("STATUS_TRANSLATION_COMPLETE", 0x00000120),
    TableEntry::new("STATUS_DS_MEMBERSHIP_EVALUATED_LOCALLY", 0x00000121),
    TableEntry::new("STATUS_NOTHING_TO_TERMINATE", 0x00000122),
    TableEntry::new("STATUS_PROCESS_NOT_IN_JOB", 0x00000123),
    TableEntry::new("STATUS_PROCESS_IN_JOB", 0x00000124),
    TableEntry::new("STATUS_VOLSNAP_HIBERNATE_READY", 0x00000125),
    TableEntry::new("STATUS_FSFILTER_OP_COMPLETED_SUCCESSFULLY", 0x00000126),
    TableEntry::new("STATUS_INTERRUPT_VECTOR_ALREADY_CONNECTED", 0x00000127),
    TableEntry::new("STATUS_INTERRUPT_STILL_CONNECTED", 0x00000128),
    TableEntry::new("STATUS_PROCESS_CLONED", 0x00000129),
    TableEntry::new("STATUS_FILE_LOCKED_WITH_ONLY_READERS", 0x0000012A),
    TableEntry::new("STATUS_FILE_LOCKED_WITH_WRITERS", 0x0000012B),
    TableEntry::new("STATUS_RESOURCEMANAGER_READ_ONLY", 0x00000202),
    TableEntry::new("STATUS_WAIT_FOR_OPLOCK", 0x00000367),
    TableEntry::new("DBG_EXCEPTION_HANDLED", 0x00010001),
    TableEntry::new("DBG_CONTINUE", 0x00010002),
    TableEntry::new("STATUS_FLT_IO_COMPLETE", 0x001C0001),
    TableEntry::new("STATUS_SPACES_REPAIRED", 0x00E70000),
    TableEntry::new("STATUS_SPACES_PAUSE", 0x00E70001),
    TableEntry::new("STATUS_SPACES_COMPLETE", 0x00E70002),
    TableEntry::new("STATUS_SPACES_REDIRECT", 0x00E70003),

    // Informational
    TableEntry::new("STATUS_OBJECT_NAME_EXISTS", 0x40000000),
    TableEntry::new("STATUS_THREAD_WAS_SUSPENDED", 0x40000001),
    TableEntry::new("STATUS_WORKING_SET_LIMIT_RANGE", 0x40000002),
    TableEntry::new("STATUS_IMAGE_NOT_AT_BASE", 0x40000003),
    TableEntry::new("STATUS_RXACT_STATE_CREATED", 0x40000004),
    TableEntry::new("STATUS_SEGMENT_NOTIFICATION", 0x40000005),
    TableEntry::new("STATUS_LOCAL_USER_SESSION_KEY", 0x40000006),
    TableEntry::new("STATUS_BAD_CURRENT_DIRECTORY", 0x40000007),
    TableEntry::new("STATUS_SERIAL_MORE_WRITES", 0x40000008),
    TableEntry::new("STATUS_REGISTRY_RECOVERED", 0x40000009),
    TableEntry::new("STATUS_FT_READ_RECOVERY_FROM_BACKUP", 0x4000000A),
    TableEntry::new("STATUS_FT_WRITE_RECOVERY", 0x4000000B),
    TableEntry::new("STATUS_SERIAL_COUNTER_TIMEOUT", 0x4000000C),
    TableEntry::new("STATUS_NULL_LM_PASSWORD", 0x4000000D),
    TableEntry::new("STATUS_IMAGE_MACHINE_TYPE_MISMATCH", 0x4000000E),
    TableEntry::new("STATUS_RECEIVE_PARTIAL", 0x4000000F),
    TableEntry::new("STATUS_RECEIVE_EXPEDITED", 0x40000010),
    TableEntry::new("STATUS_RECEIVE_PARTIAL_EXPEDITED", 0x40000011),
    TableEntry::new("STATUS_EVENT_DONE", 0x40000012),
    TableEntry::new("STATUS_EVENT_PENDING", 0x40000013),
    TableEntry::new("STATUS_CHECKING_FILE_SYSTEM", 0x40000014),
    TableEntry::new("STATUS_FATAL_APP_EXIT", 0x40000015),
    TableEntry::new("STATUS_PREDEFINED_HANDLE", 0x40000016),
    TableEntry::new("STATUS_WAS_UNLOCKED", 0x40000017),
    TableEntry::new("STATUS_SERVICE_NOTIFICATION", 0x40000018),
    TableEntry::new("STATUS_WAS_LOCKED", 0x40000019),
    TableEntry::new("STATUS_LOG_HARD_ERROR", 0x4000001A),
    TableEntry::new("STATUS_ALREADY_WIN32", 0x4000001B),
    TableEntry::new("STATUS_WX86_UNSIMULATE", 0x4000001C),
    TableEntry::new("STATUS_WX86_CONTINUE", 0x4000001D),
    TableEntry::new("STATUS_WX86_SINGLE_STEP", 0x4000001E),
    TableEntry::new("STATUS_WX86_BREAKPOINT", 0x4000001F),
    TableEntry::new("STATUS_WX86_EXCEPTION_CONTINUE", 0x40000020),
    TableEntry::new("STATUS_WX86_EXCEPTION_LASTCHANCE", 0x40000021),
    TableEntry::new("STATUS_WX86_EXCEPTION_CHAIN", 0x40000022),
    TableEntry::new("STATUS_IMAGE_MACHINE_TYPE_MISMATCH_EXE", 0x40000023),
    TableEntry::new("STATUS_NO_YIELD_PERFORMED", 0x40000024),
    TableEntry::new("STATUS_TIMER_RESUME_IGNORED", 0x40000025),
    TableEntry::new("STATUS_ARBITRATION_UNHANDLED", 0x40000026),
    TableEntry::new("STATUS_CARDBUS_NOT_SUPPORTED", 0x40000027),
    TableEntry::new("STATUS_WX86_CREATEWX86TIB", 0x40000028),
    TableEntry::new("STATUS_MP_PROCESSOR_MISMATCH", 0x40000029),
    TableEntry::new("STATUS_HIBERNATED", 0x4000002A),
    TableEntry::new("STATUS_RESUME_HIBERNATION", 0x4000002B),
    TableEntry::new("STATUS_FIRMWARE_UPDATED", 0x4000002C),
    TableEntry::new("STATUS_DRIVERS_LEAKING_LOCKED_PAGES", 0x4000002D),
    TableEntry::new("STATUS_MESSAGE_RETRIEVED", 0x4000002E),
    TableEntry::new("STATUS_SYSTEM_POWERSTATE_TRANSITION", 0x4000002F),
    TableEntry::new("STATUS_ALPC_CHECK_COMPLETION_LIST", 0x40000030),
    TableEntry::new("STATUS_SYSTEM_POWERSTATE_COMPLEX_TRANSITION", 0x40000031),
    TableEntry::new("STATUS_ACCESS_AUDIT_BY_POLICY", 0x40000032),
    TableEntry::new("STATUS_ABANDON_HIBERFILE", 0x40000033),
    TableEntry::new("STATUS_BIZRULES_NOT_ENABLED", 0x40000034),
    TableEntry::new("STATUS_FT_READ_FROM_COPY", 0x40000035),
    TableEntry::new("STATUS_IMAGE_AT_DIFFERENT_BASE", 0x40000036),
    TableEntry::new("STATUS_PATCH_DEFERRED", 0x40000037),
    TableEntry::new("STATUS_EMULATION_BREAKPOINT", 0x40000038),
    TableEntry::new("STATUS_EMULATION_SYSCALL", 0x40000039),
    TableEntry::new("STATUS_WAKE_SYSTEM", 0x40000294),
    TableEntry::new("STATUS_DS_SHUTTING_DOWN", 0x40000370),
    TableEntry::new("STATUS_DISK_REPAIR_REDIRECTED", 0x40000807),
    TableEntry::new("STATUS_SERVICES_FAILED_AUTOSTART", 0x4000A144),
    TableEntry::new("DBG_REPLY_LATER", 0x40010001),
    TableEntry::new("DBG_UNABLE_TO_PROVIDE_HANDLE", 0x40010002),
    TableEntry::new("DBG_TERMINATE_THREAD", 0x40010003),
    TableEntry::new("DBG_TERMINATE_PROCESS", 0x40010004),
    TableEntry::new("DBG_CONTROL_C", 0x40010005),
    TableEntry::new("DBG_PRINTEXCEPTION_C", 0x40010006),
    TableEntry::new("DBG_RIPEXCEPTION", 0x40010007),
    TableEntry::new("DBG_CONTROL_BREAK", 0x40010008),
    TableEntry::new("DBG_COMMAND_EXCEPTION", 0x40010009),
    TableEntry::new("DBG_PRINTEXCEPTION_WIDE_C", 0x4001000A),
    TableEntry::new("RPC_NT_UUID_LOCAL_ONLY", 0x40020056),
    TableEntry::new("RPC_NT_SEND_INCOMPLETE", 0x400200AF),
    TableEntry::new("STATUS_CTX_CDM_CONNECT", 0x400A0004),
    TableEntry::new("STATUS_CTX_CDM_DISCONNECT", 0x400A0005),
    TableEntry::new("STATUS_SXS_RELEASE_ACTIVATION_CONTEXT", 0x4015000D),
    TableEntry::new("STATUS_HEURISTIC_DAMAGE_POSSIBLE", 0x40190001),
    TableEntry::new("STATUS_RM_ALREADY_STARTED", 0x40190002),
    TableEntry::new("STATUS_LOG_NO_RESTART", 0x401A000C),
    TableEntry::new("STATUS_VIDEO_DRIVER_DEBUG_REPORT_REQUEST", 0x401B00EC),
    TableEntry::new("STATUS_GRAPHICS_PARTIAL_DATA_POPULATED", 0x401E000A),
    TableEntry::new("STATUS_GRAPHICS_SKIP_ALLOCATION_PREPARATION", 0x401E0201),
    TableEntry::new("STATUS_GRAPHICS_MODE_NOT_PINNED", 0x401E0307),
    TableEntry::new("STATUS_GRAPHICS_NO_PREFERRED_MODE", 0x401E031E),
    TableEntry::new("STATUS_GRAPHICS_DATASET_IS_EMPTY", 0x401E034B),
    TableEntry::new("STATUS_GRAPHICS_NO_MORE_ELEMENTS_IN_DATASET", 0x401E034C),
    TableEntry::new("STATUS_GRAPHICS_PATH_CONTENT_GEOMETRY_TRANSFORMATION_NOT_PINNED", 0x401E0351),
    TableEntry::new("STATUS_GRAPHICS_LEADLINK_START_DEFERRED", 0x401E0437),
    TableEntry::new("STATUS_GRAPHICS_POLLING_TOO_FREQUENTLY", 0x401E0439),
    TableEntry::new("STATUS_GRAPHICS_START_DEFERRED", 0x401E043A),
    TableEntry::new("STATUS_GRAPHICS_DEPENDABLE_CHILD_STATUS", 0x401E043C),
    TableEntry::new("STATUS_NDIS_INDICATION_REQUIRED", 0x40230001),
    TableEntry::new("STATUS_PCP_UNSUPPORTED_PSS_SALT", 0x40292023),

    // Warning
    TableEntry::new("STATUS_GUARD_PAGE_VIOLATION", 0x80000001),
    TableEntry::new("STATUS_DATATYPE_MISALIGNMENT", 0x80000002),
    TableEntry::new("STATUS_BREAKPOINT", 0x80000003),
    TableEntry::new("STATUS_SINGLE_STEP", 0x80000004),
    TableEntry::new("STATUS_BUFFER_OVERFLOW", 0x80000005),
    TableEntry::new("STATUS_NO_MORE_FILES", 0x80000006),
    TableEntry::new("STATUS_WAKE_SYSTEM_DEBUGGER", 0x80000007),
    TableEntry::new("STATUS_HANDLES_CLOSED", 0x8000000A),
    TableEntry::new("STATUS_NO_INHERITANCE", 0x8000000B),
    TableEntry::new("STATUS_GUID_SUBSTITUTION_MADE", 0x8000000C),
    TableEntry::new("STATUS_PARTIAL_COPY", 0x8000000D),
    TableEntry::new("STATUS_DEVICE_PAPER_EMPTY", 0x8000000E),
    TableEntry::new("STATUS_DEVICE_POWERED_OFF", 0x8000000F),
    TableEntry::new("STATUS_DEVICE_OFF_LINE", 0x80000010),
    TableEntry::new("STATUS_DEVICE_BUSY", 0x80000011),
    TableEntry::new("STATUS_NO_MORE_EAS", 0x80000012),
    TableEntry::new("STATUS_INVALID_EA_NAME", 0x80000013),
    TableEntry::new("STATUS_EA_LIST_INCONSISTENT", 0x80000014),
    TableEntry::new("STATUS_INVALID_EA_FLAG", 0x80000015),
    TableEntry::new("STATUS_VERIFY_REQUIRED", 0x80000016),
    TableEntry::new("STATUS_EXTRANEOUS_INFORMATION", 0x80000017),
    TableEntry::new("STATUS_RXACT_COMMIT_NECESSARY", 0x80000018),
    TableEntry::new("STATUS_NO_MORE_ENTRIES", 0x8000001A),
    TableEntry::new("STATUS_FILEMARK_DETECTED", 0x8000001B),
    TableEntry::new("STATUS_MEDIA_CHANGED", 0x8000001C),
    TableEntry::new("STATUS_BUS_RESET", 0x8000001D),
    TableEntry::new("STATUS_END_OF_MEDIA", 0x8000001E),
    TableEntry::new("STATUS_BEGINNING_OF_MEDIA", 0x8000001F),
    TableEntry::new("STATUS_MEDIA_CHECK", 0x80000020),
    TableEntry::new("STATUS_SETMARK_DETECTED", 0x80000021),
    TableEntry::new("STATUS_NO_DATA_DETECTED", 0x80000022),
    TableEntry::new("STATUS_REDIRECTOR_HAS_OPEN_HANDLES", 0x80000023),
    TableEntry::new("STATUS_SERVER_HAS_OPEN_HANDLES", 0x80000024),
    TableEntry::new("STATUS_ALREADY_DISCONNECTED", 0x80000025),
    TableEntry::new("STATUS_LONGJUMP", 0x80000026),
    TableEntry::new("STATUS_CLEANER_CARTRIDGE_INSTALLED", 0x80000027),
    TableEntry::new("STATUS_PLUGPLAY_QUERY_VETOED", 0x80000028),
    TableEntry::new("STATUS_UNWIND_CONSOLIDATE", 0x80000029),
    TableEntry::new("STATUS_REGISTRY_HIVE_RECOVERED", 0x8000002A),
    TableEntry::new("STATUS_DLL_MIGHT_BE_INSECURE", 0x8000002B),
    TableEntry::new("STATUS_DLL_MIGHT_BE_INCOMPATIBLE", 0x8000002C),
    TableEntry::new("STATUS_STOPPED_ON_SYMLINK", 0x8000002D),
    TableEntry::new("STATUS_CANNOT_GRANT_REQUESTED_OPLOCK", 0x8000002E),
    TableEntry::new("STATUS_NO_ACE_CONDITION", 0x8000002F),
    TableEntry::new("STATUS_DEVICE_REQUIRES_CLEANING", 0x80000288),
    TableEntry::new("STATUS_DEVICE_DOOR_OPEN", 0x80000289),
    TableEntry::new("STATUS_DATA_LOST_REPAIR", 0x80000803),
    TableEntry::new("DBG_EXCEPTION_NOT_HANDLED", 0x80010001),
    TableEntry::new("STATUS_CLUSTER_NODE_ALREADY_UP", 0x80130001),
    TableEntry::new("STATUS_CLUSTER_NODE_ALREADY_DOWN", 0x80130002),
    TableEntry::new("STATUS_CLUSTER_NETWORK_ALREADY_ONLINE", 0x80130003),
    TableEntry::new("STATUS_CLUSTER_NETWORK_ALREADY_OFFLINE", 0x80130004),
    TableEntry::new("STATUS_CLUSTER_NODE_ALREADY_MEMBER", 0x80130005),
    TableEntry::new("STATUS_COULD_NOT_RESIZE_LOG", 0x80190009),
    TableEntry::new("STATUS_NO_TXF_METADATA", 0x80190029),
    TableEntry::new("STATUS_CANT_RECOVER_WITH_HANDLE_OPEN", 0x80190031),
    TableEntry::new("STATUS_TXF_METADATA_ALREADY_PRESENT", 0x80190041),
    TableEntry::new("STATUS_TRANSACTION_SCOPE_CALLBACKS_NOT_SET", 0x80190042),
    TableEntry::new("STATUS_FLT_BUFFER_TOO_SMALL", 0x801C0001),
    TableEntry::new("STATUS_FVE_PARTIAL_METADATA", 0x80210001),
    TableEntry::new("STATUS_FVE_TRANSIENT_STATE", 0x80210002),
    TableEntry::new("STATUS_VID_REMOTE_NODE_PARENT_GPA_PAGES_USED", 0x80370001),
    TableEntry::new("STATUS_VOLMGR_INCOMPLETE_REGENERATION", 0x80380001),
    TableEntry::new("STATUS_VOLMGR_INCOMPLETE_DISK_MIGRATION", 0x80380002),
    TableEntry::new("STATUS_BCD_NOT_ALL_ENTRIES_IMPORTED", 0x80390001),
    TableEntry::new("STATUS_BCD_NOT_ALL_ENTRIES_SYNCHRONIZED", 0x80390003),
    TableEntry::new("STATUS_QUERY_STORAGE_ERROR", 0x803A0001),
    TableEntry::new("STATUS_SECUREBOOT_NOT_ENABLED", 0x80430006),

    // Error
    TableEntry::new("STATUS_UNSUCCESSFUL", 0xC0000001),
    TableEntry::new("STATUS_NOT_IMPLEMENTED", 0xC0000002),
    TableEntry::new("STATUS_INVALID_INFO_CLASS", 0xC0000003),
    TableEntry::new("STATUS_INFO_LENGTH_MISMATCH", 0xC0000004),
    TableEntry::new("STATUS_ACCESS_VIOLATION", 0xC0000005),
    TableEntry::new("STATUS_IN_PAGE_ERROR", 0xC0000006),
    TableEntry::new("STATUS_PAGEFILE_QUOTA", 0xC0000007),
    TableEntry::new("STATUS_INVALID_HANDLE", 0xC0000008),
    TableEntry::new("STATUS_BAD_INITIAL_STACK", 0xC0000009),
    TableEntry::new("STATUS_BAD_INITIAL_PC", 0xC000000A),
    TableEntry::new("STATUS_INVALID_CID", 0xC000000B),
    TableEntry::new("STATUS_TIMER_NOT_CANCELED", 0xC000000C),
    TableEntry::new("STATUS_INVALID_PARAMETER", 0xC000000D),
    TableEntry::new("STATUS_NO_SUCH_DEVICE", 0xC000000E),
    TableEntry::new("STATUS_NO_SUCH_FILE", 0xC000000F),
    TableEntry::new("STATUS_INVALID_DEVICE_REQUEST", 0xC0000010),
    TableEntry::new("STATUS_END_OF_FILE", 0xC0000011),
    TableEntry::new("STATUS_WRONG_VOLUME", 0xC0000012),
    TableEntry::new("STATUS_NO_MEDIA_IN_DEVICE", 0xC0000013),
    TableEntry::new("STATUS_UNRECOGNIZED_MEDIA", 0xC0000014),
    TableEntry::new("STATUS_NONEXISTENT_SECTOR", 0xC0000015),
    TableEntry::new("STATUS_MORE_PROCESSING_REQUIRED", 0xC0000016),
    TableEntry::new("STATUS_NO_MEMORY", 0xC0000017),
    TableEntry::new("STATUS_CONFLICTING_ADDRESSES", 0xC0000018),
    TableEntry::new("STATUS_NOT_MAPPED_VIEW", 0xC0000019),
    TableEntry::new("STATUS_UNABLE_TO_FREE_VM", 0xC000001A),
    TableEntry::new("STATUS_UNABLE_TO_DELETE_SECTION", 0xC000001B),
    TableEntry::new("STATUS_INVALID_SYSTEM_SERVICE", 0xC000001C),
    TableEntry::new("STATUS_ILLEGAL_INSTRUCTION", 0xC000001D),
    TableEntry::new("STATUS_INVALID_LOCK_SEQUENCE", 0xC000001E),
    TableEntry::new("STATUS_INVALID_VIEW_SIZE", 0xC000001F),
    TableEntry::new("STATUS_INVALID_FILE_FOR_SECTION", 0xC0000020),
    TableEntry::new("STATUS_ALREADY_COMMITTED", 0xC0000021),
    TableEntry::new("STATUS_ACCESS_DENIED", 0xC0000022),
    TableEntry::new("STATUS_BUFFER_TOO_SMALL", 0xC0000023),
    TableEntry::new("STATUS_OBJECT_TYPE_MISMATCH", 0xC0000024),
    TableEntry::new("STATUS_NONCONTINUABLE_EXCEPTION", 0xC0000025),
    TableEntry::new("STATUS_INVALID_DISPOSITION", 0xC0000026),
    TableEntry::new("STATUS_UNWIND", 0xC0000027),
    TableEntry::new("STATUS_BAD_STACK", 0xC0000028),
    TableEntry::new("STATUS_INVALID_UNWIND_TARGET", 0xC0000029),
    TableEntry::new("STATUS_NOT_LOCKED", 0xC000002A),
    TableEntry::new("STATUS_PARITY_ERROR", 0xC000002B),
    TableEntry::new("STATUS_UNABLE_TO_DECOMMIT_VM", 0xC000002C),
    TableEntry::new("STATUS_NOT_COMMITTED", 0xC000002D),
    TableEntry::new("STATUS_INVALID_PORT_ATTRIBUTES", 0xC000002E),
    TableEntry::new("STATUS_PORT_MESSAGE_TOO_LONG", 0xC000002F),
    TableEntry::new("STATUS_INVALID_PARAMETER_MIX", 0xC0000030),
    TableEntry::new("STATUS_INVALID_QUOTA_LOWER", 0xC0000031),
    TableEntry::new("STATUS_DISK_CORRUPT_ERROR", 0xC0000032),
    TableEntry::new("STATUS_OBJECT_NAME_INVALID", 0xC0000033),
    TableEntry::new("STATUS_OBJECT_NAME_NOT_FOUND", 0xC0000034),
    TableEntry::new("STATUS_OBJECT_NAME_COLLISION", 0xC0000035),
    TableEntry::new("STATUS_PORT_DO_NOT_DISTURB", 0xC0000036),
    TableEntry::new("STATUS_PORT_DISCONNECTED", 0xC0000037),
    TableEntry::new("STATUS_DEVICE_ALREADY_ATTACHED", 0xC0000038),
    TableEntry::new("STATUS_OBJECT_PATH_INVALID", 0xC0000039),
    TableEntry::new("STATUS_OBJECT_PATH_NOT_FOUND", 0xC000003A),
    TableEntry::new("STATUS_OBJECT_PATH_SYNTAX_BAD", 0xC000003B),
    TableEntry::new("STATUS_DATA_OVERRUN", 0xC000003C),
    TableEntry::new("STATUS_DATA_LATE_ERROR", 0xC000003D),
    TableEntry::new("STATUS_DATA_ERROR", 0xC000003E),
    TableEntry::new("STATUS_CRC_ERROR", 0xC000003F),
    TableEntry::new("STATUS_SECTION_TOO_BIG", 0xC0000040),
    TableEntry::new("STATUS_PORT_CONNECTION_REFUSED", 0xC0000041),
    TableEntry::new("STATUS_INVALID_PORT_HANDLE", 0xC0000042),
    TableEntry::new("STATUS_SHARING_VIOLATION", 0xC0000043),
    TableEntry::new("STATUS_QUOTA_EXCEEDED", 0xC0000044),
    TableEntry::new("STATUS_INVALID_PAGE_PROTECTION", 0xC0000045),
    TableEntry::new("STATUS_MUTANT_NOT_OWNED", 0xC0000046),
    TableEntry::new("STATUS_SEMAPHORE_LIMIT_EXCEEDED", 0xC0000047),
    TableEntry::new("STATUS_PORT_ALREADY_SET", 0xC0000048),
    TableEntry::new("STATUS_SECTION_NOT_IMAGE", 0xC0000049),
    TableEntry::new("STATUS_SUSPEND_COUNT_EXCEEDED", 0xC000004A),
    TableEntry::new("STATUS_THREAD_IS_TERMINATING", 0xC000004B),
    TableEntry::new("STATUS_BAD_WORKING_SET_LIMIT", 0xC000004C),
    TableEntry::new("STATUS_INCOMPATIBLE_FILE_MAP", 0xC000004D),
    TableEntry::new("STATUS_SECTION_PROTECTION", 0xC000004E),
    TableEntry::new("STATUS_EAS_NOT_SUPPORTED", 0xC000004F),
    TableEntry::new("STATUS_EA_TOO_LARGE", 0xC0000050),
    TableEntry::new("STATUS_NONEXISTENT_EA_ENTRY", 0xC0000051),
    TableEntry::new("STATUS_NO_EAS_ON_FILE", 0xC0000052),
    TableEntry::new("STATUS_EA_CORRUPT_ERROR", 0xC0000053),
    TableEntry::new("STATUS_FILE_LOCK_CONFLICT", 0xC0000054),
    TableEntry::new("STATUS_LOCK_NOT_GRANTED", 0xC0000055),
    TableEntry::new("STATUS_DELETE_PENDING", 0xC0000056),
    TableEntry::new("STATUS_CTL_FILE_NOT_SUPPORTED", 0xC0000057),
    TableEntry::new("STATUS_UNKNOWN_REVISION", 0xC0000058),
    TableEntry::new("STATUS_REVISION_MISMATCH", 0xC0000059),
    TableEntry::new("STATUS_INVALID_OWNER", 0xC000005A),
    TableEntry::new("STATUS_INVALID_PRIMARY_GROUP", 0xC000005B),
    TableEntry::new("STATUS_NO_IMPERSONATION_TOKEN", 0xC000005C),
    TableEntry::new("STATUS_CANT_DISABLE_MANDATORY", 0xC000005D),
    TableEntry::new("STATUS_NO_LOGON_SERVERS", 0xC000005E),
    TableEntry::new("STATUS_NO_SUCH_LOGON_SESSION", 0xC000005F),
    TableEntry::new("STATUS_NO_SUCH_PRIVILEGE", 0xC0000060),
    TableEntry::new("STATUS_PRIVILEGE_NOT_HELD", 0xC0000061),
    TableEntry::new("STATUS_INVALID_ACCOUNT_NAME", 0xC0000062),
    TableEntry::new("STATUS_USER_EXISTS", 0xC0000063),
    TableEntry::new("STATUS_NO_SUCH_USER", 0xC0000064),
    TableEntry::new("STATUS_GROUP_EXISTS", 0xC0000065),
    TableEntry::new("STATUS_NO_SUCH_GROUP", 0xC0000066),
    TableEntry::new("STATUS_MEMBER_IN_GROUP", 0xC0000067),
    TableEntry::new("STATUS_MEMBER_NOT_IN_GROUP", 0xC0000068),
    TableEntry::new("STATUS_LAST_ADMIN", 0xC0000069),
    TableEntry::new("STATUS_WRONG_PASSWORD", 0xC000006A),
    TableEntry::new("STATUS_ILL_FORMED_PASSWORD", 0xC000006B),
    TableEntry::new("STATUS_PASSWORD_RESTRICTION", 0xC000006C),
    TableEntry::new("STATUS_LOGON_FAILURE", 0xC000006D),
    TableEntry::new("STATUS_ACCOUNT_RESTRICTION", 0xC000006E),
    TableEntry::new("STATUS_INVALID_LOGON_HOURS", 0xC000006F),
    TableEntry::new("STATUS_INVALID_WORKSTATION", 0xC0000070),
    TableEntry::new("STATUS_PASSWORD_EXPIRED", 0xC0000071),
    TableEntry::new("STATUS_ACCOUNT_DISABLED", 0xC0000072),
    TableEntry::new("STATUS_NONE_MAPPED", 0xC0000073),
    TableEntry::new("STATUS_TOO_MANY_LUIDS_REQUESTED", 0xC0000074),
    TableEntry::new("STATUS_LUIDS_EXHAUSTED", 0xC0000075),
    TableEntry::new("STATUS_INVALID_SUB_AUTHORITY", 0xC0000076),
    TableEntry::new("STATUS_INVALID_ACL", 0xC0000077),
    TableEntry::new("STATUS_INVALID_SID", 0xC0000078),
    TableEntry::new("STATUS_INVALID_SECURITY_DESCR", 0xC0000079),
    TableEntry::new("STATUS_PROCEDURE_NOT_FOUND", 0xC000007A),
    TableEntry::new("STATUS_INVALID_IMAGE_FORMAT", 0xC000007B),
    TableEntry::new("STATUS_NO_TOKEN", 0xC000007C),
    TableEntry::new("STATUS_BAD_INHERITANCE_ACL", 0xC000007D),
    TableEntry::new("STATUS_RANGE_NOT_LOCKED", 0xC000007E),
    TableEntry::new("STATUS_DISK_FULL", 0xC000007F),
    TableEntry::new("STATUS_SERVER_DISABLED", 0xC0000080),
    TableEntry::new("STATUS_SERVER_NOT_DISABLED", 0xC0000081),
    TableEntry::new("STATUS_TOO_MANY_GUIDS_REQUESTED", 0xC0000082),
    TableEntry::new("STATUS_GUIDS_EXHAUSTED", 0xC0000083),
    TableEntry::new("STATUS_INVALID_ID_AUTHORITY", 0xC0000084),
    TableEntry::new("STATUS_AGENTS_EXHAUSTED", 0xC0000085),
    TableEntry::new("STATUS_INVALID_VOLUME_LABEL", 0xC0000086),
    TableEntry::new("STATUS_SECTION_NOT_EXTENDED", 0xC0000087),
    TableEntry::new("STATUS_NOT_MAPPED_DATA", 0xC0000088),
    TableEntry::new("STATUS_RESOURCE_DATA_NOT_FOUND", 0xC0000089),
    TableEntry::new("STATUS_RESOURCE_TYPE_NOT_FOUND", 0xC000008A),
    TableEntry::new("STATUS_RESOURCE_NAME_NOT_FOUND", 0xC000008B),
    TableEntry::new("STATUS_ARRAY_BOUNDS_EXCEEDED", 0xC000008C),
    TableEntry::new("STATUS_FLOAT_DENORMAL_OPERAND", 0xC000008D),
    TableEntry::new("STATUS_FLOAT_DIVIDE_BY_ZERO", 0xC000008E),
    TableEntry::new("STATUS_FLOAT_INEXACT_RESULT", 0xC000008F),
    TableEntry::new("STATUS_FLOAT_INVALID_OPERATION", 0xC0000090),
    TableEntry::new("STATUS_FLOAT_OVERFLOW", 0xC0000091),
    TableEntry::new("STATUS_FLOAT_STACK_CHECK", 0xC0000092),
    TableEntry::new("STATUS_FLOAT_UNDERFLOW", 0xC0000093),
    TableEntry::new("STATUS_INTEGER_DIVIDE_BY_ZERO", 0xC0000094),
    TableEntry::new("STATUS_INTEGER_OVERFLOW", 0xC0000095),
    TableEntry::new("STATUS_PRIVILEGED_INSTRUCTION", 0xC0000096),
    TableEntry::new("STATUS_TOO_MANY_PAGING_FILES", 0xC0000097),
    TableEntry::new("STATUS_FILE_INVALID", 0xC0000098),
    TableEntry::new("STATUS_ALLOTTED_SPACE_EXCEEDED", 0xC0000099),
    TableEntry::new("STATUS_INSUFFICIENT_RESOURCES", 0xC000009A),
    TableEntry::new("STATUS_DFS_EXIT_PATH_FOUND", 0xC000009B),
    TableEntry::new("STATUS_DEVICE_DATA_ERROR", 0xC000009C),
    TableEntry::new("STATUS_DEVICE_NOT_CONNECTED", 0xC000009D),
    TableEntry::new("STATUS_DEVICE_POWER_FAILURE", 0xC000009E),
    TableEntry::new("STATUS_FREE_VM_NOT_AT_BASE", 0xC000009F),
    TableEntry::new("STATUS_MEMORY_NOT_ALLOCATED", 0xC00000A0),
    TableEntry::new("STATUS_WORKING_SET_QUOTA", 0xC00000A1),
    TableEntry::new("STATUS_MEDIA_WRITE_PROTECTED", 0xC00000A2),
    TableEntry::new("STATUS_DEVICE_NOT_READY", 0xC00000A3),
    TableEntry::new("STATUS_INVALID_GROUP_ATTRIBUTES", 0xC00000A4),
    TableEntry::new("STATUS_BAD_IMPERSONATION_LEVEL", 0xC00000A5),
    TableEntry::new("STATUS_CANT_OPEN_ANONYMOUS", 0xC00000A6),
    TableEntry::new("STATUS_BAD_VALIDATION_CLASS", 0xC00000A7),
    TableEntry::new("STATUS_BAD_TOKEN_TYPE", 0xC00000A8),
    TableEntry::new("STATUS_BAD_MASTER_BOOT_RECORD", 0xC00000A9),
    TableEntry::new("STATUS_INSTRUCTION_MISALIGNMENT", 0xC00000AA),
    TableEntry::new("STATUS_INSTANCE_NOT_AVAILABLE", 0xC00000AB),
    TableEntry::new("STATUS_PIPE_NOT_AVAILABLE", 0xC00000AC),
    TableEntry::new("STATUS_INVALID_PIPE_STATE", 0xC00000AD),
    TableEntry::new("STATUS_PIPE_BUSY", 0xC00000AE),
    TableEntry::new("STATUS_ILLEGAL_FUNCTION", 0xC00000AF),
    TableEntry::new("STATUS_PIPE_DISCONNECTED", 0xC00000B0),
    TableEntry::new("STATUS_PIPE_CLOSING", 0xC00000B1),
    TableEntry::new("STATUS_PIPE_CONNECTED", 0xC00000B2),
    TableEntry::new("STATUS_PIPE_LISTENING", 0xC00000B3),
    TableEntry::new("STATUS_INVALID_READ_MODE", 0xC00000B4),
    TableEntry::new("STATUS_IO_TIMEOUT", 0xC00000B5),
    TableEntry::new("STATUS_FILE_FORCED_CLOSED", 0xC00000B6),
    TableEntry::new("STATUS_PROFILING_NOT_STARTED", 0xC00000B7),
    TableEntry::new("STATUS_PROFILING_NOT_STOPPED", 0xC00000B8),
    TableEntry::new("STATUS_COULD_NOT_INTERPRET", 0xC00000B9),
    TableEntry::new("STATUS_FILE_IS_A_DIRECTORY", 0xC00000BA),
    TableEntry::new("STATUS_NOT_SUPPORTED", 0xC00000BB),
    TableEntry::new("STATUS_REMOTE_NOT_LISTENING", 0xC00000BC),
    TableEntry::new("STATUS_DUPLICATE_NAME", 0xC00000BD),
    TableEntry::new("STATUS_BAD_NETWORK_PATH", 0xC00000BE),
    TableEntry::new("STATUS_NETWORK_BUSY", 0xC00000BF),
    TableEntry::new("STATUS_DEVICE_DOES_NOT_EXIST", 0xC00000C0),
    TableEntry::new("STATUS_TOO_MANY_COMMANDS", 0xC00000C1),
    TableEntry::new("STATUS_ADAPTER_HARDWARE_ERROR", 0xC00000C2),
    TableEntry::new("STATUS_INVALID_NETWORK_RESPONSE", 0xC00000C3),
    TableEntry::new("STATUS_UNEXPECTED_NETWORK_ERROR", 0xC00000C4),
    TableEntry::new("STATUS_BAD_REMOTE_ADAPTER", 0xC00000C5),
    TableEntry::new("STATUS_PRINT_QUEUE_FULL", 0xC00000C6),
    TableEntry::new("STATUS_NO_SPOOL_SPACE", 0xC00000C7),
    TableEntry::new("STATUS_PRINT_CANCELLED", 0xC00000C8),
    TableEntry::new("STATUS_NETWORK_NAME_DELETED", 0xC00000C9),
    TableEntry::new("STATUS_NETWORK_ACCESS_DENIED", 0xC00000CA),
    TableEntry::new("STATUS_BAD_DEVICE_TYPE", 0xC00000CB),
    TableEntry::new("STATUS_BAD_NETWORK_NAME", 0xC00000CC),
    TableEntry::new("STATUS_TOO_MANY_NAMES", 0xC00000CD),
    TableEntry::new("STATUS_TOO_MANY_SESSIONS", 0xC00000CE),
    TableEntry::new("STATUS_SHARING_PAUSED", 0xC00000CF),
    TableEntry::new("STATUS_REQUEST_NOT_ACCEPTED", 0xC00000D0),
    TableEntry::new("STATUS_REDIRECTOR_PAUSED", 0xC00000D1),
    TableEntry::new("STATUS_NET_WRITE_FAULT", 0xC00000D2),
    TableEntry::new("STATUS_PROFILING_AT_LIMIT", 0xC00000D3),
    TableEntry::new("STATUS_NOT_SAME_DEVICE", 0xC00000D4),
    TableEntry::new("STATUS_FILE_RENAMED", 0xC00000D5),
    TableEntry::new("STATUS_VIRTUAL_CIRCUIT_CLOSED", 0xC00000D6),
    TableEntry::new("STATUS_NO_SECURITY_ON_OBJECT", 0xC00000D7),
    TableEntry::new("STATUS_CANT_WAIT", 0xC00000D8),
    TableEntry::new("STATUS_PIPE_EMPTY", 0xC00000D9),
    TableEntry::new("STATUS_CANT_ACCESS_DOMAIN_INFO", 0xC00000DA),
    TableEntry::new("STATUS_CANT_TERMINATE_SELF", 0xC00000DB),
    TableEntry::new("STATUS_INVALID_SERVER_STATE", 0xC00000DC),
    TableEntry::new("STATUS_INVALID_DOMAIN_STATE", 0xC00000DD),
    TableEntry::new("STATUS_INVALID_DOMAIN_ROLE", 0xC00000DE),
    TableEntry::new("STATUS_NO_SUCH_DOMAIN", 0xC00000DF),
    TableEntry::new("STATUS_DOMAIN_EXISTS", 0xC00000E0),
    TableEntry::new("STATUS_DOMAIN_LIMIT_EXCEEDED", 0xC00000E1),
    TableEntry::new("STATUS_OPLOCK_NOT_GRANTED", 0xC00000E2),
    TableEntry::new("STATUS_INVALID_OPLOCK_PROTOCOL", 0xC00000E3),
    TableEntry::new("STATUS_INTERNAL_DB_CORRUPTION", 0xC00000E4),
    TableEntry::new("STATUS_INTERNAL_ERROR", 0xC00000E5),
    TableEntry::new("STATUS_GENERIC_NOT_MAPPED", 0xC00000E6),
    TableEntry::new("STATUS_BAD_DESCRIPTOR_FORMAT", 0xC00000E7),
    TableEntry::new("STATUS_INVALID_USER_BUFFER", 0xC00000E8),
    TableEntry::new("STATUS_UNEXPECTED_IO_ERROR", 0xC00000E9),
    TableEntry::new("STATUS_UNEXPECTED_MM_CREATE_ERR", 0xC00000EA),
    TableEntry::new("STATUS_UNEXPECTED_MM_MAP_ERROR", 0xC00000EB),
    TableEntry::new("STATUS_UNEXPECTED_MM_EXTEND_ERR", 0xC00000EC),
    TableEntry::new("STATUS_NOT_LOGON_PROCESS", 0xC00000ED),
    TableEntry::new("STATUS_LOGON_SESSION_EXISTS", 0xC00000EE),
    TableEntry::new("STATUS_INVALID_PARAMETER_1", 0xC00000EF),
    TableEntry::new("STATUS_INVALID_PARAMETER_2", 0xC00000F0),
    TableEntry::new("STATUS_INVALID_PARAMETER_3", 0xC00000F1),
    TableEntry::new("STATUS_INVALID_PARAMETER_4", 0xC00000F2),
    TableEntry::new("STATUS_INVALID_PARAMETER_5", 0xC00000F3),
    TableEntry::new("STATUS_INVALID_PARAMETER_6", 0xC00000F4),
    TableEntry::new("STATUS_INVALID_PARAMETER_7", 0xC00000F5),
    TableEntry::new("STATUS_INVALID_PARAMETER_8", 0xC00000F6),
    TableEntry::new("STATUS_INVALID_PARAMETER_9", 0xC00000F7),
    TableEntry::new("STATUS_INVALID_PARAMETER_10", 0xC00000F8),
    TableEntry::new("STATUS_INVALID_PARAMETER_11", 0xC00000F9),
    TableEntry::new("STATUS_INVALID_PARAMETER_12", 0xC00000FA),
    TableEntry::new("STATUS_REDIRECTOR_NOT_STARTED", 0xC00000FB),
    TableEntry::new("STATUS_REDIRECTOR_STARTED", 0xC00000FC),
    TableEntry::new("STATUS_STACK_OVERFLOW", 0xC00000FD),
    TableEntry::new("STATUS_NO_SUCH_PACKAGE", 0xC00000FE),
    TableEntry::new("STATUS_BAD_FUNCTION_TABLE", 0xC00000FF),
    TableEntry::new("STATUS_VARIABLE_NOT_FOUND", 0xC0000100),
    TableEntry::new("STATUS_DIRECTORY_NOT_EMPTY", 0xC0000101),
    TableEntry::new("STATUS_FILE_CORRUPT_ERROR", 0xC0000102),
    TableEntry::new("STATUS_NOT_A_DIRECTORY", 0xC0000103),
    TableEntry::new("STATUS_BAD_LOGON_SESSION_STATE", 0xC0000104),
    TableEntry::new("STATUS_LOGON_SESSION_COLLISION", 0xC0000105),
    TableEntry::new("STATUS_NAME_TOO_LONG", 0xC0000106),
    TableEntry::new("STATUS_FILES_OPEN", 0xC0000107),
    TableEntry::new("STATUS_CONNECTION_IN_USE", 0xC0000108),
    TableEntry::new("STATUS_MESSAGE_NOT_FOUND", 0xC0000109),
    TableEntry::new("STATUS_PROCESS_IS_TERMINATING", 0xC000010A),
    TableEntry::new("STATUS_INVALID_LOGON_TYPE", 0xC000010B),
    TableEntry::new("STATUS_NO_GUID_TRANSLATION", 0xC000010C),
    TableEntry::new("STATUS_CANNOT_IMPERSONATE", 0xC000010D),
    TableEntry::new("STATUS_IMAGE_ALREADY_LOADED", 0xC000010E),
    TableEntry::new("STATUS_ABIOS_NOT_PRESENT", 0xC000010F),
    TableEntry::new("STATUS_ABIOS_LID_NOT_EXIST", 0xC0000110),
    TableEntry::new("STATUS_ABIOS_LID_ALREADY_OWNED", 0xC0000111),
    TableEntry::new("STATUS_ABIOS_NOT_LID_OWNER", 0xC0000112),
    TableEntry::new("STATUS_ABIOS_INVALID_COMMAND", 0xC0000113),
    TableEntry::new("STATUS_ABIOS_INVALID_LID", 0xC0000114),
    TableEntry::new("STATUS_ABIOS_SELECTOR_NOT_AVAILABLE", 0xC0000115),
    TableEntry::new("STATUS_ABIOS_INVALID_SELECTOR", 0xC0000116),
    TableEntry::new("STATUS_NO_LDT", 0xC0000117),
    TableEntry::new("STATUS_INVALID_LDT_SIZE", 0xC0000118),
    TableEntry::new("STATUS_INVALID_LDT_OFFSET", 0xC0000119),
    TableEntry::new("STATUS_INVALID_LDT_DESCRIPTOR", 0xC000011A),
    TableEntry::new("STATUS_INVALID_IMAGE_NE_FORMAT", 0xC000011B),
    TableEntry::new("STATUS_RXACT_INVALID_STATE", 0xC000011C),
    TableEntry::new("STATUS_RXACT_COMMIT_FAILURE", 0xC000011D),
    TableEntry::new("STATUS_MAPPED_FILE_SIZE_ZERO", 0xC000011E),
    TableEntry::new("STATUS_TOO_MANY_OPENED_FILES", 0xC000011F),
    TableEntry::new("STATUS_CANCELLED", 0xC0000120),
    TableEntry::new("STATUS_CANNOT_DELETE", 0xC0000121),
    TableEntry::new("STATUS_INVALID_COMPUTER_NAME", 0xC0000122),
    TableEntry::new("STATUS_FILE_DELETED", 0xC0000123),
    TableEntry::new("STATUS_SPECIAL_ACCOUNT", 0xC0000124),
    TableEntry::new("STATUS_SPECIAL_GROUP", 0xC0000125),
    TableEntry::new("STATUS_SPECIAL_USER", 0xC0000126),
    TableEntry::new("STATUS_MEMBERS_PRIMARY_GROUP", 0xC0000127),
    TableEntry::new("STATUS_FILE_CLOSED", 0xC0000128),
    TableEntry::new("STATUS_TOO_MANY_THREADS", 0xC0000129),
    TableEntry::new("STATUS_THREAD_NOT_IN_PROCESS", 0xC000012A),
    TableEntry::new("STATUS_TOKEN_ALREADY_IN_USE", 0xC000012B),
    TableEntry::new("STATUS_PAGEFILE_QUOTA_EXCEEDED", 0xC000012C),
    TableEntry::new("STATUS_COMMITMENT_LIMIT", 0xC000012D),
    TableEntry::new("STATUS_INVALID_IMAGE_LE_FORMAT", 0xC000012E),
    TableEntry::new("STATUS_INVALID_IMAGE_NOT_MZ", 0xC000012F),
    TableEntry::new("STATUS_INVALID_IMAGE_PROTECT", 0xC0000130),
    TableEntry::new("STATUS_INVALID_IMAGE_WIN_16", 0xC0000131),
    TableEntry::new("STATUS_LOGON_SERVER_CONFLICT", 0xC0000132),
    TableEntry::new("STATUS_TIME_DIFFERENCE_AT_DC", 0xC0000133),
    TableEntry::new("STATUS_SYNCHRONIZATION_REQUIRED", 0xC0000134),
    TableEntry::new("STATUS_DLL_NOT_FOUND", 0xC0000135),
    TableEntry::new("STATUS_OPEN_FAILED", 0xC0000136),
    TableEntry::new("STATUS_IO_PRIVILEGE_FAILED", 0xC0000137),
    TableEntry::new("STATUS_ORDINAL_NOT_FOUND", 0xC0000138),
    TableEntry::new("STATUS_ENTRYPOINT_NOT_FOUND", 0xC0000139),
    TableEntry::new("STATUS_CONTROL_C_EXIT", 0xC000013A),
    TableEntry::new("STATUS_LOCAL_DISCONNECT", 0xC000013B),
    TableEntry::new("STATUS_REMOTE_DISCONNECT", 0xC000013C),
    TableEntry::new("STATUS_REMOTE_RESOURCES", 0xC000013D),
    TableEntry::new("STATUS_LINK_FAILED", 0xC000013E),
    TableEntry::new("STATUS_LINK_TIMEOUT", 0xC000013F),
    TableEntry::new("STATUS_INVALID_CONNECTION", 0xC0000140),
    TableEntry::new("STATUS_INVALID_ADDRESS", 0xC0000141),
    TableEntry::new("STATUS_DLL_INIT_FAILED", 0xC0000142),
    TableEntry::new("STATUS_MISSING_SYSTEMFILE", 0xC0000143),
    TableEntry::new("STATUS_UNHANDLED_EXCEPTION", 0xC0000144),
    TableEntry::new("STATUS_APP_INIT_FAILURE", 0xC0000145),
    TableEntry::new("STATUS_PAGEFILE_CREATE_FAILED", 0xC0000146),
    TableEntry::new("STATUS_NO_PAGEFILE", 0xC0000147),
    TableEntry::new("STATUS_INVALID_LEVEL", 0xC0000148),
    TableEntry::new("STATUS_WRONG_PASSWORD_CORE", 0xC0000149),
    TableEntry::new("STATUS_ILLEGAL_FLOAT_CONTEXT", 0xC000014A),
    TableEntry::new("STATUS_PIPE_BROKEN", 0xC000014B),
    TableEntry::new("STATUS_REGISTRY_CORRUPT", 0xC000014C),
    TableEntry::new("STATUS_REGISTRY_IO_FAILED", 0xC000014D),
    TableEntry::new("STATUS_NO_EVENT_PAIR", 0xC000014E),
    TableEntry::new("STATUS_UNRECOGNIZED_VOLUME", 0xC000014F),
    TableEntry::new("STATUS_SERIAL_NO_DEVICE_INITED", 0xC0000150),
    TableEntry::new("STATUS_NO_SUCH_ALIAS", 0xC0000151),
    TableEntry::new("STATUS_MEMBER_NOT_IN_ALIAS", 0xC0000152),
    TableEntry::new("STATUS_MEMBER_IN_ALIAS", 0xC0000153),
    TableEntry::new("STATUS_ALIAS_EXISTS", 0xC0000154),
    TableEntry::new("STATUS_LOGON_NOT_GRANTED", 0xC0000155),
    TableEntry::new("STATUS_TOO_MANY_SECRETS", 0xC0000156),
    TableEntry::new("STATUS_SECRET_TOO_LONG", 0xC0000157),
    TableEntry::new("STATUS_INTERNAL_DB_ERROR", 0xC0000158),
    TableEntry::new("STATUS_FULLSCREEN_MODE", 0xC0000159),
    TableEntry::new("STATUS_TOO_MANY_CONTEXT_IDS", 0xC000015A),
    TableEntry::new("STATUS_LOGON_TYPE_NOT_GRANTED", 0xC000015B),
    TableEntry::new("STATUS_NOT_REGISTRY_FILE", 0xC000015C),
    TableEntry::new("STATUS_NT_CROSS_ENCRYPTION_REQUIRED", 0xC000015D),
    TableEntry::new("STATUS_DOMAIN_CTRLR_CONFIG_ERROR", 0xC000015E),
    TableEntry::new("STATUS_FT_MISSING_MEMBER", 0xC000015F),
    TableEntry::new("STATUS_ILL_FORMED_SERVICE_ENTRY", 0xC0000160),
    TableEntry::new("STATUS_ILLEGAL_CHARACTER", 0xC0000161),
    TableEntry::new("STATUS_UNMAPPABLE_CHARACTER", 0xC0000162),
    TableEntry::new("STATUS_UNDEFINED_CHARACTER", 0xC0000163),
    TableEntry::new("STATUS_FLOPPY_VOLUME", 0xC0000164),
    TableEntry::new("STATUS_FLOPPY_ID_MARK_NOT_FOUND", 0xC0000165),
    TableEntry::new("STATUS_FLOPPY_WRONG_CYLINDER", 0xC0000166),
    TableEntry::new("STATUS_FLOPPY_UNKNOWN_ERROR", 0xC0000167),
    TableEntry::new("STATUS_FLOPPY_BAD_REGISTERS", 0xC0000168),
    TableEntry::new("STATUS_DISK_RECALIBRATE_FAILED", 0xC0000169),
    TableEntry::new("STATUS_DISK_OPERATION_FAILED", 0xC000016A),
    TableEntry::new("STATUS_DISK_RESET_FAILED", 0xC000016B),
    TableEntry::new("STATUS_SHARED_IRQ_BUSY", 0xC000016C),
    TableEntry::new("STATUS_FT_ORPHANING", 0xC000016D),
    TableEntry::new("STATUS_BIOS_FAILED_TO_CONNECT_INTERRUPT", 0xC000016E),
    TableEntry::new("STATUS_PARTITION_FAILURE", 0xC0000172),
    TableEntry::new("STATUS_INVALID_BLOCK_LENGTH", 0xC0000173),
    TableEntry::new("STATUS_DEVICE_NOT_PARTITIONED", 0xC0000174),
    TableEntry::new("STATUS_UNABLE_TO_LOCK_MEDIA", 0xC0000175),
    TableEntry::new("STATUS_UNABLE_TO_UNLOAD_MEDIA", 0xC0000176),
    TableEntry::new("STATUS_EOM_OVERFLOW", 0xC0000177),
    TableEntry::new("STATUS_NO_MEDIA", 0xC0000178),
    TableEntry::new("STATUS_NO_SUCH_MEMBER", 0xC000017A),
    TableEntry::new("STATUS_INVALID_MEMBER", 0xC000017B),
    TableEntry::new("STATUS_KEY_DELETED", 0xC000017C),
    TableEntry::new("STATUS_NO_LOG_SPACE", 0xC000017D),
    TableEntry::new("STATUS_TOO_MANY_SIDS", 0xC000017E),
    TableEntry::new("STATUS_LM_CROSS_ENCRYPTION_REQUIRED", 0xC000017F),
    TableEntry::new("STATUS_KEY_HAS_CHILDREN", 0xC0000180),
    TableEntry::new("STATUS_CHILD_MUST_BE_VOLATILE", 0xC0000181),
    TableEntry::new("STATUS_DEVICE_CONFIGURATION_ERROR", 0xC0000182),
    TableEntry::new("STATUS_DRIVER_INTERNAL_ERROR", 0xC0000183),
    TableEntry::new("STATUS_INVALID_DEVICE_STATE", 0xC0000184),
    TableEntry::new("STATUS_IO_DEVICE_ERROR", 0xC0000185),
    TableEntry::new("STATUS_DEVICE_PROTOCOL_ERROR", 0xC0000186),
    TableEntry::new("STATUS_BACKUP_CONTROLLER", 0xC0000187),
    TableEntry::new("STATUS_LOG_FILE_FULL", 0xC0000188),
    TableEntry::new("STATUS_TOO_LATE", 0xC0000189),
    TableEntry::new("STATUS_NO_TRUST_LSA_SECRET", 0xC000018A),
    TableEntry::new("STATUS_NO_TRUST_SAM_ACCOUNT", 0xC000018B),
    TableEntry::new("STATUS_TRUSTED_DOMAIN_FAILURE", 0xC000018C),
    TableEntry::new("STATUS_TRUSTED_RELATIONSHIP_FAILURE", 0xC000018D),
    TableEntry::new("STATUS_EVENTLOG_FILE_CORRUPT", 0xC000018E),
    TableEntry::new("STATUS_EVENTLOG_CANT_START", 0xC000018F),
    TableEntry::new("STATUS_TRUST_FAILURE", 0xC0000190),
    TableEntry::new("STATUS_MUTANT_LIMIT_EXCEEDED", 0xC0000191),
    TableEntry::new("STATUS_NETLOGON_NOT_STARTED", 0xC0000192),
    TableEntry::new("STATUS_ACCOUNT_EXPIRED", 0xC0000193),
    TableEntry::new("STATUS_POSSIBLE_DEADLOCK", 0xC0000194),
    TableEntry::new("STATUS_NETWORK_CREDENTIAL_CONFLICT", 0xC0000195),
    TableEntry::new("STATUS_REMOTE_SESSION_LIMIT", 0xC0000196),
    TableEntry::new("STATUS_EVENTLOG_FILE_CHANGED", 0xC0000197),
    TableEntry::new("STATUS_NOLOGON_INTERDOMAIN_TRUST_ACCOUNT", 0xC0000198),
    TableEntry::new("STATUS_NOLOGON_WORKSTATION_TRUST_ACCOUNT", 0xC0000199),
    TableEntry::new("STATUS_NOLOGON_SERVER_TRUST_ACCOUNT", 0xC000019A),
    TableEntry::new("STATUS_DOMAIN_TRUST_INCONSISTENT", 0xC000019B),
    TableEntry::new("STATUS_FS_DRIVER_REQUIRED", 0xC000019C),
    TableEntry::new("STATUS_IMAGE_ALREADY_LOADED_AS_DLL", 0xC000019D),
    TableEntry::new("STATUS_NETWORK_OPEN_RESTRICTION", 0xC0000201),
    TableEntry::new("STATUS_NO_USER_SESSION_KEY", 0xC0000202),
    TableEntry::new("STATUS_USER_SESSION_DELETED", 0xC0000203),
    TableEntry::new("STATUS_RESOURCE_LANG_NOT_FOUND", 0xC0000204),
    TableEntry::new("STATUS_INSUFF_SERVER_RESOURCES", 0xC0000205),
    TableEntry::new("STATUS_INVALID_BUFFER_SIZE", 0xC0000206),
    TableEntry::new("STATUS_INVALID_ADDRESS_COMPONENT", 0xC0000207),
    TableEntry::new("STATUS_INVALID_ADDRESS_WILDCARD", 0xC0000208),
    TableEntry::new("STATUS_TOO_MANY_ADDRESSES", 0xC0000209),
    TableEntry::new("STATUS_ADDRESS_ALREADY_EXISTS", 0xC000020A),
    TableEntry::new("STATUS_ADDRESS_CLOSED", 0xC000020B),
    TableEntry::new("STATUS_CONNECTION_DISCONNECTED", 0xC000020C),
    TableEntry::new("STATUS_CONNECTION_RESET", 0xC000020D),
    TableEntry::new("STATUS_TOO_MANY_NODES", 0xC000020E),
    TableEntry::new("STATUS_TRANSACTION_ABORTED", 0xC000020F),
    TableEntry::new("STATUS_TRANSACTION_TIMED_OUT", 0xC0000210),
    TableEntry::new("STATUS_TRANSACTION_NO_RELEASE", 0xC0000211),
    TableEntry::new("STATUS_TRANSACTION_NO_MATCH", 0xC0000212),
    TableEntry::new("STATUS_TRANSACTION_RESPONDED", 0xC0000213),
    TableEntry::new("STATUS_TRANSACTION_INVALID_ID", 0xC0000214),
    TableEntry::new("STATUS_TRANSACTION_INVALID_TYPE", 0xC0000215),
    TableEntry::new("STATUS_NOT_SERVER_SESSION", 0xC0000216),
    TableEntry::new("STATUS_NOT_CLIENT_SESSION", 0xC0000217),
    TableEntry::new("STATUS_CANNOT_LOAD_REGISTRY_FILE", 0xC0000218),
    TableEntry::new("STATUS_DEBUG_ATTACH_FAILED", 0xC0000219),
    TableEntry::new("STATUS_SYSTEM_PROCESS_TERMINATED", 0xC000021A),
    TableEntry::new("STATUS_DATA_NOT_ACCEPTED", 0xC000021B),
    TableEntry::new("STATUS_NO_BROWSER_SERVERS_FOUND", 0xC000021C),
    TableEntry::new("STATUS_VDM_HARD_ERROR", 0xC000021D),
    TableEntry::new("STATUS_DRIVER_CANCEL_TIMEOUT", 0xC000021E),
    TableEntry::new("STATUS_REPLY_MESSAGE_MISMATCH", 0xC000021F),
    TableEntry::new("STATUS_MAPPED_ALIGNMENT", 0xC0000220),
    TableEntry::new("STATUS_IMAGE_CHECKSUM_MISMATCH", 0xC0000221),
    TableEntry::new("STATUS_LOST_WRITEBEHIND_DATA", 0xC0000222),
    TableEntry::new("STATUS_CLIENT_SERVER_PARAMETERS_INVALID", 0xC0000223),
    TableEntry::new("STATUS_PASSWORD_MUST_CHANGE", 0xC0000224),
    TableEntry::new("STATUS_NOT_FOUND", 0xC0000225),
    TableEntry::new("STATUS_NOT_TINY_STREAM", 0xC0000226),
    TableEntry::new("STATUS_RECOVERY_FAILURE", 0xC0000227),
    TableEntry::new("STATUS_STACK_OVERFLOW_READ", 0xC0000228),
    TableEntry::new("STATUS_FAIL_CHECK", 0xC0000229),
    TableEntry::new("STATUS_DUPLICATE_OBJECTID", 0xC000022A),
    TableEntry::new("STATUS_OBJECTID_EXISTS", 0xC000022B),
    TableEntry::new("STATUS_CONVERT_TO_LARGE", 0xC000022C),
    TableEntry::new("STATUS_RETRY", 0xC000022D),
    TableEntry::new("STATUS_FOUND_OUT_OF_SCOPE", 0xC000022E),
    TableEntry::new("STATUS_ALLOCATE_BUCKET", 0xC000022F),
    TableEntry::new("STATUS_PROPSET_NOT_FOUND", 0xC0000230),
    TableEntry::new("STATUS_MARSHALL_OVERFLOW", 0xC0000231),
    TableEntry::new("STATUS_INVALID_VARIANT", 0xC0000232),
    TableEntry::new("STATUS_DOMAIN_CONTROLLER_NOT_FOUND", 0xC0000233),
    TableEntry::new("STATUS_ACCOUNT_LOCKED_OUT", 0xC0000234),
    TableEntry::new("STATUS_HANDLE_NOT_CLOSABLE", 0xC0000235),
    TableEntry::new("STATUS_CONNECTION_REFUSED", 0xC0000236),
    TableEntry::new("STATUS_GRACEFUL_DISCONNECT", 0xC0000237),
    TableEntry::new("STATUS_ADDRESS_ALREADY_ASSOCIATED", 0xC0000238),
    TableEntry::new("STATUS_ADDRESS_NOT_ASSOCIATED", 0xC0000239),
    TableEntry::new("STATUS_CONNECTION_INVALID", 0xC000023A),
    TableEntry::new("STATUS_CONNECTION_ACTIVE", 0xC000023B),
    TableEntry::new("STATUS_NETWORK_UNREACHABLE", 0xC000023C),
    TableEntry::new("STATUS_HOST_UNREACHABLE", 0xC000023D),
    TableEntry::new("STATUS_PROTOCOL_UNREACHABLE", 0xC000023E),
    TableEntry::new("STATUS_PORT_UNREACHABLE", 0xC000023F),
    TableEntry::new("STATUS_REQUEST_ABORTED", 0xC0000240),
    TableEntry::new("STATUS_CONNECTION_ABORTED", 0xC0000241),
    TableEntry::new("STATUS_BAD_COMPRESSION_BUFFER", 0xC0000242),
    TableEntry::new("STATUS_USER_MAPPED_FILE", 0xC0000243),
    TableEntry::new("STATUS_AUDIT_FAILED", 0xC0000244),
    TableEntry::new("STATUS_TIMER_RESOLUTION_NOT_SET", 0xC0000245),
    TableEntry::new("STATUS_CONNECTION_COUNT_LIMIT", 0xC0000246),
    TableEntry::new("STATUS_LOGIN_TIME_RESTRICTION", 0xC0000247),
    TableEntry::new("STATUS_LOGIN_WKSTA_RESTRICTION", 0xC0000248),
    TableEntry::new("STATUS_IMAGE_MP_UP_MISMATCH", 0xC0000249),
    TableEntry::new("STATUS_NOT_A_REPARSE_POINT", 0xC0000275),
    TableEntry::new("STATUS_IO_REPARSE_TAG_INVALID", 0xC0000276),
    TableEntry::new("STATUS_IO_REPARSE_TAG_MISMATCH", 0xC0000277),
    TableEntry::new("STATUS_IO_REPARSE_DATA_INVALID", 0xC0000278),
    TableEntry::new("STATUS_IO_REPARSE_TAG_NOT_HANDLED", 0xC0000279),
    TableEntry::new("STATUS_PWD_TOO_LONG", 0xC000027A),
    TableEntry::new("STATUS_STOWED_EXCEPTION", 0xC000027B),
    TableEntry::new("STATUS_CONTEXT_STOWED_EXCEPTION", 0xC000027C),
    TableEntry::new("STATUS_REPARSE_POINT_NOT_RESOLVED", 0xC0000280),
    TableEntry::new("STATUS_DIRECTORY_IS_A_REPARSE_POINT", 0xC0000281),
    TableEntry::new("STATUS_RANGE_LIST_CONFLICT", 0xC0000282),
    TableEntry::new("STATUS_SOURCE_ELEMENT_EMPTY", 0xC0000283),
    TableEntry::new("STATUS_DESTINATION_ELEMENT_FULL", 0xC0000284),
    TableEntry::new("STATUS_ILLEGAL_ELEMENT_ADDRESS", 0xC0000285),
    TableEntry::new("STATUS_MAGAZINE_NOT_PRESENT", 0xC0000286),
    TableEntry::new("STATUS_REINITIALIZATION_NEEDED", 0xC0000287),
    TableEntry::new("STATUS_ENCRYPTION_FAILED", 0xC000028A),
    TableEntry::new("STATUS_DECRYPTION_FAILED", 0xC000028B),
    TableEntry::new("STATUS_RANGE_NOT_FOUND", 0xC000028C),
    TableEntry::new("STATUS_NO_RECOVERY_POLICY", 0xC000028D),
    TableEntry::new("STATUS_NO_EFS", 0xC000028E),
    TableEntry::new("STATUS_WRONG_EFS", 0xC000028F),
    TableEntry::new("STATUS_NO_USER_KEYS", 0xC0000290),
    TableEntry::new("STATUS_FILE_NOT_ENCRYPTED", 0xC0000291),
    TableEntry::new("STATUS_NOT_EXPORT_FORMAT", 0xC0000292),
    TableEntry::new("STATUS_FILE_ENCRYPTED", 0xC0000293),
    TableEntry::new("STATUS_WMI_GUID_NOT_FOUND", 0xC0000295),
    TableEntry::new("STATUS_WMI_INSTANCE_NOT_FOUND", 0xC0000296),
    TableEntry::new("STATUS_WMI_ITEMID_NOT_FOUND", 0xC0000297),
    TableEntry::new("STATUS_WMI_TRY_AGAIN", 0xC0000298),
    TableEntry::new("STATUS_SHARED_POLICY", 0xC0000299),
    TableEntry::new("STATUS_POLICY_OBJECT_NOT_FOUND", 0xC000029A),
    TableEntry::new("STATUS_POLICY_ONLY_IN_DS", 0xC000029B),
    TableEntry::new("STATUS_VOLUME_NOT_UPGRADED", 0xC000029C),
    TableEntry::new("STATUS_REMOTE_STORAGE_NOT_ACTIVE", 0xC000029D),
    TableEntry::new("STATUS_REMOTE_STORAGE_MEDIA_ERROR", 0xC000029E),
    TableEntry::new("STATUS_NO_TRACKING_SERVICE", 0xC000029F),
    TableEntry::new("STATUS_SERVER_SID_MISMATCH", 0xC00002A0),
    TableEntry::new("STATUS_DS_NO_ATTRIBUTE_OR_VALUE", 0xC00002A1),
    TableEntry::new("STATUS_DS_INVALID_ATTRIBUTE_SYNTAX", 0xC00002A2),
    TableEntry::new("STATUS_DS_ATTRIBUTE_TYPE_UNDEFINED", 0xC00002A3),
    TableEntry::new("STATUS_DS_ATTRIBUTE_OR_VALUE_EXISTS", 0xC00002A4),
    TableEntry::new("STATUS_DS_BUSY", 0xC00002A5),
    TableEntry::new("STATUS_DS_UNAVAILABLE", 0xC00002A6),
    TableEntry::new("STATUS_DS_NO_RIDS_ALLOCATED", 0xC00002A7),
    TableEntry::new("STATUS_DS_NO_MORE_RIDS", 0xC00002A8),
    TableEntry::new("STATUS_DS_INCORRECT_ROLE_OWNER", 0xC00002A9),
    TableEntry::new("STATUS_DS_RIDMGR_INIT_ERROR", 0xC00002AA),
    TableEntry::new("STATUS_DS_OBJ_CLASS_VIOLATION", 0xC00002AB),
    TableEntry::new("STATUS_DS_CANT_ON_NON_LEAF", 0xC00002AC),
    TableEntry::new("STATUS_DS_CANT_ON_RDN", 0xC00002AD),
    TableEntry::new("STATUS_DS_CANT_MOD_OBJ_CLASS", 0xC00002AE),
    TableEntry::new("STATUS_DS_CROSS_DOM_MOVE_FAILED", 0xC00002AF),
    TableEntry::new("STATUS_DS_GC_NOT_AVAILABLE", 0xC00002B0),
    TableEntry::new("STATUS_DIRECTORY_SERVICE_REQUIRED", 0xC00002B1),
    TableEntry::new("STATUS_REPARSE_ATTRIBUTE_CONFLICT", 0xC00002B2),
    TableEntry::new("STATUS_CANT_ENABLE_DENY_ONLY", 0xC00002B3),
    TableEntry::new("STATUS_FLOAT_MULTIPLE_FAULTS", 0xC00002B4),
    TableEntry::new("STATUS_FLOAT_MULTIPLE_TRAPS", 0xC00002B5),
    TableEntry::new("STATUS_DEVICE_REMOVED", 0xC00002B6),
    TableEntry::new("STATUS_JOURNAL_DELETE_IN_PROGRESS", 0xC00002B7),
    TableEntry::new("STATUS_JOURNAL_NOT_ACTIVE", 0xC00002B8),
    TableEntry::new("STATUS_NOINTERFACE", 0xC00002B9),
    TableEntry::new("STATUS_DS_RIDMGR_DISABLED", 0xC00002BA),
    TableEntry::new("STATUS_DS_ADMIN_LIMIT_EXCEEDED", 0xC00002C1),
    TableEntry::new("STATUS_DRIVER_FAILED_SLEEP", 0xC00002C2),
    TableEntry::new("STATUS_MUTUAL_AUTHENTICATION_FAILED", 0xC00002C3),
    TableEntry::new("STATUS_CORRUPT_SYSTEM_FILE", 0xC00002C4),
    TableEntry::new("STATUS_DATATYPE_MISALIGNMENT_ERROR", 0xC00002C5),
    TableEntry::new("STATUS_WMI_READ_ONLY", 0xC00002C6),
    TableEntry::new("STATUS_WMI_SET_FAILURE", 0xC00002C7),
    TableEntry::new("STATUS_COMMITMENT_MINIMUM", 0xC00002C8),
    TableEntry::new("STATUS_REG_NAT_CONSUMPTION", 0xC00002C9),
    TableEntry::new("STATUS_TRANSPORT_FULL", 0xC00002CA),
    TableEntry::new("STATUS_DS_SAM_INIT_FAILURE", 0xC00002CB),
    TableEntry::new("STATUS_ONLY_IF_CONNECTED", 0xC00002CC),
    TableEntry::new("STATUS_DS_SENSITIVE_GROUP_VIOLATION", 0xC00002CD),
    TableEntry::new("STATUS_PNP_RESTART_ENUMERATION", 0xC00002CE),
    TableEntry::new("STATUS_JOURNAL_ENTRY_DELETED", 0xC00002CF),
    TableEntry::new("STATUS_DS_CANT_MOD_PRIMARYGROUPID", 0xC00002D0),
    TableEntry::new("STATUS_SYSTEM_IMAGE_BAD_SIGNATURE", 0xC00002D1),
    TableEntry::new("STATUS_PNP_REBOOT_REQUIRED", 0xC00002D2),
    TableEntry::new("STATUS_POWER_STATE_INVALID", 0xC00002D3),
    TableEntry::new("STATUS_DS_INVALID_GROUP_TYPE", 0xC00002D4),
    TableEntry::new("STATUS_DS_NO_NEST_GLOBALGROUP_IN_MIXEDDOMAIN", 0xC00002D5),
    TableEntry::new("STATUS_DS_NO_NEST_LOCALGROUP_IN_MIXEDDOMAIN", 0xC00002D6),
    TableEntry::new("STATUS_DS_GLOBAL_CANT_HAVE_LOCAL_MEMBER", 0xC00002D7),
    TableEntry::new("STATUS_DS_GLOBAL_CANT_HAVE_UNIVERSAL_MEMBER", 0xC00002D8),
    TableEntry::new("STATUS_DS_UNIVERSAL_CANT_HAVE_LOCAL_MEMBER", 0xC00002D9),
    TableEntry::new("STATUS_DS_GLOBAL_CANT_HAVE_CROSSDOMAIN_MEMBER", 0xC00002DA),
    TableEntry::new("STATUS_DS_LOCAL_CANT_HAVE_CROSSDOMAIN_LOCAL_MEMBER", 0xC00002DB),
    TableEntry::new("STATUS_DS_HAVE_PRIMARY_MEMBERS", 0xC00002DC),
    TableEntry::new("STATUS_WMI_NOT_SUPPORTED", 0xC00002DD),
    TableEntry::new("STATUS_INSUFFICIENT_POWER", 0xC00002DE),
    TableEntry::new("STATUS_SAM_NEED_BOOTKEY_PASSWORD", 0xC00002DF),
    TableEntry::new("STATUS_SAM_NEED_BOOTKEY_FLOPPY", 0xC00002E0),
    TableEntry::new("STATUS_DS_CANT_START", 0xC00002E1),
    TableEntry::new("STATUS_DS_INIT_FAILURE", 0xC00002E2),
    TableEntry::new("STATUS_SAM_INIT_FAILURE", 0xC00002E3),
    TableEntry::new("STATUS_DS_GC_REQUIRED", 0xC00002E4),
    TableEntry::new("STATUS_DS_LOCAL_MEMBER_OF_LOCAL_ONLY", 0xC00002E5),
    TableEntry::new("STATUS_DS_NO_FPO_IN_UNIVERSAL_GROUPS", 0xC00002E6),
    TableEntry::new("STATUS_DS_MACHINE_ACCOUNT_QUOTA_EXCEEDED", 0xC00002E7),
    TableEntry::new("STATUS_MULTIPLE_FAULT_VIOLATION", 0xC00002E8),
    TableEntry::new("STATUS_CURRENT_DOMAIN_NOT_ALLOWED", 0xC00002E9),
    TableEntry::new("STATUS_CANNOT_MAKE", 0xC00002EA),
    TableEntry::new("STATUS_SYSTEM_SHUTDOWN", 0xC00002EB),
    TableEntry::new("STATUS_DS_INIT_FAILURE_CONSOLE", 0xC00002EC),
    TableEntry::new("STATUS_DS_SAM_INIT_FAILURE_CONSOLE", 0xC00002ED),
    TableEntry::new("STATUS_UNFINISHED_CONTEXT_DELETED", 0xC00002EE),
    TableEntry::new("STATUS_NO_TGT_REPLY", 0xC00002EF),
    TableEntry::new("STATUS_OBJECTID_NOT_FOUND", 0xC00002F0),
    TableEntry::new("STATUS_NO_IP_ADDRESSES", 0xC00002F1),
    TableEntry::new("STATUS_WRONG_CREDENTIAL_HANDLE", 0xC00002F2),
    TableEntry::new("STATUS_CRYPTO_SYSTEM_INVALID", 0xC00002F3),
    TableEntry::new("STATUS_MAX_REFERRALS_EXCEEDED", 0xC00002F4),
    TableEntry::new("STATUS_MUST_BE_KDC", 0xC00002F5),
    TableEntry::new("STATUS_STRONG_CRYPTO_NOT_SUPPORTED", 0xC00002F6),
    TableEntry::new("STATUS_TOO_MANY_PRINCIPALS", 0xC00002F7),
    TableEntry::new("STATUS_NO_PA_DATA", 0xC00002F8),
    TableEntry::new("STATUS_PKINIT_NAME_MISMATCH", 0xC00002F9),
    TableEntry::new("STATUS_SMARTCARD_LOGON_REQUIRED", 0xC00002FA),
    TableEntry::new("STATUS_KDC_INVALID_REQUEST", 0xC00002FB),
    TableEntry::new("STATUS_KDC_UNABLE_TO_REFER", 0xC00002FC),
    TableEntry::new("STATUS_KDC_UNKNOWN_ETYPE", 0xC00002FD),
    TableEntry::new("STATUS_SHUTDOWN_IN_PROGRESS", 0xC00002FE),
    TableEntry::new("STATUS_SERVER_SHUTDOWN_IN_PROGRESS", 0xC00002FF),
    TableEntry::new("STATUS_NOT_SUPPORTED_ON_SBS", 0xC0000300),
    TableEntry::new("STATUS_WMI_GUID_DISCONNECTED", 0xC0000301),
    TableEntry::new("STATUS_WMI_ALREADY_DISABLED", 0xC0000302),
    TableEntry::new("STATUS_WMI_ALREADY_ENABLED", 0xC0000303),
    TableEntry::new("STATUS_MFT_TOO_FRAGMENTED", 0xC0000304),
    TableEntry::new("STATUS_COPY_PROTECTION_FAILURE", 0xC0000305),
    TableEntry::new("STATUS_CSS_AUTHENTICATION_FAILURE", 0xC0000306),
    TableEntry::new("STATUS_CSS_KEY_NOT_PRESENT", 0xC0000307),
    TableEntry::new("STATUS_CSS_KEY_NOT_ESTABLISHED", 0xC0000308),
    TableEntry::new("STATUS_CSS_SCRAMBLED_SECTOR", 0xC0000309),
    TableEntry::new("STATUS_CSS_REGION_MISMATCH", 0xC000030A),
    TableEntry::new("STATUS_CSS_RESETS_EXHAUSTED", 0xC000030B),
    TableEntry::new("STATUS_PASSWORD_CHANGE_REQUIRED", 0xC000030C),
    TableEntry::new("STATUS_LOST_MODE_LOGON_RESTRICTION", 0xC000030D),
    TableEntry::new("STATUS_PKINIT_FAILURE", 0xC0000320),
    TableEntry::new("STATUS_SMARTCARD_SUBSYSTEM_FAILURE", 0xC0000321),
    TableEntry::new("STATUS_NO_KERB_KEY", 0xC0000322),
    TableEntry::new("STATUS_HOST_DOWN", 0xC0000350),
    TableEntry::new("STATUS_UNSUPPORTED_PREAUTH", 0xC0000351),
    TableEntry::new("STATUS_EFS_ALG_BLOB_TOO_BIG", 0xC0000352),
    TableEntry::new("STATUS_PORT_NOT_SET", 0xC0000353),
    TableEntry::new("STATUS_DEBUGGER_INACTIVE", 0xC0000354),
    TableEntry::new("STATUS_DS_VERSION_CHECK_FAILURE", 0xC0000355),
    TableEntry::new("STATUS_AUDITING_DISABLED", 0xC0000356),
    TableEntry::new("STATUS_PRENT4_MACHINE_ACCOUNT", 0xC0000357),
    TableEntry::new("STATUS_DS_AG_CANT_HAVE_UNIVERSAL_MEMBER", 0xC0000358),
    TableEntry::new("STATUS_INVALID_IMAGE_WIN_32", 0xC0000359),
    TableEntry::new("STATUS_INVALID_IMAGE_WIN_64", 0xC000035A),
    TableEntry::new("STATUS_BAD_BINDINGS", 0xC000035B),
    TableEntry::new("STATUS_NETWORK_SESSION_EXPIRED", 0xC000035C),
    TableEntry::new("STATUS_APPHELP_BLOCK", 0xC000035D),
    TableEntry::new("STATUS_ALL_SIDS_FILTERED", 0xC000035E),
    TableEntry::new("STATUS_NOT_SAFE_MODE_DRIVER", 0xC000035F),
    TableEntry::new("STATUS_ACCESS_DISABLED_BY_POLICY_DEFAULT", 0xC0000361),
    TableEntry::new("STATUS_ACCESS_DISABLED_BY_POLICY_PATH", 0xC0000362),
    TableEntry::new("STATUS_ACCESS_DISABLED_BY_POLICY_PUBLISHER", 0xC0000363),
    TableEntry::new("STATUS_ACCESS_DISABLED_BY_POLICY_OTHER", 0xC0000364),
    TableEntry::new("STATUS_FAILED_DRIVER_ENTRY", 0xC0000365),
    TableEntry::new("STATUS_DEVICE_ENUMERATION_ERROR", 0xC0000366),
    TableEntry::new("STATUS_MOUNT_POINT_NOT_RESOLVED", 0xC0000368),
    TableEntry::new("STATUS_INVALID_DEVICE_OBJECT_PARAMETER", 0xC0000369),
    TableEntry::new("STATUS_MCA_OCCURED", 0xC000036A),
    TableEntry::new("STATUS_DRIVER_BLOCKED_CRITICAL", 0xC000036B),
    TableEntry::new("STATUS_DRIVER_BLOCKED", 0xC000036C),
    TableEntry::new("STATUS_DRIVER_DATABASE_ERROR", 0xC000036D),
    TableEntry::new("STATUS_SYSTEM_HIVE_TOO_LARGE", 0xC000036E),
    TableEntry::new("STATUS_INVALID_IMPORT_OF_NON_DLL", 0xC000036F),
    TableEntry::new("STATUS_NO_SECRETS", 0xC0000371),
    TableEntry::new("STATUS_ACCESS_DISABLED_NO_SAFER_UI_BY_POLICY", 0xC0000372),
    TableEntry::new("STATUS_FAILED_STACK_SWITCH", 0xC0000373),
    TableEntry::new("STATUS_HEAP_CORRUPTION", 0xC0000374),
    TableEntry::new("STATUS_SMARTCARD_WRONG_PIN", 0xC0000380),
    TableEntry::new("STATUS_SMARTCARD_CARD_BLOCKED", 0xC0000381),
    TableEntry::new("STATUS_SMARTCARD_CARD_NOT_AUTHENTICATED", 0xC0000382),
    TableEntry::new("STATUS_SMARTCARD_NO_CARD", 0xC0000383),
    TableEntry::new("STATUS_SMARTCARD_NO_KEY_CONTAINER", 0xC0000384),
    TableEntry::new("STATUS_SMARTCARD_NO_CERTIFICATE", 0xC0000385),
    TableEntry::new("STATUS_SMARTCARD_NO_KEYSET", 0xC0000386),
    TableEntry::new("STATUS_SMARTCARD_IO_ERROR", 0xC0000387),
    TableEntry::new("STATUS_DOWNGRADE_DETECTED", 0xC0000388),
    TableEntry::new("STATUS_SMARTCARD_CERT_REVOKED", 0xC0000389),
    TableEntry::new("STATUS_ISSUING_CA_UNTRUSTED", 0xC000038A),
    TableEntry::new("STATUS_REVOCATION_OFFLINE_C", 0xC000038B),
    TableEntry::new("STATUS_PKINIT_CLIENT_FAILURE", 0xC000038C),
    TableEntry::new("STATUS_SMARTCARD_CERT_EXPIRED", 0xC000038D),
    TableEntry::new("STATUS_DRIVER_FAILED_PRIOR_UNLOAD", 0xC000038E),
    TableEntry::new("STATUS_SMARTCARD_SILENT_CONTEXT", 0xC000038F),
    TableEntry::new("STATUS_PER_USER_TRUST_QUOTA_EXCEEDED", 0xC0000401),
    TableEntry::new("STATUS_ALL_USER_TRUST_QUOTA_EXCEEDED", 0xC0000402),
    TableEntry::new("STATUS_USER_DELETE_TRUST_QUOTA_EXCEEDED", 0xC0000403),
    TableEntry::new("STATUS_DS_NAME_NOT_UNIQUE", 0xC0000404),
    TableEntry::new("STATUS_DS_DUPLICATE_ID_FOUND", 0xC0000405),
    TableEntry::new("STATUS_DS_GROUP_CONVERSION_ERROR", 0xC0000406),
    TableEntry::new("STATUS_VOLSNAP_PREPARE_HIBERNATE", 0xC0000407),
    TableEntry::new("STATUS_USER2USER_REQUIRED", 0xC0000408),
    TableEntry::new("STATUS_STACK_BUFFER_OVERRUN", 0xC0000409),
    TableEntry::new("STATUS_NO_S4U_PROT_SUPPORT", 0xC000040A),
    TableEntry::new("STATUS_CROSSREALM_DELEGATION_FAILURE", 0xC000040B),
    TableEntry::new("STATUS_REVOCATION_OFFLINE_KDC", 0xC000040C),
    TableEntry::new("STATUS_ISSUING_CA_UNTRUSTED_KDC", 0xC000040D),
    TableEntry::new("STATUS_KDC_CERT_EXPIRED", 0xC000040E),
    TableEntry::new("STATUS_KDC_CERT_REVOKED", 0xC000040F),
    TableEntry::new("STATUS_PARAMETER_QUOTA_EXCEEDED", 0xC0000410),
    TableEntry::new("STATUS_HIBERNATION_FAILURE", 0xC0000411),
    TableEntry::new("STATUS_DELAY_LOAD_FAILED", 0xC0000412),
    TableEntry::new("STATUS_AUTHENTICATION_FIREWALL_FAILED", 0xC0000413),
    TableEntry::new("STATUS_VDM_DISALLOWED", 0xC0000414),
    TableEntry::new("STATUS_HUNG_DISPLAY_DRIVER_THREAD", 0xC0000415),
    TableEntry::new("STATUS_INSUFFICIENT_RESOURCE_FOR_SPECIFIED_SHARED_SECTION_SIZE", 0xC0000416),
    TableEntry::new("STATUS_INVALID_CRUNTIME_PARAMETER", 0xC0000417),
    TableEntry::new("STATUS_NTLM_BLOCKED", 0xC0000418),
    TableEntry::new("STATUS_DS_SRC_SID_EXISTS_IN_FOREST", 0xC0000419),
    TableEntry::new("STATUS_DS_DOMAIN_NAME_EXISTS_IN_FOREST", 0xC000041A),
    TableEntry::new("STATUS_DS_FLAT_NAME_EXISTS_IN_FOREST", 0xC000041B),
    TableEntry::new("STATUS_INVALID_USER_PRINCIPAL_NAME", 0xC000041C),
    TableEntry::new("STATUS_FATAL_USER_CALLBACK_EXCEPTION", 0xC000041D),
    TableEntry::new("STATUS_ASSERTION_FAILURE", 0xC0000420),
    TableEntry::new("STATUS_VERIFIER_STOP", 0xC0000421),
    TableEntry::new("STATUS_CALLBACK_POP_STACK", 0xC0000423),
    TableEntry::new("STATUS_INCOMPATIBLE_DRIVER_BLOCKED", 0xC0000424),
    TableEntry::new("STATUS_HIVE_UNLOADED", 0xC0000425),
    TableEntry::new("STATUS_COMPRESSION_DISABLED", 0xC0000426),
    TableEntry::new("STATUS_FILE_SYSTEM_LIMITATION", 0xC0000427),
    TableEntry::new("STATUS_INVALID_IMAGE_HASH", 0xC0000428),
    TableEntry::new("STATUS_NOT_CAPABLE", 0xC0000429),
    TableEntry::new("STATUS_REQUEST_OUT_OF_SEQUENCE", 0xC000042A),
    TableEntry::new("STATUS_IMPLEMENTATION_LIMIT", 0xC000042B),
    TableEntry::new("STATUS_ELEVATION_REQUIRED", 0xC000042C),
    TableEntry::new("STATUS_NO_SECURITY_CONTEXT", 0xC000042D),
    TableEntry::new("STATUS_PKU2U_CERT_FAILURE", 0xC000042F),
    TableEntry::new("STATUS_BEYOND_VDL", 0xC0000432),
    TableEntry::new("STATUS_ENCOUNTERED_WRITE_IN_PROGRESS", 0xC0000433),
    TableEntry::new("STATUS_PTE_CHANGED", 0xC0000434),
    TableEntry::new("STATUS_PURGE_FAILED", 0xC0000435),
    TableEntry::new("STATUS_CRED_REQUIRES_CONFIRMATION", 0xC0000440),
    TableEntry::new("STATUS_CS_ENCRYPTION_INVALID_SERVER_RESPONSE", 0xC0000441),
    TableEntry::new("STATUS_CS_ENCRYPTION_UNSUPPORTED_SERVER", 0xC0000442),
    TableEntry::new("STATUS_CS_ENCRYPTION_EXISTING_ENCRYPTED_FILE", 0xC0000443),
    TableEntry::new("STATUS_CS_ENCRYPTION_NEW_ENCRYPTED_FILE", 0xC0000444),
    TableEntry::new("STATUS_CS_ENCRYPTION_FILE_NOT_CSE", 0xC0000445),
    TableEntry::new("STATUS_INVALID_LABEL", 0xC0000446),
    TableEntry::new("STATUS_DRIVER_PROCESS_TERMINATED", 0xC0000450),
    TableEntry::new("STATUS_AMBIGUOUS_SYSTEM_DEVICE", 0xC0000451),
    TableEntry::new("STATUS_SYSTEM_DEVICE_NOT_FOUND", 0xC0000452),
    TableEntry::new("STATUS_RESTART_BOOT_APPLICATION", 0xC0000453),
    TableEntry::new("STATUS_INSUFFICIENT_NVRAM_RESOURCES", 0xC0000454),
    TableEntry::new("STATUS_INVALID_SESSION", 0xC0000455),
    TableEntry::new("STATUS_THREAD_ALREADY_IN_SESSION", 0xC0000456),
    TableEntry::new("STATUS_THREAD_NOT_IN_SESSION", 0xC0000457),
    TableEntry::new("STATUS_INVALID_WEIGHT", 0xC0000458),
    TableEntry::new("STATUS_REQUEST_PAUSED", 0xC0000459),
    TableEntry::new("STATUS_NO_RANGES_PROCESSED", 0xC0000460),
    TableEntry::new("STATUS_DISK_RESOURCES_EXHAUSTED", 0xC0000461),
    TableEntry::new("STATUS_NEEDS_REMEDIATION", 0xC0000462),
    TableEntry::new("STATUS_DEVICE_FEATURE_NOT_SUPPORTED", 0xC0000463),
    TableEntry::new("STATUS_DEVICE_UNREACHABLE", 0xC0000464),
    TableEntry::new("STATUS_INVALID_TOKEN", 0xC0000465),
    TableEntry::new("STATUS_SERVER_UNAVAILABLE", 0xC0000466),
    TableEntry::new("STATUS_FILE_NOT_AVAILABLE", 0xC0000467),
    TableEntry::new("STATUS_DEVICE_INSUFFICIENT_RESOURCES", 0xC0000468),
    TableEntry::new("STATUS_PACKAGE_UPDATING", 0xC0000469),
    TableEntry::new("STATUS_NOT_READ_FROM_COPY", 0xC000046A),
    TableEntry::new("STATUS_FT_WRITE_FAILURE", 0xC000046B),
    TableEntry::new("STATUS_FT_DI_SCAN_REQUIRED", 0xC000046C),
    TableEntry::new("STATUS_OBJECT_NOT_EXTERNALLY_BACKED", 0xC000046D),
    TableEntry::new("STATUS_EXTERNAL_BACKING_PROVIDER_UNKNOWN", 0xC000046E),
    TableEntry::new("STATUS_COMPRESSION_NOT_BENEFICIAL", 0xC000046F),
    TableEntry::new("STATUS_DATA_CHECKSUM_ERROR", 0xC0000470),
    TableEntry::new("STATUS_INTERMIXED_KERNEL_EA_OPERATION", 0xC0000471),
    TableEntry::new("STATUS_TRIM_READ_ZERO_NOT_SUPPORTED", 0xC0000472),
    TableEntry::new("STATUS_TOO_MANY_SEGMENT_DESCRIPTORS", 0xC0000473),
    TableEntry::new("STATUS_INVALID_OFFSET_ALIGNMENT", 0xC0000474),
    TableEntry::new("STATUS_INVALID_FIELD_IN_PARAMETER_LIST", 0xC0000475),
    TableEntry::new("STATUS_OPERATION_IN_PROGRESS", 0xC0000476),
    TableEntry::new("STATUS_INVALID_INITIATOR_TARGET_PATH", 0xC0000477),
    TableEntry::new("STATUS_SCRUB_DATA_DISABLED", 0xC0000478),
    TableEntry::new("STATUS_NOT_REDUNDANT_STORAGE", 0xC0000479),
    TableEntry::new("STATUS_RESIDENT_FILE_NOT_SUPPORTED", 0xC000047A),
    TableEntry::new("STATUS_COMPRESSED_FILE_NOT_SUPPORTED", 0xC000047B),
    TableEntry::new("STATUS_DIRECTORY_NOT_SUPPORTED", 0xC000047C),
    TableEntry::new("STATUS_IO_OPERATION_TIMEOUT", 0xC000047D),
    TableEntry::new("STATUS_SYSTEM_NEEDS_REMEDIATION", 0xC000047E),
    TableEntry::new("STATUS_APPX_INTEGRITY_FAILURE_CLR_NGEN", 0xC000047F),
    TableEntry::new("STATUS_SHARE_UNAVAILABLE", 0xC0000480),
    TableEntry::new("STATUS_APISET_NOT_HOSTED", 0xC0000481),
    TableEntry::new("STATUS_APISET_NOT_PRESENT", 0xC0000482),
    TableEntry::new("STATUS_DEVICE_HARDWARE_ERROR", 0xC0000483),
    TableEntry::new("STATUS_FIRMWARE_SLOT_INVALID", 0xC0000484),
    TableEntry::new("STATUS_FIRMWARE_IMAGE_INVALID", 0xC0000485),
    TableEntry::new("STATUS_STORAGE_TOPOLOGY_ID_MISMATCH", 0xC0000486),
    TableEntry::new("STATUS_WIM_NOT_BOOTABLE", 0xC0000487),
    TableEntry::new("STATUS_BLOCKED_BY_PARENTAL_CONTROLS", 0xC0000488),
    TableEntry::new("STATUS_NEEDS_REGISTRATION", 0xC0000489),
    TableEntry::new("STATUS_QUOTA_ACTIVITY", 0xC000048A),
    TableEntry::new("STATUS_CALLBACK_INVOKE_INLINE", 0xC000048B),
    TableEntry::new("STATUS_BLOCK_TOO_MANY_REFERENCES", 0xC000048C),
    TableEntry::new("STATUS_MARKED_TO_DISALLOW_WRITES", 0xC000048D),
    TableEntry::new("STATUS_NETWORK_ACCESS_DENIED_EDP", 0xC000048E),
    TableEntry::new("STATUS_ENCLAVE_FAILURE", 0xC000048F),
    TableEntry::new("STATUS_PNP_NO_COMPAT_DRIVERS", 0xC0000490),
    TableEntry::new("STATUS_PNP_DRIVER_PACKAGE_NOT_FOUND", 0xC0000491),
    TableEntry::new("STATUS_PNP_DRIVER_CONFIGURATION_NOT_FOUND", 0xC0000492),
    TableEntry::new("STATUS_PNP_DRIVER_CONFIGURATION_INCOMPLETE", 0xC0000493),
    TableEntry::new("STATUS_PNP_FUNCTION_DRIVER_REQUIRED", 0xC0000494),
    TableEntry::new("STATUS_PNP_DEVICE_CONFIGURATION_PENDING", 0xC0000495),
    TableEntry::new("STATUS_DEVICE_HINT_NAME_BUFFER_TOO_SMALL", 0xC0000496),
    TableEntry::new("STATUS_PACKAGE_NOT_AVAILABLE", 0xC0000497),
    TableEntry::new("STATUS_DEVICE_IN_MAINTENANCE", 0xC0000499),
    TableEntry::new("STATUS_NOT_SUPPORTED_ON_DAX", 0xC000049A),
    TableEntry::new("STATUS_FREE_SPACE_TOO_FRAGMENTED", 0xC000049B),
    TableEntry::new("STATUS_DAX_MAPPING_EXISTS", 0xC000049C),
    TableEntry::new("STATUS_CHILD_PROCESS_BLOCKED", 0xC000049D),
    TableEntry::new("STATUS_STORAGE_LOST_DATA_PERSISTENCE", 0xC000049E),
    TableEntry::new("STATUS_VRF_CFG_AND_IO_ENABLED", 0xC000049F),
    TableEntry::new("STATUS_PARTITION_TERMINATING", 0xC00004A0),
    TableEntry::new("STATUS_EXTERNAL_SYSKEY_NOT_SUPPORTED", 0xC00004A1),
    TableEntry::new("STATUS_ENCLAVE_VIOLATION", 0xC00004A2),
    TableEntry::new("STATUS_FILE_PROTECTED_UNDER_DPL", 0xC00004A3),
    TableEntry::new("STATUS_VOLUME_NOT_CLUSTER_ALIGNED", 0xC00004A4),
    TableEntry::new("STATUS_NO_PHYSICALLY_ALIGNED_FREE_SPACE_FOUND", 0xC00004A5),
    TableEntry::new("STATUS_APPX_FILE_NOT_ENCRYPTED", 0xC00004A6),
    TableEntry::new("STATUS_RWRAW_ENCRYPTED_FILE_NOT_ENCRYPTED", 0xC00004A7),
    TableEntry::new("STATUS_RWRAW_ENCRYPTED_INVALID_EDATAINFO_FILEOFFSET", 0xC00004A8),
    TableEntry::new("STATUS_RWRAW_ENCRYPTED_INVALID_EDATAINFO_FILERANGE", 0xC00004A9),
    TableEntry::new("STATUS_RWRAW_ENCRYPTED_INVALID_EDATAINFO_PARAMETER", 0xC00004AA),
    TableEntry::new("STATUS_FT_READ_FAILURE", 0xC00004AB),
    TableEntry::new("STATUS_PATCH_CONFLICT", 0xC00004AC),
    TableEntry::new("STATUS_STORAGE_RESERVE_ID_INVALID", 0xC00004AD),
    TableEntry::new("STATUS_STORAGE_RESERVE_DOES_NOT_EXIST", 0xC00004AE),
    TableEntry::new("STATUS_STORAGE_RESERVE_ALREADY_EXISTS", 0xC00004AF),
    TableEntry::new("STATUS_STORAGE_RESERVE_NOT_EMPTY", 0xC00004B0),
    TableEntry::new("STATUS_NOT_A_DAX_VOLUME", 0xC00004B1),
    TableEntry::new("STATUS_NOT_DAX_MAPPABLE", 0xC00004B2),
    TableEntry::new("STATUS_CASE_DIFFERING_NAMES_IN_DIR", 0xC00004B3),
    TableEntry::new("STATUS_FILE_NOT_SUPPORTED", 0xC00004B4),
    TableEntry::new("STATUS_NOT_SUPPORTED_WITH_BTT", 0xC00004B5),
    TableEntry::new("STATUS_ENCRYPTION_DISABLED", 0xC00004B6),
    TableEntry::new("STATUS_ENCRYPTING_METADATA_DISALLOWED", 0xC00004B7),
    TableEntry::new("STATUS_CANT_CLEAR_ENCRYPTION_FLAG", 0xC00004B8),
    TableEntry::new("STATUS_UNSATISFIED_DEPENDENCIES", 0xC00004B9),
    TableEntry::new("STATUS_CASE_SENSITIVE_PATH", 0xC00004BA),
    TableEntry::new("STATUS_UNSUPPORTED_PAGING_MODE", 0xC00004BB),
    TableEntry::new("STATUS_UNTRUSTED_MOUNT_POINT", 0xC00004BC),
    TableEntry::new("STATUS_HAS_SYSTEM_CRITICAL_FILES", 0xC00004BD),
    TableEntry::new("STATUS_OBJECT_IS_IMMUTABLE", 0xC00004BE),
    TableEntry::new("STATUS_FT_READ_FROM_COPY_FAILURE", 0xC00004BF),
    TableEntry::new("STATUS_IMAGE_LOADED_AS_PATCH_IMAGE", 0xC00004C0),
    TableEntry::new("STATUS_STORAGE_STACK_ACCESS_DENIED", 0xC00004C1),
    TableEntry::new("STATUS_INSUFFICIENT_VIRTUAL_ADDR_RESOURCES", 0xC00004C2),
    TableEntry::new("STATUS_ENCRYPTED_FILE_NOT_SUPPORTED", 0xC00004C3),
    TableEntry::new("STATUS_SPARSE_FILE_NOT_SUPPORTED", 0xC00004C4),
    TableEntry::new("STATUS_PAGEFILE_NOT_SUPPORTED", 0xC00004C5),
    TableEntry::new("STATUS_VOLUME_NOT_SUPPORTED", 0xC00004C6),
    TableEntry::new("STATUS_NOT_SUPPORTED_WITH_BYPASSIO", 0xC00004C7),
    TableEntry::new("STATUS_NO_BYPASSIO_DRIVER_SUPPORT", 0xC00004C8),
    TableEntry::new("STATUS_NOT_SUPPORTED_WITH_ENCRYPTION", 0xC00004C9),
    TableEntry::new("STATUS_NOT_SUPPORTED_WITH_COMPRESSION", 0xC00004CA),
    TableEntry::new("STATUS_NOT_SUPPORTED_WITH_REPLICATION", 0xC00004CB),
    TableEntry::new("STATUS_NOT_SUPPORTED_WITH_DEDUPLICATION", 0xC00004CC),
    TableEntry::new("STATUS_NOT_SUPPORTED_WITH_AUDITING", 0xC00004CD),
    TableEntry::new("STATUS_BYPASSIO_FLT_NOT_SUPPORTED", 0xC00004CE),
    TableEntry::new("STATUS_NOT_SUPPORTED_WITH_VIRTUALIZATION", 0xC00004CF),
    TableEntry::new("STATUS_VOLUME_UPGRADE_NOT_NEEDED", 0xC00004D0),
    TableEntry::new("STATUS_VOLUME_UPGRADE_PENDING", 0xC00004D1),
    TableEntry::new("STATUS_VOLUME_UPGRADE_DISABLED", 0xC00004D2),
    TableEntry::new("STATUS_VOLUME_UPGRADE_DISABLED_TILL_OS_DOWNGRADE_EXPIRED", 0xC00004D3),
    TableEntry::new("STATUS_INVALID_TASK_NAME", 0xC0000500),
    TableEntry::new("STATUS_INVALID_TASK_INDEX", 0xC0000501),
    TableEntry::new("STATUS_THREAD_ALREADY_IN_TASK", 0xC0000502),
    TableEntry::new("STATUS_CALLBACK_BYPASS", 0xC0000503),
    TableEntry::new("STATUS_UNDEFINED_SCOPE", 0xC0000504),
    TableEntry::new("STATUS_INVALID_CAP", 0xC0000505),
    TableEntry::new("STATUS_NOT_GUI_PROCESS", 0xC0000506),
    TableEntry::new("STATUS_DEVICE_HUNG", 0xC0000507),
    TableEntry::new("STATUS_CONTAINER_ASSIGNED", 0xC0000508),
    TableEntry::new("STATUS_JOB_NO_CONTAINER", 0xC0000509),
    TableEntry::new("STATUS_DEVICE_UNRESPONSIVE", 0xC000050A),
    TableEntry::new("STATUS_REPARSE_POINT_ENCOUNTERED", 0xC000050B),
    TableEntry::new("STATUS_ATTRIBUTE_NOT_PRESENT", 0xC000050C),
    TableEntry::new("STATUS_NOT_A_TIERED_VOLUME", 0xC000050D),
    TableEntry::new("STATUS_ALREADY_HAS_STREAM_ID", 0xC000050E),
    TableEntry::new("STATUS_JOB_NOT_EMPTY", 0xC000050F),
    TableEntry::new("STATUS_ALREADY_INITIALIZED", 0xC0000510),
    TableEntry::new("STATUS_ENCLAVE_NOT_TERMINATED", 0xC0000511),
    TableEntry::new("STATUS_ENCLAVE_IS_TERMINATING", 0xC0000512),
    TableEntry::new("STATUS_SMB1_NOT_AVAILABLE", 0xC0000513),
    TableEntry::new("STATUS_SMR_GARBAGE_COLLECTION_REQUIRED", 0xC0000514),
    TableEntry::new("STATUS_INTERRUPTED", 0xC0000515),
    TableEntry::new("STATUS_THREAD_NOT_RUNNING", 0xC0000516),
    TableEntry::new("STATUS_FAIL_FAST_EXCEPTION", 0xC0000602),
    TableEntry::new("STATUS_IMAGE_CERT_REVOKED", 0xC0000603),
    TableEntry::new("STATUS_DYNAMIC_CODE_BLOCKED", 0xC0000604),
    TableEntry::new("STATUS_IMAGE_CERT_EXPIRED", 0xC0000605),
    TableEntry::new("STATUS_STRICT_CFG_VIOLATION", 0xC0000606),
    TableEntry::new("STATUS_SET_CONTEXT_DENIED", 0xC000060A),
    TableEntry::new("STATUS_CROSS_PARTITION_VIOLATION", 0xC000060B),
    TableEntry::new("STATUS_PORT_CLOSED", 0xC0000700),
    TableEntry::new("STATUS_MESSAGE_LOST", 0xC0000701),
    TableEntry::new("STATUS_INVALID_MESSAGE", 0xC0000702),
    TableEntry::new("STATUS_REQUEST_CANCELED", 0xC0000703),
    TableEntry::new("STATUS_RECURSIVE_DISPATCH", 0xC0000704),
    TableEntry::new("STATUS_LPC_RECEIVE_BUFFER_EXPECTED", 0xC0000705),
    TableEntry::new("STATUS_LPC_INVALID_CONNECTION_USAGE", 0xC0000706),
    TableEntry::new("STATUS_LPC_REQUESTS_NOT_ALLOWED", 0xC0000707),
    TableEntry::new("STATUS_RESOURCE_IN_USE", 0xC0000708),
    TableEntry::new("STATUS_HARDWARE_MEMORY_ERROR", 0xC0000709),
    TableEntry::new("STATUS_THREADPOOL_HANDLE_EXCEPTION", 0xC000070A),
    TableEntry::new("STATUS_THREADPOOL_SET_EVENT_ON_COMPLETION_FAILED", 0xC000070B),
    TableEntry::new("STATUS_THREADPOOL_RELEASE_SEMAPHORE_ON_COMPLETION_FAILED", 0xC000070C),
    TableEntry::new("STATUS_THREADPOOL_RELEASE_MUTEX_ON_COMPLETION_FAILED", 0xC000070D),
    TableEntry::new("STATUS_THREADPOOL_FREE_LIBRARY_ON_COMPLETION_FAILED", 0xC000070E),
    TableEntry::new("STATUS_THREADPOOL_RELEASED_DURING_OPERATION", 0xC000070F),
    TableEntry::new("STATUS_CALLBACK_RETURNED_WHILE_IMPERSONATING", 0xC0000710),
    TableEntry::new("STATUS_APC_RETURNED_WHILE_IMPERSONATING", 0xC0000711),
    TableEntry::new("STATUS_PROCESS_IS_PROTECTED", 0xC0000712),
    TableEntry::new("STATUS_MCA_EXCEPTION", 0xC0000713),
    TableEntry::new("STATUS_CERTIFICATE_MAPPING_NOT_UNIQUE", 0xC0000714),
    TableEntry::new("STATUS_SYMLINK_CLASS_DISABLED", 0xC0000715),
    TableEntry::new("STATUS_INVALID_IDN_NORMALIZATION", 0xC0000716),
    TableEntry::new("STATUS_NO_UNICODE_TRANSLATION", 0xC0000717),
    TableEntry::new("STATUS_ALREADY_REGISTERED", 0xC0000718),
    TableEntry::new("STATUS_CONTEXT_MISMATCH", 0xC0000719),
    TableEntry::new("STATUS_PORT_ALREADY_HAS_COMPLETION_LIST", 0xC000071A),
    TableEntry::new("STATUS_CALLBACK_RETURNED_THREAD_PRIORITY", 0xC000071B),
    TableEntry::new("STATUS_INVALID_THREAD", 0xC000071C),
    TableEntry::new("STATUS_CALLBACK_RETURNED_TRANSACTION", 0xC000071D),
    TableEntry::new("STATUS_CALLBACK_RETURNED_LDR_LOCK", 0xC000071E),
    TableEntry::new("STATUS_CALLBACK_RETURNED_LANG", 0xC000071F),
    TableEntry::new("STATUS_CALLBACK_RETURNED_PRI_BACK", 0xC0000720),
    TableEntry::new("STATUS_CALLBACK_RETURNED_THREAD_AFFINITY", 0xC0000721),
    TableEntry::new("STATUS_LPC_HANDLE_COUNT_EXCEEDED", 0xC0000722),
    TableEntry::new("STATUS_EXECUTABLE_MEMORY_WRITE", 0xC0000723),
    TableEntry::new("STATUS_KERNEL_EXECUTABLE_MEMORY_WRITE", 0xC0000724),
    TableEntry::new("STATUS_ATTACHED_EXECUTABLE_MEMORY_WRITE", 0xC0000725),
    TableEntry::new("STATUS_TRIGGERED_EXECUTABLE_MEMORY_WRITE", 0xC0000726),
    TableEntry::new("STATUS_DISK_REPAIR_DISABLED", 0xC0000800),
    TableEntry::new("STATUS_DS_DOMAIN_RENAME_IN_PROGRESS", 0xC0000801),
    TableEntry::new("STATUS_DISK_QUOTA_EXCEEDED", 0xC0000802),
    TableEntry::new("STATUS_CONTENT_BLOCKED", 0xC0000804),
    TableEntry::new("STATUS_BAD_CLUSTERS", 0xC0000805),
    TableEntry::new("STATUS_VOLUME_DIRTY", 0xC0000806),
    TableEntry::new("STATUS_DISK_REPAIR_UNSUCCESSFUL", 0xC0000808),
    TableEntry::new("STATUS_CORRUPT_LOG_OVERFULL", 0xC0000809),
    TableEntry::new("STATUS_CORRUPT_LOG_CORRUPTED", 0xC000080A),
    TableEntry::new("STATUS_CORRUPT_LOG_UNAVAILABLE", 0xC000080B),
    TableEntry::new("STATUS_CORRUPT_LOG_DELETED_FULL", 0xC000080C),
    TableEntry::new("STATUS_CORRUPT_LOG_CLEARED", 0xC000080D),
    TableEntry::new("STATUS_ORPHAN_NAME_EXHAUSTED", 0xC000080E),
    TableEntry::new("STATUS_PROACTIVE_SCAN_IN_PROGRESS", 0xC000080F),
    TableEntry::new("STATUS_ENCRYPTED_IO_NOT_POSSIBLE", 0xC0000810),
    TableEntry::new("STATUS_CORRUPT_LOG_UPLEVEL_RECORDS", 0xC0000811),
    TableEntry::new("STATUS_FILE_CHECKED_OUT", 0xC0000901),
    TableEntry::new("STATUS_CHECKOUT_REQUIRED", 0xC0000902),
    TableEntry::new("STATUS_BAD_FILE_TYPE", 0xC0000903),
    TableEntry::new("STATUS_FILE_TOO_LARGE", 0xC0000904),
    TableEntry::new("STATUS_FORMS_AUTH_REQUIRED", 0xC0000905),
    TableEntry::new("STATUS_VIRUS_INFECTED", 0xC0000906),
    TableEntry::new("STATUS_VIRUS_DELETED", 0xC0000907),
    TableEntry::new("STATUS_BAD_MCFG_TABLE", 0xC0000908),
    TableEntry::new("STATUS_CANNOT_BREAK_OPLOCK", 0xC0000909),
    TableEntry::new("STATUS_BAD_KEY", 0xC000090A),
    TableEntry::new("STATUS_BAD_DATA", 0xC000090B),
    TableEntry::new("STATUS_NO_KEY", 0xC000090C),
    TableEntry::new("STATUS_FILE_HANDLE_REVOKED", 0xC0000910),
    TableEntry::new("STATUS_WOW_ASSERTION", 0xC0009898),
    TableEntry::new("STATUS_INVALID_SIGNATURE", 0xC000A000),
    TableEntry::new("STATUS_HMAC_NOT_SUPPORTED", 0xC000A001),
    TableEntry::new("STATUS_AUTH_TAG_MISMATCH", 0xC000A002),
    TableEntry::new("STATUS_INVALID_STATE_TRANSITION", 0xC000A003),
    TableEntry::new("STATUS_INVALID_KERNEL_INFO_VERSION", 0xC000A004),
    TableEntry::new("STATUS_INVALID_PEP_INFO_VERSION", 0xC000A005),
    TableEntry::new("STATUS_HANDLE_REVOKED", 0xC000A006),
    TableEntry::new("STATUS_EOF_ON_GHOSTED_RANGE", 0xC000A007),
    TableEntry::new("STATUS_CC_NEEDS_CALLBACK_SECTION_DRAIN", 0xC000A008),
    TableEntry::new("STATUS_IPSEC_QUEUE_OVERFLOW", 0xC000A010),
    TableEntry::new("STATUS_ND_QUEUE_OVERFLOW", 0xC000A011),
    TableEntry::new("STATUS_HOPLIMIT_EXCEEDED", 0xC000A012),
    TableEntry::new("STATUS_PROTOCOL_NOT_SUPPORTED", 0xC000A013),
    TableEntry::new("STATUS_LOST_WRITEBEHIND_DATA_NETWORK_DISCONNECTED", 0xC000A080),
    TableEntry::new("STATUS_LOST_WRITEBEHIND_DATA_NETWORK_SERVER_ERROR", 0xC000A081),
    TableEntry::new("STATUS_LOST_WRITEBEHIND_DATA_LOCAL_DISK_ERROR", 0xC000A082),
    TableEntry::new("STATUS_XML_PARSE_ERROR", 0xC000A083),
    TableEntry::new("STATUS_XMLDSIG_ERROR", 0xC000A084),
    TableEntry::new("STATUS_WRONG_COMPARTMENT", 0xC000A085),
    TableEntry::new("STATUS_AUTHIP_FAILURE", 0xC000A086),
    TableEntry::new("STATUS_DS_OID_MAPPED_GROUP_CANT_HAVE_MEMBERS", 0xC000A087),
    TableEntry::new("STATUS_DS_OID_NOT_FOUND", 0xC000A088),
    TableEntry::new("STATUS_INCORRECT_ACCOUNT_TYPE", 0xC000A089),
    TableEntry::new("STATUS_LOCAL_POLICY_MODIFICATION_NOT_SUPPORTED", 0xC000A08A),
    TableEntry::new("STATUS_HASH_NOT_SUPPORTED", 0xC000A100),
    TableEntry::new("STATUS_HASH_NOT_PRESENT", 0xC000A101),
    TableEntry::new("STATUS_SECONDARY_IC_PROVIDER_NOT_REGISTERED", 0xC000A121),
    TableEntry::new("STATUS_GPIO_CLIENT_INFORMATION_INVALID", 0xC000A122),
    TableEntry::new("STATUS_GPIO_VERSION_NOT_SUPPORTED", 0xC000A123),
    TableEntry::new("STATUS_GPIO_INVALID_REGISTRATION_PACKET", 0xC000A124),
    TableEntry::new("STATUS_GPIO_OPERATION_DENIED", 0xC000A125),
    TableEntry::new("STATUS_GPIO_INCOMPATIBLE_CONNECT_MODE", 0xC000A126),
    TableEntry::new("STATUS_CANNOT_SWITCH_RUNLEVEL", 0xC000A141),
    TableEntry::new("STATUS_INVALID_RUNLEVEL_SETTING", 0xC000A142),
    TableEntry::new("STATUS_RUNLEVEL_SWITCH_TIMEOUT", 0xC000A143),
    TableEntry::new("STATUS_RUNLEVEL_SWITCH_AGENT_TIMEOUT", 0xC000A145),
    TableEntry::new("STATUS_RUNLEVEL_SWITCH_IN_PROGRESS", 0xC000A146),
    TableEntry::new("STATUS_NOT_APPCONTAINER", 0xC000A200),
    TableEntry::new("STATUS_NOT_SUPPORTED_IN_APPCONTAINER", 0xC000A201),
    TableEntry::new("STATUS_INVALID_PACKAGE_SID_LENGTH", 0xC000A202),
    TableEntry::new("STATUS_LPAC_ACCESS_DENIED", 0xC000A203),
    TableEntry::new("STATUS_ADMINLESS_ACCESS_DENIED", 0xC000A204),
    TableEntry::new("STATUS_APP_DATA_NOT_FOUND", 0xC000A281),
    TableEntry::new("STATUS_APP_DATA_EXPIRED", 0xC000A282),
    TableEntry::new("STATUS_APP_DATA_CORRUPT", 0xC000A283),
    TableEntry::new("STATUS_APP_DATA_LIMIT_EXCEEDED", 0xC000A284),
    TableEntry::new("STATUS_APP_DATA_REBOOT_REQUIRED", 0xC000A285),
    TableEntry::new("STATUS_OFFLOAD_READ_FLT_NOT_SUPPORTED", 0xC000A2A1),
    TableEntry::new("STATUS_OFFLOAD_WRITE_FLT_NOT_SUPPORTED", 0xC000A2A2),
    TableEntry::new("STATUS_OFFLOAD_READ_FILE_NOT_SUPPORTED", 0xC000A2A3),
    TableEntry::new("STATUS_OFFLOAD_WRITE_FILE_NOT_SUPPORTED", 0xC000A2A4),
    TableEntry::new("STATUS_WOF_WIM_HEADER_CORRUPT", 0xC000A2A5),
    TableEntry::new("STATUS_WOF_WIM_RESOURCE_TABLE_CORRUPT", 0xC000A2A6),
    TableEntry::new("STATUS_WOF_FILE_RESOURCE_TABLE_CORRUPT", 0xC000A2A7),
    TableEntry::new("STATUS_CIMFS_IMAGE_CORRUPT", 0xC000C001),
    TableEntry::new("STATUS_CIMFS_IMAGE_VERSION_NOT_SUPPORTED", 0xC000C002),
    TableEntry::new("STATUS_FILE_SYSTEM_VIRTUALIZATION_UNAVAILABLE", 0xC000CE01),
    TableEntry::new("STATUS_FILE_SYSTEM_VIRTUALIZATION_METADATA_CORRUPT", 0xC000CE02),
    TableEntry::new("STATUS_FILE_SYSTEM_VIRTUALIZATION_PROVIDER_UNKNOWN", 0xC000CE03),
    TableEntry::new("STATUS_FILE_SYSTEM_VIRTUALIZATION_INVALID_OPERATION", 0xC000CE04),
    TableEntry::new("STATUS_CLOUD_FILE_SYNC_ROOT_METADATA_CORRUPT", 0xC000CF00),
    TableEntry::new("STATUS_CLOUD_FILE_PROVIDER_NOT_RUNNING", 0xC000CF01),
    TableEntry::new("STATUS_CLOUD_FILE_METADATA_CORRUPT", 0xC000CF02),
    TableEntry::new("STATUS_CLOUD_FILE_METADATA_TOO_LARGE", 0xC000CF03),
    TableEntry::new("STATUS_CLOUD_FILE_PROPERTY_VERSION_NOT_SUPPORTED", 0xC000CF06),
    TableEntry::new("STATUS_NOT_A_CLOUD_FILE", 0xC000CF07),
    TableEntry::new("STATUS_CLOUD_FILE_NOT_IN_SYNC", 0xC000CF08),
    TableEntry::new("STATUS_CLOUD_FILE_ALREADY_CONNECTED", 0xC000CF09),
    TableEntry::new("STATUS_CLOUD_FILE_NOT_SUPPORTED", 0xC000CF0A),
    TableEntry::new("STATUS_CLOUD_FILE_INVALID_REQUEST", 0xC000CF0B),
    TableEntry::new("STATUS_CLOUD_FILE_READ_ONLY_VOLUME", 0xC000CF0C),
    TableEntry::new("STATUS_CLOUD_FILE_CONNECTED_PROVIDER_ONLY", 0xC000CF0D),
    TableEntry::new("STATUS_CLOUD_FILE_VALIDATION_FAILED", 0xC000CF0E),
    TableEntry::new("STATUS_CLOUD_FILE_AUTHENTICATION_FAILED", 0xC000CF0F),
    TableEntry::new("STATUS_CLOUD_FILE_INSUFFICIENT_RESOURCES", 0xC000CF10),
    TableEntry::new("STATUS_CLOUD_FILE_NETWORK_UNAVAILABLE", 0xC000CF11),
    TableEntry::new("STATUS_CLOUD_FILE_UNSUCCESSFUL", 0xC000CF12),
    TableEntry::new("STATUS_CLOUD_FILE_NOT_UNDER_SYNC_ROOT", 0xC000CF13),
    TableEntry::new("STATUS_CLOUD_FILE_IN_USE", 0xC000CF14),
    TableEntry::new("STATUS_CLOUD_FILE_PINNED", 0xC000CF15),
    TableEntry::new("STATUS_CLOUD_FILE_REQUEST_ABORTED", 0xC000CF16),
    TableEntry::new("STATUS_CLOUD_FILE_PROPERTY_CORRUPT", 0xC000CF17),
    TableEntry::new("STATUS_CLOUD_FILE_ACCESS_DENIED", 0xC000CF18),
    TableEntry::new("STATUS_CLOUD_FILE_INCOMPATIBLE_HARDLINKS", 0xC000CF19),
    TableEntry::new("STATUS_CLOUD_FILE_PROPERTY_LOCK_CONFLICT", 0xC000CF1A),
    TableEntry::new("STATUS_CLOUD_FILE_REQUEST_CANCELED", 0xC000CF1B),
    TableEntry::new("STATUS_CLOUD_FILE_PROVIDER_TERMINATED", 0xC000CF1D),
    TableEntry::new("STATUS_NOT_A_CLOUD_SYNC_ROOT", 0xC000CF1E),
    TableEntry::new("STATUS_CLOUD_FILE_REQUEST_TIMEOUT", 0xC000CF1F),
    TableEntry::new("STATUS_CLOUD_FILE_DEHYDRATION_DISALLOWED", 0xC000CF20),
    TableEntry::new("STATUS_FILE_SNAP_IN_PROGRESS", 0xC000F500),
    TableEntry::new("STATUS_FILE_SNAP_USER_SECTION_NOT_SUPPORTED", 0xC000F501),
    TableEntry::new("STATUS_FILE_SNAP_MODIFY_NOT_SUPPORTED", 0xC000F502),
    TableEntry::new("STATUS_FILE_SNAP_IO_NOT_COORDINATED", 0xC000F503),
    TableEntry::new("STATUS_FILE_SNAP_UNEXPECTED_ERROR", 0xC000F504),
    TableEntry::new("STATUS_FILE_SNAP_INVALID_PARAMETER", 0xC000F505),

    // Debugger facility
    TableEntry::new("DBG_NO_STATE_CHANGE", 0xC0010001),
    TableEntry::new("DBG_APP_NOT_IDLE", 0xC0010002),

    // RPC runtime facility
    TableEntry::new("RPC_NT_INVALID_STRING_BINDING", 0xC0020001),
    TableEntry::new("RPC_NT_WRONG_KIND_OF_BINDING", 0xC0020002),
    TableEntry::new("RPC_NT_INVALID_BINDING", 0xC0020003),
    TableEntry::new("RPC_NT_PROTSEQ_NOT_SUPPORTED", 0xC0020004),
    TableEntry::new("RPC_NT_INVALID_RPC_PROTSEQ", 0xC0020005),
    TableEntry::new("RPC_NT_INVALID_STRING_UUID", 0xC0020006),
    TableEntry::new("RPC_NT_INVALID_ENDPOINT_FORMAT", 0xC0020007),
    TableEntry::new("RPC_NT_INVALID_NET_ADDR", 0xC0020008),
    TableEntry::new("RPC_NT_NO_ENDPOINT_FOUND", 0xC0020009),
    TableEntry::new("RPC_NT_INVALID_TIMEOUT", 0xC002000A),
    TableEntry::new("RPC_NT_OBJECT_NOT_FOUND", 0xC002000B),
    TableEntry::new("RPC_NT_ALREADY_REGISTERED", 0xC002000C),
    TableEntry::new("RPC_NT_TYPE_ALREADY_REGISTERED", 0xC002000D),
    TableEntry::new("RPC_NT_ALREADY_LISTENING", 0xC002000E),
    TableEntry::new("RPC_NT_NO_PROTSEQS_REGISTERED", 0xC002000F),
    TableEntry::new("RPC_NT_NOT_LISTENING", 0xC0020010),
    TableEntry::new("RPC_NT_UNKNOWN_MGR_TYPE", 0xC0020011),
    TableEntry::new("RPC_NT_UNKNOWN_IF", 0xC0020012),
    TableEntry::new("RPC_NT_NO_BINDINGS", 0xC0020013),
    TableEntry::new("RPC_NT_NO_PROTSEQS", 0xC0020014),
    TableEntry::new("RPC_NT_CANT_CREATE_ENDPOINT", 0xC0020015),
    TableEntry::new("RPC_NT_OUT_OF_RESOURCES", 0xC0020016),
    TableEntry::new("RPC_NT_SERVER_UNAVAILABLE", 0xC0020017),
    TableEntry::new("RPC_NT_SERVER_TOO_BUSY", 0xC0020018),
    TableEntry::new("RPC_NT_INVALID_NETWORK_OPTIONS", 0xC0020019),
    TableEntry::new("RPC_NT_NO_CALL_ACTIVE", 0xC002001A),
    TableEntry::new("RPC_NT_CALL_FAILED", 0xC002001B),
    TableEntry::new("RPC_NT_CALL_FAILED_DNE", 0xC002001C),
    TableEntry::new("RPC_NT_PROTOCOL_ERROR", 0xC002001D),
    TableEntry::new("RPC_NT_UNSUPPORTED_TRANS_SYN", 0xC002001F),
    TableEntry::new("RPC_NT_UNSUPPORTED_TYPE", 0xC0020021),
    TableEntry::new("RPC_NT_INVALID_TAG", 0xC0020022),
    TableEntry::new("RPC_NT_INVALID_BOUND", 0xC0020023),
    TableEntry::new("RPC_NT_NO_ENTRY_NAME", 0xC0020024),
    TableEntry::new("RPC_NT_INVALID_NAME_SYNTAX", 0xC0020025),
    TableEntry::new("RPC_NT_UNSUPPORTED_NAME_SYNTAX", 0xC0020026),
    TableEntry::new("RPC_NT_UUID_NO_ADDRESS", 0xC0020028),
    TableEntry::new("RPC_NT_DUPLICATE_ENDPOINT", 0xC0020029),
    TableEntry::new("RPC_NT_UNKNOWN_AUTHN_TYPE", 0xC002002A),
    TableEntry::new("RPC_NT_MAX_CALLS_TOO_SMALL", 0xC002002B),
    TableEntry::new("RPC_NT_STRING_TOO_LONG", 0xC002002C),
    TableEntry::new("RPC_NT_PROTSEQ_NOT_FOUND", 0xC002002D),
    TableEntry::new("RPC_NT_PROCNUM_OUT_OF_RANGE", 0xC002002E),
    TableEntry::new("RPC_NT_BINDING_HAS_NO_AUTH", 0xC002002F),
    TableEntry::new("RPC_NT_UNKNOWN_AUTHN_SERVICE", 0xC0020030),
    TableEntry::new("RPC_NT_UNKNOWN_AUTHN_LEVEL", 0xC0020031),
    TableEntry::new("RPC_NT_INVALID_AUTH_IDENTITY", 0xC0020032),
    TableEntry::new("RPC_NT_UNKNOWN_AUTHZ_SERVICE", 0xC0020033),
    TableEntry::new("EPT_NT_INVALID_ENTRY", 0xC0020034),
    TableEntry::new("EPT_NT_CANT_PERFORM_OP", 0xC0020035),
    TableEntry::new("EPT_NT_NOT_REGISTERED", 0xC0020036),
    TableEntry::new("RPC_NT_NOTHING_TO_EXPORT", 0xC0020037),
    TableEntry::new("RPC_NT_INCOMPLETE_NAME", 0xC0020038),
    TableEntry::new("RPC_NT_INVALID_VERS_OPTION", 0xC0020039),
    TableEntry::new("RPC_NT_NO_MORE_MEMBERS", 0xC002003A),
    TableEntry::new("RPC_NT_NOT_ALL_OBJS_UNEXPORTED", 0xC002003B),
    TableEntry::new("RPC_NT_INTERFACE_NOT_FOUND", 0xC002003C),
    TableEntry::new("RPC_NT_ENTRY_ALREADY_EXISTS", 0xC002003D),
    TableEntry::new("RPC_NT_ENTRY_NOT_FOUND", 0xC002003E),
    TableEntry::new("RPC_NT_NAME_SERVICE_UNAVAILABLE", 0xC002003F),
    TableEntry::new("RPC_NT_INVALID_NAF_ID", 0xC0020040),
    TableEntry::new("RPC_NT_CANNOT_SUPPORT", 0xC0020041),
    TableEntry::new("RPC_NT_NO_CONTEXT_AVAILABLE", 0xC0020042),
    TableEntry::new("RPC_NT_INTERNAL_ERROR", 0xC0020043),
    TableEntry::new("RPC_NT_ZERO_DIVIDE", 0xC0020044),
    TableEntry::new("RPC_NT_ADDRESS_ERROR", 0xC0020045),
    TableEntry::new("RPC_NT_FP_DIV_ZERO", 0xC0020046),
    TableEntry::new("RPC_NT_FP_UNDERFLOW", 0xC0020047),
    TableEntry::new("RPC_NT_FP_OVERFLOW", 0xC0020048),
    TableEntry::new("RPC_NT_CALL_IN_PROGRESS", 0xC0020049),
    TableEntry::new("RPC_NT_NO_MORE_BINDINGS", 0xC002004A),
    TableEntry::new("RPC_NT_GROUP_MEMBER_NOT_FOUND", 0xC002004B),
    TableEntry::new("EPT_NT_CANT_CREATE", 0xC002004C),
    TableEntry::new("RPC_NT_INVALID_OBJECT", 0xC002004D),
    TableEntry::new("RPC_NT_NO_INTERFACES", 0xC002004F),
    TableEntry::new("RPC_NT_CALL_CANCELLED", 0xC0020050),
    TableEntry::new("RPC_NT_BINDING_INCOMPLETE", 0xC0020051),
    TableEntry::new("RPC_NT_COMM_FAILURE", 0xC0020052),
    TableEntry::new("RPC_NT_UNSUPPORTED_AUTHN_LEVEL", 0xC0020053),
    TableEntry::new("RPC_NT_NO_PRINC_NAME", 0xC0020054),
    TableEntry::new("RPC_NT_NOT_RPC_ERROR", 0xC0020055),
    TableEntry::new("RPC_NT_SEC_PKG_ERROR", 0xC0020057),
    TableEntry::new("RPC_NT_NOT_CANCELLED", 0xC0020058),
    TableEntry::new("RPC_NT_INVALID_ASYNC_HANDLE", 0xC0020062),
    TableEntry::new("RPC_NT_INVALID_ASYNC_CALL", 0xC0020063),
    TableEntry::new("RPC_NT_PROXY_ACCESS_DENIED", 0xC0020064),
    TableEntry::new("RPC_NT_COOKIE_AUTH_FAILED", 0xC0020065),

    // RPC stubs facility
    TableEntry::new("RPC_NT_NO_MORE_ENTRIES", 0xC0030001),
    TableEntry::new("RPC_NT_SS_CHAR_TRANS_OPEN_FAIL", 0xC0030002),
    TableEntry::new("RPC_NT_SS_CHAR_TRANS_SHORT_FILE", 0xC0030003),
    TableEntry::new("RPC_NT_SS_IN_NULL_CONTEXT", 0xC0030004),
    TableEntry::new("RPC_NT_SS_CONTEXT_MISMATCH", 0xC0030005),
    TableEntry::new("RPC_NT_SS_CONTEXT_DAMAGED", 0xC0030006),
    TableEntry::new("RPC_NT_SS_HANDLES_MISMATCH", 0xC0030007),
    TableEntry::new("RPC_NT_SS_CANNOT_GET_CALL_HANDLE", 0xC0030008),
    TableEntry::new("RPC_NT_NULL_REF_POINTER", 0xC0030009),
    TableEntry::new("RPC_NT_ENUM_VALUE_OUT_OF_RANGE", 0xC003000A),
    TableEntry::new("RPC_NT_BYTE_COUNT_TOO_SMALL", 0xC003000B),
    TableEntry::new("RPC_NT_BAD_STUB_DATA", 0xC003000C),
    TableEntry::new("RPC_NT_INVALID_ES_ACTION", 0xC0030059),
    TableEntry::new("RPC_NT_WRONG_ES_VERSION", 0xC003005A),
    TableEntry::new("RPC_NT_WRONG_STUB_VERSION", 0xC003005B),
    TableEntry::new("RPC_NT_INVALID_PIPE_OBJECT", 0xC003005C),
    TableEntry::new("RPC_NT_INVALID_PIPE_OPERATION", 0xC003005D),
    TableEntry::new("RPC_NT_WRONG_PIPE_VERSION", 0xC003005E),
    TableEntry::new("RPC_NT_PIPE_CLOSED", 0xC003005F),
    TableEntry::new("RPC_NT_PIPE_DISCIPLINE_ERROR", 0xC0030060),
    TableEntry::new("RPC_NT_PIPE_EMPTY", 0xC0030061),

    // I/O error log facility
    TableEntry::new("STATUS_PNP_BAD_MPS_TABLE", 0xC0040035),
    TableEntry::new("STATUS_PNP_TRANSLATION_FAILED", 0xC0040036),
    TableEntry::new("STATUS_PNP_IRQ_TRANSLATION_FAILED", 0xC0040037),
    TableEntry::new("STATUS_PNP_INVALID_ID", 0xC0040038),
    TableEntry::new("STATUS_IO_REISSUE_AS_CACHED", 0xC0040039),

    // Terminal server facility
    TableEntry::new("STATUS_CTX_WINSTATION_NAME_INVALID", 0xC00A0001),
    TableEntry::new("STATUS_CTX_INVALID_PD", 0xC00A0002),
    TableEntry::new("STATUS_CTX_PD_NOT_FOUND", 0xC00A0003),
    TableEntry::new("STATUS_CTX_CLOSE_PENDING", 0xC00A0006),
    TableEntry::new("STATUS_CTX_NO_OUTBUF", 0xC00A0007),
    TableEntry::new("STATUS_CTX_MODEM_INF_NOT_FOUND", 0xC00A0008),
    TableEntry::new("STATUS_CTX_INVALID_MODEMNAME", 0xC00A0009),
    TableEntry::new("STATUS_CTX_RESPONSE_ERROR", 0xC00A000A),
    TableEntry::new("STATUS_CTX_MODEM_RESPONSE_TIMEOUT", 0xC00A000B),
    TableEntry::new("STATUS_CTX_MODEM_RESPONSE_NO_CARRIER", 0xC00A000C),
    TableEntry::new("STATUS_CTX_MODEM_RESPONSE_NO_DIALTONE", 0xC00A000D),
    TableEntry::new("STATUS_CTX_MODEM_RESPONSE_BUSY", 0xC00A000E),
    TableEntry::new("STATUS_CTX_MODEM_RESPONSE_VOICE", 0xC00A000F),
    TableEntry::new("STATUS_CTX_TD_ERROR", 0xC00A0010),
    TableEntry::new("STATUS_CTX_LICENSE_CLIENT_INVALID", 0xC00A0012),
    TableEntry::new("STATUS_CTX_LICENSE_NOT_AVAILABLE", 0xC00A0013),
    TableEntry::new("STATUS_CTX_LICENSE_EXPIRED", 0xC00A0014),
    TableEntry::new("STATUS_CTX_WINSTATION_NOT_FOUND", 0xC00A0015),
    TableEntry::new("STATUS_CTX_WINSTATION_NAME_COLLISION", 0xC00A0016),
    TableEntry::new("STATUS_CTX_WINSTATION_BUSY", 0xC00A0017),
    TableEntry::new("STATUS_CTX_BAD_VIDEO_MODE", 0xC00A0018),
    TableEntry::new("STATUS_CTX_GRAPHICS_INVALID", 0xC00A0022),
    TableEntry::new("STATUS_CTX_NOT_CONSOLE", 0xC00A0024),
    TableEntry::new("STATUS_CTX_CLIENT_QUERY_TIMEOUT", 0xC00A0026),
    TableEntry::new("STATUS_CTX_CONSOLE_DISCONNECT", 0xC00A0027),
    TableEntry::new("STATUS_CTX_CONSOLE_CONNECT", 0xC00A0028),
    TableEntry::new("STATUS_CTX_SHADOW_DENIED", 0xC00A002A),
    TableEntry::new("STATUS_CTX_WINSTATION_ACCESS_DENIED", 0xC00A002B),
    TableEntry::new("STATUS_CTX_INVALID_WD", 0xC00A002E),
    TableEntry::new("STATUS_CTX_WD_NOT_FOUND", 0xC00A002F),
    TableEntry::new("STATUS_CTX_SHADOW_INVALID", 0xC00A0030),
    TableEntry::new("STATUS_CTX_SHADOW_DISABLED", 0xC00A0031),
    TableEntry::new("STATUS_RDP_PROTOCOL_ERROR", 0xC00A0032),
    TableEntry::new("STATUS_CTX_CLIENT_LICENSE_NOT_SET", 0xC00A0033),
    TableEntry::new("STATUS_CTX_CLIENT_LICENSE_IN_USE", 0xC00A0034),
    TableEntry::new("STATUS_CTX_SHADOW_ENDED_BY_MODE_CHANGE", 0xC00A0035),
    TableEntry::new("STATUS_CTX_SHADOW_NOT_RUNNING", 0xC00A0036),
    TableEntry::new("STATUS_CTX_LOGON_DISABLED", 0xC00A0037),
    TableEntry::new("STATUS_CTX_SECURITY_LAYER_ERROR", 0xC00A0038),
    TableEntry::new("STATUS_TS_INCOMPATIBLE_SESSIONS", 0xC00A0039),
    TableEntry::new("STATUS_TS_VIDEO_SUBSYSTEM_ERROR", 0xC00A003A),

    // MUI facility
    TableEntry::new("STATUS_MUI_FILE_NOT_FOUND", 0xC00B0001),
    TableEntry::new("STATUS_MUI_INVALID_FILE", 0xC00B0002),
    TableEntry::new("STATUS_MUI_INVALID_RC_CONFIG", 0xC00B0003),
    TableEntry::new("STATUS_MUI_INVALID_LOCALE_NAME", 0xC00B0004),
    TableEntry::new("STATUS_MUI_INVALID_ULTIMATEFALLBACK_NAME", 0xC00B0005),
    TableEntry::new("STATUS_MUI_FILE_NOT_LOADED", 0xC00B0006),
    TableEntry::new("STATUS_RESOURCE_ENUM_USER_STOP", 0xC00B0007),

    // Cluster facility
    TableEntry::new("STATUS_CLUSTER_INVALID_NODE", 0xC0130001),
    TableEntry::new("STATUS_CLUSTER_NODE_EXISTS", 0xC0130002),
    TableEntry::new("STATUS_CLUSTER_JOIN_IN_PROGRESS", 0xC0130003),
    TableEntry::new("STATUS_CLUSTER_NODE_NOT_FOUND", 0xC0130004),
    TableEntry::new("STATUS_CLUSTER_LOCAL_NODE_NOT_FOUND", 0xC0130005),
    TableEntry::new("STATUS_CLUSTER_NETWORK_EXISTS", 0xC0130006),
    TableEntry::new("STATUS_CLUSTER_NETWORK_NOT_FOUND", 0xC0130007),
    TableEntry::new("STATUS_CLUSTER_NETINTERFACE_EXISTS", 0xC0130008),
    TableEntry::new("STATUS_CLUSTER_NETINTERFACE_NOT_FOUND", 0xC0130009),
    TableEntry::new("STATUS_CLUSTER_INVALID_REQUEST", 0xC013000A),
    TableEntry::new("STATUS_CLUSTER_INVALID_NETWORK_PROVIDER", 0xC013000B),
    TableEntry::new("STATUS_CLUSTER_NODE_DOWN", 0xC013000C),
    TableEntry::new("STATUS_CLUSTER_NODE_UNREACHABLE", 0xC013000D),
    TableEntry::new("STATUS_CLUSTER_NODE_NOT_MEMBER", 0xC013000E),
    TableEntry::new("STATUS_CLUSTER_JOIN_NOT_IN_PROGRESS", 0xC013000F),
    TableEntry::new("STATUS_CLUSTER_INVALID_NETWORK", 0xC0130010),
    TableEntry::new("STATUS_CLUSTER_NO_NET_ADAPTERS", 0xC0130011),
    TableEntry::new("STATUS_CLUSTER_NODE_UP", 0xC0130012),
    TableEntry::new("STATUS_CLUSTER_NODE_PAUSED", 0xC0130013),
    TableEntry::new("STATUS_CLUSTER_NODE_NOT_PAUSED", 0xC0130014),
    TableEntry::new("STATUS_CLUSTER_NO_SECURITY_CONTEXT", 0xC0130015),
    TableEntry::new("STATUS_CLUSTER_NETWORK_NOT_INTERNAL", 0xC0130016),
    TableEntry::new("STATUS_CLUSTER_POISONED", 0xC0130017),
    TableEntry::new("STATUS_CLUSTER_NON_CSV_PATH", 0xC0130018),
    TableEntry::new("STATUS_CLUSTER_CSV_VOLUME_NOT_LOCAL", 0xC0130019),
    TableEntry::new("STATUS_CLUSTER_CSV_READ_OPLOCK_BREAK_IN_PROGRESS", 0xC0130020),
    TableEntry::new("STATUS_CLUSTER_CSV_AUTO_PAUSE_ERROR", 0xC0130021),
    TableEntry::new("STATUS_CLUSTER_CSV_REDIRECTED", 0xC0130022),
    TableEntry::new("STATUS_CLUSTER_CSV_NOT_REDIRECTED", 0xC0130023),
    TableEntry::new("STATUS_CLUSTER_CSV_VOLUME_DRAINING", 0xC0130024),
    TableEntry::new("STATUS_CLUSTER_CSV_SNAPSHOT_CREATION_IN_PROGRESS", 0xC0130025),
    TableEntry::new("STATUS_CLUSTER_CSV_VOLUME_DRAINING_SUCCEEDED_DOWNLEVEL", 0xC0130026),
    TableEntry::new("STATUS_CLUSTER_CSV_NO_SNAPSHOTS", 0xC0130027),
    TableEntry::new("STATUS_CSV_IO_PAUSE_TIMEOUT", 0xC0130028),
    TableEntry::new("STATUS_CLUSTER_CSV_INVALID_HANDLE", 0xC0130029),
    TableEntry::new("STATUS_CLUSTER_CSV_SUPPORTED_ONLY_ON_COORDINATOR", 0xC0130030),
    TableEntry::new("STATUS_CLUSTER_CAM_TICKET_REPLAY_DETECTED", 0xC0130031),

    // ACPI facility
    TableEntry::new("STATUS_ACPI_INVALID_OPCODE", 0xC0140001),
    TableEntry::new("STATUS_ACPI_STACK_OVERFLOW", 0xC0140002),
    TableEntry::new("STATUS_ACPI_ASSERT_FAILED", 0xC0140003),
    TableEntry::new("STATUS_ACPI_INVALID_INDEX", 0xC0140004),
    TableEntry::new("STATUS_ACPI_INVALID_ARGUMENT", 0xC0140005),
    TableEntry::new("STATUS_ACPI_FATAL", 0xC0140006),
    TableEntry::new("STATUS_ACPI_INVALID_SUPERNAME", 0xC0140007),
    TableEntry::new("STATUS_ACPI_INVALID_ARGTYPE", 0xC0140008),
    TableEntry::new("STATUS_ACPI_INVALID_OBJTYPE", 0xC0140009),
    TableEntry::new("STATUS_ACPI_INVALID_TARGETTYPE", 0xC014000A),
    TableEntry::new("STATUS_ACPI_INCORRECT_ARGUMENT_COUNT", 0xC014000B),
    TableEntry::new("STATUS_ACPI_ADDRESS_NOT_MAPPED", 0xC014000C),
    TableEntry::new("STATUS_ACPI_INVALID_EVENTTYPE", 0xC014000D),
    TableEntry::new("STATUS_ACPI_HANDLER_COLLISION", 0xC014000E),
    TableEntry::new("STATUS_ACPI_INVALID_DATA", 0xC014000F),
    TableEntry::new("STATUS_ACPI_INVALID_REGION", 0xC0140010),
    TableEntry::new("STATUS_ACPI_INVALID_ACCESS_SIZE", 0xC0140011),
    TableEntry::new("STATUS_ACPI_ACQUIRE_GLOBAL_LOCK", 0xC0140012),
    TableEntry::new("STATUS_ACPI_ALREADY_INITIALIZED", 0xC0140013),
    TableEntry::new("STATUS_ACPI_NOT_INITIALIZED", 0xC0140014),
    TableEntry::new("STATUS_ACPI_INVALID_MUTEX_LEVEL", 0xC0140015),
    TableEntry::new("STATUS_ACPI_MUTEX_NOT_OWNED", 0xC0140016),
    TableEntry::new("STATUS_ACPI_MUTEX_NOT_OWNER", 0xC0140017),
    TableEntry::new("STATUS_ACPI_RS_ACCESS", 0xC0140018),
    TableEntry::new("STATUS_ACPI_INVALID_TABLE", 0xC0140019),
    TableEntry::new("STATUS_ACPI_REG_HANDLER_FAILED", 0xC0140020),
    TableEntry::new("STATUS_ACPI_POWER_REQUEST_FAILED", 0xC0140021),

    // Side-by-side facility
    TableEntry::new("STATUS_SXS_SECTION_NOT_FOUND", 0xC0150001),
    TableEntry::new("STATUS_SXS_CANT_GEN_ACTCTX", 0xC0150002),
    TableEntry::new("STATUS_SXS_INVALID_ACTCTXDATA_FORMAT", 0xC0150003),
    TableEntry::new("STATUS_SXS_ASSEMBLY_NOT_FOUND", 0xC0150004),
    TableEntry::new("STATUS_SXS_MANIFEST_FORMAT_ERROR", 0xC0150005),
    TableEntry::new("STATUS_SXS_MANIFEST_PARSE_ERROR", 0xC0150006),
    TableEntry::new("STATUS_SXS_ACTIVATION_CONTEXT_DISABLED", 0xC0150007),
    TableEntry::new("STATUS_SXS_KEY_NOT_FOUND", 0xC0150008),
    TableEntry::new("STATUS_SXS_VERSION_CONFLICT", 0xC0150009),
    TableEntry::new("STATUS_SXS_WRONG_SECTION_TYPE", 0xC015000A),
    TableEntry::new("STATUS_SXS_THREAD_QUERIES_DISABLED", 0xC015000B),
    TableEntry::new("STATUS_SXS_ASSEMBLY_MISSING", 0xC015000C),
    TableEntry::new("STATUS_SXS_PROCESS_DEFAULT_ALREADY_SET", 0xC015000E),
    TableEntry::new("STATUS_SXS_EARLY_DEACTIVATION", 0xC015000F),
    TableEntry::new("STATUS_SXS_INVALID_DEACTIVATION", 0xC0150010),
    TableEntry::new("STATUS_SXS_MULTIPLE_DEACTIVATION", 0xC0150011),
    TableEntry::new("STATUS_SXS_SYSTEM_DEFAULT_ACTIVATION_CONTEXT_EMPTY", 0xC0150012),
    TableEntry::new("STATUS_SXS_PROCESS_TERMINATION_REQUESTED", 0xC0150013),
    TableEntry::new("STATUS_SXS_CORRUPT_ACTIVATION_STACK", 0xC0150014),
    TableEntry::new("STATUS_SXS_CORRUPTION", 0xC0150015),
    TableEntry::new("STATUS_SXS_INVALID_IDENTITY_ATTRIBUTE_VALUE", 0xC0150016),
    TableEntry::new("STATUS_SXS_INVALID_IDENTITY_ATTRIBUTE_NAME", 0xC0150017),
    TableEntry::new("STATUS_SXS_IDENTITY_DUPLICATE_ATTRIBUTE", 0xC0150018),
    TableEntry::new("STATUS_SXS_IDENTITY_PARSE_ERROR", 0xC0150019),
    TableEntry::new("STATUS_SXS_COMPONENT_STORE_CORRUPT", 0xC015001A),
    TableEntry::new("STATUS_SXS_FILE_HASH_MISMATCH", 0xC015001B),
    TableEntry::new("STATUS_SXS_MANIFEST_IDENTITY_SAME_BUT_CONTENTS_DIFFERENT", 0xC015001C),
    TableEntry::new("STATUS_SXS_IDENTITIES_DIFFERENT", 0xC015001D),
    TableEntry::new("STATUS_SXS_ASSEMBLY_IS_NOT_A_DEPLOYMENT", 0xC015001E),
    TableEntry::new("STATUS_SXS_FILE_NOT_PART_OF_ASSEMBLY", 0xC015001F),
    TableEntry::new("STATUS_ADVANCED_INSTALLER_FAILED", 0xC0150020),
    TableEntry::new("STATUS_XML_ENCODING_MISMATCH", 0xC0150021),
    TableEntry::new("STATUS_SXS_MANIFEST_TOO_BIG", 0xC0150022),
    TableEntry::new("STATUS_SXS_SETTING_NOT_REGISTERED", 0xC0150023),
    TableEntry::new("STATUS_SXS_TRANSACTION_CLOSURE_INCOMPLETE", 0xC0150024),
    TableEntry::new("STATUS_SMI_PRIMITIVE_INSTALLER_FAILED", 0xC0150025),
    TableEntry::new("STATUS_GENERIC_COMMAND_FAILED", 0xC0150026),
    TableEntry::new("STATUS_SXS_FILE_HASH_MISSING", 0xC0150027),

    // Transaction facility
    TableEntry::new("STATUS_TRANSACTIONAL_CONFLICT", 0xC0190001),
    TableEntry::new("STATUS_INVALID_TRANSACTION", 0xC0190002),
    TableEntry::new("STATUS_TRANSACTION_NOT_ACTIVE", 0xC0190003),
    TableEntry::new("STATUS_TM_INITIALIZATION_FAILED", 0xC0190004),
    TableEntry::new("STATUS_RM_NOT_ACTIVE", 0xC0190005),
    TableEntry::new("STATUS_RM_METADATA_CORRUPT", 0xC0190006),
    TableEntry::new("STATUS_TRANSACTION_NOT_JOINED", 0xC0190007),
    TableEntry::new("STATUS_DIRECTORY_NOT_RM", 0xC0190008),
    TableEntry::new("STATUS_TRANSACTIONS_UNSUPPORTED_REMOTE", 0xC019000A),
    TableEntry::new("STATUS_LOG_RESIZE_INVALID_SIZE", 0xC019000B),
    TableEntry::new("STATUS_REMOTE_FILE_VERSION_MISMATCH", 0xC019000C),
    TableEntry::new("STATUS_CRM_PROTOCOL_ALREADY_EXISTS", 0xC019000F),
    TableEntry::new("STATUS_TRANSACTION_PROPAGATION_FAILED", 0xC0190010),
    TableEntry::new("STATUS_CRM_PROTOCOL_NOT_FOUND", 0xC0190011),
    TableEntry::new("STATUS_TRANSACTION_SUPERIOR_EXISTS", 0xC0190012),
    TableEntry::new("STATUS_TRANSACTION_REQUEST_NOT_VALID", 0xC0190013),
    TableEntry::new("STATUS_TRANSACTION_NOT_REQUESTED", 0xC0190014),
    TableEntry::new("STATUS_TRANSACTION_ALREADY_ABORTED", 0xC0190015),
    TableEntry::new("STATUS_TRANSACTION_ALREADY_COMMITTED", 0xC0190016),
    TableEntry::new("STATUS_TRANSACTION_INVALID_MARSHALL_BUFFER", 0xC0190017),
    TableEntry::new("STATUS_CURRENT_TRANSACTION_NOT_VALID", 0xC0190018),
    TableEntry::new("STATUS_LOG_GROWTH_FAILED", 0xC0190019),
    TableEntry::new("STATUS_OBJECT_NO_LONGER_EXISTS", 0xC0190021),
    TableEntry::new("STATUS_STREAM_MINIVERSION_NOT_FOUND", 0xC0190022),
    TableEntry::new("STATUS_STREAM_MINIVERSION_NOT_VALID", 0xC0190023),
    TableEntry::new("STATUS_MINIVERSION_INACCESSIBLE_FROM_SPECIFIED_TRANSACTION", 0xC0190024),
    TableEntry::new("STATUS_CANT_OPEN_MINIVERSION_WITH_MODIFY_INTENT", 0xC0190025),
    TableEntry::new("STATUS_CANT_CREATE_MORE_STREAM_MINIVERSIONS", 0xC0190026),
    TableEntry::new("STATUS_HANDLE_NO_LONGER_VALID", 0xC0190028),
    TableEntry::new("STATUS_LOG_CORRUPTION_DETECTED", 0xC0190030),
    TableEntry::new("STATUS_RM_DISCONNECTED", 0xC0190032),
    TableEntry::new("STATUS_ENLISTMENT_NOT_SUPERIOR", 0xC0190033),
    TableEntry::new("STATUS_FILE_IDENTITY_NOT_PERSISTENT", 0xC0190036),
    TableEntry::new("STATUS_CANT_BREAK_TRANSACTIONAL_DEPENDENCY", 0xC0190037),
    TableEntry::new("STATUS_CANT_CROSS_RM_BOUNDARY", 0xC0190038),
    TableEntry::new("STATUS_TXF_DIR_NOT_EMPTY", 0xC0190039),
    TableEntry::new("STATUS_INDOUBT_TRANSACTIONS_EXIST", 0xC019003A),
    TableEntry::new("STATUS_TM_VOLATILE", 0xC019003B),
    TableEntry::new("STATUS_ROLLBACK_TIMER_EXPIRED", 0xC019003C),
    TableEntry::new("STATUS_TXF_ATTRIBUTE_CORRUPT", 0xC019003D),
    TableEntry::new("STATUS_EFS_NOT_ALLOWED_IN_TRANSACTION", 0xC019003E),
    TableEntry::new("STATUS_TRANSACTIONAL_OPEN_NOT_ALLOWED", 0xC019003F),
    TableEntry::new("STATUS_TRANSACTED_MAPPING_UNSUPPORTED_REMOTE", 0xC0190040),
    TableEntry::new("STATUS_TRANSACTION_REQUIRED_PROMOTION", 0xC0190043),
    TableEntry::new("STATUS_CANNOT_EXECUTE_FILE_IN_TRANSACTION", 0xC0190044),
    TableEntry::new("STATUS_TRANSACTIONS_NOT_FROZEN", 0xC0190045),
    TableEntry::new("STATUS_TRANSACTION_FREEZE_IN_PROGRESS", 0xC0190046),
    TableEntry::new("STATUS_NOT_SNAPSHOT_VOLUME", 0xC0190047),
    TableEntry::new("STATUS_NO_SAVEPOINT_WITH_OPEN_FILES", 0xC0190048),
    TableEntry::new("STATUS_SPARSE_NOT_ALLOWED_IN_TRANSACTION", 0xC0190049),
    TableEntry::new("STATUS_TM_IDENTITY_MISMATCH", 0xC019004A),
    TableEntry::new("STATUS_FLOATED_SECTION", 0xC019004B),
    TableEntry::new("STATUS_CANNOT_ACCEPT_TRANSACTED_WORK", 0xC019004C),
    TableEntry::new("STATUS_CANNOT_ABORT_TRANSACTIONS", 0xC019004D),
    TableEntry::new("STATUS_TRANSACTION_NOT_FOUND", 0xC019004E),
    TableEntry::new("STATUS_RESOURCEMANAGER_NOT_FOUND", 0xC019004F),
    TableEntry::new("STATUS_ENLISTMENT_NOT_FOUND", 0xC0190050),
    TableEntry::new("STATUS_TRANSACTIONMANAGER_NOT_FOUND", 0xC0190051),
    TableEntry::new("STATUS_TRANSACTIONMANAGER_NOT_ONLINE", 0xC0190052),
    TableEntry::new("STATUS_TRANSACTIONMANAGER_RECOVERY_NAME_COLLISION", 0xC0190053),
    TableEntry::new("STATUS_TRANSACTION_NOT_ROOT", 0xC0190054),
    TableEntry::new("STATUS_TRANSACTION_OBJECT_EXPIRED", 0xC0190055),
    TableEntry::new("STATUS_COMPRESSION_NOT_ALLOWED_IN_TRANSACTION", 0xC0190056),
    TableEntry::new("STATUS_TRANSACTION_RESPONSE_NOT_ENLISTED", 0xC0190057),
    TableEntry::new("STATUS_TRANSACTION_RECORD_TOO_LONG", 0xC0190058),
    TableEntry::new("STATUS_NO_LINK_TRACKING_IN_TRANSACTION", 0xC0190059),
    TableEntry::new("STATUS_OPERATION_NOT_SUPPORTED_IN_TRANSACTION", 0xC019005A),
    TableEntry::new("STATUS_TRANSACTION_INTEGRITY_VIOLATED", 0xC019005B),
    TableEntry::new("STATUS_TRANSACTIONMANAGER_IDENTITY_MISMATCH", 0xC019005C),
    TableEntry::new("STATUS_RM_CANNOT_BE_FROZEN_FOR_SNAPSHOT", 0xC019005D),
    TableEntry::new("STATUS_TRANSACTION_MUST_WRITETHROUGH", 0xC019005E),
    TableEntry::new("STATUS_TRANSACTION_NO_SUPERIOR", 0xC019005F),
    TableEntry::new("STATUS_EXPIRED_HANDLE", 0xC0190060),
    TableEntry::new("STATUS_TRANSACTION_NOT_ENLISTED", 0xC0190061),

    // Common log facility
    TableEntry::new("STATUS_LOG_SECTOR_INVALID", 0xC01A0001),
    TableEntry::new("STATUS_LOG_SECTOR_PARITY_INVALID", 0xC01A0002),
    TableEntry::new("STATUS_LOG_SECTOR_REMAPPED", 0xC01A0003),
    TableEntry::new("STATUS_LOG_BLOCK_INCOMPLETE", 0xC01A0004),
    TableEntry::new("STATUS_LOG_INVALID_RANGE", 0xC01A0005),
    TableEntry::new("STATUS_LOG_BLOCKS_EXHAUSTED", 0xC01A0006),
    TableEntry::new("STATUS_LOG_READ_CONTEXT_INVALID", 0xC01A0007),
    TableEntry::new("STATUS_LOG_RESTART_INVALID", 0xC01A0008),
    TableEntry::new("STATUS_LOG_BLOCK_VERSION", 0xC01A0009),
    TableEntry::new("STATUS_LOG_BLOCK_INVALID", 0xC01A000A),
    TableEntry::new("STATUS_LOG_READ_MODE_INVALID", 0xC01A000B),
    TableEntry::new("STATUS_LOG_METADATA_CORRUPT", 0xC01A000D),
    TableEntry::new("STATUS_LOG_METADATA_INVALID", 0xC01A000E),
    TableEntry::new("STATUS_LOG_METADATA_INCONSISTENT", 0xC01A000F),
    TableEntry::new("STATUS_LOG_RESERVATION_INVALID", 0xC01A0010),
    TableEntry::new("STATUS_LOG_CANT_DELETE", 0xC01A0011),
    TableEntry::new("STATUS_LOG_CONTAINER_LIMIT_EXCEEDED", 0xC01A0012),
    TableEntry::new("STATUS_LOG_START_OF_LOG", 0xC01A0013),
    TableEntry::new("STATUS_LOG_POLICY_ALREADY_INSTALLED", 0xC01A0014),
    TableEntry::new("STATUS_LOG_POLICY_NOT_INSTALLED", 0xC01A0015),
    TableEntry::new("STATUS_LOG_POLICY_INVALID", 0xC01A0016),
    TableEntry::new("STATUS_LOG_POLICY_CONFLICT", 0xC01A0017),
    TableEntry::new("STATUS_LOG_PINNED_ARCHIVE_TAIL", 0xC01A0018),
    TableEntry::new("STATUS_LOG_RECORD_NONEXISTENT", 0xC01A0019),
    TableEntry::new("STATUS_LOG_RECORDS_RESERVED_INVALID", 0xC01A001A),
    TableEntry::new("STATUS_LOG_SPACE_RESERVED_INVALID", 0xC01A001B),
    TableEntry::new("STATUS_LOG_TAIL_INVALID", 0xC01A001C),
    TableEntry::new("STATUS_LOG_FULL", 0xC01A001D),
    TableEntry::new("STATUS_LOG_MULTIPLEXED", 0xC01A001E),
    TableEntry::new("STATUS_LOG_DEDICATED", 0xC01A001F),
    TableEntry::new("STATUS_LOG_ARCHIVE_NOT_IN_PROGRESS", 0xC01A0020),
    TableEntry::new("STATUS_LOG_ARCHIVE_IN_PROGRESS", 0xC01A0021),
    TableEntry::new("STATUS_LOG_EPHEMERAL", 0xC01A0022),
    TableEntry::new("STATUS_LOG_NOT_ENOUGH_CONTAINERS", 0xC01A0023),
    TableEntry::new("STATUS_LOG_CLIENT_ALREADY_REGISTERED", 0xC01A0024),
    TableEntry::new("STATUS_LOG_CLIENT_NOT_REGISTERED", 0xC01A0025),
    TableEntry::new("STATUS_LOG_FULL_HANDLER_IN_PROGRESS", 0xC01A0026),
    TableEntry::new("STATUS_LOG_CONTAINER_READ_FAILED", 0xC01A0027),
    TableEntry::new("STATUS_LOG_CONTAINER_WRITE_FAILED", 0xC01A0028),
    TableEntry::new("STATUS_LOG_CONTAINER_OPEN_FAILED", 0xC01A0029),
    TableEntry::new("STATUS_LOG_CONTAINER_STATE_INVALID", 0xC01A002A),
    TableEntry::new("STATUS_LOG_STATE_INVALID", 0xC01A002B),
    TableEntry::new("STATUS_LOG_PINNED", 0xC01A002C),
    TableEntry::new("STATUS_LOG_METADATA_FLUSH_FAILED", 0xC01A002D),
    TableEntry::new("STATUS_LOG_INCONSISTENT_SECURITY", 0xC01A002E),
    TableEntry::new("STATUS_LOG_APPENDED_FLUSH_FAILED", 0xC01A002F),
    TableEntry::new("STATUS_LOG_PINNED_RESERVATION", 0xC01A0030),

    // Video facility
    TableEntry::new("STATUS_VIDEO_HUNG_DISPLAY_DRIVER_THREAD", 0xC01B00EA),

    // Filter manager facility
    TableEntry::new("STATUS_FLT_NO_HANDLER_DEFINED", 0xC01C0001),
    TableEntry::new("STATUS_FLT_CONTEXT_ALREADY_DEFINED", 0xC01C0002),
    TableEntry::new("STATUS_FLT_INVALID_ASYNCHRONOUS_REQUEST", 0xC01C0003),
    TableEntry::new("STATUS_FLT_DISALLOW_FAST_IO", 0xC01C0004),
    TableEntry::new("STATUS_FLT_INVALID_NAME_REQUEST", 0xC01C0005),
    TableEntry::new("STATUS_FLT_NOT_SAFE_TO_POST_OPERATION", 0xC01C0006),
    TableEntry::new("STATUS_FLT_NOT_INITIALIZED", 0xC01C0007),
    TableEntry::new("STATUS_FLT_FILTER_NOT_READY", 0xC01C0008),
    TableEntry::new("STATUS_FLT_POST_OPERATION_CLEANUP", 0xC01C0009),
    TableEntry::new("STATUS_FLT_INTERNAL_ERROR", 0xC01C000A),
    TableEntry::new("STATUS_FLT_DELETING_OBJECT", 0xC01C000B),
    TableEntry::new("STATUS_FLT_MUST_BE_NONPAGED_POOL", 0xC01C000C),
    TableEntry::new("STATUS_FLT_DUPLICATE_ENTRY", 0xC01C000D),
    TableEntry::new("STATUS_FLT_CBDQ_DISABLED", 0xC01C000E),
    TableEntry::new("STATUS_FLT_DO_NOT_ATTACH", 0xC01C000F),
    TableEntry::new("STATUS_FLT_DO_NOT_DETACH", 0xC01C0010),
    TableEntry::new("STATUS_FLT_INSTANCE_ALTITUDE_COLLISION", 0xC01C0011),
    TableEntry::new("STATUS_FLT_INSTANCE_NAME_COLLISION", 0xC01C0012),
    TableEntry::new("STATUS_FLT_FILTER_NOT_FOUND", 0xC01C0013),
    TableEntry::new("STATUS_FLT_VOLUME_NOT_FOUND", 0xC01C0014),
    TableEntry::new("STATUS_FLT_INSTANCE_NOT_FOUND", 0xC01C0015),
    TableEntry::new("STATUS_FLT_CONTEXT_ALLOCATION_NOT_FOUND", 0xC01C0016),
    TableEntry::new("STATUS_FLT_INVALID_CONTEXT_REGISTRATION", 0xC01C0017),
    TableEntry::new("STATUS_FLT_NAME_CACHE_MISS", 0xC01C0018),
    TableEntry::new("STATUS_FLT_NO_DEVICE_OBJECT", 0xC01C0019),
    TableEntry::new("STATUS_FLT_VOLUME_ALREADY_MOUNTED", 0xC01C001A),
    TableEntry::new("STATUS_FLT_ALREADY_ENLISTED", 0xC01C001B),
    TableEntry::new("STATUS_FLT_CONTEXT_ALREADY_LINKED", 0xC01C001C),
    TableEntry::new("STATUS_FLT_NO_WAITER_FOR_REPLY", 0xC01C0020),
    TableEntry::new("STATUS_FLT_REGISTRATION_BUSY", 0xC01C0023),
    TableEntry::new("STATUS_FLT_WCOS_NOT_SUPPORTED", 0xC01C0024),

    // Monitor facility
    TableEntry::new("STATUS_MONITOR_NO_DESCRIPTOR", 0xC01D0001),
    TableEntry::new("STATUS_MONITOR_UNKNOWN_DESCRIPTOR_FORMAT", 0xC01D0002),
    TableEntry::new("STATUS_MONITOR_INVALID_DESCRIPTOR_CHECKSUM", 0xC01D0003),
    TableEntry::new("STATUS_MONITOR_INVALID_STANDARD_TIMING_BLOCK", 0xC01D0004),
    TableEntry::new("STATUS_MONITOR_WMI_DATABLOCK_REGISTRATION_FAILED", 0xC01D0005),
    TableEntry::new("STATUS_MONITOR_INVALID_SERIAL_NUMBER_MONDSC_BLOCK", 0xC01D0006),
    TableEntry::new("STATUS_MONITOR_INVALID_USER_FRIENDLY_MONDSC_BLOCK", 0xC01D0007),
    TableEntry::new("STATUS_MONITOR_NO_MORE_DESCRIPTOR_DATA", 0xC01D0008),
    TableEntry::new("STATUS_MONITOR_INVALID_DETAILED_TIMING_BLOCK", 0xC01D0009),
    TableEntry::new("STATUS_MONITOR_INVALID_MANUFACTURE_DATE", 0xC01D000A),

    // Graphics kernel facility
    TableEntry::new("STATUS_GRAPHICS_NOT_EXCLUSIVE_MODE_OWNER", 0xC01E0000),
    TableEntry::new("STATUS_GRAPHICS_INSUFFICIENT_DMA_BUFFER", 0xC01E0001),
    TableEntry::new("STATUS_GRAPHICS_INVALID_DISPLAY_ADAPTER", 0xC01E0002),
    TableEntry::new("STATUS_GRAPHICS_ADAPTER_WAS_RESET", 0xC01E0003),
    TableEntry::new("STATUS_GRAPHICS_INVALID_DRIVER_MODEL", 0xC01E0004),
    TableEntry::new("STATUS_GRAPHICS_PRESENT_MODE_CHANGED", 0xC01E0005),
    TableEntry::new("STATUS_GRAPHICS_PRESENT_OCCLUDED", 0xC01E0006),
    TableEntry::new("STATUS_GRAPHICS_PRESENT_DENIED", 0xC01E0007),
    TableEntry::new("STATUS_GRAPHICS_CANNOTCOLORCONVERT", 0xC01E0008),
    TableEntry::new("STATUS_GRAPHICS_DRIVER_MISMATCH", 0xC01E0009),
    TableEntry::new("STATUS_GRAPHICS_PRESENT_REDIRECTION_DISABLED", 0xC01E000B),
    TableEntry::new("STATUS_GRAPHICS_PRESENT_UNOCCLUDED", 0xC01E000C),
    TableEntry::new("STATUS_GRAPHICS_WINDOWDC_NOT_AVAILABLE", 0xC01E000D),
    TableEntry::new("STATUS_GRAPHICS_WINDOWLESS_PRESENT_DISABLED", 0xC01E000E),
    TableEntry::new("STATUS_GRAPHICS_PRESENT_INVALID_WINDOW", 0xC01E000F),
    TableEntry::new("STATUS_GRAPHICS_PRESENT_BUFFER_NOT_BOUND", 0xC01E0010),
    TableEntry::new("STATUS_GRAPHICS_VAIL_STATE_CHANGED", 0xC01E0011),
    TableEntry::new("STATUS_GRAPHICS_INDIRECT_DISPLAY_ABANDON_SWAPCHAIN", 0xC01E0012),
    TableEntry::new("STATUS_GRAPHICS_INDIRECT_DISPLAY_DEVICE_STOPPED", 0xC01E0013),
    TableEntry::new("STATUS_GRAPHICS_NO_VIDEO_MEMORY", 0xC01E0100),
    TableEntry::new("STATUS_GRAPHICS_CANT_LOCK_MEMORY", 0xC01E0101),
    TableEntry::new("STATUS_GRAPHICS_ALLOCATION_BUSY", 0xC01E0102),
    TableEntry::new("STATUS_GRAPHICS_TOO_MANY_REFERENCES", 0xC01E0103),
    TableEntry::new("STATUS_GRAPHICS_TRY_AGAIN_LATER", 0xC01E0104),
    TableEntry::new("STATUS_GRAPHICS_TRY_AGAIN_NOW", 0xC01E0105),
    TableEntry::new("STATUS_GRAPHICS_ALLOCATION_INVALID", 0xC01E0106),
    TableEntry::new("STATUS_GRAPHICS_UNSWIZZLING_APERTURE_UNAVAILABLE", 0xC01E0107),
    TableEntry::new("STATUS_GRAPHICS_UNSWIZZLING_APERTURE_UNSUPPORTED", 0xC01E0108),
    TableEntry::new("STATUS_GRAPHICS_CANT_EVICT_PINNED_ALLOCATION", 0xC01E0109),
    TableEntry::new("STATUS_GRAPHICS_INVALID_ALLOCATION_USAGE", 0xC01E0110),
    TableEntry::new("STATUS_GRAPHICS_CANT_RENDER_LOCKED_ALLOCATION", 0xC01E0111),
    TableEntry::new("STATUS_GRAPHICS_ALLOCATION_CLOSED", 0xC01E0112),
    TableEntry::new("STATUS_GRAPHICS_INVALID_ALLOCATION_INSTANCE", 0xC01E0113),
    TableEntry::new("STATUS_GRAPHICS_INVALID_ALLOCATION_HANDLE", 0xC01E0114),
    TableEntry::new("STATUS_GRAPHICS_WRONG_ALLOCATION_DEVICE", 0xC01E0115),
    TableEntry::new("STATUS_GRAPHICS_ALLOCATION_CONTENT_LOST", 0xC01E0116),
    TableEntry::new("STATUS_GRAPHICS_GPU_EXCEPTION_ON_DEVICE", 0xC01E0200),
    TableEntry::new("STATUS_GRAPHICS_INVALID_VIDPN_TOPOLOGY", 0xC01E0300),
    TableEntry::new("STATUS_GRAPHICS_VIDPN_TOPOLOGY_NOT_SUPPORTED", 0xC01E0301),
    TableEntry::new("STATUS_GRAPHICS_VIDPN_TOPOLOGY_CURRENTLY_NOT_SUPPORTED", 0xC01E0302),
    TableEntry::new("STATUS_GRAPHICS_INVALID_VIDPN", 0xC01E0303),
    TableEntry::new("STATUS_GRAPHICS_INVALID_VIDEO_PRESENT_SOURCE", 0xC01E0304),
    TableEntry::new("STATUS_GRAPHICS_INVALID_VIDEO_PRESENT_TARGET", 0xC01E0305),
    TableEntry::new("STATUS_GRAPHICS_VIDPN_MODALITY_NOT_SUPPORTED", 0xC01E0306),
    TableEntry::new("STATUS_GRAPHICS_INVALID_VIDPN_SOURCEMODESET", 0xC01E0308),
    TableEntry::new("STATUS_GRAPHICS_INVALID_VIDPN_TARGETMODESET", 0xC01E0309),
    TableEntry::new("STATUS_GRAPHICS_INVALID_FREQUENCY", 0xC01E030A),
    TableEntry::new("STATUS_GRAPHICS_INVALID_ACTIVE_REGION", 0xC01E030B),
    TableEntry::new("STATUS_GRAPHICS_INVALID_TOTAL_REGION", 0xC01E030C),
    TableEntry::new("STATUS_GRAPHICS_INVALID_VIDEO_PRESENT_SOURCE_MODE", 0xC01E0310),
    TableEntry::new("STATUS_GRAPHICS_INVALID_VIDEO_PRESENT_TARGET_MODE", 0xC01E0311),
    TableEntry::new("STATUS_GRAPHICS_PINNED_MODE_MUST_REMAIN_IN_SET", 0xC01E0312),
    TableEntry::new("STATUS_GRAPHICS_PATH_ALREADY_IN_TOPOLOGY", 0xC01E0313),
    TableEntry::new("STATUS_GRAPHICS_MODE_ALREADY_IN_MODESET", 0xC01E0314),
    TableEntry::new("STATUS_GRAPHICS_INVALID_VIDEOPRESENTSOURCESET", 0xC01E0315),
    TableEntry::new("STATUS_GRAPHICS_INVALID_VIDEOPRESENTTARGETSET", 0xC01E0316),
    TableEntry::new("STATUS_GRAPHICS_SOURCE_ALREADY_IN_SET", 0xC01E0317),
    TableEntry::new("STATUS_GRAPHICS_TARGET_ALREADY_IN_SET", 0xC01E0318),
    TableEntry::new("STATUS_GRAPHICS_INVALID_VIDPN_PRESENT_PATH", 0xC01E0319),
    TableEntry::new("STATUS_GRAPHICS_NO_RECOMMENDED_VIDPN_TOPOLOGY", 0xC01E031A),
    TableEntry::new("STATUS_GRAPHICS_INVALID_MONITOR_FREQUENCYRANGESET", 0xC01E031B),
    TableEntry::new("STATUS_GRAPHICS_INVALID_MONITOR_FREQUENCYRANGE", 0xC01E031C),
    TableEntry::new("STATUS_GRAPHICS_FREQUENCYRANGE_NOT_IN_SET", 0xC01E031D),
    TableEntry::new("STATUS_GRAPHICS_FREQUENCYRANGE_ALREADY_IN_SET", 0xC01E031F),
    TableEntry::new("STATUS_GRAPHICS_STALE_MODESET", 0xC01E0320),
    TableEntry::new("STATUS_GRAPHICS_INVALID_MONITOR_SOURCEMODESET", 0xC01E0321),
    TableEntry::new("STATUS_GRAPHICS_INVALID_MONITOR_SOURCE_MODE", 0xC01E0322),
    TableEntry::new("STATUS_GRAPHICS_NO_RECOMMENDED_FUNCTIONAL_VIDPN", 0xC01E0323),
    TableEntry::new("STATUS_GRAPHICS_MODE_ID_MUST_BE_UNIQUE", 0xC01E0324),
    TableEntry::new("STATUS_GRAPHICS_EMPTY_ADAPTER_MONITOR_MODE_SUPPORT_INTERSECTION", 0xC01E0325),
    TableEntry::new("STATUS_GRAPHICS_VIDEO_PRESENT_TARGETS_LESS_THAN_SOURCES", 0xC01E0326),
    TableEntry::new("STATUS_GRAPHICS_PATH_NOT_IN_TOPOLOGY", 0xC01E0327),
    TableEntry::new("STATUS_GRAPHICS_ADAPTER_MUST_HAVE_AT_LEAST_ONE_SOURCE", 0xC01E0328),
    TableEntry::new("STATUS_GRAPHICS_ADAPTER_MUST_HAVE_AT_LEAST_ONE_TARGET", 0xC01E0329),
    TableEntry::new("STATUS_GRAPHICS_INVALID_MONITORDESCRIPTORSET", 0xC01E032A),
    TableEntry::new("STATUS_GRAPHICS_INVALID_MONITORDESCRIPTOR", 0xC01E032B),
    TableEntry::new("STATUS_GRAPHICS_MONITORDESCRIPTOR_NOT_IN_SET", 0xC01E032C),
    TableEntry::new("STATUS_GRAPHICS_MONITORDESCRIPTOR_ALREADY_IN_SET", 0xC01E032D),
    TableEntry::new("STATUS_GRAPHICS_MONITORDESCRIPTOR_ID_MUST_BE_UNIQUE", 0xC01E032E),
    TableEntry::new("STATUS_GRAPHICS_INVALID_VIDPN_TARGET_SUBSET_TYPE", 0xC01E032F),
    TableEntry::new("STATUS_GRAPHICS_RESOURCES_NOT_RELATED", 0xC01E0330),
    TableEntry::new("STATUS_GRAPHICS_SOURCE_ID_MUST_BE_UNIQUE", 0xC01E0331),
    TableEntry::new("STATUS_GRAPHICS_TARGET_ID_MUST_BE_UNIQUE", 0xC01E0332),
    TableEntry::new("STATUS_GRAPHICS_NO_AVAILABLE_VIDPN_TARGET", 0xC01E0333),
    TableEntry::new("STATUS_GRAPHICS_MONITOR_COULD_NOT_BE_ASSOCIATED_WITH_ADAPTER", 0xC01E0334),
    TableEntry::new("STATUS_GRAPHICS_NO_VIDPNMGR", 0xC01E0335),
    TableEntry::new("STATUS_GRAPHICS_NO_ACTIVE_VIDPN", 0xC01E0336),
    TableEntry::new("STATUS_GRAPHICS_STALE_VIDPN_TOPOLOGY", 0xC01E0337),
    TableEntry::new("STATUS_GRAPHICS_MONITOR_NOT_CONNECTED", 0xC01E0338),
    TableEntry::new("STATUS_GRAPHICS_SOURCE_NOT_IN_TOPOLOGY", 0xC01E0339),
    TableEntry::new("STATUS_GRAPHICS_INVALID_PRIMARYSURFACE_SIZE", 0xC01E033A),
    TableEntry::new("STATUS_GRAPHICS_INVALID_VISIBLEREGION_SIZE", 0xC01E033B),
    TableEntry::new("STATUS_GRAPHICS_INVALID_STRIDE", 0xC01E033C),
    TableEntry::new("STATUS_GRAPHICS_INVALID_PIXELFORMAT", 0xC01E033D),
    TableEntry::new("STATUS_GRAPHICS_INVALID_COLORBASIS", 0xC01E033E),
    TableEntry::new("STATUS_GRAPHICS_INVALID_PIXELVALUEACCESSMODE", 0xC01E033F),
    TableEntry::new("STATUS_GRAPHICS_TARGET_NOT_IN_TOPOLOGY", 0xC01E0340),
    TableEntry::new("STATUS_GRAPHICS_NO_DISPLAY_MODE_MANAGEMENT_SUPPORT", 0xC01E0341),
    TableEntry::new("STATUS_GRAPHICS_VIDPN_SOURCE_IN_USE", 0xC01E0342),
    TableEntry::new("STATUS_GRAPHICS_CANT_ACCESS_ACTIVE_VIDPN", 0xC01E0343),
    TableEntry::new("STATUS_GRAPHICS_INVALID_PATH_IMPORTANCE_ORDINAL", 0xC01E0344),
    TableEntry::new("STATUS_GRAPHICS_INVALID_PATH_CONTENT_GEOMETRY_TRANSFORMATION", 0xC01E0345),
    TableEntry::new("STATUS_GRAPHICS_PATH_CONTENT_GEOMETRY_TRANSFORMATION_NOT_SUPPORTED", 0xC01E0346),
    TableEntry::new("STATUS_GRAPHICS_INVALID_GAMMA_RAMP", 0xC01E0347),
    TableEntry::new("STATUS_GRAPHICS_GAMMA_RAMP_NOT_SUPPORTED", 0xC01E0348),
    TableEntry::new("STATUS_GRAPHICS_MULTISAMPLING_NOT_SUPPORTED", 0xC01E0349),
    TableEntry::new("STATUS_GRAPHICS_MODE_NOT_IN_MODESET", 0xC01E034A),
    TableEntry::new("STATUS_GRAPHICS_INVALID_VIDPN_TOPOLOGY_RECOMMENDATION_REASON", 0xC01E034D),
    TableEntry::new("STATUS_GRAPHICS_INVALID_PATH_CONTENT_TYPE", 0xC01E034E),
    TableEntry::new("STATUS_GRAPHICS_INVALID_COPYPROTECTION_TYPE", 0xC01E034F),
    TableEntry::new("STATUS_GRAPHICS_UNASSIGNED_MODESET_ALREADY_EXISTS", 0xC01E0350),
    TableEntry::new("STATUS_GRAPHICS_INVALID_SCANLINE_ORDERING", 0xC01E0352),
    TableEntry::new("STATUS_GRAPHICS_TOPOLOGY_CHANGES_NOT_ALLOWED", 0xC01E0353),
    TableEntry::new("STATUS_GRAPHICS_NO_AVAILABLE_IMPORTANCE_ORDINALS", 0xC01E0354),
    TableEntry::new("STATUS_GRAPHICS_INCOMPATIBLE_PRIVATE_FORMAT", 0xC01E0355),
    TableEntry::new("STATUS_GRAPHICS_INVALID_MODE_PRUNING_ALGORITHM", 0xC01E0356),
    TableEntry::new("STATUS_GRAPHICS_INVALID_MONITOR_CAPABILITY_ORIGIN", 0xC01E0357),
    TableEntry::new("STATUS_GRAPHICS_INVALID_MONITOR_FREQUENCYRANGE_CONSTRAINT", 0xC01E0358),
    TableEntry::new("STATUS_GRAPHICS_MAX_NUM_PATHS_REACHED", 0xC01E0359),
    TableEntry::new("STATUS_GRAPHICS_CANCEL_VIDPN_TOPOLOGY_AUGMENTATION", 0xC01E035A),
    TableEntry::new("STATUS_GRAPHICS_INVALID_CLIENT_TYPE", 0xC01E035B),
    TableEntry::new("STATUS_GRAPHICS_CLIENTVIDPN_NOT_SET", 0xC01E035C),
    TableEntry::new("STATUS_GRAPHICS_SPECIFIED_CHILD_ALREADY_CONNECTED", 0xC01E0400),
    TableEntry::new("STATUS_GRAPHICS_CHILD_DESCRIPTOR_NOT_SUPPORTED", 0xC01E0401),
    TableEntry::new("STATUS_GRAPHICS_NOT_A_LINKED_ADAPTER", 0xC01E0430),
    TableEntry::new("STATUS_GRAPHICS_LEADLINK_NOT_ENUMERATED", 0xC01E0431),
    TableEntry::new("STATUS_GRAPHICS_CHAINLINKS_NOT_ENUMERATED", 0xC01E0432),
    TableEntry::new("STATUS_GRAPHICS_ADAPTER_CHAIN_NOT_READY", 0xC01E0433),
    TableEntry::new("STATUS_GRAPHICS_CHAINLINKS_NOT_STARTED", 0xC01E0434),
    TableEntry::new("STATUS_GRAPHICS_CHAINLINKS_NOT_POWERED_ON", 0xC01E0435),
    TableEntry::new("STATUS_GRAPHICS_INCONSISTENT_DEVICE_LINK_STATE", 0xC01E0436),
    TableEntry::new("STATUS_GRAPHICS_NOT_POST_DEVICE_DRIVER", 0xC01E0438),
    TableEntry::new("STATUS_GRAPHICS_ADAPTER_ACCESS_NOT_EXCLUDED", 0xC01E043B),
    TableEntry::new("STATUS_GRAPHICS_OPM_NOT_SUPPORTED", 0xC01E0500),
    TableEntry::new("STATUS_GRAPHICS_COPP_NOT_SUPPORTED", 0xC01E0501),
    TableEntry::new("STATUS_GRAPHICS_UAB_NOT_SUPPORTED", 0xC01E0502),
    TableEntry::new("STATUS_GRAPHICS_OPM_INVALID_ENCRYPTED_PARAMETERS", 0xC01E0503),
    TableEntry::new("STATUS_GRAPHICS_OPM_NO_PROTECTED_OUTPUTS_EXIST", 0xC01E0505),
    TableEntry::new("STATUS_GRAPHICS_OPM_INTERNAL_ERROR", 0xC01E050B),
    TableEntry::new("STATUS_GRAPHICS_OPM_INVALID_HANDLE", 0xC01E050C),
    TableEntry::new("STATUS_GRAPHICS_PVP_INVALID_CERTIFICATE_LENGTH", 0xC01E050E),
    TableEntry::new("STATUS_GRAPHICS_OPM_SPANNING_MODE_ENABLED", 0xC01E050F),
    TableEntry::new("STATUS_GRAPHICS_OPM_THEATER_MODE_ENABLED", 0xC01E0510),
    TableEntry::new("STATUS_GRAPHICS_PVP_HFS_FAILED", 0xC01E0511),
    TableEntry::new("STATUS_GRAPHICS_OPM_INVALID_SRM", 0xC01E0512),
    TableEntry::new("STATUS_GRAPHICS_OPM_OUTPUT_DOES_NOT_SUPPORT_HDCP", 0xC01E0513),
    TableEntry::new("STATUS_GRAPHICS_OPM_OUTPUT_DOES_NOT_SUPPORT_ACP", 0xC01E0514),
    TableEntry::new("STATUS_GRAPHICS_OPM_OUTPUT_DOES_NOT_SUPPORT_CGMSA", 0xC01E0515),
    TableEntry::new("STATUS_GRAPHICS_OPM_HDCP_SRM_NEVER_SET", 0xC01E0516),
    TableEntry::new("STATUS_GRAPHICS_OPM_RESOLUTION_TOO_HIGH", 0xC01E0517),
    TableEntry::new("STATUS_GRAPHICS_OPM_ALL_HDCP_HARDWARE_ALREADY_IN_USE", 0xC01E0518),
    TableEntry::new("STATUS_GRAPHICS_OPM_PROTECTED_OUTPUT_NO_LONGER_EXISTS", 0xC01E051A),
    TableEntry::new("STATUS_GRAPHICS_OPM_PROTECTED_OUTPUT_DOES_NOT_HAVE_COPP_SEMANTICS", 0xC01E051C),
    TableEntry::new("STATUS_GRAPHICS_OPM_INVALID_INFORMATION_REQUEST", 0xC01E051D),
    TableEntry::new("STATUS_GRAPHICS_OPM_DRIVER_INTERNAL_ERROR", 0xC01E051E),
    TableEntry::new("STATUS_GRAPHICS_OPM_PROTECTED_OUTPUT_DOES_NOT_HAVE_OPM_SEMANTICS", 0xC01E051F),
    TableEntry::new("STATUS_GRAPHICS_OPM_SIGNALING_NOT_SUPPORTED", 0xC01E0520),
    TableEntry::new("STATUS_GRAPHICS_OPM_INVALID_CONFIGURATION_REQUEST", 0xC01E0521),
    TableEntry::new("STATUS_GRAPHICS_I2C_NOT_SUPPORTED", 0xC01E0580),
    TableEntry::new("STATUS_GRAPHICS_I2C_DEVICE_DOES_NOT_EXIST", 0xC01E0581),
    TableEntry::new("STATUS_GRAPHICS_I2C_ERROR_TRANSMITTING_DATA", 0xC01E0582),
    TableEntry::new("STATUS_GRAPHICS_I2C_ERROR_RECEIVING_DATA", 0xC01E0583),
    TableEntry::new("STATUS_GRAPHICS_DDCCI_VCP_NOT_SUPPORTED", 0xC01E0584),
    TableEntry::new("STATUS_GRAPHICS_DDCCI_INVALID_DATA", 0xC01E0585),
    TableEntry::new("STATUS_GRAPHICS_DDCCI_MONITOR_RETURNED_INVALID_TIMING_STATUS_BYTE", 0xC01E0586),
    TableEntry::new("STATUS_GRAPHICS_DDCCI_INVALID_CAPABILITIES_STRING", 0xC01E0587),
    TableEntry::new("STATUS_GRAPHICS_MCA_INTERNAL_ERROR", 0xC01E0588),
    TableEntry::new("STATUS_GRAPHICS_DDCCI_INVALID_MESSAGE_COMMAND", 0xC01E0589),
    TableEntry::new("STATUS_GRAPHICS_DDCCI_INVALID_MESSAGE_LENGTH", 0xC01E058A),
    TableEntry::new("STATUS_GRAPHICS_DDCCI_INVALID_MESSAGE_CHECKSUM", 0xC01E058B),
    TableEntry::new("STATUS_GRAPHICS_INVALID_PHYSICAL_MONITOR_HANDLE", 0xC01E058C),
    TableEntry::new("STATUS_GRAPHICS_MONITOR_NO_LONGER_EXISTS", 0xC01E058D),
    TableEntry::new("STATUS_GRAPHICS_ONLY_CONSOLE_SESSION_SUPPORTED", 0xC01E05E0),
    TableEntry::new("STATUS_GRAPHICS_NO_DISPLAY_DEVICE_CORRESPONDS_TO_NAME", 0xC01E05E1),
    TableEntry::new("STATUS_GRAPHICS_DISPLAY_DEVICE_NOT_ATTACHED_TO_DESKTOP", 0xC01E05E2),
    TableEntry::new("STATUS_GRAPHICS_MIRRORING_DEVICES_NOT_SUPPORTED", 0xC01E05E3),
    TableEntry::new("STATUS_GRAPHICS_INVALID_POINTER", 0xC01E05E4),
    TableEntry::new("STATUS_GRAPHICS_NO_MONITORS_CORRESPOND_TO_DISPLAY_DEVICE", 0xC01E05E5),
    TableEntry::new("STATUS_GRAPHICS_PARAMETER_ARRAY_TOO_SMALL", 0xC01E05E6),
    TableEntry::new("STATUS_GRAPHICS_INTERNAL_ERROR", 0xC01E05E7),
    TableEntry::new("STATUS_GRAPHICS_SESSION_TYPE_CHANGE_IN_PROGRESS", 0xC01E05E8),

    // Full volume encryption facility
    TableEntry::new("STATUS_FVE_LOCKED_VOLUME", 0xC0210000),
    TableEntry::new("STATUS_FVE_NOT_ENCRYPTED", 0xC0210001),
    TableEntry::new("STATUS_FVE_BAD_INFORMATION", 0xC0210002),
    TableEntry::new("STATUS_FVE_TOO_SMALL", 0xC0210003),
    TableEntry::new("STATUS_FVE_FAILED_WRONG_FS", 0xC0210004),
    TableEntry::new("STATUS_FVE_BAD_PARTITION_SIZE", 0xC0210005),
    TableEntry::new("STATUS_FVE_FS_NOT_EXTENDED", 0xC0210006),
    TableEntry::new("STATUS_FVE_FS_MOUNTED", 0xC0210007),
    TableEntry::new("STATUS_FVE_NO_LICENSE", 0xC0210008),
    TableEntry::new("STATUS_FVE_ACTION_NOT_ALLOWED", 0xC0210009),
    TableEntry::new("STATUS_FVE_BAD_DATA", 0xC021000A),
    TableEntry::new("STATUS_FVE_VOLUME_NOT_BOUND", 0xC021000B),
    TableEntry::new("STATUS_FVE_NOT_DATA_VOLUME", 0xC021000C),
    TableEntry::new("STATUS_FVE_CONV_READ_ERROR", 0xC021000D),
    TableEntry::new("STATUS_FVE_CONV_WRITE_ERROR", 0xC021000E),
    TableEntry::new("STATUS_FVE_OVERLAPPED_UPDATE", 0xC021000F),
    TableEntry::new("STATUS_FVE_FAILED_SECTOR_SIZE", 0xC0210010),
    TableEntry::new("STATUS_FVE_FAILED_AUTHENTICATION", 0xC0210011),
    TableEntry::new("STATUS_FVE_NOT_OS_VOLUME", 0xC0210012),
    TableEntry::new("STATUS_FVE_KEYFILE_NOT_FOUND", 0xC0210013),
    TableEntry::new("STATUS_FVE_KEYFILE_INVALID", 0xC0210014),
    TableEntry::new("STATUS_FVE_KEYFILE_NO_VMK", 0xC0210015),
    TableEntry::new("STATUS_FVE_TPM_DISABLED", 0xC0210016),
    TableEntry::new("STATUS_FVE_TPM_SRK_AUTH_NOT_ZERO", 0xC0210017),
    TableEntry::new("STATUS_FVE_TPM_INVALID_PCR", 0xC0210018),
    TableEntry::new("STATUS_FVE_TPM_NO_VMK", 0xC0210019),
    TableEntry::new("STATUS_FVE_PIN_INVALID", 0xC021001A),
    TableEntry::new("STATUS_FVE_AUTH_INVALID_APPLICATION", 0xC021001B),
    TableEntry::new("STATUS_FVE_AUTH_INVALID_CONFIG", 0xC021001C),
    TableEntry::new("STATUS_FVE_DEBUGGER_ENABLED", 0xC021001D),
    TableEntry::new("STATUS_FVE_DRY_RUN_FAILED", 0xC021001E),
    TableEntry::new("STATUS_FVE_BAD_METADATA_POINTER", 0xC021001F),
    TableEntry::new("STATUS_FVE_OLD_METADATA_COPY", 0xC0210020),
    TableEntry::new("STATUS_FVE_REBOOT_REQUIRED", 0xC0210021),
    TableEntry::new("STATUS_FVE_RAW_ACCESS", 0xC0210022),
    TableEntry::new("STATUS_FVE_RAW_BLOCKED", 0xC0210023),
    TableEntry::new("STATUS_FVE_NO_AUTOUNLOCK_MASTER_KEY", 0xC0210024),
    TableEntry::new("STATUS_FVE_MOR_FAILED", 0xC0210025),
    TableEntry::new("STATUS_FVE_NO_FEATURE_LICENSE", 0xC0210026),
    TableEntry::new("STATUS_FVE_POLICY_USER_DISABLE_RDV_NOT_ALLOWED", 0xC0210027),
    TableEntry::new("STATUS_FVE_CONV_RECOVERY_FAILED", 0xC0210028),
    TableEntry::new("STATUS_FVE_VIRTUALIZED_SPACE_TOO_BIG", 0xC0210029),
    TableEntry::new("STATUS_FVE_INVALID_DATUM_TYPE", 0xC021002A),
    TableEntry::new("STATUS_FVE_VOLUME_TOO_SMALL", 0xC0210030),
    TableEntry::new("STATUS_FVE_ENH_PIN_INVALID", 0xC0210031),
    TableEntry::new("STATUS_FVE_FULL_ENCRYPTION_NOT_ALLOWED_ON_TP_STORAGE", 0xC0210032),
    TableEntry::new("STATUS_FVE_WIPE_NOT_ALLOWED_ON_TP_STORAGE", 0xC0210033),
    TableEntry::new("STATUS_FVE_NOT_ALLOWED_ON_CSV_STACK", 0xC0210034),
    TableEntry::new("STATUS_FVE_NOT_ALLOWED_ON_CLUSTER", 0xC0210035),
    TableEntry::new("STATUS_FVE_NOT_ALLOWED_TO_UPGRADE_WHILE_CONVERTING", 0xC0210036),
    TableEntry::new("STATUS_FVE_WIPE_CANCEL_NOT_APPLICABLE", 0xC0210037),
    TableEntry::new("STATUS_FVE_EDRIVE_DRY_RUN_FAILED", 0xC0210038),
    TableEntry::new("STATUS_FVE_SECUREBOOT_DISABLED", 0xC0210039),
    TableEntry::new("STATUS_FVE_SECUREBOOT_CONFIG_CHANGE", 0xC021003A),
    TableEntry::new("STATUS_FVE_DEVICE_LOCKEDOUT", 0xC021003B),
    TableEntry::new("STATUS_FVE_VOLUME_EXTEND_PREVENTS_EOW_DECRYPT", 0xC021003C),
    TableEntry::new("STATUS_FVE_NOT_DE_VOLUME", 0xC021003D),
    TableEntry::new("STATUS_FVE_PROTECTION_DISABLED", 0xC021003E),
    TableEntry::new("STATUS_FVE_PROTECTION_CANNOT_BE_DISABLED", 0xC021003F),
    TableEntry::new("STATUS_FVE_OSV_KSR_NOT_ALLOWED", 0xC0210040),

    // Filtering platform facility
    TableEntry::new("STATUS_FWP_CALLOUT_NOT_FOUND", 0xC0220001),
    TableEntry::new("STATUS_FWP_CONDITION_NOT_FOUND", 0xC0220002),
    TableEntry::new("STATUS_FWP_FILTER_NOT_FOUND", 0xC0220003),
    TableEntry::new("STATUS_FWP_LAYER_NOT_FOUND", 0xC0220004),
    TableEntry::new("STATUS_FWP_PROVIDER_NOT_FOUND", 0xC0220005),
    TableEntry::new("STATUS_FWP_PROVIDER_CONTEXT_NOT_FOUND", 0xC0220006),
    TableEntry::new("STATUS_FWP_SUBLAYER_NOT_FOUND", 0xC0220007),
    TableEntry::new("STATUS_FWP_NOT_FOUND", 0xC0220008),
    TableEntry::new("STATUS_FWP_ALREADY_EXISTS", 0xC0220009),
    TableEntry::new("STATUS_FWP_IN_USE", 0xC022000A),
    TableEntry::new("STATUS_FWP_DYNAMIC_SESSION_IN_PROGRESS", 0xC022000B),
    TableEntry::new("STATUS_FWP_WRONG_SESSION", 0xC022000C),
    TableEntry::new("STATUS_FWP_NO_TXN_IN_PROGRESS", 0xC022000D),
    TableEntry::new("STATUS_FWP_TXN_IN_PROGRESS", 0xC022000E),
    TableEntry::new("STATUS_FWP_TXN_ABORTED", 0xC022000F),
    TableEntry::new("STATUS_FWP_SESSION_ABORTED", 0xC0220010),
    TableEntry::new("STATUS_FWP_INCOMPATIBLE_TXN", 0xC0220011),
    TableEntry::new("STATUS_FWP_TIMEOUT", 0xC0220012),
    TableEntry::new("STATUS_FWP_NET_EVENTS_DISABLED", 0xC0220013),
    TableEntry::new("STATUS_FWP_INCOMPATIBLE_LAYER", 0xC0220014),
    TableEntry::new("STATUS_FWP_KM_CLIENTS_ONLY", 0xC0220015),
    TableEntry::new("STATUS_FWP_LIFETIME_MISMATCH", 0xC0220016),
    TableEntry::new("STATUS_FWP_BUILTIN_OBJECT", 0xC0220017),
    TableEntry::new("STATUS_FWP_TOO_MANY_CALLOUTS", 0xC0220018),
    TableEntry::new("STATUS_FWP_NOTIFICATION_DROPPED", 0xC0220019),
    TableEntry::new("STATUS_FWP_TRAFFIC_MISMATCH", 0xC022001A),
    TableEntry::new("STATUS_FWP_INCOMPATIBLE_SA_STATE", 0xC022001B),
    TableEntry::new("STATUS_FWP_NULL_POINTER", 0xC022001C),
    TableEntry::new("STATUS_FWP_INVALID_ENUMERATOR", 0xC022001D),
    TableEntry::new("STATUS_FWP_INVALID_FLAGS", 0xC022001E),
    TableEntry::new("STATUS_FWP_INVALID_NET_MASK", 0xC022001F),
    TableEntry::new("STATUS_FWP_INVALID_RANGE", 0xC0220020),
    TableEntry::new("STATUS_FWP_INVALID_INTERVAL", 0xC0220021),
    TableEntry::new("STATUS_FWP_ZERO_LENGTH_ARRAY", 0xC0220022),
    TableEntry::new("STATUS_FWP_NULL_DISPLAY_NAME", 0xC0220023),
    TableEntry::new("STATUS_FWP_INVALID_ACTION_TYPE", 0xC0220024),
    TableEntry::new("STATUS_FWP_INVALID_WEIGHT", 0xC0220025),
    TableEntry::new("STATUS_FWP_MATCH_TYPE_MISMATCH", 0xC0220026),
    TableEntry::new("STATUS_FWP_TYPE_MISMATCH", 0xC0220027),
    TableEntry::new("STATUS_FWP_OUT_OF_BOUNDS", 0xC0220028),
    TableEntry::new("STATUS_FWP_RESERVED", 0xC0220029),
    TableEntry::new("STATUS_FWP_DUPLICATE_CONDITION", 0xC022002A),
    TableEntry::new("STATUS_FWP_DUPLICATE_KEYMOD", 0xC022002B),
    TableEntry::new("STATUS_FWP_ACTION_INCOMPATIBLE_WITH_LAYER", 0xC022002C),
    TableEntry::new("STATUS_FWP_ACTION_INCOMPATIBLE_WITH_SUBLAYER", 0xC022002D),
    TableEntry::new("STATUS_FWP_CONTEXT_INCOMPATIBLE_WITH_LAYER", 0xC022002E),
    TableEntry::new("STATUS_FWP_CONTEXT_INCOMPATIBLE_WITH_CALLOUT", 0xC022002F),
    TableEntry::new("STATUS_FWP_INCOMPATIBLE_AUTH_METHOD", 0xC0220030),
    TableEntry::new("STATUS_FWP_INCOMPATIBLE_DH_GROUP", 0xC0220031),
    TableEntry::new("STATUS_FWP_EM_NOT_SUPPORTED", 0xC0220032),
    TableEntry::new("STATUS_FWP_NEVER_MATCH", 0xC0220033),
    TableEntry::new("STATUS_FWP_PROVIDER_CONTEXT_MISMATCH", 0xC0220034),
    TableEntry::new("STATUS_FWP_INVALID_PARAMETER", 0xC0220035),
    TableEntry::new("STATUS_FWP_TOO_MANY_SUBLAYERS", 0xC0220036),
    TableEntry::new("STATUS_FWP_CALLOUT_NOTIFICATION_FAILED", 0xC0220037),
    TableEntry::new("STATUS_FWP_INVALID_AUTH_TRANSFORM", 0xC0220038),
    TableEntry::new("STATUS_FWP_INVALID_CIPHER_TRANSFORM", 0xC0220039),
    TableEntry::new("STATUS_FWP_INCOMPATIBLE_CIPHER_TRANSFORM", 0xC022003A),
    TableEntry::new("STATUS_FWP_INVALID_TRANSFORM_COMBINATION", 0xC022003B),
    TableEntry::new("STATUS_FWP_DUPLICATE_AUTH_METHOD", 0xC022003C),
    TableEntry::new("STATUS_FWP_INVALID_TUNNEL_ENDPOINT", 0xC022003D),
    TableEntry::new("STATUS_FWP_L2_DRIVER_NOT_READY", 0xC022003E),
    TableEntry::new("STATUS_FWP_KEY_DICTATOR_ALREADY_REGISTERED", 0xC022003F),
    TableEntry::new("STATUS_FWP_KEY_DICTATION_INVALID_KEYING_MATERIAL", 0xC0220040),
    TableEntry::new("STATUS_FWP_CONNECTIONS_DISABLED", 0xC0220041),
    TableEntry::new("STATUS_FWP_INVALID_DNS_NAME", 0xC0220042),
    TableEntry::new("STATUS_FWP_STILL_ON", 0xC0220043),
    TableEntry::new("STATUS_FWP_IKEEXT_NOT_RUNNING", 0xC0220044),
    TableEntry::new("STATUS_FWP_TCPIP_NOT_READY", 0xC0220100),
    TableEntry::new("STATUS_FWP_INJECT_HANDLE_CLOSING", 0xC0220101),
    TableEntry::new("STATUS_FWP_INJECT_HANDLE_STALE", 0xC0220102),
    TableEntry::new("STATUS_FWP_CANNOT_PEND", 0xC0220103),
    TableEntry::new("STATUS_FWP_DROP_NOICMP", 0xC0220104),

    // NDIS facility
    TableEntry::new("STATUS_NDIS_CLOSING", 0xC0230002),
    TableEntry::new("STATUS_NDIS_BAD_VERSION", 0xC0230004),
    TableEntry::new("STATUS_NDIS_BAD_CHARACTERISTICS", 0xC0230005),
    TableEntry::new("STATUS_NDIS_ADAPTER_NOT_FOUND", 0xC0230006),
    TableEntry::new("STATUS_NDIS_OPEN_FAILED", 0xC0230007),
    TableEntry::new("STATUS_NDIS_DEVICE_FAILED", 0xC0230008),
    TableEntry::new("STATUS_NDIS_MULTICAST_FULL", 0xC0230009),
    TableEntry::new("STATUS_NDIS_MULTICAST_EXISTS", 0xC023000A),
    TableEntry::new("STATUS_NDIS_MULTICAST_NOT_FOUND", 0xC023000B),
    TableEntry::new("STATUS_NDIS_REQUEST_ABORTED", 0xC023000C),
    TableEntry::new("STATUS_NDIS_RESET_IN_PROGRESS", 0xC023000D),
    TableEntry::new("STATUS_NDIS_INVALID_PACKET", 0xC023000F),
    TableEntry::new("STATUS_NDIS_INVALID_DEVICE_REQUEST", 0xC0230010),
    TableEntry::new("STATUS_NDIS_ADAPTER_NOT_READY", 0xC0230011),
    TableEntry::new("STATUS_NDIS_INVALID_LENGTH", 0xC0230014),
    TableEntry::new("STATUS_NDIS_INVALID_DATA", 0xC0230015),
    TableEntry::new("STATUS_NDIS_BUFFER_TOO_SHORT", 0xC0230016),
    TableEntry::new("STATUS_NDIS_INVALID_OID", 0xC0230017),
    TableEntry::new("STATUS_NDIS_ADAPTER_REMOVED", 0xC0230018),
    TableEntry::new("STATUS_NDIS_UNSUPPORTED_MEDIA", 0xC0230019),
    TableEntry::new("STATUS_NDIS_GROUP_ADDRESS_IN_USE", 0xC023001A),
    TableEntry::new("STATUS_NDIS_FILE_NOT_FOUND", 0xC023001B),
    TableEntry::new("STATUS_NDIS_ERROR_READING_FILE", 0xC023001C),
    TableEntry::new("STATUS_NDIS_ALREADY_MAPPED", 0xC023001D),
    TableEntry::new("STATUS_NDIS_RESOURCE_CONFLICT", 0xC023001E),
    TableEntry::new("STATUS_NDIS_MEDIA_DISCONNECTED", 0xC023001F),
    TableEntry::new("STATUS_NDIS_INVALID_ADDRESS", 0xC0230022),
    TableEntry::new("STATUS_NDIS_PAUSED", 0xC023002A),
    TableEntry::new("STATUS_NDIS_INTERFACE_NOT_FOUND", 0xC023002B),
    TableEntry::new("STATUS_NDIS_UNSUPPORTED_REVISION", 0xC023002C),
    TableEntry::new("STATUS_NDIS_INVALID_PORT", 0xC023002D),
    TableEntry::new("STATUS_NDIS_INVALID_PORT_STATE", 0xC023002E),
    TableEntry::new("STATUS_NDIS_LOW_POWER_STATE", 0xC023002F),
    TableEntry::new("STATUS_NDIS_REINIT_REQUIRED", 0xC0230030),
    TableEntry::new("STATUS_NDIS_NO_QUEUES", 0xC0230031),
    TableEntry::new("STATUS_NDIS_NOT_SUPPORTED", 0xC02300BB),
    TableEntry::new("STATUS_NDIS_OFFLOAD_POLICY", 0xC023010F),
    TableEntry::new("STATUS_NDIS_OFFLOAD_CONNECTION_REJECTED", 0xC0230112),
    TableEntry::new("STATUS_NDIS_OFFLOAD_PATH_REJECTED", 0xC0230113),
    TableEntry::new("STATUS_NDIS_DOT11_AUTO_CONFIG_ENABLED", 0xC0232000),
    TableEntry::new("STATUS_NDIS_DOT11_MEDIA_IN_USE", 0xC0232001),
    TableEntry::new("STATUS_NDIS_DOT11_POWER_STATE_INVALID", 0xC0232002),
    TableEntry::new("STATUS_NDIS_PM_WOL_PATTERN_LIST_FULL", 0xC0232003),
    TableEntry::new("STATUS_NDIS_PM_PROTOCOL_OFFLOAD_LIST_FULL", 0xC0232004),
    TableEntry::new("STATUS_NDIS_DOT11_AP_CHANNEL_CURRENTLY_NOT_AVAILABLE", 0xC0232005),
    TableEntry::new("STATUS_NDIS_DOT11_AP_BAND_CURRENTLY_NOT_AVAILABLE", 0xC0232006),
    TableEntry::new("STATUS_NDIS_DOT11_AP_CHANNEL_NOT_ALLOWED", 0xC0232007),
    TableEntry::new("STATUS_NDIS_DOT11_AP_BAND_NOT_ALLOWED", 0xC0232008),

    // QUIC facility
    TableEntry::new("STATUS_QUIC_HANDSHAKE_FAILURE", 0xC0240000),
    TableEntry::new("STATUS_QUIC_VER_NEG_FAILURE", 0xC0240001),
    TableEntry::new("STATUS_QUIC_USER_CANCELED", 0xC0240002),
    TableEntry::new("STATUS_QUIC_INTERNAL_ERROR", 0xC0240003),
    TableEntry::new("STATUS_QUIC_PROTOCOL_VIOLATION", 0xC0240004),
    TableEntry::new("STATUS_QUIC_CONNECTION_IDLE", 0xC0240005),
    TableEntry::new("STATUS_QUIC_CONNECTION_TIMEOUT", 0xC0240006),
    TableEntry::new("STATUS_QUIC_ALPN_NEG_FAILURE", 0xC0240007),

    // TPM facility
    TableEntry::new("STATUS_TPM_ERROR_MASK", 0xC0290000),
    TableEntry::new("STATUS_TPM_AUTHFAIL", 0xC0290001),
    TableEntry::new("STATUS_TPM_BADINDEX", 0xC0290002),
    TableEntry::new("STATUS_TPM_BAD_PARAMETER", 0xC0290003),
    TableEntry::new("STATUS_TPM_AUDITFAILURE", 0xC0290004),
    TableEntry::new("STATUS_TPM_CLEAR_DISABLED", 0xC0290005),
    TableEntry::new("STATUS_TPM_DEACTIVATED", 0xC0290006),
    TableEntry::new("STATUS_TPM_DISABLED", 0xC0290007),
    TableEntry::new("STATUS_TPM_DISABLED_CMD", 0xC0290008),
    TableEntry::new("STATUS_TPM_FAIL", 0xC0290009),
    TableEntry::new("STATUS_TPM_BAD_ORDINAL", 0xC029000A),
    TableEntry::new("STATUS_TPM_INSTALL_DISABLED", 0xC029000B),
    TableEntry::new("STATUS_TPM_INVALID_KEYHANDLE", 0xC029000C),
    TableEntry::new("STATUS_TPM_KEYNOTFOUND", 0xC029000D),
    TableEntry::new("STATUS_TPM_INAPPROPRIATE_ENC", 0xC029000E),
    TableEntry::new("STATUS_TPM_MIGRATEFAIL", 0xC029000F),
    TableEntry::new("STATUS_TPM_INVALID_PCR_INFO", 0xC0290010),
    TableEntry::new("STATUS_TPM_NOSPACE", 0xC0290011),
    TableEntry::new("STATUS_TPM_NOSRK", 0xC0290012),
    TableEntry::new("STATUS_TPM_NOTSEALED_BLOB", 0xC0290013),
    TableEntry::new("STATUS_TPM_OWNER_SET", 0xC0290014),
    TableEntry::new("STATUS_TPM_RESOURCES", 0xC0290015),
    TableEntry::new("STATUS_TPM_SHORTRANDOM", 0xC0290016),
    TableEntry::new("STATUS_TPM_SIZE", 0xC0290017),
    TableEntry::new("STATUS_TPM_WRONGPCRVAL", 0xC0290018),
    TableEntry::new("STATUS_TPM_BAD_PARAM_SIZE", 0xC0290019),
    TableEntry::new("STATUS_TPM_SHA_THREAD", 0xC029001A),
    TableEntry::new("STATUS_TPM_SHA_ERROR", 0xC029001B),
    TableEntry::new("STATUS_TPM_FAILEDSELFTEST", 0xC029001C),
    TableEntry::new("STATUS_TPM_AUTH2FAIL", 0xC029001D),
    TableEntry::new("STATUS_TPM_BADTAG", 0xC029001E),
    TableEntry::new("STATUS_TPM_IOERROR", 0xC029001F),
    TableEntry::new("STATUS_TPM_ENCRYPT_ERROR", 0xC0290020),
    TableEntry::new("STATUS_TPM_DECRYPT_ERROR", 0xC0290021),
    TableEntry::new("STATUS_TPM_INVALID_AUTHHANDLE", 0xC0290022),
    TableEntry::new("STATUS_TPM_NO_ENDORSEMENT", 0xC0290023),
    TableEntry::new("STATUS_TPM_INVALID_KEYUSAGE", 0xC0290024),
    TableEntry::new("STATUS_TPM_WRONG_ENTITYTYPE", 0xC0290025),
    TableEntry::new("STATUS_TPM_INVALID_POSTINIT", 0xC0290026),
    TableEntry::new("STATUS_TPM_INAPPROPRIATE_SIG", 0xC0290027),
    TableEntry::new("STATUS_TPM_BAD_KEY_PROPERTY", 0xC0290028),
    TableEntry::new("STATUS_TPM_BAD_MIGRATION", 0xC0290029),
    TableEntry::new("STATUS_TPM_BAD_SCHEME", 0xC029002A),
    TableEntry::new("STATUS_TPM_BAD_DATASIZE", 0xC029002B),
    TableEntry::new("STATUS_TPM_BAD_MODE", 0xC029002C),
    TableEntry::new("STATUS_TPM_BAD_PRESENCE", 0xC029002D),
    TableEntry::new("STATUS_TPM_BAD_VERSION", 0xC029002E),
    TableEntry::new("STATUS_TPM_NO_WRAP_TRANSPORT", 0xC029002F),
    TableEntry::new("STATUS_TPM_AUDITFAIL_UNSUCCESSFUL", 0xC0290030),
    TableEntry::new("STATUS_TPM_AUDITFAIL_SUCCESSFUL", 0xC0290031),
    TableEntry::new("STATUS_TPM_NOTRESETABLE", 0xC0290032),
    TableEntry::new("STATUS_TPM_NOTLOCAL", 0xC0290033),
    TableEntry::new("STATUS_TPM_BAD_TYPE", 0xC0290034),
    TableEntry::new("STATUS_TPM_INVALID_RESOURCE", 0xC0290035),
    TableEntry::new("STATUS_TPM_NOTFIPS", 0xC0290036),
    TableEntry::new("STATUS_TPM_INVALID_FAMILY", 0xC0290037),
    TableEntry::new("STATUS_TPM_NO_NV_PERMISSION", 0xC0290038),
    TableEntry::new("STATUS_TPM_REQUIRES_SIGN", 0xC0290039),
    TableEntry::new("STATUS_TPM_KEY_NOTSUPPORTED", 0xC029003A),
    TableEntry::new("STATUS_TPM_AUTH_CONFLICT", 0xC029003B),
    TableEntry::new("STATUS_TPM_AREA_LOCKED", 0xC029003C),
    TableEntry::new("STATUS_TPM_BAD_LOCALITY", 0xC029003D),
    TableEntry::new("STATUS_TPM_READ_ONLY", 0xC029003E),
    TableEntry::new("STATUS_TPM_PER_NOWRITE", 0xC029003F),
    TableEntry::new("STATUS_TPM_FAMILYCOUNT", 0xC0290040),
    TableEntry::new("STATUS_TPM_WRITE_LOCKED", 0xC0290041),
    TableEntry::new("STATUS_TPM_BAD_ATTRIBUTES", 0xC0290042),
    TableEntry::new("STATUS_TPM_INVALID_STRUCTURE", 0xC0290043),
    TableEntry::new("STATUS_TPM_KEY_OWNER_CONTROL", 0xC0290044),
    TableEntry::new("STATUS_TPM_BAD_COUNTER", 0xC0290045),
    TableEntry::new("STATUS_TPM_NOT_FULLWRITE", 0xC0290046),
    TableEntry::new("STATUS_TPM_CONTEXT_GAP", 0xC0290047),
    TableEntry::new("STATUS_TPM_MAXNVWRITES", 0xC0290048),
    TableEntry::new("STATUS_TPM_NOOPERATOR", 0xC0290049),
    TableEntry::new("STATUS_TPM_RESOURCEMISSING", 0xC029004A),
    TableEntry::new("STATUS_TPM_DELEGATE_LOCK", 0xC029004B),
    TableEntry::new("STATUS_TPM_DELEGATE_FAMILY", 0xC029004C),
    TableEntry::new("STATUS_TPM_DELEGATE_ADMIN", 0xC029004D),
    TableEntry::new("STATUS_TPM_TRANSPORT_NOTEXCLUSIVE", 0xC029004E),
    TableEntry::new("STATUS_TPM_OWNER_CONTROL", 0xC029004F),
    TableEntry::new("STATUS_TPM_DAA_RESOURCES", 0xC0290050),
    TableEntry::new("STATUS_TPM_DAA_INPUT_DATA0", 0xC0290051),
    TableEntry::new("STATUS_TPM_DAA_INPUT_DATA1", 0xC0290052),
    TableEntry::new("STATUS_TPM_DAA_ISSUER_SETTINGS", 0xC0290053),
    TableEntry::new("STATUS_TPM_DAA_TPM_SETTINGS", 0xC0290054),
    TableEntry::new("STATUS_TPM_DAA_STAGE", 0xC0290055),
    TableEntry::new("STATUS_TPM_DAA_ISSUER_VALIDITY", 0xC0290056),
    TableEntry::new("STATUS_TPM_DAA_WRONG_W", 0xC0290057),
    TableEntry::new("STATUS_TPM_BAD_HANDLE", 0xC0290058),
    TableEntry::new("STATUS_TPM_BAD_DELEGATE", 0xC0290059),
    TableEntry::new("STATUS_TPM_BADCONTEXT", 0xC029005A),
    TableEntry::new("STATUS_TPM_TOOMANYCONTEXTS", 0xC029005B),
    TableEntry::new("STATUS_TPM_MA_TICKET_SIGNATURE", 0xC029005C),
    TableEntry::new("STATUS_TPM_MA_DESTINATION", 0xC029005D),
    TableEntry::new("STATUS_TPM_MA_SOURCE", 0xC029005E),
    TableEntry::new("STATUS_TPM_MA_AUTHORITY", 0xC029005F),
    TableEntry::new("STATUS_TPM_PERMANENTEK", 0xC0290061),
    TableEntry::new("STATUS_TPM_BAD_SIGNATURE", 0xC0290062),
    TableEntry::new("STATUS_TPM_NOCONTEXTSPACE", 0xC0290063),
    TableEntry::new("STATUS_TPM_20_E_ASYMMETRIC", 0xC0290081),
    TableEntry::new("STATUS_TPM_20_E_ATTRIBUTES", 0xC0290082),
    TableEntry::new("STATUS_TPM_20_E_HASH", 0xC0290083),
    TableEntry::new("STATUS_TPM_20_E_VALUE", 0xC0290084),
    TableEntry::new("STATUS_TPM_20_E_HIERARCHY", 0xC0290085),
    TableEntry::new("STATUS_TPM_20_E_KEY_SIZE", 0xC0290087),
    TableEntry::new("STATUS_TPM_20_E_MGF", 0xC0290088),
    TableEntry::new("STATUS_TPM_20_E_MODE", 0xC0290089),
    TableEntry::new("STATUS_TPM_20_E_TYPE", 0xC029008A),
    TableEntry::new("STATUS_TPM_20_E_HANDLE", 0xC029008B),
    TableEntry::new("STATUS_TPM_20_E_KDF", 0xC029008C),
    TableEntry::new("STATUS_TPM_20_E_RANGE", 0xC029008D),
    TableEntry::new("STATUS_TPM_20_E_AUTH_FAIL", 0xC029008E),
    TableEntry::new("STATUS_TPM_20_E_NONCE", 0xC029008F),
    TableEntry::new("STATUS_TPM_20_E_PP", 0xC0290090),
    TableEntry::new("STATUS_TPM_20_E_SCHEME", 0xC0290092),
    TableEntry::new("STATUS_TPM_20_E_SIZE", 0xC0290095),
    TableEntry::new("STATUS_TPM_20_E_SYMMETRIC", 0xC0290096),
    TableEntry::new("STATUS_TPM_20_E_TAG", 0xC0290097),
    TableEntry::new("STATUS_TPM_20_E_SELECTOR", 0xC0290098),
    TableEntry::new("STATUS_TPM_20_E_INSUFFICIENT", 0xC029009A),
    TableEntry::new("STATUS_TPM_20_E_SIGNATURE", 0xC029009B),
    TableEntry::new("STATUS_TPM_20_E_KEY", 0xC029009C),
    TableEntry::new("STATUS_TPM_20_E_POLICY_FAIL", 0xC029009D),
    TableEntry::new("STATUS_TPM_20_E_INTEGRITY", 0xC029009F),
    TableEntry::new("STATUS_TPM_20_E_TICKET", 0xC02900A0),
    TableEntry::new("STATUS_TPM_20_E_RESERVED_BITS", 0xC02900A1),
    TableEntry::new("STATUS_TPM_20_E_BAD_AUTH", 0xC02900A2),
    TableEntry::new("STATUS_TPM_20_E_EXPIRED", 0xC02900A3),
    TableEntry::new("STATUS_TPM_20_E_POLICY_CC", 0xC02900A4),
    TableEntry::new("STATUS_TPM_20_E_BINDING", 0xC02900A5),
    TableEntry::new("STATUS_TPM_20_E_CURVE", 0xC02900A6),
    TableEntry::new("STATUS_TPM_20_E_ECC_POINT", 0xC02900A7),
    TableEntry::new("STATUS_TPM_20_E_INITIALIZE", 0xC0290100),
    TableEntry::new("STATUS_TPM_20_E_FAILURE", 0xC0290101),
    TableEntry::new("STATUS_TPM_20_E_SEQUENCE", 0xC0290103),
    TableEntry::new("STATUS_TPM_20_E_PRIVATE", 0xC029010B),
    TableEntry::new("STATUS_TPM_20_E_HMAC", 0xC0290119),
    TableEntry::new("STATUS_TPM_20_E_DISABLED", 0xC0290120),
    TableEntry::new("STATUS_TPM_20_E_EXCLUSIVE", 0xC0290121),
    TableEntry::new("STATUS_TPM_20_E_ECC_CURVE", 0xC0290123),
    TableEntry::new("STATUS_TPM_20_E_AUTH_TYPE", 0xC0290124),
    TableEntry::new("STATUS_TPM_20_E_AUTH_MISSING", 0xC0290125),
    TableEntry::new("STATUS_TPM_20_E_POLICY", 0xC0290126),
    TableEntry::new("STATUS_TPM_20_E_PCR", 0xC0290127),
    TableEntry::new("STATUS_TPM_20_E_PCR_CHANGED", 0xC0290128),
    TableEntry::new("STATUS_TPM_20_E_UPGRADE", 0xC029012D),
    TableEntry::new("STATUS_TPM_20_E_TOO_MANY_CONTEXTS", 0xC029012E),
    TableEntry::new("STATUS_TPM_20_E_AUTH_UNAVAILABLE", 0xC029012F),
    TableEntry::new("STATUS_TPM_20_E_REBOOT", 0xC0290130),
    TableEntry::new("STATUS_TPM_20_E_UNBALANCED", 0xC0290131),
    TableEntry::new("STATUS_TPM_20_E_COMMAND_SIZE", 0xC0290142),
    TableEntry::new("STATUS_TPM_20_E_COMMAND_CODE", 0xC0290143),
    TableEntry::new("STATUS_TPM_20_E_AUTHSIZE", 0xC0290144),
    TableEntry::new("STATUS_TPM_20_E_AUTH_CONTEXT", 0xC0290145),
    TableEntry::new("STATUS_TPM_20_E_NV_RANGE", 0xC0290146),
    TableEntry::new("STATUS_TPM_20_E_NV_SIZE", 0xC0290147),
    TableEntry::new("STATUS_TPM_20_E_NV_LOCKED", 0xC0290148),
    TableEntry::new("STATUS_TPM_20_E_NV_AUTHORIZATION", 0xC0290149),
    TableEntry::new("STATUS_TPM_20_E_NV_UNINITIALIZED", 0xC029014A),
    TableEntry::new("STATUS_TPM_20_E_NV_SPACE", 0xC029014B),
    TableEntry::new("STATUS_TPM_20_E_NV_DEFINED", 0xC029014C),
    TableEntry::new("STATUS_TPM_20_E_BAD_CONTEXT", 0xC0290150),
    TableEntry::new("STATUS_TPM_20_E_CPHASH", 0xC0290151),
    TableEntry::new("STATUS_TPM_20_E_PARENT", 0xC0290152),
    TableEntry::new("STATUS_TPM_20_E_NEEDS_TEST", 0xC0290153),
    TableEntry::new("STATUS_TPM_20_E_NO_RESULT", 0xC0290154),
    TableEntry::new("STATUS_TPM_20_E_SENSITIVE", 0xC0290155),
    TableEntry::new("STATUS_TPM_COMMAND_BLOCKED", 0xC0290400),
    TableEntry::new("STATUS_TPM_INVALID_HANDLE", 0xC0290401),
    TableEntry::new("STATUS_TPM_DUPLICATE_VHANDLE", 0xC0290402),
    TableEntry::new("STATUS_TPM_EMBEDDED_COMMAND_BLOCKED", 0xC0290403),
    TableEntry::new("STATUS_TPM_EMBEDDED_COMMAND_UNSUPPORTED", 0xC0290404),
    TableEntry::new("STATUS_TPM_RETRY", 0xC0290800),
    TableEntry::new("STATUS_TPM_NEEDS_SELFTEST", 0xC0290801),
    TableEntry::new("STATUS_TPM_DOING_SELFTEST", 0xC0290802),
    TableEntry::new("STATUS_TPM_DEFEND_LOCK_RUNNING", 0xC0290803),
    TableEntry::new("STATUS_TPM_COMMAND_CANCELED", 0xC0291001),
    TableEntry::new("STATUS_TPM_TOO_MANY_CONTEXTS", 0xC0291002),
    TableEntry::new("STATUS_TPM_NOT_FOUND", 0xC0291003),
    TableEntry::new("STATUS_TPM_ACCESS_DENIED", 0xC0291004),
    TableEntry::new("STATUS_TPM_INSUFFICIENT_BUFFER", 0xC0291005),
    TableEntry::new("STATUS_TPM_PPI_FUNCTION_UNSUPPORTED", 0xC0291006),
    TableEntry::new("STATUS_PCP_ERROR_MASK", 0xC0292000),
    TableEntry::new("STATUS_PCP_DEVICE_NOT_READY", 0xC0292001),
    TableEntry::new("STATUS_PCP_INVALID_HANDLE", 0xC0292002),
    TableEntry::new("STATUS_PCP_INVALID_PARAMETER", 0xC0292003),
    TableEntry::new("STATUS_PCP_FLAG_NOT_SUPPORTED", 0xC0292004),
    TableEntry::new("STATUS_PCP_NOT_SUPPORTED", 0xC0292005),
    TableEntry::new("STATUS_PCP_BUFFER_TOO_SMALL", 0xC0292006),
    TableEntry::new("STATUS_PCP_INTERNAL_ERROR", 0xC0292007),
    TableEntry::new("STATUS_PCP_AUTHENTICATION_FAILED", 0xC0292008),
    TableEntry::new("STATUS_PCP_AUTHENTICATION_IGNORED", 0xC0292009),
    TableEntry::new("STATUS_PCP_POLICY_NOT_FOUND", 0xC029200A),
    TableEntry::new("STATUS_PCP_PROFILE_NOT_FOUND", 0xC029200B),
    TableEntry::new("STATUS_PCP_VALIDATION_FAILED", 0xC029200C),
    TableEntry::new("STATUS_PCP_DEVICE_NOT_FOUND", 0xC029200D),
    TableEntry::new("STATUS_PCP_WRONG_PARENT", 0xC029200E),
    TableEntry::new("STATUS_PCP_KEY_NOT_LOADED", 0xC029200F),
    TableEntry::new("STATUS_PCP_NO_KEY_CERTIFICATION", 0xC0292010),
    TableEntry::new("STATUS_PCP_KEY_NOT_FINALIZED", 0xC0292011),
    TableEntry::new("STATUS_PCP_ATTESTATION_CHALLENGE_NOT_SET", 0xC0292012),
    TableEntry::new("STATUS_PCP_NOT_PCR_BOUND", 0xC0292013),
    TableEntry::new("STATUS_PCP_KEY_ALREADY_FINALIZED", 0xC0292014),
    TableEntry::new("STATUS_PCP_KEY_USAGE_POLICY_NOT_SUPPORTED", 0xC0292015),
    TableEntry::new("STATUS_PCP_KEY_USAGE_POLICY_INVALID", 0xC0292016),
    TableEntry::new("STATUS_PCP_SOFT_KEY_ERROR", 0xC0292017),
    TableEntry::new("STATUS_PCP_KEY_NOT_AUTHENTICATED", 0xC0292018),
    TableEntry::new("STATUS_PCP_KEY_NOT_AIK", 0xC0292019),
    TableEntry::new("STATUS_PCP_KEY_NOT_SIGNING_KEY", 0xC029201A),
    TableEntry::new("STATUS_PCP_LOCKED_OUT", 0xC029201B),
    TableEntry::new("STATUS_PCP_CLAIM_TYPE_NOT_SUPPORTED", 0xC029201C),
    TableEntry::new("STATUS_PCP_TPM_VERSION_NOT_SUPPORTED", 0xC029201D),
    TableEntry::new("STATUS_PCP_BUFFER_LENGTH_MISMATCH", 0xC029201E),
    TableEntry::new("STATUS_PCP_IFX_RSA_KEY_CREATION_BLOCKED", 0xC029201F),
    TableEntry::new("STATUS_PCP_TICKET_MISSING", 0xC0292020),
    TableEntry::new("STATUS_PCP_RAW_POLICY_NOT_SUPPORTED", 0xC0292021),
    TableEntry::new("STATUS_PCP_KEY_HANDLE_INVALIDATED", 0xC0292022),

    // Hypervisor facility
    TableEntry::new("STATUS_HV_INVALID_HYPERCALL_CODE", 0xC0350002),
    TableEntry::new("STATUS_HV_INVALID_HYPERCALL_INPUT", 0xC0350003),
    TableEntry::new("STATUS_HV_INVALID_ALIGNMENT", 0xC0350004),
    TableEntry::new("STATUS_HV_INVALID_PARAMETER", 0xC0350005),
    TableEntry::new("STATUS_HV_ACCESS_DENIED", 0xC0350006),
    TableEntry::new("STATUS_HV_INVALID_PARTITION_STATE", 0xC0350007),
    TableEntry::new("STATUS_HV_OPERATION_DENIED", 0xC0350008),
    TableEntry::new("STATUS_HV_UNKNOWN_PROPERTY", 0xC0350009),
    TableEntry::new("STATUS_HV_PROPERTY_VALUE_OUT_OF_RANGE", 0xC035000A),
    TableEntry::new("STATUS_HV_INSUFFICIENT_MEMORY", 0xC035000B),
    TableEntry::new("STATUS_HV_PARTITION_TOO_DEEP", 0xC035000C),
    TableEntry::new("STATUS_HV_INVALID_PARTITION_ID", 0xC035000D),
    TableEntry::new("STATUS_HV_INVALID_VP_INDEX", 0xC035000E),
    TableEntry::new("STATUS_HV_INVALID_PORT_ID", 0xC0350011),
    TableEntry::new("STATUS_HV_INVALID_CONNECTION_ID", 0xC0350012),
    TableEntry::new("STATUS_HV_INSUFFICIENT_BUFFERS", 0xC0350013),
    TableEntry::new("STATUS_HV_NOT_ACKNOWLEDGED", 0xC0350014),
    TableEntry::new("STATUS_HV_INVALID_VP_STATE", 0xC0350015),
    TableEntry::new("STATUS_HV_ACKNOWLEDGED", 0xC0350016),
    TableEntry::new("STATUS_HV_INVALID_SAVE_RESTORE_STATE", 0xC0350017),
    TableEntry::new("STATUS_HV_INVALID_SYNIC_STATE", 0xC0350018),
    TableEntry::new("STATUS_HV_OBJECT_IN_USE", 0xC0350019),
    TableEntry::new("STATUS_HV_INVALID_PROXIMITY_DOMAIN_INFO", 0xC035001A),
    TableEntry::new("STATUS_HV_NO_DATA", 0xC035001B),
    TableEntry::new("STATUS_HV_INACTIVE", 0xC035001C),
    TableEntry::new("STATUS_HV_NO_RESOURCES", 0xC035001D),
    TableEntry::new("STATUS_HV_FEATURE_UNAVAILABLE", 0xC035001E),
    TableEntry::new("STATUS_HV_INSUFFICIENT_BUFFER", 0xC0350033),
    TableEntry::new("STATUS_HV_INSUFFICIENT_DEVICE_DOMAINS", 0xC0350038),
    TableEntry::new("STATUS_HV_CPUID_FEATURE_VALIDATION_ERROR", 0xC035003C),
    TableEntry::new("STATUS_HV_CPUID_XSAVE_FEATURE_VALIDATION_ERROR", 0xC035003D),
    TableEntry::new("STATUS_HV_PROCESSOR_STARTUP_TIMEOUT", 0xC035003E),
    TableEntry::new("STATUS_HV_SMX_ENABLED", 0xC035003F),
    TableEntry::new("STATUS_HV_INVALID_LP_INDEX", 0xC0350041),
    TableEntry::new("STATUS_HV_INVALID_REGISTER_VALUE", 0xC0350050),
    TableEntry::new("STATUS_HV_INVALID_VTL_STATE", 0xC0350051),
    TableEntry::new("STATUS_HV_NX_NOT_DETECTED", 0xC0350055),
    TableEntry::new("STATUS_HV_INVALID_DEVICE_ID", 0xC0350057),
    TableEntry::new("STATUS_HV_INVALID_DEVICE_STATE", 0xC0350058),
    TableEntry::new("STATUS_HV_PAGE_REQUEST_INVALID", 0xC0350060),
    TableEntry::new("STATUS_HV_INVALID_CPU_GROUP_ID", 0xC035006F),
    TableEntry::new("STATUS_HV_INVALID_CPU_GROUP_STATE", 0xC0350070),
    TableEntry::new("STATUS_HV_OPERATION_FAILED", 0xC0350071),
    TableEntry::new("STATUS_HV_NOT_ALLOWED_WITH_NESTED_VIRT_ACTIVE", 0xC0350072),
    TableEntry::new("STATUS_HV_INSUFFICIENT_ROOT_MEMORY", 0xC0350073),
    TableEntry::new("STATUS_HV_EVENT_BUFFER_ALREADY_FREED", 0xC0350074),
    TableEntry::new("STATUS_HV_INSUFFICIENT_CONTIGUOUS_MEMORY", 0xC0350075),
    TableEntry::new("STATUS_HV_NOT_PRESENT", 0xC0351000),

    // IPsec facility
    TableEntry::new("STATUS_IPSEC_BAD_SPI", 0xC0360001),
    TableEntry::new("STATUS_IPSEC_SA_LIFETIME_EXPIRED", 0xC0360002),
    TableEntry::new("STATUS_IPSEC_WRONG_SA", 0xC0360003),
    TableEntry::new("STATUS_IPSEC_REPLAY_CHECK_FAILED", 0xC0360004),
    TableEntry::new("STATUS_IPSEC_INVALID_PACKET", 0xC0360005),
    TableEntry::new("STATUS_IPSEC_INTEGRITY_CHECK_FAILED", 0xC0360006),
    TableEntry::new("STATUS_IPSEC_CLEAR_TEXT_DROP", 0xC0360007),
    TableEntry::new("STATUS_IPSEC_AUTH_FIREWALL_DROP", 0xC0360008),
    TableEntry::new("STATUS_IPSEC_THROTTLE_DROP", 0xC0360009),
    TableEntry::new("STATUS_IPSEC_DOSP_BLOCK", 0xC0368000),
    TableEntry::new("STATUS_IPSEC_DOSP_RECEIVED_MULTICAST", 0xC0368001),
    TableEntry::new("STATUS_IPSEC_DOSP_INVALID_PACKET", 0xC0368002),
    TableEntry::new("STATUS_IPSEC_DOSP_STATE_LOOKUP_FAILED", 0xC0368003),
    TableEntry::new("STATUS_IPSEC_DOSP_MAX_ENTRIES", 0xC0368004),
    TableEntry::new("STATUS_IPSEC_DOSP_KEYMOD_NOT_ALLOWED", 0xC0368005),
    TableEntry::new("STATUS_IPSEC_DOSP_MAX_PER_IP_RATELIMIT_QUEUES", 0xC0368006),

    // Virtualization facility
    TableEntry::new("STATUS_VID_DUPLICATE_HANDLER", 0xC0370001),
    TableEntry::new("STATUS_VID_TOO_MANY_HANDLERS", 0xC0370002),
    TableEntry::new("STATUS_VID_QUEUE_FULL", 0xC0370003),
    TableEntry::new("STATUS_VID_HANDLER_NOT_PRESENT", 0xC0370004),
    TableEntry::new("STATUS_VID_INVALID_OBJECT_NAME", 0xC0370005),
    TableEntry::new("STATUS_VID_PARTITION_NAME_TOO_LONG", 0xC0370006),
    TableEntry::new("STATUS_VID_MESSAGE_QUEUE_NAME_TOO_LONG", 0xC0370007),
    TableEntry::new("STATUS_VID_PARTITION_ALREADY_EXISTS", 0xC0370008),
    TableEntry::new("STATUS_VID_PARTITION_DOES_NOT_EXIST", 0xC0370009),
    TableEntry::new("STATUS_VID_PARTITION_NAME_NOT_FOUND", 0xC037000A),
    TableEntry::new("STATUS_VID_MESSAGE_QUEUE_ALREADY_EXISTS", 0xC037000B),
    TableEntry::new("STATUS_VID_EXCEEDED_MBP_ENTRY_MAP_LIMIT", 0xC037000C),
    TableEntry::new("STATUS_VID_MB_STILL_REFERENCED", 0xC037000D),
    TableEntry::new("STATUS_VID_CHILD_GPA_PAGE_SET_CORRUPTED", 0xC037000E),
    TableEntry::new("STATUS_VID_INVALID_NUMA_SETTINGS", 0xC037000F),
    TableEntry::new("STATUS_VID_INVALID_NUMA_NODE_INDEX", 0xC0370010),
    TableEntry::new("STATUS_VID_NOTIFICATION_QUEUE_ALREADY_ASSOCIATED", 0xC0370011),
    TableEntry::new("STATUS_VID_INVALID_MEMORY_BLOCK_HANDLE", 0xC0370012),
    TableEntry::new("STATUS_VID_PAGE_RANGE_OVERFLOW", 0xC0370013),
    TableEntry::new("STATUS_VID_INVALID_MESSAGE_QUEUE_HANDLE", 0xC0370014),
    TableEntry::new("STATUS_VID_INVALID_GPA_RANGE_HANDLE", 0xC0370015),
    TableEntry::new("STATUS_VID_NO_MEMORY_BLOCK_NOTIFICATION_QUEUE", 0xC0370016),
    TableEntry::new("STATUS_VID_MEMORY_BLOCK_LOCK_COUNT_EXCEEDED", 0xC0370017),
    TableEntry::new("STATUS_VID_INVALID_PPM_HANDLE", 0xC0370018),
    TableEntry::new("STATUS_VID_MBPS_ARE_LOCKED", 0xC0370019),
    TableEntry::new("STATUS_VID_MESSAGE_QUEUE_CLOSED", 0xC037001A),
    TableEntry::new("STATUS_VID_VIRTUAL_PROCESSOR_LIMIT_EXCEEDED", 0xC037001B),
    TableEntry::new("STATUS_VID_STOP_PENDING", 0xC037001C),
    TableEntry::new("STATUS_VID_INVALID_PROCESSOR_STATE", 0xC037001D),
    TableEntry::new("STATUS_VID_EXCEEDED_KM_CONTEXT_COUNT_LIMIT", 0xC037001E),
    TableEntry::new("STATUS_VID_KM_INTERFACE_ALREADY_INITIALIZED", 0xC037001F),
    TableEntry::new("STATUS_VID_MB_PROPERTY_ALREADY_SET_RESET", 0xC0370020),
    TableEntry::new("STATUS_VID_MMIO_RANGE_DESTROYED", 0xC0370021),
    TableEntry::new("STATUS_VID_INVALID_CHILD_GPA_PAGE_SET", 0xC0370022),
    TableEntry::new("STATUS_VID_RESERVE_PAGE_SET_IS_BEING_USED", 0xC0370023),
    TableEntry::new("STATUS_VID_RESERVE_PAGE_SET_TOO_SMALL", 0xC0370024),
    TableEntry::new("STATUS_VID_MBP_ALREADY_LOCKED_USING_RESERVED_PAGE", 0xC0370025),
    TableEntry::new("STATUS_VID_MBP_COUNT_EXCEEDED_LIMIT", 0xC0370026),
    TableEntry::new("STATUS_VID_SAVED_STATE_CORRUPT", 0xC0370027),
    TableEntry::new("STATUS_VID_SAVED_STATE_UNRECOGNIZED_ITEM", 0xC0370028),
    TableEntry::new("STATUS_VID_SAVED_STATE_INCOMPATIBLE", 0xC0370029),
    TableEntry::new("STATUS_VID_VTL_ACCESS_DENIED", 0xC037002A),

    // Volume manager facility
    TableEntry::new("STATUS_VOLMGR_DATABASE_FULL", 0xC0380001),
    TableEntry::new("STATUS_VOLMGR_DISK_CONFIGURATION_CORRUPTED", 0xC0380002),
    TableEntry::new("STATUS_VOLMGR_DISK_CONFIGURATION_NOT_IN_SYNC", 0xC0380003),
    TableEntry::new("STATUS_VOLMGR_PACK_CONFIG_UPDATE_FAILED", 0xC0380004),
    TableEntry::new("STATUS_VOLMGR_DISK_CONTAINS_NON_SIMPLE_VOLUME", 0xC0380005),
    TableEntry::new("STATUS_VOLMGR_DISK_DUPLICATE", 0xC0380006),
    TableEntry::new("STATUS_VOLMGR_DISK_DYNAMIC", 0xC0380007),
    TableEntry::new("STATUS_VOLMGR_DISK_ID_INVALID", 0xC0380008),
    TableEntry::new("STATUS_VOLMGR_DISK_INVALID", 0xC0380009),
    TableEntry::new("STATUS_VOLMGR_DISK_LAST_VOTER", 0xC038000A),
    TableEntry::new("STATUS_VOLMGR_DISK_LAYOUT_INVALID", 0xC038000B),
    TableEntry::new("STATUS_VOLMGR_DISK_LAYOUT_NON_BASIC_BETWEEN_BASIC_PARTITIONS", 0xC038000C),
    TableEntry::new("STATUS_VOLMGR_DISK_LAYOUT_NOT_CYLINDER_ALIGNED", 0xC038000D),
    TableEntry::new("STATUS_VOLMGR_DISK_LAYOUT_PARTITIONS_TOO_SMALL", 0xC038000E),
    TableEntry::new("STATUS_VOLMGR_DISK_LAYOUT_PRIMARY_BETWEEN_LOGICAL_PARTITIONS", 0xC038000F),
    TableEntry::new("STATUS_VOLMGR_DISK_LAYOUT_TOO_MANY_PARTITIONS", 0xC0380010),
    TableEntry::new("STATUS_VOLMGR_DISK_MISSING", 0xC0380011),
    TableEntry::new("STATUS_VOLMGR_DISK_NOT_EMPTY", 0xC0380012),
    TableEntry::new("STATUS_VOLMGR_DISK_NOT_ENOUGH_SPACE", 0xC0380013),
    TableEntry::new("STATUS_VOLMGR_DISK_REVECTORING_FAILED", 0xC0380014),
    TableEntry::new("STATUS_VOLMGR_DISK_SECTOR_SIZE_INVALID", 0xC0380015),
    TableEntry::new("STATUS_VOLMGR_DISK_SET_NOT_CONTAINED", 0xC0380016),
    TableEntry::new("STATUS_VOLMGR_DISK_USED_BY_MULTIPLE_MEMBERS", 0xC0380017),
    TableEntry::new("STATUS_VOLMGR_DISK_USED_BY_MULTIPLE_PLEXES", 0xC0380018),
    TableEntry::new("STATUS_VOLMGR_DYNAMIC_DISK_NOT_SUPPORTED", 0xC0380019),
    TableEntry::new("STATUS_VOLMGR_EXTENT_ALREADY_USED", 0xC038001A),
    TableEntry::new("STATUS_VOLMGR_EXTENT_NOT_CONTIGUOUS", 0xC038001B),
    TableEntry::new("STATUS_VOLMGR_EXTENT_NOT_IN_PUBLIC_REGION", 0xC038001C),
    TableEntry::new("STATUS_VOLMGR_EXTENT_NOT_SECTOR_ALIGNED", 0xC038001D),
    TableEntry::new("STATUS_VOLMGR_EXTENT_OVERLAPS_EBR_PARTITION", 0xC038001E),
    TableEntry::new("STATUS_VOLMGR_EXTENT_VOLUME_LENGTHS_DO_NOT_MATCH", 0xC038001F),
    TableEntry::new("STATUS_VOLMGR_FAULT_TOLERANT_NOT_SUPPORTED", 0xC0380020),
    TableEntry::new("STATUS_VOLMGR_INTERLEAVE_LENGTH_INVALID", 0xC0380021),
    TableEntry::new("STATUS_VOLMGR_MAXIMUM_REGISTERED_USERS", 0xC0380022),
    TableEntry::new("STATUS_VOLMGR_MEMBER_IN_SYNC", 0xC0380023),
    TableEntry::new("STATUS_VOLMGR_MEMBER_INDEX_DUPLICATE", 0xC0380024),
    TableEntry::new("STATUS_VOLMGR_MEMBER_INDEX_INVALID", 0xC0380025),
    TableEntry::new("STATUS_VOLMGR_MEMBER_MISSING", 0xC0380026),
    TableEntry::new("STATUS_VOLMGR_MEMBER_NOT_DETACHED", 0xC0380027),
    TableEntry::new("STATUS_VOLMGR_MEMBER_REGENERATING", 0xC0380028),
    TableEntry::new("STATUS_VOLMGR_ALL_DISKS_FAILED", 0xC0380029),
    TableEntry::new("STATUS_VOLMGR_NO_REGISTERED_USERS", 0xC038002A),
    TableEntry::new("STATUS_VOLMGR_NO_SUCH_USER", 0xC038002B),
    TableEntry::new("STATUS_VOLMGR_NOTIFICATION_RESET", 0xC038002C),
    TableEntry::new("STATUS_VOLMGR_NUMBER_OF_MEMBERS_INVALID", 0xC038002D),
    TableEntry::new("STATUS_VOLMGR_NUMBER_OF_PLEXES_INVALID", 0xC038002E),
    TableEntry::new("STATUS_VOLMGR_PACK_DUPLICATE", 0xC038002F),
    TableEntry::new("STATUS_VOLMGR_PACK_ID_INVALID", 0xC0380030),
    TableEntry::new("STATUS_VOLMGR_PACK_INVALID", 0xC0380031),
    TableEntry::new("STATUS_VOLMGR_PACK_NAME_INVALID", 0xC0380032),
    TableEntry::new("STATUS_VOLMGR_PACK_OFFLINE", 0xC0380033),
    TableEntry::new("STATUS_VOLMGR_PACK_HAS_QUORUM", 0xC0380034),
    TableEntry::new("STATUS_VOLMGR_PACK_WITHOUT_QUORUM", 0xC0380035),
    TableEntry::new("STATUS_VOLMGR_PARTITION_STYLE_INVALID", 0xC0380036),
    TableEntry::new("STATUS_VOLMGR_PARTITION_UPDATE_FAILED", 0xC0380037),
    TableEntry::new("STATUS_VOLMGR_PLEX_IN_SYNC", 0xC0380038),
    TableEntry::new("STATUS_VOLMGR_PLEX_INDEX_DUPLICATE", 0xC0380039),
    TableEntry::new("STATUS_VOLMGR_PLEX_INDEX_INVALID", 0xC038003A),
    TableEntry::new("STATUS_VOLMGR_PLEX_LAST_ACTIVE", 0xC038003B),
    TableEntry::new("STATUS_VOLMGR_PLEX_MISSING", 0xC038003C),
    TableEntry::new("STATUS_VOLMGR_PLEX_REGENERATING", 0xC038003D),
    TableEntry::new("STATUS_VOLMGR_PLEX_TYPE_INVALID", 0xC038003E),
    TableEntry::new("STATUS_VOLMGR_PLEX_NOT_RAID5", 0xC038003F),
    TableEntry::new("STATUS_VOLMGR_PLEX_NOT_SIMPLE", 0xC0380040),
    TableEntry::new("STATUS_VOLMGR_STRUCTURE_SIZE_INVALID", 0xC0380041),
    TableEntry::new("STATUS_VOLMGR_TOO_MANY_NOTIFICATION_REQUESTS", 0xC0380042),
    TableEntry::new("STATUS_VOLMGR_TRANSACTION_IN_PROGRESS", 0xC0380043),
    TableEntry::new("STATUS_VOLMGR_UNEXPECTED_DISK_LAYOUT_CHANGE", 0xC0380044),
    TableEntry::new("STATUS_VOLMGR_VOLUME_CONTAINS_MISSING_DISK", 0xC0380045),
    TableEntry::new("STATUS_VOLMGR_VOLUME_ID_INVALID", 0xC0380046),
    TableEntry::new("STATUS_VOLMGR_VOLUME_LENGTH_INVALID", 0xC0380047),
    TableEntry::new("STATUS_VOLMGR_VOLUME_LENGTH_NOT_SECTOR_SIZE_MULTIPLE", 0xC0380048),
    TableEntry::new("STATUS_VOLMGR_VOLUME_NOT_MIRRORED", 0xC0380049),
    TableEntry::new("STATUS_VOLMGR_VOLUME_NOT_RETAINED", 0xC038004A),
    TableEntry::new("STATUS_VOLMGR_VOLUME_OFFLINE", 0xC038004B),
    TableEntry::new("STATUS_VOLMGR_VOLUME_RETAINED", 0xC038004C),
    TableEntry::new("STATUS_VOLMGR_NUMBER_OF_EXTENTS_INVALID", 0xC038004D),
    TableEntry::new("STATUS_VOLMGR_DIFFERENT_SECTOR_SIZE", 0xC038004E),
    TableEntry::new("STATUS_VOLMGR_BAD_BOOT_DISK", 0xC038004F),
    TableEntry::new("STATUS_VOLMGR_PACK_CONFIG_OFFLINE", 0xC0380050),
    TableEntry::new("STATUS_VOLMGR_PACK_CONFIG_ONLINE", 0xC0380051),
    TableEntry::new("STATUS_VOLMGR_NOT_PRIMARY_PACK", 0xC0380052),
    TableEntry::new("STATUS_VOLMGR_PACK_LOG_UPDATE_FAILED", 0xC0380053),
    TableEntry::new("STATUS_VOLMGR_NUMBER_OF_DISKS_IN_PLEX_INVALID", 0xC0380054),
    TableEntry::new("STATUS_VOLMGR_NUMBER_OF_DISKS_IN_MEMBER_INVALID", 0xC0380055),
    TableEntry::new("STATUS_VOLMGR_VOLUME_MIRRORED", 0xC0380056),
    TableEntry::new("STATUS_VOLMGR_PLEX_NOT_SIMPLE_SPANNED", 0xC0380057),
    TableEntry::new("STATUS_VOLMGR_NO_VALID_LOG_COPIES", 0xC0380058),
    TableEntry::new("STATUS_VOLMGR_PRIMARY_PACK_PRESENT", 0xC0380059),
    TableEntry::new("STATUS_VOLMGR_NUMBER_OF_DISKS_INVALID", 0xC038005A),
    TableEntry::new("STATUS_VOLMGR_MIRROR_NOT_SUPPORTED", 0xC038005B),
    TableEntry::new("STATUS_VOLMGR_RAID5_NOT_SUPPORTED", 0xC038005C),

    // Boot configuration data facility
    TableEntry::new("STATUS_BCD_TOO_MANY_ELEMENTS", 0xC0390002),

    // Virtual disk facility
    TableEntry::new("STATUS_VHD_DRIVE_FOOTER_MISSING", 0xC03A0001),
    TableEntry::new("STATUS_VHD_DRIVE_FOOTER_CHECKSUM_MISMATCH", 0xC03A0002),
    TableEntry::new("STATUS_VHD_DRIVE_FOOTER_CORRUPT", 0xC03A0003),
    TableEntry::new("STATUS_VHD_FORMAT_UNKNOWN", 0xC03A0004),
    TableEntry::new("STATUS_VHD_FORMAT_UNSUPPORTED_VERSION", 0xC03A0005),
    TableEntry::new("STATUS_VHD_SPARSE_HEADER_CHECKSUM_MISMATCH", 0xC03A0006),
    TableEntry::new("STATUS_VHD_SPARSE_HEADER_UNSUPPORTED_VERSION", 0xC03A0007),
    TableEntry::new("STATUS_VHD_SPARSE_HEADER_CORRUPT", 0xC03A0008),
    TableEntry::new("STATUS_VHD_BLOCK_ALLOCATION_FAILURE", 0xC03A0009),
    TableEntry::new("STATUS_VHD_BLOCK_ALLOCATION_TABLE_CORRUPT", 0xC03A000A),
    TableEntry::new("STATUS_VHD_INVALID_BLOCK_SIZE", 0xC03A000B),
    TableEntry::new("STATUS_VHD_BITMAP_MISMATCH", 0xC03A000C),
    TableEntry::new("STATUS_VHD_PARENT_VHD_NOT_FOUND", 0xC03A000D),
    TableEntry::new("STATUS_VHD_CHILD_PARENT_ID_MISMATCH", 0xC03A000E),
    TableEntry::new("STATUS_VHD_CHILD_PARENT_TIMESTAMP_MISMATCH", 0xC03A000F),
    TableEntry::new("STATUS_VHD_METADATA_READ_FAILURE", 0xC03A0010),
    TableEntry::new("STATUS_VHD_METADATA_WRITE_FAILURE", 0xC03A0011),
    TableEntry::new("STATUS_VHD_INVALID_SIZE", 0xC03A0012),
    TableEntry::new("STATUS_VHD_INVALID_FILE_SIZE", 0xC03A0013),
    TableEntry::new("STATUS_VIRTDISK_PROVIDER_NOT_FOUND", 0xC03A0014),
    TableEntry::new("STATUS_VIRTDISK_NOT_VIRTUAL_DISK", 0xC03A0015),
    TableEntry::new("STATUS_VHD_PARENT_VHD_ACCESS_DENIED", 0xC03A0016),
    TableEntry::new("STATUS_VHD_CHILD_PARENT_SIZE_MISMATCH", 0xC03A0017),
    TableEntry::new("STATUS_VHD_DIFFERENCING_CHAIN_CYCLE_DETECTED", 0xC03A0018),
    TableEntry::new("STATUS_VHD_DIFFERENCING_CHAIN_ERROR_IN_PARENT", 0xC03A0019),
    TableEntry::new("STATUS_VIRTUAL_DISK_LIMITATION", 0xC03A001A),
    TableEntry::new("STATUS_VHD_INVALID_TYPE", 0xC03A001B),
    TableEntry::new("STATUS_VHD_INVALID_STATE", 0xC03A001C),
    TableEntry::new("STATUS_VIRTDISK_UNSUPPORTED_DISK_SECTOR_SIZE", 0xC03A001D),
    TableEntry::new("STATUS_VIRTDISK_DISK_ALREADY_OWNED", 0xC03A001E),
    TableEntry::new("STATUS_VIRTDISK_DISK_ONLINE_AND_WRITABLE", 0xC03A001F),
    TableEntry::new("STATUS_CTLOG_TRACKING_NOT_INITIALIZED", 0xC03A0020),
    TableEntry::new("STATUS_CTLOG_LOGFILE_SIZE_EXCEEDED_MAXSIZE", 0xC03A0021),
    TableEntry::new("STATUS_CTLOG_VHD_CHANGED_OFFLINE", 0xC03A0022),
    TableEntry::new("STATUS_CTLOG_INVALID_TRACKING_STATE", 0xC03A0023),
    TableEntry::new("STATUS_CTLOG_INCONSISTENT_TRACKING_FILE", 0xC03A0024),
    TableEntry::new("STATUS_VHD_METADATA_FULL", 0xC03A0025),
    TableEntry::new("STATUS_VHD_INVALID_CHANGE_TRACKING_ID", 0xC03A0026),
    TableEntry::new("STATUS_VHD_CHANGE_TRACKING_DISABLED", 0xC03A0027),
    TableEntry::new("STATUS_VHD_MISSING_CHANGE_TRACKING_INFORMATION", 0xC03A0030),

    // Resume key filter facility
    TableEntry::new("STATUS_RKF_KEY_NOT_FOUND", 0xC0400001),
    TableEntry::new("STATUS_RKF_DUPLICATE_KEY", 0xC0400002),
    TableEntry::new("STATUS_RKF_BLOB_FULL", 0xC0400003),
    TableEntry::new("STATUS_RKF_STORE_FULL", 0xC0400004),
    TableEntry::new("STATUS_RKF_FILE_BLOCKED", 0xC0400005),
    TableEntry::new("STATUS_RKF_ACTIVE_KEY", 0xC0400006),

    // RDBSS facility
    TableEntry::new("STATUS_RDBSS_RESTART_OPERATION", 0xC0410001),
    TableEntry::new("STATUS_RDBSS_CONTINUE_OPERATION", 0xC0410002),
    TableEntry::new("STATUS_RDBSS_POST_OPERATION", 0xC0410003),
    TableEntry::new("STATUS_RDBSS_RETRY_LOOKUP", 0xC0410004),

    // Bluetooth attribute protocol facility
    TableEntry::new("STATUS_BTH_ATT_INVALID_HANDLE", 0xC0420001),
    TableEntry::new("STATUS_BTH_ATT_READ_NOT_PERMITTED", 0xC0420002),
    TableEntry::new("STATUS_BTH_ATT_WRITE_NOT_PERMITTED", 0xC0420003),
    TableEntry::new("STATUS_BTH_ATT_INVALID_PDU", 0xC0420004),
    TableEntry::new("STATUS_BTH_ATT_INSUFFICIENT_AUTHENTICATION", 0xC0420005),
    TableEntry::new("STATUS_BTH_ATT_REQUEST_NOT_SUPPORTED", 0xC0420006),
    TableEntry::new("STATUS_BTH_ATT_INVALID_OFFSET", 0xC0420007),
    TableEntry::new("STATUS_BTH_ATT_INSUFFICIENT_AUTHORIZATION", 0xC0420008),
    TableEntry::new("STATUS_BTH_ATT_PREPARE_QUEUE_FULL", 0xC0420009),
    TableEntry::new("STATUS_BTH_ATT_ATTRIBUTE_NOT_FOUND", 0xC042000A),
    TableEntry::new("STATUS_BTH_ATT_ATTRIBUTE_NOT_LONG", 0xC042000B),
    TableEntry::new("STATUS_BTH_ATT_INSUFFICIENT_ENCRYPTION_KEY_SIZE", 0xC042000C),
    TableEntry::new("STATUS_BTH_ATT_INVALID_ATTRIBUTE_VALUE_LENGTH", 0xC042000D),
    TableEntry::new("STATUS_BTH_ATT_UNLIKELY", 0xC042000E),
    TableEntry::new("STATUS_BTH_ATT_INSUFFICIENT_ENCRYPTION", 0xC042000F),
    TableEntry::new("STATUS_BTH_ATT_UNSUPPORTED_GROUP_TYPE", 0xC0420010),
    TableEntry::new("STATUS_BTH_ATT_INSUFFICIENT_RESOURCES", 0xC0420011),
    TableEntry::new("STATUS_BTH_ATT_UNKNOWN_ERROR", 0xC0421000),

    // Secure boot facility
    TableEntry::new("STATUS_SECUREBOOT_ROLLBACK_DETECTED", 0xC0430001),
    TableEntry::new("STATUS_SECUREBOOT_POLICY_VIOLATION", 0xC0430002),
    TableEntry::new("STATUS_SECUREBOOT_INVALID_POLICY", 0xC0430003),
    TableEntry::new("STATUS_SECUREBOOT_POLICY_PUBLISHER_NOT_FOUND", 0xC0430004),
    TableEntry::new("STATUS_SECUREBOOT_POLICY_NOT_SIGNED", 0xC0430005),
    TableEntry::new("STATUS_SECUREBOOT_FILE_REPLACED", 0xC0430007),
    TableEntry::new("STATUS_SECUREBOOT_POLICY_NOT_AUTHORIZED", 0xC0430008),
    TableEntry::new("STATUS_SECUREBOOT_POLICY_UNKNOWN", 0xC0430009),
    TableEntry::new("STATUS_SECUREBOOT_POLICY_MISSING_ANTIROLLBACKVERSION", 0xC043000A),
    TableEntry::new("STATUS_SECUREBOOT_PLATFORM_ID_MISMATCH", 0xC043000B),
    TableEntry::new("STATUS_SECUREBOOT_POLICY_ROLLBACK_DETECTED", 0xC043000C),
    TableEntry::new("STATUS_SECUREBOOT_POLICY_UPGRADE_MISMATCH", 0xC043000D),
    TableEntry::new("STATUS_SECUREBOOT_REQUIRED_POLICY_FILE_MISSING", 0xC043000E),
    TableEntry::new("STATUS_SECUREBOOT_NOT_BASE_POLICY", 0xC043000F),
    TableEntry::new("STATUS_SECUREBOOT_NOT_SUPPLEMENTAL_POLICY", 0xC0430010),

    // Audio kernel facility
    TableEntry::new("STATUS_AUDIO_ENGINE_NODE_NOT_FOUND", 0xC0440001),
    TableEntry::new("STATUS_HDAUDIO_EMPTY_CONNECTION_LIST", 0xC0440002),
    TableEntry::new("STATUS_HDAUDIO_CONNECTION_LIST_NOT_SUPPORTED", 0xC0440003),
    TableEntry::new("STATUS_HDAUDIO_NO_LOGICAL_DEVICES_CREATED", 0xC0440005),
    TableEntry::new("STATUS_HDAUDIO_NULL_LINKED_LIST_ENTRY", 0xC0440006),

    // Virtual secure mode facility
    TableEntry::new("STATUS_VSM_NOT_INITIALIZED", 0xC0450000),
    TableEntry::new("STATUS_VSM_DMA_PROTECTION_NOT_IN_USE", 0xC0450001),

    // I/O ring facility
    TableEntry::new("STATUS_IORING_REQUIRED_FLAG_NOT_SUPPORTED", 0xC0460001),
    TableEntry::new("STATUS_IORING_SUBMISSION_QUEUE_FULL", 0xC0460002),
    TableEntry::new("STATUS_IORING_VERSION_NOT_SUPPORTED", 0xC0460003),
    TableEntry::new("STATUS_IORING_SUBMISSION_QUEUE_TOO_BIG", 0xC0460004),
    TableEntry::new("STATUS_IORING_COMPLETION_QUEUE_TOO_BIG", 0xC0460005),
    TableEntry::new("STATUS_IORING_SUBMIT_IN_PROGRESS", 0xC0460006),
    TableEntry::new("STATUS_IORING_CORRUPT", 0xC0460007),
    TableEntry::new("STATUS_IORING_COMPLETION_QUEUE_TOO_FULL", 0xC0460008),

    // Volume snapshot facility
    TableEntry::new("STATUS_VOLSNAP_BOOTFILE_NOT_VALID", 0xC0500003),
    TableEntry::new("STATUS_VOLSNAP_ACTIVATION_TIMEOUT", 0xC0500004),
    TableEntry::new("STATUS_VOLSNAP_NO_BYPASSIO_WITH_SNAPSHOT", 0xC0500005),

    // Shared VHDX facility
    TableEntry::new("STATUS_SVHDX_ERROR_STORED", 0xC05C0000),
    TableEntry::new("STATUS_SVHDX_ERROR_NOT_AVAILABLE", 0xC05CFF00),
    TableEntry::new("STATUS_SVHDX_UNIT_ATTENTION_AVAILABLE", 0xC05CFF01),
    TableEntry::new("STATUS_SVHDX_UNIT_ATTENTION_CAPACITY_DATA_CHANGED", 0xC05CFF02),
    TableEntry::new("STATUS_SVHDX_UNIT_ATTENTION_RESERVATIONS_PREEMPTED", 0xC05CFF03),
    TableEntry::new("STATUS_SVHDX_UNIT_ATTENTION_RESERVATIONS_RELEASED", 0xC05CFF04),
    TableEntry::new("STATUS_SVHDX_UNIT_ATTENTION_REGISTRATIONS_PREEMPTED", 0xC05CFF05),
    TableEntry::new("STATUS_SVHDX_UNIT_ATTENTION_OPERATING_DEFINITION_CHANGED", 0xC05CFF06),
    TableEntry::new("STATUS_SVHDX_RESERVATION_CONFLICT", 0xC05CFF07),
    TableEntry::new("STATUS_SVHDX_WRONG_FILE_TYPE", 0xC05CFF08),
    TableEntry::new("STATUS_SVHDX_VERSION_MISMATCH", 0xC05CFF09),
    TableEntry::new("STATUS_VHD_SHARED", 0xC05CFF0A),
    TableEntry::new("STATUS_SVHDX_NO_INITIATOR", 0xC05CFF0B),
    TableEntry::new("STATUS_VHDSET_BACKING_STORAGE_NOT_FOUND", 0xC05CFF0C),

    // SMB facility
    TableEntry::new("STATUS_SMB_NO_PREAUTH_INTEGRITY_HASH_OVERLAP", 0xC05D0000),
    TableEntry::new("STATUS_SMB_BAD_CLUSTER_DIALECT", 0xC05D0001),
    TableEntry::new("STATUS_SMB_GUEST_LOGON_BLOCKED", 0xC05D0002),

    // Storage spaces facility
    TableEntry::new("STATUS_SPACES_FAULT_DOMAIN_TYPE_INVALID", 0xC0E70001),
    TableEntry::new("STATUS_SPACES_RESILIENCY_TYPE_INVALID", 0xC0E70003),
    TableEntry::new("STATUS_SPACES_DRIVE_SECTOR_SIZE_INVALID", 0xC0E70004),
    TableEntry::new("STATUS_SPACES_DRIVE_REDUNDANCY_INVALID", 0xC0E70006),
    TableEntry::new("STATUS_SPACES_NUMBER_OF_DATA_COPIES_INVALID", 0xC0E70007),
    TableEntry::new("STATUS_SPACES_INTERLEAVE_LENGTH_INVALID", 0xC0E70009),
    TableEntry::new("STATUS_SPACES_NUMBER_OF_COLUMNS_INVALID", 0xC0E7000A),
    TableEntry::new("STATUS_SPACES_NOT_ENOUGH_DRIVES", 0xC0E7000B),
    TableEntry::new("STATUS_SPACES_EXTENDED_ERROR", 0xC0E7000C),
    TableEntry::new("STATUS_SPACES_PROVISIONING_TYPE_INVALID", 0xC0E7000D),
    TableEntry::new("STATUS_SPACES_ALLOCATION_SIZE_INVALID", 0xC0E7000E),
    TableEntry::new("STATUS_SPACES_ENCLOSURE_AWARE_INVALID", 0xC0E7000F),
    TableEntry::new("STATUS_SPACES_WRITE_CACHE_SIZE_INVALID", 0xC0E70010),
    TableEntry::new("STATUS_SPACES_NUMBER_OF_GROUPS_INVALID", 0xC0E70011),
    TableEntry::new("STATUS_SPACES_DRIVE_OPERATIONAL_STATE_INVALID", 0xC0E70012),
    TableEntry::new("STATUS_SPACES_UPDATE_COLUMN_STATE", 0xC0E70013),
    TableEntry::new("STATUS_SPACES_MAP_REQUIRED", 0xC0E70014),
    TableEntry::new("STATUS_SPACES_UNSUPPORTED_VERSION", 0xC0E70015),
    TableEntry::new("STATUS_SPACES_CORRUPT_METADATA", 0xC0E70016),
    TableEntry::new("STATUS_SPACES_DRT_FULL", 0xC0E70017),
    TableEntry::new("STATUS_SPACES_INCONSISTENCY", 0xC0E70018),
    TableEntry::new("STATUS_SPACES_LOG_NOT_READY", 0xC0E70019),
    TableEntry::new("STATUS_SPACES_NO_REDUNDANCY", 0xC0E7001A),
    TableEntry::new("STATUS_SPACES_DRIVE_NOT_READY", 0xC0E7001B),
    TableEntry::new("STATUS_SPACES_DRIVE_SPLIT", 0xC0E7001C),
    TableEntry::new("STATUS_SPACES_DRIVE_LOST_DATA", 0xC0E7001D),
    TableEntry::new("STATUS_SPACES_ENTRY_INCOMPLETE", 0xC0E7001E),
    TableEntry::new("STATUS_SPACES_ENTRY_INVALID", 0xC0E7001F),
    TableEntry::new("STATUS_SPACES_MARK_DIRTY", 0xC0E70020),

    // Security core facility
    TableEntry::new("STATUS_SECCORE_INVALID_COMMAND", 0xC0E80000),

    // System integrity facility
    TableEntry::new("STATUS_SYSTEM_INTEGRITY_ROLLBACK_DETECTED", 0xC0E90001),
    TableEntry::new("STATUS_SYSTEM_INTEGRITY_POLICY_VIOLATION", 0xC0E90002),
    TableEntry::new("STATUS_SYSTEM_INTEGRITY_INVALID_POLICY", 0xC0E90003),
    TableEntry::new("STATUS_SYSTEM_INTEGRITY_POLICY_NOT_SIGNED", 0xC0E90004),
    TableEntry::new("STATUS_SYSTEM_INTEGRITY_TOO_MANY_POLICIES", 0xC0E90005),
    TableEntry::new("STATUS_SYSTEM_INTEGRITY_SUPPLEMENTAL_POLICY_NOT_AUTHORIZED", 0xC0E90006),
    TableEntry::new("STATUS_SYSTEM_INTEGRITY_REPUTATION_MALICIOUS", 0xC0E90007),
    TableEntry::new("STATUS_SYSTEM_INTEGRITY_REPUTATION_PUA", 0xC0E90008),
    TableEntry::new("STATUS_SYSTEM_INTEGRITY_REPUTATION_DANGEROUS_EXT", 0xC0E90009),
    TableEntry::new("STATUS_SYSTEM_INTEGRITY_REPUTATION_OFFLINE", 0xC0E9000A),
    TableEntry::new("STATUS_SYSTEM_INTEGRITY_REPUTATION_UNFRIENDLY_FILE", 0xC0E9000B),
    TableEntry::new("STATUS_SYSTEM_INTEGRITY_REPUTATION_UNATTAINABLE", 0xC0E9000C),

    // Licensing facility
    TableEntry::new("STATUS_NO_APPLICABLE_APP_LICENSES_FOUND", 0xC0EA0001),
    TableEntry::new("STATUS_CLIP_LICENSE_NOT_FOUND", 0xC0EA0002),
    TableEntry::new("STATUS_CLIP_DEVICE_LICENSE_MISSING", 0xC0EA0003),
    TableEntry::new("STATUS_CLIP_LICENSE_INVALID_SIGNATURE", 0xC0EA0004),
    TableEntry::new("STATUS_CLIP_KEYHOLDER_LICENSE_MISSING_OR_INVALID", 0xC0EA0005),
    TableEntry::new("STATUS_CLIP_LICENSE_EXPIRED", 0xC0EA0006),
    TableEntry::new("STATUS_CLIP_LICENSE_SIGNED_BY_UNKNOWN_SOURCE", 0xC0EA0007),
    TableEntry::new("STATUS_CLIP_LICENSE_NOT_SIGNED", 0xC0EA0008),
    TableEntry::new("STATUS_CLIP_LICENSE_HARDWARE_ID_OUT_OF_TOLERANCE", 0xC0EA0009),
    TableEntry::new("STATUS_CLIP_LICENSE_DEVICE_ID_MISMATCH", 0xC0EA000A),

    // Platform manifest facility
    TableEntry::new("STATUS_PLATFORM_MANIFEST_NOT_AUTHORIZED", 0xC0EB0001),
    TableEntry::new("STATUS_PLATFORM_MANIFEST_INVALID", 0xC0EB0002),
    TableEntry::new("STATUS_PLATFORM_MANIFEST_FILE_NOT_AUTHORIZED", 0xC0EB0003),
    TableEntry::new("STATUS_PLATFORM_MANIFEST_CATALOG_NOT_AUTHORIZED", 0xC0EB0004),
    TableEntry::new("STATUS_PLATFORM_MANIFEST_BINARY_ID_NOT_FOUND", 0xC0EB0005),
    TableEntry::new("STATUS_PLATFORM_MANIFEST_NOT_ACTIVE", 0xC0EB0006),
    TableEntry::new("STATUS_PLATFORM_MANIFEST_NOT_SIGNED", 0xC0EB0007),

    // Application execution facility
    TableEntry::new("STATUS_APPEXEC_CONDITION_NOT_SATISFIED", 0xC0EC0000),
    TableEntry::new("STATUS_APPEXEC_HANDLE_INVALIDATED", 0xC0EC0001),
    TableEntry::new("STATUS_APPEXEC_INVALID_HOST_GENERATION", 0xC0EC0002),
    TableEntry::new("STATUS_APPEXEC_UNEXPECTED_PROCESS_REGISTRATION", 0xC0EC0003),
    TableEntry::new("STATUS_APPEXEC_INVALID_HOST_STATE", 0xC0EC0004),
    TableEntry::new("STATUS_APPEXEC_NO_DONOR", 0xC0EC0005),
    TableEntry::new("STATUS_APPEXEC_HOST_ID_MISMATCH", 0xC0EC0006),
    TableEntry::new("STATUS_APPEXEC_UNKNOWN_USER", 0xC0EC0007),
];
