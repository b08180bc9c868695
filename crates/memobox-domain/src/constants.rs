//! Domain layer constants
//!
//! Contains constants that are part of the state contract itself.
//! Infrastructure-specific constants (config file names, env prefixes)
//! live in `memobox-infrastructure`.

// ============================================================================
// STATE RECORD CONSTANTS
// ============================================================================

/// Fixed key selecting the singleton state record
///
/// The whole system manages exactly one logical record; every read and
/// write targets this key. The value is part of the persisted layout and
/// must not change across deployments.
pub const STATE_RECORD_KEY: &str = "main_memobox_data_v1";

/// Persisted column/field name holding the record key
pub const KEY_FIELD: &str = "data_key";

/// Persisted column/field name holding the application payload
pub const PAYLOAD_FIELD: &str = "app_data";
