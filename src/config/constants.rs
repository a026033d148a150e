//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8059;

/// First id handed out by a store
pub const INITIAL_ENTITY_ID: i64 = 1;
