//! Workspace-wide constants.

/// Default config file name looked up by hosts.
pub const CONFIG_FILE_NAME: &str = "webline.toml";

/// Environment variable read by [`crate::tracing::init_tracing`].
pub const LOG_ENV_VAR: &str = "WEBLINE_LOG";

/// Filter used when `WEBLINE_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Files above this size are skipped by the scan pipeline. 1MB.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 1_048_576;
