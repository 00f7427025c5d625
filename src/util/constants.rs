// ModSieve - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "ModSieve";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "ModSieve";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Log file layout (Minecraft launcher instance conventions)
// =============================================================================

/// Subdirectory of a Minecraft instance that holds its log files.
pub const LOGS_SUBDIR: &str = "logs";

/// Log file stems parsed by default: the launcher writes `latest.log`
/// (INFO and above) and `debug.log` (everything).
pub const DEFAULT_LOG_NAMES: &[&str] = &["latest", "debug"];

/// Extension of the log files named by `DEFAULT_LOG_NAMES`.
pub const LOG_FILE_EXTENSION: &str = "log";

// =============================================================================
// Parsing limits
// =============================================================================

/// Log file size in bytes above which a "large file" warning is logged.
/// The parse still proceeds; the segmenter itself imposes no length caps.
pub const LARGE_LOG_THRESHOLD_BYTES: u64 = 256 * 1024 * 1024; // 256 MB

/// Maximum length of a tag filter string. Longer values are almost
/// certainly a pasted log line rather than a mod name.
pub const MAX_TAG_FILTER_LENGTH: usize = 256;

// =============================================================================
// Output artifacts
// =============================================================================

/// Default output directory (relative to the working directory) when neither
/// the CLI nor config.toml names one.
pub const DEFAULT_OUTPUT_DIR: &str = "log_output";

/// Artifact filename suffixes, appended to the log file stem.
pub const ENTRIES_REPORT_SUFFIX: &str = "_errors_warnings.md";
pub const TAGGED_REPORT_SUFFIX: &str = "_tagged_messages.md";
pub const JSON_EXPORT_SUFFIX: &str = "_parsed_data.json";

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

// =============================================================================
// Configuration
// =============================================================================

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";
