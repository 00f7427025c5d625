// ModSieve - platform/config.rs
//
// Platform config-directory resolution and config.toml loading with startup
// validation. Paths that were hardcoded in earlier tooling (launcher
// instance, log names, output directory, tag filter) are all injected from
// here or from CLI flags; nothing in the pipeline reads module-level paths.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance.

use crate::util::constants;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Resolved platform paths for ModSieve configuration.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Configuration directory (e.g. ~/.config/modsieve/ or %APPDATA%\ModSieve\)
    pub config_dir: PathBuf,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// Falls back to the current directory if platform dirs cannot be
    /// determined.
    pub fn resolve() -> Self {
        if let Some(proj_dirs) = ProjectDirs::from("", "", constants::APP_ID) {
            let config_dir = proj_dirs.config_dir().to_path_buf();
            tracing::debug!(config = %config_dir.display(), "Platform paths resolved");
            Self { config_dir }
        } else {
            tracing::warn!("Could not determine platform directories, using current directory");
            Self {
                config_dir: PathBuf::from("."),
            }
        }
    }
}

// =============================================================================
// config.toml loading and validation
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored for forward compatibility -- a newer
/// config file can be used with an older binary without crashing.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[instance]` section.
    pub instance: InstanceSection,
    /// `[triage]` section.
    pub triage: TriageSection,
    /// `[output]` section.
    pub output: OutputSection,
    /// `[logging]` section.
    pub logging: LoggingSection,
}

/// `[instance]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct InstanceSection {
    /// Minecraft instance directory (the one containing `logs/`).
    pub dir: Option<String>,
    /// Log file stems to parse (default: latest, debug).
    pub log_names: Option<Vec<String>>,
}

/// `[triage]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct TriageSection {
    /// Case-insensitive substring used to tag mod-specific lines.
    pub tag_filter: Option<String>,
}

/// `[output]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct OutputSection {
    /// Directory where report artifacts are written.
    pub dir: Option<String>,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
}

/// Validated application configuration derived from `config.toml`.
///
/// Invalid values produce actionable warnings and fall back to defaults.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Minecraft instance directory, if configured.
    pub instance_dir: Option<PathBuf>,

    /// Log file stems to parse within `<instance>/logs/`.
    pub log_names: Vec<String>,

    /// Tag filter, normalised: empty strings become None.
    pub tag_filter: Option<String>,

    /// Output directory for report artifacts.
    pub output_dir: PathBuf,

    /// Logging level string (applied before tracing init).
    pub log_level: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            instance_dir: None,
            log_names: constants::DEFAULT_LOG_NAMES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            tag_filter: None,
            output_dir: PathBuf::from(constants::DEFAULT_OUTPUT_DIR),
            log_level: None,
        }
    }
}

/// Load and validate `config.toml` from the given config directory.
///
/// Returns `AppConfig` with validated values and a list of non-fatal
/// warnings. If the file does not exist, returns defaults with no warnings
/// (first-run). If the file is unparseable, returns defaults with an error
/// warning -- the tool still runs but the user is informed.
pub fn load_config(config_dir: &Path) -> (AppConfig, Vec<String>) {
    let config_path = config_dir.join(constants::CONFIG_FILE_NAME);

    let mut warnings: Vec<String> = Vec::new();

    if !config_path.exists() {
        tracing::debug!(path = %config_path.display(), "No config.toml found; using defaults");
        return (AppConfig::default(), warnings);
    }

    let content = match std::fs::read_to_string(&config_path) {
        Ok(c) => c,
        Err(e) => {
            let msg = format!(
                "Could not read config file '{}': {e}. Using defaults.",
                config_path.display()
            );
            tracing::warn!("{}", msg);
            warnings.push(msg);
            return (AppConfig::default(), warnings);
        }
    };

    let raw: RawConfig = match toml::from_str(&content) {
        Ok(r) => r,
        Err(e) => {
            let msg = format!(
                "Failed to parse config file '{}': {e}. Using defaults.",
                config_path.display()
            );
            tracing::warn!("{}", msg);
            warnings.push(msg);
            return (AppConfig::default(), warnings);
        }
    };

    tracing::info!(path = %config_path.display(), "Loaded config.toml");

    let mut config = AppConfig::default();

    // -- Instance: dir --
    if let Some(ref dir) = raw.instance.dir {
        if dir.is_empty() {
            warnings.push("[instance] dir is empty. Ignoring.".to_string());
        } else {
            config.instance_dir = Some(PathBuf::from(dir));
        }
    }

    // -- Instance: log_names --
    if let Some(ref names) = raw.instance.log_names {
        let cleaned: Vec<String> = names
            .iter()
            .filter(|n| !n.is_empty())
            .cloned()
            .collect();
        if cleaned.is_empty() {
            warnings.push(format!(
                "[instance] log_names is empty. Using defaults ({}).",
                constants::DEFAULT_LOG_NAMES.join(", ")
            ));
        } else {
            config.log_names = cleaned;
        }
    }

    // -- Triage: tag_filter --
    if let Some(ref filter) = raw.triage.tag_filter {
        if filter.is_empty() {
            // An empty filter would tag every line; treat as unset.
        } else if filter.len() > constants::MAX_TAG_FILTER_LENGTH {
            warnings.push(format!(
                "[triage] tag_filter is {} chars, exceeds maximum of {}. Ignoring.",
                filter.len(),
                constants::MAX_TAG_FILTER_LENGTH
            ));
        } else {
            config.tag_filter = Some(filter.clone());
        }
    }

    // -- Output: dir --
    if let Some(ref dir) = raw.output.dir {
        if dir.is_empty() {
            warnings.push(format!(
                "[output] dir is empty. Using default ({}).",
                constants::DEFAULT_OUTPUT_DIR
            ));
        } else {
            config.output_dir = PathBuf::from(dir);
        }
    }

    // -- Logging: level --
    if let Some(ref level) = raw.logging.level {
        let valid = ["error", "warn", "info", "debug", "trace"];
        if valid.contains(&level.to_lowercase().as_str()) {
            config.log_level = Some(level.clone());
        } else {
            warnings.push(format!(
                "[logging] level = \"{level}\" is not recognised. \
                 Valid values: error, warn, info, debug, trace. Using default (info).",
            ));
        }
    }

    if !warnings.is_empty() {
        tracing::warn!(count = warnings.len(), "Config validation produced warnings");
    }

    (config, warnings)
}
