//! Configuration system for the `Teamboard` client.
//!
//! Supports layered configuration with the following priority (highest first):
//! 1. CLI arguments
//! 2. Environment variables (via clap `env` attribute)
//! 3. TOML config file (`~/.config/teamboard/config.toml`)
//! 4. Compiled defaults
//!
//! Missing config file is not an error (defaults are used). An explicit
//! `--config` path that doesn't exist is an error.

use std::path::PathBuf;
use std::time::Duration;

use chrono::format::{Item, StrftimeItems};

use teamboard_core::member::MemberId;
use teamboard_core::session::Role;

/// Largest allowed progress step, in percentage points.
const MAX_PROGRESS_STEP: u8 = 100;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to parse the TOML configuration.
    #[error("failed to parse config file: {0}")]
    ParseToml(#[from] toml::de::Error),

    /// A setting has a value outside its accepted range.
    #[error("invalid value for {field}: {reason}")]
    InvalidValue {
        /// Name of the offending setting.
        field: &'static str,
        /// What was wrong with it.
        reason: String,
    },
}

// ---------------------------------------------------------------------------
// TOML file structs (all fields Option for partial overrides)
// ---------------------------------------------------------------------------

/// Top-level TOML config file structure.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct ConfigFile {
    ui: UiFileConfig,
    session: SessionFileConfig,
}

/// `[ui]` section of the config file.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct UiFileConfig {
    poll_timeout_ms: Option<u64>,
    date_format: Option<String>,
    timestamp_format: Option<String>,
    progress_step: Option<u8>,
    max_task_title_len: Option<usize>,
}

/// `[session]` section of the config file.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct SessionFileConfig {
    role: Option<String>,
    member: Option<String>,
}

// ---------------------------------------------------------------------------
// Resolved configuration (concrete types, all fields populated)
// ---------------------------------------------------------------------------

/// Fully resolved dashboard configuration.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    // -- UI --
    /// Poll timeout for the TUI event loop.
    pub poll_timeout: Duration,
    /// Due date display format (chrono).
    pub date_format: String,
    /// Completion timestamp display format (chrono).
    pub timestamp_format: String,
    /// Percentage points moved by one progress key press.
    pub progress_step: u8,
    /// Maximum task title length in characters.
    pub max_task_title_len: usize,

    // -- Session --
    /// Role shown at startup.
    pub initial_role: Role,
    /// Member selected at startup.
    pub initial_member: MemberId,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            poll_timeout: Duration::from_millis(50),
            date_format: "%b %d, %Y".to_string(),
            timestamp_format: "%b %d, %Y %H:%M".to_string(),
            progress_step: 10,
            max_task_title_len: 256,
            initial_role: Role::Lead,
            initial_member: MemberId::from("1"),
        }
    }
}

impl DashboardConfig {
    /// Load configuration by merging CLI args, env vars, and a TOML file.
    ///
    /// If `--config` is given and the file does not exist, returns an error.
    /// If no `--config` is given, the default path
    /// (`~/.config/teamboard/config.toml`) is tried and silently ignored if
    /// missing.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the explicit config file cannot be read or
    /// parsed, or if a resolved value is out of range.
    pub fn load(cli: &CliArgs) -> Result<Self, ConfigError> {
        let file = load_config_file(cli.config.as_deref())?;
        Self::resolve(cli, &file)
    }

    /// Resolve a `DashboardConfig` from CLI args and a parsed config file.
    ///
    /// Priority: CLI > file > default. Separated from `load()` so it can be
    /// tested without CLI parsing.
    fn resolve(cli: &CliArgs, file: &ConfigFile) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let initial_role = match cli.role.as_deref().or(file.session.role.as_deref()) {
            Some(raw) => raw.parse().map_err(|e| ConfigError::InvalidValue {
                field: "role",
                reason: format!("{e}"),
            })?,
            None => defaults.initial_role,
        };

        let poll_timeout = file
            .ui
            .poll_timeout_ms
            .map_or(defaults.poll_timeout, Duration::from_millis);
        if poll_timeout.is_zero() {
            return Err(ConfigError::InvalidValue {
                field: "ui.poll_timeout_ms",
                reason: "must be greater than zero".to_string(),
            });
        }

        let progress_step = file.ui.progress_step.unwrap_or(defaults.progress_step);
        if progress_step == 0 || progress_step > MAX_PROGRESS_STEP {
            return Err(ConfigError::InvalidValue {
                field: "ui.progress_step",
                reason: format!("{progress_step} is not within 1..={MAX_PROGRESS_STEP}"),
            });
        }

        let max_task_title_len = file
            .ui
            .max_task_title_len
            .unwrap_or(defaults.max_task_title_len);
        if max_task_title_len == 0 {
            return Err(ConfigError::InvalidValue {
                field: "ui.max_task_title_len",
                reason: "must be greater than zero".to_string(),
            });
        }

        let date_format = file
            .ui
            .date_format
            .clone()
            .unwrap_or(defaults.date_format);
        validate_format("ui.date_format", &date_format)?;
        let timestamp_format = file
            .ui
            .timestamp_format
            .clone()
            .unwrap_or(defaults.timestamp_format);
        validate_format("ui.timestamp_format", &timestamp_format)?;

        Ok(Self {
            poll_timeout,
            date_format,
            timestamp_format,
            progress_step,
            max_task_title_len,
            initial_role,
            initial_member: cli
                .member
                .clone()
                .or_else(|| file.session.member.clone())
                .map_or(defaults.initial_member, MemberId::from),
        })
    }
}

/// CLI arguments parsed by clap.
#[derive(clap::Parser, Debug, Default)]
#[command(version, about = "Terminal team-status dashboard")]
pub struct CliArgs {
    /// Role to open with (lead or member).
    #[arg(long, env = "TEAMBOARD_ROLE")]
    pub role: Option<String>,

    /// Member ID to select at startup.
    #[arg(long, env = "TEAMBOARD_MEMBER")]
    pub member: Option<String>,

    /// Path to config file (default: `~/.config/teamboard/config.toml`).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print the initial store snapshot as JSON and exit.
    #[arg(long)]
    pub dump: bool,

    /// Log level filter (trace, debug, info, warn, error).
    #[arg(long, default_value = "info", env = "TEAMBOARD_LOG")]
    pub log_level: String,

    /// Path to log file (default: `$TMPDIR/teamboard.log`).
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

/// Reject chrono format strings that would fail at render time.
fn validate_format(field: &'static str, format: &str) -> Result<(), ConfigError> {
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(ConfigError::InvalidValue {
            field,
            reason: format!("{format:?} is not a valid chrono format"),
        });
    }
    Ok(())
}

/// Load and parse a TOML config file.
///
/// If `explicit_path` is `Some`, the file must exist (error if not).
/// If `explicit_path` is `None`, the default path is tried and missing file
/// is treated as empty config.
fn load_config_file(explicit_path: Option<&std::path::Path>) -> Result<ConfigFile, ConfigError> {
    let path = if let Some(p) = explicit_path {
        let contents = std::fs::read_to_string(p).map_err(|e| ConfigError::ReadFile {
            path: p.to_path_buf(),
            source: e,
        })?;
        return Ok(toml::from_str(&contents)?);
    } else {
        let Some(config_dir) = dirs::config_dir() else {
            return Ok(ConfigFile::default());
        };
        config_dir.join("teamboard").join("config.toml")
    };

    match std::fs::read_to_string(&path) {
        Ok(contents) => Ok(toml::from_str(&contents)?),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(ConfigFile::default()),
        Err(e) => Err(ConfigError::ReadFile { path, source: e }),
    }
}
