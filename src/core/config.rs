//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.code-entry/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//!
//! Appearance values stay as plain strings here; the TUI turns them into
//! colors and styles.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::Charset;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct CodeEntryConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub appearance: AppearanceConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub digits: Option<usize>,
    pub charset: Option<Charset>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct AppearanceConfig {
    pub underline_color: Option<String>,
    pub underline_selected_color: Option<String>,
    pub text_color: Option<String>,
    pub text_size: Option<u16>,
    pub text_font: Option<String>,
    pub background_color: Option<String>,
    pub tint_color: Option<String>,
    pub dark_surface: Option<bool>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_DIGITS: usize = 4;
pub const MAX_DIGITS: usize = 12;

pub const DIGITS_ENV: &str = "CODE_ENTRY_DIGITS";
pub const CHARSET_ENV: &str = "CODE_ENTRY_CHARSET";

// ============================================================================
// Resolved Config (concrete values, appearance left sparse)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub digits: usize,
    pub charset: Charset,
    pub appearance: AppearanceConfig,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
            ConfigError::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.code-entry/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".code-entry").join("config.toml"))
}

/// Load config from `~/.code-entry/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `CodeEntryConfig::default()`.
pub fn load_config() -> Result<CodeEntryConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(CodeEntryConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(CodeEntryConfig::default());
    }

    load_config_from(&path)
}

/// Load and parse a config file at an explicit path.
pub fn load_config_from(path: &Path) -> Result<CodeEntryConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: CodeEntryConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# code-entry Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# digits = 4                          # Or set CODE_ENTRY_DIGITS (1-12)
# charset = "numeric"                 # "numeric", "alphanumeric", "any"

# [appearance]
# underline_color = "darkgray"        # Empty cell underline
# underline_selected_color = "white"  # Filled cell underline
# text_color = "white"
# text_size = 5                       # Cell width in columns
# text_font = "bold"                  # "regular", "bold", "italic", "dim"
# background_color = "reset"
# tint_color = "blue"                 # Caret color
# dark_surface = false
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_digits` and `cli_charset` are from CLI flags (None = not specified).
pub fn resolve(
    config: &CodeEntryConfig,
    cli_digits: Option<usize>,
    cli_charset: Option<Charset>,
) -> Result<ResolvedConfig, ConfigError> {
    resolve_with_env(config, cli_digits, cli_charset, |key| std::env::var(key).ok())
}

/// Same as [`resolve`], reading env vars through `env`.
pub fn resolve_with_env<F>(
    config: &CodeEntryConfig,
    cli_digits: Option<usize>,
    cli_charset: Option<Charset>,
    env: F,
) -> Result<ResolvedConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    // Digits: CLI → env → config → default
    let digits = match cli_digits {
        Some(d) => d,
        None => match env(DIGITS_ENV) {
            Some(raw) => raw.trim().parse().map_err(|_| {
                ConfigError::Invalid(format!("{DIGITS_ENV} is not a number: {raw}"))
            })?,
            None => config.general.digits.unwrap_or(DEFAULT_DIGITS),
        },
    };
    validate_digits(digits)?;

    // Charset: CLI → env → config → default
    let charset = match cli_charset {
        Some(c) => c,
        None => match env(CHARSET_ENV) {
            Some(raw) => Charset::parse_name(&raw)
                .map_err(|e| ConfigError::Invalid(format!("{CHARSET_ENV}: {e}")))?,
            None => config.general.charset.unwrap_or_default(),
        },
    };

    Ok(ResolvedConfig {
        digits,
        charset,
        appearance: config.appearance.clone(),
    })
}

fn validate_digits(digits: usize) -> Result<(), ConfigError> {
    if (1..=MAX_DIGITS).contains(&digits) {
        Ok(())
    } else {
        Err(ConfigError::Invalid(format!(
            "digits must be between 1 and {MAX_DIGITS}, got {digits}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_empty() {
        let config = CodeEntryConfig::default();
        assert!(config.general.digits.is_none());
        assert!(config.appearance.text_font.is_none());
    }

    #[test]
    fn test_resolve_cli_wins() {
        let config = CodeEntryConfig {
            general: GeneralConfig {
                digits: Some(8),
                charset: Some(Charset::Any),
            },
            ..Default::default()
        };
        let resolved = resolve(&config, Some(6), Some(Charset::Alphanumeric)).unwrap();
        assert_eq!(resolved.digits, 6);
        assert_eq!(resolved.charset, Charset::Alphanumeric);
    }

    #[test]
    fn test_resolve_rejects_out_of_range_digits() {
        let config = CodeEntryConfig::default();
        let err = resolve(&config, Some(0), Some(Charset::Numeric)).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
        assert!(resolve(&config, Some(MAX_DIGITS + 1), Some(Charset::Numeric)).is_err());
    }

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_resolve_defaults_when_nothing_set() {
        let config = CodeEntryConfig::default();
        let resolved = resolve_with_env(&config, None, None, no_env).unwrap();
        assert_eq!(resolved.digits, DEFAULT_DIGITS);
        assert_eq!(resolved.charset, Charset::Numeric);
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = CodeEntryConfig {
            general: GeneralConfig {
                digits: Some(8),
                charset: Some(Charset::Any),
            },
            ..Default::default()
        };
        let resolved = resolve_with_env(&config, None, None, no_env).unwrap();
        assert_eq!(resolved.digits, 8);
        assert_eq!(resolved.charset, Charset::Any);
    }

    #[test]
    fn test_resolve_env_overrides_config() {
        let config = CodeEntryConfig {
            general: GeneralConfig {
                digits: Some(8),
                charset: Some(Charset::Any),
            },
            ..Default::default()
        };
        let env = |key: &str| match key {
            DIGITS_ENV => Some(" 6 ".to_string()),
            CHARSET_ENV => Some("Alphanumeric".to_string()),
            _ => None,
        };

        let resolved = resolve_with_env(&config, None, None, env).unwrap();
        assert_eq!(resolved.digits, 6);
        assert_eq!(resolved.charset, Charset::Alphanumeric);

        let resolved = resolve_with_env(&config, Some(3), Some(Charset::Numeric), env).unwrap();
        assert_eq!(resolved.digits, 3);
        assert_eq!(resolved.charset, Charset::Numeric);
    }

    #[test]
    fn test_resolve_rejects_bad_env_values() {
        let config = CodeEntryConfig::default();

        let err = resolve_with_env(&config, None, None, |key: &str| {
            (key == DIGITS_ENV).then(|| "six".to_string())
        })
        .unwrap_err();
        assert!(err.to_string().contains(DIGITS_ENV));

        let err = resolve_with_env(&config, None, None, |key: &str| {
            (key == CHARSET_ENV).then(|| "hex".to_string())
        })
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = resolve_with_env(&config, None, None, |key: &str| {
            (key == DIGITS_ENV).then(|| "40".to_string())
        })
        .unwrap_err();
        assert!(err.to_string().contains("between 1 and"));
    }

    #[test]
    fn test_toml_parses_all_sections() {
        let toml_str = r##"
[general]
digits = 6
charset = "alphanumeric"

[appearance]
underline_color = "gray"
underline_selected_color = "#ff8800"
text_color = "white"
text_size = 7
text_font = "bold"
background_color = "black"
tint_color = "blue"
dark_surface = true
"##;
        let config: CodeEntryConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.digits, Some(6));
        assert_eq!(config.general.charset, Some(Charset::Alphanumeric));
        assert_eq!(
            config.appearance.underline_selected_color.as_deref(),
            Some("#ff8800")
        );
        assert_eq!(config.appearance.text_size, Some(7));
        assert_eq!(config.appearance.dark_surface, Some(true));
    }

    #[test]
    fn test_sparse_toml_parses() {
        let toml_str = r#"
[appearance]
tint_color = "magenta"
"#;
        let config: CodeEntryConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.appearance.tint_color.as_deref(), Some("magenta"));
        assert!(config.general.digits.is_none());
        assert!(config.appearance.text_color.is_none());
    }

    #[test]
    fn test_unknown_charset_is_parse_error() {
        let toml_str = r#"
[general]
charset = "hex"
"#;
        assert!(toml::from_str::<CodeEntryConfig>(toml_str).is_err());
    }

    #[test]
    fn test_load_config_from_reports_missing_file() {
        let err = load_config_from(Path::new("/nonexistent/code-entry/config.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
        assert!(err.to_string().starts_with("config I/O error"));
    }
}
