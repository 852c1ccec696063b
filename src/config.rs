use serde::{Deserialize, Serialize};

use crate::expand::{DEFAULT_MAX_DEPTH, MAX_DEPTH_LIMIT};
use crate::parse::text::WHITESPACE;

/// Embedded default configuration.
const DEFAULT_CONFIG: &str = include_str!("../config.default.toml");

/// Environment variable naming an alternative user config file.
pub const CONFIG_ENV_VAR: &str = "TCSH_DEALIAS_CONFIG";

/// Expand `~` and `$VAR` references in a user-supplied path.
///
/// Falls back to tilde-only expansion when a variable is undefined, so an
/// unset variable leaves the rest of the path usable.
pub fn expand_path(raw: &str) -> std::path::PathBuf {
    match shellexpand::full(raw) {
        Ok(expanded) => expanded.into_owned().into(),
        Err(_) => shellexpand::tilde(raw).into_owned().into(),
    }
}

// ── Final (merged) config types ──

#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub expansion: ExpansionConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Parameters of the alias expansion engine.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExpansionConfig {
    /// Depth at which recursive alias expansion stops.
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
    /// Characters that separate alias arguments for history references.
    #[serde(default = "default_word_delimiters")]
    pub word_delimiters: String,
}

impl Default for ExpansionConfig {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
            word_delimiters: default_word_delimiters(),
        }
    }
}

fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

fn default_word_delimiters() -> String {
    WHITESPACE.to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Level name understood by `log::LevelFilter` (`off` … `trace`).
    #[serde(default = "default_level")]
    pub level: String,
    /// Optional file that log records are appended to, in addition to stderr.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            file: None,
        }
    }
}

fn default_level() -> String {
    "warn".into()
}

// ── Overlay types (user config that merges with defaults) ──

#[derive(Debug, Deserialize, Default)]
struct ConfigOverlay {
    #[serde(default)]
    expansion: ExpansionOverlay,
    #[serde(default)]
    logging: LoggingOverlay,
}

#[derive(Debug, Deserialize, Default)]
struct ExpansionOverlay {
    max_depth: Option<usize>,
    word_delimiters: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
struct LoggingOverlay {
    level: Option<String>,
    file: Option<String>,
}

impl Config {
    /// Load the default embedded configuration.
    pub fn default_config() -> Self {
        toml::from_str(DEFAULT_CONFIG).expect("embedded default config must parse")
    }

    /// Load configuration with resolution order:
    /// 1. Start with embedded defaults
    /// 2. Merge the user overlay, if one exists: `$TCSH_DEALIAS_CONFIG`, or
    ///    else `~/.config/tcsh-dealias/config.toml`
    ///
    /// Scalars present in the overlay override the defaults; absent ones
    /// leave them untouched.
    pub fn load() -> Self {
        let mut config = Self::default_config();
        if let Some(overlay) = Self::load_overlay() {
            config.apply_overlay(overlay);
        }
        config
    }

    /// Render the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string(self)
    }

    fn overlay_path() -> Option<std::path::PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV_VAR) {
            return Some(path.into());
        }
        let home = std::env::var_os("HOME")?;
        Some(std::path::Path::new(&home).join(".config/tcsh-dealias/config.toml"))
    }

    fn load_overlay() -> Option<ConfigOverlay> {
        let path = Self::overlay_path()?;
        let content = std::fs::read_to_string(path).ok()?;
        match toml::from_str(&content) {
            Ok(overlay) => Some(overlay),
            Err(e) => {
                // Logging isn't configured yet at this point.
                eprintln!("tcsh-dealias: config parse error: {e}");
                None
            }
        }
    }

    fn apply_overlay(&mut self, overlay: ConfigOverlay) {
        let e = overlay.expansion;
        if let Some(v) = e.max_depth {
            if v > MAX_DEPTH_LIMIT {
                eprintln!(
                    "tcsh-dealias: config max_depth {v} exceeds {MAX_DEPTH_LIMIT}, using {MAX_DEPTH_LIMIT}"
                );
            }
            self.expansion.max_depth = v.min(MAX_DEPTH_LIMIT);
        }
        if let Some(v) = e.word_delimiters {
            self.expansion.word_delimiters = v;
        }

        let l = overlay.logging;
        if let Some(v) = l.level {
            self.logging.level = v;
        }
        if let Some(v) = l.file {
            self.logging.file = Some(v);
        }
    }

    /// Apply an overlay from a TOML string. Used for testing.
    #[cfg(test)]
    fn apply_overlay_str(&mut self, toml_str: &str) {
        let overlay: ConfigOverlay = toml::from_str(toml_str).unwrap();
        self.apply_overlay(overlay);
    }
}
