//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub latency: LatencyConfig,

    #[serde(default)]
    pub notifications: NotificationConfig,

    #[serde(default)]
    pub ui: UiConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Simulated network latency of the mock store, in milliseconds
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LatencyConfig {
    #[serde(default = "default_login_ms")]
    pub login_ms: u64,

    #[serde(default = "default_logout_ms")]
    pub logout_ms: u64,

    #[serde(default = "default_list_ms")]
    pub list_ms: u64,

    #[serde(default = "default_join_club_ms")]
    pub join_club_ms: u64,

    #[serde(default = "default_toggle_rsvp_ms")]
    pub toggle_rsvp_ms: u64,

    #[serde(default = "default_add_team_ms")]
    pub add_team_ms: u64,

    #[serde(default = "default_add_team_member_ms")]
    pub add_team_member_ms: u64,
}

fn default_login_ms() -> u64 {
    500
}

fn default_logout_ms() -> u64 {
    300
}

fn default_list_ms() -> u64 {
    500
}

fn default_join_club_ms() -> u64 {
    700
}

fn default_toggle_rsvp_ms() -> u64 {
    700
}

fn default_add_team_ms() -> u64 {
    800
}

fn default_add_team_member_ms() -> u64 {
    600
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            login_ms: default_login_ms(),
            logout_ms: default_logout_ms(),
            list_ms: default_list_ms(),
            join_club_ms: default_join_club_ms(),
            toggle_rsvp_ms: default_toggle_rsvp_ms(),
            add_team_ms: default_add_team_ms(),
            add_team_member_ms: default_add_team_member_ms(),
        }
    }
}

impl LatencyConfig {
    /// Every operation completes without delay
    pub fn instant() -> Self {
        Self::default().scaled(0.0)
    }

    /// Multiply every latency by `factor` (negative factors clamp to zero)
    pub fn scaled(&self, factor: f64) -> Self {
        let scale = |ms: u64| (ms as f64 * factor.max(0.0)).round() as u64;
        Self {
            login_ms: scale(self.login_ms),
            logout_ms: scale(self.logout_ms),
            list_ms: scale(self.list_ms),
            join_club_ms: scale(self.join_club_ms),
            toggle_rsvp_ms: scale(self.toggle_rsvp_ms),
            add_team_ms: scale(self.add_team_ms),
            add_team_member_ms: scale(self.add_team_member_ms),
        }
    }

    pub fn login(&self) -> Duration {
        Duration::from_millis(self.login_ms)
    }

    pub fn logout(&self) -> Duration {
        Duration::from_millis(self.logout_ms)
    }

    pub fn list(&self) -> Duration {
        Duration::from_millis(self.list_ms)
    }

    pub fn join_club(&self) -> Duration {
        Duration::from_millis(self.join_club_ms)
    }

    pub fn toggle_rsvp(&self) -> Duration {
        Duration::from_millis(self.toggle_rsvp_ms)
    }

    pub fn add_team(&self) -> Duration {
        Duration::from_millis(self.add_team_ms)
    }

    pub fn add_team_member(&self) -> Duration {
        Duration::from_millis(self.add_team_member_ms)
    }
}

/// Toast notification configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NotificationConfig {
    /// How long a toast stays fully visible
    #[serde(default = "default_dismiss_after")]
    pub dismiss_after_ms: u64,

    /// Fade-out time after the display window, before removal
    #[serde(default = "default_fade_out")]
    pub fade_out_ms: u64,

    /// Capacity of the toast event broadcast channel
    #[serde(default = "default_broadcast_capacity")]
    pub broadcast_capacity: usize,
}

fn default_dismiss_after() -> u64 {
    3000
}

fn default_fade_out() -> u64 {
    300
}

fn default_broadcast_capacity() -> usize {
    64
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            dismiss_after_ms: default_dismiss_after(),
            fade_out_ms: default_fade_out(),
            broadcast_capacity: default_broadcast_capacity(),
        }
    }
}

impl NotificationConfig {
    /// Total lifetime of a toast that is not dismissed early
    pub fn lifetime(&self) -> Duration {
        Duration::from_millis(self.dismiss_after_ms.saturating_add(self.fade_out_ms))
    }
}

/// Timing of view transitions and highlight animations
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UiConfig {
    /// Delay between hiding the old section and showing the new one
    #[serde(default = "default_transition")]
    pub transition_ms: u64,

    /// Delay between showing a section and running its load hook
    #[serde(default = "default_settle")]
    pub settle_ms: u64,

    /// How long the page loader stays up after the section is shown
    #[serde(default = "default_loader")]
    pub loader_ms: u64,

    /// Highlight window for a freshly joined club
    #[serde(default = "default_club_highlight")]
    pub club_highlight_ms: u64,

    /// Highlight window for a freshly created team
    #[serde(default = "default_team_highlight")]
    pub team_highlight_ms: u64,

    /// Chat typing effect, per revealed character
    #[serde(default = "default_typing_char")]
    pub typing_char_ms: u64,
}

fn default_transition() -> u64 {
    100
}

fn default_settle() -> u64 {
    100
}

fn default_loader() -> u64 {
    200
}

fn default_club_highlight() -> u64 {
    1000
}

fn default_team_highlight() -> u64 {
    600
}

fn default_typing_char() -> u64 {
    30
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            transition_ms: default_transition(),
            settle_ms: default_settle(),
            loader_ms: default_loader(),
            club_highlight_ms: default_club_highlight(),
            team_highlight_ms: default_team_highlight(),
            typing_char_ms: default_typing_char(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("uniclubs").join("config.toml")),
            Some(PathBuf::from("./uniclubs.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        if let Ok(level) = std::env::var("UNICLUBS_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("UNICLUBS_LOG_FORMAT") {
            self.logging.format = format;
        }

        if let Ok(ms) = std::env::var("UNICLUBS_TOAST_MS") {
            if let Ok(ms) = ms.parse() {
                self.notifications.dismiss_after_ms = ms;
            }
        }

        if let Ok(scale) = std::env::var("UNICLUBS_LATENCY_SCALE") {
            if let Ok(factor) = scale.parse::<f64>() {
                self.latency = self.latency.scaled(factor);
            }
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# UniClubs Configuration
#
# Environment variables override these settings:
# - UNICLUBS_LOG_LEVEL
# - UNICLUBS_LOG_FORMAT
# - UNICLUBS_TOAST_MS
# - UNICLUBS_LATENCY_SCALE (multiplier for every [latency] value, 0 = instant)

[latency]
# Simulated round-trip time of each mock store call (ms)
login_ms = 500
logout_ms = 300
list_ms = 500
join_club_ms = 700
toggle_rsvp_ms = 700
add_team_ms = 800
add_team_member_ms = 600

[notifications]
# How long a toast stays on screen (ms)
dismiss_after_ms = 3000

# Fade-out before the toast is removed (ms)
fade_out_ms = 300

# Buffered toast events per subscriber
broadcast_capacity = 64

[ui]
# Section switch: hide old -> show new (ms)
transition_ms = 100

# Section shown -> load hook runs (ms)
settle_ms = 100

# Section shown -> loader hidden (ms)
loader_ms = 200

# Highlight window for a newly joined club / new team (ms)
club_highlight_ms = 1000
team_highlight_ms = 600

# Chat typing effect, per character (ms)
typing_char_ms = 30

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
