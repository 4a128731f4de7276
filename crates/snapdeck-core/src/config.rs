use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::navigator::SettlePolicy;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub navigation: NavigationConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub keymap: KeymapConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Log file written while presenting (the terminal is in raw mode then)
    #[serde(default = "default_log_file")]
    pub log_file: PathBuf,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_file: default_log_file(),
        }
    }
}

/// How the busy window of a transition ends
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SettleMode {
    /// Fixed settle delay after every transition
    #[default]
    Timer,
    /// Wait for the host's scroll animation to report completion,
    /// with `settle_ms` as an upper bound
    Animation,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavigationConfig {
    /// Settle delay after a transition, in milliseconds
    #[serde(default = "default_settle_ms")]
    pub settle_ms: u64,
    #[serde(default)]
    pub settle_mode: SettleMode,
    /// Minimum drag distance before a swipe counts
    #[serde(default = "default_touch_threshold")]
    pub touch_threshold_px: f64,
    /// Visible fraction (0.0-1.0) at which a section is considered on screen
    #[serde(default = "default_visibility_threshold")]
    pub visibility_threshold: f64,
    /// Scroll offset past which the nav bar is drawn elevated
    #[serde(default = "default_elevate_offset")]
    pub elevate_offset: f64,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            settle_ms: default_settle_ms(),
            settle_mode: SettleMode::default(),
            touch_threshold_px: default_touch_threshold(),
            visibility_threshold: default_visibility_threshold(),
            elevate_offset: default_elevate_offset(),
        }
    }
}

impl NavigationConfig {
    pub fn settle_duration(&self) -> Duration {
        Duration::from_millis(self.settle_ms)
    }

    /// Settle policy for the navigator built from this configuration
    pub fn settle_policy(&self) -> SettlePolicy {
        match self.settle_mode {
            SettleMode::Timer => SettlePolicy::Timer {
                settle: self.settle_duration(),
            },
            SettleMode::Animation => SettlePolicy::Completion {
                fallback: self.settle_duration(),
            },
        }
    }
}

/// Easing curve of the host scroll animation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingType {
    None,
    Linear,
    #[default]
    Cubic,
    Quintic,
    EaseOut,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrollConfig {
    /// Animate scrolling between sections
    #[serde(default = "default_true")]
    pub smooth_enabled: bool,
    /// Scroll animation duration in milliseconds
    #[serde(default = "default_animation_duration")]
    pub animation_duration_ms: u64,
    #[serde(default)]
    pub easing: EasingType,
    /// Frame rate while an animation is running
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u32,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            smooth_enabled: default_true(),
            animation_duration_ms: default_animation_duration(),
            easing: EasingType::default(),
            animation_fps: default_animation_fps(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Approximate height of one terminal row in pixels, used to scale drags
    #[serde(default = "default_cell_height")]
    pub cell_height_px: u16,
    /// Show the indicator dots column
    #[serde(default = "default_true")]
    pub show_dots: bool,
    #[serde(default)]
    pub scroll: ScrollConfig,
    /// Theme name ("dark" or "light")
    #[serde(default = "default_theme_name")]
    pub theme: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            cell_height_px: default_cell_height(),
            show_dots: default_true(),
            scroll: ScrollConfig::default(),
            theme: default_theme_name(),
        }
    }
}

/// Keymap configuration using Vim-style notation
/// Format: "j", "<C-n>" (Ctrl+n), "G" (Shift+g), "<Space>", "<Tab>"
///
/// Arrow keys, Space, PageUp/PageDown, Home and End are always bound.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeymapConfig {
    /// Quit the presentation
    #[serde(default = "default_key_quit")]
    pub quit: String,
    /// Open or close the section menu
    #[serde(default = "default_key_toggle_menu")]
    pub toggle_menu: String,
    /// Next section
    #[serde(default = "default_key_next_section")]
    pub next_section: String,
    /// Previous section
    #[serde(default = "default_key_prev_section")]
    pub prev_section: String,
    /// First section
    #[serde(default = "default_key_first_section")]
    pub first_section: String,
    /// Last section
    #[serde(default = "default_key_last_section")]
    pub last_section: String,
}

impl Default for KeymapConfig {
    fn default() -> Self {
        Self {
            quit: default_key_quit(),
            toggle_menu: default_key_toggle_menu(),
            next_section: default_key_next_section(),
            prev_section: default_key_prev_section(),
            first_section: default_key_first_section(),
            last_section: default_key_last_section(),
        }
    }
}

fn default_key_quit() -> String { "q".to_string() }
fn default_key_toggle_menu() -> String { "m".to_string() }
fn default_key_next_section() -> String { "j".to_string() }
fn default_key_prev_section() -> String { "k".to_string() }
fn default_key_first_section() -> String { "g".to_string() }
fn default_key_last_section() -> String { "G".to_string() }

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_file() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("snapdeck")
        .join("snapdeck.log")
}

fn default_true() -> bool {
    true
}

fn default_settle_ms() -> u64 {
    800
}

fn default_touch_threshold() -> f64 {
    50.0
}

fn default_visibility_threshold() -> f64 {
    0.5
}

fn default_elevate_offset() -> f64 {
    20.0
}

fn default_animation_duration() -> u64 {
    600
}

fn default_animation_fps() -> u32 {
    60
}

fn default_tick_rate() -> u64 {
    100
}

fn default_cell_height() -> u16 {
    16
}

fn default_theme_name() -> String {
    "dark".to_string()
}

/// Expand tilde (~) in path to user's home directory
fn expand_tilde(path: &std::path::Path) -> PathBuf {
    if let Some(path_str) = path.to_str() {
        if let Some(stripped) = path_str.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        } else if path_str == "~" {
            if let Some(home) = dirs::home_dir() {
                return home;
            }
        }
    }
    path.to_path_buf()
}

impl AppConfig {
    /// Load configuration from the default path or return defaults
    pub fn load() -> crate::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from a specific file, falling back to defaults
    /// when the file does not exist
    pub fn load_from(path: &std::path::Path) -> crate::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Self::from_toml(&content)
        } else {
            Ok(Self::default())
        }
    }

    pub fn from_toml(content: &str) -> crate::Result<Self> {
        toml::from_str(content).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Get the configuration file path
    /// Always uses ~/.config/snapdeck/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("snapdeck")
            .join("config.toml")
    }

    /// Get the log file path (with tilde expansion)
    pub fn log_file(&self) -> PathBuf {
        expand_tilde(&self.general.log_file)
    }
}
