//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the application works out of the box.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub pomodoro: PomodoroConfig,
    #[serde(default)]
    pub notifications: NotificationConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub export: ExportConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where study data lives on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Seed a couple of example records the first time the app runs.
    #[serde(default = "default_true")]
    pub seed_sample_data: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            seed_sample_data: true,
        }
    }
}

/// Pomodoro phase lengths, in whole minutes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PomodoroConfig {
    #[serde(default = "default_focus_minutes")]
    pub focus_minutes: u32,
    #[serde(default = "default_break_minutes")]
    pub break_minutes: u32,
}

impl Default for PomodoroConfig {
    fn default() -> Self {
        Self {
            focus_minutes: default_focus_minutes(),
            break_minutes: default_break_minutes(),
        }
    }
}

/// Tri-state notification permission. `Default` means the user has not been
/// asked yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Permission {
    #[default]
    Default,
    Granted,
    Denied,
}

/// Deadline reminder settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationConfig {
    #[serde(default)]
    pub permission: Permission,
    #[serde(default = "default_reminder_interval")]
    pub reminder_interval_secs: u64,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            permission: Permission::Default,
            reminder_interval_secs: default_reminder_interval(),
        }
    }
}

/// Longest reminder period accepted from the config file (one year).
const MAX_REMINDER_INTERVAL_SECS: u64 = 86_400 * 365;

impl NotificationConfig {
    /// Sweep period, clamped to between one second and one year.
    pub fn reminder_period(&self) -> Duration {
        Duration::from_secs(
            self.reminder_interval_secs
                .clamp(1, MAX_REMINDER_INTERVAL_SECS),
        )
    }
}

/// UI appearance and behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// chrono format string used when showing task deadlines.
    #[serde(default = "default_date_format")]
    pub date_format: String,
    #[serde(default = "default_true")]
    pub bell: bool,
    #[serde(default = "default_max_notifications")]
    pub max_notifications: usize,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            date_format: default_date_format(),
            bell: true,
            max_notifications: default_max_notifications(),
        }
    }
}

/// Export destination.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    #[serde(default = "default_export_dir")]
    pub dir: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            dir: default_export_dir(),
        }
    }
}

/// Diagnostic log settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            level: default_log_level(),
            log_dir: default_log_dir(),
        }
    }
}

fn default_true() -> bool {
    true
}
fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("studyhub")
}
fn default_focus_minutes() -> u32 {
    25
}
fn default_break_minutes() -> u32 {
    5
}
fn default_reminder_interval() -> u64 {
    3600
}
fn default_date_format() -> String {
    "%e %B %Y".to_string()
}
fn default_max_notifications() -> usize {
    50
}
fn default_export_dir() -> PathBuf {
    dirs::download_dir().unwrap_or_else(|| PathBuf::from("./exports"))
}
fn default_log_level() -> String {
    "info".to_string()
}
fn default_log_dir() -> String {
    "~/.local/share/studyhub/logs".to_string()
}
