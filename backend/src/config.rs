use pagewin_common::{MiddleLabels, MOBILE_MAX_WIDTH};
use serde::Deserialize;

/// Application config
#[derive(Deserialize)]
pub struct Config {
    /// IP address to bind server to
    pub bind_address: String,
    /// Server port
    pub port: u16,
    /// Log file, appended to
    pub log_file: String,
    /// Max log level
    #[serde(default)]
    pub log_level: LogLevel,
    /// Built frontend
    pub static_folder: StaticFolder,
    #[serde(default)]
    pub pagination: PaginationConfig,
}

/// Folder, that can be served by backend
#[derive(Deserialize)]
pub struct StaticFolder {
    /// Whether backend should serve this folder
    pub serve: bool,
    /// Url path to mount on
    pub url: String,
    /// Folder path
    pub path: String,
}

#[derive(Deserialize, Clone)]
pub struct PaginationConfig {
    /// Widest viewport that gets mobile layout
    #[serde(default = "default_mobile_max_width")]
    pub mobile_max_width: u32,
    /// Middle branch labeling
    #[serde(default)]
    pub middle_labels: MiddleLabels,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            mobile_max_width: MOBILE_MAX_WIDTH,
            middle_labels: MiddleLabels::default(),
        }
    }
}

fn default_mobile_max_width() -> u32 {
    MOBILE_MAX_WIDTH
}

#[derive(Deserialize, Clone, Copy, Default, Debug)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Trace => Self::TRACE,
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Info => Self::INFO,
            LogLevel::Warn => Self::WARN,
            LogLevel::Error => Self::ERROR,
        }
    }
}

#[test]
fn test_default_config_parses() {
    let cfg: Config = toml::from_str(include_str!("../../config.toml")).unwrap();
    assert_eq!(cfg.pagination.mobile_max_width, MOBILE_MAX_WIDTH);
    assert_eq!(cfg.pagination.middle_labels, MiddleLabels::Keep);
    assert!(matches!(cfg.log_level, LogLevel::Info));
}

#[test]
fn test_pagination_section_optional() {
    let cfg: Config = toml::from_str(r#"
        bind_address = "127.0.0.1"
        port = 8080
        log_file = "log.txt"

        [static_folder]
        serve = false
        url = "/"
        path = "dist"
    "#).unwrap();
    assert_eq!(cfg.pagination.mobile_max_width, MOBILE_MAX_WIDTH);
}
