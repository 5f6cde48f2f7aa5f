use serde::{Deserialize, Serialize};

/// Top-level config file structure matching `config.toml`.
///
/// Every section and field has a default, so an empty or partial file is
/// valid.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub login: LoginConfig,
    #[serde(default)]
    pub teacher: TeacherConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    pub fn from_toml(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginConfig {
    /// Artificial sign-in latency in milliseconds.
    #[serde(default = "default_login_delay_ms")]
    pub delay_ms: u64,
}

impl Default for LoginConfig {
    fn default() -> Self {
        Self {
            delay_ms: default_login_delay_ms(),
        }
    }
}

fn default_login_delay_ms() -> u64 {
    1000
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TeacherConfig {
    /// Enrolment assumed for newly generated class sessions.
    #[serde(default = "default_class_size")]
    pub default_class_size: u32,
}

impl Default for TeacherConfig {
    fn default() -> Self {
        Self {
            default_class_size: default_class_size(),
        }
    }
}

fn default_class_size() -> u32 {
    crate::teacher::DEFAULT_CLASS_SIZE
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// One of `trace`, `debug`, `info`, `warn`, `error`.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
