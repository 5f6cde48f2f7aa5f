use shared_types::AppConfig;
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// `config.toml` from the workspace root, embedded at build time.
const CONFIG_SOURCE: &str = include_str!("../../../config.toml");

/// Parse the embedded config, falling back to defaults when it is malformed.
fn parse(source: &str) -> (AppConfig, Option<String>) {
    match AppConfig::from_toml(source) {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e.to_string())),
    }
}

/// Load the configuration and install the logger at the configured level.
///
/// Only the first call has effect. Parse errors are logged once the logger
/// is up, so they are not lost.
pub fn init() {
    let mut parse_error = None;
    let config = CONFIG.get_or_init(|| {
        let (config, err) = parse(CONFIG_SOURCE);
        parse_error = err;
        config
    });

    if let Err(e) = dioxus::logger::init(log_level(&config.logging.level)) {
        eprintln!("[config] logger already initialised: {e}");
    }
    if let Some(e) = parse_error {
        tracing::warn!(error = %e, "config.toml is invalid; using defaults");
    }
    tracing::info!(
        login_delay_ms = config.login.delay_ms,
        class_size = config.teacher.default_class_size,
        "configuration loaded"
    );
}

/// The loaded configuration, or defaults if [`init`] has not run.
pub fn get() -> &'static AppConfig {
    CONFIG.get_or_init(|| parse(CONFIG_SOURCE).0)
}

/// Map a level name to a `tracing` level. Unknown names mean `INFO`.
pub fn log_level(name: &str) -> tracing::Level {
    match name.trim().to_lowercase().as_str() {
        "trace" => tracing::Level::TRACE,
        "debug" => tracing::Level::DEBUG,
        "warn" | "warning" => tracing::Level::WARN,
        "error" => tracing::Level::ERROR,
        _ => tracing::Level::INFO,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn embedded_config_parses() {
        let (config, err) = parse(CONFIG_SOURCE);
        assert!(err.is_none());
        assert_eq!(config.login.delay_ms, 1000);
        assert_eq!(config.teacher.default_class_size, 30);
    }

    #[test]
    fn malformed_config_falls_back_to_defaults() {
        let (config, err) = parse("[login\ndelay_ms = ");
        assert!(err.is_some());
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn level_names() {
        assert_eq!(log_level("debug"), tracing::Level::DEBUG);
        assert_eq!(log_level(" WARN "), tracing::Level::WARN);
        assert_eq!(log_level("verbose"), tracing::Level::INFO);
    }
}
