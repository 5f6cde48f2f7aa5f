use pretty_assertions::assert_eq;
use shared_types::{AppConfig, ClassBoard};

use crate::common;

#[test]
fn test_partial_config_keeps_other_defaults() {
    let config = AppConfig::from_toml("[teacher]\ndefault_class_size = 45\n").unwrap();
    assert_eq!(config.teacher.default_class_size, 45);
    assert_eq!(config.login.delay_ms, 1000);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_configured_class_size_flows_into_new_sessions() {
    let config = AppConfig::from_toml("[teacher]\ndefault_class_size = 12\n").unwrap();
    let mut board = ClassBoard::seeded(config.teacher.default_class_size);
    let session = board
        .generate_qr_code(
            &common::session_form("CS301", "Compilers", "2024-04-02", "08:15"),
            common::clock(),
        )
        .unwrap();

    assert_eq!(session.total_students, 12);
    assert_eq!(board.sessions()[0].total_students, 30);
}

#[test]
fn test_zero_delay_is_accepted() {
    let config = AppConfig::from_toml("[login]\ndelay_ms = 0\n").unwrap();
    assert_eq!(config.login.delay_ms, 0);
}
