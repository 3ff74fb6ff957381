use rstest::rstest;
use shiftcast_api::config::{ApiConfig, parse_log_level};
use tracing::Level;

#[rstest]
#[case("trace", Level::TRACE)]
#[case("DEBUG", Level::DEBUG)]
#[case("info", Level::INFO)]
#[case(" warn ", Level::WARN)]
#[case("error", Level::ERROR)]
#[case("verbose", Level::INFO)]
fn test_parse_log_level(#[case] raw: &str, #[case] expected: Level) {
    assert_eq!(parse_log_level(raw), expected);
}

#[test]
fn test_server_addr() {
    let config = ApiConfig {
        host: "127.0.0.1".to_string(),
        port: 8080,
        database_url: "postgres://localhost/shiftcast".to_string(),
        log_level: Level::INFO,
        cors_origins: None,
        request_timeout: 30,
    };

    assert_eq!(config.server_addr(), "127.0.0.1:8080");
}
