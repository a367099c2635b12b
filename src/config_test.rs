use super::*;

/// # Safety
/// Only `from_env_reads_port_and_host` touches these variables.
unsafe fn clear_host_env() {
    unsafe {
        std::env::remove_var("PORT");
        std::env::remove_var("BIND_HOST");
    }
}

#[test]
fn parse_port_defaults_when_missing_or_blank() {
    assert_eq!(parse_port(None).unwrap(), DEFAULT_PORT);
    assert_eq!(parse_port(Some("  ")).unwrap(), DEFAULT_PORT);
}

#[test]
fn parse_port_accepts_valid_values() {
    assert_eq!(parse_port(Some("8081")).unwrap(), 8081);
    assert_eq!(parse_port(Some(" 443 ")).unwrap(), 443);
}

#[test]
fn parse_port_rejects_zero_and_garbage() {
    for raw in ["0", "70000", "http"] {
        let err = parse_port(Some(raw)).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort { .. }), "{raw}");
    }
}

#[test]
fn parse_bind_host_defaults_and_rejects_empty() {
    assert_eq!(parse_bind_host(None).unwrap(), DEFAULT_BIND_HOST);
    assert_eq!(parse_bind_host(Some("127.0.0.1")).unwrap(), "127.0.0.1");
    assert!(matches!(parse_bind_host(Some(" ")), Err(ConfigError::EmptyBindHost)));
}

#[test]
fn from_env_reads_port_and_host() {
    unsafe {
        clear_host_env();
        std::env::set_var("PORT", "4100");
        std::env::set_var("BIND_HOST", "127.0.0.1");
    }

    let cfg = HostConfig::from_env().unwrap();
    assert_eq!(cfg, HostConfig { bind_host: "127.0.0.1".to_owned(), port: 4100 });
    assert_eq!(cfg.bind_addr(), "127.0.0.1:4100");

    unsafe { clear_host_env() };
}

#[test]
fn invalid_port_error_names_value() {
    let err = ConfigError::InvalidPort { value: "abc".to_owned() };
    assert_eq!(err.to_string(), "invalid PORT `abc`: expected 1-65535");
}
