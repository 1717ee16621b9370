use super::*;

#[test]
fn defaults_when_unset() {
    let cfg = ServerConfig::from_parts(None, None, None).unwrap();
    assert_eq!(cfg.bind, SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), DEFAULT_PORT));
    assert_eq!(cfg.log_filter, DEFAULT_LOG_FILTER);
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let cfg = ServerConfig::from_parts(Some("  "), Some(""), Some(" ")).unwrap();
    assert_eq!(cfg.bind.port(), DEFAULT_PORT);
    assert_eq!(cfg.log_filter, DEFAULT_LOG_FILTER);
}

#[test]
fn explicit_values_are_used() {
    let cfg = ServerConfig::from_parts(Some("8080"), Some("127.0.0.1"), Some("debug")).unwrap();
    assert_eq!(cfg.bind, "127.0.0.1:8080".parse::<SocketAddr>().unwrap());
    assert_eq!(cfg.log_filter, "debug");
}

#[test]
fn invalid_port_is_rejected() {
    assert_eq!(
        ServerConfig::from_parts(Some("70000"), None, None),
        Err(ConfigError::InvalidPort("70000".to_owned()))
    );
    assert_eq!(
        ServerConfig::from_parts(Some("abc"), None, None),
        Err(ConfigError::InvalidPort("abc".to_owned()))
    );
}

#[test]
fn invalid_bind_addr_is_rejected() {
    assert_eq!(
        ServerConfig::from_parts(None, Some("localhost"), None),
        Err(ConfigError::InvalidBindAddr("localhost".to_owned()))
    );
}

#[test]
fn ipv6_bind_addr_is_accepted() {
    let cfg = ServerConfig::from_parts(Some("3001"), Some("::1"), None).unwrap();
    assert!(cfg.bind.is_ipv6());
}
