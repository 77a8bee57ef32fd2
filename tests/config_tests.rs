//! Integration tests for configuration loading.

use vmem_sim::config::{Policy, SimConfig};

/// Tests parsing a fully populated TOML configuration.
#[test]
fn test_parse_full_config() {
    let config: SimConfig = toml::from_str(
        r#"
        policy = "ws"
        frames = 12
        burst = 10
        window = 8
        max_refs = 1000
        "#,
    )
    .unwrap();

    assert_eq!(config.policy, Policy::Ws);
    assert_eq!(config.frames, 12);
    assert_eq!(config.burst, 10);
    assert_eq!(config.window, Some(8));
    assert_eq!(config.max_refs, 1000);
}

/// Tests that omitted fields fall back to the defaults.
#[test]
fn test_defaults_for_missing_fields() {
    let config: SimConfig = toml::from_str("").unwrap();

    assert_eq!(config.policy, Policy::Lru);
    assert_eq!(config.frames, 64);
    assert_eq!(config.burst, 5);
    assert_eq!(config.window, None);
    assert_eq!(config.max_refs, 0);
}

/// Tests that an unknown policy string fails to deserialize.
#[test]
fn test_unknown_policy_rejected() {
    let result: Result<SimConfig, _> = toml::from_str(r#"policy = "fifo""#);
    assert!(result.is_err());
}

/// Tests command-line policy parsing in both spellings.
#[test]
fn test_policy_from_str() {
    assert_eq!("lru".parse::<Policy>().unwrap(), Policy::Lru);
    assert_eq!("LRU".parse::<Policy>().unwrap(), Policy::Lru);
    assert_eq!("ws".parse::<Policy>().unwrap(), Policy::Ws);
    assert_eq!("WS".parse::<Policy>().unwrap(), Policy::Ws);
    assert!("mru".parse::<Policy>().is_err());
}

/// Tests the display form used by the settings banner.
#[test]
fn test_policy_display() {
    assert_eq!(Policy::Lru.to_string(), "LRU");
    assert_eq!(Policy::Ws.to_string(), "WS");
}
