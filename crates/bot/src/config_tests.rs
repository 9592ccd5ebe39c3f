use super::*;

#[test]
fn test_defaults() {
    let config = BotConfig::default();
    assert_eq!(config.search_depth, 4);
    assert_eq!(config.chain_depth, 3);
    assert_eq!(config.seed, None);
}

#[test]
fn test_partial_toml_keeps_defaults() {
    let config = BotConfig::from_toml_str("search_depth = 6\n").unwrap();
    assert_eq!(config.search_depth, 6);
    assert_eq!(config.chain_depth, DEFAULT_CHAIN_DEPTH);

    let config = BotConfig::from_toml_str("").unwrap();
    assert_eq!(config, BotConfig::default());
}

#[test]
fn test_full_toml() {
    let config = BotConfig::from_toml_str("search_depth = 2\nchain_depth = 1\nseed = 42\n").unwrap();
    assert_eq!(
        config,
        BotConfig {
            search_depth: 2,
            chain_depth: 1,
            seed: Some(42),
        }
    );
}

#[test]
fn test_invalid_toml() {
    let err = BotConfig::from_toml_str("search_depth = \"deep\"").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_missing_file() {
    let err = BotConfig::load(Path::new("/nonexistent/bot.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn test_depths_are_clamped() {
    let config = BotConfig {
        search_depth: 0,
        chain_depth: 0,
        seed: None,
    };
    assert_eq!(config.first_hop_depth(), 1);
    assert_eq!(config.continuation_depth(), 1);
    assert_eq!(BotConfig::with_depth(Some(2)).first_hop_depth(), 2);
    assert_eq!(BotConfig::with_depth(None).first_hop_depth(), 4);
}
