use super::*;

#[test]
fn defaults_match_the_classic_engine() {
    let config = EngineConfig::default();
    assert_eq!(config.depth, 3);
    assert_eq!(config.mobility, MobilityMode::PerPiece);
    assert!(config.validate().is_ok());
}

#[test]
fn parses_full_and_partial_toml() {
    let config = EngineConfig::from_toml_str("depth = 5\nmobility = \"board-wide\"\n").unwrap();
    assert_eq!(config.depth, 5);
    assert_eq!(config.mobility, MobilityMode::BoardWide);

    let config = EngineConfig::from_toml_str("depth = 2").unwrap();
    assert_eq!(config.mobility, MobilityMode::PerPiece);

    let config = EngineConfig::from_toml_str("").unwrap();
    assert_eq!(config, EngineConfig::default());
}

#[test]
fn rejects_out_of_range_depth_and_unknown_keys() {
    assert!(matches!(
        EngineConfig::from_toml_str("depth = 0"),
        Err(ConfigError::InvalidDepth(0))
    ));
    assert!(matches!(
        EngineConfig::from_toml_str("depth = 9"),
        Err(ConfigError::InvalidDepth(9))
    ));
    assert!(matches!(
        EngineConfig::from_toml_str("quiescence = true"),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn set_depth_keeps_the_old_value_on_error() {
    let mut config = EngineConfig::default();
    assert!(config.set_depth(MAX_DEPTH + 1).is_err());
    assert_eq!(config.depth, DEFAULT_DEPTH);
    config.set_depth(6).unwrap();
    assert_eq!(config.depth, 6);
}

#[test]
fn mobility_mode_from_uci_text() {
    assert_eq!("PerPiece".parse::<MobilityMode>().unwrap(), MobilityMode::PerPiece);
    assert_eq!("board-wide".parse::<MobilityMode>().unwrap(), MobilityMode::BoardWide);
    assert_eq!("BOARD_WIDE".parse::<MobilityMode>().unwrap(), MobilityMode::BoardWide);
    assert!("fancy".parse::<MobilityMode>().is_err());
    assert_eq!(MobilityMode::BoardWide.to_string(), "BoardWide");
}

#[test]
fn load_reads_a_file_and_reports_missing_ones() {
    let path = std::env::temp_dir().join(format!("negamax_engine_{}.toml", std::process::id()));
    std::fs::write(&path, "depth = 4\n").unwrap();
    let config = EngineConfig::load(&path).unwrap();
    assert_eq!(config.depth, 4);
    std::fs::remove_file(&path).unwrap();

    assert!(matches!(
        EngineConfig::load(&path),
        Err(ConfigError::Io { .. })
    ));
}
