use std::path::PathBuf;

use survivor_agent::{ConfigError, PluginConfig};
use survivor_core::ItemKind;

#[test]
fn empty_document_uses_defaults() {
    let config = PluginConfig::from_yaml_str("{}").expect("defaults are valid");
    assert_eq!(config, PluginConfig::default());
    assert_eq!(config.grid_cols, 15);
    assert_eq!(config.house_cooldown, 240.0);
    assert_eq!(
        config.loadout,
        vec![
            ItemKind::Pistol,
            ItemKind::Shotgun,
            ItemKind::Medkit,
            ItemKind::Food,
            ItemKind::Food
        ]
    );
}

#[test]
fn partial_document_overrides_only_named_fields() {
    let yaml = r#"
bot_name: Scout
grid_cols: 20
loadout: [shotgun, food]
face_tolerance: 0.05
"#;
    let config = PluginConfig::from_yaml_str(yaml).expect("valid config");
    assert_eq!(config.bot_name, "Scout");
    assert_eq!(config.grid_cols, 20);
    assert_eq!(config.grid_rows, 15);
    assert_eq!(config.loadout, vec![ItemKind::Shotgun, ItemKind::Food]);
    assert_eq!(config.face_tolerance, 0.05);
    assert_eq!(config.house_entry_radius, 5.0);
}

#[test]
fn validation_rejects_unusable_values() {
    assert!(matches!(
        PluginConfig::from_yaml_str("grid_rows: 0"),
        Err(ConfigError::EmptyGrid { cols: 15, rows: 0 })
    ));
    assert!(matches!(
        PluginConfig::from_yaml_str("loadout: []"),
        Err(ConfigError::EmptyLoadout)
    ));
    assert!(matches!(
        PluginConfig::from_yaml_str("loadout: [pistol, garbage]"),
        Err(ConfigError::GarbageInLoadout(1))
    ));
    assert!(matches!(
        PluginConfig::from_yaml_str("house_cooldown: -1.0"),
        Err(ConfigError::NonPositive {
            field: "house_cooldown",
            ..
        })
    ));
}

#[test]
fn unknown_item_kinds_fail_to_parse() {
    assert!(matches!(
        PluginConfig::from_yaml_str("loadout: [rocket_launcher]"),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn load_reads_yaml_files() {
    let path = std::env::temp_dir().join(format!("survivor-config-{}.yaml", std::process::id()));
    std::fs::write(&path, "turn_distance: 4.5\n").expect("write temp config");

    let config = PluginConfig::load(&path);
    let _ = std::fs::remove_file(&path);

    assert_eq!(config.expect("valid config").turn_distance, 4.5);
}

#[test]
fn load_reports_the_missing_path() {
    let path = PathBuf::from("/definitely/not/here/survivor.yaml");
    match PluginConfig::load(&path) {
        Err(ConfigError::Io { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected io error, got {other:?}"),
    }
}

#[test]
fn config_survives_a_yaml_round_trip() {
    let config = PluginConfig {
        bot_name: "Roundtrip".to_string(),
        grid_cols: 9,
        ..PluginConfig::default()
    };
    let yaml = serde_yaml::to_string(&config).expect("serialize");
    assert_eq!(PluginConfig::from_yaml_str(&yaml).expect("parse"), config);
}
