use scaffold_cli::engine::config_file::ConfigFile;
use std::path::PathBuf;

#[test]
fn test_config_file_all_keys() {
    let cfg: ConfigFile = toml::from_str(
        r#"
            template_dir = "/opt/templates/node"
            install_command = "pnpm install"
        "#,
    )
    .unwrap();
    assert_eq!(cfg.template_dir, Some(PathBuf::from("/opt/templates/node")));
    assert_eq!(cfg.install_command.as_deref(), Some("pnpm install"));
}

#[test]
fn test_config_file_keys_are_optional() {
    let cfg: ConfigFile = toml::from_str("").unwrap();
    assert_eq!(cfg, ConfigFile::default());
}

#[test]
fn test_config_file_round_trips_through_toml() {
    let cfg = ConfigFile {
        template_dir: None,
        install_command: Some("yarn".into()),
    };
    let text = toml::to_string_pretty(&cfg).unwrap();
    assert_eq!(toml::from_str::<ConfigFile>(&text).unwrap(), cfg);
}
