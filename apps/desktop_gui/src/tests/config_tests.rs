use super::{CliArgs, StartupConfig, ThemeChoice};

use std::{
    collections::HashMap,
    env, fs,
    path::Path,
    time::{SystemTime, UNIX_EPOCH},
};

use clap::Parser;

fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_follow_system_theme_and_plus_91() {
    let config = StartupConfig::default();
    assert_eq!(config.theme, ThemeChoice::System);
    assert_eq!(config.default_country_code, "+91");
    assert!(config.event_date.is_empty());
}

#[test]
fn file_values_apply() {
    let mut config = StartupConfig::default();
    config
        .apply_file(
            r#"
theme = "dark"
event_name = "Asha's wedding"
event_date = "12-12-2026"
default_country_code = "+44"
"#,
            Path::new("test.toml"),
        )
        .expect("valid toml");
    assert_eq!(config.theme, ThemeChoice::Dark);
    assert_eq!(config.event_name, "Asha's wedding");
    assert_eq!(config.event_date, "12-12-2026");
    assert_eq!(config.default_country_code, "+44");
    assert!(config.warnings.is_empty());
}

#[test]
fn malformed_file_is_an_error() {
    let mut config = StartupConfig::default();
    let err = config
        .apply_file("theme = ", Path::new("broken.toml"))
        .expect_err("toml syntax error");
    assert!(err.to_string().contains("broken.toml"));
}

#[test]
fn env_overrides_file_and_flags_override_env() {
    let mut config = StartupConfig::default();
    config
        .apply_file("event_name = \"From file\"", Path::new("a.toml"))
        .expect("valid toml");
    config.apply_env(env_from(&[
        ("APP__EVENT_NAME", "From env"),
        ("APP__THEME", "light"),
        ("APP__EVENT_DATE", ""),
    ]));
    assert_eq!(config.event_name, "From env");
    assert_eq!(config.theme, ThemeChoice::Light);
    assert!(!config.theme_forced);
    assert!(config.event_date.is_empty());

    let args = CliArgs::parse_from(["invitebuddy", "--event-name", "From flag", "--theme", "dark"]);
    config.apply_args(&args);
    assert_eq!(config.event_name, "From flag");
    assert_eq!(config.theme, ThemeChoice::Dark);
    assert!(config.theme_forced);
}

#[test]
fn unknown_values_warn_and_keep_previous() {
    let mut config = StartupConfig::default();
    config.apply_env(env_from(&[
        ("APP__DEFAULT_COUNTRY_CODE", "+999"),
        ("APP__THEME", "sepia"),
    ]));
    assert_eq!(config.default_country_code, "+91");
    assert_eq!(config.theme, ThemeChoice::System);
    assert_eq!(config.warnings.len(), 2);
}

#[test]
fn explicit_config_path_is_loaded() {
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    let path = env::temp_dir().join(format!("invitebuddy_config_test_{suffix}.toml"));
    fs::write(&path, "event_date = \"01-01-2027\"\n").expect("write config");

    let args = CliArgs {
        config: Some(path.clone()),
        ..CliArgs::default()
    };
    let config = StartupConfig::load(&args).expect("load config");
    assert_eq!(config.event_date, "01-01-2027");

    fs::remove_file(path).expect("cleanup");
}

#[test]
fn missing_explicit_config_path_fails() {
    let args = CliArgs {
        config: Some(env::temp_dir().join("invitebuddy_definitely_missing.toml")),
        ..CliArgs::default()
    };
    assert!(StartupConfig::load(&args).is_err());
}
