//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for sandboxed working directory and env vars.

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use pretty_assertions::assert_eq;
use soonami_config::{AlertLabels, DisplayFormat, SoonamiConfig, TimeZoneChoice};

#[test]
fn loads_display_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[display]
timezone = "utc"
format = "json"
"#,
        )?;

        let config: SoonamiConfig = Figment::from(Serialized::defaults(SoonamiConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.display.timezone, TimeZoneChoice::Utc);
        assert_eq!(config.display.format, DisplayFormat::Json);
        assert_eq!(config.labels, AlertLabels::default());
        Ok(())
    });
}

#[test]
fn partial_labels_keep_remaining_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[labels]
alert_yes = "oui"
"#,
        )?;

        let config: SoonamiConfig = Figment::from(Serialized::defaults(SoonamiConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.labels.alert_yes, "oui");
        assert_eq!(config.labels.alert_no, "no");
        assert_eq!(config.labels.alert_not_available, "not available");
        Ok(())
    });
}

#[test]
fn project_config_is_picked_up_by_load() {
    Jail::expect_with(|jail| {
        jail.create_dir(".soonami")?;
        jail.create_file(
            ".soonami/config.toml",
            r#"
[display]
timezone = "utc"

[labels]
alert_not_available = "unknown"
"#,
        )?;

        let config = SoonamiConfig::load().expect("config loads");
        assert_eq!(config.display.timezone, TimeZoneChoice::Utc);
        assert_eq!(config.labels.alert_not_available, "unknown");
        Ok(())
    });
}

#[test]
fn unknown_timezone_is_rejected() {
    Jail::expect_with(|jail| {
        jail.create_dir(".soonami")?;
        jail.create_file(
            ".soonami/config.toml",
            r#"
[display]
timezone = "mars"
"#,
        )?;

        assert!(SoonamiConfig::load().is_err());
        Ok(())
    });
}

#[test]
fn blank_label_in_file_is_rejected_by_load() {
    Jail::expect_with(|jail| {
        jail.create_dir(".soonami")?;
        jail.create_file(
            ".soonami/config.toml",
            r#"
[labels]
alert_no = ""
"#,
        )?;

        let err = SoonamiConfig::load().unwrap_err();
        assert!(err.to_string().contains("labels.alert_no"));
        Ok(())
    });
}
