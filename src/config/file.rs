//! Optional user config (`<config dir>/respondee/config.toml`).
//!
//! Every key is optional. CLI flags take precedence over values loaded here.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::animation::Easing;

const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV: &str = "RESPONDEE_CONFIG_DIR";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct UserConfig {
    pub profile: ProfileSection,
    pub animation: AnimationSection,
    pub display: DisplaySection,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ProfileSection {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AnimationSection {
    pub banner_fade_ms: Option<u64>,
    pub bubble_exit_ms: Option<u64>,
    pub fade_easing: Option<Easing>,
    pub spring_friction: Option<f64>,
    pub spring_tension: Option<f64>,
    pub frame_ms: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DisplaySection {
    pub ascii: Option<bool>,
    pub no_color: Option<bool>,
}

fn config_dir() -> Option<PathBuf> {
    if let Ok(dir) = env::var(CONFIG_DIR_ENV) {
        let trimmed = dir.trim();
        if !trimmed.is_empty() {
            return Some(PathBuf::from(trimmed));
        }
    }
    dirs::config_dir().map(|dir| dir.join("respondee"))
}

/// Default config file location, if a config directory can be determined.
#[must_use]
pub fn config_file_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(CONFIG_FILE))
}

/// Load the user config.
///
/// An `explicit` path must exist. The default location is optional: a
/// missing file yields defaults. Unreadable or malformed files are errors
/// either way.
pub fn load_user_config(explicit: Option<&Path>) -> Result<UserConfig> {
    match explicit {
        Some(path) => load_from(path, true),
        None => match config_file_path() {
            Some(path) => load_from(&path, false),
            None => Ok(UserConfig::default()),
        },
    }
}

fn load_from(path: &Path, required: bool) -> Result<UserConfig> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == io::ErrorKind::NotFound && !required => {
            tracing::debug!(path = %path.display(), "no user config; using defaults");
            return Ok(UserConfig::default());
        }
        Err(err) => {
            return Err(err).with_context(|| format!("failed to read config {}", path.display()))
        }
    };
    let config = parse_user_config(&contents)
        .with_context(|| format!("failed to parse config {}", path.display()))?;
    tracing::debug!(path = %path.display(), "loaded user config");
    Ok(config)
}

/// Parse config from TOML text. Unknown keys are ignored.
pub fn parse_user_config(contents: &str) -> Result<UserConfig, toml::de::Error> {
    toml::from_str(contents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn unique_path(suffix: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time should be after epoch")
            .as_nanos();
        env::temp_dir().join(format!("respondee-config-{suffix}-{nanos}.toml"))
    }

    #[test]
    fn parses_every_section() {
        let config = parse_user_config(
            r#"
[profile]
name = "Ada"

[animation]
banner_fade_ms = 450
bubble_exit_ms = 120
fade_easing = "ease-in-out"
spring_friction = 7.5
spring_tension = 60
frame_ms = 33

[display]
ascii = true
no_color = false
"#,
        )
        .expect("valid config");
        assert_eq!(config.profile.name.as_deref(), Some("Ada"));
        assert_eq!(config.animation.banner_fade_ms, Some(450));
        assert_eq!(config.animation.bubble_exit_ms, Some(120));
        assert_eq!(config.animation.fade_easing, Some(Easing::EaseInOut));
        assert_eq!(config.animation.spring_friction, Some(7.5));
        assert_eq!(config.animation.spring_tension, Some(60.0));
        assert_eq!(config.animation.frame_ms, Some(33));
        assert_eq!(config.display.ascii, Some(true));
        assert_eq!(config.display.no_color, Some(false));
    }

    #[test]
    fn empty_and_partial_files_fall_back_to_defaults() {
        assert_eq!(parse_user_config("").expect("empty"), UserConfig::default());
        let partial = parse_user_config("[display]\nascii = true\n").expect("partial");
        assert_eq!(partial.profile, ProfileSection::default());
        assert_eq!(partial.display.ascii, Some(true));
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let config = parse_user_config("theme = \"dark\"\n[profile]\nname = \"Bo\"\nage = 3\n")
            .expect("unknown keys");
        assert_eq!(config.profile.name.as_deref(), Some("Bo"));
    }

    #[test]
    fn wrong_types_are_rejected() {
        assert!(parse_user_config("[animation]\nbanner_fade_ms = \"slow\"\n").is_err());
        assert!(parse_user_config("[animation]\nfade_easing = \"bounce\"\n").is_err());
        assert!(parse_user_config("[profile\n").is_err());
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let path = unique_path("missing");
        let err = load_user_config(Some(&path)).expect_err("missing explicit config");
        assert!(format!("{err:#}").contains("failed to read config"));
    }

    #[test]
    fn missing_optional_file_yields_defaults() {
        let path = unique_path("optional");
        assert_eq!(
            load_from(&path, false).expect("optional config"),
            UserConfig::default()
        );
    }

    #[test]
    fn explicit_file_is_loaded_and_parse_errors_carry_path() {
        let good = unique_path("good");
        fs::write(&good, "[profile]\nname = \"Cy\"\n").expect("write config");
        let config = load_user_config(Some(&good)).expect("load config");
        assert_eq!(config.profile.name.as_deref(), Some("Cy"));
        let _ = fs::remove_file(&good);

        let bad = unique_path("bad");
        fs::write(&bad, "[animation]\nframe_ms = true\n").expect("write config");
        let err = load_user_config(Some(&bad)).expect_err("malformed config");
        assert!(format!("{err:#}").contains("failed to parse config"));
        let _ = fs::remove_file(&bad);
    }
}
