//! Configuration assembly: CLI flags layered over the user config file, then
//! validated into the values the screen and event loop run with.

mod cli;
mod file;

pub use cli::{
    AppConfig, SnapshotFormat, DEFAULT_FRAME_MS, DEFAULT_SNAPSHOT_HEIGHT, DEFAULT_SNAPSHOT_WIDTH,
    DEFAULT_SPRING_FRICTION, DEFAULT_SPRING_TENSION, MAX_FRAME_MS, MAX_SPRING_PARAM,
    MAX_TRANSITION_MS, MIN_FRAME_MS,
};
pub use file::{
    config_file_path, load_user_config, parse_user_config, AnimationSection, DisplaySection,
    ProfileSection, UserConfig,
};

use anyhow::{bail, Result};
use std::env;
use std::time::Duration;

use crate::animation::SpringConfig;
use crate::prompt::{TransitionTuning, DEFAULT_BANNER_FADE, DEFAULT_BUBBLE_EXIT};
use crate::screen::ScreenOptions;
use crate::ui::{GlyphSet, Theme};

const DEFAULT_PROFILE_NAME: &str = "Name";

/// Fully merged and validated runtime settings.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub profile_name: String,
    pub tuning: TransitionTuning,
    pub frame_interval: Duration,
    pub glyphs: GlyphSet,
    pub color: bool,
}

impl ResolvedConfig {
    #[must_use]
    pub fn screen_options(&self) -> ScreenOptions {
        ScreenOptions {
            profile_name: self.profile_name.clone(),
            tuning: self.tuning,
        }
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        Theme::new(self.glyphs, self.color)
    }
}

impl AppConfig {
    /// Merge with `user` (CLI wins) and validate.
    pub fn resolve(&self, user: &UserConfig) -> Result<ResolvedConfig> {
        let animation = &user.animation;

        let profile_name = self
            .name
            .clone()
            .or_else(|| user.profile.name.clone())
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| DEFAULT_PROFILE_NAME.to_string());

        let banner_fade = transition_duration(
            "banner_fade_ms",
            self.banner_fade_ms.or(animation.banner_fade_ms),
            DEFAULT_BANNER_FADE,
        )?;
        let bubble_exit = transition_duration(
            "bubble_exit_ms",
            self.bubble_exit_ms.or(animation.bubble_exit_ms),
            DEFAULT_BUBBLE_EXIT,
        )?;
        let tension = spring_param(
            "spring_tension",
            self.spring_tension.or(animation.spring_tension),
            DEFAULT_SPRING_TENSION,
        )?;
        let friction = spring_param(
            "spring_friction",
            self.spring_friction.or(animation.spring_friction),
            DEFAULT_SPRING_FRICTION,
        )?;

        let spring = SpringConfig::from_origami(tension, friction);
        if !spring.is_valid() {
            bail!(
                "spring_tension {tension} and spring_friction {friction} give an unusable spring"
            );
        }

        let frame_ms = self
            .frame_ms
            .or(animation.frame_ms)
            .unwrap_or(DEFAULT_FRAME_MS);
        if !(MIN_FRAME_MS..=MAX_FRAME_MS).contains(&frame_ms) {
            bail!("frame_ms must be between {MIN_FRAME_MS} and {MAX_FRAME_MS}, got {frame_ms}");
        }

        let ascii = self.ascii || user.display.ascii.unwrap_or(false);
        let no_color = self.no_color || user.display.no_color.unwrap_or(false) || no_color_env();

        Ok(ResolvedConfig {
            profile_name,
            tuning: TransitionTuning {
                banner_fade,
                bubble_exit,
                fade_easing: self
                    .fade_easing
                    .or(animation.fade_easing)
                    .unwrap_or_default(),
                spring,
            },
            frame_interval: Duration::from_millis(frame_ms),
            glyphs: if ascii {
                GlyphSet::Ascii
            } else {
                GlyphSet::Unicode
            },
            color: !no_color,
        })
    }
}

fn transition_duration(key: &str, value: Option<u64>, default: Duration) -> Result<Duration> {
    match value {
        None => Ok(default),
        Some(ms) if ms <= MAX_TRANSITION_MS => Ok(Duration::from_millis(ms)),
        Some(ms) => bail!("{key} must be between 0 and {MAX_TRANSITION_MS}, got {ms}"),
    }
}

fn spring_param(key: &str, value: Option<f64>, default: f64) -> Result<f64> {
    let value = value.unwrap_or(default);
    if !value.is_finite() || value <= 0.0 || value > MAX_SPRING_PARAM {
        bail!("{key} must be greater than 0 and at most {MAX_SPRING_PARAM}, got {value}");
    }
    Ok(value)
}

/// `NO_COLOR` set to any non-empty value disables color.
fn no_color_env() -> bool {
    env::var_os("NO_COLOR").is_some_and(|value| !value.is_empty())
}
