//! CLI flag schema. Unset flags fall back to the user config file, then to
//! built-in defaults.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::animation::Easing;

pub const MAX_TRANSITION_MS: u64 = 10_000;
pub const MIN_FRAME_MS: u64 = 4;
pub const MAX_FRAME_MS: u64 = 250;
pub const DEFAULT_FRAME_MS: u64 = 16;
pub const DEFAULT_SPRING_TENSION: f64 = 40.0;
pub const DEFAULT_SPRING_FRICTION: f64 = 5.0;
pub const MAX_SPRING_PARAM: f64 = 1000.0;
pub const DEFAULT_SNAPSHOT_WIDTH: u16 = 72;
pub const DEFAULT_SNAPSHOT_HEIGHT: u16 = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum SnapshotFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Parser, Clone)]
#[command(name = "respondee", about = "Respondee home dashboard", version)]
pub struct AppConfig {
    /// Profile name shown in the greeting
    #[arg(long = "name")]
    pub name: Option<String>,

    /// Banner fade-out duration (ms)
    #[arg(long = "banner-fade-ms", value_parser = parse_transition_ms)]
    pub banner_fade_ms: Option<u64>,

    /// Bubble shrink duration before the banner returns (ms)
    #[arg(long = "bubble-exit-ms", value_parser = parse_transition_ms)]
    pub bubble_exit_ms: Option<u64>,

    /// Easing curve for the banner fade and bubble shrink
    #[arg(long = "fade-easing", value_enum)]
    pub fade_easing: Option<Easing>,

    /// Bubble entrance spring friction (origami units, 0 < x <= 1000)
    #[arg(long = "spring-friction", value_parser = parse_spring_param)]
    pub spring_friction: Option<f64>,

    /// Bubble entrance spring tension (origami units, 0 < x <= 1000)
    #[arg(long = "spring-tension", value_parser = parse_spring_param)]
    pub spring_tension: Option<f64>,

    /// Redraw interval while an animation runs (ms)
    #[arg(long = "frame-ms", value_parser = parse_frame_ms)]
    pub frame_ms: Option<u64>,

    /// Use ASCII glyphs and borders
    #[arg(long = "ascii", default_value_t = false)]
    pub ascii: bool,

    /// Disable colors (also honored via NO_COLOR)
    #[arg(long = "no-color", default_value_t = false)]
    pub no_color: bool,

    /// User config file (defaults to <config dir>/respondee/config.toml)
    #[arg(long = "config")]
    pub config: Option<PathBuf>,

    /// Write structured trace logs (path from RESPONDEE_TRACE_LOG)
    #[arg(long = "logs", default_value_t = false)]
    pub logs: bool,

    /// Disable all logging, overriding --logs
    #[arg(long = "no-logs", default_value_t = false)]
    pub no_logs: bool,

    /// Print one frame and exit instead of running interactively
    #[arg(long = "snapshot", default_value_t = false)]
    pub snapshot: bool,

    /// Dismiss the banner and settle the transition before the snapshot
    #[arg(long = "snapshot-dismissed", default_value_t = false, requires = "snapshot")]
    pub snapshot_dismissed: bool,

    /// Snapshot output format
    #[arg(long = "snapshot-format", value_enum, default_value_t = SnapshotFormat::Text)]
    pub snapshot_format: SnapshotFormat,

    /// Snapshot width in columns
    #[arg(
        long = "width",
        default_value_t = DEFAULT_SNAPSHOT_WIDTH,
        value_parser = clap::value_parser!(u16).range(10..=500)
    )]
    pub width: u16,

    /// Snapshot height in rows
    #[arg(
        long = "height",
        default_value_t = DEFAULT_SNAPSHOT_HEIGHT,
        value_parser = clap::value_parser!(u16).range(4..=500)
    )]
    pub height: u16,
}

fn parse_transition_ms(raw: &str) -> Result<u64, String> {
    let value: u64 = raw
        .parse()
        .map_err(|_| format!("invalid duration '{raw}'"))?;
    if value > MAX_TRANSITION_MS {
        return Err(format!(
            "duration must be between 0 and {MAX_TRANSITION_MS} ms"
        ));
    }
    Ok(value)
}

fn parse_frame_ms(raw: &str) -> Result<u64, String> {
    let value: u64 = raw
        .parse()
        .map_err(|_| format!("invalid frame interval '{raw}'"))?;
    if !(MIN_FRAME_MS..=MAX_FRAME_MS).contains(&value) {
        return Err(format!(
            "frame interval must be between {MIN_FRAME_MS} and {MAX_FRAME_MS} ms"
        ));
    }
    Ok(value)
}

fn parse_spring_param(raw: &str) -> Result<f64, String> {
    let value: f64 = raw
        .parse()
        .map_err(|_| format!("invalid number '{raw}'"))?;
    if !value.is_finite() || value <= 0.0 || value > MAX_SPRING_PARAM {
        return Err(format!(
            "value must be greater than 0 and at most {MAX_SPRING_PARAM}"
        ));
    }
    Ok(value)
}
