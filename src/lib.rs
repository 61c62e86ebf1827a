//! Respondee home dashboard: a terminal rendition of the civic-complaint home
//! screen whose verification prompt swaps between a banner and a floating
//! bubble through explicitly sequenced animations.

pub mod animation;
pub mod config;
pub mod dashboard;
pub mod prompt;
pub mod screen;
pub mod telemetry;
pub mod terminal_restore;
pub mod ui;

pub use config::{AppConfig, ResolvedConfig};
pub use screen::{FrameSnapshot, HomeScreen, ScreenCommand, ScreenOptions};
