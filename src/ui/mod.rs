//! Terminal rendering: theme, glyphs, geometry, and the frame painter.

pub mod glyphs;
pub mod layout;
pub mod render;
pub mod snapshot;
pub mod theme;

pub use glyphs::GlyphSet;
pub use layout::{BannerLayout, HitTarget, ScreenLayout};
pub use render::draw;
pub use snapshot::{buffer_to_string, render_text};
pub use theme::{blend, Palette, Theme};
