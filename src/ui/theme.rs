//! Dashboard palette, glyph set, and opacity blending.

use ratatui::style::{Color, Modifier, Style};

use super::glyphs::GlyphSet;

/// Colors for every surface on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub muted: Color,
    pub dim: Color,
    pub accent: Color,
    pub accent_soft: Color,
    pub banner_bg: Color,
    pub banner_fg: Color,
    pub announcement_bg: Color,
    pub announcement_fg: Color,
    pub summary_bg: Color,
    pub stat_bg: Color,
    pub pending_bg: Color,
    pub pending_fg: Color,
    pub badge: Color,
    pub bubble_bg: Color,
}

impl Palette {
    #[must_use]
    pub const fn respondee() -> Self {
        Self {
            background: Color::Rgb(255, 251, 252),
            text: Color::Rgb(62, 74, 90),
            muted: Color::Rgb(91, 107, 127),
            dim: Color::Rgb(119, 119, 119),
            accent: Color::Rgb(254, 113, 45),
            accent_soft: Color::Rgb(255, 236, 226),
            banner_bg: Color::Rgb(75, 97, 118),
            banner_fg: Color::Rgb(255, 255, 255),
            announcement_bg: Color::Rgb(208, 230, 255),
            announcement_fg: Color::Rgb(30, 58, 138),
            summary_bg: Color::Rgb(233, 237, 242),
            stat_bg: Color::Rgb(246, 246, 246),
            pending_bg: Color::Rgb(255, 229, 180),
            pending_fg: Color::Rgb(166, 108, 0),
            badge: Color::Rgb(45, 196, 164),
            bubble_bg: Color::Rgb(255, 255, 255),
        }
    }

    /// Terminal defaults everywhere.
    #[must_use]
    pub const fn monochrome() -> Self {
        Self {
            background: Color::Reset,
            text: Color::Reset,
            muted: Color::Reset,
            dim: Color::Reset,
            accent: Color::Reset,
            accent_soft: Color::Reset,
            banner_bg: Color::Reset,
            banner_fg: Color::Reset,
            announcement_bg: Color::Reset,
            announcement_fg: Color::Reset,
            summary_bg: Color::Reset,
            stat_bg: Color::Reset,
            pending_bg: Color::Reset,
            pending_fg: Color::Reset,
            badge: Color::Reset,
            bubble_bg: Color::Reset,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub colors: Palette,
    pub glyphs: GlyphSet,
    pub color_enabled: bool,
}

impl Theme {
    #[must_use]
    pub fn new(glyphs: GlyphSet, color_enabled: bool) -> Self {
        let colors = if color_enabled {
            Palette::respondee()
        } else {
            Palette::monochrome()
        };
        Self {
            colors,
            glyphs,
            color_enabled,
        }
    }

    #[must_use]
    pub fn base(&self) -> Style {
        Style::default()
            .fg(self.colors.text)
            .bg(self.colors.background)
    }

    /// Banner style at `opacity`, faded toward the screen background.
    #[must_use]
    pub fn banner(&self, opacity: f32) -> Style {
        let style = Style::default()
            .fg(blend(self.colors.banner_fg, self.colors.background, opacity))
            .bg(blend(self.colors.banner_bg, self.colors.background, opacity));
        if !self.color_enabled && opacity < 0.5 {
            style.add_modifier(Modifier::DIM)
        } else {
            style
        }
    }

    #[must_use]
    pub fn banner_button(&self, opacity: f32) -> Style {
        let style = Style::default()
            .fg(blend(self.colors.banner_fg, self.colors.background, opacity))
            .bg(blend(self.colors.accent, self.colors.background, opacity))
            .add_modifier(Modifier::BOLD);
        if self.color_enabled {
            style
        } else if opacity < 0.5 {
            style.add_modifier(Modifier::DIM)
        } else {
            style.add_modifier(Modifier::REVERSED)
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(GlyphSet::Unicode, true)
    }
}

/// Mix `fg` over `bg` with `alpha` in [0, 1].
///
/// Only RGB pairs can be mixed; anything else switches at the halfway point.
#[must_use]
pub fn blend(fg: Color, bg: Color, alpha: f32) -> Color {
    let alpha = alpha.clamp(0.0, 1.0);
    match (fg, bg) {
        (Color::Rgb(fr, fg_, fb), Color::Rgb(br, bg_, bb)) => {
            let mix = |front: u8, back: u8| -> u8 {
                let value = f32::from(back) + (f32::from(front) - f32::from(back)) * alpha;
                value.round().clamp(0.0, 255.0) as u8
            };
            Color::Rgb(mix(fr, br), mix(fg_, bg_), mix(fb, bb))
        }
        _ if alpha >= 0.5 => fg,
        _ => bg,
    }
}
