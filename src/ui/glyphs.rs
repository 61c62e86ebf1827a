//! Icon ids to terminal glyphs, with an ASCII fallback set.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GlyphSet {
    #[default]
    Unicode,
    Ascii,
}

/// Glyph for a shortcut icon id. Unknown ids get a neutral bullet.
#[must_use]
pub fn icon_glyph(icon_id: &str, set: GlyphSet) -> &'static str {
    match set {
        GlyphSet::Unicode => match icon_id {
            "document-text-outline" => "✎",
            "construct-outline" => "⚒",
            "time-outline" => "◷",
            "chatbox-ellipses-outline" => "✉",
            "map-outline" => "⌖",
            "stats-chart-outline" => "▥",
            "help-circle-outline" => "?",
            "megaphone-outline" => "❢",
            _ => "•",
        },
        GlyphSet::Ascii => match icon_id {
            "document-text-outline" => "F",
            "construct-outline" => "R",
            "time-outline" => "T",
            "chatbox-ellipses-outline" => "V",
            "map-outline" => "M",
            "stats-chart-outline" => "A",
            "help-circle-outline" => "?",
            "megaphone-outline" => "!",
            _ => "*",
        },
    }
}

#[must_use]
pub fn close_glyph(set: GlyphSet) -> &'static str {
    match set {
        GlyphSet::Unicode => "✕",
        GlyphSet::Ascii => "x",
    }
}

#[must_use]
pub fn arrow_glyph(set: GlyphSet) -> &'static str {
    match set {
        GlyphSet::Unicode => "➤",
        GlyphSet::Ascii => ">",
    }
}

/// Person with a verified badge, drawn inside the bubble.
#[must_use]
pub fn bubble_glyphs(set: GlyphSet) -> (&'static str, &'static str) {
    match set {
        GlyphSet::Unicode => ("◉", "✔"),
        GlyphSet::Ascii => ("@", "+"),
    }
}

#[must_use]
pub fn profile_glyph(set: GlyphSet) -> &'static str {
    match set {
        GlyphSet::Unicode => "◉",
        GlyphSet::Ascii => "@",
    }
}

#[must_use]
pub fn announcement_glyph(set: GlyphSet) -> &'static str {
    match set {
        GlyphSet::Unicode => "✦",
        GlyphSet::Ascii => "*",
    }
}

#[must_use]
pub fn pending_glyph(set: GlyphSet) -> &'static str {
    match set {
        GlyphSet::Unicode => "↻",
        GlyphSet::Ascii => "~",
    }
}

#[must_use]
pub fn resolved_glyph(set: GlyphSet) -> &'static str {
    match set {
        GlyphSet::Unicode => "✔",
        GlyphSet::Ascii => "+",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::ACTIONS;
    use unicode_width::UnicodeWidthStr;

    #[test]
    fn every_shortcut_has_a_dedicated_glyph() {
        for action in ACTIONS {
            assert_ne!(icon_glyph(action.icon_id, GlyphSet::Unicode), "•");
            assert_ne!(icon_glyph(action.icon_id, GlyphSet::Ascii), "*");
        }
    }

    #[test]
    fn unicode_glyphs_are_single_column() {
        for action in ACTIONS {
            let glyph = icon_glyph(action.icon_id, GlyphSet::Unicode);
            assert_eq!(UnicodeWidthStr::width(glyph), 1, "{glyph}");
        }
    }

    #[test]
    fn ascii_set_stays_ascii() {
        let (person, badge) = bubble_glyphs(GlyphSet::Ascii);
        for glyph in [
            person,
            badge,
            close_glyph(GlyphSet::Ascii),
            arrow_glyph(GlyphSet::Ascii),
            pending_glyph(GlyphSet::Ascii),
        ] {
            assert!(glyph.is_ascii(), "{glyph}");
        }
    }

    #[test]
    fn unknown_icon_falls_back() {
        assert_eq!(icon_glyph("rocket", GlyphSet::Unicode), "•");
    }
}
