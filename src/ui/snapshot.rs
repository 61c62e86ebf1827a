//! Off-screen rendering for `--snapshot` and tests.

use anyhow::{Context, Result};
use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};
use unicode_width::UnicodeWidthStr;

use super::render::draw;
use super::theme::Theme;
use crate::dashboard::Navigator;
use crate::screen::HomeScreen;

/// Draw one frame of `screen` into a `width` x `height` buffer and return it
/// as text, one line per row with trailing blanks trimmed.
pub fn render_text<N: Navigator>(
    screen: &HomeScreen<N>,
    theme: &Theme,
    width: u16,
    height: u16,
) -> Result<String> {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).context("failed to init snapshot backend")?;
    terminal
        .draw(|frame| {
            draw(frame, screen, theme);
        })
        .context("failed to draw snapshot frame")?;
    Ok(buffer_to_string(terminal.backend().buffer()))
}

#[must_use]
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut out = String::new();
    for y in area.top()..area.bottom() {
        let mut line = String::new();
        // Cells trailing a wide glyph hold a placeholder.
        let mut covered = 0usize;
        for x in area.left()..area.right() {
            let Some(cell) = buffer.cell((x, y)) else {
                continue;
            };
            if covered > 0 {
                covered -= 1;
                continue;
            }
            let symbol = cell.symbol();
            line.push_str(symbol);
            covered = UnicodeWidthStr::width(symbol).saturating_sub(1);
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}
