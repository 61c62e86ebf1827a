//! Draws one dashboard frame and returns the layout it used for hit testing.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    symbols::border,
    widgets::{Block, BorderType, Clear, Paragraph},
    Frame,
};

use super::glyphs::{
    announcement_glyph, arrow_glyph, bubble_glyphs, close_glyph, icon_glyph, pending_glyph,
    profile_glyph, resolved_glyph, GlyphSet,
};
use super::layout::{BannerLayout, ScreenLayout};
use super::theme::Theme;
use crate::dashboard::cards::{
    ANNOUNCEMENT, LATEST_COMPLAINT, RECENT_ACTIVITY_EMPTY, STAT_CARDS, VERIFY_BUTTON,
    VERIFY_DESCRIPTION, VERIFY_TITLE,
};
use crate::dashboard::{Navigator, ACTIONS};
use crate::prompt::PresentationState;
use crate::screen::HomeScreen;

const LOGO: &str = "RESPONDEE";
const TAGLINE: &str = "civic complaints, tracked";

pub fn draw<N: Navigator>(
    frame: &mut Frame<'_>,
    screen: &HomeScreen<N>,
    theme: &Theme,
) -> ScreenLayout {
    let area = frame.area();
    let prompt = screen.prompt();
    let layout = ScreenLayout::compute(area, prompt.state());

    frame.render_widget(Block::new().style(theme.base()), area);
    draw_header(frame, layout.header, screen.profile_name(), theme);
    draw_announcement(frame, layout.announcement, theme);
    draw_grid(frame, &layout.grid_cells, screen.focused(), theme);
    draw_summary(frame, layout.summary, theme);
    draw_stats(frame, layout.stats, theme);
    draw_activity(frame, layout.activity, theme);
    draw_footer(frame, layout.footer, screen, theme);

    match prompt.state() {
        PresentationState::BannerVisible => {
            if let Some(banner) = &layout.banner {
                draw_banner(frame, banner, prompt.banner_opacity(), theme);
            }
        }
        PresentationState::BubbleVisible => {
            if let Some(bubble) = layout.bubble_area(prompt.bubble_scale(), area) {
                draw_bubble(frame, bubble, theme);
            }
        }
    }
    layout
}

fn bold(style: Style) -> Style {
    style.add_modifier(Modifier::BOLD)
}

/// Bordered card; ASCII glyph sets get `+-|` corners.
fn card_block(theme: &Theme) -> Block<'static> {
    let block = Block::bordered();
    match theme.glyphs {
        GlyphSet::Unicode => block.border_type(BorderType::Rounded),
        GlyphSet::Ascii => block.border_set(border::Set {
            top_left: "+",
            top_right: "+",
            bottom_left: "+",
            bottom_right: "+",
            vertical_left: "|",
            vertical_right: "|",
            horizontal_top: "-",
            horizontal_bottom: "-",
        }),
    }
}

fn draw_header(frame: &mut Frame<'_>, area: Rect, name: &str, theme: &Theme) {
    let colors = &theme.colors;
    let lines = vec![
        Line::from(vec![
            Span::styled(LOGO, bold(theme.base().fg(colors.accent))),
            Span::styled(format!("  {TAGLINE}"), theme.base().fg(colors.dim)),
        ]),
        Line::from(vec![
            Span::styled(
                format!("{} ", profile_glyph(theme.glyphs)),
                theme.base().fg(colors.text),
            ),
            Span::styled(format!("Hi, {name}"), bold(theme.base().fg(colors.accent))),
        ]),
        Line::styled("  Verify your account", theme.base().fg(colors.muted)),
    ];
    frame.render_widget(Paragraph::new(lines).style(theme.base()), area);
}

fn draw_announcement(frame: &mut Frame<'_>, area: Rect, theme: &Theme) {
    let colors = &theme.colors;
    let style = Style::default()
        .fg(colors.announcement_fg)
        .bg(colors.announcement_bg);
    let block = card_block(theme).style(style);
    let lines = vec![
        Line::styled(
            format!("{} {}", announcement_glyph(theme.glyphs), ANNOUNCEMENT.title),
            bold(style),
        ),
        Line::styled(ANNOUNCEMENT.body, style),
    ];
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_grid(frame: &mut Frame<'_>, cells: &[Rect], focused: usize, theme: &Theme) {
    let colors = &theme.colors;
    for (index, (action, cell)) in ACTIONS.iter().zip(cells).enumerate() {
        let icon_style = Style::default()
            .fg(colors.accent)
            .bg(colors.accent_soft)
            .add_modifier(Modifier::BOLD);
        let label_style = if index == focused {
            bold(theme.base().fg(colors.accent)).add_modifier(Modifier::UNDERLINED)
        } else {
            theme.base().fg(colors.text)
        };
        let lines = vec![
            Line::from(Span::styled(
                format!(" {} ", icon_glyph(action.icon_id, theme.glyphs)),
                icon_style,
            )),
            Line::from(Span::styled(action.label, label_style)),
        ];
        frame.render_widget(
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .style(theme.base()),
            *cell,
        );
    }
}

fn draw_summary(frame: &mut Frame<'_>, area: Rect, theme: &Theme) {
    let colors = &theme.colors;
    let style = Style::default().fg(colors.text).bg(colors.summary_bg);
    let block = card_block(theme).style(style);
    let inner = block.inner(area);
    let status = Span::styled(
        format!(
            " {} {} ",
            pending_glyph(theme.glyphs),
            LATEST_COMPLAINT.status.label()
        ),
        Style::default()
            .fg(colors.pending_fg)
            .bg(colors.pending_bg)
            .add_modifier(Modifier::BOLD),
    );
    let lines = vec![
        Line::styled(LATEST_COMPLAINT.title, bold(style)),
        Line::styled(LATEST_COMPLAINT.submitted, style.fg(colors.dim)),
        Line::from(status),
    ];
    frame.render_widget(Paragraph::new(lines).block(block), area);

    if inner.height >= 3 {
        let last_row = Rect::new(inner.x, inner.y + 2, inner.width, 1);
        frame.render_widget(
            Paragraph::new(Line::styled("View All", style.fg(colors.accent)))
                .alignment(Alignment::Right),
            last_row,
        );
    }
}

fn draw_stats(frame: &mut Frame<'_>, areas: [Rect; 2], theme: &Theme) {
    let colors = &theme.colors;
    let glyphs = [pending_glyph(theme.glyphs), resolved_glyph(theme.glyphs)];
    for ((card, area), glyph) in STAT_CARDS.iter().zip(areas).zip(glyphs) {
        let style = Style::default().fg(colors.text).bg(colors.stat_bg);
        let block = card_block(theme).style(style);
        let lines = vec![
            Line::styled(card.label, bold(style)),
            Line::styled(format!("{glyph} {}", card.value), style.fg(colors.muted)),
        ];
        frame.render_widget(
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .block(block),
            area,
        );
    }
}

fn draw_activity(frame: &mut Frame<'_>, area: Rect, theme: &Theme) {
    let colors = &theme.colors;
    let lines = vec![
        Line::styled("Recent Activity", bold(theme.base().fg(colors.text))),
        Line::styled(RECENT_ACTIVITY_EMPTY, theme.base().fg(colors.dim)),
    ];
    frame.render_widget(Paragraph::new(lines).style(theme.base()), area);
}

fn draw_footer<N: Navigator>(
    frame: &mut Frame<'_>,
    area: Rect,
    screen: &HomeScreen<N>,
    theme: &Theme,
) {
    let colors = &theme.colors;
    let hint = theme.base().fg(colors.dim);
    let key = bold(theme.base().fg(colors.text));
    let mut spans = Vec::new();
    for (keys, action) in [
        ("q", "quit"),
        ("1-8", "open"),
        ("x", "dismiss"),
        ("b", "banner"),
        ("v", "verify"),
    ] {
        spans.push(Span::styled(keys, key));
        spans.push(Span::styled(format!(" {action}  "), hint));
    }
    if let Some(route) = screen.navigator().last_route() {
        spans.push(Span::styled("last: ", hint));
        spans.push(Span::styled(route.to_string(), theme.base().fg(colors.accent)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)).style(theme.base()), area);
}

fn draw_banner(frame: &mut Frame<'_>, banner: &BannerLayout, opacity: f32, theme: &Theme) {
    if opacity <= 0.0 {
        return;
    }
    let style = theme.banner(opacity);
    let block = card_block(theme).style(style);
    let inner = block.inner(banner.area);
    frame.render_widget(Clear, banner.area);
    frame.render_widget(block, banner.area);

    let text_width = banner
        .verify_button
        .x
        .saturating_sub(inner.x)
        .saturating_sub(1);
    let text_area = Rect::new(inner.x, inner.y, text_width, inner.height);
    let lines = vec![
        Line::styled(VERIFY_TITLE, bold(style)),
        Line::styled(VERIFY_DESCRIPTION, style),
    ];
    frame.render_widget(Paragraph::new(lines).style(style), text_area);

    let button = format!("{VERIFY_BUTTON} {}", arrow_glyph(theme.glyphs));
    frame.render_widget(
        Paragraph::new(Line::from(button))
            .alignment(Alignment::Center)
            .style(theme.banner_button(opacity)),
        banner.verify_button,
    );
    frame.render_widget(
        Paragraph::new(format!("[{}]", close_glyph(theme.glyphs))).style(bold(style)),
        banner.close_button,
    );
}

fn draw_bubble(frame: &mut Frame<'_>, area: Rect, theme: &Theme) {
    let colors = &theme.colors;
    let style = Style::default().fg(colors.text).bg(colors.bubble_bg);
    let (person, badge) = bubble_glyphs(theme.glyphs);
    frame.render_widget(Clear, area);

    let content = Line::from(vec![
        Span::styled(person, bold(style)),
        Span::styled(badge, bold(style.fg(colors.badge))),
    ]);
    if area.width >= 4 && area.height >= 3 {
        let block = card_block(theme).style(style);
        frame.render_widget(
            Paragraph::new(content)
                .alignment(Alignment::Center)
                .block(block),
            area,
        );
    } else {
        frame.render_widget(
            Paragraph::new(Line::styled(person, bold(style)))
                .alignment(Alignment::Center)
                .style(style),
            area,
        );
    }
}
