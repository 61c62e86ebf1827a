//! Screen geometry and hit testing.
//!
//! The layout is a pure function of the terminal area and the prompt's
//! presentation, so the renderer and the mouse handler agree on where every
//! tap target is.

use ratatui::layout::{Constraint, Layout, Margin, Rect};

use crate::dashboard::{ACTIONS, GRID_COLUMNS};
use crate::prompt::PresentationState;
use crate::screen::ScreenCommand;

const HEADER_ROWS: u16 = 3;
const ANNOUNCEMENT_ROWS: u16 = 4;
const GRID_ROW_HEIGHT: u16 = 3;
const SUMMARY_ROWS: u16 = 5;
const STAT_ROWS: u16 = 4;
const ACTIVITY_ROWS: u16 = 3;
const FOOTER_ROWS: u16 = 1;

const BANNER_HEIGHT: u16 = 4;
const BANNER_MIN_WIDTH: u16 = 24;
const VERIFY_BUTTON_WIDTH: u16 = 14;

/// Bubble footprint at scale 1.0.
pub const BUBBLE_WIDTH: u16 = 7;
pub const BUBBLE_HEIGHT: u16 = 3;

/// Something a click can land on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    Shortcut(usize),
    VerifyNow,
    DismissBanner,
    RestoreBubble,
    /// Inside the banner but on no button; swallows the click.
    BannerBody,
}

impl HitTarget {
    /// Command a click on this target issues, if any.
    #[must_use]
    pub fn command(self) -> Option<ScreenCommand> {
        match self {
            Self::Shortcut(index) => Some(ScreenCommand::ActivateShortcut(index)),
            Self::VerifyNow => Some(ScreenCommand::VerifyNow),
            Self::DismissBanner => Some(ScreenCommand::DismissBanner),
            Self::RestoreBubble => Some(ScreenCommand::RestoreBanner),
            Self::BannerBody => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BannerLayout {
    pub area: Rect,
    pub verify_button: Rect,
    pub close_button: Rect,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenLayout {
    pub header: Rect,
    pub announcement: Rect,
    pub grid_cells: Vec<Rect>,
    pub summary: Rect,
    pub stats: [Rect; 2],
    pub activity: Rect,
    pub footer: Rect,
    pub banner: Option<BannerLayout>,
    /// Full-size bubble footprint; also the bubble's tap target.
    pub bubble_anchor: Option<Rect>,
}

impl ScreenLayout {
    #[must_use]
    pub fn compute(area: Rect, presentation: PresentationState) -> Self {
        let content = area.inner(Margin {
            horizontal: 1,
            vertical: 0,
        });
        let [header, announcement, grid, summary, stats_row, activity, _, footer] =
            Layout::vertical([
                Constraint::Length(HEADER_ROWS),
                Constraint::Length(ANNOUNCEMENT_ROWS),
                Constraint::Length(GRID_ROW_HEIGHT * grid_rows()),
                Constraint::Length(SUMMARY_ROWS),
                Constraint::Length(STAT_ROWS),
                Constraint::Length(ACTIVITY_ROWS),
                Constraint::Min(0),
                Constraint::Length(FOOTER_ROWS),
            ])
            .areas(content);

        let [left_stat, _, right_stat] = Layout::horizontal([
            Constraint::Percentage(48),
            Constraint::Percentage(4),
            Constraint::Percentage(48),
        ])
        .areas(stats_row);

        let (banner, bubble_anchor) = match presentation {
            PresentationState::BannerVisible => (banner_layout(content, footer), None),
            PresentationState::BubbleVisible => (None, bubble_anchor(content, footer)),
        };

        Self {
            header,
            announcement,
            grid_cells: grid_cells(grid),
            summary,
            stats: [left_stat, right_stat],
            activity,
            footer,
            banner,
            bubble_anchor,
        }
    }

    /// Bubble footprint at `scale`, centered on the anchor and clipped to
    /// `bounds`. Spring overshoot can make it larger than the anchor.
    #[must_use]
    pub fn bubble_area(&self, scale: f32, bounds: Rect) -> Option<Rect> {
        let anchor = self.bubble_anchor?;
        scaled_rect(anchor, scale, bounds)
    }

    /// Topmost target under the cell at (`column`, `row`).
    #[must_use]
    pub fn hit_test(&self, column: u16, row: u16) -> Option<HitTarget> {
        if let Some(banner) = &self.banner {
            if contains(banner.close_button, column, row) {
                return Some(HitTarget::DismissBanner);
            }
            if contains(banner.verify_button, column, row) {
                return Some(HitTarget::VerifyNow);
            }
            if contains(banner.area, column, row) {
                return Some(HitTarget::BannerBody);
            }
        }
        if let Some(anchor) = self.bubble_anchor {
            if contains(anchor, column, row) {
                return Some(HitTarget::RestoreBubble);
            }
        }
        self.grid_cells
            .iter()
            .position(|cell| contains(*cell, column, row))
            .map(HitTarget::Shortcut)
    }
}

fn grid_rows() -> u16 {
    let rows = ACTIONS.len().div_ceil(GRID_COLUMNS);
    u16::try_from(rows).unwrap_or(u16::MAX)
}

fn grid_cells(grid: Rect) -> Vec<Rect> {
    let rows = Layout::vertical((0..grid_rows()).map(|_| Constraint::Length(GRID_ROW_HEIGHT)))
        .split(grid);
    let columns = u32::try_from(GRID_COLUMNS).unwrap_or(1);
    rows.iter()
        .flat_map(|row| {
            Layout::horizontal((0..columns).map(|_| Constraint::Ratio(1, columns)))
                .split(*row)
                .to_vec()
        })
        .take(ACTIONS.len())
        .collect()
}

fn banner_layout(content: Rect, footer: Rect) -> Option<BannerLayout> {
    if content.width < BANNER_MIN_WIDTH || footer.y < content.y + BANNER_HEIGHT + 1 {
        return None;
    }
    let area = Rect::new(
        content.x + 1,
        footer.y - BANNER_HEIGHT - 1,
        content.width - 2,
        BANNER_HEIGHT,
    );
    let close_button = Rect::new(area.right() - 4, area.y, 3, 1);
    let verify_button = Rect::new(
        area.right() - VERIFY_BUTTON_WIDTH - 2,
        area.y + 1,
        VERIFY_BUTTON_WIDTH,
        2,
    );
    Some(BannerLayout {
        area,
        verify_button,
        close_button,
    })
}

fn bubble_anchor(content: Rect, footer: Rect) -> Option<Rect> {
    if content.width < BUBBLE_WIDTH + 2 || footer.y < content.y + BUBBLE_HEIGHT + 1 {
        return None;
    }
    Some(Rect::new(
        content.right() - BUBBLE_WIDTH - 1,
        footer.y - BUBBLE_HEIGHT - 1,
        BUBBLE_WIDTH,
        BUBBLE_HEIGHT,
    ))
}

fn scaled_rect(anchor: Rect, scale: f32, bounds: Rect) -> Option<Rect> {
    if scale.is_nan() || scale <= 0.0 {
        return None;
    }
    let width = (f32::from(anchor.width) * scale).round() as u16;
    let height = (f32::from(anchor.height) * scale).round() as u16;
    if width == 0 || height == 0 {
        return None;
    }
    let center_x = i32::from(anchor.x) + i32::from(anchor.width) / 2;
    let center_y = i32::from(anchor.y) + i32::from(anchor.height) / 2;
    let x = (center_x - i32::from(width) / 2).max(0);
    let y = (center_y - i32::from(height) / 2).max(0);
    let rect = Rect::new(
        u16::try_from(x).unwrap_or(0),
        u16::try_from(y).unwrap_or(0),
        width,
        height,
    );
    let clipped = rect.intersection(bounds);
    (clipped.width > 0 && clipped.height > 0).then_some(clipped)
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x && column < rect.right() && row >= rect.y && row < rect.bottom()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area() -> Rect {
        Rect::new(0, 0, 72, 32)
    }

    #[test]
    fn grid_has_one_cell_per_shortcut_in_reading_order() {
        let layout = ScreenLayout::compute(area(), PresentationState::BannerVisible);
        assert_eq!(layout.grid_cells.len(), ACTIONS.len());
        assert_eq!(layout.grid_cells[0].y, layout.grid_cells[3].y);
        assert!(layout.grid_cells[4].y > layout.grid_cells[3].y);
        assert!(layout.grid_cells[1].x > layout.grid_cells[0].x);
    }

    #[test]
    fn banner_targets_exist_only_while_banner_visible() {
        let banner = ScreenLayout::compute(area(), PresentationState::BannerVisible);
        assert!(banner.banner.is_some());
        assert!(banner.bubble_anchor.is_none());

        let bubble = ScreenLayout::compute(area(), PresentationState::BubbleVisible);
        assert!(bubble.banner.is_none());
        assert!(bubble.bubble_anchor.is_some());
    }

    #[test]
    fn hit_test_finds_banner_buttons_first() {
        let layout = ScreenLayout::compute(area(), PresentationState::BannerVisible);
        let banner = layout.banner.expect("banner layout");
        assert_eq!(
            layout.hit_test(banner.close_button.x, banner.close_button.y),
            Some(HitTarget::DismissBanner)
        );
        assert_eq!(
            layout.hit_test(banner.verify_button.x + 1, banner.verify_button.y),
            Some(HitTarget::VerifyNow)
        );
        assert_eq!(
            layout.hit_test(banner.area.x + 1, banner.area.y + 1),
            Some(HitTarget::BannerBody)
        );
        assert_eq!(HitTarget::BannerBody.command(), None);
    }

    #[test]
    fn hit_test_maps_grid_cells_to_shortcuts() {
        let layout = ScreenLayout::compute(area(), PresentationState::BannerVisible);
        let cell = layout.grid_cells[6];
        assert_eq!(
            layout.hit_test(cell.x + 1, cell.y + 1),
            Some(HitTarget::Shortcut(6))
        );
        assert_eq!(
            HitTarget::Shortcut(6).command(),
            Some(ScreenCommand::ActivateShortcut(6))
        );
    }

    #[test]
    fn bubble_anchor_restores_banner() {
        let layout = ScreenLayout::compute(area(), PresentationState::BubbleVisible);
        let anchor = layout.bubble_anchor.expect("bubble anchor");
        assert_eq!(
            layout.hit_test(anchor.x, anchor.y),
            Some(HitTarget::RestoreBubble)
        );
        assert_eq!(
            HitTarget::RestoreBubble.command(),
            Some(ScreenCommand::RestoreBanner)
        );
    }

    #[test]
    fn bubble_area_scales_around_anchor_center() {
        let layout = ScreenLayout::compute(area(), PresentationState::BubbleVisible);
        let anchor = layout.bubble_anchor.expect("bubble anchor");
        assert_eq!(layout.bubble_area(1.0, area()), Some(anchor));
        assert_eq!(layout.bubble_area(0.0, area()), None);
        assert_eq!(layout.bubble_area(0.05, area()), None);

        let half = layout.bubble_area(0.5, area()).expect("half-size bubble");
        assert!(half.width < anchor.width);
        assert!(half.x > anchor.x);

        let overshoot = layout.bubble_area(1.15, area()).expect("overshoot bubble");
        assert!(overshoot.width > anchor.width);
    }

    #[test]
    fn tiny_terminal_drops_overlays() {
        let tiny = Rect::new(0, 0, 12, 6);
        let layout = ScreenLayout::compute(tiny, PresentationState::BannerVisible);
        assert!(layout.banner.is_none());
        assert_eq!(layout.hit_test(0, 0), None);
    }
}
