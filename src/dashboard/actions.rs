//! Shortcut catalogue shown in the dashboard grid.

use serde::Serialize;

/// Route opened by the banner's "Verify Now" button.
pub const VERIFY_ROUTE: &str = "/verify/verify-start";

/// One grid entry. Immutable, defined at load time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ActionShortcut {
    pub label: &'static str,
    pub icon_id: &'static str,
    pub route: &'static str,
}

const fn shortcut(
    label: &'static str,
    icon_id: &'static str,
    route: &'static str,
) -> ActionShortcut {
    ActionShortcut {
        label,
        icon_id,
        route,
    }
}

/// Grid order is display order.
pub const ACTIONS: [ActionShortcut; 8] = [
    shortcut("File Complaint", "document-text-outline", "/home/complaint"),
    shortcut("Request Service", "construct-outline", "/home/request"),
    shortcut("Track Status", "time-outline", "/home/track"),
    shortcut("View Responses", "chatbox-ellipses-outline", "/home/responses"),
    shortcut("Map Issues", "map-outline", "/home/map"),
    shortcut("Analytics / Stats", "stats-chart-outline", "/home/analytics"),
    shortcut("FAQs / Help", "help-circle-outline", "/home/faq"),
    shortcut("Feedback", "megaphone-outline", "/home/feedback"),
];

/// Columns per grid row.
pub const GRID_COLUMNS: usize = 4;

#[must_use]
pub fn shortcut_at(index: usize) -> Option<&'static ActionShortcut> {
    ACTIONS.get(index)
}
