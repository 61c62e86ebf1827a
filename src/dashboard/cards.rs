//! Static card content. Pure display data.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Announcement {
    pub title: &'static str,
    pub body: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComplaintStatus {
    Pending,
}

impl ComplaintStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComplaintSummary {
    pub title: &'static str,
    pub submitted: &'static str,
    pub status: ComplaintStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatCard {
    pub label: &'static str,
    pub value: &'static str,
}

pub const ANNOUNCEMENT: Announcement = Announcement {
    title: "New Feature",
    body: "You can now upload images when filing a complaint!",
};

pub const LATEST_COMPLAINT: ComplaintSummary = ComplaintSummary {
    title: "Streetlight Not Working",
    submitted: "Submitted: March 28, 2025",
    status: ComplaintStatus::Pending,
};

pub const STAT_CARDS: [StatCard; 2] = [
    StatCard {
        label: "Open Requests",
        value: "3 Pending",
    },
    StatCard {
        label: "Resolved Requests",
        value: "12 Completed",
    },
];

pub const RECENT_ACTIVITY_EMPTY: &str = "No recent activity yet";

pub const VERIFY_TITLE: &str = "Verify Account";
pub const VERIFY_DESCRIPTION: &str = "Get full access to all Respondee services, get verified now!";
pub const VERIFY_BUTTON: &str = "Verify Now";
