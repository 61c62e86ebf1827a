//! Dashboard data around the prompt: shortcut grid, cards, navigation sink.

pub mod actions;
pub mod cards;
pub mod focus;
pub mod navigation;

pub use actions::{shortcut_at, ActionShortcut, ACTIONS, GRID_COLUMNS, VERIFY_ROUTE};
pub use focus::{FocusMove, GridFocus};
pub use navigation::{Navigator, RouteHistory};
