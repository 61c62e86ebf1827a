//! Navigation boundary. Destination screens live elsewhere; this crate only
//! hands them a route.

use std::collections::VecDeque;

/// Maximum number of routes kept for display.
pub const ROUTE_HISTORY_MAX: usize = 32;

/// Fire-and-forget route sink.
pub trait Navigator {
    fn navigate_to(&mut self, route: &str);

    /// Most recent route, for navigators that remember one.
    fn last_route(&self) -> Option<&str> {
        None
    }
}

/// Navigator that records the routes it was handed, newest last.
#[derive(Debug, Default)]
pub struct RouteHistory {
    routes: VecDeque<String>,
}

impl RouteHistory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn last(&self) -> Option<&str> {
        self.routes.back().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    #[cfg(test)]
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.routes.iter().map(String::as_str)
    }
}

impl Navigator for RouteHistory {
    fn navigate_to(&mut self, route: &str) {
        tracing::info!(route, "navigate");
        if self.routes.len() >= ROUTE_HISTORY_MAX {
            self.routes.pop_front();
        }
        self.routes.push_back(route.to_string());
    }

    fn last_route(&self) -> Option<&str> {
        self.last()
    }
}
