//! Home screen instance: owns the prompt controller, grid focus and navigator
//! from mount to unmount.

use serde::Serialize;
use std::time::Instant;

use crate::dashboard::{shortcut_at, FocusMove, GridFocus, Navigator, ACTIONS, VERIFY_ROUTE};
use crate::prompt::{PresentationState, PromptTick, TransitionTuning, VerificationPrompt};

/// Discrete user intents, already decoded from keys or clicks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenCommand {
    Focus(FocusMove),
    ActivateFocused,
    ActivateShortcut(usize),
    VerifyNow,
    DismissBanner,
    RestoreBanner,
}

#[derive(Debug, Clone)]
pub struct ScreenOptions {
    pub profile_name: String,
    pub tuning: TransitionTuning,
}

impl Default for ScreenOptions {
    fn default() -> Self {
        Self {
            profile_name: "Name".to_string(),
            tuning: TransitionTuning::default(),
        }
    }
}

/// Per-frame state handed to the renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameSnapshot {
    pub presentation: PresentationState,
    pub phase: &'static str,
    pub banner_opacity: f32,
    pub bubble_scale: f32,
    pub focused_shortcut: usize,
    pub last_route: Option<String>,
}

#[derive(Debug)]
pub struct HomeScreen<N: Navigator> {
    prompt: VerificationPrompt,
    focus: GridFocus,
    navigator: N,
    profile_name: String,
}

impl<N: Navigator> HomeScreen<N> {
    #[must_use]
    pub fn mount(navigator: N, options: ScreenOptions) -> Self {
        let prompt = VerificationPrompt::mount(options.tuning);
        let tuning = prompt.tuning();
        tracing::info!(
            profile = %options.profile_name,
            fade_easing = %tuning.fade_easing,
            spring_stiffness = tuning.spring.stiffness,
            spring_damping = tuning.spring.damping,
            "home screen mounted"
        );
        Self {
            prompt,
            focus: GridFocus::new(ACTIONS.len()),
            navigator,
            profile_name: options.profile_name,
        }
    }

    /// Drop all screen state, handing the navigator back.
    pub fn unmount(self) -> N {
        tracing::info!(
            presentation = ?self.prompt.state(),
            phase = self.prompt.phase().label(),
            "home screen unmounted"
        );
        self.navigator
    }

    /// Apply `command`. Returns whether anything changed.
    pub fn handle(&mut self, command: ScreenCommand, now: Instant) -> bool {
        match command {
            ScreenCommand::Focus(movement) => {
                let before = self.focus.index();
                self.focus.apply(movement);
                before != self.focus.index()
            }
            ScreenCommand::ActivateFocused => self.activate(self.focus.index()),
            ScreenCommand::ActivateShortcut(index) => {
                self.focus.set(index);
                self.activate(index)
            }
            ScreenCommand::VerifyNow => {
                if self.prompt.state() != PresentationState::BannerVisible {
                    return false;
                }
                self.navigator.navigate_to(VERIFY_ROUTE);
                true
            }
            ScreenCommand::DismissBanner => self.prompt.request_dismiss(now),
            ScreenCommand::RestoreBanner => self.prompt.request_restore(now),
        }
    }

    pub fn tick(&mut self, now: Instant) -> PromptTick {
        self.prompt.tick(now)
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        !self.prompt.is_settled()
    }

    #[must_use]
    pub fn prompt(&self) -> &VerificationPrompt {
        &self.prompt
    }

    #[must_use]
    pub fn focused(&self) -> usize {
        self.focus.index()
    }

    #[must_use]
    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    #[must_use]
    pub fn profile_name(&self) -> &str {
        &self.profile_name
    }

    #[must_use]
    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot {
            presentation: self.prompt.state(),
            phase: self.prompt.phase().label(),
            banner_opacity: self.prompt.banner_opacity(),
            bubble_scale: self.prompt.bubble_scale(),
            focused_shortcut: self.focus.index(),
            last_route: self.navigator.last_route().map(str::to_string),
        }
    }

    fn activate(&mut self, index: usize) -> bool {
        let Some(action) = shortcut_at(index) else {
            return false;
        };
        self.navigator.navigate_to(action.route);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::RouteHistory;
    use crate::prompt::{Phase, TransitionKind};
    use std::time::Duration;

    #[derive(Default)]
    struct CountingNavigator {
        calls: Vec<String>,
    }

    impl Navigator for CountingNavigator {
        fn navigate_to(&mut self, route: &str) {
            self.calls.push(route.to_string());
        }
    }

    fn screen() -> HomeScreen<CountingNavigator> {
        HomeScreen::mount(CountingNavigator::default(), ScreenOptions::default())
    }

    #[test]
    fn first_shortcut_navigates_to_complaint_once() {
        let mut screen = screen();
        assert!(screen.handle(ScreenCommand::ActivateShortcut(0), Instant::now()));
        let navigator = screen.unmount();
        assert_eq!(navigator.calls, ["/home/complaint"]);
    }

    #[test]
    fn activate_focused_follows_focus_moves() {
        let mut screen = screen();
        let now = Instant::now();
        screen.handle(ScreenCommand::Focus(FocusMove::Down), now);
        screen.handle(ScreenCommand::Focus(FocusMove::Next), now);
        assert_eq!(screen.focused(), 5);
        screen.handle(ScreenCommand::ActivateFocused, now);
        assert_eq!(screen.navigator().calls, ["/home/analytics"]);
    }

    #[test]
    fn unknown_shortcut_index_is_ignored() {
        let mut screen = screen();
        assert!(!screen.handle(ScreenCommand::ActivateShortcut(42), Instant::now()));
        assert!(screen.navigator().calls.is_empty());
    }

    #[test]
    fn verify_now_requires_banner() {
        let mut screen = screen();
        let start = Instant::now();
        assert!(screen.handle(ScreenCommand::VerifyNow, start));
        assert_eq!(screen.navigator().calls, [VERIFY_ROUTE]);

        screen.handle(ScreenCommand::DismissBanner, start);
        screen.tick(start + Duration::from_millis(300));
        assert!(!screen.handle(ScreenCommand::VerifyNow, start + Duration::from_millis(301)));
        assert_eq!(screen.navigator().calls.len(), 1);
    }

    #[test]
    fn dismiss_and_restore_route_to_prompt() {
        let mut screen = screen();
        let start = Instant::now();
        assert!(screen.handle(ScreenCommand::DismissBanner, start));
        assert!(screen.is_animating());
        assert_eq!(
            screen.prompt().phase(),
            Phase::Transitioning(TransitionKind::Dismiss)
        );
        assert!(!screen.handle(ScreenCommand::RestoreBanner, start));
    }

    #[test]
    fn mount_hands_tuning_to_the_prompt() {
        let tuning = TransitionTuning {
            banner_fade: Duration::from_millis(120),
            ..TransitionTuning::default()
        };
        let screen = HomeScreen::mount(
            RouteHistory::new(),
            ScreenOptions {
                profile_name: "Ada".to_string(),
                tuning,
            },
        );
        assert_eq!(*screen.prompt().tuning(), tuning);
        assert_eq!(screen.profile_name(), "Ada");
    }

    #[test]
    fn snapshot_reports_channels_and_last_route() {
        let mut screen = HomeScreen::mount(RouteHistory::new(), ScreenOptions::default());
        screen.handle(ScreenCommand::ActivateShortcut(4), Instant::now());
        let snapshot = screen.snapshot();
        assert_eq!(snapshot.presentation, PresentationState::BannerVisible);
        assert_eq!(snapshot.phase, "settled");
        assert_eq!(snapshot.banner_opacity, 1.0);
        assert_eq!(snapshot.bubble_scale, 0.0);
        assert_eq!(snapshot.focused_shortcut, 4);
        assert_eq!(snapshot.last_route.as_deref(), Some("/home/map"));
    }
}
