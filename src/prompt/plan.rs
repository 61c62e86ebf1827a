//! Transition plans: the ordered steps a dismiss or restore executes.
//!
//! A plan reads top to bottom ("animate exit, flip, animate entrance") and
//! the prompt runs it one step at a time. An `Animate` step blocks the plan
//! until its channel reports completion, so a `Present` step placed after it
//! can never run early.

use std::collections::VecDeque;
use std::time::Duration;

use crate::animation::{Animation, Easing, SpringAnimation, SpringConfig, TimingAnimation};

use super::PresentationState;

/// Default banner fade-out.
pub const DEFAULT_BANNER_FADE: Duration = Duration::from_millis(300);

/// Default bubble shrink; shorter than the fade so the swap back feels quick.
pub const DEFAULT_BUBBLE_EXIT: Duration = Duration::from_millis(200);

/// Which animated scalar a step drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    BannerOpacity,
    BubbleScale,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionKind {
    Dismiss,
    Restore,
}

impl TransitionKind {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Dismiss => "dismiss",
            Self::Restore => "restore",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step {
    /// Run `animation` on `channel` and wait for it to finish.
    Animate {
        channel: Channel,
        animation: Animation,
    },
    /// Swap the rendered affordance.
    Present(PresentationState),
    /// Set a channel value without animating.
    Snap { channel: Channel, value: f32 },
}

/// Timing profile for both transitions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionTuning {
    pub banner_fade: Duration,
    pub bubble_exit: Duration,
    pub fade_easing: Easing,
    pub spring: SpringConfig,
}

impl Default for TransitionTuning {
    fn default() -> Self {
        Self {
            banner_fade: DEFAULT_BANNER_FADE,
            bubble_exit: DEFAULT_BUBBLE_EXIT,
            fade_easing: Easing::Linear,
            spring: SpringConfig::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct TransitionPlan {
    kind: TransitionKind,
    steps: VecDeque<Step>,
    pub(super) awaiting: Option<Channel>,
}

impl TransitionPlan {
    /// Fade the banner out, show the bubble, pop it in on a spring.
    #[must_use]
    pub fn dismiss(tuning: &TransitionTuning) -> Self {
        let fade = TimingAnimation::linear(0.0, tuning.banner_fade).with_easing(tuning.fade_easing);
        Self::new(
            TransitionKind::Dismiss,
            [
                Step::Animate {
                    channel: Channel::BannerOpacity,
                    animation: fade.into(),
                },
                Step::Present(PresentationState::BubbleVisible),
                Step::Animate {
                    channel: Channel::BubbleScale,
                    animation: SpringAnimation::new(1.0, tuning.spring).into(),
                },
            ],
        )
    }

    /// Shrink the bubble away, show the banner at full opacity.
    #[must_use]
    pub fn restore(tuning: &TransitionTuning) -> Self {
        let shrink =
            TimingAnimation::linear(0.0, tuning.bubble_exit).with_easing(tuning.fade_easing);
        Self::new(
            TransitionKind::Restore,
            [
                Step::Animate {
                    channel: Channel::BubbleScale,
                    animation: shrink.into(),
                },
                Step::Present(PresentationState::BannerVisible),
                Step::Snap {
                    channel: Channel::BannerOpacity,
                    value: 1.0,
                },
            ],
        )
    }

    fn new(kind: TransitionKind, steps: impl IntoIterator<Item = Step>) -> Self {
        Self {
            kind,
            steps: steps.into_iter().collect(),
            awaiting: None,
        }
    }

    #[must_use]
    pub fn kind(&self) -> TransitionKind {
        self.kind
    }

    /// Steps not yet started.
    #[cfg(test)]
    pub fn remaining(&self) -> impl Iterator<Item = &Step> {
        self.steps.iter()
    }

    pub(super) fn next_step(&mut self) -> Option<Step> {
        self.steps.pop_front()
    }
}
