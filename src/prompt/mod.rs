//! Verification prompt controller: banner and floating bubble, never both.
//!
//! The controller is an explicit state machine. While settled it shows one
//! affordance; `request_dismiss`/`request_restore` start a [`TransitionPlan`]
//! and the controller stays in [`Phase::Transitioning`] until the last step
//! of that plan completed. Requests that do not match the settled state, or
//! that arrive mid-transition, are ignored.

mod plan;

pub use plan::{
    Channel, Step, TransitionKind, TransitionPlan, TransitionTuning, DEFAULT_BANNER_FADE,
    DEFAULT_BUBBLE_EXIT,
};

use serde::Serialize;
use std::time::Instant;

use crate::animation::{AnimatedValue, ChannelTick};

/// Which affordance the renderer should draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PresentationState {
    BannerVisible,
    BubbleVisible,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Settled,
    Transitioning(TransitionKind),
}

impl Phase {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Settled => "settled",
            Self::Transitioning(kind) => kind.label(),
        }
    }
}

/// What changed during one [`VerificationPrompt::tick`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PromptTick {
    /// A channel value moved.
    pub redraw: bool,
    /// The rendered affordance changed.
    pub presented: Option<PresentationState>,
    /// The running transition finished its last step.
    pub completed: Option<TransitionKind>,
}

#[derive(Debug, Clone)]
pub struct VerificationPrompt {
    state: PresentationState,
    banner_opacity: AnimatedValue,
    bubble_scale: AnimatedValue,
    plan: Option<TransitionPlan>,
    tuning: TransitionTuning,
}

impl VerificationPrompt {
    /// Fresh prompt: banner fully visible, bubble hidden.
    #[must_use]
    pub fn mount(tuning: TransitionTuning) -> Self {
        Self {
            state: PresentationState::BannerVisible,
            banner_opacity: AnimatedValue::new(1.0),
            bubble_scale: AnimatedValue::new(0.0),
            plan: None,
            tuning,
        }
    }

    #[must_use]
    pub fn state(&self) -> PresentationState {
        self.state
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        match &self.plan {
            Some(plan) => Phase::Transitioning(plan.kind()),
            None => Phase::Settled,
        }
    }

    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.plan.is_none()
    }

    #[must_use]
    pub fn banner_opacity(&self) -> f32 {
        self.banner_opacity.value()
    }

    #[must_use]
    pub fn bubble_scale(&self) -> f32 {
        self.bubble_scale.value()
    }

    #[must_use]
    pub fn tuning(&self) -> &TransitionTuning {
        &self.tuning
    }

    /// Fade the banner out and swap in the bubble.
    ///
    /// Returns `false` (and changes nothing) unless the banner is settled.
    pub fn request_dismiss(&mut self, now: Instant) -> bool {
        if !self.accepts(PresentationState::BannerVisible, TransitionKind::Dismiss) {
            return false;
        }
        self.begin(TransitionPlan::dismiss(&self.tuning), now);
        true
    }

    /// Shrink the bubble away and bring the banner back at full opacity.
    ///
    /// Returns `false` (and changes nothing) unless the bubble is settled.
    pub fn request_restore(&mut self, now: Instant) -> bool {
        if !self.accepts(PresentationState::BubbleVisible, TransitionKind::Restore) {
            return false;
        }
        self.begin(TransitionPlan::restore(&self.tuning), now);
        true
    }

    /// Advance the running transition to `now`.
    pub fn tick(&mut self, now: Instant) -> PromptTick {
        let Some(mut plan) = self.plan.take() else {
            return PromptTick::default();
        };
        let mut tick = PromptTick::default();
        loop {
            if let Some(channel) = plan.awaiting {
                match self.channel_mut(channel).tick(now) {
                    ChannelTick::Running => {
                        tick.redraw = true;
                        self.plan = Some(plan);
                        return tick;
                    }
                    ChannelTick::Finished | ChannelTick::Idle => {
                        tick.redraw = true;
                        plan.awaiting = None;
                    }
                }
            }

            match plan.next_step() {
                Some(Step::Animate { channel, animation }) => {
                    self.channel_mut(channel).start(animation, now);
                    plan.awaiting = Some(channel);
                }
                Some(Step::Present(state)) => {
                    tracing::debug!(from = ?self.state, to = ?state, "prompt affordance flipped");
                    self.state = state;
                    tick.presented = Some(state);
                    tick.redraw = true;
                }
                Some(Step::Snap { channel, value }) => {
                    self.channel_mut(channel).set_value(value);
                    tick.redraw = true;
                }
                None => {
                    tracing::debug!(kind = plan.kind().label(), "prompt transition settled");
                    tick.completed = Some(plan.kind());
                    return tick;
                }
            }
        }
    }

    fn accepts(&self, required: PresentationState, kind: TransitionKind) -> bool {
        if let Some(plan) = &self.plan {
            tracing::trace!(
                requested = kind.label(),
                in_flight = plan.kind().label(),
                "prompt request ignored mid-transition"
            );
            return false;
        }
        if self.state != required {
            tracing::trace!(
                requested = kind.label(),
                state = ?self.state,
                "prompt request ignored for current state"
            );
            return false;
        }
        true
    }

    fn begin(&mut self, plan: TransitionPlan, now: Instant) {
        tracing::debug!(kind = plan.kind().label(), "prompt transition started");
        self.plan = Some(plan);
        self.tick(now);
    }

    fn channel_mut(&mut self, channel: Channel) -> &mut AnimatedValue {
        match channel {
            Channel::BannerOpacity => &mut self.banner_opacity,
            Channel::BubbleScale => &mut self.bubble_scale,
        }
    }
}
