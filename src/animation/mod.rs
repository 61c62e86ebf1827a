//! Animated scalar channels driven by frame ticks so transitions can be sequenced explicitly.
//!
//! A channel owns one value (banner opacity, bubble scale). Starting an
//! animation records the start value and instant; every `tick` samples the
//! animation at the elapsed time. When the animation reaches its target the
//! channel snaps to the exact target and reports [`ChannelTick::Finished`]
//! exactly once.

mod spring;
mod timing;

pub use spring::{SpringAnimation, SpringConfig};
pub use timing::{Easing, TimingAnimation};

use std::time::{Duration, Instant};

/// Value of an animation sampled at some elapsed time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub value: f32,
    pub finished: bool,
}

/// Animation profile driving a channel toward a target value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Animation {
    /// Time-based interpolation over a fixed duration.
    Timing(TimingAnimation),
    /// Physically modeled damped spring.
    Spring(SpringAnimation),
}

impl Animation {
    /// Final value the channel holds once the animation completes.
    #[must_use]
    pub fn target(&self) -> f32 {
        match self {
            Self::Timing(timing) => timing.target(),
            Self::Spring(spring) => spring.target(),
        }
    }

    #[must_use]
    pub fn sample(&self, from: f32, elapsed: Duration) -> Sample {
        match self {
            Self::Timing(timing) => timing.sample(from, elapsed),
            Self::Spring(spring) => spring.sample(from, elapsed),
        }
    }
}

impl From<TimingAnimation> for Animation {
    fn from(timing: TimingAnimation) -> Self {
        Self::Timing(timing)
    }
}

impl From<SpringAnimation> for Animation {
    fn from(spring: SpringAnimation) -> Self {
        Self::Spring(spring)
    }
}

/// Outcome of advancing a channel by one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelTick {
    /// No animation is attached.
    Idle,
    /// The animation moved the value but has not reached its target.
    Running,
    /// The animation reached its target on this tick. Reported once.
    Finished,
}

#[derive(Debug, Clone, Copy)]
struct RunningAnimation {
    animation: Animation,
    from: f32,
    started_at: Instant,
}

/// A single animated scalar.
#[derive(Debug, Clone)]
pub struct AnimatedValue {
    value: f32,
    running: Option<RunningAnimation>,
}

impl AnimatedValue {
    #[must_use]
    pub fn new(value: f32) -> Self {
        Self {
            value,
            running: None,
        }
    }

    #[must_use]
    pub fn value(&self) -> f32 {
        self.value
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.running.is_some()
    }

    /// Target of the attached animation, if any.
    #[cfg(test)]
    pub fn animating_toward(&self) -> Option<f32> {
        self.running.map(|running| running.animation.target())
    }

    /// Set the value immediately. A running animation is dropped without
    /// reporting completion.
    pub fn set_value(&mut self, value: f32) {
        self.running = None;
        self.value = value;
    }

    /// Attach `animation`, interpolating from the current value.
    ///
    /// Replaces any running animation; the replaced one never reports
    /// completion.
    pub fn start(&mut self, animation: Animation, now: Instant) {
        self.running = Some(RunningAnimation {
            animation,
            from: self.value,
            started_at: now,
        });
    }

    /// Advance to `now` and report whether the animation finished.
    pub fn tick(&mut self, now: Instant) -> ChannelTick {
        let Some(running) = self.running else {
            return ChannelTick::Idle;
        };
        let elapsed = now.saturating_duration_since(running.started_at);
        let sample = running.animation.sample(running.from, elapsed);
        if sample.finished {
            self.value = running.animation.target();
            self.running = None;
            ChannelTick::Finished
        } else {
            self.value = sample.value;
            ChannelTick::Running
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fade_out(ms: u64) -> Animation {
        TimingAnimation::linear(0.0, Duration::from_millis(ms)).into()
    }

    #[test]
    fn idle_channel_reports_idle_and_keeps_value() {
        let mut channel = AnimatedValue::new(0.4);
        assert_eq!(channel.tick(Instant::now()), ChannelTick::Idle);
        assert_eq!(channel.value(), 0.4);
    }

    #[test]
    fn finished_is_reported_exactly_once() {
        let start = Instant::now();
        let mut channel = AnimatedValue::new(1.0);
        channel.start(fade_out(300), start);

        assert_eq!(
            channel.tick(start + Duration::from_millis(150)),
            ChannelTick::Running
        );
        assert_eq!(
            channel.tick(start + Duration::from_millis(300)),
            ChannelTick::Finished
        );
        assert_eq!(channel.value(), 0.0);
        assert_eq!(
            channel.tick(start + Duration::from_millis(400)),
            ChannelTick::Idle
        );
        assert!(!channel.is_animating());
    }

    #[test]
    fn late_tick_snaps_to_exact_target() {
        let start = Instant::now();
        let mut channel = AnimatedValue::new(1.0);
        channel.start(fade_out(300), start);
        assert_eq!(
            channel.tick(start + Duration::from_secs(5)),
            ChannelTick::Finished
        );
        assert_eq!(channel.value(), 0.0);
    }

    #[test]
    fn set_value_drops_running_animation_silently() {
        let start = Instant::now();
        let mut channel = AnimatedValue::new(1.0);
        channel.start(fade_out(300), start);
        channel.tick(start + Duration::from_millis(100));

        channel.set_value(1.0);
        assert!(!channel.is_animating());
        assert_eq!(
            channel.tick(start + Duration::from_millis(400)),
            ChannelTick::Idle
        );
        assert_eq!(channel.value(), 1.0);
    }

    #[test]
    fn start_interpolates_from_current_value() {
        let start = Instant::now();
        let mut channel = AnimatedValue::new(0.5);
        channel.start(fade_out(200), start);
        channel.tick(start + Duration::from_millis(100));
        assert!((channel.value() - 0.25).abs() < 1e-4);
        assert_eq!(channel.animating_toward(), Some(0.0));
    }

    #[test]
    fn tick_before_start_instant_holds_start_value() {
        let start = Instant::now() + Duration::from_millis(50);
        let mut channel = AnimatedValue::new(1.0);
        channel.start(fade_out(300), start);
        assert_eq!(channel.tick(Instant::now()), ChannelTick::Running);
        assert_eq!(channel.value(), 1.0);
    }
}
