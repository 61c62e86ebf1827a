//! Fixed-duration interpolation used for affordance exits.

use super::Sample;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Progress curve applied to time-based animations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    #[default]
    Linear,
    /// Cubic ease-in-out: slow start, fast middle, slow end.
    EaseInOut,
}

impl Easing {
    /// Map linear progress `t` in [0, 1] onto the curve.
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

impl std::fmt::Display for Easing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Easing::Linear => "linear",
            Easing::EaseInOut => "ease-in-out",
        };
        write!(f, "{label}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimingAnimation {
    to: f32,
    duration: Duration,
    easing: Easing,
}

impl TimingAnimation {
    #[must_use]
    pub fn linear(to: f32, duration: Duration) -> Self {
        Self {
            to,
            duration,
            easing: Easing::Linear,
        }
    }

    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    #[must_use]
    pub fn target(&self) -> f32 {
        self.to
    }

    pub(super) fn sample(&self, from: f32, elapsed: Duration) -> Sample {
        if self.duration.is_zero() || elapsed >= self.duration {
            return Sample {
                value: self.to,
                finished: true,
            };
        }
        let t = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        let eased = self.easing.apply(t);
        Sample {
            value: from + (self.to - from) * eased,
            finished: false,
        }
    }
}
