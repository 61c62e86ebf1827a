//! Damped harmonic oscillator for the bubble pop-in.
//!
//! Uses the closed-form solution instead of numeric integration so the
//! sampled value depends only on elapsed time, not on frame cadence.

use super::Sample;
use std::time::Duration;

/// Hard stop for springs that never meet the rest thresholds.
const SETTLE_DEADLINE: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
    /// Settled once |target - value| is at most this...
    pub rest_displacement: f64,
    /// ...and |velocity| (units per second) is at most this.
    pub rest_speed: f64,
}

impl SpringConfig {
    /// Build from origami-style `tension`/`friction` parameters.
    #[must_use]
    pub fn from_origami(tension: f64, friction: f64) -> Self {
        Self {
            stiffness: (tension - 30.0) * 3.62 + 194.0,
            damping: (friction - 8.0) * 3.0 + 25.0,
            mass: 1.0,
            rest_displacement: 0.001,
            rest_speed: 0.001,
        }
    }

    /// Stiffness, damping and mass are all finite and positive.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        [self.stiffness, self.damping, self.mass]
            .iter()
            .all(|v| v.is_finite() && *v > 0.0)
    }

    /// Damping ratio; below 1.0 the spring overshoots.
    #[must_use]
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::from_origami(40.0, 5.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringAnimation {
    to: f32,
    config: SpringConfig,
}

impl SpringAnimation {
    #[must_use]
    pub fn new(to: f32, config: SpringConfig) -> Self {
        Self { to, config }
    }

    #[must_use]
    pub fn target(&self) -> f32 {
        self.to
    }

    #[must_use]
    pub fn config(&self) -> SpringConfig {
        self.config
    }

    /// Position and velocity `elapsed` after release from `from` at rest.
    ///
    /// Overdamped springs (ratio above 1.0) follow the critically damped
    /// curve, the same simplification React Native's spring makes.
    fn position_velocity(&self, from: f32, elapsed: Duration) -> (f64, f64) {
        let SpringConfig {
            stiffness: k,
            damping: c,
            mass: m,
            ..
        } = self.config;
        let to = f64::from(self.to);
        let x0 = to - f64::from(from);
        let t = elapsed.as_secs_f64();
        let zeta = c / (2.0 * (k * m).sqrt());
        let omega0 = (k / m).sqrt();

        if zeta < 1.0 {
            let omega1 = omega0 * (1.0 - zeta * zeta).sqrt();
            let envelope = (-zeta * omega0 * t).exp();
            let a = zeta * omega0 * x0 / omega1;
            let (sin, cos) = (omega1 * t).sin_cos();
            let position = to - envelope * (a * sin + x0 * cos);
            let velocity = zeta * omega0 * envelope * (a * sin + x0 * cos)
                - envelope * (zeta * omega0 * x0 * cos - omega1 * x0 * sin);
            (position, velocity)
        } else {
            let envelope = (-omega0 * t).exp();
            let position = to - envelope * (x0 + omega0 * x0 * t);
            let velocity = envelope * (t * x0 * omega0 * omega0);
            (position, velocity)
        }
    }

    pub(super) fn sample(&self, from: f32, elapsed: Duration) -> Sample {
        if elapsed >= SETTLE_DEADLINE {
            return Sample {
                value: self.to,
                finished: true,
            };
        }
        let (position, velocity) = self.position_velocity(from, elapsed);
        let at_rest = velocity.abs() <= self.config.rest_speed
            && (f64::from(self.to) - position).abs() <= self.config.rest_displacement;
        if at_rest {
            return Sample {
                value: self.to,
                finished: true,
            };
        }
        Sample {
            value: position as f32,
            finished: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pop_in() -> SpringAnimation {
        SpringAnimation::new(1.0, SpringConfig::default())
    }

    #[test]
    fn origami_defaults_are_underdamped() {
        let config = SpringConfig::default();
        assert!((config.stiffness - 230.2).abs() < 1e-9);
        assert!((config.damping - 16.0).abs() < 1e-9);
        let ratio = config.damping_ratio();
        assert!(ratio > 0.4 && ratio < 0.7, "ratio={ratio}");
    }

    #[test]
    fn starts_at_from_value() {
        let sample = pop_in().sample(0.0, Duration::ZERO);
        assert!(sample.value.abs() < 1e-6);
        assert!(!sample.finished);
    }

    #[test]
    fn overshoots_target_slightly() {
        let spring = pop_in();
        let peak = (1..600)
            .map(|ms| spring.sample(0.0, Duration::from_millis(ms)).value)
            .fold(f32::MIN, f32::max);
        assert!(peak > 1.05, "peak={peak}");
        assert!(peak < 1.3, "peak={peak}");
    }

    #[test]
    fn settles_exactly_on_target_within_two_seconds() {
        let spring = pop_in();
        let settled_at = (1..2_000)
            .map(Duration::from_millis)
            .find(|elapsed| spring.sample(0.0, *elapsed).finished)
            .expect("spring should settle");
        assert!(settled_at > Duration::from_millis(300));
        assert_eq!(spring.sample(0.0, settled_at).value, 1.0);
    }

    #[test]
    fn overdamped_spring_never_overshoots() {
        let stiff = SpringAnimation::new(1.0, SpringConfig::from_origami(40.0, 30.0));
        assert!(stiff.config().damping_ratio() >= 1.0);
        for ms in 1..1_500 {
            let value = stiff.sample(0.0, Duration::from_millis(ms)).value;
            assert!(value <= 1.0 + 1e-6, "value={value} at {ms}ms");
        }
    }

    #[test]
    fn origami_extremes_are_valid_and_sample_finite_values() {
        for (tension, friction) in [(1000.0, 1000.0), (1000.0, 0.1), (0.1, 1000.0)] {
            let config = SpringConfig::from_origami(tension, friction);
            assert!(config.is_valid(), "{tension}/{friction}");
            let spring = SpringAnimation::new(1.0, config);
            for ms in [0, 16, 50, 400, 2_000] {
                let value = spring.sample(0.0, Duration::from_millis(ms)).value;
                assert!(value.is_finite(), "{tension}/{friction} at {ms}ms");
            }
        }
    }

    #[test]
    fn overflowing_origami_values_are_invalid() {
        assert!(!SpringConfig::from_origami(1e308, 5.0).is_valid());
        assert!(!SpringConfig::from_origami(40.0, f64::INFINITY).is_valid());
        assert!(!SpringConfig::from_origami(40.0, -10.0).is_valid());
    }

    #[test]
    fn deadline_forces_completion() {
        let sample = pop_in().sample(0.0, SETTLE_DEADLINE);
        assert!(sample.finished);
        assert_eq!(sample.value, 1.0);
    }

    #[test]
    fn released_at_target_finishes_immediately() {
        let sample = pop_in().sample(1.0, Duration::ZERO);
        assert!(sample.finished);
    }
}
