use std::time::{Duration, Instant};

use crate::transitions::{Easing, TransitionConfig};

/// A single in-flight transition.
#[derive(Debug, Clone, Copy)]
struct ActiveTransition {
    from: f32,
    to: f32,
    start: Instant,
    duration: Duration,
    easing: Easing,
}

impl ActiveTransition {
    fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.start);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    fn value(&self, now: Instant) -> f32 {
        let eased = self.easing.apply(self.progress(now));
        self.from + (self.to - self.from) * eased
    }

    fn finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.start) >= self.duration
    }
}

/// A scalar that can be tweened toward a target over time.
///
/// Starting a new transition while one is running retargets from the
/// currently interpolated value; the previous transition is simply replaced.
#[derive(Debug, Clone)]
pub struct AnimatedValue {
    /// Settled value, or the target while a transition is active.
    value: f32,
    active: Option<ActiveTransition>,
    /// Reduced motion flag - when true, transitions complete instantly.
    reduced_motion: bool,
}

impl AnimatedValue {
    pub fn new(value: f32) -> Self {
        Self {
            value,
            active: None,
            reduced_motion: false,
        }
    }

    /// Enable or disable reduced motion (accessibility).
    pub fn set_reduced_motion(&mut self, enabled: bool) {
        self.reduced_motion = enabled;
        if enabled {
            self.active = None;
        }
    }

    /// Value the animation is heading toward (or resting at).
    pub fn target(&self) -> f32 {
        self.value
    }

    /// Interpolated value at `now`.
    pub fn value_at(&self, now: Instant) -> f32 {
        match &self.active {
            Some(transition) => transition.value(now),
            None => self.value,
        }
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.active.is_some_and(|t| !t.finished(now))
    }

    /// Jump to `value`, dropping any running transition.
    pub fn set_value(&mut self, value: f32) {
        self.value = value;
        self.active = None;
    }

    /// Start a transition from the current value toward `to`.
    pub fn animate_to(&mut self, to: f32, config: TransitionConfig, now: Instant) {
        let from = self.value_at(now);

        if self.reduced_motion || config.duration.is_zero() {
            self.set_value(to);
            return;
        }

        self.active = Some(ActiveTransition {
            from,
            to,
            start: now,
            duration: config.duration,
            easing: config.easing,
        });
        self.value = to;
    }

    /// Freeze the value wherever the running transition currently is.
    pub fn stop(&mut self, now: Instant) {
        if self.active.is_some() {
            self.value = self.value_at(now);
            self.active = None;
        }
    }

    /// Drop the transition once it has completed.
    pub fn prune(&mut self, now: Instant) {
        if self.active.is_some_and(|t| t.finished(now)) {
            self.active = None;
        }
    }
}
