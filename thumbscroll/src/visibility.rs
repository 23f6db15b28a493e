use std::time::Instant;

use crate::animation::AnimatedValue;
use crate::transitions::TransitionConfig;

/// Logical visibility of the indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Visible,
    Hidden,
}

impl Visibility {
    fn opacity(self) -> f32 {
        match self {
            Visibility::Visible => 1.0,
            Visibility::Hidden => 0.0,
        }
    }
}

/// Fades the indicator in when a drag starts and out when momentum ends.
///
/// With auto-hide disabled the indicator is permanently visible at full
/// opacity and no transition is ever started.
#[derive(Debug, Clone)]
pub struct VisibilityController {
    auto_hide: bool,
    state: Visibility,
    opacity: AnimatedValue,
    fade: TransitionConfig,
}

impl VisibilityController {
    pub fn new(auto_hide: bool, fade: TransitionConfig) -> Self {
        let state = if auto_hide {
            Visibility::Hidden
        } else {
            Visibility::Visible
        };
        Self {
            auto_hide,
            state,
            opacity: AnimatedValue::new(state.opacity()),
            fade,
        }
    }

    pub fn auto_hide(&self) -> bool {
        self.auto_hide
    }

    pub fn state(&self) -> Visibility {
        self.state
    }

    pub fn is_hidden(&self) -> bool {
        self.state == Visibility::Hidden
    }

    /// A drag began: show the indicator.
    /// Returns true if this started a transition.
    pub fn drag_start(&mut self, now: Instant) -> bool {
        self.transition(Visibility::Visible, now)
    }

    /// Momentum scrolling settled: hide the indicator.
    /// Returns true if this started a transition.
    pub fn momentum_end(&mut self, now: Instant) -> bool {
        self.transition(Visibility::Hidden, now)
    }

    fn transition(&mut self, to: Visibility, now: Instant) -> bool {
        if !self.auto_hide || self.state == to {
            return false;
        }

        log::debug!(
            "[indicator] {:?} -> {:?} over {:?}",
            self.state,
            to,
            self.fade.duration
        );

        self.state = to;
        self.opacity.animate_to(to.opacity(), self.fade, now);
        true
    }

    pub fn opacity_at(&self, now: Instant) -> f32 {
        if !self.auto_hide {
            return 1.0;
        }
        self.opacity.value_at(now)
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.opacity.is_animating(now)
    }

    pub fn set_reduced_motion(&mut self, enabled: bool) {
        self.opacity.set_reduced_motion(enabled);
    }

    pub fn prune(&mut self, now: Instant) {
        self.opacity.prune(now);
    }
}
