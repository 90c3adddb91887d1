//! The one-shot enter tween: a hidden state settling into the resting
//! state, sampled by elapsed time since mount.

use std::time::Duration;

use crate::easing::Easing;

/// Interpolated presentation parameters of an animated element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualState {
    pub opacity: f32,
    /// Horizontal offset in px.
    pub x: f32,
    /// Vertical offset in px.
    pub y: f32,
}

impl VisualState {
    /// Fully revealed at rest. Every enter tween ends here, so a settled
    /// element renders exactly like one that was never animated.
    pub const fn settled() -> Self {
        Self {
            opacity: 1.0,
            x: 0.0,
            y: 0.0,
        }
    }

    /// Fully transparent at the given offset.
    pub const fn hidden(x: f32, y: f32) -> Self {
        Self { opacity: 0.0, x, y }
    }

    pub fn is_settled(self) -> bool {
        self == Self::settled()
    }

    fn lerp(from: Self, to: Self, t: f32) -> Self {
        Self {
            opacity: lerp(from.opacity, to.opacity, t),
            x: lerp(from.x, to.x, t),
            y: lerp(from.y, to.y, t),
        }
    }
}

fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

/// A one-shot transition from a hidden state to the settled state.
///
/// Pure data: `sample` maps elapsed time to a `VisualState` and is total.
/// The driver owns the clock, so the tween itself cannot be retriggered,
/// paused or left half-finished.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnterTween {
    pub from: VisualState,
    pub to: VisualState,
    /// Time before the transition starts; the tween holds `from` until then.
    pub delay: Duration,
    pub duration: Duration,
    pub easing: Easing,
}

impl EnterTween {
    /// Tween from `from` to the settled state over `duration`.
    pub fn new(from: VisualState, duration: Duration) -> Self {
        Self {
            from,
            to: VisualState::settled(),
            delay: Duration::ZERO,
            duration,
            easing: Easing::default(),
        }
    }

    /// A tween already at rest; sampling it at any time yields the settled
    /// state. Rendering the page without an enter animation means wrapping
    /// it in these instead of a second code path.
    pub fn settled() -> Self {
        Self {
            from: VisualState::settled(),
            to: VisualState::settled(),
            delay: Duration::ZERO,
            duration: Duration::ZERO,
            easing: Easing::Linear,
        }
    }

    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Adds on top of the existing delay. Per-child stagger is expressed
    /// this way.
    pub fn delayed_by(mut self, extra: Duration) -> Self {
        self.delay += extra;
        self
    }

    /// Elapsed time from which `sample` returns `to` forever.
    pub fn total(self) -> Duration {
        self.delay + self.duration
    }

    /// State at `elapsed` since mount: `from` before the delay has passed,
    /// `to` exactly from `total()` on, eased interpolation in between.
    pub fn sample(self, elapsed: Duration) -> VisualState {
        if elapsed < self.delay {
            return self.from;
        }
        if elapsed >= self.total() {
            return self.to;
        }
        let active = elapsed - self.delay;
        let progress = active.as_secs_f32() / self.duration.as_secs_f32();
        VisualState::lerp(self.from, self.to, self.easing.apply(progress))
    }

    pub fn is_settled_at(self, elapsed: Duration) -> bool {
        elapsed >= self.total()
    }
}
