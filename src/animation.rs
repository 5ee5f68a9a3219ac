//! Minimize animation state machine
//!
//! Drives the docked region's adjustment fraction between its normal and
//! minimized presentation. The host render loop calls `tick` once per frame
//! while an animation is in flight; the non-animating tick is a cheap
//! early-exit because it runs every frame regardless.

use std::time::{Duration, Instant};

/// Total duration of the minimize/restore animation
///
/// Communicated to listeners on the starting tick so they can line up their
/// own presentation animation with ours.
pub const MINIMIZE_ANIMATION_DURATION: Duration = Duration::from_millis(400);

// Control values for the fast-out-slow-in cubic, hermite form:
// f(t) = c1·3t(1-t)² + c2·3(1-t)t² + t³
const EASE_C1: f32 = 0.2;
const EASE_C2: f32 = 1.0;

/// Fast-out-slow-in easing, monotone on [0, 1] with f(0) = 0 and f(1) = 1
fn fast_out_slow_in(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    let omt = 1.0 - t;
    EASE_C1 * 3.0 * t * omt * omt + EASE_C2 * 3.0 * omt * t * t + t * t * t
}

/// One frame of an in-flight animation
#[derive(Debug, Clone, Copy)]
pub struct AnimationFrame {
    /// Interpolated adjustment fraction to apply to the docked region
    pub fraction: f32,
    /// True on the tick that captured the start time
    pub started: bool,
    /// True when the animation completed on this tick
    pub finished: bool,
}

/// Idle, or animating with the start time captured lazily on the first tick
/// rather than when `start` is called. Queued work between `start` and the
/// next frame must not eat into the animation duration.
#[derive(Debug, Clone, Copy)]
enum Phase {
    Idle,
    Pending {
        from: f32,
        to: f32,
    },
    Running {
        from: f32,
        to: f32,
        started_at: Instant,
    },
}

/// Time-based minimize animation: Idle -> Pending -> Running -> Idle
#[derive(Debug, Clone, Copy)]
pub struct MinimizeAnimation {
    phase: Phase,
}

impl MinimizeAnimation {
    pub fn new() -> Self {
        Self { phase: Phase::Idle }
    }

    /// Begin animating the adjustment fraction from `from` to `to`.
    ///
    /// Fractions are clamped to [0, 1]. Calling this while an animation is
    /// already in flight restarts it cleanly with the new range; there is no
    /// separate cancellation.
    pub fn start(&mut self, from: f32, to: f32) {
        self.phase = Phase::Pending {
            from: from.clamp(0.0, 1.0),
            to: to.clamp(0.0, 1.0),
        };
    }

    pub fn is_running(&self) -> bool {
        !matches!(self.phase, Phase::Idle)
    }

    /// Advance the animation to `now`.
    ///
    /// Returns `None` when nothing is animating. Otherwise the frame carries
    /// the interpolated fraction; `finished` frames transition back to Idle
    /// and subsequent ticks return `None` until the next `start`.
    pub fn tick(&mut self, now: Instant) -> Option<AnimationFrame> {
        let (from, to, started_at, started) = match self.phase {
            Phase::Idle => return None,
            Phase::Pending { from, to } => (from, to, now, true),
            Phase::Running {
                from,
                to,
                started_at,
            } => (from, to, started_at, false),
        };

        let elapsed = now.saturating_duration_since(started_at);
        let t = (elapsed.as_secs_f32() / MINIMIZE_ANIMATION_DURATION.as_secs_f32()).min(1.0);
        let eased = fast_out_slow_in(t);
        let fraction = eased * to + (1.0 - eased) * from;

        let finished = t >= 1.0;
        self.phase = if finished {
            Phase::Idle
        } else {
            Phase::Running {
                from,
                to,
                started_at,
            }
        };

        Some(AnimationFrame {
            fraction,
            started,
            finished,
        })
    }
}

impl Default for MinimizeAnimation {
    fn default() -> Self {
        Self::new()
    }
}
