//! Deferred work for smooth, flicker-free feedback.
//!
//! Two primitives drive every delayed state change in the engine:
//! - [`DebounceTimer`]: a single-shot timer; restarting it replaces the
//!   pending deadline, so only the last request before expiry fires.
//! - [`Tween`]: a property animation between two values over a fixed
//!   duration.
//!
//! Both are advanced explicitly with a frame delta and both have idempotent
//! `stop` methods.

use dockyard_core::geometry::Rect;
use std::time::Duration;

/// Values a [`Tween`] can interpolate.
pub trait Lerp: Copy {
    fn lerp(&self, other: &Self, t: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        self + (other - self) * t
    }
}

impl Lerp for Rect {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        Rect::lerp(self, other, t)
    }
}

// ---------------------------------------------------------------------------
// Debounce Timer
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct DebounceTimer {
    remaining: Option<Duration>,
}

impl DebounceTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule the timer, discarding any pending deadline.
    pub fn start(&mut self, delay: Duration) {
        self.remaining = Some(delay);
    }

    pub fn stop(&mut self) {
        self.remaining = None;
    }

    pub fn is_active(&self) -> bool {
        self.remaining.is_some()
    }

    /// Advance the timer. Returns `true` exactly once, on the tick where the
    /// deadline passes.
    pub fn tick(&mut self, dt: Duration) -> bool {
        match self.remaining {
            Some(remaining) if dt >= remaining => {
                self.remaining = None;
                true
            }
            Some(remaining) => {
                self.remaining = Some(remaining - dt);
                false
            }
            None => false,
        }
    }
}

// ---------------------------------------------------------------------------
// Tween
// ---------------------------------------------------------------------------

/// Linear property animation.
#[derive(Debug, Clone)]
pub struct Tween<T: Lerp> {
    start: T,
    end: T,
    elapsed: Duration,
    duration: Duration,
    running: bool,
}

impl<T: Lerp> Tween<T> {
    pub fn new(start: T, end: T, duration: Duration) -> Self {
        Self {
            start,
            end,
            elapsed: Duration::ZERO,
            duration,
            running: true,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn end_value(&self) -> T {
        self.end
    }

    fn progress(&self) -> f32 {
        if self.duration.is_zero() {
            1.0
        } else {
            (self.elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
        }
    }

    pub fn value(&self) -> T {
        self.start.lerp(&self.end, self.progress())
    }

    /// Advance the animation and return the current value. The tween stops
    /// itself once the end value is reached.
    pub fn update(&mut self, dt: Duration) -> T {
        if self.running {
            self.elapsed += dt;
            if self.elapsed >= self.duration {
                self.running = false;
            }
        }
        self.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn timer_fires_once_after_delay() {
        let mut timer = DebounceTimer::new();
        timer.start(ms(30));
        assert!(!timer.tick(ms(20)));
        assert!(timer.tick(ms(10)));
        assert!(!timer.tick(ms(100)));
        assert!(!timer.is_active());
    }

    #[test]
    fn restarting_timer_coalesces() {
        let mut timer = DebounceTimer::new();
        timer.start(ms(30));
        assert!(!timer.tick(ms(25)));
        timer.start(ms(30));
        assert!(!timer.tick(ms(25)));
        assert!(timer.tick(ms(5)));
    }

    #[test]
    fn stop_is_idempotent() {
        let mut timer = DebounceTimer::new();
        timer.stop();
        timer.start(ms(5));
        timer.stop();
        timer.stop();
        assert!(!timer.tick(ms(10)));
    }

    #[test]
    fn tween_reaches_end_and_stops() {
        let mut tween = Tween::new(0.0_f32, 1.0, ms(100));
        let mid = tween.update(ms(50));
        assert!((mid - 0.5).abs() < 1e-4);
        assert!(tween.is_running());
        assert_eq!(tween.update(ms(80)), 1.0);
        assert!(!tween.is_running());
    }

    #[test]
    fn zero_duration_tween_jumps_to_end() {
        let mut tween = Tween::new(Rect::new(0, 0, 10, 10), Rect::new(10, 10, 20, 20), Duration::ZERO);
        assert_eq!(tween.update(Duration::ZERO), Rect::new(10, 10, 20, 20));
        assert!(!tween.is_running());
    }
}
