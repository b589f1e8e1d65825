use std::cell::RefCell;
use std::ops::ControlFlow;
use std::rc::Rc;

use keyframe::functions::EaseOut;
use keyframe::EasingFunction;
use log::debug;

use super::frame::{FrameLoop, FrameSource};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CounterPhase {
    Idle,
    Triggered { started_at: f64 },
    Complete,
}

/// Eased count from 0 to `target`, run at most once.
///
/// The only path is `Idle -> Triggered -> Complete`. Times are seconds on
/// any monotonic clock; the displayed value never goes down.
#[derive(Clone, Debug, PartialEq)]
pub struct CountUp {
    target: u64,
    duration: f64,
    display: u64,
    phase: CounterPhase,
}

impl CountUp {
    /// A negative target clamps to 0. A non-positive or non-finite duration
    /// turns the run into a jump straight to the target.
    pub fn new(target: i64, duration_secs: f64) -> Self {
        let duration = if duration_secs.is_finite() && duration_secs > 0.0 {
            duration_secs
        } else {
            0.0
        };
        Self {
            target: target.max(0) as u64,
            duration,
            display: 0,
            phase: CounterPhase::Idle,
        }
    }

    /// Starts the run. Returns false if it had already been started.
    pub fn trigger(&mut self, now_secs: f64) -> bool {
        if self.phase != CounterPhase::Idle {
            return false;
        }
        if self.duration == 0.0 || self.target == 0 {
            self.display = self.target;
            self.phase = CounterPhase::Complete;
        } else {
            self.phase = CounterPhase::Triggered {
                started_at: now_secs,
            };
        }
        true
    }

    pub fn tick(&mut self, now_secs: f64) -> u64 {
        if let CounterPhase::Triggered { started_at } = self.phase {
            // f64::max drops a NaN operand, so a bad clock reads as no progress.
            let progress = ((now_secs - started_at).max(0.0) / self.duration).min(1.0);
            if progress >= 1.0 {
                self.display = self.target;
                self.phase = CounterPhase::Complete;
            } else {
                let eased = EaseOut.y(progress) * self.target as f64;
                let shown = (eased.round().max(0.0) as u64).min(self.target);
                self.display = self.display.max(shown);
            }
        }
        self.display
    }

    pub fn display(&self) -> u64 {
        self.display
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    pub fn phase(&self) -> CounterPhase {
        self.phase
    }

    pub fn has_triggered(&self) -> bool {
        self.phase != CounterPhase::Idle
    }

    pub fn is_running(&self) -> bool {
        matches!(self.phase, CounterPhase::Triggered { .. })
    }
}

/// Drives a `CountUp` off a frame source and publishes every displayed
/// value. Dropping the run stops the frames, so nothing is published after.
pub struct CountUpRun {
    counter: Rc<RefCell<CountUp>>,
    publish: Rc<dyn Fn(u64)>,
    frames: Option<FrameLoop>,
}

impl CountUpRun {
    pub fn new(counter: CountUp, publish: impl Fn(u64) + 'static) -> Self {
        Self {
            counter: Rc::new(RefCell::new(counter)),
            publish: Rc::new(publish),
            frames: None,
        }
    }

    /// Call when the counter's node enters the viewport. Only the first
    /// call starts anything.
    pub fn enter<F: FrameSource>(&mut self, source: &F) {
        let now = source.now() / 1000.0;
        let shown = {
            let mut counter = self.counter.borrow_mut();
            if !counter.trigger(now) {
                return;
            }
            debug!("Counting up to {}", counter.target());
            counter.tick(now)
        };
        (self.publish)(shown);

        if !self.counter.borrow().is_running() {
            return;
        }

        let counter = self.counter.clone();
        let publish = self.publish.clone();
        self.frames = Some(source.start(Box::new(move |timestamp| {
            let (shown, running) = {
                let mut counter = counter.borrow_mut();
                (counter.tick(timestamp / 1000.0), counter.is_running())
            };
            publish(shown);
            if running {
                ControlFlow::Continue(())
            } else {
                ControlFlow::Break(())
            }
        })));
    }

    pub fn display(&self) -> u64 {
        self.counter.borrow().display()
    }

    pub fn phase(&self) -> CounterPhase {
        self.counter.borrow().phase()
    }
}

/// Text shown by a stats counter, e.g. `98%`.
pub fn counter_label(value: u64, suffix: &str) -> String {
    format!("{}{}", value, suffix)
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::motion::frame::FakeFrames;

    #[test]
    fn walks_idle_triggered_complete() {
        let mut counter = CountUp::new(300, 2.5);
        assert_eq!(counter.phase(), CounterPhase::Idle);
        assert!(!counter.has_triggered());

        // Ticks before the trigger do nothing.
        assert_eq!(counter.tick(10.0), 0);

        assert!(counter.trigger(1.0));
        assert_eq!(counter.phase(), CounterPhase::Triggered { started_at: 1.0 });
        assert!(counter.is_running());

        assert_eq!(counter.tick(3.5), 300);
        assert_eq!(counter.phase(), CounterPhase::Complete);
        assert!(!counter.is_running());
    }

    #[test]
    fn reaches_target_within_duration_and_never_decreases() {
        let mut counter = CountUp::new(300, 2.5);
        counter.trigger(0.0);

        let mut last = 0;
        for step in 0..=100 {
            let now = step as f64 * 2.5 / 100.0;
            let shown = counter.tick(now);
            assert!(shown >= last, "dropped from {} to {} at {}s", last, shown, now);
            assert!(shown <= 300);
            last = shown;
        }
        assert_eq!(last, 300);
        assert_eq!(counter.phase(), CounterPhase::Complete);
    }

    #[test]
    fn display_is_monotonic_even_with_out_of_order_clock() {
        let mut counter = CountUp::new(50, 2.5);
        counter.trigger(0.0);
        let ahead = counter.tick(2.0);
        assert!(ahead > 0);
        assert_eq!(counter.tick(0.5), ahead);
        assert_eq!(counter.tick(f64::NAN), ahead);
    }

    #[test]
    fn ease_out_front_loads_progress() {
        let mut counter = CountUp::new(100, 2.0);
        counter.trigger(0.0);
        // Halfway through the time, an ease-out curve is past halfway.
        assert!(counter.tick(1.0) > 50);
    }

    #[test]
    fn second_trigger_is_ignored() {
        let mut counter = CountUp::new(15, 2.5);
        assert!(counter.trigger(0.0));
        assert_eq!(counter.tick(2.5), 15);

        assert!(!counter.trigger(10.0));
        assert_eq!(counter.tick(10.1), 15);
        assert_eq!(counter.phase(), CounterPhase::Complete);
    }

    #[test]
    fn bad_inputs_jump_to_target() {
        let mut negative_duration = CountUp::new(300, -1.0);
        assert!(negative_duration.trigger(0.0));
        assert_eq!(negative_duration.display(), 300);
        assert_eq!(negative_duration.phase(), CounterPhase::Complete);

        let mut nan_duration = CountUp::new(42, f64::NAN);
        nan_duration.trigger(0.0);
        assert_eq!(nan_duration.display(), 42);

        let mut negative_target = CountUp::new(-7, 2.5);
        negative_target.trigger(0.0);
        assert_eq!(negative_target.target(), 0);
        assert_eq!(negative_target.display(), 0);
        assert_eq!(negative_target.phase(), CounterPhase::Complete);
    }

    #[test]
    fn run_counts_to_98_percent() {
        let frames = FakeFrames::default();
        let shown = Rc::new(Cell::new(0));
        let mut run = CountUpRun::new(CountUp::new(98, 2.5), {
            let shown = shown.clone();
            move |value| shown.set(value)
        });

        frames.advance_to(0.0);
        run.enter(&frames);
        assert_eq!(frames.live_loops(), 1);

        frames.advance_to(1250.0);
        let midway = shown.get();
        assert!(midway > 0 && midway < 98, "midway value {}", midway);

        frames.advance_to(2500.0);
        assert_eq!(counter_label(shown.get(), "%"), "98%");
        assert_eq!(run.phase(), CounterPhase::Complete);
        assert_eq!(frames.live_loops(), 0);
    }

    #[test]
    fn re_entering_viewport_does_not_restart() {
        let frames = FakeFrames::default();
        let publishes = Rc::new(Cell::new(0));
        let mut run = CountUpRun::new(CountUp::new(300, 2.5), {
            let publishes = publishes.clone();
            move |_| publishes.set(publishes.get() + 1)
        });

        run.enter(&frames);
        frames.advance_to(3000.0);
        assert_eq!(run.display(), 300);
        let after_first = publishes.get();

        frames.advance_to(10_000.0);
        run.enter(&frames);
        frames.advance_to(10_500.0);
        assert_eq!(run.display(), 300);
        assert_eq!(publishes.get(), after_first);
        assert_eq!(frames.live_loops(), 0);
    }

    #[test]
    fn dropping_run_mid_animation_stops_updates() {
        let frames = FakeFrames::default();
        let shown = Rc::new(Cell::new(0));
        let mut run = CountUpRun::new(CountUp::new(300, 2.5), {
            let shown = shown.clone();
            move |value| shown.set(value)
        });

        run.enter(&frames);
        frames.advance_to(500.0);
        let frozen = shown.get();
        assert!(frozen > 0 && frozen < 300);

        drop(run);
        assert_eq!(frames.live_loops(), 0);

        frames.advance_to(1000.0);
        frames.advance_to(3000.0);
        assert_eq!(shown.get(), frozen);
    }

    #[test]
    fn zero_duration_run_never_starts_frames() {
        let frames = FakeFrames::default();
        let shown = Rc::new(Cell::new(0));
        let mut run = CountUpRun::new(CountUp::new(50, 0.0), {
            let shown = shown.clone();
            move |value| shown.set(value)
        });
        run.enter(&frames);
        assert_eq!(shown.get(), 50);
        assert_eq!(frames.live_loops(), 0);
    }

    #[test]
    fn label_appends_suffix() {
        assert_eq!(counter_label(300, "+"), "300+");
        assert_eq!(counter_label(15, ""), "15");
    }
}
