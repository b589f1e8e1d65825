use std::cell::{Cell, RefCell};
use std::ops::ControlFlow;
use std::rc::Rc;

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Called once per frame with a timestamp in milliseconds.
pub type FrameTick = Box<dyn FnMut(f64) -> ControlFlow<()>>;

/// A clock plus a way to run a closure on every frame.
pub trait FrameSource {
    /// Milliseconds, on the same timebase as the tick timestamps.
    fn now(&self) -> f64;
    fn start(&self, tick: FrameTick) -> FrameLoop;
}

/// Owns a running frame loop; dropping it cancels the pending frame.
pub struct FrameLoop {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl FrameLoop {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    pub fn finished() -> Self {
        Self { cancel: None }
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

/// `requestAnimationFrame` on the browser window.
#[derive(Clone, Copy, Debug, Default)]
pub struct AnimationFrames;

impl FrameSource for AnimationFrames {
    fn now(&self) -> f64 {
        web_sys::window()
            .and_then(|window| window.performance())
            .map(|performance| performance.now())
            .unwrap_or(0.0)
    }

    fn start(&self, mut tick: FrameTick) -> FrameLoop {
        let window = match web_sys::window() {
            Some(window) => window,
            None => {
                warn!("No window available, jumping animation to its end");
                let _ = tick(f64::INFINITY);
                return FrameLoop::finished();
            }
        };

        let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        // The callback re-schedules itself through this slot. The cycle is
        // broken when the FrameLoop is dropped.
        let slot: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));

        let callback = {
            let window = window.clone();
            let pending = pending.clone();
            let slot = slot.clone();
            Closure::wrap(Box::new(move |timestamp: f64| {
                pending.set(None);
                if tick(timestamp).is_break() {
                    return;
                }
                if let Some(next) = slot.borrow().as_ref() {
                    match window.request_animation_frame(next.as_ref().unchecked_ref()) {
                        Ok(id) => pending.set(Some(id)),
                        Err(err) => warn!("Failed to schedule animation frame: {:?}", err),
                    }
                }
            }) as Box<dyn FnMut(f64)>)
        };

        match window.request_animation_frame(callback.as_ref().unchecked_ref()) {
            Ok(id) => pending.set(Some(id)),
            Err(err) => {
                warn!("Failed to start animation frames: {:?}", err);
                return FrameLoop::finished();
            }
        }
        *slot.borrow_mut() = Some(callback);

        FrameLoop::new(move || {
            if let Some(id) = pending.take() {
                let _ = window.cancel_animation_frame(id);
            }
            slot.borrow_mut().take();
        })
    }
}

#[cfg(test)]
pub use fake::FakeFrames;

#[cfg(test)]
mod fake {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::{FrameLoop, FrameSource, FrameTick};

    #[derive(Default)]
    struct Inner {
        now: f64,
        next_id: usize,
        loops: Vec<(usize, Rc<RefCell<FrameTick>>)>,
    }

    /// Manual clock; `advance_to` delivers one frame to every live loop.
    #[derive(Clone, Default)]
    pub struct FakeFrames {
        inner: Rc<RefCell<Inner>>,
    }

    impl FakeFrames {
        pub fn advance_to(&self, now_ms: f64) {
            let loops: Vec<(usize, Rc<RefCell<FrameTick>>)> = {
                let mut inner = self.inner.borrow_mut();
                inner.now = now_ms;
                inner.loops.clone()
            };
            for (id, tick) in loops {
                let flow = {
                    let mut tick = tick.borrow_mut();
                    (*tick)(now_ms)
                };
                if flow.is_break() {
                    self.inner.borrow_mut().loops.retain(|(other, _)| *other != id);
                }
            }
        }

        pub fn live_loops(&self) -> usize {
            self.inner.borrow().loops.len()
        }
    }

    impl FrameSource for FakeFrames {
        fn now(&self) -> f64 {
            self.inner.borrow().now
        }

        fn start(&self, tick: FrameTick) -> FrameLoop {
            let id = {
                let mut inner = self.inner.borrow_mut();
                let id = inner.next_id;
                inner.next_id += 1;
                inner.loops.push((id, Rc::new(RefCell::new(tick))));
                id
            };
            let inner = self.inner.clone();
            FrameLoop::new(move || {
                inner.borrow_mut().loops.retain(|(other, _)| *other != id);
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loop_runs_until_break() {
        let frames = FakeFrames::default();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let _handle = frames.start({
            let seen = seen.clone();
            Box::new(move |t| {
                seen.borrow_mut().push(t);
                if t >= 32.0 {
                    ControlFlow::Break(())
                } else {
                    ControlFlow::Continue(())
                }
            })
        });

        frames.advance_to(16.0);
        frames.advance_to(32.0);
        frames.advance_to(48.0);
        assert_eq!(*seen.borrow(), vec![16.0, 32.0]);
        assert_eq!(frames.live_loops(), 0);
    }

    #[test]
    fn dropping_handle_cancels_frames() {
        let frames = FakeFrames::default();
        let count = Rc::new(Cell::new(0));
        let handle = frames.start({
            let count = count.clone();
            Box::new(move |_| {
                count.set(count.get() + 1);
                ControlFlow::Continue(())
            })
        });

        frames.advance_to(16.0);
        drop(handle);
        frames.advance_to(32.0);
        assert_eq!(count.get(), 1);
        assert_eq!(frames.live_loops(), 0);
    }
}
