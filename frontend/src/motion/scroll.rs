use std::cell::Cell;
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Whether the page has scrolled past the nav threshold.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollState {
    pub is_past_threshold: bool,
}

impl ScrollState {
    pub fn from_offset(offset: f64, threshold: f64) -> Self {
        let offset = if offset.is_finite() { offset } else { 0.0 };
        Self {
            is_past_threshold: offset > threshold,
        }
    }
}

pub type ScrollListener = Rc<dyn Fn(f64)>;

/// Anything that can report a vertical scroll offset and notify on change.
pub trait ScrollSource {
    fn offset(&self) -> f64;
    fn subscribe(&self, listener: ScrollListener) -> ScrollSubscription;
}

/// Keeps a listener attached for as long as it lives.
pub struct ScrollSubscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl ScrollSubscription {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// A subscription that never attached anything.
    pub fn detached() -> Self {
        Self { release: None }
    }
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

/// The browser window's `scrollY` and `scroll` event.
#[derive(Clone, Copy, Debug, Default)]
pub struct WindowScroll;

impl ScrollSource for WindowScroll {
    fn offset(&self) -> f64 {
        web_sys::window()
            .and_then(|window| window.scroll_y().ok())
            .unwrap_or(0.0)
    }

    fn subscribe(&self, listener: ScrollListener) -> ScrollSubscription {
        let window = match web_sys::window() {
            Some(window) => window,
            None => {
                warn!("No window available, scroll listener not attached");
                return ScrollSubscription::detached();
            }
        };

        let scroll_callback = {
            let window = window.clone();
            Closure::wrap(Box::new(move || {
                listener(window.scroll_y().unwrap_or(0.0));
            }) as Box<dyn FnMut()>)
        };

        if let Err(err) = window
            .add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
        {
            warn!("Failed to attach scroll listener: {:?}", err);
            return ScrollSubscription::detached();
        }
        debug!("Scroll listener attached");

        ScrollSubscription::new(move || {
            if let Err(err) = window.remove_event_listener_with_callback(
                "scroll",
                scroll_callback.as_ref().unchecked_ref(),
            ) {
                warn!("Failed to detach scroll listener: {:?}", err);
            } else {
                debug!("Scroll listener detached");
            }
        })
    }
}

/// Derives `ScrollState` from a source on every scroll signal and reports
/// transitions. Dropping the tracker unsubscribes from the source.
pub struct ScrollTracker {
    state: Rc<Cell<ScrollState>>,
    _subscription: ScrollSubscription,
}

impl ScrollTracker {
    pub fn attach<S: ScrollSource>(
        source: &S,
        threshold: f64,
        on_change: impl Fn(ScrollState) + 'static,
    ) -> Self {
        let state = Rc::new(Cell::new(ScrollState::from_offset(source.offset(), threshold)));

        let listener: ScrollListener = {
            let state = state.clone();
            Rc::new(move |offset: f64| {
                let next = ScrollState::from_offset(offset, threshold);
                if state.replace(next) != next {
                    on_change(next);
                }
            })
        };

        Self {
            state,
            _subscription: source.subscribe(listener),
        }
    }

    pub fn state(&self) -> ScrollState {
        self.state.get()
    }
}

#[cfg(test)]
pub use fake::FakeScroll;

#[cfg(test)]
mod fake {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::{ScrollListener, ScrollSource, ScrollSubscription};

    #[derive(Default)]
    struct Inner {
        offset: f64,
        next_id: usize,
        listeners: Vec<(usize, ScrollListener)>,
    }

    /// Scroll source driven by hand from tests.
    #[derive(Clone, Default)]
    pub struct FakeScroll {
        inner: Rc<RefCell<Inner>>,
    }

    impl FakeScroll {
        pub fn scroll_to(&self, offset: f64) {
            let listeners: Vec<ScrollListener> = {
                let mut inner = self.inner.borrow_mut();
                inner.offset = offset;
                inner.listeners.iter().map(|(_, l)| l.clone()).collect()
            };
            for listener in listeners {
                listener(offset);
            }
        }

        pub fn listener_count(&self) -> usize {
            self.inner.borrow().listeners.len()
        }
    }

    impl ScrollSource for FakeScroll {
        fn offset(&self) -> f64 {
            self.inner.borrow().offset
        }

        fn subscribe(&self, listener: ScrollListener) -> ScrollSubscription {
            let id = {
                let mut inner = self.inner.borrow_mut();
                let id = inner.next_id;
                inner.next_id += 1;
                inner.listeners.push((id, listener));
                id
            };
            let inner = self.inner.clone();
            ScrollSubscription::new(move || {
                inner.borrow_mut().listeners.retain(|(other, _)| *other != id);
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    #[test]
    fn threshold_is_strict() {
        for (offset, expected) in [
            (0.0, false),
            (49.9, false),
            (50.0, false),
            (50.5, true),
            (120.0, true),
            (-10.0, false),
        ] {
            assert_eq!(
                ScrollState::from_offset(offset, 50.0).is_past_threshold,
                expected,
                "offset {}",
                offset
            );
        }
    }

    #[test]
    fn non_finite_offset_reads_as_top() {
        assert!(!ScrollState::from_offset(f64::NAN, 50.0).is_past_threshold);
        assert!(!ScrollState::from_offset(f64::INFINITY, 50.0).is_past_threshold);
    }

    #[test]
    fn tracker_follows_latest_offset() {
        let source = FakeScroll::default();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let tracker = ScrollTracker::attach(&source, 50.0, {
            let seen = seen.clone();
            move |state| seen.borrow_mut().push(state.is_past_threshold)
        });

        source.scroll_to(0.0);
        assert!(!tracker.state().is_past_threshold);
        source.scroll_to(120.0);
        assert!(tracker.state().is_past_threshold);
        source.scroll_to(10.0);
        assert!(!tracker.state().is_past_threshold);

        // Only transitions are reported, 0.0 matched the initial state.
        assert_eq!(*seen.borrow(), vec![true, false]);
    }

    #[test]
    fn tracker_starts_from_current_offset() {
        let source = FakeScroll::default();
        source.scroll_to(300.0);
        let tracker = ScrollTracker::attach(&source, 50.0, |_| {});
        assert!(tracker.state().is_past_threshold);
    }

    #[test]
    fn dropping_tracker_detaches_listener() {
        let source = FakeScroll::default();
        let calls = Rc::new(Cell::new(0));
        let tracker = ScrollTracker::attach(&source, 50.0, {
            let calls = calls.clone();
            move |_| calls.set(calls.get() + 1)
        });
        assert_eq!(source.listener_count(), 1);

        source.scroll_to(100.0);
        assert_eq!(calls.get(), 1);

        drop(tracker);
        assert_eq!(source.listener_count(), 0);

        source.scroll_to(0.0);
        source.scroll_to(200.0);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn trackers_on_one_source_are_independent() {
        let source = FakeScroll::default();
        let nav = ScrollTracker::attach(&source, 50.0, |_| {});
        let deep = ScrollTracker::attach(&source, 500.0, |_| {});
        source.scroll_to(120.0);
        assert!(nav.state().is_past_threshold);
        assert!(!deep.state().is_past_threshold);

        drop(nav);
        assert_eq!(source.listener_count(), 1);
        source.scroll_to(800.0);
        assert!(deep.state().is_past_threshold);
    }
}
