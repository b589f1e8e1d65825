use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::warn;
use web_sys::Element;
use yew::prelude::*;

use crate::config;
use crate::motion::counter::{CountUp, CountUpRun};
use crate::motion::frame::AnimationFrames;
use crate::motion::scroll::{ScrollState, ScrollTracker, WindowScroll};
use crate::motion::viewport::ViewportWatch;

/// True while the window is scrolled further than `threshold` px.
#[hook]
pub fn use_scroll_past(threshold: f64) -> bool {
    let is_past = use_state_eq(|| false);

    {
        let is_past = is_past.clone();
        use_effect_with_deps(
            move |threshold| {
                let tracker = ScrollTracker::attach(&WindowScroll, *threshold, {
                    let is_past = is_past.clone();
                    move |state: ScrollState| is_past.set(state.is_past_threshold)
                });
                is_past.set(tracker.state().is_past_threshold);

                move || drop(tracker)
            },
            threshold,
        );
    }

    *is_past
}

/// Value to display for a counter attached to `node`. Stays at 0 until the
/// node first enters the viewport, then counts up to `target` once.
#[hook]
pub fn use_count_up(node: NodeRef, target: i64, duration_secs: f64) -> u64 {
    let shown = use_state_eq(|| 0u64);

    {
        let shown = shown.clone();
        use_effect_with_deps(
            move |(node, target, duration_secs)| {
                let run = Rc::new(RefCell::new(CountUpRun::new(
                    CountUp::new(*target, *duration_secs),
                    move |value| shown.set(value),
                )));

                let watch = node.cast::<Element>().and_then(|element| {
                    let run = run.clone();
                    let armed = ViewportWatch::arm(&element, config::VIEWPORT_ROOT_MARGIN, move || {
                        run.borrow_mut().enter(&AnimationFrames);
                    });
                    match armed {
                        Ok(watch) => Some(watch),
                        Err(err) => {
                            warn!("Counter could not watch the viewport: {:?}", err);
                            None
                        }
                    }
                });
                if watch.is_none() {
                    // Without an observer the number would sit at 0 forever.
                    run.borrow_mut().enter(&AnimationFrames);
                }

                move || {
                    drop(watch);
                    drop(run);
                }
            },
            (node, target, duration_secs),
        );
    }

    *shown
}

/// Flips to true `delay_ms` after `node` first enters the viewport.
#[hook]
pub fn use_revealed(node: NodeRef, delay_ms: u32) -> bool {
    let revealed = use_state_eq(|| false);

    {
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |(node, delay_ms)| {
                let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
                let delay_ms = *delay_ms;

                let watch = match node.cast::<Element>() {
                    Some(element) => {
                        let pending = pending.clone();
                        let revealed = revealed.clone();
                        ViewportWatch::arm(&element, config::VIEWPORT_ROOT_MARGIN, move || {
                            let timeout = Timeout::new(delay_ms, move || revealed.set(true));
                            *pending.borrow_mut() = Some(timeout);
                        })
                        .map_err(|err| warn!("Reveal could not watch the viewport: {:?}", err))
                        .ok()
                    }
                    None => None,
                };
                if watch.is_none() {
                    revealed.set(true);
                }

                move || {
                    drop(watch);
                    // Dropping a pending Timeout clears it.
                    pending.borrow_mut().take();
                }
            },
            (node, delay_ms),
        );
    }

    *revealed
}
