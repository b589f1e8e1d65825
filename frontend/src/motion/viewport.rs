use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// One-shot gate: opens on the first intersecting observation and stays
/// open, whatever happens to the node afterwards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InViewOnce {
    entered: bool,
}

impl InViewOnce {
    /// Returns true only for the observation that first saw the node.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if self.entered || !intersecting {
            return false;
        }
        self.entered = true;
        true
    }

    pub fn has_entered(&self) -> bool {
        self.entered
    }
}

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Watches one element and calls `on_enter` the first time it intersects
/// the viewport. The observer disconnects itself after firing, and on drop.
pub struct ViewportWatch {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

impl ViewportWatch {
    pub fn arm(
        element: &Element,
        root_margin: &str,
        on_enter: impl FnOnce() + 'static,
    ) -> Result<Self, JsValue> {
        let mut gate = InViewOnce::default();
        let mut on_enter = Some(on_enter);

        let callback = Closure::wrap(Box::new(
            move |entries: Array, observer: IntersectionObserver| {
                let intersecting = entries.iter().any(|entry| {
                    entry
                        .unchecked_into::<IntersectionObserverEntry>()
                        .is_intersecting()
                });
                if gate.observe(intersecting) {
                    observer.disconnect();
                    if let Some(on_enter) = on_enter.take() {
                        on_enter();
                    }
                }
            },
        ) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_root_margin(root_margin);
        options.set_threshold(&JsValue::from_f64(0.0));

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        observer.observe(element);
        debug!("Viewport watch armed on <{}>", element.tag_name().to_lowercase());

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for ViewportWatch {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
