//! `IntersectionObserver` backend for [`ViewportWatcher`].

use super::{ViewportWatcher, WatchOptions};
use crate::error::DomError;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Whether the runtime exposes `IntersectionObserver` at all. Callers fall
/// back to their degraded path when this is `false`.
pub fn supported() -> bool {
    web_sys::window()
        .map(|window| {
            js_sys::Reflect::has(&window, &JsValue::from_str("IntersectionObserver"))
                .unwrap_or(false)
        })
        .unwrap_or(false)
}

/// One-shot watcher over the platform observer.
///
/// The callback closure must stay alive as long as the observer can fire;
/// both are kept here and leaked together via [`IntersectionWatcher::forget`]
/// once all elements are registered.
pub struct IntersectionWatcher {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl IntersectionWatcher {
    pub fn new(
        options: WatchOptions,
        mut on_trigger: impl FnMut(Element) + 'static,
    ) -> Result<Self, DomError> {
        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let element = entry.target();
                    // Deregister before the trigger runs: one-shot contract.
                    observer.unobserve(&element);
                    on_trigger(element);
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        if let Some(margin) = options.root_margin {
            init.set_root_margin(margin);
        }

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
                .map_err(DomError::platform)?;

        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    /// Keep the observer and its callback alive for the page lifetime.
    pub fn forget(self) {
        self._callback.forget();
        std::mem::forget(self.observer);
    }
}

impl ViewportWatcher for IntersectionWatcher {
    type Element = Element;

    fn observe(&mut self, element: Element) {
        self.observer.observe(&element);
    }

    fn unobserve(&mut self, element: &Element) {
        self.observer.unobserve(element);
    }
}
