//! Browser driver: per-element interval ticking over the frame schedule.

use super::{Counter, OPTIONS};
use crate::error::DomError;
use crate::markers;
use crate::observe::{IntersectionWatcher, ViewportWatcher, supported};
use gloo_timers::callback::Interval;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use tracing::warn;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

/// Register all metric elements. Returns how many were found.
pub(crate) fn attach(document: &Document) -> Result<usize, DomError> {
    let targets = collect(document);
    if targets.is_empty() {
        return Ok(0);
    }

    if !supported() {
        // No watcher, no animation: settle at the exact value immediately
        // so the placeholder markup text never sticks around.
        for element in &targets {
            if let Some(counter) = counter_for(element) {
                element.set_text_content(Some(&counter.final_text()));
            }
        }
        return Ok(targets.len());
    }

    let mut watcher = IntersectionWatcher::new(OPTIONS, |element| {
        if let Some(counter) = counter_for(&element) {
            animate(element, counter);
        }
    })?;
    let count = targets.len();
    for element in targets {
        watcher.observe(element);
    }
    watcher.forget();

    Ok(count)
}

/// Run one element's count-up to completion. The element was already
/// deregistered from the watcher, so the run can never restart.
fn animate(element: Element, counter: Counter) {
    let interval_ms = counter.schedule().frame_interval_ms().round() as u32;
    let total = counter.total_frames();
    let frame = Cell::new(0u32);

    // The interval cancels itself by dropping out of this slot on the
    // final frame.
    let handle: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
    let slot = Rc::clone(&handle);

    let interval = Interval::new(interval_ms, move || {
        let current = frame.get() + 1;
        frame.set(current);
        element.set_text_content(Some(&counter.text_at(current)));
        if current >= total {
            slot.borrow_mut().take();
        }
    });
    *handle.borrow_mut() = Some(interval);
}

/// Read the animation parameters off the element's marker attributes.
fn counter_for(element: &Element) -> Option<Counter> {
    let target = element.get_attribute(markers::metric::TARGET_ATTR)?;
    let prefix = element.get_attribute(markers::metric::PREFIX_ATTR);
    let suffix = element.get_attribute(markers::metric::SUFFIX_ATTR);
    match Counter::from_markers(&target, prefix, suffix) {
        Ok(counter) => Some(counter),
        Err(err) => {
            warn!(%err, "metric element skipped");
            None
        }
    }
}

fn collect(document: &Document) -> Vec<Element> {
    let Ok(nodes) = document.query_selector_all(markers::metric::SELECTOR) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}
