//! Reveal-on-scroll.
//!
//! Every `[data-animate]` element gets the `is-visible` class on its first
//! qualifying intersection and is then forgotten. The watcher triggers at
//! 10% visibility with a -50px bottom margin, so elements animate in just
//! before they reach the viewport's bottom edge. Without an intersection
//! watcher in the runtime everything becomes visible immediately.

use crate::observe::WatchOptions;

/// Observer settings for reveal targets.
pub const OPTIONS: WatchOptions = WatchOptions::threshold(0.1).with_root_margin("0px 0px -50px 0px");

// ============================================================================
// Browser glue
// ============================================================================

#[cfg(target_arch = "wasm32")]
pub(crate) mod dom {
    use super::OPTIONS;
    use crate::error::DomError;
    use crate::markers;
    use crate::observe::{IntersectionWatcher, ViewportWatcher, supported};
    use wasm_bindgen::JsCast;
    use web_sys::{Document, Element};

    /// Register all reveal targets. Returns how many were found.
    pub(crate) fn attach(document: &Document) -> Result<usize, DomError> {
        let targets = collect(document);
        if targets.is_empty() {
            return Ok(0);
        }

        if !supported() {
            // Graceful degradation: visible immediately, no animation.
            for element in &targets {
                mark_visible(element);
            }
            return Ok(targets.len());
        }

        let mut watcher = IntersectionWatcher::new(OPTIONS, |element| {
            mark_visible(&element);
        })?;
        let count = targets.len();
        for element in targets {
            watcher.observe(element);
        }
        watcher.forget();

        Ok(count)
    }

    fn mark_visible(element: &Element) {
        element
            .class_list()
            .add_1(markers::reveal::VISIBLE_CLASS)
            .ok();
    }

    fn collect(document: &Document) -> Vec<Element> {
        let Ok(nodes) = document.query_selector_all(markers::reveal::SELECTOR) else {
            return Vec::new();
        };
        (0..nodes.length())
            .filter_map(|i| nodes.get(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }
}

// ============================================================================
// Tests
// ============================================================================
