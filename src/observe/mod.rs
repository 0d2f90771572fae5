//! Viewport intersection watching.
//!
//! [`ViewportWatcher`] is the capability seam the reveal and count-up
//! behaviors attach through. The one-shot contract is part of the interface,
//! not caller responsibility: an implementation must deregister an element
//! synchronously *before* delivering it to the trigger handler, so a second
//! qualifying intersection can never re-trigger the element.
//!
//! Backends:
//! - `IntersectionWatcher` (wasm32) over the platform `IntersectionObserver`
//! - a mock in the test modules, driven by hand-fired entries

#[cfg(target_arch = "wasm32")]
mod intersection;

#[cfg(target_arch = "wasm32")]
pub use intersection::{IntersectionWatcher, supported};

/// Observer configuration. Mirrors the subset of `IntersectionObserverInit`
/// the behaviors use.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WatchOptions {
    /// Visibility ratio that counts as a qualifying intersection.
    pub threshold: f64,
    /// Root margin string, e.g. `"0px 0px -50px 0px"` to trigger slightly
    /// before the element reaches the viewport's bottom edge.
    pub root_margin: Option<&'static str>,
}

impl WatchOptions {
    pub const fn threshold(threshold: f64) -> Self {
        Self {
            threshold,
            root_margin: None,
        }
    }

    pub const fn with_root_margin(mut self, margin: &'static str) -> Self {
        self.root_margin = Some(margin);
        self
    }
}

/// One-shot viewport watcher.
///
/// `observe` registers an element for a single future trigger. Once the
/// trigger handler has run for an element, the watcher no longer holds it;
/// `unobserve` exists for callers that want to withdraw an element early.
pub trait ViewportWatcher {
    type Element;

    fn observe(&mut self, element: Self::Element);

    fn unobserve(&mut self, element: &Self::Element);
}

// ============================================================================
// Mock backend (tests)
// ============================================================================


#[cfg(test)]
mod tests {
    use super::mock::MockWatcher;
    use super::*;

    #[test]
    fn test_options_carry_threshold_and_margin() {
        let opts = WatchOptions::threshold(0.1).with_root_margin("0px 0px -50px 0px");
        assert_eq!(opts.threshold, 0.1);
        assert_eq!(opts.root_margin, Some("0px 0px -50px 0px"));

        let bare = WatchOptions::threshold(0.5);
        assert_eq!(bare.root_margin, None);
    }

    #[test]
    fn test_trigger_is_one_shot() {
        let mut watcher = MockWatcher::new();
        watcher.observe(7);

        assert!(watcher.fire(7, true));
        // Second qualifying entry for the same element: already unobserved.
        assert!(!watcher.fire(7, true));
        assert!(!watcher.is_observing(7));
    }

    #[test]
    fn test_non_intersecting_entries_do_not_consume() {
        let mut watcher = MockWatcher::new();
        watcher.observe(3);

        assert!(!watcher.fire(3, false));
        assert!(watcher.is_observing(3));
        assert!(watcher.fire(3, true));
    }

    #[test]
    fn test_unobserve_withdraws_early() {
        let mut watcher = MockWatcher::new();
        watcher.observe(1);
        watcher.observe(2);
        watcher.unobserve(&1);

        assert!(!watcher.fire(1, true));
        assert!(watcher.fire(2, true));
        assert_eq!(watcher.observed_len(), 0);
    }
}
