//! Mobile navigation toggle.
//!
//! The open flag is owned by [`NavState`] rather than read back from the
//! class list, so the DOM is a projection of the state and never the other
//! way around. The browser glue mirrors every transition into two writes:
//! the `nav-open` class on `<body>` and `aria-expanded` on the toggle
//! control.

/// View state for the mobile menu: one explicit boolean.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NavState {
    open: bool,
}

impl NavState {
    pub const fn new() -> Self {
        Self { open: false }
    }

    pub const fn is_open(self) -> bool {
        self.open
    }

    /// Flip the flag, returning the new value.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// String form for the `aria-expanded` attribute.
    pub const fn aria_expanded(self) -> &'static str {
        if self.open { "true" } else { "false" }
    }
}

/// Whether a click target inside the nav region counts as a link.
///
/// Tag names come back uppercase for HTML documents; compare loosely.
pub fn is_nav_link(tag_name: &str) -> bool {
    tag_name.eq_ignore_ascii_case("a")
}

// ============================================================================
// Browser glue
// ============================================================================

#[cfg(target_arch = "wasm32")]
pub(crate) mod dom {
    use super::{NavState, is_nav_link};
    use crate::markers;
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;
    use web_sys::{Document, Element, Event};

    /// Bind the toggle control and the close-on-link-click listener.
    ///
    /// Returns `false` (without binding anything) when the page carries no
    /// nav markup; the behavior is optional per page.
    pub(crate) fn attach(document: &Document) -> bool {
        let toggle = document.query_selector(markers::nav::TOGGLE).ok().flatten();
        let region = document.query_selector(markers::nav::REGION).ok().flatten();
        let body = document.body();

        let (Some(toggle), Some(region), Some(body)) = (toggle, region, body) else {
            return false;
        };

        let state = Rc::new(RefCell::new(NavState::new()));

        {
            let state = Rc::clone(&state);
            let body = body.clone();
            let control = toggle.clone();
            let on_toggle = Closure::<dyn FnMut()>::new(move || {
                let open = state.borrow_mut().toggle();
                apply(&body, &control, open);
            });
            toggle
                .add_event_listener_with_callback("click", on_toggle.as_ref().unchecked_ref())
                .ok();
            // Listener lives for the page lifetime.
            on_toggle.forget();
        }

        {
            let state = Rc::clone(&state);
            let control = toggle.clone();
            let on_region_click = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
                let is_link = event
                    .target()
                    .and_then(|t| t.dyn_into::<Element>().ok())
                    .is_some_and(|el| is_nav_link(&el.tag_name()));
                let mut state = state.borrow_mut();
                if is_link && state.is_open() {
                    state.close();
                    apply(&body, &control, state.is_open());
                }
            });
            region
                .add_event_listener_with_callback("click", on_region_click.as_ref().unchecked_ref())
                .ok();
            on_region_click.forget();
        }

        true
    }

    /// Project the state into the two attribute writes.
    fn apply(body: &web_sys::HtmlElement, control: &Element, open: bool) {
        let classes = body.class_list();
        if open {
            classes.add_1(markers::nav::OPEN_CLASS).ok();
        } else {
            classes.remove_1(markers::nav::OPEN_CLASS).ok();
        }
        let state = NavState { open };
        control
            .set_attribute("aria-expanded", state.aria_expanded())
            .ok();
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips_and_reports() {
        let mut state = NavState::new();
        assert!(!state.is_open());
        assert!(state.toggle());
        assert!(state.is_open());
        assert!(!state.toggle());
        assert!(!state.is_open());
    }

    #[test]
    fn test_aria_expanded_mirrors_state() {
        let mut state = NavState::new();
        assert_eq!(state.aria_expanded(), "false");
        state.toggle();
        assert_eq!(state.aria_expanded(), "true");
        state.close();
        assert_eq!(state.aria_expanded(), "false");
    }

    #[test]
    fn test_open_then_link_click_leaves_closed() {
        // Open the menu, then simulate a click on an anchor in the region.
        let mut state = NavState::new();
        state.toggle();
        if state.is_open() && is_nav_link("A") {
            state.close();
        }
        assert!(!state.is_open());
        assert_eq!(state.aria_expanded(), "false");
    }

    #[test]
    fn test_link_click_while_closed_is_a_no_op() {
        let mut state = NavState::new();
        if state.is_open() && is_nav_link("A") {
            state.close();
        }
        assert_eq!(state, NavState::new());
    }

    #[test]
    fn test_non_anchor_targets_are_ignored() {
        assert!(is_nav_link("A"));
        assert!(is_nav_link("a"));
        assert!(!is_nav_link("BUTTON"));
        assert!(!is_nav_link("SPAN"));
    }
}
