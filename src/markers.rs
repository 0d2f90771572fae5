//! The DOM contract between this crate and the site markup.
//!
//! Surrounding markup supplies these markers; nothing here is configurable
//! at build time. Selectors, class names and user-facing strings live in one
//! place so the behaviors and their tests share a single source of truth.

// ============================================================================
// Navigation
// ============================================================================

pub mod nav {
    /// Activation control for the mobile menu.
    pub const TOGGLE: &str = ".nav-toggle";

    /// Navigation region; a click on an anchor inside it closes the menu.
    pub const REGION: &str = ".site-nav";

    /// Body-level class reflecting the open state.
    pub const OPEN_CLASS: &str = "nav-open";
}

// ============================================================================
// Reveal-on-scroll
// ============================================================================

pub mod reveal {
    /// Elements tagged for one-shot reveal.
    pub const SELECTOR: &str = "[data-animate]";

    /// Applied on first intersection, never removed.
    pub const VISIBLE_CLASS: &str = "is-visible";
}

// ============================================================================
// Metric count-up
// ============================================================================

pub mod metric {
    /// Numeric display elements with a declared target value.
    pub const SELECTOR: &str = ".metric-value[data-target]";

    pub const TARGET_ATTR: &str = "data-target";
    pub const PREFIX_ATTR: &str = "data-prefix";
    pub const SUFFIX_ATTR: &str = "data-suffix";
}

// ============================================================================
// Forms
// ============================================================================

pub mod form {
    /// The two submission-enabled forms on the site.
    pub const IDS: [&str; 2] = ["contact-form", "internshipForm"];

    pub const SUBMIT_SELECTOR: &str = "button[type=\"submit\"]";

    /// Status element class, plus its success/error modifiers.
    pub const STATUS_CLASS: &str = "form-status";
    pub const STATUS_SUCCESS_CLASS: &str = "form-status success";
    pub const STATUS_ERROR_CLASS: &str = "form-status error";

    // Fixed user-facing strings
    pub const MSG_VALIDATION: &str = "Please complete all required fields.";
    pub const MSG_SENDING: &str = "Sending...";
    pub const MSG_SUCCESS: &str = "Thanks! Your message has been sent.";
    pub const MSG_FAILURE: &str = "Oops! There was a problem submitting your form.";
}

// ============================================================================
// Footer
// ============================================================================

pub mod footer {
    /// Year stamp targets. The markup reuses this id across pages, so the
    /// lookup deliberately collects every match rather than the first.
    pub const SELECTOR: &str = "#footer-year";
}
