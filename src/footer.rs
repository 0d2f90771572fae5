//! Footer year stamp.

use chrono::{Datelike, Local};

/// Current calendar year in the runtime's local time. On wasm this reads
/// the browser clock.
pub fn current_year() -> i32 {
    Local::now().year()
}

#[cfg(target_arch = "wasm32")]
pub(crate) mod dom {
    use crate::markers;
    use web_sys::Document;

    /// Write the year into every stamp target. Returns how many were found.
    pub(crate) fn stamp(document: &Document) -> usize {
        let Ok(nodes) = document.query_selector_all(markers::footer::SELECTOR) else {
            return 0;
        };
        let year = super::current_year().to_string();
        for i in 0..nodes.length() {
            if let Some(node) = nodes.get(i) {
                node.set_text_content(Some(&year));
            }
        }
        nodes.length() as usize
    }
}
