//! Page boot: attach every behavior to the loaded document.
//!
//! The four behaviors are fully decoupled; each attaches independently and
//! a page missing the markup for one simply skips it. The module loader
//! runs us after the document has parsed, so all markers are queryable.

use crate::error::DomError;
use crate::{countup, footer, form, nav, reveal};
use tracing::{debug, warn};
use web_sys::Document;

pub(crate) fn boot(document: &Document) {
    let nav_bound = nav::dom::attach(document);
    debug!(nav_bound, "navigation toggle");

    match reveal::dom::attach(document) {
        Ok(count) => debug!(count, "reveal targets"),
        Err(err) => warn!(%err, "reveal setup failed"),
    }

    match countup::driver::attach(document) {
        Ok(count) => debug!(count, "metric count-up targets"),
        Err(err) => warn!(%err, "count-up setup failed"),
    }

    let forms = form::fetch::attach(document);
    debug!(forms, "submission-enabled forms");

    let stamped = footer::dom::stamp(document);
    debug!(stamped, "footer year stamps");
}

pub(crate) fn document() -> Result<Document, DomError> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or(DomError::MissingElement("document"))
}
