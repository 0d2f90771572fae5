//! Client-side interaction layer for the Quantora Analytics site.
//!
//! Four independent behaviors attach to the document when the wasm module
//! starts:
//!
//! | Behavior | Module | Trigger |
//! |-----------------|-------------|----------------------------------------|
//! | nav toggle | [`nav`] | click on `.nav-toggle` / nav links |
//! | reveal-on-scroll| [`reveal`] | first 10% viewport intersection |
//! | metric count-up | [`countup`] | first 50% viewport intersection |
//! | form submission | [`form`] | `submit` on the marked forms |
//!
//! plus a footer year stamp ([`footer`]). The behavior cores are plain Rust
//! and compile on any target; everything touching the DOM is gated on
//! `wasm32` and lives behind the seams in [`observe`] and [`form`].
//!
//! Diagnostics go through [tracing]; in the browser they land on the
//! console via `tracing-wasm`.

pub mod countup;
pub mod error;
pub mod footer;
pub mod form;
pub mod markers;
pub mod nav;
pub mod observe;
pub mod reveal;

#[cfg(target_arch = "wasm32")]
mod page;

#[cfg(target_arch = "wasm32")]
mod boot {
    use wasm_bindgen::JsValue;
    use wasm_bindgen::prelude::wasm_bindgen;

    /// Module entry point, invoked by the loader once the page is ready.
    #[wasm_bindgen(start)]
    pub fn start() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        tracing_wasm::set_as_global_default();

        let document = crate::page::document().map_err(|err| JsValue::from_str(&err.to_string()))?;
        crate::page::boot(&document);
        Ok(())
    }
}
