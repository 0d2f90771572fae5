//! Error types for the interaction layer.

use thiserror::Error;

/// DOM-contract violations: markup the behaviors depend on is missing or
/// carries an unusable value.
#[derive(Debug, Error)]
pub enum DomError {
    #[error("required element `{0}` not found")]
    MissingElement(&'static str),

    #[error("invalid `{attr}` value: `{value}`")]
    InvalidMarker {
        attr: &'static str,
        value: String,
    },

    #[error("platform call failed: {0}")]
    Platform(String),
}

/// Failures of the outbound form request.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Request(String),

    #[error("response body unreadable: {0}")]
    Body(String),
}

#[cfg(target_arch = "wasm32")]
mod js {
    use super::{DomError, TransportError};
    use wasm_bindgen::JsValue;

    impl DomError {
        pub(crate) fn platform(value: JsValue) -> Self {
            Self::Platform(format!("{value:?}"))
        }
    }

    impl TransportError {
        pub(crate) fn request(value: JsValue) -> Self {
            Self::Request(format!("{value:?}"))
        }

        pub(crate) fn body(value: JsValue) -> Self {
            Self::Body(format!("{value:?}"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dom_error_display() {
        let missing = DomError::MissingElement("button[type=\"submit\"]");
        let display = format!("{missing}");
        assert!(display.contains("not found"));
        assert!(display.contains("button"));

        let invalid = DomError::InvalidMarker {
            attr: "data-target",
            value: "12k".to_string(),
        };
        let display = format!("{invalid}");
        assert!(display.contains("data-target"));
        assert!(display.contains("12k"));
    }

    #[test]
    fn test_transport_error_display() {
        let err = TransportError::Request("connection refused".to_string());
        assert!(format!("{err}").contains("connection refused"));
    }
}
