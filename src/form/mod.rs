//! AJAX form submission.
//!
//! One submission attempt walks a small state machine:
//!
//! ```text
//! idle -> validating -> rejected                    (no request issued)
//!                    -> sending -> succeeded        (2xx)
//!                               -> failed           (non-2xx or transport)
//! every non-rejected path -> idle with the submit control restored
//! ```
//!
//! [`run_submission`] drives the machine against two seams: a [`FormView`]
//! (the form's DOM surface) and a [`Transport`] (the outbound request).
//! Restoring the submit control is owned by a drop guard, so it happens on
//! every exit path of the sending phase rather than per branch.

#[cfg(target_arch = "wasm32")]
pub(crate) mod fetch;
pub mod response;

use crate::error::TransportError;
use crate::markers;
use tracing::debug;

/// Where a form declares its submission should go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub url: String,
    pub method: String,
}

/// What came back from the transport. The body is only consulted for
/// non-success replies, where it may carry a structured error payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub ok: bool,
    pub body: String,
}

/// Terminal state of one submission attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Native constraint validation failed; nothing was sent.
    Rejected,
    Succeeded,
    Failed,
}

/// Status line rendered under the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

impl StatusKind {
    /// Full class attribute value for the status element.
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Success => markers::form::STATUS_SUCCESS_CLASS,
            Self::Error => markers::form::STATUS_ERROR_CLASS,
        }
    }
}

impl StatusMessage {
    pub fn validation_failure() -> Self {
        Self {
            kind: StatusKind::Error,
            text: markers::form::MSG_VALIDATION.to_string(),
        }
    }

    pub fn success() -> Self {
        Self {
            kind: StatusKind::Success,
            text: markers::form::MSG_SUCCESS.to_string(),
        }
    }

    pub fn generic_failure() -> Self {
        Self {
            kind: StatusKind::Error,
            text: markers::form::MSG_FAILURE.to_string(),
        }
    }

    /// Derive the error text from a non-success reply body: the comma-joined
    /// `errors[].message` list when present, the generic message otherwise.
    pub fn from_error_body(body: &str) -> Self {
        match response::error_text(body) {
            Some(text) => Self {
                kind: StatusKind::Error,
                text,
            },
            None => Self::generic_failure(),
        }
    }
}

// ============================================================================
// Seams
// ============================================================================

/// The DOM surface of one submission-enabled form.
///
/// Behavior is form-agnostic: the same machine drives the contact form and
/// the internship application form, parameterized only by the view.
pub trait FormView {
    type Payload;

    /// Native required/format constraint check.
    fn check_validity(&self) -> bool;

    fn endpoint(&self) -> Endpoint;

    /// Serialize the current field set (including file fields).
    fn payload(&self) -> Self::Payload;

    /// `true`: disable the submit control and show the transient sending
    /// label. `false`: restore the original label and re-enable.
    fn set_sending(&mut self, sending: bool);

    fn show_status(&mut self, status: &StatusMessage);

    fn reset_fields(&mut self);
}

/// Outbound request capability. Futures are not `Send`: on wasm the whole
/// flow lives on the single browser thread.
#[allow(async_fn_in_trait)]
pub trait Transport<P> {
    async fn send(&self, endpoint: &Endpoint, payload: P) -> Result<Reply, TransportError>;
}

// ============================================================================
// State machine
// ============================================================================

/// Re-enables the submit control when the sending phase ends, no matter how.
struct SendingGuard<'a, V: FormView> {
    view: &'a mut V,
}

impl<V: FormView> Drop for SendingGuard<'_, V> {
    fn drop(&mut self) {
        self.view.set_sending(false);
    }
}

/// Drive one submission attempt to its terminal state.
pub async fn run_submission<V, T>(view: &mut V, transport: &T) -> SubmitOutcome
where
    V: FormView,
    T: Transport<V::Payload>,
{
    if !view.check_validity() {
        view.show_status(&StatusMessage::validation_failure());
        return SubmitOutcome::Rejected;
    }

    let endpoint = view.endpoint();
    let payload = view.payload();

    view.set_sending(true);
    let mut guard = SendingGuard { view };

    let (status, outcome) = match transport.send(&endpoint, payload).await {
        Ok(reply) if reply.ok => (StatusMessage::success(), SubmitOutcome::Succeeded),
        Ok(reply) => (
            StatusMessage::from_error_body(&reply.body),
            SubmitOutcome::Failed,
        ),
        Err(err) => {
            debug!(%err, url = %endpoint.url, "form submission transport failure");
            (StatusMessage::generic_failure(), SubmitOutcome::Failed)
        }
    };

    guard.view.show_status(&status);
    if outcome == SubmitOutcome::Succeeded {
        guard.view.reset_fields();
    }

    outcome
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    // ------------------------------------------------------------------------
    // Mocks
    // ------------------------------------------------------------------------

    #[derive(Debug)]
    struct MockView {
        valid: bool,
        sending_log: Vec<bool>,
        status: Option<StatusMessage>,
        fields_reset: bool,
        payload_taken: Cell<bool>,
    }

    impl MockView {
        fn new(valid: bool) -> Self {
            Self {
                valid,
                sending_log: Vec::new(),
                status: None,
                fields_reset: false,
                payload_taken: Cell::new(false),
            }
        }

        fn control_restored(&self) -> bool {
            self.sending_log.last() != Some(&true)
        }
    }

    impl FormView for MockView {
        type Payload = Vec<(String, String)>;

        fn check_validity(&self) -> bool {
            self.valid
        }

        fn endpoint(&self) -> Endpoint {
            Endpoint {
                url: "https://forms.example/f/abc".to_string(),
                method: "post".to_string(),
            }
        }

        fn payload(&self) -> Self::Payload {
            self.payload_taken.set(true);
            vec![("email".to_string(), "a@b.example".to_string())]
        }

        fn set_sending(&mut self, sending: bool) {
            self.sending_log.push(sending);
        }

        fn show_status(&mut self, status: &StatusMessage) {
            self.status = Some(status.clone());
        }

        fn reset_fields(&mut self) {
            self.fields_reset = true;
        }
    }

    struct MockTransport {
        reply: RefCell<Option<Result<Reply, crate::error::TransportError>>>,
        calls: Cell<usize>,
    }

    impl MockTransport {
        fn replying(reply: Result<Reply, crate::error::TransportError>) -> Self {
            Self {
                reply: RefCell::new(Some(reply)),
                calls: Cell::new(0),
            }
        }

        fn unreachable() -> Self {
            Self {
                reply: RefCell::new(None),
                calls: Cell::new(0),
            }
        }
    }

    impl Transport<Vec<(String, String)>> for MockTransport {
        async fn send(
            &self,
            _endpoint: &Endpoint,
            _payload: Vec<(String, String)>,
        ) -> Result<Reply, crate::error::TransportError> {
            self.calls.set(self.calls.get() + 1);
            self.reply
                .borrow_mut()
                .take()
                .expect("transport called without a scripted reply")
        }
    }

    // ------------------------------------------------------------------------
    // Validation short-circuit
    // ------------------------------------------------------------------------

    #[tokio::test]
    async fn test_invalid_form_never_issues_a_request() {
        let mut view = MockView::new(false);
        let transport = MockTransport::unreachable();

        let outcome = run_submission(&mut view, &transport).await;

        assert_eq!(outcome, SubmitOutcome::Rejected);
        assert_eq!(transport.calls.get(), 0);
        assert!(!view.payload_taken.get());
        let status = view.status.as_ref().expect("status shown");
        assert_eq!(status.text, "Please complete all required fields.");
        assert_eq!(status.kind, StatusKind::Error);
        // The sending phase was never entered, so nothing to restore.
        assert!(view.sending_log.is_empty());
    }

    // ------------------------------------------------------------------------
    // Success path
    // ------------------------------------------------------------------------

    #[tokio::test]
    async fn test_success_reply_confirms_and_resets_fields() {
        let mut view = MockView::new(true);
        let transport = MockTransport::replying(Ok(Reply {
            ok: true,
            body: String::new(),
        }));

        let outcome = run_submission(&mut view, &transport).await;

        assert_eq!(outcome, SubmitOutcome::Succeeded);
        assert_eq!(transport.calls.get(), 1);
        assert!(view.fields_reset);
        let status = view.status.as_ref().expect("status shown");
        assert_eq!(status.text, "Thanks! Your message has been sent.");
        assert_eq!(status.kind, StatusKind::Success);
        assert_eq!(view.sending_log, vec![true, false]);
    }

    // ------------------------------------------------------------------------
    // Failure paths
    // ------------------------------------------------------------------------

    #[tokio::test]
    async fn test_structured_errors_are_comma_joined() {
        let mut view = MockView::new(true);
        let transport = MockTransport::replying(Ok(Reply {
            ok: false,
            body: r#"{"errors":[{"message":"Email invalid"},{"message":"Name required"}]}"#
                .to_string(),
        }));

        let outcome = run_submission(&mut view, &transport).await;

        assert_eq!(outcome, SubmitOutcome::Failed);
        let status = view.status.as_ref().expect("status shown");
        assert_eq!(status.text, "Email invalid, Name required");
        assert_eq!(status.kind, StatusKind::Error);
        assert!(!view.fields_reset);
        assert!(view.control_restored());
    }

    #[tokio::test]
    async fn test_unstructured_error_body_shows_generic_message() {
        let mut view = MockView::new(true);
        let transport = MockTransport::replying(Ok(Reply {
            ok: false,
            body: "<html>502 Bad Gateway</html>".to_string(),
        }));

        run_submission(&mut view, &transport).await;

        let status = view.status.as_ref().expect("status shown");
        assert_eq!(status.text, "Oops! There was a problem submitting your form.");
        assert_eq!(status.kind, StatusKind::Error);
    }

    #[tokio::test]
    async fn test_transport_failure_restores_the_control() {
        let mut view = MockView::new(true);
        let transport = MockTransport::replying(Err(
            crate::error::TransportError::Request("network down".to_string()),
        ));

        let outcome = run_submission(&mut view, &transport).await;

        assert_eq!(outcome, SubmitOutcome::Failed);
        let status = view.status.as_ref().expect("status shown");
        assert_eq!(status.text, "Oops! There was a problem submitting your form.");
        assert_eq!(view.sending_log, vec![true, false]);
        assert!(view.control_restored());
        assert!(!view.fields_reset);
    }

    // ------------------------------------------------------------------------
    // Status styling
    // ------------------------------------------------------------------------

    #[test]
    fn test_status_kind_css_classes() {
        assert_eq!(StatusKind::Success.css_class(), "form-status success");
        assert_eq!(StatusKind::Error.css_class(), "form-status error");
    }
}
