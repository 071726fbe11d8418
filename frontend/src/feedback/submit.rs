use serde::Deserialize;
use tracing::{error, info, warn};

use super::form::FeedbackPayload;
use crate::error::ApiError;

/// Status and decoded body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerReply {
    /// Status in the 2xx range.
    pub ok: bool,
    pub status: u16,
    pub message: String,
}

/// `{ "message": string }`, on both success and failure.
#[derive(Debug, Default, Deserialize)]
pub struct ReplyBody {
    #[serde(default)]
    pub message: String,
}

impl ServerReply {
    /// Reads the body whatever the status. A body that is not the expected
    /// JSON is an error on both paths.
    pub fn decode(ok: bool, status: u16, text: &str) -> Result<ServerReply, ApiError> {
        let body: ReplyBody = serde_json::from_str(text)?;
        Ok(ServerReply {
            ok,
            status,
            message: body.message,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted(String),
    Rejected(String),
    /// Transport or decode failure; already logged.
    Failed,
}

/// Sends one feedback payload. Implemented over `fetch` in the browser.
// Only driven from `spawn_local` on the main thread, so no `Send` bound.
#[allow(async_fn_in_trait)]
pub trait FeedbackTransport {
    async fn send(&self, payload: &FeedbackPayload) -> Result<ServerReply, ApiError>;
}

/// One best-effort request: no retry and no timeout.
pub async fn submit_feedback<T: FeedbackTransport>(
    transport: &T,
    payload: &FeedbackPayload,
) -> SubmitOutcome {
    info!(category = %payload.category, rating = payload.rating.value(), "submitting feedback");

    match transport.send(payload).await {
        Ok(reply) if reply.ok => {
            info!(status = reply.status, "feedback accepted");
            SubmitOutcome::Accepted(reply.message)
        }
        Ok(reply) => {
            warn!(status = reply.status, message = %reply.message, "feedback rejected");
            SubmitOutcome::Rejected(reply.message)
        }
        Err(e) => {
            error!("Error submitting feedback: {}", e);
            SubmitOutcome::Failed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feedback::rating::Rating;
    use crate::feedback::{Category, FeedbackForm, Notice};
    use futures::executor::block_on;
    use std::cell::RefCell;

    /// Answers every request with a canned result and records what was sent.
    struct RecordingTransport {
        reply: RefCell<Option<Result<ServerReply, ApiError>>>,
        sent: RefCell<Vec<FeedbackPayload>>,
    }

    impl RecordingTransport {
        fn replying(reply: Result<ServerReply, ApiError>) -> Self {
            RecordingTransport {
                reply: RefCell::new(Some(reply)),
                sent: RefCell::new(Vec::new()),
            }
        }
    }

    impl FeedbackTransport for RecordingTransport {
        async fn send(&self, payload: &FeedbackPayload) -> Result<ServerReply, ApiError> {
            self.sent.borrow_mut().push(payload.clone());
            self.reply
                .borrow_mut()
                .take()
                .unwrap_or(Err(ApiError::Fetch("no reply queued".into())))
        }
    }

    fn reply(status: u16, message: &str) -> Result<ServerReply, ApiError> {
        Ok(ServerReply {
            ok: (200..300).contains(&status),
            status,
            message: message.into(),
        })
    }

    fn filled() -> FeedbackForm {
        FeedbackForm {
            name: "Grace".into(),
            email: "grace@example.com".into(),
            category: Some(Category::FeatureRequest),
            description: "Dark mode please".into(),
            rating: Rating::try_from(4).unwrap(),
        }
    }

    /// Same steps the form component takes on click.
    fn run(transport: &RecordingTransport, form: &mut FeedbackForm) -> Option<Notice> {
        match form.validate() {
            Ok(payload) => {
                let outcome = block_on(submit_feedback(transport, &payload));
                form.apply(outcome)
            }
            Err(e) => Some(Notice::Alert(e.to_string())),
        }
    }

    #[test]
    fn empty_field_never_reaches_network() {
        for blank in ["name", "email", "category", "description"] {
            let mut form = filled();
            match blank {
                "name" => form.name.clear(),
                "email" => form.email.clear(),
                "category" => form.category = None,
                _ => form.description.clear(),
            }
            let transport = RecordingTransport::replying(reply(200, "ok"));
            let notice = run(&transport, &mut form);

            assert!(transport.sent.borrow().is_empty(), "{blank} blank but request sent");
            assert_eq!(
                notice,
                Some(Notice::Alert("Please fill in all fields before submitting.".into()))
            );
        }
    }

    #[test]
    fn success_sends_payload_and_clears_form() {
        let transport = RecordingTransport::replying(reply(201, "Feedback received"));
        let mut form = filled();
        let notice = run(&transport, &mut form);

        assert_eq!(notice, Some(Notice::Toast("Feedback received".into())));
        assert_eq!(form, FeedbackForm::default());
        let sent = transport.sent.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].email, "grace@example.com");
        assert_eq!(sent[0].rating.value(), 4);
    }

    #[test]
    fn non_ok_surfaces_message_and_keeps_fields() {
        let transport = RecordingTransport::replying(reply(400, "Email already used"));
        let mut form = filled();
        let notice = run(&transport, &mut form);

        assert_eq!(notice, Some(Notice::Alert("Email already used".into())));
        assert_eq!(form, filled());
    }

    #[test]
    fn transport_failure_is_swallowed() {
        let transport =
            RecordingTransport::replying(Err(ApiError::Fetch("connection refused".into())));
        let mut form = filled();
        assert_eq!(run(&transport, &mut form), None);
        assert_eq!(form, filled());
        assert_eq!(transport.sent.borrow().len(), 1);
    }

    #[test]
    fn decode_keeps_status() {
        let reply = ServerReply::decode(true, 201, r#"{"message":"Thanks"}"#).unwrap();
        assert_eq!(
            reply,
            ServerReply { ok: true, status: 201, message: "Thanks".into() }
        );
        let reply = ServerReply::decode(false, 422, r#"{"message":"Bad email"}"#).unwrap();
        assert!(!reply.ok);
        assert_eq!(reply.status, 422);
    }

    #[test]
    fn non_json_body_is_swallowed_on_both_paths() {
        for (ok, status) in [(true, 200), (false, 500)] {
            let decoded = ServerReply::decode(ok, status, "<html>Internal Server Error</html>");
            assert!(matches!(decoded, Err(ApiError::Json(_))), "status {status}");

            let transport = RecordingTransport::replying(decoded);
            let mut form = filled();
            assert_eq!(run(&transport, &mut form), None);
            assert_eq!(form, filled());
        }
    }

    #[test]
    fn empty_reply_object_on_error_is_rejected_with_empty_message() {
        let decoded = ServerReply::decode(false, 400, "{}");
        let transport = RecordingTransport::replying(decoded);
        let mut form = filled();
        let outcome = block_on(submit_feedback(&transport, &form.validate().unwrap()));
        assert_eq!(outcome, SubmitOutcome::Rejected(String::new()));
        assert_eq!(form.apply(outcome), Some(Notice::Alert(String::new())));
        assert_eq!(form, filled());
    }

    #[test]
    fn reply_body_tolerates_missing_message() {
        let body: ReplyBody = serde_json::from_str("{}").unwrap();
        assert_eq!(body.message, "");
        let body: ReplyBody = serde_json::from_str(r#"{"message":"hi","id":3}"#).unwrap();
        assert_eq!(body.message, "hi");
    }
}
