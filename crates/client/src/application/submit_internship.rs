//! Submit internship use case - posts the form to the board and reports back.

use std::sync::Arc;

use internhub_domain::{
    FormSubmission, ServerReply, SubmissionOutcome, SubmitError, ADD_INTERNSHIP_PATH,
};

use crate::ports::outbound::{ApiError, FormPort, NotifierPort, SubmissionApiPort};

impl From<ApiError> for SubmitError {
    fn from(err: ApiError) -> Self {
        SubmitError::transport(err)
    }
}

/// Sends one form submission per call and tells the user how it went.
///
/// Every call issues exactly one request. Calls are independent: nothing is
/// deduplicated, queued, cancelled or retried, so overlapping submissions each
/// run to completion in whatever order their replies arrive.
pub struct SubmitInternship {
    api: Arc<dyn SubmissionApiPort>,
    notifier: Arc<dyn NotifierPort>,
}

impl SubmitInternship {
    pub fn new(api: Arc<dyn SubmissionApiPort>, notifier: Arc<dyn NotifierPort>) -> Self {
        Self { api, notifier }
    }

    /// Submit the current contents of `form`.
    ///
    /// Shows exactly one notification. The form is reset only when the server
    /// answers 2xx with a JSON body; on every failure path it is left as is.
    pub async fn execute(&self, form: &dyn FormPort) -> SubmissionOutcome {
        let submission = form.read_fields();
        let outcome = SubmissionOutcome::from(self.send(&submission).await);

        match &outcome {
            SubmissionOutcome::Posted => {}
            SubmissionOutcome::Rejected { status, message } => {
                tracing::warn!(status, message = %message, "Internship submission rejected");
            }
            SubmissionOutcome::Failed(err) => {
                tracing::warn!(error = %err, "Internship submission failed");
            }
        }

        self.notifier.alert(&outcome.notification());

        if outcome.resets_form() {
            form.reset();
        }

        outcome
    }

    async fn send(&self, submission: &FormSubmission) -> Result<ServerReply, SubmitError> {
        let body = submission.to_json()?;

        tracing::debug!(
            path = ADD_INTERNSHIP_PATH,
            fields = submission.len(),
            "Posting internship"
        );

        let response = self.api.post_json(ADD_INTERNSHIP_PATH, &body).await?;

        tracing::debug!(status = response.status, "Received submission response");

        let reply = ServerReply::parse(response.status, &response.body)?;

        if reply.is_success() {
            match reply.created_id() {
                Some(id) => tracing::info!(%id, "Internship posted"),
                None => tracing::info!("Internship posted"),
            }
        }

        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::{
        MockFormPort, MockNotifierPort, MockSubmissionApiPort, RawResponse,
    };

    fn filled_form() -> FormSubmission {
        FormSubmission::from_pairs([
            ("title", "AI Research Intern"),
            ("company", "Tech Corp"),
            ("stipend", "5000"),
        ])
    }

    fn form_expecting_reset(times: usize) -> MockFormPort {
        let mut form = MockFormPort::new();
        form.expect_read_fields().times(1).returning(filled_form);
        form.expect_reset().times(times).return_const(());
        form
    }

    fn notifier_expecting(expected: &'static str) -> MockNotifierPort {
        let mut notifier = MockNotifierPort::new();
        notifier
            .expect_alert()
            .withf(move |message| message == expected)
            .times(1)
            .return_const(());
        notifier
    }

    fn api_replying(status: u16, body: &'static str) -> MockSubmissionApiPort {
        let mut api = MockSubmissionApiPort::new();
        api.expect_post_json()
            .times(1)
            .returning(move |_, _| Ok(RawResponse::new(status, body)));
        api
    }

    #[tokio::test]
    async fn posts_one_json_body_with_every_field() {
        let mut api = MockSubmissionApiPort::new();
        api.expect_post_json()
            .withf(|path, body| {
                let json: serde_json::Value = match serde_json::from_str(body) {
                    Ok(json) => json,
                    Err(_) => return false,
                };
                path == "/add_internship"
                    && json
                        == serde_json::json!({
                            "title": "AI Research Intern",
                            "company": "Tech Corp",
                            "stipend": "5000",
                        })
            })
            .times(1)
            .returning(|_, _| Ok(RawResponse::new(201, r#"{"message": "ok", "id": 3}"#)));

        let use_case = SubmitInternship::new(
            Arc::new(api),
            Arc::new(notifier_expecting("Internship posted successfully!")),
        );

        let outcome = use_case.execute(&form_expecting_reset(1)).await;

        assert_eq!(outcome, SubmissionOutcome::Posted);
    }

    #[tokio::test]
    async fn success_resets_the_form() {
        let use_case = SubmitInternship::new(
            Arc::new(api_replying(200, "{}")),
            Arc::new(notifier_expecting("Internship posted successfully!")),
        );

        let outcome = use_case.execute(&form_expecting_reset(1)).await;

        assert!(outcome.resets_form());
    }

    #[tokio::test]
    async fn rejection_shows_server_error_and_keeps_the_form() {
        let use_case = SubmitInternship::new(
            Arc::new(api_replying(400, r#"{"error": "Missing title"}"#)),
            Arc::new(notifier_expecting("Error: Missing title")),
        );

        let outcome = use_case.execute(&form_expecting_reset(0)).await;

        assert_eq!(
            outcome,
            SubmissionOutcome::Rejected {
                status: 400,
                message: "Missing title".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn rejection_without_error_field_does_not_crash() {
        let use_case = SubmitInternship::new(
            Arc::new(api_replying(500, r#"{"detail": "boom"}"#)),
            Arc::new(notifier_expecting("Error: undefined")),
        );

        use_case.execute(&form_expecting_reset(0)).await;
    }

    #[tokio::test]
    async fn network_failure_shows_generic_error_and_keeps_the_form() {
        let mut api = MockSubmissionApiPort::new();
        api.expect_post_json()
            .times(1)
            .returning(|_, _| Err(ApiError::network("Failed to fetch")));

        let use_case = SubmitInternship::new(
            Arc::new(api),
            Arc::new(notifier_expecting(
                "Error posting internship: Failed to fetch",
            )),
        );

        let outcome = use_case.execute(&form_expecting_reset(0)).await;

        assert_eq!(
            outcome,
            SubmissionOutcome::Failed(SubmitError::transport("Failed to fetch"))
        );
    }

    #[tokio::test]
    async fn non_json_success_body_is_a_failure() {
        let mut notifier = MockNotifierPort::new();
        notifier
            .expect_alert()
            .withf(|message| message.starts_with("Error posting internship: "))
            .times(1)
            .return_const(());

        let use_case = SubmitInternship::new(
            Arc::new(api_replying(200, "<html>Created</html>")),
            Arc::new(notifier),
        );

        let outcome = use_case.execute(&form_expecting_reset(0)).await;

        assert!(matches!(
            outcome,
            SubmissionOutcome::Failed(SubmitError::Decode(_))
        ));
    }

    #[tokio::test]
    async fn each_call_sends_its_own_request() {
        let mut api = MockSubmissionApiPort::new();
        api.expect_post_json()
            .times(2)
            .returning(|_, _| Ok(RawResponse::new(200, "{}")));

        let mut notifier = MockNotifierPort::new();
        notifier.expect_alert().times(2).return_const(());

        let use_case = SubmitInternship::new(Arc::new(api), Arc::new(notifier));

        let mut form = MockFormPort::new();
        form.expect_read_fields().times(2).returning(filled_form);
        form.expect_reset().times(2).return_const(());

        use_case.execute(&form).await;
        use_case.execute(&form).await;
    }
}
