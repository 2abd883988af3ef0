use std::sync::{Arc, Mutex, MutexGuard};

use crate::contact_client::ContactClient;
use crate::domain::{ContactFields, ContactRequest, Field, SubmissionOutcome};

/// Recorded when a submission is dropped before the contact service answers.
pub const INTERRUPTED_MESSAGE: &str = "The submission was interrupted before it completed.";

/// The contact form: five input fields plus the outcome of the latest
/// submission attempt.
///
/// Clones are handles onto the same form. At most one submission is in
/// flight per form: `submit` refuses to start while the outcome is
/// `Pending`.
#[derive(Clone)]
pub struct ContactForm {
    client: ContactClient,
    state: Arc<Mutex<FormState>>,
}

#[derive(Default)]
struct FormState {
    fields: ContactFields,
    outcome: Option<SubmissionOutcome>,
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum SubmitError {
    #[error("A submission is already in progress.")]
    AlreadyPending,
    #[error("{0}")]
    Validation(String),
}

impl ContactForm {
    pub fn new(client: ContactClient) -> Self {
        Self {
            client,
            state: Arc::new(Mutex::new(FormState::default())),
        }
    }

    /// Overwrites one input. No validation happens until `submit`.
    pub fn update_field(&self, field: Field, value: impl Into<String>) {
        self.state().fields.set(field, value.into());
    }

    pub fn fields(&self) -> ContactFields {
        self.state().fields.clone()
    }

    pub fn outcome(&self) -> Option<SubmissionOutcome> {
        self.state().outcome.clone()
    }

    pub fn is_pending(&self) -> bool {
        self.state()
            .outcome
            .as_ref()
            .is_some_and(SubmissionOutcome::is_pending)
    }

    /// Empties every field and forgets a finished outcome.
    /// A submission in flight keeps its `Pending` outcome.
    pub fn reset(&self) {
        let mut state = self.state();
        state.fields = ContactFields::default();
        if !state.outcome.as_ref().is_some_and(SubmissionOutcome::is_pending) {
            state.outcome = None;
        }
    }

    /// Sends the current field values to the contact endpoint.
    ///
    /// Remote rejections and transport failures are not errors here: they
    /// end up as `SubmissionOutcome::Failed`. `Err` means nothing was sent,
    /// either because a submission is already in flight or because the
    /// fields did not validate; the form state is left untouched in both
    /// cases.
    #[tracing::instrument(
        name = "Submit the contact form",
        skip(self),
        fields(submission_id = tracing::field::Empty)
    )]
    pub async fn submit(&self) -> Result<SubmissionOutcome, SubmitError> {
        let request = self.begin()?;
        let in_flight = InFlight(Some(self));

        let outcome = match self.client.send_contact_request(&request).await {
            Ok(id) => {
                tracing::Span::current().record("submission_id", tracing::field::display(&id));
                SubmissionOutcome::Succeeded(id)
            }
            Err(e) => {
                tracing::warn!(
                    error.cause_chain = ?e,
                    error.message = %e,
                    "The contact message could not be delivered",
                );
                SubmissionOutcome::Failed(e.to_string())
            }
        };
        in_flight.settle(outcome.clone());
        Ok(outcome)
    }

    /// Validates a snapshot of the fields and flips the form to `Pending`,
    /// all under one lock so two callers cannot both get through.
    fn begin(&self) -> Result<ContactRequest, SubmitError> {
        let mut state = self.state();
        if state.outcome.as_ref().is_some_and(SubmissionOutcome::is_pending) {
            return Err(SubmitError::AlreadyPending);
        }
        let request =
            ContactRequest::try_from(state.fields.clone()).map_err(SubmitError::Validation)?;
        state.outcome = Some(SubmissionOutcome::Pending);
        Ok(request)
    }

    fn finish(&self, outcome: SubmissionOutcome) {
        let mut state = self.state();
        if matches!(outcome, SubmissionOutcome::Succeeded(_)) {
            state.fields = ContactFields::default();
        }
        state.outcome = Some(outcome);
    }

    fn state(&self) -> MutexGuard<'_, FormState> {
        // The lock is never held across an `.await` nor while running user
        // code, so a poisoned lock still guards consistent state.
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Clears `Pending` if the submit future is dropped mid-flight.
struct InFlight<'a>(Option<&'a ContactForm>);

impl InFlight<'_> {
    fn settle(mut self, outcome: SubmissionOutcome) {
        if let Some(form) = self.0.take() {
            form.finish(outcome);
        }
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if let Some(form) = self.0.take() {
            form.finish(SubmissionOutcome::Failed(INTERRUPTED_MESSAGE.to_string()));
        }
    }
}
