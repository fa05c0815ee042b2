//! Redirect form: draft state and submission coordination.

use std::sync::Arc;

use tracing::{debug, error, info, warn};
use validator::Validate;

use crate::api::dto::{FormView, ModuleArguments, SubmitRequest};
use crate::application::services::validation_service::{RedirectValidator, ValidationFailure};
use crate::domain::draft::{DateField, Draft, DraftTransition, FieldEdit, FormMode, TextField};
use crate::domain::entities::Redirect;
use crate::domain::repositories::{RedirectListener, RedirectRepository};
use crate::error::FormError;
use crate::infrastructure::i18n::Translator;
use crate::infrastructure::notification::Notifier;
use crate::state::FormContext;
use crate::utils::datetime::to_w3c;
use crate::utils::input_normalizer::{DateInput, date_edit, text_edit};

/// Collaborators owned by the page hosting the form.
#[derive(Clone)]
pub struct FormCollaborators {
    pub notifier: Arc<dyn Notifier>,
    pub listener: Arc<dyn RedirectListener>,
    pub translator: Arc<dyn Translator>,
}

/// Result of an accepted change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeSet {
    /// Summary written by the backend.
    pub message: String,
    /// The saved redirect and every redirect adjusted along with it, in backend order.
    pub changed_redirects: Vec<Redirect>,
}

/// A submission that has been validated and marked as in flight.
///
/// Sending borrows nothing from the form, so the operator can keep editing
/// while the request is outstanding.
#[derive(Debug, Clone)]
pub struct PendingSubmission {
    ticket: u64,
    mode: FormMode,
    action_url: String,
    request: SubmitRequest,
}

impl PendingSubmission {
    /// Posts the request and interprets the envelope.
    ///
    /// `success: false` is a failure even when the transport succeeded. A
    /// success that does not list the changed redirects is malformed.
    pub async fn send<R: RedirectRepository + ?Sized>(self, repository: &R) -> SubmissionOutcome {
        let result = match repository.persist(&self.action_url, &self.request).await {
            Ok(response) if response.success => match response.changed_redirects {
                Some(changed_redirects) => Ok(ChangeSet {
                    message: response.message,
                    changed_redirects,
                }),
                None => Err(FormError::malformed_response(
                    "successful response without changedRedirects",
                )),
            },
            Ok(response) => Err(FormError::rejected(response.message)),
            Err(e) => Err(e),
        };

        SubmissionOutcome {
            ticket: self.ticket,
            mode: self.mode,
            result,
        }
    }
}

/// What came back for a [`PendingSubmission`].
#[derive(Debug)]
pub struct SubmissionOutcome {
    ticket: u64,
    mode: FormMode,
    pub result: Result<ChangeSet, FormError>,
}

#[derive(Debug, Clone)]
struct InFlight {
    ticket: u64,
    submitted: Redirect,
}

/// A single create/edit form instance.
///
/// Holds the draft, turns operator input into draft transitions, and runs
/// submissions through validation, the repository and back into the draft.
///
/// # State machine
///
/// `Idle → Sending → Idle`. A successful create resets the draft to defaults;
/// a successful update and any failure keep the field values. Only one
/// submission may be in flight.
pub struct RedirectFormService<R: RedirectRepository> {
    repository: Arc<R>,
    context: Arc<FormContext>,
    validator: RedirectValidator,
    collaborators: FormCollaborators,
    original: Option<Redirect>,
    draft: Draft,
    in_flight: Option<InFlight>,
    next_ticket: u64,
}

impl<R: RedirectRepository> RedirectFormService<R> {
    /// Creates a form for `existing` (update mode) or a new redirect (create mode).
    pub fn new(
        repository: Arc<R>,
        context: Arc<FormContext>,
        collaborators: FormCollaborators,
        existing: Option<Redirect>,
    ) -> Self {
        let draft = Draft::init(&context.defaults(), existing.as_ref());
        Self {
            repository,
            validator: RedirectValidator::new(context.clone()),
            context,
            collaborators,
            original: existing,
            draft,
            in_flight: None,
            next_ticket: 0,
        }
    }

    pub fn mode(&self) -> FormMode {
        if self.original.is_some() {
            FormMode::Update
        } else {
            FormMode::Create
        }
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    /// The redirect being edited, as last saved.
    pub fn original(&self) -> Option<&Redirect> {
        self.original.as_ref()
    }

    pub fn context(&self) -> &FormContext {
        &self.context
    }

    pub fn is_sending(&self) -> bool {
        self.draft.is_sending_data
    }

    /// Projection of the current state for display.
    pub fn view(&self) -> FormView {
        FormView::new(
            &self.draft,
            self.mode(),
            &self.context,
            self.collaborators.translator.as_ref(),
        )
    }

    fn transition(&mut self, transition: DraftTransition) {
        self.draft = self.draft.apply(transition, &self.context.defaults());
    }

    /// Starts over with another redirect, or an empty form when `None`.
    ///
    /// A submission still in flight is abandoned; its outcome will be discarded.
    pub fn load_redirect(&mut self, existing: Option<Redirect>) {
        if let Some(in_flight) = self.in_flight.take() {
            warn!(
                "Abandoning in-flight submission #{} for '{}'",
                in_flight.ticket, in_flight.submitted.source_uri_path
            );
        }
        self.transition(DraftTransition::Init {
            existing: existing.clone(),
        });
        self.original = existing;
    }

    /// Applies a text edit, truncated to the maximum input length.
    pub fn edit_text(&mut self, field: TextField, raw: &str) {
        self.transition(text_edit(field, raw));
    }

    pub fn edit_status_code(&mut self, status_code: u16) {
        self.transition(DraftTransition::FieldEdit(FieldEdit::StatusCode(status_code)));
    }

    /// Applies a date picker change.
    pub fn edit_date(&mut self, field: DateField, input: DateInput) {
        self.transition(date_edit(field, input, &self.context.display_offset));
    }

    pub fn toggle_help_message(&mut self, identifier: &str) {
        self.transition(DraftTransition::HelpToggle(identifier.to_string()));
    }

    /// Hands control back to the hosting list.
    pub fn cancel(&self) {
        debug!("Redirect form cancelled");
        self.collaborators.listener.on_cancel();
    }

    /// Builds the request body for the current draft.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationFailure::InvalidDate`] if a datetime cannot be read
    /// and [`ValidationFailure::InvalidField`] if a field is out of bounds.
    pub fn build_request(&self) -> Result<SubmitRequest, ValidationFailure> {
        let offset = &self.context.display_offset;
        let draft = &self.draft;

        let start_date_time =
            to_w3c(&draft.start_date_time, offset).map_err(|_| ValidationFailure::InvalidDate {
                field: DateField::Start,
                value: draft.start_date_time.clone(),
            })?;
        let end_date_time =
            to_w3c(&draft.end_date_time, offset).map_err(|_| ValidationFailure::InvalidDate {
                field: DateField::End,
                value: draft.end_date_time.clone(),
            })?;

        let request = SubmitRequest {
            csrf_token: self.context.csrf_token.clone(),
            module_arguments: ModuleArguments {
                original_host: self.original.as_ref().and_then(|r| r.host.clone()),
                original_source_uri_path: self
                    .original
                    .as_ref()
                    .map(|r| r.source_uri_path.clone()),
                host: draft.host.clone(),
                source_uri_path: draft.source_uri_path.clone(),
                target_uri_path: draft.effective_target().to_string(),
                status_code: draft.status_code,
                start_date_time,
                end_date_time,
                comment: draft.comment.clone(),
            },
        };

        request.validate().map_err(|e| ValidationFailure::InvalidField {
            field: e
                .errors()
                .keys()
                .next()
                .map(|k| k.to_string())
                .unwrap_or_else(|| "moduleArguments".to_string()),
        })?;

        Ok(request)
    }

    /// Validates the draft, builds the request and enters the sending state.
    ///
    /// Validation failures are reported to the notifier as warnings.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::SubmissionInFlight`] while another submission is
    /// outstanding, and [`FormError::Validation`] if the draft is not submittable.
    pub fn begin_submission(&mut self) -> Result<PendingSubmission, FormError> {
        if self.draft.is_sending_data || self.in_flight.is_some() {
            warn!("Rejected submit: a submission is already in flight");
            return Err(FormError::SubmissionInFlight);
        }

        let request = match self
            .validator
            .validate(&self.draft)
            .and_then(|_| self.build_request())
        {
            Ok(request) => request,
            Err(failure) => {
                warn!("Redirect validation failed: {}", failure);
                let message = failure.translate(self.collaborators.translator.as_ref());
                self.collaborators.notifier.warning(&message, None);
                return Err(FormError::validation(failure));
            }
        };

        let mode = self.mode();
        let args = &request.module_arguments;
        let submitted = Redirect {
            host: Some(args.host.clone()).filter(|h| !h.is_empty()),
            source_uri_path: args.source_uri_path.clone(),
            target_uri_path: args.target_uri_path.clone(),
            status_code: args.status_code,
            start_date_time: args.start_date_time.clone(),
            end_date_time: args.end_date_time.clone(),
            comment: Some(args.comment.clone()).filter(|c| !c.is_empty()),
        };

        self.next_ticket += 1;
        let ticket = self.next_ticket;
        self.in_flight = Some(InFlight { ticket, submitted });
        self.transition(DraftTransition::SubmitStart);

        let action_url = self.context.actions.for_mode(mode).to_string();
        info!(
            "Submitting redirect #{} ({}): {} -> {} [{}]",
            ticket, mode, args.source_uri_path, args.target_uri_path, args.status_code
        );
        debug!("Posting to {}", action_url);

        Ok(PendingSubmission {
            ticket,
            mode,
            action_url,
            request,
        })
    }

    /// Applies the outcome of a submission to the draft, the listener and the notifier.
    ///
    /// # Errors
    ///
    /// Returns the submission's failure, or [`FormError::StaleSubmission`] if
    /// the form no longer waits for this outcome (nothing is applied then).
    pub fn complete(&mut self, outcome: SubmissionOutcome) -> Result<ChangeSet, FormError> {
        let in_flight = match self.in_flight.take() {
            Some(in_flight) if in_flight.ticket == outcome.ticket => in_flight,
            other => {
                self.in_flight = other;
                warn!("Discarding outcome of stale submission #{}", outcome.ticket);
                return Err(FormError::StaleSubmission);
            }
        };

        match outcome.result {
            Ok(changes) => {
                info!(
                    "Redirect #{} saved ({} changed)",
                    outcome.ticket,
                    changes.changed_redirects.len()
                );

                match outcome.mode {
                    FormMode::Update => {
                        if let Some(original) = &self.original {
                            self.collaborators
                                .listener
                                .on_updated(&changes.changed_redirects, original);
                        }
                        self.original = Some(in_flight.submitted);
                    }
                    FormMode::Create => {
                        self.collaborators
                            .listener
                            .on_created(&changes.changed_redirects);
                    }
                }
                self.transition(DraftTransition::SubmitSuccess(outcome.mode));
                self.notify_success(&changes);

                Ok(changes)
            }
            Err(e) => {
                error!("Redirect #{} not saved: {}", outcome.ticket, e);
                self.collaborators.notifier.error(&e.to_string());
                self.transition(DraftTransition::SubmitFailure);
                Err(e)
            }
        }
    }

    /// Validates, sends and applies the result in one go.
    ///
    /// # Errors
    ///
    /// See [`Self::begin_submission`] and [`Self::complete`].
    pub async fn submit(&mut self) -> Result<ChangeSet, FormError> {
        let pending = self.begin_submission()?;
        let repository = Arc::clone(&self.repository);
        let outcome = pending.send(repository.as_ref()).await;
        self.complete(outcome)
    }

    fn notify_success(&self, changes: &ChangeSet) {
        if changes.changed_redirects.len() > 1 {
            let detail = self.render_changed_redirects(&changes.changed_redirects);
            self.collaborators
                .notifier
                .warning(&changes.message, Some(&detail));
        } else {
            self.collaborators.notifier.ok(&changes.message);
        }
    }

    /// Renders the related-changes list: a heading and one line per redirect.
    pub fn render_changed_redirects(&self, changed: &[Redirect]) -> String {
        let heading = self
            .collaborators
            .translator
            .translate("message.relatedChanges", Some("Related changes"));

        std::iter::once(heading)
            .chain(changed.iter().map(Redirect::describe))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
