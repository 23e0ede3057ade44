//! Newsletter signup: the store write and the state of one signup form.
//!
//! A form moves `Idle -> Submitting -> Subscribed -> Idle` on success and
//! `Idle -> Submitting -> Idle` on failure. The return to `Idle` after a
//! successful signup is driven by a one-shot task owned by the form.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::document_store::DocumentStoreClient;
use crate::domain::SubscriptionRequest;
use crate::routes::error_chain_fmt;

pub const RESET_DELAY: Duration = Duration::from_millis(3000);

pub const SUBSCRIBE_FAILURE_NOTICE: &str = "There was an error subscribing. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubscriptionState {
    #[default]
    Idle,
    Submitting,
    Subscribed,
}

/// The store did not accept the subscription record. Network, permission and
/// backend failures are not told apart.
#[derive(thiserror::Error)]
#[error("Failed to store the newsletter subscription.")]
pub struct SubscriptionWriteFailure(#[source] reqwest::Error);

impl std::fmt::Debug for SubscriptionWriteFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

#[derive(thiserror::Error)]
pub enum SubmitError {
    #[error("An email address is required.")]
    EmptyEmail,
    #[error("The form is not accepting submissions right now.")]
    NotIdle,
    #[error(transparent)]
    WriteFailure(#[from] SubscriptionWriteFailure),
}

impl std::fmt::Debug for SubmitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

/// Appends one `newsletter_subscription` record for `email`. No retry.
#[tracing::instrument(
    name = "Storing a newsletter subscription",
    skip(store),
    fields(subscriber_email = %email)
)]
pub async fn submit_subscription(
    store: &DocumentStoreClient,
    email: &str,
) -> Result<(), SubscriptionWriteFailure> {
    let request = SubscriptionRequest::new(email);

    store
        .add_document(&request.to_document())
        .await
        .map_err(|e| {
            tracing::error!(
                error.cause_chain = ?e,
                error.message = %e,
                "Error subscribing to newsletter"
            );
            SubscriptionWriteFailure(e)
        })
}

#[derive(Debug, Default)]
struct Fields {
    email: String,
    notice: Option<&'static str>,
}

struct Shared {
    fields: Mutex<Fields>,
    state: watch::Sender<SubscriptionState>,
}

impl Shared {
    fn fields(&self) -> MutexGuard<'_, Fields> {
        self.fields.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn transition(&self, from: SubscriptionState, to: SubscriptionState) -> bool {
        self.state.send_if_modified(|state| {
            if *state != from {
                return false;
            }
            *state = to;
            true
        })
    }
}

/// Puts the form back to `Idle` if a submission is abandoned before it settles.
struct SubmittingGuard<'a> {
    shared: &'a Shared,
}

impl Drop for SubmittingGuard<'_> {
    fn drop(&mut self) {
        if self
            .shared
            .transition(SubscriptionState::Submitting, SubscriptionState::Idle)
        {
            tracing::warn!("Newsletter submission abandoned before completion");
        }
    }
}

/// One newsletter signup form, library API for a UI host that drives the signup widget.
/// Dropping the form cancels a pending reset.
pub struct NewsletterForm {
    store: DocumentStoreClient,
    reset_delay: Duration,
    shared: Arc<Shared>,
    reset_task: Mutex<Option<JoinHandle<()>>>,
}

impl NewsletterForm {
    pub fn new(store: DocumentStoreClient, reset_delay: Duration) -> Self {
        let (state, _) = watch::channel(SubscriptionState::Idle);
        Self {
            store,
            reset_delay,
            shared: Arc::new(Shared {
                fields: Mutex::new(Fields::default()),
                state,
            }),
            reset_task: Mutex::new(None),
        }
    }

    pub fn state(&self) -> SubscriptionState {
        *self.shared.state.borrow()
    }

    pub fn watch_state(&self) -> watch::Receiver<SubscriptionState> {
        self.shared.state.subscribe()
    }

    /// Inputs are disabled while this is set.
    pub fn is_busy(&self) -> bool {
        self.state() == SubscriptionState::Submitting
    }

    pub fn email(&self) -> String {
        self.shared.fields().email.clone()
    }

    pub fn notice(&self) -> Option<&'static str> {
        self.shared.fields().notice
    }

    /// Edits the email input. Returns `false` when the input is not editable.
    pub fn set_email(&self, email: impl Into<String>) -> bool {
        let mut fields = self.shared.fields();
        if self.state() != SubscriptionState::Idle {
            return false;
        }
        fields.email = email.into();
        true
    }

    #[tracing::instrument(name = "Submitting the newsletter form", skip(self))]
    pub async fn submit(&self) -> Result<(), SubmitError> {
        let email = {
            let mut fields = self.shared.fields();
            if self.state() != SubscriptionState::Idle {
                return Err(SubmitError::NotIdle);
            }
            let email = fields.email.trim().to_owned();
            if email.is_empty() {
                return Err(SubmitError::EmptyEmail);
            }
            fields.notice = None;
            self.shared
                .transition(SubscriptionState::Idle, SubscriptionState::Submitting);
            email
        };

        let guard = SubmittingGuard {
            shared: &self.shared,
        };
        let outcome = submit_subscription(&self.store, &email).await;

        {
            let mut fields = self.shared.fields();
            match &outcome {
                Ok(()) => {
                    fields.email.clear();
                    self.shared
                        .transition(SubscriptionState::Submitting, SubscriptionState::Subscribed);
                }
                Err(_) => {
                    fields.notice = Some(SUBSCRIBE_FAILURE_NOTICE);
                    self.shared
                        .transition(SubscriptionState::Submitting, SubscriptionState::Idle);
                }
            }
        }
        drop(guard);

        outcome?;
        self.schedule_reset();
        Ok(())
    }

    fn schedule_reset(&self) {
        let shared: Weak<Shared> = Arc::downgrade(&self.shared);
        let delay = self.reset_delay;

        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let Some(shared) = shared.upgrade() else {
                return;
            };
            if shared.transition(SubscriptionState::Subscribed, SubscriptionState::Idle) {
                tracing::debug!("Newsletter form reset after successful signup");
            }
        });

        let previous = self
            .reset_task
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .replace(handle);
        if let Some(previous) = previous {
            previous.abort();
        }
    }
}

impl Drop for NewsletterForm {
    fn drop(&mut self) {
        let reset_task = self
            .reset_task
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(reset_task) = reset_task {
            reset_task.abort();
        }
    }
}
