use actix_web::{HttpResponse, ResponseError, http::StatusCode, web};

use crate::document_store::DocumentStoreClient;
use crate::domain::SubscriberEmail;
use crate::newsletter::{SubscriptionWriteFailure, submit_subscription};

use super::error_chain_fmt;

#[derive(serde::Deserialize)]
pub struct FormData {
    pub email: String,
}

impl TryFrom<FormData> for SubscriberEmail {
    type Error = String;

    fn try_from(value: FormData) -> Result<Self, Self::Error> {
        SubscriberEmail::parse(value.email)
    }
}

#[derive(thiserror::Error)]
pub enum SubscribeError {
    #[error("{0}")]
    ValidationError(String),
    #[error(transparent)]
    StoreError(#[from] SubscriptionWriteFailure),
}

impl std::fmt::Debug for SubscribeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for SubscribeError {
    fn status_code(&self) -> StatusCode {
        match self {
            SubscribeError::ValidationError(_) => StatusCode::BAD_REQUEST,
            SubscribeError::StoreError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[tracing::instrument(
    name = "Adding a new newsletter subscriber.",
    skip(form, store),
    fields(subscriber_email = %form.email)
)]
pub async fn subscribe(
    form: web::Form<FormData>,
    store: web::Data<DocumentStoreClient>,
) -> Result<HttpResponse, SubscribeError> {
    let email: SubscriberEmail = form.0.try_into().map_err(SubscribeError::ValidationError)?;

    submit_subscription(&store, email.as_ref()).await?;

    Ok(HttpResponse::Ok().finish())
}
