use chrono::{DateTime, Utc};

use crate::document_store::{Document, FieldValue};

/// Discriminator that tells newsletter signups apart from other records in the store.
pub const NEWSLETTER_SUBSCRIPTION: &str = "newsletter_subscription";

/// One signup, built at submission time and dropped once the write settles.
#[derive(Debug, Clone)]
pub struct SubscriptionRequest {
    pub email: String,
    pub timestamp: DateTime<Utc>,
}

impl SubscriptionRequest {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn kind(&self) -> &'static str {
        NEWSLETTER_SUBSCRIPTION
    }

    pub fn to_document(&self) -> Document<'_> {
        Document::default()
            .field("email", FieldValue::StringValue(&self.email))
            .field("timestamp", FieldValue::TimestampValue(self.timestamp))
            .field("type", FieldValue::StringValue(self.kind()))
    }
}
