use std::collections::BTreeMap;
use std::time::Duration;

use anyhow::Context;
use chrono::{DateTime, SecondsFormat, Utc};
use reqwest::{Client, Url};
use secrecy::{ExposeSecret, SecretString};
use serde::{Serialize, Serializer};

/// A typed field value, encoded the way the Firestore REST API expects
/// (`{"stringValue": ..}`, `{"timestampValue": ..}`).
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldValue<'a> {
    StringValue(&'a str),
    #[serde(serialize_with = "rfc3339")]
    TimestampValue(DateTime<Utc>),
}

fn rfc3339<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::AutoSi, true))
}

#[derive(Debug, Default, Serialize)]
pub struct Document<'a> {
    fields: BTreeMap<&'a str, FieldValue<'a>>,
}

impl<'a> Document<'a> {
    pub fn field(mut self, name: &'a str, value: FieldValue<'a>) -> Self {
        self.fields.insert(name, value);
        self
    }
}

/// Append-only client for a single collection of the external document store.
#[derive(Clone, Debug)]
pub struct DocumentStoreClient {
    http_client: Client,
    documents_url: Url,
    auth_token: SecretString,
}

impl DocumentStoreClient {
    pub fn new(
        base_url: String,
        project_id: String,
        collection: String,
        auth_token: SecretString,
        timeout: Duration,
    ) -> Result<Self, anyhow::Error> {
        let base_url = Url::parse(&base_url).context("Failed parsing document store base url.")?;
        let documents_url = base_url
            .join(&format!(
                "v1/projects/{project_id}/databases/(default)/documents/{collection}"
            ))
            .context("Failed joining collection route to document store url.")?;

        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed building document store http client.")?;

        Ok(Self {
            http_client,
            documents_url,
            auth_token,
        })
    }

    pub fn documents_url(&self) -> &Url {
        &self.documents_url
    }

    /// Creates one document in the collection. Any non-2xx answer is an error.
    #[tracing::instrument(name = "Appending a document to the store", skip_all)]
    pub async fn add_document(&self, document: &Document<'_>) -> Result<(), reqwest::Error> {
        self.http_client
            .post(self.documents_url.clone())
            .bearer_auth(self.auth_token.expose_secret())
            .json(document)
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }
}
