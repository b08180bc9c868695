//! Supabase REST state store provider
//!
//! Production backend speaking PostgREST over HTTP against a Supabase
//! project. The singleton record lives in one table with a unique
//! `data_key` column and a JSONB `app_data` column:
//!
//! ```sql
//! create table memobox_storage (
//!     data_key text primary key,
//!     app_data jsonb not null
//! );
//! ```
//!
//! Upsert maps to a PostgREST insert with `on_conflict=data_key` and
//! `Prefer: resolution=merge-duplicates`, which PostgreSQL resolves as a
//! single atomic row replace - concurrent writers get last-writer-wins
//! with no read-modify-write window.

use async_trait::async_trait;
use reqwest::Client;

use memobox_domain::constants::{KEY_FIELD, PAYLOAD_FIELD};
use memobox_domain::error::{Error, Result};
use memobox_domain::{StateRecord, StateStoreProvider};
use serde_json::Value;
use tracing::{debug, error};

/// Supabase REST state store
///
/// Receives its HTTP client settings at construction; a missing URL or
/// service key is a configuration error surfaced before any request is
/// attempted.
#[derive(Debug)]
pub struct SupabaseStateStore {
    base_url: String,
    service_key: String,
    table: String,
    http_client: Client,
}

impl SupabaseStateStore {
    /// Create a new Supabase state store
    ///
    /// # Arguments
    /// * `url` - Supabase project URL (e.g., `https://xyz.supabase.co`)
    /// * `service_key` - Service role key, sent as `apikey` and bearer token
    /// * `table` - Table holding the singleton record
    pub fn new(url: &str, service_key: &str, table: &str) -> Result<Self> {
        if url.trim().is_empty() {
            return Err(Error::config("Supabase URL is empty"));
        }
        if service_key.trim().is_empty() {
            return Err(Error::config("Supabase service key is empty"));
        }
        if table.trim().is_empty() {
            return Err(Error::config("Supabase table name is empty"));
        }

        Ok(Self {
            base_url: url.trim_end_matches('/').to_string(),
            service_key: service_key.to_string(),
            table: table.to_string(),
            http_client: Client::new(),
        })
    }

    /// PostgREST endpoint for the configured table
    fn table_endpoint(&self) -> String {
        format!("{}/rest/v1/{}", self.base_url, self.table)
    }

    /// Attach the auth headers every PostgREST request needs
    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request
            .header("apikey", &self.service_key)
            .header("Authorization", format!("Bearer {}", self.service_key))
    }
}

#[async_trait]
impl StateStoreProvider for SupabaseStateStore {
    async fn fetch(&self, key: &str) -> Result<Option<Value>> {
        let request = self
            .http_client
            .get(self.table_endpoint())
            .query(&[
                (KEY_FIELD, format!("eq.{key}")),
                ("select", PAYLOAD_FIELD.to_string()),
            ])
            .header("Accept", "application/json");

        let response = self
            .authorize(request)
            .send()
            .await
            .map_err(|e| Error::store_with_source("Supabase select request failed", e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, "Supabase select returned an error");
            return Err(Error::store(format!(
                "Supabase select failed with status {status}: {body}"
            )));
        }

        // PostgREST answers a filtered select with a JSON array of rows
        let rows: Vec<Value> = response
            .json()
            .await
            .map_err(|e| Error::store_with_source("Supabase select response was not JSON", e))?;

        match rows.into_iter().next() {
            Some(mut row) => {
                debug!("State record found");
                match row.get_mut(PAYLOAD_FIELD) {
                    Some(payload) => Ok(Some(payload.take())),
                    None => Err(Error::store(format!(
                        "Supabase row is missing the '{PAYLOAD_FIELD}' column"
                    ))),
                }
            }
            None => {
                debug!("State record absent");
                Ok(None)
            }
        }
    }

    async fn upsert(&self, key: &str, payload: &Value) -> Result<()> {
        // PostgREST expects an array of rows for bulk-capable inserts;
        // a serialized record carries the persisted column names.
        let rows = vec![StateRecord::new(key, payload.clone())];

        let request = self
            .http_client
            .post(self.table_endpoint())
            .query(&[("on_conflict", KEY_FIELD)])
            .header("Content-Type", "application/json")
            .header("Prefer", "resolution=merge-duplicates")
            .json(&rows);

        let response = self
            .authorize(request)
            .send()
            .await
            .map_err(|e| Error::store_with_source("Supabase upsert request failed", e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, "Supabase upsert returned an error");
            return Err(Error::store(format!(
                "Supabase upsert failed with status {status}: {body}"
            )));
        }

        debug!("State record upserted");
        Ok(())
    }

    fn provider_name(&self) -> &str {
        "supabase"
    }
}
