pub mod error;

pub use error::StoreError;

use reqwest::{RequestBuilder, Response, header::AUTHORIZATION};
use tracing::debug;

use guestbook_types::api::{CreateEntryRequest, UpdateEntryRequest};
use guestbook_types::models::Entry;

/// The one table this gateway fronts.
const TABLE: &str = "guestbook";

/// Connection settings for the remote store; the server binary reads these
/// from the environment at startup.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub url: String,
    pub key: String,
}

/// Long-lived handle to the managed table behind the gateway.
///
/// Holds no per-request state — one `reqwest::Client` (itself a shared
/// connection pool) plus the endpoint and access key — so a single instance
/// is shared read-only across all request tasks.
#[derive(Debug, Clone)]
pub struct Store {
    client: reqwest::Client,
    base_url: String,
    key: String,
}

impl Store {
    pub fn new(config: StoreConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.url.trim_end_matches('/').to_string(),
            key: config.key,
        }
    }

    /// All entries, newest first. The ordering is the store's, applied to
    /// its own `created_at` column.
    pub async fn list_entries(&self) -> Result<Vec<Entry>, StoreError> {
        let resp = self
            .authed(self.client.get(self.table_url()))
            .query(&[("select", "*"), ("order", "created_at.desc")])
            .send()
            .await?;
        read_rows(resp).await
    }

    /// Insert one entry. The payload is forwarded as supplied, extra fields
    /// included; the store assigns `id` and `created_at` and returns the
    /// created row(s).
    pub async fn insert_entry(&self, payload: &CreateEntryRequest) -> Result<Vec<Entry>, StoreError> {
        let resp = self
            .authed(self.client.post(self.table_url()))
            .header("Prefer", "return=representation")
            .json(payload)
            .send()
            .await?;
        read_rows(resp).await
    }

    /// Partial update by id. No existence check — an id with no row behind
    /// it comes back as an empty collection, which is not an error.
    pub async fn update_entry(
        &self,
        id: i64,
        patch: &UpdateEntryRequest,
    ) -> Result<Vec<Entry>, StoreError> {
        let resp = self
            .authed(self.client.patch(self.table_url()))
            .query(&[("id", format!("eq.{id}"))])
            .header("Prefer", "return=representation")
            .json(patch)
            .send()
            .await?;
        read_rows(resp).await
    }

    /// Delete by id. Succeeds whether or not a matching row existed.
    pub async fn delete_entry(&self, id: i64) -> Result<(), StoreError> {
        let resp = self
            .authed(self.client.delete(self.table_url()))
            .query(&[("id", format!("eq.{id}"))])
            .send()
            .await?;
        check_status(resp).await?;
        debug!("deleted guestbook row id={}", id);
        Ok(())
    }

    fn table_url(&self) -> String {
        format!("{}/rest/v1/{}", self.base_url, TABLE)
    }

    // PostgREST wants the key both as `apikey` and as a bearer token.
    fn authed(&self, req: RequestBuilder) -> RequestBuilder {
        req.header("apikey", &self.key)
            .header(AUTHORIZATION, format!("Bearer {}", self.key))
    }
}

async fn read_rows(resp: Response) -> Result<Vec<Entry>, StoreError> {
    let resp = check_status(resp).await?;
    let text = resp.text().await?;
    Ok(serde_json::from_str(&text)?)
}

async fn check_status(resp: Response) -> Result<Response, StoreError> {
    if resp.status().is_success() {
        return Ok(resp);
    }
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    Err(StoreError::Rejected { status, body })
}
