//! Hosted backend
//!
//! Read-only queries against the hosted backend's REST interface. Writes
//! (ticket persistence, applying pending deletions) belong to the external
//! save routine and are not modeled here.

use async_trait::async_trait;
use mockall::automock;
use reqwest::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::pricing::Transaction;

/// Errors from the hosted backend.
#[derive(Debug, Error)]
pub enum StoreError {
    /// An HTTP transport or deserialization error occurred.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with a non-2xx status or an unusable body.
    #[error("unexpected response from backend: {0}")]
    UnexpectedResponse(String),
}

/// One row of the donations table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct DonationRow {
    /// Amount pledged, in minor units.
    pub pledge_amount: i64,

    /// Amount actually received, in minor units.
    pub amount_paid: Option<i64>,

    /// Whether the pledge has been settled.
    #[serde(default)]
    pub paid: bool,
}

/// The read queries this core makes against the hosted backend.
#[automock]
#[async_trait]
pub trait BackendStore: Send + Sync {
    /// Payment transactions recorded against an order's ticket reference.
    async fn payment_transactions(&self, ticket_ref: &str)
    -> Result<Vec<Transaction>, StoreError>;

    /// Whether an order with this order number already exists.
    async fn order_number_exists(&self, order_number: &str) -> Result<bool, StoreError>;

    /// Donation pledges recorded for an event.
    async fn donations(&self, event_ref: &str) -> Result<Vec<DonationRow>, StoreError>;
}

/// Connection details for the hosted backend's REST interface.
#[derive(Debug, Clone)]
pub struct RestConfig {
    /// Project base URL, e.g. `https://example.supabase.co`.
    pub base_url: String,

    /// Anonymous API key sent with every request. Row-level security on
    /// the backend decides what it may read.
    pub api_key: String,
}

/// [`BackendStore`] over the backend's PostgREST-style interface.
#[derive(Debug, Clone)]
pub struct RestStore {
    config: RestConfig,
    http: Client,
}

impl RestStore {
    /// Creates a client from the given connection details.
    pub fn new(config: RestConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }

    async fn select<T>(&self, table: &str, query: &[(&str, String)]) -> Result<Vec<T>, StoreError>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}/rest/v1/{table}", self.config.base_url);

        let response = self
            .http
            .get(&url)
            .query(query)
            .header("apikey", &self.config.api_key)
            .bearer_auth(&self.config.api_key)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();

            return Err(StoreError::UnexpectedResponse(format!(
                "{table} query failed with status {status}: {text}"
            )));
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl BackendStore for RestStore {
    async fn payment_transactions(
        &self,
        ticket_ref: &str,
    ) -> Result<Vec<Transaction>, StoreError> {
        self.select(
            "payment_transactions",
            &[
                ("select", "amount".to_owned()),
                ("ticket_id", format!("eq.{ticket_ref}")),
            ],
        )
        .await
    }

    async fn order_number_exists(&self, order_number: &str) -> Result<bool, StoreError> {
        let rows: Vec<serde_json::Value> = self
            .select(
                "orders",
                &[
                    ("select", "order_number".to_owned()),
                    ("order_number", format!("eq.{order_number}")),
                ],
            )
            .await?;

        Ok(!rows.is_empty())
    }

    async fn donations(&self, event_ref: &str) -> Result<Vec<DonationRow>, StoreError> {
        self.select(
            "donations",
            &[
                ("select", "pledge_amount,amount_paid,paid".to_owned()),
                ("event_id", format!("eq.{event_ref}")),
            ],
        )
        .await
    }
}
