mod helper;
mod types;

use helper::*;

pub use types::*;

use anyhow::{bail, Context, Result};
use reqwest::{header::ACCEPT, Client, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::RequestFailure;

pub const DEFAULT_API_URL: &str = "http://localhost:3000";

/// HTTP client for the balance/transaction lookup backend.
///
/// No retries and no timeout beyond reqwest's defaults: a failed lookup is
/// reported once and the user decides whether to try again.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url: Url = base_url
            .trim()
            .parse()
            .with_context(|| format!("Invalid API URL: {base_url}"))?;

        if base_url.cannot_be_a_base() {
            bail!("Invalid API URL: {base_url} cannot have a path");
        }

        Ok(Self {
            http: Client::new(),
            base_url,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `GET {base}/balance/{address}`
    pub async fn fetch_balance(&self, address: &str) -> Result<BalanceRecord, RequestFailure> {
        let url = self.endpoint("balance", address)?;
        self.get_json(url).await
    }

    /// `GET {base}/txs/{address}`, in backend order
    pub async fn fetch_transactions(
        &self,
        address: &str,
    ) -> Result<Vec<TransactionSignature>, RequestFailure> {
        let url = self.endpoint("txs", address)?;
        self.get_json(url).await
    }

    fn endpoint(&self, route: &str, address: &str) -> Result<Url, RequestFailure> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| RequestFailure::transport())?
            .pop_if_empty()
            .push(route)
            .push(address);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, RequestFailure> {
        debug!(%url, "GET");

        let response = self
            .http
            .get(url.clone())
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| {
                warn!(%url, error = %e, "request failed before a response arrived");
                RequestFailure::transport()
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            warn!(%url, status = status.as_u16(), error = %e, "failed to read response body");
            RequestFailure::status(status.as_u16(), None)
        })?;

        if !status.is_success() {
            let message = extract_error_message(&body);
            warn!(%url, status = status.as_u16(), ?message, "backend returned an error");
            return Err(RequestFailure::status(status.as_u16(), message));
        }

        serde_json::from_str(&body).map_err(|e| {
            warn!(%url, status = status.as_u16(), error = %e, "malformed response body");
            RequestFailure::status(status.as_u16(), None)
        })
    }
}
