//! NiceHash REST API client implementation.
//!
//! The [`NiceHashClient`] maps one method call to one GET request and hands
//! back the raw [`Response`]. Nothing is parsed, retried or reclassified:
//! HTTP error statuses arrive as ordinary responses, and transport failures
//! surface as [`ApiError::Http`].
//!
//! # Example
//!
//! ```rust,ignore
//! use nicehash_sdk::api::{ClientOptions, NiceHashClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = NiceHashClient::new(ClientOptions::default())?;
//!
//!     let response = client.get_global_current_stats(None).await?;
//!     println!("{}", response.text().await?);
//!
//!     Ok(())
//! }
//! ```

use std::time::Duration;

use reqwest::{Client, Response, Url};
use serde::Serialize;

use crate::api::error::{ApiError, ApiResult};
use crate::api::request::{self, RequestDescriptor};
use crate::api::types::*;
use crate::auth::{AuthParams, Credentials};
use crate::network::{DEFAULT_API_URL, DEFAULT_TIMEOUT, USER_AGENT};

/// Credentials accepted by [`NiceHashClient::new`]. Both fields are optional.
#[derive(Debug, Clone, Default)]
pub struct ClientOptions {
    /// NiceHash API id
    pub api_id: Option<String>,
    /// NiceHash API key (not a read-only key)
    pub api_key: Option<String>,
}

impl ClientOptions {
    /// Options with both credentials set. Accepts strings or numbers.
    pub fn new(api_id: impl ToString, api_key: impl ToString) -> Self {
        Self {
            api_id: Some(api_id.to_string()),
            api_key: Some(api_key.to_string()),
        }
    }
}

impl From<ClientOptions> for Credentials {
    fn from(options: ClientOptions) -> Self {
        Credentials {
            api_id: options.api_id,
            api_key: options.api_key,
        }
    }
}

/// Builder for configuring [`NiceHashClient`].
#[derive(Debug, Clone)]
pub struct NiceHashClientBuilder {
    base_url: String,
    timeout: Duration,
    credentials: Credentials,
}

impl Default for NiceHashClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl NiceHashClientBuilder {
    /// Create a new builder pointing at [`DEFAULT_API_URL`].
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            credentials: Credentials::default(),
        }
    }

    /// Override the API root, e.g. to point at a mirror or a mock server.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the API id.
    pub fn api_id(mut self, api_id: impl ToString) -> Self {
        self.credentials.api_id = Some(api_id.to_string());
        self
    }

    /// Set the API key.
    pub fn api_key(mut self, api_key: impl ToString) -> Self {
        self.credentials.api_key = Some(api_key.to_string());
        self
    }

    /// Set both credentials at once.
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = credentials;
        self
    }

    /// Build the client.
    pub fn build(self) -> ApiResult<NiceHashClient> {
        let parsed = Url::parse(&self.base_url).map_err(|e| {
            ApiError::InvalidParameter(format!("Invalid base URL '{}': {}", self.base_url, e))
        })?;
        // The endpoint query is appended to the base URL verbatim
        if parsed.query().is_some() || parsed.fragment().is_some() {
            return Err(ApiError::InvalidParameter(format!(
                "Base URL '{}' must not carry a query or fragment",
                self.base_url
            )));
        }

        let http_client = Client::builder()
            .timeout(self.timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(NiceHashClient {
            http_client,
            base_url: self.base_url,
            credentials: self.credentials,
        })
    }
}

/// NiceHash REST API client.
///
/// Cheap to clone; clones share the underlying connection pool. The
/// configuration and credentials never change after construction, so one
/// client can serve any number of concurrent calls.
#[derive(Debug, Clone)]
pub struct NiceHashClient {
    http_client: Client,
    base_url: String,
    credentials: Credentials,
}

impl NiceHashClient {
    /// Create a client with default settings (1s timeout, NiceHash API root).
    ///
    /// Missing credentials are not an error; authenticated calls will simply
    /// be rejected by NiceHash.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(options: ClientOptions) -> ApiResult<Self> {
        NiceHashClientBuilder::new().credentials(options.into()).build()
    }

    /// Create a new client builder for custom configuration.
    pub fn builder() -> NiceHashClientBuilder {
        NiceHashClientBuilder::new()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Whether both an API id and an API key are set.
    pub fn has_auth_tokens(&self) -> bool {
        self.credentials.is_complete()
    }

    /// The `id`/`key` pair sent with authenticated requests, whether or not
    /// it is actually set.
    pub fn auth_params(&self) -> AuthParams {
        self.credentials.auth_params()
    }

    // =========================================================================
    // Internal helpers
    // =========================================================================

    /// Build the full request URL for a descriptor.
    pub(crate) fn request_url<P: Serialize>(&self, descriptor: &RequestDescriptor<P>) -> ApiResult<String> {
        Ok(format!("{}?{}", self.base_url, descriptor.to_query_string()?))
    }

    /// Send one GET request for a descriptor and return the raw response.
    async fn send<P: Serialize>(&self, descriptor: RequestDescriptor<P>) -> ApiResult<Response> {
        let url = self.request_url(&descriptor)?;
        tracing::debug!(method = descriptor.method(), "Sending NiceHash request");

        let response = self.http_client.get(&url).send().await?;
        tracing::debug!(
            method = descriptor.method(),
            status = %response.status(),
            "Received NiceHash response"
        );
        Ok(response)
    }

    /// Like [`Self::send`], warning first if credentials are incomplete.
    async fn send_authenticated<P: Serialize>(
        &self,
        descriptor: RequestDescriptor<P>,
    ) -> ApiResult<Response> {
        if !self.has_auth_tokens() {
            tracing::warn!(
                method = descriptor.method(),
                "Calling an authenticated endpoint without an API id and key"
            );
        }
        self.send(descriptor).await
    }

    // =========================================================================
    // Order endpoints (authenticated)
    // =========================================================================

    /// Get all of the caller's orders for one algorithm. Refreshed every
    /// 30 seconds.
    pub async fn get_my_orders(&self, location: u32, algo: u32) -> ApiResult<Response> {
        let auth = self.auth_params();
        self.send_authenticated(request::my_orders(location, algo, &auth))
            .await
    }

    /// Create a new standard order.
    pub async fn create_order(&self, params: &CreateOrderParams) -> ApiResult<Response> {
        let auth = self.auth_params();
        self.send_authenticated(request::create_order(params, &auth))
            .await
    }

    /// Add BTC to an existing order.
    pub async fn refill_order(&self, params: &RefillOrderParams) -> ApiResult<Response> {
        let auth = self.auth_params();
        self.send_authenticated(request::refill_order(params, &auth))
            .await
    }

    /// Remove an existing order.
    pub async fn remove_order(&self, order: OrderRef) -> ApiResult<Response> {
        let auth = self.auth_params();
        self.send_authenticated(request::remove_order(order, &auth))
            .await
    }

    /// Raise the price of an existing order.
    pub async fn set_order_price(&self, params: &SetOrderPriceParams) -> ApiResult<Response> {
        let auth = self.auth_params();
        self.send_authenticated(request::set_order_price(params, &auth))
            .await
    }

    /// Lower the price of an existing order by the algorithm's decrease
    /// step. NiceHash allows one decrease every 10 minutes.
    pub async fn decrease_order_price(&self, order: OrderRef) -> ApiResult<Response> {
        let auth = self.auth_params();
        self.send_authenticated(request::decrease_order_price(order, &auth))
            .await
    }

    /// Set the speed limit of an existing order.
    pub async fn set_order_limit(&self, params: &SetOrderLimitParams) -> ApiResult<Response> {
        let auth = self.auth_params();
        self.send_authenticated(request::set_order_limit(params, &auth))
            .await
    }

    /// Get the account balance.
    pub async fn get_my_balance(&self) -> ApiResult<Response> {
        let auth = self.auth_params();
        self.send_authenticated(request::balance(&auth)).await
    }

    // =========================================================================
    // Stats endpoints
    // =========================================================================

    /// Current profitability and hashing speed for all algorithms, refreshed
    /// every 30 seconds. Pass a location to restrict to one region.
    pub async fn get_global_current_stats(&self, location: Option<u32>) -> ApiResult<Response> {
        self.send(request::global_current_stats(location)).await
    }

    /// Average profitability and hashing speed over the past 24 hours.
    pub async fn get_global_24h_stats(&self) -> ApiResult<Response> {
        self.send(request::global_24h_stats()).await
    }

    /// Current stats for a provider address, plus its last 56 payments.
    pub async fn get_provider_stats(&self, addr: &str) -> ApiResult<Response> {
        self.send(request::provider_stats(addr)).await
    }

    /// Detailed provider stats including history since `from` (Unix
    /// seconds, default 0).
    pub async fn get_detailed_provider_stats(
        &self,
        addr: &str,
        from: Option<u64>,
    ) -> ApiResult<Response> {
        self.send(request::detailed_provider_stats(addr, from)).await
    }

    /// Per-worker (rig) stats for a provider on one algorithm.
    pub async fn get_provider_workers_stats(&self, addr: &str, algo: u32) -> ApiResult<Response> {
        self.send(request::provider_workers_stats(addr, algo)).await
    }

    /// Per-worker (rig) stats for a provider on every algorithm.
    pub async fn get_all_provider_workers_stats(&self, addr: &str) -> ApiResult<Response> {
        self.send(request::all_provider_workers_stats(addr)).await
    }

    // =========================================================================
    // Market endpoints
    // =========================================================================

    /// All orders for one algorithm at one location. Refreshed every
    /// 30 seconds.
    pub async fn get_orders(&self, location: u32, algo: u32) -> ApiResult<Response> {
        self.send(request::orders(location, algo)).await
    }

    pub async fn get_multi_algorithm_mining_info(&self) -> ApiResult<Response> {
        self.send(request::multi_algorithm_mining_info()).await
    }

    pub async fn get_simple_multi_algorithm_mining_info(&self) -> ApiResult<Response> {
        self.send(request::simple_multi_algorithm_mining_info())
            .await
    }

    /// Information needed to buy hashing power (minimum prices, steps).
    pub async fn get_needed_buying_info(&self) -> ApiResult<Response> {
        self.send(request::needed_buying_info()).await
    }

    /// GET the bare API root, which answers with the API version.
    pub async fn api_version(&self) -> ApiResult<Response> {
        tracing::debug!("Requesting NiceHash API version");
        Ok(self.http_client.get(&self.base_url).send().await?)
    }
}

/// Get the NiceHash API version using the default client configuration.
///
/// Needs no credentials or client instance.
pub async fn get_api_version() -> ApiResult<Response> {
    NiceHashClient::builder().build()?.api_version().await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = NiceHashClient::new(ClientOptions::default()).unwrap();
        assert_eq!(client.base_url(), DEFAULT_API_URL);
        assert!(!client.has_auth_tokens());
    }

    #[test]
    fn test_client_with_credentials() {
        let client = NiceHashClient::new(ClientOptions {
            api_id: Some("12345".to_string()),
            api_key: Some("12345".to_string()),
        })
        .unwrap();
        assert!(client.has_auth_tokens());

        let auth = client.auth_params();
        assert_eq!(auth.id.as_deref(), Some("12345"));
        assert_eq!(auth.key.as_deref(), Some("12345"));
    }

    #[test]
    fn test_client_builder() {
        let client = NiceHashClient::builder()
            .base_url("http://127.0.0.1:8080/api/")
            .timeout(Duration::from_secs(5))
            .api_id(12345)
            .api_key("key")
            .build()
            .unwrap();

        // Base URL should have trailing slash removed
        assert_eq!(client.base_url(), "http://127.0.0.1:8080/api");
        assert!(client.has_auth_tokens());
    }

    #[test]
    fn test_builder_rejects_invalid_base_url() {
        let result = NiceHashClient::builder().base_url("not a url").build();
        assert!(matches!(result, Err(ApiError::InvalidParameter(_))));
    }

    #[test]
    fn test_builder_rejects_base_url_with_query() {
        let result = NiceHashClient::builder()
            .base_url("http://127.0.0.1:8080/api?x=1")
            .build();
        assert!(matches!(result, Err(ApiError::InvalidParameter(_))));

        let result = NiceHashClient::builder()
            .base_url("http://127.0.0.1:8080/api#top")
            .build();
        assert!(matches!(result, Err(ApiError::InvalidParameter(_))));
    }

    #[test]
    fn test_options_accept_numeric_credentials() {
        let client = NiceHashClient::new(ClientOptions::new(12345, 12345)).unwrap();
        assert!(client.has_auth_tokens());

        let auth = client.auth_params();
        let url = client.request_url(&request::balance(&auth)).unwrap();
        assert!(url.ends_with("?method=balance&id=12345&key=12345"));
    }

    #[test]
    fn test_only_id_is_not_authenticated() {
        let client = NiceHashClient::builder().api_id(1).build().unwrap();
        assert!(!client.has_auth_tokens());
        assert!(client.auth_params().key.is_none());
    }

    #[test]
    fn test_request_url() {
        let client = NiceHashClient::new(ClientOptions::default()).unwrap();
        let url = client
            .request_url(&request::provider_workers_stats("addr1", 2))
            .unwrap();
        assert_eq!(
            url,
            "https://api.nicehash.com/api?method=stats.provider.workers&addr=addr1&algo=2"
        );
    }

    #[test]
    fn test_balance_request_url_carries_credentials() {
        let client = NiceHashClient::builder()
            .credentials(Credentials::new(12345, 12345))
            .build()
            .unwrap();
        let auth = client.auth_params();
        let url = client.request_url(&request::balance(&auth)).unwrap();
        assert!(url.ends_with("?method=balance&id=12345&key=12345"));
    }
}
