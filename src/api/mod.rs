//! REST API client module for NiceHash.
//!
//! Every NiceHash operation is a GET to the API root with the operation
//! named in the `method` query parameter. [`NiceHashClient`] has one method
//! per operation and returns the raw `reqwest::Response`; decoding the body
//! is left to the caller.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use nicehash_sdk::api::{ClientOptions, NiceHashClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = NiceHashClient::new(ClientOptions {
//!         api_id: Some("12345".to_string()),
//!         api_key: Some("your-api-key".to_string()),
//!     })?;
//!
//!     let balance = client.get_my_balance().await?;
//!     println!("{}: {}", balance.status(), balance.text().await?);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Client Configuration
//!
//! ```rust,ignore
//! use nicehash_sdk::api::NiceHashClient;
//! use std::time::Duration;
//!
//! let client = NiceHashClient::builder()
//!     .api_id(12345)
//!     .api_key("your-api-key")
//!     .timeout(Duration::from_secs(5))
//!     .build()?;
//! ```
//!
//! # Error Handling
//!
//! Only local failures are errors. A 4xx/5xx response, or a 200 carrying an
//! error payload, is returned as `Ok(response)`:
//!
//! ```rust,ignore
//! match client.get_provider_stats(addr).await {
//!     Ok(response) if response.status().is_success() => { /* decode body */ }
//!     Ok(response) => println!("NiceHash answered {}", response.status()),
//!     Err(e) if e.is_timeout() => println!("Timed out"),
//!     Err(e) => println!("Request failed: {}", e),
//! }
//! ```

pub mod client;
pub mod error;
pub mod request;
pub mod types;

// Re-export main types for convenience
pub use client::{get_api_version, ClientOptions, NiceHashClient, NiceHashClientBuilder};
pub use error::{ApiError, ApiResult};
pub use request::RequestDescriptor;
pub use types::*;
