//! # NiceHash Rust SDK
//!
//! A Rust client for the NiceHash mining marketplace API.
//!
//! ## Modules
//!
//! - [`api`]: REST API client, one async method per NiceHash operation
//! - [`shared`]: reference tables for location, algorithm, unit and order
//!   type codes
//! - [`auth`]: API id/key credentials
//! - [`network`]: base URL, timeout and user agent defaults
//!
//! ## Quick Start - REST API
//!
//! ```rust,ignore
//! use nicehash_sdk::api::{ClientOptions, NiceHashClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = NiceHashClient::new(ClientOptions::default())?;
//!
//!     // Workers of a provider mining SHA256 (algorithm 1)
//!     let response = client
//!         .get_provider_workers_stats("1P5PNW6Wd53QiZLdCs9EXNHmuPTX3rD6hW", 1)
//!         .await?;
//!     println!("{}", response.text().await?);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Quick Start - Reference Tables
//!
//! ```rust,ignore
//! use nicehash_sdk::shared::{algorithm_name, algorithm_number_by_name, algorithm_unit};
//!
//! assert_eq!(algorithm_name(22), Some("CryptoNight"));
//! assert_eq!(algorithm_unit(22), Some("kH/s"));
//! assert_eq!(algorithm_number_by_name("CryptoNight").as_deref(), Some("22"));
//! ```

// ============================================================================
// MODULES
// ============================================================================

/// Reference tables and code/name lookups.
/// Available without the `http` feature.
pub mod shared;

/// Network constants (API URL, timeout, user agent).
pub mod network;

/// API id/key credentials for authenticated endpoints.
pub mod auth;

/// REST API client module.
#[cfg(feature = "http")]
pub mod api;

// ============================================================================
// PRELUDE
// ============================================================================

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use nicehash_sdk::prelude::*;
/// ```
pub mod prelude {
    // Reference tables
    pub use crate::shared::{
        algorithm_name, algorithm_number_by_name, algorithm_unit, location_name, order_type_name,
        ALGORITHMS, ALGORITHM_UNITS, LOCATIONS, ORDER_TYPES,
    };

    // Network constants
    pub use crate::network::{DEFAULT_API_URL, DEFAULT_TIMEOUT, USER_AGENT};

    // Auth
    pub use crate::auth::{AuthParams, Credentials};

    // API module exports
    #[cfg(feature = "http")]
    pub use crate::api::{
        get_api_version, ApiError, ApiResult, ClientOptions, CreateOrderParams, NiceHashClient,
        NiceHashClientBuilder, OrderRef, RefillOrderParams, RequestDescriptor,
        SetOrderLimitParams, SetOrderPriceParams,
    };
}
