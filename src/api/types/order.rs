//! Parameters for the authenticated order endpoints.
//!
//! Field order is the order parameters appear in the query string.

use serde::Serialize;

/// Parameters for `orders.create`.
///
/// Only standard orders can be created through the API. Amounts and prices
/// are decimal strings so they reach NiceHash exactly as written.
///
/// ```rust,ignore
/// let params = CreateOrderParams {
///     location: 0,
///     algo: 1,
///     amount: "0.01".to_string(),
///     price: "0.0152".to_string(),
///     limit: "0".to_string(),
///     pool_host: "stratum.example.com".to_string(),
///     pool_port: 3333,
///     pool_user: "worker".to_string(),
///     pool_pass: "x".to_string(),
///     code: None,
/// };
/// let response = client.create_order(&params).await?;
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateOrderParams {
    /// Location code (0 = Europe, 1 = USA)
    pub location: u32,
    /// Algorithm code
    pub algo: u32,
    /// Pay amount in BTC
    pub amount: String,
    /// Price in BTC/GH/Day or BTC/TH/Day
    pub price: String,
    /// Speed limit in GH/s or TH/s ("0" for no limit)
    pub limit: String,
    /// Pool hostname or IP
    pub pool_host: String,
    /// Pool port
    pub pool_port: u16,
    /// Pool username
    pub pool_user: String,
    /// Pool password
    pub pool_pass: String,
    /// Two-factor code, required when 2FA is enabled on the account
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl CreateOrderParams {
    /// Set the two-factor authentication code.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }
}

/// Identifies an existing order: `orders.remove` and
/// `orders.set.price.decrease` take nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct OrderRef {
    /// Location code
    pub location: u32,
    /// Algorithm code
    pub algo: u32,
    /// Order id
    pub order: u64,
}

impl OrderRef {
    pub fn new(location: u32, algo: u32, order: u64) -> Self {
        Self {
            location,
            algo,
            order,
        }
    }
}

/// Parameters for `orders.refill`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RefillOrderParams {
    #[serde(flatten)]
    pub order: OrderRef,
    /// Extra BTC to add to the order
    pub amount: String,
}

impl RefillOrderParams {
    pub fn new(order: OrderRef, amount: impl ToString) -> Self {
        Self {
            order,
            amount: amount.to_string(),
        }
    }
}

/// Parameters for `orders.set.price`. NiceHash only accepts increases here;
/// use `orders.set.price.decrease` to lower a price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SetOrderPriceParams {
    #[serde(flatten)]
    pub order: OrderRef,
    /// New price in BTC/GH/Day or BTC/TH/Day
    pub price: String,
}

impl SetOrderPriceParams {
    pub fn new(order: OrderRef, price: impl ToString) -> Self {
        Self {
            order,
            price: price.to_string(),
        }
    }
}

/// Parameters for `orders.set.limit`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SetOrderLimitParams {
    #[serde(flatten)]
    pub order: OrderRef,
    /// Speed limit in GH/s or TH/s ("0" for no limit)
    pub limit: String,
}

impl SetOrderLimitParams {
    pub fn new(order: OrderRef, limit: impl ToString) -> Self {
        Self {
            order,
            limit: limit.to_string(),
        }
    }
}
