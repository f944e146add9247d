//! Request construction for the NiceHash API.
//!
//! Every NiceHash call is a GET to the API root with the operation named by
//! the `method` query parameter. A [`RequestDescriptor`] pairs that name with
//! a typed parameter struct; the functions in this module build one
//! descriptor per endpoint without touching the network, so the exact query
//! string of any call can be inspected with
//! [`RequestDescriptor::to_query_string`].
//!
//! No parameter struct has a `method` field, so the endpoint name can't be
//! overridden by caller input.

use serde::Serialize;

use crate::api::error::ApiResult;
use crate::api::types::{
    CreateOrderParams, OrderRef, RefillOrderParams, SetOrderLimitParams, SetOrderPriceParams,
};
use crate::auth::AuthParams;

// ============================================================================
// Endpoint names
// ============================================================================

/// Values of the `method` query parameter.
pub mod method {
    pub const ORDERS_GET: &str = "orders.get";
    pub const ORDERS_CREATE: &str = "orders.create";
    pub const ORDERS_REFILL: &str = "orders.refill";
    pub const ORDERS_REMOVE: &str = "orders.remove";
    pub const ORDERS_SET_PRICE: &str = "orders.set.price";
    pub const ORDERS_SET_PRICE_DECREASE: &str = "orders.set.price.decrease";
    pub const ORDERS_SET_LIMIT: &str = "orders.set.limit";
    pub const BALANCE: &str = "balance";
    pub const STATS_GLOBAL_CURRENT: &str = "stats.global.current";
    pub const STATS_GLOBAL_24H: &str = "stats.global.24h";
    pub const STATS_PROVIDER: &str = "stats.provider";
    pub const STATS_PROVIDER_EX: &str = "stats.provider.ex";
    pub const STATS_PROVIDER_WORKERS: &str = "stats.provider.workers";
    pub const MULTIALGO_INFO: &str = "multialgo.info";
    pub const SIMPLEMULTIALGO_INFO: &str = "simplemultialgo.info";
    pub const BUY_INFO: &str = "buy.info";
}

// ============================================================================
// Descriptor
// ============================================================================

/// One outbound API call: the endpoint name plus its query parameters.
///
/// Serializes as `method=<name>` followed by the fields of `P` in
/// declaration order.
#[derive(Debug, Clone, Serialize)]
pub struct RequestDescriptor<P> {
    method: &'static str,
    #[serde(flatten)]
    params: P,
}

impl<P: Serialize> RequestDescriptor<P> {
    pub fn new(method: &'static str, params: P) -> Self {
        Self { method, params }
    }

    /// The endpoint name sent as `method`.
    pub fn method(&self) -> &'static str {
        self.method
    }

    /// Encode the descriptor as an `application/x-www-form-urlencoded` query.
    pub fn to_query_string(&self) -> ApiResult<String> {
        Ok(serde_urlencoded::to_string(self)?)
    }
}

/// Parameters followed by the `id`/`key` credential pair.
#[derive(Debug, Clone, Serialize)]
pub struct WithAuth<'a, P> {
    #[serde(flatten)]
    pub params: P,
    #[serde(flatten)]
    pub auth: &'a AuthParams,
}

/// Endpoints that take no parameters besides `method`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct NoParams {}

/// Query for `orders.get` with the `my` flag set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MyOrdersQuery {
    pub location: u32,
    pub algo: u32,
    /// Presence-only flag, always empty
    pub my: &'static str,
}

/// Query for the public `orders.get`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OrdersQuery {
    pub location: u32,
    pub algo: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GlobalCurrentStatsQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<u32>,
}

/// Query for the provider stats endpoints. `from` and `algo` are only sent
/// by the endpoints that take them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProviderQuery<'a> {
    pub addr: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub algo: Option<u32>,
}

impl<'a> ProviderQuery<'a> {
    fn new(addr: &'a str) -> Self {
        Self {
            addr,
            from: None,
            algo: None,
        }
    }
}

// ============================================================================
// Authenticated endpoints
// ============================================================================

/// `orders.get` restricted to the caller's own orders.
pub fn my_orders(
    location: u32,
    algo: u32,
    auth: &AuthParams,
) -> RequestDescriptor<WithAuth<'_, MyOrdersQuery>> {
    let params = MyOrdersQuery {
        location,
        algo,
        my: "",
    };
    RequestDescriptor::new(method::ORDERS_GET, WithAuth { params, auth })
}

pub fn create_order<'a>(
    params: &'a CreateOrderParams,
    auth: &'a AuthParams,
) -> RequestDescriptor<WithAuth<'a, &'a CreateOrderParams>> {
    RequestDescriptor::new(method::ORDERS_CREATE, WithAuth { params, auth })
}

pub fn refill_order<'a>(
    params: &'a RefillOrderParams,
    auth: &'a AuthParams,
) -> RequestDescriptor<WithAuth<'a, &'a RefillOrderParams>> {
    RequestDescriptor::new(method::ORDERS_REFILL, WithAuth { params, auth })
}

pub fn remove_order(order: OrderRef, auth: &AuthParams) -> RequestDescriptor<WithAuth<'_, OrderRef>> {
    RequestDescriptor::new(method::ORDERS_REMOVE, WithAuth { params: order, auth })
}

pub fn set_order_price<'a>(
    params: &'a SetOrderPriceParams,
    auth: &'a AuthParams,
) -> RequestDescriptor<WithAuth<'a, &'a SetOrderPriceParams>> {
    RequestDescriptor::new(method::ORDERS_SET_PRICE, WithAuth { params, auth })
}

pub fn decrease_order_price(
    order: OrderRef,
    auth: &AuthParams,
) -> RequestDescriptor<WithAuth<'_, OrderRef>> {
    RequestDescriptor::new(
        method::ORDERS_SET_PRICE_DECREASE,
        WithAuth { params: order, auth },
    )
}

pub fn set_order_limit<'a>(
    params: &'a SetOrderLimitParams,
    auth: &'a AuthParams,
) -> RequestDescriptor<WithAuth<'a, &'a SetOrderLimitParams>> {
    RequestDescriptor::new(method::ORDERS_SET_LIMIT, WithAuth { params, auth })
}

pub fn balance(auth: &AuthParams) -> RequestDescriptor<WithAuth<'_, NoParams>> {
    RequestDescriptor::new(
        method::BALANCE,
        WithAuth {
            params: NoParams {},
            auth,
        },
    )
}

// ============================================================================
// Public endpoints
// ============================================================================

/// `stats.global.current`. `location` is only sent when given; zero
/// (Europe) is a valid location and is sent.
pub fn global_current_stats(location: Option<u32>) -> RequestDescriptor<GlobalCurrentStatsQuery> {
    RequestDescriptor::new(
        method::STATS_GLOBAL_CURRENT,
        GlobalCurrentStatsQuery { location },
    )
}

pub fn global_24h_stats() -> RequestDescriptor<NoParams> {
    RequestDescriptor::new(method::STATS_GLOBAL_24H, NoParams {})
}

pub fn provider_stats(addr: &str) -> RequestDescriptor<ProviderQuery<'_>> {
    RequestDescriptor::new(method::STATS_PROVIDER, ProviderQuery::new(addr))
}

/// `stats.provider.ex`. A missing `from` defaults to 0 (full history).
pub fn detailed_provider_stats(addr: &str, from: Option<u64>) -> RequestDescriptor<ProviderQuery<'_>> {
    let query = ProviderQuery {
        from: Some(from.unwrap_or(0)),
        ..ProviderQuery::new(addr)
    };
    RequestDescriptor::new(method::STATS_PROVIDER_EX, query)
}

pub fn provider_workers_stats(addr: &str, algo: u32) -> RequestDescriptor<ProviderQuery<'_>> {
    let query = ProviderQuery {
        algo: Some(algo),
        ..ProviderQuery::new(addr)
    };
    RequestDescriptor::new(method::STATS_PROVIDER_WORKERS, query)
}

/// `stats.provider.workers` across every algorithm.
pub fn all_provider_workers_stats(addr: &str) -> RequestDescriptor<ProviderQuery<'_>> {
    RequestDescriptor::new(method::STATS_PROVIDER_WORKERS, ProviderQuery::new(addr))
}

pub fn orders(location: u32, algo: u32) -> RequestDescriptor<OrdersQuery> {
    RequestDescriptor::new(method::ORDERS_GET, OrdersQuery { location, algo })
}

pub fn multi_algorithm_mining_info() -> RequestDescriptor<NoParams> {
    RequestDescriptor::new(method::MULTIALGO_INFO, NoParams {})
}

pub fn simple_multi_algorithm_mining_info() -> RequestDescriptor<NoParams> {
    RequestDescriptor::new(method::SIMPLEMULTIALGO_INFO, NoParams {})
}

pub fn needed_buying_info() -> RequestDescriptor<NoParams> {
    RequestDescriptor::new(method::BUY_INFO, NoParams {})
}
