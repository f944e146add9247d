//! Shared reference data, usable without the HTTP client.

pub mod tables;

// Re-export commonly used items
pub use tables::{
    algorithm_name, algorithm_number_by_name, algorithm_unit, location_name, order_type_name,
    ALGORITHMS, ALGORITHM_UNITS, LOCATIONS, ORDER_TYPES,
};
