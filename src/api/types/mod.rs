//! Request parameter types for the NiceHash API client.

pub mod order;

// Re-export all types for convenience
pub use order::*;
