//! Reference tables for NiceHash numeric codes.
//!
//! NiceHash identifies locations, algorithms and order types by small
//! contiguous integers. Each table below is indexed by that code, so entry
//! `n` of [`ALGORITHMS`] is the algorithm NiceHash calls `n`.
//!
//! The tables mirror NiceHash's own enumeration and must be updated in
//! lockstep with it. Unknown codes and names are not errors: every lookup
//! returns `None` on a miss.

use std::collections::HashMap;

// ============================================================================
// Tables
// ============================================================================

/// Location names, indexed by location code.
pub const LOCATIONS: &[&str] = &["Europe", "USA", "Hong Kong", "Japan"];

/// Algorithm names, indexed by algorithm code.
pub const ALGORITHMS: &[&str] = &[
    "Scrypt",
    "SHA256",
    "ScryptNf",
    "X11",
    "X13",
    "Keccak",
    "X15",
    "Nist5",
    "NeoScrypt",
    "Lyra2RE",
    "WhirlpoolX",
    "Qubit",
    "Quark",
    "Axiom",
    "Lyra2REv2",
    "ScryptJaneNf16",
    "Blake256r8",
    "Blake256r14",
    "Blake256r8vnl",
    "Hodl",
    "DaggerHashimoto",
    "Decred",
    "CryptoNight",
    "Lbry",
    "Equihash",
    "Pascal",
    "X11Gost",
    "Sia",
    "Blake2s",
    "Skunk",
    "CryptoNightV7",
    "CryptoNightHeavy",
    "Lyra2Z",
    "X16R",
    "CryptoNightV8",
    "SHA256AsicBoost",
    "Zhash",
    "Beam",
    "GrinCuckaroo29",
    "GrinCuckatoo31",
    "Lyra2REv3",
    "MTP",
    "CryptoNightR",
    "CuckooCycle",
];

/// Hashing speed unit per algorithm, indexed by algorithm code.
pub const ALGORITHM_UNITS: &[&str] = &[
    "MH/s",  // Scrypt
    "TH/s",  // SHA256
    "MH/s",  // ScryptNf
    "MH/s",  // X11
    "MH/s",  // X13
    "MH/s",  // Keccak
    "MH/s",  // X15
    "MH/s",  // Nist5
    "MH/s",  // NeoScrypt
    "MH/s",  // Lyra2RE
    "MH/s",  // WhirlpoolX
    "MH/s",  // Qubit
    "MH/s",  // Quark
    "kH/s",  // Axiom
    "MH/s",  // Lyra2REv2
    "kH/s",  // ScryptJaneNf16
    "GH/s",  // Blake256r8
    "GH/s",  // Blake256r14
    "GH/s",  // Blake256r8vnl
    "kH/s",  // Hodl
    "MH/s",  // DaggerHashimoto
    "GH/s",  // Decred
    "kH/s",  // CryptoNight
    "GH/s",  // Lbry
    "Sol/s", // Equihash
    "GH/s",  // Pascal
    "MH/s",  // X11Gost
    "GH/s",  // Sia
    "GH/s",  // Blake2s
    "MH/s",  // Skunk
    "kH/s",  // CryptoNightV7
    "kH/s",  // CryptoNightHeavy
    "MH/s",  // Lyra2Z
    "MH/s",  // X16R
    "kH/s",  // CryptoNightV8
    "TH/s",  // SHA256AsicBoost
    "Sol/s", // Zhash
    "Sol/s", // Beam
    "G/s",   // GrinCuckaroo29
    "G/s",   // GrinCuckatoo31
    "MH/s",  // Lyra2REv3
    "MH/s",  // MTP
    "kH/s",  // CryptoNightR
    "G/s",   // CuckooCycle
];

/// Order type names, indexed by order type code.
pub const ORDER_TYPES: &[&str] = &["standard", "fixed"];

lazy_static::lazy_static! {
    /// Algorithm name to code. On duplicate names the lowest code wins.
    static ref ALGORITHM_CODES: HashMap<&'static str, u32> = {
        let mut codes = HashMap::with_capacity(ALGORITHMS.len());
        for (code, name) in ALGORITHMS.iter().enumerate() {
            codes.entry(*name).or_insert(code as u32);
        }
        codes
    };
}

// ============================================================================
// Lookups
// ============================================================================

fn lookup(table: &[&'static str], code: u32) -> Option<&'static str> {
    table.get(usize::try_from(code).ok()?).copied()
}

/// Get the location name for a NiceHash location code.
pub fn location_name(code: u32) -> Option<&'static str> {
    lookup(LOCATIONS, code)
}

/// Get the algorithm name for a NiceHash algorithm code.
pub fn algorithm_name(code: u32) -> Option<&'static str> {
    lookup(ALGORITHMS, code)
}

/// Get the hashing speed unit (e.g. `"TH/s"`) for a NiceHash algorithm code.
pub fn algorithm_unit(code: u32) -> Option<&'static str> {
    lookup(ALGORITHM_UNITS, code)
}

/// Get the order type name for a NiceHash order type code.
pub fn order_type_name(code: u32) -> Option<&'static str> {
    lookup(ORDER_TYPES, code)
}

/// Get the NiceHash algorithm code for an algorithm name.
///
/// Matching is exact and case-sensitive. The code is returned as a decimal
/// string, ready to be used as a query parameter.
///
/// ```rust,ignore
/// assert_eq!(algorithm_number_by_name("CryptoNight").as_deref(), Some("22"));
/// assert_eq!(algorithm_number_by_name("cryptonight"), None);
/// ```
pub fn algorithm_number_by_name(name: &str) -> Option<String> {
    ALGORITHM_CODES.get(name).map(|code| code.to_string())
}
