//! Integration tests for the reference tables, through the crate's public
//! exports only.

use nicehash_sdk::prelude::*;

#[test]
fn test_every_algorithm_round_trips_through_its_name() {
    for code in 0..=43u32 {
        let name = algorithm_name(code).unwrap();
        let number = algorithm_number_by_name(name).unwrap();
        assert_eq!(algorithm_name(number.parse().unwrap()), Some(name));
        assert!(algorithm_unit(code).is_some());
    }
}

#[test]
fn test_unknown_lookups_are_none() {
    assert_eq!(algorithm_name(9999), None);
    assert_eq!(algorithm_unit(9999), None);
    assert_eq!(location_name(9999), None);
    assert_eq!(order_type_name(9999), None);
    assert_eq!(algorithm_number_by_name("NotARealAlgo"), None);
}

#[test]
fn test_known_entries() {
    assert_eq!(algorithm_number_by_name("CryptoNight").as_deref(), Some("22"));
    assert_eq!(algorithm_name(22), Some("CryptoNight"));
    assert_eq!(algorithm_unit(35), Some("TH/s"));
    assert_eq!(location_name(1), Some("USA"));
    assert_eq!(location_name(3), Some("Japan"));
    assert_eq!(order_type_name(0), Some("standard"));
}

#[test]
fn test_table_sizes() {
    assert_eq!(ALGORITHMS.len(), ALGORITHM_UNITS.len());
    assert_eq!(LOCATIONS.len(), 4);
    assert_eq!(ORDER_TYPES.len(), 2);
}
