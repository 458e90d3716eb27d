//! # Fixture-Based Tests for the Prismbox Container
//!
//! This module contains tests that verify container behavior with
//! pre-defined contents similar to what JSON fixtures would provide.
//!
//! Since the `sample_container` utility is only available in the crate's
//! internal tests, these tests create equivalent containers through the
//! public API.

use prismbox::Container;

// ===========================================================================
// Tests Mirroring fixtures/sample.json
// ===========================================================================

/// Creates a container with the contents of fixtures/sample.json
///
/// The sample holds six values in insertion order, with one duplicate
/// pair, two perfect squares, and three distinct primes.
fn create_sample_container() -> Container {
	let mut container = Container::new();

	for value in [17, 2, 25, 9, 3, 3] {
		container.insert(value);
	}

	container
}

#[test]
fn sample_container_size() {
	let container = create_sample_container();

	assert_eq!(container.len(), 6);
	container.assert_invariants();
}

#[test]
fn sample_container_ascending_order() {
	let container = create_sample_container();

	let values: Vec<i64> = container.ascending_iter().collect();
	assert_eq!(values, vec![2, 3, 3, 9, 17, 25]);
}

#[test]
fn sample_container_side_cross_order() {
	let mut container = create_sample_container();

	let values: Vec<i64> = container.side_cross_iter().collect();
	assert_eq!(values, vec![2, 25, 3, 17, 3, 9]);
}

#[test]
fn sample_container_prime_order() {
	let container = create_sample_container();

	let values: Vec<i64> = container.prime_iter().collect();
	assert_eq!(values, vec![2, 3, 3, 17]);
}

#[test]
fn sample_container_remove_duplicate_value() {
	let mut container = create_sample_container();

	// Remove deletes every occurrence of the value
	container.remove(3).unwrap();
	assert_eq!(container.len(), 4);

	let values: Vec<i64> = container.ascending_iter().collect();
	assert_eq!(values, vec![2, 9, 17, 25]);
}

// ===========================================================================
// Hand-Picked Shape Tests
// ===========================================================================

#[test]
fn negative_values_sort_before_positive() {
	let mut container = Container::new();
	for value in [5, -3, 0, -3, 8] {
		container.insert(value);
	}

	let values: Vec<i64> = container.ascending_iter().collect();
	assert_eq!(values, vec![-3, -3, 0, 5, 8]);

	// Negative values are never prime
	let primes: Vec<i64> = container.prime_iter().collect();
	assert_eq!(primes, vec![5]);
}

#[test]
fn all_equal_values() {
	let mut container = Container::new();
	for _ in 0..5 {
		container.insert(11);
	}

	let cross: Vec<i64> = container.side_cross_iter().collect();
	assert_eq!(cross, vec![11, 11, 11, 11, 11]);

	let primes: Vec<i64> = container.prime_iter().collect();
	assert_eq!(primes.len(), 5);
}

#[test]
fn two_element_container() {
	let mut container = Container::new();
	container.insert(9);
	container.insert(1);

	let cross: Vec<i64> = container.side_cross_iter().collect();
	assert_eq!(cross, vec![1, 9]);
	assert_eq!(container.len(), 2);
}
