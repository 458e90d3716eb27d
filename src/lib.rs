//! # Prismbox: An In-Memory Integer Container with Three Traversal Views
//!
//! This crate provides a small owning collection of signed integers, the
//! [`Container`], together with three independent read-oriented views that
//! traverse the stored values in different orders.
//!
//! ## Design Overview
//!
//! The container owns a flat, ordered sequence of `i64` values with
//! duplicates permitted. Insertion appends; removal deletes every
//! occurrence of the requested value. The three views are constructed
//! against a container and each captures its own **value snapshot** at
//! construction time, so a view never aliases the container's storage and
//! never observes mutations that happen after it was built.
//!
//! ### The Three Views
//!
//! - [`iter::AscendingIter`]: the values in non-decreasing numeric order.
//! - [`iter::SideCrossIter`]: the values alternating from the low end and
//!   the high end of the sorted sequence (smallest, largest,
//!   second-smallest, second-largest, ...). Constructing this view has a
//!   documented side effect: it permanently reorders the container's
//!   storage into ascending order.
//! - [`iter::PrimeIter`]: only the prime-valued elements, in
//!   non-decreasing order.
//!
//! ### Traversal Structure
//!
//! ```text
//!   Container [17, 2, 25]
//!        │
//!        ├── AscendingIter ──► 2, 17, 25
//!        │
//!        ├── SideCrossIter ──► 2, 25, 17   (storage becomes [2, 17, 25])
//!        │
//!        └── PrimeIter ──────► 2, 17       (25 = 5 * 5 is composite)
//! ```
//!
//! Every view shares the same position protocol, captured by the
//! [`iter::View`] trait: a cursor in `0..=len`, fallible `current` and
//! `advance` that report [`error::Error::OutOfRange`] at the terminal
//! position, and `begin`/`end` factories. The views also implement
//! [`Iterator`] for ordinary `for` loops.
//!
//! ## Basic Usage
//!
//! ```
//! use prismbox::Container;
//!
//! let mut container = Container::new();
//! container.insert(17);
//! container.insert(2);
//! container.insert(25);
//!
//! let ascending: Vec<i64> = container.ascending_iter().collect();
//! assert_eq!(ascending, vec![2, 17, 25]);
//!
//! let primes: Vec<i64> = container.prime_iter().collect();
//! assert_eq!(primes, vec![2, 17]);
//!
//! // Side-cross construction sorts the container's storage in place.
//! let cross: Vec<i64> = container.side_cross_iter().collect();
//! assert_eq!(cross, vec![2, 25, 17]);
//! ```
//!
//! ## Ownership and Mutation
//!
//! The container exclusively owns its element storage. The ascending and
//! prime views hold a shared borrow of their container (their equality
//! contract compares container identity), so the borrow checker rejects
//! mutation while such a view is live; construct a fresh view after
//! mutating. The side-cross view takes a mutable borrow only for the
//! duration of its constructor and retains no reference afterwards.

pub mod error;
pub mod iter;

#[cfg(test)]
mod util;

use error::{Error, Result};
use iter::{AscendingIter, PrimeIter, SideCrossIter};

// ---------------------------------------------------------------------------
// Core Container Structure
// ---------------------------------------------------------------------------

/// An owning, ordered collection of signed integers.
///
/// Duplicates are permitted and insertion order is preserved until either a
/// `remove` compacts the sequence or a side-cross view's constructor sorts
/// it. The container is the single owner of its storage; views borrow it
/// and snapshot the values they traverse.
#[derive(Debug, Default)]
pub struct Container {
	elements: Vec<i64>,
}

impl Container {
	/// Creates an empty container.
	pub fn new() -> Container {
		Container { elements: Vec::new() }
	}

	/// Appends a value to the end of the stored sequence.
	///
	/// Duplicates are allowed; this never fails.
	pub fn insert(&mut self, value: i64) {
		self.elements.push(value);
	}

	/// Removes **every** occurrence of `value` from the container.
	///
	/// Fails with [`Error::NotFound`] if no occurrence exists, in which
	/// case the contents and size are unchanged.
	pub fn remove(&mut self, value: i64) -> Result<()> {
		if !self.elements.contains(&value) {
			return Err(Error::NotFound { value });
		}
		self.elements.retain(|&v| v != value);
		Ok(())
	}

	/// Returns the current element count.
	#[inline]
	pub fn len(&self) -> usize {
		self.elements.len()
	}

	/// Returns `true` if the container holds no elements.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.elements.is_empty()
	}

	/// Returns `true` if at least one occurrence of `value` is stored.
	#[inline]
	pub fn contains(&self, value: i64) -> bool {
		self.elements.contains(&value)
	}

	/// Returns a view over the elements in non-decreasing order.
	pub fn ascending_iter(&self) -> AscendingIter<'_> {
		AscendingIter::new(self)
	}

	/// Returns the side-cross view over the elements.
	///
	/// As a documented side effect, this sorts the container's storage
	/// into ascending order. Views constructed afterwards observe the
	/// sorted storage.
	pub fn side_cross_iter(&mut self) -> SideCrossIter {
		SideCrossIter::new(self)
	}

	/// Returns a view over the prime-valued elements in non-decreasing
	/// order.
	pub fn prime_iter(&self) -> PrimeIter<'_> {
		PrimeIter::new(self)
	}

	/// Returns the stored sequence for view constructors.
	#[inline]
	pub(crate) fn elements(&self) -> &[i64] {
		&self.elements
	}

	/// Replaces the entire stored sequence.
	///
	/// Collaborator interface for the side-cross view's sort side effect.
	pub(crate) fn replace_all(&mut self, elements: Vec<i64>) {
		self.elements = elements;
	}

	/// Validates that the read-only views agree with the stored elements.
	///
	/// The ascending view must equal the sorted multiset of the storage,
	/// and the prime view must equal its prime-valued subsequence. Panics
	/// on violation; intended for tests.
	pub fn assert_invariants(&self) {
		let mut sorted = self.elements.clone();
		sorted.sort();

		let ascending: Vec<i64> = self.ascending_iter().collect();
		assert_eq!(ascending, sorted, "ascending view must equal the sorted multiset");

		let expected: Vec<i64> = sorted.iter().copied().filter(|&v| iter::is_prime(v)).collect();
		let primes: Vec<i64> = self.prime_iter().collect();
		assert_eq!(primes, expected, "prime view must equal the sorted prime subsequence");
	}
}
