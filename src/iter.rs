//! Traversal views over the `Container` data structure
use crate::error::{Error, Result};
use crate::Container;
use std::cmp::Ordering;
use std::iter::FusedIterator;

/// Shared position protocol implemented by all three views.
///
/// Each view is a cursor over a snapshot captured at construction time.
/// The cursor ranges over `0..=len`, where `len` is the terminal position:
/// `current` and `advance` both fail there with [`Error::OutOfRange`].
/// Generic loop code can drive any view through this trait; the per-type
/// equality and ordering contracts stay on the concrete types.
pub trait View {
	/// Returns the number of elements in the view's snapshot.
	fn len(&self) -> usize;

	/// Returns the cursor position, in `0..=len`.
	fn position(&self) -> usize;

	/// Returns the value at the cursor position.
	fn current(&self) -> Result<i64>;

	/// Moves the cursor forward by one position.
	fn advance(&mut self) -> Result<()>;

	/// Returns `true` once the cursor has reached the terminal position.
	fn at_end(&self) -> bool {
		self.position() == self.len()
	}

	/// Returns `true` if the view's snapshot is empty.
	fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

/// Returns `true` if `value` is prime.
///
/// Values below 2 are not prime. Otherwise the value is trial-divided by
/// every candidate divisor up to its integer square root.
pub fn is_prime(value: i64) -> bool {
	if value < 2 {
		return false;
	}
	let mut divisor = 2;
	// divisor <= value / divisor is the overflow-free form of
	// divisor * divisor <= value.
	while divisor <= value / divisor {
		if value % divisor == 0 {
			return false;
		}
		divisor += 1;
	}
	true
}

/// Arranges an ascending-sorted slice into side-cross order: smallest,
/// largest, second-smallest, second-largest, and so on. When the length is
/// odd the middle element comes last, appended exactly once.
fn cross_order(sorted: &[i64]) -> Vec<i64> {
	let mut out = Vec::with_capacity(sorted.len());
	if sorted.is_empty() {
		return out;
	}

	let mut low = 0;
	let mut high = sorted.len() - 1;
	let mut from_low = true;
	while low < high {
		if from_low {
			out.push(sorted[low]);
			low += 1;
		} else {
			out.push(sorted[high]);
			high -= 1;
		}
		from_low = !from_low;
	}
	out.push(sorted[low]);

	out
}

// ---------------------------------------------------------------------------
// AscendingIter
// ---------------------------------------------------------------------------

/// A view producing the container's values in non-decreasing order.
///
/// Construction copies the container's elements into an owned snapshot and
/// sorts it; later mutation of the container does not affect an
/// already-constructed view. Equality requires the same container instance
/// and the same cursor position; ordering compares cursor positions only.
#[derive(Debug, Clone)]
pub struct AscendingIter<'c> {
	container: &'c Container,
	snapshot: Vec<i64>,
	cursor: usize,
}

impl<'c> AscendingIter<'c> {
	/// Creates a view over the container's current elements, sorted
	/// ascending.
	pub fn new(container: &'c Container) -> AscendingIter<'c> {
		let mut snapshot = container.elements().to_vec();
		snapshot.sort();
		AscendingIter { container, snapshot, cursor: 0 }
	}

	/// Returns a fresh view positioned at the first element.
	///
	/// This re-snapshots the container, so a `begin()` taken after the
	/// container was mutated observes the new contents.
	pub fn begin(&self) -> AscendingIter<'c> {
		AscendingIter::new(self.container)
	}

	/// Returns a view positioned at the terminal position of the current
	/// snapshot.
	pub fn end(&self) -> AscendingIter<'c> {
		AscendingIter {
			container: self.container,
			snapshot: self.snapshot.clone(),
			cursor: self.snapshot.len(),
		}
	}

	/// Returns the number of elements in the snapshot.
	#[inline]
	pub fn len(&self) -> usize {
		self.snapshot.len()
	}

	/// Returns `true` if the snapshot is empty.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.snapshot.is_empty()
	}

	/// Returns the cursor position.
	#[inline]
	pub fn position(&self) -> usize {
		self.cursor
	}

	/// Returns `true` once the cursor has reached the terminal position.
	#[inline]
	pub fn at_end(&self) -> bool {
		self.cursor == self.snapshot.len()
	}

	/// Returns the value at the cursor position, or `OutOfRange` at the
	/// terminal position.
	#[inline]
	pub fn current(&self) -> Result<i64> {
		self.snapshot.get(self.cursor).copied().ok_or(Error::OutOfRange {
			position: self.cursor,
			len: self.snapshot.len(),
		})
	}

	/// Moves the cursor forward, or fails with `OutOfRange` if it is
	/// already at the terminal position.
	#[inline]
	pub fn advance(&mut self) -> Result<()> {
		if self.cursor == self.snapshot.len() {
			return Err(Error::OutOfRange {
				position: self.cursor,
				len: self.snapshot.len(),
			});
		}
		self.cursor += 1;
		Ok(())
	}
}

impl PartialEq for AscendingIter<'_> {
	fn eq(&self, other: &Self) -> bool {
		std::ptr::eq(self.container, other.container) && self.cursor == other.cursor
	}
}

impl PartialOrd for AscendingIter<'_> {
	/// Orders by cursor position alone. Two views with equal cursors over
	/// different containers are unordered, which keeps `partial_cmp`
	/// coherent with the identity-checking `PartialEq`.
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		match self.cursor.cmp(&other.cursor) {
			Ordering::Equal if std::ptr::eq(self.container, other.container) => {
				Some(Ordering::Equal)
			}
			Ordering::Equal => None,
			ord => Some(ord),
		}
	}
}

impl Iterator for AscendingIter<'_> {
	type Item = i64;

	#[inline]
	fn next(&mut self) -> Option<i64> {
		let value = self.snapshot.get(self.cursor).copied()?;
		self.cursor += 1;
		Some(value)
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		let remaining = self.snapshot.len() - self.cursor;
		(remaining, Some(remaining))
	}
}

impl FusedIterator for AscendingIter<'_> {}

// ---------------------------------------------------------------------------
// SideCrossIter
// ---------------------------------------------------------------------------

/// A view alternating between the low end and the high end of the sorted
/// sequence: smallest, largest, second-smallest, second-largest, with the
/// middle element last when the count is odd.
///
/// Construction has a documented side effect: it permanently reorders the
/// container's stored sequence into ascending order. The constructor takes
/// the container mutably for exactly that reason and retains no reference
/// afterwards, which is also why equality and ordering on this type compare
/// cursor positions only, independent of container identity.
#[derive(Debug, Clone)]
pub struct SideCrossIter {
	snapshot: Vec<i64>,
	cursor: usize,
}

impl SideCrossIter {
	/// Creates the side-cross view and sorts the container's storage in
	/// place as a side effect.
	pub fn new(container: &mut Container) -> SideCrossIter {
		let mut sorted = container.elements().to_vec();
		sorted.sort();
		let snapshot = cross_order(&sorted);
		container.replace_all(sorted);
		SideCrossIter { snapshot, cursor: 0 }
	}

	/// Returns a view positioned at the first element of this snapshot.
	///
	/// Unlike the ascending and prime views, this rewinds over the
	/// iterator's own snapshot rather than re-scanning the container: the
	/// constructor gives up its borrow after the sort side effect.
	pub fn begin(&self) -> SideCrossIter {
		SideCrossIter { snapshot: self.snapshot.clone(), cursor: 0 }
	}

	/// Returns a view positioned at the terminal position of this
	/// snapshot.
	pub fn end(&self) -> SideCrossIter {
		SideCrossIter {
			snapshot: self.snapshot.clone(),
			cursor: self.snapshot.len(),
		}
	}

	/// Returns the number of elements in the snapshot.
	#[inline]
	pub fn len(&self) -> usize {
		self.snapshot.len()
	}

	/// Returns `true` if the snapshot is empty.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.snapshot.is_empty()
	}

	/// Returns the cursor position.
	#[inline]
	pub fn position(&self) -> usize {
		self.cursor
	}

	/// Returns `true` once the cursor has reached the terminal position.
	#[inline]
	pub fn at_end(&self) -> bool {
		self.cursor == self.snapshot.len()
	}

	/// Returns the value at the cursor position, or `OutOfRange` at the
	/// terminal position.
	#[inline]
	pub fn current(&self) -> Result<i64> {
		self.snapshot.get(self.cursor).copied().ok_or(Error::OutOfRange {
			position: self.cursor,
			len: self.snapshot.len(),
		})
	}

	/// Moves the cursor forward, or fails with `OutOfRange` if it is
	/// already at the terminal position.
	#[inline]
	pub fn advance(&mut self) -> Result<()> {
		if self.cursor == self.snapshot.len() {
			return Err(Error::OutOfRange {
				position: self.cursor,
				len: self.snapshot.len(),
			});
		}
		self.cursor += 1;
		Ok(())
	}
}

impl PartialEq for SideCrossIter {
	fn eq(&self, other: &Self) -> bool {
		self.cursor == other.cursor
	}
}

impl PartialOrd for SideCrossIter {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cursor.cmp(&other.cursor))
	}
}

impl Iterator for SideCrossIter {
	type Item = i64;

	#[inline]
	fn next(&mut self) -> Option<i64> {
		let value = self.snapshot.get(self.cursor).copied()?;
		self.cursor += 1;
		Some(value)
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		let remaining = self.snapshot.len() - self.cursor;
		(remaining, Some(remaining))
	}
}

impl FusedIterator for SideCrossIter {}

// ---------------------------------------------------------------------------
// PrimeIter
// ---------------------------------------------------------------------------

/// A view producing only the container's prime-valued elements, in
/// non-decreasing order.
///
/// Construction filters the container's elements through [`is_prime`],
/// sorts the survivors, and snapshots them. Equality requires the same
/// container instance and the same cursor position; ordering compares
/// cursor positions only.
#[derive(Debug, Clone)]
pub struct PrimeIter<'c> {
	container: &'c Container,
	snapshot: Vec<i64>,
	cursor: usize,
}

impl<'c> PrimeIter<'c> {
	/// Creates a view over the prime values currently in the container,
	/// sorted ascending.
	pub fn new(container: &'c Container) -> PrimeIter<'c> {
		let mut snapshot: Vec<i64> =
			container.elements().iter().copied().filter(|&v| is_prime(v)).collect();
		snapshot.sort();
		PrimeIter { container, snapshot, cursor: 0 }
	}

	/// Returns a fresh view positioned at the first prime.
	///
	/// This re-snapshots the container, so a `begin()` taken after the
	/// container was mutated observes the new contents.
	pub fn begin(&self) -> PrimeIter<'c> {
		PrimeIter::new(self.container)
	}

	/// Returns a view positioned at the terminal position of the current
	/// snapshot.
	pub fn end(&self) -> PrimeIter<'c> {
		PrimeIter {
			container: self.container,
			snapshot: self.snapshot.clone(),
			cursor: self.snapshot.len(),
		}
	}

	/// Returns the number of primes in the snapshot.
	#[inline]
	pub fn len(&self) -> usize {
		self.snapshot.len()
	}

	/// Returns `true` if the snapshot contains no primes.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.snapshot.is_empty()
	}

	/// Returns the cursor position.
	#[inline]
	pub fn position(&self) -> usize {
		self.cursor
	}

	/// Returns `true` once the cursor has reached the terminal position.
	#[inline]
	pub fn at_end(&self) -> bool {
		self.cursor == self.snapshot.len()
	}

	/// Returns the value at the cursor position, or `OutOfRange` at the
	/// terminal position.
	#[inline]
	pub fn current(&self) -> Result<i64> {
		self.snapshot.get(self.cursor).copied().ok_or(Error::OutOfRange {
			position: self.cursor,
			len: self.snapshot.len(),
		})
	}

	/// Moves the cursor forward, or fails with `OutOfRange` if it is
	/// already at the terminal position.
	#[inline]
	pub fn advance(&mut self) -> Result<()> {
		if self.cursor == self.snapshot.len() {
			return Err(Error::OutOfRange {
				position: self.cursor,
				len: self.snapshot.len(),
			});
		}
		self.cursor += 1;
		Ok(())
	}
}

impl PartialEq for PrimeIter<'_> {
	fn eq(&self, other: &Self) -> bool {
		std::ptr::eq(self.container, other.container) && self.cursor == other.cursor
	}
}

impl PartialOrd for PrimeIter<'_> {
	/// Orders by cursor position alone, with the same unordered case for
	/// equal cursors over different containers as [`AscendingIter`].
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		match self.cursor.cmp(&other.cursor) {
			Ordering::Equal if std::ptr::eq(self.container, other.container) => {
				Some(Ordering::Equal)
			}
			Ordering::Equal => None,
			ord => Some(ord),
		}
	}
}

impl Iterator for PrimeIter<'_> {
	type Item = i64;

	#[inline]
	fn next(&mut self) -> Option<i64> {
		let value = self.snapshot.get(self.cursor).copied()?;
		self.cursor += 1;
		Some(value)
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		let remaining = self.snapshot.len() - self.cursor;
		(remaining, Some(remaining))
	}
}

impl FusedIterator for PrimeIter<'_> {}

// ---------------------------------------------------------------------------
// View impls
// ---------------------------------------------------------------------------

impl View for AscendingIter<'_> {
	fn len(&self) -> usize {
		AscendingIter::len(self)
	}

	fn position(&self) -> usize {
		AscendingIter::position(self)
	}

	fn current(&self) -> Result<i64> {
		AscendingIter::current(self)
	}

	fn advance(&mut self) -> Result<()> {
		AscendingIter::advance(self)
	}
}

impl View for SideCrossIter {
	fn len(&self) -> usize {
		SideCrossIter::len(self)
	}

	fn position(&self) -> usize {
		SideCrossIter::position(self)
	}

	fn current(&self) -> Result<i64> {
		SideCrossIter::current(self)
	}

	fn advance(&mut self) -> Result<()> {
		SideCrossIter::advance(self)
	}
}

impl View for PrimeIter<'_> {
	fn len(&self) -> usize {
		PrimeIter::len(self)
	}

	fn position(&self) -> usize {
		PrimeIter::position(self)
	}

	fn current(&self) -> Result<i64> {
		PrimeIter::current(self)
	}

	fn advance(&mut self) -> Result<()> {
		PrimeIter::advance(self)
	}
}
