//! # Error Types for the Container and its Views
//!
//! This module defines the error type shared by the container's mutation
//! operations and the traversal views.
//!
//! ## Error Handling Strategy
//!
//! Every fallible operation reports its failure synchronously to the
//! immediate caller. There is no retry or recovery path inside the crate:
//! a failed `remove` leaves the container untouched, and a failed
//! `advance` or `current` leaves the view's cursor where it was. The
//! caller decides whether and how to recover.
//!
//! ## Common Patterns
//!
//! Driving a view to its end position looks like this:
//!
//! ```
//! use prismbox::Container;
//!
//! let mut container = Container::new();
//! container.insert(17);
//! container.insert(2);
//!
//! let mut view = container.ascending_iter();
//! while !view.at_end() {
//! 	let value = view.current().unwrap();
//! 	println!("{value}");
//! 	view.advance().unwrap();
//! }
//!
//! // The cursor is now at the terminal position; one more step fails.
//! assert!(view.advance().is_err());
//! ```

use thiserror::Error;

/// Errors that can occur while mutating the container or driving a view.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
	/// `remove` was called with a value that has no occurrence in the
	/// container. The container's contents and size are unchanged.
	#[error("value {value} not found in container")]
	NotFound {
		/// The value the caller asked to remove.
		value: i64,
	},

	/// A view was dereferenced at, or advanced past, its terminal
	/// position.
	///
	/// The terminal position of a view equals the length of the snapshot
	/// it captured at construction. `current` fails there because no
	/// element exists at that position; `advance` fails there because the
	/// cursor never moves beyond it (it does not wrap or saturate).
	#[error("position {position} is out of range for a view of length {len}")]
	OutOfRange {
		/// The cursor position at the time of the failed call.
		position: usize,
		/// The length of the view's snapshot.
		len: usize,
	},
}

/// A Result type alias using our custom Error type.
pub type Result<T> = std::result::Result<T, Error>;
