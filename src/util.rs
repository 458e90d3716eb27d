//! Test utilities for loading sample containers from JSON fixtures
use crate::Container;
use serde::Deserialize;

/// A sample container together with its expected traversal orders.
#[derive(Deserialize, Debug)]
pub struct Sample {
	/// The values in insertion order.
	pub elements: Vec<i64>,
	/// Expected output of the ascending view.
	pub ascending: Vec<i64>,
	/// Expected output of the side-cross view.
	pub side_cross: Vec<i64>,
	/// Expected output of the prime view.
	pub primes: Vec<i64>,
}

/// Loads a sample from a JSON fixture and builds the container it
/// describes through the public API.
pub fn sample_container<P: AsRef<std::path::Path>>(path: P) -> (Container, Sample) {
	let file = std::fs::File::open(path).expect("failed to find file");
	let sample: Sample = serde_json::from_reader(file).unwrap();

	let mut container = Container::new();
	for &value in &sample.elements {
		container.insert(value);
	}

	(container, sample)
}
