use crate::MixError;
use std::{
	fmt::{Display, Formatter},
	str::FromStr,
};

/// The share of the first color in a mix, in `0.0..=1.0`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Weight(f64);

impl Weight {
	pub const ZERO: Self = Self(0.0);
	pub const HALF: Self = Self(0.5);
	pub const ONE: Self = Self(1.0);

	/// Rejects NaN, infinities, and anything outside `0.0..=1.0`; nothing is clamped.
	pub fn new(value: f64) -> Result<Self, MixError> {
		if (0.0..=1.0).contains(&value) {
			// turns -0.0 into 0.0
			Ok(Self(value + 0.0))
		} else {
			Err(MixError::InvalidWeight)
		}
	}

	pub fn parse(input: &str) -> Result<Self, MixError> {
		input
			.trim()
			.parse::<f64>()
			.map_err(|_| MixError::InvalidWeight)
			.and_then(Self::new)
	}

	#[must_use]
	pub const fn get(self) -> f64 {
		self.0
	}

	/// The share of the second color.
	#[must_use]
	pub fn complement(self) -> Self {
		Self(1.0 - self.0)
	}
}

impl Default for Weight {
	fn default() -> Self {
		Self::HALF
	}
}

impl FromStr for Weight {
	type Err = MixError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::parse(s)
	}
}

impl Display for Weight {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		// ties round up, so 0.125 reads 0.13
		write!(f, "{:.2}", (self.0 * 100.0).round() / 100.0)
	}
}
