use crate::{Channel, MixResult, Rgb, Weight};
use std::fmt::{Display, Formatter};
use strum::VariantArray as _;

const FORMULA: &str = "result = color1 * weight + color2 * (1 - weight)";

/// Renders the arithmetic behind a [`MixResult`], one line per channel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Explanation(pub(crate) MixResult);

impl Display for Explanation {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		let MixResult {
			first,
			second,
			weight,
			mixed,
		} = self.0;

		write!(f, "Formula: {FORMULA}")?;

		for &channel in Channel::VARIANTS {
			write!(
				f,
				"\n{channel}: {} * {weight} + {} * {} = {}",
				first.channel(channel),
				second.channel(channel),
				weight.complement(),
				mixed.channel(channel),
			)?;
		}

		Ok(())
	}
}

#[must_use]
pub fn format_explanation(first: Rgb, second: Rgb, mixed: Rgb, weight: Weight) -> String {
	Explanation(MixResult {
		first,
		second,
		weight,
		mixed,
	})
	.to_string()
}
