use crate::{Explanation, HexColor, MixError, MixResult, Weight, mix_colors};

/// Raw form input, exactly as typed.
#[derive(Clone, Copy, Debug)]
pub struct Submission<'a> {
	pub color1: &'a str,
	pub color2: &'a str,
	pub weight: &'a str,
}

/// A successful submission: the validated inputs and the mix computed from them.
#[derive(Clone, Debug, PartialEq)]
pub struct MixReport {
	pub first: HexColor,
	pub second: HexColor,
	pub result: MixResult,
}

impl Submission<'_> {
	/// Validates both colors, then the weight, and mixes them.
	///
	/// Nothing is computed unless every input is valid.
	pub fn evaluate(self) -> Result<MixReport, MixError> {
		let first = HexColor::parse(self.color1)?;
		let second = HexColor::parse(self.color2)?;
		let weight = Weight::parse(self.weight)?;

		let result = mix_colors(&first, &second, weight);

		Ok(MixReport {
			first,
			second,
			result,
		})
	}
}

impl MixReport {
	#[must_use]
	pub fn mixed_hex(&self) -> HexColor {
		self.result.mixed_hex()
	}

	#[must_use]
	pub const fn weight(&self) -> Weight {
		self.result.weight
	}

	#[must_use]
	pub const fn explanation(&self) -> Explanation {
		self.result.explanation()
	}
}

#[cfg(test)]
mod tests {
	use super::Submission;
	use crate::{MixError, Rgb, Weight};
	use pretty_assertions::assert_eq;

	fn submit(color1: &str, color2: &str, weight: &str) -> Result<String, MixError> {
		Submission {
			color1,
			color2,
			weight,
		}
		.evaluate()
		.map(|report| report.mixed_hex().to_string())
	}

	#[test]
	fn valid_submission() {
		let report = Submission {
			color1: "#FF0000",
			color2: "0000ff",
			weight: "0.50",
		}
		.evaluate()
		.unwrap();

		assert_eq!(report.first.canonical(), "#FF0000");
		assert_eq!(report.second.canonical(), "#0000FF");
		assert_eq!(report.weight(), Weight::HALF);
		assert_eq!(report.result.mixed, Rgb::new(128, 0, 128));
		assert_eq!(report.mixed_hex().as_str(), "#800080");
	}

	#[test]
	fn invalid_color() {
		assert_eq!(submit("#GGGGGG", "#0000FF", "0.5"), Err(MixError::InvalidColorFormat));
		assert_eq!(submit("#FF0000", "blue", "0.5"), Err(MixError::InvalidColorFormat));
	}

	#[test]
	fn invalid_weight() {
		assert_eq!(submit("#FF0000", "#0000FF", "1.5"), Err(MixError::InvalidWeight));
		assert_eq!(submit("#FF0000", "#0000FF", ""), Err(MixError::InvalidWeight));
	}

	#[test]
	fn colors_are_checked_before_weight() {
		assert_eq!(submit("nope", "#0000FF", "nope"), Err(MixError::InvalidColorFormat));
	}

	#[test]
	fn error_messages_are_fixed() {
		assert_eq!(
			MixError::InvalidColorFormat.to_string(),
			"Please enter a valid hex color code (e.g. #FF0000 or FF0000)"
		);
		assert_eq!(MixError::InvalidWeight.to_string(), "Please enter a valid weight (0-1)");
	}
}
