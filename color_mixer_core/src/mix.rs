use crate::{Explanation, HexColor, Rgb, Weight};

/// The outcome of blending two colors, along with everything needed to explain it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MixResult {
	pub first: Rgb,
	pub second: Rgb,
	pub weight: Weight,
	pub mixed: Rgb,
}

impl MixResult {
	/// Blends each channel as `round(first * weight + second * (1 - weight))`.
	#[must_use]
	#[expect(clippy::suboptimal_flops, reason = "a fused multiply-add rounds differently")]
	pub fn new(first: Rgb, second: Rgb, weight: Weight) -> Self {
		let w = weight.get();

		let mixed = Rgb::from_fn(|channel| {
			let a = f64::from(first.channel(channel));
			let b = f64::from(second.channel(channel));

			// both terms are bounded by 255, so the sum never leaves 0..=255
			(a * w + b * (1.0 - w)).round() as u8
		});

		Self {
			first,
			second,
			weight,
			mixed,
		}
	}

	#[must_use]
	pub fn mixed_hex(&self) -> HexColor {
		self.mixed.to_hex()
	}

	#[must_use]
	pub const fn explanation(&self) -> Explanation {
		Explanation(*self)
	}
}

#[must_use]
pub fn mix_colors(first: &HexColor, second: &HexColor, weight: Weight) -> MixResult {
	MixResult::new(first.to_rgb(), second.to_rgb(), weight)
}

#[cfg(test)]
mod tests {
	use super::{MixResult, mix_colors};
	use crate::{Rgb, Weight, validate_color};
	use pretty_assertions::assert_eq;

	fn weights() -> impl Iterator<Item = Weight> {
		(0..=100).map(|i| Weight::new(f64::from(i) / 100.0).unwrap())
	}

	#[test]
	fn red_and_blue_make_purple() {
		let red = validate_color("#FF0000").unwrap();
		let blue = validate_color("#0000FF").unwrap();

		let result = mix_colors(&red, &blue, Weight::parse("0.50").unwrap());

		assert_eq!(result.mixed, Rgb::new(128, 0, 128));
		assert_eq!(result.mixed_hex().as_str(), "#800080");
		assert_eq!(result.first, Rgb::new(255, 0, 0));
		assert_eq!(result.second, Rgb::new(0, 0, 255));
		assert_eq!(result.weight, Weight::HALF);
	}

	#[test]
	fn full_weight_on_unprefixed_green() {
		let green = validate_color("00FF00").unwrap();
		let black = validate_color("#000000").unwrap();

		let result = mix_colors(&green, &black, Weight::ONE);

		assert_eq!(green.as_str(), "#00FF00");
		assert_eq!(result.mixed_hex().as_str(), "#00FF00");
	}

	#[test]
	fn boundary_weights_pick_a_source() {
		let a = validate_color("#123456").unwrap();
		let b = validate_color("#FEDCBA").unwrap();

		assert_eq!(mix_colors(&a, &b, Weight::ONE).mixed, a.to_rgb());
		assert_eq!(mix_colors(&a, &b, Weight::ZERO).mixed, b.to_rgb());
	}

	#[test]
	fn mixing_with_itself_is_identity() {
		for v in 0..=u8::MAX {
			let color = Rgb::new(v, u8::MAX - v, v / 2);

			for weight in weights() {
				assert_eq!(MixResult::new(color, color, weight).mixed, color);
			}
		}
	}

	#[test]
	fn rounds_instead_of_truncating() {
		let result = MixResult::new(Rgb::new(1, 0, 0), Rgb::new(0, 0, 0), Weight::HALF);

		assert_eq!(result.mixed, Rgb::new(1, 0, 0));
	}

	#[test]
	fn each_product_is_rounded_before_summing() {
		let a = validate_color("#350000").unwrap();
		let b = validate_color("#030000").unwrap();

		let result = mix_colors(&a, &b, Weight::parse("0.01").unwrap());

		assert_eq!(result.mixed, Rgb::new(4, 0, 0));
		assert!(
			result
				.explanation()
				.to_string()
				.contains("R: 53 * 0.01 + 3 * 0.99 = 4")
		);
	}

	#[test]
	fn extremes_stay_in_range() {
		let white = Rgb::new(255, 255, 255);
		let black = Rgb::default();

		for weight in weights() {
			let mixed = MixResult::new(white, black, weight).mixed;
			let expected = (weight.get() * 255.0).round() as u8;

			assert_eq!(mixed, Rgb::new(expected, expected, expected));
			assert_eq!(MixResult::new(white, white, weight).mixed, white);
		}
	}
}
