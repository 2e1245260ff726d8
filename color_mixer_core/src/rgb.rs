use crate::{Channel, HexColor};
use std::fmt::{Display, Formatter};

/// An sRGB color with 8 bits per channel.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Rgb {
	pub r: u8,
	pub g: u8,
	pub b: u8,
}

impl Rgb {
	#[must_use]
	pub const fn new(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b }
	}

	#[must_use]
	pub const fn channel(self, channel: Channel) -> u8 {
		match channel {
			Channel::Red => self.r,
			Channel::Green => self.g,
			Channel::Blue => self.b,
		}
	}

	/// Builds a color by evaluating `f` once per channel, in red, green, blue order.
	#[must_use]
	pub fn from_fn(mut f: impl FnMut(Channel) -> u8) -> Self {
		Self {
			r: f(Channel::Red),
			g: f(Channel::Green),
			b: f(Channel::Blue),
		}
	}

	#[must_use]
	pub fn to_hex(self) -> HexColor {
		HexColor::from(self)
	}
}

impl Display for Rgb {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
	}
}

/// Renders `rgb` as `#RRGGBB` with uppercase, zero-padded digits.
#[must_use]
pub fn rgb_to_hex(rgb: Rgb) -> HexColor {
	rgb.to_hex()
}

#[cfg(test)]
mod tests {
	use super::{Rgb, rgb_to_hex};
	use crate::{Channel, hex_to_rgb};

	#[test]
	fn pads_single_digit_channels() {
		assert_eq!(rgb_to_hex(Rgb::new(5, 0, 10)).as_str(), "#05000A");
	}

	#[test]
	fn uppercase_digits() {
		assert_eq!(rgb_to_hex(Rgb::new(171, 205, 239)).as_str(), "#ABCDEF");
	}

	#[test]
	fn every_channel_value_round_trips() {
		for v in 0..=u8::MAX {
			for rgb in [Rgb::new(v, 0, 0), Rgb::new(0, v, 0), Rgb::new(0, 0, v), Rgb::new(v, v, v)] {
				assert_eq!(hex_to_rgb(&rgb_to_hex(rgb)), rgb);
			}
		}
	}

	#[test]
	fn channel_access() {
		let rgb = Rgb::new(1, 2, 3);

		assert_eq!(rgb.channel(Channel::Red), 1);
		assert_eq!(rgb.channel(Channel::Green), 2);
		assert_eq!(rgb.channel(Channel::Blue), 3);
		assert_eq!(Rgb::from_fn(|c| rgb.channel(c)), rgb);
	}

	#[test]
	fn display() {
		assert_eq!(Rgb::new(128, 0, 128).to_string(), "rgb(128, 0, 128)");
	}
}
