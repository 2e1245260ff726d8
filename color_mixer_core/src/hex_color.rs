use crate::{MixError, Rgb};
use std::{
	fmt::{Display, Formatter},
	str::FromStr,
};

/// A validated `#RRGGBB` color.
///
/// The digits keep the case they were typed in; use [`HexColor::canonical`]
/// for the uppercase form.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct HexColor {
	text: Box<str>,
	rgb: Rgb,
}

impl HexColor {
	/// Accepts exactly six hex digits, optionally preceded by a single `#`.
	///
	/// Nothing is trimmed or clamped: any other input is rejected.
	pub fn parse(input: &str) -> Result<Self, MixError> {
		let digits = input.strip_prefix('#').unwrap_or(input);

		let &[r1, r0, g1, g0, b1, b0] = digits.as_bytes() else {
			return Err(MixError::InvalidColorFormat);
		};

		let byte = |hi: u8, lo: u8| -> Result<u8, MixError> {
			let hi = nibble(hi).ok_or(MixError::InvalidColorFormat)?;
			let lo = nibble(lo).ok_or(MixError::InvalidColorFormat)?;

			Ok((hi << 4) | lo)
		};

		let rgb = Rgb::new(byte(r1, r0)?, byte(g1, g0)?, byte(b1, b0)?);

		Ok(Self {
			text: format!("#{digits}").into_boxed_str(),
			rgb,
		})
	}

	#[must_use]
	pub fn as_str(&self) -> &str {
		&self.text
	}

	/// `#` followed by the six digits in uppercase.
	#[must_use]
	pub fn canonical(&self) -> String {
		self.text.to_ascii_uppercase()
	}

	#[must_use]
	pub const fn to_rgb(&self) -> Rgb {
		self.rgb
	}
}

const fn nibble(c: u8) -> Option<u8> {
	match c {
		b'0'..=b'9' => Some(c - b'0'),
		b'a'..=b'f' => Some(c - b'a' + 10),
		b'A'..=b'F' => Some(c - b'A' + 10),
		_ => None,
	}
}

impl From<Rgb> for HexColor {
	fn from(rgb: Rgb) -> Self {
		Self {
			text: format!("#{:02X}{:02X}{:02X}", rgb.r, rgb.g, rgb.b).into_boxed_str(),
			rgb,
		}
	}
}

impl FromStr for HexColor {
	type Err = MixError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::parse(s)
	}
}

impl TryFrom<&str> for HexColor {
	type Error = MixError;

	fn try_from(value: &str) -> Result<Self, Self::Error> {
		Self::parse(value)
	}
}

impl Display for HexColor {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.text)
	}
}

/// Validates `input`, returning it with a leading `#`.
pub fn validate_color(input: &str) -> Result<HexColor, MixError> {
	HexColor::parse(input)
}

/// Splits a validated color into its red, green and blue channels.
#[must_use]
pub const fn hex_to_rgb(color: &HexColor) -> Rgb {
	color.to_rgb()
}
