mod channel;
mod error;
mod explanation;
mod hex_color;
mod mix;
mod rgb;
mod submission;
mod weight;

pub use channel::Channel;
pub use error::MixError;
pub use explanation::{Explanation, format_explanation};
pub use hex_color::{HexColor, hex_to_rgb, validate_color};
pub use mix::{MixResult, mix_colors};
pub use rgb::{Rgb, rgb_to_hex};
pub use submission::{MixReport, Submission};
pub use weight::Weight;
