use thiserror::Error;

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum MixError {
	#[error("Please enter a valid hex color code (e.g. #FF0000 or FF0000)")]
	InvalidColorFormat,
	#[error("Please enter a valid weight (0-1)")]
	InvalidWeight,
}
