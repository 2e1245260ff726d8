use strum::{Display, VariantArray};

#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq, VariantArray)]
pub enum Channel {
	#[strum(to_string = "R")]
	Red,
	#[strum(to_string = "G")]
	Green,
	#[strum(to_string = "B")]
	Blue,
}
