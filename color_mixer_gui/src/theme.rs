use serde::{Deserialize, Serialize};
use strum::{Display, VariantArray};

#[derive(
	Clone, Copy, Debug, Default, Deserialize, Display, Eq, PartialEq, Serialize, VariantArray,
)]
#[strum(serialize_all = "title_case")]
pub enum Theme {
	#[default]
	Light,
	Dark,
	Dracula,
	Nord,
	GruvboxLight,
	GruvboxDark,
	CatppuccinLatte,
	CatppuccinMocha,
	TokyoNight,
}

impl From<Theme> for iced::Theme {
	fn from(value: Theme) -> Self {
		match value {
			Theme::Light => Self::Light,
			Theme::Dark => Self::Dark,
			Theme::Dracula => Self::Dracula,
			Theme::Nord => Self::Nord,
			Theme::GruvboxLight => Self::GruvboxLight,
			Theme::GruvboxDark => Self::GruvboxDark,
			Theme::CatppuccinLatte => Self::CatppuccinLatte,
			Theme::CatppuccinMocha => Self::CatppuccinMocha,
			Theme::TokyoNight => Self::TokyoNight,
		}
	}
}
