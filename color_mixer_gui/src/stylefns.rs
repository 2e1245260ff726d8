use color_mixer_core::Rgb;
use iced::{Border, Color, Theme, widget::container};

pub fn bordered_box_with_radius(radius: f32) -> impl Fn(&Theme) -> container::Style {
	move |theme| {
		let mut style = container::bordered_box(theme);
		style.border.radius = radius.into();
		style
	}
}

pub fn swatch(rgb: Rgb) -> impl Fn(&Theme) -> container::Style {
	move |theme| container::Style {
		background: Some(Color::from_rgb8(rgb.r, rgb.g, rgb.b).into()),
		border: Border {
			color: theme.extended_palette().background.strong.color,
			width: 1.0,
			radius: 5.0.into(),
		},
		..container::Style::default()
	}
}

pub fn backdrop(_theme: &Theme) -> container::Style {
	container::Style {
		background: Some(
			Color {
				a: 0.8,
				..Color::BLACK
			}
			.into(),
		),
		..container::Style::default()
	}
}

pub fn alert_box(theme: &Theme) -> container::Style {
	let palette = theme.extended_palette();

	container::Style {
		background: Some(palette.background.base.color.into()),
		text_color: Some(palette.background.base.text),
		border: Border {
			color: palette.danger.base.color,
			width: 2.0,
			radius: 5.0.into(),
		},
		..container::Style::default()
	}
}
