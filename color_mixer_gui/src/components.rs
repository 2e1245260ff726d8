use crate::stylefns::backdrop;
use iced::{
	Element, Font,
	font::Weight,
	widget::{center, column, mouse_area, opaque, stack, text},
};

pub const BOLD: Font = Font {
	weight: Weight::Bold,
	..Font::DEFAULT
};

pub fn labeled<'a, Message>(
	label: &'a str,
	content: impl Into<Element<'a, Message>>,
) -> Element<'a, Message>
where
	Message: 'a,
{
	column![text(label).size(14), content.into()]
		.spacing(5)
		.into()
}

/// Draws `content` centered over a dimmed `base`, swallowing all input to `base`.
///
/// Clicking the dimmed area emits `on_blur`.
pub fn modal<'a, Message>(
	base: impl Into<Element<'a, Message>>,
	content: impl Into<Element<'a, Message>>,
	on_blur: Message,
) -> Element<'a, Message>
where
	Message: Clone + 'a,
{
	stack![
		base.into(),
		opaque(mouse_area(center(opaque(content)).style(backdrop)).on_press(on_blur))
	]
	.into()
}
