use iced::{Result, application};
use mixer::ColorMixer;

mod components;
mod config;
mod mixer;
mod stylefns;
mod theme;
mod trace;

fn main() -> Result {
	trace::setup();

	application(ColorMixer::title, ColorMixer::update, ColorMixer::view)
		.subscription(ColorMixer::subscription)
		.theme(ColorMixer::theme)
		.window_size((560.0, 860.0))
		.run_with(ColorMixer::create)
}
