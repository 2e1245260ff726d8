use crate::{
	components::{BOLD, labeled, modal},
	config::Config,
	stylefns::{alert_box, bordered_box_with_radius, swatch},
	theme::Theme,
};
use color_mixer_core::{MixError, MixReport, Submission, Weight};
use iced::{
	Alignment::Center,
	Element, Font,
	Length::Fill,
	Subscription, Task, keyboard,
	widget::{
		Space, button, column, container, horizontal_space, pick_list, row, scrollable, slider,
		text, text_input,
	},
};
use strum::VariantArray as _;
use tracing::{debug, warn};

#[derive(Clone, Debug)]
pub enum Message {
	ChangedColor1(String),
	ChangedColor2(String),
	ChangedWeight(String),
	SlidWeight(f64),
	Submit,
	DismissAlert,
	ChangedTheme(Theme),
}

#[derive(Debug)]
pub struct ColorMixer {
	config: Config,
	color1: String,
	color2: String,
	weight: String,
	slider_weight: f64,
	report: Option<MixReport>,
	alert: Option<MixError>,
}

impl ColorMixer {
	pub fn create() -> (Self, Task<Message>) {
		(Self::new(Config::read()), Task::none())
	}

	#[must_use]
	pub fn new(config: Config) -> Self {
		let slider_weight = Weight::parse(&config.weight).unwrap_or_default().get();

		Self {
			color1: config.color1.clone(),
			color2: config.color2.clone(),
			weight: config.weight.clone(),
			slider_weight,
			report: None,
			alert: None,
			config,
		}
	}

	pub fn title(&self) -> String {
		self.report.as_ref().map_or_else(
			|| "Color Mixer".to_owned(),
			|report| format!("Color Mixer - {}", report.mixed_hex()),
		)
	}

	pub fn theme(&self) -> iced::Theme {
		self.config.theme.into()
	}

	pub fn update(&mut self, message: Message) -> Task<Message> {
		match message {
			Message::ChangedColor1(color) => self.color1 = color,
			Message::ChangedColor2(color) => self.color2 = color,
			Message::ChangedWeight(weight) => {
				if let Ok(parsed) = Weight::parse(&weight) {
					self.slider_weight = parsed.get();
				}
				self.weight = weight;
			}
			Message::SlidWeight(weight) => {
				self.slider_weight = weight;
				self.weight = format!("{weight:.2}");
			}
			Message::Submit => {
				let submission = Submission {
					color1: &self.color1,
					color2: &self.color2,
					weight: &self.weight,
				};

				match submission.evaluate() {
					Ok(report) => {
						debug!(
							first = %report.first,
							second = %report.second,
							weight = %report.weight(),
							mixed = %report.mixed_hex(),
							"mixed colors"
						);
						self.report = Some(report);
						self.alert = None;
					}
					Err(err) => self.alert = Some(err),
				}
			}
			Message::DismissAlert => self.alert = None,
			Message::ChangedTheme(theme) => {
				self.config.theme = theme;
				if let Err(err) = self.config.write() {
					warn!(%err, "couldn't save the theme");
				}
			}
		}

		Task::none()
	}

	pub fn view(&self) -> Element<'_, Message> {
		let header = row![
			text("Color Mixer").size(28).font(BOLD),
			horizontal_space(),
			pick_list(Theme::VARIANTS, Some(self.config.theme), Message::ChangedTheme),
		]
		.align_y(Center);

		let form = container(
			column![
				labeled(
					"Color 1 (HEX RGB):",
					text_input("e.g. #FF0000 or FF0000", &self.color1)
						.font(Font::MONOSPACE)
						.on_input(Message::ChangedColor1)
						.on_submit(Message::Submit)
				),
				labeled(
					"Color 2 (HEX RGB):",
					text_input("e.g. #0000FF or 0000FF", &self.color2)
						.font(Font::MONOSPACE)
						.on_input(Message::ChangedColor2)
						.on_submit(Message::Submit)
				),
				labeled(
					"Weight of color 1 (0-1):",
					row![
						text_input("0.50", &self.weight)
							.font(Font::MONOSPACE)
							.width(80)
							.on_input(Message::ChangedWeight)
							.on_submit(Message::Submit),
						slider(0.0..=1.0, self.slider_weight, Message::SlidWeight).step(0.01),
					]
					.spacing(10)
					.align_y(Center)
				),
				button("Mix colors").on_press(Message::Submit),
			]
			.spacing(15),
		)
		.padding(20)
		.style(bordered_box_with_radius(5.0));

		let content = column![header, form]
			.push_maybe(self.report.as_ref().map(report_view))
			.spacing(20)
			.padding(20)
			.max_width(640.0);

		let base = scrollable(container(content).center_x(Fill));

		match self.alert {
			Some(err) => modal(base, alert_view(err), Message::DismissAlert),
			None => base.into(),
		}
	}

	pub fn subscription(&self) -> Subscription<Message> {
		if self.alert.is_none() {
			return Subscription::none();
		}

		keyboard::on_key_press(|key, _| match key {
			keyboard::Key::Named(keyboard::key::Named::Escape) => Some(Message::DismissAlert),
			_ => None,
		})
	}
}

fn report_view(report: &MixReport) -> Element<'_, Message> {
	let weight = report.weight();

	container(
		column![
			text("Result").size(20).font(BOLD),
			text(format!("Mixed color: {}", report.mixed_hex())),
			text(format!("Color 1 ({}) weight: {weight}", report.first.canonical())),
			text(format!(
				"Color 2 ({}) weight: {}",
				report.second.canonical(),
				weight.complement()
			)),
			text("Calculation").size(20).font(BOLD),
			container(text(report.explanation().to_string()).font(Font::MONOSPACE))
				.padding(10)
				.width(Fill)
				.style(container::rounded_box),
			container(Space::new(Fill, 96)).style(swatch(report.result.mixed)),
		]
		.spacing(10),
	)
	.padding(20)
	.style(bordered_box_with_radius(5.0))
	.into()
}

fn alert_view<'a>(err: MixError) -> Element<'a, Message> {
	container(
		column![
			text("Invalid input").size(20).font(BOLD),
			text(err.to_string()),
			row![horizontal_space(), button("OK").on_press(Message::DismissAlert)],
		]
		.spacing(15),
	)
	.width(380)
	.padding(20)
	.style(alert_box)
	.into()
}
