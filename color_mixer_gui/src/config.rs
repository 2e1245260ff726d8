use crate::theme::Theme;
use serde::{Deserialize, Serialize};
use std::{
	fs::{create_dir_all, read_to_string, write},
	io,
	path::PathBuf,
	sync::LazyLock,
};
use thiserror::Error;
use tracing::warn;

pub static CONFIG_PATH: LazyLock<Option<PathBuf>> = LazyLock::new(|| {
	dirs::config_dir()
		.or_else(|| {
			warn!("can't find the system's config dir!");
			None
		})
		.map(|path| path.join("color_mixer.toml"))
});

#[derive(Debug, Error)]
pub enum ConfigError {
	#[error("no config directory on this system")]
	NoConfigDir,
	#[error(transparent)]
	Io(#[from] io::Error),
	#[error(transparent)]
	Serialize(#[from] toml::ser::Error),
}

/// Initial form contents and look of the window.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct Config {
	pub color1: String,
	pub color2: String,
	pub weight: String,
	pub theme: Theme,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			color1: "#FF0000".to_owned(),
			color2: "#0000FF".to_owned(),
			weight: "0.50".to_owned(),
			theme: Theme::default(),
		}
	}
}

impl Config {
	/// Never fails: unreadable or malformed files fall back to the defaults.
	#[must_use]
	pub fn read() -> Self {
		let Some(config_path) = &*CONFIG_PATH else {
			return Self::default();
		};

		let config = read_to_string(config_path);

		let read = config.as_deref().map_or_else(|_| Self::default(), Self::from_toml);

		if config.is_err_and(|e| e.kind() == io::ErrorKind::NotFound) {
			if let Err(err) = read.write() {
				warn!(%err, "couldn't create the config file");
			}
		}

		read
	}

	pub fn write(&self) -> Result<(), ConfigError> {
		let config_path = CONFIG_PATH.as_ref().ok_or(ConfigError::NoConfigDir)?;

		if let Some(parent) = config_path.parent() {
			create_dir_all(parent)?;
		}

		write(config_path, self.to_toml()?)?;

		Ok(())
	}

	#[must_use]
	pub fn from_toml(s: &str) -> Self {
		toml::from_str(s).unwrap_or_else(|err| {
			warn!(%err, "malformed config, using defaults");
			Self::default()
		})
	}

	pub fn to_toml(&self) -> Result<String, ConfigError> {
		Ok(toml::to_string(self)?)
	}
}
