use anyhow::Context;
use serde::{Deserialize, Serialize};


pub const DEFAULT_DECODER_URL: &str = "http://localhost:8080/";

// Optional yaml file; command line arguments take precedence over it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    pub decoder_url: Option<String>,
    pub game: Option<String>,
}

impl ConsoleConfig {
    pub fn read_file(filename: &str) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(filename)
            .context(format!("Failed to read config file '{filename}'."))?;
        serde_yaml::from_str(&contents)
            .context(format!("Failed to parse config file '{filename}'."))
    }

    pub fn override_with(self, decoder_url: Option<String>, game: Option<String>) -> Self {
        ConsoleConfig {
            decoder_url: decoder_url.or(self.decoder_url),
            game: game.or(self.game),
        }
    }

    pub fn decoder_url(&self) -> &str { self.decoder_url.as_deref().unwrap_or(DEFAULT_DECODER_URL) }
}
