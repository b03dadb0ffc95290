//! Carousel configuration with TOML support.
//!
//! All tweakable settings are consolidated here and use `#[serde(default)]`
//! so partial TOML files (e.g. only overriding `auto_ms`) work correctly.
//! Navigation callbacks are closures and live on the
//! [`Carousel`](crate::Carousel) itself, not in the options struct.

use serde::{Deserialize, Serialize};
use web_time::Duration;

use crate::error::CarouselError;

/// Construction-time carousel settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CarouselOptions {
    /// Index of the panel shown first.
    pub start_slide: usize,
    /// Settle animation duration in milliseconds.
    pub speed_ms: u64,
    /// Auto-advance delay in milliseconds. Zero disables the slideshow.
    pub auto_ms: u64,
    /// Wrap around at either end of the sequence.
    pub continuous: bool,
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self {
            start_slide: 0,
            speed_ms: 300,
            auto_ms: 0,
            continuous: true,
        }
    }
}

impl CarouselOptions {
    /// Parse options from a TOML string. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`CarouselError::OptionsParse`] when the text is not valid
    /// TOML for this struct.
    pub fn from_toml(text: &str) -> Result<Self, CarouselError> {
        toml::from_str(text)
            .map_err(|e| CarouselError::OptionsParse(e.to_string()))
    }

    /// Serialize options to a TOML string (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns [`CarouselError::OptionsParse`] when serialization fails.
    pub fn to_toml(&self) -> Result<String, CarouselError> {
        toml::to_string_pretty(self)
            .map_err(|e| CarouselError::OptionsParse(e.to_string()))
    }

    /// Settle animation duration.
    #[must_use]
    pub fn speed(&self) -> Duration {
        Duration::from_millis(self.speed_ms)
    }

    /// Auto-advance delay. [`Duration::ZERO`] means disabled.
    #[must_use]
    pub fn auto(&self) -> Duration {
        Duration::from_millis(self.auto_ms)
    }
}
