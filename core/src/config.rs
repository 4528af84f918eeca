//! Site configuration.
use crate::splash::{SPLASH_DELAY_MAX_MS, SPLASH_DELAY_MIN_MS};
use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_SPLASH_DELAY_MS: u32 = 2_000;
pub const DEFAULT_ROLE_INTERVAL_MS: u32 = 2_000;

/// Shortest time a role is shown for.
pub const MIN_ROLE_INTERVAL_MS: u32 = 500;
pub const DEFAULT_THEME_KEY: &str = "theme";
pub const DEFAULT_FORM_ENDPOINT: &str = "https://formspree.io/f/xdoqkzyz";

/// Runtime configuration of the site.
/// Missing fields take their default value when deserializing.
#[derive(Deserialize, Clone, PartialEq, Debug)]
#[serde(default)]
pub struct SiteConfig {
    /// How long the splash screen is shown, in milliseconds.
    pub splash_delay_ms: u32,

    /// Local storage key of the persisted theme.
    pub theme_key: String,

    /// Form ingestion endpoint contact messages are posted to.
    pub form_endpoint: String,

    /// How long each role is shown in the home page headline, in milliseconds.
    pub role_interval_ms: u32,
}

impl SiteConfig {
    /// Splash delay, clamped to the supported range.
    pub fn splash_delay(&self) -> Duration {
        let ms = self
            .splash_delay_ms
            .clamp(SPLASH_DELAY_MIN_MS, SPLASH_DELAY_MAX_MS);

        Duration::from_millis(ms.into())
    }

    /// Role interval, raised to at least [`MIN_ROLE_INTERVAL_MS`].
    pub fn role_interval(&self) -> Duration {
        Duration::from_millis(self.role_interval_ms.max(MIN_ROLE_INTERVAL_MS).into())
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            splash_delay_ms: DEFAULT_SPLASH_DELAY_MS,
            theme_key: DEFAULT_THEME_KEY.to_string(),
            form_endpoint: DEFAULT_FORM_ENDPOINT.to_string(),
            role_interval_ms: DEFAULT_ROLE_INTERVAL_MS,
        }
    }
}

#[cfg(test)]
#[path = "./config_test.rs"]
mod config_test;
