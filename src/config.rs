use serde::Deserialize;

/// A twitter client URL scheme, in the order the dispatcher tries them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TwitterScheme {
    /// `x://post?text=...`
    X,
    /// `twitter://post?message=...`
    Twitter,
}

/// Plugin configuration, read from `plugins.slm-share` in `tauri.conf.json`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    pub twitter_fallback: Vec<TwitterScheme>,
    pub pasteboard_expiration_secs: u64,
    pub gallery_album: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            twitter_fallback: vec![TwitterScheme::X, TwitterScheme::Twitter],
            pasteboard_expiration_secs: 5 * 60,
            gallery_album: "SLM".to_string(),
        }
    }
}

impl Config {
    /// The twitter chain to try. An empty list means the default order.
    pub fn twitter_order(&self) -> &[TwitterScheme] {
        if self.twitter_fallback.is_empty() {
            &[TwitterScheme::X, TwitterScheme::Twitter]
        } else {
            &self.twitter_fallback
        }
    }
}
