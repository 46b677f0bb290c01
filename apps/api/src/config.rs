use anyhow::{bail, Context, Result};

use crate::layout::document::{Rgb, RenderStyle};
use crate::layout::sanitize::DEFAULT_MAX_TOKEN_LEN;

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub anthropic_api_key: String,
    pub port: u16,
    pub rust_log: String,
    /// Longest unbroken token the renderer receives, in chars.
    pub max_token_len: usize,
    /// Header fill, bullet and separator colour.
    pub accent_color: Rgb,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. `from_env` passes the process environment.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let anthropic_api_key = lookup("ANTHROPIC_API_KEY")
            .filter(|v| !v.trim().is_empty())
            .context("Required environment variable 'ANTHROPIC_API_KEY' is not set")?;

        let port = lookup("PORT")
            .unwrap_or_else(|| "8080".to_string())
            .parse::<u16>()
            .context("PORT must be a valid port number")?;

        let max_token_len = match lookup("MAX_TOKEN_LEN") {
            Some(raw) => raw
                .parse::<usize>()
                .context("MAX_TOKEN_LEN must be a positive integer")?,
            None => DEFAULT_MAX_TOKEN_LEN,
        };
        if max_token_len == 0 {
            bail!("MAX_TOKEN_LEN must be at least 1");
        }

        let accent_color = match lookup("RESUME_ACCENT_COLOR") {
            Some(raw) => Rgb::from_hex(&raw)
                .with_context(|| format!("RESUME_ACCENT_COLOR '{raw}' is not a RRGGBB hex colour"))?,
            None => RenderStyle::default().accent,
        };

        Ok(Config {
            anthropic_api_key,
            port,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            max_token_len,
            accent_color,
        })
    }

    /// Document style derived from this config.
    pub fn render_style(&self) -> RenderStyle {
        RenderStyle {
            accent: self.accent_color,
            max_token_len: self.max_token_len,
            ..RenderStyle::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(pairs: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[("ANTHROPIC_API_KEY", "sk-test")]).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.rust_log, "info");
        assert_eq!(config.max_token_len, 50);
        assert_eq!(config.accent_color, Rgb(0, 102, 204));
    }

    #[test]
    fn test_api_key_required() {
        let err = load(&[]).unwrap_err();
        assert!(err.to_string().contains("ANTHROPIC_API_KEY"));
        assert!(load(&[("ANTHROPIC_API_KEY", "  ")]).is_err());
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("ANTHROPIC_API_KEY", "sk-test"),
            ("PORT", "3000"),
            ("MAX_TOKEN_LEN", "30"),
            ("RESUME_ACCENT_COLOR", "#1A2B3C"),
        ])
        .unwrap();
        assert_eq!(config.port, 3000);

        let style = config.render_style();
        assert_eq!(style.max_token_len, 30);
        assert_eq!(style.accent, Rgb(0x1A, 0x2B, 0x3C));
        assert_eq!(style.body_font_size_pt, 12);
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(load(&[("ANTHROPIC_API_KEY", "k"), ("PORT", "http")]).is_err());
        assert!(load(&[("ANTHROPIC_API_KEY", "k"), ("MAX_TOKEN_LEN", "0")]).is_err());
        assert!(load(&[("ANTHROPIC_API_KEY", "k"), ("RESUME_ACCENT_COLOR", "blue")]).is_err());
    }
}
