use anyhow::{Context, Result};

pub const DEFAULT_CATEGORY_COLUMN: &str = "category";

/// Runtime configuration loaded from environment variables (and `.env` when present).
/// Command-line flags override these values in `main`.
#[derive(Debug, Clone)]
pub struct Config {
    pub category_column: String,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            category_column: optional_env("PREPDATA_CATEGORY_COLUMN")?
                .unwrap_or_else(|| DEFAULT_CATEGORY_COLUMN.to_string()),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Unset is fine; set-but-blank is a configuration mistake.
fn optional_env(key: &str) -> Result<Option<String>> {
    match std::env::var(key) {
        Ok(value) if value.trim().is_empty() => {
            anyhow::bail!("Environment variable '{key}' is set but empty")
        }
        Ok(value) => Ok(Some(value)),
        Err(std::env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(e).with_context(|| format!("Environment variable '{key}' is not valid UTF-8")),
    }
}
