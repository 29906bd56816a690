#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use toml_config::FileConfig;

use crate::utils::error::{CodeaidError, Result};
use std::fmt;

pub const DEFAULT_MODEL: &str = "gpt-4o";
pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1";
pub const DEFAULT_API_KEY_ENV: &str = "OPENAI_KEY";

/// Everything the model client needs, resolved once at startup.
#[derive(Clone)]
pub struct ModelSettings {
    pub api_key: String,
    pub model: String,
    pub endpoint: String,
}

impl ModelSettings {
    /// Resolves settings with precedence: explicit value, settings file,
    /// built-in default. The credential is fetched through `lookup` from the
    /// variable named by the settings file (or `OPENAI_KEY`).
    pub fn resolve<F>(
        model: Option<&str>,
        endpoint: Option<&str>,
        file: Option<&FileConfig>,
        lookup: F,
    ) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let section = file.map(|f| &f.model);

        let key_var = section
            .and_then(|s| s.api_key_env.as_deref())
            .unwrap_or(DEFAULT_API_KEY_ENV);
        let api_key = lookup(key_var)
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| CodeaidError::AuthenticationMissing {
                var: key_var.to_string(),
            })?;

        let model = model
            .or_else(|| section.and_then(|s| s.name.as_deref()))
            .unwrap_or(DEFAULT_MODEL)
            .to_string();
        let endpoint = endpoint
            .or_else(|| section.and_then(|s| s.endpoint.as_deref()))
            .unwrap_or(DEFAULT_ENDPOINT)
            .to_string();

        Ok(Self {
            api_key,
            model,
            endpoint,
        })
    }
}

impl fmt::Debug for ModelSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelSettings")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("endpoint", &self.endpoint)
            .finish()
    }
}
