use crate::utils::error::{CodeaidError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_url, Validate};
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional settings file, e.g.
///
/// ```toml
/// [model]
/// name = "gpt-4o"
/// endpoint = "${OPENAI_BASE_URL}"
/// api_key_env = "OPENAI_KEY"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub model: ModelSection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModelSection {
    pub name: Option<String>,
    pub endpoint: Option<String>,
    pub api_key_env: Option<String>,
}

impl FileConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| CodeaidError::ConfigError {
            message: format!("cannot read settings file {}: {}", path.display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = Self::substitute_env_vars(content, |name| std::env::var(name).ok())?;

        toml::from_str(&processed).map_err(|e| CodeaidError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` references; unknown variables are left as written.
    fn substitute_env_vars<F>(content: &str, lookup: F) -> Result<String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CodeaidError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &Captures| {
            let var_name = &caps[1];
            lookup(var_name).unwrap_or_else(|| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }
}

impl Validate for FileConfig {
    fn validate(&self) -> Result<()> {
        if let Some(name) = &self.model.name {
            validate_non_empty_string("model.name", name)?;
        }
        if let Some(endpoint) = &self.model.endpoint {
            validate_url("model.endpoint", endpoint)?;
        }
        if let Some(var) = &self.model.api_key_env {
            validate_non_empty_string("model.api_key_env", var)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_model_section() {
        let config = FileConfig::from_toml_str(
            r#"
[model]
name = "gpt-4o-mini"
endpoint = "http://localhost:11434/v1"
api_key_env = "LOCAL_KEY"
"#,
        )
        .unwrap();

        assert_eq!(config.model.name.as_deref(), Some("gpt-4o-mini"));
        assert_eq!(config.model.endpoint.as_deref(), Some("http://localhost:11434/v1"));
        assert_eq!(config.model.api_key_env.as_deref(), Some("LOCAL_KEY"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_file_is_default() {
        let config = FileConfig::from_toml_str("").unwrap();
        assert!(config.model.name.is_none());
        assert!(config.model.endpoint.is_none());
    }

    #[test]
    fn test_substitute_env_vars() {
        let lookup = |name: &str| (name == "BASE").then(|| "https://llm.internal/v1".to_string());
        let out = FileConfig::substitute_env_vars(
            "endpoint = \"${BASE}\"\nname = \"${UNSET_MODEL}\"",
            lookup,
        )
        .unwrap();

        assert!(out.contains("endpoint = \"https://llm.internal/v1\""));
        assert!(out.contains("name = \"${UNSET_MODEL}\""));
    }

    #[test]
    fn test_invalid_toml() {
        assert!(matches!(
            FileConfig::from_toml_str("[model\nname ="),
            Err(CodeaidError::ConfigError { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_bad_endpoint() {
        let config = FileConfig::from_toml_str("[model]\nendpoint = \"not a url\"").unwrap();
        assert!(matches!(
            config.validate(),
            Err(CodeaidError::InvalidConfigValue { field, .. }) if field == "model.endpoint"
        ));
    }

    #[test]
    fn test_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("codeaid.toml");
        std::fs::write(&path, "[model]\nname = \"gpt-4.1\"\n").unwrap();

        let config = FileConfig::from_file(&path).unwrap();
        assert_eq!(config.model.name.as_deref(), Some("gpt-4.1"));

        assert!(FileConfig::from_file(dir.path().join("missing.toml")).is_err());
    }
}
