use crate::config::LogFormat;
use crate::utils::error::{Result, ShadowError};
use crate::utils::validation::{validate_one_of, validate_path, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::env::VarError;
use std::path::Path;

pub const LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub resources: ResourcesConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResourcesConfig {
    /// Read resources from this directory instead of the bundled copies.
    pub dir: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub format: Option<LogFormat>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| {
            ShadowError::config(format!(
                "cannot read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed)?)
    }

    /// Replaces `${VAR}` with the value of the environment variable `VAR`.
    fn substitute_env_vars(content: &str) -> Result<String> {
        Self::substitute_vars(content, |name| std::env::var(name))
    }

    fn substitute_vars<F>(content: &str, lookup: F) -> Result<String>
    where
        F: Fn(&str) -> std::result::Result<String, VarError>,
    {
        let re = Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}")
            .map_err(|e| ShadowError::config(e.to_string()))?;

        let mut missing = Vec::new();
        let mut not_unicode = Vec::new();
        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            match lookup(var_name) {
                Ok(value) => value,
                Err(VarError::NotPresent) => {
                    missing.push(var_name.to_string());
                    String::new()
                }
                Err(VarError::NotUnicode(_)) => {
                    not_unicode.push(var_name.to_string());
                    String::new()
                }
            }
        });

        if !missing.is_empty() {
            return Err(ShadowError::config(format!(
                "undefined environment variable(s): {}",
                missing.join(", ")
            )));
        }
        if !not_unicode.is_empty() {
            return Err(ShadowError::config(format!(
                "environment variable(s) not valid Unicode: {}",
                not_unicode.join(", ")
            )));
        }
        Ok(result.into_owned())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(dir) = &self.resources.dir {
            validate_path("resources.dir", dir)?;
        }
        if let Some(level) = &self.logging.level {
            validate_one_of("logging.level", level, LOG_LEVELS)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[resources]
dir = "./assets"

[logging]
level = "debug"
format = "json"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.resources.dir.as_deref(), Some("./assets"));
        assert_eq!(config.logging.level.as_deref(), Some("debug"));
        assert_eq!(config.logging.format, Some(LogFormat::Json));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert!(config.resources.dir.is_none());
        assert!(config.logging.format.is_none());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("SHADOW_TEST_RESOURCE_DIR", "/opt/shadow");

        let content = "[resources]\ndir = \"${SHADOW_TEST_RESOURCE_DIR}\"\n";
        let config = TomlConfig::from_toml_str(content).unwrap();
        assert_eq!(config.resources.dir.as_deref(), Some("/opt/shadow"));

        std::env::remove_var("SHADOW_TEST_RESOURCE_DIR");
    }

    #[test]
    fn test_undefined_env_var_is_an_error() {
        let content = "[resources]\ndir = \"${SHADOW_TEST_NOT_SET_ANYWHERE}\"\n";
        let err = TomlConfig::from_toml_str(content).unwrap_err();
        assert!(err.to_string().contains("undefined"));
        assert!(err.to_string().contains("SHADOW_TEST_NOT_SET_ANYWHERE"));
    }

    #[test]
    fn test_non_unicode_env_var_is_reported_separately() {
        let lookup = |name: &str| match name {
            "GOOD" => Ok("fine".to_string()),
            _ => Err(VarError::NotUnicode(std::ffi::OsString::from("\u{fffd}"))),
        };

        let err = TomlConfig::substitute_vars("a = \"${GOOD}\"\nb = \"${BAD}\"\n", lookup)
            .unwrap_err();
        let message = err.to_string();
        assert!(message.contains("not valid Unicode: BAD"));
        assert!(!message.contains("undefined"));

        let ok = TomlConfig::substitute_vars("a = \"${GOOD}\"", lookup).unwrap();
        assert_eq!(ok, "a = \"fine\"");
    }

    #[test]
    fn test_config_validation() {
        let config = TomlConfig::from_toml_str("[logging]\nlevel = \"loud\"\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"[logging]\nformat = \"text\"\n").unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.logging.format, Some(LogFormat::Text));
    }
}
