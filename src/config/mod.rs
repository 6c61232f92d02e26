pub mod toml_config;

use crate::adapters::{DirectoryResources, EmbeddedResources};
use crate::domain::ports::ResourceSource;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
use crate::core::knows::KnowsTask;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};
#[cfg(feature = "cli")]
use clap::Parser;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "knows")]
#[command(about = "Do you know who knows?")]
pub struct CliConfig {
    /// Task to run
    #[arg(default_value = KnowsTask::NAME)]
    pub task: String,

    /// List the available tasks instead of running one
    #[arg(long)]
    pub list: bool,

    /// Print the task list as JSON
    #[arg(long, requires = "list")]
    pub json: bool,

    /// Read resources from this directory instead of the bundled copies
    #[arg(long)]
    pub resource_dir: Option<PathBuf>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(long, value_enum)]
    pub log_format: Option<LogFormat>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(dir) = &self.resource_dir {
            validate_path("--resource-dir", &dir.to_string_lossy())?;
        }
        validate_non_empty_string("task", &self.task)
    }
}

/// Effective settings after merging the config file with command-line flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub resource_dir: Option<PathBuf>,
    pub log_level: Option<String>,
    pub log_format: LogFormat,
}

impl Settings {
    /// Command-line values take precedence over file values.
    pub fn merge(
        file: Option<&TomlConfig>,
        resource_dir: Option<PathBuf>,
        log_format: Option<LogFormat>,
    ) -> Self {
        let file_dir = file
            .and_then(|c| c.resources.dir.as_ref())
            .map(PathBuf::from);
        Self {
            resource_dir: resource_dir.or(file_dir),
            log_level: file.and_then(|c| c.logging.level.clone()),
            log_format: log_format
                .or_else(|| file.and_then(|c| c.logging.format))
                .unwrap_or_default(),
        }
    }

    #[cfg(feature = "cli")]
    pub fn from_cli(cli: &CliConfig) -> Result<Self> {
        let file = cli.config.as_ref().map(TomlConfig::from_file).transpose()?;
        if let Some(file) = &file {
            file.validate()?;
        }
        Ok(Self::merge(
            file.as_ref(),
            cli.resource_dir.clone(),
            cli.log_format,
        ))
    }

    pub fn resource_source(&self) -> Box<dyn ResourceSource> {
        match &self.resource_dir {
            Some(dir) => Box::new(DirectoryResources::new(dir)),
            None => Box::new(EmbeddedResources::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_overrides_file() {
        let file = TomlConfig::from_toml_str(
            "[resources]\ndir = \"from-file\"\n[logging]\nformat = \"json\"\nlevel = \"warn\"\n",
        )
        .unwrap();

        let settings = Settings::merge(Some(&file), Some(PathBuf::from("from-cli")), None);
        assert_eq!(settings.resource_dir, Some(PathBuf::from("from-cli")));
        assert_eq!(settings.log_format, LogFormat::Json);
        assert_eq!(settings.log_level.as_deref(), Some("warn"));

        let settings = Settings::merge(Some(&file), None, Some(LogFormat::Text));
        assert_eq!(settings.resource_dir, Some(PathBuf::from("from-file")));
        assert_eq!(settings.log_format, LogFormat::Text);
    }

    #[test]
    fn test_defaults_use_bundled_resources() {
        let settings = Settings::merge(None, None, None);
        assert_eq!(settings, Settings::default());
        assert!(settings
            .resource_source()
            .read_text(crate::core::knows::BANNER_RESOURCE)
            .is_ok());
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_cli_parsing() {
        let cli = CliConfig::try_parse_from(["knows"]).unwrap();
        assert_eq!(cli.task, "knows");
        assert!(!cli.list);

        let cli = CliConfig::try_parse_from([
            "knows",
            "--list",
            "--json",
            "--resource-dir",
            "assets",
            "--log-format",
            "json",
        ])
        .unwrap();
        assert!(cli.list && cli.json);
        assert_eq!(cli.resource_dir, Some(PathBuf::from("assets")));
        assert_eq!(cli.log_format, Some(LogFormat::Json));
        assert!(cli.validate().is_ok());

        assert!(CliConfig::try_parse_from(["knows", "--json"]).is_err());
    }
}
