pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{DirectoryResources, EmbeddedResources, MemorySink, TracingSink};
pub use config::{toml_config::TomlConfig, LogFormat, Settings};
pub use core::{knows::KnowsTask, registry::TaskRegistry};
pub use domain::model::TaskInfo;
pub use domain::ports::{LogSink, ResourceSource, Task, TaskContext};
pub use utils::error::{Result, ShadowError};
