use crate::domain::ports::ResourceSource;
use crate::utils::error::{Result, ShadowError};
use std::fs;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

const BUNDLED: &[(&str, &str)] = &[(
    "shadowBanner.txt",
    include_str!("../../resources/shadowBanner.txt"),
)];

fn logical_name(path: &str) -> &str {
    path.trim_start_matches('/')
}

/// Resources compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedResources;

impl EmbeddedResources {
    pub fn new() -> Self {
        Self
    }
}

impl ResourceSource for EmbeddedResources {
    fn read_text(&self, path: &str) -> Result<String> {
        let name = logical_name(path);
        BUNDLED
            .iter()
            .find(|(bundled, _)| *bundled == name)
            .map(|(_, text)| text.to_string())
            .ok_or_else(|| ShadowError::resource_unavailable(path, "not bundled with this build"))
    }
}

/// Resources read at run time from a base directory.
#[derive(Debug, Clone)]
pub struct DirectoryResources {
    base_dir: PathBuf,
}

impl DirectoryResources {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    fn resolve(&self, path: &str) -> Result<PathBuf> {
        let relative = Path::new(logical_name(path));
        let stays_inside = relative.components().next().is_some()
            && relative
                .components()
                .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
        if !stays_inside {
            return Err(ShadowError::resource_unavailable(
                path,
                "path must be relative to the resource directory",
            ));
        }
        Ok(self.base_dir.join(relative))
    }
}

impl ResourceSource for DirectoryResources {
    fn read_text(&self, path: &str) -> Result<String> {
        let full_path = self.resolve(path)?;
        tracing::debug!("Reading resource {} from {}", path, full_path.display());

        fs::read_to_string(&full_path).map_err(|e| {
            let reason = match e.kind() {
                ErrorKind::NotFound => format!("{} does not exist", full_path.display()),
                ErrorKind::InvalidData => "content is not valid UTF-8".to_string(),
                _ => e.to_string(),
            };
            ShadowError::resource_unavailable(path, reason)
        })
    }
}
