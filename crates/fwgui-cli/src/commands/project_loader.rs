use std::fs;
use std::future::Future;
use std::path::{Path, PathBuf};

use fwgui_compiler::bitmap::{self, BitmapData, BitmapError, BitmapLoader, InlineBitmapLoader};
use fwgui_compiler::BuildConfig;
use fwgui_core::{Bitmap, Project, ProjectError};

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("'{path}': {source}")]
    Project {
        path: PathBuf,
        #[source]
        source: ProjectError,
    },

    #[error("invalid config '{path}': {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub fn load_project(path: &Path) -> Result<Project, LoadError> {
    let content = read(path)?;
    fwgui_core::parse_project(&content).map_err(|source| LoadError::Project {
        path: path.to_path_buf(),
        source,
    })
}

pub fn load_config(path: Option<&Path>) -> Result<BuildConfig, LoadError> {
    let Some(path) = path else {
        return Ok(BuildConfig::default());
    };
    let content = read(path)?;
    BuildConfig::from_json(&content).map_err(|source| LoadError::Config {
        path: path.to_path_buf(),
        source,
    })
}

fn read(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads bitmap pixels from files next to the project.
///
/// Bitmaps with an `image` path load that file as raw pixel bytes; the
/// project must still declare `width` and `height`. Bitmaps without one fall
/// back to the pixels embedded in the project.
pub struct FileBitmapLoader {
    base_dir: PathBuf,
}

impl FileBitmapLoader {
    pub fn for_project(project_path: &Path) -> Self {
        let base_dir = project_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        Self { base_dir }
    }

    async fn load_file(&self, bitmap: &Bitmap, image: &str) -> Result<BitmapData, BitmapError> {
        let (width, height) = bitmap::dimensions(bitmap)?;
        let path = self.base_dir.join(image);
        log::debug!("reading bitmap `{}` from {}", bitmap.name, path.display());
        let pixels = tokio::fs::read(&path)
            .await
            .map_err(|source| BitmapError::Io {
                name: bitmap.name.clone(),
                source,
            })?;
        if pixels.is_empty() {
            return Err(BitmapError::InvalidFormat {
                name: bitmap.name.clone(),
                reason: format!("{} is empty", path.display()),
            });
        }
        Ok(BitmapData {
            width,
            height,
            pixels,
        })
    }
}

impl BitmapLoader for FileBitmapLoader {
    fn load(&self, bitmap: &Bitmap) -> impl Future<Output = Result<BitmapData, BitmapError>> {
        async move {
            match bitmap.image.as_deref().filter(|image| !image.is_empty()) {
                Some(image) => self.load_file(bitmap, image).await,
                None => InlineBitmapLoader::load_sync(bitmap),
            }
        }
    }
}
