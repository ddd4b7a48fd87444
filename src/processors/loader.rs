// pwa-icon-resize/src/processors/loader.rs
use crate::core::{ResizeError, Result};
use image::{DynamicImage, ImageReader};
use std::path::Path;

#[derive(Debug, Clone, Default)]
pub struct Loader;

impl Loader {
    pub fn new() -> Self {
        Self
    }

    pub fn load(&self, path: &Path) -> Result<DynamicImage> {
        log::debug!("Loading image from: {}", path.display());

        self.validate_path(path)?;

        let image = ImageReader::open(path)?
            .with_guessed_format()?
            .decode()
            .map_err(|e| ResizeError::Decode {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        log::info!(
            "Loaded image: {}x{} pixels, color: {:?}",
            image.width(),
            image.height(),
            image.color()
        );

        Ok(image)
    }

    fn validate_path(&self, path: &Path) -> Result<()> {
        if !path.is_file() {
            return Err(ResizeError::SourceNotFound(path.to_path_buf()));
        }

        if path.metadata()?.len() == 0 {
            return Err(ResizeError::Decode {
                path: path.to_path_buf(),
                reason: "file is empty".to_string(),
            });
        }

        Ok(())
    }
}
