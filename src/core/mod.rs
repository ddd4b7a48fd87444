// pwa-icon-resize/src/core/mod.rs
pub mod processor;

use std::path::PathBuf;
use thiserror::Error;

pub const DEFAULT_INPUT: &str = "public/pwa-192x192.png";
pub const DEFAULT_OUTPUT: &str = "public/pwa-512x512.png";
pub const TARGET_SIZE: u32 = 512;

const MAX_DIMENSION: u32 = 100_000;

#[derive(Debug, Clone)]
pub struct ResizeConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub width: u32,
    pub height: u32,
    /// Only used when the output extension selects JPEG.
    pub quality: u8,
    /// Source size the icon is expected to have. A mismatch is logged, not rejected.
    pub expected_source: Option<(u32, u32)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizeReport {
    pub source_dimensions: (u32, u32),
    pub output_dimensions: (u32, u32),
    pub source_size: u64,
    pub output_size: u64,
}

impl Default for ResizeConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            width: TARGET_SIZE,
            height: TARGET_SIZE,
            quality: 90,
            expected_source: Some((192, 192)),
        }
    }
}

impl ResizeConfig {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(ResizeError::InvalidParameter(
                "Target width and height must both be non-zero".to_string(),
            ));
        }

        if self.width > MAX_DIMENSION || self.height > MAX_DIMENSION {
            return Err(ResizeError::InvalidParameter(
                "Dimensions too large (max 100,000 pixels)".to_string(),
            ));
        }

        if self.quality == 0 || self.quality > 100 {
            return Err(ResizeError::InvalidParameter(
                "Quality must be between 1 and 100".to_string(),
            ));
        }

        Ok(())
    }
}

#[derive(Error, Debug)]
pub enum ResizeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Source image not found: {}", .0.display())]
    SourceNotFound(PathBuf),

    #[error("Failed to decode {}: {reason}", path.display())]
    Decode { path: PathBuf, reason: String },

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Unsupported output format: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

pub type Result<T> = std::result::Result<T, ResizeError>;
