// pwa-icon-resize/src/processors/writer.rs
use crate::core::{ResizeError, Result};
use crate::utils::image_format_to_string;
use image::codecs::jpeg::JpegEncoder;
use image::{ColorType, DynamicImage, ImageFormat};
use std::io::{BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Largest edge the ICO encoder accepts.
const ICO_MAX_DIMENSION: u32 = 256;

#[derive(Debug, Clone)]
pub struct Writer {
    quality: u8,
}

impl Writer {
    /// `quality` is passed to the JPEG encoder as is; `ResizeConfig::validate`
    /// keeps it within 1..=100.
    pub fn new(quality: u8) -> Self {
        Self { quality }
    }

    /// Encodes `image` in the format implied by the extension of `path` and
    /// replaces whatever is at `path`. Returns the size of the written file.
    pub fn save(&self, image: &DynamicImage, path: &Path) -> Result<u64> {
        let format = self.detect_format(path)?;

        if format == ImageFormat::Ico
            && (image.width() > ICO_MAX_DIMENSION || image.height() > ICO_MAX_DIMENSION)
        {
            return Err(ResizeError::UnsupportedFormat(format!(
                "ICO cannot hold a {}x{} image (max {}x{})",
                image.width(),
                image.height(),
                ICO_MAX_DIMENSION,
                ICO_MAX_DIMENSION
            )));
        }

        self.save_with_format(image, path, format)
    }

    pub fn save_with_format(
        &self,
        image: &DynamicImage,
        path: &Path,
        format: ImageFormat,
    ) -> Result<u64> {
        log::debug!(
            "Saving image to {} as {}",
            path.display(),
            image_format_to_string(format)
        );

        // The destination is only touched by the final rename.
        let mut staged = Self::stage(path)?;
        {
            let mut writer = BufWriter::new(staged.as_file_mut());
            match format {
                ImageFormat::Jpeg => self.encode_jpeg(image, &mut writer)?,
                _ => image.write_to(&mut writer, format)?,
            }
            writer.flush()?;
        }

        staged.persist(path).map_err(|e| ResizeError::Io(e.error))?;

        self.log_save_result(path)
    }

    /// Creates the temporary file the image is encoded into. It gets the mode of
    /// the file it replaces, or the umask default for a new file.
    fn stage(path: &Path) -> Result<NamedTempFile> {
        let mut builder = tempfile::Builder::new();
        builder.prefix(".pwa-icon-");

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            builder.permissions(std::fs::Permissions::from_mode(0o666));
        }

        let staged = builder.tempfile_in(Self::parent_dir(path))?;

        if let Ok(existing) = std::fs::metadata(path) {
            staged.as_file().set_permissions(existing.permissions())?;
        }

        Ok(staged)
    }

    fn encode_jpeg<W: Write>(&self, image: &DynamicImage, writer: &mut W) -> Result<()> {
        let encoder = JpegEncoder::new_with_quality(writer, self.quality);
        // JPEG has no alpha and no 16-bit samples.
        match image.color() {
            ColorType::L8 | ColorType::Rgb8 => image.write_with_encoder(encoder)?,
            _ => DynamicImage::ImageRgb8(image.to_rgb8()).write_with_encoder(encoder)?,
        }
        Ok(())
    }

    fn detect_format(&self, path: &Path) -> Result<ImageFormat> {
        let format = ImageFormat::from_path(path).map_err(|_| {
            ResizeError::UnsupportedFormat(format!(
                "cannot infer an image format from {}",
                path.display()
            ))
        })?;

        if !format.writing_enabled() {
            return Err(ResizeError::UnsupportedFormat(format!(
                "{} encoding is not available",
                image_format_to_string(format)
            )));
        }

        Ok(format)
    }

    fn parent_dir(path: &Path) -> &Path {
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    fn log_save_result(&self, path: &Path) -> Result<u64> {
        let file_size = std::fs::metadata(path)?.len();
        log::info!("Saved image: {} ({} bytes)", path.display(), file_size);
        Ok(file_size)
    }
}
