// pwa-icon-resize/src/core/processor.rs
use super::{ResizeConfig, ResizeReport, Result};
use crate::processors::{Loader, Resizer, Writer};

pub struct IconResizer {
    config: ResizeConfig,
    loader: Loader,
    resizer: Resizer,
    writer: Writer,
}

impl IconResizer {
    pub fn new(config: ResizeConfig) -> Self {
        let writer = Writer::new(config.quality);

        Self {
            config,
            loader: Loader::new(),
            resizer: Resizer::new(),
            writer,
        }
    }

    /// Loads the source, resamples it to the configured size and replaces the output file.
    ///
    /// Nothing is written unless the source decodes, so a failed run never leaves a
    /// partial or truncated output behind.
    pub fn run(&self) -> Result<ResizeReport> {
        self.config.validate()?;

        let input = self.config.input.as_path();
        let output = self.config.output.as_path();

        let image = self.loader.load(input)?;
        let source_dimensions = (image.width(), image.height());
        let source_size = std::fs::metadata(input)?.len();

        if let Some(expected) = self.config.expected_source {
            if expected != source_dimensions {
                log::warn!(
                    "{} is {}x{}, expected {}x{}; resizing anyway",
                    input.display(),
                    source_dimensions.0,
                    source_dimensions.1,
                    expected.0,
                    expected.1
                );
            }
        }

        let resized = self
            .resizer
            .resize_exact(&image, self.config.width, self.config.height);
        drop(image);

        let output_size = self.writer.save(&resized, output)?;

        Ok(ResizeReport {
            source_dimensions,
            output_dimensions: (resized.width(), resized.height()),
            source_size,
            output_size,
        })
    }
}
