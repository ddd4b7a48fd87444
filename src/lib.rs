mod cli;
mod core;
mod processors;
mod utils;

pub use cli::Cli;
pub use crate::core::processor::IconResizer;
pub use crate::core::{
    ResizeConfig, ResizeError, ResizeReport, Result, DEFAULT_INPUT, DEFAULT_OUTPUT, TARGET_SIZE,
};
pub use processors::{Loader, Resizer, Writer};
pub use utils::{format_file_size, get_image_info, image_format_to_string};

// Re-export commonly used types
pub use image::DynamicImage;
