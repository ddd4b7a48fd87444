// pwa-icon-resize/src/processors/mod.rs
mod loader;
mod resizer;
mod writer;

pub use loader::Loader;
pub use resizer::Resizer;
pub use writer::Writer;
