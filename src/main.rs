use anyhow::Context;
use clap::Parser;
use log::LevelFilter;
use pwa_icon_resize::{format_file_size, Cli, IconResizer};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(if cli.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        })
        .parse_default_env()
        .init();

    let config = cli.to_config();
    let (width, height) = (config.width, config.height);

    let report = IconResizer::new(config).run().with_context(|| {
        format!(
            "failed to resize {} into {}",
            cli.input.display(),
            cli.output.display()
        )
    })?;

    log::debug!(
        "{}x{} ({}) -> {}x{} ({})",
        report.source_dimensions.0,
        report.source_dimensions.1,
        format_file_size(report.source_size),
        report.output_dimensions.0,
        report.output_dimensions.1,
        format_file_size(report.output_size)
    );

    println!("Successfully resized to {}x{}", width, height);

    Ok(())
}
