use appicons_core::{
    config::AppConfig,
    converter::{self, install_hints},
    layout::Layout,
    pack, rasterize,
    sizes::{CONTAINER_CANDIDATES, SIZES},
};
use color_eyre::Section;

fn print_install_hints() {
    println!("Error: No suitable SVG to PNG converter found.");
    println!("Please install either:");
    for hint in install_hints() {
        println!("  - {}: {}", hint.package, hint.command);
    }
}

pub fn rasterize(layout: &Layout, maybe_config: eyre::Result<AppConfig>) -> eyre::Result<()> {
    let config = maybe_config?;
    match rasterize::rasterize(layout, SIZES, converter::candidates(&config)) {
        Ok(report) => {
            tracing::debug!(
                "{} of {} icons rendered with {}",
                report.succeeded().count(),
                report.rendered.len(),
                report.converter
            );
            Ok(())
        }
        Err(rasterize::Error::NoConverter(err)) => {
            print_install_hints();
            Err(err).suggestion(
                "install one of the converters listed above, or set imagemagick-binary or rsvg-binary in appicons.toml",
            )
        }
        Err(err) => Err(err.into()),
    }
}

pub fn pack(layout: &Layout) -> eyre::Result<()> {
    pack::pack(layout, CONTAINER_CANDIDATES)?;
    Ok(())
}

pub fn config(maybe_config: eyre::Result<AppConfig>) -> eyre::Result<()> {
    let config = maybe_config?;
    if let Some(source) = &config.source {
        tracing::debug!("configuration loaded from {}", source.display());
    }
    print!("{}", toml::to_string_pretty(&config)?);
    Ok(())
}

pub fn version(maybe_config: eyre::Result<AppConfig>) -> eyre::Result<()> {
    println!("appicons: {}", appicons_core::VERSION);

    let config = maybe_config?;
    for converter in converter::candidates(&config) {
        match converter.version_string() {
            Ok(version) => println!("{}: {}", converter.name(), version),
            Err(err) => println!("{}: not available ({})", converter.name(), err),
        }
    }
    Ok(())
}
