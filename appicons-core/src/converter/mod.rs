//! External SVG to PNG converters.
//!
//! Each converter wraps one command-line program. The rasterizer picks the first converter whose
//! probe succeeds and does everything else through the [`Converter`] trait.

use crate::config::AppConfig;
use std::path::Path;

pub use imagemagick::ImageMagick;
pub use program::Program;
pub use rsvg::Rsvg;

mod imagemagick;
mod program;
mod rsvg;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to set up shell")]
    Shell(#[source] xshell::Error),
    #[error("{program} is not available")]
    Unavailable {
        program: &'static str,
        #[source]
        source: xshell::Error,
    },
    #[error("{program} failed")]
    Failed {
        program: &'static str,
        #[source]
        source: xshell::Error,
    },
    #[error("couldn't determine {program} version from output")]
    NoVersion { program: &'static str },
}

#[derive(Debug, thiserror::Error)]
#[error("no suitable SVG to PNG converter found (tried {})", .tried.join(", "))]
pub struct NoConverterAvailable {
    pub tried: Vec<&'static str>,
}

pub trait Converter {
    fn name(&self) -> &'static str;

    /// Checks that the converter program can be started and answers its version query.
    fn probe(&self) -> Result<(), Error>;

    fn version_string(&self) -> Result<String, Error>;

    /// Renders `source` into a square PNG of `size` pixels with a transparent background.
    fn convert(&self, source: &Path, output: &Path, size: u32) -> Result<(), Error>;
}

/// The known converters in order of preference.
pub fn candidates(config: &AppConfig) -> Vec<Box<dyn Converter>> {
    vec![
        Box::new(ImageMagick::new(&config.imagemagick_binary, config.density)),
        Box::new(Rsvg::new(&config.rsvg_binary)),
    ]
}

pub fn select_converter(
    candidates: Vec<Box<dyn Converter>>,
) -> Result<Box<dyn Converter>, NoConverterAvailable> {
    let mut tried = Vec::with_capacity(candidates.len());
    for converter in candidates {
        match converter.probe() {
            Ok(()) => {
                tracing::debug!("using converter {}", converter.name());
                return Ok(converter);
            }
            Err(err) => {
                tracing::debug!("converter {} unavailable: {}", converter.name(), err);
                tried.push(converter.name());
            }
        }
    }
    Err(NoConverterAvailable { tried })
}

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct InstallHint {
    pub package: &'static str,
    pub command: &'static str,
}

#[cfg(target_os = "macos")]
const INSTALL_HINTS: &[InstallHint] = &[
    InstallHint {
        package: "ImageMagick",
        command: "brew install imagemagick",
    },
    InstallHint {
        package: "librsvg",
        command: "brew install librsvg",
    },
];

#[cfg(windows)]
const INSTALL_HINTS: &[InstallHint] = &[
    InstallHint {
        package: "ImageMagick",
        command: "winget install ImageMagick.ImageMagick",
    },
    InstallHint {
        package: "librsvg",
        command: "choco install rsvg-convert",
    },
];

#[cfg(not(any(target_os = "macos", windows)))]
const INSTALL_HINTS: &[InstallHint] = &[
    InstallHint {
        package: "ImageMagick",
        command: "sudo apt install imagemagick (or: sudo dnf install ImageMagick)",
    },
    InstallHint {
        package: "librsvg",
        command: "sudo apt install librsvg2-bin (or: sudo dnf install librsvg2-tools)",
    },
];

/// How to install one of the supported converters on this platform.
pub fn install_hints() -> &'static [InstallHint] {
    INSTALL_HINTS
}
