use crate::{
    converter::{self, select_converter, Converter, NoConverterAvailable},
    layout::Layout,
    sizes::SizeEntry,
};
use owo_colors::OwoColorize;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("SVG file not found at {}", .0.display())]
    MissingSource(PathBuf),
    #[error(transparent)]
    NoConverter(#[from] NoConverterAvailable),
    #[error("failed to create icons directory {}", .0.display())]
    CreateDir(PathBuf, #[source] std::io::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum EntryError {
    #[error(transparent)]
    Converter(#[from] converter::Error),
    #[error("could not remove previous {}", .0.display())]
    RemovePrevious(PathBuf, #[source] std::io::Error),
    #[error("converter did not write {}", .0.display())]
    MissingOutput(PathBuf),
    #[error("could not read rendered image")]
    UnreadableOutput(#[source] image::ImageError),
    #[error("rendered {width}x{height} instead of {expected}x{expected}")]
    WrongDimensions {
        expected: u32,
        width: u32,
        height: u32,
    },
}

#[derive(Debug)]
pub struct Rendered {
    pub entry: SizeEntry,
    pub output: PathBuf,
    pub result: Result<(), EntryError>,
}

#[derive(Debug)]
pub struct RasterReport {
    pub converter: &'static str,
    pub icons_dir: PathBuf,
    pub rendered: Vec<Rendered>,
}

impl RasterReport {
    pub fn succeeded(&self) -> impl Iterator<Item = &Rendered> {
        self.rendered.iter().filter(|r| r.result.is_ok())
    }

    pub fn failed(&self) -> impl Iterator<Item = &Rendered> {
        self.rendered.iter().filter(|r| r.result.is_err())
    }
}

/// Renders the source SVG into one PNG per size entry.
///
/// A missing source or the absence of any working converter aborts before anything is written.
/// After that every entry is attempted: a failed entry is reported and the run goes on with the
/// next one.
pub fn rasterize(
    layout: &Layout,
    sizes: &[SizeEntry],
    candidates: Vec<Box<dyn Converter>>,
) -> Result<RasterReport, Error> {
    let source = layout.source();
    if !source.is_file() {
        return Err(Error::MissingSource(source));
    }

    let converter = select_converter(candidates)?;
    let icons_dir = layout.icons_dir();
    std::fs::create_dir_all(&icons_dir).map_err(|e| Error::CreateDir(icons_dir.clone(), e))?;

    println!("Generating PNG icons with {}...", converter.name());
    let mut rendered = Vec::with_capacity(sizes.len());
    for entry in sizes {
        let output = layout.raster(entry.filename);
        println!("  Generating {}...", entry);
        let result = render(converter.as_ref(), &source, &output, entry.size);
        match &result {
            Ok(()) => println!("    {} {}", "✓".green(), entry.filename),
            Err(err) => {
                tracing::debug!("{:?}", err);
                println!(
                    "    {} Failed to generate {}: {}",
                    "✗".red(),
                    entry.filename,
                    display_chain(err)
                );
            }
        }
        rendered.push(Rendered {
            entry: *entry,
            output,
            result,
        });
    }

    let report = RasterReport {
        converter: converter.name(),
        icons_dir,
        rendered,
    };
    let failed = report.failed().count();
    println!();
    if failed == 0 {
        println!("Icon generation complete!");
    } else {
        println!(
            "Icon generation complete, {} of {} icons failed.",
            failed.red(),
            report.rendered.len()
        );
    }
    println!("Icons saved to: {}", report.icons_dir.display());
    Ok(report)
}

fn render(
    converter: &dyn Converter,
    source: &Path,
    output: &Path,
    size: u32,
) -> Result<(), EntryError> {
    // a file left over from an earlier run must not pass for this run's output
    match std::fs::remove_file(output) {
        Ok(()) => tracing::debug!("removed previous {}", output.display()),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
        Err(err) => return Err(EntryError::RemovePrevious(output.to_owned(), err)),
    }
    converter.convert(source, output, size)?;
    if !output.is_file() {
        return Err(EntryError::MissingOutput(output.to_owned()));
    }
    let (width, height) = image::image_dimensions(output).map_err(EntryError::UnreadableOutput)?;
    if (width, height) != (size, size) {
        return Err(EntryError::WrongDimensions {
            expected: size,
            width,
            height,
        });
    }
    Ok(())
}

fn display_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(err) = source {
        message.push_str(": ");
        message.push_str(&err.to_string());
        source = err.source();
    }
    message
}
