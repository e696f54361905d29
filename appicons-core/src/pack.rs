use crate::layout::Layout;
use image::{
    codecs::ico::{IcoEncoder, IcoFrame},
    ExtendedColorType,
};
use std::{
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

/// ICO directory entries store each edge in one byte, with 0 meaning 256.
const MAX_EDGE: u32 = 256;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read {}", .0.display())]
    Decode(PathBuf, #[source] image::ImageError),
    #[error("{} is {width}x{height}, icon containers hold at most 256x256", .path.display())]
    UnsupportedSize {
        path: PathBuf,
        width: u32,
        height: u32,
    },
    #[error("failed to encode {}", .0.display())]
    Encode(PathBuf, #[source] image::ImageError),
    #[error("i/o error writing {}", .0.display())]
    Io(PathBuf, #[source] std::io::Error),
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct PackedImage {
    pub filename: &'static str,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct PackReport {
    pub images: Vec<PackedImage>,
    /// the written container, `None` if no candidate existed
    pub container: Option<PathBuf>,
}

/// Packs the candidates that exist, in the given order, into the project's ICO container. Each
/// frame declares the dimensions of the PNG it was made from.
pub fn pack(layout: &Layout, candidates: &[&'static str]) -> Result<PackReport, Error> {
    let mut images = Vec::new();
    let mut frames = Vec::new();
    for &filename in candidates {
        let path = layout.raster(filename);
        if !path.is_file() {
            tracing::debug!("skipping missing {}", path.display());
            continue;
        }
        let (image, frame) = load_frame(filename, path)?;
        println!("Added {}", filename);
        images.push(image);
        frames.push(frame);
    }

    if frames.is_empty() {
        println!("No PNG files found!");
        return Ok(PackReport {
            images,
            container: None,
        });
    }

    let container = layout.container();
    write_container(&container, &frames)?;
    println!("Created {}", container.display());
    Ok(PackReport {
        images,
        container: Some(container),
    })
}

fn load_frame(
    filename: &'static str,
    path: PathBuf,
) -> Result<(PackedImage, IcoFrame<'static>), Error> {
    let rgba = image::open(&path)
        .map_err(|e| Error::Decode(path.clone(), e))?
        .to_rgba8();
    let (width, height) = rgba.dimensions();
    if width > MAX_EDGE || height > MAX_EDGE {
        return Err(Error::UnsupportedSize {
            path,
            width,
            height,
        });
    }
    let frame = IcoFrame::as_png(rgba.as_raw(), width, height, ExtendedColorType::Rgba8)
        .map_err(|e| Error::Encode(path, e))?;
    Ok((
        PackedImage {
            filename,
            width,
            height,
        },
        frame,
    ))
}

fn write_container(path: &Path, frames: &[IcoFrame<'_>]) -> Result<(), Error> {
    let file = std::fs::File::create(path).map_err(|e| Error::Io(path.to_owned(), e))?;
    let mut writer = BufWriter::new(file);
    IcoEncoder::new(&mut writer)
        .encode_images(frames)
        .map_err(|e| Error::Encode(path.to_owned(), e))?;
    writer.flush().map_err(|e| Error::Io(path.to_owned(), e))?;
    Ok(())
}
