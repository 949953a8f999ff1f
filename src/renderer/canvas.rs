//! Raster canvas the histogram is drawn onto

use std::io::{BufWriter, Write};
use std::path::Path;

use image::{ImageFormat, Rgb, RgbImage};
use tempfile::NamedTempFile;

use crate::error::{GaltonError, GaltonResult};

/// Minimal drawing surface needed by the histogram renderer
pub trait Canvas {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Paint the whole canvas
    fn fill(&mut self, color: Rgb<u8>);

    /// Paint columns `[x0, x1)` and rows `[y0, y1)`, clipped to the canvas
    fn fill_rect(&mut self, x0: u32, y0: u32, x1: u32, y1: u32, color: Rgb<u8>);
}

/// In-memory RGB canvas backed by `image`
#[derive(Debug, Clone)]
pub struct RgbCanvas {
    image: RgbImage,
}

impl RgbCanvas {
    pub fn new(width: u32, height: u32, fill: Rgb<u8>) -> Self {
        Self {
            image: RgbImage::from_pixel(width, height, fill),
        }
    }

    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    pub fn pixel(&self, x: u32, y: u32) -> Rgb<u8> {
        *self.image.get_pixel(x, y)
    }

    /// Encode to `path`, choosing the format from its extension.
    ///
    /// The image is written to a uniquely named temp file in the same
    /// directory and persisted over `path`, so a failed encode never leaves a
    /// truncated file there and concurrent saves never share a temp file.
    pub fn save(&self, path: impl AsRef<Path>) -> GaltonResult<()> {
        let path = path.as_ref();
        let format = ImageFormat::from_path(path).map_err(|source| GaltonError::Image {
            path: path.to_path_buf(),
            source,
        })?;
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut tmp = NamedTempFile::new_in(dir).map_err(|e| GaltonError::io(path, e))?;
        {
            let mut writer = BufWriter::new(tmp.as_file_mut());
            self.image
                .write_to(&mut writer, format)
                .map_err(|source| GaltonError::Image {
                    path: path.to_path_buf(),
                    source,
                })?;
            writer.flush().map_err(|e| GaltonError::io(path, e))?;
        }
        tmp.persist(path).map_err(|e| GaltonError::io(path, e.error))?;
        Ok(())
    }
}

impl Canvas for RgbCanvas {
    fn width(&self) -> u32 {
        self.image.width()
    }

    fn height(&self) -> u32 {
        self.image.height()
    }

    fn fill(&mut self, color: Rgb<u8>) {
        for pixel in self.image.pixels_mut() {
            *pixel = color;
        }
    }

    fn fill_rect(&mut self, x0: u32, y0: u32, x1: u32, y1: u32, color: Rgb<u8>) {
        let x1 = x1.min(self.image.width());
        let y1 = y1.min(self.image.height());
        for y in y0..y1 {
            for x in x0..x1 {
                self.image.put_pixel(x, y, color);
            }
        }
    }
}
