//! Decoded images and the path-keyed cache the window loads them through.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use image::imageops::FilterType;
use image::{Rgba, RgbaImage};
use rustc_hash::FxHashMap;

use crate::ui::core::style::Color;

/// RGBA raster with a scaled-copy operation.
#[derive(Clone, Debug, PartialEq)]
pub struct Raster {
    pixels: RgbaImage,
}

impl Raster {
    /// `data` is row-major RGBA, `width * height * 4` bytes.
    pub fn from_rgba(width: u32, height: u32, data: Vec<u8>) -> Option<Self> {
        RgbaImage::from_raw(width, height, data).map(|pixels| Self { pixels })
    }

    pub fn solid(width: u32, height: u32, color: Color) -> Self {
        Self {
            pixels: RgbaImage::from_pixel(width, height, Rgba([color.r, color.g, color.b, 255])),
        }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Colour and alpha at `(x, y)`.
    pub fn pixel(&self, x: u32, y: u32) -> Option<(Color, u8)> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        let Rgba([r, g, b, a]) = *self.pixels.get_pixel(x, y);
        Some((Color::rgb(r, g, b), a))
    }

    /// Smoothly resampled copy; zero dimensions are raised to one pixel.
    pub fn scaled(&self, width: u32, height: u32) -> Raster {
        Raster {
            pixels: image::imageops::resize(
                &self.pixels,
                width.max(1),
                height.max(1),
                FilterType::Triangle,
            ),
        }
    }
}

#[derive(Debug)]
pub enum ImageError {
    NotFound(PathBuf),
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },
}

impl ImageError {
    pub fn path(&self) -> &Path {
        match self {
            ImageError::NotFound(path) => path,
            ImageError::Decode { path, .. } => path,
        }
    }
}

impl fmt::Display for ImageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageError::NotFound(path) => write!(f, "image not found: {}", path.display()),
            ImageError::Decode { path, source } => {
                write!(f, "cannot decode image {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for ImageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ImageError::NotFound(_) => None,
            ImageError::Decode { source, .. } => Some(source),
        }
    }
}

/// Image decoding capability.
pub trait ImageLoader {
    fn load(&self, path: &Path) -> Result<Raster, ImageError>;
}

/// Decodes files with the `image` crate (bmp, png, jpeg).
#[derive(Debug, Default, Clone, Copy)]
pub struct FsImageLoader;

impl ImageLoader for FsImageLoader {
    fn load(&self, path: &Path) -> Result<Raster, ImageError> {
        if !path.is_file() {
            return Err(ImageError::NotFound(path.to_path_buf()));
        }
        let decoded = image::open(path).map_err(|source| ImageError::Decode {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Raster {
            pixels: decoded.to_rgba8(),
        })
    }
}

/// Loads each path once.
pub struct ImageCache {
    loader: Box<dyn ImageLoader>,
    images: FxHashMap<PathBuf, Arc<Raster>>,
}

impl ImageCache {
    pub fn new(loader: Box<dyn ImageLoader>) -> Self {
        Self {
            loader,
            images: FxHashMap::default(),
        }
    }

    pub fn get(&mut self, path: &Path) -> Result<Arc<Raster>, ImageError> {
        if let Some(image) = self.images.get(path) {
            return Ok(image.clone());
        }
        let image = Arc::new(self.loader.load(path)?);
        tracing::debug!(
            path = %path.display(),
            width = image.width(),
            height = image.height(),
            "image loaded"
        );
        self.images.insert(path.to_path_buf(), image.clone());
        Ok(image)
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

impl Default for ImageCache {
    fn default() -> Self {
        Self::new(Box::new(FsImageLoader))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/ui/image.rs"]
mod tests;
