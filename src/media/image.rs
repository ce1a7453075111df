// SPDX-License-Identifier: MPL-2.0
//! Image loading and decoding for comparison layers.

use crate::domain::slider::{Layer, LayerStack};
use crate::error::{Error, Result};
use iced::widget::image;
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
    /// Original RGBA bytes for compositing.
    /// Stored in Arc to avoid expensive cloning.
    rgba_bytes: Arc<Vec<u8>>,
}

impl ImageData {
    /// Creates a new `ImageData` from RGBA pixels.
    ///
    /// The pixels are stored in an Arc for shared ownership, and a copy is
    /// made for the Handle.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        let rgba_bytes = Arc::new(pixels);
        let handle = image::Handle::from_rgba(width, height, rgba_bytes.to_vec());
        Self {
            handle,
            width,
            height,
            rgba_bytes,
        }
    }

    /// Returns a reference to the original RGBA bytes.
    pub fn rgba_bytes(&self) -> &[u8] {
        &self.rgba_bytes
    }

    /// Returns a copy resized to exactly `width` x `height`, or a cheap
    /// clone when the dimensions already match.
    ///
    /// # Panics
    ///
    /// Panics if the internal RGBA bytes are invalid (should never happen
    /// as bytes are validated at construction).
    #[must_use]
    pub fn conformed_to(&self, width: u32, height: u32) -> Self {
        if self.width == width && self.height == height {
            return self.clone();
        }

        let buffer = image_rs::RgbaImage::from_raw(
            self.width,
            self.height,
            self.rgba_bytes.to_vec(),
        )
        .expect("ImageData held invalid RGBA bytes");

        let resized = image_rs::imageops::resize(
            &buffer,
            width,
            height,
            image_rs::imageops::FilterType::Lanczos3,
        );

        Self::from_rgba(width, height, resized.into_raw())
    }
}

/// Decodes the image at `path` into RGBA pixel data.
pub fn load_image(path: &Path) -> Result<ImageData> {
    let decoded = image_rs::open(path)?;
    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(ImageData::from_rgba(width, height, rgba.into_raw()))
}

/// Loads every path as a layer and assembles a validated stack.
///
/// Decoding happens on a blocking worker so the UI loop stays responsive.
pub async fn load_stack(paths: Vec<PathBuf>) -> Result<LayerStack> {
    tokio::task::spawn_blocking(move || build_stack(&paths))
        .await
        .map_err(|err| Error::Io(err.to_string()))?
}

/// Decodes each path into a layer and validates the stack.
///
/// Layer identifiers and labels derive from the file stem; all layers are
/// conformed to the first layer's resolution so the compositor can copy
/// pixel columns directly.
fn build_stack(paths: &[PathBuf]) -> Result<LayerStack> {
    let mut layers = Vec::with_capacity(paths.len());

    for (index, path) in paths.iter().enumerate() {
        let image = load_image(path)?;
        let stem = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned());
        let id = stem
            .clone()
            .unwrap_or_else(|| format!("layer-{}", index + 1));
        layers.push(Layer::new(id, image, stem));
    }

    LayerStack::new(layers)
}
