//! Bitmap pixel sources.
//!
//! Pixel data is not part of the packed document; the build asks a
//! [`BitmapLoader`] for every project bitmap and embeds the result as C arrays.

use std::future::Future;

use fwgui_core::Bitmap;

/// Decoded bitmap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitmapData {
    pub width: u16,
    pub height: u16,
    pub pixels: Vec<u8>,
}

#[derive(Debug, thiserror::Error)]
pub enum BitmapError {
    #[error("bitmap `{0}` has no pixel data")]
    NotFound(String),

    #[error("failed to read bitmap `{name}`: {source}")]
    Io {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("bitmap `{name}` is invalid: {reason}")]
    InvalidFormat { name: String, reason: String },
}

/// Source of bitmap pixels.
pub trait BitmapLoader {
    fn load(&self, bitmap: &Bitmap) -> impl Future<Output = Result<BitmapData, BitmapError>>;
}

/// Serves the pixels embedded in the project file.
#[derive(Debug, Clone, Copy, Default)]
pub struct InlineBitmapLoader;

impl InlineBitmapLoader {
    pub fn load_sync(bitmap: &Bitmap) -> Result<BitmapData, BitmapError> {
        let pixels = bitmap
            .pixels
            .clone()
            .ok_or_else(|| BitmapError::NotFound(bitmap.name.clone()))?;
        let (width, height) = dimensions(bitmap)?;
        Ok(BitmapData {
            width,
            height,
            pixels,
        })
    }
}

impl BitmapLoader for InlineBitmapLoader {
    fn load(&self, bitmap: &Bitmap) -> impl Future<Output = Result<BitmapData, BitmapError>> {
        std::future::ready(Self::load_sync(bitmap))
    }
}

/// Width and height declared in the project.
pub fn dimensions(bitmap: &Bitmap) -> Result<(u16, u16), BitmapError> {
    match (bitmap.width, bitmap.height) {
        (Some(width), Some(height)) => Ok((width, height)),
        _ => Err(BitmapError::InvalidFormat {
            name: bitmap.name.clone(),
            reason: "width and height are required".to_string(),
        }),
    }
}
