// Writes the surface to disk as an uncompressed BMP.
// Visual: nothing changes on screen; `paint.bmp` appears next to the binary.

use crate::error::Error;
use crate::types::FrameBuffer;
use image::{ImageBuffer, ImageFormat, Rgb, RgbImage};
use std::path::Path;

/// Unpack 0x00RRGGBB pixels into an RGB image.
pub fn to_rgb_image(fb: &FrameBuffer) -> RgbImage {
    ImageBuffer::from_fn(fb.width as u32, fb.height as u32, |x, y| {
        let px = fb.pixel(x as i32, y as i32).unwrap_or(0);
        Rgb([((px >> 16) & 0xFF) as u8, ((px >> 8) & 0xFF) as u8, (px & 0xFF) as u8])
    })
}

/// Save the surface as BMP, overwriting whatever is at `path`.
pub fn save_bitmap(fb: &FrameBuffer, path: impl AsRef<Path>) -> Result<(), Error> {
    let path = path.as_ref();
    to_rgb_image(fb)
        .save_with_format(path, ImageFormat::Bmp)
        .map_err(|e| Error::Save { path: path.display().to_string(), reason: e.to_string() })
}
