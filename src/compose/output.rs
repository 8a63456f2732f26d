use anyhow::Context;

use crate::foundation::error::{StudioError, StudioResult};

#[derive(Clone, Debug, PartialEq, Eq)]
/// Encoded render bytes plus the dimensions read from them.
pub struct RenderedImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Encoded image as returned by the service.
    pub bytes: Vec<u8>,
}

/// Decode the render service output far enough to confirm it is an image and read its size.
pub fn inspect_render(bytes: Vec<u8>) -> StudioResult<RenderedImage> {
    let img = image::load_from_memory(&bytes).context("decode rendered image")?;
    Ok(RenderedImage {
        width: img.width(),
        height: img.height(),
        bytes,
    })
}

/// Like [`inspect_render`], but also insist on the dimensions the service announced.
pub fn inspect_render_sized(bytes: Vec<u8>, width: u32, height: u32) -> StudioResult<RenderedImage> {
    let out = inspect_render(bytes)?;
    if (out.width, out.height) != (width, height) {
        return Err(StudioError::service(format!(
            "rendered image is {}x{}, expected {width}x{height}",
            out.width, out.height
        )));
    }
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/compose/output.rs"]
mod tests;
