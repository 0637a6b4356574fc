// Framed export: the artwork matted into a bordered frame with its hash.
//
// A finished raster is centered inside a fixed-width white frame with a
// one-pixel light-gray border around the artwork rect and the first
// twelve hash characters stamped in the lower-left of the frame. File
// output goes through the `image` crate (PNG or JPEG).

use std::error::Error;
use std::path::Path;

use glyph_canvas_raster::{Surface, draw_text};

use crate::color::{BORDER, INK, PAPER};

/// Frame width around the artwork, in pixels.
pub const FRAME_WIDTH: u32 = 32;

/// Output encodings supported by the exporter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Png,
    Jpg,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpg => "jpg",
        }
    }

    fn image_format(self) -> image::ImageFormat {
        match self {
            Self::Png => image::ImageFormat::Png,
            Self::Jpg => image::ImageFormat::Jpeg,
        }
    }
}

/// Mat the artwork into its frame and stamp the hash.
pub fn framed(artwork: &Surface, hash: &str) -> Surface {
    let total = artwork.size() + FRAME_WIDTH * 2;
    let mut out = Surface::new(total, PAPER);

    // Border sits one pixel outside the artwork rect.
    out.stroke_rect(
        i64::from(FRAME_WIDTH) - 1,
        i64::from(FRAME_WIDTH) - 1,
        i64::from(artwork.size()) + 2,
        i64::from(artwork.size()) + 2,
        BORDER,
        1.0,
    );
    out.blit(artwork, FRAME_WIDTH, FRAME_WIDTH);

    let stamp: String = hash.chars().take(12).collect();
    draw_text(
        &mut out,
        &stamp,
        f64::from(FRAME_WIDTH) + 8.0,
        f64::from(total) - 18.0,
        10.0,
        INK,
        1.0,
    );
    out
}

/// Filename for a single export: `{prefix}-{hash8}.{ext}`.
pub fn single_filename(prefix: &str, hash: &str, format: ExportFormat) -> String {
    let frag: String = hash.chars().take(8).collect();
    format!("{prefix}-{frag}.{}", format.extension())
}

/// Filename for one batch item: `{prefix}-{index:03}-{hash8}.{ext}`.
pub fn batch_filename(prefix: &str, index: usize, hash: &str, format: ExportFormat) -> String {
    let frag: String = hash.chars().take(8).collect();
    format!("{prefix}-{index:03}-{frag}.{}", format.extension())
}

/// Encode a surface to disk.
pub fn save_surface(surface: &Surface, path: &Path, format: ExportFormat) -> Result<(), Box<dyn Error>> {
    let image = image::RgbImage::from_raw(surface.size(), surface.size(), surface.data().to_vec())
        .ok_or("raster buffer does not match its declared size")?;
    image::DynamicImage::ImageRgb8(image).save_with_format(path, format.image_format())?;
    Ok(())
}
