// Color scheme policy shared by the pattern generators.
//
// Exact RGB values are design constants. Each scheme has a draw-call rule:
// Monochrome is a fixed near-black ink and consumes no RNG draw;
// Grayscale picks a random gray (one draw); Accent is ink with a
// saturated-red flash past a threshold. The flash threshold is a
// per-generator tuning constant (each generator passes its own), not a
// shared invariant.

use glyph_canvas_prng::CanvasRng;
use glyph_canvas_raster::Rgb;

use crate::params::ColorScheme;

/// Near-black ink used by Monochrome and as the Accent base.
pub const INK: Rgb = Rgb::new(10, 10, 10);
/// Saturated red for Accent flashes.
pub const ACCENT: Rgb = Rgb::new(255, 0, 0);
/// Canvas background.
pub const PAPER: Rgb = Rgb::new(255, 255, 255);
/// Frame border in exports.
pub const BORDER: Rgb = Rgb::new(229, 229, 229);

/// One color per draw call: full-range grays.
///
/// Used by the linear, geometric and matrix generators.
pub fn flat_pick(scheme: ColorScheme, rng: &mut CanvasRng, accent_threshold: f64) -> Rgb {
    match scheme {
        ColorScheme::Monochrome => INK,
        ColorScheme::Grayscale => Rgb::gray((rng.next() * 256.0) as u8),
        ColorScheme::Accent => {
            if rng.next() > accent_threshold {
                ACCENT
            } else {
                INK
            }
        }
    }
}

/// One color per draw call: mid-range grays (50..250) so glyphs stay
/// legible against the white canvas.
///
/// Used by the texture generator.
pub fn texture_pick(scheme: ColorScheme, rng: &mut CanvasRng, accent_threshold: f64) -> Rgb {
    match scheme {
        ColorScheme::Monochrome => INK,
        ColorScheme::Grayscale => Rgb::gray((50.0 + rng.next() * 200.0) as u8),
        ColorScheme::Accent => {
            if rng.next() > accent_threshold {
                ACCENT
            } else {
                INK
            }
        }
    }
}

/// Intensity-driven color + alpha for the ascii-rain generator.
///
/// The intensity doubles as the alpha; none of the branches consume an
/// RNG draw. Accent flashes when the intensity itself clears the
/// threshold.
pub fn intensity_pick(scheme: ColorScheme, intensity: f64, accent_threshold: f64) -> (Rgb, f64) {
    let color = match scheme {
        ColorScheme::Monochrome => INK,
        ColorScheme::Grayscale => Rgb::gray(((intensity * 256.0) as u8).min(255)),
        ColorScheme::Accent => {
            if intensity > accent_threshold {
                ACCENT
            } else {
                INK
            }
        }
    };
    (color, intensity)
}
