// Linear pattern: vertical columns of dots with rhythm lines.
//
// Columns at fixed pixel spacing, each with a noise-driven dot count.
// The text bitstream biases both density (0-bits sparsify, 1-bits
// densify) and vertical placement (0-bits pull dots toward the top).
// Audio drives density through bass, bursts on beats, shifts dots
// vertically along the treble-bass axis, and scales dot size with
// volume. Ends with a handful of full-height rhythm lines.
//
// RNG draw order is part of the output contract: noise offset, column
// color, then per-dot position and size, in that order. Reordering draws
// silently re-renders every existing seed.

use glyph_canvas_prng::{CanvasRng, noise};
use glyph_canvas_raster::Surface;

use crate::audio::AudioFrequencyData;
use crate::color::flat_pick;
use crate::params::GenerationParameters;
use crate::text_bits::TextBits;

/// Accent flash threshold for this generator.
const ACCENT_FLASH: f64 = 0.7;

pub fn render_linear(
    surface: &mut Surface,
    params: &GenerationParameters,
    bits: Option<&TextBits>,
    audio: Option<&AudioFrequencyData>,
) {
    let size = f64::from(params.canvas_size);
    let complexity = params.clamped_complexity();
    let mut rng = CanvasRng::new(&params.effective_seed());

    let spacing = ((20.0 * (1.0 - complexity)).floor().max(2.0)) as u32;
    let max_dots = (50.0 * complexity).floor();

    let mut x = 0u32;
    while x < params.canvas_size {
        let xf = f64::from(x);
        let mut density = noise(xf * 0.01, rng.next()) * complexity * max_dots;

        if let Some(tb) = bits {
            let idx = ((xf / size) * tb.len() as f64).floor() as usize;
            density *= 0.5 + f64::from(tb.bit_at(idx)) * 0.8;
        }
        if let Some(a) = audio {
            density *= 0.3 + a.bass * 1.2;
            if a.beat {
                density *= 1.5;
            }
        }

        let color = flat_pick(params.color_scheme, &mut rng, ACCENT_FLASH);

        let dots = density.ceil().max(0.0) as usize;
        for i in 0..dots {
            let mut y = rng.next() * size;

            if let Some(tb) = bits {
                let idx = ((i as f64 / density) * tb.len() as f64).floor() as usize;
                y *= 0.3 + f64::from(tb.bit_at(idx)) * 0.7;
            }
            if let Some(a) = audio {
                y += (a.treble - a.bass) * 0.3 * size * 0.5;
                y = y.clamp(0.0, size);
            }

            let mut dot_size = (rng.next() * 3.0 * complexity).max(0.5);
            if let Some(a) = audio {
                dot_size *= 0.5 + a.volume * 0.8;
            }

            surface.fill_disc(xf, y, dot_size, color, 1.0);
        }

        x += spacing;
    }

    // Vertical rhythm lines over the dot field.
    let line_count = (5.0 * complexity).floor() as usize;
    let color = flat_pick(params.color_scheme, &mut rng, ACCENT_FLASH);
    for _ in 0..line_count {
        let lx = rng.next() * size;
        let alpha = 0.3 + rng.next() * 0.4;
        surface.vertical_line(lx, color, alpha);
    }
}
