// Ascii-rain pattern: a dense character field with a noise overlay.
//
// A full-canvas character grid drawn from a wide glyph inventory (digits,
// tilde, the full alphabet) — narrowed to the literal bit digits when a
// text bitstream is present. Background fill density derives from
// complexity plus the bass/mid audio bands; every placed glyph gets a
// randomized per-glyph intensity that doubles as its alpha. Above a
// complexity floor, a sparse overlay of extra glyphs adds grain.

use glyph_canvas_prng::CanvasRng;
use glyph_canvas_raster::{Surface, draw_glyph};

use crate::audio::AudioFrequencyData;
use crate::color::intensity_pick;
use crate::params::GenerationParameters;
use crate::text_bits::TextBits;

const ACCENT_FLASH: f64 = 0.7;

/// Rain glyph inventory: binary digits, tilde, then the alphabet.
const RAIN_GLYPHS: [char; 55] = [
    '0', '1', '~', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O',
    'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', 'a', 'b', 'c', 'd', 'e', 'f', 'g',
    'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y',
    'z',
];

pub fn render_ascii(
    surface: &mut Surface,
    params: &GenerationParameters,
    bits: Option<&TextBits>,
    audio: Option<&AudioFrequencyData>,
) {
    let size = f64::from(params.canvas_size);
    let complexity = params.clamped_complexity();
    let mut rng = CanvasRng::new(&params.effective_seed());

    let font_size = (8.0 + complexity * 12.0).floor();
    let char_w = font_size * 0.6;
    let char_h = font_size * 1.2;
    let cols = (size / char_w).floor() as usize;
    let rows = (size / char_h).floor() as usize;

    let audio_boost = audio.map_or(0.0, |a| (a.bass + a.mid) / 2.0);
    let bg_density = (complexity + audio_boost * 0.5) * 0.8;

    for row in 0..rows {
        for col in 0..cols {
            if rng.next() < bg_density {
                let x = col as f64 * char_w;
                let y = row as f64 * char_h;

                let ch = match bits {
                    Some(tb) => {
                        let idx = (row * cols + col) % tb.len().max(1);
                        char::from(b'0' + tb.bit_at(idx))
                    }
                    None => RAIN_GLYPHS[rng.pick(RAIN_GLYPHS.len())],
                };

                let intensity = 0.15 + rng.next() * 0.6;
                let (color, alpha) = intensity_pick(params.color_scheme, intensity, ACCENT_FLASH);
                draw_glyph(surface, ch, x, y, font_size, color, alpha);
            }
        }
    }

    // Sparse noise overlay for extra grain.
    if complexity > 0.4 {
        let count = (size * (complexity - 0.4) * 0.3).floor() as usize;
        for _ in 0..count {
            let x = rng.next() * size;
            let y = rng.next() * size;
            let ch = RAIN_GLYPHS[rng.pick(RAIN_GLYPHS.len())];
            let (color, alpha) =
                intensity_pick(params.color_scheme, 0.05 + rng.next() * 0.2, ACCENT_FLASH);
            draw_glyph(surface, ch, x, y, font_size, color, alpha);
        }
    }
}
