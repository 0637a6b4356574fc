// Texture pattern: a monospaced character grid with organic blobs.
//
// Rows of glyphs at a line height and font size that scale with
// complexity. Each row has a noise-driven fill probability, bit-biased by
// the text bitstream; where a bitstream index resolves for a cell, the
// literal bit digit is placed instead of a random glyph. A few translucent
// polygon blobs finish the composition.

use glyph_canvas_prng::{CanvasRng, noise};
use glyph_canvas_raster::{Surface, draw_glyph};

use crate::audio::AudioFrequencyData;
use crate::color::texture_pick;
use crate::params::GenerationParameters;
use crate::text_bits::TextBits;

const ACCENT_FLASH: f64 = 0.7;

/// Glyph inventory for cells with no resolved bit.
const GLYPHS: [char; 10] = ['0', '1', '~', '.', '+', '-', '|', '/', '\\', '*'];

pub fn render_texture(
    surface: &mut Surface,
    params: &GenerationParameters,
    bits: Option<&TextBits>,
    _audio: Option<&AudioFrequencyData>,
) {
    let size = f64::from(params.canvas_size);
    let complexity = params.clamped_complexity();
    let mut rng = CanvasRng::new(&params.effective_seed());

    let line_height = (8.0 + 8.0 * complexity).floor() as u32;
    let font_size = (6.0 + 6.0 * complexity).floor();
    let chars_per_line = (size / (font_size * 0.6)).floor() as usize;

    let mut y = 0u32;
    while y < params.canvas_size {
        let yf = f64::from(y);
        let mut line_complexity = noise(yf * 0.02, rng.next()) * complexity;

        if let Some(tb) = bits {
            let idx = ((yf / size) * tb.len() as f64).floor() as usize;
            line_complexity *= 0.3 + f64::from(tb.bit_at(idx)) * 0.9;
        }

        let mut row: Vec<char> = Vec::with_capacity(chars_per_line);
        for cell in 0..chars_per_line {
            let place = rng.next() < line_complexity;
            let ch = match bits {
                Some(tb) => {
                    let idx = ((cell as f64 / chars_per_line as f64 + yf / size)
                        * tb.len() as f64)
                        .floor() as usize;
                    match tb.bits.get(idx) {
                        // A resolved bit renders as its literal digit.
                        Some(&bit) => {
                            if place {
                                char::from(b'0' + bit)
                            } else {
                                ' '
                            }
                        }
                        // Past the stream: fall back to random glyphs.
                        None => {
                            if place {
                                GLYPHS[rng.pick(GLYPHS.len())]
                            } else {
                                ' '
                            }
                        }
                    }
                }
                None => {
                    if place {
                        GLYPHS[rng.pick(GLYPHS.len())]
                    } else {
                        ' '
                    }
                }
            };
            row.push(ch);
        }

        let color = texture_pick(params.color_scheme, &mut rng, ACCENT_FLASH);
        for (i, ch) in row.iter().enumerate() {
            draw_glyph(
                surface,
                *ch,
                i as f64 * font_size * 0.6,
                yf,
                font_size,
                color,
                1.0,
            );
        }

        y += line_height;
    }

    // Organic blob shapes over the glyph field.
    let blob_count = 3 + (7.0 * complexity).floor() as usize;
    for _ in 0..blob_count {
        let cx = rng.next() * size;
        let cy = rng.next() * size;
        let blob_size = 10.0 + rng.next() * 30.0 * complexity;
        let points = 6 + (rng.next() * 8.0).floor() as usize;

        let color = texture_pick(params.color_scheme, &mut rng, ACCENT_FLASH);
        let alpha = 0.1 + rng.next() * 0.3;

        let mut pts = Vec::with_capacity(points + 1);
        for j in 0..=points {
            let angle = (j as f64 / points as f64) * std::f64::consts::TAU;
            let radius = blob_size * (0.7 + rng.next() * 0.6);
            pts.push((cx + angle.cos() * radius, cy + angle.sin() * radius));
        }
        surface.fill_polygon(&pts, color, alpha);
    }
}
