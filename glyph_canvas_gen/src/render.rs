// Render dispatch: one synchronous, self-contained pass per call.
//
// Fills the surface with paper white, derives the text bitstream, and
// routes to the selected pattern generator. Each call is a pure function
// of its arguments mutating only the target raster — no partial-render
// visibility, no retained state, no hidden globals — so concurrent
// callers (batch export alongside an interactive preview) each bring
// their own `Surface` and never contend.

use glyph_canvas_raster::Surface;

use crate::ascii_rain::render_ascii;
use crate::audio::AudioFrequencyData;
use crate::color::PAPER;
use crate::geometric::render_geometric;
use crate::linear::render_linear;
use crate::matrix::render_matrix;
use crate::params::{GenerationParameters, PatternKind};
use crate::text_bits::TextBits;
use crate::texture::render_texture;

/// Render one artwork onto `surface`.
///
/// The surface should be `canvas_size` square; a mismatched surface is
/// painted with the parameter geometry and clipped at its own bounds.
pub fn render(surface: &mut Surface, params: &GenerationParameters, audio: Option<&AudioFrequencyData>) {
    surface.fill(PAPER);
    let bits = TextBits::from_params(params);
    match params.pattern {
        PatternKind::Linear => render_linear(surface, params, bits.as_ref(), audio),
        PatternKind::Texture => render_texture(surface, params, bits.as_ref(), audio),
        PatternKind::Geometric => render_geometric(surface, params, bits.as_ref(), audio),
        PatternKind::Matrix => render_matrix(surface, params, bits.as_ref(), audio),
        PatternKind::Ascii => render_ascii(surface, params, bits.as_ref(), audio),
    }
}

/// Convenience wrapper allocating the surface.
pub fn render_to_surface(params: &GenerationParameters, audio: Option<&AudioFrequencyData>) -> Surface {
    let mut surface = Surface::new(params.canvas_size, PAPER);
    render(&mut surface, params, audio);
    surface
}
