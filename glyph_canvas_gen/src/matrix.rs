// Matrix pattern: a node grid with translucent connections.
//
// A fixed-size grid of candidate nodes, each activated by a random
// threshold — or, when a text bitstream is present, directly by the bit
// at the node's flattened index (1-bits always activate; 0-bits activate
// with 30% probability). Nearby active pairs get translucent connecting
// lines, then each active node is drawn as a filled disc.

use glyph_canvas_prng::CanvasRng;
use glyph_canvas_raster::Surface;

use crate::audio::AudioFrequencyData;
use crate::color::flat_pick;
use crate::params::GenerationParameters;
use crate::text_bits::TextBits;

const ACCENT_FLASH: f64 = 0.7;

/// Connection reach as a multiple of the cell size.
const LINK_REACH: f64 = 2.5;

struct Node {
    x: f64,
    y: f64,
    active: bool,
}

pub fn render_matrix(
    surface: &mut Surface,
    params: &GenerationParameters,
    bits: Option<&TextBits>,
    _audio: Option<&AudioFrequencyData>,
) {
    let size = f64::from(params.canvas_size);
    let complexity = params.clamped_complexity();
    let mut rng = CanvasRng::new(&params.effective_seed());

    let cell = (20.0 + complexity * 30.0).floor();
    let node_chance = 0.3 + complexity * 0.4;
    let connection_chance = 0.2 + complexity * 0.3;

    let cols = (size / cell).floor() as usize;
    let rows = cols;

    let mut nodes = Vec::with_capacity(rows * cols);
    for row in 0..rows {
        for col in 0..cols {
            let x = col as f64 * cell + cell / 2.0;
            let y = row as f64 * cell + cell / 2.0;
            let mut active = rng.next() < node_chance;

            if let Some(tb) = bits {
                let idx = (row * cols + col) % tb.len().max(1);
                let bit = tb.bit_at(idx);
                active = bit == 1 || (bit == 0 && rng.next() < 0.3);
            }

            nodes.push(Node { x, y, active });
        }
    }

    // Connections between nearby active pairs.
    let link_color = flat_pick(params.color_scheme, &mut rng, ACCENT_FLASH);
    for i in 0..nodes.len() {
        if !nodes[i].active {
            continue;
        }
        for j in (i + 1)..nodes.len() {
            if !nodes[j].active {
                continue;
            }
            let dx = nodes[j].x - nodes[i].x;
            let dy = nodes[j].y - nodes[i].y;
            let distance = (dx * dx + dy * dy).sqrt();
            if distance < cell * LINK_REACH && rng.next() < connection_chance {
                surface.line(nodes[i].x, nodes[i].y, nodes[j].x, nodes[j].y, link_color, 0.4);
            }
        }
    }

    // Nodes on top of the connection mesh.
    for node in &nodes {
        if node.active {
            let color = flat_pick(params.color_scheme, &mut rng, ACCENT_FLASH);
            let radius = 2.0 + rng.next() * 3.0;
            surface.fill_disc(node.x, node.y, radius, color, 0.8);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::PAPER;

    fn base_params(seed: &str) -> GenerationParameters {
        GenerationParameters {
            seed: seed.to_string(),
            canvas_size: 256,
            complexity: 0.5,
            ..Default::default()
        }
    }

    fn render(params: &GenerationParameters) -> Surface {
        let mut s = Surface::new(params.canvas_size, PAPER);
        let bits = TextBits::from_params(params);
        render_matrix(&mut s, params, bits.as_ref(), None);
        s
    }

    #[test]
    fn deterministic_for_fixed_inputs() {
        let p = base_params("seedA");
        assert_eq!(render(&p), render(&p));
    }

    #[test]
    fn seed_changes_output() {
        assert_ne!(render(&base_params("seedA")), render(&base_params("seedB")));
    }

    #[test]
    fn all_ones_bits_activate_every_node() {
        // 0xFF code units give an all-ones stream: every node active, so
        // the raster carries strictly more ink than the all-zeros case.
        let mut ones = base_params("fixed");
        ones.text_input = Some("\u{ff}\u{ff}".to_string());
        let mut zeros = base_params("fixed");
        zeros.text_input = Some("\u{0}\u{0}".to_string());
        let one_bits = TextBits::from_params(&ones);
        let zero_bits = TextBits::from_params(&zeros);
        let mut s1 = Surface::new(256, PAPER);
        let mut s0 = Surface::new(256, PAPER);
        render_matrix(&mut s1, &base_params("fixed"), one_bits.as_ref(), None);
        render_matrix(&mut s0, &base_params("fixed"), zero_bits.as_ref(), None);
        let ink = |s: &Surface| s.data().chunks_exact(3).filter(|px| px[0] != 255).count();
        assert!(ink(&s1) > ink(&s0));
    }

    #[test]
    fn paints_something() {
        let s = render(&base_params("seedA"));
        assert!(s.data().iter().any(|&b| b != 255));
    }
}
