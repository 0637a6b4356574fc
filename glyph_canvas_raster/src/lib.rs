// Square RGB raster surface and drawing primitives.
//
// The pattern generators in `glyph_canvas_gen` paint onto a `Surface`: a
// caller-owned, square, 8-bit RGB pixel buffer with src-over alpha
// blending. Primitives cover exactly what the generators need — flat
// fills, discs, lines, scanline-filled polygons, and scaled bitmap glyph
// text — nothing more.
//
// Architecture:
// - surface.rs: `Rgb` + `Surface` with blending, discs, lines, polygons,
//   rect strokes and blitting
// - font.rs: 5x7 bitmap glyph table and scaled text drawing
//
// **Critical constraint: determinism.** Every primitive must write
// identical bytes given identical arguments. Blending arithmetic is plain
// f64 multiply-and-round with no platform-dependent intrinsics, so two
// renders of the same parameter record compare byte-for-byte equal.

pub mod font;
pub mod surface;

pub use font::{draw_glyph, draw_text};
pub use surface::{Rgb, Surface};
