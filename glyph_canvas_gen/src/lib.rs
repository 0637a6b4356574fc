// Glyph Canvas generation engine
//
// A deterministic generative-art engine: user parameters (pattern family,
// color scheme, complexity, optional text, optional audio features) drive
// a seeded procedural pipeline onto a square raster, alongside a
// "cryptographic-looking" display code and a two-layer public/private
// reveal mode. Everything is reproducible from the parameter record; the
// one deliberate exception is signature key generation, which takes an
// injectable randomness source.
//
// Architecture:
// - params.rs: the `GenerationParameters` record and its enums
// - text_bits.rs: text-to-bitstream conversion and seed augmentation
// - audio.rs: audio feature model, beat detector, feed interface
// - color.rs: color scheme policy constants shared by the generators
// - linear.rs / texture.rs / geometric.rs / matrix.rs / ascii_rain.rs:
//   the four pattern families (geometric and matrix are sibling variants)
// - render.rs: white-fill + bitstream derivation + generator dispatch
// - crypto.rs: the four display-code transforms and key pairs
// - artwork_hash.rs: the general-purpose parameter hash
// - layers.rs: signature-mode public/private layering
// - temporal.rs: slow parameter drift for animated/idle modes
// - share.rs: compact base64 share-string codec
// - export.rs: framed export, filenames, image file output
// - batch.rs: batch variation policy and multi-file export
//
// The engine is deterministic given a seed, supporting reproducible
// artwork.

pub mod artwork_hash;
pub mod ascii_rain;
pub mod audio;
pub mod batch;
pub mod color;
pub mod crypto;
pub mod export;
pub mod geometric;
pub mod layers;
pub mod linear;
pub mod matrix;
pub mod params;
pub mod render;
pub mod share;
pub mod temporal;
pub mod text_bits;
pub mod texture;

pub use artwork_hash::artwork_hash;
pub use audio::{AudioFeatureSource, AudioFrequencyData, BeatDetector, SyntheticFeed};
pub use layers::{LayerKind, LayeredData};
pub use params::{
    CodePosition, ColorScheme, EncryptionKind, GenerationParameters, PatternKind,
};
pub use render::{render, render_to_surface};
pub use temporal::TemporalEvolution;
