// Batch export: N parameter variants, each rendered and written to disk.
//
// Variation policy: with variation off, only the seed changes
// (`{seed}-{index}`), guaranteeing distinct artifacts while keeping every
// other knob fixed. With variation on, complexity blends a linear sweep
// across its range with bounded random jitter, the color scheme keeps its
// value 70% of the time (else a uniformly chosen alternative), and the
// seed gains an index-plus-random suffix.
//
// Failures are per-item: a bad write records {index, message} and the
// batch moves on. Each item renders on its own `Surface`, so a batch can
// run alongside an interactive preview without shared mutable state.

use std::path::Path;

use glyph_canvas_prng::CanvasRng;

use crate::artwork_hash::artwork_hash;
use crate::export::{ExportFormat, batch_filename, save_surface};
use crate::params::{ColorScheme, GenerationParameters};
use crate::render::render_to_surface;

pub struct BatchOptions {
    pub count: usize,
    pub format: ExportFormat,
    pub size: u32,
    pub vary_parameters: bool,
    pub name_prefix: String,
}

/// One failed item: which index, and why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchError {
    pub index: usize,
    pub message: String,
}

/// What a batch run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchOutcome {
    pub exported: usize,
    pub errors: Vec<BatchError>,
}

impl BatchOutcome {
    pub fn success(&self) -> bool {
        self.exported > 0
    }
}

/// Derive the parameter record for one batch item.
pub fn batch_variant(
    base: &GenerationParameters,
    index: usize,
    total: usize,
    vary: bool,
) -> GenerationParameters {
    if !vary {
        return GenerationParameters {
            seed: format!("{}-{index}", base.seed),
            ..base.clone()
        };
    }

    let progress = if total > 1 {
        index as f64 / (total - 1) as f64
    } else {
        0.0
    };
    let mut rng = CanvasRng::new(&format!("{}{index}", base.seed));

    let complexity = vary_value(0.1, 1.0, progress, &mut rng);
    let color_scheme = pick_variant(
        &[
            ColorScheme::Monochrome,
            ColorScheme::Grayscale,
            ColorScheme::Accent,
        ],
        base.color_scheme,
        &mut rng,
    );
    let seed = format!("{}-{index}-{}", base.seed, (rng.next() * 1000.0).floor());

    GenerationParameters {
        complexity,
        color_scheme,
        seed,
        ..base.clone()
    }
}

/// Blend a linear sweep with bounded random jitter, clamped to the range.
fn vary_value(min: f64, max: f64, progress: f64, rng: &mut CanvasRng) -> f64 {
    let linear = min + (max - min) * progress;
    let jitter = (rng.next() - 0.5) * 0.3 * (max - min);
    (linear + jitter).clamp(min, max)
}

/// Keep the current choice 70% of the time, else a different one.
fn pick_variant<T: Copy + PartialEq>(options: &[T], current: T, rng: &mut CanvasRng) -> T {
    if rng.next() < 0.7 {
        return current;
    }
    let alternatives: Vec<T> = options.iter().copied().filter(|&o| o != current).collect();
    if alternatives.is_empty() {
        return current;
    }
    alternatives[rng.pick(alternatives.len())]
}

/// Render and write `options.count` variants into `out_dir`.
pub fn export_batch(
    base: &GenerationParameters,
    options: &BatchOptions,
    out_dir: &Path,
    epoch_secs: u64,
) -> BatchOutcome {
    let mut exported = 0;
    let mut errors = Vec::new();

    for index in 0..options.count {
        let mut params = batch_variant(base, index, options.count, options.vary_parameters);
        params.canvas_size = options.size;

        let surface = render_to_surface(&params, None);
        let hash = artwork_hash(&params, epoch_secs);
        let filename = batch_filename(&options.name_prefix, index + 1, &hash, options.format);

        match save_surface(&surface, &out_dir.join(filename), options.format) {
            Ok(()) => exported += 1,
            Err(err) => errors.push(BatchError {
                index: index + 1,
                message: err.to_string(),
            }),
        }
    }

    BatchOutcome { exported, errors }
}
