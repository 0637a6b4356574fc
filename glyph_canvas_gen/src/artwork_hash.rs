// The general-purpose deterministic artwork hash.
//
// Not a security primitive: a 32-bit multiplicative fold of the
// JSON-serialized parameter record plus a second-granularity timestamp,
// widened to 16 hex characters by folding the value again times seven.
// Identical parameters within the same wall-clock second hash
// identically, which is exactly the stability the export stamp and the
// hash-type display code need.
//
// The timestamp is an explicit argument; nothing in this module reads the
// clock.

use glyph_canvas_prng::fold_string;

use crate::params::GenerationParameters;

/// 16 lowercase hex characters identifying an artwork at a moment.
pub fn artwork_hash(params: &GenerationParameters, epoch_secs: u64) -> String {
    let record = serde_json::to_string(&(params, epoch_secs)).unwrap_or_default();
    let hash = fold_string(&record);
    let extended = u64::from(hash) * 7;
    let mut combined = format!("{hash:08x}{extended:08x}");
    combined.truncate(16);
    combined
}
