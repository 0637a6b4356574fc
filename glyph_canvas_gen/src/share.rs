// Compact parameter codec for shareable links.
//
// Parameters compress to a short-field JSON object (single-letter keys,
// enum initials, complexity as an integer percent) encoded as URL-safe
// unpadded base64. Decoding is forgiving by contract: any missing or
// invalid field substitutes its documented default, and a corrupt or
// truncated string yields `None` rather than an error — the caller falls
// back to defaults.

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::{Deserialize, Serialize};

use crate::params::{ColorScheme, GenerationParameters, PatternKind};

#[derive(Serialize)]
struct CompactOut<'a> {
    p: char,
    c: i64,
    m: u8,
    s: char,
    z: u32,
    t: &'a str,
    r: &'a str,
}

#[derive(Deserialize)]
struct CompactIn {
    #[serde(default)]
    p: Option<String>,
    #[serde(default)]
    c: Option<i64>,
    #[serde(default)]
    m: Option<i64>,
    #[serde(default)]
    s: Option<String>,
    #[serde(default)]
    z: Option<u32>,
    #[serde(default)]
    t: Option<String>,
    #[serde(default)]
    r: Option<String>,
}

/// Seed substituted when a share string carries none.
const FALLBACK_SEED: &str = "glyph-canvas";

/// Compress a parameter record into a URL-safe share string.
pub fn encode_parameters(params: &GenerationParameters) -> String {
    let compact = CompactOut {
        p: params.pattern.initial(),
        c: (params.complexity * 100.0).round() as i64,
        m: u8::from(params.movement),
        s: params.color_scheme.initial(),
        z: params.canvas_size,
        t: params.text(),
        r: &params.seed,
    };
    let json = serde_json::to_string(&compact).unwrap_or_default();
    URL_SAFE_NO_PAD.encode(json)
}

/// Recover parameters from a share string.
///
/// Returns `None` when the string is not decodable at all; individual
/// missing or invalid fields fall back to defaults (Linear, Monochrome,
/// complexity 0.5, 512 px, no movement, no text).
pub fn decode_parameters(encoded: &str) -> Option<GenerationParameters> {
    let bytes = URL_SAFE_NO_PAD.decode(encoded).ok()?;
    let json = String::from_utf8(bytes).ok()?;
    let compact: CompactIn = serde_json::from_str(&json).ok()?;

    let pattern = compact
        .p
        .as_deref()
        .and_then(|s| s.chars().next())
        .map_or(PatternKind::Linear, PatternKind::from_initial);
    let scheme = compact
        .s
        .as_deref()
        .and_then(|s| s.chars().next())
        .map_or(ColorScheme::Monochrome, ColorScheme::from_initial);
    let percent = match compact.c {
        Some(c) if c > 0 => c,
        _ => 50,
    };
    let canvas_size = match compact.z {
        Some(z) if z > 0 => z,
        _ => 512,
    };
    let text_input = compact.t.filter(|t| !t.is_empty());
    let seed = match compact.r {
        Some(r) if !r.is_empty() => r,
        _ => FALLBACK_SEED.to_string(),
    };

    Some(GenerationParameters {
        pattern,
        complexity: percent as f64 / 100.0,
        movement: compact.m.unwrap_or(0) != 0,
        color_scheme: scheme,
        seed,
        canvas_size,
        text_input,
        ..Default::default()
    })
}

/// Build a shareable URL from a base address.
pub fn share_url(base: &str, params: &GenerationParameters) -> String {
    format!("{base}?share={}", encode_parameters(params))
}
