// The parameter record driving every render.
//
// `GenerationParameters` is immutable per render call and caller-owned; the
// generators never mutate it and never read configuration from anywhere
// else. Out-of-range numerics are clamped at point of use, never rejected —
// a render call cannot fail on bad parameters.
//
// Complexity is caller-controlled. Earlier product variants pinned it to
// 0.6 internally; that inconsistency is resolved here in favor of the
// caller, with clamping to [0.1, 1.0].

use serde::{Deserialize, Serialize};

use crate::text_bits::text_seed;

/// Which pattern algorithm paints the raster.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternKind {
    Linear,
    Texture,
    Geometric,
    Matrix,
    Ascii,
}

impl PatternKind {
    /// Single-letter initial used by the share codec.
    pub fn initial(self) -> char {
        match self {
            Self::Linear => 'l',
            Self::Texture => 't',
            Self::Geometric => 'g',
            Self::Matrix => 'm',
            Self::Ascii => 'a',
        }
    }

    /// Inverse of `initial`. Unknown initials fall back to `Linear`.
    pub fn from_initial(c: char) -> Self {
        match c {
            't' => Self::Texture,
            'g' => Self::Geometric,
            'm' => Self::Matrix,
            'a' => Self::Ascii,
            _ => Self::Linear,
        }
    }
}

/// Per-draw-call color policy. Exact RGB values are design constants in
/// `color.rs`, not derived from parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    Monochrome,
    Grayscale,
    Accent,
}

impl ColorScheme {
    pub fn initial(self) -> char {
        match self {
            Self::Monochrome => 'm',
            Self::Grayscale => 'g',
            Self::Accent => 'a',
        }
    }

    /// Unknown initials fall back to `Monochrome`.
    pub fn from_initial(c: char) -> Self {
        match c {
            'g' => Self::Grayscale,
            'a' => Self::Accent,
            _ => Self::Monochrome,
        }
    }
}

/// Which display-code transform runs over the parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EncryptionKind {
    Binary,
    Hash,
    Cipher,
    Signature,
}

/// Anchor for the code overlay. Placement directive only; has no effect on
/// pixel generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CodePosition {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    LeftEdge,
    RightEdge,
    None,
}

/// Everything a render call needs, owned by the caller.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GenerationParameters {
    pub pattern: PatternKind,
    pub complexity: f64,
    pub movement: bool,
    pub color_scheme: ColorScheme,
    pub seed: String,
    pub canvas_size: u32,
    pub text_input: Option<String>,
    pub encryption: EncryptionKind,
    pub code_position: CodePosition,
}

impl Default for GenerationParameters {
    fn default() -> Self {
        Self {
            pattern: PatternKind::Linear,
            complexity: 0.5,
            movement: false,
            color_scheme: ColorScheme::Monochrome,
            seed: "glyph-canvas".to_string(),
            canvas_size: 512,
            text_input: None,
            encryption: EncryptionKind::Binary,
            code_position: CodePosition::TopRight,
        }
    }
}

impl GenerationParameters {
    /// Complexity clamped to its documented [0.1, 1.0] range.
    pub fn clamped_complexity(&self) -> f64 {
        self.complexity.clamp(0.1, 1.0)
    }

    /// The text input, or empty when absent.
    pub fn text(&self) -> &str {
        self.text_input.as_deref().unwrap_or("")
    }

    /// The seed actually fed to the PRNG: the base seed augmented by the
    /// text-derived suffix when text is present.
    pub fn effective_seed(&self) -> String {
        text_seed(self.text(), &self.seed)
    }
}
