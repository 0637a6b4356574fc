// Glyph Canvas renderer — CLI entry point.
//
// Renders one artwork (or a batch) from parameters to a framed image
// file, printing the display code and artwork hash along the way.
//
// Usage:
//   cargo run -p glyph_canvas_gen --bin render -- [output.png]
//     [--pattern linear|texture|geometric|matrix|ascii]
//     [--scheme monochrome|grayscale|accent] [--complexity C]
//     [--seed S] [--size N] [--text T]
//     [--encryption binary|hash|cipher|signature]
//     [--share CODE] [--evolve MS] [--audio-tick MS]
//     [--batch N] [--vary] [--prefix NAME]
//
// A --share string overrides the individual parameter flags. --evolve
// renders the artwork as it would look MS milliseconds into temporal
// evolution. --audio-tick polls the synthetic audio feed at the given
// tick for an audio-reactive render.

use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use glyph_canvas_gen::audio::{AudioFeatureSource, SyntheticFeed};
use glyph_canvas_gen::batch::{BatchOptions, export_batch};
use glyph_canvas_gen::crypto::display_code;
use glyph_canvas_gen::export::{ExportFormat, framed, save_surface, single_filename};
use glyph_canvas_gen::share::{decode_parameters, share_url};
use glyph_canvas_gen::{
    ColorScheme, EncryptionKind, GenerationParameters, PatternKind, TemporalEvolution,
    artwork_hash, render_to_surface,
};
use glyph_canvas_prng::CanvasRng;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let output_path = args
        .get(1)
        .filter(|s| !s.starts_with("--"))
        .map(|s| s.as_str())
        .unwrap_or("canvas.png");

    let (epoch_secs, epoch_nanos) = now();
    let mut key_rng = CanvasRng::new(&format!("{epoch_nanos}"));

    // Parameters: a share string wins, flags fill in the rest.
    let params = match parse_flag::<String>(&args, "--share") {
        Some(code) => match decode_parameters(&code) {
            Some(p) => {
                println!("Decoded share string.");
                p
            }
            None => {
                eprintln!("Could not decode share string; using defaults.");
                GenerationParameters::default()
            }
        },
        None => params_from_flags(&args, epoch_nanos),
    };

    println!("=== Glyph Canvas Renderer ===");
    println!("Pattern: {:?}", params.pattern);
    println!("Scheme: {:?}", params.color_scheme);
    println!("Complexity: {:.2}", params.clamped_complexity());
    println!("Seed: {}", params.seed);
    println!("Size: {}px", params.canvas_size);
    if !params.text().is_empty() {
        println!("Text: {}", params.text());
    }
    println!();

    // Batch mode short-circuits the single render.
    if let Some(count) = parse_flag::<usize>(&args, "--batch") {
        let options = BatchOptions {
            count,
            format: ExportFormat::Png,
            size: params.canvas_size,
            vary_parameters: args.iter().any(|a| a == "--vary"),
            name_prefix: parse_flag(&args, "--prefix").unwrap_or_else(|| "canvas".to_string()),
        };
        let out_dir = Path::new(output_path)
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        println!("[1/1] Exporting batch of {count} into {}...", out_dir.display());
        let outcome = export_batch(&params, &options, out_dir, epoch_secs);
        println!("  Exported: {}", outcome.exported);
        for err in &outcome.errors {
            eprintln!("  Item {}: {}", err.index, err.message);
        }
        if !outcome.success() {
            std::process::exit(1);
        }
        return;
    }

    // Optional temporal evolution before the render.
    let params = match parse_flag::<u64>(&args, "--evolve") {
        Some(ms) => {
            let evolution = TemporalEvolution::new(params, 0);
            let evolved = evolution.evolved(ms);
            println!("[1/3] Evolved to t={ms}ms (seed {}).", evolved.seed);
            evolved
        }
        None => params,
    };

    // Optional synthetic audio features.
    let audio = parse_flag::<u64>(&args, "--audio-tick").and_then(|tick| {
        let mut feed = SyntheticFeed::new(500);
        let features = feed.poll(tick);
        feed.release();
        features
    });
    if let Some(a) = &audio {
        println!(
            "[2/3] Audio tick: bass {:.2} mid {:.2} treble {:.2}{}",
            a.bass,
            a.mid,
            a.treble,
            if a.beat { " BEAT" } else { "" }
        );
    }

    let surface = render_to_surface(&params, audio.as_ref());
    let hash = artwork_hash(&params, epoch_secs);
    let code = display_code(&params, epoch_secs, &mut key_rng);

    println!("[3/3] Writing {output_path}...");
    let matted = framed(&surface, &hash);
    match save_surface(&matted, Path::new(output_path), format_for(output_path)) {
        Ok(()) => {
            println!("  Done.");
            println!();
            println!("Code: {code}");
            println!("Hash: {hash}");
            println!("Share: {}", share_url("", &params));
            println!(
                "Suggested name: {}",
                single_filename("canvas", &hash, format_for(output_path))
            );
        }
        Err(e) => {
            eprintln!("  Error writing image: {e}");
            std::process::exit(1);
        }
    }
}

fn params_from_flags(args: &[String], epoch_nanos: u128) -> GenerationParameters {
    let seed = parse_flag::<String>(args, "--seed")
        .unwrap_or_else(|| format!("{:x}", epoch_nanos % 0xffff_ffff));
    GenerationParameters {
        pattern: parse_pattern(parse_flag::<String>(args, "--pattern").as_deref()),
        complexity: parse_flag(args, "--complexity").unwrap_or(0.5),
        movement: false,
        color_scheme: parse_scheme(parse_flag::<String>(args, "--scheme").as_deref()),
        seed,
        canvas_size: parse_flag(args, "--size").unwrap_or(512),
        text_input: parse_flag::<String>(args, "--text").filter(|t| !t.is_empty()),
        encryption: parse_encryption(parse_flag::<String>(args, "--encryption").as_deref()),
        ..Default::default()
    }
}

fn parse_pattern(name: Option<&str>) -> PatternKind {
    match name {
        Some("texture") => PatternKind::Texture,
        Some("geometric") => PatternKind::Geometric,
        Some("matrix") => PatternKind::Matrix,
        Some("ascii") => PatternKind::Ascii,
        _ => PatternKind::Linear,
    }
}

fn parse_scheme(name: Option<&str>) -> ColorScheme {
    match name {
        Some("grayscale") => ColorScheme::Grayscale,
        Some("accent") => ColorScheme::Accent,
        _ => ColorScheme::Monochrome,
    }
}

fn parse_encryption(name: Option<&str>) -> EncryptionKind {
    match name {
        Some("hash") => EncryptionKind::Hash,
        Some("cipher") => EncryptionKind::Cipher,
        Some("signature") => EncryptionKind::Signature,
        _ => EncryptionKind::Binary,
    }
}

fn format_for(path: &str) -> ExportFormat {
    if path.ends_with(".jpg") || path.ends_with(".jpeg") {
        ExportFormat::Jpg
    } else {
        ExportFormat::Png
    }
}

fn now() -> (u64, u128) {
    match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(d) => (d.as_secs(), d.as_nanos()),
        Err(_) => (0, 0),
    }
}

fn parse_flag<T: std::str::FromStr>(args: &[String], flag: &str) -> Option<T> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .and_then(|v| v.parse().ok())
}
