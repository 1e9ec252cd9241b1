// vocal-translate: Translate lyrics into vocal-technique respellings.
//
// Reads lyrics from the given files, or from stdin when none are given,
// and prints the translation. Line structure is kept.
//
// Usage:
//   vocal-translate [-i N] [OPTIONS] [FILE...]
//
// Options:
//   -i, --intensity N      Intensity 1-10 (default: $VOCAL_INTENSITY or 5)
//   --no-hyphens           Do not join syllables with '-' at intensity 8+
//   --no-exceptions        Skip the whole-word exception dictionary
//   -h, --help             Print help

use std::io::{self, Read, Write};

use tracing::debug;
use vocal_en::translator::{TranslatorOptions, VocalTranslator};

fn main() {
    vocal_cli::init_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (intensity, args) =
        vocal_cli::parse_intensity(&args).unwrap_or_else(|e| vocal_cli::fatal(&e));

    if vocal_cli::wants_help(&args) {
        println!("vocal-translate: Translate lyrics for vocal technique practice.");
        println!();
        println!("Usage: vocal-translate [-i N] [OPTIONS] [FILE...]");
        println!();
        println!("If FILE arguments are given, translates each file.");
        println!("Otherwise reads lyrics from stdin.");
        println!();
        println!("Options:");
        println!("  -i, --intensity N      Intensity 1-10 (default: $VOCAL_INTENSITY or 5)");
        println!("  --no-hyphens           Do not join syllables with '-' at intensity 8+");
        println!("  --no-exceptions        Skip the whole-word exception dictionary");
        println!("  -h, --help             Print this help");
        return;
    }

    let intensity = vocal_cli::resolve_intensity(intensity.as_deref())
        .unwrap_or_else(|e| vocal_cli::fatal(&e));

    let mut options = TranslatorOptions {
        default_intensity: intensity,
        ..TranslatorOptions::default()
    };
    for arg in &args {
        match arg.as_str() {
            "--no-hyphens" => options.hyphenate_syllables = false,
            "--no-exceptions" => options.use_exception_dictionary = false,
            s if s.starts_with('-') => vocal_cli::fatal(&format!("unknown option {s}")),
            _ => {}
        }
    }
    let files = vocal_cli::positional(&args);
    debug!(%intensity, files = files.len(), "translating");

    let translator = VocalTranslator::new(options);
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if files.is_empty() {
        let mut lyrics = String::new();
        if let Err(e) = io::stdin().read_to_string(&mut lyrics) {
            vocal_cli::fatal(&format!("failed to read stdin: {e}"));
        }
        let _ = write!(out, "{}", translator.translate(&lyrics));
    } else {
        for path in &files {
            let lyrics = std::fs::read_to_string(path)
                .unwrap_or_else(|e| vocal_cli::fatal(&format!("failed to read {path}: {e}")));
            let _ = writeln!(out, "{}", translator.translate(lyrics.trim_end_matches('\n')));
        }
    }
}
