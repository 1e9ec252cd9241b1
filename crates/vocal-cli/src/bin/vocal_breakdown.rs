// vocal-breakdown: Show a word at every intensity bucket.
//
// For each word prints its syllables, its morphology and the translation
// at the representative intensities 1, 5 and 9.
//
// Usage:
//   vocal-breakdown [WORD...]
//
// Options:
//   -h, --help             Print help

use std::io::{self, Write};

use vocal_en::translator::VocalTranslator;

fn main() {
    vocal_cli::init_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();

    if vocal_cli::wants_help(&args) {
        println!("vocal-breakdown: Show a word's syllables, morphology and translations.");
        println!();
        println!("Usage: vocal-breakdown [WORD...]");
        println!();
        println!("If WORD arguments are given, breaks down each word.");
        println!("Otherwise reads words from stdin (one per line).");
        println!();
        println!("Options:");
        println!("  -h, --help             Print this help");
        return;
    }

    let words = vocal_cli::positional(&args);
    let translator = VocalTranslator::default();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    vocal_cli::for_each_word(&words, |word| {
        let breakdown = translator.word_breakdown(word);
        let m = &breakdown.morphology;
        let _ = writeln!(out, "{word}:");
        let _ = writeln!(out, "  syllables: {}", breakdown.syllables.join("-"));
        let _ = writeln!(out, "  morphology: {}|{}|{}", m.prefix, m.root, m.suffix);
        for (level, translation) in &breakdown.translations {
            let _ = writeln!(
                out,
                "  {:<9} ({}): {translation}",
                level.label(),
                level.representative()
            );
        }
    });
}
