// vocal-analyze: Prefix/root/suffix split of words.
//
// Prints `prefix|root|suffix` per word; empty parts stay empty.
//
// Usage:
//   vocal-analyze [WORD...]
//
// Options:
//   -h, --help             Print help

use std::io::{self, Write};

use vocal_en::morphology::{AffixAnalyzer, MorphologyAnalyzer};

fn main() {
    vocal_cli::init_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();

    if vocal_cli::wants_help(&args) {
        println!("vocal-analyze: Split English words into prefix, root and suffix.");
        println!();
        println!("Usage: vocal-analyze [WORD...]");
        println!();
        println!("If WORD arguments are given, analyzes each word.");
        println!("Otherwise reads words from stdin (one per line).");
        println!("Output: prefix|root|suffix");
        println!();
        println!("Options:");
        println!("  -h, --help             Print this help");
        return;
    }

    let words = vocal_cli::positional(&args);
    let analyzer = AffixAnalyzer::new();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    vocal_cli::for_each_word(&words, |word| {
        let a = analyzer.analyze(word);
        let _ = writeln!(out, "{}|{}|{}", a.prefix, a.root, a.suffix);
    });
}
