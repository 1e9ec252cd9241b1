// vocal-syllabify: Split words into sung syllables.
//
// Usage:
//   vocal-syllabify [OPTIONS] [WORD...]
//
// Options:
//   --separator SEP        Separator between syllables (default: -)
//   --boundaries           Also print the boundary offsets
//   -h, --help             Print help

use std::io::{self, Write};

use vocal_en::syllables::{EnglishSyllableSplitter, Syllabifier};

fn main() {
    vocal_cli::init_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();

    if vocal_cli::wants_help(&args) {
        println!("vocal-syllabify: Split English words into syllables for singing.");
        println!();
        println!("Usage: vocal-syllabify [OPTIONS] [WORD...]");
        println!();
        println!("If WORD arguments are given, splits each word.");
        println!("Otherwise reads words from stdin (one per line).");
        println!();
        println!("Options:");
        println!("  --separator SEP        Separator between syllables (default: -)");
        println!("  --boundaries           Also print the boundary offsets");
        println!("  -h, --help             Print this help");
        return;
    }

    let mut separator = "-".to_string();
    let mut show_boundaries = false;
    let mut words: Vec<String> = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        match arg.as_str() {
            "--separator" => match args.get(i + 1) {
                Some(sep) => {
                    separator = sep.clone();
                    skip_next = true;
                }
                None => vocal_cli::fatal("--separator requires a value"),
            },
            "--boundaries" => show_boundaries = true,
            s if !s.starts_with('-') => words.push(arg.clone()),
            s => vocal_cli::fatal(&format!("unknown option {s}")),
        }
    }

    let splitter = EnglishSyllableSplitter::new();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    vocal_cli::for_each_word(&words, |word| {
        let result = splitter.split(word);
        let joined = result.join(&separator);
        if show_boundaries {
            let offsets: Vec<String> = result.boundaries.iter().map(|b| b.to_string()).collect();
            let _ = writeln!(out, "{joined} [{}]", offsets.join(","));
        } else {
            let _ = writeln!(out, "{joined}");
        }
    });
}
