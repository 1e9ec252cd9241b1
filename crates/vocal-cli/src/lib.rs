// vocal-cli: shared utilities for CLI tools.

use std::io::{self, BufRead};
use std::process;

use tracing_subscriber::EnvFilter;
use vocal_core::intensity::Intensity;

/// Environment variable consulted when no intensity flag is given.
pub const INTENSITY_ENV: &str = "VOCAL_INTENSITY";

/// Log filter used when `RUST_LOG` is unset or invalid.
const DEFAULT_LOG_FILTER: &str = "warn";

/// Install a stderr log subscriber filtered by `RUST_LOG` (default `warn`).
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

/// Parse an `--intensity=N`, `--intensity N` or `-i N` argument.
///
/// Returns `(intensity, remaining_args)`. A flag without a value is an
/// error.
pub fn parse_intensity(args: &[String]) -> Result<(Option<String>, Vec<String>), String> {
    let mut intensity = None;
    let mut remaining = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if let Some(val) = arg.strip_prefix("--intensity=") {
            intensity = Some(val.to_string());
        } else if arg == "--intensity" || arg == "-i" {
            match args.get(i + 1) {
                Some(val) => {
                    intensity = Some(val.clone());
                    skip_next = true;
                }
                None => return Err(format!("{arg} requires a value")),
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    Ok((intensity, remaining))
}

/// Resolve the dial value: the flag first, then `VOCAL_INTENSITY`, then
/// the default.
pub fn resolve_intensity(flag: Option<&str>) -> Result<Intensity, String> {
    let env = std::env::var(INTENSITY_ENV).ok();
    resolve_intensity_from(flag, env.as_deref())
}

/// [`resolve_intensity`] with the environment value passed in.
pub fn resolve_intensity_from(flag: Option<&str>, env: Option<&str>) -> Result<Intensity, String> {
    match (flag, env) {
        (Some(value), _) => value.parse().map_err(|e| format!("--intensity: {e}")),
        (None, Some(value)) => value.parse().map_err(|e| format!("{INTENSITY_ENV}: {e}")),
        (None, None) => Ok(Intensity::default()),
    }
}

/// Call `f` for every word: the given ones, or else each non-empty
/// trimmed line of stdin.
pub fn for_each_word(words: &[String], mut f: impl FnMut(&str)) {
    if !words.is_empty() {
        for word in words {
            f(word);
        }
        return;
    }

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("error reading stdin: {e}");
                break;
            }
        };
        let word = line.trim();
        if word.is_empty() {
            continue;
        }
        f(word);
    }
}

/// Arguments that are not flags.
pub fn positional(args: &[String]) -> Vec<String> {
    args.iter().filter(|a| !a.starts_with('-')).cloned().collect()
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}
