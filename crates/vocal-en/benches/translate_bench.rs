// Criterion benchmarks for vocal-en.
//
// Lyrics of increasing size are translated at one intensity per bucket;
// word-level benchmarks cover the exception, short-word and engine paths.
//
// Run:
//   cargo bench -p vocal-en

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use vocal_en::translator::VocalTranslator;

const SHORT_PHRASE: &str = "Hello world";

const SINGLE_LINE: &str = "Somewhere over the rainbow way up high";

const VERSE: &str = "Somewhere over the rainbow way up high\n\
    There's a land that I heard of once in a lullaby\n\
    Somewhere over the rainbow skies are blue\n\
    And the dreams that you dare to dream really do come true";

const WORDS: &[&str] = &[
    "the", "it", "hello", "running", "beautiful", "unhappy", "careful", "strong", "rainbow",
    "happiness", "computer", "singing", "remember", "together", "sunshine", "lullaby",
];

/// One dial value per bucket.
const INTENSITIES: [u8; 3] = [1, 5, 9];

fn long_text() -> String {
    std::iter::repeat_n(VERSE, 25).collect::<Vec<_>>().join("\n\n")
}

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

/// Lyrics of four sizes at each bucket.
fn bench_translate_lyrics(c: &mut Criterion) {
    let translator = VocalTranslator::default();
    let long = long_text();
    let inputs: [(&str, &str); 4] = [
        ("short_phrase", SHORT_PHRASE),
        ("single_line", SINGLE_LINE),
        ("multi_line", VERSE),
        ("long_text", long.as_str()),
    ];

    let mut group = c.benchmark_group("translate_lyrics");
    for (name, lyrics) in inputs {
        group.throughput(Throughput::Bytes(lyrics.len() as u64));
        for intensity in INTENSITIES {
            group.bench_with_input(
                BenchmarkId::new(name, intensity),
                &(lyrics, intensity),
                |b, &(lyrics, intensity)| {
                    b.iter(|| std::hint::black_box(translator.translate_lyrics(lyrics, intensity)));
                },
            );
        }
    }
    group.finish();
}

/// Every word in the sample list, one bucket at a time.
fn bench_translate_words(c: &mut Criterion) {
    let translator = VocalTranslator::default();

    let mut group = c.benchmark_group("translate_words");
    group.throughput(Throughput::Elements(WORDS.len() as u64));
    for intensity in INTENSITIES {
        group.bench_with_input(BenchmarkId::from_parameter(intensity), &intensity, |b, &i| {
            b.iter(|| {
                for word in WORDS {
                    std::hint::black_box(translator.translate_word(word, i));
                }
            });
        });
    }
    group.finish();
}

/// Syllable splitting alone.
fn bench_syllabify(c: &mut Criterion) {
    let translator = VocalTranslator::default();

    c.bench_function("syllabify_words", |b| {
        b.iter(|| {
            for word in WORDS {
                std::hint::black_box(translator.syllabify(word));
            }
        });
    });
}

/// Exception dictionary disabled, so every word runs the full pipeline.
fn bench_rules_only(c: &mut Criterion) {
    let mut translator = VocalTranslator::default();
    translator.set_use_exception_dictionary(false);

    c.bench_function("translate_line_rules_only", |b| {
        b.iter(|| std::hint::black_box(translator.translate_lyrics(SINGLE_LINE, 9)));
    });
}

criterion_group!(
    benches,
    bench_translate_lyrics,
    bench_translate_words,
    bench_syllabify,
    bench_rules_only,
);
criterion_main!(benches);
