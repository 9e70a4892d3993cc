use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use streetlight_core::Script;
use streetlight_transliteration::{table, TransliterationEngine};

/// Sign texts as read off street boards
const SIGNS: &[(&str, &str)] = &[
    ("devanagari", "राष्ट्रीय राजमार्ग ४८ - दिल्ली १२० कि.मी."),
    ("tamil", "சென்னை மத்திய ரயில் நிலையம்"),
    ("bengali", "কলকাতা পৌরসভা প্রবেশ নিষেধ"),
    ("gurmukhi", "ਸ੍ਰੀ ਹਰਿਮੰਦਰ ਸਾਹਿਬ ਅੰਮ੍ਰਿਤਸਰ"),
    ("mixed", "EXIT निकास 24x7 ATM"),
];

fn bench_detect(c: &mut Criterion) {
    let engine = TransliterationEngine::new();
    let mut group = c.benchmark_group("detect_script");
    for (name, text) in SIGNS {
        group.bench_with_input(BenchmarkId::from_parameter(name), text, |b, text| {
            b.iter(|| engine.detect_script(black_box(text)))
        });
    }
    group.finish();
}

fn bench_transliterate(c: &mut Criterion) {
    // Build tables outside the measurement
    table::warm_up();

    let engine = TransliterationEngine::new();
    let mut group = c.benchmark_group("transliterate");
    for target in [Script::Devanagari, Script::Tamil, Script::Malayalam] {
        for (name, text) in SIGNS {
            group.throughput(Throughput::Bytes(text.len() as u64));
            group.bench_with_input(
                BenchmarkId::new(target.code(), name),
                text,
                |b, text| b.iter(|| engine.transliterate(black_box(text), target, None)),
            );
        }
    }
    group.finish();
}

fn bench_long_text(c: &mut Criterion) {
    let engine = TransliterationEngine::new();
    let text = SIGNS[0].1.repeat(200);
    let mut group = c.benchmark_group("long_text");
    group.throughput(Throughput::Bytes(text.len() as u64));
    group.bench_function("devanagari_to_telugu", |b| {
        b.iter(|| engine.transliterate_detailed(black_box(&text), Script::Telugu, None))
    });
    group.bench_function("romanize", |b| {
        b.iter(|| engine.romanize(black_box(&text), None))
    });
    group.finish();
}

criterion_group!(benches, bench_detect, bench_transliterate, bench_long_text);
criterion_main!(benches);
