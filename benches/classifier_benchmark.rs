use criterion::{black_box, criterion_group, criterion_main, Criterion};

use amygdala::{Prediction, Tokenizer, Vocabulary, DEFAULT_MAX_LENGTH};

fn bench_tokenization(c: &mut Criterion) {
    let tokenizer = Tokenizer::new(Vocabulary::builtin(), DEFAULT_MAX_LENGTH);
    let mut group = c.benchmark_group("Tokenization");

    // Configure sampling
    group.sample_size(50);
    group.warm_up_time(std::time::Duration::from_secs(1));

    // Short text (< 10 words)
    group.bench_function("short_text", |b| {
        b.iter(|| tokenizer.tokenize(black_box("I am so happy today")))
    });

    // Medium text (~40 words)
    group.bench_function("medium_text", |b| {
        b.iter(|| {
            tokenizer.tokenize(black_box(
                "I really did not expect to feel this way about the news, but after \
                 thinking it over for a day I am honestly relieved and even a little \
                 excited about what comes next for all of us",
            ))
        })
    });

    // Long text (truncated at the sequence limit)
    let long_text = "the quick brown fox jumps over the lazy dog ".repeat(40);
    group.bench_function("long_text", |b| {
        b.iter(|| tokenizer.tokenize(black_box(&long_text)))
    });

    group.finish();
}

fn bench_formatting(c: &mut Criterion) {
    let labels: Vec<String> = ["angry", "disgust", "fear", "happy", "neutral", "sad"]
        .iter()
        .map(|label| label.to_string())
        .collect();
    let scores = vec![0.05_f32, 0.02, 0.01, 0.85, 0.05, 0.02];

    let mut group = c.benchmark_group("Formatting");
    group.sample_size(50);

    group.bench_function("score_to_label", |b| {
        b.iter(|| Prediction::from_scores(black_box(scores.clone()), black_box(&labels), 3))
    });

    group.finish();
}

criterion_group!(benches, bench_tokenization, bench_formatting);
criterion_main!(benches);
