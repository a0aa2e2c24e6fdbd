//! Pipeline throughput benchmark

use argot_core::{build, FilterConfig};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const DOCUMENT: &str = r#"
    glitch = { percentage = 5, seed = 42 }

    [phrases]
    "going to" = "gonna"
    "kind of" = "kinda"

    [words]
    friend = "cat"
    good = "groovy"
    great = "dynamite"

    [characters]
    th = "d"

    [suffixes]
    ing = "in'"

    [[sentence_augmentation]]
    punctuation = "."
    additions = [" Right on.", " Solid."]
    frequency = 2
"#;

const TEXT: &str = "I am going to see my friend. It is kind of a great day. \
                    We are singing and dancing. Everything is good.";

fn bench_pipeline(c: &mut Criterion) {
    let config: FilterConfig = toml::from_str(DOCUMENT).unwrap();

    c.bench_function("build", |b| {
        b.iter(|| build(black_box(&config)).unwrap());
    });

    let mut pipeline = build(&config).unwrap();
    c.bench_function("rewrite", |b| {
        b.iter(|| pipeline.rewrite(black_box(TEXT)));
    });
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
