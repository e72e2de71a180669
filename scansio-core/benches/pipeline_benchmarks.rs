//! Throughput benchmarks for the scansion pipeline

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use scansio_core::ScansionProcessor;
use std::hint::black_box;

const CATILINE: &str = "quō usque tandem abūtēre, Catilīna, patientiā nostrā aetatis. \
                        quam diū etiam furor iste tuus nōs ēlūdet. \
                        quem ad fīnem sēsē effrēnāta iactābit audācia.";

fn text_of_sentences(count: usize) -> String {
    vec![CATILINE; count.div_ceil(3)].join(" ")
}

fn bench_scan_text(c: &mut Criterion) {
    let mut group = c.benchmark_group("scan_text");

    for sentences in [3usize, 30, 300, 3000] {
        let text = text_of_sentences(sentences);

        let sequential = ScansionProcessor::builder().sequential().build();
        group.bench_with_input(
            BenchmarkId::new("sequential", sentences),
            &text,
            |b, text| b.iter(|| sequential.scan_text(black_box(text))),
        );

        #[cfg(feature = "parallel")]
        {
            let parallel = ScansionProcessor::new();
            group.bench_with_input(
                BenchmarkId::new("parallel", sentences),
                &text,
                |b, text| b.iter(|| parallel.scan_text(black_box(text))),
            );
        }
    }

    group.finish();
}

fn bench_stages(c: &mut Criterion) {
    use scansio_core::{elide, fix_qu, scan, syllabify, Sentence, Tokenizer};

    let tokenizer = Tokenizer::new();
    let sentences = tokenizer.tokenize(CATILINE);
    let tokens = &sentences[0];

    c.bench_function("syllabify_sentence", |b| {
        b.iter(|| {
            for token in tokens {
                black_box(syllabify(black_box(token)).unwrap());
            }
        })
    });

    c.bench_function("full_sentence_pipeline", |b| {
        b.iter(|| {
            let mut words = Vec::with_capacity(tokens.len());
            for token in tokens {
                let mut word = syllabify(black_box(token)).unwrap();
                fix_qu(&mut word);
                words.push(word);
            }
            let mut sentence = Sentence::from_words(words);
            elide(&mut sentence);
            let syllables = sentence.condense();
            black_box(scan(&syllables))
        })
    });
}

criterion_group!(benches, bench_scan_text, bench_stages);
criterion_main!(benches);
