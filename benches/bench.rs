use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::RngExt;

use calluna::{Engine, IndexOptions, Record, SearchOptions, stem, tokenize};

const WORD_POOL: &[&str] = &[
    "search", "engine", "index", "document", "relevance", "ranking", "token", "stemming",
    "retrieval", "query", "field", "weight", "frequency", "occurrence", "snapshot", "fuzzy",
    "matching", "transposition", "library", "embedded", "memory", "ordered", "deterministic",
    "record", "storage",
];

fn generate_records(count: usize, words_per_body: usize) -> Vec<Record> {
    let mut rng = rand::rng();
    (0..count)
        .map(|n| {
            let body: Vec<&str> = (0..words_per_body)
                .map(|_| WORD_POOL[rng.random_range(0..WORD_POOL.len())])
                .collect();
            Record::from_fields([
                ("key", format!("doc-{n}")),
                ("body", body.join(" ")),
            ])
        })
        .collect()
}

fn indexed_engine(count: usize) -> Engine {
    let mut engine = Engine::new();
    engine
        .index(&generate_records(count, 40), &IndexOptions::new())
        .unwrap();
    engine
}

fn bench_indexing(c: &mut Criterion) {
    let mut group = c.benchmark_group("Indexing");
    group.sample_size(20);

    for count in [100, 1000] {
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            let records = generate_records(count, 40);
            b.iter(|| {
                let mut engine = Engine::new();
                engine.index(&records, &IndexOptions::new()).unwrap();
                engine
            })
        });
    }
    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("Search");
    group.sample_size(50);

    for count in [100, 1000] {
        let engine = indexed_engine(count);
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(
            BenchmarkId::new("exact", count),
            &engine,
            |b, engine| b.iter(|| engine.search("relevance ranking", &SearchOptions::new())),
        );
        group.bench_with_input(
            BenchmarkId::new("fuzzy", count),
            &engine,
            |b, engine| b.iter(|| engine.search("relevnace", &SearchOptions::new())),
        );
    }
    group.finish();
}

fn bench_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("Analysis");

    let text = "there are plenty of words to go around when documents keep \
                arriving and the tokenizer has to keep up with the indexer";
    group.bench_function("tokenize", |b| b.iter(|| tokenize(text, false)));
    group.bench_function("stem", |b| {
        b.iter(|| {
            WORD_POOL.iter().map(|word| stem(word)).collect::<Vec<_>>()
        })
    });
    group.finish();
}

criterion_group!(benches, bench_indexing, bench_search, bench_analysis);
criterion_main!(benches);
