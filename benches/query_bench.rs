use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use quern::config::IndexSettings;
use quern::index::Index;
use quern::models::Document;
use quern::query::QueryNode;
use quern::schema::{FieldOptions, FieldTypes};

const WORDS: [&str; 8] = [
    "rust", "programming", "language", "systems", "quick", "brown", "fox", "search",
];

fn build_index(doc_count: usize) -> Index {
    let mut index = Index::new("bench", IndexSettings::default());
    index
        .create_field("title", FieldTypes::TEXT, FieldOptions::empty())
        .unwrap();
    index
        .create_field("price", FieldTypes::NUMERIC, FieldOptions::SORTABLE)
        .unwrap();
    index
        .create_field("color", FieldTypes::TAG, FieldOptions::empty())
        .unwrap();

    for i in 0..doc_count {
        let title = format!(
            "{} {} {} doc {}",
            WORDS[i % WORDS.len()],
            WORDS[(i / 3) % WORDS.len()],
            WORDS[(i / 7) % WORDS.len()],
            i
        );
        let color = if i % 2 == 0 { "red" } else { "blue,green" };
        index
            .add_document(
                Document::new(format!("doc:{}", i), 1.0, None)
                    .with_text("title", title)
                    .with_number("price", (i % 100) as f64)
                    .with_text("color", color),
            )
            .unwrap();
    }
    index
}

fn union_query(index: &Index) -> QueryNode {
    let mut union = QueryNode::union();
    for word in ["rust", "fox", "search"] {
        union
            .add_child(QueryNode::token(index.schema(), Some("title"), word).unwrap())
            .unwrap();
    }
    union
}

fn phrase_query(index: &Index, exact: bool) -> QueryNode {
    let mut phrase = QueryNode::phrase(exact);
    for word in ["rust", "programming"] {
        phrase
            .add_child(QueryNode::token(index.schema(), Some("title"), word).unwrap())
            .unwrap();
    }
    phrase
        .add_child(QueryNode::numeric(index.schema(), "price", 10.0, 50.0, true, false).unwrap())
        .unwrap();
    phrase
}

fn drain(index: &Index, node: QueryNode) -> usize {
    index.compile(node).count()
}

fn bench_union(c: &mut Criterion) {
    let counts = [1_000usize, 10_000];
    let indexes: Vec<(usize, Index)> = counts.iter().map(|&n| (n, build_index(n))).collect();

    let mut group = c.benchmark_group("union");
    for (count, index) in indexes.iter() {
        group.bench_with_input(BenchmarkId::from_parameter(count), index, |b, index| {
            b.iter(|| black_box(drain(index, union_query(index))));
        });
    }
    group.finish();
}

fn bench_phrase(c: &mut Criterion) {
    let counts = [1_000usize, 10_000];
    let indexes: Vec<(usize, Index)> = counts.iter().map(|&n| (n, build_index(n))).collect();

    let mut group = c.benchmark_group("phrase");
    for (count, index) in indexes.iter() {
        group.bench_with_input(BenchmarkId::new("loose", count), index, |b, index| {
            b.iter(|| black_box(drain(index, phrase_query(index, false))));
        });
        group.bench_with_input(BenchmarkId::new("exact", count), index, |b, index| {
            b.iter(|| black_box(drain(index, phrase_query(index, true))));
        });
    }
    group.finish();
}

fn bench_prefix_and_tag(c: &mut Criterion) {
    let index = build_index(10_000);

    c.bench_function("prefix_expansion", |b| {
        b.iter(|| {
            let node = QueryNode::prefix(index.schema(), None, "pro").unwrap();
            black_box(drain(&index, node))
        });
    });

    c.bench_function("tag_union", |b| {
        b.iter(|| {
            let mut tag = QueryNode::tag(index.schema(), "color").unwrap();
            tag.add_child(QueryNode::token(index.schema(), None, "green").unwrap())
                .unwrap();
            tag.add_child(QueryNode::token(index.schema(), None, "red").unwrap())
                .unwrap();
            black_box(drain(&index, tag))
        });
    });
}

criterion_group!(benches, bench_union, bench_phrase, bench_prefix_and_tag);
criterion_main!(benches);
