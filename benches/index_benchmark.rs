//! Benchmarks for pagemark indexing performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks use synthetic chapter text.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pagemark::{Chapter, IndexOptions, PageIndex, SearchOptions};

/// Creates synthetic chapter text with the given number of pages.
fn create_chapter(first_page: u32, page_count: u32) -> String {
    let mut text = String::from("CHAPTER TITLE");
    for n in first_page..first_page + page_count {
        text.push_str(&format!("\n\n--- *Page {}* ---\n\n", n));
        for _ in 0..12 {
            text.push_str(
                "We had but two alternatives: one was to go on to the bitter end, \
                 the other, to accept *spiritual* help.\n\n",
            );
        }
        text.push_str("End of page.");
    }
    text
}

fn create_book(chapter_count: u32, pages_per_chapter: u32) -> Vec<Chapter> {
    (0..chapter_count)
        .map(|i| {
            Chapter::new(
                format!("chapter-{}", i + 1),
                create_chapter(i * pages_per_chapter + 1, pages_per_chapter),
            )
        })
        .collect()
}

/// Benchmark scanning a single chapter at various sizes.
fn bench_build_page_index(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_page_index");

    for page_count in [1, 10, 100].iter() {
        let text = create_chapter(1, *page_count);

        group.bench_function(format!("{}_pages", page_count), |b| {
            b.iter(|| pagemark::build_page_index("chapter-1", black_box(&text)));
        });
    }

    group.finish();
}

/// Benchmark indexing a whole book, parallel and sequential.
fn bench_book_index(c: &mut Criterion) {
    let chapters = create_book(16, 20);
    let mut group = c.benchmark_group("book_index");

    group.bench_function("parallel", |b| {
        b.iter(|| PageIndex::build(black_box(&chapters), &IndexOptions::new()));
    });
    group.bench_function("sequential", |b| {
        b.iter(|| PageIndex::build(black_box(&chapters), &IndexOptions::new().sequential()));
    });

    group.finish();
}

/// Benchmark lookups against a built index.
fn bench_lookups(c: &mut Criterion) {
    let index = PageIndex::build(&create_book(16, 20), &IndexOptions::new());

    c.bench_function("page_by_number", |b| {
        b.iter(|| index.page_by_number(black_box("chapter-8"), black_box(150)));
    });

    c.bench_function("page_for_position", |b| {
        b.iter(|| index.page_for_position(black_box("chapter-8"), black_box(20_000)));
    });

    c.bench_function("search", |b| {
        b.iter(|| pagemark::search::search(&index, black_box("bitter"), &SearchOptions::new()));
    });
}

/// Benchmark emphasis tokenizing.
fn bench_tokenize(c: &mut Criterion) {
    let line = "Half measures availed us *nothing*. We stood at the *turning point*.";

    c.bench_function("tokenize_emphasis", |b| {
        b.iter(|| pagemark::tokenize_emphasis(black_box(line)));
    });
}

criterion_group!(
    benches,
    bench_build_page_index,
    bench_book_index,
    bench_lookups,
    bench_tokenize,
);
criterion_main!(benches);
