use std::hint::black_box;
use std::time::Duration;

use criterion::{BenchmarkGroup, BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use criterion::measurement::WallTime;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use tessera_core::{
    Cell, HasText, Rectangle, RectangularTextContainer, TextChunk, TextElement, TextParams,
    sanitize,
};

const SEED: u64 = 0x7E55E8A;
const ROW_COUNTS: [usize; 3] = [64, 256, 1024];
const GLYPH_LINES: usize = 50;
const WORDS: [&str; 6] = ["Total", "Qty", "Søn™", "12.50", "Jöhn", "(net)"];

/// Merges and word grouping are both sub-millisecond, so one setting fits all groups.
fn configure(group: &mut BenchmarkGroup<'_, WallTime>) {
    group.sample_size(30);
    group.measurement_time(Duration::from_secs(4));
}

/// Builds `count` four-column rows on a jittered grid, shuffled so merges hit
/// both the append and the prepend path.
fn generate_rows(rng: &mut StdRng, count: usize) -> Vec<RectangularTextContainer<TextChunk>> {
    let mut rows: Vec<_> = (0..count)
        .map(|i| {
            let top = (i / 4) as f64 * 12.0 + rng.random_range(0.0..2.0);
            let left = (i % 4) as f64 * 120.0 + rng.random_range(0.0..4.0);
            let mut row = RectangularTextContainer::new(top, left, 100.0, 10.0);
            for w in 0..4 {
                let text = WORDS[rng.random_range(0..WORDS.len())];
                let te = TextElement::new(top, left + w as f64 * 25.0, 24.0, 10.0, text, 2.5, 0.0);
                row.add(TextChunk::from_element(te));
            }
            row
        })
        .collect();
    rows.shuffle(rng);
    rows
}

/// One glyph per element, forty to a line, with a word gap roughly every sixth glyph.
fn generate_glyphs(rng: &mut StdRng, lines: usize) -> Vec<TextElement> {
    let mut glyphs = Vec::with_capacity(lines * 40);
    for line in 0..lines {
        let top = line as f64 * 14.0;
        let mut x = 36.0;
        for _ in 0..40 {
            let w = rng.random_range(4.0..7.0);
            glyphs.push(TextElement::new(top, x, w, 10.0, "a", 2.5, 0.0));
            x += w + if rng.random_bool(1.0 / 6.0) { 8.0 } else { 0.5 };
        }
    }
    glyphs
}

fn bench_merge(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(SEED);
    let mut group = c.benchmark_group("container_merge");
    configure(&mut group);

    for n in ROW_COUNTS {
        let rows = generate_rows(&mut rng, n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::new("fold", n), &rows, |b, rows| {
            b.iter(|| {
                let mut acc = RectangularTextContainer::from_bounds(Rectangle::default());
                for row in rows.iter().cloned() {
                    acc.merge(row);
                }
                black_box(acc.len());
            })
        });
    }

    group.finish();
}

fn bench_text(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(SEED);
    let glyphs = generate_glyphs(&mut rng, GLYPH_LINES);
    let params = TextParams {
        word_separator: None,
        ..TextParams::default()
    };

    let mut group = c.benchmark_group("text_compose");
    configure(&mut group);
    group.throughput(Throughput::Elements(glyphs.len() as u64));
    group.bench_function("merge_words", |b| {
        b.iter(|| black_box(TextChunk::merge_words(&glyphs, &params).len()))
    });

    let mut cell = Cell::new(0.0, 0.0, 612.0, 792.0);
    for word in TextChunk::merge_words(&glyphs, &params) {
        cell.add_text_chunk(word);
    }
    group.bench_function("cell_text_sanitized", |b| {
        b.iter(|| black_box(sanitize(&cell.text()).len()))
    });

    group.finish();
}

criterion_group!(
    name = container_benches;
    config = Criterion::default().configure_from_args();
    targets = bench_merge, bench_text
);
criterion_main!(container_benches);
