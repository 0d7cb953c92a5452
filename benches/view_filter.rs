// benches/view_filter.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use fda_monitor::{
    config::options::{Locale, ViewMode},
    diff::diff_lines,
    export::export_rows,
    filter::visible,
    model::{Dataset, Entry},
};

// Synthetic snapshot roughly the size of a hospital formulary
fn sample(n: usize) -> Dataset {
    let items = (0..n)
        .map(|i| Entry {
            code: format!("C{i:05}"),
            name: format!("Drug {i}"),
            license: format!("L{i:06}"),
            is_changed: i % 7 == 0,
            last_change_date: (i % 7 == 0).then(|| "2024-05-01".to_string()),
            fda_url: format!("https://example.org/{i}"),
            ..Entry::default()
        })
        .collect();
    Dataset::new(items, "2024-05-02")
}

fn label(lines: usize, tweak: usize) -> String {
    (0..lines)
        .map(|i| if tweak > 0 && i % tweak == 0 { format!("revised line {i}") } else { format!("line {i}") })
        .collect::<Vec<_>>()
        .join("\n")
}

fn bench_view(c: &mut Criterion) {
    let ds = sample(3000);

    c.bench_function("visible_changed", |b| {
        b.iter(|| black_box(visible(black_box(&ds), ViewMode::ShowChanged).len()))
    });

    c.bench_function("export_rows_all", |b| {
        b.iter(|| {
            let shown = visible(&ds, ViewMode::ShowAll);
            black_box(export_rows(shown.iter().copied(), Locale::En).len())
        })
    });
}

fn bench_diff(c: &mut Criterion) {
    let old = label(400, 0);
    let new = label(400, 13);

    c.bench_function("diff_label_400", |b| {
        b.iter(|| black_box(diff_lines(black_box(&old), black_box(&new)).len()))
    });
}

criterion_group!(benches, bench_view, bench_diff);
criterion_main!(benches);
