use criterion::{criterion_group, criterion_main, Criterion};
use dsvlib::{CsvFormat, Document};

const ROWS: usize = 1_000;

fn sample_text() -> String {
    let mut document = Document::new();
    for i in 0..ROWS {
        document.add_row(dsvlib::row![
            i,
            format!("name {i}"),
            "a,b",
            "line\nbreak",
            3.25 * i as f64,
            ""
        ]);
    }
    document.to_text(&CsvFormat::COMMA_SEPARATED)
}

fn parse_document(text: &str) {
    let document = dsvlib::parse(text.chars(), &CsvFormat::COMMA_SEPARATED).unwrap();
    assert_eq!(document.row_count(), ROWS);
}

fn criterion_benchmark(c: &mut Criterion) {
    let text = sample_text();
    let document = dsvlib::parse(text.chars(), &CsvFormat::COMMA_SEPARATED).unwrap();

    let mut group = c.benchmark_group("DSV Performance");
    group.significance_level(0.1).sample_size(10);
    group.bench_function("parse", |b| b.iter(|| parse_document(&text)));
    group.bench_function("render", |b| {
        b.iter(|| document.to_text(&CsvFormat::COMMA_SEPARATED))
    });
    group.finish();
}
criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
