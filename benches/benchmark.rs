//! Criterion benchmarks for the hot extraction paths.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use readclip::{capture_page, extract_article, Options};

fn sample_page() -> String {
    let paragraphs: String = (0..40)
        .map(|i| {
            format!(
                "<p>Paragraph {i} with <b>some</b> inline <em>markup</em> and \
                 <a href=\"/link{i}\">a link</a> to keep the transcoder busy.</p>"
            )
        })
        .collect();
    format!(
        r#"<html><head><title>Bench Page</title>
        <meta property="og:image" content="https://ex.com/hero.jpg">
        </head><body>
        <nav><a href="/">home</a><a href="/about">about</a></nav>
        <article><h1>Bench Page</h1>{paragraphs}<img src="/a.png"><img src="/b.png"></article>
        <footer>footer chrome</footer>
        </body></html>"#
    )
}

fn bench_extract_article(c: &mut Criterion) {
    let html = sample_page();
    let options = Options::default();

    c.bench_function("extract_article", |b| {
        b.iter(|| extract_article(black_box(&html), "https://ex.com/post", &options));
    });
}

fn bench_capture_page(c: &mut Criterion) {
    let html = sample_page();
    let options = Options::default();

    c.bench_function("capture_page", |b| {
        b.iter(|| capture_page(black_box(&html), "https://ex.com/post", &options));
    });
}

criterion_group!(benches, bench_extract_article, bench_capture_page);
criterion_main!(benches);
