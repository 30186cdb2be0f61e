//! Performance benchmarks for rs-boilerpipe.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use rs_boilerpipe::{article, extract_text_str, parse_document_str};

const SAMPLE_HTML: &str = r#"
<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Sample Article - Example News</title>
    <script type="application/ld+json">{"@type":"Article","headline":"Sample Article"}</script>
</head>
<body>
    <nav>
        <a href="/">Home</a>
        <a href="/world">World</a>
        <a href="/business">Business</a>
    </nav>
    <div id="main">
        <h1>Sample Article</h1>
        <p>This is the first paragraph of the article. It contains some meaningful
        content that the density classifier should keep while the navigation and
        footer fall away as boilerplate.</p>
        <p>Here is a second paragraph with more content. The extraction should
        preserve this text while the wrapped-line simulation feeds the text
        density feature that separates prose from link lists.</p>
        <p>A third paragraph ensures the dominant block has enough words for the
        relative-size thresholds to engage during the keep-largest stage.</p>
        <ul>
            <li>a closing takeaway kept with the article</li>
            <li>another closing takeaway kept with the article</li>
        </ul>
    </div>
    <div id="sidebar">
        <h3>Related</h3>
        <ul>
            <li><a href="/a">Related article one</a></li>
            <li><a href="/b">Related article two</a></li>
        </ul>
    </div>
    <footer>
        <p>© 2024 Example News. <a href="/terms">Terms</a></p>
    </footer>
</body>
</html>
"#;

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    group.throughput(Throughput::Bytes(SAMPLE_HTML.len() as u64));
    group.bench_function("parse_document", |b| {
        b.iter(|| parse_document_str(black_box(SAMPLE_HTML)));
    });
    group.finish();
}

fn bench_article(c: &mut Criterion) {
    let mut group = c.benchmark_group("article");
    group.throughput(Throughput::Bytes(SAMPLE_HTML.len() as u64));
    group.bench_function("parse_and_filter", |b| {
        b.iter(|| {
            let mut doc = parse_document_str(black_box(SAMPLE_HTML));
            article().process(&mut doc);
            doc.content()
        });
    });
    group.finish();
}

fn bench_extract_text(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract_text");
    group.throughput(Throughput::Bytes(SAMPLE_HTML.len() as u64));
    group.bench_function("plain_text", |b| {
        b.iter(|| extract_text_str(black_box(SAMPLE_HTML)));
    });
    group.finish();
}

criterion_group!(benches, bench_parse, bench_article, bench_extract_text);
criterion_main!(benches);
