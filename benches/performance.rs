use criterion::{black_box, criterion_group, criterion_main, Criterion};
use indent_types::core::{FileScanner, TypeCollector, TypedefExtractor};

fn sample_header(i: usize) -> String {
    format!(
        r#"
typedef unsigned long ticks{i}_t;

typedef struct widget{i} {{
    int x, y;
    int width, height;
    void (*draw)(struct widget{i} *self);
}} Widget{i};

typedef void (*widget{i}_cb)(Widget{i} *w, void *data);

typedef enum {{ STATE{i}_IDLE, STATE{i}_BUSY }} State{i};
"#
    )
}

fn benchmark_extraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("typedef_extraction");

    let text: String = (0..200).map(sample_header).collect();
    let extractor = TypedefExtractor::new();
    group.bench_function("extract_200_headers", |b| {
        b.iter(|| extractor.extract(black_box(&text)))
    });

    let test_dir = std::env::temp_dir().join("indent_types_bench");
    std::fs::create_dir_all(&test_dir).unwrap();
    for i in 0..50 {
        std::fs::write(test_dir.join(format!("widget_{}.h", i)), sample_header(i)).unwrap();
    }

    group.bench_function("collect_50_files", |b| {
        b.iter(|| {
            let files = FileScanner::new().collect(&[test_dir.clone()]).unwrap();
            TypeCollector::new().collect(black_box(&files)).unwrap()
        })
    });

    group.finish();
    std::fs::remove_dir_all(&test_dir).ok();
}

criterion_group!(benches, benchmark_extraction);
criterion_main!(benches);
