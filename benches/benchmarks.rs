//! Performance benchmarks for smarttree

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use smarttree::summary::FileSummary;
use smarttree::test_utils::TestTree;
use smarttree::{RenderConfig, render_to_string, summarize};

/// A project-shaped tree: source dirs with mixed files, a wide run
/// directory that folds, and a large stop directory.
fn create_test_tree(width: usize) -> TestTree {
    let tree = TestTree::new();

    for module in 0..10 {
        for (i, ext) in ["rs", "py", "md", "toml", "json"].iter().enumerate() {
            tree.add_file(&format!("src/mod_{}/file_{}.{}", module, i, ext), "");
        }
    }
    for dir in tree.add_numbered_dirs("runs", "exp_", width) {
        std::fs::write(dir.join("metrics.csv"), "").unwrap();
    }
    for i in 0..width {
        tree.add_file(&format!("node_modules/pkg_{}/index.js", i), "");
    }

    tree
}

fn bench_summary(c: &mut Criterion) {
    let names: Vec<String> = (0..1000)
        .map(|i| format!("file_{}.{}", i, ["rs", "py", "md", "toml", "json", "txt"][i % 6]))
        .collect();

    c.bench_function("file_summary_1000_names", |b| {
        b.iter(|| FileSummary::from_names(black_box(&names)))
    });

    let tree = create_test_tree(100);
    let src = tree.path().join("src").join("mod_0");
    c.bench_function("summarize_dir", |b| {
        b.iter(|| summarize(black_box(&src), false))
    });
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");

    let small = create_test_tree(20);
    let large = create_test_tree(500);
    let config = RenderConfig::default();

    group.bench_function("small_tree", |b| {
        b.iter(|| render_to_string(black_box(small.path()), &config))
    });

    group.bench_function("large_tree_folded", |b| {
        b.iter(|| render_to_string(black_box(large.path()), &config))
    });

    let everything = RenderConfig::default().show_everything();
    group.bench_function("large_tree_show_everything", |b| {
        b.iter(|| render_to_string(black_box(large.path()), &everything))
    });

    group.finish();
}

criterion_group!(benches, bench_summary, bench_render);
criterion_main!(benches);
