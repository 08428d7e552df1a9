use criterion::{black_box, criterion_group, criterion_main, Criterion};
use alz::{ArtifactKind, ConfigLoader, ConfigMerger};
use serde_yaml::Mapping;

const FIXTURE: &str = include_str!("../tests/fixtures/alz-components.yaml");

fn bench_loading(c: &mut Criterion) {
    let mut group = c.benchmark_group("loading");

    // Parse plus environment merge with one inherited layer
    group.bench_function("load_fixture", |b| {
        b.iter(|| ConfigLoader::load_str(black_box(FIXTURE), "bench").unwrap());
    });

    // Merge alone, on an already parsed document
    let root = ConfigLoader::parse_document(FIXTURE, "bench").unwrap();
    let overrides: Mapping = root["environments"]["prod"].as_mapping().unwrap().clone();
    group.bench_function("merge_prod_overrides", |b| {
        b.iter(|| ConfigMerger::merge(black_box(&root), black_box(&overrides)).unwrap());
    });

    group.finish();
}

fn bench_rendering(c: &mut Criterion) {
    let mut group = c.benchmark_group("rendering");
    let config = ConfigLoader::load_str(FIXTURE, "bench").unwrap();

    for kind in ArtifactKind::ALL {
        group.bench_function(kind.description(), |b| {
            b.iter(|| kind.render(black_box(&config)).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_loading, bench_rendering);
criterion_main!(benches);
