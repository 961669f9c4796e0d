use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use translit_core::{transliterate, Registry};

const SENTENCE: &str = "Съешь же ещё этих мягких французских булок, да выпей чаю. «Центавр» — цирк!";

fn bench_transliterate(c: &mut Criterion) {
    let registry = Registry::builtin().unwrap();
    let text = SENTENCE.repeat(20);

    let mut group = c.benchmark_group("transliterate");
    for code in ["iso9sysa", "iso9sysb", "alalc", "gostr", "pytrans"] {
        let scheme = registry.lookup(code).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(code), &text, |b, text| {
            b.iter(|| transliterate(text, scheme));
        });
    }
    group.finish();
}

fn bench_registry(c: &mut Criterion) {
    c.bench_function("registry_builtin", |b| {
        b.iter(|| Registry::builtin().unwrap());
    });

    let registry = Registry::builtin().unwrap();
    c.bench_function("registry_lookup_by_name", |b| {
        b.iter(|| registry.lookup("ISO 9:1995, ГОСТ 7.79-2000 система Б").unwrap());
    });
}

criterion_group!(benches, bench_transliterate, bench_registry);
criterion_main!(benches);
