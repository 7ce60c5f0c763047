use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use itertools::Itertools;
use xml_edit_script::{diff, linearize, Config, Mode};

fn document(leaves: usize, r: usize, tag: &str) -> String {
    if leaves <= r {
        (0..leaves).map(|i| format!("<{tag} n=\"{i}\">w{i} x{i}</{tag}>")).join("")
    } else {
        let chunk = (leaves + r - 1) / r;
        (0..leaves)
            .chunks(chunk)
            .into_iter()
            .map(|c| format!("<g>{}</g>", document(c.count(), r, tag)))
            .join("")
    }
}

fn bench(c: &mut Criterion) {
    for mode in [Mode::LabelOnly, Mode::TextAware] {
        let config = Config::default().with_mode(mode);
        let mut group = c.benchmark_group(format!("{mode} diff"));

        for r in [4, 8, 16] {
            let a = format!("<root>{}</root>", document(100, r, "a"));
            let b = format!("<root>{}</root>", document(100, r, "b"));

            let (Ok(a), Ok(b)) = (linearize(&a, &config), linearize(&b, &config)) else {
                continue;
            };

            group.bench_with_input(BenchmarkId::new("self", r), &a, |bench, t| {
                bench.iter(|| diff(t, t, &config))
            });

            group.bench_with_input(BenchmarkId::new("relabeled", r), &(a, b), |bench, (a, b)| {
                bench.iter(|| diff(a, b, &config))
            });
        }

        group.finish();
    }
}

criterion_group!(benches, bench);
criterion_main!(benches);
