use criterion::{black_box, criterion_group, criterion_main, Criterion};
use weaver_solver::{all_neighbors, load_dictionary, LadderSolver, Limits};

fn bench_neighbors(c: &mut Criterion) {
    let words = load_dictionary();
    c.bench_function("neighbors cold", |b| {
        b.iter(|| all_neighbors(black_box(&words), black_box("cold")))
    });
}

fn bench_solve(c: &mut Criterion) {
    let words = load_dictionary();
    let solver = LadderSolver::new(&words, Limits::unlimited());

    let mut group = c.benchmark_group("solve");
    for (start, end) in [("word", "work"), ("cold", "warm"), ("head", "tail")] {
        group.bench_function(format!("{start}->{end}"), |b| {
            b.iter(|| solver.solve(black_box(start), black_box(end)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_neighbors, bench_solve);
criterion_main!(benches);
