use codspeed_criterion_compat::{Criterion, black_box, criterion_group, criterion_main};
use lazyseq::{List, interval, iterate};

// ============================================================================
// Construction Benchmarks
// ============================================================================

fn bench_build_from_iterator(c: &mut Criterion) {
    c.bench_function("build list (10k elements)", |b| {
        b.iter(|| black_box((0..10_000u64).collect::<List<u64>>()))
    });
}

fn bench_cons_prepend(c: &mut Criterion) {
    let base: List<u64> = (0..10_000).collect();
    c.bench_function("cons onto shared tail", |b| {
        b.iter(|| black_box(base.cons(0)))
    });
}

// ============================================================================
// Forcing Benchmarks
// ============================================================================

fn bench_force_mapped_chain(c: &mut Criterion) {
    c.bench_function("force map+filter chain (10k elements)", |b| {
        b.iter(|| {
            let list = interval(0u64, 10_000)
                .map(|n| n * 3)
                .filter(|n| n % 2 == 0);
            black_box(list.len())
        })
    });
}

fn bench_force_nested_skips(c: &mut Criterion) {
    c.bench_function("resolve 1k nested streams", |b| {
        b.iter(|| {
            let mut list = iterate(0u64, |n| n + 1);
            for _ in 0..1_000 {
                list = list.skip(1);
            }
            black_box(list.head())
        })
    });
}

// ============================================================================
// Strict Walk Benchmarks
// ============================================================================

fn bench_fold_sum(c: &mut Criterion) {
    let list: List<u64> = (0..10_000).collect();
    c.bench_function("fold sum (10k elements)", |b| {
        b.iter(|| black_box(list.fold(0u64, |a, b| a + b)))
    });
}

fn bench_sort(c: &mut Criterion) {
    let list: List<u64> = (0..2_000u64).map(|n| n.wrapping_mul(2_654_435_761)).collect();
    c.bench_function("sort (2k elements)", |b| {
        b.iter(|| black_box(list.sort().len()))
    });
}

criterion_group!(
    benches,
    bench_build_from_iterator,
    bench_cons_prepend,
    bench_force_mapped_chain,
    bench_force_nested_skips,
    bench_fold_sum,
    bench_sort,
);
criterion_main!(benches);
