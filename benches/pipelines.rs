use criterion::{black_box, criterion_group, criterion_main, Criterion};
use riffle_seq::Sequence;

/// Deterministic pseudo-random values (LCG) so runs are comparable.
fn make_values(n: usize) -> Vec<i64> {
    let mut state = 0x2545f4914f6cdd1du64;
    (0..n)
        .map(|_| {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            (state >> 33) as i64
        })
        .collect()
}

fn bench_top_k(c: &mut Criterion) {
    let seq = Sequence::from_vec(make_values(10_000));

    c.bench_function("top_k_32_of_10k", |b| {
        b.iter(|| black_box(seq.top_k(32, |a, b| a < b).to_vec()))
    });

    // The baseline top-k replaces: materialize, sort everything, truncate.
    c.bench_function("order_by_take_32_of_10k", |b| {
        b.iter(|| black_box(seq.order_by(|a, b| a.cmp(b)).take(32).to_vec()))
    });
}

fn bench_operator_chain(c: &mut Criterion) {
    let seq = Sequence::from_vec(make_values(10_000));

    c.bench_function("filter_map_take_chain_10k", |b| {
        b.iter(|| {
            black_box(
                seq.filter(|x| x % 3 != 0)
                    .map(|x| x ^ (x >> 7))
                    .take(1_000)
                    .to_vec(),
            )
        })
    });

    c.bench_function("distinct_union_10k", |b| {
        let other = Sequence::from_vec(make_values(1_000));
        b.iter(|| black_box(seq.map(|x| x % 512).union(&other.map(|x| x % 512)).to_vec()))
    });
}

criterion_group!(benches, bench_top_k, bench_operator_chain);
criterion_main!(benches);
