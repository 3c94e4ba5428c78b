use criterion::{criterion_group, criterion_main, measurement::WallTime, BenchmarkGroup, Criterion};
use parasail_core::{Nw, Sg, Sw};
use parasail_matrices::blosum62;
use parasail_types::{GapParams, Scheme};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::time::Duration;

fn random_sequence(rng: &mut ChaCha8Rng, len: usize) -> Vec<u8> {
    const AA: &[u8] = b"ARNDCQEGHILKMFPSTWYV";
    (0..len).map(|_| AA[rng.gen_range(0..AA.len())]).collect()
}

fn bench_recurrence(
    c: &mut BenchmarkGroup<WallTime>,
    s1: &[u8],
    s2: &[u8],
    prefix: &str,
    align: fn(&[u8], &[u8], GapParams, &parasail_matrices::Matrix, Scheme, bool, bool, bool) -> parasail_core::AlignResult,
) {
    let matrix = blosum62();
    let a = matrix.map_sequence(s1).unwrap();
    let b = matrix.map_sequence(s2).unwrap();
    let gap = GapParams::new(10, 1);

    for (name, scheme) in [("striped", Scheme::Striped), ("scan", Scheme::Scan), ("diag", Scheme::Diag)] {
        c.bench_function(&format!("{prefix}/{name}"), |bb| {
            bb.iter(|| align(&a, &b, gap, &matrix, scheme, false, false, false))
        });
    }
}

fn bench(c: &mut Criterion) {
    for len in [64usize, 256, 1024] {
        let mut rng = ChaCha8Rng::seed_from_u64(31415);
        let s1 = random_sequence(&mut rng, len);
        let s2 = random_sequence(&mut rng, len);
        let group_name = format!("len_{len}");
        let c = &mut c.benchmark_group(&group_name);

        bench_recurrence(c, &s1, &s2, "nw", |s1, s2, gap, matrix, scheme, t, rc, st| {
            parasail_core::escalate::align::<Nw>(s1, s2, gap, matrix, scheme, t, rc, st)
        });
        bench_recurrence(c, &s1, &s2, "sg", |s1, s2, gap, matrix, scheme, t, rc, st| {
            parasail_core::escalate::align::<Sg>(s1, s2, gap, matrix, scheme, t, rc, st)
        });
        bench_recurrence(c, &s1, &s2, "sw", |s1, s2, gap, matrix, scheme, t, rc, st| {
            parasail_core::escalate::align::<Sw>(s1, s2, gap, matrix, scheme, t, rc, st)
        });
    }
}

criterion_group!(
    name = benches;
    config = Criterion::default().measurement_time(Duration::from_millis(500)).warm_up_time(Duration::from_millis(100));
    targets = bench
);
criterion_main!(benches);
