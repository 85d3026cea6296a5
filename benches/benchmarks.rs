use criterion::{black_box, criterion_group, criterion_main, Criterion};

use bwt_rust::index::alphabet::Alphabet;
use bwt_rust::index::sa;
use bwt_rust::{inverse, transform, transform_with_opt, BwtOpt, SaAlgorithm, Terminator};

fn make_reference(len: usize) -> Vec<u8> {
    let bases = [b'A', b'C', b'G', b'T'];
    let mut seq = Vec::with_capacity(len);
    let mut x: u32 = 42;
    for _ in 0..len {
        x = x.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        seq.push(bases[(x >> 16) as usize % 4]);
    }
    seq
}

fn encoded_text(seq: &[u8]) -> (Vec<u32>, usize) {
    let alpha = Alphabet::from_seq(seq, Terminator::default());
    let mut text = alpha.encode_seq(seq);
    text.push(0);
    (text, alpha.sigma())
}

fn bench_build_sa(c: &mut Criterion) {
    let reference = make_reference(10_000);
    let (text, sigma) = encoded_text(&reference);

    c.bench_function("build_sa_is_10k", |b| {
        b.iter(|| {
            black_box(sa::build_sa_is(black_box(&text), sigma));
        })
    });
    c.bench_function("build_sa_doubling_10k", |b| {
        b.iter(|| {
            black_box(sa::build_sa_doubling(black_box(&text), false));
        })
    });
}

fn bench_transform(c: &mut Criterion) {
    let reference = make_reference(100_000);
    let t = Terminator::default();

    c.bench_function("transform_100k", |b| {
        b.iter(|| {
            black_box(transform(black_box(reference.as_slice()), t).unwrap());
        })
    });

    let doubling = BwtOpt { sa_algorithm: SaAlgorithm::Doubling, parallel_threshold: 0, ..BwtOpt::default() };
    c.bench_function("transform_100k_parallel_doubling", |b| {
        b.iter(|| {
            black_box(transform_with_opt(black_box(reference.as_slice()), &doubling).unwrap());
        })
    });
}

fn bench_inverse(c: &mut Criterion) {
    let reference = make_reference(100_000);
    let t = Terminator::default();
    let coded = transform(reference.as_slice(), t).unwrap();

    c.bench_function("inverse_100k", |b| {
        b.iter(|| {
            black_box(inverse(black_box(coded.as_slice()), t).unwrap());
        })
    });
}

criterion_group!(benches, bench_build_sa, bench_transform, bench_inverse);
criterion_main!(benches);
