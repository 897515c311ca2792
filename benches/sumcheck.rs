use ark_std::test_rng;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use sumcheck_lde::field::bls12_381::Fr;
use sumcheck_lde::sumcheck::{RngChallenger, TranscriptChallenger};
use sumcheck_lde::{run_protocol, Prover, ProverConfig, ProverStrategy, SumCheckField};

fn random_table(num_vars: usize) -> Vec<Fr> {
    let mut rng = test_rng();
    (0..1usize << num_vars).map(|_| Fr::random(&mut rng)).collect()
}

/// Benchmark: all prover rounds, folding vs recomputing from the table
fn bench_prover_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("sumcheck_prover");

    for num_vars in [6usize, 8, 10] {
        let g = random_table(num_vars);
        let challenges: Vec<Fr> = random_table(4).into_iter().cycle().take(num_vars).collect();
        group.throughput(Throughput::Elements(1 << num_vars));

        for strategy in [ProverStrategy::Folding, ProverStrategy::Recompute] {
            let config = ProverConfig {
                strategy,
                ..ProverConfig::default()
            };
            group.bench_with_input(
                BenchmarkId::new(format!("{:?}", strategy), format!("ν={}", num_vars)),
                &num_vars,
                |b, &nv| {
                    b.iter(|| {
                        let mut prover = Prover::with_config(g.clone(), nv, config).unwrap();
                        let mut challenge = None;
                        for r in &challenges {
                            black_box(prover.round_polynomial(challenge).unwrap());
                            challenge = Some(*r);
                        }
                    });
                },
            );
        }
    }
    group.finish();
}

/// Benchmark: complete honest session including the oracle query
fn bench_full_protocol(c: &mut Criterion) {
    let mut group = c.benchmark_group("sumcheck_protocol");

    for num_vars in [8usize, 10, 12, 14] {
        let g = random_table(num_vars);
        group.throughput(Throughput::Elements(1 << num_vars));

        group.bench_with_input(
            BenchmarkId::new("rng", format!("ν={}", num_vars)),
            &num_vars,
            |b, &nv| {
                b.iter(|| {
                    black_box(
                        run_protocol(
                            g.clone(),
                            nv,
                            ProverConfig::default(),
                            RngChallenger::new(test_rng()),
                        )
                        .unwrap(),
                    )
                });
            },
        );
        group.bench_with_input(
            BenchmarkId::new("transcript", format!("ν={}", num_vars)),
            &num_vars,
            |b, &nv| {
                b.iter(|| {
                    black_box(
                        run_protocol(
                            g.clone(),
                            nv,
                            ProverConfig::default(),
                            TranscriptChallenger::new(b"bench"),
                        )
                        .unwrap(),
                    )
                });
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_prover_strategies, bench_full_protocol);
criterion_main!(benches);
