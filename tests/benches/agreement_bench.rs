// File: tests/benches/agreement_bench.rs
// Full sessions, from init to derived key, per curve and configuration

use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use ecka_agreement::{AgreementConfiguration, LocalKeyMaterial, RemoteKeyMaterial};
use ecka_algorithms::NamedCurve;
use ecka_tests::{domain, mqv_exchange, run_session, test_rng, MqvParty, Party};

fn bench_plain_sessions(c: &mut Criterion) {
    let mut group = c.benchmark_group("session");
    let mut rng = test_rng(1);

    for curve in NamedCurve::ALL {
        let domain = domain(curve);
        let a = Party::generate(&domain, &mut rng);
        let b = Party::generate(&domain, &mut rng);

        for name in ["ECDH", "ECDHC", "ECDHwithSHA256KDF", "ECDHwithSHA256CKDF"] {
            let config = AgreementConfiguration::by_name(name).unwrap();
            group.bench_function(BenchmarkId::new(name, curve.name()), |bench| {
                bench.iter_batched(
                    || {
                        (
                            LocalKeyMaterial::from(a.private.clone()),
                            RemoteKeyMaterial::from(b.public.clone()),
                        )
                    },
                    |(local, remote)| run_session(config, local, remote, black_box(32)).unwrap(),
                    BatchSize::SmallInput,
                )
            });
        }
    }

    group.finish();
}

fn bench_mqv_sessions(c: &mut Criterion) {
    let mut group = c.benchmark_group("mqv");
    let mut rng = test_rng(2);
    let config = AgreementConfiguration::by_name("ECMQVwithSHA256KDF").unwrap();

    for curve in [NamedCurve::P256, NamedCurve::P384] {
        let domain = domain(curve);
        let a = MqvParty::generate(&domain, &mut rng);
        let b = MqvParty::generate(&domain, &mut rng);
        group.bench_function(curve.name(), |bench| {
            bench.iter(|| mqv_exchange(config, black_box(&a), black_box(&b), 32).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_plain_sessions, bench_mqv_sessions);
criterion_main!(benches);
