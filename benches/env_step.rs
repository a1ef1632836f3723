use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use sheep_env::{ClickPolicy, EnvConfig, RandomClickable, SheepEnv};

fn bench_reset(c: &mut Criterion) {
    let mut group = c.benchmark_group("sheep_reset");
    group.bench_function("reset", |b| {
        let mut env = SheepEnv::new(EnvConfig::default()).expect("default config is valid");
        b.iter(|| black_box(env.reset()));
    });
    group.bench_function("reset_with_seed", |b| {
        let mut env = SheepEnv::new(EnvConfig::default()).expect("default config is valid");
        b.iter(|| black_box(env.reset_with_seed(42)));
    });
    group.finish();
}

fn bench_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("sheep_step");
    group.bench_function("first_legal", |b| {
        let base = SheepEnv::new(EnvConfig::default()).expect("default config is valid");
        b.iter_batched(
            || base.clone(),
            |mut env| {
                let action = env.legal_actions()[0];
                env.step(action).expect("episode is live")
            },
            BatchSize::SmallInput,
        );
    });
    group.bench_function("observe", |b| {
        let env = SheepEnv::new(EnvConfig::default()).expect("default config is valid");
        b.iter(|| black_box(env.observe()));
    });
    group.finish();
}

fn bench_episode(c: &mut Criterion) {
    let mut group = c.benchmark_group("sheep_episode");
    group.bench_function("random_policy", |b| {
        let mut env = SheepEnv::new(EnvConfig::default()).expect("default config is valid");
        let mut policy = RandomClickable::new(7);
        b.iter(|| {
            env.reset();
            let mut total = 0.0;
            while !env.is_done() {
                let Some(action) = policy.choose(&env.export_nodes()) else {
                    break;
                };
                total += env.step(action).expect("episode is live").reward;
            }
            black_box(total)
        });
    });
    group.finish();
}

criterion_group!(benches, bench_reset, bench_step, bench_episode);
criterion_main!(benches);
