use criterion::{criterion_group, criterion_main, Criterion};
use podflake::{decompose, hash, Settings, Snowflake, MACHINE_ID_MASK};
use std::hint::black_box;
use std::sync::Arc;

fn generator() -> Snowflake {
    Snowflake::new(Settings::builder().identity("origin-vod-bench").build()).unwrap()
}

pub fn generation_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("Generation");

    // Bursts beyond 1024 per tick include the blocking wait for the next tick
    group.bench_function("next_id", |b| {
        let generator = generator();
        b.iter(|| {
            black_box(generator.next_id().unwrap());
        });
    });

    group.finish();
}

pub fn component_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("Components");
    let id = generator().next_id().unwrap();

    group.bench_function("decompose", |b| {
        b.iter(|| {
            black_box(decompose(black_box(id)).unwrap());
        });
    });

    group.bench_function("hash_identity", |b| {
        b.iter(|| {
            black_box(hash(black_box("origin-vod-abc123-xy789"), MACHINE_ID_MASK));
        });
    });

    group.finish();
}

pub fn concurrent_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("Concurrent");

    for &thread_count in &[2, 4, 8] {
        group.bench_function(format!("threads/{}", thread_count), |b| {
            let generator = Arc::new(generator());
            b.iter(|| {
                let mut handles = Vec::with_capacity(thread_count);

                for _ in 0..thread_count {
                    let gen = Arc::clone(&generator);
                    handles.push(std::thread::spawn(move || {
                        for _ in 0..100 {
                            black_box(gen.next_id().unwrap());
                        }
                    }));
                }

                for handle in handles {
                    handle.join().unwrap();
                }
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    generation_benchmarks,
    concurrent_benchmarks,
    component_benchmarks
);
criterion_main!(benches);
