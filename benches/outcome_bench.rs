//! Benchmark for Outcome combinator pipelines.
//!
//! Compares combinator chains against the equivalent `std::result::Result`
//! code to show the cost (if any) of going through `Outcome`.

use criterion::{Criterion, criterion_group, criterion_main};
use fallible::prelude::*;
use std::hint::black_box;

fn halve(n: i64) -> Outcome<i64, String> {
    if n % 2 == 0 {
        Outcome::Ok(n / 2)
    } else {
        Outcome::Err(format!("{n} is odd"))
    }
}

fn halve_std(n: i64) -> Result<i64, String> {
    if n % 2 == 0 {
        Ok(n / 2)
    } else {
        Err(format!("{n} is odd"))
    }
}

// =============================================================================
// Pipeline Benchmarks
// =============================================================================

fn benchmark_chain_pipeline(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("chain_pipeline");

    group.bench_function("outcome_chain_ok", |bencher| {
        bencher.iter(|| {
            let outcome: Outcome<i64, String> = Outcome::Ok(black_box(1024));
            black_box(
                outcome
                    .chain(halve)
                    .chain(halve)
                    .map(|n| n + 1)
                    .check(|n| *n > 0, "negative".to_string()),
            )
        });
    });

    group.bench_function("std_and_then_ok", |bencher| {
        bencher.iter(|| {
            let result: Result<i64, String> = Ok(black_box(1024));
            black_box(
                result
                    .and_then(halve_std)
                    .and_then(halve_std)
                    .map(|n| n + 1)
                    .and_then(|n| if n > 0 { Ok(n) } else { Err("negative".to_string()) }),
            )
        });
    });

    group.bench_function("outcome_chain_short_circuit", |bencher| {
        bencher.iter(|| {
            let outcome: Outcome<i64, String> = Outcome::Ok(black_box(3));
            black_box(outcome.chain(halve).chain(halve).map(|n| n + 1))
        });
    });

    group.finish();
}

fn benchmark_recovery(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("recovery");

    group.bench_function("outcome_or_else_if", |bencher| {
        bencher.iter(|| {
            let outcome: Outcome<i64, u16> = Outcome::Err(black_box(404));
            black_box(outcome.or_else_if(|status| *status == 404, |_| Outcome::Ok(0)))
        });
    });

    group.bench_function("from_try_catch_ok", |bencher| {
        bencher.iter(|| black_box(Outcome::from_try_catch(|| black_box(21) * 2)));
    });

    group.finish();
}

criterion_group!(benches, benchmark_chain_pipeline, benchmark_recovery);
criterion_main!(benches);
