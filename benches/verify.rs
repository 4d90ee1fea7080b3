//! Benchmarks for exception classification and diagnostic formatting.
//!
//! Tests the hot paths a large test suite exercises once per expected-exception
//! test:
//! - Full verification runs (matched, wrong type, wrong message)
//! - Message matching under each mode, including regex
//! - Diagnostic text building

extern crate throwspec;

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use throwspec::prelude::*;
use throwspec::verify::messages;

struct Fixture;

impl TestSubject for Fixture {
    fn type_name(&self) -> &str {
        "Bench.Fixture"
    }
}

struct Throwing(Option<Thrown>);

impl ExecutionUnit for Throwing {
    fn execute(
        &mut self,
        _subject: &mut dyn TestSubject,
        _listener: &mut dyn TestListener,
        _outcome: &mut TestOutcome,
    ) -> Result<(), Thrown> {
        Err(self.0.take().expect("single run"))
    }
}

fn run_once(spec: ExpectationSpec, thrown: Thrown) -> TestOutcome {
    let mut verifier = ExpectedExceptionVerifier::new(Box::new(Throwing(Some(thrown))), spec);
    let mut outcome = TestOutcome::new();
    verifier
        .execute(&mut Fixture, &mut NullListener, &mut outcome)
        .expect("no handler registered");
    outcome
}

/// Benchmark a full verification run where type and message both match.
fn bench_verify_matched(c: &mut Criterion) {
    c.bench_function("verify_matched", |b| {
        b.iter(|| {
            let spec = ExpectationSpec::of_type("System.ArgumentException");
            let thrown = Thrown::new("System.ArgumentException", "bad argument");
            black_box(run_once(black_box(spec), black_box(thrown)))
        });
    });
}

/// Benchmark a full verification run ending in the wrong-type diagnostic.
fn bench_verify_wrong_type(c: &mut Criterion) {
    c.bench_function("verify_wrong_type", |b| {
        b.iter(|| {
            let spec = ExpectationSpec::of_type("System.ArgumentException");
            let thrown = Thrown::new("System.InvalidOperationException", "unexpected")
                .with_stack_trace("at Victim.Run()\nat Runner.Invoke()");
            black_box(run_once(black_box(spec), black_box(thrown)))
        });
    });
}

/// Benchmark message matching under the substring mode.
fn bench_match_contains(c: &mut Criterion) {
    let spec = ExpectationSpec::builder()
        .expected_message("out of range")
        .match_mode(MatchMode::Contains)
        .build()
        .unwrap();

    c.bench_function("match_contains", |b| {
        b.iter(|| black_box(spec.matches_message(black_box("error: index 12 out of range"))));
    });
}

/// Benchmark message matching under the regex mode, including the per-call
/// pattern compilation.
fn bench_match_regex(c: &mut Criterion) {
    let spec = ExpectationSpec::builder()
        .expected_message(r"index \d+ out of range")
        .match_mode(MatchMode::Regex)
        .build()
        .unwrap();

    c.bench_function("match_regex", |b| {
        b.iter(|| black_box(spec.matches_message(black_box("error: index 12 out of range"))));
    });
}

/// Benchmark building the wrong-text diagnostic.
fn bench_format_wrong_text(c: &mut Criterion) {
    let spec = ExpectationSpec::builder()
        .expected_message("abc")
        .match_mode(MatchMode::StartsWith)
        .user_message("parser must reject junk")
        .build()
        .unwrap();
    let thrown = Thrown::new("System.Exception", "zzabc");

    c.bench_function("format_wrong_text", |b| {
        b.iter(|| black_box(messages::wrong_text(black_box(&spec), black_box(&thrown))));
    });
}

criterion_group!(
    benches,
    bench_verify_matched,
    bench_verify_wrong_type,
    bench_match_contains,
    bench_match_regex,
    bench_format_wrong_text
);
criterion_main!(benches);
