// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use criterion::{criterion_group, criterion_main, Criterion};
use garland_model::{entry::ParticipantEntry, roster::Roster};
use garland_solver::solver::SolverBuilder;
use rand::{rngs::StdRng, SeedableRng};
use std::hint::black_box;

/// A loosely constrained roster: each participant excludes one neighbor.
fn ring_roster(size: usize) -> Roster {
    let entries: Vec<_> = (0..size)
        .map(|i| {
            ParticipantEntry::with_exclusions(format!("P{i}"), [format!("P{}", (i + 1) % size)])
        })
        .collect();
    Roster::from_entries(&entries).unwrap()
}

fn bench_randomized_phase(c: &mut Criterion) {
    let roster = ring_roster(100);
    c.bench_function("solve/randomized-100", |b| {
        b.iter(|| {
            let mut solver = SolverBuilder::new()
                .with_rng(StdRng::seed_from_u64(42))
                .build();
            black_box(solver.solve(black_box(&roster)).unwrap())
        })
    });
}

fn bench_exact_phase(c: &mut Criterion) {
    let roster = ring_roster(100);
    c.bench_function("solve/exact-100", |b| {
        b.iter(|| {
            // A zero budget skips sampling, so this measures the matcher.
            let mut solver = SolverBuilder::new()
                .with_rng(StdRng::seed_from_u64(42))
                .with_attempt_budget(0)
                .build();
            black_box(solver.solve(black_box(&roster)).unwrap())
        })
    });
}

criterion_group!(benches, bench_randomized_phase, bench_exact_phase);
criterion_main!(benches);
