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

//! # Garland Solver
//!
//! The two-phase assignment engine for the gift-exchange problem: find a
//! permutation of the roster assigning every giver exactly one recipient,
//! honoring per-participant exclusions and the self-assignment rule.
//!
//! ## Modules
//!
//! - `constraint`: The single predicate both phases consult. Keeping the
//!   check in one place guarantees the phases can never disagree about what
//!   a valid pairing is.
//! - `shuffle`: Phase 1 — bounded randomized permutation sampling. Cheap and
//!   expected-fast on loosely constrained instances.
//! - `matching`: Phase 2 — Kuhn's augmenting-path maximum bipartite
//!   matching. Complete: finds a valid permutation whenever one exists.
//! - `solver`: Orchestration, configuration, and the `UnsatisfiableError`
//!   verdict (definitive only after the exact phase).
//!
//! ## Motivation
//!
//! Loosely constrained instances resolve in a handful of random trials;
//! pathological instances (tight mutual exclusions) degrade gracefully to an
//! exact algorithm instead of looping forever or reporting a false negative.

pub mod constraint;
pub mod matching;
pub mod shuffle;
pub mod solver;
