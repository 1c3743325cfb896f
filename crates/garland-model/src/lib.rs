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

//! # Garland Model
//!
//! **The Core Domain Model for the Garland Gift-Exchange Solver.**
//!
//! This crate defines the data structures shared by every other crate in the
//! workspace. It is the interchange layer between raw participant input
//! (user-supplied JSON) and the solving engine (`garland-solver`).
//!
//! ## Architecture
//!
//! The crate is designed around a strict separation between **input shape
//! validation** and **solving**:
//!
//! * **`index`**: A strongly-typed participant index to prevent raw-`usize`
//!   indexing errors across crate boundaries.
//! * **`entry`**: The raw entry forms accepted from input files (a bare name,
//!   or a record with a name and an exclusion list) and their shape checks.
//! * **`roster`**: The canonical model — an input-ordered name list plus a
//!   resolved exclusion set per participant. Built once, then immutable.
//! * **`assignment`**: The output format — a giver-to-recipient permutation
//!   over the roster.
//! * **`loading`**: Resolution and parsing of participant files from a path,
//!   an environment variable, or packaged resources.
//!
//! ## Design Philosophy
//!
//! 1.  **Fail-Fast**: Rosters validate their input eagerly; the solver never
//!     sees a duplicate name or a malformed entry.
//! 2.  **Index-Resolved**: Exclusions are resolved to participant indices at
//!     normalization time, so the solver's hot path never touches strings.
//! 3.  **Permissive References**: An exclusion naming somebody who is not in
//!     the roster is dropped silently — stale references (someone who left
//!     the group) must not break a run.

pub mod assignment;
pub mod entry;
pub mod error;
pub mod index;
pub mod loading;
pub mod roster;
