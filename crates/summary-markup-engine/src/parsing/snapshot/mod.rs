//! # Snapshot Testing Support
//!
//! Utilities for testing the parser via snapshot assertions and invariant checks.
//!
//! - **`invariants`**: runtime checks for document invariants (heading levels
//!   in range, no empty blocks, sequences or nodes)
//! - **`outline`** (re-exported from [`crate::outline`]): the stable text form
//!   snapshots are taken of
//!
//! Parsing behavior is pinned by fixture snapshots rather than a separate
//! formal grammar.

pub mod invariants;

pub use crate::outline::outline;
pub use invariants::check as invariants;
