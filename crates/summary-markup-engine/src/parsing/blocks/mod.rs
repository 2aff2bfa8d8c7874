//! # Block Segmentation
//!
//! Two-phase segmentation of a summary into blocks.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each line becomes a `LineClass`
//!    holding only local facts (blank, heading, bullet, numbered, text)
//!
//! 2. **Block Construction** (`builder`): a `BlockBuilder` keeps at most one
//!    open paragraph or list and emits `Block`s as lines close them
//!
//! ## Modules
//!
//! - **`kinds`**: Block types with owned markers (Heading, BulletList, OrderedList, Paragraph)
//! - **`classify`**: `SummaryLineClassifier` produces `LineClass` for each line
//! - **`builder`**: `BlockBuilder` state machine for block construction
//!
//! ## Key Invariants
//!
//! - Blank lines end any open block and never produce one
//! - A heading or list line always ends an open paragraph
//! - Lists never nest; bullets and numbers never share a list

pub mod builder;
pub mod classify;
pub mod kinds;

pub use builder::BlockBuilder;
pub use classify::{LineClass, LineKind, SummaryLineClassifier};
