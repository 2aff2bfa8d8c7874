//! # Inline Kinds
//!
//! Inline types that own their delimiters.
//!
//! ## Types
//!
//! - **`Strong`**: `DELIM = b"**"`
//! - **`CodeSpan`**: `TICK = b'\`'`
//! - **`Emphasis`**: `DELIM = b"*"`
//!
//! The parser refers to these constants; it never hardcodes `*` or `` ` ``.

pub mod code_span;
pub mod emphasis;
pub mod strong;

pub use code_span::CodeSpan;
pub use emphasis::Emphasis;
pub use strong::Strong;
