//! # Inline Tokenizing
//!
//! Cursor-based splitting of one line into plain and styled spans.
//!
//! ## Modules
//!
//! - **`kinds`**: Inline types with owned delimiters (Strong, CodeSpan, Emphasis)
//! - **`cursor`**: `Cursor` for byte-by-byte parsing with position tracking
//! - **`parser`**: `tokenize()` main entry point with `try_parse_*` helpers
//!
//! ## Precedence
//!
//! Spans are found leftmost-first. At one position bold is tried before
//! code and italic. Matched content is never scanned again, so spans do
//! not nest: `` *`x`* `` is italic text containing backticks.

pub mod cursor;
pub mod kinds;
pub mod parser;

pub use parser::tokenize;
