//! # Block Kinds
//!
//! Block types that own their line markers. Each kind builds its line
//! pattern from its own constants, and the classifier asks these types
//! whether a line opens them; it never hardcodes `#`, `-` or `1.`.

pub mod bullet_list;
pub mod heading;
pub mod ordered_list;
pub mod paragraph;

pub use bullet_list::BulletList;
pub use heading::Heading;
pub use ordered_list::OrderedList;
pub use paragraph::Paragraph;
