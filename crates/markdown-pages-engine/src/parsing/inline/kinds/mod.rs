//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters and patterns.
//!
//! ## Types
//!
//! - **`Emphasis`**: `BOLD = "**"`, `ITALIC = "_"`
//! - **`CodeSpan`**: `TICK` (a single backtick)
//! - **`Image`** / **`Link`**: bracket-paren patterns
//!
//! Pass code reads these constants; it never hardcodes `**` or `](`.

pub mod code_span;
pub mod emphasis;
pub mod link;

pub use code_span::CodeSpan;
pub use emphasis::Emphasis;
pub use link::{Image, Link};
