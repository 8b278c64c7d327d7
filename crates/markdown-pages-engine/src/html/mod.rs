//! # HTML Tree
//!
//! The minimal HTML abstract tree produced by the markdown compiler, and the
//! serializer that turns it back into markup.
//!
//! ## Modules
//!
//! - **`node`**: `HtmlNode` (Leaf / Parent) and ordered `Attributes`
//! - **`render`**: `render()` serializes any node recursively
//!
//! Source text is trusted: nothing is escaped on the way out.

pub mod node;
pub mod render;

pub use node::{Attributes, HtmlNode};
pub use render::render;
