pub mod error;
pub mod html;
pub mod io;
pub mod page;
pub mod parsing;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use error::ConvertError;
pub use html::{Attributes, HtmlNode, render};
pub use page::{PageError, PageTemplate, generate_page, generate_pages_recursive};
pub use parsing::{extract_title, parse_document, parse_document_bytes};
