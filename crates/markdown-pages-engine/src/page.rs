//! # Page Generation
//!
//! Wraps converted markdown in an HTML template and writes it out, one page
//! per markdown file.
//!
//! Templates use two placeholders, `{{ Title }}` and `{{ Content }}`.
//! Root-relative `href="/` and `src="/` links are prefixed with the site
//! basepath so a site can be served from a sub-path.

use std::path::{Path, PathBuf};

use relative_path::RelativePathBuf;

use crate::{
    error::ConvertError,
    html::render,
    io::{self, IoError},
    parsing::{extract_title, parse_document},
};

#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error(transparent)]
    Io(#[from] IoError),
    #[error("Failed to convert {path}: {source}")]
    Convert { path: PathBuf, source: ConvertError },
    #[error("{path} is not inside {root}")]
    OutsideRoot { path: PathBuf, root: PathBuf },
}

/// An HTML page template.
#[derive(Debug, Clone)]
pub struct PageTemplate {
    text: String,
}

impl PageTemplate {
    pub const TITLE: &'static str = "{{ Title }}";
    pub const CONTENT: &'static str = "{{ Content }}";

    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn from_file(path: &Path) -> Result<Self, IoError> {
        Ok(Self::new(io::read_file(path)?))
    }

    /// Fills in the placeholders, then rewrites root-relative links under `basepath`.
    pub fn render(&self, title: &str, content: &str, basepath: &str) -> String {
        let page = self
            .text
            .replace(Self::TITLE, title)
            .replace(Self::CONTENT, content);

        let base = basepath.trim_end_matches('/');
        if base.is_empty() {
            return page;
        }
        page.replace("href=\"/", &format!("href=\"{base}/"))
            .replace("src=\"/", &format!("src=\"{base}/"))
    }
}

/// Converts the markdown file at `from` and writes the templated page to `dest`.
///
/// A document without a `# ` title uses its file stem as the title.
pub fn generate_page(
    from: &Path,
    template: &PageTemplate,
    dest: &Path,
    basepath: &str,
) -> Result<(), PageError> {
    let markdown = io::read_file(from)?;
    let content = parse_document(&markdown)
        .map(|root| render(&root))
        .map_err(|source| PageError::Convert {
            path: from.to_path_buf(),
            source,
        })?;

    let title = extract_title(&markdown).unwrap_or_else(|_| {
        let stem = from
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        log::warn!(
            "{} has no '# ' title, using '{stem}' instead",
            from.display()
        );
        stem
    });

    io::write_file(dest, &template.render(&title, &content, basepath))?;
    log::info!("Generated {} from {}", dest.display(), from.display());
    Ok(())
}

/// Generates a page for every `.md` file under `content_root`, mirroring the
/// directory layout under `dest_root` with `.html` extensions.
///
/// Returns the generated pages relative to `dest_root`, sorted.
pub fn generate_pages_recursive(
    content_root: &Path,
    template: &PageTemplate,
    dest_root: &Path,
    basepath: &str,
) -> Result<Vec<RelativePathBuf>, PageError> {
    let mut generated = Vec::new();

    for file in io::scan_markdown_files(content_root)? {
        let page = relative_to(content_root, &file)?.with_extension("html");
        generate_page(&file, template, &page.to_path(dest_root), basepath)?;
        generated.push(page);
    }

    generated.sort();
    Ok(generated)
}

fn relative_to(root: &Path, path: &Path) -> Result<RelativePathBuf, PageError> {
    let outside = || PageError::OutsideRoot {
        path: path.to_path_buf(),
        root: root.to_path_buf(),
    };
    let stripped = path.strip_prefix(root).map_err(|_| outside())?;
    RelativePathBuf::from_path(stripped).map_err(|_| outside())
}
