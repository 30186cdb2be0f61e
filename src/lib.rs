//! # rs-boilerpipe
//!
//! Rust port of the boilerpipe algorithm: structural and statistical
//! extraction of article text from HTML documents.
//!
//! The engine parses HTML into a stream of lexical tokens, groups character
//! data between block-level tag boundaries into text blocks carrying density
//! statistics (word counts, link density, wrapped-line counts, nesting
//! depth), then runs a pipeline of classifying and fusing filters that mark
//! each block as content or boilerplate. The result is the ordered
//! concatenation of content blocks plus the extracted title and, when
//! present, the publication date and author.
//!
//! ## Quick start
//!
//! ```rust
//! use rs_boilerpipe::{article, parse_document};
//!
//! let html = r#"<html><head><title>My Article</title></head>
//! <body><p>The quick brown fox jumps over the lazy dog. The quick brown
//! fox jumps over the lazy dog. The quick brown fox jumps over the lazy
//! dog.</p></body></html>"#;
//!
//! let mut doc = parse_document(html.as_bytes())?;
//! article().process(&mut doc);
//!
//! println!("Title: {:?}", doc.title);
//! println!("Content: {}", doc.content());
//! # Ok::<(), rs_boilerpipe::Error>(())
//! ```
//!
//! No DOM is built and no CSS or scripting is interpreted: classification
//! rests entirely on the density statistics, which makes the engine fast and
//! layout-agnostic.

mod document;
mod error;
mod handler;
mod linked_data;
mod parse;
mod patterns;
mod tag_actions;
mod textblock;

/// Character encoding detection and transcoding for byte input.
pub mod encoding;

/// The filter pipeline and the individual block filters.
pub mod filter;

// Public API - re-exports
pub use document::Document;
pub use error::{Error, Result, Warning};
pub use filter::{article, Filter, Pipeline};
pub use handler::ContentHandler;
pub use parse::{
    extract_text, extract_text_str, parse_document, parse_document_bytes, parse_document_str,
};
pub use tag_actions::TagAction;
pub use textblock::{Label, TextBlock};

/// Parses a document and runs the [`article`] pipeline over it in one call.
///
/// # Errors
///
/// Returns an error when reading the stream fails.
///
/// # Example
///
/// ```rust
/// use rs_boilerpipe::extract_article;
///
/// let html = "<html><body><p>Some article body text goes here, long \
///             enough that the classifier keeps it as content for this \
///             small example document.</p></body></html>";
/// let doc = extract_article(html.as_bytes())?;
/// assert!(!doc.content().is_empty());
/// # Ok::<(), rs_boilerpipe::Error>(())
/// ```
pub fn extract_article<R: std::io::Read>(r: R) -> Result<Document> {
    let mut doc = parse_document(r)?;
    article().process(&mut doc);
    Ok(doc)
}
