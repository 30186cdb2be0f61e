//! Error types for rs-boilerpipe.
//!
//! Fatal errors abort parsing and are returned to the caller. Malformed-HTML
//! conditions are non-fatal: they are recorded as [`Warning`]s on the
//! document and processing continues.

/// Error type for parsing operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Reading the input stream failed before the tokenizer reached
    /// end-of-input.
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for parsing operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Non-fatal diagnostic recorded while processing malformed HTML.
///
/// Warnings never stop extraction; they describe input defects the handler
/// recovered from.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Warning {
    /// An `<a>` element was opened inside another `<a>` element. The inner
    /// anchor's side effects are skipped.
    #[error("input contains nested <a> elements")]
    NestedAnchor,

    /// An `</a>` end tag arrived with no anchor open.
    #[error("input contains an unopened </a> element")]
    UnopenedAnchorEnd,

    /// An end tag did not match the innermost open element. The event is
    /// dropped.
    #[error("end tag </{found}> does not match open element <{expected}>")]
    MismatchedEndTag {
        /// Name of the element that was actually open.
        expected: String,
        /// Name carried by the offending end tag.
        found: String,
    },

    /// An end tag arrived while no element was open at all.
    #[error("stray end tag </{found}> with no open element")]
    StrayEndTag {
        /// Name carried by the offending end tag.
        found: String,
    },
}
