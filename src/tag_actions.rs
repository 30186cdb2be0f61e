//! The tag-action table.
//!
//! Every HTML element the engine cares about maps to a [`TagAction`] that
//! tells the content handler how a start or end tag affects its state:
//! whether the current block must be flushed, which nesting depths move, and
//! which labels the enclosed blocks inherit. Elements absent from the table
//! get the default block treatment (depth change plus flush on both edges).

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::error::Warning;
use crate::handler::{ContentHandler, ANCHOR_TEXT_START, ANCHOR_TEXT_END};
use crate::textblock::Label;

/// Per-element capability consulted by the content handler on tag events.
///
/// The set of behaviors is fixed by the HTML vocabulary, so this is a closed
/// enum rather than an open trait.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagAction {
    /// Subtree contributes no text at all (`script`, `style`, `option`, ...).
    Ignorable,
    /// `<a>`: tracks anchor depth and injects the anchor markers into the
    /// token buffer for link-density accounting.
    Anchor,
    /// `<body>`: brackets the region in which blocks may be emitted.
    Body,
    /// Inline element that separates words (`abbr`).
    InlineWhitespace,
    /// Inline formatting element that does not separate words (`b`, `em`, ...).
    InlineNoWhitespace,
    /// Block element whose contained blocks inherit the given labels
    /// (`li`, `h1`..`h3`).
    BlockTagLabel(&'static [Label]),
    /// Void element with no effect on buffers or depths (`br`, `img`, ...).
    IgnorableVoid,
    /// `<time>`: its `datetime` attribute may carry the publication date.
    Time,
}

impl TagAction {
    /// Applies the start-tag side of the action. Returns whether a block
    /// flush must follow.
    pub(crate) fn start(self, h: &mut ContentHandler) -> bool {
        match self {
            TagAction::Ignorable => {
                h.depth_ignorable += 1;
                true
            }
            TagAction::Anchor => {
                if h.depth_anchor > 0 {
                    h.warnings.push(Warning::NestedAnchor);
                    return false;
                }
                h.depth_anchor += 1;
                if h.depth_ignorable == 0 {
                    h.add_whitespace_if_necessary();
                    h.token_buffer.push_str(ANCHOR_TEXT_START);
                    h.token_buffer.push(' ');
                    h.last_was_whitespace = true;
                }
                false
            }
            TagAction::Body => {
                h.flush_block();
                h.depth_body += 1;
                false
            }
            TagAction::InlineWhitespace => {
                h.add_whitespace_if_necessary();
                false
            }
            TagAction::BlockTagLabel(labels) => {
                h.push_labels(labels);
                true
            }
            TagAction::Time => true,
            TagAction::InlineNoWhitespace | TagAction::IgnorableVoid => false,
        }
    }

    /// Applies the end-tag side of the action. Returns whether a block flush
    /// must follow.
    pub(crate) fn end(self, h: &mut ContentHandler) -> bool {
        match self {
            TagAction::Ignorable => {
                h.depth_ignorable -= 1;
                true
            }
            TagAction::Anchor => {
                if h.depth_anchor == 0 {
                    h.warnings.push(Warning::UnopenedAnchorEnd);
                    return false;
                }
                h.depth_anchor -= 1;
                if h.depth_anchor == 0 && h.depth_ignorable == 0 {
                    h.add_whitespace_if_necessary();
                    h.token_buffer.push_str(ANCHOR_TEXT_END);
                    h.token_buffer.push(' ');
                    h.last_was_whitespace = true;
                }
                false
            }
            TagAction::Body => {
                h.flush_block();
                h.depth_body -= 1;
                false
            }
            TagAction::InlineWhitespace => {
                h.add_whitespace_if_necessary();
                false
            }
            TagAction::BlockTagLabel(_) | TagAction::Time => true,
            TagAction::InlineNoWhitespace | TagAction::IgnorableVoid => false,
        }
    }

    /// Whether this element counts toward the nesting depth blocks record.
    #[must_use]
    pub fn changes_tag_level(self) -> bool {
        !matches!(
            self,
            TagAction::InlineWhitespace
                | TagAction::InlineNoWhitespace
                | TagAction::IgnorableVoid
        )
    }
}

const LABELS_LIST: &[Label] = &[Label::List];
const LABELS_H1: &[Label] = &[Label::Heading, Label::Heading1];
const LABELS_H2: &[Label] = &[Label::Heading, Label::Heading2];
const LABELS_H3: &[Label] = &[Label::Heading, Label::Heading3];

/// Element name (lowercase) to tag action.
pub static TAG_ACTIONS: LazyLock<HashMap<&'static str, TagAction>> = LazyLock::new(|| {
    let mut m = HashMap::new();

    for name in [
        "applet", "figcaption", "figure", "noscript", "object", "option", "script", "style",
    ] {
        m.insert(name, TagAction::Ignorable);
    }

    m.insert("a", TagAction::Anchor);

    m.insert("body", TagAction::Body);

    m.insert("abbr", TagAction::InlineWhitespace);

    for name in [
        "b", "code", "em", "font", "i", "span", "strike", "strong", "sub", "sup", "tt", "u",
        "var",
    ] {
        m.insert(name, TagAction::InlineNoWhitespace);
    }

    m.insert("li", TagAction::BlockTagLabel(LABELS_LIST));
    m.insert("h1", TagAction::BlockTagLabel(LABELS_H1));
    m.insert("h2", TagAction::BlockTagLabel(LABELS_H2));
    m.insert("h3", TagAction::BlockTagLabel(LABELS_H3));

    for name in [
        "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "menuitem", "meta",
        "param", "source", "track", "wbr",
    ] {
        m.insert(name, TagAction::IgnorableVoid);
    }

    m.insert("time", TagAction::Time);

    m
});
