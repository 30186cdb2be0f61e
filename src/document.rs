//! The parsed document: extracted metadata plus the ordered text blocks the
//! filter pipeline operates on.

use chrono::{DateTime, Utc};

use crate::error::Warning;
use crate::handler::ContentHandler;
use crate::linked_data::LinkedDataArticle;
use crate::textblock::TextBlock;

/// An HTML document reduced to its metadata and text blocks.
///
/// Produced by [`parse_document`](crate::parse_document); filters mutate the
/// block list in place. The block list is the only owner of its blocks.
#[derive(Debug, Default)]
pub struct Document {
    /// Document title, from an embedded linked-data headline or `<title>`.
    pub title: Option<String>,

    /// Author name, when an embedded linked-data record carries one.
    pub author: Option<String>,

    /// Publication date, from linked data or a `<time datetime>` attribute.
    pub date: Option<DateTime<Utc>>,

    /// The emitted text blocks, in document order.
    pub text_blocks: Vec<TextBlock>,

    /// Non-fatal diagnostics recorded while processing malformed HTML.
    pub warnings: Vec<Warning>,

    pub(crate) linked_data: Option<LinkedDataArticle>,
}

impl Document {
    pub(crate) fn from_handler(h: ContentHandler) -> Self {
        let linked_data = LinkedDataArticle::from_payloads(&h.linked_data_json);

        let title = match &linked_data {
            Some(article) if !article.headline.is_empty() => Some(article.headline.clone()),
            _ => h.title,
        };

        let author = linked_data
            .as_ref()
            .filter(|article| !article.author.name.is_empty())
            .map(|article| article.author.name.clone());

        let date = linked_data
            .as_ref()
            .and_then(|article| article.date_published)
            .or(h.time);

        Self {
            title,
            author,
            date,
            text_blocks: h.text_blocks,
            warnings: h.warnings,
            linked_data,
        }
    }

    /// The extracted article text: the linked-data `articleBody` when the
    /// document embeds one, otherwise the joined content blocks.
    #[must_use]
    pub fn content(&self) -> String {
        if let Some(body) = self
            .linked_data
            .as_ref()
            .map(|article| &article.body)
            .filter(|body| !body.is_empty())
        {
            return body.clone();
        }

        self.text(true, false)
    }

    /// Joins the selected blocks' text with newlines, trimmed.
    #[must_use]
    pub fn text(&self, include_content: bool, include_non_content: bool) -> String {
        let mut out = String::new();

        for tb in &self.text_blocks {
            if tb.is_content {
                if !include_content {
                    continue;
                }
            } else if !include_non_content {
                continue;
            }

            out.push_str(&tb.text);
            out.push('\n');
        }

        out.trim_matches(|c| c == ' ' || c == '\n').to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::textblock::TextBlock;

    fn doc_with_blocks(blocks: Vec<(&str, bool)>) -> Document {
        let text_blocks = blocks
            .into_iter()
            .enumerate()
            .map(|(i, (text, is_content))| {
                #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
                let mut tb = TextBlock::new(text.to_string(), 1, 0, 0, 0, i as i32, 1);
                tb.is_content = is_content;
                tb
            })
            .collect();

        Document {
            text_blocks,
            ..Document::default()
        }
    }

    #[test]
    fn content_joins_only_content_blocks() {
        let doc = doc_with_blocks(vec![("nav", false), ("body text", true), ("footer", false)]);
        assert_eq!(doc.content(), "body text");
    }

    #[test]
    fn text_can_select_non_content() {
        let doc = doc_with_blocks(vec![("nav", false), ("body text", true), ("footer", false)]);
        assert_eq!(doc.text(false, true), "nav\nfooter");
        assert_eq!(doc.text(true, true), "nav\nbody text\nfooter");
    }

    #[test]
    fn content_empty_for_empty_document() {
        let doc = Document::default();
        assert_eq!(doc.content(), "");
    }
}
