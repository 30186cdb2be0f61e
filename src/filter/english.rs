//! Filters built on English-language word statistics and phrases.

#![allow(clippy::float_cmp)]

use crate::document::Document;
use crate::filter::Filter;
use crate::textblock::{Label, TextBlock, EMPTY_END, EMPTY_START};

/// Labels short blocks whose text marks the end of the article proper:
/// comment-section headers, rating prompts, agency bylines.
pub struct TerminatingBlocks;

impl Filter for TerminatingBlocks {
    fn name(&self) -> &str {
        "TerminatingBlocks"
    }

    fn process(&self, doc: &mut Document) -> bool {
        let mut has_changed = false;

        for tb in &mut doc.text_blocks {
            if tb.num_words >= 15 {
                continue;
            }

            let text = tb.text.trim();

            if text.len() >= 8 {
                let text_lc = text.to_lowercase();

                if text_lc.starts_with("comments")
                    || starts_with_number(&text_lc, &[" comments", " users responded in"])
                    || text_lc.starts_with("© reuters")
                    || text_lc.starts_with("please rate this")
                    || text_lc.starts_with("post a comment")
                    || text_lc.contains("what you think...")
                    || text_lc.contains("add your comment")
                    || text_lc.contains("add comment")
                    || text_lc.contains("reader views")
                    || text_lc.contains("have your say")
                    || text_lc.contains("reader comments")
                    || text_lc.contains("rätta artikeln")
                    || text_lc == "thanks for your comments - this feedback is now closed"
                {
                    tb.add_labels([Label::IndicatesEndOfText]);
                    has_changed = true;
                }
            } else if tb.link_density == 1.0 && text == "Comment" {
                tb.add_labels([Label::IndicatesEndOfText]);
                has_changed = true;
            }
        }

        has_changed
    }
}

/// True when `text` begins with one or more digits directly followed by one
/// of the given phrases.
fn starts_with_number(text: &str, phrases: &[&str]) -> bool {
    let digits = text
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(text.len());
    digits > 0 && phrases.iter().any(|p| text[digits..].starts_with(p))
}

/// Classifies each block as content or boilerplate from the word counts and
/// link densities of the block and its immediate neighbors.
///
/// The thresholds come from a decision tree trained on annotated news pages;
/// the sliding window is padded with the empty sentinels at both edges.
pub struct NumWordsRulesClassifier;

impl Filter for NumWordsRulesClassifier {
    fn name(&self) -> &str {
        "NumWordsRulesClassifier"
    }

    fn process(&self, doc: &mut Document) -> bool {
        let mut has_changed = false;
        let n = doc.text_blocks.len();

        for i in 0..n {
            let prev = if i == 0 {
                &*EMPTY_START
            } else {
                &doc.text_blocks[i - 1]
            };
            let next = if i + 1 < n {
                &doc.text_blocks[i + 1]
            } else {
                &*EMPTY_END
            };

            let is_content = classify(prev, &doc.text_blocks[i], next);

            let tb = &mut doc.text_blocks[i];
            has_changed = has_changed || tb.is_content != is_content;
            tb.is_content = is_content;
        }

        has_changed
    }
}

fn classify(prev: &TextBlock, curr: &TextBlock, next: &TextBlock) -> bool {
    if curr.link_density > 0.333_333 {
        return false;
    }

    if prev.link_density <= 0.555_556 {
        if curr.num_words <= 16 {
            if next.num_words <= 15 {
                prev.num_words > 4
            } else {
                true
            }
        } else {
            true
        }
    } else if curr.num_words <= 40 {
        next.num_words > 17
    } else {
        true
    }
}
