//! Structural heuristics: title matching, proximity fusion, and the filters
//! that reshape the content selection around the dominant block.

#![allow(clippy::float_cmp)]

use std::collections::HashSet;

use regex::Regex;

use crate::document::Document;
use crate::filter::Filter;
use crate::patterns::{
    TITLE_DASH_SPLIT, TITLE_LEADING_SEGMENT, TITLE_PIPE_SPLIT, TITLE_PUNCTUATION,
    TITLE_SEPARATORS, TITLE_TRAILING_SEGMENT,
};
use crate::textblock::{Label, TextBlock};

/// Number of words a block classified as full text contributes toward the
/// running totals; sparse blocks contribute nothing.
pub(crate) fn num_full_text_words(tb: &TextBlock) -> i32 {
    const MIN_TEXT_DENSITY: f64 = 9.0;

    if tb.text_density >= MIN_TEXT_DENSITY {
        tb.num_words
    } else {
        0
    }
}

/// Labels the block whose text matches the document title (or a plausible
/// fragment of it) with [`Label::Title`].
pub struct DocumentTitleMatchClassifier;

impl Filter for DocumentTitleMatchClassifier {
    fn name(&self) -> &str {
        "DocumentTitleMatchClassifier"
    }

    fn process(&self, doc: &mut Document) -> bool {
        let Some(title) = doc.title.as_deref() else {
            return false;
        };

        let title = normalize(title);
        if title.is_empty() {
            return false;
        }

        let mut potential_titles: HashSet<String> = HashSet::new();
        potential_titles.insert(title.clone());

        // Site names are commonly glued onto titles with pipes, dashes,
        // colons or guillemets; each separator class contributes its longest
        // split part as a candidate.
        for separator in TITLE_SEPARATORS.iter() {
            if let Some(part) = longest_part(&title, separator) {
                potential_titles.insert(part);
            }
        }

        add_potential_titles(&mut potential_titles, &title, &TITLE_PIPE_SPLIT, 4);
        add_potential_titles(&mut potential_titles, &title, &TITLE_DASH_SPLIT, 4);

        potential_titles.insert(remove_first(&title, &TITLE_TRAILING_SEGMENT));
        potential_titles.insert(remove_first(&title, &TITLE_LEADING_SEGMENT));

        for tb in &mut doc.text_blocks {
            let text = normalize(&tb.text);
            if potential_titles.contains(&text) {
                tb.add_labels([Label::Title]);
                return true;
            }

            let stripped = TITLE_PUNCTUATION.replace_all(&text, "");
            let stripped = stripped.trim();
            if potential_titles.contains(stripped) {
                tb.add_labels([Label::Title]);
                return true;
            }
        }

        false
    }
}

fn normalize(text: &str) -> String {
    text.replace('\u{a0}', " ")
        .replace('\'', "")
        .trim()
        .to_lowercase()
}

/// The part with the most words (ties broken toward longer text) after
/// splitting on `separator`, or `None` when the separator does not occur.
fn longest_part(title: &str, separator: &Regex) -> Option<String> {
    let parts: Vec<&str> = separator.split(title).collect();
    if parts.len() == 1 {
        return None;
    }

    let mut longest = "";
    let mut longest_num_words = 0;

    for part in parts {
        if part.contains(".com") {
            continue;
        }

        let num_words = part.split_whitespace().count();
        if num_words > longest_num_words || part.len() > longest.len() {
            longest_num_words = num_words;
            longest = part;
        }
    }

    if longest.is_empty() {
        None
    } else {
        Some(longest.trim().to_string())
    }
}

/// Adds every split part carrying at least `min_words` words as a candidate.
fn add_potential_titles(
    potential_titles: &mut HashSet<String>,
    title: &str,
    separator: &Regex,
    min_words: usize,
) {
    let parts: Vec<&str> = separator.split(title).collect();
    if parts.len() == 1 {
        return;
    }

    for part in parts {
        if part.contains(".com") {
            continue;
        }
        if part.split_whitespace().count() >= min_words {
            potential_titles.insert(part.trim().to_string());
        }
    }
}

/// Removes the first match of `pattern`, if any.
fn remove_first(title: &str, pattern: &Regex) -> String {
    pattern.replace(title, "").into_owned()
}

/// Drops everything after the article's end once a terminating marker is
/// seen and enough content words have accumulated.
pub struct IgnoreBlocksAfterContent {
    min_num_words: i32,
}

impl IgnoreBlocksAfterContent {
    /// The default threshold of 60 full-text words.
    #[must_use]
    pub fn new() -> Self {
        Self { min_num_words: 60 }
    }
}

impl Default for IgnoreBlocksAfterContent {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for IgnoreBlocksAfterContent {
    fn name(&self) -> &str {
        "IgnoreBlocksAfterContent"
    }

    fn process(&self, doc: &mut Document) -> bool {
        let mut has_changed = false;
        let mut num_words = 0;
        let mut found_end_of_text = false;

        for tb in &mut doc.text_blocks {
            let end_of_text = tb.has_label(Label::IndicatesEndOfText);

            if tb.is_content {
                num_words += num_full_text_words(tb);
            }
            if end_of_text && num_words >= self.min_num_words {
                found_end_of_text = true;
            }
            if found_end_of_text {
                has_changed = true;
                tb.is_content = false;
            }
        }

        has_changed
    }
}

/// Demotes headings dangling at the very end of the content selection; a
/// headline with nothing after it introduces nothing.
pub struct TrailingHeadlineToBoilerplate;

impl Filter for TrailingHeadlineToBoilerplate {
    fn name(&self) -> &str {
        "TrailingHeadlineToBoilerplate"
    }

    fn process(&self, doc: &mut Document) -> bool {
        let mut has_changed = false;

        for tb in doc.text_blocks.iter_mut().rev() {
            if tb.is_content {
                if tb.has_label(Label::Heading) {
                    tb.is_content = false;
                    has_changed = true;
                } else {
                    break;
                }
            }
        }

        has_changed
    }
}

/// Merges neighboring blocks whose emission offsets lie within a maximum
/// distance, optionally restricted to content blocks and to blocks on the
/// same tag level.
///
/// A non-content current block always resets the merge chain; it is never
/// merged into its predecessor.
pub struct BlockProximityFusion {
    name: &'static str,
    max_blocks_distance: i32,
    content_only: bool,
    same_tag_level_only: bool,
}

impl BlockProximityFusion {
    /// Fuses any content block into its immediate predecessor.
    #[must_use]
    pub fn max_distance_one() -> Self {
        Self {
            name: "BlockProximityFusionMaxDistanceOne",
            max_blocks_distance: 1,
            content_only: false,
            same_tag_level_only: false,
        }
    }

    /// Like [`Self::max_distance_one`], restricted to equal tag levels.
    #[must_use]
    pub fn max_distance_one_same_tag_level() -> Self {
        Self {
            name: "BlockProximityFusionMaxDistanceOneSameTagLevel",
            max_blocks_distance: 1,
            content_only: false,
            same_tag_level_only: true,
        }
    }

    /// Fuses runs of content blocks only.
    #[must_use]
    pub fn max_distance_one_content_only() -> Self {
        Self {
            name: "BlockProximityFusionMaxDistanceOneContentOnly",
            max_blocks_distance: 1,
            content_only: true,
            same_tag_level_only: false,
        }
    }

    /// Fuses runs of content blocks on the same tag level.
    #[must_use]
    pub fn max_distance_one_content_only_same_tag_level() -> Self {
        Self {
            name: "BlockProximityFusionMaxDistanceOneContentOnlySameTagLevel",
            max_blocks_distance: 1,
            content_only: true,
            same_tag_level_only: true,
        }
    }
}

impl Filter for BlockProximityFusion {
    fn name(&self) -> &str {
        self.name
    }

    fn process(&self, doc: &mut Document) -> bool {
        if doc.text_blocks.len() < 2 {
            return false;
        }

        let mut has_changed = false;
        let blocks = &mut doc.text_blocks;

        let mut prev_idx;
        let start;
        if self.content_only {
            match blocks.iter().position(|tb| tb.is_content) {
                Some(i) => {
                    prev_idx = i;
                    start = i + 1;
                }
                None => return false,
            }
        } else {
            prev_idx = 0;
            start = 1;
        }

        let mut i = start;
        while i < blocks.len() {
            if !blocks[i].is_content {
                prev_idx = i;
                i += 1;
                continue;
            }

            let distance = blocks[i].offset_start - blocks[prev_idx].offset_end - 1;

            let mut merge = distance <= self.max_blocks_distance;
            if merge
                && self.content_only
                && !(blocks[prev_idx].is_content && blocks[i].is_content)
            {
                merge = false;
            }
            if merge
                && self.same_tag_level_only
                && blocks[prev_idx].tag_level != blocks[i].tag_level
            {
                merge = false;
            }

            if merge {
                let current = blocks.remove(i);
                blocks[prev_idx].merge_next(&current);
                has_changed = true;
            } else {
                prev_idx = i;
                i += 1;
            }
        }

        has_changed
    }
}

/// Keeps the content block with the most words, plus any content block
/// large enough relative to it, and prepares the labels the later expansion
/// filters depend on.
pub struct KeepLargestBlocks {
    expand_to_same_level_text: bool,
    min_words: i32,
}

impl KeepLargestBlocks {
    /// Expansion to same-level blocks enabled with the 150-word minimum.
    #[must_use]
    pub fn new() -> Self {
        Self {
            expand_to_same_level_text: true,
            min_words: 150,
        }
    }
}

impl Default for KeepLargestBlocks {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for KeepLargestBlocks {
    fn name(&self) -> &str {
        "KeepLargestBlocks"
    }

    fn process(&self, doc: &mut Document) -> bool {
        if doc.text_blocks.len() < 2 {
            return false;
        }

        let mut max_num_words = -1;
        let mut largest: Option<usize> = None;
        let mut level = -1;

        for (i, tb) in doc.text_blocks.iter().enumerate() {
            if tb.is_content && tb.num_words > max_num_words {
                largest = Some(i);
                max_num_words = tb.num_words;
                if self.expand_to_same_level_text {
                    level = tb.tag_level;
                }
            }
        }

        for (i, tb) in doc.text_blocks.iter_mut().enumerate() {
            if largest == Some(i) {
                tb.is_content = true;
                tb.add_labels([Label::VeryLikelyContent]);
            } else {
                tb.is_content = tb.is_content && is_large_enough(max_num_words, tb.num_words);
                tb.add_labels([Label::MightBeContent]);
            }
        }

        if self.expand_to_same_level_text {
            if let Some(n) = largest {
                // Walk outward from the largest block; a strictly shallower
                // block ends the walk in that direction.
                for i in (0..n).rev() {
                    let tag_level = doc.text_blocks[i].tag_level;
                    if tag_level < level {
                        break;
                    }
                    if tag_level == level && doc.text_blocks[i].num_words >= self.min_words {
                        doc.text_blocks[i].is_content = true;
                    }
                }
                for i in n + 1..doc.text_blocks.len() {
                    let tag_level = doc.text_blocks[i].tag_level;
                    if tag_level < level {
                        break;
                    }
                    if tag_level == level && doc.text_blocks[i].num_words >= self.min_words {
                        doc.text_blocks[i].is_content = true;
                    }
                }
            }
        }

        true
    }
}

fn is_large_enough(max_num_words: i32, num_words: i32) -> bool {
    if max_num_words >= 1000 {
        f64::from(num_words) >= 0.25 * f64::from(max_num_words)
    } else if max_num_words >= 500 {
        f64::from(num_words) >= 0.6 * f64::from(max_num_words)
    } else {
        num_words == max_num_words
    }
}

/// Keeps only the content block with the most full-text words, demoting
/// everything else to a content candidate.
pub struct KeepLargestFulltextBlock;

impl Filter for KeepLargestFulltextBlock {
    fn name(&self) -> &str {
        "KeepLargestFulltextBlock"
    }

    fn process(&self, doc: &mut Document) -> bool {
        if doc.text_blocks.len() < 2 {
            return false;
        }

        let mut max = -1;
        let mut largest: Option<usize> = None;

        for (i, tb) in doc.text_blocks.iter().enumerate() {
            if !tb.is_content {
                continue;
            }
            let num_words = num_full_text_words(tb);
            if num_words > max {
                largest = Some(i);
                max = num_words;
            }
        }

        let Some(largest) = largest else {
            return false;
        };

        for (i, tb) in doc.text_blocks.iter_mut().enumerate() {
            if i == largest {
                tb.is_content = true;
            } else {
                tb.is_content = false;
                tb.add_labels([Label::MightBeContent]);
            }
        }

        true
    }
}

/// Re-marks candidate blocks between the title block and the first content
/// block as content, pulling the standfirst back into the selection.
pub struct ExpandTitleToContent;

impl Filter for ExpandTitleToContent {
    fn name(&self) -> &str {
        "ExpandTitleToContent"
    }

    fn process(&self, doc: &mut Document) -> bool {
        let title = doc
            .text_blocks
            .iter()
            .position(|tb| tb.has_label(Label::Title));
        let content_start = doc.text_blocks.iter().position(|tb| tb.is_content);

        let (Some(title), Some(content_start)) = (title, content_start) else {
            return false;
        };
        if content_start <= title {
            return false;
        }

        let mut has_changed = false;
        for tb in &mut doc.text_blocks[title..content_start] {
            if tb.has_label(Label::MightBeContent) {
                has_changed = !tb.is_content || has_changed;
                tb.is_content = true;
            }
        }

        has_changed
    }
}

/// Promotes large non-content blocks sitting on the same tag level as the
/// dominant content block.
pub struct LargeBlockSameTagLevelToContent;

impl Filter for LargeBlockSameTagLevelToContent {
    fn name(&self) -> &str {
        "LargeBlockSameTagLevelToContent"
    }

    fn process(&self, doc: &mut Document) -> bool {
        let Some(tag_level) = doc
            .text_blocks
            .iter()
            .find(|tb| tb.is_content && tb.has_label(Label::VeryLikelyContent))
            .map(|tb| tb.tag_level)
        else {
            return false;
        };

        let mut has_changed = false;
        for tb in &mut doc.text_blocks {
            if !tb.is_content && tb.num_words >= 100 && tb.tag_level == tag_level {
                tb.is_content = true;
                has_changed = true;
            }
        }

        has_changed
    }
}

/// Promotes link-free list candidates nested directly under the dominant
/// content block, so a list closing out the article survives.
pub struct ListAtEnd;

impl Filter for ListAtEnd {
    fn name(&self) -> &str {
        "ListAtEnd"
    }

    fn process(&self, doc: &mut Document) -> bool {
        let mut has_changed = false;
        let mut tag_level = i32::MAX;

        for tb in &mut doc.text_blocks {
            if tb.is_content && tb.has_label(Label::VeryLikelyContent) {
                tag_level = tb.tag_level;
            } else if tb.tag_level > tag_level
                && tb.has_label(Label::MightBeContent)
                && tb.has_label(Label::List)
                && tb.link_density == 0.0
            {
                tb.is_content = true;
                has_changed = true;
            } else {
                tag_level = i32::MAX;
            }
        }

        has_changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(num_words: i32, offset: i32, tag_level: i32) -> TextBlock {
        let text: Vec<String> = (0..num_words).map(|i| format!("w{i}")).collect();
        TextBlock::new(text.join(" "), num_words, 0, 0, 0, offset, tag_level)
    }

    fn content_block(num_words: i32, offset: i32, tag_level: i32) -> TextBlock {
        let mut tb = block(num_words, offset, tag_level);
        tb.is_content = true;
        tb
    }

    fn doc(blocks: Vec<TextBlock>) -> Document {
        Document {
            text_blocks: blocks,
            ..Document::default()
        }
    }

    #[test]
    fn title_match_labels_exact_block() {
        let mut d = doc(vec![block(3, 0, 1)]);
        d.text_blocks[0].text = "Breaking: Market Dives".to_string();
        d.title = Some("Breaking: Market Dives — Example Times".to_string());

        assert!(DocumentTitleMatchClassifier.process(&mut d));
        assert!(d.text_blocks[0].has_label(Label::Title));
    }

    #[test]
    fn title_match_survives_punctuation_differences() {
        let mut d = doc(vec![block(3, 0, 1)]);
        d.text_blocks[0].text = "Breaking Market Dives!".to_string();
        d.title = Some("breaking market dives".to_string());

        assert!(DocumentTitleMatchClassifier.process(&mut d));
        assert!(d.text_blocks[0].has_label(Label::Title));
    }

    #[test]
    fn title_match_without_title_is_a_no_op() {
        let mut d = doc(vec![block(3, 0, 1)]);
        assert!(!DocumentTitleMatchClassifier.process(&mut d));
    }

    #[test]
    fn title_match_stops_at_first_match() {
        let mut d = doc(vec![block(2, 0, 1), block(2, 1, 1)]);
        d.text_blocks[0].text = "The Headline".to_string();
        d.text_blocks[1].text = "The Headline".to_string();
        d.title = Some("The Headline".to_string());

        assert!(DocumentTitleMatchClassifier.process(&mut d));
        assert!(d.text_blocks[0].has_label(Label::Title));
        assert!(!d.text_blocks[1].has_label(Label::Title));
    }

    #[test]
    fn ignore_after_content_cuts_the_tail() {
        // A dense 100-word paragraph, then a comments marker, then trailers.
        let mut first = content_block(100, 0, 2);
        first.num_words_in_wrapped_lines = 100;
        first.num_wrapped_lines = 10;
        first.text_density = 10.0;

        let mut marker = block(1, 1, 2);
        marker.add_labels([Label::IndicatesEndOfText]);
        let trailer = content_block(30, 2, 2);

        let mut d = doc(vec![first, marker, trailer]);

        assert!(IgnoreBlocksAfterContent::new().process(&mut d));
        assert!(d.text_blocks[0].is_content);
        assert!(!d.text_blocks[1].is_content);
        assert!(!d.text_blocks[2].is_content);
    }

    #[test]
    fn ignore_after_content_needs_enough_words() {
        let mut marker = block(1, 0, 2);
        marker.add_labels([Label::IndicatesEndOfText]);
        let tail = content_block(30, 1, 2);

        let mut d = doc(vec![marker, tail]);

        // Only 0 full-text words seen before the marker: nothing happens.
        assert!(!IgnoreBlocksAfterContent::new().process(&mut d));
        assert!(d.text_blocks[1].is_content);
    }

    #[test]
    fn trailing_headline_is_demoted() {
        let mut heading = content_block(5, 2, 2);
        heading.add_labels([Label::Heading]);

        let mut d = doc(vec![content_block(100, 0, 2), content_block(50, 1, 2), heading]);

        assert!(TrailingHeadlineToBoilerplate.process(&mut d));
        assert!(!d.text_blocks[2].is_content);
        assert!(d.text_blocks[1].is_content);
    }

    #[test]
    fn trailing_headline_stops_at_regular_content() {
        let mut heading = content_block(5, 0, 2);
        heading.add_labels([Label::Heading]);

        let mut d = doc(vec![heading, content_block(100, 1, 2)]);

        // The last content block is not a heading, so nothing changes.
        assert!(!TrailingHeadlineToBoilerplate.process(&mut d));
        assert!(d.text_blocks[0].is_content);
    }

    #[test]
    fn proximity_fusion_merges_adjacent_content() {
        let mut d = doc(vec![
            content_block(10, 0, 2),
            content_block(20, 1, 2),
            content_block(30, 2, 2),
        ]);

        assert!(BlockProximityFusion::max_distance_one_content_only().process(&mut d));
        assert_eq!(d.text_blocks.len(), 1);
        assert_eq!(d.text_blocks[0].num_words, 60);
        assert_eq!(d.text_blocks[0].offset_start, 0);
        assert_eq!(d.text_blocks[0].offset_end, 2);
    }

    #[test]
    fn proximity_fusion_respects_distance() {
        // Offsets 0 and 4: three blocks were dropped in between.
        let mut d = doc(vec![content_block(10, 0, 2), content_block(20, 4, 2)]);

        assert!(!BlockProximityFusion::max_distance_one_content_only().process(&mut d));
        assert_eq!(d.text_blocks.len(), 2);
    }

    #[test]
    fn proximity_fusion_same_level_keeps_levels_apart() {
        let mut d = doc(vec![content_block(10, 0, 2), content_block(20, 1, 3)]);

        assert!(
            !BlockProximityFusion::max_distance_one_content_only_same_tag_level()
                .process(&mut d)
        );
        assert_eq!(d.text_blocks.len(), 2);
    }

    #[test]
    fn proximity_fusion_non_content_resets_chain() {
        let mut d = doc(vec![
            content_block(10, 0, 2),
            block(5, 1, 2),
            content_block(20, 2, 2),
        ]);

        // The middle block is not content: it is never merged, and the
        // third block merges into it instead of the first.
        assert!(BlockProximityFusion::max_distance_one().process(&mut d));
        assert_eq!(d.text_blocks.len(), 2);
        assert_eq!(d.text_blocks[0].num_words, 10);
        assert_eq!(d.text_blocks[1].num_words, 25);
        assert!(d.text_blocks[1].is_content);
    }

    #[test]
    fn keep_largest_blocks_marks_the_winner() {
        let mut d = doc(vec![
            content_block(10, 0, 2),
            content_block(400, 1, 2),
            content_block(10, 2, 2),
        ]);

        assert!(KeepLargestBlocks::new().process(&mut d));

        assert!(d.text_blocks[1].is_content);
        assert!(d.text_blocks[1].has_label(Label::VeryLikelyContent));

        // Below the 500-word regime only exact-size peers survive.
        assert!(!d.text_blocks[0].is_content);
        assert!(!d.text_blocks[2].is_content);
        assert!(d.text_blocks[0].has_label(Label::MightBeContent));
    }

    #[test]
    fn keep_largest_blocks_relative_threshold() {
        let mut d = doc(vec![
            content_block(1200, 0, 2),
            content_block(400, 1, 2),
            content_block(200, 2, 2),
        ]);

        KeepLargestBlocks::new().process(&mut d);

        // 400 >= 0.25 * 1200; 200 < 300.
        assert!(d.text_blocks[0].is_content);
        assert!(d.text_blocks[1].is_content);
        assert!(!d.text_blocks[2].is_content);
    }

    #[test]
    fn keep_largest_blocks_expands_same_level_neighbors() {
        let mut d = doc(vec![
            block(200, 0, 2),
            content_block(300, 1, 2),
            block(40, 2, 2),
        ]);

        KeepLargestBlocks::new().process(&mut d);

        // The 200-word same-level neighbor crosses the 150-word expansion
        // minimum even though the classifier rejected it.
        assert!(d.text_blocks[0].is_content);
        assert!(!d.text_blocks[2].is_content);
    }

    #[test]
    fn keep_largest_blocks_expansion_stops_at_shallower_block() {
        let mut d = doc(vec![
            block(200, 0, 2),
            block(10, 1, 1),
            content_block(300, 2, 2),
        ]);

        KeepLargestBlocks::new().process(&mut d);

        // The shallow block at offset 1 walls off the expansion.
        assert!(!d.text_blocks[0].is_content);
    }

    #[test]
    fn keep_largest_fulltext_block_prefers_density() {
        let mut sparse = content_block(50, 0, 2);
        sparse.text_density = 3.0;
        let mut dense = content_block(40, 1, 2);
        dense.text_density = 10.0;

        let mut d = doc(vec![sparse, dense]);

        assert!(KeepLargestFulltextBlock.process(&mut d));
        assert!(!d.text_blocks[0].is_content);
        assert!(d.text_blocks[1].is_content);
    }

    #[test]
    fn expand_title_to_content_fills_the_gap() {
        let mut title = block(5, 0, 2);
        title.add_labels([Label::Title]);
        let mut standfirst = block(20, 1, 2);
        standfirst.add_labels([Label::MightBeContent]);
        let body = content_block(200, 2, 2);

        let mut d = doc(vec![title, standfirst, body]);

        assert!(ExpandTitleToContent.process(&mut d));
        assert!(d.text_blocks[1].is_content);
    }

    #[test]
    fn expand_title_requires_title_before_content() {
        let body = content_block(200, 0, 2);
        let mut title = block(5, 1, 2);
        title.add_labels([Label::Title]);

        let mut d = doc(vec![body, title]);

        assert!(!ExpandTitleToContent.process(&mut d));
    }

    #[test]
    fn large_same_level_block_promoted() {
        let mut winner = content_block(300, 0, 2);
        winner.add_labels([Label::VeryLikelyContent]);

        let mut d = doc(vec![winner, block(150, 1, 2), block(150, 2, 3)]);

        assert!(LargeBlockSameTagLevelToContent.process(&mut d));
        assert!(d.text_blocks[1].is_content);
        assert!(!d.text_blocks[2].is_content);
    }

    #[test]
    fn list_at_end_promotes_trailing_list_items() {
        let mut winner = content_block(300, 0, 2);
        winner.add_labels([Label::VeryLikelyContent]);

        let mut item = block(5, 1, 3);
        item.add_labels([Label::MightBeContent, Label::List]);

        let mut d = doc(vec![winner, item]);

        assert!(ListAtEnd.process(&mut d));
        assert!(d.text_blocks[1].is_content);
    }

    #[test]
    fn list_at_end_skips_linked_lists() {
        let mut winner = content_block(300, 0, 2);
        winner.add_labels([Label::VeryLikelyContent]);

        let mut item = TextBlock::new("a b".to_string(), 2, 2, 0, 0, 1, 3);
        item.add_labels([Label::MightBeContent, Label::List]);

        let mut d = doc(vec![winner, item]);

        assert!(!ListAtEnd.process(&mut d));
        assert!(!d.text_blocks[1].is_content);
    }

    #[test]
    fn num_full_text_words_uses_density_cutoff() {
        let mut dense = block(50, 0, 2);
        dense.text_density = 9.5;
        assert_eq!(num_full_text_words(&dense), 50);

        let mut sparse = block(50, 1, 2);
        sparse.text_density = 8.9;
        assert_eq!(num_full_text_words(&sparse), 0);
    }
}
