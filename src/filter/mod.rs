//! The filter pipeline.
//!
//! A [`Filter`] reads the document's block list and may flip `is_content`
//! flags, assign labels, merge neighbors, or drop blocks. Filters never
//! fail; they report whether they changed anything. A [`Pipeline`] is a
//! named, ordered list of filters that is itself a filter.
//!
//! Filter ordering matters: each filter's contract assumes the shape its
//! predecessors leave behind. The canonical composition is [`article`].

mod english;
mod heuristics;
mod simple;

pub use english::{NumWordsRulesClassifier, TerminatingBlocks};
pub use heuristics::{
    BlockProximityFusion, DocumentTitleMatchClassifier, ExpandTitleToContent,
    IgnoreBlocksAfterContent, KeepLargestBlocks, KeepLargestFulltextBlock,
    LargeBlockSameTagLevelToContent, ListAtEnd, TrailingHeadlineToBoilerplate,
};
pub use simple::BoilerplateBlock;

use crate::document::Document;

/// A document transformation that reports whether it changed anything.
pub trait Filter {
    /// The filter's name, used in observer stage reports.
    fn name(&self) -> &str;

    /// Processes the document, returning `true` when at least one block's
    /// fields, labels, or the block list itself changed.
    fn process(&self, doc: &mut Document) -> bool;
}

/// A named ordered list of filters, applied in sequence.
pub struct Pipeline {
    name: String,
    filters: Vec<Box<dyn Filter>>,
}

impl Pipeline {
    /// Creates a pipeline from a name and filter list.
    #[must_use]
    pub fn new(name: impl Into<String>, filters: Vec<Box<dyn Filter>>) -> Self {
        Self {
            name: name.into(),
            filters,
        }
    }

    /// Runs every filter in order, returning whether any of them changed
    /// the document.
    pub fn process(&self, doc: &mut Document) -> bool {
        let mut has_changed = false;
        for filter in &self.filters {
            has_changed = filter.process(doc) || has_changed;
        }
        has_changed
    }

    /// Runs the pipeline, reporting each stage to `observe` with the stage
    /// name, the cumulative changed flag, and the document state after the
    /// stage. The initial document is reported as stage `.000`.
    pub fn process_with_observer(
        &self,
        doc: &mut Document,
        observe: &mut dyn FnMut(&str, bool, &Document),
    ) -> bool {
        let mut has_changed = false;
        observe(&format!("{}.000", self.name), has_changed, doc);

        for (i, filter) in self.filters.iter().enumerate() {
            has_changed = filter.process(doc) || has_changed;
            observe(
                &format!("{}.{:03}.{}", self.name, i + 1, filter.name()),
                has_changed,
                doc,
            );
        }

        has_changed
    }
}

impl Filter for Pipeline {
    fn name(&self) -> &str {
        &self.name
    }

    fn process(&self, doc: &mut Document) -> bool {
        Pipeline::process(self, doc)
    }
}

/// The full-article extraction pipeline.
///
/// Classifies blocks by word-count and link-density heuristics, cuts
/// everything after a terminating marker, fuses adjacent content, drops
/// boilerplate, and finally re-expands around the dominant content block.
#[must_use]
pub fn article() -> Pipeline {
    Pipeline::new(
        "Article",
        vec![
            Box::new(TerminatingBlocks),
            Box::new(DocumentTitleMatchClassifier),
            Box::new(NumWordsRulesClassifier),
            Box::new(IgnoreBlocksAfterContent::new()),
            Box::new(TrailingHeadlineToBoilerplate),
            Box::new(BlockProximityFusion::max_distance_one()),
            Box::new(BoilerplateBlock),
            Box::new(BlockProximityFusion::max_distance_one_content_only_same_tag_level()),
            Box::new(KeepLargestBlocks::new()),
            Box::new(ExpandTitleToContent),
            Box::new(LargeBlockSameTagLevelToContent),
            Box::new(ListAtEnd),
        ],
    )
}
