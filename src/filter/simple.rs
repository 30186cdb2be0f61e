//! Unconditional structural filters.

use crate::document::Document;
use crate::filter::Filter;
use crate::textblock::Label;

/// Removes every block that is neither content nor the title block.
pub struct BoilerplateBlock;

impl Filter for BoilerplateBlock {
    fn name(&self) -> &str {
        "BoilerplateBlock"
    }

    fn process(&self, doc: &mut Document) -> bool {
        let before = doc.text_blocks.len();
        doc.text_blocks
            .retain(|tb| tb.is_content || tb.has_label(Label::Title));
        doc.text_blocks.len() != before
    }
}
