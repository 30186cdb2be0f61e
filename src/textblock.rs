//! The text-block data model.
//!
//! A [`TextBlock`] is the unit of text emitted between flush events of the
//! content handler. It carries the density statistics the classifying
//! filters operate on, an `is_content` verdict, and a set of [`Label`]s.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Semantic markers attached to text blocks, either inherited from the
/// enclosing elements at emission time or assigned by filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    /// The block looks like the tail end of an article ("post a comment",
    /// "© reuters", ...).
    IndicatesEndOfText,
    /// A fusion/classification filter considers this block a content
    /// candidate.
    MightBeContent,
    /// The block is almost certainly part of the main content.
    VeryLikelyContent,
    /// The block matches the document title.
    Title,
    /// The block was emitted inside an `<li>` element.
    List,
    /// The block was emitted inside a heading element.
    Heading,
    /// The block was emitted inside an `<h1>` element.
    Heading1,
    /// The block was emitted inside an `<h2>` element.
    Heading2,
    /// The block was emitted inside an `<h3>` element.
    Heading3,
}

/// A contiguous run of document text with its density statistics.
///
/// Blocks are created by the content handler and mutated only by filters.
/// After construction `offset_start == offset_end`; merges widen the span.
#[derive(Debug, Clone)]
pub struct TextBlock {
    /// The visible characters of this block.
    pub text: String,

    /// Position of the first source block in emission order.
    pub offset_start: i32,
    /// Position of the last source block in emission order.
    pub offset_end: i32,

    /// Number of word tokens.
    pub num_words: i32,
    /// Number of word tokens emitted inside an `<a>` ancestor.
    pub num_linked_words: i32,
    /// Number of word tokens in lines that wrap at the 80-column soft limit.
    pub num_words_in_wrapped_lines: i32,
    /// Number of wrapped-line segments, at least 1.
    pub num_wrapped_lines: i32,
    /// Nesting depth at which the block opened.
    pub tag_level: i32,

    /// `num_words_in_wrapped_lines / num_wrapped_lines`.
    pub text_density: f64,
    /// `num_linked_words / num_words`, 0 when the block has no words.
    pub link_density: f64,

    /// Classifier verdict; the pipeline's final content selection.
    pub is_content: bool,

    /// Labels inherited at emission time plus labels assigned by filters.
    pub labels: HashSet<Label>,
}

/// Padding block used at the left edge of neighbor-window classifiers.
pub static EMPTY_START: LazyLock<TextBlock> =
    LazyLock::new(|| TextBlock::new(String::new(), 0, 0, 0, 0, i32::MIN, 0));

/// Padding block used at the right edge of neighbor-window classifiers.
pub static EMPTY_END: LazyLock<TextBlock> =
    LazyLock::new(|| TextBlock::new(String::new(), 0, 0, 0, 0, i32::MAX, 0));

impl TextBlock {
    /// Creates a block from the statistics computed during a flush.
    ///
    /// A block that never overflowed the soft line limit is normalized to a
    /// single wrapped line containing all of its words, so that
    /// `num_wrapped_lines >= 1` always holds.
    #[must_use]
    pub fn new(
        text: String,
        num_words: i32,
        num_linked_words: i32,
        num_words_in_wrapped_lines: i32,
        num_wrapped_lines: i32,
        offset_blocks: i32,
        tag_level: i32,
    ) -> Self {
        let mut tb = Self {
            text,
            offset_start: offset_blocks,
            offset_end: offset_blocks,
            num_words,
            num_linked_words,
            num_words_in_wrapped_lines,
            num_wrapped_lines,
            tag_level,
            text_density: 0.0,
            link_density: 0.0,
            is_content: false,
            labels: HashSet::new(),
        };

        if tb.num_words_in_wrapped_lines == 0 {
            tb.num_words_in_wrapped_lines = tb.num_words;
            tb.num_wrapped_lines = 1;
        }

        tb.init_densities();
        tb
    }

    fn init_densities(&mut self) {
        self.text_density =
            f64::from(self.num_words_in_wrapped_lines) / f64::from(self.num_wrapped_lines);
        self.link_density = if self.num_words == 0 {
            0.0
        } else {
            f64::from(self.num_linked_words) / f64::from(self.num_words)
        };
    }

    /// Adds labels to the block's label set.
    pub fn add_labels<I: IntoIterator<Item = Label>>(&mut self, labels: I) {
        self.labels.extend(labels);
    }

    /// Reports whether the block carries the given label.
    #[must_use]
    pub fn has_label(&self, label: Label) -> bool {
        self.labels.contains(&label)
    }

    /// Fuses the following block into this one.
    ///
    /// Texts are joined with a newline, counts are summed, densities are
    /// recomputed from the summed counts, and the offsets widen to span both
    /// inputs. The merged block is content if either input was.
    pub fn merge_next(&mut self, next: &TextBlock) {
        self.text.push('\n');
        self.text.push_str(&next.text);

        self.num_words += next.num_words;
        self.num_linked_words += next.num_linked_words;
        self.num_words_in_wrapped_lines += next.num_words_in_wrapped_lines;
        self.num_wrapped_lines += next.num_wrapped_lines;

        self.offset_start = self.offset_start.min(next.offset_start);
        self.offset_end = self.offset_end.max(next.offset_end);

        self.init_densities();

        self.is_content = self.is_content || next.is_content;

        self.labels.extend(&next.labels);

        self.tag_level = self.tag_level.min(next.tag_level);
    }
}
