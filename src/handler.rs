//! The content handler: an event-driven transducer from HTML tokens to text
//! blocks.
//!
//! The handler owns two growing character buffers. `token_buffer` carries the
//! anchor boundary markers and feeds the block statistics; `text_buffer` is
//! the human-visible text. Tag events consult the tag-action table, move the
//! nesting depths, and may request a flush; text events normalize whitespace
//! and append to both buffers. A flush tokenizes the token buffer, computes
//! the density statistics, and emits a [`TextBlock`].

use chrono::{DateTime, Utc};
use html5ever::Attribute;

use crate::error::Warning;
use crate::patterns::{MULTI_SPACE, WORD_CHARACTER};
use crate::tag_actions::{TagAction, TAG_ACTIONS};
use crate::textblock::{Label, TextBlock};

/// Marker injected into the token buffer where anchor text starts. Uses a
/// private-use code point so it cannot collide with document text.
pub(crate) const ANCHOR_TEXT_START: &str = "$\u{e00a}<";

/// Marker injected into the token buffer where anchor text ends.
pub(crate) const ANCHOR_TEXT_END: &str = ">\u{e00a}$";

/// Soft line limit for the wrap simulation behind `text_density`.
const MAX_LINE_LENGTH: i32 = 80;

fn is_word(token: &str) -> bool {
    WORD_CHARACTER.is_match(token)
}

/// Event sink that folds a stream of tag and text events into text blocks.
pub struct ContentHandler {
    pub(crate) title: Option<String>,
    pub(crate) time: Option<DateTime<Utc>>,

    pub(crate) token_buffer: String,
    pub(crate) text_buffer: String,

    pub(crate) depth_body: i32,
    pub(crate) depth_anchor: i32,
    pub(crate) depth_ignorable: i32,

    pub(crate) depth_tag: i32,
    pub(crate) depth_block_tag: i32,

    pub(crate) last_was_whitespace: bool,
    /// Running index of text events.
    /// TODO: track which text elements each emitted block contains.
    #[allow(dead_code)]
    text_element_index: i32,

    pub(crate) text_blocks: Vec<TextBlock>,

    pub(crate) last_start_tag: String,
    #[allow(dead_code)]
    pub(crate) last_end_tag: String,

    offset_blocks: i32,

    pub(crate) flush: bool,
    in_anchor_text: bool,

    /// One frame per open element; each frame holds the label sets pushed by
    /// that element's tag action.
    label_stacks: Vec<Vec<&'static [Label]>>,

    /// Names of the currently open elements, for well-formedness checks.
    tag_element_stack: Vec<String>,

    pub(crate) in_linked_data_json: bool,
    pub(crate) linked_data_json: Vec<String>,

    pub(crate) warnings: Vec<Warning>,
}

impl ContentHandler {
    /// Creates a handler with empty buffers, ready to receive events.
    #[must_use]
    pub fn new() -> Self {
        Self {
            title: None,
            time: None,
            token_buffer: String::new(),
            text_buffer: String::new(),
            depth_body: 0,
            depth_anchor: 0,
            depth_ignorable: 0,
            depth_tag: 0,
            depth_block_tag: -1,
            last_was_whitespace: false,
            text_element_index: 0,
            text_blocks: Vec::new(),
            last_start_tag: String::new(),
            last_end_tag: String::new(),
            offset_blocks: 0,
            flush: false,
            in_anchor_text: false,
            label_stacks: Vec::new(),
            tag_element_stack: Vec::new(),
            in_linked_data_json: false,
            linked_data_json: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// The blocks emitted so far, in document order.
    #[must_use]
    pub fn text_blocks(&self) -> &[TextBlock] {
        &self.text_blocks
    }

    /// Handles a start-tag event. `name` must be lowercase.
    pub fn start_element(&mut self, name: &str, attrs: &[Attribute]) {
        self.label_stacks.push(Vec::new());
        self.tag_element_stack.push(name.to_string());

        if name == "script" && has_attr(attrs, "type", "application/ld+json") {
            self.in_linked_data_json = true;
        }

        match TAG_ACTIONS.get(name) {
            Some(&action) => {
                if action == TagAction::Time {
                    if let Some(value) = attr_value(attrs, "datetime") {
                        if let Ok(t) = DateTime::parse_from_rfc3339(value) {
                            self.time = Some(t.with_timezone(&Utc));
                        }
                    }
                }

                if action.changes_tag_level() {
                    self.depth_tag += 1;
                }
                self.flush = action.start(self) || self.flush;
            }
            None => {
                self.depth_tag += 1;
                self.flush = true;
            }
        }

        self.last_start_tag = name.to_string();
    }

    /// Handles an end-tag event. A mismatch against the innermost open
    /// element records a warning and drops the event.
    pub fn end_element(&mut self, name: &str) {
        match self.tag_element_stack.pop() {
            None => {
                self.warnings.push(Warning::StrayEndTag {
                    found: name.to_string(),
                });
                return;
            }
            Some(popped) if popped != name => {
                self.warnings.push(Warning::MismatchedEndTag {
                    expected: popped,
                    found: name.to_string(),
                });
                return;
            }
            Some(_) => {}
        }

        match TAG_ACTIONS.get(name) {
            Some(&action) => {
                self.flush = action.end(self) || self.flush;
                if action.changes_tag_level() {
                    self.depth_tag -= 1;
                }
            }
            None => {
                self.flush = true;
                self.depth_tag -= 1;
            }
        }

        if self.flush {
            self.flush_block();
            self.flush = false;
        }

        self.last_end_tag = name.to_string();

        self.label_stacks.pop();
    }

    /// Handles a text event.
    pub fn text_token(&mut self, text: &str) {
        if self.in_linked_data_json {
            self.linked_data_json.push(text.to_string());
        }

        self.text_element_index += 1;

        if self.flush {
            self.flush_block();
            self.flush = false;
        }

        if self.depth_ignorable != 0 || text.is_empty() {
            return;
        }

        // Collapse whitespace runs to single spaces, remembering whether the
        // original text started and ended with whitespace.
        let mut collapsed = String::with_capacity(text.len());
        let mut was_first_whitespace = false;
        let mut was_last_whitespace = false;
        for (i, ch) in text.chars().enumerate() {
            if ch.is_whitespace() {
                if i == 0 {
                    was_first_whitespace = true;
                }
                if !was_last_whitespace {
                    collapsed.push(' ');
                    was_last_whitespace = true;
                }
            } else {
                collapsed.push(ch);
                was_last_whitespace = false;
            }
        }

        let trimmed = collapsed.trim();
        if trimmed.is_empty() {
            if was_first_whitespace || was_last_whitespace {
                if !self.last_was_whitespace {
                    self.text_buffer.push(' ');
                    self.token_buffer.push(' ');
                }
                self.last_was_whitespace = true;
            } else {
                self.last_was_whitespace = false;
            }
            return;
        }

        if was_first_whitespace && !self.last_was_whitespace {
            self.text_buffer.push(' ');
            self.token_buffer.push(' ');
        }

        if self.depth_block_tag == -1 {
            self.depth_block_tag = self.depth_tag;
        }

        self.text_buffer.push_str(trimmed);
        self.token_buffer.push_str(trimmed);
        if was_last_whitespace {
            self.text_buffer.push(' ');
            self.token_buffer.push(' ');
        }

        self.last_was_whitespace = was_last_whitespace;
    }

    /// Closes the current buffers, emitting a [`TextBlock`] when inside
    /// `<body>` and the buffered tokens amount to anything.
    ///
    /// Outside `<body>` the only effect is capturing the document title when
    /// the buffers belong to a `<title>` element.
    pub fn flush_block(&mut self) {
        if self.depth_body == 0 {
            if self.last_start_tag == "title" {
                let title = self.token_buffer.trim();
                if !title.is_empty() {
                    self.title = Some(title.to_string());
                }
            }

            self.text_buffer.clear();
            self.token_buffer.clear();
            return;
        }

        match self.token_buffer.len() {
            0 => return,
            1 if self.last_was_whitespace => {
                self.text_buffer.clear();
                self.token_buffer.clear();
                return;
            }
            _ => {}
        }

        let mut num_words: i32 = 0;
        let mut num_linked_words: i32 = 0;
        let mut num_wrapped_lines: i32 = 0;
        let mut num_tokens: i32 = 0;
        let mut num_words_current_line: i32 = 0;
        let mut current_line_length: i32 = -1; // don't count the first space

        for token in MULTI_SPACE.split(&self.token_buffer) {
            if token == ANCHOR_TEXT_START {
                self.in_anchor_text = true;
            } else if token == ANCHOR_TEXT_END {
                self.in_anchor_text = false;
            } else if is_word(token) {
                num_tokens += 1;
                num_words += 1;
                num_words_current_line += 1;

                if self.in_anchor_text {
                    num_linked_words += 1;
                }

                #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
                let token_length = token.chars().count() as i32;
                current_line_length += token_length + 1;

                if current_line_length > MAX_LINE_LENGTH {
                    num_wrapped_lines += 1;
                    current_line_length = token_length;
                    num_words_current_line = 1;
                }
            } else if !token.is_empty() {
                num_tokens += 1;
            }
        }

        if num_tokens == 0 {
            return;
        }

        let num_words_in_wrapped_lines = if num_wrapped_lines == 0 {
            num_wrapped_lines = 1;
            num_words
        } else {
            num_words - num_words_current_line
        };

        let text = self.text_buffer.trim();
        if !text.is_empty() {
            let mut tb = TextBlock::new(
                text.to_string(),
                num_words,
                num_linked_words,
                num_words_in_wrapped_lines,
                num_wrapped_lines,
                self.offset_blocks,
                self.depth_block_tag,
            );

            for frame in &self.label_stacks {
                for labels in frame {
                    tb.add_labels(labels.iter().copied());
                }
            }

            self.text_blocks.push(tb);
            self.offset_blocks += 1;
        }

        self.text_buffer.clear();
        self.token_buffer.clear();

        self.depth_block_tag = -1;
    }

    /// Ensures exactly one separating space at the current end of both
    /// buffers.
    pub(crate) fn add_whitespace_if_necessary(&mut self) {
        if !self.last_was_whitespace {
            self.token_buffer.push(' ');
            self.text_buffer.push(' ');
            self.last_was_whitespace = true;
        }
    }

    /// Pushes a label set onto the current element's label frame.
    pub(crate) fn push_labels(&mut self, labels: &'static [Label]) {
        if let Some(frame) = self.label_stacks.last_mut() {
            frame.push(labels);
        }
    }
}

impl Default for ContentHandler {
    fn default() -> Self {
        Self::new()
    }
}

fn attr_value<'a>(attrs: &'a [Attribute], name: &str) -> Option<&'a str> {
    attrs
        .iter()
        .find(|attr| &*attr.name.local == name)
        .map(|attr| &*attr.value)
}

fn has_attr(attrs: &[Attribute], name: &str, value: &str) -> bool {
    attr_value(attrs, name) == Some(value)
}
