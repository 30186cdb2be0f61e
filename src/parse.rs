//! Tokenizer adapter: drives an `html5ever` tokenizer and dispatches its
//! events to the content handler.
//!
//! The adapter owns the glue the tokenizer needs to behave like a proper
//! HTML lexer without a tree builder: it switches the tokenizer into the
//! raw-text states for `script`, `style` and friends, skips dispatch for
//! elements that should have been self-closing (their start tags would
//! desynchronize the element stack, and an `iframe`'s raw fallback content
//! is not document text), and recognizes `application/ld+json` payloads.

use std::io::Read;

use html5ever::tendril::StrTendril;
use html5ever::tokenizer::states::RawKind;
use html5ever::tokenizer::{
    BufferQueue, Tag, TagKind, Token, TokenSink, TokenSinkResult, Tokenizer, TokenizerOpts,
};

use crate::document::Document;
use crate::encoding;
use crate::error::Result;
use crate::handler::ContentHandler;
use crate::patterns::MULTI_SPACE;
use crate::tag_actions::{TagAction, TAG_ACTIONS};

/// Elements whose content the tokenizer must treat as raw text rather than
/// markup.
fn raw_kind(name: &str) -> Option<RawKind> {
    match name {
        "script" => Some(RawKind::ScriptData),
        "style" | "xmp" | "iframe" | "noembed" | "noframes" | "noscript" => {
            Some(RawKind::Rawtext)
        }
        "title" | "textarea" => Some(RawKind::Rcdata),
        _ => None,
    }
}

/// Elements the adapter tolerates as if they were self-closing: their tag
/// events are not dispatched at all, so a missing end tag cannot
/// desynchronize the handler's element stack. This is a narrower set than
/// the tag table's `IgnorableVoid` entries, which handle whichever void
/// elements do get dispatched.
fn should_be_self_closing(name: &str) -> bool {
    matches!(
        name,
        "area"
            | "base"
            | "br"
            | "embed"
            | "hr"
            | "iframe"
            | "img"
            | "input"
            | "link"
            | "meta"
            | "param"
            | "source"
            | "track"
    )
}

struct ParseSink {
    handler: ContentHandler,
    /// Inside the raw-text content of a skipped element (`iframe`); the
    /// fallback text is not document text and is dropped.
    in_skipped_raw_text: bool,
}

impl ParseSink {
    fn new() -> Self {
        Self {
            handler: ContentHandler::new(),
            in_skipped_raw_text: false,
        }
    }

    fn process_tag(&mut self, tag: &Tag) -> TokenSinkResult<()> {
        let name: &str = &tag.name;

        match tag.kind {
            TagKind::StartTag => {
                if tag.self_closing {
                    return TokenSinkResult::Continue;
                }

                if should_be_self_closing(name) {
                    // Still switch the tokenizer into the element's raw
                    // state so its content is not parsed as markup.
                    return match raw_kind(name) {
                        Some(kind) => {
                            self.in_skipped_raw_text = true;
                            TokenSinkResult::RawData(kind)
                        }
                        None => TokenSinkResult::Continue,
                    };
                }

                self.handler.start_element(name, &tag.attrs);

                match raw_kind(name) {
                    Some(kind) => TokenSinkResult::RawData(kind),
                    None => TokenSinkResult::Continue,
                }
            }
            TagKind::EndTag => {
                if should_be_self_closing(name) {
                    self.in_skipped_raw_text = false;
                    return TokenSinkResult::Continue;
                }

                self.handler.in_linked_data_json = false;
                self.handler.end_element(name);
                TokenSinkResult::Continue
            }
        }
    }
}

impl TokenSink for ParseSink {
    type Handle = ();

    fn process_token(&mut self, token: Token, _line_number: u64) -> TokenSinkResult<()> {
        match token {
            Token::TagToken(tag) => self.process_tag(&tag),
            Token::CharacterTokens(text) => {
                if !self.in_skipped_raw_text {
                    self.handler.text_token(&text);
                }
                TokenSinkResult::Continue
            }
            Token::NullCharacterToken
            | Token::CommentToken(_)
            | Token::DoctypeToken(_)
            | Token::ParseError(_)
            | Token::EOFToken => TokenSinkResult::Continue,
        }
    }
}

fn run_tokenizer<S: TokenSink<Handle = ()>>(sink: S, html: &str) -> S {
    let mut tokenizer = Tokenizer::new(sink, TokenizerOpts::default());
    let mut input = BufferQueue::new();
    input.push_back(StrTendril::from_slice(html));
    let _ = tokenizer.feed(&mut input);
    tokenizer.end();
    tokenizer.sink
}

/// Parses an HTML document from a UTF-8 byte stream into a [`Document`]
/// ready for filter processing.
///
/// # Errors
///
/// Returns an error when reading the stream fails. Malformed HTML never
/// fails; it is recorded as warnings on the returned document.
pub fn parse_document<R: Read>(mut r: R) -> Result<Document> {
    let mut html = String::new();
    r.read_to_string(&mut html)?;
    Ok(parse_document_str(&html))
}

/// Parses an HTML document from a string slice.
#[must_use]
pub fn parse_document_str(html: &str) -> Document {
    let sink = run_tokenizer(ParseSink::new(), html);

    let mut handler = sink.handler;
    handler.flush_block();

    Document::from_handler(handler)
}

/// Parses an HTML document from raw bytes, sniffing the character encoding
/// from `<meta>` declarations and transcoding to UTF-8 first.
#[must_use]
pub fn parse_document_bytes(html: &[u8]) -> Document {
    parse_document_str(&encoding::transcode_to_utf8(html))
}

struct TextSink {
    out: String,
    depth_ignorable: i32,
    /// Inside the raw-text content of a skipped element (`iframe`).
    in_skipped_raw_text: bool,
    /// A tag event occurred since the last text token.
    tag_since_text: bool,
    /// The most recent end tag was an anchor or a non-separating inline
    /// element, so the next text token gets no leading space.
    suppress_separator: bool,
}

impl TokenSink for TextSink {
    type Handle = ();

    fn process_token(&mut self, token: Token, _line_number: u64) -> TokenSinkResult<()> {
        match token {
            Token::TagToken(tag) => {
                let name: &str = &tag.name;
                match tag.kind {
                    TagKind::StartTag => {
                        if tag.self_closing {
                            return TokenSinkResult::Continue;
                        }
                        if should_be_self_closing(name) {
                            return match raw_kind(name) {
                                Some(kind) => {
                                    self.in_skipped_raw_text = true;
                                    TokenSinkResult::RawData(kind)
                                }
                                None => TokenSinkResult::Continue,
                            };
                        }
                        self.tag_since_text = true;
                        if let Some(TagAction::Ignorable) = TAG_ACTIONS.get(name) {
                            self.depth_ignorable += 1;
                        }
                        match raw_kind(name) {
                            Some(kind) => TokenSinkResult::RawData(kind),
                            None => TokenSinkResult::Continue,
                        }
                    }
                    TagKind::EndTag => {
                        if should_be_self_closing(name) {
                            self.in_skipped_raw_text = false;
                            return TokenSinkResult::Continue;
                        }
                        self.tag_since_text = true;
                        match TAG_ACTIONS.get(name) {
                            Some(TagAction::Ignorable) => {
                                self.depth_ignorable -= 1;
                                self.suppress_separator = false;
                            }
                            Some(TagAction::Anchor | TagAction::InlineNoWhitespace) => {
                                self.suppress_separator = true;
                            }
                            _ => self.suppress_separator = false,
                        }
                        TokenSinkResult::Continue
                    }
                }
            }
            Token::CharacterTokens(text) => {
                if self.depth_ignorable == 0 && !self.in_skipped_raw_text && !text.is_empty() {
                    if !self.out.is_empty() && self.tag_since_text && !self.suppress_separator {
                        self.out.push(' ');
                    }
                    self.out.push_str(&text);
                    self.tag_since_text = false;
                }
                TokenSinkResult::Continue
            }
            Token::NullCharacterToken
            | Token::CommentToken(_)
            | Token::DoctypeToken(_)
            | Token::ParseError(_)
            | Token::EOFToken => TokenSinkResult::Continue,
        }
    }
}

/// One-pass plain-text extraction: all non-ignorable document text with
/// whitespace collapsed, without block statistics or boilerplate filtering.
///
/// # Errors
///
/// Returns an error when reading the stream fails.
pub fn extract_text<R: Read>(mut r: R) -> Result<String> {
    let mut html = String::new();
    r.read_to_string(&mut html)?;
    Ok(extract_text_str(&html))
}

/// One-pass plain-text extraction from a string slice.
#[must_use]
pub fn extract_text_str(html: &str) -> String {
    let sink = run_tokenizer(
        TextSink {
            out: String::new(),
            depth_ignorable: 0,
            in_skipped_raw_text: false,
            tag_since_text: true,
            suppress_separator: false,
        },
        html,
    );

    MULTI_SPACE.replace_all(&sink.out, " ").trim().to_string()
}
