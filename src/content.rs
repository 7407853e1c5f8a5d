//! content.rs
//!
//! Content-stream tokenizer. Emits two record kinds: operators with the
//! operands accumulated before them, and inline images (`BI ... ID ... EI`).
//! Indirect references are not allowed inside content streams; stray
//! operands before an inline image or at end of stream are logged and
//! dropped.

use crate::error::{ParseError, ParseErrorKind};
use crate::object::{Dictionary, Object};
use crate::parser::{BasicParser, ParseResult};

/// `name` is a non-numeric, non-delimiter token; `operands` is everything
/// accumulated since the previous operator. Unknown operators pass through
/// with their operands intact.
#[derive(Debug, Clone, PartialEq)]
pub struct Operator {
    pub name: String,
    pub operands: Vec<Object>,
}

/// An image embedded directly in the content stream.
#[derive(Debug, Clone, PartialEq)]
pub struct InlineImage {
    pub dict: Dictionary,
    pub data: Vec<u8>,
}

impl InlineImage {
    /// Payload decoded through the declared filters. Inline images spell
    /// the keys `/F` and `/DP`; normalize before handing to the pipeline.
    pub fn filtered(&self) -> crate::filters::FilterResult {
        let mut dict = self.dict.clone();
        if !dict.has("Filter") {
            if let Some(f) = dict.get("F").cloned() {
                dict.set("Filter", f);
            }
        }
        if !dict.has("DecodeParms") {
            if let Some(p) = dict.get("DP").cloned() {
                dict.set("DecodeParms", p);
            }
        }
        crate::filters::decode(&dict, &self.data, false)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ContentRecord {
    Operator(Operator),
    InlineImage(InlineImage),
}

/// Explicit iterator over a content stream; drive it with
/// [`ContentParser::next_record`] or as an `Iterator`.
pub struct ContentParser {
    parser: BasicParser,
    done: bool,
}

enum Element {
    Object(Object),
    Token(String),
    Image(InlineImage),
}

impl ContentParser {
    pub fn new(data: Vec<u8>) -> Self {
        let mut parser = BasicParser::from_bytes(data);
        parser.indirect_references_allowed = false;
        ContentParser { parser, done: false }
    }

    /// An operator has a name that cannot start a native value.
    fn is_operator(token: &str) -> bool {
        !token.is_empty() && !"/01234567890+-.<[(".contains(token.as_bytes()[0] as char)
    }

    fn element(&mut self) -> ParseResult<Element> {
        let state = self.parser.get_state();
        match self.parser.object() {
            Ok(obj) => Ok(Element::Object(obj)),
            Err(_) => {
                self.parser.set_state(state);
                let token = self.parser.token()?;
                if token == "BI" {
                    Ok(Element::Image(self.inline_image_body()?))
                } else {
                    Ok(Element::Token(token))
                }
            }
        }
    }

    /// The next operator or inline image, `None` at end of stream.
    pub fn next_record(&mut self) -> Option<ContentRecord> {
        if self.done {
            return None;
        }
        let mut operands: Vec<Object> = Vec::new();
        self.parser.maybe_spaces_or_comments();
        while self.parser.current().is_some() {
            match self.element() {
                Ok(Element::Image(image)) => {
                    if !operands.is_empty() {
                        log::debug!("skipping heading operands for inline image: {:?}", operands);
                    }
                    return Some(ContentRecord::InlineImage(image));
                }
                Ok(Element::Token(token)) if Self::is_operator(&token) => {
                    return Some(ContentRecord::Operator(Operator {
                        name: token,
                        operands,
                    }));
                }
                Ok(Element::Token(token)) => {
                    log::debug!("unexpected token {} used as operand", token);
                    operands.push(Object::Name(token));
                }
                Ok(Element::Object(obj)) => operands.push(obj),
                Err(e) => {
                    log::debug!("skipping unparseable content byte: {}", e);
                    self.parser.buffer.next();
                }
            }
            self.parser.maybe_spaces_or_comments();
        }
        self.done = true;
        if !operands.is_empty() {
            log::debug!("skipping trailing operands at end of stream: {:?}", operands);
        }
        None
    }

    /// `BI` was consumed; reads the name/value entries, `ID`, the binary
    /// payload, and the whitespace-bounded `EI`.
    fn inline_image_body(&mut self) -> ParseResult<InlineImage> {
        let mut dict = Dictionary::new();
        self.parser.maybe_spaces_or_comments();
        loop {
            match self.parser.current() {
                Some(b'I') => break,
                Some(b'/') => {
                    let key = self.parser.name()?;
                    self.parser.maybe_spaces_or_comments();
                    let val = self.parser.object()?;
                    dict.set(key, val);
                    self.parser.maybe_spaces_or_comments();
                }
                _ => {
                    return Err(ParseError::new(
                        ParseErrorKind::UnexpectedToken,
                        self.parser.buffer.position(),
                        "name or ID expected in inline image",
                    ))
                }
            }
        }
        let id = self.parser.buffer.read(2);
        if id.as_deref() != Some(b"ID".as_slice()) {
            return Err(ParseError::new(
                ParseErrorKind::UnexpectedToken,
                self.parser.buffer.position(),
                "ID expected",
            ));
        }
        if !self.parser.is_whitespace() {
            return Err(ParseError::new(
                ParseErrorKind::UnexpectedToken,
                self.parser.buffer.position(),
                "whitespace expected after ID",
            ));
        }
        self.parser.buffer.next();

        // payload runs to the first EI bounded by whitespace on either side
        let mut data: Vec<u8> = Vec::new();
        loop {
            match self.parser.buffer.next() {
                Some(b) => data.push(b),
                None => {
                    return Err(ParseError::new(
                        ParseErrorKind::EndOfInput,
                        self.parser.buffer.position(),
                        "EI not found",
                    ))
                }
            }
            let n = data.len();
            let ws_ei = n >= 3
                && data[n - 2..] == *b"EI"
                && crate::parser::is_whitespace(data[n - 3]);
            let ei_ws = n >= 3
                && data[n - 3..n - 1] == *b"EI"
                && crate::parser::is_whitespace(data[n - 1]);
            if ws_ei || ei_ws {
                data.truncate(n - 3);
                break;
            }
        }
        Ok(InlineImage { dict, data })
    }
}

impl Iterator for ContentParser {
    type Item = ContentRecord;

    fn next(&mut self) -> Option<ContentRecord> {
        self.next_record()
    }
}
