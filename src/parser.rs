//! parser.rs
//!
//! Tokenizer for PDF's native object types. [`BasicParser`] reads from a
//! [`Buffer`] and recognizes whitespace, delimiters, comments and the atomic
//! constructors: null / booleans / numerics / names / strings / hex strings /
//! arrays / dictionaries / streams / indirect references. Document-level
//! structure (header, xref, trailer, object location) lives in
//! `document_parser`.

use crate::buffer::{Buffer, BufferState};
use crate::error::{ParseError, ParseErrorKind};
use crate::object::{latin1_to_string, Dictionary, IndirectObject, Object, ObjectId, Stream};

pub const CR: u8 = b'\r';
pub const LF: u8 = b'\n';

pub fn is_whitespace(b: u8) -> bool {
    matches!(b, 0x00 | 0x09 | 0x0a | 0x0c | 0x0d | 0x20)
}

pub fn is_delimiter(b: u8) -> bool {
    matches!(b, b'(' | b')' | b'<' | b'>' | b'[' | b']' | b'{' | b'}' | b'/' | b'%')
}

pub fn is_regular(b: u8) -> bool {
    !is_whitespace(b) && !is_delimiter(b)
}

fn hex_value(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

/// Left behind by [`BasicParser::stream_payload`] when a stream declared its
/// `/Length` as an indirect reference. The document parser resolves the
/// reference afterwards and fixes the payload up (see spec on indirect
/// stream lengths).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingStreamLength {
    pub length_ref: ObjectId,
    pub payload_start: u64,
}

pub struct BasicParser {
    pub buffer: Buffer,
    /// Content streams and CMaps must not contain `N G R`; with this unset
    /// a digit always starts a plain numeric.
    pub indirect_references_allowed: bool,
    pub(crate) pending_stream_length: Option<PendingStreamLength>,
}

pub type ParseResult<T> = std::result::Result<T, ParseError>;

impl BasicParser {
    pub fn new(buffer: Buffer) -> Self {
        BasicParser {
            buffer,
            indirect_references_allowed: true,
            pending_stream_length: None,
        }
    }

    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self::new(Buffer::from_bytes(bytes, 0))
    }

    fn err<T>(&mut self, kind: ParseErrorKind, message: impl Into<String>) -> ParseResult<T> {
        Err(ParseError::new(kind, self.buffer.position(), message))
    }

    // --- character classes on the cursor ---

    pub fn current(&mut self) -> Option<u8> {
        self.buffer.current()
    }

    pub fn is_eof(&mut self) -> bool {
        self.buffer.is_eof()
    }

    pub fn is_whitespace(&mut self) -> bool {
        self.current().is_some_and(is_whitespace)
    }

    pub fn is_delimiter(&mut self) -> bool {
        self.current().is_some_and(is_delimiter)
    }

    pub fn is_regular(&mut self) -> bool {
        self.current().is_some_and(is_regular)
    }

    pub fn is_digit(&mut self) -> bool {
        self.current().is_some_and(|b| b.is_ascii_digit())
    }

    pub fn is_hex_digit(&mut self) -> bool {
        self.current().is_some_and(|b| hex_value(b).is_some())
    }

    pub fn is_eol(&mut self) -> bool {
        matches!(self.current(), Some(CR) | Some(LF))
    }

    fn read(&mut self, n: usize) -> ParseResult<Vec<u8>> {
        match self.buffer.read(n) {
            Some(v) => Ok(v),
            None => self.err(ParseErrorKind::EndOfInput, format!("expected {} more bytes", n)),
        }
    }

    // --- whitespace / comments / line ends ---

    pub fn maybe_spaces(&mut self) {
        while self.is_whitespace() {
            self.buffer.next();
        }
    }

    /// Skips whitespace and any number of comments; a joined multi-line
    /// comment is returned when at least one was present.
    pub fn maybe_spaces_or_comments(&mut self) -> Option<String> {
        self.maybe_spaces();
        let mut comments: Vec<String> = Vec::new();
        while self.current() == Some(b'%') {
            if let Ok(c) = self.comment() {
                comments.push(c);
            }
            self.maybe_spaces();
        }
        if comments.is_empty() {
            None
        } else {
            Some(comments.join("\n"))
        }
    }

    /// EOL is CR, LF or CR LF.
    pub fn eol(&mut self) -> ParseResult<()> {
        if !self.is_eol() {
            return self.err(ParseErrorKind::UnexpectedToken, "EOL expected");
        }
        self.maybe_eol();
        Ok(())
    }

    pub fn maybe_eol(&mut self) {
        if self.current() == Some(CR) {
            self.buffer.next();
            if self.current() == Some(LF) {
                self.buffer.next();
            }
        } else if self.current() == Some(LF) {
            self.buffer.next();
        }
    }

    pub fn comment(&mut self) -> ParseResult<String> {
        if self.current() != Some(b'%') {
            return self.err(ParseErrorKind::UnexpectedToken, "% expected");
        }
        let mut line = Vec::new();
        while let Some(b) = self.current() {
            if b == CR || b == LF {
                break;
            }
            line.push(b);
            self.buffer.next();
        }
        self.maybe_eol();
        Ok(latin1_to_string(&line))
    }

    // --- atomic constructors ---

    pub fn null(&mut self) -> ParseResult<Object> {
        let token = self.read(4)?;
        if token != b"null" {
            return self.err(ParseErrorKind::UnexpectedToken, "null token expected");
        }
        Ok(Object::Null)
    }

    pub fn true_token(&mut self) -> ParseResult<Object> {
        let token = self.read(4)?;
        if token != b"true" {
            return self.err(ParseErrorKind::UnexpectedToken, "true token expected");
        }
        Ok(Object::Boolean(true))
    }

    pub fn false_token(&mut self) -> ParseResult<Object> {
        let token = self.read(5)?;
        if token != b"false" {
            return self.err(ParseErrorKind::UnexpectedToken, "false token expected");
        }
        Ok(Object::Boolean(false))
    }

    /// Optional sign, digits, optional fractional part. Integer when no `.`
    /// was seen, Real otherwise.
    pub fn numeric(&mut self) -> ParseResult<Object> {
        let mut is_negative = false;
        let mut is_integer = true;
        match self.current() {
            Some(b'+') => {
                self.buffer.next();
            }
            Some(b'-') => {
                is_negative = true;
                self.buffer.next();
            }
            _ => {}
        }

        let mut ipart = Vec::new();
        while self.is_digit() {
            ipart.push(self.buffer.next().unwrap());
        }

        let mut fpart = Vec::new();
        if self.current() == Some(b'.') {
            is_integer = false;
            self.buffer.next();
            while self.is_digit() {
                fpart.push(self.buffer.next().unwrap());
            }
        }

        if ipart.is_empty() && fpart.is_empty() {
            return self.err(ParseErrorKind::BadNumber, "invalid numeric token");
        }

        if is_integer {
            let text = latin1_to_string(&ipart);
            let val: i64 = match text.parse() {
                Ok(v) => v,
                Err(_) => return self.err(ParseErrorKind::BadNumber, text),
            };
            Ok(Object::Integer(if is_negative { -val } else { val }))
        } else {
            let text = format!(
                "{}.{}",
                if ipart.is_empty() { "0".into() } else { latin1_to_string(&ipart) },
                if fpart.is_empty() { "0".into() } else { latin1_to_string(&fpart) },
            );
            let val: f64 = match text.parse() {
                Ok(v) => v,
                Err(_) => return self.err(ParseErrorKind::BadNumber, text),
            };
            Ok(Object::Real(if is_negative { -val } else { val }))
        }
    }

    pub fn non_negative_int(&mut self) -> ParseResult<i64> {
        match self.numeric()? {
            Object::Integer(n) if n >= 0 => Ok(n),
            other => self.err(
                ParseErrorKind::BadNumber,
                format!("non-negative int expected, got {}", other),
            ),
        }
    }

    /// `/Name`, `#xx` escapes decoded. An escape shorter than two hex digits
    /// is kept literally.
    pub fn name(&mut self) -> ParseResult<String> {
        if self.current() != Some(b'/') {
            return self.err(ParseErrorKind::BadName, "name token expected");
        }
        self.buffer.next();
        let mut token = Vec::new();
        while self.is_regular() {
            if self.current() == Some(b'#') {
                self.buffer.next();
                let mut code = Vec::new();
                for _ in 0..2 {
                    if !self.is_hex_digit() {
                        break;
                    }
                    code.push(self.buffer.next().unwrap());
                }
                if code.len() == 2 {
                    token.push(hex_value(code[0]).unwrap() * 16 + hex_value(code[1]).unwrap());
                } else {
                    token.push(b'#');
                    token.extend_from_slice(&code);
                }
            } else {
                token.push(self.buffer.next().unwrap());
            }
        }
        if token.is_empty() {
            return self.err(ParseErrorKind::BadName, "empty /Name found");
        }
        Ok(latin1_to_string(&token))
    }

    /// `<...>` — whitespace and comments between digits are skipped, an odd
    /// trailing nibble is zero-padded, the empty string is allowed.
    pub fn hexstring(&mut self) -> ParseResult<Object> {
        if self.current() != Some(b'<') {
            return self.err(ParseErrorKind::BadHex, "hexadecimal string expected");
        }
        self.buffer.next();
        let mut digits = Vec::new();
        self.maybe_spaces_or_comments();
        while self.is_hex_digit() {
            digits.push(self.buffer.next().unwrap());
            self.maybe_spaces_or_comments();
        }
        if self.buffer.next() != Some(b'>') {
            return self.err(ParseErrorKind::BadHex, "wrong hexadecimal string");
        }
        if digits.len() % 2 == 1 {
            digits.push(b'0');
        }
        let bytes = digits
            .chunks(2)
            .map(|p| hex_value(p[0]).unwrap() * 16 + hex_value(p[1]).unwrap())
            .collect();
        Ok(Object::HexString(bytes))
    }

    /// Literal string, balanced parentheses. `\ddd` octal escapes above 255
    /// are kept as the literal backslash sequence; `\<EOL>` continues the
    /// line.
    pub fn string(&mut self) -> ParseResult<Object> {
        if self.current() != Some(b'(') {
            return self.err(ParseErrorKind::BadString, "string expected");
        }
        self.buffer.next();
        let mut val = Vec::new();
        loop {
            let ch = match self.buffer.next() {
                Some(c) => c,
                None => return self.err(ParseErrorKind::BadString, "unterminated string"),
            };
            match ch {
                b'(' => {
                    // balanced inner parens are part of the value
                    self.buffer.prev();
                    let inner = self.string()?;
                    val.push(b'(');
                    if let Object::String(s) = inner {
                        val.extend_from_slice(&s);
                    }
                    val.push(b')');
                }
                b')' => break,
                b'\\' => {
                    let esc = match self.buffer.next() {
                        Some(c) => c,
                        None => return self.err(ParseErrorKind::BadString, "unterminated escape"),
                    };
                    match esc {
                        b'0'..=b'7' => {
                            let mut code = vec![esc];
                            for _ in 0..2 {
                                match self.current() {
                                    Some(c @ b'0'..=b'7') => {
                                        code.push(c);
                                        self.buffer.next();
                                    }
                                    _ => break,
                                }
                            }
                            let n = code.iter().fold(0u32, |acc, d| acc * 8 + (d - b'0') as u32);
                            if n <= 255 {
                                val.push(n as u8);
                            } else {
                                val.push(b'\\');
                                val.extend_from_slice(&code);
                            }
                        }
                        CR | LF => {
                            self.buffer.prev();
                            self.maybe_eol();
                        }
                        b'n' => val.push(b'\n'),
                        b'r' => val.push(b'\r'),
                        b't' => val.push(b'\t'),
                        b'b' => val.push(0x08),
                        b'f' => val.push(0x0c),
                        b'(' => val.push(b'('),
                        b')' => val.push(b')'),
                        b'\\' => val.push(b'\\'),
                        other => {
                            // unknown escape, keep as-is
                            val.push(b'\\');
                            val.push(other);
                        }
                    }
                }
                other => val.push(other),
            }
        }
        Ok(Object::String(val))
    }

    pub fn array(&mut self) -> ParseResult<Object> {
        if self.current() != Some(b'[') {
            return self.err(ParseErrorKind::UnexpectedToken, "array expected");
        }
        self.buffer.next();
        let mut array = Vec::new();
        self.maybe_spaces_or_comments();
        loop {
            match self.current() {
                Some(b']') => break,
                Some(_) => {
                    array.push(self.object()?);
                    self.maybe_spaces_or_comments();
                }
                None => return self.err(ParseErrorKind::EndOfInput, "unterminated array"),
            }
        }
        self.buffer.next();
        Ok(Object::Array(array))
    }

    pub fn dictionary(&mut self) -> ParseResult<Dictionary> {
        let pfx = self.read(2)?;
        if pfx != b"<<" {
            return self.err(ParseErrorKind::BadDict, "dictionary expected");
        }
        let mut res = Dictionary::new();
        self.maybe_spaces_or_comments();
        loop {
            match self.current() {
                Some(b'>') => break,
                Some(_) => {
                    let key = self.name()?;
                    self.maybe_spaces_or_comments();
                    let val = self.object()?;
                    res.set(key, val);
                    self.maybe_spaces_or_comments();
                }
                None => return self.err(ParseErrorKind::EndOfInput, "unterminated dictionary"),
            }
        }
        self.buffer.next();
        if self.buffer.next() != Some(b'>') {
            return self.err(ParseErrorKind::BadDict, "end of dictionary >> expected");
        }
        Ok(res)
    }

    fn dictionary_or_stream_or_hexstring(&mut self) -> ParseResult<Object> {
        if self.current() != Some(b'<') {
            return self.err(ParseErrorKind::UnexpectedToken, "dict or hexstring expected");
        }
        self.buffer.next();
        match self.current() {
            Some(b'<') => {
                self.buffer.prev();
                let dict = self.dictionary()?;
                // binary data may come after the dict
                self.maybe_spaces_or_comments();
                if self.current() == Some(b's') {
                    Ok(Object::Stream(self.stream_payload(dict)?))
                } else {
                    Ok(Object::Dictionary(dict))
                }
            }
            Some(_) => {
                self.buffer.prev();
                self.hexstring()
            }
            None => self.err(ParseErrorKind::EndOfInput, "dict, stream or hexstring expected"),
        }
    }

    /// Reads `stream ... endstream` given its already-parsed dictionary.
    ///
    /// `/Length` recovery rules:
    ///   1. if the payload hits `endstream` earlier than claimed, it is
    ///      truncated there;
    ///   2. if `endstream` does not follow the claimed length, the payload
    ///      extends forward to the next `endstream`, with EOL bytes between
    ///      payload and keyword stripped.
    ///
    /// An indirect `/Length` reads by `endstream` scan and records a
    /// [`PendingStreamLength`] for the document parser to settle.
    pub fn stream_payload(&mut self, dict: Dictionary) -> ParseResult<Stream> {
        let token = self.read(6)?;
        if token != b"stream" {
            return self.err(ParseErrorKind::BadStream, "stream keyword expected");
        }
        // `stream` must be followed by CR LF or LF; a lone CR (or nothing)
        // is tolerated
        if self.current() == Some(CR) {
            self.buffer.next();
        }
        if self.current() == Some(LF) {
            self.buffer.next();
        }
        let payload_start = self.buffer.position();

        let declared = match dict.get("Length") {
            Some(Object::Integer(n)) if *n >= 0 => Some(*n as usize),
            Some(Object::Reference(id)) => {
                self.pending_stream_length = Some(PendingStreamLength {
                    length_ref: *id,
                    payload_start,
                });
                None
            }
            _ => None,
        };

        let data = match declared {
            Some(length) => {
                let mut data = Vec::with_capacity(length);
                while data.len() < length {
                    match self.buffer.next() {
                        Some(b) => data.push(b),
                        None => break, // shorter than claimed, rule 1
                    }
                }
                self.maybe_eol();
                let state = self.buffer.get_state();
                match self.read(9) {
                    Ok(token) if token == b"endstream" => data,
                    _ => {
                        self.buffer.set_state(state);
                        self.recover_stream_data(data, payload_start)?
                    }
                }
            }
            None => {
                let data = self.scan_to_endstream()?;
                return Ok(Stream::new(dict, data));
            }
        };

        Ok(Stream::new(dict, data))
    }

    /// The declared length did not land on `endstream`. Either the keyword
    /// hides inside the bytes already read (declared too long), or it comes
    /// later (declared too short).
    fn recover_stream_data(&mut self, data: Vec<u8>, payload_start: u64) -> ParseResult<Vec<u8>> {
        if let Some(pos) = find_subsequence(&data, b"endstream") {
            log::warn!("stream /Length too large, truncating at endstream");
            let reset_to = payload_start + pos as u64 + b"endstream".len() as u64;
            self.buffer
                .reset(reset_to as i64)
                .map_err(|_| ParseError::new(ParseErrorKind::BadStream, reset_to, "seek failed"))?;
            Ok(strip_trailing_eol(&data[..pos]).to_vec())
        } else {
            log::warn!("stream /Length too small, scanning forward for endstream");
            let mut data = data;
            data.extend(self.scan_to_endstream()?);
            Ok(data)
        }
    }

    /// Consumes bytes until the next `endstream`, leaving the cursor after
    /// the keyword. Trailing EOL bytes before the keyword are stripped.
    fn scan_to_endstream(&mut self) -> ParseResult<Vec<u8>> {
        const KEYWORD: &[u8] = b"endstream";
        let mut data: Vec<u8> = Vec::new();
        loop {
            match self.buffer.next() {
                Some(b) => {
                    data.push(b);
                    if data.ends_with(KEYWORD) {
                        data.truncate(data.len() - KEYWORD.len());
                        return Ok(strip_trailing_eol(&data).to_vec());
                    }
                }
                None => {
                    return self.err(ParseErrorKind::BadStream, "endstream not found");
                }
            }
        }
    }

    /// `N G R` — both integers must be non-negative and `R` must end the
    /// token.
    pub fn indirect_reference(&mut self) -> ParseResult<Object> {
        let num = self.non_negative_int()?;
        self.maybe_spaces_or_comments();
        let gen = self.non_negative_int()?;
        self.maybe_spaces_or_comments();
        if self.buffer.next() != Some(b'R') {
            return self.err(ParseErrorKind::UnexpectedToken, "R keyword expected");
        }
        if self.is_regular() {
            return self.err(ParseErrorKind::UnexpectedToken, "R keyword expected");
        }
        Ok(Object::Reference((num as u32, gen as u16)))
    }

    /// At object position a leading digit is ambiguous: speculatively try a
    /// reference, fall back to a plain numeric via saved buffer state.
    fn numeric_or_indirect_reference(&mut self) -> ParseResult<Object> {
        let state = self.buffer.get_state();
        match self.indirect_reference() {
            Ok(obj) => Ok(obj),
            Err(_) => {
                self.buffer.set_state(state);
                self.numeric()
            }
        }
    }

    /// One object of any native type. Leading and trailing whitespace and
    /// comments are consumed.
    pub fn object(&mut self) -> ParseResult<Object> {
        self.maybe_spaces_or_comments();
        let val = match self.current() {
            Some(b'<') => self.dictionary_or_stream_or_hexstring()?,
            Some(b'[') => self.array()?,
            Some(b'(') => self.string()?,
            Some(b'n') => self.null()?,
            Some(b'f') => self.false_token()?,
            Some(b't') => self.true_token()?,
            Some(b'+') | Some(b'-') | Some(b'.') => self.numeric()?,
            Some(b'0'..=b'9') => {
                if self.indirect_references_allowed {
                    self.numeric_or_indirect_reference()?
                } else {
                    self.numeric()?
                }
            }
            Some(b'/') => Object::Name(self.name()?),
            Some(other) => {
                return self.err(
                    ParseErrorKind::UnexpectedToken,
                    format!("unexpected byte 0x{:02x}", other),
                )
            }
            None => return self.err(ParseErrorKind::EndOfInput, "object expected"),
        };
        self.maybe_spaces_or_comments();
        Ok(val)
    }

    /// `N G obj ... endobj` with the byte range the object occupies.
    pub fn indirect_object(&mut self) -> ParseResult<(IndirectObject, u64, u64)> {
        let begin_offset = self.buffer.position();
        let num = self.non_negative_int()?;
        self.maybe_spaces_or_comments();
        let gen = self.non_negative_int()?;
        self.maybe_spaces_or_comments();
        let token = self.read(3)?;
        if token != b"obj" {
            return self.err(ParseErrorKind::UnexpectedToken, "obj expected");
        }
        self.maybe_spaces_or_comments();
        let value = self.object()?;
        self.maybe_spaces_or_comments();
        let token = self.read(6)?;
        if token != b"endobj" {
            return self.err(ParseErrorKind::UnexpectedToken, "endobj expected");
        }
        let end_offset = self.buffer.position();
        Ok((
            IndirectObject { num: num as u32, gen: gen as u16, value },
            begin_offset,
            end_offset,
        ))
    }

    /// A run of regular bytes that is not a native value: CMap and content
    /// stream keywords (`def`, `begincmap`, `Tj`, `T*`, ...).
    pub fn token(&mut self) -> ParseResult<String> {
        let mut token = Vec::new();
        while self.is_regular() {
            token.push(self.buffer.next().unwrap());
        }
        if token.is_empty() {
            return self.err(ParseErrorKind::UnexpectedToken, "token expected");
        }
        Ok(latin1_to_string(&token))
    }

    /// Runs `f`; on failure the buffer is restored to where it was. The
    /// scoped-restore contract for all speculative parses.
    pub fn try_parse<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> ParseResult<T>,
    ) -> ParseResult<T> {
        let state = self.buffer.get_state();
        match f(self) {
            Ok(v) => Ok(v),
            Err(e) => {
                self.buffer.set_state(state);
                Err(e)
            }
        }
    }

    pub fn get_state(&self) -> BufferState {
        self.buffer.get_state()
    }

    pub fn set_state(&mut self, state: BufferState) {
        self.buffer.set_state(state)
    }
}

pub(crate) fn find_subsequence(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() || haystack.len() < needle.len() {
        return None;
    }
    haystack.windows(needle.len()).position(|w| w == needle)
}

fn strip_trailing_eol(data: &[u8]) -> &[u8] {
    let mut end = data.len();
    while end > 0 && (data[end - 1] == CR || data[end - 1] == LF) {
        end -= 1;
    }
    &data[..end]
}
