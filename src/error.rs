//! Errors for readpdf

use std::error::Error as StdError;
use std::fmt;
use std::io::Error as IoError;

/// error_chain and friends are certainly nice, but completely overengineered
/// for this use-case. The best form of error handling here is the simple
/// Rust-native way: just enums, `From` + pattern matching. No macros, except
/// for this one.
///
/// What this macro does is (simplified): `impl From<$a> for $b { $b::$variant(error) }`
macro_rules! impl_from {
    ($from:ident, $to:ident::$variant:ident) => {
        impl From<$from> for $to {
            fn from(err: $from) -> Self {
                $to::$variant(err.into())
            }
        }
    };
}

#[derive(Debug)]
pub enum Error {
    /// External: std::io::Error
    Io(IoError),
    /// Malformed native value, carries the byte offset of the failure
    Parse(ParseError),
    /// Stream filter failure
    Filter(FilterError),
    /// Encryption / password failure
    Encryption(EncryptionError),
    /// A chain of indirect objects exceeded the maximum resolution depth
    ReferenceLoop { num: u32, gen: u16 },
    /// Navigation past the last page or before the first
    PageDoesNotExist(usize),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O error: {}", e),
            Error::Parse(e) => write!(f, "{}", e),
            Error::Filter(e) => write!(f, "{}", e),
            Error::Encryption(e) => write!(f, "{}", e),
            Error::ReferenceLoop { num, gen } => {
                write!(f, "max reference depth exceeded resolving {} {} R", num, gen)
            }
            Error::PageDoesNotExist(n) => write!(f, "page {} does not exist", n),
        }
    }
}

impl StdError for Error {}

impl_from!(IoError, Error::Io);
impl_from!(ParseError, Error::Parse);
impl_from!(FilterError, Error::Filter);
impl_from!(EncryptionError, Error::Encryption);

/// What exactly went wrong while tokenizing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    UnexpectedToken,
    EndOfInput,
    BadNumber,
    BadName,
    BadString,
    BadHex,
    BadDict,
    BadStream,
}

impl ParseErrorKind {
    fn as_str(&self) -> &'static str {
        match self {
            ParseErrorKind::UnexpectedToken => "unexpected token",
            ParseErrorKind::EndOfInput => "unexpected end of input",
            ParseErrorKind::BadNumber => "invalid numeric token",
            ParseErrorKind::BadName => "invalid name token",
            ParseErrorKind::BadString => "invalid string literal",
            ParseErrorKind::BadHex => "invalid hexadecimal string",
            ParseErrorKind::BadDict => "invalid dictionary",
            ParseErrorKind::BadStream => "invalid stream object",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    /// Byte offset within the input where the parser gave up
    pub offset: u64,
    pub message: String,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, offset: u64, message: impl Into<String>) -> Self {
        ParseError { kind, offset, message: message.into() }
    }

    pub fn is_eof(&self) -> bool {
        self.kind == ParseErrorKind::EndOfInput
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} at offset {}: {}", self.kind.as_str(), self.offset, self.message)
    }
}

impl StdError for ParseError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    /// Filter name not recognized
    Unknown(String),
    /// ASCII85 / ASCIIHex / Flate / LZW decode failure. Lenient mode turns
    /// this into empty output with a log line, strict mode surfaces it.
    Broken(String),
    /// TIFF predictor 2 and other unimplemented DecodeParms combinations
    Unsupported(String),
}

impl fmt::Display for FilterError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FilterError::Unknown(name) => write!(f, "unknown filter /{}", name),
            FilterError::Broken(msg) => write!(f, "broken encoded stream: {}", msg),
            FilterError::Unsupported(msg) => write!(f, "unsupported filter option: {}", msg),
        }
    }
}

impl StdError for FilterError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncryptionError {
    /// Non-Standard security handler or unknown V / R combination
    Unsupported(String),
    /// Both user and owner password authentication failed
    WrongPassword,
}

impl fmt::Display for EncryptionError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EncryptionError::Unsupported(msg) => write!(f, "unsupported encryption: {}", msg),
            EncryptionError::WrongPassword => write!(f, "wrong password"),
        }
    }
}

impl StdError for EncryptionError {}

pub type Result<T> = std::result::Result<T, Error>;
