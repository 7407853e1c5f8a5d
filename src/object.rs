//! object.rs
//!
//! The native PDF value model. Everything a PDF file can express is one of
//! the [`Object`] variants; indirect references stay opaque `(number,
//! generation)` keys and are resolved on demand through the registry, never
//! as direct pointers (the object graph may be cyclic).

use std::cell::OnceCell;
use std::collections::BTreeMap;
use std::fmt;

/// `(object number, generation)` — the identity of an indirect object.
pub type ObjectId = (u32, u16);

#[derive(Debug, Clone, PartialEq)]
pub enum Object {
    Null,
    Boolean(bool),
    Integer(i64),
    Real(f64),
    /// Literal string `(...)` — escape sequences already decoded, bytes kept opaque
    String(Vec<u8>),
    /// Hexadecimal string `<...>` — odd-length input is zero-padded on the right
    HexString(Vec<u8>),
    /// `/Name` — stored after `#xx` decoding
    Name(String),
    Array(Vec<Object>),
    Dictionary(Dictionary),
    Stream(Stream),
    /// `N G R`
    Reference(ObjectId),
    /// `% ...` — kept by the tokenizer, discarded by every consumer
    Comment(String),
}

impl Object {
    pub fn type_name(&self) -> &'static str {
        match self {
            Object::Null => "null",
            Object::Boolean(_) => "boolean",
            Object::Integer(_) => "integer",
            Object::Real(_) => "real",
            Object::String(_) => "string",
            Object::HexString(_) => "hexstring",
            Object::Name(_) => "name",
            Object::Array(_) => "array",
            Object::Dictionary(_) => "dictionary",
            Object::Stream(_) => "stream",
            Object::Reference(_) => "reference",
            Object::Comment(_) => "comment",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Object::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Object::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Object::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Integer or Real, as f64. Content streams mix both freely.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Object::Integer(i) => Some(*i as f64),
            Object::Real(r) => Some(*r),
            _ => None,
        }
    }

    pub fn as_name(&self) -> Option<&str> {
        match self {
            Object::Name(n) => Some(n.as_str()),
            _ => None,
        }
    }

    /// Bytes of a String or HexString.
    pub fn as_string_bytes(&self) -> Option<&[u8]> {
        match self {
            Object::String(s) | Object::HexString(s) => Some(s.as_slice()),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Object]> {
        match self {
            Object::Array(a) => Some(a.as_slice()),
            _ => None,
        }
    }

    pub fn as_array_mut(&mut self) -> Option<&mut Vec<Object>> {
        match self {
            Object::Array(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_dict(&self) -> Option<&Dictionary> {
        match self {
            Object::Dictionary(d) => Some(d),
            Object::Stream(s) => Some(&s.dict),
            _ => None,
        }
    }

    pub fn as_stream(&self) -> Option<&Stream> {
        match self {
            Object::Stream(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_reference(&self) -> Option<ObjectId> {
        match self {
            Object::Reference(id) => Some(*id),
            _ => None,
        }
    }
}

impl From<Dictionary> for Object {
    fn from(d: Dictionary) -> Self {
        Object::Dictionary(d)
    }
}

impl From<Stream> for Object {
    fn from(s: Stream) -> Self {
        Object::Stream(s)
    }
}

/// Mapping from Name to value. Key order is irrelevant in PDF; a sorted map
/// keeps Debug output and tests deterministic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dictionary(BTreeMap<String, Object>);

impl Dictionary {
    pub fn new() -> Self {
        Dictionary(BTreeMap::new())
    }

    pub fn get(&self, key: &str) -> Option<&Object> {
        self.0.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Object> {
        self.0.get_mut(key)
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Object>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<Object> {
        self.0.remove(key)
    }

    pub fn has(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Object)> {
        self.0.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&String, &mut Object)> {
        self.0.iter_mut()
    }

    /// The `/Type` entry, when present and a Name.
    pub fn type_name(&self) -> Option<&str> {
        self.get("Type").and_then(Object::as_name)
    }

    /// The `/Subtype` entry, when present and a Name.
    pub fn subtype_name(&self) -> Option<&str> {
        self.get("Subtype").and_then(Object::as_name)
    }

    pub fn get_i64(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(Object::as_i64)
    }

    pub fn get_f64(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(Object::as_f64)
    }

    pub fn get_name(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Object::as_name)
    }

    pub fn get_dict(&self, key: &str) -> Option<&Dictionary> {
        self.get(key).and_then(Object::as_dict)
    }

    pub fn get_array(&self, key: &str) -> Option<&[Object]> {
        self.get(key).and_then(Object::as_array)
    }
}

impl FromIterator<(String, Object)> for Dictionary {
    fn from_iter<T: IntoIterator<Item = (String, Object)>>(iter: T) -> Self {
        Dictionary(iter.into_iter().collect())
    }
}

/// Dictionary + raw byte payload. The payload is the undecoded body between
/// `stream` and `endstream`; [`Stream::filtered`] (in the filters module)
/// decodes it through the declared filter chain and memoizes the result.
#[derive(Debug, Clone)]
pub struct Stream {
    pub dict: Dictionary,
    pub data: Vec<u8>,
    pub(crate) decoded: OnceCell<Vec<u8>>,
}

impl Stream {
    pub fn new(mut dict: Dictionary, data: Vec<u8>) -> Self {
        dict.set("Length", Object::Integer(data.len() as i64));
        Stream { dict, data, decoded: OnceCell::new() }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn type_name(&self) -> Option<&str> {
        self.dict.type_name()
    }

    /// Replaces the payload, rewriting `/Length` and dropping the decode
    /// memo. The security handler uses this after per-object decryption.
    pub fn set_data(&mut self, data: Vec<u8>) {
        self.dict.set("Length", Object::Integer(data.len() as i64));
        self.data = data;
        self.decoded = OnceCell::new();
    }
}

impl PartialEq for Stream {
    fn eq(&self, other: &Self) -> bool {
        self.dict == other.dict && self.data == other.data
    }
}

/// A native value tagged with its identity, `N G obj ... endobj`.
#[derive(Debug, Clone, PartialEq)]
pub struct IndirectObject {
    pub num: u32,
    pub gen: u16,
    pub value: Object,
}

impl IndirectObject {
    pub fn id(&self) -> ObjectId {
        (self.num, self.gen)
    }
}

/// Canonical uppercase hex text of a byte string, `<aabb>` -> `AABB`.
pub fn to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        s.push_str(&format!("{:02X}", b));
    }
    s
}

/// Byte-per-char decoding; never fails, every byte maps to U+0000..U+00FF.
pub fn latin1_to_string(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}

impl fmt::Display for Object {
    /// Source-ish rendition used for diagnostics and for rebuilding content
    /// stream text, matching the way the operands were written.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Object::Null => write!(f, "null"),
            Object::Boolean(b) => write!(f, "{}", b),
            Object::Integer(i) => write!(f, "{}", i),
            Object::Real(r) => write!(f, "{}", r),
            Object::String(s) => write!(f, "({})", latin1_to_string(s)),
            Object::HexString(s) => write!(f, "<{}>", to_hex(s)),
            Object::Name(n) => write!(f, "/{}", n),
            Object::Array(a) => {
                write!(f, "[")?;
                for (i, obj) in a.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{}", obj)?;
                }
                write!(f, "]")
            }
            Object::Dictionary(d) => {
                write!(f, "<<")?;
                for (k, v) in d.iter() {
                    write!(f, " /{} {}", k, v)?;
                }
                write!(f, " >>")
            }
            Object::Stream(s) => write!(f, "<stream:len={}>", s.data.len()),
            Object::Reference((num, gen)) => write!(f, "{} {} R", num, gen),
            Object::Comment(c) => write!(f, "%{}", c),
        }
    }
}
