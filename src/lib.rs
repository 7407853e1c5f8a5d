//! # readpdf
//!
//! readpdf is a library for reading PDF 1.7 documents: it parses the file
//! into a navigable object graph and decodes page content — text strings
//! with character-set decoding, images, and graphics-state-aware command
//! streams.
//!
//! # Getting started
//!
//! ```rust,no_run
//! use readpdf::{PdfDocument, PdfViewer};
//!
//! let bytes = std::fs::read("document.pdf").unwrap();
//!
//! // the document level: object graph, pages, metadata
//! let mut doc = PdfDocument::from_bytes(bytes.clone(), "").unwrap();
//! for page in doc.pages().unwrap() {
//!     println!("page {} dict: {:?}", page.number, page.dict);
//! }
//!
//! // the viewer level: interpreted page content
//! let mut viewer = PdfViewer::from_bytes(bytes, "").unwrap();
//! let canvas = viewer.render().unwrap();
//! println!("page 1 text: {}", canvas.text(" "));
//! for (name, form) in &canvas.forms {
//!     println!("form {} contains {} strings", name, form.strings.len());
//! }
//! ```
//!
//! Encrypted documents (standard security handler, RC4 and AES) open the
//! same way with the user or owner password passed to `open`. Broken
//! real-world files are handled leniently by default; see
//! [`ParseOptions`] for the strict switches.

pub mod buffer;
pub mod canvas;
pub mod cmap;
pub mod codecs;
pub mod content;
pub mod date;
pub mod decoder;
pub mod document;
pub mod document_parser;
pub mod error;
pub mod filters;
pub mod graphics_state;
pub mod object;
pub mod parser;
pub mod predefined;
pub mod registry;
pub mod resources;
pub mod security;
pub mod viewer;
pub mod xref;

pub use buffer::Buffer;
pub use canvas::Canvas;
pub use cmap::{CMap, CMapParser};
pub use content::{ContentParser, ContentRecord, InlineImage, Operator};
pub use decoder::Decoder;
pub use document::{DocumentInfo, Page, ParseOptions, PdfDocument};
pub use document_parser::{Header, Trailer};
pub use error::{EncryptionError, Error, FilterError, ParseError, ParseErrorKind, Result};
pub use graphics_state::{GraphicsState, GraphicsStateStack};
pub use object::{Dictionary, IndirectObject, Object, ObjectId, Stream};
pub use resources::Resources;
pub use security::SecurityHandler;
pub use viewer::PdfViewer;
pub use xref::{XRef, XRefEntry};

#[cfg(test)]
mod tests;
