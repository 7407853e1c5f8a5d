//! viewer.rs
//!
//! The content-stream interpreter. Replays operators against a
//! graphics-state stack, decodes shown text with the active font's decoder,
//! and records strings, images, inline images and recursively rendered Form
//! XObjects onto a [`Canvas`]. Canvases are memoized per page and cloned on
//! access, so rendering is idempotent.

use std::collections::{BTreeMap, HashMap};

use crate::canvas::Canvas;
use crate::codecs::EncodingRegistry;
use crate::content::{ContentParser, ContentRecord, InlineImage, Operator};
use crate::decoder::Decoder;
use crate::document::{DocumentInfo, Page, PdfDocument};
use crate::error::{Error, ParseError, ParseErrorKind, Result};
use crate::filters;
use crate::graphics_state::{GraphicsState, GraphicsStateStack};
use crate::object::{latin1_to_string, Dictionary, Object};
use crate::resources::Resources;

pub struct PdfViewer {
    pub doc: PdfDocument,
    registry: EncodingRegistry,
    pages: Vec<Page>,
    canvas_cache: BTreeMap<usize, Canvas>,
    /// Canvas of the current page after [`PdfViewer::render`]
    pub canvas: Canvas,
    pub current_page_number: usize,
}

impl PdfViewer {
    /// Wraps an opened document and navigates to page 1.
    pub fn new(mut doc: PdfDocument) -> Result<Self> {
        let pages = doc.pages()?;
        let mut viewer = PdfViewer {
            doc,
            registry: EncodingRegistry::default(),
            pages,
            canvas_cache: BTreeMap::new(),
            canvas: Canvas::new(),
            current_page_number: 0,
        };
        viewer.navigate(1)?;
        Ok(viewer)
    }

    pub fn open(source: impl crate::buffer::PdfSource + 'static, password: &str) -> Result<Self> {
        Self::new(PdfDocument::open(source, password)?)
    }

    pub fn from_bytes(bytes: Vec<u8>, password: &str) -> Result<Self> {
        Self::new(PdfDocument::from_bytes(bytes, password)?)
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn current_page(&self) -> &Page {
        &self.pages[self.current_page_number - 1]
    }

    pub fn metadata(&mut self) -> Option<DocumentInfo> {
        self.doc.metadata()
    }

    /// Seeks to page `n` (1-based). Clears the working canvas.
    pub fn navigate(&mut self, n: usize) -> Result<()> {
        if n == 0 || n > self.pages.len() {
            return Err(Error::PageDoesNotExist(n));
        }
        self.current_page_number = n;
        self.canvas.reset();
        Ok(())
    }

    pub fn next_page(&mut self) -> Result<()> {
        self.navigate(self.current_page_number + 1)
    }

    pub fn prev_page(&mut self) -> Result<()> {
        self.navigate(self.current_page_number.saturating_sub(1))
    }

    /// Renders the current page. Idempotent: the canvas is cached per page
    /// number and cloned out on every call.
    pub fn render(&mut self) -> Result<Canvas> {
        let n = self.current_page_number;
        if let Some(cached) = self.canvas_cache.get(&n) {
            self.canvas = cached.clone();
            return Ok(self.canvas.clone());
        }
        let page = self.pages[n - 1].clone();
        let content = self.doc.page_content(&page)?;
        let resources = Resources::from_page(&mut self.doc, &page.dict, &[]);
        let interp = Interpreter::new(&mut self.doc, &self.registry, resources, page.dict.clone());
        let canvas = interp.run(content)?;
        self.canvas_cache.insert(n, canvas.clone());
        self.canvas = canvas;
        Ok(self.canvas.clone())
    }
}

/// One interpretation pass over one content stream. Form XObjects get a
/// fresh interpreter seeded with the invoking graphics state and the form's
/// resources merged over the page's.
struct Interpreter<'a> {
    doc: &'a mut PdfDocument,
    registry: &'a EncodingRegistry,
    resources: Resources,
    page_dict: Dictionary,
    gss: GraphicsStateStack,
    canvas: Canvas,
    decoders: HashMap<String, Decoder>,
    bracket_stack: Vec<String>,
}

impl<'a> Interpreter<'a> {
    fn new(
        doc: &'a mut PdfDocument,
        registry: &'a EncodingRegistry,
        resources: Resources,
        page_dict: Dictionary,
    ) -> Self {
        Interpreter {
            doc,
            registry,
            resources,
            page_dict,
            gss: GraphicsStateStack::new(),
            canvas: Canvas::new(),
            decoders: HashMap::new(),
            bracket_stack: Vec::new(),
        }
    }

    fn with_state(mut self, gss: GraphicsStateStack) -> Self {
        self.gss = gss;
        self
    }

    fn run(mut self, content: Vec<u8>) -> Result<Canvas> {
        let mut parser = ContentParser::new(content);
        while let Some(record) = parser.next_record() {
            self.handle(record)?;
        }
        Ok(self.canvas)
    }

    fn handle(&mut self, record: ContentRecord) -> Result<()> {
        match record {
            ContentRecord::InlineImage(image) => {
                self.canvas.inline_images.push(image.clone());
                self.canvas.text_content.push_str(&inline_image_to_string(&image));
            }
            ContentRecord::Operator(mut op) => {
                self.dispatch(&mut op)?;
                self.canvas.text_content.push_str(&operator_to_string(&op));
            }
        }
        Ok(())
    }

    fn dispatch(&mut self, op: &mut Operator) -> Result<()> {
        match op.name.as_str() {
            // graphics state
            "q" => self.gss.save_state(),
            "Q" => self.gss.restore_state(),
            "cm" => {
                if op.operands.len() == 6 {
                    let mut m = [0f64; 6];
                    for (slot, operand) in m.iter_mut().zip(&op.operands) {
                        *slot = operand.as_f64().unwrap_or(0.0);
                    }
                    self.gss.state().ctm = Some(m);
                }
            }
            "w" => self.gss.state().line_width = op.operands.first().and_then(Object::as_f64),
            "J" => self.gss.state().line_cap = op.operands.first().and_then(Object::as_i64),
            "j" => self.gss.state().line_join = op.operands.first().and_then(Object::as_i64),
            "M" => self.gss.state().miter_limit = op.operands.first().and_then(Object::as_f64),
            "d" => {
                if let (Some(Object::Array(pattern)), Some(phase)) =
                    (op.operands.first(), op.operands.get(1).and_then(Object::as_f64))
                {
                    let pattern = pattern.iter().filter_map(Object::as_f64).collect();
                    self.gss.state().dash = Some((pattern, phase));
                }
            }
            "ri" => {
                self.gss.state().rendering_intent =
                    op.operands.first().and_then(Object::as_name).map(str::to_string)
            }
            "i" => self.gss.state().flatness = op.operands.first().and_then(Object::as_f64),
            "gs" => self.load_ext_g_state(op),
            // text object brackets
            "BT" => {
                if self.bracket_stack.last().map(String::as_str) == Some("BT") {
                    if self.doc.options.strict_bt_et {
                        return Err(unbalanced_text_object("BT inside BT"));
                    }
                    log::debug!("BT without enclosing ET, recovering");
                    self.bracket_stack.pop();
                }
                self.bracket_stack.push("BT".to_string());
            }
            "ET" => {
                if self.bracket_stack.last().map(String::as_str) == Some("BT") {
                    self.bracket_stack.pop();
                } else if self.doc.options.strict_bt_et {
                    return Err(unbalanced_text_object("ET without BT"));
                } else {
                    log::debug!("ET without corresponding BT, recovering");
                }
            }
            // text state
            "Tf" => {
                if let (Some(name), Some(size)) = (
                    op.operands.first().and_then(Object::as_name),
                    op.operands.get(1).and_then(Object::as_f64),
                ) {
                    self.gss.state().font = Some((name.to_string(), size));
                }
            }
            "Tc" => self.gss.state().char_spacing = op.operands.first().and_then(Object::as_f64),
            "Tw" => self.gss.state().word_spacing = op.operands.first().and_then(Object::as_f64),
            "Tz" => {
                self.gss.state().horizontal_scaling =
                    op.operands.first().and_then(Object::as_f64)
            }
            "TL" => self.gss.state().leading = op.operands.first().and_then(Object::as_f64),
            "Tr" => self.gss.state().render_mode = op.operands.first().and_then(Object::as_i64),
            "Ts" => self.gss.state().rise = op.operands.first().and_then(Object::as_f64),
            // text showing
            "Tj" | "'" => {
                if op.operands.is_empty() {
                    log::debug!("'{}' with no operands", op.name);
                }
                if let Some(operand) = op.operands.first_mut() {
                    Self::show_string(
                        operand,
                        &mut self.canvas,
                        &mut self.decoders,
                        &mut self.gss,
                        &self.resources,
                        self.doc,
                        self.registry,
                    );
                }
            }
            "TJ" => {
                if let Some(Object::Array(items)) = op.operands.first_mut() {
                    for item in items {
                        Self::show_string(
                            item,
                            &mut self.canvas,
                            &mut self.decoders,
                            &mut self.gss,
                            &self.resources,
                            self.doc,
                            self.registry,
                        );
                    }
                }
            }
            "\"" => {
                for operand in &mut op.operands {
                    Self::show_string(
                        operand,
                        &mut self.canvas,
                        &mut self.decoders,
                        &mut self.gss,
                        &self.resources,
                        self.doc,
                        self.registry,
                    );
                }
            }
            // newline bookkeeping only
            "T*" => {}
            // marked content: decode the property list's Contents entry,
            // without recording it as page text
            "BDC" | "DP" => {
                if let Some(Object::Dictionary(props)) = op.operands.get_mut(1) {
                    if let Some(Object::String(bytes)) = props.get("Contents").cloned() {
                        let text = Self::decode_with_font(
                            &bytes,
                            false,
                            &mut self.decoders,
                            &mut self.gss,
                            &self.resources,
                            self.doc,
                            self.registry,
                        );
                        props.set("Contents", Object::String(text.into_bytes()));
                    }
                }
            }
            // XObjects, wrapped in an implicit q/Q
            "Do" => {
                self.gss.save_state();
                let result = match op.operands.first().and_then(Object::as_name) {
                    Some(name) => self.do_xobject(&name.to_string()),
                    None => Ok(()),
                };
                self.gss.restore_state();
                result?;
            }
            // unknown operators pass through with their operands intact
            _ => {}
        }
        Ok(())
    }

    fn load_ext_g_state(&mut self, op: &Operator) {
        let name = match op.operands.first().and_then(Object::as_name) {
            Some(n) => n.to_string(),
            None => return,
        };
        match self.resources.ext_g_state.get(&name).cloned() {
            Some(obj) => {
                if let Some(dict) = self.doc.resolve(&obj).as_dict() {
                    let overlay = GraphicsState::from_ext_g_state(dict);
                    self.gss.state().update(&overlay);
                }
            }
            None => log::debug!("graphics state {} was not found on resources", name),
        }
    }

    /// Decodes one shown string operand, records it on the canvas, and
    /// rewrites the operand to literal-string form holding the decoded
    /// text. Non-string operands (kerning numbers in TJ, spacing in `"`)
    /// stay as they are.
    #[allow(clippy::too_many_arguments)]
    fn show_string(
        operand: &mut Object,
        canvas: &mut Canvas,
        decoders: &mut HashMap<String, Decoder>,
        gss: &mut GraphicsStateStack,
        resources: &Resources,
        doc: &mut PdfDocument,
        registry: &EncodingRegistry,
    ) {
        let (bytes, hex) = match operand {
            Object::String(b) => (b.clone(), false),
            Object::HexString(b) => (b.clone(), true),
            _ => return,
        };
        let text = Self::decode_with_font(&bytes, hex, decoders, gss, resources, doc, registry);
        canvas.strings.push(text.clone());
        *operand = Object::String(pdf_escape_string(&text).into_bytes());
    }

    /// Decodes `bytes` with the decoder of the currently selected font.
    /// Decoders are built once per font name and reused across the page.
    #[allow(clippy::too_many_arguments)]
    fn decode_with_font(
        bytes: &[u8],
        hex: bool,
        decoders: &mut HashMap<String, Decoder>,
        gss: &mut GraphicsStateStack,
        resources: &Resources,
        doc: &mut PdfDocument,
        registry: &EncodingRegistry,
    ) -> String {
        let name = gss.state().font_name().unwrap_or("").to_string();
        if !decoders.contains_key(&name) {
            let decoder = match resources.font.get(&name).cloned() {
                Some(obj) => match doc.resolve(&obj).as_dict().cloned() {
                    Some(font) => Decoder::for_font(&font, doc, registry),
                    None => Decoder::default_decoder(),
                },
                None => Decoder::default_decoder(),
            };
            decoders.insert(name.clone(), decoder);
        }
        let decoder = &decoders[&name];
        if hex {
            decoder.decode_hexstring(bytes)
        } else {
            decoder.decode_string(bytes)
        }
    }

    /// `Do`: an Image is recorded by resource name; a Form renders
    /// recursively into a sub-canvas, once per name.
    fn do_xobject(&mut self, name: &str) -> Result<()> {
        let xobj = match self.resources.xobject.get(name).cloned() {
            Some(obj) => self.doc.resolve(&obj),
            None => {
                log::debug!("cannot locate XObject {}", name);
                return Ok(());
            }
        };
        let stream = match xobj {
            Object::Stream(s) => s,
            other => {
                log::debug!("XObject {} is a {}", name, other.type_name());
                return Ok(());
            }
        };
        match stream.dict.subtype_name() {
            Some("Image") => {
                self.canvas.images.insert(name.to_string(), stream);
            }
            Some("Form") => {
                if self.canvas.forms.contains_key(name) {
                    // rendered already, Do may repeat
                    return Ok(());
                }
                let extra: Vec<Dictionary> = stream
                    .dict
                    .get("Resources")
                    .cloned()
                    .map(|r| self.doc.resolve(&r))
                    .and_then(|r| r.as_dict().cloned())
                    .into_iter()
                    .collect();
                let resources = Resources::from_page(self.doc, &self.page_dict, &extra);
                let content =
                    filters::decode(&stream.dict, &stream.data, self.doc.options.strict_streams)
                        .map_err(Error::Filter)?;
                let sub = Interpreter::new(
                    self.doc,
                    self.registry,
                    resources,
                    self.page_dict.clone(),
                )
                .with_state(self.gss.clone());
                let sub_canvas = sub.run(content)?;
                self.canvas.forms.insert(name.to_string(), sub_canvas);
            }
            other => log::debug!("XObject {} has subtype {:?}", name, other),
        }
        Ok(())
    }
}

fn unbalanced_text_object(message: &str) -> Error {
    Error::Parse(ParseError::new(ParseErrorKind::UnexpectedToken, 0, message))
}

/// PDF literal-string escaping for decoded text.
pub fn pdf_escape_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\x08' => out.push_str("\\b"),
            '\x0c' => out.push_str("\\f"),
            '(' => out.push_str("\\("),
            ')' => out.push_str("\\)"),
            '\\' => out.push_str("\\\\"),
            other => out.push(other),
        }
    }
    out
}

/// Renders an operand the way it was written. Rewritten string operands
/// hold decoded UTF-8; raw ones fall back to byte-per-char text.
fn object_to_source(obj: &Object) -> String {
    match obj {
        Object::String(bytes) => {
            let text = match std::str::from_utf8(bytes) {
                Ok(s) => s.to_string(),
                Err(_) => latin1_to_string(bytes),
            };
            format!("({})", text)
        }
        Object::Array(items) => {
            let inner: Vec<String> = items.iter().map(object_to_source).collect();
            format!("[{}]", inner.join(" "))
        }
        Object::Dictionary(d) => {
            let inner: Vec<String> = d
                .iter()
                .map(|(k, v)| format!("/{} {}", k, object_to_source(v)))
                .collect();
            format!("<<{}>>", inner.join(" "))
        }
        other => other.to_string(),
    }
}

fn operator_to_string(op: &Operator) -> String {
    let operands: Vec<String> = op.operands.iter().map(object_to_source).collect();
    format!("\n{} {}", operands.join(" "), op.name)
}

/// Inline images re-render with readable content: binary payloads are
/// re-encoded ASCII85 and the filter list gains the matching decode entry.
fn inline_image_to_string(image: &InlineImage) -> String {
    let entries: Vec<String> = image
        .dict
        .iter()
        .filter(|(k, _)| k.as_str() != "F" && k.as_str() != "Filter")
        .map(|(k, v)| format!("/{} {}", k, object_to_source(v)))
        .collect();

    let mut filters: Vec<String> = match image.dict.get("Filter").or_else(|| image.dict.get("F")) {
        Some(Object::Name(n)) => vec![n.clone()],
        Some(Object::Array(items)) => {
            items.iter().filter_map(|o| o.as_name().map(str::to_string)).collect()
        }
        _ => Vec::new(),
    };
    let ascii_first = matches!(
        filters.first().map(String::as_str),
        Some("ASCIIHexDecode") | Some("AHx") | Some("ASCII85Decode") | Some("A85")
    );
    let content = if ascii_first {
        latin1_to_string(&image.data)
    } else {
        filters.insert(0, "ASCII85Decode".to_string());
        let mut encoded = crate::filters::ascii85::encode(&image.data);
        encoded.extend_from_slice(b"~>");
        latin1_to_string(&encoded)
    };
    let filter_list: Vec<String> = filters.iter().map(|f| format!("/{}", f)).collect();
    format!(
        "\nBI\n{} /Filter [{}]\nID\n{}\nEI",
        entries.join(" "),
        filter_list.join(" "),
        content
    )
}
