//! Shared fixture builder: assembles complete PDF byte images in memory
//! with computed cross-reference offsets.

use std::collections::BTreeMap;

/// Builds a classical-xref PDF. Objects are written in call order; `finish`
/// appends the xref table, the trailer and `startxref`.
pub struct PdfBuilder {
    out: Vec<u8>,
    offsets: BTreeMap<u32, usize>,
}

impl PdfBuilder {
    pub fn new(version: &str) -> Self {
        let mut out = Vec::new();
        out.extend_from_slice(format!("%PDF-{}\n", version).as_bytes());
        PdfBuilder { out, offsets: BTreeMap::new() }
    }

    /// `N 0 obj <body> endobj`
    pub fn object(&mut self, num: u32, body: &str) -> &mut Self {
        self.offsets.insert(num, self.out.len());
        self.out
            .extend_from_slice(format!("{} 0 obj\n{}\nendobj\n", num, body).as_bytes());
        self
    }

    /// Stream object; `/Length` is computed from the payload unless
    /// `length_entry` overrides it (for indirect-length fixtures).
    pub fn stream_object(
        &mut self,
        num: u32,
        dict_entries: &str,
        data: &[u8],
        length_entry: Option<&str>,
    ) -> &mut Self {
        self.offsets.insert(num, self.out.len());
        let length = match length_entry {
            Some(entry) => entry.to_string(),
            None => data.len().to_string(),
        };
        self.out.extend_from_slice(
            format!("{} 0 obj\n<< {} /Length {} >>\nstream\n", num, dict_entries, length)
                .as_bytes(),
        );
        self.out.extend_from_slice(data);
        self.out.extend_from_slice(b"\nendstream\nendobj\n");
        self
    }

    /// Writes the xref table covering object 0 plus everything added, the
    /// trailer (`/Size`, `/Root`, any extra entries) and the file end.
    pub fn finish(&mut self, root: u32, extra_trailer: &str) -> Vec<u8> {
        let startxref = self.out.len();
        let max_num = self.offsets.keys().max().copied().unwrap_or(0);
        self.out
            .extend_from_slice(format!("xref\n0 {}\n", max_num + 1).as_bytes());
        self.out.extend_from_slice(b"0000000000 65535 f\r\n");
        for num in 1..=max_num {
            match self.offsets.get(&num) {
                Some(off) => self
                    .out
                    .extend_from_slice(format!("{:010} 00000 n\r\n", off).as_bytes()),
                None => self.out.extend_from_slice(b"0000000000 65535 f\r\n"),
            }
        }
        self.out.extend_from_slice(
            format!(
                "trailer\n<< /Size {} /Root {} 0 R {} >>\nstartxref\n{}\n%%EOF",
                max_num + 1,
                root,
                extra_trailer,
                startxref
            )
            .as_bytes(),
        );
        std::mem::take(&mut self.out)
    }
}

/// One page with one content stream and one `/F1` font: the smallest
/// renderable document.
pub fn one_page_pdf(font_body: &str, content: &[u8]) -> Vec<u8> {
    let mut b = PdfBuilder::new("1.4");
    b.object(1, "<< /Type /Catalog /Pages 2 0 R >>");
    b.object(2, "<< /Type /Pages /Kids [3 0 R] /Count 1 >>");
    b.object(
        3,
        "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] \
         /Resources << /Font << /F1 5 0 R >> >> /Contents 4 0 R >>",
    );
    b.stream_object(4, "", content, None);
    b.object(5, font_body);
    b.finish(1, "")
}
