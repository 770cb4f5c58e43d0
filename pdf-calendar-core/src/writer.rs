use crate::document::Document;
use crate::error::Result;
use crate::objects::{Dictionary, Object, ObjectId, Stream};
use crate::page::Page;
use crate::text::{encode_win_ansi, escape_literal, Font};
use chrono::{DateTime, Utc};
use std::collections::{BTreeMap, BTreeSet};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Serializes a [`Document`] as a classic PDF 1.7 file: header, catalog,
/// page tree, shared font resources, one page and content stream per page,
/// info dictionary, cross-reference table and trailer.
pub struct PdfWriter<W: Write> {
    writer: W,
    xref_positions: BTreeMap<ObjectId, u64>,
    current_position: u64,
    next_object_number: u32,
}

impl<W: Write> PdfWriter<W> {
    pub fn new_with_writer(writer: W) -> Self {
        Self {
            writer,
            xref_positions: BTreeMap::new(),
            current_position: 0,
            next_object_number: 1,
        }
    }

    pub fn write_document(&mut self, document: &Document) -> Result<()> {
        self.write_header()?;

        let catalog_id = self.allocate();
        let pages_id = self.allocate();
        self.write_catalog(catalog_id, pages_id)?;

        let font_ids = self.write_fonts(document)?;
        self.write_pages(document, pages_id, &font_ids)?;
        let info_id = self.write_info(document)?;

        let xref_position = self.current_position;
        self.write_xref()?;
        self.write_trailer(catalog_id, info_id, xref_position)?;

        self.writer.flush()?;
        tracing::debug!(
            pages = document.pages.len(),
            bytes = self.current_position,
            "wrote PDF document"
        );
        Ok(())
    }

    fn allocate(&mut self) -> ObjectId {
        let id = ObjectId::new(self.next_object_number, 0);
        self.next_object_number += 1;
        id
    }

    fn write_header(&mut self) -> Result<()> {
        self.write_bytes(format!("%PDF-{}\n", crate::PDF_VERSION).as_bytes())?;
        // Binary comment to ensure file is treated as binary
        self.write_bytes(&[b'%', 0xE2, 0xE3, 0xCF, 0xD3, b'\n'])?;
        Ok(())
    }

    fn write_catalog(&mut self, catalog_id: ObjectId, pages_id: ObjectId) -> Result<()> {
        let mut catalog = Dictionary::new();
        catalog.set("Type", Object::name("Catalog"));
        catalog.set("Pages", pages_id);

        self.write_object(catalog_id, Object::Dictionary(catalog))
    }

    /// Writes one font object per standard font used anywhere in the document.
    fn write_fonts(&mut self, document: &Document) -> Result<BTreeMap<Font, ObjectId>> {
        let fonts: BTreeSet<Font> = document
            .pages
            .iter()
            .flat_map(|page| page.used_fonts())
            .collect();

        let mut ids = BTreeMap::new();
        for font in fonts {
            let id = self.allocate();
            let mut font_dict = Dictionary::new();
            font_dict.set("Type", Object::name("Font"));
            font_dict.set("Subtype", Object::name("Type1"));
            font_dict.set("BaseFont", Object::name(font.pdf_name()));
            font_dict.set("Encoding", Object::name("WinAnsiEncoding"));
            self.write_object(id, Object::Dictionary(font_dict))?;
            ids.insert(font, id);
        }
        Ok(ids)
    }

    fn write_pages(
        &mut self,
        document: &Document,
        pages_id: ObjectId,
        font_ids: &BTreeMap<Font, ObjectId>,
    ) -> Result<()> {
        let page_ids: Vec<(ObjectId, ObjectId)> = document
            .pages
            .iter()
            .map(|_| (self.allocate(), self.allocate()))
            .collect();

        let mut pages_dict = Dictionary::new();
        pages_dict.set("Type", Object::name("Pages"));
        pages_dict.set("Count", document.pages.len() as i64);
        pages_dict.set(
            "Kids",
            page_ids
                .iter()
                .map(|(page_id, _)| Object::Reference(*page_id))
                .collect::<Vec<_>>(),
        );
        self.write_object(pages_id, Object::Dictionary(pages_dict))?;

        for (page, (page_id, content_id)) in document.pages.iter().zip(page_ids) {
            self.write_page(page_id, pages_id, content_id, page, font_ids)?;
            self.write_page_content(content_id, page, document.compress)?;
        }

        Ok(())
    }

    fn write_page(
        &mut self,
        page_id: ObjectId,
        parent_id: ObjectId,
        content_id: ObjectId,
        page: &Page,
        font_ids: &BTreeMap<Font, ObjectId>,
    ) -> Result<()> {
        let mut page_dict = Dictionary::new();
        page_dict.set("Type", Object::name("Page"));
        page_dict.set("Parent", parent_id);
        page_dict.set(
            "MediaBox",
            vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Real(page.width()),
                Object::Real(page.height()),
            ],
        );
        page_dict.set("Contents", content_id);

        let mut font_dict = Dictionary::new();
        for font in page.used_fonts() {
            if let Some(id) = font_ids.get(&font) {
                font_dict.set(font.pdf_name(), *id);
            }
        }

        let mut resources = Dictionary::new();
        resources.set("Font", font_dict);
        resources.set(
            "ProcSet",
            vec![Object::name("PDF"), Object::name("Text")],
        );
        page_dict.set("Resources", resources);

        self.write_object(page_id, Object::Dictionary(page_dict))
    }

    fn write_page_content(&mut self, content_id: ObjectId, page: &Page, compress: bool) -> Result<()> {
        let stream = Stream::new(page.generate_content()?);

        #[cfg(feature = "compression")]
        let stream = {
            let mut stream = stream;
            if compress {
                stream.compress_flate()?;
            }
            stream
        };

        #[cfg(not(feature = "compression"))]
        let _ = compress;

        self.write_object(content_id, stream.into_object())
    }

    fn write_info(&mut self, document: &Document) -> Result<ObjectId> {
        let info_id = self.allocate();
        let metadata = &document.metadata;
        let mut info_dict = Dictionary::new();

        let text_fields = [
            ("Title", &metadata.title),
            ("Author", &metadata.author),
            ("Subject", &metadata.subject),
            ("Keywords", &metadata.keywords),
            ("Creator", &metadata.creator),
            ("Producer", &metadata.producer),
        ];
        for (key, value) in text_fields {
            if let Some(value) = value {
                info_dict.set(key, Object::String(value.clone()));
            }
        }

        if let Some(creation_date) = metadata.creation_date {
            info_dict.set("CreationDate", format_pdf_date(creation_date));
        }
        if let Some(mod_date) = metadata.modification_date {
            info_dict.set("ModDate", format_pdf_date(mod_date));
        }

        self.write_object(info_id, Object::Dictionary(info_dict))?;
        Ok(info_id)
    }
}

impl PdfWriter<BufWriter<std::fs::File>> {
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let file = std::fs::File::create(path)?;
        Ok(Self::new_with_writer(BufWriter::new(file)))
    }
}

impl<W: Write> PdfWriter<W> {
    fn write_object(&mut self, id: ObjectId, object: Object) -> Result<()> {
        self.xref_positions.insert(id, self.current_position);

        let header = format!("{} {} obj\n", id.number(), id.generation());
        self.write_bytes(header.as_bytes())?;

        self.write_object_value(&object)?;

        self.write_bytes(b"\nendobj\n")?;
        Ok(())
    }

    fn write_object_value(&mut self, object: &Object) -> Result<()> {
        match object {
            Object::Null => self.write_bytes(b"null")?,
            Object::Boolean(b) => self.write_bytes(if *b { b"true" } else { b"false" })?,
            Object::Integer(i) => self.write_bytes(i.to_string().as_bytes())?,
            Object::Real(f) => self.write_bytes(format_real(*f).as_bytes())?,
            Object::String(s) => {
                self.write_bytes(escape_literal(&encode_win_ansi(s)).as_bytes())?;
            }
            Object::Name(n) => {
                self.write_bytes(b"/")?;
                self.write_bytes(n.as_bytes())?;
            }
            Object::Array(arr) => {
                self.write_bytes(b"[")?;
                for (i, obj) in arr.iter().enumerate() {
                    if i > 0 {
                        self.write_bytes(b" ")?;
                    }
                    self.write_object_value(obj)?;
                }
                self.write_bytes(b"]")?;
            }
            Object::Dictionary(dict) => {
                self.write_bytes(b"<<")?;
                for (key, value) in dict.entries() {
                    self.write_bytes(b"\n/")?;
                    self.write_bytes(key.as_bytes())?;
                    self.write_bytes(b" ")?;
                    self.write_object_value(value)?;
                }
                self.write_bytes(b"\n>>")?;
            }
            Object::Stream(dict, data) => {
                self.write_object_value(&Object::Dictionary(dict.clone()))?;
                self.write_bytes(b"\nstream\n")?;
                self.write_bytes(data)?;
                self.write_bytes(b"\nendstream")?;
            }
            Object::Reference(id) => {
                self.write_bytes(id.to_string().as_bytes())?;
            }
        }
        Ok(())
    }

    fn write_xref(&mut self) -> Result<()> {
        let max_obj_num = self
            .xref_positions
            .keys()
            .map(|id| id.number())
            .max()
            .unwrap_or(0);

        self.write_bytes(format!("xref\n0 {}\n", max_obj_num + 1).as_bytes())?;
        self.write_bytes(b"0000000000 65535 f \n")?;

        for obj_num in 1..=max_obj_num {
            let entry = match self.xref_positions.get(&ObjectId::new(obj_num, 0)) {
                Some(position) => format!("{position:010} 00000 n \n"),
                None => "0000000000 00000 f \n".to_string(),
            };
            self.write_bytes(entry.as_bytes())?;
        }

        Ok(())
    }

    fn write_trailer(
        &mut self,
        catalog_id: ObjectId,
        info_id: ObjectId,
        xref_position: u64,
    ) -> Result<()> {
        let max_obj_num = self
            .xref_positions
            .keys()
            .map(|id| id.number())
            .max()
            .unwrap_or(0);

        let mut trailer = Dictionary::new();
        trailer.set("Size", (max_obj_num + 1) as i64);
        trailer.set("Root", catalog_id);
        trailer.set("Info", info_id);

        self.write_bytes(b"trailer\n")?;
        self.write_object_value(&Object::Dictionary(trailer))?;
        self.write_bytes(b"\nstartxref\n")?;
        self.write_bytes(xref_position.to_string().as_bytes())?;
        self.write_bytes(b"\n%%EOF\n")?;

        Ok(())
    }

    fn write_bytes(&mut self, data: &[u8]) -> Result<()> {
        self.writer.write_all(data)?;
        self.current_position += data.len() as u64;
        Ok(())
    }
}

fn format_real(value: f64) -> String {
    let formatted = format!("{value:.6}");
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    if trimmed.is_empty() || trimmed == "-" || trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Format a DateTime as a PDF date string (D:YYYYMMDDHHmmSS+00'00)
fn format_pdf_date(date: DateTime<Utc>) -> String {
    let formatted = date.format("D:%Y%m%d%H%M%S");
    format!("{formatted}+00'00")
}
