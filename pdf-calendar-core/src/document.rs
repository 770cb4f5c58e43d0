use crate::error::Result;
use crate::page::Page;
use crate::writer::PdfWriter;
use chrono::{DateTime, Utc};

/// A PDF document that can contain multiple pages and metadata.
///
/// # Example
///
/// ```rust
/// use pdf_calendar::{Document, Page};
///
/// let mut doc = Document::new();
/// doc.set_title("March 2027");
/// doc.add_page(Page::a4());
///
/// let mut buffer = Vec::new();
/// doc.write(&mut buffer).unwrap();
/// assert!(buffer.starts_with(b"%PDF-"));
/// ```
#[derive(Debug)]
pub struct Document {
    pub(crate) pages: Vec<Page>,
    pub(crate) metadata: DocumentMetadata,
    /// When set, `save`/`write` keep the stored dates instead of stamping the
    /// current time.
    pub(crate) pinned_dates: bool,
    pub(crate) compress: bool,
}

/// Metadata for a PDF document.
#[derive(Debug, Clone)]
pub struct DocumentMetadata {
    /// Document title
    pub title: Option<String>,
    /// Document author
    pub author: Option<String>,
    /// Document subject
    pub subject: Option<String>,
    /// Document keywords
    pub keywords: Option<String>,
    /// Software that created the original document
    pub creator: Option<String>,
    /// Software that produced the PDF
    pub producer: Option<String>,
    /// Date and time the document was created
    pub creation_date: Option<DateTime<Utc>>,
    /// Date and time the document was last modified
    pub modification_date: Option<DateTime<Utc>>,
}

impl Default for DocumentMetadata {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            title: None,
            author: None,
            subject: None,
            keywords: None,
            creator: Some("pdf_calendar".to_string()),
            producer: Some(format!("pdf_calendar v{}", env!("CARGO_PKG_VERSION"))),
            creation_date: Some(now),
            modification_date: Some(now),
        }
    }
}

impl Document {
    /// Creates a new empty PDF document.
    pub fn new() -> Self {
        Self {
            pages: Vec::new(),
            metadata: DocumentMetadata::default(),
            pinned_dates: false,
            compress: cfg!(feature = "compression"),
        }
    }

    /// Adds a page to the document.
    pub fn add_page(&mut self, page: Page) {
        self.pages.push(page);
    }

    /// Sets the document title.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.metadata.title = Some(title.into());
    }

    /// Sets the document author.
    pub fn set_author(&mut self, author: impl Into<String>) {
        self.metadata.author = Some(author.into());
    }

    /// Sets the document subject.
    pub fn set_subject(&mut self, subject: impl Into<String>) {
        self.metadata.subject = Some(subject.into());
    }

    /// Sets the document keywords.
    pub fn set_keywords(&mut self, keywords: impl Into<String>) {
        self.metadata.keywords = Some(keywords.into());
    }

    /// Sets the document creator (software that created the original document).
    pub fn set_creator(&mut self, creator: impl Into<String>) {
        self.metadata.creator = Some(creator.into());
    }

    /// Fixes both creation and modification dates to `date`.
    ///
    /// Two documents with the same content and the same pinned date
    /// serialize to identical bytes.
    pub fn pin_dates(&mut self, date: DateTime<Utc>) {
        self.metadata.creation_date = Some(date);
        self.metadata.modification_date = Some(date);
        self.pinned_dates = true;
    }

    /// Enables or disables Flate compression of page content streams.
    ///
    /// Has no effect when the crate is built without the `compression`
    /// feature.
    pub fn set_compress(&mut self, compress: bool) {
        self.compress = compress && cfg!(feature = "compression");
    }

    /// Sets the modification date to the current time.
    pub fn update_modification_date(&mut self) {
        if !self.pinned_dates {
            self.metadata.modification_date = Some(Utc::now());
        }
    }

    pub fn metadata(&self) -> &DocumentMetadata {
        &self.metadata
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Gets the number of pages in the document.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Saves the document to a file, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or written.
    pub fn save(&mut self, path: impl AsRef<std::path::Path>) -> Result<()> {
        self.update_modification_date();

        let mut writer = PdfWriter::new(path)?;
        writer.write_document(self)?;
        Ok(())
    }

    /// Writes the document to a buffer.
    ///
    /// # Errors
    ///
    /// Returns an error if the PDF cannot be generated.
    pub fn write(&mut self, buffer: &mut Vec<u8>) -> Result<()> {
        self.update_modification_date();

        let mut writer = PdfWriter::new_with_writer(buffer);
        writer.write_document(self)?;
        Ok(())
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_document_new() {
        let doc = Document::new();
        assert!(doc.pages.is_empty());
        assert!(doc.metadata.title.is_none());
        assert_eq!(doc.metadata.creator, Some("pdf_calendar".to_string()));
        assert!(doc
            .metadata
            .producer
            .as_ref()
            .unwrap()
            .starts_with("pdf_calendar"));
        assert!(!doc.pinned_dates);
    }

    #[test]
    fn test_add_page() {
        let mut doc = Document::new();
        doc.add_page(Page::a4());
        doc.add_page(Page::new(100.0, 100.0));
        assert_eq!(doc.page_count(), 2);
    }

    #[test]
    fn test_metadata_setters() {
        let mut doc = Document::new();
        doc.set_title("April 2027");
        doc.set_author("Someone");
        doc.set_subject("Monthly calendar");
        doc.set_keywords("calendar, 2027");
        doc.set_creator("pdfcal");

        let meta = doc.metadata();
        assert_eq!(meta.title.as_deref(), Some("April 2027"));
        assert_eq!(meta.author.as_deref(), Some("Someone"));
        assert_eq!(meta.subject.as_deref(), Some("Monthly calendar"));
        assert_eq!(meta.keywords.as_deref(), Some("calendar, 2027"));
        assert_eq!(meta.creator.as_deref(), Some("pdfcal"));
    }

    #[test]
    fn test_pinned_dates_survive_write() {
        let date = Utc.with_ymd_and_hms(2026, 10, 19, 8, 0, 0).unwrap();
        let mut doc = Document::new();
        doc.pin_dates(date);

        let mut buffer = Vec::new();
        doc.write(&mut buffer).unwrap();

        assert_eq!(doc.metadata.modification_date, Some(date));
        assert_eq!(doc.metadata.creation_date, Some(date));
    }

    #[test]
    fn test_unpinned_write_updates_modification_date() {
        let old = Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap();
        let mut doc = Document::new();
        doc.metadata.modification_date = Some(old);

        let mut buffer = Vec::new();
        doc.write(&mut buffer).unwrap();

        assert!(doc.metadata.modification_date.unwrap() > old);
    }

    #[test]
    fn test_debug_output_lists_pages() {
        let mut doc = Document::new();
        doc.set_title("May 2027");
        doc.add_page(Page::new(100.0, 50.0));

        let debug = format!("{doc:?}");
        assert!(debug.contains("May 2027"));
        assert!(debug.contains("Page"));
    }

    #[test]
    fn test_set_compress() {
        let mut doc = Document::new();
        doc.set_compress(false);
        assert!(!doc.compress);

        doc.set_compress(true);
        assert_eq!(doc.compress, cfg!(feature = "compression"));
    }
}
