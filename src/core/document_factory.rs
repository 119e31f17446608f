use crate::core::{Document, DocumentFactory, DocumentKind, PdfDocument, Result, WordDocument};

/// Picks the document variant from a case-insensitive tag (`"pdf"` or `"word"`).
#[derive(Debug, Clone, Copy, Default)]
pub struct ConcreteDocumentFactory;

impl ConcreteDocumentFactory {
    pub fn new() -> Self {
        Self
    }

    /// Creates one document per tag, in order. Stops at the first unknown tag.
    pub fn create_documents<S: AsRef<str>>(&self, doc_types: &[S]) -> Result<Vec<Box<dyn Document>>> {
        doc_types
            .iter()
            .map(|doc_type| self.create_document(doc_type.as_ref()))
            .collect()
    }
}

impl DocumentFactory for ConcreteDocumentFactory {
    fn create_document(&self, doc_type: &str) -> Result<Box<dyn Document>> {
        let kind = doc_type.parse::<DocumentKind>().inspect_err(|_| {
            tracing::warn!("Rejected document type tag: {:?}", doc_type);
        })?;

        tracing::debug!("Creating {} document from tag {:?}", kind, doc_type);

        let document: Box<dyn Document> = match kind {
            DocumentKind::Pdf => Box::new(PdfDocument),
            DocumentKind::Word => Box::new(WordDocument),
        };
        Ok(document)
    }
}
