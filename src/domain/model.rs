use crate::domain::ports::{Document, Product};
use crate::utils::error::FactoryError;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConcreteProduct;

impl Product for ConcreteProduct {
    fn output(&self) -> &'static str {
        "Operation of ConcreteProduct"
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PdfDocument;

impl Document for PdfDocument {
    fn output(&self) -> &'static str {
        "Reading PDF document"
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WordDocument;

impl Document for WordDocument {
    fn output(&self) -> &'static str {
        "Reading Word document"
    }
}

/// The document variants a tag can name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    Pdf,
    Word,
}

impl DocumentKind {
    pub const ALL: [DocumentKind; 2] = [DocumentKind::Pdf, DocumentKind::Word];

    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentKind::Pdf => "pdf",
            DocumentKind::Word => "word",
        }
    }

    pub fn tags() -> Vec<&'static str> {
        Self::ALL.iter().map(DocumentKind::as_str).collect()
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentKind {
    type Err = FactoryError;

    // Case-insensitive, no trimming: " pdf" is not a pdf.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| FactoryError::unknown_document_type(s))
    }
}
