pub mod creator;
pub mod document_factory;
pub mod reader;

pub use crate::domain::model::{ConcreteProduct, DocumentKind, PdfDocument, WordDocument};
pub use crate::domain::ports::{Creator, Document, DocumentFactory, Product};
pub use crate::utils::error::Result;
