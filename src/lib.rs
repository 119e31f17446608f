pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::DocumentCliConfig;

pub use config::RunConfig;
pub use crate::core::{
    creator::ConcreteCreator, document_factory::ConcreteDocumentFactory, reader::DocumentReader,
};
pub use domain::model::{ConcreteProduct, DocumentKind, PdfDocument, WordDocument};
pub use domain::ports::{Creator, Document, DocumentFactory, Product};
pub use utils::error::{FactoryError, Result};
