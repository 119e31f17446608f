use crate::utils::error::Result;
use std::fmt::Debug;

/// Something a [`Creator`] produces.
pub trait Product: Debug + Send + Sync {
    /// The line [`Product::operation`] prints.
    fn output(&self) -> &'static str;

    fn operation(&self) {
        println!("{}", self.output());
    }
}

/// Creator half of the factory method pattern.
///
/// Implementors decide which [`Product`] gets built; the workflow in
/// [`Creator::do_something`] is shared by all of them.
pub trait Creator {
    fn factory_method(&self) -> Box<dyn Product>;

    fn do_something(&self) {
        let product = self.factory_method();
        tracing::debug!("Created product: {:?}", product);
        product.operation();
    }
}

pub trait Document: Debug + Send + Sync {
    /// The line [`Document::read`] prints.
    fn output(&self) -> &'static str;

    fn read(&self) {
        println!("{}", self.output());
    }
}

pub trait DocumentFactory {
    /// Builds the document named by `doc_type`.
    ///
    /// Fails with [`FactoryError::UnknownDocumentType`] when the tag names
    /// no known document.
    ///
    /// [`FactoryError::UnknownDocumentType`]: crate::utils::error::FactoryError::UnknownDocumentType
    fn create_document(&self, doc_type: &str) -> Result<Box<dyn Document>>;
}
