use crate::core::{DocumentFactory, Result};

/// Client side of the document demo: asks a factory for each tag and reads the result.
pub struct DocumentReader<F: DocumentFactory> {
    factory: F,
}

impl<F: DocumentFactory> DocumentReader<F> {
    pub fn new(factory: F) -> Self {
        Self { factory }
    }

    pub fn factory(&self) -> &F {
        &self.factory
    }

    /// Creates and reads each document in turn, returning how many were read.
    ///
    /// Documents before an unknown tag are still read; the error is returned as-is.
    pub fn run<S: AsRef<str>>(&self, doc_types: &[S]) -> Result<usize> {
        tracing::debug!("Reading {} document(s)", doc_types.len());

        let mut read = 0;
        for doc_type in doc_types {
            let document = self.factory.create_document(doc_type.as_ref())?;
            document.read();
            read += 1;
        }

        tracing::debug!("Read {} document(s)", read);
        Ok(read)
    }
}
