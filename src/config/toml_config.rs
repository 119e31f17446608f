use crate::domain::model::DocumentKind;
use crate::utils::error::{FactoryError, Result};
use crate::utils::validation::{validate_non_empty_list, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Run configuration for the document demo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunConfig {
    /// Tags handed to the factory, in order.
    #[serde(default = "default_documents")]
    pub documents: Vec<String>,
}

fn default_documents() -> Vec<String> {
    DocumentKind::tags().into_iter().map(String::from).collect()
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            documents: default_documents(),
        }
    }
}

impl RunConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(FactoryError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| FactoryError::config(format!("TOML parsing error: {}", e)))
    }
}

// Tags are checked by the factory, not here; only the list shape is validated.
impl Validate for RunConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_list("documents", &self.documents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_documents() {
        let config = RunConfig::from_toml_str(r#"documents = ["word", "PDF"]"#).unwrap();
        assert_eq!(config.documents, vec!["word", "PDF"]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_documents_uses_defaults() {
        let config = RunConfig::from_toml_str("").unwrap();
        assert_eq!(config, RunConfig::default());
        assert_eq!(config.documents, vec!["pdf", "word"]);
    }

    #[test]
    fn test_unknown_tags_pass_validation() {
        let config = RunConfig::from_toml_str(r#"documents = ["docx"]"#).unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_documents_fail_validation() {
        let config = RunConfig::from_toml_str("documents = []").unwrap();
        assert!(matches!(
            config.validate(),
            Err(FactoryError::InvalidConfigValueError { ref field, .. }) if field == "documents"
        ));
    }

    #[test]
    fn test_invalid_toml() {
        let err = RunConfig::from_toml_str("documents = pdf").unwrap_err();
        assert!(matches!(err, FactoryError::ConfigError { .. }));
        assert!(err.to_string().starts_with("Configuration error: TOML parsing error"));
    }

    #[test]
    fn test_misspelled_key_is_rejected() {
        let err = RunConfig::from_toml_str(r#"document = ["word"]"#).unwrap_err();
        assert!(matches!(err, FactoryError::ConfigError { .. }));
        assert!(err.to_string().contains("document"));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"# read these\ndocuments = [\"pdf\", \"pdf\"]\n")
            .unwrap();

        let config = RunConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.documents, vec!["pdf", "pdf"]);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = RunConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, FactoryError::IoError(_)));
        assert_eq!(err.exit_code(), 3);
    }
}
