use crate::config::toml_config::RunConfig;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "document_factory")]
#[command(about = "Create documents through the factory and read them")]
pub struct DocumentCliConfig {
    /// Document types to create and read, in order [default: pdf word]
    #[arg(value_name = "DOC_TYPES")]
    pub doc_types: Vec<String>,

    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl DocumentCliConfig {
    /// Merges the config file (if any) with the command line. Positional tags win.
    pub fn resolve(&self) -> Result<RunConfig> {
        self.validate()?;

        let mut run_config = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path);
                RunConfig::from_file(path)?
            }
            None => RunConfig::default(),
        };

        if !self.doc_types.is_empty() {
            tracing::debug!("Document types overridden from command line");
            run_config.documents = self.doc_types.clone();
        }

        run_config.validate()?;
        Ok(run_config)
    }
}

impl Validate for DocumentCliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validate_path("config", path)?;
        }
        Ok(())
    }
}
