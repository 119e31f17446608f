use clap::Parser;
use factory_method::utils::error::USAGE_EXIT_CODE;
use factory_method::utils::logger;
use factory_method::{ConcreteDocumentFactory, DocumentCliConfig, DocumentReader, FactoryError};

fn exit_with(e: FactoryError) -> ! {
    tracing::error!("❌ Document demo failed: {} (Category: {:?})", e, e.category());
    eprintln!("❌ {}", e.user_friendly_message());
    std::process::exit(e.exit_code());
}

fn main() {
    // Usage errors get their own code so they never read as a configuration error.
    let cli = match DocumentCliConfig::try_parse() {
        Ok(cli) => cli,
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let _ = e.print();
            std::process::exit(USAGE_EXIT_CODE);
        }
    };

    logger::init_cli_logger(env!("CARGO_CRATE_NAME"), cli.verbose);

    tracing::info!("🚀 Starting document factory demo");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let run_config = match cli.resolve() {
        Ok(run_config) => run_config,
        Err(e) => exit_with(e),
    };

    let reader = DocumentReader::new(ConcreteDocumentFactory::new());

    match reader.run(&run_config.documents) {
        Ok(count) => tracing::info!("✅ Read {} document(s)", count),
        Err(e) => exit_with(e),
    }
}
