use clap::Parser;
use factory_method::utils::logger;
use factory_method::{ConcreteCreator, Creator};

#[derive(Parser)]
#[command(name = "factory_concept")]
#[command(about = "Run the creator/product factory method demo")]
struct Args {
    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    logger::init_cli_logger(env!("CARGO_CRATE_NAME"), args.verbose);

    tracing::info!("🚀 Starting factory method demo");

    let creator = ConcreteCreator::new();
    creator.do_something();

    tracing::info!("✅ Demo finished");
}
