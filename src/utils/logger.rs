use std::io::IsTerminal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter for this library plus the calling binary's own target.
pub fn default_directives(bin_target: &str, verbose: bool) -> String {
    if verbose {
        format!("factory_method=debug,{}=debug,info", bin_target)
    } else {
        format!("factory_method=info,{}=info", bin_target)
    }
}

// stdout belongs to the demo output, so logs always go to stderr.
pub fn init_cli_logger(bin_target: &str, verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(bin_target, verbose)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}
