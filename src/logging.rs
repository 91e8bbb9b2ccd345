use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initializes the logging system with console output on standard error.
///
/// The data table may be going to standard output, so diagnostics must
/// never share that stream.
pub fn init_logging() {
    let console_layer = fmt::layer().with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive("scan_accounts=info".parse().unwrap()))
        .with(console_layer)
        .init();
}
