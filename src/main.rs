use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

/// Logs go to stderr so they never interleave with the menus on stdout.
/// Configurable via RUST_LOG, default level `info`.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> ExitCode {
    init_tracing();

    if let Err(err) = teller::app::run(std::env::args()) {
        eprintln!("fatal: {err}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
