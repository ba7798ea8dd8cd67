//! dpkctl - publish and install platform app packages

use clap::Parser;
use tracing_subscriber::EnvFilter;

use dpkctl::cli::Cli;
use dpkctl::domain::ReconcileError;
use dpkctl::output::json;

#[tokio::main]
async fn main() {
    // Logs go to stderr; RUST_LOG=debug shows every platform call.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = cli.run().await {
        tracing::debug!(error = ?e, "command failed");
        if json_mode {
            let code = e
                .downcast_ref::<ReconcileError>()
                .map_or("ERROR", ReconcileError::code);
            match json::format_error(&format!("{e:#}"), code) {
                Ok(out) => println!("{out}"),
                Err(_) => eprintln!("Error: {e:#}"),
            }
        } else {
            eprintln!("Error: {e:#}");
        }
        std::process::exit(1);
    }
}
