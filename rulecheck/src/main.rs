// rulecheck/src/main.rs

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::Cli;

#[tokio::main]
async fn main() {
    // RUST_LOG=debug rulecheck src/app.ts to see the details.
    // Logs go to stderr so `--format json` keeps stdout clean.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match commands::review::execute(cli).await {
        Ok(verdict) => std::process::exit(verdict.exit_code()),
        Err(e) => {
            if e.is_configuration() {
                eprintln!("\n⚙️  Configuration error (no request was sent):");
            } else {
                eprintln!("\n💥 Review failed:");
            }
            eprintln!("{:?}", miette::Report::new(e));
            std::process::exit(1);
        }
    }
}
