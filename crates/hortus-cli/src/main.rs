//! Hortus server binary.

use clap::Parser;

#[tokio::main]
async fn main() {
    let args = hortus_cli::CliArgs::parse();
    if let Err(err) = hortus_cli::run(args).await {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
