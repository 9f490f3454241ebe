//! Unicode Finder command line.

use clap::Parser;
use unicode_finder::cli::{self, Cli};

#[tokio::main]
async fn main() {
    unicode_finder::logging::init();

    let cli = Cli::parse();
    if let Err(e) = cli::run(cli).await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
