//! ShelfDB Binary
//!
//! Runs the interactive catalog console on stdin/stdout.

use std::io;

use clap::Parser;
use shelfdb::shell::Session;
use shelfdb::{Catalog, Config};
use tracing_subscriber::{fmt, EnvFilter};

/// ShelfDB library catalog
#[derive(Parser, Debug)]
#[command(name = "shelfdb")]
#[command(about = "Single-user library catalog manager")]
#[command(version)]
struct Args {
    /// Catalog file
    #[arg(short, long, default_value = "books.json")]
    data_file: String,

    /// Indentation width of the catalog file
    #[arg(short, long, default_value = "4")]
    indent: usize,
}

fn main() {
    // Logs go to stderr; stdout belongs to the menu
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    tracing::info!("ShelfDB v{}", shelfdb::VERSION);
    tracing::info!("Catalog file: {}", args.data_file);

    let config = Config::builder()
        .data_file(&args.data_file)
        .indent(args.indent)
        .build();

    let catalog = match Catalog::open(config) {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("Failed to open catalog: {}", e);
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(&catalog, stdin.lock(), stdout.lock());

    if let Err(e) = session.run() {
        tracing::error!("Console error: {}", e);
        std::process::exit(1);
    }
}
