use std::panic;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use fiftyninelang_service::cli::{Cli, Command, run_compile, run_serve};
use fiftyninelang_service::config::ServiceConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    set_panic_hook();

    let cli = Cli::parse();
    let config = ServiceConfig::from_env();

    match cli.command {
        Command::Serve { bind } => run_serve(config, bind).await,
        Command::Compile {
            file,
            example,
            pretty,
        } => run_compile(config, file, example, pretty).await,
    }
}

fn set_panic_hook() {
    panic::set_hook(Box::new(|panic_info| {
        tracing::error!(
            message = "panic occurred",
            panic = %panic_info
        );
    }));
}
