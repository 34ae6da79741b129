use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tokio::io::AsyncReadExt;

use crate::catalog;
use crate::config::ServiceConfig;
use crate::core::domain::{CompileOutcome, CompileRequest};
use crate::core::traits::invoker::CompilerInvoker;
use crate::http::routes::router;
use crate::http::state::AppState;
use crate::native::invoker::NativeInvoker;
use crate::resolver;
use crate::service::CompileService;

#[derive(Debug, Parser)]
#[command(name = "fiftyninelang-service", about = "Compile service for the 59LANG language")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the HTTP API server.
    Serve {
        /// Address to bind instead of the configured one.
        #[arg(long)]
        bind: Option<SocketAddr>,
    },
    /// Compile one program and print the normalized result.
    Compile {
        /// Source file to compile; reads stdin when omitted.
        file: Option<PathBuf>,
        /// Compile a catalog example instead of a file.
        #[arg(long, conflicts_with = "file")]
        example: Option<String>,
        /// Render a console summary instead of JSON.
        #[arg(long)]
        pretty: bool,
    },
}

/// Resolves the compiler once and wires up the shared orchestration service.
/// Both front ends consume the result.
pub fn build_service(config: &ServiceConfig) -> (Arc<CompileService>, Option<PathBuf>) {
    let resolved = resolver::resolve(&config.candidates);
    let invoker = resolved.as_ref().map(|path| {
        Arc::new(NativeInvoker::new(path, config.compile_timeout)) as Arc<dyn CompilerInvoker>
    });

    (
        Arc::new(CompileService::new(invoker, config.scratch_dir.clone())),
        resolved,
    )
}

pub async fn run_serve(
    mut config: ServiceConfig,
    bind: Option<SocketAddr>,
) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(bind) = bind {
        config.bind_addr = bind;
    }

    let (service, resolved) = build_service(&config);
    let app = router(AppState::new(service, resolved));

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "HTTP server listening");
    axum::serve(listener, app).await?;

    Ok(())
}

pub async fn run_compile(
    config: ServiceConfig,
    file: Option<PathBuf>,
    example: Option<String>,
    pretty: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let (code, filename) = match (&file, &example) {
        (Some(path), None) => (
            tokio::fs::read_to_string(path).await?,
            path.file_name()
                .map(|name| name.to_string_lossy().to_string()),
        ),
        (None, Some(key)) => {
            let example = catalog::find(key)
                .ok_or_else(|| format!("unknown example \"{key}\""))?;
            (example.code.to_string(), Some(format!("{key}.code")))
        }
        _ => {
            let mut code = String::new();
            tokio::io::stdin().read_to_string(&mut code).await?;
            (code, None)
        }
    };

    let (service, _) = build_service(&config);
    let request = CompileRequest { code, filename };
    let outcome = service.compile(&request).await?;

    if pretty {
        print!("{}", render_console(&outcome));
    } else {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    }

    Ok(())
}

/// Console rendering of an outcome, in the compiler's own non-JSON style.
fn render_console(outcome: &CompileOutcome) -> String {
    let mut out = String::new();

    if outcome.success {
        out.push_str("Compilation successful!\n");
        out.push_str("Symbol Table:\n");
        for (name, info) in &outcome.symbol_table {
            match info.as_str() {
                Some(kind) => out.push_str(&format!("  {name} : {kind}\n")),
                None => out.push_str(&format!("  {name} : {info}\n")),
            }
        }
    } else {
        out.push_str(&format!(
            "Compilation completed with {} error(s):\n",
            outcome.error_count
        ));
        for error in &outcome.errors {
            match error.as_str() {
                Some(message) => out.push_str(&format!("  {message}\n")),
                None => out.push_str(&format!("  {error}\n")),
            }
        }
    }

    out
}
