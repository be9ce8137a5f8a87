//! gnfd-policy: validate a policy document and attach it through the
//! in-process development chain.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use gnfd_client::cli::{self, Cli};

#[tokio::main]
async fn main() -> ExitCode {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let args = Cli::parse();

    match cli::run(&args).await {
        Ok(out) => {
            println!("{}", out.canonical);
            println!("{}", out.tx_hash);
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(code = e.code().as_str(), error = %e, "gnfd-policy failed");
            eprintln!("{}: {e}", e.code().as_str());
            ExitCode::FAILURE
        }
    }
}
