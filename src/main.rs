extern crate clap;
extern crate tokio;
extern crate tracing_subscriber;

use std::process::ExitCode;

use clap::Parser;
use lexa_repo::{
    cli::{Cli, Command},
    config::Config,
    engine::execute,
    error::Error,
};
use tracing::error;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "lexa=info,lexa_repo=info";

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
        )
        .init();

    let Cli { command } = Cli::parse();

    let result = match command {
        Command::Extract(args) => match Config::try_from(args) {
            Ok(config) => execute(&config).await.map(|_| ()),
            Err(error) => Err(Error::from(error)),
        },
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            error!("{error}");
            ExitCode::FAILURE
        }
    }
}
