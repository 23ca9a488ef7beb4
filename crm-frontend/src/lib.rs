#![feature(coverage_attribute)]

pub mod client;
mod components;
pub mod config;
pub mod error;
pub mod navigation;
pub mod profile;
pub mod session;

pub use components::{Body, Shell, ShellContext};
pub use error::Error;
use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::util::SubscriberInitExt as _;

pub fn init_tracing(config: &config::Log) -> Result<(), Error> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_new(&config.filter)?)
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .without_time()
                .with_writer(tracing_web::MakeWebConsoleWriter::new()),
        )
        .try_init()?;
    Ok(())
}
