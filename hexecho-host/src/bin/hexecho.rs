//! dumps every byte received on the serial port as one hex line on stdout.
//! diagnostics go to stderr, set RUST_LOG to change their verbosity
use std::io;

use anyhow::Context;

use hexecho_host::{session, EchoConfig, EchoError};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("hexecho v{}", env!("CARGO_PKG_VERSION"));
    let config = EchoConfig::default();
    let err = session::run(&config, io::stdout().lock());
    let context = match err {
        EchoError::Open { .. } => "Failed to open serial port",
        EchoError::Write(_) => "Failed to write to stdout",
        EchoError::Read(_) | EchoError::Disconnected => "Serial port failed",
    };
    Err::<(), _>(err).context(context)
}
