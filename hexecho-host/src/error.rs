use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EchoError {
    #[error("cannot open serial port {path}")]
    Open {
        path: String,
        #[source]
        source: serialport::Error,
    },
    #[error("read from serial port failed")]
    Read(#[source] io::Error),
    #[error("serial port closed")]
    Disconnected,
    #[error("cannot write to output")]
    Write(#[source] io::Error),
}

impl EchoError {
    /// Failures of the channel itself, the ones a reconnect can recover from.
    pub fn is_disconnect(&self) -> bool {
        matches!(self, EchoError::Read(_) | EchoError::Disconnected)
    }
}
