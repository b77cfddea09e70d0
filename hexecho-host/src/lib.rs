//! host library that echoes every byte arriving on a serial port as hex text

mod channel;
mod config;
mod echo;
mod error;
pub mod session;
#[cfg(test)]
mod testing;

pub use channel::{connect, ByteChannel};
pub use config::{ChannelConfig, DisconnectPolicy, EchoConfig, DEFAULT_BAUD, DEFAULT_PORT};
pub use echo::Echoer;
pub use error::EchoError;
