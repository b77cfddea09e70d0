//! Owns the channel for the lifetime of the program and applies the
//! disconnect policy when it fails.

use std::io::{Read, Write};
use std::thread;
use std::time::Duration;

use log::{debug, info, warn};

use crate::channel;
use crate::config::{ChannelConfig, DisconnectPolicy, EchoConfig};
use crate::echo::Echoer;
use crate::error::EchoError;

/// Echoes the configured serial port to `out`. Returns only with the failure
/// that ended the session.
pub fn run<W: Write>(config: &EchoConfig, out: W) -> EchoError {
    run_with(config, out, channel::connect)
}

/// Same as [`run`] with a custom way of opening the channel.
///
/// A failure to open the channel the first time is always returned, the
/// policy only applies to a channel that was working.
pub fn run_with<R, W, F>(config: &EchoConfig, mut out: W, mut open: F) -> EchoError
where
    R: Read,
    W: Write,
    F: FnMut(&ChannelConfig) -> Result<R, EchoError>,
{
    let mut reader = match open(&config.channel) {
        Ok(reader) => reader,
        Err(e) => return e,
    };
    info!("listening on {}", config.channel);

    loop {
        let mut echoer = Echoer::new(reader, &mut out);
        let err = echoer.run();
        info!("{}: {} bytes echoed", config.channel.port_path, echoer.bytes_echoed());

        let (delay, max_attempts) = match config.on_disconnect {
            DisconnectPolicy::Reconnect {
                delay,
                max_attempts,
            } if err.is_disconnect() && max_attempts != Some(0) => (delay, max_attempts),
            _ => return err,
        };
        warn!("{}: {}, reconnecting", config.channel.port_path, err);

        reader = match reopen(&config.channel, &mut open, delay, max_attempts) {
            Ok(reader) => reader,
            Err(e) => return e,
        };
    }
}

fn reopen<R, F>(
    config: &ChannelConfig,
    open: &mut F,
    delay: Duration,
    max_attempts: Option<u32>,
) -> Result<R, EchoError>
where
    F: FnMut(&ChannelConfig) -> Result<R, EchoError>,
{
    let mut attempts: u32 = 0;
    loop {
        thread::sleep(delay);
        attempts += 1;
        match open(config) {
            Ok(reader) => {
                info!("reconnected to {} (attempt {})", config, attempts);
                return Ok(reader);
            }
            Err(e) if max_attempts.map_or(false, |max| attempts >= max) => {
                warn!("giving up on {} after {} attempts", config.port_path, attempts);
                return Err(e);
            }
            Err(e) => debug!("reconnect attempt {} failed: {}", attempts, e),
        }
    }
}
