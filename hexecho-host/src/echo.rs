//! The read-print loop: one byte in, one hex line out.

use std::io::{Read, Write};

use hexecho_fmt::hex_byte;
use log::trace;

use crate::channel::ByteChannel;
use crate::error::EchoError;

pub struct Echoer<R, W> {
    channel: ByteChannel<R>,
    out: W,
}

impl<R: Read, W: Write> Echoer<R, W> {
    pub fn new(reader: R, out: W) -> Self {
        Self {
            channel: ByteChannel::new(reader),
            out,
        }
    }

    /// Reads one byte and prints it before anything else is read.
    pub fn step(&mut self) -> Result<u8, EchoError> {
        let byte = self.channel.read_byte()?;
        hexecho_fmt::write_line(&mut self.out, byte).map_err(EchoError::Write)?;
        trace!("#{} 0x{}", self.channel.bytes_read(), hex_byte(byte));
        Ok(byte)
    }

    /// Echoes `count` bytes, returning how many were echoed.
    pub fn run_for(&mut self, count: u64) -> Result<u64, EchoError> {
        for _ in 0..count {
            self.step()?;
        }
        Ok(count)
    }

    /// Echoes until the channel or the output fails.
    pub fn run(&mut self) -> EchoError {
        loop {
            if let Err(e) = self.step() {
                return e;
            }
        }
    }

    pub fn bytes_echoed(&self) -> u64 {
        self.channel.bytes_read()
    }

    pub fn into_output(self) -> W {
        self.out
    }
}
