use std::io::{self, Read};

use log::{debug, trace};
use serialport::{ClearBuffer, SerialPort};

use crate::config::ChannelConfig;
use crate::error::EchoError;

/// Opens the device and drops whatever the driver buffered before we got
/// there, so the first byte echoed is one that arrived after opening.
pub fn connect(config: &ChannelConfig) -> Result<Box<dyn SerialPort>, EchoError> {
    debug!("opening {}", config);
    let open_error = |source| EchoError::Open {
        path: config.port_path.clone(),
        source,
    };
    let port = serialport::new(&config.port_path, config.baud_rate)
        .data_bits(config.data_bits)
        .flow_control(config.flow_control)
        .stop_bits(config.stop_bits)
        .parity(config.parity)
        .timeout(config.timeout)
        .open()
        .map_err(open_error)?;
    port.clear(ClearBuffer::Input).map_err(open_error)?;
    Ok(port)
}

/// Single byte reads from an exclusively owned reader.
pub struct ByteChannel<R> {
    inner: R,
    bytes_read: u64,
}

impl<R: Read> ByteChannel<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            bytes_read: 0,
        }
    }

    /// Blocks until one byte arrives or the channel fails.
    ///
    /// Every underlying read asks for exactly one byte. Driver timeouts and
    /// interrupted reads are retried, so idle lines never surface as errors.
    /// The reader must block (or time out) when there is no data: a reader
    /// that keeps returning `WouldBlock` turns this into a busy loop.
    pub fn read_byte(&mut self) -> Result<u8, EchoError> {
        let mut buffer: [u8; 1] = [0; 1];
        loop {
            match self.inner.read(&mut buffer) {
                Ok(0) => return Err(EchoError::Disconnected),
                Ok(_) => {
                    self.bytes_read += 1;
                    return Ok(buffer[0]);
                }
                Err(ref e)
                    if matches!(
                        e.kind(),
                        io::ErrorKind::TimedOut
                            | io::ErrorKind::WouldBlock
                            | io::ErrorKind::Interrupted
                    ) =>
                {
                    trace!("no data yet ({:?})", e.kind());
                }
                Err(e) => return Err(EchoError::Read(e)),
            }
        }
    }

    pub fn bytes_read(&self) -> u64 {
        self.bytes_read
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}
