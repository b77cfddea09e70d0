//! Channel parameters and session policy

use std::fmt;
use std::time::Duration;

use serialport::{DataBits, FlowControl, Parity, StopBits};

pub const DEFAULT_PORT: &str = "/dev/ttyUSB0";
pub const DEFAULT_BAUD: u32 = 2_000_000;

/// Everything needed to open the serial device.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelConfig {
    /// Device path (e.g. /dev/ttyUSB0)
    pub port_path: String,
    pub baud_rate: u32,
    pub data_bits: DataBits,
    pub parity: Parity,
    pub stop_bits: StopBits,
    pub flow_control: FlowControl,
    /// Driver read timeout. An expired timeout is not a failure, the read is
    /// simply issued again.
    pub timeout: Duration,
}

impl Default for ChannelConfig {
    fn default() -> Self {
        Self {
            port_path: String::from(DEFAULT_PORT),
            baud_rate: DEFAULT_BAUD,
            data_bits: DataBits::Eight,
            parity: Parity::None,
            stop_bits: StopBits::One,
            flow_control: FlowControl::None,
            timeout: Duration::from_secs(1),
        }
    }
}

impl ChannelConfig {
    pub fn new(port_path: &str) -> Self {
        Self {
            port_path: port_path.to_string(),
            ..Default::default()
        }
    }

    pub fn with_baud_rate(mut self, baud_rate: u32) -> Self {
        self.baud_rate = baud_rate;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Short form for log lines, e.g. `/dev/ttyUSB0 @ 2000000 8N1`
impl fmt::Display for ChannelConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data_bits = match self.data_bits {
            DataBits::Five => 5,
            DataBits::Six => 6,
            DataBits::Seven => 7,
            DataBits::Eight => 8,
        };
        let parity = match self.parity {
            Parity::None => 'N',
            Parity::Odd => 'O',
            Parity::Even => 'E',
        };
        let stop_bits = match self.stop_bits {
            StopBits::One => 1,
            StopBits::Two => 2,
        };
        write!(
            f,
            "{} @ {} {}{}{}",
            self.port_path, self.baud_rate, data_bits, parity, stop_bits
        )
    }
}

/// What to do once an open channel fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisconnectPolicy {
    /// Return the failure to the caller.
    #[default]
    Abort,
    /// Wait `delay` and open the device again. `max_attempts` bounds the
    /// consecutive failed opens, `None` retries forever and `Some(0)` never
    /// reopens, which behaves like `Abort`.
    Reconnect {
        delay: Duration,
        max_attempts: Option<u32>,
    },
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct EchoConfig {
    pub channel: ChannelConfig,
    pub on_disconnect: DisconnectPolicy,
}

impl EchoConfig {
    pub fn new(channel: ChannelConfig) -> Self {
        Self {
            channel,
            on_disconnect: DisconnectPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: DisconnectPolicy) -> Self {
        self.on_disconnect = policy;
        self
    }
}
