//! In-memory stand-ins for the serial device

use std::collections::VecDeque;
use std::io::{self, Read, Write};

#[derive(Debug, Clone, Copy)]
pub enum Script {
    Byte(u8),
    /// a read that returns this error kind without data
    Idle(io::ErrorKind),
    Fail(io::ErrorKind),
}

/// Plays back a script, then reports end of stream.
#[derive(Debug, Default)]
pub struct ScriptedReader {
    script: VecDeque<Script>,
    /// buffer length of every read call
    pub requested: Vec<usize>,
}

impl ScriptedReader {
    pub fn new(script: Vec<Script>) -> Self {
        Self {
            script: script.into(),
            requested: Vec::new(),
        }
    }

    pub fn bytes(bytes: &[u8]) -> Self {
        Self::new(bytes.iter().copied().map(Script::Byte).collect())
    }
}

impl Read for ScriptedReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.requested.push(buf.len());
        match self.script.pop_front() {
            Some(Script::Byte(b)) => {
                buf[0] = b;
                Ok(1)
            }
            Some(Script::Idle(kind)) | Some(Script::Fail(kind)) => Err(kind.into()),
            None => Ok(0),
        }
    }
}

/// Output that rejects every write.
pub struct BrokenPipe;

impl Write for BrokenPipe {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::ErrorKind::BrokenPipe.into())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
