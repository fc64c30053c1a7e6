use std::io::{BufRead, BufReader, ErrorKind, Read};

use serialport::SerialPort;

use crate::constants::{BAUD_RATE, PORT, READ_TIMEOUT, STARTUP_DELAY};
use crate::error::MonitorError;

/// Open the configured serial port and wait out the board's auto-reset.
pub fn open_port() -> Result<Box<dyn SerialPort>, MonitorError> {
    let port = serialport::new(PORT, BAUD_RATE)
        .timeout(READ_TIMEOUT)
        .open()?;
    log::info!("connected to {PORT} at {BAUD_RATE} baud");
    std::thread::sleep(STARTUP_DELAY);
    Ok(port)
}

/// Assembles complete lines from a byte stream.
///
/// Generic over `Read` so tests can drive it with in-memory readers. A read
/// timeout yields `Ok(None)` and keeps any partial line buffered for the
/// next call; EOF means the transport dropped and is fatal.
pub struct LineSource<R: Read> {
    reader: BufReader<R>,
    pending: Vec<u8>,
}

impl<R: Read> LineSource<R> {
    pub fn new(inner: R) -> Self {
        Self {
            reader: BufReader::new(inner),
            pending: Vec::new(),
        }
    }

    /// Next complete line, with trailing CR/LF stripped.
    ///
    /// Serial noise is decoded lossily rather than aborting the run.
    pub fn next_line(&mut self) -> Result<Option<String>, MonitorError> {
        match self.reader.read_until(b'\n', &mut self.pending) {
            Ok(0) => Err(MonitorError::Disconnected),
            Ok(_) => {
                if self.pending.last() != Some(&b'\n') {
                    // Partial line before EOF; the next call reports the drop.
                    return Ok(None);
                }
                let line = String::from_utf8_lossy(&self.pending)
                    .trim_end_matches(['\r', '\n'])
                    .to_string();
                self.pending.clear();
                Ok(Some(line))
            }
            Err(err) => match err.kind() {
                ErrorKind::TimedOut | ErrorKind::WouldBlock | ErrorKind::Interrupted => Ok(None),
                _ => Err(err.into()),
            },
        }
    }
}
