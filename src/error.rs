use thiserror::Error;

#[derive(Error, Debug)]
pub enum MonitorError {
    #[error("serial port error: {0}")]
    Serial(#[from] serialport::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serial connection closed")]
    Disconnected,
    #[error("chart rendering failed: {0}")]
    Chart(String),
}
