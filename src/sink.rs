use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::constants::CSV_HEADER;

/// Append-only log of raw input lines.
///
/// The first line is the fixed CSV header; every received line is then
/// written verbatim, whether or not it parsed. Flushed per line so an
/// abrupt exit loses at most the line in flight.
pub struct RawLog {
    writer: BufWriter<File>,
    path: PathBuf,
    lines_written: u64,
}

impl RawLog {
    pub fn create(path: &Path) -> std::io::Result<Self> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        writeln!(writer, "{CSV_HEADER}")?;
        writer.flush()?;
        Ok(Self {
            writer,
            path: path.to_path_buf(),
            lines_written: 0,
        })
    }

    pub fn append(&mut self, raw: &str) -> std::io::Result<()> {
        writeln!(self.writer, "{raw}")?;
        self.writer.flush()?;
        self.lines_written += 1;
        Ok(())
    }

    pub fn lines_written(&self) -> u64 {
        self.lines_written
    }

    /// Flush and close the log. Call this on shutdown.
    pub fn finish(mut self) -> std::io::Result<PathBuf> {
        self.writer.flush()?;
        Ok(self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_header_on_create() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("log.csv");
        let log = RawLog::create(&path).unwrap();
        log.finish().unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 1);
        assert_eq!(contents.lines().next().unwrap(), CSV_HEADER);
    }

    #[test]
    fn appends_raw_lines_verbatim() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("log.csv");
        let mut log = RawLog::create(&path).unwrap();
        log.append("10,21.5,40.0,410.0,3.3,120.0").unwrap();
        log.append("10,21.5,40.0").unwrap(); // malformed, still logged
        log.append("garbage").unwrap();
        assert_eq!(log.lines_written(), 3);
        let path = log.finish().unwrap();

        let contents = std::fs::read_to_string(path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 4); // header + 3 raw lines
        assert_eq!(lines[1], "10,21.5,40.0,410.0,3.3,120.0");
        assert_eq!(lines[2], "10,21.5,40.0");
        assert_eq!(lines[3], "garbage");
    }

    #[test]
    fn line_count_matches_appends() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("log.csv");
        let mut log = RawLog::create(&path).unwrap();
        for i in 0..25 {
            log.append(&format!("{i},20.0,40.0,400.0,3.3,100.0")).unwrap();
        }
        let path = log.finish().unwrap();

        let contents = std::fs::read_to_string(path).unwrap();
        assert_eq!(contents.lines().count() - 1, 25);
    }
}
