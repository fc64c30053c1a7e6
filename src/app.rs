use chrono::{DateTime, Local};

use crate::sample::parse_line;
use crate::window::SampleWindow;

/// Counters for the current run, shown in the status header.
pub struct RunStats {
    pub lines_total: u64,
    pub samples_ok: u64,
    pub skipped: u64,
    pub started_at: DateTime<Local>,
}

impl RunStats {
    fn new() -> Self {
        Self {
            lines_total: 0,
            samples_ok: 0,
            skipped: 0,
            started_at: Local::now(),
        }
    }
}

/// Application state: the sample window plus run statistics.
pub struct App {
    window: SampleWindow,
    stats: RunStats,
    last_line: String,
}

impl App {
    pub fn new(capacity: usize) -> App {
        App {
            window: SampleWindow::new(capacity),
            stats: RunStats::new(),
            last_line: String::new(),
        }
    }

    /// Record one raw line. Malformed lines are counted and skipped;
    /// they are already persisted by the caller either way.
    pub fn ingest(&mut self, raw: &str) -> bool {
        self.stats.lines_total += 1;
        self.last_line = raw.to_string();

        match parse_line(raw) {
            Ok(sample) => {
                self.window.push(sample);
                self.stats.samples_ok += 1;
                true
            }
            Err(err) => {
                self.stats.skipped += 1;
                log::debug!("skipping line {:?}: {err}", raw);
                false
            }
        }
    }

    pub fn window(&self) -> &SampleWindow {
        &self.window
    }

    pub fn stats(&self) -> &RunStats {
        &self.stats
    }

    pub fn last_line(&self) -> &str {
        &self.last_line
    }
}
