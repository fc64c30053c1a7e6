use std::collections::VecDeque;

use crate::sample::Sample;

/// Fixed-capacity window of the most recent samples.
///
/// Pushing at capacity evicts the oldest entry. Iteration and the series
/// accessors always run oldest first, so the per-field sequences handed to
/// the renderers stay index-aligned.
pub struct SampleWindow {
    samples: VecDeque<Sample>,
    capacity: usize,
}

impl SampleWindow {
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "window capacity must be non-zero");
        Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, sample: Sample) {
        if self.samples.len() == self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(sample);
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn latest(&self) -> Option<&Sample> {
        self.samples.back()
    }

    /// Samples oldest → newest.
    pub fn iter(&self) -> impl Iterator<Item = &Sample> {
        self.samples.iter()
    }

    pub fn timestamps(&self) -> Vec<i64> {
        self.iter().map(|s| s.timestamp).collect()
    }

    /// Extract `(timestamp, value)` points for one field, oldest first.
    pub fn series<F>(&self, value: F) -> Vec<(f64, f64)>
    where
        F: Fn(&Sample) -> f64,
    {
        self.iter().map(|s| (s.timestamp as f64, value(s))).collect()
    }

    /// Timestamp span of the window, for X axis bounds.
    pub fn time_bounds(&self) -> Option<(f64, f64)> {
        let first = self.samples.front()?.timestamp as f64;
        let last = self.samples.back()?.timestamp as f64;
        Some((first, last))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(timestamp: i64) -> Sample {
        Sample {
            timestamp,
            temperature: 20.0 + timestamp as f64,
            humidity: 40.0,
            co2_ppm: 400.0,
            voltage: 3.3,
            current_ma: 120.0,
        }
    }

    #[test]
    fn grows_until_capacity() {
        let mut window = SampleWindow::new(50);
        window.push(sample(10));
        window.push(sample(11));
        assert_eq!(window.len(), 2);
        assert_eq!(window.timestamps(), vec![10, 11]);
    }

    #[test]
    fn evicts_oldest_at_capacity() {
        let mut window = SampleWindow::new(3);
        for t in 0..4 {
            window.push(sample(t));
        }
        assert_eq!(window.len(), 3);
        assert_eq!(window.timestamps(), vec![1, 2, 3]);
    }

    #[test]
    fn holds_last_n_in_arrival_order() {
        let mut window = SampleWindow::new(5);
        for t in 0..20 {
            window.push(sample(t));
        }
        assert_eq!(window.timestamps(), vec![15, 16, 17, 18, 19]);
        assert_eq!(window.latest().unwrap().timestamp, 19);
    }

    #[test]
    fn series_stay_aligned() {
        let mut window = SampleWindow::new(4);
        for t in 0..6 {
            window.push(sample(t));
        }
        let temps = window.series(|s| s.temperature);
        let volts = window.series(|s| s.voltage);
        assert_eq!(temps.len(), window.len());
        assert_eq!(volts.len(), window.len());
        // Same X coordinate at every index.
        for (t, v) in temps.iter().zip(&volts) {
            assert_eq!(t.0, v.0);
        }
        assert_eq!(temps[0], (2.0, 22.0));
    }

    #[test]
    fn time_bounds_span_window() {
        let mut window = SampleWindow::new(10);
        assert!(window.is_empty());
        assert_eq!(window.time_bounds(), None);
        window.push(sample(7));
        assert_eq!(window.time_bounds(), Some((7.0, 7.0)));
        window.push(sample(9));
        assert_eq!(window.time_bounds(), Some((7.0, 9.0)));
    }
}
