use std::time::{Duration, Instant};

/// Counters for the whole session, across resets
pub struct GameMetrics {
    pub start_time: Instant,
    pub elapsed_time: Duration,
    /// Lives started, the first one included
    pub lives: u32,
    pub deaths: u32,
    pub wins: u32,
    pub best_length: usize,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            elapsed_time: Duration::ZERO,
            lives: 1,
            deaths: 0,
            wins: 0,
            best_length: 0,
        }
    }

    pub fn update(&mut self) {
        self.elapsed_time = self.start_time.elapsed();
    }

    pub fn on_life_start(&mut self) {
        self.lives += 1;
        self.start_time = Instant::now();
        self.elapsed_time = Duration::ZERO;
    }

    pub fn on_death(&mut self, final_length: usize) {
        self.deaths += 1;
        self.record_length(final_length);
    }

    pub fn on_win(&mut self, final_length: usize) {
        self.wins += 1;
        self.record_length(final_length);
    }

    /// A life cut short by a restart still counts toward the best length
    pub fn on_restart(&mut self, abandoned_length: usize) {
        self.record_length(abandoned_length);
        self.on_life_start();
    }

    fn record_length(&mut self, length: usize) {
        if length > self.best_length {
            self.best_length = length;
        }
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_formatting() {
        let mut metrics = GameMetrics::new();
        metrics.elapsed_time = Duration::from_secs(125);
        assert_eq!(metrics.format_time(), "02:05");

        metrics.elapsed_time = Duration::from_secs(0);
        assert_eq!(metrics.format_time(), "00:00");

        metrics.elapsed_time = Duration::from_secs(3661);
        assert_eq!(metrics.format_time(), "61:01");
    }

    #[test]
    fn test_best_length_tracking() {
        let mut metrics = GameMetrics::new();

        metrics.on_death(5);
        assert_eq!(metrics.best_length, 5);
        assert_eq!(metrics.deaths, 1);

        metrics.on_death(3);
        assert_eq!(metrics.best_length, 5); // Should not decrease

        metrics.on_win(9);
        assert_eq!(metrics.best_length, 9);
        assert_eq!(metrics.wins, 1);
        assert_eq!(metrics.deaths, 2);
    }

    #[test]
    fn test_life_start_resets_time() {
        let mut metrics = GameMetrics::new();
        std::thread::sleep(Duration::from_millis(50));
        metrics.update();

        assert!(metrics.elapsed_time.as_millis() >= 50);

        metrics.on_life_start();
        metrics.update();
        assert!(metrics.elapsed_time.as_millis() < 50);
        assert_eq!(metrics.lives, 2);
    }

    #[test]
    fn test_restart_counts_toward_best_length() {
        let mut metrics = GameMetrics::new();

        metrics.on_restart(7);

        assert_eq!(metrics.best_length, 7);
        assert_eq!(metrics.lives, 2);
        assert_eq!(metrics.deaths, 0);
    }
}
