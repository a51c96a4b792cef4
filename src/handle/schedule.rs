//! Record schedule
//!
//! Sampling metadata carried by a `FileLogger` on behalf of the caller's own
//! scheduling loop. The logger itself never consults it.

use std::time::Duration;

pub const DEFAULT_RECORD_FREQUENCY_HZ: u16 = 100;
pub const DEFAULT_RECORD_DURATION_SECS: u32 = 3600;

/// Recorder frequency and retention window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordSchedule {
    frequency_hz: u16,
    duration_secs: u32,
}

impl Default for RecordSchedule {
    fn default() -> Self {
        Self::new(DEFAULT_RECORD_FREQUENCY_HZ, DEFAULT_RECORD_DURATION_SECS)
    }
}

impl RecordSchedule {
    /// A frequency of zero is clamped to 1 Hz.
    pub fn new(frequency_hz: u16, duration_secs: u32) -> Self {
        Self {
            frequency_hz: frequency_hz.max(1),
            duration_secs,
        }
    }

    /// Recorder frequency in Hz
    pub fn frequency_hz(&self) -> u16 {
        self.frequency_hz
    }

    /// How far back, in seconds, records are kept
    pub fn duration_secs(&self) -> u32 {
        self.duration_secs
    }

    /// Time between two consecutive records
    pub fn period(&self) -> Duration {
        Duration::from_secs(1) / u32::from(self.frequency_hz)
    }

    /// Number of records the retention window holds
    pub fn capacity(&self) -> u64 {
        u64::from(self.frequency_hz) * u64::from(self.duration_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_frequency_is_clamped() {
        let s = RecordSchedule::new(0, 10);
        assert_eq!(s.frequency_hz(), 1);
        assert_eq!(s.period(), Duration::from_secs(1));
    }

    #[test]
    fn defaults_match_recorder_defaults() {
        let s = RecordSchedule::default();
        assert_eq!(s.frequency_hz(), 100);
        assert_eq!(s.duration_secs(), 3600);
        assert_eq!(s.period(), Duration::from_millis(10));
        assert_eq!(s.capacity(), 360_000);
    }
}
