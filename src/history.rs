// Lifewatch - Simulated vital-sign monitor
// Copyright (c) 2025 David Martin Venti
//
// Dual-licensed under AGPL-3.0 and Commercial License.
// See LICENSE file for details.

//! Bounded history of tick snapshots.

use crate::reading::HistorySnapshot;
use std::collections::VecDeque;

/// Default number of retained snapshots.
pub const DEFAULT_HISTORY_CAPACITY: usize = 100;

/// Largest capacity a monitor accepts.
pub const MAX_HISTORY_CAPACITY: usize = 100_000;

/// Append-only log of snapshots, oldest evicted first.
///
/// Entries are stored in chronological order; readers get them
/// most-recent-first.
#[derive(Debug, Clone)]
pub struct HistoryLog {
    entries: VecDeque<HistorySnapshot>,
    capacity: usize,
}

impl Default for HistoryLog {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a log holding at most `capacity` entries (minimum 1).
    ///
    /// Storage grows on demand; only up to the default capacity is
    /// reserved upfront.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity.min(DEFAULT_HISTORY_CAPACITY)),
            capacity,
        }
    }

    /// Append a snapshot, evicting the oldest entries beyond capacity.
    ///
    /// Returns the number of evicted entries.
    pub fn push(&mut self, snapshot: HistorySnapshot) -> usize {
        self.entries.push_back(snapshot);

        let mut evicted = 0;
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
            evicted += 1;
        }
        evicted
    }

    /// Last `n` entries, most recent first.
    pub fn recent(&self, n: usize) -> Vec<HistorySnapshot> {
        self.entries.iter().rev().take(n).cloned().collect()
    }

    /// All entries, most recent first.
    pub fn all(&self) -> Vec<HistorySnapshot> {
        self.entries.iter().rev().cloned().collect()
    }

    /// Most recent entry.
    pub fn latest(&self) -> Option<&HistorySnapshot> {
        self.entries.back()
    }

    /// Oldest retained entry.
    pub fn oldest(&self) -> Option<&HistorySnapshot> {
        self.entries.front()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reading::SensorReading;
    use chrono::{TimeZone, Utc};

    fn snapshot(tick: u64) -> HistorySnapshot {
        let at = Utc.timestamp_opt(1_700_000_000 + tick as i64 * 5, 0).unwrap();
        SensorReading::initial(at).snapshot(tick)
    }

    #[test]
    fn test_empty_log() {
        let log = HistoryLog::new();
        assert!(log.is_empty());
        assert_eq!(log.capacity(), 100);
        assert!(log.recent(10).is_empty());
        assert!(log.latest().is_none());
    }

    #[test]
    fn test_recent_is_most_recent_first() {
        let mut log = HistoryLog::new();
        for tick in 1..=5 {
            log.push(snapshot(tick));
        }

        let ticks: Vec<u64> = log.recent(3).iter().map(|s| s.tick).collect();
        assert_eq!(ticks, vec![5, 4, 3]);
        assert_eq!(log.recent(50).len(), 5);
    }

    #[test]
    fn test_fifo_eviction() {
        let mut log = HistoryLog::with_capacity(3);
        assert_eq!(log.push(snapshot(1)), 0);
        log.push(snapshot(2));
        log.push(snapshot(3));
        assert_eq!(log.push(snapshot(4)), 1);

        assert_eq!(log.len(), 3);
        assert_eq!(log.oldest().map(|s| s.tick), Some(2));
        assert_eq!(log.latest().map(|s| s.tick), Some(4));
    }

    #[test]
    fn test_zero_capacity_is_raised_to_one() {
        let mut log = HistoryLog::with_capacity(0);
        log.push(snapshot(1));
        log.push(snapshot(2));
        assert_eq!(log.len(), 1);
        assert_eq!(log.latest().map(|s| s.tick), Some(2));
    }

    #[test]
    fn test_huge_capacity_does_not_reserve_upfront() {
        let mut log = HistoryLog::with_capacity(usize::MAX);
        assert_eq!(log.capacity(), usize::MAX);
        assert_eq!(log.push(snapshot(1)), 0);
        assert_eq!(log.len(), 1);
    }
}
