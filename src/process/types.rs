/*!
 * Process Types
 * Workload records and the ordered batch the policies operate on
 */

use crate::core::errors::SimError;
use crate::core::types::{Pid, Priority, SimResult, Ticks};
use serde::{Deserialize, Serialize};

/// One workload unit
///
/// `burst` is always the *remaining* service time while a preemptive run is
/// in progress. `arrival` is only touched by time normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessRecord {
    pub id: Pid,
    pub priority: Priority,
    pub burst: Ticks,
    pub arrival: Ticks,
    /// Units of the current attempt elapsed so far; reset on preemption
    #[serde(skip)]
    pub executed: Ticks,
}

impl ProcessRecord {
    pub fn new(id: Pid, arrival: Ticks, burst: Ticks, priority: Priority) -> Self {
        Self {
            id,
            priority,
            burst,
            arrival,
            executed: 0,
        }
    }

    /// Build a record from raw workload integers, rejecting values the
    /// simulator cannot represent
    pub fn from_raw(id: i64, arrival: i64, burst: i64, priority: i64) -> SimResult<Self> {
        let id = Pid::try_from(id).map_err(|_| {
            SimError::InvalidWorkload(format!("process id {} is out of range", id))
        })?;
        if arrival < 0 {
            return Err(SimError::InvalidWorkload(format!(
                "process {} has negative arrival {}",
                id, arrival
            )));
        }
        if burst < 1 {
            return Err(SimError::InvalidWorkload(format!(
                "process {} has non-positive burst {}",
                id, burst
            )));
        }
        let priority = Priority::try_from(priority).map_err(|_| {
            SimError::InvalidWorkload(format!(
                "process {} priority {} is out of range",
                id, priority
            ))
        })?;

        Ok(Self::new(id, arrival as Ticks, burst as Ticks, priority))
    }

    /// Service still owed on the current attempt
    #[inline]
    pub fn remaining(&self) -> Ticks {
        self.burst.saturating_sub(self.executed)
    }
}

/// Ordered sequence of processes
///
/// Order is meaningful: it is always the "next to run" order at the current
/// simulated instant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Batch {
    records: Vec<ProcessRecord>,
}

/// Saved batch contents, restored after a policy run
#[derive(Debug, Clone)]
pub struct BatchSnapshot(Vec<ProcessRecord>);

impl Batch {
    pub fn new(records: Vec<ProcessRecord>) -> Self {
        Self { records }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn push(&mut self, record: ProcessRecord) {
        self.records.push(record);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ProcessRecord> {
        self.records.iter()
    }

    pub fn as_slice(&self) -> &[ProcessRecord] {
        &self.records
    }

    pub fn as_mut_slice(&mut self) -> &mut [ProcessRecord] {
        &mut self.records
    }

    pub fn get(&self, index: usize) -> Option<&ProcessRecord> {
        self.records.get(index)
    }

    pub fn swap(&mut self, a: usize, b: usize) {
        self.records.swap(a, b);
    }

    pub fn ids(&self) -> Vec<Pid> {
        self.records.iter().map(|r| r.id).collect()
    }

    /// Earliest arrival in the batch, if any
    pub fn earliest_arrival(&self) -> Option<Ticks> {
        self.records.iter().map(|r| r.arrival).min()
    }

    /// Total service demanded by the whole batch
    pub fn total_burst(&self) -> Ticks {
        self.records.iter().map(|r| r.burst).sum()
    }

    /// Save the current contents
    pub fn snapshot(&self) -> BatchSnapshot {
        BatchSnapshot(self.records.clone())
    }

    /// Roll back to a previously taken snapshot
    pub fn restore(&mut self, snapshot: BatchSnapshot) {
        self.records = snapshot.0;
    }
}

impl std::ops::Index<usize> for Batch {
    type Output = ProcessRecord;

    fn index(&self, index: usize) -> &Self::Output {
        &self.records[index]
    }
}

impl std::ops::IndexMut<usize> for Batch {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.records[index]
    }
}

impl From<Vec<ProcessRecord>> for Batch {
    fn from(records: Vec<ProcessRecord>) -> Self {
        Self::new(records)
    }
}

impl FromIterator<ProcessRecord> for Batch {
    fn from_iter<I: IntoIterator<Item = ProcessRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Batch {
    type Item = &'a ProcessRecord;
    type IntoIter = std::slice::Iter<'a, ProcessRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw_rejects_bad_values() {
        assert!(ProcessRecord::from_raw(1, 0, 5, 3).is_ok());
        assert!(matches!(
            ProcessRecord::from_raw(1, -1, 5, 3),
            Err(SimError::InvalidWorkload(_))
        ));
        assert!(matches!(
            ProcessRecord::from_raw(1, 0, 0, 3),
            Err(SimError::InvalidWorkload(_))
        ));
        assert!(matches!(
            ProcessRecord::from_raw(-4, 0, 2, 3),
            Err(SimError::InvalidWorkload(_))
        ));
    }

    #[test]
    fn test_snapshot_restore() {
        let mut batch = Batch::new(vec![
            ProcessRecord::new(1, 0, 5, 1),
            ProcessRecord::new(2, 3, 2, 1),
        ]);
        let snapshot = batch.snapshot();

        batch.swap(0, 1);
        batch[0].burst = 1;
        batch[1].arrival = 9;

        batch.restore(snapshot);
        assert_eq!(batch.ids(), vec![1, 2]);
        assert_eq!(batch[0].burst, 5);
        assert_eq!(batch[1].arrival, 3);
    }

    #[test]
    fn test_remaining_tracks_executed() {
        let mut record = ProcessRecord::new(7, 0, 4, 0);
        record.executed = 3;
        assert_eq!(record.remaining(), 1);
        record.executed = 6;
        assert_eq!(record.remaining(), 0);
    }
}
