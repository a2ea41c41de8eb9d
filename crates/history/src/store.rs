use std::io::{self, Write};

use chrono::{DateTime, Local, Utc};
use core_types::{HistoryEntry, Number, Operation};

use crate::error::HistoryError;
use crate::summary::HistorySummary;

/// An append-only log of successful calculations.
///
/// Internally entries are kept oldest-first; every consumer-facing read
/// presents them newest-first. Entries are never mutated after insertion,
/// and the count only moves through [`HistoryStore::add_entry`] and
/// [`HistoryStore::clear`].
#[derive(Debug, Clone, Default)]
pub struct HistoryStore {
    entries: Vec<HistoryEntry>,
}

impl HistoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry stamped with the current time.
    ///
    /// Recording cannot fail; the stored entry is returned for inspection.
    /// The operand slice is copied, so the caller keeps ownership of its own
    /// buffer and later mutation of it cannot reach the record.
    pub fn add_entry(
        &mut self,
        operation: Operation,
        operands: &[Number],
        result: Number,
    ) -> &HistoryEntry {
        self.push(HistoryEntry::new(operation, operands, result))
    }

    /// Appends an entry with an explicit timestamp instead of the clock.
    pub fn add_entry_at(
        &mut self,
        operation: Operation,
        operands: &[Number],
        result: Number,
        timestamp: DateTime<Utc>,
    ) -> &HistoryEntry {
        self.push(HistoryEntry::with_timestamp(
            operation, operands, result, timestamp,
        ))
    }

    fn push(&mut self, entry: HistoryEntry) -> &HistoryEntry {
        self.entries.push(entry);
        &self.entries[self.entries.len() - 1]
    }

    /// Returns entries newest-first.
    ///
    /// With a limit, only the `limit` most recent entries are returned. An
    /// empty store yields an empty vec.
    pub fn recent(&self, limit: Option<usize>) -> Vec<&HistoryEntry> {
        let take = limit.unwrap_or(self.entries.len());
        self.entries.iter().rev().take(take).collect()
    }

    /// The result of the most recently appended entry, if any.
    pub fn last_result(&self) -> Option<Number> {
        self.entries.last().map(|entry| entry.result)
    }

    /// Removes every entry and reports how many were removed.
    pub fn clear(&mut self) -> usize {
        let removed = self.entries.len();
        self.entries.clear();
        removed
    }

    /// Current entry count.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Derives the aggregate statistics over the whole store.
    pub fn summary(&self) -> HistorySummary {
        HistorySummary::from_entries(&self.entries)
    }

    /// Renders the numbered, newest-first listing.
    ///
    /// Each line carries the entry's local time-of-day and its expression.
    /// An empty store renders a single "no calculations" line instead.
    pub fn write_listing<W: Write>(
        &self,
        out: &mut W,
        limit: Option<usize>,
    ) -> Result<(), HistoryError> {
        if self.entries.is_empty() {
            writeln!(out, "No calculations in history.")?;
            return Ok(());
        }

        let entries = self.recent(limit);
        writeln!(out, "Calculation History ({} entries)", entries.len())?;
        for (index, entry) in entries.iter().enumerate() {
            let time_of_day = entry.timestamp.with_timezone(&Local).format("%H:%M:%S");
            writeln!(out, "{:>3}. [{}] {}", index + 1, time_of_day, entry.expression)?;
        }
        Ok(())
    }

    /// Convenience wrapper printing the listing to stdout.
    pub fn print(&self, limit: Option<usize>) -> Result<(), HistoryError> {
        self.write_listing(&mut io::stdout().lock(), limit)
    }
}
