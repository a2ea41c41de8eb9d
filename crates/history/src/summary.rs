use std::collections::HashMap;

use core_types::HistoryEntry;
use serde::{Deserialize, Serialize};

/// Aggregate statistics over a history store.
///
/// This struct is the standardized report shape for "what happened in this
/// session": totals, the operations involved, and the expressions at both
/// ends of the timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistorySummary {
    /// Total number of recorded calculations.
    pub total_calculations: usize,
    /// Distinct operation names, ordered by first use.
    pub operations_used: Vec<String>,
    /// Occurrence count per operation name.
    pub operation_counts: HashMap<String, usize>,
    /// Expression of the newest entry. `None` when the store is empty.
    pub most_recent: Option<String>,
    /// Expression of the first-ever entry. `None` when the store is empty.
    pub first_calculation: Option<String>,
}

impl HistorySummary {
    /// Creates a new, zeroed-out summary, the shape an empty store reports.
    pub fn new() -> Self {
        Self {
            total_calculations: 0,
            operations_used: Vec::new(),
            operation_counts: HashMap::new(),
            most_recent: None,
            first_calculation: None,
        }
    }

    pub(crate) fn from_entries(entries: &[HistoryEntry]) -> Self {
        let mut summary = Self::new();
        summary.total_calculations = entries.len();

        for entry in entries {
            let name = entry.operation.name().to_string();
            let count = summary.operation_counts.entry(name.clone()).or_insert(0);
            if *count == 0 {
                summary.operations_used.push(name);
            }
            *count += 1;
        }

        summary.first_calculation = entries.first().map(|entry| entry.expression.clone());
        summary.most_recent = entries.last().map(|entry| entry.expression.clone());
        summary
    }
}

impl Default for HistorySummary {
    fn default() -> Self {
        Self::new()
    }
}
