use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::enums::Operation;
use crate::number::Number;

/// One recorded calculation.
///
/// Entries are immutable once created: the operand list is copied out of the
/// caller's slice and the expression text is rendered exactly once, so a
/// recorded calculation can never change retroactively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Unique identifier of this entry.
    pub id: Uuid,
    /// The operation that produced the result.
    pub operation: Operation,
    /// The operands, in the order the operation consumed them.
    pub operands: Vec<Number>,
    /// The value the operation produced.
    pub result: Number,
    /// When the calculation was recorded.
    pub timestamp: DateTime<Utc>,
    /// Human-readable rendering, e.g. `"2 + 3 = 5"`.
    pub expression: String,
}

impl HistoryEntry {
    /// Creates an entry stamped with the current time.
    pub fn new(operation: Operation, operands: &[Number], result: Number) -> Self {
        Self::with_timestamp(operation, operands, result, Utc::now())
    }

    /// Creates an entry with an explicit timestamp.
    pub fn with_timestamp(
        operation: Operation,
        operands: &[Number],
        result: Number,
        timestamp: DateTime<Utc>,
    ) -> Self {
        let expression = operation.format_expression(operands, result);
        Self {
            id: Uuid::new_v4(),
            operation,
            operands: operands.to_vec(),
            result,
            timestamp,
            expression,
        }
    }
}
