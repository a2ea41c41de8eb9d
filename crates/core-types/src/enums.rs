use serde::{Deserialize, Serialize};

use crate::number::Number;

/// The kind of calculation a history entry records.
///
/// The arithmetic vocabulary is closed; anything outside it is carried
/// through as `Custom` so the store can record operations it has no special
/// rendering for.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
    Sqrt,
    Custom(String),
}

impl Operation {
    /// Returns the lowercase wire name of the operation.
    pub fn name(&self) -> &str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
            Operation::Power => "power",
            Operation::Sqrt => "sqrt",
            Operation::Custom(name) => name,
        }
    }

    /// Renders the human-readable expression for a calculation.
    ///
    /// Known binary operations use their infix symbol and `sqrt` its radical
    /// prefix; the fallback arm covers custom operations and any operand
    /// count the rule table does not address.
    pub fn format_expression(&self, operands: &[Number], result: Number) -> String {
        match (self, operands) {
            (Operation::Add, [a, b]) => format!("{} + {} = {}", a, b, result),
            (Operation::Subtract, [a, b]) => format!("{} - {} = {}", a, b, result),
            (Operation::Multiply, [a, b]) => format!("{} x {} = {}", a, b, result),
            (Operation::Divide, [a, b]) => format!("{} ÷ {} = {}", a, b, result),
            (Operation::Power, [a, b]) => format!("{} ^ {} = {}", a, b, result),
            (Operation::Sqrt, [a]) => format!("√{} = {}", a, result),
            _ => {
                let joined = operands
                    .iter()
                    .map(|n| n.to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("{}({}) = {}", self.name(), joined, result)
            }
        }
    }
}

impl From<String> for Operation {
    fn from(name: String) -> Self {
        match name.as_str() {
            "add" => Operation::Add,
            "subtract" => Operation::Subtract,
            "multiply" => Operation::Multiply,
            "divide" => Operation::Divide,
            "power" => Operation::Power,
            "sqrt" => Operation::Sqrt,
            _ => Operation::Custom(name),
        }
    }
}

impl From<&str> for Operation {
    fn from(name: &str) -> Self {
        Operation::from(name.to_string())
    }
}

impl From<Operation> for String {
    fn from(operation: Operation) -> Self {
        operation.name().to_string()
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_operations_use_their_symbol() {
        assert_eq!(
            Operation::Add.format_expression(&[Number::Int(1), Number::Int(2)], Number::Int(3)),
            "1 + 2 = 3"
        );
        assert_eq!(
            Operation::Divide
                .format_expression(&[Number::Int(15), Number::Int(3)], Number::Float(5.0)),
            "15 ÷ 3 = 5.0"
        );
        assert_eq!(
            Operation::Sqrt.format_expression(&[Number::Int(16)], Number::Float(4.0)),
            "√16 = 4.0"
        );
    }

    #[test]
    fn unknown_operations_fall_back_to_call_syntax() {
        let op = Operation::from("modulo");
        assert_eq!(
            op.format_expression(&[Number::Int(7), Number::Int(3)], Number::Int(1)),
            "modulo(7, 3) = 1"
        );
    }

    #[test]
    fn operand_count_mismatch_falls_back_too() {
        assert_eq!(
            Operation::Add.format_expression(&[Number::Int(1)], Number::Int(1)),
            "add(1) = 1"
        );
    }

    #[test]
    fn round_trips_through_its_name() {
        for name in ["add", "subtract", "multiply", "divide", "power", "sqrt"] {
            assert_eq!(Operation::from(name).name(), name);
        }
        assert_eq!(
            Operation::from("modulo"),
            Operation::Custom("modulo".to_string())
        );
    }

    #[test]
    fn serializes_as_a_plain_string() {
        assert_eq!(serde_json::to_string(&Operation::Add).unwrap(), "\"add\"");
        let back: Operation = serde_json::from_str("\"sqrt\"").unwrap();
        assert_eq!(back, Operation::Sqrt);
        let back: Operation = serde_json::from_str("\"modulo\"").unwrap();
        assert_eq!(back, Operation::Custom("modulo".to_string()));
    }
}
