//! # Abacus
//!
//! A small arithmetic calculation library with calculation-history tracking.
//!
//! The workspace is layered: `core-types` holds the shared vocabulary
//! (numbers, operations, entries, errors), `history` keeps the append-only
//! record of successful calculations, `engine` does the arithmetic and the
//! recording, and `configuration` supplies the engine tunables. This crate
//! re-exports the public surface of all of them.
//!
//! ```
//! use abacus::{Calculator, Number};
//!
//! let mut calc = Calculator::new();
//! let sum = calc.add(Number::Int(2), Number::Int(3))?;
//! assert_eq!(sum, Number::Int(5));
//! assert_eq!(calc.history().recent(None)[0].expression, "2 + 3 = 5");
//! # Ok::<(), abacus::CalcError>(())
//! ```

pub mod telemetry;

// Re-export the public surface of the member crates.
pub use configuration::{ConfigError, EngineSettings, Settings, load_settings};
pub use core_types::{CalcError, HistoryEntry, Number, Operation};
pub use engine::{Calculator, ops};
pub use history::{HistoryError, HistoryStore, HistorySummary};
