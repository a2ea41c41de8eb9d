pub mod enums;
pub mod error;
pub mod number;
pub mod structs;

// Re-export the core types to provide a clean public API.
pub use enums::Operation;
pub use error::CalcError;
pub use number::Number;
pub use structs::HistoryEntry;
