use configuration::EngineSettings;
use core_types::{CalcError, Number, Operation};
use history::HistoryStore;

use crate::ops;

/// A calculation session: the arithmetic operations plus the history they
/// feed.
///
/// The session owns its [`HistoryStore`], so independent sessions keep
/// independent histories. A caller can hand an existing store in to resume
/// it and take it back out when the session is done.
///
/// Every method validates and computes before it records, so a failed
/// operation never reaches the store.
#[derive(Debug, Default)]
pub struct Calculator {
    settings: EngineSettings,
    history: HistoryStore,
}

impl Calculator {
    /// Creates a session with default settings and an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session with explicit engine settings.
    pub fn with_settings(settings: EngineSettings) -> Self {
        Self {
            settings,
            history: HistoryStore::new(),
        }
    }

    /// Creates a session resuming a caller-provided history.
    pub fn with_history(history: HistoryStore) -> Self {
        Self {
            settings: EngineSettings::default(),
            history,
        }
    }

    /// Read access to the session's history.
    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    /// Mutable access to the session's history (e.g. to clear it).
    pub fn history_mut(&mut self) -> &mut HistoryStore {
        &mut self.history
    }

    /// Consumes the session, handing the history back to the caller.
    pub fn into_history(self) -> HistoryStore {
        self.history
    }

    pub fn add(&mut self, a: Number, b: Number) -> Result<Number, CalcError> {
        let result = ops::add(a, b)?;
        self.history.add_entry(Operation::Add, &[a, b], result);
        Ok(result)
    }

    pub fn subtract(&mut self, a: Number, b: Number) -> Result<Number, CalcError> {
        let result = ops::subtract(a, b)?;
        self.history.add_entry(Operation::Subtract, &[a, b], result);
        Ok(result)
    }

    pub fn multiply(&mut self, a: Number, b: Number) -> Result<Number, CalcError> {
        let result = ops::multiply(a, b)?;
        self.history.add_entry(Operation::Multiply, &[a, b], result);
        Ok(result)
    }

    pub fn divide(&mut self, a: Number, b: Number) -> Result<Number, CalcError> {
        let result = ops::divide(a, b)?;
        self.history.add_entry(Operation::Divide, &[a, b], result);
        Ok(result)
    }

    pub fn power(&mut self, a: Number, b: Number) -> Result<Number, CalcError> {
        let result = ops::power(a, b, self.settings.power_exponent_limit)?;
        self.history.add_entry(Operation::Power, &[a, b], result);
        Ok(result)
    }

    pub fn sqrt(&mut self, a: Number) -> Result<Number, CalcError> {
        let result = ops::sqrt(a)?;
        self.history.add_entry(Operation::Sqrt, &[a], result);
        Ok(result)
    }
}
