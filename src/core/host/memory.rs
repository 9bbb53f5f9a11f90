//! In-memory host.

use std::collections::HashMap;

use super::Host;
use crate::error::Result;

/// A log line recorded by [`Memory`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Log {
    Info(String),
    Warning(String),
}

/// Host that keeps variables, state and log lines in memory.
///
/// Used to drive both phases without touching the process environment.
#[derive(Debug, Clone, Default)]
pub struct Memory {
    vars: HashMap<String, String>,
    state: HashMap<String, String>,
    exported: Vec<(String, String)>,
    logs: Vec<Log>,
}

impl Memory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an environment variable.
    pub fn with_var(mut self, name: &str, value: &str) -> Self {
        self.vars.insert(name.to_string(), value.to_string());
        self
    }

    /// Seed a saved state value.
    pub fn with_state(mut self, name: &str, value: &str) -> Self {
        self.state.insert(name.to_string(), value.to_string());
        self
    }

    /// Variables exported so far, in order.
    pub fn exported(&self) -> &[(String, String)] {
        &self.exported
    }

    /// Log lines written so far, in order.
    pub fn logs(&self) -> &[Log] {
        &self.logs
    }

    /// Warning messages written so far.
    pub fn warnings(&self) -> Vec<&str> {
        self.logs
            .iter()
            .filter_map(|log| match log {
                Log::Warning(msg) => Some(msg.as_str()),
                Log::Info(_) => None,
            })
            .collect()
    }
}

impl Host for Memory {
    fn var(&self, name: &str) -> Option<String> {
        self.vars.get(name).filter(|v| !v.is_empty()).cloned()
    }

    fn export_var(&mut self, name: &str, value: &str) -> Result<()> {
        self.vars.insert(name.to_string(), value.to_string());
        self.exported.push((name.to_string(), value.to_string()));
        Ok(())
    }

    fn state(&self, name: &str) -> Option<String> {
        self.state.get(name).filter(|v| !v.is_empty()).cloned()
    }

    fn save_state(&mut self, name: &str, value: &str) -> Result<()> {
        self.state.insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn info(&mut self, message: &str) {
        self.logs.push(Log::Info(message.to_string()));
    }

    fn warning(&mut self, message: &str) {
        self.logs.push(Log::Warning(message.to_string()));
    }
}
