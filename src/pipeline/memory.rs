//! pipeline::memory
//!
//! In-memory pipeline for deterministic testing.
//!
//! Inputs are configured up front; outputs and failures are recorded and
//! can be inspected afterwards. Clones share state.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use super::traits::{clean_input, Pipeline, PipelineError};

/// In-memory implementation of [`Pipeline`].
#[derive(Debug, Clone, Default)]
pub struct MemoryPipeline {
    inner: Arc<Mutex<MemoryPipelineInner>>,
}

#[derive(Debug, Default)]
struct MemoryPipelineInner {
    inputs: HashMap<String, String>,
    outputs: Vec<(String, String)>,
    failures: Vec<String>,
}

impl MemoryPipeline {
    /// Create a pipeline with no inputs.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an input value.
    pub fn with_input(self, name: &str, value: &str) -> Self {
        self.lock().inputs.insert(name.to_string(), value.to_string());
        self
    }

    /// The last value reported for an output.
    pub fn output(&self, name: &str) -> Option<String> {
        self.lock()
            .outputs
            .iter()
            .rev()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.clone())
    }

    /// Every output reported, in order.
    pub fn outputs(&self) -> Vec<(String, String)> {
        self.lock().outputs.clone()
    }

    /// Every failure message reported, in order.
    pub fn failures(&self) -> Vec<String> {
        self.lock().failures.clone()
    }

    fn lock(&self) -> MutexGuard<'_, MemoryPipelineInner> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Pipeline for MemoryPipeline {
    fn input(&self, name: &str) -> Result<Option<String>, PipelineError> {
        Ok(clean_input(self.lock().inputs.get(name).cloned()))
    }

    fn set_output(&self, name: &str, value: &str) -> Result<(), PipelineError> {
        self.lock()
            .outputs
            .push((name.to_string(), value.to_string()));
        Ok(())
    }

    fn set_failed(&self, message: &str) -> Result<(), PipelineError> {
        self.lock().failures.push(message.to_string());
        Ok(())
    }
}
