//! Nullable call executor: records approved calls instead of running them.

use alloy_primitives::Address;
use orochi_multisig::{Call, CallExecutor};
use std::sync::Mutex;

/// Records every call it is asked to execute.
///
/// Thread-safe so one executor can serve wallets driven from several threads.
pub struct NullExecutor {
    calls: Mutex<Vec<(Address, Call)>>,
    failure: Mutex<Option<String>>,
    output: Vec<u8>,
}

impl NullExecutor {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            failure: Mutex::new(None),
            output: Vec::new(),
        }
    }

    /// Return `output` from every successful call.
    pub fn with_output(output: Vec<u8>) -> Self {
        Self {
            output,
            ..Self::new()
        }
    }

    /// Make every following call fail with `reason` until [`Self::succeed`].
    pub fn fail_with(&self, reason: impl Into<String>) {
        *self.failure.lock().unwrap() = Some(reason.into());
    }

    pub fn succeed(&self) {
        *self.failure.lock().unwrap() = None;
    }

    /// Calls executed so far, with the wallet that made them.
    pub fn calls(&self) -> Vec<(Address, Call)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl Default for NullExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl CallExecutor for NullExecutor {
    fn execute(&self, wallet: Address, call: &Call) -> Result<Vec<u8>, String> {
        if let Some(reason) = self.failure.lock().unwrap().clone() {
            return Err(reason);
        }
        self.calls.lock().unwrap().push((wallet, call.clone()));
        Ok(self.output.clone())
    }
}
