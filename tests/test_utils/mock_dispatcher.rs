//! Mock dispatchers

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::Semaphore;
use webterm::execution::{CommandDispatcher, DispatchResult};

/// Replies from a fixed table and records every command it sees
///
/// Commands missing from the table get `Unknown command <name>`, the way
/// the bundled executor answers.
#[derive(Default)]
pub struct ScriptedDispatcher {
    replies: HashMap<String, DispatchResult>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(mut self, command: &str, output: &str) -> Self {
        self.replies
            .insert(command.to_string(), DispatchResult::Success(output.to_string()));
        self
    }

    pub fn fail(mut self, command: &str, description: &str) -> Self {
        self.replies.insert(
            command.to_string(),
            DispatchResult::Failure(description.to_string()),
        );
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CommandDispatcher for ScriptedDispatcher {
    async fn dispatch(&self, command: &str) -> DispatchResult {
        self.calls.lock().unwrap().push(command.to_string());
        self.replies.get(command).cloned().unwrap_or_else(|| {
            let name = command.split_whitespace().next().unwrap_or_default();
            DispatchResult::Success(format!("Unknown command {}", name))
        })
    }
}

/// Holds every dispatch until the test releases it
pub struct GatedDispatcher {
    gate: Arc<Semaphore>,
    in_flight: Mutex<usize>,
    max_in_flight: Mutex<usize>,
}

impl GatedDispatcher {
    pub fn new() -> Self {
        Self {
            gate: Arc::new(Semaphore::new(0)),
            in_flight: Mutex::new(0),
            max_in_flight: Mutex::new(0),
        }
    }

    /// Let one waiting dispatch finish
    pub fn release(&self) {
        self.gate.add_permits(1);
    }

    /// Highest number of dispatches that were pending at once
    pub fn max_in_flight(&self) -> usize {
        *self.max_in_flight.lock().unwrap()
    }
}

#[async_trait]
impl CommandDispatcher for GatedDispatcher {
    async fn dispatch(&self, command: &str) -> DispatchResult {
        {
            let mut in_flight = self.in_flight.lock().unwrap();
            *in_flight += 1;
            let mut max = self.max_in_flight.lock().unwrap();
            *max = (*max).max(*in_flight);
        }

        let permit = self.gate.acquire().await.unwrap();
        permit.forget();

        *self.in_flight.lock().unwrap() -= 1;
        DispatchResult::Success(format!("done {}", command))
    }
}
