//! Replays recorded interactions from a cassette.

use std::collections::{HashMap, VecDeque};

use serde_json::Value;

use super::format::{Cassette, Interaction};

/// Why a call could not be answered from the cassette.
#[derive(Debug, thiserror::Error)]
pub enum ReplayError {
    /// The cassette never saw this port/method.
    #[error(
        "cassette has no {port}::{method} calls; recorded calls: [{}]",
        .available.join(", ")
    )]
    Unrecorded {
        /// Requested port.
        port: String,
        /// Requested method.
        method: String,
        /// `port::method` pairs the cassette does hold.
        available: Vec<String>,
    },
    /// Every recorded call for this port/method was already served.
    #[error("cassette exhausted: no {port}::{method} calls left (last was seq={last_seq})")]
    Exhausted {
        /// Requested port.
        port: String,
        /// Requested method.
        method: String,
        /// Sequence number of the final recorded call.
        last_seq: u64,
    },
    /// The next recorded call was made with different arguments.
    #[error(
        "cassette mismatch at seq={seq} for {port}::{method}: \
         recorded {recorded}, requested {requested}"
    )]
    InputMismatch {
        /// Requested port.
        port: String,
        /// Requested method.
        method: String,
        /// Sequence number of the recorded call.
        seq: u64,
        /// Input stored in the cassette.
        recorded: Value,
        /// Input of the live request.
        requested: Value,
    },
}

#[derive(Debug, Clone, Hash, Eq, PartialEq)]
struct CallKey {
    port: String,
    method: String,
}

#[derive(Debug, Default)]
struct CallQueue {
    pending: VecDeque<Interaction>,
    last_seq: u64,
}

/// Replays interactions from a loaded cassette.
///
/// Each port/method pair is served in recorded order. A request is answered
/// only if its input agrees with the recorded input.
#[derive(Debug)]
pub struct CassetteReplayer {
    queues: HashMap<CallKey, CallQueue>,
}

impl CassetteReplayer {
    /// Create a new replayer from a loaded cassette.
    #[must_use]
    pub fn new(cassette: &Cassette) -> Self {
        let mut queues: HashMap<CallKey, CallQueue> = HashMap::new();
        for interaction in &cassette.interactions {
            let key = CallKey {
                port: interaction.port.clone(),
                method: interaction.method.clone(),
            };
            let queue = queues.entry(key).or_default();
            queue.last_seq = interaction.seq;
            queue.pending.push_back(interaction.clone());
        }
        Self { queues }
    }

    /// Take the next recorded interaction for `port::method`, checking it against `input`.
    ///
    /// Every field present in the recorded input must equal the same field of
    /// the request. Fields the cassette omits are not checked.
    ///
    /// # Errors
    ///
    /// Returns a [`ReplayError`] when the call was never recorded, the calls
    /// have run out, or the request does not match the recording. A mismatched
    /// interaction is left in place.
    pub fn next_interaction(
        &mut self,
        port: &str,
        method: &str,
        input: &Value,
    ) -> Result<Interaction, ReplayError> {
        let key = CallKey {
            port: port.to_string(),
            method: method.to_string(),
        };
        let Some(queue) = self.queues.get_mut(&key) else {
            let mut available: Vec<String> =
                self.queues.keys().map(|k| format!("{}::{}", k.port, k.method)).collect();
            available.sort();
            return Err(ReplayError::Unrecorded {
                port: key.port,
                method: key.method,
                available,
            });
        };

        let Some(next) = queue.pending.pop_front() else {
            return Err(ReplayError::Exhausted {
                port: key.port,
                method: key.method,
                last_seq: queue.last_seq,
            });
        };

        if !input_matches(&next.input, input) {
            let err = ReplayError::InputMismatch {
                port: key.port,
                method: key.method,
                seq: next.seq,
                recorded: next.input.clone(),
                requested: input.clone(),
            };
            queue.pending.push_front(next);
            return Err(err);
        }

        Ok(next)
    }
}

fn input_matches(recorded: &Value, requested: &Value) -> bool {
    match recorded {
        Value::Object(fields) => {
            fields.iter().all(|(name, value)| requested.get(name) == Some(value))
        }
        other => other == requested,
    }
}
