//! Replays recorded interactions from a cassette.

use std::collections::{HashMap, VecDeque};

use super::format::{Cassette, Interaction};

/// Key for indexing interactions by port and method.
#[derive(Debug, Clone, Hash, Eq, PartialEq)]
struct PortMethodKey {
    port: String,
    method: String,
}

impl PortMethodKey {
    fn new(port: &str, method: &str) -> Self {
        Self { port: port.to_string(), method: method.to_string() }
    }
}

/// Replays interactions from a loaded cassette, serving them sequentially
/// per port/method pair.
pub struct CassetteReplayer {
    /// Pending interactions per port+method, oldest first.
    queues: HashMap<PortMethodKey, VecDeque<Interaction>>,
    /// How many interactions each port+method has served so far.
    served: HashMap<PortMethodKey, usize>,
}

impl CassetteReplayer {
    /// Create a new replayer from a loaded cassette.
    #[must_use]
    pub fn new(cassette: &Cassette) -> Self {
        let mut queues: HashMap<PortMethodKey, VecDeque<Interaction>> = HashMap::new();
        for interaction in &cassette.interactions {
            let key = PortMethodKey::new(&interaction.port, &interaction.method);
            queues.entry(key).or_default().push_back(interaction.clone());
        }
        Self { queues, served: HashMap::new() }
    }

    /// Take the next interaction for the given port and method.
    ///
    /// # Panics
    ///
    /// Panics if the cassette has no (more) interactions for the given
    /// port/method combination, naming what was requested and what the
    /// cassette does contain.
    pub fn next_interaction(&mut self, port: &str, method: &str) -> Interaction {
        let key = PortMethodKey::new(port, method);

        if !self.queues.contains_key(&key) {
            let mut available: Vec<String> =
                self.queues.keys().map(|k| format!("{}::{}", k.port, k.method)).collect();
            available.sort();
            panic!(
                "Cassette exhausted: no interactions recorded for port={port:?} method={method:?}. \
                 Available port::method pairs: [{}]",
                available.join(", ")
            );
        }

        let queue = self.queues.entry(key.clone()).or_default();
        let served = self.served.entry(key).or_insert(0);
        match queue.pop_front() {
            Some(interaction) => {
                *served += 1;
                interaction
            }
            None => panic!(
                "Cassette exhausted: all {served} interactions for port={port:?} \
                 method={method:?} have been consumed."
            ),
        }
    }
}
