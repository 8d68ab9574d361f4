//! Unlock gates: which item, used where, opens which locked location.
//!
//! The table is checked once when a session starts. Every locked location
//! must have exactly one gate, every gate must open a locked location, and
//! gates that sit behind other gates must not form a cycle.

use std::collections::HashSet;

use log::debug;

use crate::game::errors::GameError;
use crate::game::map::LocationGraph;
use crate::game::types::{ItemKind, LocationId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnlockGate {
    /// Item whose use fires the gate.
    pub trigger: ItemKind,
    /// Where the player has to stand.
    pub at: LocationId,
    /// Location whose lock is cleared.
    pub unlocks: LocationId,
}

impl UnlockGate {
    pub const fn new(trigger: ItemKind, at: usize, unlocks: usize) -> Self {
        Self {
            trigger,
            at: LocationId(at),
            unlocks: LocationId(unlocks),
        }
    }
}

#[derive(Debug, Clone)]
pub struct UnlockTable {
    gates: Vec<UnlockGate>,
}

impl UnlockTable {
    /// Validate `gates` against the initial lock states of `graph`.
    pub fn validate(gates: Vec<UnlockGate>, graph: &LocationGraph) -> Result<Self, GameError> {
        let invalid = |msg: String| Err(GameError::InvalidGateTable(msg));

        let mut triggers = HashSet::new();
        let mut targets = HashSet::new();
        for gate in &gates {
            if !graph.contains(gate.at) || !graph.contains(gate.unlocks) {
                return invalid(format!("gate for {} references an unknown location", gate.trigger));
            }
            if gate.at == gate.unlocks {
                return invalid(format!("gate for {} unlocks its own trigger location", gate.trigger));
            }
            if !triggers.insert(gate.trigger) {
                return invalid(format!("{} triggers more than one gate", gate.trigger));
            }
            if !targets.insert(gate.unlocks) {
                return invalid(format!("location {} is unlocked by more than one gate", gate.unlocks));
            }
            if !graph.is_locked(gate.unlocks) {
                return invalid(format!("location {} is not locked", gate.unlocks));
            }
        }

        for (id, loc) in graph.iter() {
            if loc.locked && !targets.contains(&id) {
                return invalid(format!("locked location {} ({}) has no gate", id, loc.name));
            }
        }

        let table = Self { gates };
        table.check_acyclic()?;
        debug!("Unlock gate table validated: {} gates", table.gates.len());
        Ok(table)
    }

    pub fn gates(&self) -> &[UnlockGate] {
        &self.gates
    }

    pub fn gate_for(&self, trigger: ItemKind) -> Option<&UnlockGate> {
        self.gates.iter().find(|g| g.trigger == trigger)
    }

    /// Gate that must fire before `gate` can be reached, if its trigger
    /// location is itself behind a gate.
    fn prerequisite(&self, gate: &UnlockGate) -> Option<usize> {
        self.gates.iter().position(|g| g.unlocks == gate.at)
    }

    fn check_acyclic(&self) -> Result<(), GameError> {
        for start in 0..self.gates.len() {
            let mut seen = HashSet::new();
            let mut current = start;
            seen.insert(current);
            while let Some(next) = self.prerequisite(&self.gates[current]) {
                if !seen.insert(next) {
                    return Err(GameError::InvalidGateTable(format!(
                        "gate for {} depends on itself",
                        self.gates[start].trigger
                    )));
                }
                current = next;
            }
        }
        Ok(())
    }
}
