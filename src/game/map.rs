//! Location graph: directional exits between locations and per-location locks.
//!
//! Movement is validated against the origin's exits and the destination's
//! lock flag. The graph never reports which of the two checks failed to the
//! player; callers show the origin's block message either way.

use std::ops::Index;

use log::debug;

use crate::game::errors::{GameError, MoveError};
use crate::game::types::{Direction, Location, LocationId};

#[derive(Debug, Clone)]
pub struct LocationGraph {
    locations: Vec<Location>,
}

impl LocationGraph {
    pub fn new(locations: Vec<Location>) -> Self {
        Self { locations }
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    pub fn contains(&self, id: LocationId) -> bool {
        id.0 < self.locations.len()
    }

    pub fn get(&self, id: LocationId) -> Result<&Location, GameError> {
        self.locations
            .get(id.0)
            .ok_or(GameError::UnknownLocation(id.0))
    }

    pub fn iter(&self) -> impl Iterator<Item = (LocationId, &Location)> {
        self.locations
            .iter()
            .enumerate()
            .map(|(i, loc)| (LocationId(i), loc))
    }

    pub fn is_locked(&self, id: LocationId) -> bool {
        self.locations.get(id.0).map(|l| l.locked).unwrap_or(false)
    }

    pub fn lock_states(&self) -> Vec<bool> {
        self.locations.iter().map(|l| l.locked).collect()
    }

    /// Destination of the exit in `direction`, or `None` when there is none.
    pub fn resolve_direction(&self, from: LocationId, direction: Direction) -> Option<LocationId> {
        self.locations
            .get(from.0)
            .and_then(|loc| loc.exits.get(&direction).copied())
    }

    /// Check a move from `from` to `destination`.
    ///
    /// The destination must be the target of one of `from`'s exits and must
    /// not be locked. Nothing is mutated; the caller updates its own
    /// current-location pointer on success.
    pub fn attempt_move(
        &self,
        from: LocationId,
        destination: Option<LocationId>,
    ) -> Result<LocationId, MoveError> {
        let origin = self.locations.get(from.0).ok_or(MoveError::NoSuchExit)?;
        let destination = destination.ok_or(MoveError::NoSuchExit)?;

        if !origin.leads_to(destination) {
            debug!("Move rejected: {} has no exit to {}", from, destination);
            return Err(MoveError::NoSuchExit);
        }

        match self.locations.get(destination.0) {
            Some(dest) if dest.locked => {
                debug!("Move rejected: {} is locked", destination);
                Err(MoveError::Locked)
            }
            Some(_) => Ok(destination),
            None => Err(MoveError::NoSuchExit),
        }
    }

    /// Clear the lock flag. Unlocking an open location is a no-op.
    pub fn unlock(&mut self, id: LocationId) -> Result<(), GameError> {
        let loc = self
            .locations
            .get_mut(id.0)
            .ok_or(GameError::UnknownLocation(id.0))?;
        if loc.locked {
            debug!("Unlocking location {} ({})", id, loc.name);
            loc.locked = false;
        }
        Ok(())
    }
}

impl Index<LocationId> for LocationGraph {
    type Output = Location;

    /// Panics on an id outside the graph, like slice indexing.
    fn index(&self, id: LocationId) -> &Location {
        &self.locations[id.0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_graph() -> LocationGraph {
        LocationGraph::new(vec![
            Location::new("A", "A blocks", "a.jpg")
                .with_exit(Direction::East, 1)
                .with_exit(Direction::South, 2),
            Location::new("B", "B blocks", "b.jpg").with_exit(Direction::West, 0),
            Location::new("C", "C blocks", "c.jpg")
                .with_exit(Direction::North, 0)
                .locked(),
        ])
    }

    #[test]
    fn resolve_direction_returns_none_without_exit() {
        let g = small_graph();
        assert_eq!(g.resolve_direction(LocationId(0), Direction::East), Some(LocationId(1)));
        assert_eq!(g.resolve_direction(LocationId(0), Direction::North), None);
        assert_eq!(g.resolve_direction(LocationId(99), Direction::North), None);
    }

    #[test]
    fn attempt_move_rejects_missing_and_spoofed_exits() {
        let g = small_graph();
        assert_eq!(g.attempt_move(LocationId(0), None), Err(MoveError::NoSuchExit));
        // B exists but has no exit back to C
        assert_eq!(
            g.attempt_move(LocationId(1), Some(LocationId(2))),
            Err(MoveError::NoSuchExit)
        );
        assert_eq!(g.attempt_move(LocationId(0), Some(LocationId(1))), Ok(LocationId(1)));
    }

    #[test]
    fn attempt_move_rejects_locked_destination() {
        let mut g = small_graph();
        assert_eq!(
            g.attempt_move(LocationId(0), Some(LocationId(2))),
            Err(MoveError::Locked)
        );
        g.unlock(LocationId(2)).unwrap();
        assert_eq!(g.attempt_move(LocationId(0), Some(LocationId(2))), Ok(LocationId(2)));
    }

    #[test]
    fn unlock_is_idempotent() {
        let mut once = small_graph();
        once.unlock(LocationId(2)).unwrap();
        let mut twice = small_graph();
        twice.unlock(LocationId(2)).unwrap();
        twice.unlock(LocationId(2)).unwrap();
        assert_eq!(once.lock_states(), twice.lock_states());
        assert_eq!(once.lock_states(), vec![false, false, false]);
    }

    #[test]
    fn unlock_unknown_location_errors() {
        let mut g = small_graph();
        assert_eq!(g.unlock(LocationId(7)), Err(GameError::UnknownLocation(7)));
    }
}
