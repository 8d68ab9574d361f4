use log::{debug, info};

use crate::game::commands::{dispatch, GameCommand};
use crate::game::errors::GameError;
use crate::game::inventory::ItemRegistry;
use crate::game::map::LocationGraph;
use crate::game::state::{
    canonical_world_seed, extra_items, starting_items, unlock_gates, START_LOCATION,
};
use crate::game::types::{Item, Location, LocationId, Snapshot};
use crate::game::unlock::UnlockTable;
use crate::logutil::escape_log;

/// # Game Session
///
/// One play-through of the adventure. The session owns every piece of
/// mutable world state: the location graph and its locks, the three item
/// containers, the player's position and the game-over flag.
///
/// Commands go in as raw text through [`GameSession::submit`]; each one is
/// processed to completion before the call returns. The presentation layer
/// reads [`GameSession::snapshot`] afterwards and never mutates the session
/// directly.
///
/// ```rust
/// use kaivoseikkailu::game::GameSession;
///
/// let mut session = GameSession::new().unwrap();
/// session.submit("itä");
/// assert_eq!(session.current_location().name, "Syvä kaivo");
/// ```
#[derive(Debug, Clone)]
pub struct GameSession {
    pub(crate) locations: LocationGraph,
    pub(crate) items: ItemRegistry,
    pub(crate) gates: UnlockTable,
    pub(crate) current: LocationId,
    pub(crate) game_over: bool,
}

/// Result of one submitted command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub command: GameCommand,
    /// Message for the player. Empty messages are reported as `None`.
    pub message: Option<String>,
}

/// Sink for player-facing messages.
pub trait Notifier {
    fn notify(&mut self, text: &str);
}

/// Prints every message on its own line and optionally echoes it to the log.
#[derive(Debug, Default)]
pub struct ConsoleNotifier {
    pub echo_to_log: bool,
}

impl Notifier for ConsoleNotifier {
    fn notify(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        println!("{}", text);
        if self.echo_to_log {
            info!("{}", escape_log(text));
        }
    }
}

/// Collects messages in memory.
#[derive(Debug, Default)]
pub struct MessageLog {
    pub messages: Vec<String>,
}

impl Notifier for MessageLog {
    fn notify(&mut self, text: &str) {
        if !text.is_empty() {
            self.messages.push(text.to_string());
        }
    }
}

impl GameSession {
    /// Start a new play-through of the authored world.
    pub fn new() -> Result<Self, GameError> {
        let locations = LocationGraph::new(canonical_world_seed());
        let gates = UnlockTable::validate(unlock_gates(), &locations)?;
        let items = ItemRegistry::new(starting_items(), extra_items())?;
        let current = LocationId(START_LOCATION);
        locations.get(current)?;
        debug!(
            "New game session: {} locations, {} items in world, {} in pool",
            locations.len(),
            items.world_items().len(),
            items.pool().len()
        );
        Ok(Self {
            locations,
            items,
            gates,
            current,
            game_over: false,
        })
    }

    /// Process one raw command.
    pub fn submit(&mut self, input: &str) -> Outcome {
        let command = GameCommand::parse(input);
        debug!("Command: input={} parsed={:?}", escape_log(input), command);
        let message = dispatch(self, &command).filter(|m| !m.is_empty());
        Outcome { command, message }
    }

    /// Process one raw command and hand its message, if any, to `notifier`.
    pub fn submit_and_notify(&mut self, input: &str, notifier: &mut impl Notifier) -> Outcome {
        let outcome = self.submit(input);
        if let Some(message) = &outcome.message {
            notifier.notify(message);
        }
        outcome
    }

    pub fn current_location_id(&self) -> LocationId {
        self.current
    }

    pub fn current_location(&self) -> &Location {
        &self.locations[self.current]
    }

    pub fn locations(&self) -> &LocationGraph {
        &self.locations
    }

    pub fn items(&self) -> &ItemRegistry {
        &self.items
    }

    pub fn gates(&self) -> &UnlockTable {
        &self.gates
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn snapshot(&self) -> Snapshot {
        let here = self.current_location();
        Snapshot {
            current_location: self.current,
            location_name: here.name.clone(),
            location_image: here.image.clone(),
            locked: self.locations.lock_states(),
            world: self.items.placed_items(),
            visible_item: self.items.first_item_at(self.current).map(Item::placed),
            inventory: self.items.inventory().iter().map(Item::held).collect(),
            pool: self
                .items
                .pool()
                .iter()
                .map(|i| i.name().to_string())
                .collect(),
            game_over: self.game_over,
        }
    }
}
