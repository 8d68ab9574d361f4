//! Command parsing and dispatch.
//!
//! Raw input is trimmed and lowercased, then matched against the four
//! direction words (whole input) or the three item verbs (prefix). Item
//! commands take at most one argument: the second whitespace-separated
//! token. Multi-word item names are not supported.

use log::{debug, warn};

use crate::game::effects::{use_item, EffectContext};
use crate::game::errors::GameError;
use crate::game::inventory::{drop_message, take_message};
use crate::game::session::GameSession;
use crate::game::types::Direction;

pub const TAKE_VERB: &str = "poimi";
pub const USE_VERB: &str = "käytä";
pub const DROP_VERB: &str = "pudota";

pub const UNKNOWN_COMMAND_HELP: &str = "Tuntematon komento. Kokeile jotain ilmansuuntaa. Muita hyväksyttäviä komentoja ovat 'poimi', 'käytä' ja 'pudota' - esimerkiksi 'käytä miekka'.";
pub const NOTHING_TO_TAKE: &str = "Täällä ei ole mitään poimittavaa.";
pub const USE_WHAT: &str = "Käytä mitä?";
pub const DROP_WHAT: &str = "Pudota mikä?";
pub const NOT_HELD: &str = "Sinulla ei ole kyseistä esinettä.";
pub const CANNOT_DO: &str = "Et voi tehdä toimintoa.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameCommand {
    Move(Direction),
    Take(Option<String>),
    Use(Option<String>),
    Drop(Option<String>),
    Unknown(String),
}

impl GameCommand {
    /// Parse raw player input.
    pub fn parse(input: &str) -> Self {
        let normalized = input.trim().to_lowercase();

        if let Some(direction) = Direction::from_token(&normalized) {
            return GameCommand::Move(direction);
        }

        let argument = normalized.split_whitespace().nth(1).map(str::to_string);
        if normalized.starts_with(TAKE_VERB) {
            GameCommand::Take(argument)
        } else if normalized.starts_with(USE_VERB) {
            GameCommand::Use(argument)
        } else if normalized.starts_with(DROP_VERB) {
            GameCommand::Drop(argument)
        } else {
            GameCommand::Unknown(normalized)
        }
    }

    pub fn is_item_command(&self) -> bool {
        matches!(
            self,
            GameCommand::Take(_) | GameCommand::Use(_) | GameCommand::Drop(_)
        )
    }
}

/// Apply a parsed command to the session and return the message for the
/// player, if any.
///
/// Player-facing errors get their own message. Anything else is an
/// unexpected fault: it is logged and answered generically, and the world
/// is left as it was before the command.
pub(crate) fn dispatch(session: &mut GameSession, command: &GameCommand) -> Option<String> {
    match run_command(session, command) {
        Ok(message) => message,
        // A failed move stays put, so the current location is the origin
        Err(GameError::NoSuchExit | GameError::Locked) => session
            .locations
            .get(session.current)
            .ok()
            .map(|loc| loc.block_message.clone()),
        Err(e) if e.is_player_facing() => Some(player_message(command, &e)),
        Err(e) => {
            warn!("Command {:?} failed unexpectedly: {}", command, e);
            Some(CANNOT_DO.to_string())
        }
    }
}

fn run_command(session: &mut GameSession, command: &GameCommand) -> Result<Option<String>, GameError> {
    match command {
        GameCommand::Move(direction) => {
            handle_move(session, *direction)?;
            Ok(None)
        }
        c if c.is_item_command() => handle_item_command(session, c).map(Some),
        _ => Err(GameError::UnrecognizedCommand),
    }
}

fn handle_move(session: &mut GameSession, direction: Direction) -> Result<(), GameError> {
    let from = session.current;
    let destination = session.locations.resolve_direction(from, direction);
    let to = match session.locations.attempt_move(from, destination) {
        Ok(to) => to,
        Err(e) => {
            debug!("Move {} from {} failed: {}", direction.token(), from, e);
            return Err(e.into());
        }
    };
    debug!("Moved {} from {} to {}", direction.token(), from, to);
    session.current = to;
    Ok(())
}

fn handle_item_command(session: &mut GameSession, command: &GameCommand) -> Result<String, GameError> {
    match command {
        GameCommand::Take(name) => {
            let item = session.items.take(name.as_deref(), session.current)?;
            Ok(take_message(item.name()))
        }
        GameCommand::Use(name) => {
            let name = name.as_deref().ok_or(GameError::MissingArgument)?;
            let kind = session
                .items
                .in_inventory(name)
                .map(|i| i.kind)
                .ok_or_else(|| GameError::NotInInventory(name.to_string()))?;
            let mut ctx = EffectContext {
                locations: &mut session.locations,
                items: &mut session.items,
                gates: &session.gates,
                current: session.current,
                game_over: &mut session.game_over,
            };
            use_item(kind, &mut ctx)
        }
        GameCommand::Drop(name) => {
            let name = name.as_deref().ok_or(GameError::MissingArgument)?;
            let item = session.items.drop(name, session.current)?;
            Ok(drop_message(item.name()))
        }
        GameCommand::Move(_) | GameCommand::Unknown(_) => Err(GameError::Internal(format!(
            "{:?} routed as an item command",
            command
        ))),
    }
}

fn player_message(command: &GameCommand, error: &GameError) -> String {
    match (command, error) {
        (_, GameError::NothingHere) => NOTHING_TO_TAKE.to_string(),
        (_, GameError::ItemNotFound(name)) => format!("Esinettä {} ei löydy täältä.", name),
        (GameCommand::Drop(_), GameError::MissingArgument) => DROP_WHAT.to_string(),
        (_, GameError::MissingArgument) => USE_WHAT.to_string(),
        (_, GameError::NotInInventory(_)) => NOT_HELD.to_string(),
        (_, GameError::UnrecognizedCommand) => UNKNOWN_COMMAND_HELP.to_string(),
        _ => CANNOT_DO.to_string(),
    }
}
