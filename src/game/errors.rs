use thiserror::Error;

/// Errors raised inside the game core.
///
/// None of these are fatal. The command interpreter turns the player-facing
/// kinds into messages and routes everything else through its catch-all.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// Input was neither a direction nor an item command.
    #[error("unrecognized command")]
    UnrecognizedCommand,

    /// No exit in the requested direction, or a destination that the origin
    /// does not lead to.
    #[error("no such exit")]
    NoSuchExit,

    /// Destination is locked.
    #[error("destination is locked")]
    Locked,

    /// `take` without a name found nothing at the current location.
    #[error("nothing to pick up here")]
    NothingHere,

    /// `take <name>` found no such item at the current location.
    #[error("item not found here: {0}")]
    ItemNotFound(String),

    /// The player does not hold the named item.
    #[error("item not in inventory: {0}")]
    NotInInventory(String),

    /// `use` or `drop` without an item name.
    #[error("missing item argument")]
    MissingArgument,

    /// An item with the same name already exists somewhere.
    #[error("duplicate item: {0}")]
    DuplicateItem(String),

    /// Tried to introduce an item that is not waiting in the extra pool.
    #[error("item not in extra pool: {0}")]
    NotInPool(String),

    /// Location index out of range.
    #[error("unknown location: {0}")]
    UnknownLocation(usize),

    /// An item effect expected an unlock gate that the table does not have.
    #[error("no unlock gate for item: {0}")]
    MissingGate(String),

    /// Gate table failed startup validation.
    #[error("invalid unlock gate table: {0}")]
    InvalidGateTable(String),

    /// Anything else that should not happen.
    #[error("internal error: {0}")]
    Internal(String),
}

impl GameError {
    /// Kinds the interpreter reports with a dedicated message. The rest are
    /// unexpected and end up behind the generic "cannot do that" reply.
    pub fn is_player_facing(&self) -> bool {
        matches!(
            self,
            GameError::UnrecognizedCommand
                | GameError::NoSuchExit
                | GameError::Locked
                | GameError::NothingHere
                | GameError::ItemNotFound(_)
                | GameError::NotInInventory(_)
                | GameError::MissingArgument
        )
    }
}

/// Why a move failed. Both variants surface the same block message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("no such exit")]
    NoSuchExit,
    #[error("destination is locked")]
    Locked,
}

impl From<MoveError> for GameError {
    fn from(e: MoveError) -> Self {
        match e {
            MoveError::NoSuchExit => GameError::NoSuchExit,
            MoveError::Locked => GameError::Locked,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn player_facing_split() {
        assert!(GameError::NothingHere.is_player_facing());
        assert!(GameError::NotInInventory("kivi".into()).is_player_facing());
        assert!(!GameError::DuplicateItem("kivi".into()).is_player_facing());
        assert!(!GameError::UnknownLocation(42).is_player_facing());
        assert!(!GameError::Internal("boom".into()).is_player_facing());
    }

    #[test]
    fn move_error_converts() {
        assert_eq!(GameError::from(MoveError::Locked), GameError::Locked);
        assert_eq!(GameError::from(MoveError::NoSuchExit), GameError::NoSuchExit);
    }
}
