//! Game core: the location graph, item placement, item effects and the
//! command interpreter, tied together by [`GameSession`].
//!
//! The world is a fixed, hand-authored dataset (see [`state`]). Nothing here
//! does IO; the binary's shell reads input and prints what the session
//! returns.

pub mod commands;
pub mod effects;
pub mod errors;
pub mod inventory;
pub mod map;
pub mod render;
pub mod session;
pub mod state;
pub mod types;
pub mod unlock;

pub use commands::GameCommand;
pub use errors::{GameError, MoveError};
pub use inventory::ItemRegistry;
pub use map::LocationGraph;
pub use session::{ConsoleNotifier, GameSession, MessageLog, Notifier, Outcome};
pub use types::*;
pub use unlock::{UnlockGate, UnlockTable};
