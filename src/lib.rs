//! # Kaivoseikkailu - a small Finnish text adventure
//!
//! The player walks between eleven hand-authored locations with the compass
//! words `pohjoinen`, `itä`, `etelä` and `länsi`, and handles items with
//! `poimi`, `käytä` and `pudota`. Using the right item in the right place
//! reveals new items and opens locked locations, until the ring is dropped
//! into the volcano in Mordor.
//!
//! ## Quick Start
//!
//! ```rust
//! use kaivoseikkailu::game::{GameSession, MessageLog};
//!
//! let mut session = GameSession::new().expect("authored world is valid");
//! let mut log = MessageLog::default();
//! session.submit_and_notify("hyppää", &mut log);
//! assert_eq!(log.messages.len(), 1);
//! ```
//!
//! ## Module Organization
//!
//! - [`game`] - world state, command interpreter and item effects
//! - [`config`] - TOML configuration for the terminal shell and logging
//! - [`logutil`] - single-line log escaping

pub mod config;
pub mod game;
pub mod logutil;
