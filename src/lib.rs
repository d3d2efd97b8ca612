//! # Follow Me
//!
//! A "Simon Says" memory game for the terminal. The computer lights up a
//! growing sequence of pads which the player has to repeat; one mistake ends
//! the game and a good enough run earns a place in the high-score table.
//!
//! ## Modules
//!
//! - [`game`]: Pads, round record, turn-taking controller, display trait
//! - [`sequence`]: Sequence generation and threaded, cancellable playback
//! - [`scores`]: High-score ranking and JSON persistence
//! - [`ui`]: Terminal UI built with Ratatui
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod scores;
pub mod sequence;
pub mod ui;
