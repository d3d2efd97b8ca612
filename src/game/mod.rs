//! Core game logic: the four pads, the round record, the turn-taking
//! [`GameController`] and the display surface it drives.

mod button;
mod controller;
mod display;
mod state;

pub use button::{Button, BUTTON_COUNT};
pub use controller::{GameController, STATUS_GAME_OVER, STATUS_GET_READY, STATUS_PLAYER_TURN};
pub use display::{GameDisplay, StatusTone};
pub use state::{GamePhase, Guess, Round};
