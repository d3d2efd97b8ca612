//! Terminal UI: the game loop, the [`Screen`] display implementation, and the
//! pad and score table views.

mod app;
mod game_view;
mod pad_widget;
mod screen;

pub use app::App;
pub use screen::{NamePrompt, Screen};
