use super::Button;

/// Colour category for status messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    /// Watch the pads.
    Alert,
    /// Player may press.
    Go,
    Neutral,
}

/// The surface the game draws on. Implemented by the terminal UI and by test
/// fakes.
pub trait GameDisplay {
    fn highlight(&mut self, button: Button);
    fn unhighlight(&mut self, button: Button);
    fn set_buttons_interactive(&mut self, interactive: bool);
    fn set_start_enabled(&mut self, enabled: bool);
    fn show_level(&mut self, level: usize);
    fn show_status(&mut self, message: &str, tone: StatusTone);

    /// Ask the player for a name to store with `score`. The answer comes back
    /// through `GameController::confirm_player_name` or
    /// `GameController::dismiss_player_name`.
    fn request_player_name(&mut self, score: u32, suggested: &str);
}
