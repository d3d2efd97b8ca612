use std::time::{Duration, Instant};

use crate::game::{Button, GameDisplay, StatusTone, BUTTON_COUNT};

/// How long a pad stays lit after the player presses it.
const FLASH_DURATION: Duration = Duration::from_millis(150);

/// Name entry shown after a qualifying game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamePrompt {
    pub score: u32,
    pub input: String,
    max_len: usize,
}

impl NamePrompt {
    pub fn push(&mut self, c: char) {
        if !c.is_control() && self.input.chars().count() < self.max_len {
            self.input.push(c);
        }
    }

    pub fn pop(&mut self) {
        self.input.pop();
    }
}

/// Everything the terminal view needs to draw, kept up to date by the
/// controller through [`GameDisplay`].
#[derive(Debug)]
pub struct Screen {
    lit: [bool; BUTTON_COUNT],
    flash: Option<(Button, Instant)>,
    interactive: bool,
    start_enabled: bool,
    level: Option<usize>,
    status: Option<(String, StatusTone)>,
    prompt: Option<NamePrompt>,
    notice: Option<String>,
    max_name_len: usize,
}

impl Screen {
    pub fn new(max_name_len: usize) -> Self {
        Screen {
            lit: [false; BUTTON_COUNT],
            flash: None,
            interactive: false,
            start_enabled: true,
            level: None,
            status: None,
            prompt: None,
            notice: None,
            max_name_len,
        }
    }

    /// Whether the pad should be drawn lit at `now`.
    pub fn is_lit(&self, button: Button, now: Instant) -> bool {
        if self.lit[button.index()] {
            return true;
        }
        matches!(self.flash, Some((b, until)) if b == button && now < until)
    }

    /// Briefly light a pad the player pressed.
    pub fn flash(&mut self, button: Button, now: Instant) {
        self.flash = Some((button, now + FLASH_DURATION));
    }

    pub fn interactive(&self) -> bool {
        self.interactive
    }

    pub fn start_enabled(&self) -> bool {
        self.start_enabled
    }

    pub fn level(&self) -> Option<usize> {
        self.level
    }

    pub fn status(&self) -> Option<(&str, StatusTone)> {
        self.status.as_ref().map(|(m, t)| (m.as_str(), *t))
    }

    pub fn prompt(&self) -> Option<&NamePrompt> {
        self.prompt.as_ref()
    }

    pub fn prompt_mut(&mut self) -> Option<&mut NamePrompt> {
        self.prompt.as_mut()
    }

    /// Close the prompt and hand back what was typed.
    pub fn take_prompt(&mut self) -> Option<NamePrompt> {
        self.prompt.take()
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn set_notice(&mut self, notice: Option<String>) {
        self.notice = notice;
    }
}

impl GameDisplay for Screen {
    fn highlight(&mut self, button: Button) {
        self.lit[button.index()] = true;
    }

    fn unhighlight(&mut self, button: Button) {
        self.lit[button.index()] = false;
    }

    fn set_buttons_interactive(&mut self, interactive: bool) {
        self.interactive = interactive;
        if !interactive {
            self.flash = None;
        }
    }

    fn set_start_enabled(&mut self, enabled: bool) {
        self.start_enabled = enabled;
        if !enabled {
            self.notice = None;
        }
    }

    fn show_level(&mut self, level: usize) {
        self.level = Some(level);
        self.lit = [false; BUTTON_COUNT];
    }

    fn show_status(&mut self, message: &str, tone: StatusTone) {
        self.status = Some((message.to_string(), tone));
    }

    fn request_player_name(&mut self, score: u32, suggested: &str) {
        let mut prompt = NamePrompt {
            score,
            input: String::new(),
            max_len: self.max_name_len,
        };
        suggested.chars().for_each(|c| prompt.push(c));
        self.prompt = Some(prompt);
    }
}
