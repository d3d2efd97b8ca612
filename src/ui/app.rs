use std::io;
use std::sync::mpsc::{self, Receiver};
use std::time::{Duration, Instant};

use crate::config::AppConfig;
use crate::error::ScoreStoreError;
use crate::game::{Button, GameController, GamePhase};
use crate::scores::{JsonScoreStore, ScoreStore};
use crate::sequence::{PlaybackEvent, SequencePlayer};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};

use super::screen::Screen;

/// Input poll interval; also bounds how late a playback step is drawn.
const POLL_INTERVAL: Duration = Duration::from_millis(30);

type TuiController = GameController<Screen, JsonScoreStore, SequencePlayer>;

pub struct App {
    controller: TuiController,
    playback_rx: Receiver<PlaybackEvent>,
    should_quit: bool,
}

impl App {
    pub fn new(config: &AppConfig) -> Result<Self, ScoreStoreError> {
        let (playback_tx, playback_rx) = mpsc::channel();
        let player = SequencePlayer::new(config.pacing.clone(), playback_tx);
        let store = JsonScoreStore::open(&config.scores)?;
        let screen = Screen::new(config.scores.max_name_len);

        Ok(App {
            controller: GameController::new(screen, store, player),
            playback_rx,
            should_quit: false,
        })
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        loop {
            self.drain_playback();

            terminal
                .draw(|f| self.render(f))
                .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }

        self.controller.abandon();
        Ok(())
    }

    /// Apply every playback step that arrived since the last frame, in order.
    fn drain_playback(&mut self) {
        while let Ok(event) = self.playback_rx.try_recv() {
            self.controller.handle_playback(event);
        }
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        if self.controller.display().prompt().is_some() {
            self.handle_prompt_key(key);
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.controller.start();
            }
            KeyCode::Char(c @ '1'..='4') => {
                let index = (c as usize) - ('1' as usize);
                self.press(index);
            }
            _ => {}
        }
    }

    fn press(&mut self, index: usize) {
        if self.controller.phase() == GamePhase::PlayerTurn {
            if let Some(button) = Button::from_index(index) {
                self.controller.display_mut().flash(button, Instant::now());
            }
        }
        self.controller.on_button_pressed(index);
    }

    fn handle_prompt_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => {
                let Some(prompt) = self.controller.display_mut().take_prompt() else {
                    return;
                };
                let notice = match self.controller.confirm_player_name(&prompt.input) {
                    Ok(()) => format!("Saved score {}", prompt.score),
                    Err(e) => {
                        tracing::warn!(error = %e, "failed to save high score");
                        format!("Could not save score: {}", e)
                    }
                };
                self.controller.display_mut().set_notice(Some(notice));
            }
            KeyCode::Esc => {
                self.controller.display_mut().take_prompt();
                self.controller.dismiss_player_name();
            }
            KeyCode::Backspace => {
                if let Some(prompt) = self.controller.display_mut().prompt_mut() {
                    prompt.pop();
                }
            }
            KeyCode::Char(c) => {
                if let Some(prompt) = self.controller.display_mut().prompt_mut() {
                    prompt.push(c);
                }
            }
            _ => {}
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        let scores = self.controller.scores().top_scores();
        super::game_view::render(frame, self.controller.display(), &scores);
    }
}
