use crate::error::ScoreStoreError;
use crate::scores::ScoreStore;
use crate::sequence::{PlaybackEvent, PlaybackStep, Sequencer};

use super::display::{GameDisplay, StatusTone};
use super::state::{GamePhase, Guess, Round};
use super::Button;

pub const STATUS_GET_READY: &str = "Get ready...";
pub const STATUS_PLAYER_TURN: &str = "Your turn!";
pub const STATUS_GAME_OVER: &str = "Game over";

const FALLBACK_PLAYER_NAME: &str = "Player";

/// Owns the game's turn-taking state machine.
///
/// Input and playback progress both arrive through `&mut self` calls from a
/// single thread, so no locking is involved.
pub struct GameController<D, S, P> {
    display: D,
    scores: S,
    sequencer: P,
    phase: GamePhase,
    round: Round,
    /// Generation of the playback we are waiting on.
    awaited_playback: Option<u64>,
    last_score: Option<u32>,
    /// Score waiting for the player to enter a name.
    pending_score: Option<u32>,
}

impl<D, S, P> GameController<D, S, P>
where
    D: GameDisplay,
    S: ScoreStore,
    P: Sequencer,
{
    pub fn new(mut display: D, scores: S, sequencer: P) -> Self {
        display.set_buttons_interactive(false);
        display.set_start_enabled(true);
        GameController {
            display,
            scores,
            sequencer,
            phase: GamePhase::GameOver,
            round: Round::default(),
            awaited_playback: None,
            last_score: None,
            pending_score: None,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Length of the sequence being played or reproduced; 0 before the first game.
    pub fn level(&self) -> usize {
        self.round.level()
    }

    pub fn cursor(&self) -> usize {
        self.round.cursor()
    }

    /// Final score of the most recently finished game.
    pub fn last_score(&self) -> Option<u32> {
        self.last_score
    }

    pub fn pending_score(&self) -> Option<u32> {
        self.pending_score
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    pub fn scores(&self) -> &S {
        &self.scores
    }

    /// Begin a new game at level 1. Ignored while a game is running.
    pub fn start(&mut self) {
        if self.phase != GamePhase::GameOver {
            tracing::debug!(phase = ?self.phase, "start ignored, game in progress");
            return;
        }
        tracing::info!("new game");
        self.pending_score = None;
        self.display.set_start_enabled(false);
        self.round.reset();
        self.begin_computer_turn(1);
    }

    /// Handle a pad press by index. Only meaningful during the player's turn;
    /// anything else, including unknown indices, is dropped.
    pub fn on_button_pressed(&mut self, index: usize) {
        if self.phase != GamePhase::PlayerTurn {
            tracing::trace!(index, phase = ?self.phase, "press ignored");
            return;
        }
        let Some(button) = Button::from_index(index) else {
            tracing::warn!(index, "press on unknown button ignored");
            return;
        };

        match self.round.guess(button) {
            Guess::Correct => {
                tracing::debug!(cursor = self.round.cursor(), "correct press");
            }
            Guess::Complete => {
                let next = self.round.sequence().len() + 1;
                tracing::debug!(cleared = self.round.level(), "level cleared");
                self.begin_computer_turn(next);
            }
            Guess::Wrong => self.game_over(),
        }
    }

    /// Playback finished: hand the revealed sequence to the player.
    pub fn on_sequence_ready(&mut self, sequence: Vec<Button>) {
        if self.phase != GamePhase::ComputerTurn {
            tracing::debug!(phase = ?self.phase, "sequence ignored outside computer turn");
            return;
        }
        if sequence.len() != self.round.level() {
            tracing::warn!(
                expected = self.round.level(),
                got = sequence.len(),
                "sequence length does not match level, replaying"
            );
            self.sequencer.cancel();
            self.awaited_playback = Some(self.sequencer.play(self.round.level()));
            return;
        }

        self.awaited_playback = None;
        self.round.arm(sequence);
        self.phase = GamePhase::PlayerTurn;
        self.display.set_buttons_interactive(true);
        self.display.show_status(STATUS_PLAYER_TURN, StatusTone::Go);
    }

    /// Route a message from the playback thread. Messages from a playback we
    /// are no longer waiting on are dropped.
    pub fn handle_playback(&mut self, event: PlaybackEvent) {
        if self.awaited_playback != Some(event.generation) {
            tracing::trace!(generation = event.generation, "stale playback event dropped");
            return;
        }
        match event.step {
            PlaybackStep::Highlight(button) => self.display.highlight(button),
            PlaybackStep::Unhighlight(button) => self.display.unhighlight(button),
            PlaybackStep::Finished(sequence) => self.on_sequence_ready(sequence),
        }
    }

    /// Store the pending score under `name`. Blank names fall back to the
    /// previous player's name.
    pub fn confirm_player_name(&mut self, name: &str) -> Result<(), ScoreStoreError> {
        let Some(score) = self.pending_score.take() else {
            return Ok(());
        };

        let trimmed = name.trim();
        let name = if !trimmed.is_empty() {
            trimmed.to_string()
        } else {
            let last = self.scores.last_player_name();
            if last.is_empty() {
                FALLBACK_PLAYER_NAME.to_string()
            } else {
                last
            }
        };

        self.scores.save_score(&name, score)
    }

    pub fn dismiss_player_name(&mut self) {
        if let Some(score) = self.pending_score.take() {
            tracing::debug!(score, "name prompt dismissed, score not saved");
        }
    }

    /// Tear down a running game without scoring it.
    pub fn abandon(&mut self) {
        self.sequencer.cancel();
        self.awaited_playback = None;
        self.pending_score = None;
        if self.phase != GamePhase::GameOver {
            tracing::info!(level = self.round.level(), "game abandoned");
        }
        self.round.reset();
        self.phase = GamePhase::GameOver;
        self.display.set_buttons_interactive(false);
        self.display.set_start_enabled(true);
    }

    fn begin_computer_turn(&mut self, level: usize) {
        self.phase = GamePhase::ComputerTurn;
        self.display.set_buttons_interactive(false);
        self.round.begin(level);
        self.display.show_level(level);
        self.display.show_status(STATUS_GET_READY, StatusTone::Alert);
        self.awaited_playback = Some(self.sequencer.play(level));
    }

    fn game_over(&mut self) {
        let score = self.round.score();
        tracing::info!(level = self.round.level(), score, "game over");

        self.sequencer.cancel();
        self.awaited_playback = None;
        self.display.show_status(STATUS_GAME_OVER, StatusTone::Neutral);
        self.display.set_buttons_interactive(false);
        self.phase = GamePhase::GameOver;
        self.round.reset();
        self.last_score = Some(score);
        self.display.set_start_enabled(true);

        if self.scores.is_high_score(score) {
            self.pending_score = Some(score);
            let suggested = self.scores.last_player_name();
            self.display.request_player_name(score, &suggested);
        }
    }
}
