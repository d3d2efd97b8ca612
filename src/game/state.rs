use super::Button;

/// Whose turn it is. `GameOver` doubles as the idle state before the first game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    #[default]
    GameOver,
    ComputerTurn,
    PlayerTurn,
}

/// Result of checking one player press against the round's sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guess {
    /// Matched, more entries remain.
    Correct,
    /// Matched the final entry.
    Complete,
    Wrong,
}

/// The sequence being played for the current level and the player's progress
/// through it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Round {
    level: usize,
    sequence: Vec<Button>,
    cursor: usize,
}

impl Round {
    /// Begin a new level. The old sequence is discarded; the new one arrives
    /// through [`Round::arm`] once playback has finished.
    pub fn begin(&mut self, level: usize) {
        self.level = level;
        self.sequence.clear();
        self.cursor = 0;
    }

    /// Install the played sequence and rewind the cursor for the player's turn.
    pub fn arm(&mut self, sequence: Vec<Button>) {
        self.sequence = sequence;
        self.cursor = 0;
    }

    /// Forget everything, back to the state before a game.
    pub fn reset(&mut self) {
        *self = Round::default();
    }

    pub fn level(&self) -> usize {
        self.level
    }

    pub fn sequence(&self) -> &[Button] {
        &self.sequence
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The entry the player has to press next, if any remain.
    pub fn expected(&self) -> Option<Button> {
        self.sequence.get(self.cursor).copied()
    }

    /// Levels fully cleared before the current one.
    pub fn completed_levels(&self) -> usize {
        self.level.saturating_sub(1)
    }

    /// `completed_levels` as a score, saturating at `u32::MAX`.
    pub fn score(&self) -> u32 {
        u32::try_from(self.completed_levels()).unwrap_or(u32::MAX)
    }

    /// Check a press against the next expected entry, advancing on a match.
    pub fn guess(&mut self, button: Button) -> Guess {
        match self.expected() {
            Some(expected) if expected == button => {
                self.cursor += 1;
                if self.cursor == self.sequence.len() {
                    Guess::Complete
                } else {
                    Guess::Correct
                }
            }
            _ => Guess::Wrong,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn armed(level: usize, sequence: &[Button]) -> Round {
        let mut round = Round::default();
        round.begin(level);
        round.arm(sequence.to_vec());
        round
    }

    #[test]
    fn test_initial_round() {
        let round = Round::default();
        assert_eq!(round.level(), 0);
        assert_eq!(round.cursor(), 0);
        assert!(round.sequence().is_empty());
        assert_eq!(GamePhase::default(), GamePhase::GameOver);
    }

    #[test]
    fn test_begin_clears_sequence() {
        let mut round = armed(2, &[Button::Red, Button::Blue]);
        round.guess(Button::Red);

        round.begin(3);
        assert_eq!(round.level(), 3);
        assert!(round.sequence().is_empty());
        assert_eq!(round.cursor(), 0);
    }

    #[test]
    fn test_guess_advances_then_completes() {
        let mut round = armed(3, &[Button::Red, Button::Blue, Button::Green]);

        assert_eq!(round.guess(Button::Red), Guess::Correct);
        assert_eq!(round.cursor(), 1);
        assert_eq!(round.guess(Button::Blue), Guess::Correct);
        assert_eq!(round.guess(Button::Green), Guess::Complete);
        assert_eq!(round.cursor(), 3);
    }

    #[test]
    fn test_wrong_guess_keeps_cursor() {
        let mut round = armed(2, &[Button::Yellow, Button::Yellow]);

        assert_eq!(round.guess(Button::Yellow), Guess::Correct);
        assert_eq!(round.guess(Button::Green), Guess::Wrong);
        assert_eq!(round.cursor(), 1);
    }

    #[test]
    fn test_guess_on_unarmed_round_is_wrong() {
        let mut round = Round::default();
        round.begin(1);
        assert_eq!(round.guess(Button::Green), Guess::Wrong);
    }

    #[test]
    fn test_completed_levels() {
        assert_eq!(armed(1, &[Button::Red]).completed_levels(), 0);
        assert_eq!(
            armed(3, &[Button::Red, Button::Blue, Button::Green]).completed_levels(),
            2
        );
        assert_eq!(Round::default().completed_levels(), 0);
    }

    #[test]
    fn test_score_matches_completed_levels() {
        let mut round = Round::default();
        assert_eq!(round.score(), 0);
        round.begin(7);
        assert_eq!(round.score(), 6);
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn test_score_saturates() {
        let mut round = Round::default();
        round.begin(usize::MAX);
        assert_eq!(round.score(), u32::MAX);
        round.begin(u32::MAX as usize + 2);
        assert_eq!(round.score(), u32::MAX);
    }
}
