//! Sequence generation and timed playback: pacing policy, the threaded
//! [`SequencePlayer`], and the messages it sends back to the UI thread.

mod pacing;
pub mod playback_msg;
mod player;

pub use pacing::PacingConfig;
pub use playback_msg::{PlaybackEvent, PlaybackStep};
pub use player::{generate_sequence, PlaybackTask, SequencePlayer};

/// Something that can reveal a sequence to the player.
///
/// Implementations report progress as [`PlaybackEvent`]s tagged with the
/// generation returned from [`Sequencer::play`]. Starting a new playback
/// cancels the previous one.
pub trait Sequencer {
    /// Start playing a fresh random sequence of `length` entries.
    fn play(&mut self, length: usize) -> u64;

    /// Abort the running playback, if any. A cancelled playback never finishes.
    fn cancel(&mut self);
}
