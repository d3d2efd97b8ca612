use crate::game::Button;

/// One step of a playback, in the order the player should see it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaybackStep {
    Highlight(Button),
    Unhighlight(Button),
    /// Playback ran to the end; carries the full sequence that was shown.
    Finished(Vec<Button>),
}

/// Message sent from the playback thread to the UI thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaybackEvent {
    /// Identifies which `play` call produced this message.
    pub generation: u64,
    pub step: PlaybackStep,
}
