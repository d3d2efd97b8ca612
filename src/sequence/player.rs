use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::JoinHandle;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::game::{Button, BUTTON_COUNT};

use super::pacing::PacingConfig;
use super::playback_msg::{PlaybackEvent, PlaybackStep};
use super::Sequencer;

/// Draw `length` pads independently and uniformly.
pub fn generate_sequence<R: Rng>(rng: &mut R, length: usize) -> Vec<Button> {
    (0..length)
        .map(|_| Button::ALL[rng.random_range(0..BUTTON_COUNT)])
        .collect()
}

/// A running playback thread. Dropping the task cancels it.
pub struct PlaybackTask {
    generation: u64,
    cancel_tx: Option<Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl PlaybackTask {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// True once the thread has exited, whether it completed or was cancelled.
    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().map_or(true, |h| h.is_finished())
    }

    /// Stop the thread and wait for it. No event is sent after this returns.
    pub fn cancel(&mut self) {
        // Dropping the sender wakes the pending `recv_timeout`.
        self.cancel_tx.take();
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                tracing::warn!(generation = self.generation, "playback thread panicked");
            }
        }
    }
}

impl Drop for PlaybackTask {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Generates sequences and plays them back on a background thread, reporting
/// each step over a channel.
pub struct SequencePlayer {
    pacing: PacingConfig,
    rng: StdRng,
    events: Sender<PlaybackEvent>,
    next_generation: u64,
    active: Option<PlaybackTask>,
}

impl SequencePlayer {
    pub fn new(pacing: PacingConfig, events: Sender<PlaybackEvent>) -> Self {
        let rng = match pacing.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        SequencePlayer {
            pacing,
            rng,
            events,
            next_generation: 1,
            active: None,
        }
    }

    /// The playback currently running, if any.
    pub fn active(&self) -> Option<&PlaybackTask> {
        self.active.as_ref()
    }
}

impl Sequencer for SequencePlayer {
    fn play(&mut self, length: usize) -> u64 {
        self.cancel();

        let generation = self.next_generation;
        self.next_generation += 1;

        let sequence = generate_sequence(&mut self.rng, length);
        let pacing = self.pacing.clone();
        let events = self.events.clone();
        let (cancel_tx, cancel_rx) = mpsc::channel::<()>();

        tracing::debug!(generation, length, "starting playback");

        let handle = std::thread::spawn(move || {
            let playback = Playback {
                generation,
                events,
                cancel_rx,
            };
            if !playback.run(&pacing, sequence) {
                tracing::debug!(generation, "playback cancelled");
            }
        });

        self.active = Some(PlaybackTask {
            generation,
            cancel_tx: Some(cancel_tx),
            handle: Some(handle),
        });
        generation
    }

    fn cancel(&mut self) {
        if let Some(mut task) = self.active.take() {
            task.cancel();
        }
    }
}

impl Drop for SequencePlayer {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// State owned by the playback thread.
struct Playback {
    generation: u64,
    events: Sender<PlaybackEvent>,
    cancel_rx: mpsc::Receiver<()>,
}

impl Playback {
    /// Returns false if cancelled or if nobody is listening anymore.
    fn run(&self, pacing: &PacingConfig, sequence: Vec<Button>) -> bool {
        let length = sequence.len();
        let click_delay = pacing.click_delay(length);
        let press_duration = pacing.press_duration(length);

        if !self.wait(pacing.lead_in()) {
            return false;
        }

        for &button in &sequence {
            if !self.wait(click_delay) || !self.emit(PlaybackStep::Highlight(button)) {
                return false;
            }
            if !self.wait(press_duration) || !self.emit(PlaybackStep::Unhighlight(button)) {
                return false;
            }
        }

        self.emit(PlaybackStep::Finished(sequence))
    }

    /// Sleep for `duration` unless cancelled first.
    fn wait(&self, duration: Duration) -> bool {
        matches!(
            self.cancel_rx.recv_timeout(duration),
            Err(RecvTimeoutError::Timeout)
        )
    }

    fn emit(&self, step: PlaybackStep) -> bool {
        tracing::trace!(generation = self.generation, ?step, "playback step");
        self.events
            .send(PlaybackEvent {
                generation: self.generation,
                step,
            })
            .is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc::Receiver;

    fn instant_pacing(seed: u64) -> PacingConfig {
        PacingConfig {
            lead_in_ms: 0,
            slow_click_delay_ms: 0,
            fast_click_delay_ms: 0,
            long_press_ms: 0,
            short_press_ms: 0,
            seed: Some(seed),
            ..PacingConfig::default()
        }
    }

    fn slow_pacing() -> PacingConfig {
        PacingConfig {
            lead_in_ms: 60_000,
            seed: Some(7),
            ..PacingConfig::default()
        }
    }

    fn collect_until_finished(rx: &Receiver<PlaybackEvent>) -> Vec<PlaybackEvent> {
        let mut events = Vec::new();
        loop {
            let event = rx
                .recv_timeout(Duration::from_secs(5))
                .expect("playback should finish");
            let done = matches!(event.step, PlaybackStep::Finished(_));
            events.push(event);
            if done {
                return events;
            }
        }
    }

    #[test]
    fn test_generate_sequence_length_and_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for length in 1..=50 {
            let sequence = generate_sequence(&mut rng, length);
            assert_eq!(sequence.len(), length);
            assert!(sequence.iter().all(|b| b.index() < BUTTON_COUNT));
        }
    }

    #[test]
    fn test_generate_sequence_is_seeded() {
        let a = generate_sequence(&mut StdRng::seed_from_u64(9), 20);
        let b = generate_sequence(&mut StdRng::seed_from_u64(9), 20);
        assert_eq!(a, b);
    }

    #[test]
    fn test_generate_sequence_uses_every_button() {
        let mut rng = StdRng::seed_from_u64(1);
        let sequence = generate_sequence(&mut rng, 400);
        for button in Button::ALL {
            assert!(sequence.contains(&button), "{} never drawn", button.name());
        }
    }

    #[test]
    fn test_play_emits_ordered_pairs_then_finishes() {
        let (tx, rx) = mpsc::channel();
        let mut player = SequencePlayer::new(instant_pacing(3), tx);

        let generation = player.play(4);
        let events = collect_until_finished(&rx);

        assert_eq!(events.len(), 4 * 2 + 1);
        assert!(events.iter().all(|e| e.generation == generation));

        let sequence = match &events.last().unwrap().step {
            PlaybackStep::Finished(sequence) => sequence.clone(),
            other => panic!("expected Finished, got {:?}", other),
        };
        assert_eq!(sequence.len(), 4);

        for (i, &button) in sequence.iter().enumerate() {
            assert_eq!(events[2 * i].step, PlaybackStep::Highlight(button));
            assert_eq!(events[2 * i + 1].step, PlaybackStep::Unhighlight(button));
        }
    }

    #[test]
    fn test_each_play_draws_a_fresh_sequence() {
        let (tx, rx) = mpsc::channel();
        let mut player = SequencePlayer::new(instant_pacing(11), tx);

        let mut sequences = Vec::new();
        for _ in 0..5 {
            player.play(12);
            if let Some(PlaybackStep::Finished(sequence)) =
                collect_until_finished(&rx).pop().map(|e| e.step)
            {
                sequences.push(sequence);
            }
        }

        assert_eq!(sequences.len(), 5);
        assert!(sequences.windows(2).any(|w| w[0] != w[1]));
    }

    #[test]
    fn test_cancel_stops_without_events() {
        let (tx, rx) = mpsc::channel();
        let mut player = SequencePlayer::new(slow_pacing(), tx);

        player.play(3);
        player.cancel();
        assert!(player.active().is_none());

        // The player still holds a sender, so the channel stays open but empty.
        assert!(rx.try_recv().is_err());
        drop(player);
        assert!(matches!(
            rx.recv_timeout(Duration::from_secs(5)),
            Err(RecvTimeoutError::Disconnected)
        ));
    }

    #[test]
    fn test_new_play_replaces_running_one() {
        let (tx, _rx) = mpsc::channel();
        let mut player = SequencePlayer::new(slow_pacing(), tx);

        let first = player.play(2);
        let second = player.play(3);

        assert!(second > first);
        assert_eq!(player.active().map(|t| t.generation()), Some(second));
    }

    #[test]
    fn test_dropping_task_cancels_it() {
        let (tx, rx) = mpsc::channel();
        let mut player = SequencePlayer::new(slow_pacing(), tx);

        player.play(1);
        let task = player.active.take().expect("task running");
        drop(task);

        drop(player);
        assert!(matches!(
            rx.recv_timeout(Duration::from_secs(5)),
            Err(RecvTimeoutError::Disconnected)
        ));
    }

    #[test]
    fn test_playback_stops_when_receiver_dropped() {
        let (tx, rx) = mpsc::channel();
        let mut player = SequencePlayer::new(instant_pacing(5), tx);
        drop(rx);

        player.play(3);
        let deadline = std::time::Instant::now() + Duration::from_secs(5);
        while !player.active().map_or(true, |t| t.is_finished()) {
            assert!(std::time::Instant::now() < deadline, "thread did not exit");
            std::thread::sleep(Duration::from_millis(5));
        }
    }
}
