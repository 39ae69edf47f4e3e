//! Playback controller
//!
//! Single owner of the current trace position. The UI event loop calls
//! [`PlaybackController::tick`] with the current instant; every other method is
//! a direct user command. Manual navigation always pauses autoplay, so a timer
//! tick can never race a scrub.

use crate::config::{INTERVAL_STEP, MAX_INTERVAL, MIN_INTERVAL};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    Paused,
    Playing,
}

#[derive(Debug, Clone)]
pub struct PlaybackController {
    /// `None` is "before any step"
    position: Option<usize>,
    len: usize,
    state: PlaybackState,
    interval: Duration,
    last_tick: Option<Instant>,
}

impl PlaybackController {
    pub fn new(len: usize, interval: Duration) -> Self {
        PlaybackController {
            position: None,
            len,
            state: PlaybackState::Paused,
            interval: interval.clamp(MIN_INTERVAL, MAX_INTERVAL),
            last_tick: None,
        }
    }

    pub fn position(&self) -> Option<usize> {
        self.position
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn at_end(&self) -> bool {
        match self.len.checked_sub(1) {
            Some(last) => self.position == Some(last),
            None => true,
        }
    }

    /// Start autoplay; restarts from the beginning when already at the end
    pub fn play(&mut self, now: Instant) {
        if self.is_empty() {
            return;
        }
        if self.at_end() {
            self.position = None;
        }
        self.state = PlaybackState::Playing;
        self.last_tick = Some(now);
    }

    pub fn pause(&mut self) {
        self.state = PlaybackState::Paused;
        self.last_tick = None;
    }

    pub fn toggle(&mut self, now: Instant) {
        match self.state {
            PlaybackState::Playing => self.pause(),
            PlaybackState::Paused => self.play(now),
        }
    }

    /// Advance one step if playing and the interval elapsed.
    ///
    /// Returns whether the position changed. Reaching the last step pauses.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.is_playing() {
            return false;
        }
        let due = self
            .last_tick
            .map_or(true, |last| now.saturating_duration_since(last) >= self.interval);
        if !due {
            return false;
        }
        self.last_tick = Some(now);
        let moved = self.advance();
        if self.at_end() {
            self.pause();
        }
        moved
    }

    pub fn step_forward(&mut self) -> bool {
        self.pause();
        self.advance()
    }

    pub fn step_backward(&mut self) -> bool {
        self.pause();
        match self.position {
            None => false,
            Some(0) => {
                self.position = None;
                true
            }
            Some(p) => {
                self.position = Some(p - 1);
                true
            }
        }
    }

    /// Move `count` steps forward, stopping at the last step
    pub fn step_by(&mut self, count: usize) -> bool {
        self.pause();
        let mut moved = false;
        for _ in 0..count {
            if !self.advance() {
                break;
            }
            moved = true;
        }
        moved
    }

    /// Jump to `index`, clamped into the trace
    pub fn seek(&mut self, index: usize) {
        self.pause();
        self.position = self.len.checked_sub(1).map(|last| index.min(last));
    }

    pub fn jump_to_start(&mut self) {
        self.pause();
        self.position = None;
    }

    pub fn jump_to_end(&mut self) {
        self.pause();
        self.position = self.len.checked_sub(1);
    }

    /// Point at a new trace of `len` steps, back before the first step
    pub fn reset(&mut self, len: usize) {
        self.pause();
        self.len = len;
        self.position = None;
    }

    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval.clamp(MIN_INTERVAL, MAX_INTERVAL);
    }

    pub fn faster(&mut self) {
        self.set_interval(self.interval.saturating_sub(INTERVAL_STEP));
    }

    pub fn slower(&mut self) {
        self.set_interval(self.interval + INTERVAL_STEP);
    }

    fn advance(&mut self) -> bool {
        let next = self.position.map_or(0, |p| p + 1);
        if next < self.len {
            self.position = Some(next);
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller(len: usize) -> PlaybackController {
        PlaybackController::new(len, Duration::from_millis(100))
    }

    #[test]
    fn test_stepping_clamps_at_both_ends() {
        let mut pc = controller(2);
        assert!(!pc.step_backward());
        assert!(pc.step_forward());
        assert!(pc.step_forward());
        assert_eq!(pc.position(), Some(1));
        assert!(!pc.step_forward());
        assert_eq!(pc.position(), Some(1));

        assert!(pc.step_backward());
        assert!(pc.step_backward());
        assert_eq!(pc.position(), None);
    }

    #[test]
    fn test_tick_waits_for_interval() {
        let start = Instant::now();
        let mut pc = controller(5);
        pc.play(start);
        assert!(!pc.tick(start + Duration::from_millis(50)));
        assert!(pc.tick(start + Duration::from_millis(100)));
        assert_eq!(pc.position(), Some(0));
        assert!(!pc.tick(start + Duration::from_millis(150)));
        assert!(pc.tick(start + Duration::from_millis(200)));
        assert_eq!(pc.position(), Some(1));
    }

    #[test]
    fn test_autoplay_pauses_at_end() {
        let start = Instant::now();
        let mut pc = controller(2);
        pc.play(start);
        pc.tick(start + Duration::from_millis(100));
        pc.tick(start + Duration::from_millis(200));
        assert_eq!(pc.position(), Some(1));
        assert_eq!(pc.state(), PlaybackState::Paused);
        assert!(!pc.tick(start + Duration::from_millis(300)));
    }

    #[test]
    fn test_play_at_end_restarts() {
        let mut pc = controller(3);
        pc.jump_to_end();
        pc.play(Instant::now());
        assert_eq!(pc.position(), None);
        assert!(pc.is_playing());
    }

    #[test]
    fn test_manual_step_pauses() {
        let mut pc = controller(3);
        pc.play(Instant::now());
        pc.step_forward();
        assert!(!pc.is_playing());
    }

    #[test]
    fn test_seek_clamps() {
        let mut pc = controller(4);
        pc.seek(99);
        assert_eq!(pc.position(), Some(3));
        pc.jump_to_start();
        assert_eq!(pc.position(), None);
    }

    #[test]
    fn test_empty_trace() {
        let mut pc = controller(0);
        pc.play(Instant::now());
        assert!(!pc.is_playing());
        assert!(!pc.step_forward());
        pc.seek(3);
        assert_eq!(pc.position(), None);
    }

    #[test]
    fn test_speed_bounds() {
        let mut pc = PlaybackController::new(1, MIN_INTERVAL);
        pc.faster();
        assert_eq!(pc.interval(), MIN_INTERVAL);
        pc.set_interval(Duration::from_secs(60));
        assert_eq!(pc.interval(), MAX_INTERVAL);
        pc.slower();
        assert_eq!(pc.interval(), MAX_INTERVAL);
    }

    #[test]
    fn test_step_by_stops_at_end() {
        let mut pc = controller(3);
        assert!(pc.step_by(9));
        assert_eq!(pc.position(), Some(2));
    }

    #[test]
    fn test_reset_rewinds() {
        let mut pc = controller(3);
        pc.jump_to_end();
        pc.reset(10);
        assert_eq!(pc.position(), None);
        assert_eq!(pc.len(), 10);
    }
}
