// Host-side tests for the gesture-gated playback state machine.

#![allow(dead_code)]
mod playback {
    include!("../src/core/playback.rs");
}

use playback::*;
use std::cell::Cell;

/// Sink that records calls and refuses the first `reject_first` of them.
struct FakeSink {
    calls: Cell<u32>,
    reject_first: u32,
}

impl FakeSink {
    fn new(reject_first: u32) -> Self {
        Self {
            calls: Cell::new(0),
            reject_first,
        }
    }
}

#[derive(Debug)]
struct NotAllowed;

impl AudioSink for FakeSink {
    type Error = NotAllowed;

    fn play(&self) -> Result<(), NotAllowed> {
        let n = self.calls.get() + 1;
        self.calls.set(n);
        if n <= self.reject_first {
            Err(NotAllowed)
        } else {
            Ok(())
        }
    }
}

#[test]
fn starts_in_not_started() {
    let c = PlaybackController::new();
    assert_eq!(c.state(), PlaybackState::NotStarted);
    assert!(!c.is_started());
    assert_eq!(c.attempts(), 0);
}

#[test]
fn first_trigger_starts_and_plays() {
    let sink = FakeSink::new(0);
    let mut c = PlaybackController::new();
    assert_eq!(c.trigger(&sink), PlaybackState::Started);
    assert_eq!(sink.calls.get(), 1);
    assert_eq!(c.failures(), 0);
}

#[test]
fn rejected_first_attempt_still_starts_and_second_trigger_retries_play() {
    let sink = FakeSink::new(1);
    let mut c = PlaybackController::new();
    assert_eq!(c.trigger(&sink), PlaybackState::Started);
    assert_eq!(c.failures(), 1);
    assert_eq!(c.trigger(&sink), PlaybackState::Started);
    assert_eq!(sink.calls.get(), 2);
    assert_eq!(c.attempts(), 2);
    assert_eq!(c.failures(), 1);
}

#[test]
fn always_rejecting_sink_never_escapes_started() {
    let sink = FakeSink::new(u32::MAX);
    let mut c = PlaybackController::new();
    for _ in 0..5 {
        assert_eq!(c.trigger(&sink), PlaybackState::Started);
    }
    assert_eq!(c.failures(), 5);
    // one play() per trigger, no hidden retries
    assert_eq!(sink.calls.get(), 5);
}

#[test]
fn replay_key_increments() {
    let mut k = ReplayKey::default();
    assert_eq!(k, ReplayKey(0));
    assert_eq!(k.bump(), ReplayKey(1));
    assert_eq!(k.bump(), ReplayKey(2));
    assert!(ReplayKey(2) > ReplayKey(1));
}
