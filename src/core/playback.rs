use std::fmt::Debug;

/// Something that can be asked to start or resume audio.
///
/// Browsers may refuse playback until the user has interacted with the page,
/// or the source may be missing; implementors report that as an error and the
/// controller decides what to do with it.
pub trait AudioSink {
    type Error: Debug;

    fn play(&self) -> Result<(), Self::Error>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PlaybackState {
    #[default]
    NotStarted,
    Started,
}

/// Gesture-gated playback: the first trigger starts the session, later
/// triggers resume. Failed attempts are ignored and never retried.
#[derive(Debug, Default)]
pub struct PlaybackController {
    state: PlaybackState,
    attempts: u32,
    failures: u32,
}

impl PlaybackController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn trigger<S: AudioSink + ?Sized>(&mut self, sink: &S) -> PlaybackState {
        if self.state == PlaybackState::NotStarted {
            self.state = PlaybackState::Started;
            log::info!("[audio] first playback trigger");
        }
        self.attempts += 1;
        if let Err(e) = sink.play() {
            self.failures += 1;
            log::debug!("[audio] play rejected: {:?}", e);
        }
        self.state
    }

    #[inline]
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    #[inline]
    pub fn is_started(&self) -> bool {
        self.state == PlaybackState::Started
    }

    /// Number of play attempts made so far.
    #[inline]
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Number of attempts the sink refused synchronously.
    #[inline]
    pub fn failures(&self) -> u32 {
        self.failures
    }
}

/// Monotonic counter; each bump invalidates the running animation session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ReplayKey(pub u32);

impl ReplayKey {
    pub fn bump(&mut self) -> ReplayKey {
        self.0 = self.0.wrapping_add(1);
        *self
    }
}
