//! Playback controller: the Idle/Playing/Paused/Finished state machine that
//! advances normalized progress over an injected per-frame clock.

use serde::{Deserialize, Serialize};

/// Playback parameters, overwritten wholesale by the `playConfig` message.
/// `end_time > start_time` and `scale != 0` are enforced by the host.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayParams {
    pub start_time: f64,
    pub end_time: f64,
    pub scale: f64,
    pub is_repeating: bool,
}

impl Default for PlayParams {
    fn default() -> Self {
        Self {
            start_time: 0.0,
            end_time: 10.0,
            scale: 1.0,
            is_repeating: false,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayState {
    Idle,
    Playing,
    Paused,
    Finished,
}

/// Outcome of one clock tick.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Tick {
    /// First tick after play/resume: the baseline was stored, nothing moved
    /// and no frame should be applied.
    Baseline,
    /// Progress advanced (or wrapped around on repeat); the current frame
    /// should be resolved and applied.
    Frame,
    /// Progress had already reached 1 with repeat off; playback stopped.
    Finished,
    /// Not playing; the tick was ignored.
    Ignored,
}

/// Mutable playback state. `frame` is always derived from `progress` through
/// the frame locator and never advanced independently; the engine keeps the
/// two in sync.
#[derive(Clone, Debug)]
pub struct Playback {
    pub params: PlayParams,
    pub state: PlayState,
    /// Normalized position in [0,1]; 1 means the last frame was already
    /// rendered and the next tick stops or wraps.
    pub progress: f64,
    pub frame: usize,
    /// Elapsed-time baseline in milliseconds. None right after play/resume,
    /// so the first tick stores the clock without a phantom interval.
    last_tick: Option<f64>,
}

impl Default for Playback {
    fn default() -> Self {
        Self::new()
    }
}

impl Playback {
    pub fn new() -> Self {
        Self {
            params: PlayParams::default(),
            state: PlayState::Idle,
            progress: 0.0,
            frame: 0,
            last_tick: None,
        }
    }

    #[inline]
    pub fn is_playing(&self) -> bool {
        self.state == PlayState::Playing
    }

    /// Restart from the beginning. Caller checks the verified precondition.
    pub fn play(&mut self) {
        self.progress = 0.0;
        self.frame = 0;
        self.state = PlayState::Playing;
        self.last_tick = None;
    }

    /// Toggle Playing ⇄ Paused. Resuming clears the baseline so the paused
    /// interval does not count as elapsed time. No-op in Idle/Finished.
    pub fn toggle_pause(&mut self) -> PlayState {
        match self.state {
            PlayState::Playing => self.state = PlayState::Paused,
            PlayState::Paused => {
                self.state = PlayState::Playing;
                self.last_tick = None;
            }
            PlayState::Idle | PlayState::Finished => {}
        }
        self.state
    }

    /// Force Playing → Paused ahead of an external progress mutation
    /// (step/scrub), so no in-flight tick can overwrite the new position.
    pub fn force_pause(&mut self) {
        if self.state == PlayState::Playing {
            self.state = PlayState::Paused;
        }
    }

    pub fn toggle_repeat(&mut self) -> bool {
        self.params.is_repeating = !self.params.is_repeating;
        self.params.is_repeating
    }

    /// Advance progress for one clock callback at `now_ms`.
    pub fn tick(&mut self, now_ms: f64) -> Tick {
        if self.state != PlayState::Playing {
            return Tick::Ignored;
        }

        if self.progress >= 1.0 {
            if self.params.is_repeating {
                self.progress = 0.0;
                self.last_tick = Some(now_ms);
                return Tick::Frame;
            }
            self.state = PlayState::Finished;
            self.last_tick = None;
            return Tick::Finished;
        }

        let Some(last) = self.last_tick else {
            self.last_tick = Some(now_ms);
            return Tick::Baseline;
        };

        let span = self.params.end_time - self.params.start_time;
        let elapsed_s = (now_ms - last) / 1000.0;
        self.progress = (self.progress + elapsed_s * self.params.scale / span).min(1.0);
        self.last_tick = Some(now_ms);
        Tick::Frame
    }

    /// Set progress directly (scrub). Forces a pause first; clamps to [0,1].
    pub fn jump(&mut self, progress: f64) {
        self.force_pause();
        self.progress = progress.clamp(0.0, 1.0);
    }

    /// Recompute progress from a frame's timestamp after a step, clamped to
    /// [0,1]. Does not go through the continuous time-based advance.
    pub fn set_progress_from_time(&mut self, time: f64) {
        let span = self.params.end_time - self.params.start_time;
        let progress = if span > 0.0 {
            (time - self.params.start_time) / span
        } else {
            0.0
        };
        self.progress = progress.clamp(0.0, 1.0);
    }
}
