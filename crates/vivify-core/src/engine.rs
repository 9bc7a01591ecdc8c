//! Engine: data ownership and command dispatch.
//!
//! The engine is the explicit context for everything the protocol touches:
//! the loaded document (config + trace + schematic, replaced wholesale per
//! load), the process-wide verified flag, the playback state machine and a
//! reusable per-operation output buffer. Hosts drive it two ways: `apply`
//! for protocol commands and `tick` from a per-frame clock callback, and
//! re-schedule ticks only while `is_playing()`; ceasing to reschedule is
//! the only cancellation mechanism.

use crate::config::{parse_config_json, Config};
use crate::error::VivifyError;
use crate::inputs::Command;
use crate::locate::{locate, progress_to_time};
use crate::outputs::{Change, Event, Outputs};
use crate::playback::{PlayState, Playback, Tick};
use crate::resolve::resolve_frame;
use crate::schematic::Schematic;
use crate::trace::{parse_trace_csv, Trace};
use crate::verify::{check, VerifyOutcome};

/// One load's worth of inputs, replaced atomically by the next load.
#[derive(Clone, Debug)]
struct Document {
    config: Config,
    trace: Trace,
    schematic: Schematic,
}

#[derive(Debug, Default)]
pub struct Engine {
    doc: Option<Document>,
    verified: bool,
    playback: Playback,
    outputs: Outputs,
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_playing(&self) -> bool {
        self.playback.is_playing()
    }

    #[inline]
    pub fn state(&self) -> PlayState {
        self.playback.state
    }

    #[inline]
    pub fn progress(&self) -> f64 {
        self.playback.progress
    }

    #[inline]
    pub fn frame(&self) -> usize {
        self.playback.frame
    }

    #[inline]
    pub fn is_verified(&self) -> bool {
        self.verified
    }

    /// The loaded schematic, for the host to inject into its container.
    pub fn schematic(&self) -> Option<&Schematic> {
        self.doc.as_ref().map(|d| &d.schematic)
    }

    /// Dispatch one inbound protocol command.
    pub fn apply(&mut self, cmd: Command) -> &Outputs {
        self.outputs.clear();
        match cmd {
            Command::Load { conf, anim, sch } => self.load(&conf, &anim, &sch),
            Command::PlayConfig(params) => self.playback.params = params,
            Command::Play => self.play(),
            Command::Pause => self.pause(),
            Command::Step(sign) => self.step(sign),
            Command::Jump(progress) => self.jump(progress),
            Command::ToggleRepeat => {
                self.playback.toggle_repeat();
            }
        }
        &self.outputs
    }

    /// One per-frame clock callback at `now_ms`.
    pub fn tick(&mut self, now_ms: f64) -> &Outputs {
        self.outputs.clear();
        match self.playback.tick(now_ms) {
            Tick::Baseline | Tick::Ignored => {}
            Tick::Frame => {
                self.relocate_frame();
                self.apply_current_frame();
            }
            Tick::Finished => {
                // The final frame was rendered when progress clamped to 1;
                // tell the host playback stopped.
                self.outputs.push_event(Event::Progress {
                    is_playing: false,
                    animation_progress: self.playback.progress,
                    animation_frame: self.playback.frame,
                });
            }
        }
        &self.outputs
    }

    /// Run the verifier unless it already passed since the last load.
    pub fn verify(&mut self) -> Result<VerifyOutcome, VivifyError> {
        if self.verified {
            return Ok(VerifyOutcome::AlreadyVerified);
        }
        let doc = self
            .doc
            .as_ref()
            .ok_or_else(|| VivifyError::precondition("Input files not loaded."))?;
        check(&doc.config, &doc.trace)?;
        self.verified = true;
        Ok(VerifyOutcome::Verified)
    }

    fn load(&mut self, conf: &str, anim: &str, sch: &str) {
        // Every load invalidates the previous verification, even a failed one.
        self.verified = false;

        let parsed = parse_config_json(conf).and_then(|config| {
            let trace = parse_trace_csv(anim)?;
            let schematic = Schematic::parse(sch)?;
            Ok(Document {
                config,
                trace,
                schematic,
            })
        });
        let doc = match parsed {
            Ok(doc) => doc,
            Err(e) => {
                log::error!("load failed: {e}");
                self.outputs.push_event(Event::Error(e.to_string()));
                return;
            }
        };

        self.playback.params.start_time = doc.config.anim_start;
        self.playback.params.end_time = doc.config.anim_end;
        self.playback.params.scale = doc.config.anim_scale;
        self.playback.state = PlayState::Idle;
        self.playback.progress = 0.0;
        self.playback.frame = 0;
        self.doc = Some(doc);

        match self.verify() {
            Ok(_) => self.outputs.push_event(Event::Verified {
                start_time: self.playback.params.start_time,
                end_time: self.playback.params.end_time,
                scale: self.playback.params.scale,
            }),
            Err(e) => {
                log::error!("verification failed: {e}");
                self.outputs.push_event(Event::Error(e.to_string()));
            }
        }
    }

    fn play(&mut self) {
        if !self.verified {
            if let Err(e) = self.verify() {
                log::error!("play ignored: {e}");
                self.outputs.push_event(Event::Error(e.to_string()));
                return;
            }
        }
        self.playback.play();
        self.relocate_frame();
    }

    fn pause(&mut self) {
        let before = self.playback.state;
        let after = self.playback.toggle_pause();
        if before != after {
            // Not a frame application, but the host needs the isPlaying flip
            // to re-enable or lock its controls.
            self.outputs.push_event(Event::Progress {
                is_playing: self.playback.is_playing(),
                animation_progress: self.playback.progress,
                animation_frame: self.playback.frame,
            });
        }
    }

    fn step(&mut self, sign: i32) {
        if !self.precondition_verified("step") {
            return;
        }
        self.playback.force_pause();

        let Some(doc) = self.doc.as_ref() else {
            return;
        };
        let last = doc.trace.last_index();
        let current = self.playback.frame;
        let frame = match sign.signum() {
            1 => (current + 1).min(last),
            -1 => current.saturating_sub(1),
            _ => current,
        };
        let Some(&stamp) = doc.trace.timestamps.get(frame) else {
            return;
        };
        self.playback.frame = frame;
        self.playback.set_progress_from_time(stamp as f64);
        self.apply_current_frame();
    }

    fn jump(&mut self, progress: f64) {
        if !self.precondition_verified("jump") {
            return;
        }
        self.playback.jump(progress);
        self.relocate_frame();
        self.apply_current_frame();
    }

    /// Re-derive the frame index from progress through the frame locator.
    fn relocate_frame(&mut self) {
        let Some(doc) = self.doc.as_ref() else {
            return;
        };
        let time = progress_to_time(
            self.playback.progress,
            self.playback.params.start_time,
            self.playback.params.end_time,
        );
        self.playback.frame = locate(&doc.trace.timestamps, time);
    }

    /// Resolve the current frame into changes and report progress.
    fn apply_current_frame(&mut self) {
        let Some(doc) = self.doc.as_ref() else {
            return;
        };
        for (element, attrs) in resolve_frame(&doc.config, &doc.trace, self.playback.frame) {
            self.outputs.push_change(Change { element, attrs });
        }
        self.outputs.push_event(Event::Progress {
            is_playing: self.playback.is_playing(),
            animation_progress: self.playback.progress,
            animation_frame: self.playback.frame,
        });
    }

    fn precondition_verified(&mut self, op: &str) -> bool {
        if self.verified {
            return true;
        }
        let e = VivifyError::precondition("Input files not verified.");
        log::error!("{op} ignored: {e}");
        self.outputs.push_event(Event::Error(e.to_string()));
        false
    }
}
