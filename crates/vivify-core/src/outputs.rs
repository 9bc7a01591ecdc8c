//! Outbound boundary protocol: engine → host events and mutations.
//!
//! Outputs carry the element-attribute mutations computed for the applied
//! frame plus the semantic events of the message protocol. Adapters apply
//! changes to the DOM and transport events to the host.

use serde::{Deserialize, Serialize};

use crate::config::AttrSet;

/// One element-attribute mutation for the host to apply.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Change {
    pub element: String,
    pub attrs: AttrSet,
}

/// Host-facing events, tagged on the wire as `{ "type": ..., "data": ... }`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "camelCase")]
pub enum Event {
    /// Any load/verify/precondition failure, as a display string.
    Error(String),
    /// Successful verification; echoes the playback window from the config.
    #[serde(rename_all = "camelCase")]
    Verified {
        start_time: f64,
        end_time: f64,
        scale: f64,
    },
    /// Emitted after every applied frame (tick, step or jump), and once with
    /// `is_playing: false` when playback finishes.
    #[serde(rename_all = "camelCase")]
    Progress {
        is_playing: bool,
        animation_progress: f64,
        animation_frame: usize,
    },
}

/// Per-operation outputs returned by `Engine::apply` / `Engine::tick`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Outputs {
    #[serde(default)]
    pub changes: Vec<Change>,
    #[serde(default)]
    pub events: Vec<Event>,
}

impl Outputs {
    #[inline]
    pub fn clear(&mut self) {
        self.changes.clear();
        self.events.clear();
    }

    #[inline]
    pub fn push_change(&mut self, change: Change) {
        self.changes.push(change);
    }

    #[inline]
    pub fn push_event(&mut self, event: Event) {
        self.events.push(event);
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty() && self.events.is_empty()
    }
}
