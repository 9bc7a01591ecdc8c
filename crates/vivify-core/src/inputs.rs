//! Inbound boundary protocol: host → engine commands.
//!
//! Serde's adjacent tagging reproduces the postMessage wire shape
//! `{ "type": "...", "data": ... }`; unit commands omit `data`.

use serde::{Deserialize, Serialize};

use crate::playback::PlayParams;

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "camelCase")]
pub enum Command {
    /// Parse config/trace/schematic, replace all three atomically, run the
    /// verifier.
    Load {
        conf: String,
        anim: String,
        sch: String,
    },
    /// Overwrite playback parameters. Field presence is the only validation.
    PlayConfig(PlayParams),
    Play,
    Pause,
    /// Move one sample index in the sign's direction.
    Step(i32),
    /// Scrub to a normalized progress in [0,1].
    Jump(f64),
    ToggleRepeat,
}
