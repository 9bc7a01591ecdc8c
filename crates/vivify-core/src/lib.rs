//! Vivify core (host-agnostic)
//!
//! Renders a timestamped matrix of named signal values onto a static SVG
//! schematic by computing element-attribute mutations per frame. This crate
//! owns the data models, the verifier, the frame locator, the resolver, the
//! playback state machine and the command/event boundary protocol. DOM
//! mutation, scheduling callbacks and message transport live in adapters
//! (see vivify-wasm).

pub mod config;
pub mod engine;
pub mod error;
pub mod inputs;
pub mod locate;
pub mod outputs;
pub mod playback;
pub mod resolve;
pub mod schematic;
pub mod trace;
pub mod verify;

// Re-exports for consumers (adapters)
pub use config::{parse_config_json, AttrSet, AttrValue, Config, StyleMap, ValueTable};
pub use engine::Engine;
pub use error::VivifyError;
pub use inputs::Command;
pub use locate::{locate, progress_to_time};
pub use outputs::{Change, Event, Outputs};
pub use playback::{PlayParams, PlayState, Playback, Tick};
pub use resolve::{merge_style, resolve_frame, resolve_frame_with, TieBreak};
pub use schematic::{Schematic, ROOT_STYLE};
pub use trace::{parse_trace_csv, Trace};
pub use verify::{check, VerifyOutcome};
