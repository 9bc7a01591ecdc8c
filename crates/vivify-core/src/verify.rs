//! Verifier: every mapped signal must route to exactly one target kind.

use crate::config::Config;
use crate::error::VivifyError;
use crate::trace::Trace;

/// Result of [`crate::Engine::verify`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum VerifyOutcome {
    Verified,
    /// The engine was already verified; the check did not re-run.
    AlreadyVerified,
}

/// Check that every trace signal with a mapping entry resolves to a target
/// present in exactly one of `elements` / `groups`. Unmapped signals are
/// legal and skipped. Stops at the first violation.
pub fn check(config: &Config, trace: &Trace) -> Result<(), VivifyError> {
    for signal_name in &trace.signal_names {
        let Some(target) = config.mapping.get(signal_name) else {
            continue;
        };
        let in_elements = config.elements.contains_key(target);
        let in_groups = config.groups.contains_key(target);
        match (in_elements, in_groups) {
            (true, true) => {
                return Err(VivifyError::AmbiguousTarget {
                    name: target.clone(),
                })
            }
            (false, false) => {
                return Err(VivifyError::UnknownTarget {
                    name: target.clone(),
                })
            }
            _ => {}
        }
    }
    Ok(())
}
