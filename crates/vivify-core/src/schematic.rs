//! Schematic: the raw SVG markup the host injects into its container.

use serde::{Deserialize, Serialize};

use crate::error::VivifyError;

/// Inline style the host must force onto the injected SVG root so the
/// schematic fills its container absolutely.
pub const ROOT_STYLE: &str = "position:absolute;left:0;top:0;width:100%;height:100%";

/// Verbatim SVG markup. The engine never interprets the document beyond a
/// root-tag sanity check; all mutation targets are addressed by element id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schematic {
    markup: String,
}

impl Schematic {
    pub fn parse(s: &str) -> Result<Self, VivifyError> {
        if !s.contains("<svg") {
            return Err(VivifyError::format("schematic", "no <svg> root element"));
        }
        Ok(Schematic {
            markup: s.to_string(),
        })
    }

    pub fn markup(&self) -> &str {
        &self.markup
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_svg_and_rejects_other_text() {
        assert!(Schematic::parse("<svg viewBox=\"0 0 1 1\"></svg>").is_ok());
        assert!(Schematic::parse("<html></html>").is_err());
    }
}
