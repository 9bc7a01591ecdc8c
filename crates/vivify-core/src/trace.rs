//! Animation trace: signal-name header plus a timestamp/value matrix.

use serde::{Deserialize, Serialize};

use crate::error::VivifyError;

/// Parsed waveform capture.
///
/// `timestamps` and `signals` are index-aligned rows; each row holds one
/// string value per entry of `signal_names`. Timestamps are assumed
/// non-decreasing and are not re-sorted.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Trace {
    #[serde(rename = "signalNames")]
    pub signal_names: Vec<String>,
    pub timestamps: Vec<i64>,
    pub signals: Vec<Vec<String>>,
}

impl Trace {
    #[inline]
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    /// Index of the last sample.
    #[inline]
    pub fn last_index(&self) -> usize {
        self.timestamps.len().saturating_sub(1)
    }
}

/// Parse the CSV-like trace format:
/// a header line `<ignored>,<signalName>,...` followed by data lines
/// `<integer timestamp>,<value>,...`. Whitespace is stripped per line and
/// blank lines are skipped anywhere.
pub fn parse_trace_csv(s: &str) -> Result<Trace, VivifyError> {
    let mut lines = s.lines().filter_map(|raw| {
        let line: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
        if line.is_empty() {
            None
        } else {
            Some(line)
        }
    });

    let header = lines
        .next()
        .ok_or_else(|| VivifyError::format("animation", "missing header line"))?;
    let signal_names: Vec<String> = header.split(',').skip(1).map(str::to_string).collect();

    let mut timestamps = Vec::new();
    let mut signals = Vec::new();
    for line in lines {
        let mut fields = line.split(',');
        let stamp = fields.next().unwrap_or_default();
        let stamp: i64 = stamp.parse().map_err(|_| {
            VivifyError::format("animation", format!("bad timestamp '{stamp}'"))
        })?;
        let row: Vec<String> = fields.map(str::to_string).collect();
        if row.len() != signal_names.len() {
            return Err(VivifyError::format(
                "animation",
                format!(
                    "row at t={stamp} has {} values, expected {}",
                    row.len(),
                    signal_names.len()
                ),
            ));
        }
        timestamps.push(stamp);
        signals.push(row);
    }

    if timestamps.is_empty() {
        return Err(VivifyError::format("animation", "no samples"));
    }

    Ok(Trace {
        signal_names,
        timestamps,
        signals,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_header_and_rows() {
        let trace = parse_trace_csv("t,a,b\n0,0,1\n5,1,0\n").unwrap();
        assert_eq!(trace.signal_names, ["a", "b"]);
        assert_eq!(trace.timestamps, [0, 5]);
        assert_eq!(trace.signals[1], ["1", "0"]);
    }

    #[test]
    fn skips_blank_lines_and_strips_whitespace() {
        let trace = parse_trace_csv("\n  t , a \n\n 0 , 1 \n\n").unwrap();
        assert_eq!(trace.signal_names, ["a"]);
        assert_eq!(trace.timestamps, [0]);
        assert_eq!(trace.signals[0], ["1"]);
    }

    #[test]
    fn rejects_ragged_rows_and_bad_stamps() {
        assert!(parse_trace_csv("t,a\n0,1,1\n").is_err());
        assert!(parse_trace_csv("t,a\nx,1\n").is_err());
    }

    #[test]
    fn rejects_empty_traces() {
        assert!(parse_trace_csv("t,a\n").is_err());
        assert!(parse_trace_csv("").is_err());
    }
}
