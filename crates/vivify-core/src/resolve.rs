//! Resolver: map one trace row to a set of element-attribute mutations.

use std::collections::BTreeMap;

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::config::{AttrSet, Config, StyleMap};
use crate::trace::Trace;

/// Policy choosing the winning point when several signals contribute
/// different points to the same element.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum TieBreak {
    /// Lexicographically greatest point string wins, so "1" beats "0".
    /// This is a string compare, not a numeric one: multi-digit encodings
    /// order as text ("10" loses to "9").
    #[default]
    LexicographicMax,
}

impl TieBreak {
    /// Pick the winning point among the recorded candidate keys.
    fn choose<'a, K>(&self, candidates: &'a BTreeMap<&str, K>) -> Option<&'a str> {
        match self {
            TieBreak::LexicographicMax => candidates.keys().next_back().copied(),
        }
    }
}

/// Resolve the row at `frame` with the default tie-break policy.
pub fn resolve_frame(config: &Config, trace: &Trace, frame: usize) -> BTreeMap<String, AttrSet> {
    resolve_frame_with(config, trace, frame, TieBreak::default())
}

/// Resolve the row at `frame` into element-name → attribute-set mutations.
///
/// Per column the mapped target contributes a candidate `(point, attrs)` to
/// its element (groups fan out to every member with the member's own table);
/// points absent from a value table contribute nothing. Candidates accumulate
/// per element keyed by point, each key holding the ordered list of attribute
/// sets. The winner per element is chosen by `tie_break`; within the winning
/// point the first recorded set applies and later ones are discarded.
/// Elements without candidates are absent from the output: attributes are
/// only ever set, never cleared.
pub fn resolve_frame_with(
    config: &Config,
    trace: &Trace,
    frame: usize,
    tie_break: TieBreak,
) -> BTreeMap<String, AttrSet> {
    let Some(row) = trace.signals.get(frame) else {
        return BTreeMap::new();
    };

    // element name -> point -> attribute sets in contribution order
    let mut requests: HashMap<&str, BTreeMap<&str, Vec<&AttrSet>>> = HashMap::new();
    for (i, point) in row.iter().enumerate() {
        let Some(target) = trace
            .signal_names
            .get(i)
            .and_then(|name| config.mapping.get(name))
        else {
            continue;
        };

        if let Some(table) = config.elements.get(target) {
            if let Some(attrs) = table.get(point) {
                requests
                    .entry(target.as_str())
                    .or_default()
                    .entry(point.as_str())
                    .or_default()
                    .push(attrs);
            }
        } else if let Some(group) = config.groups.get(target) {
            for (member, table) in group {
                if let Some(attrs) = table.get(point) {
                    requests
                        .entry(member.as_str())
                        .or_default()
                        .entry(point.as_str())
                        .or_default()
                        .push(attrs);
                }
            }
        }
        // Targets in neither map are a verification error; the resolver
        // never runs against an unverified config.
    }

    let mut out = BTreeMap::new();
    for (element, candidates) in requests {
        let Some(winner) = tie_break.choose(&candidates) else {
            continue;
        };
        if let Some(attrs) = candidates[winner].first() {
            out.insert(element.to_string(), (*attrs).clone());
        }
    }
    out
}

/// Merge style declarations into an existing inline-style string.
///
/// Existing declarations are matched by property-name prefix and overwritten
/// in place; properties not yet present are appended. Everything else in the
/// existing string is preserved untouched.
pub fn merge_style(existing: &str, updates: &StyleMap) -> String {
    let mut decls: Vec<String> = existing
        .split(';')
        .filter(|d| !d.is_empty())
        .map(str::to_string)
        .collect();

    for (property, value) in updates {
        let decl = format!("{property}:{value}");
        match decls.iter_mut().find(|d| d.starts_with(property.as_str())) {
            Some(slot) => *slot = decl,
            None => decls.push(decl),
        }
    }
    decls.join(";")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_overwrites_in_place_and_appends() {
        let mut updates = StyleMap::new();
        updates.insert("fill".to_string(), "blue".to_string());
        updates.insert("stroke".to_string(), "green".to_string());
        assert_eq!(
            merge_style("fill: red;opacity:1", &updates),
            "fill:blue;opacity:1;stroke:green"
        );
    }

    #[test]
    fn merge_into_empty_style() {
        let mut updates = StyleMap::new();
        updates.insert("fill".to_string(), "red".to_string());
        assert_eq!(merge_style("", &updates), "fill:red");
    }
}
