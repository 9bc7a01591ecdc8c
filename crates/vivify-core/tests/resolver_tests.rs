use vivify_core::{
    parse_config_json, parse_trace_csv, resolve_frame, AttrValue, Config, Trace,
};

fn attr(s: &str) -> AttrValue {
    AttrValue::Text(s.to_string())
}

fn tie_break_fixture() -> (Config, Trace) {
    let config = parse_config_json(
        r#"{
            "animStart": 0, "animEnd": 10, "animScale": 1,
            "mapping": {"sigA": "e", "sigB": "e"},
            "elements": {"e": {"0": {"fill": "red"}, "1": {"fill": "blue"}}},
            "groups": {}
        }"#,
    )
    .unwrap();
    let trace = parse_trace_csv("t,sigA,sigB\n0,0,1\n").unwrap();
    (config, trace)
}

/// it should let the lexicographically greater point win ("1" beats "0")
#[test]
fn tie_break_greater_point_wins() {
    let (config, trace) = tie_break_fixture();
    let out = resolve_frame(&config, &trace, 0);
    assert_eq!(out.len(), 1);
    assert_eq!(out["e"]["fill"], attr("blue"));
}

/// it should fan a group signal out to every member with its own table
#[test]
fn group_fan_out() {
    let config = parse_config_json(
        r#"{
            "animStart": 0, "animEnd": 10, "animScale": 1,
            "mapping": {"sig": "g"},
            "elements": {},
            "groups": {"g": {
                "m1": {"1": {"fill": "red"}},
                "m2": {"1": {"fill": "blue"}}
            }}
        }"#,
    )
    .unwrap();
    let trace = parse_trace_csv("t,sig\n0,1\n").unwrap();
    let out = resolve_frame(&config, &trace, 0);
    assert_eq!(out.len(), 2);
    assert_eq!(out["m1"]["fill"], attr("red"));
    assert_eq!(out["m2"]["fill"], attr("blue"));
}

/// it should skip unmapped signals entirely
#[test]
fn unmapped_signals_ignored() {
    let config = parse_config_json(
        r#"{
            "animStart": 0, "animEnd": 10, "animScale": 1,
            "mapping": {"known": "e"},
            "elements": {"e": {"1": {"fill": "blue"}}},
            "groups": {}
        }"#,
    )
    .unwrap();
    let trace = parse_trace_csv("t,mystery,known\n0,1,1\n").unwrap();
    let out = resolve_frame(&config, &trace, 0);
    assert_eq!(out.len(), 1);
    assert!(out.contains_key("e"));
}

/// it should record nothing for points absent from the value table
#[test]
fn absent_point_is_not_a_candidate() {
    let config = parse_config_json(
        r#"{
            "animStart": 0, "animEnd": 10, "animScale": 1,
            "mapping": {"sigA": "e", "sigB": "e"},
            "elements": {"e": {"0": {"fill": "red"}}},
            "groups": {}
        }"#,
    )
    .unwrap();
    // "1" sorts above "0" but has no table entry, so it must not steal the win.
    let trace = parse_trace_csv("t,sigA,sigB\n0,0,1\n").unwrap();
    let out = resolve_frame(&config, &trace, 0);
    assert_eq!(out["e"]["fill"], attr("red"));

    // No point present at all: element left untouched.
    let trace = parse_trace_csv("t,sigA,sigB\n0,1,x\n").unwrap();
    assert!(resolve_frame(&config, &trace, 0).is_empty());
}

/// it should apply the first attribute set recorded under the winning point
#[test]
fn first_candidate_wins_within_a_point() {
    // sigA routes to element "e" directly; sigB routes to a group that also
    // targets "e" with a different set. Signal-column order decides.
    let config = parse_config_json(
        r#"{
            "animStart": 0, "animEnd": 10, "animScale": 1,
            "mapping": {"sigA": "e", "sigB": "g"},
            "elements": {"e": {"1": {"fill": "blue"}}},
            "groups": {"g": {"e": {"1": {"fill": "green"}}}}
        }"#,
    )
    .unwrap();
    let trace = parse_trace_csv("t,sigA,sigB\n0,1,1\n").unwrap();
    let out = resolve_frame(&config, &trace, 0);
    assert_eq!(out["e"]["fill"], attr("blue"));
}

/// it should produce byte-identical output for repeated calls
#[test]
fn resolution_is_deterministic() {
    let config = parse_config_json(
        r#"{
            "animStart": 0, "animEnd": 10, "animScale": 1,
            "mapping": {"a": "e1", "b": "e2", "c": "grp"},
            "elements": {
                "e1": {"0": {"fill": "red", "style": {"stroke": "orange"}}, "1": {"fill": "blue"}},
                "e2": {"0": {"opacity": "0.5"}, "1": {"opacity": "1"}}
            },
            "groups": {"grp": {
                "m1": {"0": {"fill": "gray"}, "1": {"fill": "black"}},
                "m2": {"0": {"fill": "white"}, "1": {"fill": "yellow"}}
            }}
        }"#,
    )
    .unwrap();
    let trace = parse_trace_csv("t,a,b,c\n0,0,1,0\n3,1,0,1\n9,1,1,1\n").unwrap();

    for frame in 0..trace.len() {
        let first = serde_json::to_string(&resolve_frame(&config, &trace, frame)).unwrap();
        for _ in 0..5 {
            let again = serde_json::to_string(&resolve_frame(&config, &trace, frame)).unwrap();
            assert_eq!(first, again);
        }
    }
}

/// it should hand nested style maps through unchanged for the host to merge
#[test]
fn style_attribute_survives_resolution() {
    let config = parse_config_json(
        r#"{
            "animStart": 0, "animEnd": 10, "animScale": 1,
            "mapping": {"sig": "e"},
            "elements": {"e": {"1": {"style": {"fill": "blue", "stroke": "green"}}}},
            "groups": {}
        }"#,
    )
    .unwrap();
    let trace = parse_trace_csv("t,sig\n0,1\n").unwrap();
    let out = resolve_frame(&config, &trace, 0);
    let AttrValue::Style(style) = &out["e"]["style"] else {
        panic!("expected nested style map");
    };
    assert_eq!(style["fill"], "blue");
    assert_eq!(style["stroke"], "green");
}
