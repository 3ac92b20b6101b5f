use gatecount_rs::{CounterConfig, GateCounter, GateReport, parse_scene};
use serde_json::json;

/// One camera document exercising the full pipeline: a track crossing
/// the enter gate, an ambiguous detection fanning out to two identities
/// that cross the exit gate, and an unconfirmed record to drop.
fn document() -> serde_json::Value {
    json!({
        "eventSpecific": {
            "nnDetect": {
                "cam_1": {
                    "cfg": {
                        "cross_lines": [
                            { "int_line": [0, 0, 10, 0], "ext_line": [0, 100, 10, 100] }
                        ]
                    },
                    "frames": {
                        "frame_0": {
                            "detected": {
                                "person": [
                                    [4, -6, 6, -4, 0.91, { "person": { "track_id": "walker" } }],
                                    [1, 1, 3, 3]
                                ]
                            }
                        },
                        "frame_1": {
                            "detected": {
                                "person": [
                                    [4, 4, 6, 6, 0.88, { "person": { "track_id": "walker" } }],
                                    [4, 49, 6, 51, 0.52, {
                                        "person": { "track_id": "ghost_a" },
                                        "reid": { "track_id": "ghost_b" }
                                    }]
                                ]
                            }
                        },
                        "frame_2": {
                            "detected": {
                                "person": [
                                    [4, 149, 6, 151, 0.57, {
                                        "person": { "track_id": "ghost_a" },
                                        "reid": { "track_id": "ghost_b" }
                                    }]
                                ]
                            }
                        }
                    }
                }
            }
        }
    })
}

#[test]
fn test_end_to_end_counts() {
    let scene = parse_scene(&document(), "cam_1").unwrap();
    let report = GateCounter::default().analyze(&scene);

    // "walker" straddles the enter gate once, doubled by the implicit
    // closing edge; each fanned-out ghost identity does the same at
    // the exit gate.
    assert_eq!(
        report,
        GateReport {
            enters: 2,
            exits: 4,
            active_tracks: 3,
        }
    );
}

#[test]
fn test_open_path_halves_the_doubling() {
    let scene = parse_scene(&document(), "cam_1").unwrap();
    let counter = GateCounter::new(CounterConfig { closed_path: false });
    let report = counter.analyze(&scene);

    assert_eq!(
        report,
        GateReport {
            enters: 1,
            exits: 2,
            active_tracks: 3,
        }
    );
}

#[test]
fn test_mixed_type_ids_accumulate_separate_tracks() {
    // the same decimal value as integer then string: two opaque
    // identities, each a singleton, so nothing moves and nothing
    // crosses even though the two centers straddle the enter gate
    let doc = json!({
        "eventSpecific": { "nnDetect": { "cam_1": {
            "cfg": { "cross_lines": [
                { "int_line": [0, 0, 10, 0], "ext_line": [0, 100, 10, 100] }
            ]},
            "frames": {
                "frame_0": { "detected": { "person": [
                    [4, -6, 6, -4, 0.9, { "person": { "track_id": 7 } }]
                ]}},
                "frame_1": { "detected": { "person": [
                    [4, 4, 6, 6, 0.9, { "person": { "track_id": "7" } }]
                ]}}
            }
        }}}
    });
    let report = GateCounter::default().analyze(&parse_scene(&doc, "cam_1").unwrap());

    assert_eq!(
        report,
        GateReport {
            enters: 0,
            exits: 0,
            active_tracks: 0,
        }
    );
}

#[test]
fn test_repeated_runs_are_identical() {
    let doc = document();
    let first = GateCounter::default().analyze(&parse_scene(&doc, "cam_1").unwrap());
    for _ in 0..5 {
        let again = GateCounter::default().analyze(&parse_scene(&doc, "cam_1").unwrap());
        assert_eq!(again, first);
    }
}

#[test]
fn test_report_serializes_structured() {
    let scene = parse_scene(&document(), "cam_1").unwrap();
    let report = GateCounter::default().analyze(&scene);
    let value = serde_json::to_value(report).unwrap();

    assert_eq!(
        value,
        json!({ "enters": 2, "exits": 4, "active_tracks": 3 })
    );
}
