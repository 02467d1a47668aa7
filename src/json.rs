//! JSON ingest and export for command sequences and flatten outcomes.
//!
//! Documents are untrusted; shape mismatches yield `None` rather than a
//! panic or a partial decode.

use crate::model::{FlattenOutcome, PathCommand};
use serde_json::{json, Value};

/// Decode a command sequence from a JSON document: either a bare array of
/// command objects or `{"commands": [...]}`. Returns `None` when the
/// document does not decode cleanly.
pub fn commands_from_json(doc: &Value) -> Option<Vec<PathCommand>> {
    let arr = match doc {
        Value::Array(_) => doc,
        Value::Object(map) => map.get("commands")?,
        _ => return None,
    };
    serde_json::from_value(arr.clone()).ok()
}

/// Serialize a flatten outcome. Polygons become `{"points": [[x, y], ...],
/// "closed": bool}`; a stopped run carries an `unsupported` object.
pub fn outcome_to_json(outcome: &FlattenOutcome) -> Value {
    let polygons: Vec<Value> = outcome
        .polygons
        .iter()
        .map(|poly| {
            let points: Vec<Value> = poly.points.iter().map(|p| json!([p.x, p.y])).collect();
            json!({ "points": points, "closed": poly.closed })
        })
        .collect();

    match &outcome.unsupported {
        Some(u) => json!({
            "polygons": polygons,
            "unsupported": { "index": u.index, "code": u.code },
        }),
        None => json!({ "polygons": polygons }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FlattenOptions, Point};

    #[test]
    fn decodes_bare_array_and_wrapped_forms() {
        let doc = json!([
            { "cmd": "move", "to": { "x": 5.0, "y": 7.0 } },
            { "cmd": "line", "to": { "x": 10.0, "y": 20.0 } }
        ]);
        let cmds = commands_from_json(&doc).expect("bare array");
        assert_eq!(cmds.len(), 2);

        let wrapped = json!({ "commands": doc });
        let cmds = commands_from_json(&wrapped).expect("wrapped");
        assert_eq!(cmds.len(), 2);
    }

    #[test]
    fn malformed_document_is_rejected() {
        assert!(commands_from_json(&json!("M5,7")).is_none());
        assert!(commands_from_json(&json!([{ "cmd": "warp" }])).is_none());
        assert!(commands_from_json(&json!({ "paths": [] })).is_none());
    }

    #[test]
    fn outcome_round_trips_through_json() {
        let cmds = [
            PathCommand::Move { to: Point::new(0.0, 0.0) },
            PathCommand::Line { to: Point::new(3.0, 4.0) },
        ];
        let out = crate::flatten(&cmds, &FlattenOptions::default());
        let doc = outcome_to_json(&out);
        assert_eq!(doc["polygons"][0]["points"][1], json!([3.0, 4.0]));
        assert_eq!(doc["polygons"][0]["closed"], json!(false));
        assert!(doc.get("unsupported").is_none());
    }
}
