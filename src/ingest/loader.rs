//! Boundary-facing JSON loader.
//!
//! This is the only module that knows the detector's document shape:
//! `eventSpecific.nnDetect.<camera>.cfg.cross_lines[0]` for the two
//! gate segments and `eventSpecific.nnDetect.<camera>.frames.<frame>
//! .detected.person` for the per-frame records. Frames are consumed in
//! document order.
//!
//! Structural failures on any required path abort the load with the
//! failed path in the error. Individual detection records that lack
//! the identity payload are expected detector noise and are skipped.

use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::{debug, info};

use crate::counting::{Detection, ReferenceLine, TrackId};
use crate::error::{Error, Result};
use crate::ingest::scene::{Frame, Scene};

/// Records shorter than this lack the identity payload at index 5 and
/// are dropped as unconfirmed.
const MIN_RECORD_LEN: usize = 6;

/// Index of the identity map inside a detection record.
const IDENTITY_INDEX: usize = 5;

/// Read and parse one detection document for the given camera key.
pub fn load_scene(path: &Path, camera_key: &str) -> Result<Scene> {
    let contents = fs::read_to_string(path).map_err(|source| Error::InputNotFound {
        path: path.to_path_buf(),
        source,
    })?;
    let doc: Value = serde_json::from_str(&contents)?;
    parse_scene(&doc, camera_key)
}

/// Flatten an already-parsed document into a [`Scene`].
pub fn parse_scene(doc: &Value, camera_key: &str) -> Result<Scene> {
    let camera = walk(doc, "", &["eventSpecific", "nnDetect", camera_key])?;
    let camera_path = format!("eventSpecific.nnDetect.{camera_key}");

    let lines_path = format!("{camera_path}.cfg.cross_lines");
    let cross_lines = walk(camera, &camera_path, &["cfg", "cross_lines"])?;
    let gates = cross_lines
        .as_array()
        .and_then(|lines| lines.first())
        .ok_or_else(|| Error::malformed(&lines_path, "expected a non-empty array"))?;
    let enter_line = parse_line(gates, &lines_path, "int_line")?;
    let exit_line = parse_line(gates, &lines_path, "ext_line")?;

    let frames_path = format!("{camera_path}.frames");
    let frames_map = walk(camera, &camera_path, &["frames"])?
        .as_object()
        .ok_or_else(|| Error::malformed(&frames_path, "expected an object of frames"))?;

    let mut frames = Vec::with_capacity(frames_map.len());
    let mut skipped = 0usize;
    for (frame_key, frame) in frames_map {
        let records_path = format!("{frames_path}.{frame_key}.detected.person");
        let records = walk(frame, &format!("{frames_path}.{frame_key}"), &["detected", "person"])?
            .as_array()
            .ok_or_else(|| Error::malformed(&records_path, "expected an array of records"))?;

        let mut detections = Vec::with_capacity(records.len());
        for (idx, record) in records.iter().enumerate() {
            match parse_record(record, &format!("{records_path}[{idx}]"))? {
                Some(det) => detections.push(det),
                None => skipped += 1,
            }
        }
        frames.push(Frame::new(detections));
    }

    if skipped > 0 {
        debug!(skipped, "dropped detection records without identity payload");
    }
    info!(
        camera = camera_key,
        frames = frames.len(),
        "scene loaded"
    );

    Ok(Scene {
        enter_line,
        exit_line,
        frames,
    })
}

/// Descend through nested object keys, reporting the full dotted path
/// of the first lookup that fails.
fn walk<'a>(mut value: &'a Value, base: &str, keys: &[&str]) -> Result<&'a Value> {
    let mut path = base.to_owned();
    for key in keys {
        if !path.is_empty() {
            path.push('.');
        }
        path.push_str(key);
        value = value
            .get(key)
            .ok_or_else(|| Error::malformed(&path, "key not found"))?;
    }
    Ok(value)
}

fn parse_line(gates: &Value, lines_path: &str, key: &str) -> Result<ReferenceLine> {
    let path = format!("{lines_path}[0].{key}");
    let coords = gates
        .get(key)
        .ok_or_else(|| Error::malformed(&path, "key not found"))?;
    Ok(ReferenceLine::from_coords(number_array(coords, &path)?))
}

fn number_array<const N: usize>(value: &Value, path: &str) -> Result<[f64; N]> {
    let items = value
        .as_array()
        .ok_or_else(|| Error::malformed(path, "expected an array"))?;
    if items.len() != N {
        return Err(Error::malformed(
            path,
            format!("expected {N} numbers, got {}", items.len()),
        ));
    }
    let mut out = [0.0; N];
    for (i, item) in items.iter().enumerate() {
        out[i] = item
            .as_f64()
            .ok_or_else(|| Error::malformed(path, format!("element {i} is not a number")))?;
    }
    Ok(out)
}

/// Parse one detection record. Returns `Ok(None)` for records too
/// short to carry an identity payload; anything else malformed is a
/// structural error.
fn parse_record(record: &Value, path: &str) -> Result<Option<Detection>> {
    let fields = record
        .as_array()
        .ok_or_else(|| Error::malformed(path, "expected an array record"))?;
    if fields.len() < MIN_RECORD_LEN {
        debug!(record = %path, len = fields.len(), "skipping unconfirmed record");
        return Ok(None);
    }

    let mut bbox = [0.0f64; 4];
    for (i, slot) in bbox.iter_mut().enumerate() {
        *slot = fields[i]
            .as_f64()
            .ok_or_else(|| Error::malformed(path, format!("bbox element {i} is not a number")))?;
    }

    let identities = fields[IDENTITY_INDEX]
        .as_object()
        .ok_or_else(|| Error::malformed(path, "identity payload is not an object"))?;

    let mut detection = Detection::new(bbox[0], bbox[1], bbox[2], bbox[3]);
    for (name, assoc) in identities {
        let id_path = format!("{path}[{IDENTITY_INDEX}].{name}.track_id");
        let id = assoc
            .get("track_id")
            .ok_or_else(|| Error::malformed(&id_path, "key not found"))?;
        let id = track_id_value(id)
            .ok_or_else(|| Error::malformed(&id_path, "expected a string or integer"))?;
        detection = detection.with_track(id);
    }
    Ok(Some(detection))
}

fn track_id_value(value: &Value) -> Option<TrackId> {
    match value {
        Value::String(s) => Some(TrackId::from(s.clone())),
        Value::Number(n) => n.as_i64().map(TrackId::from),
        _ => None,
    }
}
