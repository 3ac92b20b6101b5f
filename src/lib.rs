//! Gate-crossing counting over per-frame object detections.
//!
//! Reconstructs each tracked object's trajectory as a sequence of
//! rounded center points, then counts how many trajectory edges
//! properly cross the "enter" and "exit" gate segments from the camera
//! configuration. One frozen dataset in, three integers out: enter
//! crossings, exit crossings, and tracks seen to move at all.
//!
//! For parity with the reference system each trajectory is treated as
//! a closed loop by default (its last and first points form an extra
//! implicit edge); see [`CounterConfig::closed_path`] to disable that
//! quirk.
//!
//! # Example
//!
//! ```ignore
//! use gatecount_rs::{GateCounter, load_scene};
//!
//! let scene = load_scene("detections.json".as_ref(), "cam_1")?;
//! let report = GateCounter::default().analyze(&scene);
//! println!("{report}");
//! ```

pub mod counting;
pub mod error;
pub mod ingest;

pub use counting::{
    CounterConfig, CrossingCounter, Detection, GateCounter, GateReport, Point, ReferenceLine,
    TrackId, TrajectoryBuilder, TrajectorySet,
};
pub use error::{Error, Result};
pub use ingest::{Frame, Scene, load_scene, parse_scene};
