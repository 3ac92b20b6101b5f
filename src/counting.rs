mod crossing;
mod line;
mod point;
mod report;
mod trajectory;

pub use crossing::{CounterConfig, CrossingCounter};
pub use line::ReferenceLine;
pub use point::Point;
pub use report::{GateCounter, GateReport};
pub use trajectory::{Detection, TrackId, TrajectoryBuilder, TrajectorySet};
