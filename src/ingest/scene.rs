//! Typed scene model handed to the counting core.
//!
//! The core never sees the on-disk schema; the loader flattens the
//! document into this structure (reference-line pair plus frame
//! sequence) and everything downstream works from here.

use crate::counting::{Detection, ReferenceLine};

/// All detections of one video frame, in record order.
#[derive(Debug, Clone, Default)]
pub struct Frame {
    pub detections: Vec<Detection>,
}

impl Frame {
    pub fn new(detections: Vec<Detection>) -> Self {
        Self { detections }
    }
}

/// One camera's frozen dataset: the two gate segments and the ordered
/// frame sequence. Frame order follows the source document and is
/// taken as ground truth even when it is not sorted by timestamp.
#[derive(Debug, Clone)]
pub struct Scene {
    pub enter_line: ReferenceLine,
    pub exit_line: ReferenceLine,
    pub frames: Vec<Frame>,
}
