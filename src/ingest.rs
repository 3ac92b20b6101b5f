//! Boundary between the detector's on-disk document and the counting
//! core: the typed scene model and the JSON loader that produces it.

mod loader;
mod scene;

pub use loader::{load_scene, parse_scene};
pub use scene::{Frame, Scene};
