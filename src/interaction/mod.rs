//! Cube selection and scaling
//!
//! Key types:
//! - `CubeInteraction`: routes pointer events through selection, handles and feedback
//! - `Selection`: two-state machine (inactive / active)
//! - `HandleManager`: the three axis handles and their rest positions
//! - `DragCapture`: drags a fixed set of nodes across a camera-facing plane
//! - `ColorTransition` + `FrameTasks`: per-frame keyed color animation
//!
//! Note: inspection accessors are exercised by the tests, not the main loop.

#![allow(dead_code)]

mod color;
mod controller;
mod drag;
mod frame;
mod handles;
mod outline;
mod selection;

// Re-export public API
#[allow(unused_imports)]
pub use color::{ease_in_out_cubic, ColorTransition};
#[allow(unused_imports)]
pub use controller::{Animation, CubeInteraction, CUBE_NAME};
#[allow(unused_imports)]
pub use drag::{DragCapture, DragEvent, DragState};
#[allow(unused_imports)]
pub use frame::{FrameTask, FrameTasks};
#[allow(unused_imports)]
pub use handles::{axis_scale, handle_name, HandleManager, ScaleHandle};
#[allow(unused_imports)]
pub use outline::{box_edges, OUTLINE_NAME};
#[allow(unused_imports)]
pub use selection::{PickClass, Selection, Transition};
