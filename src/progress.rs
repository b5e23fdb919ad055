//! Simulated build progress
//!
//! Drives the loading overlay: a counter that climbs in random steps on a
//! repeating timer, holds at 100% briefly, then clears.

mod progress_render;
mod progress_state;

pub use progress_render::{OVERLAY_TITLE, render_overlay};
pub use progress_state::{ProgressPhase, ProgressState, StartOutcome, TickOutcome};
