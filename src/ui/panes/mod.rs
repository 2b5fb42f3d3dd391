//! TUI pane rendering modules
//!
//! Each pane is a stateless render function over the current playback
//! position; scroll offsets live in the app and are passed in by reference.
//!
//! # Pane Modules
//!
//! - [`step`]: action tag, narrative and result of the current step
//! - [`state`]: named state fields of the current snapshot
//! - [`trace`]: the whole trace with the current step highlighted
//! - [`status`]: status bar with keybindings and playback state

pub mod state;
pub mod status;
pub mod step;
pub mod trace;

// Re-export render functions for convenience
pub use state::render_state_pane;
pub use status::render_status_bar;
pub use step::render_step_pane;
pub use trace::{render_trace_pane, TraceScrollState};
