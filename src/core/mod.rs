//! Cursor position tracking
//!
//! Platform-independent state: coordinates and the position state machine.
//! Nothing here performs I/O, so every transition is deterministic given the
//! same sequence of prints and capabilities.

mod coords;
mod state;

pub use coords::Coordinates;
pub use state::TermState;
