//! Capability resolution
//!
//! Maps logical terminal operations to the byte sequences that perform them
//! on the active terminal: terminfo first, then a literal fallback, or empty
//! when the operation has no portable fallback.

mod capability;
pub mod fallback;
mod registry;

pub use capability::{CapBytes, CapKind, Capability};
pub use registry::{Capabilities, PrevEolStrategy};
