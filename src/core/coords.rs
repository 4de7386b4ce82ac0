//! Screen coordinates
//!
//! Zero-indexed column/row pairs used for the cursor position, the saved
//! position, the prompt anchor, and the window size.

use serde::{Deserialize, Serialize};

/// A column (`x`) and row (`y`) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Coordinates {
    /// Column (0-indexed)
    pub x: usize,
    /// Row (0-indexed)
    pub y: usize,
}

impl Coordinates {
    /// Create coordinates from a column and a row
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// The origin (0, 0)
    pub const fn origin() -> Self {
        Self { x: 0, y: 0 }
    }
}

impl From<(usize, usize)> for Coordinates {
    fn from((x, y): (usize, usize)) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for Coordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
