//! Shared types used across AUTOCROP.
//! Includes the `BoundingBox` rectangle and the `CropOutcome` terminal states.
use serde::{Deserialize, Serialize};

/// Axis-aligned pixel rectangle: `left`/`top` inclusive, `right`/`bottom` exclusive.
///
/// Boxes produced by content detection always satisfy
/// `left < right <= image width` and `top < bottom <= image height`.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct BoundingBox {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl BoundingBox {
    pub fn width(&self) -> u32 {
        self.right - self.left
    }

    pub fn height(&self) -> u32 {
        self.bottom - self.top
    }

    /// True when `other` lies fully inside `self`.
    pub fn contains(&self, other: &BoundingBox) -> bool {
        self.left <= other.left
            && self.top <= other.top
            && self.right >= other.right
            && self.bottom >= other.bottom
    }
}

impl std::fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({}, {}, {}, {})",
            self.left, self.top, self.right, self.bottom
        )
    }
}

/// Terminal state of one autocrop run. Failures travel through `crate::Error`.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum CropOutcome {
    /// The file was cropped and overwritten; dimensions of the saved image.
    Cropped { width: u32, height: u32 },
    /// Every pixel was background; the file was left untouched.
    NoContent,
}
