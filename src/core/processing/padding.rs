use crate::types::BoundingBox;

/// Expand `bbox` by `margin` pixels on every edge, clamped to the image extent.
///
/// Left/top saturate at 0; right/bottom are capped at `width`/`height`. The
/// result always contains `bbox` and never leaves the source image.
pub fn expand_within(bbox: &BoundingBox, margin: u32, width: u32, height: u32) -> BoundingBox {
    BoundingBox {
        left: bbox.left.saturating_sub(margin),
        top: bbox.top.saturating_sub(margin),
        right: bbox.right.saturating_add(margin).min(width),
        bottom: bbox.bottom.saturating_add(margin).min(height),
    }
}
