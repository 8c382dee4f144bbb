use image::{Rgba, RgbaImage};

use crate::types::BoundingBox;

/// A pixel counts as content when it differs from fully transparent black.
/// A zero-alpha pixel with nonzero color channels is still content.
#[inline]
fn is_content(pixel: &Rgba<u8>) -> bool {
    pixel.0 != [0, 0, 0, 0]
}

/// Smallest rectangle enclosing all content pixels of `image`.
///
/// Returns `None` when every pixel is background. The returned box is
/// left/top inclusive, right/bottom exclusive, and always lies within the
/// image extent.
pub fn content_bounding_box(image: &RgbaImage) -> Option<BoundingBox> {
    let mut bounds: Option<(u32, u32, u32, u32)> = None;

    for (x, y, pixel) in image.enumerate_pixels() {
        if !is_content(pixel) {
            continue;
        }
        bounds = Some(match bounds {
            None => (x, y, x, y),
            Some((min_x, min_y, max_x, max_y)) => {
                (min_x.min(x), min_y.min(y), max_x.max(x), max_y.max(y))
            }
        });
    }

    bounds.map(|(min_x, min_y, max_x, max_y)| BoundingBox {
        left: min_x,
        top: min_y,
        right: max_x + 1,
        bottom: max_y + 1,
    })
}
