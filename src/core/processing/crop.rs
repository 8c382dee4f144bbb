use image::RgbaImage;
use image::imageops;

use crate::types::BoundingBox;

/// Copy the region under `bbox` into a new image. Pixels are copied verbatim,
/// no resampling. `bbox` must lie within the image extent.
pub fn crop_to_box(image: &RgbaImage, bbox: &BoundingBox) -> RgbaImage {
    imageops::crop_imm(image, bbox.left, bbox.top, bbox.width(), bbox.height()).to_image()
}
