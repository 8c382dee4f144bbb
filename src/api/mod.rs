//! High-level, ergonomic library API: crop a file in place or crop an
//! in-memory buffer. Prefer these entrypoints over the low-level processing
//! modules when integrating AUTOCROP.
use std::path::Path;

use image::RgbaImage;
use tracing::{debug, info};

use crate::core::params::CropParams;
use crate::core::processing::bbox::content_bounding_box;
use crate::core::processing::crop::crop_to_box;
use crate::core::processing::padding::expand_within;
use crate::error::{Error, Result};
use crate::types::{BoundingBox, CropOutcome};

/// Result of in-memory cropping
#[derive(Debug, Clone)]
pub struct CroppedImage {
    pub width: u32,
    pub height: u32,
    /// Content rectangle before padding
    pub content_box: BoundingBox,
    /// Padded and clamped rectangle actually cropped
    pub crop_box: BoundingBox,
    pub image: RgbaImage,
}

/// Crop an in-memory RGBA buffer to its padded content box (no disk I/O).
///
/// Returns `None` when the buffer has no content pixels; the caller decides
/// what an empty image means in its context.
pub fn autocrop_image(image: &RgbaImage, params: &CropParams) -> Option<CroppedImage> {
    let (width, height) = image.dimensions();

    let content_box = content_bounding_box(image)?;
    let crop_box = expand_within(&content_box, params.padding, width, height);
    debug!(
        "content box {} padded to {} within {}x{}",
        content_box, crop_box, width, height
    );

    let cropped = crop_to_box(image, &crop_box);
    Some(CroppedImage {
        width: cropped.width(),
        height: cropped.height(),
        content_box,
        crop_box,
        image: cropped,
    })
}

/// Crop `input` to its padded content box and overwrite the file in place.
///
/// The source is decoded and normalized to RGBA8 before analysis, so the
/// content rule is well defined even for sources without an alpha channel.
/// The file is rewritten only on the `Cropped` outcome; on `NoContent` and on
/// any error raised before the save, it is left untouched. The output format
/// is chosen by the imaging library from the path's extension.
pub fn autocrop_in_place(input: &Path, params: &CropParams) -> Result<CropOutcome> {
    let image = image::open(input).map_err(Error::from_open)?.to_rgba8();
    info!(
        "loaded {:?} ({}x{})",
        input,
        image.width(),
        image.height()
    );

    let Some(cropped) = autocrop_image(&image, params) else {
        info!("no content pixels in {:?}, leaving file untouched", input);
        return Ok(CropOutcome::NoContent);
    };

    cropped.image.save(input).map_err(Error::from_save)?;
    info!(
        "saved {:?} cropped to {}x{} (crop box {})",
        input, cropped.width, cropped.height, cropped.crop_box
    );

    Ok(CropOutcome::Cropped {
        width: cropped.width,
        height: cropped.height,
    })
}
