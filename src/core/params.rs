use serde::{Deserialize, Serialize};

/// Padding kept around the detected content, in pixels.
pub const DEFAULT_PADDING: u32 = 10;

/// Crop parameters suitable for config files and presets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CropParams {
    /// Margin added to every edge of the content box, clamped to the image extent
    pub padding: u32,
}

impl Default for CropParams {
    fn default() -> Self {
        Self {
            padding: DEFAULT_PADDING,
        }
    }
}
