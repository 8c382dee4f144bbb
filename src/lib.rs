#![doc = r#"
AUTOCROP — trim transparent borders from raster images, in place.

This crate opens an image, finds the smallest rectangle enclosing its content
pixels, expands that rectangle by a small padding margin clamped to the image
extent, crops, and writes the result back over the source file. It powers the
AUTOCROP CLI and can be embedded in your own Rust applications.

The source is normalized to RGBA8 before analysis, so the content rule is the
same for every input format: a pixel is content when it differs from fully
transparent black `(0, 0, 0, 0)`.

Add dependency
--------------
```toml
[dependencies]
autocrop = "0.1"
```

Quick start: crop a file in place
---------------------------------
```rust,no_run
use std::path::Path;
use autocrop::{autocrop_in_place, CropOutcome, CropParams};

fn main() -> autocrop::Result<()> {
    let outcome = autocrop_in_place(Path::new("logo.png"), &CropParams::default())?;
    match outcome {
        CropOutcome::Cropped { width, height } => println!("now {width}x{height}"),
        CropOutcome::NoContent => println!("nothing to crop"),
    }
    Ok(())
}
```

Crop in-memory to `CroppedImage`
--------------------------------
```rust
use autocrop::{autocrop_image, CropParams};
use image::RgbaImage;

let buffer = RgbaImage::new(64, 64);
// An all-background buffer yields no crop.
assert!(autocrop_image(&buffer, &CropParams::default()).is_none());
```

Error handling
--------------
All fallible functions return `autocrop::Result<T>`; match on
`autocrop::Error` to distinguish I/O, decode, and write failures.

```rust,no_run
use std::path::Path;
use autocrop::{autocrop_in_place, CropParams, Error};

fn main() {
    match autocrop_in_place(Path::new("/bad/path.png"), &CropParams::default()) {
        Ok(outcome) => println!("{outcome:?}"),
        Err(Error::Io(e)) => eprintln!("I/O: {e}"),
        Err(other) => eprintln!("{other}"),
    }
}
```

Useful modules
--------------
- [`api`] — high-level, ergonomic entry points.
- [`types`] — core types (`BoundingBox`, `CropOutcome`).
- [`core`] — content detection, padding, and crop primitives.
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod core;
pub mod error;
pub mod types;

// Curated public API surface
pub use core::params::{CropParams, DEFAULT_PADDING};
pub use error::{Error, Result};
pub use types::{BoundingBox, CropOutcome};

// High-level API re-exports
pub use api::{CroppedImage, autocrop_image, autocrop_in_place};
