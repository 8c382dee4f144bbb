//! Core processing building blocks: content detection, padding, and the
//! crop primitive. These are internal primitives consumed by the high-level
//! `api` module.
pub mod params;
pub mod processing;
