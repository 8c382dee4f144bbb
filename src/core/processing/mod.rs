pub mod bbox;
pub mod crop;
pub mod padding;
