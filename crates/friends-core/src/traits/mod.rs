//! Core traits for talking to the directory service.

mod directory;
mod image_probe;

pub use directory::Directory;
pub use image_probe::ImageProbe;
