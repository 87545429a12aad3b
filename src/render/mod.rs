/// Rendering module
///
/// This module handles:
/// - Fitting an uploaded image into the drawing surface (fit.rs)
/// - The drawing surface itself: fill, image, captions (surface.rs)
/// - Decoding uploaded images off the UI thread (loader.rs)
/// - Loading the caption font (font.rs)

pub mod fit;
pub mod font;
pub mod loader;
pub mod surface;
