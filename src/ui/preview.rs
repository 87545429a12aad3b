/// Displays the drawing surface
use iced::widget::image::{Handle, Image};
use iced::{ContentFit, Length};

use crate::render::surface::Surface;

/// Snapshot the surface pixels into an image handle.
///
/// Handles are immutable, so this is called again after every surface change.
pub fn surface_handle(surface: &Surface) -> Handle {
    Handle::from_rgba(surface.width(), surface.height(), surface.rgba_bytes())
}

/// The surface shown at its native size
pub fn surface_view(handle: &Handle, width: u32, height: u32) -> Image<Handle> {
    Image::new(handle.clone())
        .width(Length::Fixed(width as f32))
        .height(Length::Fixed(height as f32))
        .content_fit(ContentFit::None)
}
