/// The fixed-size drawing surface the meme is composited onto
///
/// Mirrors a 2D canvas: clear, fill, draw an image at a placement, and draw
/// centered text at a baseline. All drawing is in-memory RGBA.

use ab_glyph::{Font, PxScale, ScaleFont};
use image::{imageops::FilterType, DynamicImage, Rgba, RgbaImage};
use imageproc::drawing::{draw_text_mut, text_size};

use super::fit::Placement;
use super::font::CaptionFont;

/// Fully transparent pixel, what `clear()` leaves behind
pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// How captions are painted
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CaptionStyle {
    /// Font size in pixels
    pub size: f32,
    pub color: Rgba<u8>,
}

pub struct Surface {
    pixels: RgbaImage,
}

impl Surface {
    /// Create a transparent surface of the given size
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pixels: RgbaImage::from_pixel(width, height, TRANSPARENT),
        }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Wipe every pixel back to transparent
    pub fn clear(&mut self) {
        self.fill(TRANSPARENT);
    }

    /// Paint the whole surface with one color
    pub fn fill(&mut self, color: Rgba<u8>) {
        for pixel in self.pixels.pixels_mut() {
            *pixel = color;
        }
    }

    /// Scale `image` to the placement's size and composite it at its offset.
    ///
    /// Degenerate placements draw nothing. Returns whether anything was drawn.
    pub fn draw_image(&mut self, image: &DynamicImage, placement: &Placement) -> bool {
        let Some(rect) = placement.pixel_rect() else {
            tracing::warn!("⚠️  Skipping degenerate image placement: {:?}", placement);
            return false;
        };

        let scaled = image
            .resize_exact(rect.width, rect.height, FilterType::Lanczos3)
            .to_rgba8();
        image::imageops::overlay(&mut self.pixels, &scaled, rect.x, rect.y);
        true
    }

    /// Draw `text` centered horizontally with its baseline at
    /// `height * baseline_ratio`.
    ///
    /// Empty text draws nothing.
    pub fn draw_caption(&mut self, text: &str, font: &CaptionFont, style: &CaptionStyle, baseline_ratio: f32) {
        if text.is_empty() {
            return;
        }

        let scale = PxScale::from(style.size);
        let (text_width, _) = text_size(scale, font.font(), text);
        let ascent = font.font().as_scaled(scale).ascent();

        let (x, y) = caption_origin(self.width(), self.height(), text_width, ascent, baseline_ratio);
        draw_text_mut(&mut self.pixels, style.color, x, y, scale, font.font(), text);
    }

    #[cfg(test)]
    pub fn pixel(&self, x: u32, y: u32) -> Rgba<u8> {
        *self.pixels.get_pixel(x, y)
    }

    /// Raw RGBA bytes, row-major, for handing to the display layer
    pub fn rgba_bytes(&self) -> Vec<u8> {
        self.pixels.as_raw().clone()
    }
}

/// Top-left origin for a caption centered on the surface's vertical axis
/// whose baseline sits at `height * baseline_ratio`.
fn caption_origin(width: u32, height: u32, text_width: u32, ascent: f32, baseline_ratio: f32) -> (i32, i32) {
    let center_x = width as f32 / 2.0;
    let baseline_y = height as f32 * baseline_ratio;

    let x = (center_x - text_width as f32 / 2.0).round() as i32;
    let y = (baseline_y - ascent).round() as i32;
    (x, y)
}

impl std::fmt::Debug for Surface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Surface")
            .field("width", &self.width())
            .field("height", &self.height())
            .finish()
    }
}
