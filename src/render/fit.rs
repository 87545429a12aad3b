/// Aspect-ratio preserving placement of an image inside the drawing surface
///
/// The image is scaled to the largest rectangle with its own aspect ratio
/// that fits the surface, and centered along the axis it does not fill.

/// Draw geometry for an image on the surface, in surface coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub width: f64,
    pub height: f64,
    /// Left edge of the drawn image
    pub start_x: f64,
    /// Top edge of the drawn image
    pub start_y: f64,
}

/// Integer rectangle used when actually compositing pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub x: i64,
    pub y: i64,
    pub width: u32,
    pub height: u32,
}

/// Compute where an image of `image_width` x `image_height` lands on a
/// `canvas_width` x `canvas_height` surface.
///
/// Portrait images (ratio < 1) fill the height and are centered horizontally.
/// Landscape and square images fill the width and are centered vertically.
///
/// No input is rejected. A zero image height gives an infinite ratio, which
/// takes the landscape branch with `height == 0`; a `0/0` ratio is NaN and
/// also lands in the landscape branch because `NaN < 1` is false.
pub fn fit_image(canvas_width: f64, canvas_height: f64, image_width: f64, image_height: f64) -> Placement {
    let aspect_ratio = image_width / image_height;

    if aspect_ratio < 1.0 {
        let height = canvas_height;
        let width = canvas_height * aspect_ratio;
        Placement {
            width,
            height,
            start_x: (canvas_width - width) / 2.0,
            start_y: 0.0,
        }
    } else {
        let width = canvas_width;
        let height = canvas_width / aspect_ratio;
        Placement {
            width,
            height,
            start_x: 0.0,
            start_y: (canvas_height - height) / 2.0,
        }
    }
}

impl Placement {
    /// Round to whole pixels for compositing.
    ///
    /// Returns `None` for degenerate geometry (non-finite values or a size
    /// that rounds to nothing); callers skip the draw in that case.
    pub fn pixel_rect(&self) -> Option<PixelRect> {
        let values = [self.width, self.height, self.start_x, self.start_y];
        if values.iter().any(|v| !v.is_finite()) {
            return None;
        }

        let width = self.width.round();
        let height = self.height.round();
        if width < 1.0 || height < 1.0 || width > u32::MAX as f64 || height > u32::MAX as f64 {
            return None;
        }

        Some(PixelRect {
            x: self.start_x.round() as i64,
            y: self.start_y.round() as i64,
            width: width as u32,
            height: height as u32,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_landscape_example() {
        let p = fit_image(400.0, 400.0, 800.0, 400.0);
        assert_eq!(p, Placement { width: 400.0, height: 200.0, start_x: 0.0, start_y: 100.0 });
    }

    #[test]
    fn test_portrait_example() {
        let p = fit_image(400.0, 400.0, 200.0, 800.0);
        assert_eq!(p, Placement { width: 100.0, height: 400.0, start_x: 150.0, start_y: 0.0 });
    }

    #[test]
    fn test_square_fills_exactly() {
        let p = fit_image(400.0, 300.0, 50.0, 50.0);
        assert_eq!(p.width, 400.0);
        assert_eq!(p.height, 400.0);
        assert_eq!(p.start_x, 0.0);
        // square takes the landscape branch even on a non-square surface
        assert_eq!(p.start_y, -50.0);
    }

    #[test]
    fn test_portrait_property_holds_across_sizes() {
        let canvases = [(400.0, 400.0), (640.0, 480.0), (123.0, 987.0), (1.0, 1.0)];
        let images = [(1.0, 2.0), (299.0, 300.0), (3.0, 1000.0), (720.0, 1280.0)];

        for &(cw, ch) in &canvases {
            for &(iw, ih) in &images {
                let p = fit_image(cw, ch, iw, ih);
                assert_eq!(p.height, ch);
                assert_eq!(p.start_y, 0.0);
                assert!((p.start_x + p.width / 2.0 - cw / 2.0).abs() < EPS);
                if cw >= ch {
                    assert!(p.width <= cw);
                }
            }
        }
    }

    #[test]
    fn test_landscape_property_holds_across_sizes() {
        let canvases = [(400.0, 400.0), (480.0, 640.0), (987.0, 123.0)];
        let images = [(2.0, 1.0), (300.0, 299.0), (1000.0, 3.0), (1280.0, 720.0), (5.0, 5.0)];

        for &(cw, ch) in &canvases {
            for &(iw, ih) in &images {
                let p = fit_image(cw, ch, iw, ih);
                assert_eq!(p.width, cw);
                assert_eq!(p.start_x, 0.0);
                assert!((p.start_y + p.height / 2.0 - ch / 2.0).abs() < EPS);
                if ch >= cw {
                    assert!(p.height <= ch);
                }
            }
        }
    }

    #[test]
    fn test_zero_height_is_degenerate_not_fault() {
        let p = fit_image(400.0, 400.0, 100.0, 0.0);
        assert_eq!(p.width, 400.0);
        assert_eq!(p.height, 0.0);
        assert_eq!(p.start_y, 200.0);
        assert_eq!(p.pixel_rect(), None);
    }

    #[test]
    fn test_zero_by_zero_takes_landscape_branch() {
        let p = fit_image(400.0, 400.0, 0.0, 0.0);
        assert_eq!(p.width, 400.0);
        assert!(p.height.is_nan());
        assert_eq!(p.pixel_rect(), None);
    }

    #[test]
    fn test_pixel_rect_rounds() {
        let p = fit_image(400.0, 400.0, 3.0, 2.0);
        let rect = p.pixel_rect().unwrap();
        assert_eq!(rect, PixelRect { x: 0, y: 67, width: 400, height: 267 });
    }
}
