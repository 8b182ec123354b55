//! Drawing surface backed by a tiny-skia pixmap.

use image::RgbaImage;
use tiny_skia::{FillRule, Paint, PathBuilder, Pixmap, Rect, Transform};

use crate::error::{IconError, Result};
use crate::shape::Outline;
use crate::types::{Bounds, Colour, Point};

/// Rasterization settings shared by every fill on a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Smooth shape edges with partial coverage.
    pub anti_alias: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { anti_alias: true }
    }
}

/// A mutable RGBA canvas that shapes are filled into.
pub struct Surface {
    pixmap: Pixmap,
    options: RenderOptions,
}

impl Surface {
    /// Create a fully transparent surface.
    pub fn new(width: u32, height: u32, options: RenderOptions) -> Result<Self> {
        let pixmap = Pixmap::new(width, height).ok_or_else(|| IconError::Render {
            message: format!("Cannot allocate a {}x{} surface", width, height),
            help: Some("Surface dimensions must be non-zero".to_string()),
        })?;

        Ok(Self { pixmap, options })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Fill the ellipse inscribed in `bounds`.
    pub fn fill_ellipse(&mut self, bounds: Bounds, colour: Colour) -> Result<()> {
        let path = Rect::from_xywh(bounds.x, bounds.y, bounds.width, bounds.height)
            .and_then(PathBuilder::from_oval)
            .ok_or_else(|| IconError::Render {
                message: format!(
                    "Invalid ellipse bounds ({}, {}) - ({}, {})",
                    bounds.x,
                    bounds.y,
                    bounds.right(),
                    bounds.bottom()
                ),
                help: Some("Bounds must be finite with a positive width and height".to_string()),
            })?;

        let paint = self.paint(colour);
        self.pixmap
            .fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
        Ok(())
    }

    /// Fill the closed polygon through `points`.
    ///
    /// Degenerate polygons (fewer than three points, or no area) draw nothing.
    pub fn fill_polygon(&mut self, points: &[Point], colour: Colour) {
        let [first, rest @ ..] = points else {
            return;
        };
        if rest.len() < 2 {
            return;
        }

        let mut pb = PathBuilder::new();
        pb.move_to(first.x, first.y);
        for p in rest {
            pb.line_to(p.x, p.y);
        }
        pb.close();

        // `finish` refuses paths with empty or non-finite bounds
        let Some(path) = pb.finish() else {
            return;
        };

        let paint = self.paint(colour);
        self.pixmap
            .fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
    }

    /// Fill an outline with its own colour.
    pub fn fill_outline(&mut self, outline: &Outline) {
        self.fill_polygon(outline.points(), outline.colour());
    }

    /// Read back a single pixel, un-premultiplied.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Colour> {
        self.pixmap.pixel(x, y).map(|p| {
            let c = p.demultiply();
            Colour::from([c.red(), c.green(), c.blue(), c.alpha()])
        })
    }

    /// Convert into a straight-alpha RGBA image.
    pub fn into_image(self) -> Result<RgbaImage> {
        let (width, height) = (self.width(), self.height());
        let raw: Vec<u8> = self
            .pixmap
            .pixels()
            .iter()
            .flat_map(|p| {
                let c = p.demultiply();
                [c.red(), c.green(), c.blue(), c.alpha()]
            })
            .collect();

        RgbaImage::from_raw(width, height, raw).ok_or_else(|| IconError::Render {
            message: format!("Pixel buffer does not match {}x{}", width, height),
            help: None,
        })
    }

    fn paint(&self, colour: Colour) -> Paint<'static> {
        let mut paint = Paint::default();
        paint.set_color_rgba8(colour.r, colour.g, colour.b, colour.a);
        paint.anti_alias = self.options.anti_alias;
        paint
    }
}
