//! Icon composition: background circle, heart, drop.

use image::RgbaImage;

use crate::error::Result;
use crate::shape::{drop_outline, heart_outline};
use crate::types::{Bounds, IconPalette, Point};

use super::{RenderOptions, Surface};

/// Heart size as a fraction of the icon dimension.
pub const HEART_SCALE: f32 = 0.5;

/// Drop size as a fraction of the icon dimension.
pub const DROP_SCALE: f32 = 0.2;

/// Render the icon at `dimension` x `dimension` pixels.
///
/// The background circle fills the whole square; heart and drop share the
/// center `(dimension / 2, dimension / 2)` using integer halving.
pub fn render_icon(
    dimension: u32,
    palette: &IconPalette,
    options: RenderOptions,
) -> Result<RgbaImage> {
    let mut surface = Surface::new(dimension, dimension, options)?;

    surface.fill_ellipse(Bounds::from_size(dimension, dimension), palette.background)?;

    let half = (dimension / 2) as f32;
    let center = Point::new(half, half);
    let size = dimension as f32;

    surface.fill_outline(&heart_outline(center, size * HEART_SCALE, palette.heart));
    surface.fill_outline(&drop_outline(center, size * DROP_SCALE, palette.drop));

    surface.into_image()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Colour;

    fn render(dimension: u32) -> RgbaImage {
        render_icon(dimension, &IconPalette::default(), RenderOptions::default()).unwrap()
    }

    #[test]
    fn test_icon_is_square() {
        for dimension in [20, 29, 87] {
            let img = render(dimension);
            assert_eq!(img.dimensions(), (dimension, dimension));
        }
    }

    #[test]
    fn test_background_reaches_edges() {
        let img = render(20);
        assert_ne!(img.get_pixel(0, 10).0[3], 0);
        assert_ne!(img.get_pixel(10, 0).0[3], 0);
        assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0, 0]);
    }

    #[test]
    fn test_layers_at_full_size() {
        let img = render(1024);

        // Background, clear of heart and drop
        assert_eq!(img.get_pixel(100, 512).0, Colour::ICON_BLUE.to_rgba());
        // Lower heart body, below the drop
        assert_eq!(img.get_pixel(512, 600).0, Colour::WHITE.to_rgba());
        // Inside the drop
        assert_eq!(img.get_pixel(522, 505).0, Colour::ICON_RED.to_rgba());
        // Outside the circle
        assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0, 0]);
        assert_eq!(img.get_pixel(1023, 1023).0, [0, 0, 0, 0]);
    }

    #[test]
    fn test_custom_palette() {
        let palette = IconPalette {
            background: Colour::rgb(10, 20, 30),
            heart: Colour::rgb(40, 50, 60),
            drop: Colour::rgb(70, 80, 90),
        };
        let img = render_icon(1024, &palette, RenderOptions::default()).unwrap();

        assert_eq!(img.get_pixel(100, 512).0, [10, 20, 30, 255]);
        assert_eq!(img.get_pixel(512, 600).0, [40, 50, 60, 255]);
        assert_eq!(img.get_pixel(522, 505).0, [70, 80, 90, 255]);
    }

    #[test]
    fn test_without_anti_alias_only_palette_colours() {
        let palette = IconPalette::default();
        let img = render_icon(58, &palette, RenderOptions { anti_alias: false }).unwrap();

        let allowed = [
            Colour::TRANSPARENT.to_rgba(),
            palette.background.to_rgba(),
            palette.heart.to_rgba(),
            palette.drop.to_rgba(),
        ];
        assert!(img.pixels().all(|p| allowed.contains(&p.0)));
    }

    #[test]
    fn test_render_is_deterministic() {
        assert_eq!(render(40), render(40));
    }

    #[test]
    fn test_zero_dimension_is_error() {
        assert!(render_icon(0, &IconPalette::default(), RenderOptions::default()).is_err());
    }
}
