//! Outline generation for the icon's heart and drop.
//!
//! Both shapes are sampled from parametric curves into closed polygons.
//! Generation is pure: the same inputs always give the same points.

use crate::types::{Colour, Point};

/// Number of points in every generated outline.
pub const OUTLINE_SAMPLES: usize = 360;

/// Points per edge of the drop (right edge down, left edge back up).
const DROP_EDGE_SAMPLES: usize = OUTLINE_SAMPLES / 2;

/// A closed polygon with the colour it should be filled with.
///
/// The last point connects back to the first when filled.
#[derive(Debug, Clone, PartialEq)]
pub struct Outline {
    points: Vec<Point>,
    colour: Colour,
}

impl Outline {
    pub fn new(points: Vec<Point>, colour: Colour) -> Self {
        Self { points, colour }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn colour(&self) -> Colour {
        self.colour
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Sample the classic parametric heart around `center`.
///
/// `x = 16 sin³t`, `y = -(13 cos t - 5 cos 2t - 2 cos 3t - cos 4t)`, taken at
/// every whole degree and scaled so the curve's unit of 16 maps to
/// `size * 0.35`.
pub fn heart_outline(center: Point, size: f32, colour: Colour) -> Outline {
    let scale = size * 0.35 / 16.0;

    let points = (0..OUTLINE_SAMPLES)
        .map(|deg| {
            let t = (deg as f32).to_radians();
            let x = 16.0 * t.sin().powi(3);
            let y = -(13.0 * t.cos()
                - 5.0 * (2.0 * t).cos()
                - 2.0 * (3.0 * t).cos()
                - (4.0 * t).cos());

            Point::new(center.x + x * scale, center.y + y * scale)
        })
        .collect();

    Outline::new(points, colour)
}

/// Sample a teardrop around `center`.
///
/// The right edge bulges outward by a half sine as it runs down from
/// `center.y - 0.1 * size`; the left edge mirrors it on the way back up.
pub fn drop_outline(center: Point, size: f32, colour: Colour) -> Outline {
    let axis_x = center.x + size * 0.05;
    let top_y = center.y - size * 0.1;
    let half_width = size * 0.08;
    let length = size * 0.15;

    let edge_point = |i: usize, side: f32| {
        let t = (i as f32).to_radians();
        let progress = i as f32 / DROP_EDGE_SAMPLES as f32;
        Point::new(
            axis_x + side * t.sin() * half_width,
            top_y + progress * length,
        )
    };

    let right = (0..DROP_EDGE_SAMPLES).map(|i| edge_point(i, 1.0));
    let left = (1..=DROP_EDGE_SAMPLES).rev().map(|i| edge_point(i, -1.0));

    Outline::new(right.chain(left).collect(), colour)
}
