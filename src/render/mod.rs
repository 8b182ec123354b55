//! Rendering module for appicons.
//!
//! This module handles rasterizing outlines onto a surface and writing
//! the result as PNG.

mod icon;
mod png;
mod surface;

pub use icon::{render_icon, DROP_SCALE, HEART_SCALE};
pub use png::write_png;
pub use surface::{RenderOptions, Surface};
