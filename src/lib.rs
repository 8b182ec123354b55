//! appicons - App icon generator
//!
//! Draws a white heart with a red drop on a blue circle, sampled from
//! parametric curves, and writes it as PNG at every size an iOS app icon
//! set needs.

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod output;
pub mod render;
pub mod shape;
pub mod types;

pub use config::{Config, CONFIG_FILENAME};
pub use error::{IconError, Result};
pub use export::IconExporter;
pub use render::{render_icon, write_png, RenderOptions, Surface};
pub use shape::{drop_outline, heart_outline, Outline, OUTLINE_SAMPLES};
pub use types::{Bounds, Colour, IconPalette, IconSpec, Point, IOS_ICON_DIMENSIONS};
