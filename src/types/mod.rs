//! Core domain types for appicons.
//!
//! This module contains the fundamental types used throughout the pipeline:
//! - `Colour` - RGBA colour values
//! - `Point`, `Bounds` - image-space geometry
//! - `IconSpec`, `IconPalette` - what to render and in which colours

mod colour;
mod icon_spec;
mod point;

pub use colour::Colour;
pub use icon_spec::{IconPalette, IconSpec, IOS_ICON_DIMENSIONS};
pub use point::{Bounds, Point};
