#![warn(missing_docs)]

//! Gradient and bezel drawing primitives built on GPUI.
//!
//! Everything here is stateless: gradients are recomputed from a base color on
//! every call so live theme changes (accent color, light/dark switch) show up
//! on the next paint. Primitives are returned as [`gpui::PaintQuad`]s so callers
//! can inspect them before painting; the `paint_*` wrappers paint into the
//! window's current drawing context.

mod bezel;
mod color;
mod gradient;

pub use bezel::*;
pub use color::*;
pub use gradient::*;
