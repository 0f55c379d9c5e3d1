//! Eau window decorations for GPUI.
//!
//! Lays out and paints title bars with close/minimize/maximize buttons, tracks
//! each button's interaction state, and manages the resize grip overlay of
//! resizable windows. Gradients and bezels come from [`gpui_bezel`], theme
//! data from [`gpui_eau_theme`].

pub mod components;

pub mod geometry;

pub mod titlebar;

mod grow_box;
pub use grow_box::*;

mod utils;
pub use utils::ElementIdExt;

mod context;
pub use context::*;

pub use gpui_eau_theme as theme;
