//! Title bar buttons: their state machine, glyphs and painting.

mod button;
pub use button::*;

mod icon;
pub use icon::{IconSegment, icon_bounds, icon_segments};
pub(crate) use icon::paint_segments;

mod renderer;
pub use renderer::*;
