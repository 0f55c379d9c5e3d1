use gpui::{Background, ColorSpace, Hsla, linear_color_stop, linear_gradient};

use crate::HslaExt;

/// The family of control a gradient is drawn for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradientStyle {
    /// Raised push buttons: lighter at the top, darker at the bottom.
    Button,
    /// Window title bars: same bias as `Button` over a narrower range.
    Titlebar,
    /// Sunken generic controls: darker at the top, lighter at the bottom.
    Bezel,
}

impl GradientStyle {
    /// Brightness offsets used when the caller doesn't supply its own.
    pub const fn default_range(&self) -> BrightnessRange {
        match self {
            GradientStyle::Button => BrightnessRange::new(0.12, -0.08),
            GradientStyle::Titlebar => BrightnessRange::new(0.05, -0.04),
            GradientStyle::Bezel => BrightnessRange::new(-0.06, 0.08),
        }
    }
}

/// Axis along which a gradient runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GradientDirection {
    /// From the top edge to the bottom edge.
    #[default]
    Vertical,
    /// From the left edge to the right edge.
    Horizontal,
}

impl GradientDirection {
    /// CSS-style angle in degrees, so that the first stop lands on the top (or left) edge.
    pub const fn angle(&self) -> f32 {
        match self {
            GradientDirection::Vertical => 180.,
            GradientDirection::Horizontal => 90.,
        }
    }
}

/// Lightness offsets applied to a base color to get the two gradient stops.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrightnessRange {
    /// Offset of the first (top or left) stop.
    pub top: f32,
    /// Offset of the last (bottom or right) stop.
    pub bottom: f32,
}

impl BrightnessRange {
    /// Creates a range from the two stop offsets.
    pub const fn new(top: f32, bottom: f32) -> Self {
        Self { top, bottom }
    }

    /// Total lightness spread between the two stops.
    pub fn spread(&self) -> f32 {
        (self.top - self.bottom).abs()
    }
}

/// A two-stop linear gradient derived from a single base color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientSpec {
    /// The color the stops were derived from.
    pub base: Hsla,
    /// First stop color.
    pub top: Hsla,
    /// Last stop color.
    pub bottom: Hsla,
    /// Axis of the gradient.
    pub direction: GradientDirection,
}

impl GradientSpec {
    /// A "gradient" whose stops are both the base color.
    pub fn flat(base: impl Into<Hsla>) -> Self {
        let base = base.into();
        Self {
            base,
            top: base,
            bottom: base,
            direction: GradientDirection::Vertical,
        }
    }

    /// Returns the same stops running along `direction`.
    pub fn with_direction(mut self, direction: GradientDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Whether both stops are the same color.
    pub fn is_flat(&self) -> bool {
        self.top == self.bottom
    }

    /// The single color to fill with when both stops are equal. This is the
    /// stop color, which differs from `base` when the range shifted both stops.
    pub fn solid(&self) -> Option<Hsla> {
        self.is_flat().then_some(self.top)
    }

    /// Converts the spec into a GPUI fill.
    pub fn to_background(&self) -> Background {
        if let Some(color) = self.solid() {
            return color.into();
        }

        linear_gradient(
            self.direction.angle(),
            linear_color_stop(self.top, 0.),
            linear_color_stop(self.bottom, 1.),
        )
        .color_space(ColorSpace::Oklab)
    }
}

/// Builds the gradient for `style` using its default brightness range.
pub fn gradient(base: impl Into<Hsla>, style: GradientStyle) -> GradientSpec {
    gradient_with(base, style.default_range())
}

/// Builds a vertical gradient whose stops are `base` shifted by `range`.
pub fn gradient_with(base: impl Into<Hsla>, range: BrightnessRange) -> GradientSpec {
    let base = base.into();
    GradientSpec {
        base,
        top: base.shift_brightness(range.top),
        bottom: base.shift_brightness(range.bottom),
        direction: GradientDirection::Vertical,
    }
}
