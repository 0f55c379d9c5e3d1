use gpui::Hsla;

/// Extension trait for deriving related colors from a base color.
pub trait HslaExt {
    /// Returns the color with its lightness shifted by `delta`, clamped to `0..=1`.
    fn shift_brightness(self, delta: f32) -> Self;

    /// Returns the color with its saturation multiplied by `factor`.
    fn desaturate(self, factor: f32) -> Self;

    /// Desaturated and lightness-shifted variant used for inactive windows.
    fn dimmed(self, saturation_factor: f32, lightness_shift: f32) -> Self;
}

impl HslaExt for Hsla {
    fn shift_brightness(mut self, delta: f32) -> Self {
        self.l = (self.l + delta).clamp(0., 1.);
        self
    }

    fn desaturate(mut self, factor: f32) -> Self {
        self.s = (self.s * factor.clamp(0., 1.)).clamp(0., 1.);
        self
    }

    fn dimmed(self, saturation_factor: f32, lightness_shift: f32) -> Self {
        self.desaturate(saturation_factor)
            .shift_brightness(lightness_shift)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shift_brightness_clamps() {
        let color = gpui::hsla(0.5, 0.5, 0.95, 1.);
        assert_eq!(color.shift_brightness(0.2).l, 1.);
        assert_eq!(color.shift_brightness(-2.).l, 0.);
    }

    #[test]
    fn test_dimmed_reduces_saturation() {
        let color = gpui::hsla(0., 0.8, 0.5, 1.);
        let dimmed = color.dimmed(0.25, 0.1);
        assert!(dimmed.s < color.s);
        assert!(dimmed.l > color.l);
        assert_eq!(dimmed.h, color.h);
    }
}
