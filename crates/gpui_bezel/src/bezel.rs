use gpui::{
    BorderStyle, Bounds, Corners, Edges, Hsla, PaintQuad, Pixels, Window, point, px, size,
    transparent_black,
};

use crate::GradientSpec;

/// Width of every stroke drawn by this crate.
pub const STROKE_WIDTH: Pixels = px(1.);

/// A filled rounded rectangle. A radius of zero gives a plain rectangle.
pub fn round_rect_fill(
    bounds: Bounds<Pixels>,
    radius: Pixels,
    color: impl Into<Hsla>,
) -> PaintQuad {
    let color: Hsla = color.into();
    PaintQuad {
        bounds,
        corner_radii: Corners::all(radius),
        background: color.into(),
        border_widths: Edges::default(),
        border_color: transparent_black(),
        border_style: BorderStyle::default(),
    }
}

/// The 1-unit outline of a rounded rectangle.
pub fn round_rect_stroke(
    bounds: Bounds<Pixels>,
    radius: Pixels,
    color: impl Into<Hsla>,
) -> PaintQuad {
    PaintQuad {
        bounds,
        corner_radii: Corners::all(radius),
        background: transparent_black().into(),
        border_widths: Edges::all(STROKE_WIDTH),
        border_color: color.into(),
        border_style: BorderStyle::default(),
    }
}

/// A rounded bezel filled with `spec` and outlined with `stroke`.
pub fn bezel_quad(
    bounds: Bounds<Pixels>,
    radius: Pixels,
    spec: &GradientSpec,
    stroke: impl Into<Hsla>,
) -> PaintQuad {
    PaintQuad {
        bounds,
        corner_radii: Corners::all(radius),
        background: spec.to_background(),
        border_widths: Edges::all(STROKE_WIDTH),
        border_color: stroke.into(),
        border_style: BorderStyle::default(),
    }
}

/// Paints a bezel into the window's current drawing context.
pub fn paint_bezel(
    window: &mut Window,
    bounds: Bounds<Pixels>,
    radius: Pixels,
    spec: &GradientSpec,
    stroke: impl Into<Hsla>,
) {
    window.paint_quad(bezel_quad(bounds, radius, spec, stroke));
}

/// Edge colors of an inner bezel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InnerBezelColors {
    /// Line along the top edge.
    pub highlight: Hsla,
    /// Line along the bottom edge.
    pub shadow: Hsla,
}

/// The two edge lines of an inner bezel and the area left inside them.
pub struct InnerBezel {
    /// Top line, `None` when clipped away entirely.
    pub highlight: Option<PaintQuad>,
    /// Bottom line, `None` when clipped away entirely.
    pub shadow: Option<PaintQuad>,
    /// Space remaining inside the bezel for nested content.
    pub remaining: Bounds<Pixels>,
}

/// Lays out a highlight/shadow pair one unit inside the top and bottom edges
/// of `border`, clipped to `clip`.
pub fn inner_bezel(
    border: Bounds<Pixels>,
    clip: Bounds<Pixels>,
    colors: InnerBezelColors,
) -> InnerBezel {
    let line_width = border.size.width - STROKE_WIDTH * 2.;

    let highlight_line = Bounds::new(
        point(border.left() + STROKE_WIDTH, border.top() + STROKE_WIDTH),
        size(line_width, STROKE_WIDTH),
    );
    let shadow_line = Bounds::new(
        point(
            border.left() + STROKE_WIDTH,
            border.bottom() - STROKE_WIDTH * 2.,
        ),
        size(line_width, STROKE_WIDTH),
    );

    let remaining = Bounds::from_corners(
        point(border.left() + STROKE_WIDTH, border.top() + STROKE_WIDTH * 2.),
        point(
            border.right() - STROKE_WIDTH,
            border.bottom() - STROKE_WIDTH * 2.,
        ),
    );

    InnerBezel {
        highlight: clipped_line(highlight_line, clip, colors.highlight),
        shadow: clipped_line(shadow_line, clip, colors.shadow),
        remaining,
    }
}

/// Paints an inner bezel and returns the rectangle remaining inside it.
pub fn paint_inner_bezel(
    window: &mut Window,
    border: Bounds<Pixels>,
    clip: Bounds<Pixels>,
    colors: InnerBezelColors,
) -> Bounds<Pixels> {
    let bezel = inner_bezel(border, clip, colors);

    for line in [bezel.highlight, bezel.shadow].into_iter().flatten() {
        window.paint_quad(line);
    }

    bezel.remaining
}

fn clipped_line(line: Bounds<Pixels>, clip: Bounds<Pixels>, color: Hsla) -> Option<PaintQuad> {
    if !line.intersects(&clip) {
        return None;
    }

    let visible = line.intersect(&clip);
    if visible.size.width <= px(0.) || visible.size.height <= px(0.) {
        return None;
    }

    Some(round_rect_fill(visible, px(0.), color))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GradientStyle, gradient};
    use gpui::hsla;

    fn colors() -> InnerBezelColors {
        InnerBezelColors {
            highlight: hsla(0., 0., 1., 0.6),
            shadow: hsla(0., 0., 0., 0.3),
        }
    }

    #[test]
    fn test_zero_radius_is_plain_rect() {
        let bounds = Bounds::new(point(px(0.), px(0.)), size(px(20.), px(10.)));
        let quad = round_rect_fill(bounds, px(0.), hsla(0., 0., 0.5, 1.));
        assert_eq!(quad.corner_radii, Corners::all(px(0.)));
        assert_eq!(quad.border_widths, Edges::default());
    }

    #[test]
    fn test_stroke_is_one_unit() {
        let bounds = Bounds::new(point(px(0.), px(0.)), size(px(20.), px(10.)));
        let quad = round_rect_stroke(bounds, px(4.), hsla(0., 0., 0., 1.));
        assert_eq!(quad.border_widths, Edges::all(px(1.)));
        assert_eq!(quad.corner_radii, Corners::all(px(4.)));

        let spec = gradient(hsla(0., 0., 0.6, 1.), GradientStyle::Button);
        let bezel = bezel_quad(bounds, px(3.), &spec, hsla(0., 0., 0.2, 1.));
        assert_eq!(bezel.border_widths, Edges::all(STROKE_WIDTH));
        assert_eq!(bezel.bounds, bounds);
    }

    #[test]
    fn test_inner_bezel_lines_and_remaining() {
        let border = Bounds::new(point(px(10.), px(10.)), size(px(100.), px(20.)));
        let bezel = inner_bezel(border, border, colors());

        let highlight = bezel.highlight.expect("highlight should be visible");
        assert_eq!(highlight.bounds.origin, point(px(11.), px(11.)));
        assert_eq!(highlight.bounds.size, size(px(98.), px(1.)));

        let shadow = bezel.shadow.expect("shadow should be visible");
        assert_eq!(shadow.bounds.origin, point(px(11.), px(28.)));

        assert_eq!(bezel.remaining.origin, point(px(11.), px(12.)));
        assert_eq!(bezel.remaining.size, size(px(98.), px(16.)));
    }

    #[test]
    fn test_inner_bezel_respects_clip() {
        let border = Bounds::new(point(px(0.), px(0.)), size(px(100.), px(20.)));
        let top_half = Bounds::new(point(px(0.), px(0.)), size(px(50.), px(10.)));
        let bezel = inner_bezel(border, top_half, colors());

        let highlight = bezel.highlight.expect("highlight overlaps the clip");
        assert_eq!(highlight.bounds.size.width, px(49.));
        assert!(bezel.shadow.is_none(), "shadow lies outside the clip");
    }
}
