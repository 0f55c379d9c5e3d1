use gpui::{Bounds, Hsla, PathBuilder, Pixels, Point, Window, point};
use smallvec::SmallVec;

use super::ButtonKind;

/// A straight stroke of an icon glyph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IconSegment {
    pub from: Point<Pixels>,
    pub to: Point<Pixels>,
}

impl IconSegment {
    fn new(from: Point<Pixels>, to: Point<Pixels>) -> Self {
        Self { from, to }
    }
}

/// The square an icon is drawn in: centered in `rect`, with a side of
/// `scale` times the smaller side of `rect`.
pub fn icon_bounds(rect: Bounds<Pixels>, scale: f32) -> Bounds<Pixels> {
    let side = rect.size.width.min(rect.size.height) * scale;
    Bounds::centered_at(rect.center(), gpui::size(side, side))
}

/// Strokes of the glyph for `kind`: an X for close, a bar for minimize and a
/// plus for maximize.
pub fn icon_segments(
    kind: ButtonKind,
    rect: Bounds<Pixels>,
    scale: f32,
) -> SmallVec<[IconSegment; 2]> {
    let icon = icon_bounds(rect, scale);
    let center = icon.center();

    match kind {
        ButtonKind::Close => SmallVec::from_buf([
            IconSegment::new(icon.origin, icon.bottom_right()),
            IconSegment::new(icon.top_right(), icon.bottom_left()),
        ]),
        ButtonKind::Minimize => {
            let mut segments = SmallVec::new();
            segments.push(IconSegment::new(
                point(icon.left(), center.y),
                point(icon.right(), center.y),
            ));
            segments
        }
        ButtonKind::Maximize => SmallVec::from_buf([
            IconSegment::new(point(icon.left(), center.y), point(icon.right(), center.y)),
            IconSegment::new(point(center.x, icon.top()), point(center.x, icon.bottom())),
        ]),
    }
}

pub(crate) fn paint_segments(
    window: &mut Window,
    segments: &[IconSegment],
    stroke_width: Pixels,
    color: Hsla,
) {
    for segment in segments {
        let mut builder = PathBuilder::stroke(stroke_width);
        builder.move_to(segment.from);
        builder.line_to(segment.to);

        match builder.build() {
            Ok(path) => window.paint_path(path, color),
            Err(err) => log::trace!("skipping icon stroke {segment:?}: {err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gpui::{px, size};

    fn rect() -> Bounds<Pixels> {
        Bounds::new(point(px(10.), px(3.)), size(px(24.), px(18.)))
    }

    #[test]
    fn test_icon_is_centered_fraction_of_smaller_side() {
        let icon = icon_bounds(rect(), 0.5);
        assert_eq!(icon.size, size(px(9.), px(9.)));
        assert_eq!(icon.center(), rect().center());
    }

    #[test]
    fn test_glyph_shapes() {
        let close = icon_segments(ButtonKind::Close, rect(), 0.5);
        assert_eq!(close.len(), 2);
        assert_eq!(close[0].from, icon_bounds(rect(), 0.5).origin);

        let minimize = icon_segments(ButtonKind::Minimize, rect(), 0.5);
        assert_eq!(minimize.len(), 1);
        assert_eq!(minimize[0].from.y, minimize[0].to.y);

        let maximize = icon_segments(ButtonKind::Maximize, rect(), 0.5);
        assert_eq!(maximize.len(), 2);
        assert_eq!(maximize[1].from.x, maximize[1].to.x);
    }

    #[test]
    fn test_segments_stay_inside_button() {
        for kind in ButtonKind::ALL {
            for segment in icon_segments(kind, rect(), 0.8) {
                assert!(rect().contains(&segment.from));
                assert!(rect().contains(&segment.to));
            }
        }
    }
}
