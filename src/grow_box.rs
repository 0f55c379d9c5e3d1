use gpui::{Bounds, ElementId, Hsla, Pixels, Styled, canvas, point, size};
use smallvec::SmallVec;

use crate::{
    DecorationContext,
    components::{OverlayAnchor, OverlayEntry, OverlayHost},
    titlebar::IconSegment,
};

/// The decorative grip in the bottom-right corner of resizable windows.
///
/// The grip lives in the window's [`OverlayHost`]; this type only decides
/// whether it is there and where it sits in the overlay order.
#[derive(Debug, Clone, PartialEq)]
pub struct ResizeGrip {
    size: Pixels,
    stroke_width: Pixels,
    color: Hsla,
}

impl ResizeGrip {
    pub const OVERLAY_ID: &'static str = "eau-resize-grip";

    pub fn new(context: &DecorationContext) -> Self {
        let theme = context.theme();
        Self {
            size: theme.metrics.grip_size,
            stroke_width: gpui_bezel::STROKE_WIDTH,
            color: theme.colors.grip.into(),
        }
    }

    pub fn size(&self) -> Pixels {
        self.size
    }

    fn id() -> ElementId {
        Self::OVERLAY_ID.into()
    }

    pub fn is_present(&self, host: &impl OverlayHost) -> bool {
        host.has_overlay(&Self::id())
    }

    /// Adds the grip above every other overlay, unless one is already there.
    /// Returns whether a grip was added.
    pub fn add_to_window(&self, host: &mut impl OverlayHost) -> bool {
        if self.is_present(host) {
            return false;
        }

        let stroke_width = self.stroke_width;
        let color = self.color;
        host.push_overlay(OverlayEntry::new(
            Self::OVERLAY_ID,
            OverlayAnchor::BottomRight(size(self.size, self.size)),
            move |_window, _cx| {
                canvas(
                    |_, _, _| {},
                    move |bounds, _, window, _| {
                        crate::titlebar::paint_segments(
                            window,
                            &grip_segments(bounds),
                            stroke_width,
                            color,
                        );
                    },
                )
                .size_full()
            },
        ));

        log::debug!("resize grip added");
        true
    }

    /// Moves an existing grip to the top of the overlay order.
    pub fn raise_in_window(&self, host: &mut impl OverlayHost) -> bool {
        let raised = host.raise_overlay(&Self::id());
        if raised {
            log::debug!("resize grip raised");
        }
        raised
    }

    pub fn remove_from_window(&self, host: &mut impl OverlayHost) -> bool {
        let removed = host.remove_overlay(&Self::id());
        if removed {
            log::debug!("resize grip removed");
        }
        removed
    }

    /// Adds or removes the grip to match the window's resizable flag.
    /// Returns whether anything changed.
    pub fn sync_with_resizable(&self, host: &mut impl OverlayHost, resizable: bool) -> bool {
        if resizable {
            self.add_to_window(host)
        } else {
            self.remove_from_window(host)
        }
    }
}

/// Three parallel diagonal strokes running from the bottom edge to the right
/// edge of `bounds`, each one shorter than the last.
pub fn grip_segments(bounds: Bounds<Pixels>) -> SmallVec<[IconSegment; 3]> {
    let side = bounds.size.width.min(bounds.size.height);
    let corner = bounds.bottom_right();

    (1..=3)
        .map(|step| {
            let reach = side * (step as f32 / 3.);
            IconSegment {
                from: point(corner.x - reach, corner.y),
                to: point(corner.x, corner.y - reach),
            }
        })
        .rev()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::OverlayStack;
    use gpui::px;
    use gpui_eau_theme::{Capabilities, Theme};

    fn grip() -> ResizeGrip {
        ResizeGrip::new(&DecorationContext::new(Theme::DEFAULT, Capabilities::default()))
    }

    #[test]
    fn test_add_is_idempotent() {
        let grip = grip();
        let mut stack = OverlayStack::new();

        assert!(grip.add_to_window(&mut stack));
        assert!(!grip.add_to_window(&mut stack));
        assert_eq!(stack.len(), 1);

        assert!(grip.remove_from_window(&mut stack));
        assert_eq!(stack.len(), 0);
        assert!(!grip.remove_from_window(&mut stack), "removing twice is a no-op");
    }

    #[test]
    fn test_raise_keeps_single_grip_on_top() {
        let grip = grip();
        let mut stack = OverlayStack::new();
        assert!(!grip.raise_in_window(&mut stack), "nothing to raise");

        grip.add_to_window(&mut stack);
        stack.push_overlay(OverlayEntry::new(
            "menu",
            OverlayAnchor::BottomRight(size(px(40.), px(40.))),
            |_, _| gpui::div(),
        ));

        assert!(grip.raise_in_window(&mut stack));
        assert_eq!(stack.len(), 2);
        assert_eq!(
            stack.iter().last().map(|entry| entry.id.clone()),
            Some(ResizeGrip::OVERLAY_ID.into())
        );
    }

    #[test]
    fn test_sync_follows_resizable_flag() {
        let grip = grip();
        let mut stack = OverlayStack::new();

        assert!(grip.sync_with_resizable(&mut stack, true));
        assert!(grip.is_present(&stack));
        assert!(!grip.sync_with_resizable(&mut stack, true));

        assert!(grip.sync_with_resizable(&mut stack, false));
        assert!(!grip.is_present(&stack));
    }

    #[test]
    fn test_grip_segments_hug_the_corner() {
        let bounds = Bounds::new(point(px(0.), px(0.)), size(px(12.), px(12.)));
        let segments = grip_segments(bounds);

        assert_eq!(segments.len(), 3);
        for segment in &segments {
            assert_eq!(segment.from.y, px(12.));
            assert_eq!(segment.to.x, px(12.));
            assert!(segment.from.x >= px(0.) && segment.to.y >= px(0.));
        }
        assert_eq!(segments[0].from.x, px(0.));
    }
}
