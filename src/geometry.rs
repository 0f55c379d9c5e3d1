//! Title bar button layout.
//!
//! Every query is a pure function of the title bar width. The close button
//! sits at the left edge; minimize and maximize sit side by side at the right
//! edge. Widths below [`ButtonGeometry::min_titlebar_width`] produce
//! overlapping rectangles, which is accepted rather than guarded against.

use gpui::{Bounds, Pixels, Point, Size, point, px, size};
use gpui_eau_theme::ThemeMetrics;

use crate::titlebar::{ButtonKind, ButtonPosition};

/// The title bar edge a button is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalEdge {
    Left,
    Right,
}

/// Width-independent placement of a button, relative to the edge it hangs from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonAnchor {
    pub edge: HorizontalEdge,
    /// Distance from `edge` to the button's near side.
    pub offset: Pixels,
    pub top: Pixels,
    pub size: Size<Pixels>,
}

/// All button rectangles for one title bar width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TitlebarLayout {
    pub close: Bounds<Pixels>,
    pub minimize: Bounds<Pixels>,
    pub maximize: Bounds<Pixels>,
    /// Smallest rectangle enclosing `minimize` and `maximize`.
    pub right_cluster: Bounds<Pixels>,
}

impl TitlebarLayout {
    pub fn button(&self, kind: ButtonKind) -> Bounds<Pixels> {
        match kind {
            ButtonKind::Close => self.close,
            ButtonKind::Minimize => self.minimize,
            ButtonKind::Maximize => self.maximize,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ButtonGeometry {
    titlebar_height: Pixels,
    button_size: Size<Pixels>,
    edge_inset: Pixels,
    button_gap: Pixels,
}

impl ButtonGeometry {
    pub fn new(metrics: &ThemeMetrics) -> Self {
        Self {
            titlebar_height: metrics.titlebar_height,
            button_size: size(metrics.button_width, metrics.button_height),
            edge_inset: metrics.edge_inset,
            button_gap: metrics.button_gap,
        }
    }

    pub fn titlebar_height(&self) -> Pixels {
        self.titlebar_height
    }

    pub fn button_size(&self) -> Size<Pixels> {
        self.button_size
    }

    /// Narrowest width at which no two rectangles overlap.
    pub fn min_titlebar_width(&self) -> Pixels {
        self.edge_inset * 2. + self.button_size.width * 3. + self.button_gap * 2.
    }

    pub fn anchor(&self, position: ButtonPosition) -> ButtonAnchor {
        let (edge, offset) = match position {
            ButtonPosition::Left => (HorizontalEdge::Left, self.edge_inset),
            ButtonPosition::RightRight => (HorizontalEdge::Right, self.edge_inset),
            ButtonPosition::RightLeft => (
                HorizontalEdge::Right,
                self.edge_inset + self.button_size.width + self.button_gap,
            ),
        };

        ButtonAnchor {
            edge,
            offset,
            top: (self.titlebar_height - self.button_size.height) / 2.,
            size: self.button_size,
        }
    }

    pub fn rect_for_position(
        &self,
        position: ButtonPosition,
        titlebar_width: Pixels,
    ) -> Bounds<Pixels> {
        let anchor = self.anchor(position);
        let left = match anchor.edge {
            HorizontalEdge::Left => anchor.offset,
            HorizontalEdge::Right => titlebar_width - anchor.offset - anchor.size.width,
        };

        Bounds::new(point(left, anchor.top), anchor.size)
    }

    pub fn button_rect(&self, kind: ButtonKind, titlebar_width: Pixels) -> Bounds<Pixels> {
        self.rect_for_position(kind.default_position(), titlebar_width)
    }

    pub fn close_button_rect(&self, titlebar_width: Pixels) -> Bounds<Pixels> {
        self.button_rect(ButtonKind::Close, titlebar_width)
    }

    pub fn minimize_button_rect(&self, titlebar_width: Pixels) -> Bounds<Pixels> {
        self.button_rect(ButtonKind::Minimize, titlebar_width)
    }

    pub fn maximize_button_rect(&self, titlebar_width: Pixels) -> Bounds<Pixels> {
        self.button_rect(ButtonKind::Maximize, titlebar_width)
    }

    pub fn right_button_region_rect(&self, titlebar_width: Pixels) -> Bounds<Pixels> {
        self.rect_for_position(ButtonPosition::RightLeft, titlebar_width)
            .union(&self.rect_for_position(ButtonPosition::RightRight, titlebar_width))
    }

    pub fn layout(&self, titlebar_width: Pixels) -> TitlebarLayout {
        TitlebarLayout {
            close: self.close_button_rect(titlebar_width),
            minimize: self.minimize_button_rect(titlebar_width),
            maximize: self.maximize_button_rect(titlebar_width),
            right_cluster: self.right_button_region_rect(titlebar_width),
        }
    }

    /// Space left for the title between the close button and the right cluster.
    pub fn title_rect(&self, titlebar_width: Pixels) -> Bounds<Pixels> {
        let left = self.close_button_rect(titlebar_width).right() + self.button_gap;
        let right = self.right_button_region_rect(titlebar_width).left() - self.button_gap;

        Bounds::new(
            point(left, px(0.)),
            size((right - left).max(px(0.)), self.titlebar_height),
        )
    }

    /// The button under `position`, in title bar coordinates.
    pub fn hit_test(
        &self,
        position: Point<Pixels>,
        titlebar_width: Pixels,
    ) -> Option<ButtonKind> {
        let layout = self.layout(titlebar_width);
        ButtonKind::ALL
            .into_iter()
            .find(|kind| layout.button(*kind).contains(&position))
    }
}
