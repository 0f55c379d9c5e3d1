use std::rc::Rc;

use gpui::{
    AnyElement, AnyView, App, AppContext as _, Bounds, Context, ElementId, Entity,
    InteractiveElement, IntoElement, ParentElement, Pixels, Render, Size, Styled, Window, div,
    prelude::FluentBuilder, px,
};

use crate::{DecorationContext, ElementIdExt, ResizeGrip, components::Titlebar};

/// Where an overlay is placed inside the window content.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OverlayAnchor {
    /// Fixed bounds relative to the top-left corner of the content.
    Bounds(Bounds<Pixels>),
    /// A box of the given size pinned to the bottom-right corner.
    BottomRight(Size<Pixels>),
}

type OverlayElement = Rc<dyn Fn(&mut Window, &mut App) -> AnyElement + 'static>;

/// A persistent overlay drawn above the window content.
#[derive(Clone)]
pub struct OverlayEntry {
    /// Identifies the overlay; at most one overlay per id is kept.
    pub id: ElementId,
    pub anchor: OverlayAnchor,
    /// Builds the overlay element on every frame.
    pub element: OverlayElement,
}

impl OverlayEntry {
    pub fn new<E: IntoElement>(
        id: impl Into<ElementId>,
        anchor: OverlayAnchor,
        element: impl Fn(&mut Window, &mut App) -> E + 'static,
    ) -> Self {
        Self {
            id: id.into(),
            anchor,
            element: Rc::new(move |window, cx| element(window, cx).into_any_element()),
        }
    }

    /// Id of the positioned wrapper the overlay is rendered in. It follows the
    /// entry through raises, so element state stays with the overlay.
    pub fn wrapper_id(&self) -> ElementId {
        self.id.child("overlay")
    }
}

/// Something that keeps overlays above a window's content, ordered back to front.
pub trait OverlayHost {
    fn has_overlay(&self, id: &ElementId) -> bool;

    /// Puts `entry` on top, replacing any overlay with the same id.
    fn push_overlay(&mut self, entry: OverlayEntry);

    /// Moves an overlay to the top. Returns false when there is none.
    fn raise_overlay(&mut self, id: &ElementId) -> bool;

    /// Returns false when there was nothing to remove.
    fn remove_overlay(&mut self, id: &ElementId) -> bool;
}

/// Overlays in z-order, topmost last.
#[derive(Default, Clone)]
pub struct OverlayStack {
    entries: Vec<OverlayEntry>,
}

impl OverlayStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &OverlayEntry> {
        self.entries.iter()
    }

    fn position(&self, id: &ElementId) -> Option<usize> {
        self.entries.iter().position(|entry| &entry.id == id)
    }
}

impl OverlayHost for OverlayStack {
    fn has_overlay(&self, id: &ElementId) -> bool {
        self.position(id).is_some()
    }

    fn push_overlay(&mut self, entry: OverlayEntry) {
        if let Some(index) = self.position(&entry.id) {
            self.entries.remove(index);
        }
        self.entries.push(entry);
    }

    fn raise_overlay(&mut self, id: &ElementId) -> bool {
        let Some(index) = self.position(id) else {
            return false;
        };

        let entry = self.entries.remove(index);
        self.entries.push(entry);
        true
    }

    fn remove_overlay(&mut self, id: &ElementId) -> bool {
        let Some(index) = self.position(id) else {
            return false;
        };

        self.entries.remove(index);
        true
    }
}

/// Root view of a decorated window: the title bar above the content, and
/// overlays above the content.
///
/// The resize grip starts hidden; hosts call [`DecorationRoot::set_resizable`]
/// with the window's resizable flag after creation and whenever it changes.
///
/// # Example
///
/// ```ignore
/// let context = DecorationContext::from_environment();
/// cx.open_window(options, |window, cx| {
///     let content = cx.new(|_| MyView);
///     cx.new(|cx| {
///         let mut root = DecorationRoot::new(context, "My window", content, window, cx);
///         root.set_resizable(true, cx);
///         root
///     })
/// });
/// ```
pub struct DecorationRoot {
    titlebar: Entity<Titlebar>,
    view: AnyView,
    overlays: OverlayStack,
    grip: ResizeGrip,
}

impl DecorationRoot {
    pub fn new(
        context: Rc<DecorationContext>,
        title: impl Into<gpui::SharedString>,
        view: impl Into<AnyView>,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let grip = ResizeGrip::new(&context);
        let title = title.into();
        let titlebar = cx.new(|cx| Titlebar::new(context, title, window, cx));

        Self {
            titlebar,
            view: view.into(),
            overlays: OverlayStack::new(),
            grip,
        }
    }

    pub fn titlebar(&self) -> &Entity<Titlebar> {
        &self.titlebar
    }

    pub fn overlays(&self) -> &OverlayStack {
        &self.overlays
    }

    /// Shows the resize grip exactly when `resizable` is set.
    pub fn set_resizable(&mut self, resizable: bool, cx: &mut Context<Self>) {
        if self.grip.sync_with_resizable(&mut self.overlays, resizable) {
            cx.notify();
        }
    }

    /// Brings the resize grip back above overlays pushed after it.
    pub fn raise_grip(&mut self, cx: &mut Context<Self>) {
        if self.grip.raise_in_window(&mut self.overlays) {
            cx.notify();
        }
    }
}

/// Changes made through this impl show up on the next render. Call
/// `cx.notify()` on the root afterwards, as [`DecorationRoot::set_resizable`]
/// and [`DecorationRoot::raise_grip`] do.
impl OverlayHost for DecorationRoot {
    fn has_overlay(&self, id: &ElementId) -> bool {
        self.overlays.has_overlay(id)
    }

    fn push_overlay(&mut self, entry: OverlayEntry) {
        self.overlays.push_overlay(entry);
    }

    fn raise_overlay(&mut self, id: &ElementId) -> bool {
        self.overlays.raise_overlay(id)
    }

    fn remove_overlay(&mut self, id: &ElementId) -> bool {
        self.overlays.remove_overlay(id)
    }
}

impl Render for DecorationRoot {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let overlays = self.overlays.clone();

        div()
            .id("eau-root")
            .size_full()
            .flex()
            .flex_col()
            .child(self.titlebar.clone())
            .child(
                div()
                    .id("eau-root-content")
                    .relative()
                    .flex_1()
                    .w_full()
                    .child(self.view.clone())
                    .when(!overlays.is_empty(), |this| {
                        this.children(overlays.iter().map(|overlay| {
                            let element = (overlay.element)(window, cx);

                            div()
                                .id(overlay.wrapper_id())
                                .absolute()
                                .map(|this| match overlay.anchor {
                                    OverlayAnchor::Bounds(bounds) => this
                                        .top(bounds.origin.y)
                                        .left(bounds.origin.x)
                                        .w(bounds.size.width)
                                        .h(bounds.size.height),
                                    OverlayAnchor::BottomRight(size) => this
                                        .bottom(px(0.))
                                        .right(px(0.))
                                        .w(size.width)
                                        .h(size.height),
                                })
                                .child(element)
                        }))
                    }),
            )
    }
}
