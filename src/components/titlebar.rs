use std::{cell::Cell, rc::Rc};

use gpui::{
    App, Bounds, ClickEvent, Context, ElementId, InteractiveElement, IntoElement, MouseButton,
    MouseDownEvent, MouseUpEvent, ParentElement, Pixels, Point, Render, SharedString,
    StatefulInteractiveElement, Styled, Subscription, Window, WindowControlArea, canvas, div,
    prelude::FluentBuilder,
};

use crate::{
    DecorationContext, ElementIdExt,
    geometry::HorizontalEdge,
    titlebar::{ButtonAction, ButtonKind, TitlebarButtons, TitlebarRenderer},
};

type ActionHandler = Rc<dyn Fn(ButtonAction, &mut Window, &mut App) + 'static>;

/// A window title bar with close, minimize and maximize buttons.
///
/// Clicked buttons are handed to the handler set with [`Titlebar::on_action`];
/// without one, they close, minimize or zoom the window.
pub struct Titlebar {
    id: ElementId,
    renderer: TitlebarRenderer,
    title: SharedString,
    buttons: TitlebarButtons,
    window_active: bool,
    on_action: Option<ActionHandler>,
    /// Painted bounds from the last frame, in window coordinates.
    bounds: Rc<Cell<Bounds<Pixels>>>,
    _activation: Subscription,
}

impl Titlebar {
    pub fn new(
        context: Rc<DecorationContext>,
        title: impl Into<SharedString>,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let window_active = window.is_window_active();
        let activation = cx.observe_window_activation(window, |this, window, cx| {
            this.set_window_active(window.is_window_active(), cx);
        });

        Self {
            id: ElementId::Name("eau-titlebar".into()),
            renderer: TitlebarRenderer::new(context),
            title: title.into(),
            buttons: TitlebarButtons::new(window_active),
            window_active,
            on_action: None,
            bounds: Rc::default(),
            _activation: activation,
        }
    }

    pub fn title(&self) -> &SharedString {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<SharedString>, cx: &mut Context<Self>) {
        self.title = title.into();
        cx.notify();
    }

    pub fn buttons(&self) -> &TitlebarButtons {
        &self.buttons
    }

    pub fn is_window_active(&self) -> bool {
        self.window_active
    }

    pub fn set_window_active(&mut self, active: bool, cx: &mut Context<Self>) {
        if self.window_active == active {
            return;
        }

        self.window_active = active;
        self.buttons.set_window_active(active);
        cx.notify();
    }

    pub fn set_button_enabled(&mut self, kind: ButtonKind, enabled: bool, cx: &mut Context<Self>) {
        let button = self.buttons.get_mut(kind);
        if enabled {
            button.enable();
        } else {
            button.disable();
        }
        cx.notify();
    }

    /// Replaces the default window actions for clicked buttons.
    pub fn on_action(&mut self, handler: impl Fn(ButtonAction, &mut Window, &mut App) + 'static) {
        self.on_action = Some(Rc::new(handler));
    }

    /// The button under a window-space `position`, as of the last paint.
    pub fn button_at(&self, position: Point<Pixels>) -> Option<ButtonKind> {
        let bounds = self.bounds.get();
        self.renderer
            .geometry()
            .hit_test(position - bounds.origin, bounds.size.width)
    }

    fn perform(&self, action: ButtonAction, window: &mut Window, cx: &mut App) {
        log::debug!("title bar action {action:?}");

        if let Some(handler) = &self.on_action {
            handler(action, window, cx);
            return;
        }

        match action {
            ButtonAction::CloseWindow => window.remove_window(),
            ButtonAction::MinimizeWindow => window.minimize_window(),
            ButtonAction::ZoomWindow => window.zoom_window(),
        }
    }

    fn render_hit_area(&self, kind: ButtonKind, cx: &mut Context<Self>) -> impl IntoElement {
        let anchor = self.renderer.geometry().anchor(kind.default_position());

        div()
            .id(self.id.for_button(kind))
            .absolute()
            .top(anchor.top)
            .w(anchor.size.width)
            .h(anchor.size.height)
            .map(|this| match anchor.edge {
                HorizontalEdge::Left => this.left(anchor.offset),
                HorizontalEdge::Right => this.right(anchor.offset),
            })
            .occlude()
            .on_hover(cx.listener(move |this, hovered: &bool, _window, cx| {
                let button = this.buttons.get_mut(kind);
                if *hovered {
                    button.pointer_enter();
                } else {
                    button.pointer_exit();
                }
                cx.notify();
            }))
            .on_mouse_down(
                MouseButton::Left,
                cx.listener(move |this, _event: &MouseDownEvent, _window, cx| {
                    cx.stop_propagation();
                    this.buttons.get_mut(kind).pointer_down(true);
                    cx.notify();
                }),
            )
            .on_mouse_up(
                MouseButton::Left,
                cx.listener(move |this, _event: &MouseUpEvent, window, cx| {
                    cx.stop_propagation();
                    if let Some(action) = this.buttons.get_mut(kind).pointer_up(true) {
                        this.perform(action, window, cx);
                    }
                    cx.notify();
                }),
            )
            .on_mouse_up_out(
                MouseButton::Left,
                cx.listener(move |this, _event: &MouseUpEvent, _window, cx| {
                    this.buttons.get_mut(kind).pointer_up(false);
                    cx.notify();
                }),
            )
    }
}

impl Render for Titlebar {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let renderer = self.renderer.clone();
        let title = self.title.clone();
        let buttons = self.buttons.clone();
        let active = self.window_active;
        let painted_bounds = self.bounds.clone();

        div()
            .id(self.id.clone())
            .relative()
            .flex_none()
            .w_full()
            .h(self.renderer.geometry().titlebar_height())
            .window_control_area(WindowControlArea::Drag)
            .on_mouse_down(
                MouseButton::Left,
                cx.listener(|this, event: &MouseDownEvent, window, _cx| {
                    if this.button_at(event.position).is_none() {
                        window.start_window_move();
                    }
                }),
            )
            .on_click(cx.listener(|this, event: &ClickEvent, window, cx| {
                if event.click_count() == 2 {
                    this.perform(ButtonAction::ZoomWindow, window, cx);
                }
            }))
            .child(
                canvas(
                    move |bounds, _window, _cx| painted_bounds.set(bounds),
                    move |bounds, _, window, cx| {
                        renderer.paint(bounds, &title, &buttons, active, window, cx);
                    },
                )
                .absolute()
                .size_full(),
            )
            .children(ButtonKind::ALL.map(|kind| self.render_hit_area(kind, cx)))
    }
}

#[cfg(all(test, feature = "test-support"))]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::titlebar::InteractionState;
    use gpui::{Entity, Modifiers, TestAppContext, VisualTestContext};
    use gpui_eau_theme::{Capabilities, Theme};

    fn context() -> Rc<DecorationContext> {
        DecorationContext::new(Theme::DEFAULT, Capabilities::default())
    }

    type Received = Rc<RefCell<Vec<ButtonAction>>>;

    fn recording_titlebar(
        cx: &mut TestAppContext,
    ) -> (Entity<Titlebar>, Received, &mut VisualTestContext) {
        let received = Received::default();
        let (titlebar, cx) = cx.add_window_view({
            let received = received.clone();
            move |window, cx| {
                let mut titlebar = Titlebar::new(context(), "Mail", window, cx);
                titlebar.on_action(move |action, _, _| received.borrow_mut().push(action));
                titlebar
            }
        });
        cx.run_until_parked();
        (titlebar, received, cx)
    }

    /// Window-space rects for the title bar, which is the window's root view.
    fn rects(
        titlebar: &Entity<Titlebar>,
        cx: &mut VisualTestContext,
    ) -> (Bounds<Pixels>, Bounds<Pixels>) {
        let width = cx.update(|window, _| window.viewport_size().width);
        titlebar.read_with(cx, |titlebar, _| {
            let geometry = titlebar.renderer.geometry();
            (geometry.minimize_button_rect(width), geometry.title_rect(width))
        })
    }

    fn interaction(titlebar: &Entity<Titlebar>, cx: &mut VisualTestContext) -> InteractionState {
        titlebar.read_with(cx, |titlebar, _| {
            titlebar.buttons().get(ButtonKind::Minimize).interaction()
        })
    }

    #[gpui::test]
    fn test_titlebar_renders(cx: &mut TestAppContext) {
        let (titlebar, cx) =
            cx.add_window_view(|window, cx| Titlebar::new(context(), "Documents", window, cx));

        titlebar.read_with(cx, |titlebar, _| {
            assert_eq!(titlebar.title(), &SharedString::from("Documents"));
            assert_eq!(titlebar.buttons().iter().count(), 3);
        });
        cx.run_until_parked();
    }

    #[gpui::test]
    fn test_activation_reaches_every_button(cx: &mut TestAppContext) {
        let (titlebar, cx) =
            cx.add_window_view(|window, cx| Titlebar::new(context(), "", window, cx));

        titlebar.update(cx, |titlebar, cx| titlebar.set_window_active(false, cx));
        titlebar.read_with(cx, |titlebar, _| {
            assert!(!titlebar.is_window_active());
            assert!(titlebar.buttons().iter().all(|button| !button.window_active()));
        });

        titlebar.update(cx, |titlebar, cx| titlebar.set_window_active(true, cx));
        titlebar.read_with(cx, |titlebar, _| {
            assert!(titlebar.buttons().iter().all(|button| button.window_active()));
        });
    }

    #[gpui::test]
    fn test_custom_handler_receives_actions(cx: &mut TestAppContext) {
        let received = Rc::new(RefCell::new(Vec::new()));
        let (titlebar, cx) =
            cx.add_window_view(|window, cx| Titlebar::new(context(), "Mail", window, cx));

        titlebar.update_in(cx, |titlebar, window, cx| {
            let received = received.clone();
            titlebar.on_action(move |action, _, _| received.borrow_mut().push(action));

            let button = titlebar.buttons.get_mut(ButtonKind::Minimize);
            button.pointer_down(true);
            if let Some(action) = button.pointer_up(true) {
                titlebar.perform(action, window, cx);
            }
        });

        assert_eq!(*received.borrow(), vec![ButtonAction::MinimizeWindow]);
    }

    #[gpui::test]
    fn test_pointer_click_on_button_fires_once(cx: &mut TestAppContext) {
        let (titlebar, received, cx) = recording_titlebar(cx);
        let (minimize, _) = rects(&titlebar, cx);
        let target = minimize.center();

        cx.simulate_mouse_move(target, None, Modifiers::none());
        assert_eq!(interaction(&titlebar, cx), InteractionState::Hovered);

        cx.simulate_mouse_down(target, MouseButton::Left, Modifiers::none());
        assert_eq!(interaction(&titlebar, cx), InteractionState::Pressed);
        assert!(received.borrow().is_empty(), "nothing fires on press");

        cx.simulate_mouse_up(target, MouseButton::Left, Modifiers::none());
        assert_eq!(*received.borrow(), vec![ButtonAction::MinimizeWindow]);
        assert_eq!(interaction(&titlebar, cx), InteractionState::Hovered);
    }

    #[gpui::test]
    fn test_pointer_release_outside_cancels(cx: &mut TestAppContext) {
        let (titlebar, received, cx) = recording_titlebar(cx);
        let (minimize, title) = rects(&titlebar, cx);

        cx.simulate_mouse_move(minimize.center(), None, Modifiers::none());
        cx.simulate_mouse_down(minimize.center(), MouseButton::Left, Modifiers::none());
        cx.simulate_mouse_move(title.center(), MouseButton::Left, Modifiers::none());
        cx.simulate_mouse_up(title.center(), MouseButton::Left, Modifiers::none());

        assert!(received.borrow().is_empty());
        assert_eq!(interaction(&titlebar, cx), InteractionState::Normal);
    }

    #[gpui::test]
    fn test_button_at_uses_painted_bounds(cx: &mut TestAppContext) {
        let (titlebar, _received, cx) = recording_titlebar(cx);
        let (minimize, title) = rects(&titlebar, cx);

        titlebar.read_with(cx, |titlebar, _| {
            assert_eq!(titlebar.button_at(minimize.center()), Some(ButtonKind::Minimize));
            assert_eq!(titlebar.button_at(title.center()), None);
        });
    }

    #[gpui::test]
    fn test_disabled_button_stays_disabled(cx: &mut TestAppContext) {
        let (titlebar, cx) =
            cx.add_window_view(|window, cx| Titlebar::new(context(), "", window, cx));

        titlebar.update(cx, |titlebar, cx| {
            titlebar.set_button_enabled(ButtonKind::Close, false, cx);
            titlebar.set_window_active(false, cx);
            titlebar.set_window_active(true, cx);
        });

        titlebar.read_with(cx, |titlebar, _| {
            assert!(titlebar.buttons().get(ButtonKind::Close).is_disabled());
        });
    }
}
