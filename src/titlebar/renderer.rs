use std::rc::Rc;

use gpui::{
    App, Bounds, ContentMask, FontFallbacks, Hsla, Pixels, SharedString, TextRun, Window, fill,
    font, point, px, size,
};
use gpui_bezel::{
    GradientSpec, HslaExt, InnerBezelColors, STROKE_WIDTH, bezel_quad, gradient_with,
    paint_inner_bezel, round_rect_fill,
};
use gpui_eau_theme::{ButtonShape, Theme, TitleAlignment};

use super::{
    ButtonKind, InteractionState, TitlebarButtons, VisualState,
    icon::{icon_segments, paint_segments},
};
use crate::{DecorationContext, geometry::ButtonGeometry};

/// Colors of a title bar background and its title.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TitlebarAppearance {
    pub background: GradientSpec,
    pub text: Hsla,
    /// Separator line along the bottom edge.
    pub separator: Hsla,
}

/// Colors of a single button in one visual state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonAppearance {
    pub state: VisualState,
    pub fill: GradientSpec,
    pub stroke: Hsla,
    pub icon: Hsla,
    pub bezel: InnerBezelColors,
}

/// Paints title bars and their buttons for one [`DecorationContext`].
#[derive(Clone)]
pub struct TitlebarRenderer {
    context: Rc<DecorationContext>,
    geometry: ButtonGeometry,
}

impl TitlebarRenderer {
    pub fn new(context: Rc<DecorationContext>) -> Self {
        let geometry = context.geometry();
        Self { context, geometry }
    }

    pub fn context(&self) -> &Rc<DecorationContext> {
        &self.context
    }

    pub fn geometry(&self) -> &ButtonGeometry {
        &self.geometry
    }

    fn theme(&self) -> &Theme {
        self.context.theme()
    }

    fn shade(&self, base: Hsla, range: impl Into<gpui_bezel::BrightnessRange>) -> GradientSpec {
        if self.context.capabilities().gradients {
            gradient_with(base, range.into())
        } else {
            GradientSpec::flat(base)
        }
    }

    fn dim(&self, color: Hsla) -> Hsla {
        let tint = self.theme().gradients.inactive;
        color.dimmed(tint.saturation, tint.lightness)
    }

    pub fn titlebar_appearance(&self, active: bool) -> TitlebarAppearance {
        let colors = &self.theme().colors;
        let mut base: Hsla = colors.titlebar.into();
        let mut text: Hsla = colors.title_text.into();
        let mut separator: Hsla = colors.control_stroke.into();

        if !active {
            base = self.dim(base);
            text = self.dim(text);
            separator = self.dim(separator);
        }

        TitlebarAppearance {
            background: self.shade(base, self.theme().gradients.titlebar),
            text,
            separator,
        }
    }

    pub fn button_appearance(
        &self,
        kind: ButtonKind,
        interaction: InteractionState,
        active: bool,
    ) -> ButtonAppearance {
        let theme = self.theme();
        let colors = &theme.colors;
        let state = VisualState::resolve(interaction, active);

        let semantic: Hsla = kind.semantic_color(&colors.buttons).into();
        let base = match state {
            VisualState::Normal => semantic,
            VisualState::Hovered => semantic.shift_brightness(theme.gradients.hover_shift),
            VisualState::Pressed => semantic.shift_brightness(theme.gradients.pressed_shift),
            VisualState::Inactive => colors.buttons.neutral.into(),
        };

        let stroke: Hsla = colors.control_stroke.into();
        let (stroke, icon) = if state == VisualState::Inactive {
            (self.dim(stroke), colors.icons.inactive.into())
        } else {
            (stroke, colors.icons.active.into())
        };

        ButtonAppearance {
            state,
            fill: self.shade(base, theme.gradients.button),
            stroke,
            icon,
            bezel: (&colors.bezel).into(),
        }
    }

    /// The outline a button is drawn in, with its corner radius.
    pub fn button_shape(&self, rect: Bounds<Pixels>) -> (Bounds<Pixels>, Pixels) {
        match self.theme().style.button_shape {
            ButtonShape::Edge => {
                let radius = self
                    .theme()
                    .metrics
                    .corner_radius
                    .min(rect.size.width.min(rect.size.height) / 2.);
                (rect, radius)
            }
            ButtonShape::Ball => {
                let side = rect.size.width.min(rect.size.height);
                (Bounds::centered_at(rect.center(), size(side, side)), side / 2.)
            }
        }
    }

    pub fn draw_titlebar(
        &self,
        rect: Bounds<Pixels>,
        title: &SharedString,
        active: bool,
        window: &mut Window,
        cx: &mut App,
    ) {
        let appearance = self.titlebar_appearance(active);

        window.paint_quad(fill(rect, appearance.background.to_background()));
        window.paint_quad(round_rect_fill(
            Bounds::new(
                point(rect.left(), rect.bottom() - STROKE_WIDTH),
                size(rect.size.width, STROKE_WIDTH),
            ),
            px(0.),
            appearance.separator,
        ));

        if title.is_empty() {
            return;
        }

        let title_rect = self.geometry.title_rect(rect.size.width);
        let title_rect = Bounds::new(title_rect.origin + rect.origin, title_rect.size);

        let metrics = &self.theme().metrics;
        let family = &self.theme().text.title_font;
        let mut title_font = font(family[0].clone());
        if family.len() > 1 {
            title_font.fallbacks = Some(FontFallbacks::from_fonts(
                family[1..].iter().map(ToString::to_string).collect(),
            ));
        }

        let run = TextRun {
            len: title.len(),
            font: title_font,
            color: appearance.text,
            background_color: None,
            underline: None,
            strikethrough: None,
        };
        let line = window
            .text_system()
            .shape_line(title.clone(), metrics.title_font_size, &[run], None);

        let line_height = metrics.title_font_size * 1.25;
        let x = match self.theme().style.title_alignment {
            TitleAlignment::Left => title_rect.left(),
            TitleAlignment::Center => title_rect.center().x - line.width / 2.,
            TitleAlignment::Right => title_rect.right() - line.width,
        }
        .max(title_rect.left());
        let y = rect.top() + (rect.size.height - line_height) / 2.;

        window.with_content_mask(
            Some(ContentMask {
                bounds: title_rect.intersect(&rect),
            }),
            |window| {
                if let Err(err) = line.paint(
                    point(x, y),
                    line_height,
                    gpui::TextAlign::Left,
                    None,
                    window,
                    cx,
                ) {
                    log::trace!("failed to paint title: {err}");
                }
            },
        );
    }

    pub fn draw_button(
        &self,
        kind: ButtonKind,
        rect: Bounds<Pixels>,
        interaction: InteractionState,
        active: bool,
        window: &mut Window,
    ) {
        let appearance = self.button_appearance(kind, interaction, active);
        let (outline, radius) = self.button_shape(rect);

        window.paint_quad(bezel_quad(outline, radius, &appearance.fill, appearance.stroke));
        if self.theme().style.button_shape == ButtonShape::Edge {
            paint_inner_bezel(window, outline, outline, appearance.bezel);
        }

        self.draw_icon(kind, rect, appearance.icon, window);
    }

    pub fn draw_icon(
        &self,
        kind: ButtonKind,
        rect: Bounds<Pixels>,
        color: Hsla,
        window: &mut Window,
    ) {
        let metrics = &self.theme().metrics;
        let segments = icon_segments(kind, rect, metrics.icon_scale);
        paint_segments(window, &segments, metrics.icon_stroke_width, color);
    }

    /// Paints a whole title bar: background, then the close button, then
    /// the right cluster.
    pub fn paint(
        &self,
        bounds: Bounds<Pixels>,
        title: &SharedString,
        buttons: &TitlebarButtons,
        active: bool,
        window: &mut Window,
        cx: &mut App,
    ) {
        self.draw_titlebar(bounds, title, active, window, cx);

        let layout = self.geometry.layout(bounds.size.width);
        for button in buttons.iter() {
            let rect = layout.button(button.kind());
            let rect = Bounds::new(rect.origin + bounds.origin, rect.size);
            self.draw_button(button.kind(), rect, button.interaction(), active, window);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gpui_eau_theme::{Capabilities, ThemeStyle};

    fn renderer(capabilities: Capabilities) -> TitlebarRenderer {
        TitlebarRenderer::new(DecorationContext::new(Theme::DEFAULT, capabilities))
    }

    fn renderer_with_style(style: ThemeStyle) -> TitlebarRenderer {
        let mut theme = Theme::DEFAULT.clone();
        theme.style = style;
        TitlebarRenderer::new(DecorationContext::new(theme, Capabilities::default()))
    }

    #[test]
    fn test_inactive_button_is_less_saturated() {
        let renderer = renderer(Capabilities::default());
        for kind in ButtonKind::ALL {
            let active = renderer.button_appearance(kind, InteractionState::Normal, true);
            let inactive = renderer.button_appearance(kind, InteractionState::Normal, false);

            assert_eq!(inactive.state, VisualState::Inactive);
            assert!(
                inactive.fill.base.s < active.fill.base.s,
                "{kind:?} should lose saturation when inactive"
            );
            assert_ne!(inactive.icon, active.icon);
        }
    }

    #[test]
    fn test_interaction_shifts_brightness() {
        let renderer = renderer(Capabilities::default());
        let appearance = |state| renderer.button_appearance(ButtonKind::Close, state, true);
        let normal = appearance(InteractionState::Normal);
        let hovered = appearance(InteractionState::Hovered);
        let pressed = appearance(InteractionState::Pressed);

        assert!(hovered.fill.base.l > normal.fill.base.l);
        assert!(pressed.fill.base.l < normal.fill.base.l);
        assert_eq!(hovered.fill.base.h, normal.fill.base.h);
    }

    #[test]
    fn test_inactive_window_ignores_hover_and_press() {
        let renderer = renderer(Capabilities::default());
        let appearances = [
            InteractionState::Normal,
            InteractionState::Hovered,
            InteractionState::Pressed,
        ]
        .map(|state| renderer.button_appearance(ButtonKind::Minimize, state, false));

        assert!(appearances.iter().all(|a| *a == appearances[0]));

        let disabled =
            renderer.button_appearance(ButtonKind::Minimize, InteractionState::Disabled, true);
        assert_eq!(disabled, appearances[0]);
    }

    #[test]
    fn test_flat_capability_disables_gradients() {
        let flat = renderer(Capabilities { gradients: false });
        assert!(flat.titlebar_appearance(true).background.is_flat());
        assert!(
            flat.button_appearance(ButtonKind::Close, InteractionState::Normal, true)
                .fill
                .is_flat()
        );

        let shaded = renderer(Capabilities::default());
        assert!(!shaded.titlebar_appearance(true).background.is_flat());
    }

    #[test]
    fn test_inactive_titlebar_is_dimmed() {
        let renderer = renderer(Capabilities::default());
        let active = renderer.titlebar_appearance(true);
        let inactive = renderer.titlebar_appearance(false);
        assert_ne!(active.background, inactive.background);
        assert_ne!(active.text, inactive.text);
    }

    #[test]
    fn test_button_shapes() {
        let rect = Bounds::new(point(px(0.), px(0.)), size(px(24.), px(18.)));

        let edge = renderer_with_style(ThemeStyle::default());
        assert_eq!(
            edge.button_shape(rect),
            (rect, Theme::DEFAULT.metrics.corner_radius)
        );

        let ball = renderer_with_style(ThemeStyle {
            button_shape: ButtonShape::Ball,
            ..ThemeStyle::default()
        });
        let (outline, radius) = ball.button_shape(rect);
        assert_eq!(outline.size, size(px(18.), px(18.)));
        assert_eq!(outline.center(), rect.center());
        assert_eq!(radius, px(9.));
    }
}

#[cfg(all(test, feature = "test-support"))]
mod paint_tests {
    use super::*;
    use gpui::{TestAppContext, canvas, div, prelude::*};
    use gpui_eau_theme::Capabilities;

    struct PaintHarness {
        renderer: TitlebarRenderer,
        buttons: TitlebarButtons,
    }

    impl Render for PaintHarness {
        fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
            let renderer = self.renderer.clone();
            let buttons = self.buttons.clone();
            div().size_full().child(
                canvas(
                    |_, _, _| {},
                    move |bounds, _, window, cx| {
                        renderer.paint(bounds, &"Untitled".into(), &buttons, true, window, cx);
                    },
                )
                .size_full(),
            )
        }
    }

    #[gpui::test]
    fn test_paint_full_titlebar(cx: &mut TestAppContext) {
        let renderer = TitlebarRenderer::new(DecorationContext::new(
            Theme::DEFAULT,
            Capabilities::default(),
        ));
        let (_view, cx) = cx.add_window_view(|_, _| PaintHarness {
            renderer,
            buttons: TitlebarButtons::new(true),
        });
        cx.run_until_parked();
    }
}
