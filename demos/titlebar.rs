use std::{env, fs, rc::Rc};

use anyhow::Context as _;
use gpui::{
    App, AppContext, Application, Bounds, Context, Window, WindowBounds, WindowDecorations,
    WindowOptions, div, prelude::*, px, rgb, size,
};

use gpui_eau::{
    DecorationContext,
    components::DecorationRoot,
    theme::{Capabilities, Theme},
};

struct Content;

impl Render for Content {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .size_full()
            .flex()
            .items_center()
            .justify_center()
            .bg(rgb(0xececec))
            .text_color(rgb(0x4a4a4a))
            .child("Drag the title bar, or try the buttons.")
    }
}

/// Uses the theme file named by `EAU_THEME` when set, the built-in theme otherwise.
fn load_context() -> anyhow::Result<Rc<DecorationContext>> {
    let capabilities = Capabilities::detect();

    let Ok(path) = env::var("EAU_THEME") else {
        return Ok(DecorationContext::new(Theme::DEFAULT, capabilities));
    };

    let json = fs::read_to_string(&path).with_context(|| format!("reading theme {path}"))?;
    let theme = Theme::from_json(json).with_context(|| format!("loading theme {path}"))?;
    Ok(DecorationContext::new(theme, capabilities))
}

fn open_window(context: Rc<DecorationContext>, cx: &mut App) -> anyhow::Result<()> {
    let bounds = Bounds::centered(None, size(px(520.), px(360.)), cx);

    cx.open_window(
        WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: None,
            window_decorations: Some(WindowDecorations::Client),
            is_resizable: true,
            ..Default::default()
        },
        |window, cx| {
            let content = cx.new(|_cx| Content);
            cx.new(|cx| {
                let mut root = DecorationRoot::new(context, "Eau", content, window, cx);
                root.set_resizable(true, cx);
                root
            })
        },
    )
    .context("opening the demo window")?;

    Ok(())
}

fn main() {
    env_logger::init();

    Application::new()
        .with_quit_mode(gpui::QuitMode::LastWindowClosed)
        .run(|cx: &mut App| {
            let result = load_context().and_then(|context| open_window(context, cx));

            if let Err(err) = result {
                log::error!("{err:#}");
                cx.quit();
                return;
            }

            cx.activate(true);
        });
}
