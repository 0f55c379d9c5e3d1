use std::rc::Rc;

use gpui_eau_theme::{Capabilities, Theme};

use crate::geometry::ButtonGeometry;

/// Theme and host capabilities shared by one window's decorations.
///
/// Built once by the host and passed by `Rc` into every decoration of the
/// window; it is dropped together with the last decoration holding it.
pub struct DecorationContext {
    theme: Theme,
    capabilities: Capabilities,
}

impl DecorationContext {
    pub fn new(theme: impl AsRef<Theme>, capabilities: Capabilities) -> Rc<Self> {
        Rc::new(Self {
            theme: theme.as_ref().clone(),
            capabilities,
        })
    }

    /// The built-in theme with capabilities read from the environment.
    pub fn from_environment() -> Rc<Self> {
        Self::new(Theme::DEFAULT, Capabilities::detect())
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    pub fn geometry(&self) -> ButtonGeometry {
        ButtonGeometry::new(&self.theme.metrics)
    }
}
