use gpui::{ElementId, SharedString};

use crate::titlebar::ButtonKind;

pub trait ElementIdExt {
    /// A child of this id, distinguished by `name`.
    fn child(&self, name: impl Into<SharedString>) -> ElementId;

    /// The id of the element backing one title bar button.
    fn for_button(&self, kind: ButtonKind) -> ElementId {
        self.child(kind.name())
    }
}

impl ElementIdExt for ElementId {
    fn child(&self, name: impl Into<SharedString>) -> ElementId {
        ElementId::NamedChild(Box::new(self.clone()), name.into())
    }
}
