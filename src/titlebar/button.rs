use enum_assoc::Assoc;
use gpui::Rgba;
use gpui_eau_theme::ThemeButtonColors;

/// Slot a button occupies in the title bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonPosition {
    /// Anchored to the left edge.
    Left,
    /// The left half of the right-hand cluster.
    RightLeft,
    /// The right half of the right-hand cluster, against the right edge.
    RightRight,
}

/// What the host is asked to do when a button is clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonAction {
    CloseWindow,
    MinimizeWindow,
    ZoomWindow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Assoc)]
#[func(pub fn default_position(&self) -> ButtonPosition)]
#[func(pub fn action(&self) -> ButtonAction)]
#[func(pub fn semantic_color(&self, colors: &ThemeButtonColors) -> Rgba)]
#[func(pub fn name(&self) -> &'static str)]
pub enum ButtonKind {
    #[assoc(default_position = ButtonPosition::Left)]
    #[assoc(action = ButtonAction::CloseWindow)]
    #[assoc(semantic_color = colors.close)]
    #[assoc(name = "close")]
    Close,
    #[assoc(default_position = ButtonPosition::RightLeft)]
    #[assoc(action = ButtonAction::MinimizeWindow)]
    #[assoc(semantic_color = colors.minimize)]
    #[assoc(name = "minimize")]
    Minimize,
    #[assoc(default_position = ButtonPosition::RightRight)]
    #[assoc(action = ButtonAction::ZoomWindow)]
    #[assoc(semantic_color = colors.maximize)]
    #[assoc(name = "maximize")]
    Maximize,
}

impl ButtonKind {
    /// Every kind, in paint order.
    pub const ALL: [ButtonKind; 3] = [
        ButtonKind::Close,
        ButtonKind::Minimize,
        ButtonKind::Maximize,
    ];
}

/// Pointer-driven state of a button, as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionState {
    #[default]
    Normal,
    Hovered,
    Pressed,
    Disabled,
}

/// The four distinct ways a button is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisualState {
    Normal,
    Hovered,
    Pressed,
    /// Disabled buttons and every button of an inactive window.
    Inactive,
}

impl VisualState {
    pub fn resolve(interaction: InteractionState, window_active: bool) -> Self {
        if !window_active {
            return VisualState::Inactive;
        }

        match interaction {
            InteractionState::Normal => VisualState::Normal,
            InteractionState::Hovered => VisualState::Hovered,
            InteractionState::Pressed => VisualState::Pressed,
            InteractionState::Disabled => VisualState::Inactive,
        }
    }
}

/// One title bar button and its interaction state machine.
///
/// Pointer events only change state; the action produced by a completed
/// click is returned from [`TitleBarButton::pointer_up`] for the caller to
/// carry out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleBarButton {
    kind: ButtonKind,
    position: ButtonPosition,
    window_active: bool,
    interaction: InteractionState,
    /// Set between a press inside the button and the matching release.
    tracking: bool,
}

impl TitleBarButton {
    pub fn new(kind: ButtonKind, window_active: bool) -> Self {
        Self {
            kind,
            position: kind.default_position(),
            window_active,
            interaction: InteractionState::Normal,
            tracking: false,
        }
    }

    pub fn kind(&self) -> ButtonKind {
        self.kind
    }

    pub fn position(&self) -> ButtonPosition {
        self.position
    }

    pub fn window_active(&self) -> bool {
        self.window_active
    }

    pub fn interaction(&self) -> InteractionState {
        self.interaction
    }

    pub fn is_disabled(&self) -> bool {
        self.interaction == InteractionState::Disabled
    }

    pub fn visual_state(&self) -> VisualState {
        VisualState::resolve(self.interaction, self.window_active)
    }

    pub fn set_window_active(&mut self, active: bool) {
        self.window_active = active;
    }

    pub fn pointer_enter(&mut self) {
        if self.is_disabled() {
            return;
        }

        self.transition(if self.tracking {
            InteractionState::Pressed
        } else {
            InteractionState::Hovered
        });
    }

    pub fn pointer_exit(&mut self) {
        if self.is_disabled() {
            return;
        }

        self.transition(InteractionState::Normal);
    }

    pub fn pointer_down(&mut self, inside: bool) {
        if self.is_disabled() || !inside {
            return;
        }

        self.tracking = true;
        self.transition(InteractionState::Pressed);
    }

    /// Ends a click. Returns the button's action when the press started and
    /// ended inside the button.
    pub fn pointer_up(&mut self, inside: bool) -> Option<ButtonAction> {
        if self.is_disabled() {
            self.tracking = false;
            return None;
        }

        let fire = self.tracking && inside && self.interaction == InteractionState::Pressed;
        self.tracking = false;
        self.transition(if inside {
            InteractionState::Hovered
        } else {
            InteractionState::Normal
        });

        fire.then(|| self.kind.action())
    }

    /// Disables the button until [`TitleBarButton::enable`] is called.
    pub fn disable(&mut self) {
        self.tracking = false;
        self.transition(InteractionState::Disabled);
    }

    pub fn enable(&mut self) {
        if self.is_disabled() {
            self.transition(InteractionState::Normal);
        }
    }

    fn transition(&mut self, next: InteractionState) {
        if self.interaction != next {
            log::trace!(
                "{} button: {:?} -> {:?}",
                self.kind.name(),
                self.interaction,
                next
            );
            self.interaction = next;
        }
    }
}

/// The three buttons of one title bar, one per kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitlebarButtons {
    buttons: [TitleBarButton; 3],
}

impl TitlebarButtons {
    pub fn new(window_active: bool) -> Self {
        Self {
            buttons: ButtonKind::ALL.map(|kind| TitleBarButton::new(kind, window_active)),
        }
    }

    fn index(kind: ButtonKind) -> usize {
        match kind {
            ButtonKind::Close => 0,
            ButtonKind::Minimize => 1,
            ButtonKind::Maximize => 2,
        }
    }

    pub fn get(&self, kind: ButtonKind) -> &TitleBarButton {
        &self.buttons[Self::index(kind)]
    }

    pub fn get_mut(&mut self, kind: ButtonKind) -> &mut TitleBarButton {
        &mut self.buttons[Self::index(kind)]
    }

    /// Buttons in paint order: close first, then the right cluster.
    pub fn iter(&self) -> impl Iterator<Item = &TitleBarButton> {
        self.buttons.iter()
    }

    pub fn set_window_active(&mut self, active: bool) {
        for button in &mut self.buttons {
            button.set_window_active(active);
        }
    }
}
