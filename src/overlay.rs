#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Overlay {
    UserMenu,
    Settings,
    DeleteAccount,
    ChatHistory,
}

impl Overlay {
    pub fn is_modal(self) -> bool {
        !matches!(self, Overlay::UserMenu)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OverlayState {
    #[default]
    Closed,
    Open,
}

impl OverlayState {
    pub fn is_open(self) -> bool {
        self == OverlayState::Open
    }

    /// Marker class the stylesheet keys visibility on.
    pub fn class(self) -> &'static str {
        match self {
            OverlayState::Open => "active",
            OverlayState::Closed => "",
        }
    }
}

/// Visibility of the user menu and the chat page modals. At most one modal
/// is open, and opening a modal closes the user menu.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OverlayController {
    user_menu: OverlayState,
    modal: Option<Overlay>,
}

impl OverlayController {
    pub fn state(&self, overlay: Overlay) -> OverlayState {
        let open = match overlay {
            Overlay::UserMenu => self.user_menu.is_open(),
            modal => self.modal == Some(modal),
        };
        if open {
            OverlayState::Open
        } else {
            OverlayState::Closed
        }
    }

    pub fn is_open(&self, overlay: Overlay) -> bool {
        self.state(overlay).is_open()
    }

    pub fn open_modal(&self) -> Option<Overlay> {
        self.modal
    }

    pub fn open(&mut self, overlay: Overlay) {
        if overlay.is_modal() {
            self.modal = Some(overlay);
        }
        self.user_menu = if overlay.is_modal() {
            OverlayState::Closed
        } else {
            OverlayState::Open
        };
    }

    pub fn close(&mut self, overlay: Overlay) {
        match overlay {
            Overlay::UserMenu => self.user_menu = OverlayState::Closed,
            modal if self.modal == Some(modal) => self.modal = None,
            _ => {}
        }
    }

    pub fn toggle_user_menu(&mut self) {
        if self.user_menu.is_open() {
            self.close(Overlay::UserMenu);
        } else {
            self.open(Overlay::UserMenu);
        }
    }

    /// A click that landed outside the user menu and its button.
    pub fn outside_click(&mut self) {
        self.close(Overlay::UserMenu);
    }

    /// A click on a modal's backdrop rather than its panel.
    pub fn backdrop_click(&mut self, overlay: Overlay) {
        if overlay.is_modal() {
            self.close(overlay);
        }
    }
}
