//! Mobile navigation drawer.
//!
//! [`MenuState`] is the open/closed mode, driven by [`MenuTrigger`]s.
//! [`OverlayPlan`] describes how the drawer is assembled from the existing
//! navigation markup, so the binding only has to clone nodes in order.

/// Class on the generated overlay root.
pub const OVERLAY_CLASS: &str = "nav__mobile-menu";
/// Overlay marker while open.
pub const OVERLAY_OPEN_CLASS: &str = "nav__mobile-menu--open";
/// Toggle marker while open.
pub const TOGGLE_OPEN_CLASS: &str = "nav__toggle--open";
/// Close button inside the overlay.
pub const CLOSE_BUTTON_CLASS: &str = "nav__close";
/// Accessible label of the close button.
pub const CLOSE_BUTTON_LABEL: &str = "Close menu";
/// Class of the contact line paragraph.
pub const CONTACT_LINE_CLASS: &str = "mail__box";

/// Drawer mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

/// Everything that can change the drawer mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuTrigger {
    /// Hamburger toggle; flips the mode
    Toggle,
    /// Click landing on the overlay itself rather than its content
    Backdrop,
    /// Any link inside the overlay
    Link,
    /// The overlay's close button
    CloseButton,
    /// Escape key anywhere in the document
    Escape,
}

/// What the page should look like for a given mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuView {
    pub overlay_open: bool,
    pub toggle_open: bool,
    /// `body { overflow: hidden }`
    pub scroll_locked: bool,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }

    /// Mode after `trigger` fires. Everything except the toggle closes.
    pub fn apply(self, trigger: MenuTrigger) -> MenuState {
        match (trigger, self) {
            (MenuTrigger::Toggle, MenuState::Closed) => MenuState::Open,
            (MenuTrigger::Toggle, MenuState::Open) => MenuState::Closed,
            _ => MenuState::Closed,
        }
    }

    pub fn view(self) -> MenuView {
        let open = self.is_open();
        MenuView {
            overlay_open: open,
            toggle_open: open,
            scroll_locked: open,
        }
    }
}

/// Which source elements were found in the page.
#[derive(Debug, Clone, Default)]
pub struct OverlaySources {
    pub toggle: bool,
    pub menu: bool,
    pub actions: bool,
    pub logo: bool,
    pub contact_line: Option<String>,
}

/// One piece of the generated overlay, in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverlayPart {
    /// `button.nav__close` with its aria label
    CloseButton,
    /// Deep clone of the logo with the omitted sub-element removed
    Logo,
    /// `p.mail__box` holding this text
    ContactLine(String),
    /// Deep clone of the navigation menu
    Menu,
    /// Deep clone of the navigation actions
    Actions,
}

/// Ordered construction steps for the overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayPlan {
    pub parts: Vec<OverlayPart>,
}

impl OverlayPlan {
    /// Build the plan, or `None` when the drawer cannot exist (no toggle or
    /// no menu to copy).
    pub fn from_sources(sources: &OverlaySources) -> Option<Self> {
        if !sources.toggle || !sources.menu {
            return None;
        }

        let mut parts = vec![OverlayPart::CloseButton];
        if sources.logo {
            parts.push(OverlayPart::Logo);
        }
        if let Some(text) = sources.contact_line.as_ref().filter(|t| !t.trim().is_empty()) {
            parts.push(OverlayPart::ContactLine(text.clone()));
        }
        parts.push(OverlayPart::Menu);
        if sources.actions {
            parts.push(OverlayPart::Actions);
        }

        Some(Self { parts })
    }
}
