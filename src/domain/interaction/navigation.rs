//! Mobile navigation menu state machine.
//!
//! The hamburger toggle expands and collapses the menu; submenus expand
//! exclusively; a click outside the menu collapses everything.

/// Whether the mobile menu is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Collapsed,
    Expanded,
}

/// Mobile navigation menu with exclusive submenus.
#[derive(Debug, Clone)]
pub struct NavMenu {
    state: MenuState,
    submenu_count: usize,
    expanded_submenu: Option<usize>,
}

impl NavMenu {
    /// Creates a collapsed menu with `submenu_count` submenu groups.
    pub fn new(submenu_count: usize) -> Self {
        Self {
            state: MenuState::Collapsed,
            submenu_count,
            expanded_submenu: None,
        }
    }

    /// Returns the menu state.
    pub fn state(&self) -> MenuState {
        self.state
    }

    /// Returns true while the menu is showing.
    pub fn is_expanded(&self) -> bool {
        self.state == MenuState::Expanded
    }

    /// Returns the expanded submenu, if any.
    pub fn expanded_submenu(&self) -> Option<usize> {
        self.expanded_submenu
    }

    /// Icon class for the hamburger toggle.
    pub fn toggle_icon(&self) -> &'static str {
        match self.state {
            MenuState::Collapsed => "fa-bars",
            MenuState::Expanded => "fa-times",
        }
    }

    /// Hamburger click: flip the menu.
    pub fn toggle(&mut self) {
        self.state = match self.state {
            MenuState::Collapsed => MenuState::Expanded,
            MenuState::Expanded => MenuState::Collapsed,
        };
        if self.state == MenuState::Collapsed {
            self.expanded_submenu = None;
        }
    }

    /// Submenu header click: toggle it, collapsing any sibling.
    ///
    /// Out-of-range indices are ignored.
    pub fn toggle_submenu(&mut self, index: usize) {
        if index >= self.submenu_count {
            return;
        }
        self.expanded_submenu = if self.expanded_submenu == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    /// Click outside the menu: collapse everything.
    pub fn close(&mut self) {
        self.state = MenuState::Collapsed;
        self.expanded_submenu = None;
    }
}
