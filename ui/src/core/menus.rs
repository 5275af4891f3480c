//! Header dropdown state: the language picker and the user-account menu.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Menu {
    Language,
    User,
}

/// At most one menu is open at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuState {
    open: Option<Menu>,
}

impl MenuState {
    pub fn is_open(&self, menu: Menu) -> bool {
        self.open == Some(menu)
    }

    pub fn open_menu(&self) -> Option<Menu> {
        self.open
    }

    /// Opening one menu closes the other; toggling the open one closes it.
    pub fn toggle(&mut self, menu: Menu) {
        self.open = if self.is_open(menu) { None } else { Some(menu) };
    }

    pub fn close(&mut self, menu: Menu) {
        if self.is_open(menu) {
            self.open = None;
        }
    }

    /// Outside click or Escape. Reports whether a menu was open.
    pub fn close_all(&mut self) -> bool {
        self.open.take().is_some()
    }
}

/// Entries of the user-account menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserAction {
    Login,
    Register,
    Help,
    Contact,
}

/// Footer sections reachable from the user menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FooterSection {
    Help,
    Contact,
}

impl FooterSection {
    pub fn id(self) -> &'static str {
        match self {
            Self::Help => "ayuda-section",
            Self::Contact => "contacto-section",
        }
    }
}

impl UserAction {
    /// Help and contact scroll to the footer; login and register navigate.
    pub fn footer_section(self) -> Option<FooterSection> {
        match self {
            Self::Help => Some(FooterSection::Help),
            Self::Contact => Some(FooterSection::Contact),
            Self::Login | Self::Register => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menus_are_mutually_exclusive() {
        let mut state = MenuState::default();
        state.toggle(Menu::Language);
        assert!(state.is_open(Menu::Language));

        state.toggle(Menu::User);
        assert!(state.is_open(Menu::User));
        assert!(!state.is_open(Menu::Language));

        state.toggle(Menu::User);
        assert_eq!(state.open_menu(), None);
    }

    #[test]
    fn close_all_reports_whether_anything_closed() {
        let mut state = MenuState::default();
        assert!(!state.close_all());
        state.toggle(Menu::Language);
        assert!(state.close_all());
        assert_eq!(state.open_menu(), None);
    }

    #[test]
    fn close_all_and_targeted_close() {
        let mut state = MenuState::default();
        state.toggle(Menu::User);
        state.close(Menu::Language);
        assert!(state.is_open(Menu::User));
        state.close_all();
        assert_eq!(state.open_menu(), None);
    }

    #[test]
    fn help_and_contact_target_footer() {
        assert_eq!(UserAction::Help.footer_section(), Some(FooterSection::Help));
        assert_eq!(
            UserAction::Contact.footer_section().map(FooterSection::id),
            Some("contacto-section")
        );
        assert_eq!(UserAction::Login.footer_section(), None);
    }
}
