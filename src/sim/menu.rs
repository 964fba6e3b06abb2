//! Menu screen flow
//!
//! Only the navigation lives here; hosts render [`MenuScreen::lines`] in
//! whatever font they have.

use serde::{Deserialize, Serialize};

use crate::platform::input::{Key, KeyState};

/// Keys the menu reacts to
const NAVIGATION_KEYS: [Key; 4] = [Key::Confirm, Key::Help, Key::Credits, Key::Back];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MenuScreen {
    Main,
    Help,
    Credits,
    /// Flying; no menu shown
    Closed,
}

impl MenuScreen {
    pub fn title(self) -> &'static str {
        "Balloon Adventure"
    }

    /// Text shown on this screen
    pub fn lines(self) -> &'static [&'static str] {
        match self {
            MenuScreen::Main => &[
                "Press Enter to Start",
                "Press H for Help",
                "Press C for Credits",
                "Press Escape to Quit",
            ],
            MenuScreen::Help => &[
                "Use Arrow Keys to Move",
                "Press 1 to Release Left Weight",
                "Press 2 to Release Right Weight",
                "",
                "Press B to Return to Main Menu",
            ],
            MenuScreen::Credits => &[
                "Balloon Adventure",
                "Physics: spring ropes, drag and penalty contacts",
                "",
                "Press B to Return to Main Menu",
            ],
            MenuScreen::Closed => &[],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuFlow {
    screen: MenuScreen,
}

impl Default for MenuFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl MenuFlow {
    /// Start on the main screen
    pub fn new() -> Self {
        Self {
            screen: MenuScreen::Main,
        }
    }

    pub fn screen(&self) -> MenuScreen {
        self.screen
    }

    pub fn in_menu(&self) -> bool {
        self.screen != MenuScreen::Closed
    }

    /// Open the menu at the main screen
    ///
    /// Navigation presses made while flying are dropped so they cannot act
    /// on the freshly opened menu.
    pub fn enter(&mut self, keys: &mut KeyState) {
        for key in NAVIGATION_KEYS {
            keys.take_rising_edge(key);
        }
        self.set_screen(MenuScreen::Main);
    }

    /// Consume navigation key presses
    pub fn update_keys(&mut self, keys: &mut KeyState) {
        let next = match self.screen {
            MenuScreen::Main => {
                if keys.take_rising_edge(Key::Confirm) {
                    MenuScreen::Closed
                } else if keys.take_rising_edge(Key::Credits) {
                    MenuScreen::Credits
                } else if keys.take_rising_edge(Key::Help) {
                    MenuScreen::Help
                } else {
                    MenuScreen::Main
                }
            }
            MenuScreen::Help | MenuScreen::Credits => {
                if keys.take_rising_edge(Key::Back) {
                    MenuScreen::Main
                } else {
                    self.screen
                }
            }
            MenuScreen::Closed => MenuScreen::Closed,
        };
        self.set_screen(next);
    }

    fn set_screen(&mut self, screen: MenuScreen) {
        if screen != self.screen {
            log::info!("Menu: {:?} -> {:?}", self.screen, screen);
            self.screen = screen;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_in_main_menu() {
        let menu = MenuFlow::new();
        assert_eq!(menu.screen(), MenuScreen::Main);
        assert!(menu.in_menu());
    }

    #[test]
    fn test_help_and_back() {
        let mut menu = MenuFlow::new();
        let mut keys = KeyState::new();
        keys.press(Key::Help);
        menu.update_keys(&mut keys);
        assert_eq!(menu.screen(), MenuScreen::Help);

        // Confirm does nothing outside the main screen
        keys.press(Key::Confirm);
        menu.update_keys(&mut keys);
        assert_eq!(menu.screen(), MenuScreen::Help);

        keys.press(Key::Back);
        menu.update_keys(&mut keys);
        assert_eq!(menu.screen(), MenuScreen::Main);
    }

    #[test]
    fn test_held_key_acts_once() {
        let mut menu = MenuFlow::new();
        let mut keys = KeyState::new();
        keys.press(Key::Credits);
        menu.update_keys(&mut keys);
        keys.press(Key::Back);
        menu.update_keys(&mut keys);
        assert_eq!(menu.screen(), MenuScreen::Main);

        // Credits is still held but already consumed
        menu.update_keys(&mut keys);
        assert_eq!(menu.screen(), MenuScreen::Main);
    }

    #[test]
    fn test_confirm_closes_and_enter_reopens() {
        let mut menu = MenuFlow::new();
        let mut keys = KeyState::new();
        keys.press(Key::Confirm);
        menu.update_keys(&mut keys);
        assert!(!menu.in_menu());
        assert!(MenuScreen::Closed.lines().is_empty());

        menu.enter(&mut keys);
        assert_eq!(menu.screen(), MenuScreen::Main);
    }

    #[test]
    fn test_enter_drops_stale_navigation() {
        let mut menu = MenuFlow::new();
        let mut keys = KeyState::new();
        keys.press(Key::Confirm);
        menu.update_keys(&mut keys);
        assert!(!menu.in_menu());

        // Pressed while flying, before the menu reopens
        keys.release(Key::Confirm);
        keys.press(Key::Confirm);
        keys.press(Key::Help);
        menu.enter(&mut keys);
        menu.update_keys(&mut keys);
        assert_eq!(menu.screen(), MenuScreen::Main);
    }
}
