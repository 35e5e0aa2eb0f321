//! Keyboard state tracking
//!
//! Browser key events arrive asynchronously between frames. `Keyboard`
//! folds them into held state plus press edges, and hands the simulation
//! one [`TickInput`] per tick.

use crate::sim::TickInput;

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Pause,
    Launch,
    Confirm,
    Quit,
}

impl Key {
    const COUNT: usize = 6;

    /// Map a DOM `KeyboardEvent.key` value to a game key
    pub fn from_dom_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" | "Left" => Some(Key::Left),
            "ArrowRight" | "Right" => Some(Key::Right),
            "p" | "P" => Some(Key::Pause),
            " " | "Spacebar" => Some(Key::Launch),
            "Enter" => Some(Key::Confirm),
            "Escape" | "Esc" => Some(Key::Quit),
            _ => None,
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Held keys and unconsumed press edges
#[derive(Debug, Clone, Default)]
pub struct Keyboard {
    held: [bool; Key::COUNT],
    pressed: [bool; Key::COUNT],
}

impl Keyboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Key went down. Auto-repeat of a held key is not a new press.
    pub fn press(&mut self, key: Key) {
        let i = key.index();
        if !self.held[i] {
            self.pressed[i] = true;
        }
        self.held[i] = true;
    }

    pub fn release(&mut self, key: Key) {
        self.held[key.index()] = false;
    }

    /// Drop all held keys (window lost focus, keyup events will not arrive)
    pub fn release_all(&mut self) {
        self.held = [false; Key::COUNT];
    }

    pub fn is_down(&self, key: Key) -> bool {
        self.held[key.index()]
    }

    /// Whether quit was pressed; polled by the outer driver, never consumed
    pub fn quit_requested(&self) -> bool {
        self.pressed[Key::Quit.index()]
    }

    /// Build the input for one tick and consume the press edges
    pub fn take_tick_input(&mut self) -> TickInput {
        let input = TickInput {
            left: self.is_down(Key::Left),
            right: self.is_down(Key::Right),
            pause: self.pressed[Key::Pause.index()],
            launch: self.pressed[Key::Launch.index()],
            confirm: self.pressed[Key::Confirm.index()],
        };
        let quit = self.quit_requested();
        self.pressed = [false; Key::COUNT];
        self.pressed[Key::Quit.index()] = quit;
        input
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dom_key_mapping() {
        assert_eq!(Key::from_dom_key("ArrowLeft"), Some(Key::Left));
        assert_eq!(Key::from_dom_key("ArrowRight"), Some(Key::Right));
        assert_eq!(Key::from_dom_key("P"), Some(Key::Pause));
        assert_eq!(Key::from_dom_key(" "), Some(Key::Launch));
        assert_eq!(Key::from_dom_key("Enter"), Some(Key::Confirm));
        assert_eq!(Key::from_dom_key("Escape"), Some(Key::Quit));
        assert_eq!(Key::from_dom_key("x"), None);
    }

    #[test]
    fn test_press_edge_consumed_once() {
        let mut kb = Keyboard::new();
        kb.press(Key::Confirm);

        assert!(kb.take_tick_input().confirm);
        // Still held, but the edge is gone
        assert!(!kb.take_tick_input().confirm);
    }

    #[test]
    fn test_repeat_does_not_retrigger() {
        let mut kb = Keyboard::new();
        kb.press(Key::Launch);
        kb.take_tick_input();
        kb.press(Key::Launch); // auto-repeat keydown
        assert!(!kb.take_tick_input().launch);

        kb.release(Key::Launch);
        kb.press(Key::Launch);
        assert!(kb.take_tick_input().launch);
    }

    #[test]
    fn test_tap_within_one_frame_still_counts() {
        let mut kb = Keyboard::new();
        kb.press(Key::Pause);
        kb.release(Key::Pause);
        assert!(kb.take_tick_input().pause);
    }

    #[test]
    fn test_held_direction() {
        let mut kb = Keyboard::new();
        kb.press(Key::Left);
        assert!(kb.take_tick_input().left);
        assert!(kb.take_tick_input().left);
        kb.release_all();
        assert!(!kb.take_tick_input().left);
    }

    #[test]
    fn test_quit_is_sticky() {
        let mut kb = Keyboard::new();
        kb.press(Key::Quit);
        kb.take_tick_input();
        assert!(kb.quit_requested());
    }
}
