//! Keyboard focus cycling ("alt-tab") over an externally supplied window list.
//!
//! The list is rebuilt by the display binding from the currently mapped,
//! on-screen, autofocus-eligible visible windows; this type knows nothing about
//! desktops or layers.

use std::fmt::Debug;

use tracing::warn;

/// An ordered list of cyclable windows plus a cursor on the last-focused one.
#[derive(Debug, Clone)]
pub struct FocusCycle<W> {
    windows: Vec<W>,
    cursor: usize,
}

impl<W> Default for FocusCycle<W> {
    fn default() -> Self {
        Self {
            windows: Vec::new(),
            cursor: 0,
        }
    }
}

impl<W: Copy + PartialEq + Debug> FocusCycle<W> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the cyclable windows and resets the cursor to the first one.
    pub fn set_window_list(&mut self, windows: Vec<W>) {
        self.windows = windows;
        self.cursor = 0;
    }

    /// Moves the cursor onto `window`. A window missing from the list is a
    /// caller bug; it is logged and otherwise ignored.
    pub fn set_focus(&mut self, window: W) {
        match self.windows.iter().position(|w| *w == window) {
            Some(index) => self.cursor = index,
            None => warn!("Focus cycle asked to focus {:?}, which is not in its window list.", window),
        }
    }

    /// Advances the cursor circularly and returns the window under it.
    pub fn next(&mut self) -> Option<W> {
        if self.windows.is_empty() {
            return None;
        }
        self.cursor = (self.cursor + 1) % self.windows.len();
        self.current()
    }

    /// Moves the cursor back circularly and returns the window under it.
    pub fn prev(&mut self) -> Option<W> {
        if self.windows.is_empty() {
            return None;
        }
        self.cursor = (self.cursor + self.windows.len() - 1) % self.windows.len();
        self.current()
    }

    pub fn current(&self) -> Option<W> {
        self.windows.get(self.cursor).copied()
    }

    pub fn windows(&self) -> &[W] {
        &self.windows
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cycle(windows: &[u32]) -> FocusCycle<u32> {
        let mut cycle = FocusCycle::new();
        cycle.set_window_list(windows.to_vec());
        cycle
    }

    #[test]
    fn empty_cycle_yields_nothing() {
        let mut cycle: FocusCycle<u32> = FocusCycle::new();
        assert_eq!(cycle.next(), None);
        assert_eq!(cycle.prev(), None);
        assert_eq!(cycle.current(), None);
        assert!(cycle.is_empty());
    }

    #[test]
    fn next_wraps_around() {
        let mut cycle = cycle(&[1, 2, 3]);
        assert_eq!(cycle.current(), Some(1));
        assert_eq!(cycle.next(), Some(2));
        assert_eq!(cycle.next(), Some(3));
        assert_eq!(cycle.next(), Some(1));
    }

    #[test]
    fn prev_wraps_around() {
        let mut cycle = cycle(&[1, 2, 3]);
        assert_eq!(cycle.prev(), Some(3));
        assert_eq!(cycle.prev(), Some(2));
    }

    #[test]
    fn set_focus_moves_cursor() {
        let mut cycle = cycle(&[1, 2, 3]);
        cycle.set_focus(3);
        assert_eq!(cycle.next(), Some(1));
        cycle.set_focus(2);
        assert_eq!(cycle.prev(), Some(1));
    }

    #[test]
    fn set_focus_on_unknown_window_is_ignored() {
        let mut cycle = cycle(&[1, 2]);
        cycle.set_focus(2);
        cycle.set_focus(42);
        assert_eq!(cycle.current(), Some(2));
    }

    #[test]
    fn replacing_list_resets_cursor() {
        let mut cycle = cycle(&[1, 2, 3]);
        cycle.set_focus(3);
        cycle.set_window_list(vec![7, 8]);
        assert_eq!(cycle.current(), Some(7));
        assert_eq!(cycle.len(), 2);
        assert_eq!(cycle.windows(), &[7, 8]);
    }

    #[test]
    fn single_window_cycles_to_itself() {
        let mut cycle = cycle(&[5]);
        assert_eq!(cycle.next(), Some(5));
        assert_eq!(cycle.prev(), Some(5));
    }
}
