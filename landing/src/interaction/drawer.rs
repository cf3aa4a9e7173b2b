//! Mobile navigation drawer.

/// Open/closed state of the mobile drawer. Both transitions are idempotent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DrawerState {
    open: bool,
}

impl DrawerState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Returns whether the state changed.
    pub fn open(&mut self) -> bool {
        let changed = !self.open;
        self.open = true;
        changed
    }

    /// Returns whether the state changed.
    pub fn close(&mut self) -> bool {
        let changed = self.open;
        self.open = false;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        assert!(!DrawerState::default().is_open());
    }

    #[test]
    fn open_then_close_restores_initial_state() {
        let mut drawer = DrawerState::default();
        drawer.open();
        drawer.close();
        assert_eq!(drawer, DrawerState::default());
    }

    #[test]
    fn open_is_idempotent() {
        let mut once = DrawerState::default();
        once.open();

        let mut twice = DrawerState::default();
        assert!(twice.open());
        assert!(!twice.open());

        assert_eq!(once, twice);
    }

    #[test]
    fn close_when_closed_is_noop() {
        let mut drawer = DrawerState::default();
        assert!(!drawer.close());
        assert!(!drawer.is_open());
    }
}
