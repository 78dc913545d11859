//! View session state
//!
//! One explicit struct owns everything the render/input handlers mutate:
//! current view mode, selected element, pause flag, the electron set for the
//! atom view, and the whole-atom spin angle. The electron set is rebuilt
//! wholesale whenever the selection changes while the atom view is active or
//! the atom view is (re)entered; ticks only mutate electron angles in place.

use crate::elements::{ElementRecord, ELEMENTS, ELEMENT_COUNT};
use crate::shells::{shell_layout, Electron};

/// Degrees the whole atom spins per animation tick.
const GLOBAL_SPIN_STEP: f32 = 0.02;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Table,
    Atom,
}

pub struct ViewSession {
    pub mode: ViewMode,
    pub selected: usize,
    pub paused: bool,
    pub electrons: Vec<Electron>,
    /// Slow rotation of the whole atom about Y, degrees
    pub spin: f32,
}

impl ViewSession {
    pub fn new() -> Self {
        let selected = 0;
        Self {
            mode: ViewMode::Table,
            selected,
            paused: false,
            electrons: shell_layout(ELEMENTS[selected].z),
            spin: 0.0,
        }
    }

    pub fn selected_element(&self) -> &'static ElementRecord {
        &ELEMENTS[self.selected]
    }

    fn rebuild_electrons(&mut self) {
        self.electrons = shell_layout(self.selected_element().z);
    }

    /// Select a catalog index directly (mouse hit-test).
    pub fn select(&mut self, index: usize) {
        self.selected = index % ELEMENT_COUNT;
        if self.mode == ViewMode::Atom {
            self.rebuild_electrons();
        }
    }

    /// Step the selection by `delta`, wrapping at the catalog bounds.
    pub fn navigate(&mut self, delta: isize) {
        let count = ELEMENT_COUNT as isize;
        let index = (self.selected as isize + delta).rem_euclid(count);
        self.select(index as usize);
    }

    /// Switch to the atom view, rebuilding the shells for the selection.
    pub fn enter_atom_view(&mut self) {
        self.mode = ViewMode::Atom;
        self.rebuild_electrons();
    }

    pub fn enter_table_view(&mut self) {
        self.mode = ViewMode::Table;
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    /// One animation clock tick: advance electron angles and the atom spin.
    ///
    /// Inert while paused or in table view; rendering continues either way.
    pub fn tick(&mut self) {
        if self.paused || self.mode != ViewMode::Atom {
            return;
        }
        for e in self.electrons.iter_mut() {
            e.advance();
        }
        self.spin += GLOBAL_SPIN_STEP;
        if self.spin > 360.0 {
            self.spin -= 360.0;
        }
    }
}

impl Default for ViewSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_hydrogen_in_table_view() {
        let session = ViewSession::new();
        assert_eq!(session.mode, ViewMode::Table);
        assert_eq!(session.selected_element().symbol, "H");
        assert_eq!(session.electrons.len(), 1);
    }

    #[test]
    fn navigation_wraps_both_ways() {
        let mut session = ViewSession::new();
        session.navigate(-1);
        assert_eq!(session.selected_element().z, 118);
        session.navigate(1);
        assert_eq!(session.selected_element().z, 1);
        session.select(117);
        session.navigate(1);
        assert_eq!(session.selected, 0);
    }

    #[test]
    fn entering_atom_view_rebuilds_shells() {
        let mut session = ViewSession::new();
        session.select(25); // Iron, Z=26
        session.enter_atom_view();
        assert_eq!(session.electrons.len(), 26);
    }

    #[test]
    fn selection_change_in_atom_view_rebuilds() {
        let mut session = ViewSession::new();
        session.enter_atom_view();
        session.navigate(9); // Neon
        assert_eq!(session.selected_element().symbol, "Ne");
        assert_eq!(session.electrons.len(), 10);
    }

    #[test]
    fn selection_change_in_table_view_defers_rebuild() {
        let mut session = ViewSession::new();
        session.navigate(9);
        // Still hydrogen's single electron until the atom view is entered
        assert_eq!(session.electrons.len(), 1);
        session.enter_atom_view();
        assert_eq!(session.electrons.len(), 10);
    }

    #[test]
    fn tick_advances_angles_only_in_atom_view() {
        let mut session = ViewSession::new();
        session.tick();
        assert_eq!(session.electrons[0].angle, 0.0);

        session.enter_atom_view();
        session.tick();
        assert_eq!(session.electrons[0].angle, 1.5);
        assert!(session.spin > 0.0);
    }

    #[test]
    fn paused_ticks_leave_geometry_static() {
        let mut session = ViewSession::new();
        session.enter_atom_view();
        session.toggle_pause();
        session.tick();
        assert_eq!(session.electrons[0].angle, 0.0);
        assert_eq!(session.spin, 0.0);
        session.toggle_pause();
        session.tick();
        assert_eq!(session.electrons[0].angle, 1.5);
    }
}
