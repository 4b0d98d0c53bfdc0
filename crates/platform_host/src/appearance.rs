//! Document appearance contracts: the OS color-scheme signal and the global dark-mode flag.

use std::{cell::Cell, rc::Rc};

/// Host hooks for reading the system color scheme and toggling the document presentation flag.
pub trait AppearanceService {
    /// Returns `Some(true)` when the environment prefers a dark color scheme, `Some(false)` when
    /// it prefers light, and `None` when no signal is available.
    fn prefers_dark_color_scheme(&self) -> Option<bool>;

    /// Applies (`true`) or removes (`false`) the document-level dark presentation flag.
    fn set_dark_flag(&self, enabled: bool);
}

#[derive(Debug, Clone, Default)]
/// In-memory appearance service recording the applied flag. Clones share state.
pub struct MemoryAppearance {
    prefers_dark: Rc<Cell<Option<bool>>>,
    dark_flag: Rc<Cell<bool>>,
    flag_writes: Rc<Cell<usize>>,
}

impl MemoryAppearance {
    /// Builds an appearance service reporting the given color-scheme signal.
    pub fn with_system_preference(prefers_dark: Option<bool>) -> Self {
        let service = Self::default();
        service.prefers_dark.set(prefers_dark);
        service
    }

    /// Changes the reported color-scheme signal.
    pub fn set_system_preference(&self, prefers_dark: Option<bool>) {
        self.prefers_dark.set(prefers_dark);
    }

    /// Returns whether the dark flag is currently applied.
    pub fn dark_flag(&self) -> bool {
        self.dark_flag.get()
    }

    /// Returns how many times the flag was written.
    pub fn flag_writes(&self) -> usize {
        self.flag_writes.get()
    }
}

impl AppearanceService for MemoryAppearance {
    fn prefers_dark_color_scheme(&self) -> Option<bool> {
        self.prefers_dark.get()
    }

    fn set_dark_flag(&self, enabled: bool) {
        self.dark_flag.set(enabled);
        self.flag_writes.set(self.flag_writes.get() + 1);
    }
}
