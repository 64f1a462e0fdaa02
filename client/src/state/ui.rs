#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

pub use frames::Identity;

/// Top-level UI state: which identity the whole page is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub identity: Identity,
}

impl UiState {
    /// Header toggle handler. Selecting the active identity is a no-op.
    pub fn select(&mut self, identity: Identity) {
        self.identity = identity;
    }
}
