//! Input mode state for the application.
//!
//! The mode decides how keystrokes are interpreted and which parts of the
//! view are drawn.
//!
//! - **Browse**: move through the visible listings, change filters, start edits
//! - **Search**: typed characters edit the free-text query live
//! - **Form**: typed characters edit the focused draft field

use crate::domain::DraftField;

/// Current input handling mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Default navigation and command mode.
    ///
    /// Keybindings: j/k (navigate), / (search), c/C (category), r/R (rating),
    /// a (add), e (edit), d (delete), m (map), Esc (reset filters), q (quit).
    #[default]
    Browse,

    /// Query editing. Every character refilters immediately.
    Search,

    /// Draft editing with the given field focused.
    Form(DraftField),
}
