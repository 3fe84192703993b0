//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler only mutates [`AppState`](crate::app::AppState); anything
//! that has to reach outside the plugin (hiding the pane, launching a browser)
//! is returned as an [`Action`] and executed by the Zellij shim.

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Closes the focused floating pane, hiding the plugin UI.
    CloseFocus,

    /// Opens a listing's map link with the host's URL handler.
    OpenMapLink {
        /// Fully formatted map URL.
        url: String,
    },
}
