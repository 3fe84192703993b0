//! Event handling and state transition logic.
//!
//! [`handle_event`] is the single entry point through which user input mutates
//! [`AppState`]. It follows a unidirectional flow:
//!
//! 1. The plugin runtime maps a keystroke to an [`Event`]
//! 2. [`handle_event`] interprets the event for the current [`InputMode`]
//! 3. State is mutated through `AppState` methods
//! 4. Side effects are returned as [`Action`]s for the runtime to execute
//!
//! Stale positions (the collection changed between render and keystroke) are
//! logged and ignored. A rejected draft stays in the form with a message.
//!
//! # Example
//!
//! ```rust
//! use barlekha_directory::app::{handle_event, AppState, Event, InputMode};
//! use barlekha_directory::domain::seed::builtin_seed;
//! use barlekha_directory::ui::Theme;
//!
//! let mut state = AppState::new(builtin_seed(), Theme::default());
//! let (should_render, actions) = handle_event(&mut state, &Event::SearchMode)?;
//! assert!(should_render);
//! assert!(actions.is_empty());
//! assert_eq!(state.input_mode, InputMode::Search);
//! # Ok::<(), barlekha_directory::DirectoryError>(())
//! ```

use super::modes::InputMode;
use crate::app::{Action, AppState};
use crate::domain::error::{DirectoryError, Result};
use crate::domain::{DraftField, EditCursor};
use crate::store::Committed;

/// Events triggered by user input.
///
/// The runtime decides which keys map to which events per mode; the handler
/// still checks the mode so every event is safe to deliver at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Moves the selection down, or focuses the next field in the form.
    KeyDown,
    /// Moves the selection up, or focuses the previous field in the form.
    KeyUp,
    /// Closes the floating pane and hides the plugin UI.
    CloseFocus,
    /// Enters query editing.
    SearchMode,
    /// Types a character into the query or the focused draft field.
    Char(char),
    /// Deletes the last character of the query or the focused draft field.
    Backspace,
    /// Keeps the query (search), commits the draft (form) or edits the
    /// selection (browse).
    Submit,
    /// Clears the query (search), discards the draft (form) or resets all
    /// filters (browse).
    Escape,

    NextCategory,
    PreviousCategory,
    NextMinRating,
    PreviousMinRating,

    /// Opens the form in add mode.
    AddListing,
    /// Loads the selected listing into the form.
    EditSelected,
    /// Removes the selected listing.
    DeleteSelected,
    /// Opens the selected listing's map link.
    OpenMap,

    NextField,
    PreviousField,
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// Returns `(should_render, actions)`.
///
/// # Errors
///
/// Only errors the handler has no policy for are returned. Stale indexes,
/// listings deleted mid-edit and validation failures are absorbed here.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event",
        event_type = ?event,
        mode = ?state.input_mode
    ).entered();

    match (*event, state.input_mode) {
        (Event::CloseFocus, _) => Ok((false, vec![Action::CloseFocus])),

        (Event::KeyDown | Event::NextField, InputMode::Form(field)) => {
            state.input_mode = InputMode::Form(field.next());
            Ok((true, vec![]))
        }
        (Event::KeyUp | Event::PreviousField, InputMode::Form(field)) => {
            state.input_mode = InputMode::Form(field.previous());
            Ok((true, vec![]))
        }
        (Event::KeyDown, _) => {
            state.move_selection_down();
            Ok((true, vec![]))
        }
        (Event::KeyUp, _) => {
            state.move_selection_up();
            Ok((true, vec![]))
        }

        (Event::SearchMode, InputMode::Browse) => {
            tracing::debug!(query = %state.criteria().query, "entering search mode");
            state.input_mode = InputMode::Search;
            Ok((true, vec![]))
        }

        (Event::Char(c), InputMode::Search) => {
            state.push_query_char(c);
            Ok((true, vec![]))
        }
        (Event::Char(c), InputMode::Form(field)) => {
            state.push_draft_char(field, c);
            Ok((true, vec![]))
        }
        (Event::Backspace, InputMode::Search) => {
            state.pop_query_char();
            Ok((true, vec![]))
        }
        (Event::Backspace, InputMode::Form(field)) => {
            state.pop_draft_char(field);
            Ok((true, vec![]))
        }

        (Event::Submit, InputMode::Search) => {
            tracing::debug!(query = %state.criteria().query, "query kept");
            state.input_mode = InputMode::Browse;
            Ok((true, vec![]))
        }
        (Event::Submit, InputMode::Form(_)) => commit(state),
        (Event::Submit | Event::EditSelected, InputMode::Browse) => edit_selected(state),

        (Event::Escape, InputMode::Search) => {
            state.set_query("");
            state.input_mode = InputMode::Browse;
            Ok((true, vec![]))
        }
        (Event::Escape, InputMode::Form(_)) => {
            state.discard_draft();
            state.input_mode = InputMode::Browse;
            Ok((true, vec![]))
        }
        (Event::Escape, InputMode::Browse) => {
            state.reset_filters();
            state.status = None;
            Ok((true, vec![]))
        }

        (Event::NextCategory, InputMode::Browse) => {
            state.cycle_category(true);
            Ok((true, vec![]))
        }
        (Event::PreviousCategory, InputMode::Browse) => {
            state.cycle_category(false);
            Ok((true, vec![]))
        }
        (Event::NextMinRating, InputMode::Browse) => {
            state.cycle_min_rating(true);
            Ok((true, vec![]))
        }
        (Event::PreviousMinRating, InputMode::Browse) => {
            state.cycle_min_rating(false);
            Ok((true, vec![]))
        }

        (Event::AddListing, InputMode::Browse) => {
            if matches!(state.store().cursor(), EditCursor::Editing(_)) {
                state.discard_draft();
            }
            state.form_notice = None;
            state.input_mode = InputMode::Form(DraftField::Name);
            Ok((true, vec![]))
        }
        (Event::DeleteSelected, InputMode::Browse) => delete_selected(state),
        (Event::OpenMap, InputMode::Browse) => {
            let Some(listing) = state.selected_listing() else {
                tracing::debug!("no listing selected");
                return Ok((false, vec![]));
            };
            let url = state.map_link_for(listing);
            tracing::debug!(name = %listing.name, url = %url, "opening map link");
            Ok((false, vec![Action::OpenMapLink { url }]))
        }

        (event, mode) => {
            tracing::trace!(event = ?event, mode = ?mode, "event ignored in this mode");
            Ok((false, vec![]))
        }
    }
}

fn commit(state: &mut AppState) -> Result<(bool, Vec<Action>)> {
    match state.commit_draft() {
        Ok(committed) => {
            let verb = match committed {
                Committed::Created { .. } => "added",
                Committed::Updated { .. } => "updated",
            };
            state.status = state
                .store()
                .get(committed.index())
                .map(|entry| format!("{} {verb}", entry.listing.name));
            state.form_notice = None;
            state.input_mode = InputMode::Browse;
            Ok((true, vec![]))
        }
        Err(DirectoryError::Validation(err)) => {
            tracing::debug!(reason = %err, "draft rejected");
            state.form_notice = Some(capitalize(&err.to_string()));
            Ok((true, vec![]))
        }
        Err(DirectoryError::ListingNotFound(id)) => {
            tracing::warn!(id = %id, "listing under edit was deleted before commit");
            state.form_notice = Some(format!("Listing {id} was deleted; Esc to discard"));
            Ok((true, vec![]))
        }
        Err(err) => Err(err),
    }
}

fn edit_selected(state: &mut AppState) -> Result<(bool, Vec<Action>)> {
    let Some(row) = state.selected_row() else {
        tracing::debug!("no listing selected");
        return Ok((false, vec![]));
    };

    match state.start_edit(row.index) {
        Ok(id) => {
            tracing::debug!(id = %id, index = row.index, "editing listing");
            state.input_mode = InputMode::Form(DraftField::Name);
            Ok((true, vec![]))
        }
        Err(err @ DirectoryError::IndexOutOfRange { .. }) => {
            tracing::warn!(error = %err, "stale row ignored");
            Ok((false, vec![]))
        }
        Err(err) => Err(err),
    }
}

fn delete_selected(state: &mut AppState) -> Result<(bool, Vec<Action>)> {
    let Some(row) = state.selected_row() else {
        tracing::debug!("no listing selected");
        return Ok((false, vec![]));
    };

    match state.remove(row.index) {
        Ok(removed) => {
            state.status = Some(format!("{} deleted", removed.listing.name));
            Ok((true, vec![]))
        }
        Err(err @ DirectoryError::IndexOutOfRange { .. }) => {
            tracing::warn!(error = %err, "stale row ignored");
            Ok((false, vec![]))
        }
        Err(err) => Err(err),
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Listing;
    use crate::ui::Theme;

    fn state() -> AppState {
        let mut cafe = Listing::new("Cafe Barlekha", "Restaurant");
        cafe.rating = 4.2;
        cafe.lat = Some(24.7051);
        cafe.lng = Some(91.8199);
        let mut hospital = Listing::new("Barlekha General Hospital", "Health");
        hospital.rating = 4.5;
        AppState::new(vec![hospital, cafe], Theme::default())
    }

    fn send(state: &mut AppState, events: &[Event]) {
        for event in events {
            handle_event(state, event).unwrap();
        }
    }

    #[test]
    fn search_typing_filters_live_and_escape_clears() {
        let mut state = state();
        send(&mut state, &[Event::SearchMode, Event::Char('c'), Event::Char('a')]);
        assert_eq!(state.criteria().query, "ca");
        assert_eq!(state.visible_rows().len(), 1);

        send(&mut state, &[Event::Escape]);
        assert_eq!(state.input_mode, InputMode::Browse);
        assert_eq!(state.criteria().query, "");
        assert_eq!(state.visible_rows().len(), 2);
    }

    #[test]
    fn submit_in_search_keeps_query() {
        let mut state = state();
        send(&mut state, &[Event::SearchMode, Event::Char('h'), Event::Submit]);
        assert_eq!(state.input_mode, InputMode::Browse);
        assert_eq!(state.criteria().query, "h");
    }

    #[test]
    fn browse_keys_are_not_typed() {
        let mut state = state();
        let (render, actions) = handle_event(&mut state, &Event::Char('x')).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
        assert_eq!(state.criteria().query, "");
    }

    #[test]
    fn add_flow_types_into_focused_fields() {
        let mut state = state();
        send(&mut state, &[Event::AddListing]);
        assert_eq!(state.input_mode, InputMode::Form(DraftField::Name));

        for c in "Pharmacy".chars() {
            send(&mut state, &[Event::Char(c)]);
        }
        send(&mut state, &[Event::NextField]);
        for c in "Health".chars() {
            send(&mut state, &[Event::Char(c)]);
        }
        send(&mut state, &[Event::Submit]);

        assert_eq!(state.input_mode, InputMode::Browse);
        assert_eq!(state.store().len(), 3);
        assert_eq!(state.store().entries()[2].listing.name, "Pharmacy");
        assert_eq!(state.status.as_deref(), Some("Pharmacy added"));
    }

    #[test]
    fn rejected_draft_stays_in_form_with_notice() {
        let mut state = state();
        send(&mut state, &[Event::AddListing, Event::NextField, Event::Char('X'), Event::Submit]);

        assert_eq!(state.input_mode, InputMode::Form(DraftField::Category));
        assert_eq!(state.form_notice.as_deref(), Some("A listing needs a name"));
        assert_eq!(state.store().draft().category, "X");
        assert_eq!(state.store().len(), 2);
    }

    #[test]
    fn escape_in_form_discards_draft() {
        let mut state = state();
        send(&mut state, &[Event::EditSelected, Event::Char('!'), Event::Escape]);

        assert_eq!(state.input_mode, InputMode::Browse);
        assert!(state.store().draft().is_empty());
        assert_eq!(state.store().cursor(), EditCursor::Adding);
        assert_eq!(state.store().entries()[0].listing.name, "Barlekha General Hospital");
    }

    #[test]
    fn edit_targets_the_filtered_selection() {
        let mut state = state();
        state.set_category("Restaurant");
        send(&mut state, &[Event::EditSelected]);

        assert_eq!(state.store().draft().name, "Cafe Barlekha");
        assert_eq!(state.store().editing_index(), Some(1));
    }

    #[test]
    fn delete_targets_the_filtered_selection() {
        let mut state = state();
        state.set_category("Restaurant");
        send(&mut state, &[Event::DeleteSelected]);

        assert_eq!(state.store().len(), 1);
        assert_eq!(state.store().entries()[0].listing.name, "Barlekha General Hospital");
        assert_eq!(state.status.as_deref(), Some("Cafe Barlekha deleted"));
    }

    #[test]
    fn delete_with_nothing_visible_is_a_no_op() {
        let mut state = state();
        state.set_query("nothing matches this");
        let (render, _) = handle_event(&mut state, &Event::DeleteSelected).unwrap();
        assert!(!render);
        assert_eq!(state.store().len(), 2);
    }

    #[test]
    fn commit_after_concurrent_delete_keeps_draft() {
        let mut state = state();
        send(&mut state, &[Event::EditSelected]);
        state.remove(0).unwrap();

        send(&mut state, &[Event::Submit]);
        assert!(matches!(state.input_mode, InputMode::Form(_)));
        assert!(state.form_notice.is_some());
        assert_eq!(state.store().len(), 1);
        assert_eq!(state.store().draft().name, "Barlekha General Hospital");
    }

    #[test]
    fn add_after_abandoned_edit_starts_clean() {
        let mut state = state();
        state.start_edit(0).unwrap();

        send(&mut state, &[Event::AddListing]);
        assert_eq!(state.store().cursor(), EditCursor::Adding);
        assert!(state.store().draft().is_empty());
    }

    #[test]
    fn open_map_emits_link_for_selection() {
        let mut state = state();
        send(&mut state, &[Event::KeyDown]);
        let (_, actions) = handle_event(&mut state, &Event::OpenMap).unwrap();
        assert_eq!(
            actions,
            [Action::OpenMapLink {
                url: "https://maps.google.com/?q=24.7051,91.8199".to_string()
            }]
        );
    }

    #[test]
    fn filter_cycling_and_reset() {
        let mut state = state();
        send(&mut state, &[Event::NextCategory, Event::NextMinRating, Event::NextMinRating]);
        assert_eq!(state.criteria().category.label(), "Health");
        assert_eq!(state.visible_rows().len(), 1);

        send(&mut state, &[Event::Escape]);
        assert!(state.criteria().is_unfiltered());
    }

    #[test]
    fn close_focus_is_forwarded() {
        let mut state = state();
        let (render, actions) = handle_event(&mut state, &Event::CloseFocus).unwrap();
        assert!(!render);
        assert_eq!(actions, [Action::CloseFocus]);
    }
}
