//! Application state management and view model computation.
//!
//! [`AppState`] owns the listing store, the three filter criteria and the
//! transient UI state (selection, input mode, status messages). The visible
//! rows and the category options are derived data: they are recomputed by
//! [`AppState::apply_filters`] after every criterion or collection change,
//! so readers never observe a stale subset.
//!
//! # Example
//!
//! ```rust
//! use barlekha_directory::app::AppState;
//! use barlekha_directory::domain::seed::builtin_seed;
//! use barlekha_directory::filter::MinRating;
//! use barlekha_directory::ui::Theme;
//!
//! let mut state = AppState::new(builtin_seed(), Theme::default());
//! state.set_query("barlekha");
//! state.set_min_rating(MinRating::FourAndHalf);
//!
//! let visible = state.visible_listings();
//! assert_eq!(visible.len(), 1);
//! assert_eq!(visible[0].listing.name, "Barlekha General Hospital");
//! ```

use super::modes::InputMode;
use crate::domain::error::Result;
use crate::domain::{DraftField, EditCursor, Listing, ListingId};
use crate::filter::{self, derive_categories, CategoryFilter, FilterCriteria, MinRating, VisibleListing};
use crate::store::{Committed, Entry, ListingStore};
use crate::ui::helpers::{match_ranges, truncate_text};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    DetailInfo, DisplayItem, EmptyState, FilterBarInfo, FooterInfo, FormFieldInfo, FormInfo,
    HeaderInfo, UIViewModel, CATEGORY_COLUMN_WIDTH, NAME_COLUMN_WIDTH, PHONE_COLUMN_WIDTH,
    RATING_COLUMN_WIDTH,
};

/// Rows the browse layout spends outside the table body.
const BROWSE_CHROME_ROWS: usize = 9;

/// Position of a visible listing in the store, plus its id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleRow {
    /// Position in the unfiltered collection.
    pub index: usize,
    /// Stable id of the listing.
    pub id: ListingId,
}

/// Central application state container.
///
/// The store and filter criteria are private so every mutation goes through a
/// method that refreshes the derived rows. Selection, mode and messages are
/// plain UI state and are public like the rest of the presentation fields.
#[derive(Debug, Clone)]
pub struct AppState {
    store: ListingStore,
    criteria: FilterCriteria,

    /// Cached result of the last filter pass.
    visible_rows: Vec<VisibleRow>,

    /// Cached category options for the current collection.
    categories: Vec<String>,

    /// Zero-based index of the selection within the visible rows.
    ///
    /// Clamped by `apply_filters()`; wraps during navigation.
    pub selected_index: usize,

    /// Current input handling mode.
    pub input_mode: InputMode,

    /// Color scheme for UI rendering.
    pub theme: Theme,

    /// Message shown inside the form after a rejected commit.
    pub form_notice: Option<String>,

    /// Message shown in the footer after the last browse action.
    pub status: Option<String>,
}

impl AppState {
    /// Creates a session seeded with `listings`, all filters cleared.
    #[must_use]
    pub fn new(listings: Vec<Listing>, theme: Theme) -> Self {
        let mut state = Self {
            store: ListingStore::new(listings),
            criteria: FilterCriteria::default(),
            visible_rows: vec![],
            categories: vec![],
            selected_index: 0,
            input_mode: InputMode::Browse,
            theme,
            form_notice: None,
            status: None,
        };
        state.apply_filters();
        state
    }

    #[must_use]
    pub const fn store(&self) -> &ListingStore {
        &self.store
    }

    #[must_use]
    pub const fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Rows from the last filter pass, in collection order.
    #[must_use]
    pub fn visible_rows(&self) -> &[VisibleRow] {
        &self.visible_rows
    }

    /// Listings passing the current criteria, in collection order.
    #[must_use]
    pub fn visible_listings(&self) -> Vec<VisibleListing<'_>> {
        filter::visible(self.store.entries(), &self.criteria)
    }

    /// Category options: `"All"` then each distinct category.
    #[must_use]
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Replaces the free-text query.
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.criteria.query = text.into();
        self.apply_filters();
    }

    pub fn push_query_char(&mut self, c: char) {
        self.criteria.query.push(c);
        self.apply_filters();
    }

    pub fn pop_query_char(&mut self) {
        self.criteria.query.pop();
        self.apply_filters();
    }

    /// Selects a category by its option label; `"All"` clears the criterion.
    ///
    /// A label that no listing carries is accepted and simply matches nothing.
    pub fn set_category(&mut self, label: &str) {
        self.criteria.category = CategoryFilter::from_label(label);
        self.apply_filters();
    }

    /// Steps to the next or previous category option, wrapping.
    ///
    /// If the selected category is no longer among the options (its last
    /// listing was deleted), stepping starts again from `"All"`.
    pub fn cycle_category(&mut self, forward: bool) {
        let len = self.categories.len();
        let next = match self
            .categories
            .iter()
            .position(|c| c == self.criteria.category.label())
        {
            Some(pos) if forward => (pos + 1) % len,
            Some(pos) => (pos + len - 1) % len,
            None => 0,
        };

        let label = self.categories[next].clone();
        self.set_category(&label);
    }

    pub fn set_min_rating(&mut self, min_rating: MinRating) {
        self.criteria.min_rating = min_rating;
        self.apply_filters();
    }

    pub fn cycle_min_rating(&mut self, forward: bool) {
        let min_rating = if forward {
            self.criteria.min_rating.next()
        } else {
            self.criteria.min_rating.previous()
        };
        self.set_min_rating(min_rating);
    }

    /// Clears all three criteria.
    pub fn reset_filters(&mut self) {
        self.criteria = FilterCriteria::default();
        self.apply_filters();
    }

    /// Replaces the text of one draft field.
    pub fn set_draft_field(&mut self, field: DraftField, text: impl Into<String>) {
        self.store.set_draft_field(field, text);
    }

    pub fn push_draft_char(&mut self, field: DraftField, c: char) {
        self.store.push_draft_char(field, c);
    }

    pub fn pop_draft_char(&mut self, field: DraftField) {
        self.store.pop_draft_char(field);
    }

    /// Drops the draft and leaves edit mode.
    pub fn discard_draft(&mut self) {
        self.store.discard_draft();
        self.form_notice = None;
    }

    /// Commits the draft and selects the committed listing if it is visible.
    ///
    /// # Errors
    ///
    /// See [`ListingStore::create_or_update`]. On error nothing changes.
    pub fn commit_draft(&mut self) -> Result<Committed> {
        let committed = self.store.create_or_update()?;
        self.apply_filters();
        self.select_index(committed.index());
        Ok(committed)
    }

    /// Loads the listing at unfiltered position `index` into the draft.
    ///
    /// # Errors
    ///
    /// Returns [`IndexOutOfRange`](crate::DirectoryError::IndexOutOfRange) if
    /// `index` is past the end.
    pub fn start_edit(&mut self, index: usize) -> Result<ListingId> {
        let id = self.store.load_for_edit(index)?;
        self.form_notice = None;
        Ok(id)
    }

    /// Removes the listing at unfiltered position `index`.
    ///
    /// # Errors
    ///
    /// Returns [`IndexOutOfRange`](crate::DirectoryError::IndexOutOfRange) if
    /// `index` is past the end.
    pub fn remove(&mut self, index: usize) -> Result<Entry> {
        let removed = self.store.delete(index)?;
        self.apply_filters();
        Ok(removed)
    }

    /// Map URL for `listing`.
    #[must_use]
    pub fn map_link_for(&self, listing: &Listing) -> String {
        listing.map_link()
    }

    /// Recomputes the category options and visible rows, then clamps the
    /// selection.
    pub fn apply_filters(&mut self) {
        let _span = tracing::debug_span!("apply_filters",
            version = self.store.version(),
            query_len = self.criteria.query.len()
        ).entered();

        self.categories = derive_categories(self.store.listings());
        self.visible_rows = filter::visible(self.store.entries(), &self.criteria)
            .into_iter()
            .map(|row| VisibleRow {
                index: row.index,
                id: row.id,
            })
            .collect();

        if self.visible_rows.is_empty() {
            self.selected_index = 0;
        } else {
            self.selected_index = self.selected_index.min(self.visible_rows.len() - 1);
        }
    }

    /// Moves the selection down by one row, wrapping to the top.
    pub fn move_selection_down(&mut self) {
        if self.visible_rows.is_empty() {
            return;
        }
        self.selected_index = (self.selected_index + 1) % self.visible_rows.len();
    }

    /// Moves the selection up by one row, wrapping to the bottom.
    pub fn move_selection_up(&mut self) {
        if self.visible_rows.is_empty() {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = self.visible_rows.len() - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    #[must_use]
    pub fn selected_row(&self) -> Option<VisibleRow> {
        self.visible_rows.get(self.selected_index).copied()
    }

    #[must_use]
    pub fn selected_listing(&self) -> Option<&Listing> {
        let row = self.selected_row()?;
        self.store.get(row.index).map(|entry| &entry.listing)
    }

    fn select_index(&mut self, index: usize) {
        if let Some(pos) = self.visible_rows.iter().position(|row| row.index == index) {
            self.selected_index = pos;
        }
    }

    /// Computes a renderable view model for a `rows` x `cols` pane.
    ///
    /// In form mode only the draft form is produced. Otherwise the table shows
    /// a window of rows centred on the selection, with query matches in the
    /// name column highlighted.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let header = self.compute_header();
        let filter_bar = self.compute_filter_bar();
        let footer = self.compute_footer();

        if let InputMode::Form(focus) = self.input_mode {
            return UIViewModel {
                header,
                filter_bar,
                display_items: vec![],
                selected_index: 0,
                detail: None,
                form: Some(self.compute_form(focus)),
                empty_state: None,
                footer,
            };
        }

        if self.visible_rows.is_empty() {
            return UIViewModel {
                header,
                filter_bar,
                display_items: vec![],
                selected_index: 0,
                detail: None,
                form: None,
                empty_state: Some(self.compute_empty_state()),
                footer,
            };
        }

        let available_rows = rows.saturating_sub(BROWSE_CHROME_ROWS);

        let mut visible_start = self.selected_index.saturating_sub(available_rows / 2);
        let visible_end = (visible_start + available_rows).min(self.visible_rows.len());

        let actual_count = visible_end - visible_start;
        if actual_count < available_rows && self.visible_rows.len() >= available_rows {
            visible_start = visible_end.saturating_sub(available_rows);
        }

        let needle = self.criteria.query.to_lowercase();

        let display_items = self.visible_rows[visible_start..visible_end]
            .iter()
            .enumerate()
            .filter_map(|(relative_idx, row)| {
                let entry = self.store.get(row.index)?;
                let is_selected = visible_start + relative_idx == self.selected_index;
                Some(self.compute_display_item(&entry.listing, is_selected, cols, &needle))
            })
            .collect();

        let detail = self.selected_listing().map(|listing| DetailInfo {
            coordinates: listing.coordinates_label(),
            map_link: self.map_link_for(listing),
            image: listing.image.clone(),
        });

        UIViewModel {
            header,
            filter_bar,
            display_items,
            selected_index: self.selected_index.saturating_sub(visible_start),
            detail,
            form: None,
            empty_state: None,
            footer,
        }
    }

    fn compute_display_item(
        &self,
        listing: &Listing,
        is_selected: bool,
        cols: usize,
        needle: &str,
    ) -> DisplayItem {
        let fixed = NAME_COLUMN_WIDTH + CATEGORY_COLUMN_WIDTH + RATING_COLUMN_WIDTH + PHONE_COLUMN_WIDTH;
        let address_width = cols.saturating_sub(fixed);

        DisplayItem {
            name: truncate_text(&listing.name, NAME_COLUMN_WIDTH - 1),
            category: truncate_text(&listing.category, CATEGORY_COLUMN_WIDTH - 1),
            rating: listing.rating_label(),
            phone: truncate_text(&listing.phone, PHONE_COLUMN_WIDTH - 1),
            address: truncate_text(&listing.address, address_width),
            is_selected,
            is_unrated: listing.rating.is_nan(),
            highlight_ranges: match_ranges(&listing.name, needle),
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        let title = match (self.input_mode, self.store.cursor()) {
            (InputMode::Form(_), EditCursor::Adding) => "Add New Listing".to_string(),
            (InputMode::Form(_), EditCursor::Editing(id)) => format!("Edit Listing {id}"),
            _ => format!(
                "Barlekha Directory ({}/{})",
                self.visible_rows.len(),
                self.store.len()
            ),
        };
        HeaderInfo {
            title: format!(" {title} "),
        }
    }

    fn compute_filter_bar(&self) -> FilterBarInfo {
        FilterBarInfo {
            query: self.criteria.query.clone(),
            category: self.criteria.category.label().to_string(),
            min_rating: self.criteria.min_rating.to_string(),
            is_editing_query: self.input_mode == InputMode::Search,
        }
    }

    fn compute_form(&self, focus: DraftField) -> FormInfo {
        let draft = self.store.draft();
        let (title, submit_label) = match self.store.cursor() {
            EditCursor::Adding => ("Add New Listing", "Add Listing"),
            EditCursor::Editing(_) => ("Edit Listing", "Update Listing"),
        };

        FormInfo {
            title: title.to_string(),
            fields: DraftField::ALL
                .iter()
                .map(|&field| FormFieldInfo {
                    label: field.placeholder().to_string(),
                    value: draft.field(field).to_string(),
                    is_focused: field == focus,
                })
                .collect(),
            submit_label: submit_label.to_string(),
            notice: self.form_notice.clone(),
        }
    }

    fn compute_empty_state(&self) -> EmptyState {
        if self.store.is_empty() {
            EmptyState {
                message: "No listings yet".to_string(),
                subtitle: "Press 'a' to add the first one".to_string(),
            }
        } else {
            EmptyState {
                message: "No listings match the current filters".to_string(),
                subtitle: "Press Esc to reset filters".to_string(),
            }
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.input_mode {
            InputMode::Browse => {
                "j/k: navigate  /: search  c/C: category  r/R: rating  a: add  e: edit  d: delete  m: map  q: quit"
            }
            InputMode::Search => "Type to filter  Enter: keep query  ESC: clear query",
            InputMode::Form(_) => "Tab/Shift+Tab: field  Enter: save  ESC: discard",
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
            status: self.status.clone(),
        }
    }
}
