//! View model types representing renderable UI state.
//!
//! View models are computed from application state by
//! `AppState::compute_viewmodel()` and consumed by the renderer. They carry
//! no business logic, only display-ready strings, selection flags and
//! pre-computed highlight ranges.
//!
//! # Example
//!
//! ```rust
//! use barlekha_directory::ui::viewmodel::{DisplayItem, FilterBarInfo, FooterInfo, HeaderInfo, UIViewModel};
//!
//! let vm = UIViewModel {
//!     header: HeaderInfo { title: " Barlekha Directory (1/1) ".to_string() },
//!     filter_bar: FilterBarInfo {
//!         query: String::new(),
//!         category: "All".to_string(),
//!         min_rating: "Min Rating: 0+".to_string(),
//!         is_editing_query: false,
//!     },
//!     display_items: vec![DisplayItem {
//!         name: "Cafe Barlekha".to_string(),
//!         category: "Restaurant".to_string(),
//!         rating: "4.2 / 5".to_string(),
//!         phone: "01700-111111".to_string(),
//!         address: "College Road, Barlekha".to_string(),
//!         is_selected: true,
//!         is_unrated: false,
//!         highlight_ranges: vec![],
//!     }],
//!     selected_index: 0,
//!     detail: None,
//!     form: None,
//!     empty_state: None,
//!     footer: FooterInfo { keybindings: "q: quit".to_string(), status: None },
//! };
//! assert_eq!(vm.display_items.len(), 1);
//! ```

/// Width of the name column, including its trailing gap.
pub const NAME_COLUMN_WIDTH: usize = 28;
/// Width of the category column, including its trailing gap.
pub const CATEGORY_COLUMN_WIDTH: usize = 14;
/// Width of the rating column, including its trailing gap.
pub const RATING_COLUMN_WIDTH: usize = 10;
/// Width of the phone column, including its trailing gap.
pub const PHONE_COLUMN_WIDTH: usize = 15;

/// Complete UI view model for rendering.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    /// Title bar.
    pub header: HeaderInfo,

    /// Current filter criteria.
    pub filter_bar: FilterBarInfo,

    /// Table rows inside the visible window.
    pub display_items: Vec<DisplayItem>,

    /// Index of the selected row within `display_items`.
    pub selected_index: usize,

    /// Coordinates and map link of the selected listing.
    pub detail: Option<DetailInfo>,

    /// Draft form, present only while editing.
    pub form: Option<FormInfo>,

    /// Message shown instead of the table when nothing is visible.
    pub empty_state: Option<EmptyState>,

    /// Key hints and the last status message.
    pub footer: FooterInfo,
}

/// One row of the listing table.
#[derive(Debug, Clone)]
pub struct DisplayItem {
    /// Listing name, truncated to the name column.
    pub name: String,
    pub category: String,
    /// Rating label such as `"4.5 / 5"`.
    pub rating: String,
    pub phone: String,
    pub address: String,

    /// Whether this row is the selection.
    pub is_selected: bool,

    /// Whether the rating is NaN.
    pub is_unrated: bool,

    /// Character ranges of `name` matching the query.
    ///
    /// Each tuple is `(start_index, end_index)` in character indices, end
    /// exclusive.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Header display information.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    /// Title text, including visible and total counts.
    pub title: String,
}

/// The three filter criteria as displayed.
#[derive(Debug, Clone)]
pub struct FilterBarInfo {
    /// Free-text query.
    pub query: String,
    /// Selected category label.
    pub category: String,
    /// Minimum rating label.
    pub min_rating: String,
    /// Whether keystrokes currently go to the query.
    pub is_editing_query: bool,
}

/// Extra line describing the selected listing.
#[derive(Debug, Clone)]
pub struct DetailInfo {
    /// `"Lat: x | Lng: y"`.
    pub coordinates: String,
    /// Full map URL.
    pub map_link: String,
    /// Image URL, possibly empty.
    pub image: String,
}

/// Draft form display information.
#[derive(Debug, Clone)]
pub struct FormInfo {
    /// `"Add New Listing"` or `"Edit Listing"`.
    pub title: String,
    /// One entry per draft field, in form order.
    pub fields: Vec<FormFieldInfo>,
    /// Label of the submit action.
    pub submit_label: String,
    /// Validation or commit message from the last submit attempt.
    pub notice: Option<String>,
}

/// A single draft field row.
#[derive(Debug, Clone)]
pub struct FormFieldInfo {
    /// Field placeholder, used as its label.
    pub label: String,
    /// Current draft text.
    pub value: String,
    /// Whether keystrokes go to this field.
    pub is_focused: bool,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help text for the current mode.
    pub keybindings: String,
    /// Outcome of the last action, if any.
    pub status: Option<String>,
}

/// Empty state message display information.
#[derive(Debug, Clone)]
pub struct EmptyState {
    /// Primary message.
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}
