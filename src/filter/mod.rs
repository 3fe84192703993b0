//! Filter engine and category deriver.
//!
//! The visible subset is a pure function of the stored entries and three
//! independent criteria. It is recomputed synchronously after every change.
//!
//! # Modules
//!
//! - [`criteria`]: Query, category and minimum-rating criteria
//! - [`engine`]: The `visible` filter pass
//! - [`categories`]: Category option set for the category filter

pub mod categories;
pub mod criteria;
pub mod engine;

pub use categories::derive_categories;
pub use criteria::{CategoryFilter, FilterCriteria, MinRating, ALL_CATEGORIES};
pub use engine::{visible, VisibleListing};
