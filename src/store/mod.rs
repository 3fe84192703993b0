//! Listing store layer.
//!
//! Holds the session's listing collection and the draft used for adding and
//! editing. Everything lives in memory for the lifetime of the plugin
//! instance; nothing is written to disk.
//!
//! # Modules
//!
//! - `listings`: [`ListingStore`], stored [`Entry`] values and commit outcomes

pub mod listings;

pub use listings::{Committed, Entry, ListingStore};
