//! Domain layer for the directory plugin.
//!
//! Core types and rules, independent of Zellij APIs and rendering.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`listing`]: Listing model and stable listing ids
//! - [`draft`]: Text-form draft, draft fields and the edit cursor
//! - [`numeric`]: Lenient number parsing for text-edited fields
//! - [`seed`]: Initial listing set loaded at startup
//!
//! # Examples
//!
//! ```
//! use barlekha_directory::domain::{Draft, DraftField};
//!
//! let mut draft = Draft::default();
//! draft.set(DraftField::Name, "Barlekha Pharmacy");
//! draft.set(DraftField::Category, "Health");
//! draft.set(DraftField::Rating, "3.8");
//!
//! let listing = draft.to_listing()?;
//! assert_eq!(listing.rating, 3.8);
//! # Ok::<(), barlekha_directory::domain::ValidationError>(())
//! ```

pub mod draft;
pub mod error;
pub mod listing;
pub mod numeric;
pub mod seed;

pub use draft::{Draft, DraftField, EditCursor};
pub use error::{DirectoryError, Result, ValidationError};
pub use listing::{Listing, ListingId};
