//! Error types for the directory plugin.
//!
//! This module defines the centralized error type [`DirectoryError`], the
//! narrower [`ValidationError`] returned when a draft cannot be committed, and
//! a [`Result`] alias used throughout the crate. All errors are implemented
//! with `thiserror`.

use thiserror::Error;

use super::listing::ListingId;

/// Reasons a draft is refused by the listing store.
///
/// A refused draft is never partially applied: the collection and the draft
/// are left exactly as they were.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The draft's name field is the empty string.
    #[error("a listing needs a name")]
    MissingName,

    /// The draft's category field is the empty string.
    #[error("a listing needs a category")]
    MissingCategory,
}

/// The main error type for directory operations.
///
/// Most variants describe conditions the event handler treats as no-ops
/// (a stale index, a listing deleted mid-edit). They are still surfaced as
/// errors so callers driving the library directly can tell them apart.
///
/// # Examples
///
/// ```
/// use barlekha_directory::domain::{DirectoryError, ValidationError};
///
/// let err: DirectoryError = ValidationError::MissingName.into();
/// assert_eq!(err.to_string(), "invalid draft: a listing needs a name");
/// ```
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// A positional operation addressed an index past the end of the collection.
    ///
    /// Happens when the collection changed between render and action.
    #[error("listing index {index} out of range (collection has {len})")]
    IndexOutOfRange {
        /// Requested position in the unfiltered collection.
        index: usize,
        /// Collection length at the time of the request.
        len: usize,
    },

    /// The listing referenced by an id is no longer in the collection.
    #[error("listing {0} no longer exists")]
    ListingNotFound(ListingId),

    /// The draft failed validation on commit.
    #[error("invalid draft: {0}")]
    Validation(#[from] ValidationError),

    /// A minimum-rating threshold outside the supported set.
    #[error("unsupported minimum rating {0}; expected one of 0, 3, 3.5, 4, 4.5, 5")]
    UnsupportedRating(f64),

    /// A draft field name that does not exist.
    #[error("unknown draft field: {0}")]
    UnknownField(String),

    /// Seed data could not be read or parsed.
    #[error("Seed error: {0}")]
    Seed(String),

    /// Theme parsing or application failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized `Result` type for directory operations.
pub type Result<T> = std::result::Result<T, DirectoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_convert_into_directory_error() {
        let err: DirectoryError = ValidationError::MissingCategory.into();
        assert!(matches!(
            err,
            DirectoryError::Validation(ValidationError::MissingCategory)
        ));
    }

    #[test]
    fn index_out_of_range_message_names_both_numbers() {
        let err = DirectoryError::IndexOutOfRange { index: 7, len: 2 };
        assert_eq!(
            err.to_string(),
            "listing index 7 out of range (collection has 2)"
        );
    }
}
