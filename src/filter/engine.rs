//! Derivation of the visible listing subset.

use crate::domain::{Listing, ListingId};
use crate::store::Entry;

use super::criteria::FilterCriteria;

/// A listing that passed the filters, with its place in the full collection.
///
/// `index` is the position in the unfiltered collection, so row actions can
/// address the store directly regardless of how many rows were filtered out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibleListing<'a> {
    /// Position in the unfiltered collection.
    pub index: usize,
    /// Stable id of the listing.
    pub id: ListingId,
    /// The listing itself.
    pub listing: &'a Listing,
}

impl FilterCriteria {
    /// Returns `true` if `listing` passes all three criteria.
    ///
    /// Category must match exactly (or be the wildcard), the lower-cased query
    /// must occur in the lower-cased name or category, and the rating must meet
    /// the threshold.
    #[must_use]
    pub fn matches(&self, listing: &Listing) -> bool {
        self.accepts(listing, &self.query.to_lowercase())
    }

    /// `matches` with the query already lower-cased.
    fn accepts(&self, listing: &Listing, needle: &str) -> bool {
        self.category.accepts(&listing.category)
            && listing.matches_text(needle)
            && self.min_rating.accepts(listing.rating)
    }
}

/// Filters `entries` down to the listings passing `criteria`.
///
/// Pure and order-preserving: the result is a subsequence of `entries`.
///
/// # Examples
///
/// ```
/// use barlekha_directory::domain::Listing;
/// use barlekha_directory::filter::{visible, FilterCriteria, MinRating};
/// use barlekha_directory::store::ListingStore;
///
/// let mut cafe = Listing::new("Cafe Barlekha", "Restaurant");
/// cafe.rating = 4.2;
/// let mut hospital = Listing::new("Barlekha General Hospital", "Health");
/// hospital.rating = 4.5;
/// let store = ListingStore::new(vec![cafe, hospital]);
///
/// let criteria = FilterCriteria {
///     query: "barlekha".to_string(),
///     min_rating: MinRating::FourAndHalf,
///     ..FilterCriteria::default()
/// };
/// let rows = visible(store.entries(), &criteria);
/// assert_eq!(rows.len(), 1);
/// assert_eq!(rows[0].index, 1);
/// ```
#[must_use]
pub fn visible<'a>(entries: &'a [Entry], criteria: &FilterCriteria) -> Vec<VisibleListing<'a>> {
    let _span = tracing::debug_span!("visible",
        total_listings = entries.len(),
        query_len = criteria.query.len(),
        category = %criteria.category.label(),
        min_rating = criteria.min_rating.value()
    ).entered();

    let needle = criteria.query.to_lowercase();

    let rows: Vec<VisibleListing<'a>> = entries
        .iter()
        .enumerate()
        .filter(|(_, entry)| criteria.accepts(&entry.listing, &needle))
        .map(|(index, entry)| VisibleListing {
            index,
            id: entry.id,
            listing: &entry.listing,
        })
        .collect();

    tracing::debug!(visible_count = rows.len(), "filters applied");
    rows
}
