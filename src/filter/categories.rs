//! Category option set derived from the collection.

use std::collections::HashSet;

use crate::domain::Listing;

use super::criteria::ALL_CATEGORIES;

/// Returns `"All"` followed by each distinct category in first-seen order.
///
/// Categories are compared exactly, so `"Health"` and `"health"` are two
/// options. A listing whose category is literally `"All"` does not add a
/// second wildcard entry.
///
/// # Examples
///
/// ```
/// use barlekha_directory::domain::Listing;
/// use barlekha_directory::filter::derive_categories;
///
/// let listings = [
///     Listing::new("Hospital", "Health"),
///     Listing::new("Cafe", "Restaurant"),
///     Listing::new("Clinic", "Health"),
/// ];
/// assert_eq!(derive_categories(&listings), ["All", "Health", "Restaurant"]);
/// ```
#[must_use]
pub fn derive_categories<'a, I>(listings: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a Listing>,
{
    let mut seen: HashSet<&'a str> = HashSet::from([ALL_CATEGORIES]);
    let mut categories = vec![ALL_CATEGORIES.to_string()];

    for listing in listings {
        if seen.insert(listing.category.as_str()) {
            categories.push(listing.category.clone());
        }
    }

    categories
}
