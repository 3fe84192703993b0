//! Listing domain model.
//!
//! A [`Listing`] is one directory entry: a business or service with contact
//! details, a rating and optional coordinates. Listings carry no identity of
//! their own; the store assigns each stored listing a [`ListingId`] so that
//! actions on a filtered row still reach the right entry after the collection
//! has been reordered or shrunk.

use serde::Deserialize;
use std::fmt;

use super::numeric::format_number;

/// Base URL for the "view on map" link.
const MAP_BASE_URL: &str = "https://maps.google.com/?q=";

/// Stable synthetic identifier assigned by the store at insertion.
///
/// Ids are never reused within a session. An update keeps the id of the
/// listing it replaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListingId(pub u64);

impl fmt::Display for ListingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single directory entry.
///
/// `rating` may be NaN when the user typed something unparseable; such a
/// listing is kept as-is and simply drops out of any minimum-rating filter.
/// `lat`/`lng` are `None` when left blank, which is distinct from zero.
///
/// # Examples
///
/// ```
/// use barlekha_directory::domain::Listing;
///
/// let mut cafe = Listing::new("Cafe Barlekha", "Restaurant");
/// cafe.rating = 4.2;
/// cafe.lat = Some(24.7051);
/// cafe.lng = Some(91.8199);
/// assert_eq!(cafe.map_link(), "https://maps.google.com/?q=24.7051,91.8199");
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Listing {
    /// Display name. Required.
    pub name: String,

    /// Free-form category. Required.
    pub category: String,

    /// Street address.
    #[serde(default)]
    pub address: String,

    /// Contact phone number.
    #[serde(default)]
    pub phone: String,

    /// Rating, nominally 0.0 to 5.0. Not clamped.
    #[serde(default = "unrated")]
    pub rating: f64,

    /// Image URL.
    #[serde(default)]
    pub image: String,

    /// Latitude in decimal degrees.
    #[serde(default)]
    pub lat: Option<f64>,

    /// Longitude in decimal degrees.
    #[serde(default)]
    pub lng: Option<f64>,
}

const fn unrated() -> f64 {
    f64::NAN
}

impl Listing {
    /// Creates a listing with the two required fields and everything else blank.
    ///
    /// The rating starts as NaN (unrated) and coordinates are absent.
    #[must_use]
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            address: String::new(),
            phone: String::new(),
            rating: unrated(),
            image: String::new(),
            lat: None,
            lng: None,
        }
    }

    /// Returns `true` if `needle` occurs in the name or the category.
    ///
    /// `needle` must already be lower-cased; the listing's fields are
    /// lower-cased here. An empty needle matches everything.
    #[must_use]
    pub fn matches_text(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle) || self.category.to_lowercase().contains(needle)
    }

    /// Builds the map link for this listing's coordinates.
    ///
    /// The format is fixed: `https://maps.google.com/?q={lat},{lng}`. Absent
    /// coordinates are written as `undefined` and unparseable ones as `NaN`,
    /// so the link is produced for every listing.
    #[must_use]
    pub fn map_link(&self) -> String {
        format!(
            "{MAP_BASE_URL}{},{}",
            coordinate_text(self.lat),
            coordinate_text(self.lng)
        )
    }

    /// Human-readable rating, e.g. `"4.5 / 5"`.
    #[must_use]
    pub fn rating_label(&self) -> String {
        format!("{} / 5", format_number(self.rating))
    }

    /// Human-readable coordinates, e.g. `"Lat: 24.7028 | Lng: 91.8225"`.
    #[must_use]
    pub fn coordinates_label(&self) -> String {
        format!(
            "Lat: {} | Lng: {}",
            coordinate_text(self.lat),
            coordinate_text(self.lng)
        )
    }
}

fn coordinate_text(value: Option<f64>) -> String {
    value.map_or_else(|| "undefined".to_string(), format_number)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hospital() -> Listing {
        Listing {
            name: "Barlekha General Hospital".to_string(),
            category: "Health".to_string(),
            address: "Station Road, Barlekha".to_string(),
            phone: "01700-000000".to_string(),
            rating: 4.5,
            image: String::new(),
            lat: Some(24.7028),
            lng: Some(91.8225),
        }
    }

    #[test]
    fn map_link_uses_raw_coordinates() {
        assert_eq!(
            hospital().map_link(),
            "https://maps.google.com/?q=24.7028,91.8225"
        );
    }

    #[test]
    fn map_link_spells_out_missing_and_unparseable_coordinates() {
        let mut listing = hospital();
        listing.lat = None;
        listing.lng = Some(f64::NAN);
        assert_eq!(listing.map_link(), "https://maps.google.com/?q=undefined,NaN");
    }

    #[test]
    fn text_match_checks_name_or_category() {
        let listing = hospital();
        assert!(listing.matches_text("general"));
        assert!(listing.matches_text("heal"));
        assert!(listing.matches_text(""));
        assert!(!listing.matches_text("cafe"));
    }

    #[test]
    fn new_listing_is_unrated_without_coordinates() {
        let listing = Listing::new("Pharmacy", "Health");
        assert!(listing.rating.is_nan());
        assert_eq!(listing.lat, None);
        assert_eq!(listing.rating_label(), "NaN / 5");
    }

    #[test]
    fn labels_format_numbers_compactly() {
        let mut listing = hospital();
        listing.rating = 4.0;
        assert_eq!(listing.rating_label(), "4 / 5");
        assert_eq!(listing.coordinates_label(), "Lat: 24.7028 | Lng: 91.8225");
    }

    #[test]
    fn listing_ids_display_with_hash() {
        assert_eq!(ListingId(12).to_string(), "#12");
    }
}
