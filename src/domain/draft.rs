//! The text-form staging area for a listing being added or edited.

use std::fmt;
use std::str::FromStr;

use super::error::{DirectoryError, ValidationError};
use super::listing::{Listing, ListingId};
use super::numeric::{format_number, parse_number};

/// One editable field of a [`Draft`], in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DraftField {
    Name,
    Category,
    Address,
    Phone,
    Rating,
    Image,
    Latitude,
    Longitude,
}

impl DraftField {
    /// All fields in the order the form presents them.
    pub const ALL: [Self; 8] = [
        Self::Name,
        Self::Category,
        Self::Address,
        Self::Phone,
        Self::Rating,
        Self::Image,
        Self::Latitude,
        Self::Longitude,
    ];

    /// Placeholder text shown for an empty field.
    #[must_use]
    pub const fn placeholder(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Category => "Category",
            Self::Address => "Address",
            Self::Phone => "Phone",
            Self::Rating => "Rating (0-5)",
            Self::Image => "Image URL",
            Self::Latitude => "Latitude",
            Self::Longitude => "Longitude",
        }
    }

    /// The field after this one, wrapping to the first.
    #[must_use]
    pub fn next(self) -> Self {
        let pos = self.position();
        Self::ALL[(pos + 1) % Self::ALL.len()]
    }

    /// The field before this one, wrapping to the last.
    #[must_use]
    pub fn previous(self) -> Self {
        let pos = self.position();
        Self::ALL[(pos + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    fn position(self) -> usize {
        Self::ALL.iter().position(|f| *f == self).unwrap_or(0)
    }
}

impl FromStr for DraftField {
    type Err = DirectoryError;

    /// Accepts the field's data name (`"lat"`, `"rating"`, ...) in any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "name" => Ok(Self::Name),
            "category" => Ok(Self::Category),
            "address" => Ok(Self::Address),
            "phone" => Ok(Self::Phone),
            "rating" => Ok(Self::Rating),
            "image" => Ok(Self::Image),
            "lat" | "latitude" => Ok(Self::Latitude),
            "lng" | "longitude" => Ok(Self::Longitude),
            _ => Err(DirectoryError::UnknownField(s.to_string())),
        }
    }
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.placeholder())
    }
}

/// Whether the draft will be appended or will replace an existing listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditCursor {
    /// Commit appends a new listing.
    #[default]
    Adding,
    /// Commit replaces the listing with this id at its current position.
    Editing(ListingId),
}

/// Form-in-progress listing with every field held as text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Draft {
    pub name: String,
    pub category: String,
    pub address: String,
    pub phone: String,
    pub rating: String,
    pub image: String,
    pub lat: String,
    pub lng: String,
}

impl Draft {
    /// Copies a stored listing into text form.
    ///
    /// The rating is always stringified (NaN becomes `"NaN"`); absent
    /// coordinates become empty strings.
    #[must_use]
    pub fn from_listing(listing: &Listing) -> Self {
        Self {
            name: listing.name.clone(),
            category: listing.category.clone(),
            address: listing.address.clone(),
            phone: listing.phone.clone(),
            rating: format_number(listing.rating),
            image: listing.image.clone(),
            lat: listing.lat.map(format_number).unwrap_or_default(),
            lng: listing.lng.map(format_number).unwrap_or_default(),
        }
    }

    /// Returns the text of one field.
    #[must_use]
    pub fn field(&self, field: DraftField) -> &str {
        match field {
            DraftField::Name => &self.name,
            DraftField::Category => &self.category,
            DraftField::Address => &self.address,
            DraftField::Phone => &self.phone,
            DraftField::Rating => &self.rating,
            DraftField::Image => &self.image,
            DraftField::Latitude => &self.lat,
            DraftField::Longitude => &self.lng,
        }
    }

    /// Mutable access to one field, used for keystroke editing.
    pub fn field_mut(&mut self, field: DraftField) -> &mut String {
        match field {
            DraftField::Name => &mut self.name,
            DraftField::Category => &mut self.category,
            DraftField::Address => &mut self.address,
            DraftField::Phone => &mut self.phone,
            DraftField::Rating => &mut self.rating,
            DraftField::Image => &mut self.image,
            DraftField::Latitude => &mut self.lat,
            DraftField::Longitude => &mut self.lng,
        }
    }

    /// Replaces the text of one field.
    pub fn set(&mut self, field: DraftField, text: impl Into<String>) {
        *self.field_mut(field) = text.into();
    }

    /// Returns `true` if every field is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        DraftField::ALL.iter().all(|f| self.field(*f).is_empty())
    }

    /// Checks the required fields on their raw text.
    ///
    /// Whitespace counts as content: `" "` is a valid name.
    ///
    /// # Errors
    ///
    /// [`ValidationError::MissingName`] if the name is empty, otherwise
    /// [`ValidationError::MissingCategory`] if the category is empty.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.is_empty() {
            return Err(ValidationError::MissingName);
        }
        if self.category.is_empty() {
            return Err(ValidationError::MissingCategory);
        }
        Ok(())
    }

    /// Validates and converts the draft into a listing.
    ///
    /// Numeric fields are parsed leniently; see [`parse_number`]. Nothing is
    /// clamped or rounded. Coordinates are always present once committed: a
    /// blank latitude or longitude is stored as NaN.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] found by [`Draft::validate`].
    pub fn to_listing(&self) -> Result<Listing, ValidationError> {
        self.validate()?;
        Ok(Listing {
            name: self.name.clone(),
            category: self.category.clone(),
            address: self.address.clone(),
            phone: self.phone.clone(),
            rating: parse_number(&self.rating),
            image: self.image.clone(),
            lat: Some(parse_number(&self.lat)),
            lng: Some(parse_number(&self.lng)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> Draft {
        let mut draft = Draft::default();
        draft.set(DraftField::Name, "Barlekha Pharmacy");
        draft.set(DraftField::Category, "Health");
        draft.set(DraftField::Rating, "3.8");
        draft.set(DraftField::Latitude, "24.70");
        draft
    }

    #[test]
    fn empty_name_is_reported_before_empty_category() {
        assert_eq!(Draft::default().validate(), Err(ValidationError::MissingName));

        let mut draft = Draft::default();
        draft.name = "Clinic".to_string();
        assert_eq!(draft.validate(), Err(ValidationError::MissingCategory));
    }

    #[test]
    fn whitespace_counts_as_content() {
        let mut draft = Draft::default();
        draft.name = " ".to_string();
        draft.category = " ".to_string();
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn conversion_parses_numbers_without_clamping() {
        let mut draft = filled();
        draft.rating = "7.5".to_string();
        let listing = draft.to_listing().unwrap();
        assert_eq!(listing.rating, 7.5);
        assert_eq!(listing.lat, Some(24.70));
        assert!(listing.lng.is_some_and(f64::is_nan));
    }

    #[test]
    fn unparseable_numbers_are_preserved_as_nan() {
        let mut draft = filled();
        draft.rating = "great".to_string();
        draft.lng = "east".to_string();
        let listing = draft.to_listing().unwrap();
        assert!(listing.rating.is_nan());
        assert!(listing.lng.is_some_and(f64::is_nan));
    }

    #[test]
    fn loading_a_listing_stringifies_numbers() {
        let mut listing = Listing::new("Cafe Barlekha", "Restaurant");
        listing.rating = 4.0;
        listing.lat = Some(24.7051);
        let draft = Draft::from_listing(&listing);
        assert_eq!(draft.rating, "4");
        assert_eq!(draft.lat, "24.7051");
        assert_eq!(draft.lng, "");
    }

    #[test]
    fn field_names_parse_case_insensitively() {
        assert_eq!("LAT".parse::<DraftField>().unwrap(), DraftField::Latitude);
        assert_eq!("image".parse::<DraftField>().unwrap(), DraftField::Image);
        assert!(matches!(
            "email".parse::<DraftField>(),
            Err(DirectoryError::UnknownField(ref f)) if f == "email"
        ));
    }

    #[test]
    fn field_focus_wraps_both_ways() {
        assert_eq!(DraftField::Longitude.next(), DraftField::Name);
        assert_eq!(DraftField::Name.previous(), DraftField::Longitude);
        assert_eq!(DraftField::Phone.next(), DraftField::Rating);
    }
}
