//! Filter criteria: free-text query, category and minimum rating.

use std::fmt;

use crate::domain::error::{DirectoryError, Result};
use crate::domain::numeric::format_number;

/// Label of the category wildcard.
pub const ALL_CATEGORIES: &str = "All";

/// Category criterion.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// Every category passes.
    #[default]
    All,
    /// Only listings whose category equals this string exactly.
    Named(String),
}

impl CategoryFilter {
    /// Builds a filter from an option label; `"All"` is the wildcard.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        if label == ALL_CATEGORIES {
            Self::All
        } else {
            Self::Named(label.to_string())
        }
    }

    /// The option label for this filter.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::All => ALL_CATEGORIES,
            Self::Named(name) => name,
        }
    }

    /// Returns `true` if a listing in `category` passes.
    #[must_use]
    pub fn accepts(&self, category: &str) -> bool {
        match self {
            Self::All => true,
            Self::Named(name) => name == category,
        }
    }
}

/// Minimum-rating threshold, one of 0, 3, 3.5, 4, 4.5 or 5.
///
/// [`MinRating::Any`] (0) disables the rating filter, so unrated listings
/// stay visible. Every other threshold excludes listings whose rating is NaN.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MinRating {
    #[default]
    Any,
    Three,
    ThreeAndHalf,
    Four,
    FourAndHalf,
    Five,
}

impl MinRating {
    /// All thresholds in ascending order.
    pub const ALL: [Self; 6] = [
        Self::Any,
        Self::Three,
        Self::ThreeAndHalf,
        Self::Four,
        Self::FourAndHalf,
        Self::Five,
    ];

    /// Numeric value of the threshold.
    #[must_use]
    pub const fn value(self) -> f64 {
        match self {
            Self::Any => 0.0,
            Self::Three => 3.0,
            Self::ThreeAndHalf => 3.5,
            Self::Four => 4.0,
            Self::FourAndHalf => 4.5,
            Self::Five => 5.0,
        }
    }

    /// Returns `true` if `rating` meets the threshold.
    #[must_use]
    pub fn accepts(self, rating: f64) -> bool {
        match self {
            Self::Any => true,
            _ => rating >= self.value(),
        }
    }

    /// Next higher threshold, wrapping from 5 back to 0.
    #[must_use]
    pub fn next(self) -> Self {
        let pos = self.position();
        Self::ALL[(pos + 1) % Self::ALL.len()]
    }

    /// Next lower threshold, wrapping from 0 up to 5.
    #[must_use]
    pub fn previous(self) -> Self {
        let pos = self.position();
        Self::ALL[(pos + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    fn position(self) -> usize {
        Self::ALL.iter().position(|r| *r == self).unwrap_or(0)
    }
}

impl TryFrom<f64> for MinRating {
    type Error = DirectoryError;

    fn try_from(value: f64) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|r| r.value() == value)
            .ok_or(DirectoryError::UnsupportedRating(value))
    }
}

impl fmt::Display for MinRating {
    /// Formats as the option label, e.g. `Min Rating: 3.5+`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Min Rating: {}+", format_number(self.value()))
    }
}

/// The three independent filter criteria.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterCriteria {
    /// Case-insensitive substring matched against name or category.
    pub query: String,
    /// Category criterion.
    pub category: CategoryFilter,
    /// Minimum rating criterion.
    pub min_rating: MinRating,
}

impl FilterCriteria {
    /// Returns `true` when no criterion restricts the collection.
    #[must_use]
    pub fn is_unfiltered(&self) -> bool {
        self.query.is_empty()
            && self.category == CategoryFilter::All
            && self.min_rating == MinRating::Any
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_label_maps_to_wildcard() {
        assert_eq!(CategoryFilter::from_label("All"), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::from_label("all"),
            CategoryFilter::Named("all".to_string())
        );
        assert_eq!(CategoryFilter::Named("Health".into()).label(), "Health");
    }

    #[test]
    fn category_match_is_exact_and_case_sensitive() {
        let health = CategoryFilter::Named("Health".into());
        assert!(health.accepts("Health"));
        assert!(!health.accepts("health"));
        assert!(!health.accepts("Health "));
        assert!(CategoryFilter::All.accepts("anything"));
    }

    #[test]
    fn zero_threshold_admits_unrated_listings() {
        assert!(MinRating::Any.accepts(f64::NAN));
        assert!(MinRating::Any.accepts(-1.0));
        assert!(!MinRating::Three.accepts(f64::NAN));
    }

    #[test]
    fn thresholds_are_inclusive() {
        assert!(MinRating::FourAndHalf.accepts(4.5));
        assert!(!MinRating::FourAndHalf.accepts(4.49));
        assert!(MinRating::Five.accepts(7.0));
    }

    #[test]
    fn numeric_thresholds_convert_only_from_the_fixed_set() {
        assert_eq!(MinRating::try_from(3.5).unwrap(), MinRating::ThreeAndHalf);
        assert_eq!(MinRating::try_from(0.0).unwrap(), MinRating::Any);
        assert!(matches!(
            MinRating::try_from(2.0),
            Err(DirectoryError::UnsupportedRating(v)) if v == 2.0
        ));
    }

    #[test]
    fn thresholds_cycle_and_label() {
        assert_eq!(MinRating::Five.next(), MinRating::Any);
        assert_eq!(MinRating::Any.previous(), MinRating::Five);
        assert_eq!(MinRating::ThreeAndHalf.to_string(), "Min Rating: 3.5+");
        assert_eq!(MinRating::Any.to_string(), "Min Rating: 0+");
    }
}
