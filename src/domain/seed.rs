//! Seed data for the listing collection.
//!
//! The collection starts from a TOML document of `[[listings]]` tables. A
//! Barlekha seed is compiled into the plugin; a custom file can be supplied
//! through the `seed_file` configuration key.
//!
//! # TOML Format
//!
//! ```toml
//! [[listings]]
//! name = "Cafe Barlekha"
//! category = "Restaurant"
//! address = "College Road, Barlekha"
//! phone = "01700-111111"
//! rating = 4.2
//! lat = 24.7051
//! lng = 91.8199
//! image = "https://via.placeholder.com/300x150?text=Cafe"
//! ```
//!
//! Only `name` and `category` are required. A missing `rating` is stored as
//! NaN (unrated); missing coordinates are absent.

use serde::Deserialize;
use std::fs;
use std::path::Path;

use super::error::{DirectoryError, Result};
use super::listing::Listing;

/// Built-in seed compiled into the binary.
const BUILTIN_SEED: &str = include_str!("../../seeds/barlekha.toml");

#[derive(Debug, Deserialize)]
struct SeedDocument {
    #[serde(default)]
    listings: Vec<Listing>,
}

/// Parses a seed document.
///
/// # Errors
///
/// Returns [`DirectoryError::Seed`] if the TOML is malformed or a listing is
/// missing a required field.
pub fn parse_seed(toml_str: &str) -> Result<Vec<Listing>> {
    let document: SeedDocument = toml::from_str(toml_str)
        .map_err(|e| DirectoryError::Seed(format!("failed to parse seed TOML: {e}")))?;
    Ok(document.listings)
}

/// Loads seed listings from a TOML file.
///
/// # Errors
///
/// Returns [`DirectoryError::Io`] if the file cannot be read and
/// [`DirectoryError::Seed`] if its contents cannot be parsed.
pub fn load_seed_file<P: AsRef<Path>>(path: P) -> Result<Vec<Listing>> {
    let contents = fs::read_to_string(path)?;
    parse_seed(&contents)
}

/// Returns the built-in Barlekha listings.
///
/// # Panics
///
/// Panics if the compiled-in seed fails to parse (should never occur).
#[must_use]
pub fn builtin_seed() -> Vec<Listing> {
    parse_seed(BUILTIN_SEED).expect("Built-in Barlekha seed should always parse")
}
