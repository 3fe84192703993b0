//! In-memory listing store with draft editing.
//!
//! [`ListingStore`] owns the ordered listing collection, the draft being
//! edited and the edit cursor. Listings are addressed by their position in the
//! unfiltered collection; each stored entry also carries a [`ListingId`] so an
//! edit started on one entry can only ever replace that entry.

use crate::domain::error::{DirectoryError, Result};
use crate::domain::{Draft, DraftField, EditCursor, Listing, ListingId};

/// A stored listing together with its stable id.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    /// Id assigned when the listing entered the store.
    pub id: ListingId,
    /// The listing itself.
    pub listing: Listing,
}

/// Outcome of a successful draft commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Committed {
    /// A new listing was appended at `index`.
    Created {
        /// Id assigned to the new listing.
        id: ListingId,
        /// Position of the new listing (always the last).
        index: usize,
    },
    /// The listing at `index` was replaced wholesale.
    Updated {
        /// Id of the replaced listing, carried over to the replacement.
        id: ListingId,
        /// Position of the replaced listing.
        index: usize,
    },
}

impl Committed {
    /// Position of the committed listing.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Created { index, .. } | Self::Updated { index, .. } => index,
        }
    }
}

/// Ordered listing collection plus the draft and edit cursor.
///
/// # Examples
///
/// ```
/// use barlekha_directory::domain::{DraftField, Listing};
/// use barlekha_directory::store::ListingStore;
///
/// let mut store = ListingStore::new(vec![Listing::new("Cafe Barlekha", "Restaurant")]);
/// store.set_draft_field(DraftField::Name, "Barlekha Pharmacy");
/// store.set_draft_field(DraftField::Category, "Health");
/// let committed = store.create_or_update()?;
///
/// assert_eq!(committed.index(), 1);
/// assert_eq!(store.len(), 2);
/// assert!(store.draft().is_empty());
/// # Ok::<(), barlekha_directory::DirectoryError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ListingStore {
    entries: Vec<Entry>,
    draft: Draft,
    cursor: EditCursor,
    next_id: u64,
    version: u64,
}

impl ListingStore {
    /// Creates a store seeded with `listings` in the given order.
    #[must_use]
    pub fn new(listings: Vec<Listing>) -> Self {
        let mut store = Self::default();
        for listing in listings {
            let id = store.allocate_id();
            store.entries.push(Entry { id, listing });
        }
        store
    }

    /// All entries in collection order.
    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Iterates listings in collection order.
    pub fn listings(&self) -> impl Iterator<Item = &Listing> {
        self.entries.iter().map(|e| &e.listing)
    }

    /// Number of stored listings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the entry at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    /// Current position of the listing with `id`.
    #[must_use]
    pub fn position_of(&self, id: ListingId) -> Option<usize> {
        self.entries.iter().position(|e| e.id == id)
    }

    /// Counter bumped on every collection mutation.
    ///
    /// Two reads with the same version saw the same collection.
    #[must_use]
    pub const fn version(&self) -> u64 {
        self.version
    }

    /// The draft being edited.
    #[must_use]
    pub const fn draft(&self) -> &Draft {
        &self.draft
    }

    /// Whether the next commit adds or replaces.
    #[must_use]
    pub const fn cursor(&self) -> EditCursor {
        self.cursor
    }

    /// Position of the listing under edit, or `None` in add mode or when the
    /// edited listing has since been deleted.
    #[must_use]
    pub fn editing_index(&self) -> Option<usize> {
        match self.cursor {
            EditCursor::Adding => None,
            EditCursor::Editing(id) => self.position_of(id),
        }
    }

    /// Replaces the text of one draft field.
    pub fn set_draft_field(&mut self, field: DraftField, text: impl Into<String>) {
        self.draft.set(field, text);
    }

    /// Appends a character to one draft field.
    pub fn push_draft_char(&mut self, field: DraftField, c: char) {
        self.draft.field_mut(field).push(c);
    }

    /// Removes the last character of one draft field.
    pub fn pop_draft_char(&mut self, field: DraftField) {
        self.draft.field_mut(field).pop();
    }

    /// Clears the draft and returns to add mode without touching the collection.
    pub fn discard_draft(&mut self) {
        tracing::debug!(cursor = ?self.cursor, "discarding draft");
        self.reset_draft();
    }

    /// Commits the draft: replaces the listing under edit, or appends.
    ///
    /// On success the draft is cleared and the cursor returns to add mode.
    /// On failure nothing changes, including the draft.
    ///
    /// # Errors
    ///
    /// - [`DirectoryError::Validation`] if the name or category is empty
    /// - [`DirectoryError::ListingNotFound`] if the listing under edit was
    ///   deleted after the edit started
    pub fn create_or_update(&mut self) -> Result<Committed> {
        let _span = tracing::debug_span!("create_or_update",
            cursor = ?self.cursor,
            total_listings = self.entries.len()
        ).entered();

        let listing = self.draft.to_listing()?;

        let committed = match self.cursor {
            EditCursor::Editing(id) => {
                let index = self
                    .position_of(id)
                    .ok_or(DirectoryError::ListingNotFound(id))?;
                self.entries[index] = Entry { id, listing };
                Committed::Updated { id, index }
            }
            EditCursor::Adding => {
                let id = self.allocate_id();
                self.entries.push(Entry { id, listing });
                Committed::Created {
                    id,
                    index: self.entries.len() - 1,
                }
            }
        };

        self.version += 1;
        self.reset_draft();

        tracing::debug!(committed = ?committed, "draft committed");
        Ok(committed)
    }

    /// Removes the listing at `index` and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::IndexOutOfRange`] if `index` is past the end.
    pub fn delete(&mut self, index: usize) -> Result<Entry> {
        let len = self.entries.len();
        if index >= len {
            return Err(DirectoryError::IndexOutOfRange { index, len });
        }

        let removed = self.entries.remove(index);
        self.version += 1;

        tracing::debug!(
            index = index,
            id = %removed.id,
            name = %removed.listing.name,
            "listing deleted"
        );
        Ok(removed)
    }

    /// Loads the listing at `index` into the draft and enters edit mode.
    ///
    /// Any unsaved draft is overwritten. The source listing stays in place and
    /// is not locked.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::IndexOutOfRange`] if `index` is past the end.
    pub fn load_for_edit(&mut self, index: usize) -> Result<ListingId> {
        let entry = self
            .entries
            .get(index)
            .ok_or(DirectoryError::IndexOutOfRange {
                index,
                len: self.entries.len(),
            })?;

        self.draft = Draft::from_listing(&entry.listing);
        self.cursor = EditCursor::Editing(entry.id);

        tracing::debug!(index = index, id = %entry.id, "listing loaded for edit");
        Ok(entry.id)
    }

    fn reset_draft(&mut self) {
        self.draft = Draft::default();
        self.cursor = EditCursor::Adding;
    }

    fn allocate_id(&mut self) -> ListingId {
        self.next_id += 1;
        ListingId(self.next_id)
    }
}
