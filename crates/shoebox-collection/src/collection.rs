use crate::record::{PhotoRecord, SortKey};

/// In-memory photo collection: insertion-ordered records plus the active
/// search query and the last explicitly applied sort.
///
/// The collection is single-owner state. It performs no I/O, cannot fail,
/// and holds no locks; the UI layer is its only writer.
#[derive(Debug, Default)]
pub struct PhotoCollection {
    photos: Vec<PhotoRecord>,
    query: String,
    sort: Option<SortKey>,
}

impl PhotoCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record. No validation, no deduplication.
    pub fn add_photo(&mut self, photo: PhotoRecord) {
        self.photos.push(photo);
    }

    /// Replace the search query. The text is kept as typed; matching is
    /// case-insensitive at comparison time.
    pub fn update_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
    }

    /// Re-order the collection in place. The sort is stable: records with
    /// equal keys keep their prior relative order. Absent sort fields
    /// compare as the empty string.
    ///
    /// Dates compare as plain strings, which the day-first timestamp
    /// format only keeps chronological within a month (see
    /// [`crate::timestamp::TIMESTAMP_FORMAT`]).
    pub fn sort_by(&mut self, key: SortKey) {
        match key {
            SortKey::DateDesc => self.photos.sort_by(|a, b| date_key(b).cmp(date_key(a))),
            SortKey::DateAsc => self.photos.sort_by(|a, b| date_key(a).cmp(date_key(b))),
            SortKey::NameAsc => self.photos.sort_by(|a, b| name_key(a).cmp(name_key(b))),
            SortKey::NameDesc => self.photos.sort_by(|a, b| name_key(b).cmp(name_key(a))),
        }
        self.sort = Some(key);
    }

    /// The filtered projection of the current order: records whose display
    /// name or creation date contains the query as a case-insensitive
    /// substring. An empty query includes everything. Filtering never
    /// re-orders; the projection is recomputed on every call rather than
    /// cached.
    pub fn view(&self) -> Vec<&PhotoRecord> {
        if self.query.is_empty() {
            return self.photos.iter().collect();
        }

        let needle = self.query.to_lowercase();
        self.photos
            .iter()
            .filter(|photo| {
                name_key(photo).to_lowercase().contains(&needle)
                    || date_key(photo).to_lowercase().contains(&needle)
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.photos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// The last sort applied with [`PhotoCollection::sort_by`], or `None`
    /// while the collection is still in insertion order.
    pub fn sort(&self) -> Option<SortKey> {
        self.sort
    }
}

fn name_key(photo: &PhotoRecord) -> &str {
    photo.display_name.as_deref().unwrap_or("")
}

fn date_key(photo: &PhotoRecord) -> &str {
    photo.created_at.as_deref().unwrap_or("")
}
