use std::fmt;

/// One captured photo. Every field is independently optional: a record
/// without a locator still appears in the list, it just cannot be opened
/// full screen or thumbnailed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PhotoRecord {
    /// Opaque identifier of the image resource, produced by whatever
    /// persisted the capture. The collection never interprets it.
    pub locator: Option<String>,
    pub display_name: Option<String>,
    /// Capture moment rendered as `dd-MM-yyyy / HH:mm:ss`.
    pub created_at: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortKey {
    DateDesc,
    DateAsc,
    NameAsc,
    NameDesc,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::DateDesc,
        SortKey::DateAsc,
        SortKey::NameAsc,
        SortKey::NameDesc,
    ];
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SortKey::DateDesc => "Date (new to old)",
            SortKey::DateAsc => "Date (old to new)",
            SortKey::NameAsc => "Name (A to Z)",
            SortKey::NameDesc => "Name (Z to A)",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_keys_have_distinct_labels() {
        let labels: Vec<String> = SortKey::ALL.iter().map(|k| k.to_string()).collect();
        for (i, a) in labels.iter().enumerate() {
            for b in &labels[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn default_record_is_fully_unset() {
        let record = PhotoRecord::default();
        assert!(record.locator.is_none());
        assert!(record.display_name.is_none());
        assert!(record.created_at.is_none());
    }
}
