pub mod collection;
pub mod record;
pub mod timestamp;

pub use collection::PhotoCollection;
pub use record::{PhotoRecord, SortKey};
