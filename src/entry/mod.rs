pub mod import;
pub mod store;
pub mod types;
pub mod validation;

pub use import::{load_entries, EntriesFile};
pub use store::{RecordStore, SortOrder};
pub use types::{CompetitionEntry, EntryDraft, Lifts, NewEntry};
pub use validation::{parse_draft, validate_measurements, validate_new_entry, INPUT_DATE_FORMAT};
