pub mod io;
pub mod merge;
pub mod types;

pub use io::{HistoryOrigin, JsonHistoryStore, LoadedHistory, SaveReport};
pub use merge::{MergeAction, MergeOutcome, MergeReport, MergeRequest, merge_entry};
pub use types::{CanonicalReport, VersionEntry, VersionHistory};
