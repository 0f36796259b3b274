mod entry;
pub mod exclusions;
pub mod paths;
mod ranker;
mod size;
mod walker;

pub use entry::{FileRecord, ScanRequest};
pub use exclusions::ExclusionSet;
pub use ranker::{rank, Ranked};
pub use size::{format_size, parse_size};
pub use walker::TreeScanner;
