//! File boundary of the rating engine
//!
//! CSV ingestion with date normalization on the way in, and audit ledger
//! serialization on the way out. The engine itself only sees in-memory
//! records.

pub mod dates;
pub mod reader;
pub mod writer;

pub use dates::parse_match_date;
pub use reader::{read_matches, read_matches_from_path, LoadedMatches, REQUIRED_COLUMNS};
pub use writer::{write_audit_rows, write_audit_rows_to_path};
