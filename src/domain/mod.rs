pub mod display_row;
pub mod fold_section;
pub mod payload;
pub mod sort_key;
pub mod table_candidate;

pub use display_row::DisplayRow;
pub use fold_section::FoldSection;
pub use payload::{LoadOutcome, Payload, PayloadEnvelope, cell_text};
pub use sort_key::{SortDirection, SortKey};
pub use table_candidate::{CandidateReason, TableCandidate};
