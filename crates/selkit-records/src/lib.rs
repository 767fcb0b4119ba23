//! Small transformations over key/value records.
//!
//! Records are insertion-ordered JSON objects ([`Record`]); the remaining
//! helpers work on plain typed values.

/// Error types for record operations.
pub mod error;
/// City sorting and generic grouping.
pub mod grouping;
/// Typed JSON round-trips.
pub mod json;
/// Operations on whole records.
pub mod record;
/// Rectangle value type.
pub mod shapes;
/// Ticket-counter change simulation.
pub mod tickets;

// Re-exports for convenience
pub use error::{RecordError, RecordResult};
pub use grouping::{CityEntry, group, sort_cities};
pub use json::{from_json, to_json};
pub use record::{
    Frozen, Record, compare_records, is_empty_record, make_immutable, make_word, merge_records,
    remove_properties, shallow_copy,
};
pub use shapes::Rectangle;
pub use tickets::{Bill, CashBox, sell_tickets};
