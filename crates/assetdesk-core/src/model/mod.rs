//! Record shapes and their closed enumerations.
//!
//! Every enumerated field is a Rust enum: free text never reaches a record.
//! Raw form input enters through [`draft`], which validates it into typed
//! values before the store sees it.

pub mod asset;
pub mod draft;
pub mod ticket;

pub use asset::{Asset, AssetStatus, AssetType};
pub use draft::{
    AssetChanges, AssetDraft, NewAsset, NewTicket, TicketChanges, TicketDraft, ValidationError,
};
pub use ticket::{Ticket, TicketCategory, TicketPriority, TicketStatus};

/// Label shown for records with no assignee.
pub const UNASSIGNED: &str = "Unassigned";

/// Error returned when parsing an enum value from text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {expected}: '{got}'")]
pub struct ParseEnumError {
    pub expected: &'static str,
    pub got: String,
}

fn normalize(input: &str) -> String {
    input.trim().to_ascii_lowercase()
}
