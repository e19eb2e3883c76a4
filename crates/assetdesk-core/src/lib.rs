#![forbid(unsafe_code)]
//! assetdesk-core library.
//!
//! Entity model, draft validation, and the in-memory [`store::Store`] that
//! owns the asset and ticket collections for one session.
//!
//! # Conventions
//!
//! - **Errors**: `thiserror` enums for store and validation failures;
//!   `anyhow::Result` for configuration loading.
//! - **Logging**: Use `tracing` macros (`info!`, `warn!`, `error!`, `debug!`, `trace!`).
//!   The library never installs a subscriber.

pub mod clock;
pub mod config;
pub mod error;
pub mod fixture;
pub mod ids;
pub mod model;
pub mod store;

pub use clock::{Clock, ManualClock, SystemClock};
pub use error::ErrorCode;
pub use model::{
    Asset, AssetDraft, AssetStatus, AssetType, Ticket, TicketCategory, TicketDraft,
    TicketPriority, TicketStatus, ValidationError,
};
pub use store::{RecordKind, Snapshot, Store, StoreError};
