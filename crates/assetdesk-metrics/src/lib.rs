#![forbid(unsafe_code)]
//! assetdesk-metrics library.
//!
//! Pure aggregates over a store snapshot, recomputed on every dashboard
//! render. Nothing here mutates records or keeps state between calls.
//!
//! # Conventions
//!
//! - **Errors**: none; every function is total over its input.
//! - **Logging**: Use `tracing` macros (`info!`, `warn!`, `error!`, `debug!`, `trace!`).

pub mod counts;
pub mod dashboard;
pub mod recent;

pub use counts::{
    count_by_category, count_by_priority, count_by_status, count_by_ticket_status, count_by_type,
    critical_ticket_count, open_ticket_count, resolution_rate, resolved_ticket_count,
};
pub use dashboard::{ActivityEntry, ChartPoint, DashboardSummary};
pub use recent::{RecentActivity, recent_activity};
