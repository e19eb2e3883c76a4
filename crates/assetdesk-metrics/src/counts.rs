//! Counts and rates over the asset and ticket collections.
//!
//! Grouped counts return a `BTreeMap` keyed by the enum, so iteration
//! follows declaration order. Only values that occur get a key; callers
//! treat a missing key as zero.

use std::collections::BTreeMap;

use assetdesk_core::{
    Asset, AssetStatus, AssetType, Ticket, TicketCategory, TicketPriority, TicketStatus,
};

fn tally<T, K: Ord>(items: &[T], key: impl Fn(&T) -> K) -> BTreeMap<K, usize> {
    let mut counts = BTreeMap::new();
    for item in items {
        *counts.entry(key(item)).or_insert(0) += 1;
    }
    counts
}

// ---------------------------------------------------------------------------
// Assets
// ---------------------------------------------------------------------------

#[must_use]
pub fn count_by_type(assets: &[Asset]) -> BTreeMap<AssetType, usize> {
    tally(assets, |asset| asset.asset_type)
}

#[must_use]
pub fn count_by_status(assets: &[Asset]) -> BTreeMap<AssetStatus, usize> {
    tally(assets, |asset| asset.status)
}

// ---------------------------------------------------------------------------
// Tickets
// ---------------------------------------------------------------------------

#[must_use]
pub fn count_by_priority(tickets: &[Ticket]) -> BTreeMap<TicketPriority, usize> {
    tally(tickets, |ticket| ticket.priority)
}

#[must_use]
pub fn count_by_ticket_status(tickets: &[Ticket]) -> BTreeMap<TicketStatus, usize> {
    tally(tickets, |ticket| ticket.status)
}

#[must_use]
pub fn count_by_category(tickets: &[Ticket]) -> BTreeMap<TicketCategory, usize> {
    tally(tickets, |ticket| ticket.category)
}

/// Tickets in the `open` state. `in-progress` is not counted.
#[must_use]
pub fn open_ticket_count(tickets: &[Ticket]) -> usize {
    tickets.iter().filter(|ticket| ticket.is_open()).count()
}

/// Tickets with `critical` priority, whatever their state.
#[must_use]
pub fn critical_ticket_count(tickets: &[Ticket]) -> usize {
    tickets.iter().filter(|ticket| ticket.is_critical()).count()
}

/// Tickets in the `resolved` state. `closed` is not counted.
#[must_use]
pub fn resolved_ticket_count(tickets: &[Ticket]) -> usize {
    tickets.iter().filter(|ticket| ticket.is_resolved()).count()
}

/// Share of tickets that are resolved, in `[0.0, 1.0]`.
///
/// Returns exactly `0.0` for an empty collection.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn resolution_rate(tickets: &[Ticket]) -> f64 {
    if tickets.is_empty() {
        return 0.0;
    }
    resolved_ticket_count(tickets) as f64 / tickets.len() as f64
}
