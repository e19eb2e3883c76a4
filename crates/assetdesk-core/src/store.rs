//! The session's single owner of asset and ticket records.
//!
//! A [`Store`] holds two insertion-ordered collections and is the only way
//! to change them. It is a plain owned value: build one per session, pass
//! it by reference, drop it when the session ends.
//!
//! # Snapshots
//!
//! Collections live behind `Arc`s. [`Store::snapshot`] hands out the current
//! `Arc`s; the next mutation copies a collection only if a snapshot still
//! shares it. A snapshot therefore never changes after it is taken.
//!
//! # Atomicity
//!
//! Every operation validates and looks up before it touches a collection,
//! so a failed operation leaves both collections exactly as they were.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use tracing::{debug, instrument, warn};

use crate::clock::{Clock, SystemClock};
use crate::config::{IdConfig, SessionConfig};
use crate::error::ErrorCode;
use crate::fixture;
use crate::ids::IdGenerator;
use crate::model::{Asset, AssetDraft, Ticket, TicketDraft, ValidationError};

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// Which collection an id was looked up in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Asset,
    Ticket,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Asset => "asset",
            Self::Ticket => "ticket",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{kind} not found: {id}")]
    NotFound { kind: RecordKind, id: String },

    #[error("invalid seed: duplicate {kind} id {id}")]
    DuplicateId { kind: RecordKind, id: String },

    #[error("invalid seed: ticket {id} has updatedAt before createdAt")]
    TimestampOrder { id: String },
}

impl StoreError {
    fn not_found(kind: RecordKind, id: &str) -> Self {
        Self::NotFound {
            kind,
            id: id.to_string(),
        }
    }

    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::Validation(err) => err.code(),
            Self::NotFound {
                kind: RecordKind::Asset,
                ..
            } => ErrorCode::AssetNotFound,
            Self::NotFound {
                kind: RecordKind::Ticket,
                ..
            } => ErrorCode::TicketNotFound,
            Self::DuplicateId { .. } => ErrorCode::DuplicateId,
            Self::TimestampOrder { .. } => ErrorCode::TimestampOrder,
        }
    }

    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

// ---------------------------------------------------------------------------
// Snapshot
// ---------------------------------------------------------------------------

/// Both collections at one point in time. Cheap to clone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    assets: Arc<Vec<Asset>>,
    tickets: Arc<Vec<Ticket>>,
}

impl Snapshot {
    #[must_use]
    pub fn new(assets: Vec<Asset>, tickets: Vec<Ticket>) -> Self {
        Self {
            assets: Arc::new(assets),
            tickets: Arc::new(tickets),
        }
    }

    #[must_use]
    pub fn assets(&self) -> &[Asset] {
        &self.assets
    }

    #[must_use]
    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }
}

// ---------------------------------------------------------------------------
// Store
// ---------------------------------------------------------------------------

pub struct Store<C = SystemClock> {
    assets: Arc<Vec<Asset>>,
    tickets: Arc<Vec<Ticket>>,
    asset_ids: IdGenerator,
    ticket_ids: IdGenerator,
    clock: C,
}

impl Store<SystemClock> {
    /// Empty store on the wall clock with default id settings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }

    /// Store on the wall clock honoring `config`.
    #[must_use]
    pub fn from_config(config: &SessionConfig) -> Self {
        Self::configured(config, SystemClock)
    }
}

impl Default for Store<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> Store<C> {
    #[must_use]
    pub fn with_clock(clock: C) -> Self {
        Self::assemble(Snapshot::default(), &IdConfig::default(), clock)
    }

    /// Store honoring `config`, seeded from the demo fixture when asked.
    /// The fixture goes in without the seed checks of [`Store::from_snapshot`].
    #[must_use]
    pub fn configured(config: &SessionConfig, clock: C) -> Self {
        let snapshot = if config.session.seed_demo_data {
            fixture::demo_snapshot()
        } else {
            Snapshot::default()
        };
        Self::assemble(snapshot, &config.ids, clock)
    }

    /// Continue a session from existing records. Fresh ids never collide
    /// with ids already present.
    ///
    /// # Errors
    ///
    /// [`StoreError::DuplicateId`] if two records of one collection share an
    /// id; [`StoreError::TimestampOrder`] if a ticket's `updatedAt` is
    /// earlier than its `createdAt`.
    pub fn from_snapshot(
        snapshot: Snapshot,
        ids: &IdConfig,
        clock: C,
    ) -> Result<Self, StoreError> {
        check_seed(&snapshot)?;
        Ok(Self::assemble(snapshot, ids, clock))
    }

    fn assemble(snapshot: Snapshot, ids: &IdConfig, clock: C) -> Self {
        let mut asset_ids = IdGenerator::new(ids.scheme, ids.asset_prefix.clone());
        let mut ticket_ids = IdGenerator::new(ids.scheme, ids.ticket_prefix.clone());
        for asset in snapshot.assets.iter() {
            asset_ids.observe(&asset.id);
        }
        for ticket in snapshot.tickets.iter() {
            ticket_ids.observe(&ticket.id);
        }

        debug!(
            assets = snapshot.assets.len(),
            tickets = snapshot.tickets.len(),
            "store opened"
        );

        Self {
            assets: snapshot.assets,
            tickets: snapshot.tickets,
            asset_ids,
            ticket_ids,
            clock,
        }
    }

    #[must_use]
    pub const fn clock(&self) -> &C {
        &self.clock
    }

    /// The current collections. Later mutations do not affect the result.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            assets: Arc::clone(&self.assets),
            tickets: Arc::clone(&self.tickets),
        }
    }

    // -----------------------------------------------------------------------
    // Reads
    // -----------------------------------------------------------------------

    #[must_use]
    pub fn assets(&self) -> &[Asset] {
        &self.assets
    }

    #[must_use]
    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    #[must_use]
    pub fn asset(&self, id: &str) -> Option<&Asset> {
        self.assets.iter().find(|asset| asset.id == id)
    }

    #[must_use]
    pub fn ticket(&self, id: &str) -> Option<&Ticket> {
        self.tickets.iter().find(|ticket| ticket.id == id)
    }

    /// The asset a ticket points at, if it still exists.
    #[must_use]
    pub fn related_asset(&self, ticket: &Ticket) -> Option<&Asset> {
        ticket
            .related_asset_id
            .as_deref()
            .and_then(|id| self.asset(id))
    }

    /// Tickets whose `relatedAssetId` is `asset_id`, in collection order.
    pub fn tickets_for_asset<'a>(&'a self, asset_id: &'a str) -> impl Iterator<Item = &'a Ticket> {
        self.tickets
            .iter()
            .filter(move |ticket| ticket.related_asset_id.as_deref() == Some(asset_id))
    }

    /// Tickets whose `relatedAssetId` names an asset that is gone.
    #[must_use]
    pub fn dangling_references(&self) -> Vec<&Ticket> {
        self.tickets
            .iter()
            .filter(|ticket| {
                ticket
                    .related_asset_id
                    .as_deref()
                    .is_some_and(|id| self.asset(id).is_none())
            })
            .collect()
    }

    // -----------------------------------------------------------------------
    // Assets
    // -----------------------------------------------------------------------

    /// Validate `draft`, assign an id and defaults, and append the asset.
    ///
    /// `purchaseDate` defaults to the clock's current date and `status` to
    /// `available`.
    ///
    /// # Errors
    ///
    /// [`StoreError::Validation`] if `name` or `type` is missing or any
    /// supplied field is invalid.
    #[instrument(skip_all)]
    pub fn create_asset(&mut self, draft: &AssetDraft) -> Result<Asset, StoreError> {
        let new = draft.validate_new()?;

        let assets = &self.assets;
        let id = self
            .asset_ids
            .next_unused(|candidate| assets.iter().any(|asset| asset.id == candidate));

        let asset = Asset {
            id,
            name: new.name,
            asset_type: new.asset_type,
            serial_number: new.serial_number,
            purchase_date: new.purchase_date.unwrap_or_else(|| self.clock.today()),
            assigned_to: new.assigned_to,
            status: new.status.unwrap_or_default(),
        };

        Arc::make_mut(&mut self.assets).push(asset.clone());
        debug!(id = %asset.id, "asset created");
        Ok(asset)
    }

    /// Merge the supplied fields of `draft` over the asset `id`.
    ///
    /// # Errors
    ///
    /// [`StoreError::NotFound`] if no asset has `id`;
    /// [`StoreError::Validation`] if a supplied field is invalid.
    #[instrument(skip(self, draft))]
    pub fn update_asset(&mut self, id: &str, draft: &AssetDraft) -> Result<Asset, StoreError> {
        let Some(index) = self.asset_index(id) else {
            warn!("update of unknown asset");
            return Err(StoreError::not_found(RecordKind::Asset, id));
        };
        let changes = draft.validate_changes()?;

        if changes.is_empty() {
            debug!("asset update carries no changes");
        }
        let mut updated = self.assets[index].clone();
        changes.apply_to(&mut updated);

        Arc::make_mut(&mut self.assets)[index] = updated.clone();
        debug!("asset updated");
        Ok(updated)
    }

    /// Remove the asset `id`. Absent ids are a no-op.
    ///
    /// Tickets that reference the asset keep their `relatedAssetId`.
    #[instrument(skip(self))]
    pub fn delete_asset(&mut self, id: &str) -> Option<Asset> {
        let index = self.asset_index(id)?;
        let removed = Arc::make_mut(&mut self.assets).remove(index);
        debug!("asset deleted");
        Some(removed)
    }

    /// Like [`Store::delete_asset`], but an absent id is an error.
    ///
    /// # Errors
    ///
    /// [`StoreError::NotFound`] if no asset has `id`.
    pub fn delete_asset_checked(&mut self, id: &str) -> Result<Asset, StoreError> {
        self.delete_asset(id).ok_or_else(|| {
            warn!(id, "delete of unknown asset");
            StoreError::not_found(RecordKind::Asset, id)
        })
    }

    // -----------------------------------------------------------------------
    // Tickets
    // -----------------------------------------------------------------------

    /// Validate `draft`, assign an id and timestamps, and append the ticket.
    ///
    /// `createdAt` and `updatedAt` are both set to the clock's current
    /// instant; `status` defaults to `open`.
    ///
    /// # Errors
    ///
    /// [`StoreError::Validation`] if `title`, `description`, `priority`, or
    /// `category` is missing or any supplied field is invalid.
    #[instrument(skip_all)]
    pub fn create_ticket(&mut self, draft: &TicketDraft) -> Result<Ticket, StoreError> {
        let new = draft.validate_new()?;

        let tickets = &self.tickets;
        let id = self
            .ticket_ids
            .next_unused(|candidate| tickets.iter().any(|ticket| ticket.id == candidate));
        let now = self.clock.now();

        let ticket = Ticket {
            id,
            title: new.title,
            description: new.description,
            priority: new.priority,
            status: new.status.unwrap_or_default(),
            created_at: now,
            updated_at: now,
            assigned_to: new.assigned_to,
            related_asset_id: new.related_asset_id,
            category: new.category,
        };

        Arc::make_mut(&mut self.tickets).push(ticket.clone());
        debug!(id = %ticket.id, "ticket created");
        Ok(ticket)
    }

    /// Merge the supplied fields of `draft` over the ticket `id` and restamp
    /// `updatedAt`, even when no field changed.
    ///
    /// The new stamp is never earlier than the previous one.
    ///
    /// # Errors
    ///
    /// [`StoreError::NotFound`] if no ticket has `id`;
    /// [`StoreError::Validation`] if a supplied field is invalid.
    #[instrument(skip(self, draft))]
    pub fn update_ticket(&mut self, id: &str, draft: &TicketDraft) -> Result<Ticket, StoreError> {
        let Some(index) = self.ticket_index(id) else {
            warn!("update of unknown ticket");
            return Err(StoreError::not_found(RecordKind::Ticket, id));
        };
        let changes = draft.validate_changes()?;

        if changes.is_empty() {
            debug!("ticket update carries no changes, restamping only");
        }
        let mut updated = self.tickets[index].clone();
        changes.apply_to(&mut updated);
        updated.updated_at = self.clock.now().max(updated.updated_at);

        Arc::make_mut(&mut self.tickets)[index] = updated.clone();
        debug!(updated_at = %updated.updated_at, "ticket updated");
        Ok(updated)
    }

    /// Remove the ticket `id`. Absent ids are a no-op.
    #[instrument(skip(self))]
    pub fn delete_ticket(&mut self, id: &str) -> Option<Ticket> {
        let index = self.ticket_index(id)?;
        let removed = Arc::make_mut(&mut self.tickets).remove(index);
        debug!("ticket deleted");
        Some(removed)
    }

    /// Like [`Store::delete_ticket`], but an absent id is an error.
    ///
    /// # Errors
    ///
    /// [`StoreError::NotFound`] if no ticket has `id`.
    pub fn delete_ticket_checked(&mut self, id: &str) -> Result<Ticket, StoreError> {
        self.delete_ticket(id).ok_or_else(|| {
            warn!(id, "delete of unknown ticket");
            StoreError::not_found(RecordKind::Ticket, id)
        })
    }

    fn asset_index(&self, id: &str) -> Option<usize> {
        self.assets.iter().position(|asset| asset.id == id)
    }

    fn ticket_index(&self, id: &str) -> Option<usize> {
        self.tickets.iter().position(|ticket| ticket.id == id)
    }
}

/// Reject records a store could not have produced itself.
fn check_seed(snapshot: &Snapshot) -> Result<(), StoreError> {
    let mut seen = HashSet::new();
    for asset in snapshot.assets.iter() {
        if !seen.insert(asset.id.as_str()) {
            return Err(StoreError::DuplicateId {
                kind: RecordKind::Asset,
                id: asset.id.clone(),
            });
        }
    }

    seen.clear();
    for ticket in snapshot.tickets.iter() {
        if !seen.insert(ticket.id.as_str()) {
            return Err(StoreError::DuplicateId {
                kind: RecordKind::Ticket,
                id: ticket.id.clone(),
            });
        }
        if ticket.updated_at < ticket.created_at {
            return Err(StoreError::TimestampOrder {
                id: ticket.id.clone(),
            });
        }
    }
    Ok(())
}

impl<C> fmt::Debug for Store<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("assets", &self.assets.len())
            .field("tickets", &self.tickets.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::ids::IdScheme;
    use crate::model::{AssetStatus, AssetType, TicketPriority, TicketStatus};
    use chrono::{Duration, NaiveDate, TimeZone, Utc};

    fn clock() -> ManualClock {
        ManualClock::new(
            Utc.with_ymd_and_hms(2024, 3, 15, 10, 0, 0)
                .single()
                .expect("valid instant"),
        )
    }

    fn store() -> Store<ManualClock> {
        Store::with_clock(clock())
    }

    fn router() -> AssetDraft {
        AssetDraft::new().name("Edge router").asset_type("network")
    }

    fn outage() -> TicketDraft {
        TicketDraft::new()
            .title("Network outage in Building B")
            .description("Complete network failure")
            .priority("critical")
            .category("network")
    }

    // === Assets ===

    #[test]
    fn create_asset_applies_defaults() {
        let mut store = store();
        let asset = store.create_asset(&router()).expect("valid draft");

        assert_eq!(asset.id, "A-1");
        assert_eq!(asset.status, AssetStatus::Available);
        assert_eq!(
            asset.purchase_date,
            NaiveDate::from_ymd_opt(2024, 3, 15).expect("valid")
        );
        assert_eq!(store.assets(), &[asset]);
    }

    #[test]
    fn create_asset_rejects_invalid_draft_without_mutation() {
        let mut store = store();
        let err = store
            .create_asset(&AssetDraft::new().name("Thing").asset_type("gadget"))
            .expect_err("bad type");
        assert_eq!(err.code(), ErrorCode::InvalidEnumValue);
        assert!(store.assets().is_empty());
    }

    #[test]
    fn update_asset_merges_fields_and_keeps_id() {
        let mut store = store();
        let created = store
            .create_asset(&router().serial_number("RT-1"))
            .expect("create");

        let updated = store
            .update_asset(
                &created.id,
                &AssetDraft::new().status("in-use").assigned_to("Ops"),
            )
            .expect("update");

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "Edge router");
        assert_eq!(updated.serial_number.as_deref(), Some("RT-1"));
        assert_eq!(updated.status, AssetStatus::InUse);
        assert_eq!(updated.assigned_to.as_deref(), Some("Ops"));
        assert_eq!(store.asset(&created.id), Some(&updated));
    }

    #[test]
    fn update_unknown_asset_is_not_found() {
        let mut store = store();
        store.create_asset(&router()).expect("create");
        let before = store.snapshot();

        let err = store
            .update_asset("A-404", &AssetDraft::new().name("x"))
            .expect_err("unknown id");
        assert_eq!(
            err,
            StoreError::NotFound {
                kind: RecordKind::Asset,
                id: "A-404".to_string(),
            }
        );
        assert_eq!(err.code(), ErrorCode::AssetNotFound);
        assert_eq!(store.snapshot(), before);
    }

    #[test]
    fn invalid_update_leaves_asset_untouched() {
        let mut store = store();
        let created = store.create_asset(&router()).expect("create");
        let err = store
            .update_asset(&created.id, &AssetDraft::new().status("stolen"))
            .expect_err("bad status");
        assert!(!err.is_not_found());
        assert_eq!(store.asset(&created.id), Some(&created));
    }

    #[test]
    fn delete_asset_is_idempotent() {
        let mut store = store();
        let created = store.create_asset(&router()).expect("create");

        assert_eq!(store.delete_asset(&created.id), Some(created.clone()));
        assert_eq!(store.delete_asset(&created.id), None);
        assert!(store.assets().is_empty());

        let err = store
            .delete_asset_checked(&created.id)
            .expect_err("already gone");
        assert!(err.is_not_found());
    }

    #[test]
    fn delete_preserves_insertion_order() {
        let mut store = store();
        let a = store.create_asset(&router().name("a")).expect("a");
        let b = store.create_asset(&router().name("b")).expect("b");
        let c = store.create_asset(&router().name("c")).expect("c");

        store.delete_asset(&b.id);
        let names: Vec<_> = store.assets().iter().map(|x| x.name.as_str()).collect();
        assert_eq!(names, ["a", "c"]);
        assert_eq!(store.assets()[0].id, a.id);
        assert_eq!(store.assets()[1].id, c.id);
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let mut store = store();
        let first = store.create_asset(&router()).expect("create");
        store.delete_asset(&first.id);
        let second = store.create_asset(&router()).expect("create");
        assert_ne!(first.id, second.id);
    }

    // === Tickets ===

    #[test]
    fn create_ticket_stamps_and_defaults() {
        let mut store = store();
        let ticket = store.create_ticket(&outage()).expect("create");

        assert_eq!(ticket.id, "T-1");
        assert_eq!(ticket.status, TicketStatus::Open);
        assert_eq!(ticket.priority, TicketPriority::Critical);
        assert_eq!(ticket.created_at, ticket.updated_at);
        assert_eq!(ticket.created_at, store.clock().now());
    }

    #[test]
    fn update_ticket_restamps_updated_at_only() {
        let mut store = store();
        let created = store.create_ticket(&outage()).expect("create");
        store.clock().advance(Duration::minutes(30));

        let updated = store
            .update_ticket(&created.id, &TicketDraft::new().status("resolved"))
            .expect("update");

        assert_eq!(updated.status, TicketStatus::Resolved);
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(updated.updated_at, created.updated_at + Duration::minutes(30));
    }

    #[test]
    fn empty_ticket_update_still_restamps() {
        let mut store = store();
        let created = store.create_ticket(&outage()).expect("create");
        store.clock().advance(Duration::seconds(5));

        let updated = store
            .update_ticket(&created.id, &TicketDraft::new())
            .expect("update");
        assert_eq!(updated.title, created.title);
        assert!(updated.updated_at > created.updated_at);
    }

    #[test]
    fn updated_at_never_goes_backwards() {
        let mut store = store();
        let created = store.create_ticket(&outage()).expect("create");
        store.clock().advance(Duration::hours(-2));

        let updated = store
            .update_ticket(&created.id, &TicketDraft::new().priority("high"))
            .expect("update");
        assert_eq!(updated.updated_at, created.updated_at);
        assert!(updated.updated_at >= updated.created_at);
    }

    #[test]
    fn update_unknown_ticket_is_not_found() {
        let mut store = store();
        let err = store
            .update_ticket("T-9", &TicketDraft::new().status("closed"))
            .expect_err("unknown");
        assert_eq!(err.code(), ErrorCode::TicketNotFound);
        assert_eq!(err.to_string(), "ticket not found: T-9");
    }

    #[test]
    fn delete_ticket_checked_reports_unknown_ids() {
        let mut store = store();
        let ticket = store.create_ticket(&outage()).expect("create");
        assert_eq!(
            store.delete_ticket_checked(&ticket.id).expect("present"),
            ticket
        );
        assert!(store.delete_ticket(&ticket.id).is_none());
        assert!(store.delete_ticket_checked(&ticket.id).is_err());
    }

    // === References ===

    #[test]
    fn related_asset_lookup_tolerates_dangling_ids() {
        let mut store = store();
        let asset = store.create_asset(&router()).expect("asset");
        let linked = store
            .create_ticket(&outage().related_asset_id(asset.id.clone()))
            .expect("ticket");
        let unlinked = store
            .create_ticket(&outage().title("Printer jam"))
            .expect("ticket");

        assert_eq!(store.related_asset(&linked), Some(&asset));
        assert_eq!(store.related_asset(&unlinked), None);
        assert_eq!(store.tickets_for_asset(&asset.id).count(), 1);
        assert!(store.dangling_references().is_empty());

        store.delete_asset(&asset.id);
        let kept = store.ticket(&linked.id).expect("ticket retained");
        assert_eq!(kept, &linked);
        assert_eq!(store.related_asset(kept), None);
        assert_eq!(store.dangling_references(), vec![kept]);
    }

    // === Snapshots and seeding ===

    #[test]
    fn snapshots_are_immutable() {
        let mut store = store();
        store.create_asset(&router()).expect("create");
        let before = store.snapshot();

        store.create_asset(&router().name("Core switch")).expect("create");
        store.delete_asset("A-1");

        assert_eq!(before.assets().len(), 1);
        assert_eq!(before.assets()[0].id, "A-1");
        assert_eq!(store.assets().len(), 1);
        assert_eq!(store.assets()[0].id, "A-2");
    }

    #[test]
    fn seeded_store_skips_existing_ids() {
        let config = SessionConfig {
            session: crate::config::SessionOptions {
                seed_demo_data: true,
            },
            ..SessionConfig::default()
        };
        let mut store = Store::configured(&config, clock());
        let seeded = store.assets().len();

        let asset = store.create_asset(&router()).expect("create");
        assert!(
            store.assets()[..seeded].iter().all(|a| a.id != asset.id),
            "fresh id {} collides with fixture",
            asset.id
        );
        let ticket = store.create_ticket(&outage()).expect("create");
        assert_eq!(
            store.tickets().iter().filter(|t| t.id == ticket.id).count(),
            1
        );
    }

    #[test]
    fn uuid_scheme_mints_prefixed_ids() {
        let ids = IdConfig {
            scheme: IdScheme::Uuid,
            asset_prefix: "asset-".to_string(),
            ticket_prefix: "ticket-".to_string(),
        };
        let mut store =
            Store::from_snapshot(Snapshot::default(), &ids, clock()).expect("empty seed");
        let asset = store
            .create_asset(&AssetDraft::new().name("Laptop").asset_type(AssetType::Hardware))
            .expect("create");
        assert!(asset.id.starts_with("asset-"));
    }

    #[test]
    fn demo_fixture_is_a_valid_seed() {
        let store = Store::from_snapshot(fixture::demo_snapshot(), &IdConfig::default(), clock())
            .expect("fixture seeds cleanly");
        assert_eq!(store.tickets().len(), 4);
        assert_eq!(store.assets().len(), 4);
    }

    #[test]
    fn seed_with_duplicate_asset_ids_is_rejected() {
        let mut assets = fixture::demo_assets();
        assets[1].id = assets[0].id.clone();
        let seed = Snapshot::new(assets, fixture::demo_tickets());

        let err = Store::from_snapshot(seed, &IdConfig::default(), clock())
            .expect_err("duplicate id");
        assert_eq!(
            err,
            StoreError::DuplicateId {
                kind: RecordKind::Asset,
                id: "A-1".to_string(),
            }
        );
        assert_eq!(err.code(), ErrorCode::DuplicateId);
    }

    #[test]
    fn seed_with_duplicate_ticket_ids_is_rejected() {
        let mut tickets = fixture::demo_tickets();
        tickets[3].id = "T-2".to_string();
        let seed = Snapshot::new(fixture::demo_assets(), tickets);

        let err = Store::from_snapshot(seed, &IdConfig::default(), clock())
            .expect_err("duplicate id");
        assert_eq!(err.to_string(), "invalid seed: duplicate ticket id T-2");
    }

    #[test]
    fn seed_with_backwards_timestamps_is_rejected() {
        let mut tickets = fixture::demo_tickets();
        tickets[0].updated_at = tickets[0].created_at - Duration::minutes(1);
        let seed = Snapshot::new(fixture::demo_assets(), tickets);

        let err = Store::from_snapshot(seed, &IdConfig::default(), clock())
            .expect_err("updatedAt before createdAt");
        assert_eq!(
            err,
            StoreError::TimestampOrder {
                id: "T-1".to_string(),
            }
        );
        assert_eq!(err.code(), ErrorCode::TimestampOrder);
    }

    #[test]
    fn seed_with_largest_sequential_id_still_creates() {
        let mut assets = fixture::demo_assets();
        assets[0].id = format!("A-{}", u64::MAX);
        let seed = Snapshot::new(assets, Vec::new());
        let mut store =
            Store::from_snapshot(seed, &IdConfig::default(), clock()).expect("valid seed");

        let asset = store.create_asset(&router()).expect("create");
        assert!(asset.id.starts_with("A-"));
        assert_eq!(
            store.assets().iter().filter(|a| a.id == asset.id).count(),
            1
        );
    }

    #[test]
    fn from_config_honors_seed_option() {
        let empty = Store::from_config(&SessionConfig::default());
        assert!(empty.assets().is_empty());
        assert!(empty.tickets().is_empty());

        let config = SessionConfig {
            session: crate::config::SessionOptions {
                seed_demo_data: true,
            },
            ..SessionConfig::default()
        };
        let seeded = Store::from_config(&config);
        assert_eq!(seeded.assets().len(), 4);
        assert_eq!(seeded.tickets().len(), 4);
    }

    #[test]
    fn identical_drafts_create_distinct_records() {
        let mut store = store();
        let a = store.create_ticket(&outage()).expect("first");
        let b = store.create_ticket(&outage()).expect("second");
        assert_ne!(a.id, b.id);
        assert_eq!(store.tickets().len(), 2);
    }
}
