//! The dashboard payload: everything the summary cards, the status pie, the
//! priority bars, and the activity feed need, computed in one pass over a
//! snapshot.

use std::collections::BTreeMap;

use assetdesk_core::config::DashboardConfig;
use assetdesk_core::{Asset, AssetType, Snapshot, Ticket, TicketPriority, TicketStatus};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{instrument, trace};

use crate::counts;
use crate::recent::recent_activity;

/// One labelled value of a chart series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartPoint {
    /// Wire value of the enum member (`"in-use"`).
    pub key: &'static str,
    /// Display text (`"In Use"`).
    pub label: &'static str,
    pub value: usize,
}

/// A line of the recent-activity feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityEntry {
    pub id: String,
    pub title: String,
    pub status: TicketStatus,
    pub priority: TicketPriority,
    pub updated_at: DateTime<Utc>,
}

impl From<&Ticket> for ActivityEntry {
    fn from(ticket: &Ticket) -> Self {
        Self {
            id: ticket.id.clone(),
            title: ticket.title.clone(),
            status: ticket.status,
            priority: ticket.priority,
            updated_at: ticket.updated_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_assets: usize,
    /// Every asset type, zero-filled.
    pub assets_by_type: BTreeMap<AssetType, usize>,
    /// Only statuses that occur, in declaration order.
    pub asset_status_distribution: Vec<ChartPoint>,
    pub total_tickets: usize,
    pub open_tickets: usize,
    pub critical_tickets: usize,
    pub resolved_tickets: usize,
    pub resolution_rate: f64,
    /// `resolution_rate` as a percentage with one decimal (`"25.0%"`).
    pub resolution_rate_display: String,
    /// Only priorities that occur, lowest first.
    pub tickets_by_priority: Vec<ChartPoint>,
    pub recent_activity: Vec<ActivityEntry>,
}

impl DashboardSummary {
    #[must_use]
    #[instrument(skip_all, fields(assets = assets.len(), tickets = tickets.len()))]
    pub fn compute(assets: &[Asset], tickets: &[Ticket], config: &DashboardConfig) -> Self {
        let mut assets_by_type: BTreeMap<AssetType, usize> =
            AssetType::ALL.into_iter().map(|kind| (kind, 0)).collect();
        assets_by_type.extend(counts::count_by_type(assets));

        let asset_status_distribution = counts::count_by_status(assets)
            .into_iter()
            .map(|(status, value)| ChartPoint {
                key: status.as_str(),
                label: status.label(),
                value,
            })
            .collect();

        let tickets_by_priority = counts::count_by_priority(tickets)
            .into_iter()
            .map(|(priority, value)| ChartPoint {
                key: priority.as_str(),
                label: priority.label(),
                value,
            })
            .collect();

        let recent_activity = recent_activity(tickets, config.recent_activity_limit)
            .iter()
            .map(ActivityEntry::from)
            .collect::<Vec<_>>();

        let resolution_rate = counts::resolution_rate(tickets);
        trace!(resolution_rate, feed = recent_activity.len(), "dashboard computed");

        Self {
            total_assets: assets.len(),
            assets_by_type,
            asset_status_distribution,
            total_tickets: tickets.len(),
            open_tickets: counts::open_ticket_count(tickets),
            critical_tickets: counts::critical_ticket_count(tickets),
            resolved_tickets: counts::resolved_ticket_count(tickets),
            resolution_rate,
            resolution_rate_display: format_percent(resolution_rate),
            tickets_by_priority,
            recent_activity,
        }
    }

    #[must_use]
    pub fn from_snapshot(snapshot: &Snapshot, config: &DashboardConfig) -> Self {
        Self::compute(snapshot.assets(), snapshot.tickets(), config)
    }

    /// Count for one asset type; zero when none are held.
    #[must_use]
    pub fn assets_of_type(&self, kind: AssetType) -> usize {
        self.assets_by_type.get(&kind).copied().unwrap_or(0)
    }
}

fn format_percent(rate: f64) -> String {
    format!("{:.1}%", rate * 100.0)
}
