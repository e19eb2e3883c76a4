//! Demo records for a first-run session.
//!
//! Four assets and four tickets covering every asset type, every ticket
//! priority, and one ticket linked to an asset. Ids use the default
//! prefixes so a store seeded from here keeps minting past them.

use chrono::{DateTime, NaiveDate, Utc};

use crate::model::{
    Asset, AssetStatus, AssetType, Ticket, TicketCategory, TicketPriority, TicketStatus,
};
use crate::store::Snapshot;

#[must_use]
pub fn demo_snapshot() -> Snapshot {
    Snapshot::new(demo_assets(), demo_tickets())
}

#[must_use]
pub fn demo_assets() -> Vec<Asset> {
    vec![
        Asset {
            id: "A-1".to_string(),
            name: "MacBook Pro 16\"".to_string(),
            asset_type: AssetType::Hardware,
            serial_number: Some("MBP2023001".to_string()),
            purchase_date: date(2023, 1, 15),
            assigned_to: Some("John Doe".to_string()),
            status: AssetStatus::InUse,
        },
        Asset {
            id: "A-2".to_string(),
            name: "Windows Server License".to_string(),
            asset_type: AssetType::Software,
            serial_number: None,
            purchase_date: date(2023, 3, 20),
            assigned_to: None,
            status: AssetStatus::Available,
        },
        Asset {
            id: "A-3".to_string(),
            name: "Cisco Switch".to_string(),
            asset_type: AssetType::Network,
            serial_number: Some("CSC2024001".to_string()),
            purchase_date: date(2024, 1, 10),
            assigned_to: None,
            status: AssetStatus::InUse,
        },
        Asset {
            id: "A-4".to_string(),
            name: "Office 365 License".to_string(),
            asset_type: AssetType::Software,
            serial_number: None,
            purchase_date: date(2023, 12, 1),
            assigned_to: Some("Marketing Team".to_string()),
            status: AssetStatus::InUse,
        },
    ]
}

#[must_use]
pub fn demo_tickets() -> Vec<Ticket> {
    vec![
        Ticket {
            id: "T-1".to_string(),
            title: "Cannot access email".to_string(),
            description: "Unable to login to Outlook".to_string(),
            priority: TicketPriority::High,
            status: TicketStatus::Open,
            created_at: instant(2024, 3, 15, 10, 0),
            updated_at: instant(2024, 3, 15, 10, 0),
            assigned_to: None,
            related_asset_id: None,
            category: TicketCategory::Software,
        },
        Ticket {
            id: "T-2".to_string(),
            title: "Laptop screen flickering".to_string(),
            description: "Screen flickers when on battery power".to_string(),
            priority: TicketPriority::Medium,
            status: TicketStatus::InProgress,
            created_at: instant(2024, 3, 14, 15, 30),
            updated_at: instant(2024, 3, 15, 9, 0),
            assigned_to: Some("Tech Support".to_string()),
            related_asset_id: Some("A-1".to_string()),
            category: TicketCategory::Hardware,
        },
        Ticket {
            id: "T-3".to_string(),
            title: "Network outage in Building B".to_string(),
            description: "Complete network failure in Building B affecting all departments"
                .to_string(),
            priority: TicketPriority::Critical,
            status: TicketStatus::Open,
            created_at: instant(2024, 3, 15, 11, 0),
            updated_at: instant(2024, 3, 15, 11, 0),
            assigned_to: None,
            related_asset_id: None,
            category: TicketCategory::Network,
        },
        Ticket {
            id: "T-4".to_string(),
            title: "Software license expired".to_string(),
            description: "Adobe Creative Suite license expired".to_string(),
            priority: TicketPriority::Low,
            status: TicketStatus::Resolved,
            created_at: instant(2024, 3, 13, 9, 0),
            updated_at: instant(2024, 3, 14, 14, 0),
            assigned_to: None,
            related_asset_id: None,
            category: TicketCategory::Software,
        },
    ]
}

// Inputs are literals; the fallbacks are unreachable.
fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn instant(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    date(year, month, day)
        .and_hms_opt(hour, minute, 0)
        .unwrap_or_default()
        .and_utc()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn fixture_ids_are_unique() {
        let assets: HashSet<_> = demo_assets().into_iter().map(|a| a.id).collect();
        let tickets: HashSet<_> = demo_tickets().into_iter().map(|t| t.id).collect();
        assert_eq!(assets.len(), 4);
        assert_eq!(tickets.len(), 4);
    }

    #[test]
    fn fixture_timestamps_are_ordered() {
        for ticket in demo_tickets() {
            assert!(ticket.updated_at >= ticket.created_at, "{}", ticket.id);
        }
    }

    #[test]
    fn fixture_link_resolves() {
        let snapshot = demo_snapshot();
        let linked: Vec<_> = snapshot
            .tickets()
            .iter()
            .filter_map(|t| t.related_asset_id.as_deref())
            .collect();
        assert_eq!(linked, ["A-1"]);
        assert!(snapshot.assets().iter().any(|a| a.id == "A-1"));
    }

    #[test]
    fn fixture_dates_are_real() {
        assert_eq!(demo_assets()[0].purchase_date.to_string(), "2023-01-15");
        assert_eq!(
            demo_tickets()[1].updated_at.to_rfc3339(),
            "2024-03-15T09:00:00+00:00"
        );
    }
}
