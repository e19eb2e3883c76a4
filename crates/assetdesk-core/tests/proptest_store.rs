use assetdesk_core::{AssetDraft, AssetType, ManualClock, Store, TicketDraft};
use chrono::{Duration, TimeZone, Utc};
use proptest::prelude::*;

fn arb_asset_draft() -> impl Strategy<Value = AssetDraft> {
    (
        "[A-Za-z][A-Za-z0-9 ]{0,20}",
        prop::sample::select(AssetType::ALL.to_vec()),
        prop::option::of("[A-Z0-9]{4,10}"),
        prop::option::of(prop::sample::select(vec![
            "available",
            "in-use",
            "maintenance",
            "retired",
        ])),
    )
        .prop_map(|(name, asset_type, serial, status)| {
            let mut draft = AssetDraft::new().name(name).asset_type(asset_type);
            if let Some(serial) = serial {
                draft = draft.serial_number(serial);
            }
            if let Some(status) = status {
                draft = draft.status(status);
            }
            draft
        })
}

fn arb_ticket_draft() -> impl Strategy<Value = TicketDraft> {
    (
        "[A-Za-z][A-Za-z ]{0,20}",
        "[a-z]{1,12}(\n[a-z ]{0,12})?",
        prop::sample::select(vec!["low", "medium", "high", "critical"]),
        prop::sample::select(vec!["hardware", "software", "network", "access", "other"]),
    )
        .prop_map(|(title, description, priority, category)| {
            TicketDraft::new()
                .title(title)
                .description(description)
                .priority(priority)
                .category(category)
        })
}

fn new_store() -> Store<ManualClock> {
    let start = Utc
        .with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
        .single()
        .expect("valid instant");
    Store::with_clock(ManualClock::new(start))
}

proptest! {
    #![proptest_config(proptest::test_runner::Config::with_cases(256))]

    #[test]
    fn create_asset_appends_one_fresh_id(drafts in prop::collection::vec(arb_asset_draft(), 1..20)) {
        let mut store = new_store();
        for draft in &drafts {
            let prior: Vec<String> = store.assets().iter().map(|a| a.id.clone()).collect();
            let created = store.create_asset(draft).expect("valid draft");
            prop_assert!(!prior.contains(&created.id));
            prop_assert_eq!(store.assets().len(), prior.len() + 1);
            prop_assert_eq!(store.assets().last(), Some(&created));
        }
    }

    #[test]
    fn unknown_asset_ids_leave_store_unchanged(
        drafts in prop::collection::vec(arb_asset_draft(), 0..8),
        patch in arb_asset_draft(),
        unknown in "[a-z]{1,8}",
    ) {
        let mut store = new_store();
        for draft in &drafts {
            store.create_asset(draft).expect("valid draft");
        }
        let before = store.snapshot();

        let update = store.update_asset(&unknown, &patch);
        prop_assert!(update.expect_err("unknown id").is_not_found());
        let delete = store.delete_asset_checked(&unknown);
        prop_assert!(delete.expect_err("unknown id").is_not_found());
        prop_assert_eq!(store.snapshot(), before);
    }

    #[test]
    fn double_delete_is_idempotent(
        drafts in prop::collection::vec(arb_asset_draft(), 1..8),
        pick in any::<prop::sample::Index>(),
    ) {
        let mut store = new_store();
        for draft in &drafts {
            store.create_asset(draft).expect("valid draft");
        }
        let id = store.assets()[pick.index(store.assets().len())].id.clone();

        prop_assert!(store.delete_asset(&id).is_some());
        let after_first = store.snapshot();
        prop_assert!(store.delete_asset(&id).is_none());
        prop_assert_eq!(store.snapshot(), after_first);
    }

    #[test]
    fn ticket_updates_never_move_timestamps_backwards(
        draft in arb_ticket_draft(),
        steps in prop::collection::vec(-120i64..120, 1..10),
    ) {
        let mut store = new_store();
        let created = store.create_ticket(&draft).expect("valid draft");
        let mut last = created.updated_at;

        for minutes in steps {
            store.clock().advance(Duration::minutes(minutes));
            let updated = store
                .update_ticket(&created.id, &TicketDraft::new().status("in-progress"))
                .expect("known id");
            prop_assert_eq!(updated.created_at, created.created_at);
            prop_assert!(updated.updated_at >= last);
            prop_assert!(updated.updated_at >= updated.created_at);
            last = updated.updated_at;
        }
    }
}
