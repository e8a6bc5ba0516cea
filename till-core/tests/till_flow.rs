//! Full till session flow against an on-disk database: login, order
//! build-up, commit, end-of-day close with replay, clear/restore.

use chrono::NaiveDate;
use shared::Role;
use shared::models::PasswordChangeOutcome;
use till_core::{CommitError, Config, EodSaveOutcome, RepoError, Till};

fn test_config(dir: &tempfile::TempDir) -> Config {
    Config {
        db_path: dir.path().join("till.db").to_string_lossy().into_owned(),
        log_level: "info".into(),
        log_dir: None,
        low_stock_threshold: 10,
    }
}

async fn open_till(dir: &tempfile::TempDir) -> Till {
    Till::open(&test_config(dir)).await.unwrap()
}

async fn item_id(till: &Till, name: &str) -> i64 {
    till.menu_items()
        .await
        .unwrap()
        .iter()
        .find(|i| i.name == name)
        .unwrap()
        .id
}

#[tokio::test]
async fn login_then_commit_then_close_day() {
    let dir = tempfile::tempdir().unwrap();
    let mut till = open_till(&dir).await;

    // Session gate
    assert!(!till.login("manager", "wrong").await.unwrap());
    assert_eq!(till.session().role(), None);
    assert!(till.login("  Manager ", "admin123").await.unwrap());
    assert_eq!(till.session().role(), Some(Role::Manager));

    let day = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
    till.set_business_day(day);

    // Empty order refuses to commit and writes nothing
    assert!(matches!(
        till.commit_order().await.unwrap_err(),
        CommitError::EmptyOrder
    ));
    assert!(till.receipts(None).await.unwrap().is_empty());

    // Unknown item
    assert!(matches!(
        till.add_item(99999).await.unwrap_err(),
        RepoError::NotFound(_)
    ));

    // Latte×5 + Croissant + Fries = 400 + 60 + 40 = 500
    let latte = item_id(&till, "Latte").await;
    let croissant = item_id(&till, "Croissant").await;
    let fries = item_id(&till, "Fries").await;
    for _ in 0..5 {
        till.add_item(latte).await.unwrap();
    }
    till.add_item(croissant).await.unwrap();
    till.add_item(fries).await.unwrap();
    assert_eq!(till.order_total(), 500.0);
    assert_eq!(till.order_lines().len(), 3);

    let committed = till.commit_order().await.unwrap();
    assert_eq!(committed.total, 500.0);
    let receipt_id = committed.receipt_id.expect("receipt persisted");

    // Accumulator cleared, stock decremented
    assert_eq!(till.order_total(), 0.0);
    assert!(till.order_lines().is_empty());
    let items = till.menu_items().await.unwrap();
    let latte_row = items.iter().find(|i| i.id == latte).unwrap();
    assert_eq!(latte_row.stock, 150 - 5);

    // Receipt snapshot matches the committed order
    let receipts = till.receipts(None).await.unwrap();
    assert_eq!(receipts.len(), 1);
    assert_eq!(receipts[0].receipt_id, receipt_id);
    assert_eq!(receipts[0].total, 500.0);
    let lines = receipts[0].lines().unwrap();
    assert_eq!(lines.iter().map(|l| l.quantity).sum::<u32>(), 7);

    // Ledger visible to the reports accessor (window wide enough to cover
    // the pinned business date regardless of the real calendar)
    assert_eq!(till.sales_since(3650).await.unwrap().len(), 3);

    // EOD: first save succeeds and advances the day
    let summary = till.generate_eod_summary().await.unwrap();
    assert_eq!(summary.report_date, "2025-03-01");
    assert_eq!(summary.total_revenue, 500.0);
    assert_eq!(summary.top_items[0].name, "Latte");
    assert_eq!(summary.top_items[0].quantity, 5);

    match till.save_eod_and_advance().await.unwrap() {
        EodSaveOutcome::Saved(saved) => assert_eq!(saved.total_revenue, 500.0),
        other => panic!("expected Saved, got {other:?}"),
    }
    assert_eq!(till.business_day(), day.succ_opt().unwrap());

    // Replay the same date: refused, day unchanged, stored row untouched
    till.set_business_day(day);
    match till.save_eod_and_advance().await.unwrap() {
        EodSaveOutcome::AlreadySaved(existing) => {
            assert_eq!(existing.report_date, "2025-03-01");
        }
        other => panic!("expected AlreadySaved, got {other:?}"),
    }
    assert_eq!(till.business_day(), day);
    let history = till.historical_eod().await.unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].total_revenue, 500.0);
}

#[tokio::test]
async fn clear_then_restore_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let mut till = open_till(&dir).await;
    till.login("cashier", "password").await.unwrap();

    let day = NaiveDate::from_ymd_opt(2025, 4, 10).unwrap();
    till.set_business_day(day);

    let latte = item_id(&till, "Latte").await;
    till.add_item(latte).await.unwrap();
    till.commit_order().await.unwrap();
    assert!(matches!(
        till.save_eod_and_advance().await.unwrap(),
        EodSaveOutcome::Saved(_)
    ));

    // Second day, zero revenue — still a valid close (UI confirms, engine saves)
    match till.save_eod_and_advance().await.unwrap() {
        EodSaveOutcome::Saved(summary) => {
            assert_eq!(summary.report_date, "2025-04-11");
            assert_eq!(summary.total_revenue, 0.0);
        }
        other => panic!("expected Saved, got {other:?}"),
    }

    till.clear_historical_data().await.unwrap();
    assert!(till.historical_eod().await.unwrap().is_empty());
    assert!(till.sales_since(365).await.unwrap().is_empty());
    // Receipts and menu are unaffected by the clear
    assert_eq!(till.receipts(None).await.unwrap().len(), 1);
    assert_eq!(till.menu_items().await.unwrap().len(), 8);

    let count = till.restore_archived_summaries().await.unwrap();
    assert_eq!(count, 2);
    let restored = till.historical_eod().await.unwrap();
    assert_eq!(restored.len(), 2);
    assert_eq!(restored[0].report_date, "2025-04-11");
    assert_eq!(restored[1].report_date, "2025-04-10");
    // Archive listing still holds both dates
    assert_eq!(till.archived_eod().await.unwrap().len(), 2);
}

#[tokio::test]
async fn receipt_deletion_and_logout_semantics() {
    let dir = tempfile::tempdir().unwrap();
    let mut till = open_till(&dir).await;
    till.login("cashier", "password").await.unwrap();

    let latte = item_id(&till, "Latte").await;
    till.add_item(latte).await.unwrap();
    let committed = till.commit_order().await.unwrap();
    let receipt_id = committed.receipt_id.unwrap();

    assert!(till.delete_receipt(&receipt_id).await.unwrap());
    assert!(!till.delete_receipt(&receipt_id).await.unwrap());

    // Logout abandons the open order along with the role
    till.add_item(latte).await.unwrap();
    assert_eq!(till.order_total(), 80.0);
    till.logout();
    assert_eq!(till.session().role(), None);
    assert_eq!(till.order_total(), 0.0);
}

#[tokio::test]
async fn password_change_via_till() {
    let dir = tempfile::tempdir().unwrap();
    let mut till = open_till(&dir).await;

    assert_eq!(
        till.change_password("ghost", "x", "x").await.unwrap(),
        PasswordChangeOutcome::UserNotFound
    );
    assert_eq!(
        till.change_password("cashier", "password", "password")
            .await
            .unwrap(),
        PasswordChangeOutcome::NoOpPassword
    );
    assert_eq!(
        till.change_password("cashier", "password", "latteart")
            .await
            .unwrap(),
        PasswordChangeOutcome::Success
    );
    assert!(till.login("cashier", "latteart").await.unwrap());
    assert_eq!(till.usernames().await.unwrap(), vec!["cashier", "manager"]);
}
