use std::sync::Arc;

use chrono::{NaiveDate, NaiveTime};
use fixmatch_core::models::{BookingOutcome, TimeSlot};
use fixmatch_core::store::ScheduleStore;
use fixmatch_db::memory::{InMemoryMasterDirectory, InMemoryScheduleStore};
use fixmatch_engine::{AvailabilityEngine, BookingCoordinator, EngineConfig, MasterLocks};
use pretty_assertions::assert_eq;

const MASTER: i64 = 1;

fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).expect("valid time")
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

struct Harness {
    store: Arc<InMemoryScheduleStore>,
    engine: AvailabilityEngine,
    coordinator: Arc<BookingCoordinator>,
}

fn harness() -> Harness {
    let store = Arc::new(InMemoryScheduleStore::new());
    let locks = Arc::new(MasterLocks::new());
    let engine = AvailabilityEngine::new(
        store.clone(),
        Arc::new(InMemoryMasterDirectory::new()),
        locks.clone(),
        EngineConfig::default(),
    );
    let coordinator = Arc::new(BookingCoordinator::new(store.clone(), locks));

    Harness {
        store,
        engine,
        coordinator,
    }
}

async fn open_day(h: &Harness, day: NaiveDate) {
    h.engine
        .set_day(
            MASTER,
            day,
            true,
            Some(TimeSlot::new(time(9, 0), time(18, 0)).expect("valid slot")),
        )
        .await
        .expect("set day");
}

#[tokio::test]
async fn test_book_appends_in_order() {
    let h = harness();
    let day = date(2025, 3, 3);
    open_day(&h, day).await;

    let first = h.coordinator.book(MASTER, 101, day).await.expect("book");
    let second = h.coordinator.book(MASTER, 102, day).await.expect("book");

    assert_eq!(first, BookingOutcome::Booked);
    assert_eq!(second, BookingOutcome::Booked);

    let record = h.store.load(MASTER).await.expect("load");
    assert_eq!(record.get(&day).expect("entry exists").booked_jobs, vec![101, 102]);
    assert_eq!(h.engine.workload(MASTER, day).await.expect("workload"), 2);
}

#[tokio::test]
async fn test_book_missing_day_writes_nothing() {
    let h = harness();
    let day = date(2025, 3, 3);

    let outcome = h.coordinator.book(MASTER, 101, day).await.expect("book");

    assert_eq!(outcome, BookingOutcome::NoScheduleEntry);
    assert_eq!(h.engine.workload(MASTER, day).await.expect("workload"), 0);
    // No entry is fabricated for the date
    assert!(h.store.load(MASTER).await.expect("load").is_empty());
}

#[tokio::test]
async fn test_book_allows_duplicates() {
    let h = harness();
    let day = date(2025, 3, 3);
    open_day(&h, day).await;

    h.coordinator.book(MASTER, 101, day).await.expect("book");
    h.coordinator.book(MASTER, 101, day).await.expect("book");

    let record = h.store.load(MASTER).await.expect("load");
    assert_eq!(record.get(&day).expect("entry exists").booked_jobs, vec![101, 101]);
}

#[tokio::test]
async fn test_booking_on_unavailable_day_is_allowed() {
    // The entry exists, so the booking lands even though the day is closed;
    // refusing it is the matcher's job, not the coordinator's
    let h = harness();
    let day = date(2025, 3, 3);
    h.engine.set_day(MASTER, day, false, None).await.expect("set day");

    let outcome = h.coordinator.book(MASTER, 101, day).await.expect("book");

    assert_eq!(outcome, BookingOutcome::Booked);
    assert_eq!(h.engine.workload(MASTER, day).await.expect("workload"), 1);
}

#[tokio::test]
async fn test_concurrent_bookings_all_land() {
    let h = harness();
    let day = date(2025, 3, 3);
    open_day(&h, day).await;

    let mut handles = Vec::new();
    for job_id in 0..8 {
        let coordinator = h.coordinator.clone();
        handles.push(tokio::spawn(async move {
            coordinator.book(MASTER, job_id, day).await
        }));
    }
    for handle in handles {
        let outcome = handle.await.expect("join").expect("book");
        assert_eq!(outcome, BookingOutcome::Booked);
    }

    // The per-master lock keeps racing read-modify-write cycles from
    // overwriting each other
    assert_eq!(h.engine.workload(MASTER, day).await.expect("workload"), 8);
}
