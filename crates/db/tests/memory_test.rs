use chrono::{NaiveDate, NaiveTime, TimeZone, Utc};
use fixmatch_core::errors::EngineError;
use fixmatch_core::models::{DaySchedule, Master, MasterSchedule, TimeSlot};
use fixmatch_core::store::{MasterDirectory, ScheduleStore};
use fixmatch_db::memory::{InMemoryMasterDirectory, InMemoryScheduleStore};
use pretty_assertions::assert_eq;

fn master(id: i64, city: &str, specializations: &[&str], rating: f64, is_active: bool) -> Master {
    Master {
        id,
        full_name: format!("Master {}", id),
        phone: format!("+7999000{:04}", id),
        specializations: specializations.iter().map(|s| s.to_string()).collect(),
        city: city.to_string(),
        rating,
        is_active,
        last_schedule_confirmation: None,
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

#[tokio::test]
async fn test_load_missing_record_is_empty() {
    let store = InMemoryScheduleStore::new();

    let record = store.load(1).await.expect("load");

    assert!(record.is_empty());
}

#[tokio::test]
async fn test_save_then_load_round_trip() {
    let store = InMemoryScheduleStore::new();
    let day = date(2025, 3, 3);
    let slot = TimeSlot::new(
        NaiveTime::from_hms_opt(9, 0, 0).expect("valid time"),
        NaiveTime::from_hms_opt(18, 0, 0).expect("valid time"),
    )
    .expect("valid slot");

    let mut record = MasterSchedule::new();
    record.insert(day, DaySchedule::available(day, slot));
    store.save(1, &record).await.expect("save");

    let loaded = store.load(1).await.expect("load");
    assert_eq!(loaded, record);

    // Other masters are unaffected
    assert!(store.load(2).await.expect("load").is_empty());
}

#[tokio::test]
async fn test_save_overwrites_whole_record() {
    let store = InMemoryScheduleStore::new();
    let mut record = MasterSchedule::new();
    record.insert(date(2025, 3, 3), DaySchedule::unavailable(date(2025, 3, 3)));
    store.save(1, &record).await.expect("save");

    let replacement = MasterSchedule::new();
    store.save(1, &replacement).await.expect("save");

    assert!(store.load(1).await.expect("load").is_empty());
}

#[tokio::test]
async fn test_candidates_filter_and_order() {
    let directory = InMemoryMasterDirectory::new();
    directory.insert(master(3, "Moscow", &["plumbing"], 4.5, true)).await;
    directory.insert(master(1, "Moscow", &["plumbing", "general"], 5.0, true)).await;
    directory.insert(master(2, "Moscow", &["electrical"], 5.0, true)).await;
    directory.insert(master(4, "Kazan", &["plumbing"], 5.0, true)).await;
    directory.insert(master(5, "Moscow", &["plumbing"], 5.0, false)).await;

    let found = directory.candidates("plumbing", "Moscow").await.expect("candidates");

    let ids: Vec<i64> = found.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![1, 3]);
}

#[tokio::test]
async fn test_candidates_match_tags_exactly() {
    let directory = InMemoryMasterDirectory::new();
    directory.insert(master(1, "Moscow", &["electrical"], 5.0, true)).await;

    // A tag prefix is not a match
    let found = directory.candidates("electric", "Moscow").await.expect("candidates");

    assert!(found.is_empty());
}

#[tokio::test]
async fn test_top_rated_prefers_rating_then_id() {
    let directory = InMemoryMasterDirectory::new();
    directory.insert(master(1, "Moscow", &["plumbing"], 4.0, true)).await;
    directory.insert(master(2, "Moscow", &["plumbing"], 4.9, true)).await;
    directory.insert(master(3, "Moscow", &["plumbing"], 4.9, true)).await;

    let best = directory.top_rated("plumbing", "Moscow").await.expect("top rated");

    assert_eq!(best.expect("some master").id, 2);
}

#[tokio::test]
async fn test_top_rated_empty_pool() {
    let directory = InMemoryMasterDirectory::new();

    let best = directory.top_rated("plumbing", "Moscow").await.expect("top rated");

    assert!(best.is_none());
}

#[tokio::test]
async fn test_set_last_confirmation() {
    let directory = InMemoryMasterDirectory::new();
    directory.insert(master(1, "Moscow", &["plumbing"], 5.0, true)).await;
    let when = Utc.with_ymd_and_hms(2025, 3, 3, 8, 0, 0).unwrap();

    directory.set_last_confirmation(1, when).await.expect("confirm");

    let stored = directory.get(1).await.expect("get").expect("some master");
    assert_eq!(stored.last_schedule_confirmation, Some(when));
}

#[tokio::test]
async fn test_set_last_confirmation_unknown_master() {
    let directory = InMemoryMasterDirectory::new();
    let when = Utc.with_ymd_and_hms(2025, 3, 3, 8, 0, 0).unwrap();

    let result = directory.set_last_confirmation(9, when).await;

    assert!(matches!(result, Err(EngineError::NotFound(_))));
}
