mod helpers;

use helpers::*;
use holiday_rota::application::services::HolidayService;
use holiday_rota::domain::entities::ToggleOutcome;
use holiday_rota::domain::ports::holiday_repository::HolidayRepository;
use holiday_rota::infrastructure::http::middleware::error::ApiError;
use holiday_rota::infrastructure::persistence::Database;
use std::sync::Arc;

fn service(db: &Database) -> HolidayService {
    HolidayService::new(Arc::new(db.clone()), Arc::new(db.clone()))
}

#[tokio::test]
async fn test_toggle_adds_then_removes() {
    let test_db = setup_test_db().await;
    let db = test_db.db();
    let holidays = service(&db);

    let added = holidays.toggle_holiday(ymd(2024, 10, 10)).await.unwrap();
    assert_eq!(added, ToggleOutcome::Added);
    let listed = holidays.list_holidays(2024).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].date, ymd(2024, 10, 10));
    assert_eq!(listed[0].employee_id, None);

    let removed = holidays.toggle_holiday(ymd(2024, 10, 10)).await.unwrap();
    assert_eq!(removed, ToggleOutcome::Removed);
    assert!(holidays.list_holidays(2024).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_list_is_ordered_and_scoped_to_year() {
    let test_db = setup_test_db().await;
    let db = test_db.db();
    create_holidays(
        &db,
        &[ymd(2024, 12, 31), ymd(2024, 1, 1), ymd(2025, 1, 1), ymd(2023, 12, 31), ymd(2024, 6, 5)],
    )
    .await;

    let listed: Vec<_> = service(&db)
        .list_holidays(2024)
        .await
        .unwrap()
        .into_iter()
        .map(|h| h.date)
        .collect();

    assert_eq!(listed, vec![ymd(2024, 1, 1), ymd(2024, 6, 5), ymd(2024, 12, 31)]);
}

#[tokio::test]
async fn test_manual_assignment() {
    let test_db = setup_test_db().await;
    let db = test_db.db();
    let staff = create_employees(&db, &["Kim"]).await;
    create_holidays(&db, &[ymd(2024, 2, 2)]).await;
    let holidays = service(&db);

    let assigned = holidays
        .assign_holiday(ymd(2024, 2, 2), Some(staff[0].id.as_str()))
        .await
        .unwrap();
    assert_eq!(assigned.employee_id, Some(staff[0].id.clone()));
    let listed = holidays.list_holidays(2024).await.unwrap();
    assert_eq!(listed[0].employee_id, Some(staff[0].id.clone()));

    let released = holidays.assign_holiday(ymd(2024, 2, 2), None).await.unwrap();
    assert_eq!(released.employee_id, None);
    let listed = holidays.list_holidays(2024).await.unwrap();
    assert_eq!(listed[0].employee_id, None);
}

#[tokio::test]
async fn test_manual_assignment_errors() {
    let test_db = setup_test_db().await;
    let db = test_db.db();
    let staff = create_employees(&db, &["Kim"]).await;
    create_holidays(&db, &[ymd(2024, 2, 2)]).await;
    let holidays = service(&db);

    assert!(matches!(
        holidays.assign_holiday(ymd(2024, 2, 3), Some(staff[0].id.as_str())).await,
        Err(ApiError::NotFound(_))
    ));
    assert!(matches!(
        holidays.assign_holiday(ymd(2024, 2, 2), Some("ghost")).await,
        Err(ApiError::BadRequest(_))
    ));
}

#[tokio::test]
async fn test_clear_year() {
    let test_db = setup_test_db().await;
    let db = test_db.db();
    create_holidays(&db, &[ymd(2024, 1, 1), ymd(2024, 5, 1), ymd(2025, 1, 1)]).await;
    let holidays = service(&db);

    let deleted = holidays.clear_year(2024).await.unwrap();

    assert_eq!(deleted, 2);
    assert!(holidays.list_holidays(2024).await.unwrap().is_empty());
    assert_eq!(holidays.list_holidays(2025).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_unassigned_rows_read_back_as_none() {
    let test_db = setup_test_db().await;
    let db = test_db.db();
    let staff = create_employees(&db, &["Kim"]).await;
    let created = create_holidays(&db, &[ymd(2024, 1, 1), ymd(2024, 1, 2)]).await;

    let fresh = db.get_holiday_by_date(ymd(2024, 1, 1)).await.unwrap().unwrap();
    assert_eq!(fresh.employee_id, None);

    // Assign, then release, so the column goes back to NULL
    db.set_holiday_employee(&created[1].id, Some(staff[0].id.as_str()))
        .await
        .unwrap();
    db.set_holiday_employee(&created[1].id, None).await.unwrap();

    let listed = db.list_holidays_for_year(2024).await.unwrap();
    assert_eq!(listed.len(), 2);
    assert!(listed.iter().all(|h| h.employee_id.is_none()));
}
