use chrono::{Duration, NaiveDate, NaiveTime};
use rpresence::core::attendance::{DisplayState, display_state, window_for};
use rpresence::core::calendar::expand;
use rpresence::core::confirmation::{ConfirmationOutcome, confirm_meeting};
use rpresence::core::status::{LifecycleStatus, status_of, status_of_event};
use rpresence::db::pool::DbPool;
use rpresence::db::service::SqliteAttendanceService;
use rpresence::errors::AppError;
use rpresence::models::attendance::AttendanceIndex;
use rpresence::models::cohort::Cohort;
use rpresence::models::event::Event;
use rpresence::models::policy::ConfirmationPolicy;
use rpresence::models::window::Window;
use rpresence::utils::date::{Instant, parse_date_only, parse_instant};

mod common;

fn at(s: &str) -> Instant {
    parse_instant(s).unwrap()
}

fn day(s: &str) -> NaiveDate {
    parse_date_only(s).unwrap()
}

fn hm(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

fn cohort_a() -> Cohort {
    Cohort::new("10", "Turma A")
        .with_dates(Some(day("2025-03-10")), Some(day("2025-03-12")))
        .with_times(Some(hm(9, 0)), Some(hm(17, 0)))
}

#[test]
fn test_date_only_keeps_calendar_day() {
    assert_eq!(day("2025-03-10"), NaiveDate::from_ymd_opt(2025, 3, 10).unwrap());
    assert_eq!(day("2025-03-10T23:30:00Z"), NaiveDate::from_ymd_opt(2025, 3, 10).unwrap());
    assert!(matches!(parse_date_only("10/03/2025"), Err(AppError::InvalidDate(_))));
}

#[test]
fn test_status_boundaries_are_inclusive() {
    let w = Window::bounded(at("2025-03-10 09:00"), at("2025-03-12 17:00"));

    assert_eq!(status_of(&w, &at("2025-03-10 08:59")), LifecycleStatus::Scheduled);
    assert_eq!(status_of(&w, &at("2025-03-10 09:00")), LifecycleStatus::InProgress);
    assert_eq!(status_of(&w, &at("2025-03-12 17:00")), LifecycleStatus::InProgress);
    assert_eq!(status_of(&w, &at("2025-03-12 17:01")), LifecycleStatus::Finished);
}

#[test]
fn test_inverted_window_is_unknown() {
    let w = Window::bounded(at("2025-03-12"), at("2025-03-10"));
    for probe in ["2025-03-01", "2025-03-11", "2025-03-30"] {
        assert_eq!(status_of(&w, &at(probe)), LifecycleStatus::Unknown);
    }
    assert_eq!(status_of(&Window::default(), &at("2025-03-11")), LifecycleStatus::Unknown);
}

#[test]
fn test_range_expands_one_meeting_per_day() {
    let meetings: Vec<_> = expand(&cohort_a()).collect();

    assert_eq!(meetings.len(), 3);
    assert_eq!(meetings[0].date, Some(day("2025-03-10")));
    assert_eq!(meetings[2].date, Some(day("2025-03-12")));
    assert!(meetings.iter().all(|m| m.start == hm(9, 0) && m.end == hm(17, 0)));
}

#[test]
fn test_display_state_follows_the_window() {
    let cohort = cohort_a();
    let cw = cohort.window();
    let policy = ConfirmationPolicy::standard();
    let first = expand(&cohort).next().unwrap();

    let w = window_for(&first, &cw, &policy).unwrap();
    assert_eq!(w.opens_at, at("2025-03-10 10:00"));
    assert_eq!(w.closes_at, cw.end.unwrap() + Duration::days(60));

    let state = |s: &str| display_state(&first, &cw, &policy, None, &at(s));
    assert_eq!(state("2025-03-10 09:30"), DisplayState::Awaiting);
    assert_eq!(state("2025-03-10 10:00"), DisplayState::Confirmable);
    assert_eq!(state("2025-05-10 12:00"), DisplayState::Confirmable);
    assert_eq!(state("2025-05-13 09:00"), DisplayState::Absent);
}

#[test]
fn test_confirmation_is_idempotent_against_sqlite() {
    let pool = DbPool::in_memory().unwrap();
    let mut service = SqliteAttendanceService::new(&pool.conn);
    let cohort = cohort_a();
    let policy = ConfirmationPolicy::standard();
    let now = at("2025-03-11 12:00");

    let index = service.index_for("10").unwrap();
    let first =
        confirm_meeting(&mut service, &cohort, "42", day("2025-03-10"), &index, &policy, now)
            .unwrap();
    assert_eq!(first, ConfirmationOutcome::Confirmed);

    // stale index: the service reports the conflict
    let again =
        confirm_meeting(&mut service, &cohort, "42", day("2025-03-10"), &index, &policy, now)
            .unwrap();
    assert_eq!(again, ConfirmationOutcome::AlreadyConfirmed);

    // fresh index: rejected locally as already present
    let fresh = service.index_for("10").unwrap();
    assert!(fresh.is_present("10", "42", day("2025-03-10")));
    let local =
        confirm_meeting(&mut service, &cohort, "42", day("2025-03-10"), &fresh, &policy, now)
            .unwrap();
    assert_eq!(local, ConfirmationOutcome::AlreadyConfirmed);
}

#[test]
fn test_confirmation_outside_window_is_an_error() {
    let pool = DbPool::in_memory().unwrap();
    let mut service = SqliteAttendanceService::new(&pool.conn);
    let index = AttendanceIndex::default();
    let policy = ConfirmationPolicy::standard();

    let early = confirm_meeting(
        &mut service,
        &cohort_a(),
        "42",
        day("2025-03-12"),
        &index,
        &policy,
        at("2025-03-11 12:00"),
    );
    assert!(matches!(early, Err(AppError::WindowNotOpen)));
    assert!(service.index_for("10").unwrap().is_empty());
}

#[test]
fn test_event_in_gap_between_cohorts_is_scheduled() {
    let jan = Cohort::new("1", "Janeiro")
        .with_dates(Some(day("2025-01-06")), Some(day("2025-01-10")));
    let feb = Cohort::new("2", "Fevereiro")
        .with_dates(Some(day("2025-02-03")), Some(day("2025-02-07")));
    let event = Event::new("e", "Curso", vec![jan, feb]);

    assert_eq!(status_of_event(&event, &at("2025-01-08")), LifecycleStatus::InProgress);
    assert_eq!(status_of_event(&event, &at("2025-01-20")), LifecycleStatus::Scheduled);
    assert_eq!(status_of_event(&event, &at("2025-02-20")), LifecycleStatus::Finished);
}

#[test]
fn test_sample_file_parses() {
    let events = Event::parse_json(common::EVENT_JSON).unwrap();
    assert_eq!(events.len(), 1);

    let b = events[0].cohort("11").unwrap();
    let dates: Vec<_> = expand(b).map(|m| m.date).collect();
    assert_eq!(dates, vec![Some(day("2025-04-07")), Some(day("2025-04-14")), None]);
    assert_eq!(b.window().start, Some(at("2025-04-07 19:00")));
    assert_eq!(b.window().end, Some(at("2025-04-14 21:00")));
}
