use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{rpr, setup};

#[test]
fn test_status_reports_event_and_cohorts() {
    let (home, db, file) = setup("status");

    rpr(&home)
        .args(["--db", &db, "--at", "2025-03-10 12:00", "status", "--file", &file])
        .assert()
        .success()
        .stdout(contains("Curso de Primeiros Socorros"))
        .stdout(contains("Turma A (#10) [Em andamento]"))
        .stdout(contains("Turma B (#11) [Programado]"))
        .stdout(contains("3 meetings"));
}

#[test]
fn test_status_in_gap_between_cohorts_is_scheduled() {
    let (home, db, file) = setup("status_gap");

    rpr(&home)
        .args(["--db", &db, "--at", "2025-03-20", "status", "--file", &file, "--json"])
        .assert()
        .success()
        .stdout(contains("\"status\": \"scheduled\""))
        .stdout(contains("\"status\": \"finished\""))
        .stdout(contains("in_progress").not());
}

#[test]
fn test_meetings_table_shows_states() {
    let (home, db, file) = setup("meetings");

    rpr(&home)
        .args([
            "--db", &db, "--at", "2025-03-11 12:00", "meetings", "--file", &file, "--cohort", "10",
            "--participant", "42",
        ])
        .assert()
        .success()
        .stdout(contains("10/03/2025"))
        .stdout(contains("12/03/2025"))
        .stdout(contains("Confirmar: 2"))
        .stdout(contains("Aguardando: 1"));
}

#[test]
fn test_meetings_keeps_malformed_meeting_as_awaiting() {
    let (home, db, file) = setup("meetings_bad");

    rpr(&home)
        .args([
            "--db", &db, "--at", "2025-04-08 12:00", "meetings", "--file", &file, "--cohort", "11",
            "--participant", "42",
        ])
        .assert()
        .success()
        .stdout(contains("07/04/2025"))
        .stdout(contains("14/04/2025"))
        .stdout(contains("Confirmar: 1"))
        .stdout(contains("Aguardando: 2"));
}

#[test]
fn test_confirm_is_idempotent() {
    let (home, db, file) = setup("confirm_twice");
    let args = [
        "--db", &db, "--at", "2025-03-10 12:00", "confirm", "--file", &file, "--cohort", "10",
        "--participant", "42", "--date", "2025-03-10",
    ];

    rpr(&home)
        .args(args)
        .assert()
        .success()
        .stdout(contains("Presence confirmed"));

    rpr(&home)
        .args(args)
        .assert()
        .success()
        .stdout(contains("Presence already confirmed"));

    rpr(&home)
        .args([
            "--db", &db, "--at", "2025-03-10 12:00", "meetings", "--file", &file, "--cohort", "10",
            "--participant", "42",
        ])
        .assert()
        .success()
        .stdout(contains("Presente: 1"));
}

#[test]
fn test_confirm_rejected_outside_window() {
    let (home, db, file) = setup("confirm_rejected");

    rpr(&home)
        .args([
            "--db", &db, "--at", "2025-03-10 09:30", "confirm", "--file", &file, "--cohort", "10",
            "--participant", "42", "--date", "2025-03-10",
        ])
        .assert()
        .failure()
        .stderr(contains("not open yet"));

    rpr(&home)
        .args([
            "--db", &db, "--at", "2025-06-01", "confirm", "--file", &file, "--cohort", "10",
            "--participant", "42", "--date", "2025-03-10",
        ])
        .assert()
        .failure()
        .stderr(contains("window is closed"));

    // the short preset closes 15 days after the cohort ends
    rpr(&home)
        .args([
            "--db", &db, "--at", "2025-04-01", "--policy", "short", "confirm", "--file", &file,
            "--cohort", "10", "--participant", "42", "--date", "2025-03-11",
        ])
        .assert()
        .failure()
        .stderr(contains("window is closed"));
}

#[test]
fn test_confirm_unknown_cohort_or_day() {
    let (home, db, file) = setup("confirm_unknown");

    rpr(&home)
        .args([
            "--db", &db, "--at", "2025-03-10 12:00", "confirm", "--file", &file, "--cohort", "99",
            "--participant", "42", "--date", "2025-03-10",
        ])
        .assert()
        .failure()
        .stderr(contains("cohort 99"));

    rpr(&home)
        .args([
            "--db", &db, "--at", "2025-03-10 12:00", "confirm", "--file", &file, "--cohort", "10",
            "--participant", "42", "--date", "2025-03-20",
        ])
        .assert()
        .failure()
        .stderr(contains("no meeting on 2025-03-20"));

    rpr(&home)
        .args([
            "--db", &db, "confirm", "--file", &file, "--cohort", "10", "--participant", "42",
            "--date", "20/03/2025",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));
}

#[test]
fn test_unknown_policy_preset_fails() {
    let (home, db, file) = setup("bad_policy");

    rpr(&home)
        .args(["--db", &db, "--policy", "forever", "status", "--file", &file])
        .assert()
        .failure()
        .stderr(contains("unknown policy preset"));
}

#[test]
fn test_config_print_shows_effective_policy() {
    let (home, db, _) = setup("config_print");

    rpr(&home)
        .args(["--db", &db, "config", "--print"])
        .assert()
        .success()
        .stdout(contains("preset: standard"))
        .stdout(contains("opens 1h after meeting start, closes 60d after cohort end"));
}

#[test]
fn test_log_lists_confirmations() {
    let (home, db, file) = setup("log");

    rpr(&home)
        .args([
            "--db", &db, "--at", "2025-03-10 12:00", "confirm", "--file", &file, "--cohort", "10",
            "--participant", "7", "--date", "2025-03-10",
        ])
        .assert()
        .success();

    rpr(&home)
        .args(["--db", &db, "log"])
        .assert()
        .success()
        .stdout(contains("confirm"))
        .stdout(contains("10/7"))
        .stdout(contains("migration_applied"));
}

#[test]
fn test_calendar_days_hold_in_any_timezone() {
    let cases = [
        ("America/Sao_Paulo", "-03:00"),
        ("Pacific/Honolulu", "-10:00"),
        ("Asia/Tokyo", "+09:00"),
    ];

    for (tz, offset) in cases {
        let (home, db, file) = setup(&format!("tz_{}", tz.replace('/', "_")));

        rpr(&home)
            .env("TZ", tz)
            .args([
                "--db", &db, "--at", "2025-03-10 12:00", "meetings", "--file", &file, "--cohort",
                "10", "--participant", "42",
            ])
            .assert()
            .success()
            .stdout(contains("10/03/2025"))
            .stdout(contains("12/03/2025"))
            .stdout(contains("09/03/2025").not())
            .stdout(contains("13/03/2025").not());

        rpr(&home)
            .env("TZ", tz)
            .args(["--db", &db, "--at", "2025-03-10 12:00", "status", "--file", &file, "--json"])
            .assert()
            .success()
            .stdout(contains(format!("\"start\": \"2025-03-10T09:00:00{offset}\"")))
            .stdout(contains(format!("\"end\": \"2025-03-12T17:00:00{offset}\"")))
            .stdout(contains("\"status\": \"in_progress\""));
    }
}

#[test]
fn test_midnight_dst_gap_keeps_the_meeting_day() {
    let (home, db, _) = setup("tz_gap");
    let file = home.join("gap.json");
    // Havana springs forward at local midnight on 2025-03-09
    fs::write(
        &file,
        r#"{"id": 2, "titulo": "Plantão", "turmas": [
            {"id": 20, "nome": "Turma C", "data_inicio": "2025-03-09", "data_fim": "2025-03-09"}
        ]}"#,
    )
    .expect("write gap event");
    let file = file.to_string_lossy().to_string();

    rpr(&home)
        .env("TZ", "America/Havana")
        .args([
            "--db", &db, "--at", "2025-03-09 12:00", "meetings", "--file", &file, "--cohort", "20",
            "--participant", "42",
        ])
        .assert()
        .success()
        .stdout(contains("09/03/2025"))
        .stdout(contains("08/03/2025").not());

    rpr(&home)
        .env("TZ", "America/Havana")
        .args(["--db", &db, "--at", "2025-03-09 12:00", "status", "--file", &file, "--json"])
        .assert()
        .success()
        .stdout(
            contains("\"start\": \"2025-03-09T01:00:00-04:00\"")
                .or(contains("\"start\": \"2025-03-09T00:00:00-05:00\"")),
        )
        .stdout(contains("\"end\": \"2025-03-09T23:59:00-04:00\""))
        .stdout(contains("\"status\": \"in_progress\""));
}

#[test]
fn test_no_color_output_is_plain() {
    let (home, db, file) = setup("no_color");

    rpr(&home)
        .args([
            "--db", &db, "--at", "2025-03-10 12:00", "confirm", "--file", &file, "--cohort", "10",
            "--participant", "42", "--date", "2025-03-10",
        ])
        .assert()
        .success()
        .stdout(contains("Presence confirmed"))
        .stdout(contains("\u{1b}[").not());

    rpr(&home)
        .args([
            "--db", &db, "--at", "2025-03-10 09:30", "confirm", "--file", &file, "--cohort", "10",
            "--participant", "42", "--date", "2025-03-11",
        ])
        .assert()
        .failure()
        .stderr(contains("not open yet"))
        .stderr(contains("\u{1b}[").not());
}
