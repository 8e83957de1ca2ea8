#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const EVENT_JSON: &str = r#"{
  "id": 1,
  "titulo": "Curso de Primeiros Socorros",
  "turmas": [
    {
      "id": 10,
      "nome": "Turma A",
      "data_inicio": "2025-03-10",
      "data_fim": "2025-03-12",
      "horario_inicio": "09:00",
      "horario_fim": "17:00"
    },
    {
      "id": 11,
      "nome": "Turma B",
      "horario_inicio": "19:00",
      "horario_fim": "21:00",
      "encontros": ["2025-04-14", {"data": "2025-04-07"}, "14/04/2025"]
    }
  ]
}"#;

/// Isolated scratch directory used as HOME so no real config is touched.
pub fn scratch_dir(name: &str) -> PathBuf {
    let mut dir: PathBuf = env::temp_dir();
    dir.push(format!("rpresence_test_{name}"));
    fs::remove_dir_all(&dir).ok();
    fs::create_dir_all(&dir).expect("create scratch dir");
    dir
}

/// Command bound to the scratch HOME, without colors.
pub fn rpr(home: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("rpresence");
    cmd.env("HOME", home).env_remove("RPRESENCE_LOG").arg("--no-color");
    cmd
}

/// Write the sample event file and return (db path, event file path).
pub fn setup(name: &str) -> (PathBuf, String, String) {
    let home = scratch_dir(name);
    let db = home.join("presencas.sqlite").to_string_lossy().to_string();
    let file = home.join("evento.json");
    fs::write(&file, EVENT_JSON).expect("write event file");

    rpr(&home)
        .args(["--db", &db, "--test", "init"])
        .assert()
        .success();

    (home, db, file.to_string_lossy().to_string())
}
