use log::info;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists. Migrations record themselves there.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    info!("migration applied: {version}");
    Ok(())
}

/// Presence rows, one per (cohort, participant, day).
fn create_presencas_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS presencas (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            turma_id      TEXT NOT NULL,
            usuario_id    TEXT NOT NULL,
            data          TEXT NOT NULL,
            presente      INTEGER NOT NULL DEFAULT 0 CHECK(presente IN (0,1)),
            confirmado_em TEXT,
            UNIQUE (turma_id, usuario_id, data)
        );
        "#,
    )
}

fn create_presencas_indexes(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE INDEX IF NOT EXISTS idx_presencas_turma ON presencas(turma_id);
        CREATE INDEX IF NOT EXISTS idx_presencas_usuario ON presencas(usuario_id, data);
        "#,
    )
}

type Migration = (&'static str, &'static str, fn(&Connection) -> Result<()>);

const MIGRATIONS: [Migration; 2] = [
    (
        "20250301_0001_create_presencas",
        "Created presencas table",
        create_presencas_table,
    ),
    (
        "20250310_0002_presencas_indexes",
        "Added presencas lookup indexes",
        create_presencas_indexes,
    ),
];

/// Public entry point: run all pending migrations in order.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;

    for (version, message, apply) in MIGRATIONS {
        if is_applied(conn, version)? {
            continue;
        }
        apply(conn)?;
        mark_applied(conn, version, message)?;
    }

    Ok(())
}
