//! Schema definitions and migration runner.
//!
//! Tables are SCHEMAFULL. UUIDs are stored as strings, and the status
//! enum is a string with an ASSERT constraint so no stored record can
//! hold an unknown status word.

use surrealdb::{Connection, Surreal};
use surrealdb_types::SurrealValue;
use tracing::info;

use crate::error::DbError;

struct Migration {
    version: u32,
    name: &'static str,
    ddl: &'static str,
}

static MIGRATIONS: &[Migration] = &[Migration {
    version: 1,
    name: "initial_schema",
    ddl: SCHEMA_V1,
}];

const TRACKING_DDL: &str = "\
DEFINE TABLE IF NOT EXISTS _migration SCHEMAFULL;
DEFINE FIELD IF NOT EXISTS version ON TABLE _migration TYPE int;
DEFINE FIELD IF NOT EXISTS name ON TABLE _migration TYPE string;
DEFINE FIELD IF NOT EXISTS applied_at ON TABLE _migration TYPE datetime DEFAULT time::now();
DEFINE INDEX IF NOT EXISTS idx_migration_version ON TABLE _migration COLUMNS version UNIQUE;
";

const SCHEMA_V1: &str = "\
-- Students. Contact fields stay optional; the workflow copes with
-- their absence.
DEFINE TABLE user SCHEMAFULL;
DEFINE FIELD name ON TABLE user TYPE option<string>;
DEFINE FIELD email ON TABLE user TYPE option<string>;
DEFINE FIELD created_at ON TABLE user TYPE datetime DEFAULT time::now();
DEFINE FIELD updated_at ON TABLE user TYPE datetime DEFAULT time::now();

-- Leave requests, keyed to their owning student.
DEFINE TABLE outpass_request SCHEMAFULL;
DEFINE FIELD user_id ON TABLE outpass_request TYPE string;
DEFINE FIELD status ON TABLE outpass_request TYPE string \
    ASSERT $value IN ['Pending', 'Approved', 'Rejected'];
DEFINE FIELD created_at ON TABLE outpass_request TYPE datetime DEFAULT time::now();
DEFINE FIELD updated_at ON TABLE outpass_request TYPE datetime DEFAULT time::now();
DEFINE INDEX idx_outpass_user ON TABLE outpass_request COLUMNS user_id;
";

#[derive(Debug, SurrealValue)]
struct AppliedMigration {
    version: u32,
}

/// Apply every migration not yet recorded in the `_migration` table.
///
/// The tracking table is created on first use, and each applied
/// migration is recorded with its version, so re-running is a no-op
/// for versions already present.
pub async fn run_migrations<C: Connection>(db: &Surreal<C>) -> Result<(), DbError> {
    db.query(TRACKING_DDL)
        .await?
        .check()
        .map_err(|e| DbError::Migration(e.to_string()))?;

    let current = latest_applied_version(db).await?;

    for migration in MIGRATIONS.iter().filter(|m| m.version > current) {
        info!(
            version = migration.version,
            name = migration.name,
            "Applying migration"
        );

        db.query(migration.ddl).await?.check().map_err(|e| {
            DbError::Migration(format!("v{} {}: {e}", migration.version, migration.name))
        })?;

        db.query("CREATE _migration SET version = $version, name = $name")
            .bind(("version", migration.version))
            .bind(("name", migration.name))
            .await?
            .check()
            .map_err(|e| DbError::Migration(format!("recording v{}: {e}", migration.version)))?;
    }

    Ok(())
}

async fn latest_applied_version<C: Connection>(db: &Surreal<C>) -> Result<u32, DbError> {
    let mut result = db
        .query("SELECT version FROM _migration ORDER BY version DESC LIMIT 1")
        .await?;
    let rows: Vec<AppliedMigration> = result.take(0)?;
    Ok(rows.first().map(|m| m.version).unwrap_or(0))
}

/// Raw DDL for schema version 1, for tests that apply it directly.
pub fn schema_v1() -> &'static str {
    SCHEMA_V1
}
