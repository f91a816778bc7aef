use parcel_core::db::migrations::latest_version;
use parcel_core::db::{open_db, open_db_in_memory, DbError};
use parcel_core::{ParcelService, SqliteParcelStore};
use rusqlite::Connection;

#[test]
fn open_db_in_memory_applies_all_migrations() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(schema_version(&conn), latest_version());
    assert_table_exists(&conn, "parcel");
}

#[test]
fn reopening_file_database_keeps_parcels() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tracker.db");

    let number = {
        let conn = open_db(&path).unwrap();
        let service = ParcelService::new(SqliteParcelStore::new(&conn));
        service.register(12, "Harbor 4").unwrap().number
    };

    let conn = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn), latest_version());
    let service = ParcelService::new(SqliteParcelStore::new(&conn));
    assert_eq!(service.parcel(number).unwrap().address, "Harbor 4");
}

#[test]
fn opening_database_with_newer_schema_version_returns_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.db");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    let err = open_db(&path).unwrap_err();
    match err {
        DbError::UnsupportedSchemaVersion {
            db_version,
            latest_supported,
        } => {
            assert_eq!(db_version, 999);
            assert_eq!(latest_supported, latest_version());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn deleted_numbers_are_not_reused() {
    let conn = open_db_in_memory().unwrap();
    let service = ParcelService::new(SqliteParcelStore::new(&conn));

    let first = service.register(3, "A").unwrap();
    service.delete(first.number).unwrap();
    let second = service.register(3, "B").unwrap();

    assert!(second.number > first.number);
}

fn schema_version(conn: &Connection) -> u32 {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap()
}

fn assert_table_exists(conn: &Connection, table_name: &str) {
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'table' AND name = ?1
            );",
            [table_name],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1, "table {table_name} does not exist");
}
