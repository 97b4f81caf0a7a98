//! Climate observation store
//!
//! Read-only SQLite access to an externally populated database holding two
//! tables: `measurement` (daily observations) and `station` (station
//! metadata). The store validates its schema once at startup and then hands
//! out a fresh read-only connection per query, so there is no shared
//! connection state and external writers never invalidate this process.

pub mod error;
pub mod records;

pub use error::{StoreError, StoreResult};
pub use records::{Measurement, Station};

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use rusqlite::{Connection, OpenFlags};

/// Handle to the climate database.
///
/// Holds only the path; connections are opened per query (scoped
/// acquisition) and dropped when the query completes.
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    /// Open the store and validate its schema.
    ///
    /// Fails with [`StoreError::MissingTable`] or
    /// [`StoreError::MissingColumn`] when the database does not carry the
    /// expected tables; callers treat this as fatal at startup.
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Store> {
        let store = Store { path: path.into() };
        let conn = store.connect()?;
        verify_schema(&conn)?;
        Ok(store)
    }

    /// Open a fresh read-only connection.
    pub fn connect(&self) -> StoreResult<Connection> {
        Connection::open_with_flags(
            &self.path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(|e| StoreError::Open {
            path: self.path.clone(),
            source: e,
        })
    }

    /// Path of the underlying database file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Check that both expected tables exist with all required columns.
fn verify_schema(conn: &Connection) -> StoreResult<()> {
    verify_table(conn, records::MEASUREMENT_TABLE, records::MEASUREMENT_COLUMNS)?;
    verify_table(conn, records::STATION_TABLE, records::STATION_COLUMNS)?;
    Ok(())
}

fn verify_table(conn: &Connection, table: &str, required: &[&str]) -> StoreResult<()> {
    let mut stmt = conn.prepare("SELECT name FROM pragma_table_info(?1)")?;
    let columns: HashSet<String> = stmt
        .query_map([table], |row| row.get(0))?
        .collect::<Result<_, _>>()?;

    // pragma_table_info yields no rows for a nonexistent table
    if columns.is_empty() {
        return Err(StoreError::MissingTable(table.to_string()));
    }

    for column in required {
        if !columns.contains(*column) {
            return Err(StoreError::MissingColumn {
                table: table.to_string(),
                column: column.to_string(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn create_db(path: &Path, schema: &str) {
        let conn = Connection::open(path).unwrap();
        conn.execute_batch(schema).unwrap();
    }

    const FULL_SCHEMA: &str = "
        CREATE TABLE measurement (
            id INTEGER PRIMARY KEY,
            station TEXT,
            date TEXT,
            prcp FLOAT,
            tobs FLOAT
        );
        CREATE TABLE station (
            id INTEGER PRIMARY KEY,
            station TEXT,
            name TEXT,
            latitude FLOAT,
            longitude FLOAT,
            elevation FLOAT
        );
    ";

    #[test]
    fn open_validates_complete_schema() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("climate.sqlite");
        create_db(&path, FULL_SCHEMA);

        let store = Store::open(&path).unwrap();
        assert_eq!(store.path(), path);
    }

    #[test]
    fn open_rejects_missing_table() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("climate.sqlite");
        create_db(
            &path,
            "CREATE TABLE measurement (station TEXT, date TEXT, prcp FLOAT, tobs FLOAT);",
        );

        match Store::open(&path) {
            Err(StoreError::MissingTable(table)) => assert_eq!(table, "station"),
            other => panic!("expected MissingTable, got {other:?}"),
        }
    }

    #[test]
    fn open_rejects_missing_column() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("climate.sqlite");
        create_db(
            &path,
            "
            CREATE TABLE measurement (station TEXT, date TEXT, tobs FLOAT);
            CREATE TABLE station (station TEXT, name TEXT, latitude FLOAT,
                                  longitude FLOAT, elevation FLOAT);
            ",
        );

        match Store::open(&path) {
            Err(StoreError::MissingColumn { table, column }) => {
                assert_eq!(table, "measurement");
                assert_eq!(column, "prcp");
            }
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn open_fails_for_nonexistent_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.sqlite");

        assert!(matches!(Store::open(&path), Err(StoreError::Open { .. })));
    }

    #[test]
    fn measurements_bind_by_column_name() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("climate.sqlite");
        create_db(&path, FULL_SCHEMA);
        {
            let conn = Connection::open(&path).unwrap();
            conn.execute(
                "INSERT INTO measurement (station, date, prcp, tobs)
                 VALUES ('USC00519397', '2017-08-23', 0.08, 81.0),
                        ('USC00519397', '2017-08-22', NULL, NULL)",
                [],
            )
            .unwrap();
        }

        let store = Store::open(&path).unwrap();
        let conn = store.connect().unwrap();
        let rows = Measurement::load_all(&conn).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].station_id, "USC00519397");
        assert_eq!(crate::dates::format_date(rows[0].date), "2017-08-23");
        assert_eq!(rows[0].precipitation, Some(0.08));
        assert_eq!(rows[0].observed_temperature, Some(81.0));
        assert_eq!(rows[1].precipitation, None);
        assert_eq!(rows[1].observed_temperature, None);
    }

    #[test]
    fn stations_load_in_store_order() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("climate.sqlite");
        create_db(&path, FULL_SCHEMA);
        {
            let conn = Connection::open(&path).unwrap();
            conn.execute(
                "INSERT INTO station (station, name, latitude, longitude, elevation)
                 VALUES ('S1', 'WAIKIKI', 21.27, -157.82, 3.0),
                        ('S2', 'KANEOHE', 21.42, -157.80, 14.6)",
                [],
            )
            .unwrap();
        }

        let store = Store::open(&path).unwrap();
        let conn = store.connect().unwrap();
        let stations = Station::load_all(&conn).unwrap();

        assert_eq!(stations.len(), 2);
        assert_eq!(stations[0].station_id, "S1");
        assert_eq!(stations[0].name, "WAIKIKI");
        assert_eq!(stations[1].station_id, "S2");
        assert_eq!(stations[1].elevation, 14.6);
    }

    #[test]
    fn malformed_date_is_a_store_error_not_a_panic() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("climate.sqlite");
        create_db(&path, FULL_SCHEMA);
        {
            let conn = Connection::open(&path).unwrap();
            conn.execute(
                "INSERT INTO measurement (station, date, prcp, tobs)
                 VALUES ('S1', 'garbage', 0.1, 70.0)",
                [],
            )
            .unwrap();
        }

        let store = Store::open(&path).unwrap();
        let conn = store.connect().unwrap();
        assert!(Measurement::load_all(&conn).is_err());
    }
}
