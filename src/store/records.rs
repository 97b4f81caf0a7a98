//! Record shapes bound from the store
//!
//! The two tables are an external, fixed contract: record shapes are
//! declared here at compile time and rows are mapped by column name, never
//! by physical position. No runtime schema reflection.

use chrono::NaiveDate;
use rusqlite::types::Type;
use rusqlite::{Connection, Row};

use crate::dates::parse_date;
use crate::store::error::StoreResult;

/// Table holding one row per station-day of observations.
pub const MEASUREMENT_TABLE: &str = "measurement";

/// Columns the measurement table must provide.
pub const MEASUREMENT_COLUMNS: &[&str] = &["station", "date", "prcp", "tobs"];

/// Table holding one row per weather station.
pub const STATION_TABLE: &str = "station";

/// Columns the station table must provide.
pub const STATION_COLUMNS: &[&str] = &["station", "name", "latitude", "longitude", "elevation"];

/// One station-day of observations.
///
/// `(station_id, date)` is unique per station, not globally: several
/// stations report on the same calendar day.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    pub station_id: String,
    pub date: NaiveDate,
    /// Precipitation for the day; null when not recorded.
    pub precipitation: Option<f64>,
    /// Observed temperature for the day; null when not recorded.
    pub observed_temperature: Option<f64>,
}

impl Measurement {
    /// Load every measurement row in store order.
    pub fn load_all(conn: &Connection) -> StoreResult<Vec<Measurement>> {
        let mut stmt =
            conn.prepare_cached("SELECT station, date, prcp, tobs FROM measurement")?;
        let rows = stmt.query_map([], Self::from_row)?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Measurement> {
        let raw_date: String = row.get("date")?;
        let date = parse_date(&raw_date).map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(1, Type::Text, Box::new(e))
        })?;

        Ok(Measurement {
            station_id: row.get("station")?,
            date,
            precipitation: row.get("prcp")?,
            observed_temperature: row.get("tobs")?,
        })
    }
}

/// One weather station.
#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    pub station_id: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub elevation: f64,
}

impl Station {
    /// Load every station row in store order.
    pub fn load_all(conn: &Connection) -> StoreResult<Vec<Station>> {
        let mut stmt = conn
            .prepare_cached("SELECT station, name, latitude, longitude, elevation FROM station")?;
        let rows = stmt.query_map([], |row| {
            Ok(Station {
                station_id: row.get("station")?,
                name: row.get("name")?,
                latitude: row.get("latitude")?,
                longitude: row.get("longitude")?,
                elevation: row.get("elevation")?,
            })
        })?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }
}
