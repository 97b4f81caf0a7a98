//! Analytical queries over the climate store
//!
//! The engine is the core of the service: it derives the most recent
//! observation date, computes a trailing 12-month window from it, finds the
//! most observation-dense station, and aggregates temperatures over
//! caller-supplied date ranges.
//!
//! Every operation is a pure read. The engine holds no cache and no open
//! connection: each call acquires a fresh read-only connection, re-reads the
//! rows it needs, and drops the connection before returning. The store may
//! be updated externally between requests, so the latest date is recomputed
//! per call rather than remembered.

pub mod error;

pub use error::{QueryError, QueryResult};

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::dates::subtract_days;
use crate::store::{Measurement, Station, Store};

/// Length of the trailing observation window, in days.
///
/// The window is exclusive on the lower bound: a reading dated exactly
/// `latest - 365` days falls outside it.
pub const TRAILING_WINDOW_DAYS: i64 = 365;

/// One `(date, precipitation)` reading inside the trailing window.
#[derive(Debug, Clone, PartialEq)]
pub struct PrecipReading {
    pub date: NaiveDate,
    pub precipitation: Option<f64>,
}

/// One `(date, temperature)` observation for a single station.
#[derive(Debug, Clone, PartialEq)]
pub struct TemperatureReading {
    pub date: NaiveDate,
    pub temperature: Option<f64>,
}

/// Min/avg/max of observed temperatures over a date range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemperatureStats {
    pub min: f64,
    pub avg: f64,
    pub max: f64,
}

/// Read-only query engine over the measurement and station collections.
///
/// The store handle is injected at construction; there is no global
/// connection state.
#[derive(Debug, Clone)]
pub struct QueryEngine {
    store: Store,
}

impl QueryEngine {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// The maximum observation date across all measurements.
    pub fn latest_date(&self) -> QueryResult<NaiveDate> {
        let conn = self.store.connect()?;
        let measurements = Measurement::load_all(&conn)?;
        latest_of(&measurements)
    }

    /// All `(date, precipitation)` readings from the trailing 12 months,
    /// across every station, in store row order.
    ///
    /// Multiple stations report on the same date; each row stays a distinct
    /// entry, nothing is merged or deduplicated.
    pub fn precipitation_window(&self) -> QueryResult<Vec<PrecipReading>> {
        let conn = self.store.connect()?;
        let measurements = Measurement::load_all(&conn)?;
        let cutoff = subtract_days(latest_of(&measurements)?, TRAILING_WINDOW_DAYS);

        Ok(measurements
            .into_iter()
            .filter(|m| m.date > cutoff)
            .map(|m| PrecipReading {
                date: m.date,
                precipitation: m.precipitation,
            })
            .collect())
    }

    /// Every station id, one entry per station, in store row order.
    pub fn station_ids(&self) -> QueryResult<Vec<String>> {
        let conn = self.store.connect()?;
        let stations = Station::load_all(&conn)?;
        Ok(stations.into_iter().map(|s| s.station_id).collect())
    }

    /// The station with the most measurement rows.
    ///
    /// On an exact count tie the station whose first measurement appears
    /// earliest in store order wins, so the result is deterministic for any
    /// fixed snapshot of the data.
    pub fn most_active_station(&self) -> QueryResult<String> {
        let conn = self.store.connect()?;
        let measurements = Measurement::load_all(&conn)?;

        let mut tallies: HashMap<&str, (usize, usize)> = HashMap::new();
        for (index, m) in measurements.iter().enumerate() {
            let entry = tallies.entry(m.station_id.as_str()).or_insert((0, index));
            entry.0 += 1;
        }

        tallies
            .into_iter()
            .max_by(|(_, (count_a, first_a)), (_, (count_b, first_b))| {
                count_a.cmp(count_b).then(first_b.cmp(first_a))
            })
            .map(|(station, _)| station.to_string())
            .ok_or(QueryError::NoData)
    }

    /// Temperature observations for one station over the trailing 12 months,
    /// in store row order.
    ///
    /// Null temperatures are observations too and are kept; only the
    /// aggregate in [`temperature_stats`](Self::temperature_stats) skips them.
    pub fn recent_observations(&self, station_id: &str) -> QueryResult<Vec<TemperatureReading>> {
        let conn = self.store.connect()?;
        let measurements = Measurement::load_all(&conn)?;
        let cutoff = subtract_days(latest_of(&measurements)?, TRAILING_WINDOW_DAYS);

        Ok(measurements
            .into_iter()
            .filter(|m| m.station_id == station_id && m.date > cutoff)
            .map(|m| TemperatureReading {
                date: m.date,
                temperature: m.observed_temperature,
            })
            .collect())
    }

    /// Min/avg/max of non-null observed temperatures where `date >= start`
    /// and, when given, `date <= end`. Both bounds are inclusive.
    ///
    /// Returns [`QueryError::NoData`] when no qualifying rows exist; callers
    /// must not read an all-zero aggregate out of an empty range.
    pub fn temperature_stats(
        &self,
        start: NaiveDate,
        end: Option<NaiveDate>,
    ) -> QueryResult<TemperatureStats> {
        let conn = self.store.connect()?;
        let measurements = Measurement::load_all(&conn)?;

        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut sum = 0.0;
        let mut count = 0usize;

        for m in &measurements {
            if m.date < start {
                continue;
            }
            if let Some(end) = end {
                if m.date > end {
                    continue;
                }
            }
            let Some(temperature) = m.observed_temperature else {
                continue;
            };
            min = min.min(temperature);
            max = max.max(temperature);
            sum += temperature;
            count += 1;
        }

        if count == 0 {
            return Err(QueryError::NoData);
        }

        Ok(TemperatureStats {
            min,
            avg: sum / count as f64,
            max,
        })
    }
}

fn latest_of(measurements: &[Measurement]) -> QueryResult<NaiveDate> {
    measurements
        .iter()
        .map(|m| m.date)
        .max()
        .ok_or(QueryError::NoData)
}
