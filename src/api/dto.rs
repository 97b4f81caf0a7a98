//! API response DTOs
//!
//! Serde shapes matching the wire contract exactly: the tobs and temp
//! endpoints use capitalized, space-separated JSON keys, and the
//! precipitation endpoint emits one single-key object per source row.

use chrono::NaiveDate;
use serde::Serialize;
use serde_json::{json, Map, Value};

use crate::dates::format_date;
use crate::query::{PrecipReading, TemperatureReading, TemperatureStats};

/// One temperature observation: `{"Date": ..., "Observed Temperature": ...}`
#[derive(Debug, Serialize)]
pub struct ObservationDto {
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    #[serde(rename = "Observed Temperature")]
    pub observed_temperature: Option<f64>,
}

impl From<TemperatureReading> for ObservationDto {
    fn from(reading: TemperatureReading) -> Self {
        Self {
            date: reading.date,
            observed_temperature: reading.temperature,
        }
    }
}

/// Temperature aggregate response body.
#[derive(Debug, Serialize)]
pub struct TemperatureStatsDto {
    #[serde(rename = "Minimum Temperature")]
    pub min: f64,
    #[serde(rename = "Average Temperature")]
    pub avg: f64,
    #[serde(rename = "Maximum Temperature")]
    pub max: f64,
}

impl From<TemperatureStats> for TemperatureStatsDto {
    fn from(stats: TemperatureStats) -> Self {
        Self {
            min: stats.min,
            avg: stats.avg,
            max: stats.max,
        }
    }
}

/// Build the precipitation body: a JSON array of `{date: precipitation}`
/// objects, one per source row.
///
/// The date is the only key, so when several stations report on the same
/// day the date repeats across elements and the station cannot be recovered
/// from the payload. Kept as-is for wire compatibility.
pub fn precipitation_pairs(readings: Vec<PrecipReading>) -> Vec<Value> {
    readings
        .into_iter()
        .map(|r| {
            let mut pair = Map::with_capacity(1);
            pair.insert(format_date(r.date), json!(r.precipitation));
            Value::Object(pair)
        })
        .collect()
}
