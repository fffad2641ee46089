//! CSV and JSON writers for projection series

use std::io::{self, Write};

use serde::Serialize;

use crate::scenario::ProjectionSeries;

/// Flat chart row, one per exit age and entry age
#[derive(Debug, Clone, Serialize)]
pub struct SeriesRow {
    pub exit_age: u32,
    pub entry_age: u32,
    pub periods: u32,
    pub net_contribution_basis: f64,
    pub net_proceeds: f64,
    pub absolute_return: f64,
    pub annualized_return: f64,
    pub reference_value: f64,
    pub reference_annualized_return: f64,
}

/// Flatten series into rows, in series order then entry age
pub fn series_rows(series: &[ProjectionSeries]) -> Vec<SeriesRow> {
    series
        .iter()
        .flat_map(|s| {
            s.points.iter().map(move |point| SeriesRow {
                exit_age: s.exit_age,
                entry_age: point.entry_age,
                periods: point.projection.periods,
                net_contribution_basis: point.projection.net_contribution_basis,
                net_proceeds: point.projection.net_proceeds,
                absolute_return: point.projection.absolute_return,
                annualized_return: point.projection.annualized_return,
                reference_value: point.reference_value,
                reference_annualized_return: point.reference_annualized_return,
            })
        })
        .collect()
}

pub fn write_series_csv<W: Write>(writer: W, series: &[ProjectionSeries]) -> Result<(), csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in series_rows(series) {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}

pub fn write_json<W: Write, T: Serialize + ?Sized>(writer: W, value: &T) -> Result<(), serde_json::Error> {
    serde_json::to_writer_pretty(writer, value)
}

/// Encoding of a series file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesFormat {
    Csv,
    Json,
}

/// Write the series and flush the writer, so buffered write errors surface here
pub fn write_series<W: Write>(mut writer: W, series: &[ProjectionSeries], format: SeriesFormat) -> io::Result<()> {
    match format {
        SeriesFormat::Csv => write_series_csv(&mut writer, series)?,
        SeriesFormat::Json => write_json(&mut writer, series)?,
    }
    writer.flush()
}
