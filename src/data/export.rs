use std::path::Path;

use serde::Serialize;
use thiserror::Error;

use super::model::{Country, CountryDataset};

// ---------------------------------------------------------------------------
// CSV export with display header labels
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("serializing CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("writing CSV file: {0}")]
    Io(#[from] std::io::Error),
}

/// One exported row. The serde renames are the fixed display header labels;
/// numeric values serialize in default decimal form with no rounding
/// (display-time rounding is a presentation concern, not part of the file).
#[derive(Debug, Serialize)]
struct ExportRow<'a> {
    #[serde(rename = "Country")]
    country: &'a str,
    #[serde(rename = "Region")]
    region: &'static str,
    #[serde(rename = "World Rank")]
    rank: u32,
    #[serde(rename = "Freedom Score")]
    score: f64,
    #[serde(rename = "GDP PPP (USD)")]
    gdp_ppp: f64,
    #[serde(rename = "Population (M)")]
    population: f64,
    #[serde(rename = "Unemployment %")]
    unemployment: f64,
    #[serde(rename = "Inflation %")]
    inflation: f64,
    #[serde(rename = "Financial Freedom")]
    financial_freedom: f64,
    #[serde(rename = "Monetary Freedom")]
    monetary_freedom: f64,
    #[serde(rename = "5yr GDP Growth %")]
    gdp_growth_5yr: f64,
}

impl<'a> From<&'a Country> for ExportRow<'a> {
    fn from(c: &'a Country) -> Self {
        ExportRow {
            country: c.name,
            region: c.region.label(),
            rank: c.rank,
            score: c.score,
            gdp_ppp: c.gdp_ppp,
            population: c.population,
            unemployment: c.unemployment,
            inflation: c.inflation,
            financial_freedom: c.financial_freedom,
            monetary_freedom: c.monetary_freedom,
            gdp_growth_5yr: c.gdp_growth_5yr,
        }
    }
}

/// Header labels in column order, for the empty-subset case where the
/// serde-driven header would otherwise never be written.
const HEADER: [&str; 11] = [
    "Country",
    "Region",
    "World Rank",
    "Freedom Score",
    "GDP PPP (USD)",
    "Population (M)",
    "Unemployment %",
    "Inflation %",
    "Financial Freedom",
    "Monetary Freedom",
    "5yr GDP Growth %",
];

/// Serialize the given subset (by index, in the given order) to CSV with a
/// header row.
pub fn csv_string(dataset: &CountryDataset, indices: &[usize]) -> Result<String, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    if indices.is_empty() {
        // The serde-driven header is only emitted on the first row.
        writer.write_record(HEADER)?;
    }
    for &i in indices {
        writer.serialize(ExportRow::from(dataset.get(i)))?;
    }
    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    // The writer only ever receives valid UTF-8.
    Ok(String::from_utf8(bytes).expect("csv output is UTF-8"))
}

/// Write the subset to a CSV file at `path`.
pub fn write_csv_file(
    dataset: &CountryDataset,
    indices: &[usize],
    path: &Path,
) -> Result<(), ExportError> {
    let csv = csv_string(dataset, indices)?;
    std::fs::write(path, csv)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::{filtered_indices, FilterCriteria};
    use crate::data::model::Region;

    #[test]
    fn header_row_uses_display_labels() {
        let ds = CountryDataset::embedded();
        let out = csv_string(&ds, &[0]).unwrap();
        let header = out.lines().next().unwrap();
        assert_eq!(
            header,
            "Country,Region,World Rank,Freedom Score,GDP PPP (USD),Population (M),\
             Unemployment %,Inflation %,Financial Freedom,Monetary Freedom,5yr GDP Growth %"
        );
    }

    #[test]
    fn round_trip_preserves_rows_and_values() {
        let ds = CountryDataset::embedded();
        let criteria = FilterCriteria {
            region: Some(Region::Americas),
            score_range: (0.0, 100.0),
            top_n: 20,
        };
        let indices = filtered_indices(&ds, &criteria);
        let out = csv_string(&ds, &indices).unwrap();

        let mut reader = csv::Reader::from_reader(out.as_bytes());
        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), indices.len());

        for (row, &i) in rows.iter().zip(&indices) {
            let c = ds.get(i);
            assert_eq!(&row[0], c.name);
            assert_eq!(&row[1], c.region.label());
            assert_eq!(row[2].parse::<u32>().unwrap(), c.rank);
            assert!((row[3].parse::<f64>().unwrap() - c.score).abs() < 1e-9);
            assert!((row[4].parse::<f64>().unwrap() - c.gdp_ppp).abs() < 1e-9);
            assert!((row[7].parse::<f64>().unwrap() - c.inflation).abs() < 1e-9);
            assert!((row[10].parse::<f64>().unwrap() - c.gdp_growth_5yr).abs() < 1e-9);
        }
    }

    #[test]
    fn empty_subset_exports_header_only() {
        let ds = CountryDataset::embedded();
        let out = csv_string(&ds, &[]).unwrap();
        assert_eq!(out.lines().count(), 1);

        // Same header as the serde-driven path.
        let populated = csv_string(&ds, &[0]).unwrap();
        assert_eq!(out.lines().next(), populated.lines().next());
    }
}
