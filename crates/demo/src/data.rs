// File: crates/demo/src/data.rs
// Summary: Load a dataset from CSV: epoch-ms timestamp column followed by one column per series.

use anyhow::{Context, Result};
use std::path::Path;
use stockline_core::theme::NICE_COLORS;
use stockline_core::{Dataset, Point, Series};
use tracing::{info, warn};

pub fn load_dataset_csv(path: &Path) -> Result<Dataset> {
    let rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;
    let label = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("dataset")
        .to_string();
    read_dataset(rdr, label)
}

pub fn read_dataset<R: std::io::Read>(mut rdr: csv::Reader<R>, label: String) -> Result<Dataset> {
    let headers = rdr.headers()?.clone();
    if headers.len() < 2 {
        anyhow::bail!("expected a timestamp column and at least one series column, got {} columns", headers.len());
    }

    let mut dataset = Dataset::new(label);
    for (i, name) in headers.iter().skip(1).enumerate() {
        dataset.add_series(Series::new(name.trim(), NICE_COLORS[i % NICE_COLORS.len()], Vec::new()));
    }

    for (row, rec) in rdr.records().enumerate() {
        let rec = rec.with_context(|| format!("reading row {}", row + 1))?;
        let Some(ts) = rec.get(0).and_then(|s| s.trim().parse::<i64>().ok()) else {
            warn!(row = row + 1, "skipping row with unparseable timestamp");
            continue;
        };
        for (series, cell) in dataset.series.iter_mut().zip(rec.iter().skip(1)) {
            let cell = cell.trim();
            if cell.is_empty() {
                continue;
            }
            match cell.parse::<f64>() {
                Ok(v) => series.points.push(Point::new(ts, v)),
                Err(_) => warn!(row = row + 1, series = %series.label, cell, "skipping unparseable value"),
            }
        }
    }

    info!(
        series = dataset.series.len(),
        points = dataset.points().count(),
        "loaded csv dataset"
    );
    Ok(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(text: &str) -> Result<Dataset> {
        read_dataset(csv::Reader::from_reader(text.as_bytes()), "t".into())
    }

    #[test]
    fn one_series_per_column() {
        let ds = read("ts,temp,hum\n0,1.5,40\n10,2.5,\n20,x,42\n").unwrap();
        assert_eq!(ds.series.len(), 2);
        assert_eq!(ds.series[0].label, "temp");
        assert_eq!(ds.series[0].points, vec![Point::new(0, 1.5), Point::new(10, 2.5)]);
        assert_eq!(ds.series[1].points, vec![Point::new(0, 40.0), Point::new(20, 42.0)]);
    }

    #[test]
    fn bad_timestamp_rows_are_skipped() {
        let ds = read("ts,v\nnope,1\n5,2\n").unwrap();
        assert_eq!(ds.series[0].points, vec![Point::new(5, 2.0)]);
    }

    #[test]
    fn needs_a_series_column() {
        assert!(read("ts\n1\n").is_err());
    }
}
