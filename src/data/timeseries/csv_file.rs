//! CSV persistence for OHLCV series.
//!
//! Format: a header row with at least `Timestamp,Open,High,Low,Close,Volume`
//! (any order, case-insensitive, extra columns ignored). `Timestamp` is Unix
//! epoch seconds and may carry a fractional part.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::data::timeseries::error::LoadError;
use crate::domain::Candle;
use crate::models::OhlcvTimeSeries;
use crate::utils::TimeUtils;
use crate::utils::time_utils::epoch_sec_to_ms;

const TIMESTAMP: &str = "Timestamp";
const OPEN: &str = "Open";
const HIGH: &str = "High";
const LOW: &str = "Low";
const CLOSE: &str = "Close";
const VOLUME: &str = "Volume";

/// Row layout written by `save_to_path`.
#[derive(Serialize)]
struct CsvRow {
    #[serde(rename = "Timestamp")]
    timestamp_sec: i64,
    #[serde(rename = "Open")]
    open: f64,
    #[serde(rename = "High")]
    high: f64,
    #[serde(rename = "Low")]
    low: f64,
    #[serde(rename = "Close")]
    close: f64,
    #[serde(rename = "Volume")]
    volume: f64,
}

struct ColumnIndices {
    timestamp: usize,
    open: usize,
    high: usize,
    low: usize,
    close: usize,
    volume: usize,
}

impl ColumnIndices {
    fn from_headers(headers: &csv::StringRecord, path: &Path) -> Result<Self, LoadError> {
        let headers_lower: Vec<String> = headers.iter().map(|h| h.to_lowercase()).collect();
        let find = |column: &'static str| {
            let wanted = column.to_lowercase();
            headers_lower
                .iter()
                .position(|h| *h == wanted)
                .ok_or_else(|| LoadError::MissingColumn {
                    path: path.to_path_buf(),
                    column,
                })
        };

        Ok(Self {
            timestamp: find(TIMESTAMP)?,
            open: find(OPEN)?,
            high: find(HIGH)?,
            low: find(LOW)?,
            close: find(CLOSE)?,
            volume: find(VOLUME)?,
        })
    }
}

fn parse_number(
    record: &csv::StringRecord,
    index: usize,
    row: usize,
    column: &'static str,
) -> Result<f64, LoadError> {
    let value = record.get(index).unwrap_or("");
    value.parse::<f64>().map_err(|_| LoadError::InvalidNumber {
        row,
        column,
        value: value.to_string(),
    })
}

fn parse_timestamp_ms(record: &csv::StringRecord, index: usize, row: usize) -> Result<i64, LoadError> {
    let value = record.get(index).unwrap_or("");
    match value.parse::<f64>().ok().and_then(epoch_sec_to_ms) {
        Some(ms) => Ok(ms),
        None => Err(LoadError::InvalidTimestamp {
            row,
            value: value.to_string(),
        }),
    }
}

/// Reads the whole file, then sorts the records ascending by timestamp.
/// `row` numbers in errors are 1-based data rows (the header is not counted).
pub fn load_from_path(path: &Path, name: &str) -> Result<OhlcvTimeSeries, LoadError> {
    let csv_error = |source| LoadError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(csv_error)?;

    let headers = reader.headers().map_err(csv_error)?.clone();
    let columns = ColumnIndices::from_headers(&headers, path)?;

    let mut candles = Vec::new();
    for (i, result) in reader.records().enumerate() {
        let record = result.map_err(csv_error)?;
        let row = i + 1;

        candles.push(Candle::new(
            parse_timestamp_ms(&record, columns.timestamp, row)?,
            parse_number(&record, columns.open, row, OPEN)?,
            parse_number(&record, columns.high, row, HIGH)?,
            parse_number(&record, columns.low, row, LOW)?,
            parse_number(&record, columns.close, row, CLOSE)?,
            parse_number(&record, columns.volume, row, VOLUME)?,
        ));
    }

    if candles.is_empty() {
        return Err(LoadError::Empty {
            path: path.to_path_buf(),
        });
    }

    Ok(OhlcvTimeSeries::from_candles(name, candles))
}

/// Writes `series` in the format `load_from_path` reads. Timestamps are
/// truncated to whole seconds.
pub fn save_to_path(series: &OhlcvTimeSeries, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .context(format!("Failed to create directory: {}", parent.display()))?;
        }
    }

    let mut writer = csv::Writer::from_path(path)
        .context(format!("Failed to create file: {}", path.display()))?;

    for idx in 0..series.len() {
        let candle = series.get_candle(idx);
        writer
            .serialize(CsvRow {
                timestamp_sec: candle.timestamp_ms.div_euclid(TimeUtils::MS_IN_S),
                open: candle.open_price,
                high: candle.high_price,
                low: candle.low_price,
                close: candle.close_price,
                volume: candle.volume,
            })
            .context(format!("Failed to serialize row {} to: {}", idx, path.display()))?;
    }

    writer
        .flush()
        .context(format!("Failed to flush: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_sorts_and_converts_seconds() {
        let file = write_file(
            "Timestamp,Open,High,Low,Close,Volume\n\
             1325412120,4.60,4.61,4.58,4.59,2.5\n\
             1325412060.0,4.58,4.60,4.57,4.60,1.5\n",
        );

        let series = load_from_path(file.path(), "BTCUSD").unwrap();

        assert_eq!(series.name, "BTCUSD");
        assert_eq!(series.timestamps_ms, vec![1_325_412_060_000, 1_325_412_120_000]);
        assert_eq!(series.open_prices, vec![4.58, 4.60]);
        assert_eq!(series.volumes, vec![1.5, 2.5]);
        assert!(series.is_sorted_ascending());
    }

    #[test]
    fn test_load_accepts_any_column_order_and_case() {
        let file = write_file(
            "volume,close,low,high,open,TIMESTAMP,extra\n\
             10,4,1,5,2,1000,ignored\n",
        );

        let series = load_from_path(file.path(), "X").unwrap();
        let candle = series.get_candle(0);
        assert_eq!(candle, Candle::new(1_000_000, 2.0, 5.0, 1.0, 4.0, 10.0));
    }

    #[test]
    fn test_missing_column() {
        let file = write_file("Timestamp,Open,High,Low,Close\n1,1,1,1,1\n");
        let err = load_from_path(file.path(), "X").unwrap_err();
        assert!(matches!(err, LoadError::MissingColumn { column: "Volume", .. }));
    }

    #[test]
    fn test_invalid_cells() {
        let file = write_file("Timestamp,Open,High,Low,Close,Volume\nnot-a-time,1,1,1,1,1\n");
        let err = load_from_path(file.path(), "X").unwrap_err();
        assert!(matches!(err, LoadError::InvalidTimestamp { row: 1, .. }));

        let file = write_file(
            "Timestamp,Open,High,Low,Close,Volume\n1,1,1,1,1,1\n2,1,oops,1,1,1\n",
        );
        let err = load_from_path(file.path(), "X").unwrap_err();
        match err {
            LoadError::InvalidNumber { row, column, value } => {
                assert_eq!(row, 2);
                assert_eq!(column, "High");
                assert_eq!(value, "oops");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_unrepresentable_timestamp_is_invalid() {
        for value in ["-9300000000000000", "9300000000000000", "1e300"] {
            let file = write_file(&format!(
                "Timestamp,Open,High,Low,Close,Volume\n1,1,1,1,1,1\n{value},1,1,1,1,1\n"
            ));
            let err = load_from_path(file.path(), "X").unwrap_err();
            assert!(
                matches!(&err, LoadError::InvalidTimestamp { row: 2, value: v } if v == value),
                "{value}: {err}"
            );
        }
    }

    #[test]
    fn test_header_only_file_is_empty() {
        let file = write_file("Timestamp,Open,High,Low,Close,Volume\n");
        let err = load_from_path(file.path(), "X").unwrap_err();
        assert!(matches!(err, LoadError::Empty { .. }));
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("demo.csv");
        let series = OhlcvTimeSeries::from_candles(
            "X",
            vec![
                Candle::new(86_400_000, 1.25, 1.5, 1.0, 1.125, 1_000.0),
                Candle::new(172_800_000, 1.125, 2.0, 0.75, 1.75, 2_500.5),
            ],
        );

        save_to_path(&series, &path).unwrap();
        let loaded = load_from_path(&path, "X").unwrap();

        assert_eq!(loaded, series);
    }
}
