//! Match history ingestion from CSV

use crate::error::{MmrError, Result};
use crate::io::dates::parse_match_date;
use crate::types::MatchRecord;
use anyhow::Context;
use std::path::Path;
use tracing::{info, warn};

/// Columns every input file must carry
pub const REQUIRED_COLUMNS: [&str; 6] = ["Date", "Div", "HomeTeam", "AwayTeam", "FTHG", "FTAG"];

/// Records accepted from an input file, sorted by date
#[derive(Debug, Clone)]
pub struct LoadedMatches {
    pub records: Vec<MatchRecord>,
    /// Data rows seen in the file
    pub rows_read: usize,
    /// Rows dropped because their date could not be parsed
    pub rows_dropped: usize,
}

/// Positions of the required columns in the header row
struct ColumnIndex {
    date: usize,
    division: usize,
    home_team: usize,
    away_team: usize,
    home_goals: usize,
    away_goals: usize,
}

impl ColumnIndex {
    fn from_headers(headers: &csv::StringRecord) -> Result<Self> {
        let position = |column: &str| -> Result<usize> {
            headers
                .iter()
                .position(|header| header.trim_start_matches('\u{feff}').trim() == column)
                .ok_or_else(|| {
                    MmrError::MissingColumn {
                        column: column.to_string(),
                    }
                    .into()
                })
        };

        Ok(Self {
            date: position("Date")?,
            division: position("Div")?,
            home_team: position("HomeTeam")?,
            away_team: position("AwayTeam")?,
            home_goals: position("FTHG")?,
            away_goals: position("FTAG")?,
        })
    }
}

/// Load matches from a CSV file on disk
pub fn read_matches_from_path(path: &Path) -> Result<LoadedMatches> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("Failed to open input file: {}", path.display()))?;
    read_matches(file).with_context(|| format!("Failed to load matches from {}", path.display()))
}

/// Load matches from any CSV source
///
/// Rows with an unparseable date are dropped; any other defect in a row
/// fails the whole load. The result is stably sorted by date.
pub fn read_matches<R: std::io::Read>(source: R) -> Result<LoadedMatches> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(source);

    let columns = ColumnIndex::from_headers(reader.headers()?)?;

    let mut records = Vec::new();
    let mut rows_read = 0;
    let mut rows_dropped = 0;

    for (index, row) in reader.records().enumerate() {
        let row = row?;
        // 1-based, counting the header line
        let line = index + 2;
        rows_read += 1;

        let field = |idx: usize| row.get(idx).unwrap_or("").trim();

        let Some(date) = parse_match_date(field(columns.date)) else {
            rows_dropped += 1;
            continue;
        };

        let required = |idx: usize, name: &str| -> Result<String> {
            let value = field(idx);
            if value.is_empty() {
                return Err(MmrError::MissingField {
                    row: line,
                    field: name.to_string(),
                }
                .into());
            }
            Ok(value.to_string())
        };

        records.push(MatchRecord {
            date,
            division: required(columns.division, "Div")?,
            home_team: required(columns.home_team, "HomeTeam")?,
            away_team: required(columns.away_team, "AwayTeam")?,
            home_goals: parse_goals(field(columns.home_goals), line, "FTHG")?,
            away_goals: parse_goals(field(columns.away_goals), line, "FTAG")?,
        });
    }

    if rows_dropped > 0 {
        warn!(
            "Dropped {} of {} rows with unparseable dates",
            rows_dropped, rows_read
        );
    }

    if records.is_empty() {
        let reason = if rows_read == 0 {
            "input has no data rows".to_string()
        } else {
            format!("all {} rows had unparseable dates in 'Date' column", rows_read)
        };
        return Err(MmrError::EmptyInput { reason }.into());
    }

    records.sort_by_key(|record| record.date);
    info!("Loaded {} matches", records.len());

    Ok(LoadedMatches {
        records,
        rows_read,
        rows_dropped,
    })
}

/// Goals cell to a count; blank counts as zero, "2.0" as 2
fn parse_goals(raw: &str, line: usize, column: &str) -> Result<u32> {
    if raw.is_empty() {
        return Ok(0);
    }

    let invalid = || MmrError::InvalidGoals {
        row: line,
        column: column.to_string(),
        value: raw.to_string(),
    };

    let value: f64 = raw.parse().map_err(|_| invalid())?;
    if !value.is_finite() || value < 0.0 || value > f64::from(u32::MAX) {
        return Err(invalid().into());
    }

    Ok(value.trunc() as u32)
}
