use std::fs::File;
use std::io::Read;
use std::path::Path;

use clap::ValueEnum;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::{DonutError, Result};
use crate::models::{Berry, canonical_name};

/// What a missing `Count` cell means.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum MissingCount {
    /// No stock: the berry is unusable when inventory is enforced.
    #[default]
    Zero,
    /// No cap on how many units may be used.
    Unlimited,
}

/// Berries read from a catalog plus the number of rows that were dropped.
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    pub berries: Vec<Berry>,
    pub skipped: usize,
}

/// One CSV row as written by the capture tool or by hand.
#[derive(Debug, Deserialize)]
struct BerryRecord {
    #[serde(rename = "Index", default)]
    index: Option<u32>,

    #[serde(rename = "Berry Name", alias = "Name")]
    name: String,

    #[serde(rename = "Sweet Score", alias = "Sweet")]
    sweet: i64,

    #[serde(rename = "Spicy Score", alias = "Spicy")]
    spicy: i64,

    #[serde(rename = "Sour Score", alias = "Sour")]
    sour: i64,

    #[serde(rename = "Bitter Score", alias = "Bitter")]
    bitter: i64,

    #[serde(rename = "Fresh Score", alias = "Fresh")]
    fresh: i64,

    #[serde(rename = "Levels")]
    levels: u32,

    #[serde(rename = "Calories")]
    calories: u32,

    #[serde(rename = "Count", alias = "Inventory", default)]
    count: Option<u32>,
}

impl BerryRecord {
    fn into_berry(self, ordinal: u32, line: u64, missing: MissingCount) -> Result<Berry> {
        let name = canonical_name(&self.name);
        if name.is_empty() {
            return Err(DonutError::MalformedRecord {
                line,
                reason: "berry name is blank".to_string(),
            });
        }

        let count = match (self.count, missing) {
            (Some(c), _) => Some(c),
            (None, MissingCount::Zero) => Some(0),
            (None, MissingCount::Unlimited) => None,
        };

        Ok(Berry::new(
            self.index.unwrap_or(ordinal),
            name,
            [self.sweet, self.spicy, self.sour, self.bitter, self.fresh],
            self.levels,
            self.calories,
            count,
        ))
    }
}

/// Load berries from a CSV file.
pub fn load_berries<P: AsRef<Path>>(path: P, missing: MissingCount) -> Result<LoadReport> {
    let file = File::open(path.as_ref())?;
    debug!(path = %path.as_ref().display(), "reading berry catalog");
    read_berries(file, missing)
}

/// Read berries from CSV with a header row.
///
/// Rows with a blank name or a missing or non-numeric field are skipped and
/// counted; the rest of the file still loads. Duplicate names (case-insensitive)
/// keep the last row, in the position of the first.
pub fn read_berries<R: Read>(reader: R, missing: MissingCount) -> Result<LoadReport> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);
    rdr.headers()?;

    let mut report = LoadReport::default();

    for (row, result) in rdr.deserialize::<BerryRecord>().enumerate() {
        let ordinal = row as u32 + 1;
        let parsed = match result {
            Ok(record) => {
                // Header is line 1.
                let line = row as u64 + 2;
                record.into_berry(ordinal, line, missing)
            }
            Err(e) if e.is_io_error() => return Err(e.into()),
            Err(e) => Err(malformed(&e, row)),
        };

        match parsed {
            Ok(berry) => {
                if let Some(existing) = report.berries.iter_mut().find(|b| **b == berry) {
                    warn!(name = %berry.name, "duplicate berry, keeping the later row");
                    *existing = berry;
                } else {
                    report.berries.push(berry);
                }
            }
            Err(e) => {
                warn!("skipping record: {}", e);
                report.skipped += 1;
            }
        }
    }

    debug!(
        loaded = report.berries.len(),
        skipped = report.skipped,
        "berry catalog read"
    );
    Ok(report)
}

fn malformed(err: &csv::Error, row: usize) -> DonutError {
    let line = err
        .position()
        .map(|p| p.line())
        .unwrap_or(row as u64 + 2);
    let reason = match err.kind() {
        csv::ErrorKind::Deserialize { err, .. } => err.to_string(),
        _ => err.to_string(),
    };
    DonutError::MalformedRecord { line, reason }
}
