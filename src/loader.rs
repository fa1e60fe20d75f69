use crate::error::{PipelineError, Result};
use crate::regions::{self, DEFAULT_REGION};
use crate::types::{CountryRecord, RawRow, NAME_HEADER, YEARS};
use crate::util::parse_percent;
use csv::ReaderBuilder;
use encoding_rs::EUC_KR;
use std::collections::BTreeMap;
use std::fs;

/// Decode the raw file bytes to text. The source export uses the legacy
/// Korean cp949 encoding, but re-saved copies are commonly UTF-8, so valid
/// UTF-8 is taken as-is and everything else goes through the EUC-KR decoder.
fn decode(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(s) => s.to_string(),
        Err(_) => EUC_KR.decode(bytes).0.into_owned(),
    }
}

/// Read and schema-check the source CSV, returning the raw string rows.
///
/// Fails with `Load` when the file cannot be read, and with `Format` when
/// the header row is missing the name column or any year column, or when a
/// row cannot be deserialized.
pub fn read_raw(path: &str) -> Result<Vec<RawRow>> {
    let bytes = fs::read(path).map_err(|e| PipelineError::load(path, e))?;
    let text = decode(&bytes);

    let mut rdr = ReaderBuilder::new().from_reader(text.as_bytes());
    let headers = rdr
        .headers()
        .map_err(|e| PipelineError::format(format!("unreadable header row: {}", e)))?
        .clone();

    if !headers.iter().any(|h| h == NAME_HEADER) {
        return Err(PipelineError::format(format!(
            "missing required column '{}'",
            NAME_HEADER
        )));
    }
    for year in YEARS {
        if !headers.iter().any(|h| h == year.to_string()) {
            return Err(PipelineError::format(format!(
                "missing required year column '{}'",
                year
            )));
        }
    }

    let mut rows = Vec::new();
    for (idx, result) in rdr.deserialize::<RawRow>().enumerate() {
        // idx 0 is the first data row, i.e. line 2 of the file.
        let row = result
            .map_err(|e| PipelineError::format(format!("row {}: {}", idx + 2, e)))?;
        rows.push(row);
    }
    Ok(rows)
}

/// Convert raw rows into [`CountryRecord`]s with fractional shares.
///
/// Every year cell must parse as `"<number>%"`; a single malformed cell
/// fails the whole load so the caller never sees partially-parsed data.
/// Region starts as the default sentinel and is filled in by
/// [`annotate_region`].
pub fn normalize(rows: Vec<RawRow>) -> Result<Vec<CountryRecord>> {
    let mut records = Vec::with_capacity(rows.len());
    for row in rows {
        let mut shares = BTreeMap::new();
        for year in YEARS {
            let cell = row.year_cell(year).unwrap_or("");
            let frac = parse_percent(cell).ok_or_else(|| {
                PipelineError::format(format!(
                    "country '{}', year {}: '{}' is not a percentage",
                    row.name, year, cell
                ))
            })?;
            shares.insert(year, frac);
        }
        records.push(CountryRecord {
            name: row.name,
            region: DEFAULT_REGION.to_string(),
            shares,
        });
    }
    Ok(records)
}

/// Overwrite each record's region from the shared region table. Names absent
/// from the table keep the default sentinel, so region is never empty.
pub fn annotate_region(records: &mut [CountryRecord]) {
    for r in records.iter_mut() {
        r.region = regions::region_for(&r.name).to_string();
    }
}

/// The full pipeline: read, normalize, annotate. This is the one entry point
/// the CLI uses; the pieces stay public so each stage can be exercised on
/// its own.
pub fn load(path: &str) -> Result<Vec<CountryRecord>> {
    let rows = read_raw(path)?;
    let mut records = normalize(rows)?;
    annotate_region(&mut records);
    Ok(records)
}
