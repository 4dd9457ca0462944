//! Result file format for batch decoding runs
//!
//! Each closed diagram is written as `mosaic || classification || pd` and the
//! file ends with a sentinel line. A file without the sentinel was interrupted
//! while being written and is treated as incomplete.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use log::warn;
use rayon::prelude::*;

use crate::algorithm::assembler::PdCode;
use crate::algorithm::decoder::{Decoding, decode};
use crate::analysis::statistics::BatchSummary;
use crate::io::configuration::{END_RESULT_SENTINEL, RECORD_SEPARATOR};
use crate::io::error::{CatalogError, CatalogResult, MosaicError, file_system_error};

/// One closed diagram stored in a result file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogRecord {
    /// Mosaic string as read from the input
    pub mosaic: String,
    /// Its classification, always a closed diagram
    pub decoding: Decoding,
}

impl CatalogRecord {
    /// Build a record if `decoding` is worth cataloguing
    pub fn new(mosaic: &str, decoding: &Decoding) -> Option<Self> {
        decoding.is_closed_diagram().then(|| Self {
            mosaic: mosaic.to_string(),
            decoding: decoding.clone(),
        })
    }

    /// Text form written to result files
    pub fn to_line(&self) -> String {
        let pd = self
            .decoding
            .pd_code()
            .map_or_else(|| PdCode::default().to_string(), ToString::to_string);
        [self.mosaic.as_str(), self.decoding.label(), pd.as_str()].join(RECORD_SEPARATOR)
    }

    /// Parse a result file line
    ///
    /// # Errors
    ///
    /// Returns a description of the problem if the line is not a record
    pub fn from_line(line: &str) -> std::result::Result<Self, String> {
        let fields: Vec<&str> = line.split(RECORD_SEPARATOR).map(str::trim).collect();
        let [mosaic, label, pd] = fields.as_slice() else {
            return Err(format!("expected 3 fields, found {}", fields.len()));
        };

        let decoding = match *label {
            "unknot" => Decoding::Unknot,
            "knot" => Decoding::Knot(pd.parse().map_err(|error| format!("{error}"))?),
            other => return Err(format!("unknown classification '{other}'")),
        };

        Ok(Self {
            mosaic: (*mosaic).to_string(),
            decoding,
        })
    }
}

/// Read mosaic strings from a list file, one per line
///
/// Lines are trimmed and blank lines are skipped.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or read
pub fn read_mosaic_file(path: &Path) -> CatalogResult<Vec<String>> {
    let file = File::open(path).map_err(file_system_error(path, "open"))?;
    let mut mosaics = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = line.map_err(file_system_error(path, "read"))?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            mosaics.push(trimmed.to_string());
        }
    }
    Ok(mosaics)
}

/// Decode every mosaic on the current rayon pool, keeping input order
pub fn decode_batch(mosaics: &[String]) -> Vec<Result<Decoding, MosaicError>> {
    decode_batch_with(mosaics, || {})
}

/// Decode every mosaic in parallel, calling `on_decoded` after each one
pub fn decode_batch_with<F>(mosaics: &[String], on_decoded: F) -> Vec<Result<Decoding, MosaicError>>
where
    F: Fn() + Sync,
{
    mosaics
        .par_iter()
        .map(|mosaic| {
            let outcome = decode(mosaic);
            on_decoded();
            outcome
        })
        .collect()
}

/// Write the closed diagrams of a decoded batch, followed by the sentinel
///
/// # Errors
///
/// Returns an error if the file cannot be created or written
pub fn write_result_file(
    path: &Path,
    mosaics: &[String],
    outcomes: &[Result<Decoding, MosaicError>],
) -> CatalogResult<BatchSummary> {
    let file = File::create(path).map_err(file_system_error(path, "create"))?;
    let mut writer = BufWriter::new(file);
    let mut summary = BatchSummary::new();

    for (mosaic, outcome) in mosaics.iter().zip(outcomes) {
        summary.record(outcome);
        if let Some(record) = outcome
            .as_ref()
            .ok()
            .and_then(|decoding| CatalogRecord::new(mosaic, decoding))
        {
            writeln!(writer, "{}", record.to_line()).map_err(file_system_error(path, "write"))?;
        }
    }

    write!(writer, "{END_RESULT_SENTINEL}").map_err(file_system_error(path, "write"))?;
    writer.flush().map_err(file_system_error(path, "flush"))?;
    Ok(summary)
}

/// Load the records of a result file and whether it was completely written
///
/// # Errors
///
/// Returns an error if the file cannot be read or a line before the sentinel
/// is not a record
pub fn load_result_file(path: &Path) -> CatalogResult<(Vec<CatalogRecord>, bool)> {
    let file = File::open(path).map_err(file_system_error(path, "open"))?;
    let mut records = Vec::new();

    for (index, line) in BufReader::new(file).lines().enumerate() {
        let line = line.map_err(file_system_error(path, "read"))?;
        let trimmed = line.trim();
        if trimmed == END_RESULT_SENTINEL {
            return Ok((records, true));
        }
        if trimmed.is_empty() {
            continue;
        }
        let record = CatalogRecord::from_line(trimmed).map_err(|reason| {
            CatalogError::MalformedRecord {
                path: path.to_path_buf(),
                line: index + 1,
                reason,
            }
        })?;
        records.push(record);
    }

    warn!("{} ends without {END_RESULT_SENTINEL}", path.display());
    Ok((records, false))
}

/// Whether `path` holds a completely written result file
pub fn is_complete_result_file(path: &Path) -> bool {
    path.is_file() && load_result_file(path).is_ok_and(|(_, complete)| complete)
}
