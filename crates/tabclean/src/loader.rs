//! Input loading: format detection and parsing into a [`Grid`].
//!
//! The format is chosen purely by file extension. Delimited text goes
//! through the `csv` crate (with an optional `encoding_rs` decode step),
//! spreadsheets through `calamine`. Cells are tagged at parse time:
//! empty fields become the missing-marker, fields that parse as a finite
//! number become numeric, everything else stays text.

use crate::error::{ProcessError, Result};
use crate::grid::{Grid, Value};
use calamine::{Data, Reader, open_workbook_auto};
use csv::ReaderBuilder;
use encoding_rs::Encoding;
use std::collections::HashSet;
use std::path::Path;
use tracing::debug;

/// Recognized input formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// Comma-delimited text (`.csv`, `.txt`).
    Delimited,
    /// Excel spreadsheet (`.xls`, `.xlsx`).
    Spreadsheet,
}

impl InputFormat {
    /// Detect the format from the file extension, case-insensitively.
    pub fn detect(path: &Path) -> Result<InputFormat> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "csv" | "txt" => Ok(InputFormat::Delimited),
            "xls" | "xlsx" => Ok(InputFormat::Spreadsheet),
            _ => Err(ProcessError::UnsupportedFormat(format!(".{ext}"))),
        }
    }
}

/// Parses input files into a [`Grid`].
pub struct Loader;

impl Loader {
    /// Load a tabular file.
    ///
    /// `encoding` is an optional label override for delimited input;
    /// spreadsheet parsing ignores it.
    pub fn load(path: &Path, encoding: Option<&str>) -> Result<Grid> {
        let format = InputFormat::detect(path)?;
        debug!("Detected input format: {:?}", format);

        match format {
            InputFormat::Delimited => load_delimited(path, encoding),
            InputFormat::Spreadsheet => load_spreadsheet(path),
        }
    }
}

/// Tag one delimited field as a cell value.
///
/// Empty fields are the missing-marker. The finite check keeps textual
/// "nan"/"inf" spellings as text, so the cleaner can apply its
/// missing-token policy to them.
fn parse_field(field: &str) -> Value {
    if field.is_empty() {
        return Value::Missing;
    }
    if let Ok(n) = field.trim().parse::<f64>()
        && n.is_finite()
    {
        return Value::Number(n);
    }
    Value::Text(field.to_string())
}

/// Suffix repeated header names (`a`, `a_1`, `a_2`, ...) so every
/// column name is unique and addressable by name downstream.
fn unique_columns(raw: Vec<String>) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::with_capacity(raw.len());
    let mut columns = Vec::with_capacity(raw.len());
    for base in raw {
        let mut candidate = base.clone();
        let mut suffix = 1;
        while !seen.insert(candidate.clone()) {
            candidate = format!("{base}_{suffix}");
            suffix += 1;
        }
        columns.push(candidate);
    }
    columns
}

fn read_error(path: &Path, reason: impl std::fmt::Display) -> ProcessError {
    ProcessError::ReadError {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

/// Decode raw bytes into text, honoring an explicit encoding label.
///
/// Without a label, UTF-8 with lossy replacement is used so a stray byte
/// never aborts a whole run. With a label, decode errors are fatal since
/// the operator asked for that encoding specifically.
fn decode_bytes(path: &Path, bytes: &[u8], label: Option<&str>) -> Result<String> {
    match label {
        Some(label) => {
            let encoding = Encoding::for_label(label.as_bytes())
                .ok_or_else(|| read_error(path, format!("unknown encoding label '{label}'")))?;
            let (text, _, had_errors) = encoding.decode(bytes);
            if had_errors {
                return Err(read_error(
                    path,
                    format!("content is not valid {}", encoding.name()),
                ));
            }
            Ok(text.into_owned())
        }
        None => Ok(String::from_utf8_lossy(bytes).into_owned()),
    }
}

fn load_delimited(path: &Path, encoding: Option<&str>) -> Result<Grid> {
    let bytes = std::fs::read(path).map_err(|e| read_error(path, e))?;
    let text = decode_bytes(path, &bytes, encoding)?;

    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = reader.headers().map_err(|e| read_error(path, e))?.clone();
    let columns = unique_columns(
        headers
            .iter()
            .enumerate()
            .map(|(i, h)| {
                if h.is_empty() {
                    format!("column_{i}")
                } else {
                    h.to_string()
                }
            })
            .collect(),
    );

    let width = columns.len();
    let mut grid = Grid::new(columns);

    for record in reader.records() {
        let record = record.map_err(|e| read_error(path, e))?;
        let row: Vec<Value> = (0..width)
            .map(|i| record.get(i).map(parse_field).unwrap_or(Value::Missing))
            .collect();
        grid.push_row(row);
    }

    debug!("Loaded {} rows x {} columns", grid.height(), grid.width());
    Ok(grid)
}

/// Convert one spreadsheet cell into a cell value.
fn convert_cell(cell: &Data) -> Value {
    match cell {
        Data::Empty => Value::Missing,
        Data::String(s) if s.is_empty() => Value::Missing,
        Data::String(s) => Value::Text(s.clone()),
        Data::Float(f) => Value::Number(*f),
        Data::Int(i) => Value::Number(*i as f64),
        Data::Bool(b) => Value::Text(b.to_string()),
        Data::Error(_) => Value::Missing,
        other => Value::Text(other.to_string()),
    }
}

fn load_spreadsheet(path: &Path) -> Result<Grid> {
    let mut workbook = open_workbook_auto(path).map_err(|e| read_error(path, e))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| read_error(path, "no worksheet found"))?
        .map_err(|e| read_error(path, e))?;

    let mut rows = range.rows();
    let header = rows
        .next()
        .ok_or_else(|| read_error(path, "worksheet is empty"))?;

    let columns = unique_columns(
        header
            .iter()
            .enumerate()
            .map(|(i, cell)| match cell {
                Data::Empty => format!("column_{i}"),
                Data::String(s) if s.is_empty() => format!("column_{i}"),
                Data::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect(),
    );

    let mut grid = Grid::new(columns);
    for row in rows {
        grid.push_row(row.iter().map(convert_cell).collect());
    }

    debug!("Loaded {} rows x {} columns", grid.height(), grid.width());
    Ok(grid)
}
