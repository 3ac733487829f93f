use crate::error::{PgResult, PhiError};
use crate::geometry::Selection;
use crate::report::Report;
use crate::scorer::Scorer;
use rayon::prelude::*;
use serde::Deserialize;
use std::cmp::Ordering;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{info, warn};

/// CSV row shape: `label,x_start,y_start,x_end,y_end`.
#[derive(Debug, Deserialize)]
struct RawRow {
    label: String,
    x_start: u32,
    y_start: u32,
    x_end: u32,
    y_end: u32,
}

#[derive(Debug)]
pub struct BatchRow {
    /// 1-based line in the source file (header is line 1).
    pub line: u64,
    pub label: String,
    pub selection: PgResult<Selection>,
}

#[derive(Debug)]
pub struct BatchEntry {
    pub line: u64,
    pub label: String,
    pub outcome: PgResult<Report>,
}

impl BatchEntry {
    pub fn score(&self) -> Option<u8> {
        self.outcome.as_ref().ok().map(|r| r.measurement.score)
    }

    pub fn to_json_value(&self) -> PgResult<serde_json::Value> {
        Ok(match &self.outcome {
            Ok(report) => serde_json::to_value(report)?,
            Err(e) => serde_json::json!({
                "label": self.label,
                "line": self.line,
                "error": e.to_string(),
            }),
        })
    }
}

/// Reads every row. A row whose fields don't parse is kept with its error;
/// only a structurally broken CSV aborts.
pub fn load_rows<R: Read>(reader: R) -> PgResult<Vec<BatchRow>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);
    let headers = rdr.headers()?.clone();

    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        let row = match record.deserialize::<RawRow>(Some(&headers)) {
            Ok(raw) => BatchRow {
                line,
                selection: Selection::new(raw.x_start, raw.y_start, raw.x_end, raw.y_end),
                label: raw.label,
            },
            Err(e) => BatchRow {
                line,
                label: record.get(0).unwrap_or_default().to_string(),
                selection: Err(PhiError::InvalidSelection(e.to_string())),
            },
        };
        rows.push(row);
    }
    Ok(rows)
}

/// Scores all rows in parallel. Output order matches input order.
pub fn evaluate_rows(scorer: &Scorer, rows: Vec<BatchRow>) -> Vec<BatchEntry> {
    rows.into_par_iter()
        .map(|row| {
            let outcome = row.selection.and_then(|sel| {
                scorer
                    .evaluate(sel.width(), sel.height())
                    .map(|m| Report::new(m, Some(sel)).with_label(row.label.clone()))
            });
            BatchEntry {
                line: row.line,
                label: row.label,
                outcome,
            }
        })
        .collect()
}

pub fn run_file<P: AsRef<Path>>(path: P, scorer: &Scorer) -> PgResult<Vec<BatchEntry>> {
    let path = path.as_ref();
    info!("📂 Loading selections: {}", path.display());
    let rows = load_rows(File::open(path)?)?;
    let entries = evaluate_rows(scorer, rows);

    let failed = entries.iter().filter(|e| e.outcome.is_err()).count();
    if failed > 0 {
        warn!("{} of {} rows could not be scored", failed, entries.len());
    }
    Ok(entries)
}

/// Best score first; rows that failed sink to the bottom. Ties keep file order.
pub fn rank(entries: &mut [BatchEntry]) {
    entries.sort_by(|a, b| match (a.score(), b.score()) {
        (Some(x), Some(y)) => y.cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
}
