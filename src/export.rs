//! CSV export of the full record list.
//!
//! The column set and order (`Type,Amount,Person,Note,Date`) and the row order
//! (newest first, mirroring the display order) match the original exports.
//! Fields containing commas, quotes or newlines are quoted per RFC 4180; clean
//! fields serialize to the same bytes the original raw join produced.

use crate::model::Record;
use crate::{fs, Result};
use anyhow::Context;
use std::path::Path;

/// The default export file name.
pub const EXPORT_FILE_NAME: &str = "big7-financial-records.csv";

const HEADERS: [&str; 5] = ["Type", "Amount", "Person", "Note", "Date"];

/// Serializes `records` to CSV text. The header row is always present, even
/// for an empty record set.
pub fn to_csv(records: &[Record]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(HEADERS)
        .context("Failed to write the CSV header")?;
    for record in records {
        let category = record.category().to_string();
        let amount = record.amount().to_string();
        writer
            .write_record([
                category.as_str(),
                amount.as_str(),
                record.person(),
                record.note(),
                record.date(),
            ])
            .with_context(|| format!("Failed to write the CSV row for record {}", record.id()))?;
    }
    let bytes = writer
        .into_inner()
        .context("Failed to flush the CSV writer")?;
    String::from_utf8(bytes).context("CSV output was not valid UTF-8")
}

/// Serializes `records` and writes the result to `path`.
pub fn write_csv(records: &[Record], path: impl AsRef<Path>) -> Result<()> {
    fs::write(path, to_csv(records)?)
}
