use crate::commands::Out;
use crate::model::Record;
use crate::store::RecordStore;
use crate::Result;

/// Renders every record, newest first, in the original card layout.
pub fn list(store: &RecordStore) -> Result<Out<Vec<Record>>> {
    let records = store.snapshot();
    if records.is_empty() {
        return Ok(Out::new_message("No records yet"));
    }

    let mut lines = Vec::new();
    for record in records {
        lines.push(format!("{} - GHS {}", record.category(), record.amount()));
        if !record.person().is_empty() {
            lines.push(format!("  Person: {}", record.person()));
        }
        if !record.note().is_empty() {
            lines.push(format!("  Note: {}", record.note()));
        }
        lines.push(format!("  {}", record.date()));
    }
    Ok(Out::new(lines.join("\n"), records.to_vec()))
}
