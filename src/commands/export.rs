use crate::args::ExportArgs;
use crate::commands::Out;
use crate::export::{write_csv, EXPORT_FILE_NAME};
use crate::store::RecordStore;
use crate::Result;
use std::path::PathBuf;

/// Writes the full record list as CSV to the requested path, or to
/// `big7-financial-records.csv` in the current directory.
pub fn export(store: &RecordStore, args: ExportArgs) -> Result<Out<String>> {
    let path: PathBuf = match args.out() {
        Some(out) => out.to_path_buf(),
        None => PathBuf::from(EXPORT_FILE_NAME),
    };
    write_csv(store.snapshot(), &path)?;
    Ok(Out::new_message(format!(
        "Exported {} records to {}",
        store.len(),
        path.display()
    )))
}
