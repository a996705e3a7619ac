use crate::commands::Out;
use crate::report::Dashboard;
use crate::store::RecordStore;
use crate::Result;

/// Recomputes and renders the running total for every category.
pub fn dashboard(store: &RecordStore) -> Result<Out<Dashboard>> {
    let dashboard = Dashboard::build(store.snapshot());
    let message = dashboard.to_string();
    Ok(Out::new(message, dashboard))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Amount, Category, Record};
    use std::str::FromStr;
    use tempfile::TempDir;

    #[test]
    fn test_dashboard_totals_from_store() {
        let dir = TempDir::new().unwrap();
        let mut store = RecordStore::load(dir.path().join("big7-records.json"));
        store
            .append(Record::new(
                1,
                Category::WeeklySales,
                Amount::from_str("120").unwrap(),
                "",
                "",
                "1/1/2024",
            ))
            .unwrap();

        let out = dashboard(&store).unwrap();
        assert!(out.message().contains("Weekly Sales: GHS 120"));
        assert!(out.message().contains("Susu: GHS 0"));
    }
}
