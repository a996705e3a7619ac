use crate::model::{Amount, Category};
use chrono::Local;
use serde::{Deserialize, Serialize};

/// Represents a single logged financial transaction.
///
/// Records are immutable after creation. The `date` field is the creation date
/// formatted for a human reader, stamped once and stored verbatim. The JSON
/// field names match the original record slot, so existing data loads as-is.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Record {
    id: u64,
    #[serde(rename = "type")]
    category: Category,
    amount: Amount,
    #[serde(default)]
    person: String,
    #[serde(default)]
    note: String,
    date: String,
}

impl Record {
    /// Creates a record with every field supplied by the caller.
    pub fn new(
        id: u64,
        category: Category,
        amount: Amount,
        person: impl Into<String>,
        note: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            id,
            category,
            amount,
            person: person.into(),
            note: note.into(),
            date: date.into(),
        }
    }

    /// Creates a record stamped with today's date.
    pub fn create(
        id: u64,
        category: Category,
        amount: Amount,
        person: impl Into<String>,
        note: impl Into<String>,
    ) -> Self {
        Self::new(id, category, amount, person, note, today())
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn person(&self) -> &str {
        &self.person
    }

    pub fn note(&self) -> &str {
        &self.note
    }

    pub fn date(&self) -> &str {
        &self.date
    }
}

/// Today's date in the unpadded `M/D/YYYY` form the original records carry.
fn today() -> String {
    Local::now().format("%-m/%-d/%Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_serde_round_trip() {
        let record = Record::new(
            1,
            Category::WorkerPayment,
            Amount::from_str("200").unwrap(),
            "Ama",
            "August wages",
            "8/30/2026",
        );
        let json = serde_json::to_string(&record).unwrap();
        let back: Record = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_serialize_uses_original_field_names() {
        let record = Record::new(
            1,
            Category::WeeklySales,
            Amount::from_str("50").unwrap(),
            "",
            "",
            "1/1/2024",
        );
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["type"], "Weekly Sales");
        // Amounts are written as JSON numbers, as the original slot had them.
        assert_eq!(json["amount"], 50);
        assert_eq!(json["person"], "");
        assert_eq!(json["date"], "1/1/2024");
    }

    #[test]
    fn test_deserialize_original_slot_shape() {
        // As written by the original implementation: numeric amount and id.
        let json = r#"{
            "type": "Worker Payment",
            "amount": 200,
            "person": "Ama",
            "note": "",
            "id": 1756500000000,
            "date": "8/30/2026"
        }"#;
        let record: Record = serde_json::from_str(json).unwrap();
        assert_eq!(record.category(), Category::WorkerPayment);
        assert_eq!(record.amount(), Amount::from_str("200").unwrap());
        assert_eq!(record.person(), "Ama");
        assert_eq!(record.id(), 1756500000000);
    }

    #[test]
    fn test_deserialize_defaults_optional_fields() {
        let json = r#"{"type": "Susu", "amount": "10", "id": 5, "date": "1/2/2024"}"#;
        let record: Record = serde_json::from_str(json).unwrap();
        assert_eq!(record.person(), "");
        assert_eq!(record.note(), "");
    }

    #[test]
    fn test_create_stamps_a_date() {
        let record = Record::create(
            1,
            Category::Savings,
            Amount::from_str("1").unwrap(),
            "",
            "",
        );
        // M/D/YYYY with no zero padding.
        let parts: Vec<&str> = record.date().split('/').collect();
        assert_eq!(parts.len(), 3);
        assert!(!parts[0].starts_with('0'));
        assert!(!parts[1].starts_with('0'));
        assert_eq!(parts[2].len(), 4);
    }
}
