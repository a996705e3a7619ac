use serde::{Deserialize, Serialize};

/// Represents the fixed set of record categories.
///
/// The serialized form of each variant is the exact label the business uses,
/// e.g. "Weekly Sales" or "Worker Payment". These strings are also the CSV
/// `Type` column values and the strings accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Savings,
    #[serde(rename = "Weekly Sales")]
    WeeklySales,
    #[serde(rename = "Worker Savings")]
    WorkerSavings,
    #[serde(rename = "Worker Payment")]
    WorkerPayment,
    #[serde(rename = "Rent Savings")]
    RentSavings,
    Susu,
    #[serde(rename = "Loan Savings")]
    LoanSavings,
    #[serde(rename = "Profit Savings")]
    ProfitSavings,
}

serde_plain::derive_display_from_serialize!(Category);
serde_plain::derive_fromstr_from_deserialize!(Category);

impl Category {
    /// Every category, in the order the record form listed them.
    pub const ALL: [Category; 8] = [
        Category::Savings,
        Category::WeeklySales,
        Category::WorkerSavings,
        Category::WorkerPayment,
        Category::RentSavings,
        Category::Susu,
        Category::LoanSavings,
        Category::ProfitSavings,
    ];
}
