//! Data model for the big7 ledger.

mod amount;
mod category;
mod record;

pub use amount::Amount;
pub use amount::AmountError;
pub use category::Category;
pub use record::Record;
