//! The SMS-receipt simulation shown when a worker is paid.
//!
//! There is no real message transport. The "receipt" is a string rendered to
//! the terminal, with the same wording the business has always used.

use crate::model::Amount;

/// Builds the receipt message for a worker payment. A missing name falls back
/// to "Staff".
pub(crate) fn sms_receipt(person: &str, amount: Amount) -> String {
    let name = if person.is_empty() { "Staff" } else { person };
    format!("SMS RECEIPT\nHello {name}, you have been paid GHS {amount}.\nBig7 Collections")
}
