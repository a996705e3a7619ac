//! The admin gate for the ledger.
//!
//! This is a fixed-literal comparison, exactly as the business has always run
//! it. It keeps casual hands off the books; it is not an access-control
//! boundary, and anyone inspecting the binary can recover the literal.

use crate::Result;
use anyhow::bail;

const ADMIN_PASSWORD: &str = "big7admin";

/// Returns true if `candidate` matches the admin password.
pub fn verify(candidate: &str) -> bool {
    candidate == ADMIN_PASSWORD
}

/// Errors unless `candidate` matches the admin password.
pub fn check(candidate: &str) -> Result<()> {
    if !verify(candidate) {
        bail!("Invalid admin password");
    }
    Ok(())
}
