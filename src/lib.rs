//! Passbook Core - Business logic for bank account management
//!
//! This crate implements the account domain logic:
//!
//! - **domain**: the account entity, its operations, and rejection types
//!
//! There is no persistence and no IO here; the crate is consumed directly
//! by embedding code. Rejected operations are advisory: the balance is
//! left untouched, a `tracing` warning is emitted, and `false` is returned
//! where the operation returns anything at all. Callers that need the
//! rejection cause use the `try_` variants instead.

pub mod domain;

// Re-export commonly used types at crate root
pub use domain::Account;
pub use domain::result::Rejection;
