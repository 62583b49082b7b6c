//! Policy enforcement for argguard.
//!
//! Turns function declarations into diagnostics:
//! - A001: unmet policies (a rule's required arguments are missing)
//! - A002: invalid pattern (a rule's scope pattern does not compile)

pub mod types;
pub mod scope;
pub mod matcher;
pub mod engine;
