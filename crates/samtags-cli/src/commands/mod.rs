//! CLI command implementations.
//!
//! Each command returns `Ok(false)` when it ran but found problems, so the
//! binary can exit non-zero without printing an extra error.

pub mod check;
pub mod describe;
pub mod list;
pub mod validate;
