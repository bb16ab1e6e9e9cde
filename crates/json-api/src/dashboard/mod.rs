//! Dashboard

mod errors;
pub(crate) mod get;
