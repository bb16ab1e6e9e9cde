//! Security policy advisor.

mod errors;
pub(crate) mod security_policy;
