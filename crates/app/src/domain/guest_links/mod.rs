//! Guest Links

pub mod data;
pub mod errors;
pub mod records;
pub mod service;

pub use errors::GuestLinksServiceError;
pub use service::*;
