//! Authentication

mod credentials;
mod errors;
mod hex;
mod models;
mod service;
mod token;

pub use credentials::{hash_password, verify_password};
pub use errors::*;
pub use models::*;
pub use service::*;
pub use token::*;
