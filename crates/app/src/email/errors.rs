//! Email errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EmailError {
    #[error("invalid address {address:?}")]
    InvalidAddress {
        address: String,
        #[source]
        source: lettre::address::AddressError,
    },

    #[error("failed to build message")]
    Message(#[from] lettre::error::Error),

    #[error("smtp transport error")]
    Transport(#[from] lettre::transport::smtp::Error),
}
