//! Auth service errors.

use thiserror::Error;

use crate::{auth::AccessTokenError, store::StoreError};

#[derive(Debug, Error)]
pub enum AuthServiceError {
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("token not found")]
    NotFound,

    #[error("storage error")]
    Store(#[from] StoreError),

    #[error("token processing error")]
    Token(#[source] AccessTokenError),
}

impl From<AccessTokenError> for AuthServiceError {
    fn from(error: AccessTokenError) -> Self {
        Self::Token(error)
    }
}
