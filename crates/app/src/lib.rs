//! Shared application domain, persistence and outbound collaborators.

pub mod auth;
pub mod content;
pub mod context;
pub mod database;
pub mod domain;
pub mod email;
pub mod store;
pub mod uuids;

#[cfg(test)]
mod test;
