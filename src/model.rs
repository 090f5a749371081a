//! Payload types served by the fetch services

use serde::{Deserialize, Serialize};

/// A user record as served by the users endpoint.
///
/// Every field is required; a record missing any of them fails to decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub username: String,
    pub email: String,
}
