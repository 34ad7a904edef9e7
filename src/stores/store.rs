use std::{error::Error, fmt};

use async_trait::async_trait;

use crate::models::ticket::{Ticket, TicketToken};

/// Where issued tickets live. Single-writer creation, multiple-reader lookup
/// by token.
#[async_trait]
pub trait TicketStore {
    async fn insert(&self, ticket: Ticket) -> Result<(), StoreError>;
    async fn find_by_token(&self, token: TicketToken) -> Result<Ticket, StoreError>;
}

#[derive(Debug)]
pub enum StoreError {
    NotFound,
    DuplicateToken,
    Execution(String, String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "Failed to query store: NotFound"),
            Self::DuplicateToken => write!(f, "Failed to store: DuplicateToken"),
            Self::Execution(error, context) => write!(f, "Failed to {context}: {error}"),
        }
    }
}

impl Error for StoreError {}
