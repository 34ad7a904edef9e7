use std::{error::Error, fmt};

use crate::{
    models::ticket::{Ticket, TicketToken},
    stores::store::{StoreError, TicketStore},
};

pub struct TicketVerifier<S> {
    store: S,
}

impl<S: TicketStore> TicketVerifier<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns the record exactly as it was issued. An absent token is the
    /// caller's 404; anything else from the store is a server error.
    pub async fn verify(&self, token: TicketToken) -> Result<Ticket, VerifyError> {
        match self.store.find_by_token(token).await {
            Ok(ticket) => {
                log::debug!("verified ticket {token}");
                Ok(ticket)
            }
            Err(StoreError::NotFound) => Err(VerifyError::NotFound(token)),
            Err(e) => Err(VerifyError::Store(e)),
        }
    }
}

#[derive(Debug)]
pub enum VerifyError {
    NotFound(TicketToken),
    Store(StoreError),
}

impl fmt::Display for VerifyError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::NotFound(token) => write!(f, "ticket not found: {token}"),
            Self::Store(e) => write!(f, "server error: {e}"),
        }
    }
}

impl Error for VerifyError {}
