use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

use async_trait::async_trait;

use crate::models::ticket::{Ticket, TicketToken};

use super::store::{StoreError, TicketStore};

#[derive(Debug, Clone, Default)]
pub struct InMemoryTicketStore {
    tickets: Arc<RwLock<HashMap<TicketToken, Ticket>>>,
}

impl InMemoryTicketStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TicketStore for InMemoryTicketStore {
    async fn insert(&self, ticket: Ticket) -> Result<(), StoreError> {
        let mut tickets = self.tickets.write().expect("tickets lock");
        if tickets.contains_key(&ticket.token) {
            return Err(StoreError::DuplicateToken);
        }
        tickets.insert(ticket.token, ticket);
        Ok(())
    }

    async fn find_by_token(&self, token: TicketToken) -> Result<Ticket, StoreError> {
        self.tickets
            .read()
            .expect("tickets lock")
            .get(&token)
            .cloned()
            .ok_or(StoreError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use uuid::Uuid;

    use crate::models::{
        price::Price,
        ticket::{Ticket, TicketStatus},
    };

    use super::*;

    fn ticket() -> Ticket {
        Ticket {
            token: Uuid::new_v4(),
            source: "Versova".to_string(),
            destination: "Andheri".to_string(),
            price: Price::from_paise(5000),
            issued_at: Utc::now(),
            status: TicketStatus::Active,
        }
    }

    #[tokio::test]
    async fn test_insert_then_find_returns_the_same_record() {
        let store = InMemoryTicketStore::new();
        let ticket = ticket();
        store.insert(ticket.clone()).await.unwrap();

        let found = store.find_by_token(ticket.token).await.unwrap();
        assert_eq!(ticket, found);
    }

    #[tokio::test]
    async fn test_unknown_token_is_not_found() {
        let store = InMemoryTicketStore::new();
        let result = store.find_by_token(Uuid::new_v4()).await;
        assert!(matches!(result, Err(StoreError::NotFound)), "{result:?}");
    }

    #[tokio::test]
    async fn test_duplicate_token_is_rejected() {
        let store = InMemoryTicketStore::new();
        let ticket = ticket();
        store.insert(ticket.clone()).await.unwrap();

        let result = store.insert(ticket).await;
        assert!(
            matches!(result, Err(StoreError::DuplicateToken)),
            "{result:?}"
        );
    }
}
