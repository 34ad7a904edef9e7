use std::{error::Error, fmt};

use chrono::Utc;
use uuid::Uuid;

use crate::{
    fare::{self, FareError},
    models::{
        price::Price,
        ticket::{Ticket, TicketStatus},
    },
    stores::store::{StoreError, TicketStore},
};

/// What the payment step hands over once a charge settles.
#[derive(Debug, Clone)]
pub struct PaymentReceipt {
    pub line: String,
    pub source: String,
    pub destination: String,
    pub amount: Price,
}

pub struct TicketIssuer<S> {
    store: S,
}

impl<S: TicketStore> TicketIssuer<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Creates and persists a ticket for a settled payment, returning it
    /// with its fresh token.
    ///
    /// The fare is recomputed from the line table and the receipt amount
    /// must match it exactly; a stale or tampered client-side price is
    /// rejected rather than trusted.
    pub async fn issue(&self, receipt: PaymentReceipt) -> Result<Ticket, IssueError> {
        let expected = fare::quote(&receipt.line, &receipt.source, &receipt.destination)?;
        if expected != receipt.amount {
            return Err(IssueError::FareMismatch {
                expected,
                paid: receipt.amount,
            });
        }

        let ticket = Ticket {
            token: Uuid::new_v4(),
            source: receipt.source,
            destination: receipt.destination,
            price: receipt.amount,
            issued_at: Utc::now(),
            status: TicketStatus::Active,
        };
        log::debug!(
            "issuing ticket {} for {} to {}",
            ticket.token,
            ticket.source,
            ticket.destination
        );
        self.store.insert(ticket.clone()).await?;
        Ok(ticket)
    }
}

#[derive(Debug)]
pub enum IssueError {
    Fare(FareError),
    FareMismatch { expected: Price, paid: Price },
    Store(StoreError),
}

impl From<FareError> for IssueError {
    fn from(value: FareError) -> Self {
        IssueError::Fare(value)
    }
}

impl From<StoreError> for IssueError {
    fn from(value: StoreError) -> Self {
        IssueError::Store(value)
    }
}

impl fmt::Display for IssueError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Fare(e) => write!(f, "Ticket not issued: {e}"),
            Self::FareMismatch { expected, paid } => {
                write!(f, "Ticket not issued: paid {paid}, fare is {expected}")
            }
            Self::Store(e) => write!(f, "Ticket not issued: {e}"),
        }
    }
}

impl Error for IssueError {}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use crate::stores::in_memory::InMemoryTicketStore;

    use super::*;

    fn receipt(line: &str, source: &str, destination: &str, paise: u64) -> PaymentReceipt {
        PaymentReceipt {
            line: line.to_string(),
            source: source.to_string(),
            destination: destination.to_string(),
            amount: Price::from_paise(paise),
        }
    }

    #[tokio::test]
    async fn test_issue_persists_an_active_ticket() {
        let store = InMemoryTicketStore::new();
        let issuer = TicketIssuer::new(store.clone());

        let ticket = issuer
            .issue(receipt("Line 1", "Versova", "Andheri", 5000))
            .await
            .unwrap();
        assert_eq!(TicketStatus::Active, ticket.status);
        assert_eq!(5000, ticket.price.paise());

        let stored = store.find_by_token(ticket.token).await.unwrap();
        assert_eq!(ticket, stored);
    }

    #[tokio::test]
    async fn test_issue_rejects_an_amount_below_the_fare() {
        let store = InMemoryTicketStore::new();
        let issuer = TicketIssuer::new(store);

        let result = issuer
            .issue(receipt("Line 1", "Versova", "Andheri", 4999))
            .await;
        assert!(
            matches!(result, Err(IssueError::FareMismatch { .. })),
            "{result:?}"
        );
    }

    #[tokio::test]
    async fn test_issue_rejects_a_route_off_the_line() {
        let store = InMemoryTicketStore::new();
        let issuer = TicketIssuer::new(store);

        let result = issuer
            .issue(receipt("Line 1", "Versova", "Borivali West", 0))
            .await;
        assert!(matches!(result, Err(IssueError::Fare(_))), "{result:?}");
    }

    #[tokio::test]
    async fn test_tokens_are_unique_across_issued_tickets() {
        let store = InMemoryTicketStore::new();
        let issuer = TicketIssuer::new(store);

        let mut tokens = HashSet::new();
        for _ in 0..64 {
            let ticket = issuer
                .issue(receipt("Line 2A", "Dahisar East", "Anand Nagar", 2000))
                .await
                .unwrap();
            tokens.insert(ticket.token);
        }
        assert_eq!(64, tokens.len());
    }
}
