// Expects:
//   CREATE TYPE ticket_status AS ENUM ('Active', 'Used', 'Invalid');
//   CREATE TABLE ticket (
//       token UUID PRIMARY KEY,
//       source TEXT NOT NULL,
//       destination TEXT NOT NULL,
//       price_paise BIGINT NOT NULL,
//       issued_at TIMESTAMP NOT NULL,
//       status ticket_status NOT NULL
//   );

use async_trait::async_trait;
use chrono::{DateTime, NaiveDateTime, Utc};
use metro_ticketing::{
    models::{
        price::Price,
        ticket::{Ticket, TicketStatus, TicketToken},
    },
    stores::store::{StoreError, TicketStore},
};
use serde::{Deserialize, Serialize};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct PgTicketStore {
    pool: Pool<Postgres>,
}

impl PgTicketStore {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TicketStore for PgTicketStore {
    async fn insert(&self, ticket: Ticket) -> Result<(), StoreError> {
        sqlx::query(
            "INSERT INTO ticket (token, source, destination, price_paise, issued_at, status)
                VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(ticket.token)
        .bind(&ticket.source)
        .bind(&ticket.destination)
        .bind(ticket.price.paise() as i64)
        .bind(ticket.issued_at.naive_utc())
        .bind(PgTicketStatus::from(ticket.status))
        .execute(&self.pool)
        .await
        .map(|_| ())
        .map_err(|e| {
            if e.as_database_error()
                .is_some_and(|db| db.is_unique_violation())
            {
                StoreError::DuplicateToken
            } else {
                StoreError::Execution(e.to_string(), "insert ticket".to_string())
            }
        })
    }

    async fn find_by_token(&self, token: TicketToken) -> Result<Ticket, StoreError> {
        let row: Option<(Uuid, String, String, i64, NaiveDateTime, PgTicketStatus)> =
            sqlx::query_as(
                "SELECT token, source, destination, price_paise, issued_at, status
                    FROM ticket WHERE token = $1",
            )
            .bind(token)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| StoreError::Execution(e.to_string(), "find ticket".to_string()))?;
        let row = row.ok_or(StoreError::NotFound)?;
        Ok(Ticket {
            token: row.0,
            source: row.1,
            destination: row.2,
            price: Price::from_paise(row.3 as u64),
            issued_at: DateTime::from_naive_utc_and_offset(row.4, Utc),
            status: row.5.into(),
        })
    }
}

#[derive(Serialize, Deserialize, Debug, sqlx::Type)]
#[sqlx(type_name = "ticket_status")]
enum PgTicketStatus {
    Active,
    Used,
    Invalid,
}

impl From<TicketStatus> for PgTicketStatus {
    fn from(value: TicketStatus) -> Self {
        match value {
            TicketStatus::Active => PgTicketStatus::Active,
            TicketStatus::Used => PgTicketStatus::Used,
            TicketStatus::Invalid => PgTicketStatus::Invalid,
        }
    }
}

impl From<PgTicketStatus> for TicketStatus {
    fn from(value: PgTicketStatus) -> Self {
        match value {
            PgTicketStatus::Active => TicketStatus::Active,
            PgTicketStatus::Used => TicketStatus::Used,
            PgTicketStatus::Invalid => TicketStatus::Invalid,
        }
    }
}
